/*
 * A high-performance chess library licensed under the LGPLv3.
 * Copyright (C) 2025 Clifton Toaster Reid
 *
 * This library is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Lesser General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This library is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Lesser General Public License for more details.
 *
 * You should have received a copy of the GNU Lesser General Public License
 * along with this library. If not, see <https://opensource.org/license/lgpl-3-0>.
 */

//! # CoTuLenh Compile-Time Literals
//!
//! Declarative macros (`macro_rules!`) for writing board positions and
//! square coordinates as checked literals instead of runtime-parsed
//! strings:
//!
//! - `sq!("d5")` — a [`cotulenh_core::Square`] built from an algebraic
//!   coordinate, validated at compile time against the 11x12 board.
//! - `fen!("...")` — a [`cotulenh_core::model::gamestate::GameState`]
//!   parsed from a FEN literal, panicking at the call site if the string
//!   does not parse.
//!
//! ## Example
//!
//! ```rust
//! use cotulenh_proc::{fen, sq};
//!
//! let d5 = sq!("d5");
//! let start = fen!("6c4/1n2fh1hf2/3a2s2a1/2n1gt1tg2/2ie2m2ei/11/11/2IE2M2EI/2N1GT1TG2/3A2S2A1/1N2FH1HF2/6C4 r - - 0 1");
//! assert_eq!(start.turn, cotulenh_core::Color::Red);
//! let _ = d5;
//! ```

pub mod macros;

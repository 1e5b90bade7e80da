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

//! Headless rules engine for CoTuLenh, a 12x11 military chess variant.
//!
//! This crate contains no rendering, input, networking, or AI search. It
//! owns board representation, move generation, move execution/undo, deploy
//! sessions, air-defense zone maintenance, commander-safety checks, and FEN /
//! SAN-like serialization. Callers interact through [`facade::Engine`].
//!
//! Module layout:
//! - `constants` — board geometry constants
//! - `errors` — the closed error taxonomy returned by every fallible operation
//! - `model` — board, piece, stacking, air-defense, and deploy-session types
//! - `moves` — the closed `Move` sum type and history entries
//! - `movegen` — per-role pseudo-legal move generators
//! - `legal` — attacker queries and the move-legality pipeline
//! - `fen` / `san` — serialization
//! - `facade` — the public, language-neutral entry point

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

pub mod constants;
pub mod errors;
pub mod facade;
pub mod fen;
pub mod legal;
pub mod model;
pub mod movegen;
pub mod moves;
pub mod san;

pub use errors::CoTuLenhError;
pub use facade::Engine;
pub use model::piece::{Color, Piece, PieceRole};
pub use model::square::Square;

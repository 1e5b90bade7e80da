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

//! Navy: dual attack — a short sail range for moving captures, a longer
//! bombardment range beyond it that stays in place (`StayCapture`).
//! Water/mixed confinement is enforced at rest time by
//! `model::terrain::role_fits_terrain` (checked on `GameState::put`), not
//! by the ray-walker itself.

use crate::model::gamestate::GameState;
use crate::model::square::Square;
use crate::movegen::common::{generate, RangedCaptureKind};
use crate::moves::Move;
use alloc::vec::Vec;

pub fn generate_moves(state: &GameState, from: Square) -> Vec<Move> {
  generate(state, from, RangedCaptureKind::Stay)
}

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

//! Commander: one step, orthogonal only — heroic also unlocks diagonal
//! movement, gated through `RoleConfig::heroic_enables_diagonal`.
//! Self-check safety is enforced downstream by `legal::checker`, not here.

use crate::model::gamestate::GameState;
use crate::model::square::Square;
use crate::movegen::common::{generate, RangedCaptureKind};
use crate::moves::Move;
use alloc::vec::Vec;

pub fn generate_moves(state: &GameState, from: Square) -> Vec<Move> {
  generate(state, from, RangedCaptureKind::Stay)
}

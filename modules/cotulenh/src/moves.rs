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

//! The closed move sum type. Deliberately not a packed integer: CoTuLenh's
//! move kinds carry heterogeneous payloads (captured stacks, combination
//! results) that would not fit a fixed bit layout the way a standard
//! chess move does. Every consumer (`movegen`, `legal`, execute/undo)
//! exhaustively matches this enum rather than dispatching dynamically,
//! per the distilled brief's §9 design note.

use crate::model::piece::{Piece, PieceRole};
use crate::model::square::Square;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Move {
  /// Move to an empty reachable square.
  Normal { from: Square, to: Square, role: PieceRole },
  /// Move onto an enemy square, removing the occupant (whole stack).
  Capture { from: Square, to: Square, role: PieceRole, captured: Piece },
  /// Mover stays in place; the enemy at `target` is removed.
  StayCapture { from: Square, target: Square, role: PieceRole, captured: Piece },
  /// Mover and the enemy at `target` are both removed.
  SuicideCapture { from: Square, target: Square, role: PieceRole, captured: Piece },
  /// Mover joins a friendly piece at `to`, forming a stack.
  Combination { from: Square, to: Square, role: PieceRole, result: Piece },
  /// One piece departs a stack during an active deploy session.
  DeployStep { from: Square, to: Square, role: PieceRole, captured: Option<Piece> },
}

impl Move {
  pub fn from_square(&self) -> Square {
    match self {
      Move::Normal { from, .. }
      | Move::Capture { from, .. }
      | Move::StayCapture { from, .. }
      | Move::SuicideCapture { from, .. }
      | Move::Combination { from, .. }
      | Move::DeployStep { from, .. } => *from,
    }
  }

  /// Destination square; for `StayCapture`/`SuicideCapture` this is the
  /// target being affected, not the (unchanged) mover square.
  pub fn to_square(&self) -> Square {
    match self {
      Move::Normal { to, .. }
      | Move::Capture { to, .. }
      | Move::Combination { to, .. }
      | Move::DeployStep { to, .. } => *to,
      Move::StayCapture { target, .. } | Move::SuicideCapture { target, .. } => *target,
    }
  }

  pub fn role(&self) -> PieceRole {
    match self {
      Move::Normal { role, .. }
      | Move::Capture { role, .. }
      | Move::StayCapture { role, .. }
      | Move::SuicideCapture { role, .. }
      | Move::Combination { role, .. }
      | Move::DeployStep { role, .. } => *role,
    }
  }

  pub fn is_capture(&self) -> bool {
    matches!(self, Move::Capture { .. } | Move::StayCapture { .. } | Move::SuicideCapture { .. })
  }

  pub fn is_deploy_step(&self) -> bool {
    matches!(self, Move::DeployStep { .. })
  }
}

/// Pre-state captured before applying a `Move`, sufficient to undo it
/// bit-for-bit per the distilled brief's §4.9.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
  pub mv: Move,
  pub mover_before: Piece,
  pub target_before: Option<Piece>,
  pub mover_heroic_before: bool,
  pub commander_squares_before: [Option<Square>; 2],
  pub halfmove_clock_before: u32,
  pub turn_before: crate::model::piece::Color,
  pub deploy_before: Option<crate::model::deploy::DeploySession>,
  pub repetition_key_before: alloc::string::String,
}

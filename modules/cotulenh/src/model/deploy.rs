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

//! Deploy-session state. `GameState.deploy: Option<DeploySession>` models
//! the Idle/Active state machine directly: `None` is Idle, `Some(_)` is
//! Active. A flat overlay map is enough to represent partial-deploy state
//! without smuggling it implicitly into the board array, per the distilled
//! brief's §9 design note.

use crate::model::piece::{Color, Piece};
use crate::model::square::Square;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploySession {
  pub stack_square: Square,
  pub turn: Color,
  pub original_piece: Piece,
  pub moved_pieces: Vec<(Square, Piece)>,
  pub stay_pieces: Vec<Piece>,
  pub virtual_overlay: BTreeMap<Square, Option<Piece>>,
}

impl DeploySession {
  pub fn new(stack_square: Square, turn: Color, original_piece: Piece) -> Self {
    let mut overlay = BTreeMap::new();
    overlay.insert(stack_square, None);
    DeploySession {
      stack_square,
      turn,
      original_piece,
      moved_pieces: Vec::new(),
      stay_pieces: Vec::new(),
      virtual_overlay: overlay,
    }
  }

  /// Effective piece at `sq` under the overlay, falling back to `base` when
  /// the overlay has no entry for that square.
  pub fn effective_at<'a>(&'a self, sq: Square, base: Option<&'a Piece>) -> Option<&'a Piece> {
    match self.virtual_overlay.get(&sq) {
      Some(Some(p)) => Some(p),
      Some(None) => None,
      None => base,
    }
  }

  pub fn record_departure(&mut self, to: Square, piece: Piece) {
    self.virtual_overlay.insert(to, Some(piece.clone()));
    self.moved_pieces.push((to, piece));
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::piece::PieceRole;

  #[test]
  fn overlay_shadows_base_board() {
    let stack_sq = Square::from_algebraic("d5").unwrap();
    let base_piece = Piece::new(PieceRole::Tank, Color::Red);
    let session = DeploySession::new(stack_sq, Color::Red, base_piece.clone());
    assert_eq!(session.effective_at(stack_sq, Some(&base_piece)), None);
  }

  #[test]
  fn recorded_departure_shows_up_in_overlay() {
    let stack_sq = Square::from_algebraic("d5").unwrap();
    let dest = Square::from_algebraic("e6").unwrap();
    let base_piece = Piece::new(PieceRole::Tank, Color::Red);
    let mut session = DeploySession::new(stack_sq, Color::Red, base_piece.clone());
    let moved = Piece::new(PieceRole::AirForce, Color::Red);
    session.record_departure(dest, moved.clone());
    assert_eq!(session.effective_at(dest, None), Some(&moved));
  }
}

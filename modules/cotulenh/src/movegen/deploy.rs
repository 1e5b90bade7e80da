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

//! Deploy-step move generation: one candidate set per sub-piece still
//! present in a stack, each computed as if that sub-piece stood alone at
//! the stack square, using its own `RoleConfig` against the board as it
//! currently stands (base board, or the overlay mid-session).
//!
//! This reuses [`common::generate`] rather than duplicating its ray-walk,
//! the same way every other `movegen::<role>` wrapper does: a scratch clone
//! stands the lone sub-piece at the stack square (via
//! `GameState::write_effective`, which is overlay-aware) so existing
//! blocking/terrain/air-defense logic applies unchanged.

use crate::model::gamestate::GameState;
use crate::model::piece::PieceRole;
use crate::model::square::Square;
use crate::model::stacker;
use crate::movegen::common;
use crate::moves::Move;
use alloc::vec::Vec;

fn to_deploy_step(from: Square, role: PieceRole, mv: Move) -> Option<Move> {
  match mv {
    Move::Normal { to, .. } => Some(Move::DeployStep { from, to, role, captured: None }),
    Move::Capture { to, captured, .. } => Some(Move::DeployStep { from, to, role, captured: Some(captured) }),
    Move::StayCapture { target, captured, .. } => {
      Some(Move::DeployStep { from, to: target, role, captured: Some(captured) })
    }
    Move::SuicideCapture { target, captured, .. } => {
      Some(Move::DeployStep { from, to: target, role, captured: Some(captured) })
    }
    // Landing on a friendly square to form a new stack mid-deploy is out of
    // scope: a deploy step only ever departs to an empty or enemy square.
    Move::Combination { .. } | Move::DeployStep { .. } => None,
  }
}

/// Pseudo-legal `DeployStep` candidates for every sub-piece remaining at
/// `stack_square`. Empty if the square holds nothing.
pub fn generate_deploy_moves(state: &GameState, stack_square: Square) -> Vec<Move> {
  let current = match state.get(stack_square) {
    Some(p) => p.clone(),
    None => return Vec::new(),
  };

  let mut out = Vec::new();
  for sub in stacker::flatten(&current) {
    let role = sub.role;
    let mut scratch = state.clone();
    scratch.write_effective(stack_square, Some(sub));
    for mv in common::generate(&scratch, stack_square, common::ranged_kind_for(role)) {
      if let Some(step) = to_deploy_step(stack_square, role, mv) {
        out.push(step);
      }
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::piece::{Color, Piece};

  #[test]
  fn each_sub_piece_of_a_stack_gets_its_own_move_set() {
    let mut state = GameState::empty();
    let stack_sq = Square::from_algebraic("d5").unwrap();
    let stack = stacker::combine(&[
      Piece::new(PieceRole::Tank, Color::Red),
      Piece::new(PieceRole::AirForce, Color::Red),
    ])
    .unwrap();
    state.put(stack_sq, stack).unwrap();

    let moves = generate_deploy_moves(&state, stack_sq);
    assert!(moves.iter().any(|m| m.role() == PieceRole::Tank));
    assert!(moves.iter().any(|m| m.role() == PieceRole::AirForce));
    assert!(moves.iter().all(|m| m.is_deploy_step()));
  }

  #[test]
  fn bare_piece_with_nothing_embarked_still_deploys_itself() {
    let mut state = GameState::empty();
    let sq = Square::from_algebraic("d5").unwrap();
    state.put(sq, Piece::new(PieceRole::Infantry, Color::Red)).unwrap();
    let moves = generate_deploy_moves(&state, sq);
    assert_eq!(moves.len(), 4);
  }

  #[test]
  fn empty_square_has_no_deploy_candidates() {
    let state = GameState::empty();
    let sq = Square::from_algebraic("d5").unwrap();
    assert!(generate_deploy_moves(&state, sq).is_empty());
  }
}

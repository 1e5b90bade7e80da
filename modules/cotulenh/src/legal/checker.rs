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

//! Move-legality pipeline, generalizing the reference `LegalChecker`'s
//! sequential-predicate approach (shape → destination → special-move →
//! king safety) to CoTuLenh's three post-execute commander predicates: not
//! captured, not attacked, not left exposed by the move that just played.
//!
//! Legality here is decided by trial execution on a cloned `GameState` (the
//! same "clone the whole board, try the move, inspect the result" style the
//! reference `is_move_legal` uses, since `GameState` is small enough that
//! structural sharing is not worth the complexity).

use crate::errors::CoTuLenhError;
use crate::legal::attack;
use crate::model::gamestate::GameState;
use crate::model::piece::Color;
use crate::moves::Move;
use alloc::vec::Vec;

/// True if `color`'s commander is currently attacked by the opposing side.
pub fn is_in_check(state: &GameState, color: Color) -> bool {
  match state.commander_square(color) {
    Some(sq) => attack::is_attacked(state, sq, color.opposite()),
    None => false,
  }
}

/// True if `color`'s commander shares an orthogonal file or rank with the
/// enemy commander and nothing stands between them. Two commanders may
/// never face each other down an open line, the third post-execute
/// predicate alongside not-captured and not-attacked.
pub fn is_exposed(state: &GameState, color: Color) -> bool {
  let mine = match state.commander_square(color) {
    Some(sq) => sq,
    None => return false,
  };
  let theirs = match state.commander_square(color.opposite()) {
    Some(sq) => sq,
    None => return false,
  };
  const ORTHOGONAL: [(i16, i16); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];
  for (df, dr) in ORTHOGONAL {
    let mut cur = mine;
    while let Some(next) = cur.offset(df, dr) {
      if next == theirs {
        return true;
      }
      if state.get(next).is_some() {
        break;
      }
      cur = next;
    }
  }
  false
}

/// Plays `mv` on a scratch clone of `state` and reports whether the mover's
/// own commander survives in a safe, unexposed square afterward. A deploy
/// step is judged mid-session: the commander must stay safe against the
/// overlay board as it stands after that single step.
pub fn is_legal(state: &GameState, mv: &Move) -> Result<bool, CoTuLenhError> {
  let mover_color = state.turn;
  let mut trial = state.clone();
  trial.make_move(mv.clone())?;
  match trial.commander_square(mover_color) {
    None => Ok(false),
    Some(sq) => {
      if attack::is_attacked(&trial, sq, mover_color.opposite()) {
        return Ok(false);
      }
      Ok(!is_exposed(&trial, mover_color))
    }
  }
}

/// Filters a pseudo-legal move list down to moves that leave the mover's
/// commander safe.
pub fn filter_legal(state: &GameState, moves: Vec<Move>) -> Vec<Move> {
  moves.into_iter().filter(|mv| is_legal(state, mv).unwrap_or(false)).collect()
}

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

//! Attacker queries: "which squares of color `by` threaten `target`."
//!
//! Scans the 8 direction offsets out to `MAX_SCAN_RANGE`, mirroring the
//! reference `is_square_attacked_sliding`'s ray-plus-blocker-scan approach,
//! but stepping live board state per square instead of indexing a
//! precomputed ray table — stacks can change which piece in a square is the
//! attacking one, so the table would need to be keyed on board state anyway.

use crate::constants::{DIR_OFFSETS, MAX_SCAN_RANGE};
use crate::model::gamestate::GameState;
use crate::model::piece::{Color, PieceRole};
use crate::model::square::Square;
use crate::model::stacker;
use crate::movegen::config::{self, config_for};
use alloc::vec::Vec;

fn is_diagonal_dir(dir_index: usize) -> bool {
  dir_index >= 4
}

/// True if a piece of `role` (at `heroic`) standing `steps` away in a
/// direction of the given diagonality can capture there.
fn reaches(role: PieceRole, heroic: bool, steps: u8, diagonal: bool) -> bool {
  let cfg = config_for(role);
  let allow_diagonal = cfg.can_move_diagonal || (cfg.heroic_enables_diagonal && heroic);
  if diagonal && !allow_diagonal {
    return false;
  }
  steps <= config::effective_capture_range(role, heroic)
}

/// Squares occupied by a `by`-colored piece that currently threatens
/// `target`, one entry per distinct attacking stack.
pub fn attackers_of(state: &GameState, target: Square, by: Color) -> Vec<Square> {
  let mut out = Vec::new();
  for (dir_index, _) in DIR_OFFSETS.iter().enumerate() {
    let (df, dr) = offset_deltas(dir_index);
    let diagonal = is_diagonal_dir(dir_index);
    let mut blocked = false;
    let mut steps: u8 = 0;
    let mut cur = target;
    while steps < MAX_SCAN_RANGE {
      steps += 1;
      cur = match cur.offset(df, dr) {
        Some(sq) => sq,
        None => break,
      };
      let occupant = match state.get(cur) {
        Some(p) => p,
        None => continue,
      };
      let flat = stacker::flatten(occupant);
      let mut any_attacker = false;
      for piece in &flat {
        if piece.color != by {
          continue;
        }
        if blocked && !config_for(piece.role).capture_ignores_blocking {
          continue;
        }
        if reaches(piece.role, piece.heroic, steps, diagonal) {
          any_attacker = true;
        }
      }
      if any_attacker {
        out.push(cur);
      }
      blocked = true;
    }
  }
  out
}

/// Convenience predicate used throughout `legal::checker`.
pub fn is_attacked(state: &GameState, target: Square, by: Color) -> bool {
  !attackers_of(state, target, by).is_empty()
}

fn offset_deltas(dir_index: usize) -> (i16, i16) {
  // Matches constants::DIR_OFFSETS order: N, S, E, W, NE, NW, SE, SW.
  match dir_index {
    0 => (0, -1),
    1 => (0, 1),
    2 => (1, 0),
    3 => (-1, 0),
    4 => (1, -1),
    5 => (-1, -1),
    6 => (1, 1),
    7 => (-1, 1),
    _ => (0, 0),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::piece::Piece;

  #[test]
  fn adjacent_infantry_attacks_orthogonally() {
    let mut state = GameState::empty();
    let target = Square::from_algebraic("d5").unwrap();
    let attacker_sq = Square::from_algebraic("d6").unwrap();
    state.put(target, Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    state.put(attacker_sq, Piece::new(PieceRole::Infantry, Color::Red)).unwrap();
    assert!(is_attacked(&state, target, Color::Red));
  }

  #[test]
  fn infantry_does_not_attack_diagonally() {
    let mut state = GameState::empty();
    let target = Square::from_algebraic("d5").unwrap();
    let attacker_sq = Square::from_algebraic("e6").unwrap();
    state.put(target, Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    state.put(attacker_sq, Piece::new(PieceRole::Infantry, Color::Red)).unwrap();
    assert!(!is_attacked(&state, target, Color::Red));
  }

  #[test]
  fn artillery_shoots_over_a_blocker() {
    let mut state = GameState::empty();
    let target = Square::from_algebraic("d5").unwrap();
    let blocker_sq = Square::from_algebraic("d6").unwrap();
    let artillery_sq = Square::from_algebraic("d7").unwrap();
    state.put(target, Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    state.put(blocker_sq, Piece::new(PieceRole::Infantry, Color::Blue)).unwrap();
    state.put(artillery_sq, Piece::new(PieceRole::Artillery, Color::Red)).unwrap();
    assert!(is_attacked(&state, target, Color::Red));
  }

  #[test]
  fn tank_is_blocked_by_an_intervening_piece() {
    let mut state = GameState::empty();
    let target = Square::from_algebraic("d5").unwrap();
    let blocker_sq = Square::from_algebraic("d6").unwrap();
    let tank_sq = Square::from_algebraic("d7").unwrap();
    state.put(target, Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    state.put(blocker_sq, Piece::new(PieceRole::Infantry, Color::Blue)).unwrap();
    state.put(tank_sq, Piece::new(PieceRole::Tank, Color::Red)).unwrap();
    assert!(!is_attacked(&state, target, Color::Red));
  }

  #[test]
  fn non_heroic_commander_does_not_attack_diagonally() {
    let mut state = GameState::empty();
    let target = Square::from_algebraic("d5").unwrap();
    let attacker_sq = Square::from_algebraic("e6").unwrap();
    state.put(target, Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    state.put(attacker_sq, Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    assert!(!is_attacked(&state, target, Color::Red));
  }

  #[test]
  fn heroic_commander_attacks_diagonally() {
    let mut state = GameState::empty();
    let target = Square::from_algebraic("d5").unwrap();
    let attacker_sq = Square::from_algebraic("e6").unwrap();
    state.put(target, Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    let mut attacker = Piece::new(PieceRole::Commander, Color::Red);
    attacker.heroic = true;
    state.put(attacker_sq, attacker).unwrap();
    assert!(is_attacked(&state, target, Color::Red));
  }
}

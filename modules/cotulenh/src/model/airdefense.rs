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

//! Per-color air-defense zone bitboards: the union of circular ranges
//! stamped by each color's Navy/AntiAir/Missile pieces. Rebuilt whenever a
//! defender is put, removed, moved, or an undo restores a prior position —
//! mirroring the aggregate-mask precomputation pattern used by the
//! reference crate's `BatchLegalContext::from_board` for opponent attacks.

use crate::model::bitboard::{circle_mask, BitBoard256};
use crate::model::piece::{Color, Piece};
use crate::model::square::Square;

/// Recomputes the air-defense bitboard for `color` by scanning every
/// occupied square, flattening any stack, and OR-ing in each sub-piece's
/// stamped circle mask.
pub fn recompute(occupied: &[(Square, &Piece)], color: Color) -> BitBoard256 {
  let mut mask = BitBoard256::EMPTY;
  for &(sq, piece) in occupied {
    if piece.color != color {
      continue;
    }
    for sub in crate::model::stacker::flatten(piece) {
      let radius = sub.air_defense_radius();
      if radius > 0 {
        mask |= circle_mask(sq, radius);
      }
    }
  }
  mask
}

pub fn is_covered(defense: BitBoard256, sq: Square) -> bool {
  defense.get_bit(sq)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::piece::PieceRole;

  #[test]
  fn single_antiair_covers_its_radius() {
    let sq = Square::from_algebraic("e6").unwrap();
    let piece = Piece::new(PieceRole::AntiAir, Color::Red);
    let defense = recompute(&[(sq, &piece)], Color::Red);
    assert!(is_covered(defense, Square::from_algebraic("e7").unwrap()));
    assert!(!is_covered(defense, Square::from_algebraic("e9").unwrap()));
  }

  #[test]
  fn monotonic_removal_never_grows_coverage() {
    let sq1 = Square::from_algebraic("e6").unwrap();
    let sq2 = Square::from_algebraic("f6").unwrap();
    let p1 = Piece::new(PieceRole::AntiAir, Color::Red);
    let p2 = Piece::new(PieceRole::Missile, Color::Red);
    let both = recompute(&[(sq1, &p1), (sq2, &p2)], Color::Red);
    let just_one = recompute(&[(sq1, &p1)], Color::Red);
    for sq in Square::all_on_board() {
      if is_covered(just_one, sq) {
        assert!(is_covered(both, sq));
      }
    }
  }

  #[test]
  fn opposing_color_defenders_are_ignored() {
    let sq = Square::from_algebraic("e6").unwrap();
    let piece = Piece::new(PieceRole::Missile, Color::Blue);
    let defense = recompute(&[(sq, &piece)], Color::Red);
    assert!(defense.is_empty());
  }
}

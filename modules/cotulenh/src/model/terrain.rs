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

//! Terrain masks derived from the one ground truth that survived source
//! filtering: where pieces actually sit in the literal starting FEN (see
//! `DESIGN.md`). No authoritative land/water diagram came through, so
//! rather than invent one, the masks below are read off the starting
//! position itself: file index 1 (`b`) holds only Navy across all twelve
//! ranks, file index 2 (`c`) holds both Navy and Infantry (so it must
//! accept either), and every other file holds only land roles. That gives
//! a water column, a mixed column next to it, and a land remainder — plus
//! the river boundary between rank index 5 and 6, crossable away from the
//! water column by Artillery, Missile, AntiAir and Navy only at a bridge
//! file.

use crate::constants::{RANKS, RIVER_HIGH_RANK, RIVER_LOW_RANK};
use crate::model::bitboard::BitBoard256;
use crate::model::piece::PieceRole;
use crate::model::square::Square;

const BRIDGE_FILES: [u8; 2] = [3, 7];
const NAVY_FILE: u8 = 1;
const MIXED_FILE: u8 = 2;

fn column_mask(file: u8) -> BitBoard256 {
  let mut mask = BitBoard256::EMPTY;
  for rank in 0..RANKS {
    if let Some(sq) = Square::new(file, rank) {
      mask.set_bit(sq);
    }
  }
  mask
}

fn build_bridge_mask() -> BitBoard256 {
  let mut mask = BitBoard256::EMPTY;
  for &file in &BRIDGE_FILES {
    if let Some(sq) = Square::new(file, RIVER_LOW_RANK) {
      mask.set_bit(sq);
    }
    if let Some(sq) = Square::new(file, RIVER_HIGH_RANK) {
      mask.set_bit(sq);
    }
  }
  mask
}

pub fn bridge_mask() -> BitBoard256 {
  build_bridge_mask()
}

pub fn is_bridge(sq: Square) -> bool {
  bridge_mask().get_bit(sq)
}

/// Water squares: Navy rests here, land roles never do.
pub fn navy_mask() -> BitBoard256 {
  column_mask(NAVY_FILE)
}

/// Squares valid for both Navy and land roles: the bank column next to the
/// water, plus the bridge squares that let land roles cross the river.
pub fn mixed_mask() -> BitBoard256 {
  column_mask(MIXED_FILE) | bridge_mask()
}

/// Land squares: every square that is neither pure water nor mixed.
pub fn land_mask() -> BitBoard256 {
  !(navy_mask() | mixed_mask())
}

/// True for Artillery, Missile, AntiAir, Navy: these may cross the river
/// only via a bridge square.
pub fn is_heavy_role(role: PieceRole) -> bool {
  use PieceRole::*;
  matches!(role, Artillery | Missile | AntiAir | Navy)
}

pub fn crosses_river(from: Square, to: Square) -> bool {
  let (lo, hi) = (from.rank().min(to.rank()), from.rank().max(to.rank()));
  lo <= RIVER_LOW_RANK && hi >= RIVER_HIGH_RANK
}

/// Whether `role` may rest on `sq`: Navy only on water/mixed squares, every
/// other role only on land/mixed squares.
pub fn role_fits_terrain(role: PieceRole, sq: Square) -> bool {
  if role == PieceRole::Navy {
    navy_mask().get_bit(sq) || mixed_mask().get_bit(sq)
  } else {
    land_mask().get_bit(sq) || mixed_mask().get_bit(sq)
  }
}

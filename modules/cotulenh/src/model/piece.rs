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

use alloc::vec::Vec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
  Red,
  Blue,
}

impl Color {
  pub fn opposite(self) -> Color {
    match self {
      Color::Red => Color::Blue,
      Color::Blue => Color::Red,
    }
  }
}

/// Index of `color` into the two-element `[Red, Blue]` arrays used for
/// per-color air-defense bitboards and commander squares.
pub fn color_index(color: Color) -> usize {
  match color {
    Color::Red => 0,
    Color::Blue => 1,
  }
}

/// One of the eleven piece roles. Symbols follow the distilled brief's FEN
/// grammar: lowercase letters, uppercase = Red.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceRole {
  Commander,
  Infantry,
  Tank,
  Militia,
  Engineer,
  Artillery,
  AntiAir,
  Missile,
  AirForce,
  Navy,
  Headquarter,
}

impl PieceRole {
  pub const ALL: [PieceRole; 11] = [
    PieceRole::Commander,
    PieceRole::Infantry,
    PieceRole::Tank,
    PieceRole::Militia,
    PieceRole::Engineer,
    PieceRole::Artillery,
    PieceRole::AntiAir,
    PieceRole::Missile,
    PieceRole::AirForce,
    PieceRole::Navy,
    PieceRole::Headquarter,
  ];

  pub fn symbol(self) -> char {
    match self {
      PieceRole::Commander => 'c',
      PieceRole::Infantry => 'i',
      PieceRole::Tank => 't',
      PieceRole::Militia => 'm',
      PieceRole::Engineer => 'e',
      PieceRole::Artillery => 'a',
      PieceRole::AntiAir => 'g',
      PieceRole::Missile => 's',
      PieceRole::AirForce => 'f',
      PieceRole::Navy => 'n',
      PieceRole::Headquarter => 'h',
    }
  }

  pub fn from_symbol(c: char) -> Option<PieceRole> {
    let lower = c.to_ascii_lowercase();
    PieceRole::ALL.into_iter().find(|role| role.symbol() == lower)
  }
}

/// A board occupant. Stacks live inside `carrying`: at most the carrier's
/// slot capacity, every element sharing the carrier's color, and no element
/// itself carries (flatten before re-stacking — enforced by
/// `model::stacker`, not by this type, which is a plain value).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
  pub role: PieceRole,
  pub color: Color,
  pub heroic: bool,
  pub carrying: Vec<Piece>,
}

impl Piece {
  pub fn new(role: PieceRole, color: Color) -> Self {
    Piece { role, color, heroic: false, carrying: Vec::new() }
  }

  pub fn symbol(&self) -> char {
    let s = self.role.symbol();
    match self.color {
      Color::Red => s.to_ascii_uppercase(),
      Color::Blue => s,
    }
  }

  /// Air-defense radius this piece alone projects (0 for non-defenders),
  /// per the distilled brief's §4.5 table, heroic bonus `min(base+1, 3)`.
  pub fn air_defense_radius(&self) -> u8 {
    let base = match self.role {
      PieceRole::Navy => 1,
      PieceRole::AntiAir => 1,
      PieceRole::Missile => 2,
      _ => 0,
    };
    if base == 0 {
      0
    } else if self.heroic {
      (base + 1).min(3)
    } else {
      base
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn symbol_round_trip_for_every_role() {
    for role in PieceRole::ALL {
      let c = role.symbol();
      assert_eq!(PieceRole::from_symbol(c), Some(role));
      assert_eq!(PieceRole::from_symbol(c.to_ascii_uppercase()), Some(role));
    }
  }

  #[test]
  fn red_symbol_is_uppercase() {
    let p = Piece::new(PieceRole::Tank, Color::Red);
    assert_eq!(p.symbol(), 'T');
    let p = Piece::new(PieceRole::Tank, Color::Blue);
    assert_eq!(p.symbol(), 't');
  }

  #[test]
  fn heroic_air_defense_capped_at_three() {
    let mut missile = Piece::new(PieceRole::Missile, Color::Red);
    assert_eq!(missile.air_defense_radius(), 2);
    missile.heroic = true;
    assert_eq!(missile.air_defense_radius(), 3);
  }

  #[test]
  fn non_defender_radius_is_zero_even_heroic() {
    let mut infantry = Piece::new(PieceRole::Infantry, Color::Red);
    infantry.heroic = true;
    assert_eq!(infantry.air_defense_radius(), 0);
  }
}

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

//! Declarative combination rules: carrier priority, slot schema, and the
//! `combine`/`remove`/`flatten` operations over stacks of `Piece`.
//!
//! The carrier slot schema is a data table ([`CARRIER_SCHEMA`]) rather than
//! logic re-derived per call site, resolving the distilled brief's first
//! Open Question (two legacy combine-engines with differing vocabularies):
//! the canonical capacities live here, in one place, as data.

use crate::errors::{CoTuLenhError, StackErrorKind};
use crate::model::piece::{Color, Piece, PieceRole};
use alloc::vec::Vec;

pub struct SlotSpec {
  pub accepted_roles: &'static [PieceRole],
  pub max_count: u8,
}

pub struct CarrierSpec {
  pub role: PieceRole,
  pub slots: &'static [SlotSpec],
}

/// Carrier priority, highest first: when two stackable pieces combine, the
/// higher-priority role becomes the carrier.
pub const CARRIER_PRIORITY: [PieceRole; 5] = [
  PieceRole::Navy,
  PieceRole::AirForce,
  PieceRole::Tank,
  PieceRole::Engineer,
  PieceRole::Headquarter,
];

const NAVY_SLOTS: [SlotSpec; 1] =
  [SlotSpec { accepted_roles: &[PieceRole::Infantry, PieceRole::Tank, PieceRole::AirForce], max_count: 1 }];
const AIRFORCE_SLOTS: [SlotSpec; 1] =
  [SlotSpec { accepted_roles: &[PieceRole::Infantry, PieceRole::Militia], max_count: 1 }];
const TANK_SLOTS: [SlotSpec; 1] =
  [SlotSpec { accepted_roles: &[PieceRole::Infantry, PieceRole::AirForce], max_count: 1 }];
const ENGINEER_SLOTS: [SlotSpec; 1] =
  [SlotSpec { accepted_roles: &[PieceRole::Infantry], max_count: 1 }];
const HEADQUARTER_SLOTS: [SlotSpec; 1] =
  [SlotSpec { accepted_roles: &[PieceRole::Infantry, PieceRole::Militia], max_count: 1 }];

pub const CARRIER_SCHEMA: [CarrierSpec; 5] = [
  CarrierSpec { role: PieceRole::Navy, slots: &NAVY_SLOTS },
  CarrierSpec { role: PieceRole::AirForce, slots: &AIRFORCE_SLOTS },
  CarrierSpec { role: PieceRole::Tank, slots: &TANK_SLOTS },
  CarrierSpec { role: PieceRole::Engineer, slots: &ENGINEER_SLOTS },
  CarrierSpec { role: PieceRole::Headquarter, slots: &HEADQUARTER_SLOTS },
];

fn schema_for(role: PieceRole) -> Option<&'static CarrierSpec> {
  CARRIER_SCHEMA.iter().find(|spec| spec.role == role)
}

/// Flattens a stack into carrier-first order: `[carrier, ...carried]`.
pub fn flatten(piece: &Piece) -> Vec<Piece> {
  let mut out = Vec::with_capacity(1 + piece.carrying.len());
  let mut carrier_only = piece.clone();
  let carried = core::mem::take(&mut carrier_only.carrying);
  out.push(carrier_only);
  out.extend(carried);
  out
}

/// Tries to seat every piece in `passengers` into `carrier`'s declared
/// slots, in order. Fails closed on the first passenger that has no
/// accepting slot or whose slot is already full.
fn try_seat(carrier: &mut Piece, passengers: &[Piece]) -> Result<(), CoTuLenhError> {
  let schema =
    schema_for(carrier.role).ok_or(CoTuLenhError::StackError { kind: StackErrorKind::CarrierIncompatible })?;
  for passenger in passengers {
    let slot = schema
      .slots
      .iter()
      .find(|s| s.accepted_roles.contains(&passenger.role))
      .ok_or(CoTuLenhError::StackError { kind: StackErrorKind::CarrierIncompatible })?;
    let occupied = carrier
      .carrying
      .iter()
      .filter(|c| slot.accepted_roles.contains(&c.role))
      .count() as u8;
    if occupied >= slot.max_count {
      return Err(CoTuLenhError::StackError { kind: StackErrorKind::SlotFull });
    }
    carrier.carrying.push(passenger.clone());
  }
  Ok(())
}

/// Flattens every input piece (including any pre-existing stacks), then
/// tries each role present in [`CARRIER_PRIORITY`] order as carrier,
/// keeping the first one whose slots can actually seat every other piece.
/// A higher-priority role that cannot physically carry the rest (e.g.
/// AirForce cannot carry a Tank) is skipped in favor of a lower-priority
/// role that can (Tank carries AirForce), rather than failing outright.
pub fn combine(pieces: &[Piece]) -> Result<Piece, CoTuLenhError> {
  let mut flat: Vec<Piece> = Vec::new();
  for p in pieces {
    flat.extend(flatten(p));
  }
  if flat.is_empty() {
    return Err(CoTuLenhError::StackError { kind: StackErrorKind::CarrierIncompatible });
  }
  let color = flat[0].color;
  if flat.iter().any(|p| p.color != color) {
    return Err(CoTuLenhError::StackError { kind: StackErrorKind::ColorMismatch });
  }
  if flat.len() == 1 {
    return Ok(flat.into_iter().next().unwrap());
  }

  let mut last_err = CoTuLenhError::StackError { kind: StackErrorKind::CarrierIncompatible };
  let mut tried_any = false;
  for role in CARRIER_PRIORITY {
    let Some(candidate_idx) = flat.iter().position(|p| p.role == role) else {
      continue;
    };
    tried_any = true;
    let mut rest = flat.clone();
    let mut carrier = rest.remove(candidate_idx);
    match try_seat(&mut carrier, &rest) {
      Ok(()) => return Ok(carrier),
      Err(err) => last_err = err,
    }
  }
  if !tried_any {
    return Err(CoTuLenhError::StackError { kind: StackErrorKind::CarrierIncompatible });
  }
  Err(last_err)
}

/// Removes `target_role` (and anything it was carrying) from `stack`,
/// recombining the remainder. Returns `(removed, Option<remaining_stack>)`.
pub fn remove(stack: &Piece, target_role: PieceRole) -> Result<(Piece, Option<Piece>), CoTuLenhError> {
  let mut flat = flatten(stack);
  let pos = flat
    .iter()
    .position(|p| p.role == target_role)
    .ok_or(CoTuLenhError::StackError { kind: StackErrorKind::CarrierIncompatible })?;
  let removed = flat.remove(pos);
  if flat.is_empty() {
    return Ok((removed, None));
  }
  let remaining = combine(&flat)?;
  Ok((removed, Some(remaining)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tank_carries_air_force() {
    let tank = Piece::new(PieceRole::Tank, Color::Red);
    let air = Piece::new(PieceRole::AirForce, Color::Red);
    let stack = combine(&[tank, air]).unwrap();
    assert_eq!(stack.role, PieceRole::Tank);
    assert_eq!(stack.carrying.len(), 1);
    assert_eq!(stack.carrying[0].role, PieceRole::AirForce);
  }

  #[test]
  fn navy_outranks_tank_as_carrier() {
    let navy = Piece::new(PieceRole::Navy, Color::Red);
    let infantry = Piece::new(PieceRole::Infantry, Color::Red);
    let stack = combine(&[infantry, navy]).unwrap();
    assert_eq!(stack.role, PieceRole::Navy);
  }

  #[test]
  fn incompatible_role_is_rejected() {
    let tank = Piece::new(PieceRole::Tank, Color::Red);
    let commander = Piece::new(PieceRole::Commander, Color::Red);
    let err = combine(&[tank, commander]).unwrap_err();
    assert_eq!(err, CoTuLenhError::StackError { kind: StackErrorKind::CarrierIncompatible });
  }

  #[test]
  fn color_mismatch_is_rejected() {
    let tank = Piece::new(PieceRole::Tank, Color::Red);
    let air = Piece::new(PieceRole::AirForce, Color::Blue);
    let err = combine(&[tank, air]).unwrap_err();
    assert_eq!(err, CoTuLenhError::StackError { kind: StackErrorKind::ColorMismatch });
  }

  #[test]
  fn slot_full_is_rejected() {
    let tank = Piece::new(PieceRole::Tank, Color::Red);
    let infantry = Piece::new(PieceRole::Infantry, Color::Red);
    let air = Piece::new(PieceRole::AirForce, Color::Red);
    let err = combine(&[tank, infantry, air]).unwrap_err();
    assert_eq!(err, CoTuLenhError::StackError { kind: StackErrorKind::SlotFull });
  }

  #[test]
  fn flatten_then_combine_is_identity() {
    let tank = Piece::new(PieceRole::Tank, Color::Red);
    let air = Piece::new(PieceRole::AirForce, Color::Red);
    let stack = combine(&[tank, air]).unwrap();
    let round_tripped = combine(&flatten(&stack)).unwrap();
    assert_eq!(stack, round_tripped);
  }

  #[test]
  fn remove_returns_bare_carrier_when_passenger_removed() {
    let tank = Piece::new(PieceRole::Tank, Color::Red);
    let air = Piece::new(PieceRole::AirForce, Color::Red);
    let stack = combine(&[tank, air]).unwrap();
    let (removed, remaining) = remove(&stack, PieceRole::AirForce).unwrap();
    assert_eq!(removed.role, PieceRole::AirForce);
    assert_eq!(remaining.unwrap().carrying.len(), 0);
  }
}

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

//! The shared per-role generator engine. Every `movegen::<role>` module is a
//! thin wrapper around [`generate`], configured by that role's
//! [`crate::movegen::config::RoleConfig`] — the same "stop a sliding ray at
//! the first blocker" trick as the reference `generate_rook_moves`
//! (`blockers = ray & occupied; ray &= !blockers`), generalized from a
//! precomputed ray table to a live per-step scan since a stack's carrier can
//! change which piece occupies a square between queries.

use crate::constants::DIR_OFFSETS;
use crate::model::gamestate::GameState;
use crate::model::piece::{color_index, Color, PieceRole};
use crate::model::square::Square;
use crate::model::{stacker, terrain};
use crate::movegen::config::{self, config_for};
use crate::moves::Move;
use alloc::vec::Vec;

/// How a capture beyond `move_range` (but within `capture_range`) is
/// represented. Every role stays in place for it (`Stay`) except Missile,
/// whose warhead takes itself out too (`Suicide`), per the distilled
/// brief's explicit self-sacrifice note.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RangedCaptureKind {
  Stay,
  Suicide,
}

/// The ranged-capture representation for `role`'s own moves. Only Missile
/// sacrifices itself; every other role stays in place.
pub fn ranged_kind_for(role: PieceRole) -> RangedCaptureKind {
  if role == PieceRole::Missile {
    RangedCaptureKind::Suicide
  } else {
    RangedCaptureKind::Stay
  }
}

fn offset_deltas(dir_index: usize) -> (i16, i16) {
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

fn terrain_blocks_continuation(role: PieceRole, prev: Square, cur: Square) -> bool {
  if role == PieceRole::AirForce {
    return false;
  }
  terrain::is_heavy_role(role) && terrain::crosses_river(prev, cur) && !terrain::is_bridge(cur)
}

pub fn generate(state: &GameState, from: Square, ranged_kind: RangedCaptureKind) -> Vec<Move> {
  let mut out = Vec::new();
  let piece = match state.get(from) {
    Some(p) => p.clone(),
    None => return out,
  };
  let role = piece.role;
  let color = piece.color;
  let cfg = config_for(role);
  let move_range = config::effective_move_range(role, piece.heroic);
  let capture_range = config::effective_capture_range(role, piece.heroic);
  let max_range = move_range.max(capture_range);
  if max_range == 0 {
    return out;
  }

  let enemy_air_defense = state.air_defense[color_index(color.opposite())];
  let allow_diagonal = cfg.can_move_diagonal || (cfg.heroic_enables_diagonal && piece.heroic);

  for (dir_index, _) in DIR_OFFSETS.iter().enumerate() {
    if dir_index >= 4 && !allow_diagonal {
      continue;
    }
    let (df, dr) = offset_deltas(dir_index);
    let mut prev = from;
    let mut blocked = false;
    let mut air_crossings = 0u8;

    for step in 1..=max_range {
      let cur = match prev.offset(df, dr) {
        Some(sq) => sq,
        None => break,
      };

      if cfg.air_unit {
        if enemy_air_defense.get_bit(cur) {
          air_crossings += 1;
          if air_crossings >= 2 {
            break;
          }
        }
      } else if terrain_blocks_continuation(role, prev, cur) {
        break;
      }

      match state.get(cur) {
        None => {
          if !blocked && step <= move_range {
            out.push(Move::Normal { from, to: cur, role });
          }
        }
        Some(target) => {
          if target.color != color {
            if !blocked || cfg.capture_ignores_blocking {
              if step <= move_range {
                out.push(Move::Capture { from, to: cur, role, captured: target.clone() });
              } else if step <= capture_range {
                match ranged_kind {
                  RangedCaptureKind::Stay => {
                    out.push(Move::StayCapture { from, target: cur, role, captured: target.clone() });
                  }
                  RangedCaptureKind::Suicide => {
                    out.push(Move::SuicideCapture { from, target: cur, role, captured: target.clone() });
                  }
                }
              }
            }
          } else if !blocked && step <= move_range {
            if let Ok(result) = stacker::combine(&[piece.clone(), target.clone()]) {
              out.push(Move::Combination { from, to: cur, role, result });
            }
          }
          blocked = true;
        }
      }

      if blocked && !cfg.move_ignores_blocking && !cfg.capture_ignores_blocking {
        break;
      }
      prev = cur;
    }
  }

  out
}

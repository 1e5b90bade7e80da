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

//! Pseudo-legal move generation: one module per `PieceRole`, each a thin
//! wrapper over the shared [`common::generate`] engine, plus the
//! `generate_moves` dispatcher that aggregates every occupied square of the
//! side to move — mirroring how the reference `movegen::mod::generate_moves`
//! aggregates its six per-role generators into one list.

pub mod airforce;
pub mod antiair;
pub mod artillery;
pub mod commander;
pub mod common;
pub mod config;
pub mod deploy;
pub mod engineer;
pub mod headquarter;
pub mod infantry;
pub mod militia;
pub mod missile;
pub mod navy;
pub mod tank;

use crate::model::gamestate::GameState;
use crate::model::piece::PieceRole;
use crate::model::square::Square;
use crate::moves::Move;
use alloc::vec::Vec;

pub use deploy::generate_deploy_moves;

fn generate_for_role(state: &GameState, from: Square, role: PieceRole) -> Vec<Move> {
  match role {
    PieceRole::Commander => commander::generate_moves(state, from),
    PieceRole::Infantry => infantry::generate_moves(state, from),
    PieceRole::Tank => tank::generate_moves(state, from),
    PieceRole::Militia => militia::generate_moves(state, from),
    PieceRole::Engineer => engineer::generate_moves(state, from),
    PieceRole::Artillery => artillery::generate_moves(state, from),
    PieceRole::AntiAir => antiair::generate_moves(state, from),
    PieceRole::Missile => missile::generate_moves(state, from),
    PieceRole::AirForce => airforce::generate_moves(state, from),
    PieceRole::Navy => navy::generate_moves(state, from),
    PieceRole::Headquarter => headquarter::generate_moves(state, from),
  }
}

/// Pseudo-legal moves for the single carrier role standing at `from`.
/// Stacked passengers do not generate their own moves while embarked — they
/// must be deployed first, per the distilled brief's deploy-session design.
pub fn generate_moves_from(state: &GameState, from: Square) -> Vec<Move> {
  match state.get(from) {
    Some(piece) => generate_for_role(state, from, piece.role),
    None => Vec::new(),
  }
}

/// All pseudo-legal moves for the side to move.
pub fn generate_moves(state: &GameState) -> Vec<Move> {
  let mut out = Vec::new();
  for (sq, _) in state.occupied_by(state.turn) {
    out.extend(generate_moves_from(state, sq));
  }
  out
}

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

//! The top-level mutable game state: board array, commander squares, turn,
//! clocks, deploy session, air-defense bitboards, and repetition map.
//!
//! Chosen as a flat `[Option<Piece>; BOARD_SLOTS]` mailbox array rather than
//! a bitboard-per-role scheme, since stacked/heroic/carrying pieces do not
//! fit a flat per-role-bitboard representation cleanly — the same
//! conclusion the reference codebase reaches with its alternate mailbox
//! `Board` type, kept alongside its primary bitboard `GameBoard`.

use crate::constants::BOARD_SLOTS;
use crate::errors::{CoTuLenhError, DeployErrorKind};
use crate::model::airdefense;
use crate::model::bitboard::BitBoard256;
use crate::model::deploy::DeploySession;
use crate::model::piece::{color_index, Color, Piece, PieceRole};
use crate::model::square::Square;
use crate::model::stacker;
use crate::moves::{HistoryEntry, Move};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

#[derive(Clone, Debug)]
pub struct GameState {
  board: Vec<Option<Piece>>,
  pub commander_squares: [Option<Square>; 2],
  pub turn: Color,
  pub halfmove_clock: u32,
  pub fullmove_number: u32,
  pub deploy: Option<DeploySession>,
  pub air_defense: [BitBoard256; 2],
  pub repetition: BTreeMap<String, u32>,
  pub history: Vec<HistoryEntry>,
}

impl GameState {
  pub fn empty() -> Self {
    GameState {
      board: alloc::vec![None; BOARD_SLOTS],
      commander_squares: [None, None],
      turn: Color::Red,
      halfmove_clock: 0,
      fullmove_number: 1,
      deploy: None,
      air_defense: [BitBoard256::EMPTY, BitBoard256::EMPTY],
      repetition: BTreeMap::new(),
      history: Vec::new(),
    }
  }

  pub fn get(&self, sq: Square) -> Option<&Piece> {
    if let Some(session) = &self.deploy {
      return session.effective_at(sq, self.board[sq.index()].as_ref());
    }
    self.board[sq.index()].as_ref()
  }

  /// Raw base-board read, ignoring any deploy overlay.
  pub fn get_base(&self, sq: Square) -> Option<&Piece> {
    self.board[sq.index()].as_ref()
  }

  fn set_base(&mut self, sq: Square, piece: Option<Piece>) {
    if let Some(p) = &piece {
      if p.role == PieceRole::Commander {
        self.commander_squares[color_index(p.color)] = Some(sq);
      }
    }
    self.board[sq.index()] = piece;
  }

  pub fn put(&mut self, sq: Square, piece: Piece) -> Result<(), CoTuLenhError> {
    if !crate::model::terrain::role_fits_terrain(piece.role, sq) {
      return Err(CoTuLenhError::IllegalPlacement {
        reason: alloc::format!("{:?} cannot rest on {}", piece.role, sq),
      });
    }
    if piece.role == PieceRole::Commander {
      let idx = color_index(piece.color);
      if self.commander_squares[idx].is_some_and(|existing| existing != sq) {
        return Err(CoTuLenhError::IllegalPlacement {
          reason: alloc::string::String::from("a commander of that color already exists"),
        });
      }
    }
    self.set_base(sq, Some(piece));
    self.refresh_air_defense(Color::Red);
    self.refresh_air_defense(Color::Blue);
    Ok(())
  }

  pub fn remove(&mut self, sq: Square) -> Option<Piece> {
    let removed = self.board[sq.index()].take();
    if let Some(p) = &removed {
      if p.role == PieceRole::Commander {
        self.commander_squares[color_index(p.color)] = None;
      }
    }
    self.refresh_air_defense(Color::Red);
    self.refresh_air_defense(Color::Blue);
    removed
  }

  /// Overlay-aware: during an active deploy session this reflects the
  /// virtual board (departed pieces at their destinations, remainders at
  /// `stack_square`), not the untouched base board, so air-defense and
  /// move generation see reality mid-session rather than stale state.
  pub fn occupied(&self) -> Vec<(Square, &Piece)> {
    Square::all_on_board().filter_map(|sq| self.get(sq).map(|p| (sq, p))).collect()
  }

  pub fn occupied_by(&self, color: Color) -> Vec<(Square, &Piece)> {
    self.occupied().into_iter().filter(|(_, p)| p.color == color).collect()
  }

  pub fn refresh_air_defense(&mut self, color: Color) {
    let occupied = self.occupied_by(color);
    self.air_defense[color_index(color)] = airdefense::recompute(&occupied, color);
  }

  pub fn commander_square(&self, color: Color) -> Option<Square> {
    self.commander_squares[color_index(color)]
  }

  /// Canonical repetition/FEN cache key: board + turn + deploy suffix,
  /// excluding the half-move clock, resolving the distilled brief's third
  /// Open Question the same way typical chess repetition conventions do.
  pub fn repetition_key(&self) -> String {
    crate::fen::to_fen_board_turn_deploy(self)
  }

  pub fn note_repetition(&mut self) {
    let key = self.repetition_key();
    *self.repetition.entry(key).or_insert(0) += 1;
  }

  pub fn repetition_count(&self) -> u32 {
    let key = self.repetition_key();
    *self.repetition.get(&key).unwrap_or(&0)
  }

  /// Applies `mv` to the board, recording a [`HistoryEntry`] so it can be
  /// undone bit-for-bit. Does not itself check legality — callers run
  /// pseudo-legal generation and `legal::checker` first. Turn advances
  /// unless `mv` is a deploy step (turn holds until `commit_deploy`).
  pub fn make_move(&mut self, mv: Move) -> Result<(), CoTuLenhError> {
    let from = mv.from_square();
    let mover_before = self
      .get(from)
      .cloned()
      .ok_or_else(|| CoTuLenhError::IllegalMove { reason: alloc::string::String::from("no piece at source square") })?;

    let entry = HistoryEntry {
      mv: mv.clone(),
      mover_before: mover_before.clone(),
      target_before: match &mv {
        Move::Capture { to, .. } | Move::Combination { to, .. } => self.get(*to).cloned(),
        Move::StayCapture { target, .. } | Move::SuicideCapture { target, .. } => self.get(*target).cloned(),
        Move::DeployStep { to, .. } => self.get(*to).cloned(),
        Move::Normal { .. } => None,
      },
      mover_heroic_before: mover_before.heroic,
      commander_squares_before: self.commander_squares,
      halfmove_clock_before: self.halfmove_clock,
      turn_before: self.turn,
      deploy_before: self.deploy.clone(),
      repetition_key_before: self.repetition_key(),
    };

    let resets_clock = mv.is_capture();

    match &mv {
      Move::Normal { from, to, .. } => {
        let piece = self.take_effective(*from);
        self.write_effective(*to, Some(piece));
      }
      Move::Capture { from, to, .. } => {
        let piece = self.take_effective(*from);
        self.write_effective(*to, Some(piece));
      }
      Move::StayCapture { target, .. } => {
        self.write_effective(*target, None);
      }
      Move::SuicideCapture { from, target, .. } => {
        self.take_effective(*from);
        self.write_effective(*target, None);
      }
      Move::Combination { from, to, result, .. } => {
        self.take_effective(*from);
        self.write_effective(*to, Some(result.clone()));
      }
      Move::DeployStep { from, to, role, .. } => {
        let current_stack = self
          .get(*from)
          .cloned()
          .ok_or(CoTuLenhError::DeployError { kind: DeployErrorKind::WrongStack })?;
        let (departing, remaining) = stacker::remove(&current_stack, *role)
          .map_err(|_| CoTuLenhError::DeployError { kind: DeployErrorKind::NonRecombinable })?;
        let session = self.deploy.get_or_insert_with(|| {
          DeploySession::new(*from, self.turn, mover_before.clone())
        });
        session.virtual_overlay.insert(*from, remaining);
        session.record_departure(*to, departing);
      }
    }

    if !mv.is_deploy_step() {
      if resets_clock {
        self.halfmove_clock = 0;
      } else {
        self.halfmove_clock += 1;
      }
      if self.turn == Color::Blue {
        self.fullmove_number += 1;
      }
      self.turn = self.turn.opposite();
      self.refresh_air_defense(Color::Red);
      self.refresh_air_defense(Color::Blue);
      self.apply_heroic_promotion(&mv);
      self.note_repetition();
    } else {
      self.refresh_air_defense(Color::Red);
      self.refresh_air_defense(Color::Blue);
    }

    self.history.push(entry);
    Ok(())
  }

  /// Marks `role` as staying at the active deploy session's stack square
  /// rather than departing. Splits it out of the remaining stack there (so
  /// it no longer participates in further deploy steps from that square)
  /// and records it for `commit_deploy` to recombine back in.
  pub fn mark_deploy_stay(&mut self, role: PieceRole) -> Result<(), CoTuLenhError> {
    let session = self
      .deploy
      .as_ref()
      .ok_or(CoTuLenhError::DeployError { kind: DeployErrorKind::NotActive })?;
    let stack_square = session.stack_square;
    let current_stack = self
      .get(stack_square)
      .cloned()
      .ok_or(CoTuLenhError::DeployError { kind: DeployErrorKind::WrongStack })?;
    let (staying, remaining) = stacker::remove(&current_stack, role)
      .map_err(|_| CoTuLenhError::DeployError { kind: DeployErrorKind::NonRecombinable })?;
    let session = self.deploy.as_mut().expect("checked Active above");
    session.virtual_overlay.insert(stack_square, remaining);
    session.stay_pieces.push(staying);
    Ok(())
  }

  fn take_effective(&mut self, sq: Square) -> Piece {
    if let Some(session) = &mut self.deploy {
      if let Some(slot) = session.virtual_overlay.get_mut(&sq) {
        return slot.take().expect("moved square must hold a piece");
      }
    }
    self.board[sq.index()].take().expect("moved square must hold a piece")
  }

  /// Writes directly into the effective board (the deploy overlay if an
  /// session is Active, else the base board). Exposed crate-wide so
  /// `movegen::deploy` can stand a lone sub-piece at a stack square on a
  /// scratch clone without disturbing the real state.
  pub(crate) fn write_effective(&mut self, sq: Square, piece: Option<Piece>) {
    if let Some(session) = &mut self.deploy {
      session.virtual_overlay.insert(sq, piece);
      return;
    }
    self.set_base(sq, piece);
  }

  fn deploy_piece_at(&mut self, from: Square) -> Result<Piece, CoTuLenhError> {
    if let Some(session) = &self.deploy {
      if let Some(Some(p)) = session.virtual_overlay.get(&from) {
        return Ok(p.clone());
      }
    }
    self
      .board
      .get(from.index())
      .and_then(|p| p.clone())
      .ok_or_else(|| CoTuLenhError::DeployError { kind: DeployErrorKind::WrongStack })
  }

  /// Applies heroic promotion to the piece that just moved if it now
  /// attacks the enemy commander, per the distilled brief's §4.9.
  fn apply_heroic_promotion(&mut self, mv: &Move) {
    let to = mv.to_square();
    let mover_color = match self.get_base(to) {
      Some(p) => p.color,
      None => return,
    };
    let enemy_commander = match self.commander_square(mover_color.opposite()) {
      Some(sq) => sq,
      None => return,
    };
    let attackers = crate::legal::attack::attackers_of(self, enemy_commander, mover_color);
    if attackers.iter().any(|sq| *sq == to) {
      if let Some(piece) = self.board[to.index()].as_mut() {
        piece.heroic = true;
      }
    }
  }

  /// Commits an Active deploy session: writes the overlay onto the base
  /// board and flips the turn. The overlay's entry for the stack square is
  /// already the authoritative remainder (every departure and explicit
  /// `mark_deploy_stay` call narrowed it in place via `stacker::remove`), so
  /// nothing further needs recombining here; `stay_pieces` is kept only as
  /// a record of which roles were explicitly declared to stay, for SAN
  /// rendering.
  pub fn commit_deploy(&mut self) -> Result<(), CoTuLenhError> {
    let session = self
      .deploy
      .take()
      .ok_or(CoTuLenhError::DeployError { kind: DeployErrorKind::NotActive })?;

    for (sq, piece) in session.virtual_overlay.iter() {
      self.set_base(*sq, piece.clone());
    }

    self.halfmove_clock += 1;
    if self.turn == Color::Blue {
      self.fullmove_number += 1;
    }
    self.turn = self.turn.opposite();
    self.refresh_air_defense(Color::Red);
    self.refresh_air_defense(Color::Blue);
    self.note_repetition();
    Ok(())
  }

  /// Reverts the last executed move (or, mid-deploy, the last deploy step)
  /// bit-for-bit using the captured [`HistoryEntry`].
  pub fn unmake_move(&mut self) -> Result<(), CoTuLenhError> {
    let entry = self
      .history
      .pop()
      .ok_or(CoTuLenhError::InvariantViolation { detail: alloc::string::String::from("no move to undo") })?;

    match &entry.mv {
      Move::Normal { from, to, .. } | Move::Capture { from, to, .. } | Move::Combination { from, to, .. } => {
        self.set_base(*to, entry.target_before.clone());
        self.set_base(*from, Some(entry.mover_before.clone()));
      }
      Move::StayCapture { target, .. } | Move::SuicideCapture { target, .. } => {
        self.set_base(*target, entry.target_before.clone());
        if matches!(entry.mv, Move::SuicideCapture { .. }) {
          self.set_base(entry.mv.from_square(), Some(entry.mover_before.clone()));
        }
      }
      Move::DeployStep { .. } => {}
    }

    self.commander_squares = entry.commander_squares_before;
    self.halfmove_clock = entry.halfmove_clock_before;
    self.turn = entry.turn_before;
    self.deploy = entry.deploy_before.clone();
    self.refresh_air_defense(Color::Red);
    self.refresh_air_defense(Color::Blue);
    let key = entry.repetition_key_before;
    if let Some(count) = self.repetition.get_mut(&key) {
      if *count > 0 {
        *count -= 1;
      }
    }
    Ok(())
  }
}

impl Default for GameState {
  fn default() -> Self {
    crate::fen::parse(crate::fen::STARTING_FEN).expect("starting FEN must parse")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn put_and_get_round_trip() {
    let mut state = GameState::empty();
    let sq = Square::from_algebraic("d5").unwrap();
    let piece = Piece::new(PieceRole::Infantry, Color::Red);
    state.put(sq, piece.clone()).unwrap();
    assert_eq!(state.get(sq), Some(&piece));
  }

  #[test]
  fn removing_commander_clears_its_square() {
    let mut state = GameState::empty();
    let sq = Square::from_algebraic("f1").unwrap();
    state.put(sq, Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    assert_eq!(state.commander_square(Color::Red), Some(sq));
    state.remove(sq);
    assert_eq!(state.commander_square(Color::Red), None);
  }

  #[test]
  fn duplicate_commander_placement_rejected() {
    let mut state = GameState::empty();
    let sq1 = Square::from_algebraic("f1").unwrap();
    let sq2 = Square::from_algebraic("f2").unwrap();
    state.put(sq1, Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    let err = state.put(sq2, Piece::new(PieceRole::Commander, Color::Red)).unwrap_err();
    assert!(matches!(err, CoTuLenhError::IllegalPlacement { .. }));
  }

  #[test]
  fn deploy_step_splits_the_stack_leaving_the_remainder_behind() {
    let mut state = GameState::empty();
    state.put(Square::from_algebraic("f1").unwrap(), Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    state.put(Square::from_algebraic("f12").unwrap(), Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    let stack_sq = Square::from_algebraic("d5").unwrap();
    let stack = stacker::combine(&[
      Piece::new(PieceRole::Tank, Color::Red),
      Piece::new(PieceRole::AirForce, Color::Red),
    ])
    .unwrap();
    state.put(stack_sq, stack).unwrap();

    let dest = Square::from_algebraic("d7").unwrap();
    state
      .make_move(Move::DeployStep { from: stack_sq, to: dest, role: PieceRole::Tank, captured: None })
      .unwrap();

    assert!(state.deploy.is_some());
    assert_eq!(state.get(dest).map(|p| p.role), Some(PieceRole::Tank));
    assert_eq!(state.get(stack_sq).map(|p| p.role), Some(PieceRole::AirForce));
    assert_eq!(state.turn, Color::Red, "turn holds during an active deploy session");

    state.commit_deploy().unwrap();
    assert!(state.deploy.is_none());
    assert_eq!(state.get_base(stack_sq).map(|p| p.role), Some(PieceRole::AirForce));
    assert_eq!(state.turn, Color::Blue);
  }

  #[test]
  fn normal_move_then_undo_restores_state() {
    let mut state = GameState::default();
    let from = Square::from_algebraic("c2").unwrap();
    let to = Square::from_algebraic("c3").unwrap();
    let before = state.clone();
    state
      .make_move(Move::Normal { from, to, role: PieceRole::Infantry })
      .unwrap();
    assert_eq!(state.turn, Color::Blue);
    state.unmake_move().unwrap();
    assert_eq!(state.get_base(from), before.get_base(from));
    assert_eq!(state.get_base(to), before.get_base(to));
    assert_eq!(state.turn, before.turn);
  }
}

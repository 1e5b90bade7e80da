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

//! The public, language-neutral entry point. `Engine` wraps a `GameState`
//! and is the only thing most callers (the CLI front end, bindings) should
//! ever touch directly.
//!
//! Legal-move lists are cached by effective FEN (board + turn + deploy
//! suffix) in a small fixed-capacity LRU, the same "cache by position key,
//! invalidate on mutation" shape the reference engine uses for its
//! transposition-adjacent tables, just sized for a handful of recent
//! positions instead of millions.

use crate::errors::CoTuLenhError;
use crate::legal::checker;
use crate::model::gamestate::GameState;
use crate::model::piece::{color_index, Color, Piece, PieceRole};
use crate::model::square::Square;
use crate::model::stacker;
use crate::movegen;
use crate::moves::Move;
use crate::{fen, san};
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

const MOVE_CACHE_CAPACITY: usize = 8;

struct MoveCache {
  entries: Vec<(String, Vec<Move>)>,
}

impl MoveCache {
  fn new() -> Self {
    MoveCache { entries: Vec::with_capacity(MOVE_CACHE_CAPACITY) }
  }

  fn get(&mut self, key: &str) -> Option<Vec<Move>> {
    let pos = self.entries.iter().position(|(k, _)| k == key)?;
    let entry = self.entries.remove(pos);
    let value = entry.1.clone();
    self.entries.push(entry);
    Some(value)
  }

  fn insert(&mut self, key: String, value: Vec<Move>) {
    if let Some(pos) = self.entries.iter().position(|(k, _)| *k == key) {
      self.entries.remove(pos);
    }
    self.entries.push((key, value));
    if self.entries.len() > MOVE_CACHE_CAPACITY {
      self.entries.remove(0);
    }
  }

  fn clear(&mut self) {
    self.entries.clear();
  }
}

/// A legal move rendered for display, returned by `Engine::moves` with
/// `verbose` set.
#[derive(Clone, Debug)]
pub struct MoveDescriptor {
  pub from: Square,
  pub to: Square,
  pub role: PieceRole,
  pub san: String,
  pub is_capture: bool,
  pub is_deploy_step: bool,
}

/// Filters accepted by `Engine::moves`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MovesQuery {
  pub square: Option<Square>,
  pub role: Option<PieceRole>,
}

/// One played move, as recorded for `Engine::history`.
#[derive(Clone, Debug)]
pub struct HistoryRecord {
  pub san: String,
  pub mv: Move,
}

pub struct Engine {
  state: GameState,
  cache: RefCell<MoveCache>,
  san_history: Vec<String>,
}

impl Engine {
  /// Starts a new engine from `fen_or_default`, falling back to the
  /// standard starting position when `None`.
  pub fn new(fen_or_default: Option<&str>) -> Result<Engine, CoTuLenhError> {
    let state = match fen_or_default {
      Some(text) => fen::parse(text)?,
      None => GameState::default(),
    };
    Ok(Engine { state, cache: RefCell::new(MoveCache::new()), san_history: Vec::new() })
  }

  pub fn fen(&self) -> String {
    fen::to_fen(&self.state)
  }

  pub fn turn(&self) -> Color {
    self.state.turn
  }

  pub fn is_check(&self) -> bool {
    checker::is_in_check(&self.state, self.state.turn)
  }

  pub fn is_checkmate(&self) -> bool {
    self.state.deploy.is_none() && self.is_check() && self.legal_moves().is_empty()
  }

  /// Stalemate, threefold repetition, or the fifty-move-equivalent
  /// halfmove-clock ceiling. The distilled brief leaves the exact draw
  /// conditions open; this mirrors the conventional chess rule set, scaled
  /// to CoTuLenh's halfmove clock.
  pub fn is_draw(&self) -> bool {
    if self.state.deploy.is_some() {
      return false;
    }
    if !self.is_check() && self.legal_moves().is_empty() {
      return true;
    }
    if self.state.repetition_count() >= 3 {
      return true;
    }
    self.state.halfmove_clock >= 100
  }

  pub fn is_game_over(&self) -> bool {
    self.is_checkmate() || self.is_draw()
  }

  /// The effective piece at `sq` (overlay-aware). When `role` is given,
  /// digs into a stack and returns just that sub-piece.
  pub fn get(&self, sq: Square, role: Option<PieceRole>) -> Option<Piece> {
    let piece = self.state.get(sq)?;
    match role {
      None => Some(piece.clone()),
      Some(wanted) => stacker::flatten(piece).into_iter().find(|p| p.role == wanted),
    }
  }

  /// Places `piece` at `sq`. With `combine` set and `sq` already occupied
  /// by a friendly piece, the two are merged into a stack instead of one
  /// overwriting the other.
  pub fn put(&mut self, piece: Piece, sq: Square, combine: bool) -> Result<(), CoTuLenhError> {
    self.cache.borrow_mut().clear();
    if combine {
      if let Some(existing) = self.state.get(sq).cloned() {
        let merged = stacker::combine(&[existing, piece])?;
        return self.state.put(sq, merged);
      }
    }
    self.state.put(sq, piece)
  }

  pub fn remove(&mut self, sq: Square) -> Option<Piece> {
    self.cache.borrow_mut().clear();
    self.state.remove(sq)
  }

  /// Legal moves for the current position, cached by effective FEN. Uses a
  /// `RefCell` rather than requiring `&mut self`: callers just inspecting
  /// the position (`moves`, `is_check`, ...) shouldn't need a mutable
  /// borrow of the engine just because the cache wants to record a hit.
  fn legal_moves(&self) -> Vec<Move> {
    let key = self.fen();
    if let Some(cached) = self.cache.borrow_mut().get(&key) {
      return cached;
    }
    let pseudo = self.pseudo_legal_moves();
    let legal = checker::filter_legal(&self.state, pseudo);
    self.cache.borrow_mut().insert(key, legal.clone());
    legal
  }

  fn pseudo_legal_moves(&self) -> Vec<Move> {
    if let Some(session) = &self.state.deploy {
      return movegen::generate_deploy_moves(&self.state, session.stack_square);
    }
    let mut out = movegen::generate_moves(&self.state);
    for (sq, piece) in self.state.occupied_by(self.state.turn) {
      if !piece.carrying.is_empty() {
        out.extend(movegen::generate_deploy_moves(&self.state, sq));
      }
    }
    out
  }

  /// Legal moves matching `query`, each rendered with its SAN-like string.
  pub fn moves(&self, query: MovesQuery, verbose: bool) -> Vec<MoveDescriptor> {
    let legal = self.legal_moves();
    legal
      .iter()
      .filter(|mv| query.square.is_none_or(|sq| mv.from_square() == sq))
      .filter(|mv| query.role.is_none_or(|role| mv.role() == role))
      .map(|mv| MoveDescriptor {
        from: mv.from_square(),
        to: mv.to_square(),
        role: mv.role(),
        san: if verbose { san::to_san_with_context(&self.state, mv, &legal) } else { String::new() },
        is_capture: mv.is_capture(),
        is_deploy_step: mv.is_deploy_step(),
      })
      .collect()
  }

  /// Plays a SAN-like move string. Does not accept deploy steps; use
  /// `deploy_step` to interact with an active or opening deploy session.
  pub fn play(&mut self, move_spec: &str) -> Result<(), CoTuLenhError> {
    let mv = san::parse_san(&self.state, move_spec)?;
    if mv.is_deploy_step() {
      return Err(CoTuLenhError::IllegalMove {
        reason: String::from("use deploy_step for deploy moves"),
      });
    }
    let rendered = san::to_san(&self.state, &mv);
    self.cache.borrow_mut().clear();
    self.state.make_move(mv)?;
    self.san_history.push(rendered);
    Ok(())
  }

  /// Plays or continues a deploy step. `stay` declares that `role` remains
  /// at the stack square instead of departing to `to`.
  pub fn deploy_step(&mut self, from: Square, to: Square, role: PieceRole, stay: bool) -> Result<(), CoTuLenhError> {
    self.cache.borrow_mut().clear();
    if stay {
      return self.state.mark_deploy_stay(role);
    }
    let captured = match self.state.get(to) {
      None => None,
      Some(p) if p.color != self.state.turn => Some(p.clone()),
      Some(_) => {
        return Err(CoTuLenhError::IllegalMove {
          reason: String::from("cannot deploy onto a square held by a friendly piece"),
        })
      }
    };
    let mv = Move::DeployStep { from, to, role, captured };
    if !checker::is_legal(&self.state, &mv)? {
      return Err(CoTuLenhError::IllegalMove { reason: String::from("deploy step leaves the commander unsafe") });
    }
    let rendered = san::to_san(&self.state, &mv);
    self.state.make_move(mv)?;
    self.san_history.push(rendered);
    Ok(())
  }

  pub fn commit_deploy(&mut self) -> Result<(), CoTuLenhError> {
    self.cache.borrow_mut().clear();
    self.state.commit_deploy()
  }

  /// Reverts the last played move. Does not unwind a `commit_deploy` or a
  /// `deploy_step(stay: true)` declaration, only moves recorded through
  /// `play`/`deploy_step`'s non-stay path.
  pub fn undo(&mut self) -> Result<(), CoTuLenhError> {
    self.cache.borrow_mut().clear();
    self.state.unmake_move()?;
    self.san_history.pop();
    Ok(())
  }

  pub fn history(&self, verbose: bool) -> Vec<HistoryRecord> {
    self
      .state
      .history
      .iter()
      .zip(self.san_history.iter())
      .map(|(entry, san_text)| HistoryRecord {
        san: if verbose { san_text.clone() } else { String::new() },
        mv: entry.mv.clone(),
      })
      .collect()
  }

  pub fn get_air_defense(&self, color: Color) -> Vec<Square> {
    let defense = self.state.air_defense[color_index(color)];
    Square::all_on_board()
      .filter(|sq| crate::model::airdefense::is_covered(defense, *sq))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_with_no_fen_uses_starting_position() {
    let engine = Engine::new(None).unwrap();
    assert_eq!(engine.turn(), Color::Red);
    assert_eq!(engine.fen(), fen::STARTING_FEN);
  }

  #[test]
  fn put_then_get_round_trips() {
    let mut engine = Engine::new(Some(fen::EMPTY_FEN)).unwrap();
    let sq = Square::from_algebraic("d5").unwrap();
    engine.put(Piece::new(PieceRole::Infantry, Color::Red), sq, false).unwrap();
    assert_eq!(engine.get(sq, None).map(|p| p.role), Some(PieceRole::Infantry));
  }

  #[test]
  fn moves_lists_candidates_for_a_bare_piece() {
    let mut engine = Engine::new(Some(fen::EMPTY_FEN)).unwrap();
    engine
      .put(Piece::new(PieceRole::Commander, Color::Red), Square::from_algebraic("f1").unwrap(), false)
      .unwrap();
    engine
      .put(Piece::new(PieceRole::Commander, Color::Blue), Square::from_algebraic("f12").unwrap(), false)
      .unwrap();
    engine
      .put(Piece::new(PieceRole::Infantry, Color::Red), Square::from_algebraic("d5").unwrap(), false)
      .unwrap();
    let candidates = engine.moves(MovesQuery::default(), true);
    assert!(candidates.iter().any(|m| m.role == PieceRole::Infantry));
  }

  #[test]
  fn play_then_undo_restores_turn() {
    let mut engine = Engine::new(None).unwrap();
    let before = engine.fen();
    let legal = engine.legal_moves();
    let chosen = legal.first().expect("starting position has legal moves");
    let rendered = san::to_san(&engine.state, chosen);
    engine.play(&rendered).unwrap();
    assert_ne!(engine.fen(), before);
    engine.undo().unwrap();
    assert_eq!(engine.fen(), before);
  }
}

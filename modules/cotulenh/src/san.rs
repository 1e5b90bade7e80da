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

//! SAN-like move notation: `[pieceLetter][disambig][sep][targetSquare]
//! [combine?][check?]`, per the distilled brief's §4.11. Formatting and
//! parsing both go through the same disambiguation pass over the legal-move
//! list, the same "compare against every other legal move to the same
//! square" approach the reference crate's move-printing takes for its own
//! (file-only, since chess pieces never need rank disambiguation against a
//! pawn) disambiguator.

use crate::constants::RANKS;
use crate::errors::CoTuLenhError;
use crate::legal::checker;
use crate::model::gamestate::GameState;
use crate::model::piece::Piece;
use crate::model::square::Square;
use crate::movegen;
use crate::moves::Move;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

fn separator_for(mv: &Move) -> &'static str {
  match mv {
    Move::Normal { .. } => "",
    Move::Capture { .. } => "x",
    Move::StayCapture { .. } => "_",
    Move::SuicideCapture { .. } => "@",
    Move::Combination { .. } => "&",
    Move::DeployStep { .. } => ">",
  }
}

fn piece_letter(piece_role: crate::model::piece::PieceRole) -> char {
  piece_role.symbol().to_ascii_uppercase()
}

fn combine_suffix(piece: &Piece) -> String {
  let mut out = String::new();
  out.push('(');
  if piece.heroic {
    out.push('+');
  }
  out.push(piece_letter(piece.role));
  for sub in &piece.carrying {
    if sub.heroic {
      out.push('+');
    }
    out.push(piece_letter(sub.role));
  }
  out.push(')');
  out
}

fn disambiguator(mv: &Move, legal_moves: &[Move]) -> String {
  let role = mv.role();
  let to = mv.to_square();
  let from = mv.from_square();
  let rivals: Vec<Square> = legal_moves
    .iter()
    .filter(|other| other.role() == role && other.to_square() == to && other.from_square() != from)
    .map(|other| other.from_square())
    .collect();
  if rivals.is_empty() {
    return String::new();
  }
  let file_unique = !rivals.iter().any(|sq| sq.file() == from.file());
  if file_unique {
    return format!("{}", (b'a' + from.file()) as char);
  }
  let rank_unique = !rivals.iter().any(|sq| sq.rank() == from.rank());
  if rank_unique {
    return format!("{}", RANKS - from.rank());
  }
  from.to_algebraic()
}

fn check_suffix(state: &GameState, mv: &Move) -> &'static str {
  let mover_color = state.turn;
  let mut trial = state.clone();
  if trial.make_move(mv.clone()).is_err() {
    return "";
  }
  let opponent = mover_color.opposite();
  if !checker::is_in_check(&trial, opponent) {
    return "";
  }
  if mv.is_deploy_step() {
    // Turn holds mid-deploy; mate detection only applies once the turn
    // actually passes to the opponent at commit time.
    return "^";
  }
  let replies = movegen::generate_moves(&trial);
  let legal_replies = checker::filter_legal(&trial, replies);
  if legal_replies.is_empty() {
    "#"
  } else {
    "^"
  }
}

/// Formats `mv` against an already-computed legal-move list (so callers
/// rendering an entire move list only pay for generation once).
pub fn to_san_with_context(state: &GameState, mv: &Move, legal_moves: &[Move]) -> String {
  let mut out = String::new();
  out.push(piece_letter(mv.role()));
  out.push_str(&disambiguator(mv, legal_moves));
  out.push_str(separator_for(mv));
  out.push_str(&mv.to_square().to_algebraic());
  if let Move::Combination { result, .. } = mv {
    out.push_str(&combine_suffix(result));
  }
  out.push_str(check_suffix(state, mv));
  out
}

/// Formats `mv` for `state`, computing the legal-move list internally.
pub fn to_san(state: &GameState, mv: &Move) -> String {
  let legal_moves = legal_moves_for(state);
  to_san_with_context(state, mv, &legal_moves)
}

fn legal_moves_for(state: &GameState) -> Vec<Move> {
  checker::filter_legal(state, movegen::generate_moves(state))
}

fn strip_check_suffix(s: &str) -> &str {
  s.trim_end_matches(['^', '#'])
}

/// Resolves a SAN-like string against the legal moves of `state`. Check/mate
/// suffixes are ignored on both sides of the comparison: they describe the
/// resulting position, not the move itself.
pub fn parse_san(state: &GameState, san: &str) -> Result<Move, CoTuLenhError> {
  let legal_moves = legal_moves_for(state);
  let wanted = strip_check_suffix(san.trim());
  let mut candidates: Vec<&Move> = Vec::new();
  for mv in &legal_moves {
    let rendered = to_san_with_context(state, mv, &legal_moves);
    if strip_check_suffix(&rendered) == wanted {
      candidates.push(mv);
    }
  }
  match candidates.len() {
    0 => Err(CoTuLenhError::IllegalMove { reason: String::from("no legal move matches that notation") }),
    1 => Ok(candidates[0].clone()),
    _ => Err(CoTuLenhError::AmbiguousMove {
      candidates: candidates.iter().map(|mv| to_san_with_context(state, mv, &legal_moves)).collect(),
    }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::piece::{Color, PieceRole};

  #[test]
  fn normal_move_has_no_separator() {
    let mut state = GameState::empty();
    state.put(Square::from_algebraic("f1").unwrap(), Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    state.put(Square::from_algebraic("f12").unwrap(), Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    state.put(Square::from_algebraic("d5").unwrap(), Piece::new(PieceRole::Infantry, Color::Red)).unwrap();
    let mv = Move::Normal { from: Square::from_algebraic("d5").unwrap(), to: Square::from_algebraic("d6").unwrap(), role: PieceRole::Infantry };
    assert_eq!(to_san(&state, &mv), "Id6");
  }

  #[test]
  fn capture_uses_x_separator() {
    let mut state = GameState::empty();
    state.put(Square::from_algebraic("f1").unwrap(), Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    state.put(Square::from_algebraic("f12").unwrap(), Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    let from = Square::from_algebraic("d5").unwrap();
    let to = Square::from_algebraic("d6").unwrap();
    state.put(from, Piece::new(PieceRole::Infantry, Color::Red)).unwrap();
    state.put(to, Piece::new(PieceRole::Infantry, Color::Blue)).unwrap();
    let captured = state.get(to).unwrap().clone();
    let mv = Move::Capture { from, to, role: PieceRole::Infantry, captured };
    assert_eq!(to_san(&state, &mv), "Ixd6");
  }

  #[test]
  fn ambiguous_moves_get_a_file_disambiguator() {
    let mut state = GameState::empty();
    state.put(Square::from_algebraic("f1").unwrap(), Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    state.put(Square::from_algebraic("f12").unwrap(), Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    let from = Square::from_algebraic("d5").unwrap();
    let to = Square::from_algebraic("d6").unwrap();
    state.put(from, Piece::new(PieceRole::Infantry, Color::Red)).unwrap();
    let mv = Move::Normal { from, to, role: PieceRole::Infantry };
    let rival_from = Square::from_algebraic("e6").unwrap();
    let rival = Move::Normal { from: rival_from, to, role: PieceRole::Infantry };
    assert_eq!(disambiguator(&mv, &[mv.clone(), rival]), "d");
  }

  #[test]
  fn san_round_trips_through_parse() {
    let mut state = GameState::empty();
    state.put(Square::from_algebraic("f1").unwrap(), Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    state.put(Square::from_algebraic("f12").unwrap(), Piece::new(PieceRole::Commander, Color::Blue)).unwrap();
    state.put(Square::from_algebraic("d5").unwrap(), Piece::new(PieceRole::Infantry, Color::Red)).unwrap();
    let mv = Move::Normal { from: Square::from_algebraic("d5").unwrap(), to: Square::from_algebraic("d6").unwrap(), role: PieceRole::Infantry };
    let san = to_san(&state, &mv);
    let parsed = parse_san(&state, &san).unwrap();
    assert_eq!(parsed, mv);
  }
}

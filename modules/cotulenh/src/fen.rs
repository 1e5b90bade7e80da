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

//! FEN parse/generate, grounded on the reference `GameData::from_fen`/
//! `to_fen`'s field-by-field split and rank-by-rank char walk, generalized
//! from an 8x8 two-color-bitboard board to the 11x12 stacked-piece mailbox
//! here, plus the trailing deploy-session suffix the reference format has
//! no equivalent of.
//!
//! `DeploySuffix`'s inner grammar (`Square ':' Piece` per moved entry,
//! comma-separated, bare `Piece` list after `/` for stays) is this crate's
//! own choice where the distilled brief leaves the micro-syntax open —
//! recorded in `DESIGN.md`.

use crate::constants::{FILES, RANKS};
use crate::errors::{CoTuLenhError, FenErrorReason};
use crate::model::deploy::DeploySession;
use crate::model::gamestate::GameState;
use crate::model::piece::{Color, Piece, PieceRole};
use crate::model::square::Square;
use crate::model::stacker;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;
use core::iter::Peekable;
use core::str::Chars;

pub const STARTING_FEN: &str =
  "6c4/1n2fh1hf2/3a2s2a1/2n1gt1tg2/2ie2m2ei/11/11/2IE2M2EI/2N1GT1TG2/3A2S2A1/1N2FH1HF2/6C4 r - - 0 1";

pub const EMPTY_FEN: &str = "11/11/11/11/11/11/11/11/11/11/11/11 r - - 0 1";

fn fen_error(reason: FenErrorReason) -> CoTuLenhError {
  CoTuLenhError::InvalidFen { reason, location: 0 }
}

fn parse_piece(chars: &mut Peekable<Chars>) -> Result<Piece, CoTuLenhError> {
  let heroic = if chars.peek() == Some(&'+') {
    chars.next();
    true
  } else {
    false
  };
  let c = chars.next().ok_or_else(|| fen_error(FenErrorReason::InvalidPieceChar))?;
  let role = PieceRole::from_symbol(c).ok_or_else(|| fen_error(FenErrorReason::InvalidPieceChar))?;
  let color = if c.is_ascii_uppercase() { Color::Red } else { Color::Blue };
  Ok(Piece { role, color, heroic, carrying: Vec::new() })
}

fn parse_rank(rank_str: &str, rank_idx: u8, state: &mut GameState) -> Result<(), CoTuLenhError> {
  let mut file: u32 = 0;
  let mut chars = rank_str.chars().peekable();

  while let Some(&c) = chars.peek() {
    if c.is_ascii_digit() {
      let mut num: u32 = 0;
      while let Some(&d) = chars.peek() {
        if d.is_ascii_digit() {
          num = num * 10 + d.to_digit(10).unwrap();
          chars.next();
        } else {
          break;
        }
      }
      if num == 0 || num > FILES as u32 {
        return Err(fen_error(FenErrorReason::InvalidRankLength));
      }
      file += num;
    } else if c == '(' {
      chars.next();
      let mut members = Vec::new();
      loop {
        match chars.peek() {
          Some(')') => {
            chars.next();
            break;
          }
          Some(_) => members.push(parse_piece(&mut chars)?),
          None => return Err(fen_error(FenErrorReason::UnterminatedStack)),
        }
      }
      if members.len() < 2 {
        return Err(fen_error(FenErrorReason::EmptyStack));
      }
      let sq = square_at(file, rank_idx)?;
      let mut carrier = members.remove(0);
      carrier.carrying = members;
      place(state, sq, carrier)?;
      file += 1;
    } else {
      let piece = parse_piece(&mut chars)?;
      let sq = square_at(file, rank_idx)?;
      place(state, sq, piece)?;
      file += 1;
    }
  }

  if file != FILES as u32 {
    return Err(fen_error(FenErrorReason::InvalidRankLength));
  }
  Ok(())
}

fn square_at(file: u32, rank: u8) -> Result<Square, CoTuLenhError> {
  if file >= FILES as u32 {
    return Err(fen_error(FenErrorReason::InvalidRankLength));
  }
  Square::new(file as u8, rank).ok_or_else(|| fen_error(FenErrorReason::InvalidRankLength))
}

fn place(state: &mut GameState, sq: Square, piece: Piece) -> Result<(), CoTuLenhError> {
  state.put(sq, piece).map_err(|err| match err {
    CoTuLenhError::IllegalPlacement { .. } => fen_error(FenErrorReason::TwoCommandersSameColor),
    other => other,
  })
}

fn parse_deploy_suffix(suffix: &str, turn: Color) -> Result<DeploySession, CoTuLenhError> {
  let rest = suffix.strip_prefix("D:").ok_or_else(|| fen_error(FenErrorReason::InvalidDeploySuffix))?;
  let open = rest.find('[').ok_or_else(|| fen_error(FenErrorReason::InvalidDeploySuffix))?;
  let close = rest.find(']').ok_or_else(|| fen_error(FenErrorReason::InvalidDeploySuffix))?;
  if close < open {
    return Err(fen_error(FenErrorReason::InvalidDeploySuffix));
  }

  let stack_square =
    Square::from_algebraic(&rest[..open]).ok_or_else(|| fen_error(FenErrorReason::InvalidDeploySuffix))?;
  let deploy_list = &rest[open + 1..close];
  let stay_list = rest[close + 1..].strip_prefix('/').unwrap_or("");

  let mut virtual_overlay = BTreeMap::new();
  virtual_overlay.insert(stack_square, None);

  let mut moved_pieces = Vec::new();
  if !deploy_list.is_empty() {
    for entry in deploy_list.split(',') {
      let colon = entry.find(':').ok_or_else(|| fen_error(FenErrorReason::InvalidDeploySuffix))?;
      let sq = Square::from_algebraic(&entry[..colon]).ok_or_else(|| fen_error(FenErrorReason::InvalidDeploySuffix))?;
      let mut chars = entry[colon + 1..].chars().peekable();
      let piece = parse_piece(&mut chars)?;
      virtual_overlay.insert(sq, Some(piece.clone()));
      moved_pieces.push((sq, piece));
    }
  }

  let mut stay_pieces = Vec::new();
  if !stay_list.is_empty() {
    for entry in stay_list.split(',') {
      let mut chars = entry.chars().peekable();
      stay_pieces.push(parse_piece(&mut chars)?);
    }
  }
  if !stay_pieces.is_empty() {
    let remaining = stacker::combine(&stay_pieces).map_err(|_| fen_error(FenErrorReason::InvalidDeploySuffix))?;
    virtual_overlay.insert(stack_square, Some(remaining));
  }

  let mut original_components: Vec<Piece> = stay_pieces.clone();
  original_components.extend(moved_pieces.iter().map(|(_, p)| p.clone()));
  if original_components.is_empty() {
    return Err(fen_error(FenErrorReason::InvalidDeploySuffix));
  }
  let original_piece = stacker::combine(&original_components)
    .unwrap_or_else(|_| original_components[0].clone());

  Ok(DeploySession { stack_square, turn, original_piece, moved_pieces, stay_pieces, virtual_overlay })
}

/// Parses a full FEN string into a [`GameState`], per the bit-exact
/// grammar in the distilled brief's §6.
pub fn parse(fen: &str) -> Result<GameState, CoTuLenhError> {
  let mut parts = fen.split_whitespace();
  let board_str = parts.next().ok_or_else(|| fen_error(FenErrorReason::WrongFieldCount))?;
  let turn_str = parts.next().ok_or_else(|| fen_error(FenErrorReason::WrongFieldCount))?;
  let dash1 = parts.next().ok_or_else(|| fen_error(FenErrorReason::WrongFieldCount))?;
  let dash2 = parts.next().ok_or_else(|| fen_error(FenErrorReason::WrongFieldCount))?;
  let halfmoves_str = parts.next().ok_or_else(|| fen_error(FenErrorReason::WrongFieldCount))?;
  let fullmove_str = parts.next().ok_or_else(|| fen_error(FenErrorReason::WrongFieldCount))?;
  let deploy_suffix = parts.next();
  if parts.next().is_some() {
    return Err(fen_error(FenErrorReason::WrongFieldCount));
  }
  if dash1 != "-" || dash2 != "-" {
    return Err(fen_error(FenErrorReason::WrongFieldCount));
  }

  let ranks: Vec<&str> = board_str.split('/').collect();
  if ranks.len() != RANKS as usize {
    return Err(fen_error(FenErrorReason::InvalidRankCount));
  }

  let mut state = GameState::empty();
  for (rank_idx, rank_str) in ranks.iter().enumerate() {
    parse_rank(rank_str, rank_idx as u8, &mut state)?;
  }

  state.turn = match turn_str {
    "r" => Color::Red,
    "b" => Color::Blue,
    _ => return Err(fen_error(FenErrorReason::InvalidTurnChar)),
  };

  state.halfmove_clock =
    halfmoves_str.parse().map_err(|_| fen_error(FenErrorReason::InvalidHalfmoveClock))?;
  let fullmove: u32 = fullmove_str.parse().map_err(|_| fen_error(FenErrorReason::InvalidFullmoveNumber))?;
  if fullmove == 0 {
    return Err(fen_error(FenErrorReason::InvalidFullmoveNumber));
  }
  state.fullmove_number = fullmove;

  if state.commander_square(Color::Red).is_none() || state.commander_square(Color::Blue).is_none() {
    return Err(fen_error(FenErrorReason::MissingCommander));
  }

  if let Some(suffix) = deploy_suffix {
    state.deploy = Some(parse_deploy_suffix(suffix, state.turn)?);
  }

  state.note_repetition();
  Ok(state)
}

fn piece_to_fen(piece: &Piece) -> String {
  let mut out = String::new();
  if piece.heroic {
    out.push('+');
  }
  out.push(piece.symbol());
  out
}

fn square_piece_to_fen(piece: &Piece) -> String {
  if piece.carrying.is_empty() {
    return piece_to_fen(piece);
  }
  let mut out = String::new();
  out.push('(');
  out.push_str(&piece_to_fen(piece));
  for sub in &piece.carrying {
    out.push_str(&piece_to_fen(sub));
  }
  out.push(')');
  out
}

fn rank_to_fen(state: &GameState, rank: u8) -> String {
  let mut out = String::new();
  let mut empty_run = 0u32;
  for file in 0..FILES {
    let sq = Square::new(file, rank).expect("file within board bounds");
    match state.get_base(sq) {
      None => empty_run += 1,
      Some(piece) => {
        if empty_run > 0 {
          let _ = write!(out, "{empty_run}");
          empty_run = 0;
        }
        out.push_str(&square_piece_to_fen(piece));
      }
    }
  }
  if empty_run > 0 {
    let _ = write!(out, "{empty_run}");
  }
  out
}

fn board_to_fen(state: &GameState) -> String {
  let mut out = String::new();
  for rank in 0..RANKS {
    if rank > 0 {
      out.push('/');
    }
    out.push_str(&rank_to_fen(state, rank));
  }
  out
}

fn deploy_suffix_to_fen(session: &DeploySession) -> String {
  let mut out = String::new();
  out.push_str("D:");
  out.push_str(&session.stack_square.to_algebraic());
  out.push('[');
  for (i, (sq, piece)) in session.moved_pieces.iter().enumerate() {
    if i > 0 {
      out.push(',');
    }
    out.push_str(&sq.to_algebraic());
    out.push(':');
    out.push_str(&piece_to_fen(piece));
  }
  out.push(']');
  if !session.stay_pieces.is_empty() {
    out.push('/');
    for (i, piece) in session.stay_pieces.iter().enumerate() {
      if i > 0 {
        out.push(',');
      }
      out.push_str(&piece_to_fen(piece));
    }
  }
  out
}

/// Full FEN: board, turn, the two literal dash fields, clocks, and the
/// deploy suffix if a session is Active.
pub fn to_fen(state: &GameState) -> String {
  let turn_char = match state.turn {
    Color::Red => 'r',
    Color::Blue => 'b',
  };
  let mut out = alloc::format!(
    "{} {} - - {} {}",
    board_to_fen(state),
    turn_char,
    state.halfmove_clock,
    state.fullmove_number
  );
  if let Some(session) = &state.deploy {
    out.push(' ');
    out.push_str(&deploy_suffix_to_fen(session));
  }
  out
}

/// Canonical repetition/cache key: board, turn, and deploy suffix only,
/// excluding the half-move clock and full-move number, per the distilled
/// brief's third Open Question.
pub fn to_fen_board_turn_deploy(state: &GameState) -> String {
  let turn_char = match state.turn {
    Color::Red => 'r',
    Color::Blue => 'b',
  };
  let mut out = alloc::format!("{} {}", board_to_fen(state), turn_char);
  if let Some(session) = &state.deploy {
    out.push(' ');
    out.push_str(&deploy_suffix_to_fen(session));
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn starting_fen_parses_with_both_commanders_present() {
    let state = parse(STARTING_FEN).unwrap();
    assert!(state.commander_square(Color::Red).is_some());
    assert!(state.commander_square(Color::Blue).is_some());
    assert_eq!(state.turn, Color::Red);
  }

  #[test]
  fn empty_fen_round_trips() {
    let state = parse(EMPTY_FEN).unwrap();
    assert_eq!(to_fen(&state), EMPTY_FEN);
  }

  #[test]
  fn starting_fen_round_trips() {
    let state = parse(STARTING_FEN).unwrap();
    assert_eq!(to_fen(&state), STARTING_FEN);
  }

  #[test]
  fn missing_commander_is_rejected() {
    let err = parse(EMPTY_FEN).unwrap();
    assert!(err.commander_square(Color::Red).is_none());
    let bad = "11/11/11/11/11/11/11/11/11/11/11/6C4 r - - 0 1";
    let result = parse(bad);
    assert!(matches!(
      result.unwrap_err(),
      CoTuLenhError::InvalidFen { reason: FenErrorReason::MissingCommander, .. }
    ));
  }

  #[test]
  fn wrong_rank_count_is_rejected() {
    let bad = "11/11/11 r - - 0 1";
    assert!(matches!(
      parse(bad).unwrap_err(),
      CoTuLenhError::InvalidFen { reason: FenErrorReason::InvalidRankCount, .. }
    ));
  }

  #[test]
  fn stack_round_trips_through_fen() {
    let fen = "6c4/1n2fh1hf2/3a2s2a1/2n1gt1tg2/2ie2m2ei/11/5(TF)5/2IE2M2EI/2N1GT1TG2/3A2S2A1/1N2FH1HF2/6C4 r - - 0 1";
    let state = parse(fen).unwrap();
    let stack_sq = Square::from_algebraic("f6").unwrap();
    let piece = state.get_base(stack_sq).unwrap();
    assert_eq!(piece.role, PieceRole::Tank);
    assert_eq!(piece.carrying.len(), 1);
    assert_eq!(piece.carrying[0].role, PieceRole::AirForce);
    assert_eq!(to_fen(&state), fen);
  }

  #[test]
  fn deploy_suffix_round_trips() {
    let fen =
      "6c4/1n2fh1hf2/3a2s2a1/2n1gt1tg2/2ie2m2ei/11/5(TF)5/2IE2M2EI/2N1GT1TG2/3A2S2A1/1N2FH1HF2/6C4 r - - 0 1 D:f6[f8:T]/F";
    let state = parse(fen).unwrap();
    let session = state.deploy.as_ref().unwrap();
    assert_eq!(session.stack_square, Square::from_algebraic("f6").unwrap());
    assert_eq!(session.moved_pieces.len(), 1);
    assert_eq!(session.stay_pieces.len(), 1);
    assert_eq!(to_fen(&state), fen);
  }
}

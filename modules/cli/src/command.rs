/*
 * This file is dual-licensed under the terms of the GNU Lesser General Public License,
 * Version 3 or later, and the BSD 3-Clause License.
 *
 * You are free to use this software under the terms of either licence.
 * See the `LICENCE-LGPL-3.0-or-later.md` and `LICENCE-BSD-3-Clause.md`
 * files in this repository for the full text of each licence.
 *
 * If the files have not been provided, you can find the full text of the licences at:
 * LGPL-3.0-or-later: https://opensource.org/license/lgpl-3-0
 * BSD-3-Clause: https://opensource.org/license/bsd-3-clause
 *
 * Copyright (C) 2025 Clifton Toaster Reid
 */

//! Commands sent from a caller (REPL, test harness, GUI) to the engine,
//! generalizing the reference UCI command set's token-based `FromStr`
//! parsing style to CoTuLenh's facade operations. Where the reference
//! parser recognizes `uci`/`go`/`ponderhit`/... this one recognizes
//! `position`/`move`/`deploy`/`commit`/`moves`/`undo`/`get`/`put`/`remove`/
//! `history`/`airdefense`/`isready`/`quit`.

use std::str::FromStr;

use cotulenh_core::{Color, Piece, PieceRole, Square};

use crate::error::CliError;

/// Either a starting position or an explicit FEN string, mirroring the
/// reference `PositionType::{StartPos, Fen}` split.
#[derive(Debug, Clone)]
pub enum PositionSpec {
  StartPos,
  Fen(String),
}

/// Commands recognized by the CoTuLenh text protocol.
#[derive(Debug, Clone)]
pub enum EngineCommand {
  /// Synchronize with the caller; always answered with `readyok`.
  IsReady,

  /// Set up a position, optionally starting an active session from it.
  Position { position: PositionSpec },

  /// Play a SAN-like move string against the current position.
  Move { san: String },

  /// Play one step of a deploy session.
  Deploy { from: Square, to: Square, role: PieceRole, stay: bool },

  /// Close out the active deploy session.
  Commit,

  /// List legal moves, optionally filtered by origin square and/or role.
  Moves { square: Option<Square>, role: Option<PieceRole> },

  /// Undo the last played move.
  Undo,

  /// Inspect the piece at a square, optionally digging into a stack.
  Get { square: Square, role: Option<PieceRole> },

  /// Place a piece at a square, optionally combining it into a stack.
  Put { piece: Piece, square: Square, combine: bool },

  /// Remove whatever occupies a square.
  Remove { square: Square },

  /// List played moves.
  History,

  /// List squares covered by a color's air defense.
  AirDefense { color: Color },

  /// Shut the session down.
  Quit,
}

fn parse_square(token: &str) -> Result<Square, CliError> {
  Square::from_algebraic(token).ok_or_else(|| CliError::Parser(format!("not a square: {token}")))
}

fn parse_role(token: &str) -> Result<PieceRole, CliError> {
  let ch = token.chars().next().ok_or_else(|| CliError::Parser("empty role".to_string()))?;
  PieceRole::from_symbol(ch).ok_or_else(|| CliError::Parser(format!("not a piece role: {token}")))
}

fn parse_color(token: &str) -> Result<Color, CliError> {
  match token {
    "r" | "red" => Ok(Color::Red),
    "b" | "blue" => Ok(Color::Blue),
    other => Err(CliError::Parser(format!("not a color: {other}"))),
  }
}

/// Parses `symbol@square` notation used by the `put` command, e.g. `T@d5`
/// for a Red tank, `+n@f7` for a heroic Blue navy.
fn parse_piece_at(token: &str) -> Result<(Piece, Square), CliError> {
  let (piece_part, square_part) =
    token.split_once('@').ok_or_else(|| CliError::Parser(format!("expected symbol@square, got {token}")))?;
  let heroic = piece_part.starts_with('+');
  let symbol_str = piece_part.trim_start_matches('+');
  let ch = symbol_str
    .chars()
    .next()
    .ok_or_else(|| CliError::Parser("empty piece symbol".to_string()))?;
  let role = PieceRole::from_symbol(ch).ok_or_else(|| CliError::Parser(format!("not a piece symbol: {symbol_str}")))?;
  let color = if ch.is_ascii_uppercase() { Color::Red } else { Color::Blue };
  let mut piece = Piece::new(role, color);
  piece.heroic = heroic;
  let square = parse_square(square_part)?;
  Ok((piece, square))
}

impl FromStr for EngineCommand {
  type Err = CliError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let args = s.split_whitespace().collect::<Vec<_>>();

    if args.is_empty() {
      return Err(CliError::Parser("empty command".to_string()));
    }

    match args[0] {
      "isready" => Ok(EngineCommand::IsReady),
      "quit" => Ok(EngineCommand::Quit),
      "commit" => Ok(EngineCommand::Commit),
      "undo" => Ok(EngineCommand::Undo),
      "history" => Ok(EngineCommand::History),

      "position" => {
        if args.len() < 2 {
          return Err(CliError::Parser("position requires startpos or fen ...".to_string()));
        }
        let position = match args[1] {
          "startpos" => PositionSpec::StartPos,
          "fen" => {
            if args.len() < 3 {
              return Err(CliError::Parser("position fen requires a FEN string".to_string()));
            }
            PositionSpec::Fen(args[2..].join(" "))
          }
          other => return Err(CliError::Parser(format!("unknown position kind: {other}"))),
        };
        Ok(EngineCommand::Position { position })
      }

      "move" => {
        if args.len() != 2 {
          return Err(CliError::Parser("move requires exactly one SAN-like token".to_string()));
        }
        Ok(EngineCommand::Move { san: args[1].to_string() })
      }

      "deploy" => {
        if args.len() != 4 && args.len() != 3 {
          return Err(CliError::Parser("deploy requires <role> <from> <to> or <role> <from> stay".to_string()));
        }
        let role = parse_role(args[1])?;
        let from = parse_square(args[2])?;
        if args.len() == 3 {
          return Ok(EngineCommand::Deploy { from, to: from, role, stay: true });
        }
        if args[3] == "stay" {
          return Ok(EngineCommand::Deploy { from, to: from, role, stay: true });
        }
        let to = parse_square(args[3])?;
        Ok(EngineCommand::Deploy { from, to, role, stay: false })
      }

      "moves" => {
        let mut square = None;
        let mut role = None;
        for token in &args[1..] {
          if let Ok(sq) = parse_square(token) {
            square = Some(sq);
          } else {
            role = Some(parse_role(token)?);
          }
        }
        Ok(EngineCommand::Moves { square, role })
      }

      "get" => {
        if args.len() < 2 || args.len() > 3 {
          return Err(CliError::Parser("get requires <square> [role]".to_string()));
        }
        let square = parse_square(args[1])?;
        let role = if args.len() == 3 { Some(parse_role(args[2])?) } else { None };
        Ok(EngineCommand::Get { square, role })
      }

      "put" => {
        if args.len() < 2 || args.len() > 3 {
          return Err(CliError::Parser("put requires <symbol@square> [combine]".to_string()));
        }
        let (piece, square) = parse_piece_at(args[1])?;
        let combine = args.get(2).is_some_and(|tok| *tok == "combine");
        Ok(EngineCommand::Put { piece, square, combine })
      }

      "remove" => {
        if args.len() != 2 {
          return Err(CliError::Parser("remove requires <square>".to_string()));
        }
        Ok(EngineCommand::Remove { square: parse_square(args[1])? })
      }

      "airdefense" => {
        if args.len() != 2 {
          return Err(CliError::Parser("airdefense requires <color>".to_string()));
        }
        Ok(EngineCommand::AirDefense { color: parse_color(args[1])? })
      }

      other => Err(CliError::Parser(format!("unknown command: {other}"))),
    }
  }
}

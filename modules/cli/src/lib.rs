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

//! Text-command frontend over [`cotulenh_core::Engine`], generalizing the
//! reference workspace's UCI frontend crate to CoTuLenh's facade
//! operations. `command` parses caller input, `response` formats engine
//! output, `error` wraps the core crate's error taxonomy for `?`-friendly
//! callers, and `config` holds presentation settings read from the
//! environment and CLI flags.

pub mod command;
pub mod config;
pub mod error;
pub mod response;

pub use command::{EngineCommand, PositionSpec};
pub use config::{Config, GlyphSet};
pub use error::CliError;
pub use response::EngineResponse;

use cotulenh_core::facade::MovesQuery;
use cotulenh_core::Engine;

fn piece_label(piece: &cotulenh_core::Piece) -> String {
  let mut label = String::new();
  if piece.heroic {
    label.push('+');
  }
  label.push(piece.symbol());
  for carried in &piece.carrying {
    label.push('(');
    label.push(carried.symbol());
    label.push(')');
  }
  label
}

/// Executes one parsed command against `engine`, returning the response to
/// print or an error carrying the exit code the binary frontend should use.
///
/// `EngineCommand::Quit` is handled by the caller (it owns the REPL loop);
/// reaching it here still yields a response so the caller can print a
/// farewell line before exiting.
pub fn execute(engine: &mut Engine, cmd: EngineCommand) -> Result<EngineResponse, CliError> {
  #[cfg(feature = "logging")]
  log::debug!("executing command: {cmd:?}");

  match cmd {
    EngineCommand::IsReady => Ok(EngineResponse::ReadyOk),

    EngineCommand::Quit => Ok(EngineResponse::Bye),

    EngineCommand::Position { position } => {
      let fen = match position {
        PositionSpec::StartPos => None,
        PositionSpec::Fen(text) => Some(text),
      };
      *engine = Engine::new(fen.as_deref())?;
      Ok(EngineResponse::Fen(engine.fen()))
    }

    EngineCommand::Move { san } => {
      engine.play(&san).map_err(|err| {
        #[cfg(feature = "logging")]
        log::warn!("rejected illegal move {san}: {err}");
        err
      })?;
      Ok(EngineResponse::Moved(san))
    }

    EngineCommand::Deploy { from, to, role, stay } => {
      engine.deploy_step(from, to, role, stay).map_err(|err| {
        #[cfg(feature = "logging")]
        log::warn!("rejected illegal deploy step: {err}");
        err
      })?;
      Ok(EngineResponse::Moved(format!("{}{}{}", role.symbol(), from.to_algebraic(), to.to_algebraic())))
    }

    EngineCommand::Commit => {
      engine.commit_deploy()?;
      Ok(EngineResponse::Committed)
    }

    EngineCommand::Moves { square, role } => {
      let descriptors = engine.moves(MovesQuery { square, role }, true);
      Ok(EngineResponse::MoveList(descriptors.into_iter().map(|d| d.san).collect()))
    }

    EngineCommand::Undo => {
      engine.undo()?;
      Ok(EngineResponse::Undone)
    }

    EngineCommand::Get { square, role } => {
      let found = engine.get(square, role);
      Ok(EngineResponse::Got(found.map(|p| piece_label(&p))))
    }

    EngineCommand::Put { piece, square, combine } => {
      engine.put(piece, square, combine)?;
      Ok(EngineResponse::Fen(engine.fen()))
    }

    EngineCommand::Remove { square } => {
      let removed = engine.remove(square);
      Ok(EngineResponse::Removed(removed.map(|p| piece_label(&p))))
    }

    EngineCommand::History => {
      let records = engine.history(true);
      Ok(EngineResponse::History(records.into_iter().map(|r| r.san).collect()))
    }

    EngineCommand::AirDefense { color } => Ok(EngineResponse::AirDefense(engine.get_air_defense(color))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use cotulenh_core::{Color, Piece, PieceRole, Square};

  #[test]
  fn isready_answers_readyok() {
    let mut engine = Engine::new(None).unwrap();
    let resp = execute(&mut engine, EngineCommand::IsReady).unwrap();
    assert_eq!(resp.to_string(), "readyok");
  }

  #[test]
  fn position_startpos_resets_to_default_fen() {
    let mut engine = Engine::new(None).unwrap();
    let resp = execute(&mut engine, EngineCommand::Position { position: PositionSpec::StartPos }).unwrap();
    match resp {
      EngineResponse::Fen(fen) => assert_eq!(fen, engine.fen()),
      _ => panic!("expected fen response"),
    }
  }

  #[test]
  fn get_on_empty_square_returns_none() {
    let mut engine = Engine::new(None).unwrap();
    let sq = Square::from_algebraic("f6").unwrap();
    let resp = execute(&mut engine, EngineCommand::Get { square: sq, role: None }).unwrap();
    assert_eq!(resp.to_string(), "piece none");
  }

  #[test]
  fn put_then_get_round_trips() {
    let mut engine = Engine::new(Some("11/11/11/11/11/11/11/11/11/11/11/11 r - - 0 1")).unwrap();
    let sq = Square::from_algebraic("d5").unwrap();
    execute(&mut engine, EngineCommand::Put { piece: Piece::new(PieceRole::Tank, Color::Red), square: sq, combine: false }).unwrap();
    let resp = execute(&mut engine, EngineCommand::Get { square: sq, role: None }).unwrap();
    assert_eq!(resp.to_string(), "piece T");
  }

  #[test]
  fn illegal_move_surfaces_as_error_with_exit_code_two() {
    let mut engine = Engine::new(None).unwrap();
    let err = execute(&mut engine, EngineCommand::Move { san: "z9z9".to_string() }).unwrap_err();
    assert_eq!(err.exit_code(), 2);
  }
}

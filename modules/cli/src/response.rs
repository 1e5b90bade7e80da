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

//! Responses sent back to the caller, generalizing the reference
//! `EngineToGuiCommand`'s `Display` formatting style (one line of plain text
//! per response kind) to CoTuLenh's facade outputs. Unlike the reference
//! enum, there is no `BestMove`/`Info`/search-score family here: CoTuLenh has
//! no AI search to report progress for.

use core::fmt;

use cotulenh_core::Square;

/// One outcome of executing an [`crate::command::EngineCommand`].
#[derive(Debug, Clone)]
pub enum EngineResponse {
  ReadyOk,
  Fen(String),
  MoveList(Vec<String>),
  Moved(String),
  Committed,
  Undone,
  Got(Option<String>),
  Removed(Option<String>),
  History(Vec<String>),
  AirDefense(Vec<Square>),
  Bye,
}

impl fmt::Display for EngineResponse {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      EngineResponse::ReadyOk => write!(f, "readyok"),
      EngineResponse::Fen(fen) => write!(f, "fen {fen}"),
      EngineResponse::MoveList(moves) => {
        write!(f, "moves")?;
        for m in moves {
          write!(f, " {m}")?;
        }
        Ok(())
      }
      EngineResponse::Moved(san) => write!(f, "played {san}"),
      EngineResponse::Committed => write!(f, "committed"),
      EngineResponse::Undone => write!(f, "undone"),
      EngineResponse::Got(Some(piece)) => write!(f, "piece {piece}"),
      EngineResponse::Got(None) => write!(f, "piece none"),
      EngineResponse::Removed(Some(piece)) => write!(f, "removed {piece}"),
      EngineResponse::Removed(None) => write!(f, "removed none"),
      EngineResponse::History(entries) => {
        write!(f, "history")?;
        for e in entries {
          write!(f, " {e}")?;
        }
        Ok(())
      }
      EngineResponse::AirDefense(squares) => {
        write!(f, "airdefense")?;
        for sq in squares {
          write!(f, " {}", sq.to_algebraic())?;
        }
        Ok(())
      }
      EngineResponse::Bye => write!(f, "bye"),
    }
  }
}

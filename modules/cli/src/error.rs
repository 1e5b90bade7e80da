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

use cotulenh_core::CoTuLenhError;
use thiserror::Error;

/// Frontend-level error, wrapping the core crate's closed taxonomy the same
/// way the reference `UciError` wraps `MoveParseError`.
#[derive(Debug, Error)]
pub enum CliError {
  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),

  #[error("parser error: {0}")]
  Parser(String),

  #[error(transparent)]
  Engine(#[from] CoTuLenhError),
}

impl CliError {
  /// Maps this error onto the binary frontend's `0/1/2/3/4` exit taxonomy.
  pub fn exit_code(&self) -> i32 {
    match self {
      CliError::Io(_) | CliError::Parser(_) => 4,
      CliError::Engine(CoTuLenhError::InvalidFen { .. }) => 1,
      CliError::Engine(CoTuLenhError::IllegalMove { .. }) => 2,
      CliError::Engine(CoTuLenhError::AmbiguousMove { .. }) => 3,
      CliError::Engine(
        CoTuLenhError::IllegalPlacement { .. }
        | CoTuLenhError::StackError { .. }
        | CoTuLenhError::DeployError { .. }
        | CoTuLenhError::InvariantViolation { .. },
      ) => 4,
    }
  }
}

//! Read-eval-print loop over the CoTuLenh text command protocol.
//!
//! Reads one command per line from stdin, dispatches it through
//! `cotulenh_cli::execute`, and prints the response to stdout. A command
//! that fails ends the process immediately with the exit code its error
//! maps to (`0` success, `1` invalid FEN, `2` illegal move, `3` ambiguous
//! move, `4` internal invariant violation), so a calling harness can
//! script a sequence of commands and read the outcome off the exit code.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use cotulenh_cli::{execute, Config, EngineCommand};
use cotulenh_core::Engine;

fn main() -> ExitCode {
  #[cfg(feature = "logging")]
  env_logger::init();

  let config = Config::from_env_and_args(std::env::args().skip(1));
  let mut engine = match Engine::new(config.starting_fen.as_deref()) {
    Ok(engine) => engine,
    Err(err) => {
      eprintln!("error: {err}");
      return ExitCode::from(1);
    }
  };

  let stdin = io::stdin();
  let mut stdout = io::stdout();

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(line) => line,
      Err(err) => {
        eprintln!("error: {err}");
        return ExitCode::from(4);
      }
    };
    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let command = match trimmed.parse::<EngineCommand>() {
      Ok(command) => command,
      Err(err) => {
        eprintln!("error: {err}");
        return ExitCode::from(err.exit_code() as u8);
      }
    };

    let quitting = matches!(command, EngineCommand::Quit);

    match execute(&mut engine, command) {
      Ok(response) => {
        let _ = writeln!(stdout, "{response}");
        if quitting {
          return ExitCode::SUCCESS;
        }
      }
      Err(err) => {
        eprintln!("error: {err}");
        return ExitCode::from(err.exit_code() as u8);
      }
    }
  }

  ExitCode::SUCCESS
}

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

//! Presentation configuration, generalizing the reference binary's single
//! `PIECE_TYPE` environment knob (ascii/unicode board glyphs) into a small
//! struct covering glyph set, color, and a starting-FEN override. Read once
//! at process start from the environment, with CLI flags taking precedence.

use std::env;

/// Board glyph set used when rendering a position for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphSet {
  Ascii,
  Unicode,
}

#[derive(Debug, Clone)]
pub struct Config {
  pub glyphs: GlyphSet,
  pub color: bool,
  pub starting_fen: Option<String>,
}

impl Config {
  /// Reads defaults from the environment, then lets `args` (already split
  /// command-line tokens, excluding argv[0]) override them. Recognized
  /// flags: `--unicode`, `--ascii`, `--color`, `--no-color`.
  pub fn from_env_and_args<I, S>(args: I) -> Config
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut config = Config::from_env();
    for token in args {
      match token.as_ref() {
        "--unicode" => config.glyphs = GlyphSet::Unicode,
        "--ascii" => config.glyphs = GlyphSet::Ascii,
        "--color" => config.color = true,
        "--no-color" => config.color = false,
        _ => {}
      }
    }
    config
  }

  fn from_env() -> Config {
    let glyphs = match env::var("PIECE_TYPE").unwrap_or_else(|_| "ascii".into()).as_str() {
      "unicode" => GlyphSet::Unicode,
      _ => GlyphSet::Ascii,
    };
    let color = env::var("COTULENH_COLOR").map(|v| v != "0").unwrap_or(false);
    let starting_fen = env::var("COTULENH_FEN").ok();
    Config { glyphs, color, starting_fen }
  }
}

impl Default for Config {
  fn default() -> Config {
    Config { glyphs: GlyphSet::Ascii, color: false, starting_fen: None }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cli_flags_override_defaults() {
    let config = Config::from_env_and_args(["--unicode", "--color"]);
    assert_eq!(config.glyphs, GlyphSet::Unicode);
    assert!(config.color);
  }

  #[test]
  fn default_is_ascii_no_color() {
    let config = Config::default();
    assert_eq!(config.glyphs, GlyphSet::Ascii);
    assert!(!config.color);
    assert!(config.starting_fen.is_none());
  }
}

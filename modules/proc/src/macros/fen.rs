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

/// Compile-time-literal, runtime-parsed FEN: `fen!("...")` builds a
/// `GameState` from a string literal, panicking at the call site if the
/// literal does not parse.
///
/// Unlike `sq!`, this can't validate the FEN in a `const` context — the
/// parser allocates and CoTuLenh's FEN grammar (stacked pieces, the deploy
/// suffix) isn't worth hand-duplicating as `const fn` logic just to move a
/// panic from runtime to compile time. The literal is still required, so a
/// typo is caught the first time the line runs.
///
/// # Examples
///
/// ```rust
/// use cotulenh_proc::fen;
///
/// let start = fen!("6c4/1n2fh1hf2/3a2s2a1/2n1gt1tg2/2ie2m2ei/11/11/2IE2M2EI/2N1GT1TG2/3A2S2A1/1N2FH1HF2/6C4 r - - 0 1");
/// assert_eq!(start.turn, cotulenh_core::Color::Red);
/// assert_eq!(start.halfmove_clock, 0);
/// assert_eq!(start.fullmove_number, 1);
/// ```
///
/// # Panics
///
/// Panics if the literal does not parse as a valid CoTuLenh FEN.
#[macro_export]
macro_rules! fen {
  ($fen_str:literal) => {{
    match cotulenh_core::fen::parse($fen_str) {
      Ok(state) => state,
      Err(e) => panic!("invalid fen! literal {:?}: {:?}", $fen_str, e),
    }
  }};
}

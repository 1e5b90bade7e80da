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

#[cfg(test)]
mod tests {
  use cotulenh_core::model::gamestate::GameState;
  use cotulenh_core::Color;
  use cotulenh_proc::{fen, sq};

  #[test]
  fn test_fen_macro_starting_position() {
    let start: GameState = fen!(
      "6c4/1n2fh1hf2/3a2s2a1/2n1gt1tg2/2ie2m2ei/11/11/2IE2M2EI/2N1GT1TG2/3A2S2A1/1N2FH1HF2/6C4 r - - 0 1"
    );

    assert_eq!(start.turn, Color::Red);
    assert_eq!(start.halfmove_clock, 0);
    assert_eq!(start.fullmove_number, 1);
  }

  #[test]
  fn test_fen_macro_blue_to_move() {
    let mid: GameState = fen!(
      "6c4/1n2fh1hf2/3a2s2a1/2n1gt1tg2/2ie2m2ei/11/11/2IE2M2EI/2N1GT1TG2/3A2S2A1/1N2FH1HF2/6C4 b - - 3 5"
    );

    assert_eq!(mid.turn, Color::Blue);
    assert_eq!(mid.halfmove_clock, 3);
    assert_eq!(mid.fullmove_number, 5);
  }

  #[test]
  #[should_panic(expected = "invalid fen! literal")]
  fn test_fen_macro_empty_board_has_no_commanders() {
    // EMPTY_FEN has no commander on either side, which fen::parse rejects.
    let _ = fen!("11/11/11/11/11/11/11/11/11/11/11/11 r - - 0 1");
  }

  #[test]
  fn test_sq_macro_matches_manual_algebraic_parse() {
    use cotulenh_core::Square;

    let built = sq!("d5");
    let parsed = Square::from_algebraic("d5").unwrap();
    assert_eq!(built, parsed);
  }

  #[test]
  fn test_sq_macro_roundtrips_to_algebraic() {
    let a1 = sq!("a1");
    assert_eq!(a1.to_algebraic(), "a1");

    let k12 = sq!("k12");
    assert_eq!(k12.to_algebraic(), "k12");
  }
}

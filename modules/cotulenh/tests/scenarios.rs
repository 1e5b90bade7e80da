//! End-to-end scenarios exercising the public facade and, where a scenario
//! needs a board shape no single SAN move can set up, the lower-level
//! model/movegen/legal types directly. Each test is self-contained and
//! grounded on the unit-test style already used throughout `src/`.

use cotulenh_core::facade::Engine;
use cotulenh_core::legal::checker;
use cotulenh_core::model::gamestate::GameState;
use cotulenh_core::model::stacker;
use cotulenh_core::movegen;
use cotulenh_core::moves::Move;
use cotulenh_core::{Color, Piece, PieceRole, Square};

#[test]
fn legal_infantry_advance_flips_the_turn_and_moves_one_square() {
    let mut engine = Engine::new(None).unwrap();
    let before = engine.fen();

    engine.play("Ic6").unwrap();

    assert_eq!(engine.turn(), Color::Blue);
    assert!(!engine.is_check());
    let after = engine.fen();
    assert_ne!(after, before);

    let c5 = Square::from_algebraic("c5").unwrap();
    let c6 = Square::from_algebraic("c6").unwrap();
    assert!(engine.get(c5, None).is_none());
    assert_eq!(engine.get(c6, None).map(|p| p.role), Some(PieceRole::Infantry));
}

#[test]
fn stack_formation_by_combination_carries_the_joining_piece() {
    let mut state = GameState::empty();
    state.put(Square::from_algebraic("f1").unwrap(), Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    state.put(Square::from_algebraic("f12").unwrap(), Piece::new(PieceRole::Commander, Color::Blue)).unwrap();

    let tank_sq = Square::from_algebraic("d5").unwrap();
    let infantry_sq = Square::from_algebraic("d4").unwrap();
    state.put(tank_sq, Piece::new(PieceRole::Tank, Color::Red)).unwrap();
    state.put(infantry_sq, Piece::new(PieceRole::Infantry, Color::Red)).unwrap();

    let tank = state.get(tank_sq).unwrap().clone();
    let infantry = state.get(infantry_sq).unwrap().clone();
    let combined = stacker::combine(&[tank, infantry]).unwrap();
    assert_eq!(combined.role, PieceRole::Tank);
    assert_eq!(combined.carrying.len(), 1);
    assert_eq!(combined.carrying[0].role, PieceRole::Infantry);

    let mv = Move::Combination { from: infantry_sq, to: tank_sq, role: PieceRole::Infantry, result: combined.clone() };
    state.make_move(mv).unwrap();

    assert_eq!(state.get(tank_sq), Some(&combined));
    assert!(state.get(infantry_sq).is_none());
    assert_eq!(state.turn, Color::Blue);
}

/// A Tank-carrying-AirForce stack deploys its Tank sub-piece to capture a
/// heroic AntiAir that is cutting an AirForce flight path short via the
/// cumulative air-defense-crossing rule; once that defender is gone
/// mid-session, the AirForce sub-piece's own deploy candidates extend
/// past where they were cut off before the capture.
#[test]
fn deploy_step_that_captures_a_defender_clears_the_path_for_the_next_sub_piece() {
    let d5 = Square::from_algebraic("d5").unwrap();
    let d7 = Square::from_algebraic("d7").unwrap();
    let e6 = Square::from_algebraic("e6").unwrap();
    let f7 = Square::from_algebraic("f7").unwrap();
    let g8 = Square::from_algebraic("g8").unwrap();
    let h9 = Square::from_algebraic("h9").unwrap();

    let mut state = GameState::empty();
    let stack =
        stacker::combine(&[Piece::new(PieceRole::Tank, Color::Red), Piece::new(PieceRole::AirForce, Color::Red)])
            .unwrap();
    state.put(d5, stack).unwrap();

    let mut defender = Piece::new(PieceRole::AntiAir, Color::Blue);
    defender.heroic = true;
    state.put(d7, defender).unwrap();

    let before = movegen::generate_deploy_moves(&state, d5);
    let airforce_destinations_before: Vec<Square> =
        before.iter().filter(|m| m.role() == PieceRole::AirForce).map(|m| m.to_square()).collect();
    assert!(airforce_destinations_before.contains(&e6));
    assert!(!airforce_destinations_before.contains(&f7));
    assert!(!airforce_destinations_before.contains(&g8));
    assert!(!airforce_destinations_before.contains(&h9));

    let captured = state.get(d7).cloned().unwrap();
    state.make_move(Move::DeployStep { from: d5, to: d7, role: PieceRole::Tank, captured: Some(captured) }).unwrap();
    assert!(state.deploy.is_some());

    let after = movegen::generate_deploy_moves(&state, d5);
    let airforce_destinations_after: Vec<Square> =
        after.iter().filter(|m| m.role() == PieceRole::AirForce).map(|m| m.to_square()).collect();
    assert!(airforce_destinations_after.contains(&e6));
    assert!(airforce_destinations_after.contains(&f7));
    assert!(airforce_destinations_after.contains(&g8));
    assert!(airforce_destinations_after.contains(&h9));

    state.make_move(Move::DeployStep { from: d5, to: h9, role: PieceRole::AirForce, captured: None }).unwrap();
    state.commit_deploy().unwrap();

    assert!(state.deploy.is_none());
    assert_eq!(state.get_base(d7).map(|p| p.role), Some(PieceRole::Tank));
    assert_eq!(state.get_base(h9).map(|p| p.role), Some(PieceRole::AirForce));
    assert!(state.get_base(d5).is_none());
    assert_eq!(state.turn, Color::Blue);
}

#[test]
fn capturing_into_range_of_the_enemy_commander_grants_heroic_status() {
    let mut state = GameState::empty();
    state.put(Square::from_algebraic("a1").unwrap(), Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    state.put(Square::from_algebraic("e9").unwrap(), Piece::new(PieceRole::Commander, Color::Blue)).unwrap();

    let from = Square::from_algebraic("e5").unwrap();
    let to = Square::from_algebraic("e7").unwrap();
    state.put(from, Piece::new(PieceRole::Tank, Color::Red)).unwrap();
    state.put(to, Piece::new(PieceRole::Infantry, Color::Blue)).unwrap();

    let captured = state.get(to).cloned().unwrap();
    assert!(!captured.heroic);
    state.make_move(Move::Capture { from, to, role: PieceRole::Tank, captured }).unwrap();

    let promoted = state.get_base(to).expect("tank now sits on the captured square");
    assert_eq!(promoted.role, PieceRole::Tank);
    assert!(promoted.heroic, "tank now attacks the enemy commander at range 2 and should be promoted");
}

#[test]
fn a_move_that_would_expose_the_commander_to_a_discovered_attack_is_illegal() {
    let mut state = GameState::empty();
    let commander_sq = Square::from_algebraic("d5").unwrap();
    let blocker_sq = Square::from_algebraic("d6").unwrap();
    let tank_sq = Square::from_algebraic("d7").unwrap();
    state.put(commander_sq, Piece::new(PieceRole::Commander, Color::Red)).unwrap();
    state.put(blocker_sq, Piece::new(PieceRole::Engineer, Color::Red)).unwrap();
    state.put(tank_sq, Piece::new(PieceRole::Tank, Color::Blue)).unwrap();

    assert!(!checker::is_in_check(&state, Color::Red), "the engineer still blocks the tank's line");

    let sidestep = Move::Normal { from: blocker_sq, to: Square::from_algebraic("e6").unwrap(), role: PieceRole::Engineer };
    assert!(!checker::is_legal(&state, &sidestep).unwrap(), "stepping aside opens the tank's line onto the commander");
}

#[test]
fn a_threefold_repeated_position_is_a_draw() {
    let mut engine = Engine::new(None).unwrap();

    for _ in 0..2 {
        engine.play("Ed6").unwrap();
        engine.play("Ed7").unwrap();
        engine.play("Ed5").unwrap();
        engine.play("Ed8").unwrap();
    }

    assert!(!engine.is_check());
    assert!(engine.is_draw());
}

//! Turn engine scenario tests.
//!
//! These walk the engine through openings, jumps, wins, and rejected rolls
//! using scripted moves so every position is known.

use snake_ladder::board::{Cell, JumpKind, JumpTable};
use snake_ladder::core::{PlayerId, TurnState};
use snake_ladder::error::RollError;
use snake_ladder::rules::TurnEngine;

// =============================================================================
// Opening
// =============================================================================

/// A new game has both tokens on the start and player 1 to move.
#[test]
fn test_starting_state() {
    let engine = TurnEngine::new(JumpTable::standard());

    assert_eq!(engine.state(), TurnState::AwaitingRoll(PlayerId::ONE));
    for player in PlayerId::all() {
        assert_eq!(engine.position(player), Cell::START);
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.last_roll, None);
    assert_eq!(snapshot.winner, None);
    assert_eq!(snapshot.current_turn, PlayerId::ONE);
}

/// The 1 -> 38 ladder never fires: nobody lands on the start cell.
#[test]
fn test_start_ladder_is_unreachable() {
    let mut engine = TurnEngine::new(JumpTable::standard());

    for value in 1..=6 {
        let mut probe = engine.clone();
        let outcome = probe.apply_roll(value).unwrap();
        assert_ne!(outcome.record.landed, Cell::START);
    }

    engine.apply_roll(1).unwrap();
    assert_eq!(engine.position(PlayerId::ONE), Cell::new(2));
}

// =============================================================================
// Jumps
// =============================================================================

/// Player 1 moves 16 from the start, hits the snake on 17, and ends on 7.
#[test]
fn test_snake_scenario() {
    let mut engine = TurnEngine::new(JumpTable::standard());

    let outcome = engine.advance(16).unwrap();

    assert_eq!(outcome.record.from, Cell::START);
    assert_eq!(outcome.record.landed, Cell::new(17));
    assert_eq!(outcome.record.to, Cell::new(7));
    assert_eq!(outcome.record.jump, Some(JumpKind::Snake));
    assert_eq!(engine.position(PlayerId::ONE), Cell::new(7));
    assert_eq!(engine.state(), TurnState::AwaitingRoll(PlayerId::TWO));
}

/// Landing on a ladder foot whose top is plain stops at the top.
#[test]
fn test_ladder_takes_one_hop() {
    let mut engine = TurnEngine::new(JumpTable::standard());

    engine.advance(27).unwrap(); // P1: 28 -> 84
    assert_eq!(engine.position(PlayerId::ONE), Cell::new(84));

    engine.advance(79).unwrap(); // P2: 80 -> 99
    assert_eq!(engine.position(PlayerId::TWO), Cell::new(99));
    assert!(!engine.is_finished());
}

/// A custom table is honoured.
#[test]
fn test_custom_table() {
    let table = JumpTable::new(&[(10, 2)], &[(3, 90)]).unwrap();
    let mut engine = TurnEngine::new(table);

    engine.apply_roll(2).unwrap(); // P1: 3 -> 90
    engine.advance(9).unwrap(); // P2: 10 -> 2

    assert_eq!(engine.position(PlayerId::ONE), Cell::new(90));
    assert_eq!(engine.position(PlayerId::TWO), Cell::new(2));
}

// =============================================================================
// Winning
// =============================================================================

/// From 95, a 5 lands exactly on the goal and wins.
#[test]
fn test_exact_landing_wins() {
    // 95 is a snake head on the standard board, so reach it on a plain one
    let mut engine = TurnEngine::new(JumpTable::empty());
    engine.advance(94).unwrap();
    engine.apply_roll(1).unwrap();
    assert_eq!(engine.position(PlayerId::ONE), Cell::new(95));

    let outcome = engine.apply_roll(5).unwrap();

    assert_eq!(outcome.record.to, Cell::GOAL);
    assert_eq!(outcome.state, TurnState::Finished(PlayerId::ONE));
    assert_eq!(engine.winner(), Some(PlayerId::ONE));
}

/// From 97, a 6 overshoots, clamps to the goal, and still wins.
#[test]
fn test_overshoot_wins() {
    let mut engine = TurnEngine::new(JumpTable::standard());
    engine.apply_roll(1).unwrap(); // P1 -> 2
    engine.advance(96).unwrap(); // P2 -> 97

    engine.apply_roll(1).unwrap(); // P1 -> 3
    let outcome = engine.apply_roll(6).unwrap();

    assert_eq!(outcome.record.landed, Cell::GOAL);
    assert_eq!(outcome.winner(), Some(PlayerId::TWO));
    assert_eq!(engine.position(PlayerId::TWO), Cell::GOAL);
}

/// After a win, rolls are refused and nothing moves.
#[test]
fn test_rolls_after_win_are_rejected() {
    let mut engine = TurnEngine::new(JumpTable::standard());
    engine.advance(99).unwrap();
    let frozen = engine.snapshot();

    for value in 1..=6 {
        assert_eq!(
            engine.apply_roll(value),
            Err(RollError::GameOver { winner: PlayerId::ONE })
        );
    }

    assert_eq!(engine.snapshot(), frozen);
    assert_eq!(engine.position(PlayerId::TWO), Cell::START);
}

// =============================================================================
// History
// =============================================================================

/// Every applied roll is recorded in order; rejected ones are not.
#[test]
fn test_history_records_moves() {
    let mut engine = TurnEngine::new(JumpTable::standard());

    engine.apply_roll(3).unwrap();
    let _ = engine.apply_roll(9);
    engine.apply_roll(2).unwrap();

    let history = engine.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, PlayerId::ONE);
    assert_eq!(history[0].turn, 1);
    assert!(history[0].climbed_ladder());
    assert_eq!(history[1].player, PlayerId::TWO);
    assert_eq!(history[1].turn, 2);
    assert_eq!(history[1].to, Cell::new(3));
}

/// Snapshots taken earlier are unaffected by later moves.
#[test]
fn test_snapshots_are_independent() {
    let mut engine = TurnEngine::new(JumpTable::standard());
    engine.apply_roll(5).unwrap();
    let early = engine.snapshot();

    engine.apply_roll(5).unwrap();
    engine.apply_roll(5).unwrap();

    assert_eq!(early.history.len(), 1);
    assert_eq!(early.player_one(), Cell::new(6));
    assert_eq!(engine.snapshot().history.len(), 3);
}

//! Session and renderer integration tests.
//!
//! These drive complete games through `GameSession` the way an event loop
//! would: request a roll, then hand the snapshot to a renderer.

use std::convert::Infallible;
use std::sync::mpsc;
use std::thread;

use snake_ladder::board::{Cell, JumpTable};
use snake_ladder::core::{PlayerId, SessionConfig, Snapshot};
use snake_ladder::dice::{Die, ScriptedDice};
use snake_ladder::error::RollError;
use snake_ladder::render::{Renderer, TextRenderer};
use snake_ladder::session::GameSession;

/// Keeps every snapshot it is asked to draw.
#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<Snapshot>,
}

impl Renderer for RecordingRenderer {
    type Error = Infallible;

    fn render(&mut self, snapshot: &Snapshot) -> Result<(), Infallible> {
        self.frames.push(snapshot.clone());
        Ok(())
    }
}

const MAX_ROLLS: usize = 10_000;

fn play_out<R: Renderer>(session: &mut GameSession<Die>, renderer: &mut R) -> usize
where
    R::Error: std::fmt::Debug,
{
    let mut rolls = 0;
    while !session.is_finished() && rolls < MAX_ROLLS {
        session.request_roll().unwrap();
        renderer.render(&session.snapshot()).unwrap();
        rolls += 1;
    }
    rolls
}

// =============================================================================
// Full games
// =============================================================================

/// Seeded games always end with a winner standing on the goal.
#[test]
fn test_games_finish() {
    for seed in 0..50 {
        let mut session = GameSession::from_config(SessionConfig::default().with_seed(seed));
        let mut renderer = RecordingRenderer::default();

        let rolls = play_out(&mut session, &mut renderer);
        assert!(rolls < MAX_ROLLS, "seed {seed} did not finish");

        let last = renderer.frames.last().unwrap();
        let winner = last.winner.expect("finished game has a winner");
        assert_eq!(last.position(winner), Cell::GOAL);
        assert_ne!(last.position(winner.other()), Cell::GOAL);
        assert_eq!(last.history.len(), rolls);
    }
}

/// Every frame obeys the board invariants.
#[test]
fn test_frames_stay_on_board() {
    let mut session = GameSession::from_config(SessionConfig::default().with_seed(77));
    let mut renderer = RecordingRenderer::default();
    play_out(&mut session, &mut renderer);

    let table = JumpTable::standard();
    for frame in &renderer.frames {
        let roll = frame.last_roll.unwrap();
        assert!((1..=6).contains(&roll));

        for player in PlayerId::all() {
            // Tokens never rest on a jump entry (except the untouched start)
            let cell = frame.position(player);
            assert!(cell == Cell::START || table.jump_at(cell).is_none());
        }
    }
}

/// Turns alternate until someone wins.
#[test]
fn test_turns_alternate() {
    let mut session = GameSession::from_config(SessionConfig::default().with_seed(5));
    let mut renderer = RecordingRenderer::default();
    play_out(&mut session, &mut renderer);

    let history = &renderer.frames.last().unwrap().history;
    for (i, record) in history.iter().enumerate() {
        let expected = if i % 2 == 0 { PlayerId::ONE } else { PlayerId::TWO };
        assert_eq!(record.player, expected);
    }
}

/// The same seed replays the same game.
#[test]
fn test_seed_replays_game() {
    let config = SessionConfig::default().with_seed(31337);

    let mut first = GameSession::from_config(config.clone());
    let mut second = GameSession::from_config(config);
    play_out(&mut first, &mut RecordingRenderer::default());
    play_out(&mut second, &mut RecordingRenderer::default());

    assert_eq!(first.snapshot(), second.snapshot());
}

// =============================================================================
// Game over and restart
// =============================================================================

/// Requests after the win are refused without moving anything.
#[test]
fn test_requests_after_win() {
    let mut session = GameSession::with_dice(
        JumpTable::empty(),
        ScriptedDice::new([6]),
        SessionConfig::default(),
    );
    while !session.is_finished() {
        session.request_roll().unwrap();
    }
    let frozen = session.snapshot();

    assert_eq!(
        session.request_roll(),
        Err(RollError::GameOver { winner: PlayerId::ONE })
    );
    assert_eq!(session.snapshot(), frozen);
}

/// Restarting after a win gives a fresh, playable game.
#[test]
fn test_restart_after_win() {
    let mut session = GameSession::from_config(SessionConfig::default().with_seed(8));
    play_out(&mut session, &mut RecordingRenderer::default());
    assert!(session.is_finished());

    session.restart();

    assert!(!session.is_finished());
    assert_eq!(session.snapshot().player_one(), Cell::START);
    assert!(session.request_roll().is_ok());
}

// =============================================================================
// Rendering
// =============================================================================

/// Snapshots can be handed to a render thread.
#[test]
fn test_snapshot_handoff_to_render_thread() {
    let (tx, rx) = mpsc::channel::<Snapshot>();

    let render_thread = thread::spawn(move || {
        let mut renderer = TextRenderer::new(Vec::new(), JumpTable::standard());
        let mut frames = 0;
        for snapshot in rx {
            renderer.render(&snapshot).unwrap();
            frames += 1;
        }
        (frames, String::from_utf8(renderer.into_inner()).unwrap())
    });

    let mut session = GameSession::from_config(SessionConfig::default().with_seed(12));
    tx.send(session.snapshot()).unwrap();
    let mut rolls = 0;
    while !session.is_finished() {
        session.request_roll().unwrap();
        tx.send(session.snapshot()).unwrap();
        rolls += 1;
    }
    drop(tx);

    let (frames, text) = render_thread.join().unwrap();
    assert_eq!(frames, rolls + 1);
    assert!(text.contains("wins! Press q to exit."));
}

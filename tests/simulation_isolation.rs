//! Test suite for simulation isolation
//! The AI's look-ahead shares the live execution path but must never leak
//! visible side effects: no real-visible events, no history writes.

mod common;

use corral::{App, GameConfig, GameEvent, PlayerKind};

use common::{attach_recorders, event_names};

fn ai_vs_ai_session(level: u8) -> corral::GameSession {
    let app = App::for_testing().with_default_seed(42).build();
    let config = GameConfig::default()
        .with_black_player(PlayerKind::Ai)
        .with_white_player(PlayerKind::Ai)
        .with_black_ai_level(level)
        .with_white_ai_level(level);
    app.create_session(config).unwrap()
}

#[test]
fn test_real_subscribers_never_see_simulated_events() {
    let mut session = ai_vs_ai_session(2);
    let (_all, real) = attach_recorders(session.game_mut());
    session.start().unwrap();
    session.advance().unwrap().unwrap();

    let entries = real.lock().unwrap();
    assert!(!entries.is_empty());
    assert!(entries.iter().all(|r| !r.ctx.is_simulation));
}

#[test]
fn test_lookahead_flows_through_the_same_event_path() {
    let mut session = ai_vs_ai_session(2);
    let (all, _real) = attach_recorders(session.game_mut());
    session.start().unwrap();
    session.advance().unwrap().unwrap();

    // A depth-2 search rolls out many more moves than the one it commits,
    // and every rollout emission carries the simulation tag.
    let entries = all.lock().unwrap();
    let simulated_moves = entries
        .iter()
        .filter(|r| r.ctx.is_simulation && matches!(r.event, GameEvent::MoveExecuting { .. }))
        .count();
    let committed_moves = entries
        .iter()
        .filter(|r| !r.ctx.is_simulation && matches!(r.event, GameEvent::MoveExecuting { .. }))
        .count();
    assert!(simulated_moves > 1);
    assert_eq!(committed_moves, 1);
}

#[test]
fn test_simulation_never_touches_history() {
    let mut session = ai_vs_ai_session(3);
    session.start().unwrap();
    session.advance().unwrap().unwrap();

    // One AI turn equals exactly one committed move, however deep the
    // search rolled out.
    assert_eq!(session.game().move_count(), 1);
    assert!(session.game().can_undo());
    assert!(!session.game().can_redo());
}

#[test]
fn test_committed_ai_move_is_tagged() {
    let mut session = ai_vs_ai_session(1);
    let (_all, real) = attach_recorders(session.game_mut());
    session.start().unwrap();
    session.advance().unwrap().unwrap();

    let entries = real.lock().unwrap();
    let committed: Vec<_> = entries
        .iter()
        .filter(|r| matches!(r.event, GameEvent::MoveExecuting { .. }))
        .collect();
    assert_eq!(committed.len(), 1);
    assert!(committed[0].ctx.is_committed_ai_move);
    assert!(!committed[0].ctx.is_simulation);
}

#[test]
fn test_ai_protocol_event_order() {
    let mut session = ai_vs_ai_session(1);
    let (_all, real) = attach_recorders(session.game_mut());
    session.start().unwrap();
    session.advance().unwrap().unwrap();

    let names = event_names(&real);
    let pos = |name: &str| {
        names
            .iter()
            .position(|n| *n == name)
            .unwrap_or_else(|| panic!("missing {name}"))
    };

    assert_eq!(names[0], "game:initialized");
    assert!(pos("ai:thinking") < pos("ai:moveSelected"));
    assert!(pos("ai:moveSelected") < pos("move:executing"));
    assert!(pos("move:executing") < pos("move:executed"));
    assert!(pos("move:executed") < pos("ai:moveExecuted"));
}

#[test]
fn test_simulated_game_over_is_filtered() {
    // A near-terminal position: the search will roll out game-ending
    // captures, none of which may surface as a real game:over.
    let app = App::for_testing().with_default_seed(42).build();
    let config = GameConfig::default()
        .with_black_player(PlayerKind::Human)
        .with_white_player(PlayerKind::Ai)
        .with_white_ai_level(2);
    let mut session = app.create_session(config).unwrap();
    let (_all, real) = attach_recorders(session.game_mut());
    session.start().unwrap();

    // Drive one human Black move so it is White's (the AI's) turn.
    let mv = session.game().legal_moves()[0].clone();
    session.play_human(&mv).unwrap();
    session.advance().unwrap();

    let entries = real.lock().unwrap();
    for entry in entries.iter() {
        if matches!(entry.event, GameEvent::GameOver { .. }) {
            assert!(!entry.ctx.is_simulation);
        }
    }
    assert_eq!(session.game().move_count(), 2);
}

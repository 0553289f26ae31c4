//! Session tests.
//!
//! These drive a `Session` purely through events, the way a front end
//! would, and check history, feedback, replay and shutdown.

use pacmath::core::{DuelError, MatchConfig, PhaseKind, Player};
use pacmath::difficulty::{Difficulty, DifficultyRegistry, FactorPool};
use pacmath::game::{Event, EventOutcome, FeedbackTone, MatchState, Session};
use pacmath::rules::Transition;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn started(seed: u64, difficulty: &str) -> Session {
    init_logger();
    let mut session = Session::new(MatchConfig::new().with_seed(seed)).unwrap();
    session
        .handle(Event::SelectDifficulty(difficulty.to_string()))
        .unwrap();
    session
}

fn correct(session: &Session) -> i64 {
    session.state().current_question().unwrap().correct_answer()
}

/// Play until someone wins: player 0 always right, player 1 always wrong.
fn play_to_win(session: &mut Session) -> EventOutcome {
    loop {
        let answer = match session.state().active_player() {
            Player::First => correct(session),
            Player::Second => -1,
        };
        let outcome = session.handle(Event::SubmitAnswer(answer)).unwrap();
        if session.state().is_finished() {
            return outcome;
        }
    }
}

/// A full match through events, ending in a win message.
#[test]
fn test_full_match_through_events() {
    let mut session = started(42, "1");
    let outcome = play_to_win(&mut session);

    match outcome {
        EventOutcome::Answered { transition, feedback } => {
            assert_eq!(transition.winner(), Some(Player::First));
            assert_eq!(feedback.tone, FeedbackTone::Victory);
            assert_eq!(feedback.message, "Player 1 wins!");
        }
        other => panic!("expected Answered, got {other:?}"),
    }

    // 4 wins for player 0, and two misses for each of player 1's 3 turns.
    assert_eq!(session.history().len(), 10);
    let sequences: Vec<u32> = session.history().iter().map(|r| r.sequence).collect();
    assert_eq!(sequences, (0..10).collect::<Vec<u32>>());
}

/// Clicking a choice submits that choice's value.
#[test]
fn test_select_choice_submits_value() {
    let mut session = started(7, "3");
    let question = session.state().current_question().unwrap().clone();
    let index = question.correct_index().unwrap();

    let outcome = session.handle(Event::SelectChoice(index)).unwrap();
    match outcome {
        EventOutcome::Answered { transition, feedback } => {
            assert!(matches!(transition, Transition::Advanced { streak: 1, .. }));
            assert_eq!(feedback.message, "Correct! (1/4)");
        }
        other => panic!("expected Answered, got {other:?}"),
    }
}

/// Wrong choice grants a second chance on the same question.
#[test]
fn test_wrong_choice_grants_second_chance() {
    let mut session = started(11, "2");
    let question = session.state().current_question().unwrap().clone();
    let index = (0..3).find(|&i| Some(i) != question.correct_index()).unwrap();

    session.handle(Event::SelectChoice(index)).unwrap();
    assert!(session.state().second_chance());
    assert_eq!(session.state().current_question(), Some(&question));
}

/// Restart only works once the match is finished, and clears history.
#[test]
fn test_restart_event() {
    let mut session = started(3, "4");
    assert!(matches!(
        session.handle(Event::Restart),
        Err(DuelError::InvalidPhase { expected: PhaseKind::Finished, .. })
    ));

    play_to_win(&mut session);
    assert_eq!(session.handle(Event::Restart).unwrap(), EventOutcome::Restarted);
    assert!(session.history().is_empty());
    assert_eq!(session.state().phase().kind(), PhaseKind::SelectingDifficulty);
    assert_eq!(session.state().token_position(), 30);
}

/// After Quit every event fails.
#[test]
fn test_quit_rejects_further_events() {
    let mut session = started(1, "1");
    session.handle(Event::Quit).unwrap();

    for event in [
        Event::SubmitAnswer(correct(&session)),
        Event::SelectChoice(0),
        Event::Restart,
        Event::SelectDifficulty("1".into()),
    ] {
        assert!(matches!(session.handle(event), Err(DuelError::SessionClosed)));
    }
}

/// Same seed, same questions.
#[test]
fn test_seeded_sessions_match() {
    let mut a = started(99, "3");
    let mut b = started(99, "3");
    for _ in 0..6 {
        assert_eq!(a.state().current_question(), b.state().current_question());
        let answer = correct(&a);
        assert_eq!(
            a.handle(Event::SubmitAnswer(answer)).unwrap(),
            b.handle(Event::SubmitAnswer(answer)).unwrap()
        );
    }
}

/// A saved RNG position replays the question stream.
#[test]
fn test_rng_state_replay() {
    init_logger();
    let config = MatchConfig::new().with_seed(5);
    let mut original = Session::new(config.clone()).unwrap();
    let saved = original.rng_state();
    original.handle(Event::SelectDifficulty("3".into())).unwrap();

    let mut replay = Session::with_rng_state(config, &saved).unwrap();
    replay.handle(Event::SelectDifficulty("3".into())).unwrap();
    assert_eq!(
        original.state().current_question(),
        replay.state().current_question()
    );
}

/// Snapshots serialize and are detached from the live session.
#[test]
fn test_snapshot() {
    let mut session = started(8, "2");
    let snapshot = session.snapshot();

    let answer = correct(&session);
    session.handle(Event::SubmitAnswer(answer)).unwrap();
    assert_ne!(&snapshot, session.state());

    let json = serde_json::to_string(&snapshot).unwrap();
    let back: MatchState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);
}

/// Sessions accept custom levels and JSON configuration.
#[test]
fn test_custom_registry_and_json_config() {
    init_logger();
    let config = MatchConfig::from_json(
        r#"{ "track_length": 21, "win_streak": 2, "player_names": ["Ana", "Bia"], "seed": 4 }"#,
    )
    .unwrap();
    assert_eq!(config.steps(), 5);

    let mut registry = DifficultyRegistry::standard();
    registry.register(Difficulty::new("12", "Twelves", FactorPool::new([12]).unwrap()));

    let mut session = Session::with_registry(config, registry).unwrap();
    session.handle(Event::SelectDifficulty("12".into())).unwrap();
    assert_eq!(correct(&session), 144);
    assert_eq!(session.prompt().unwrap(), "Ana, what is 12 × 12?");

    session.handle(Event::SubmitAnswer(144)).unwrap();
    assert_eq!(session.state().token_position(), 15);
    assert_eq!(session.prompt().unwrap(), "Bia, what is 12 × 12?");
}

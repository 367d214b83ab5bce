//! Property tests - engine invariants under arbitrary play

use proptest::prelude::*;

use termtris::core::{fall_interval_ms, Engine, SeededPieces};
use termtris::types::{GameAction, FALL_INTERVAL_MIN_MS};

#[derive(Debug, Clone, Copy)]
enum Step {
    Action(GameAction),
    Tick,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Action(GameAction::MoveLeft)),
        Just(Step::Action(GameAction::MoveRight)),
        Just(Step::Action(GameAction::SoftDrop)),
        Just(Step::Action(GameAction::Rotate)),
        Just(Step::Action(GameAction::HardDrop)),
        Just(Step::Tick),
    ]
}

fn play(engine: &mut Engine<SeededPieces>, step: Step) {
    match step {
        Step::Action(action) => engine.apply_action(action),
        Step::Tick => {
            engine.tick();
        }
    }
}

proptest! {
    #[test]
    fn fall_interval_is_non_increasing_with_floor(a in 0u32..200_000, b in 0u32..200_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(fall_interval_ms(lo) >= fall_interval_ms(hi));
        prop_assert!(fall_interval_ms(hi) >= FALL_INTERVAL_MIN_MS);
    }

    #[test]
    fn active_piece_never_overlaps_while_running(
        seed in any::<u64>(),
        steps in proptest::collection::vec(step(), 0..300),
    ) {
        let mut engine = Engine::with_seed(seed);
        for s in steps {
            play(&mut engine, s);
            if !engine.game_over() {
                prop_assert!(!engine.collides(engine.active()));
            }
        }
    }

    #[test]
    fn score_tracks_lines_and_speed_tracks_score(
        seed in any::<u64>(),
        steps in proptest::collection::vec(step(), 0..300),
    ) {
        let mut engine = Engine::with_seed(seed);
        let mut last_score = 0;
        let mut last_interval = engine.fall_interval_ms();
        for s in steps {
            play(&mut engine, s);
            prop_assert!(engine.score() >= last_score);
            prop_assert!(engine.fall_interval_ms() <= last_interval);
            prop_assert_eq!(engine.score(), engine.lines() * 100);
            prop_assert_eq!(engine.fall_interval_ms(), fall_interval_ms(engine.score()));
            last_score = engine.score();
            last_interval = engine.fall_interval_ms();
        }
    }

    #[test]
    fn failed_move_never_mutates(
        seed in any::<u64>(),
        steps in proptest::collection::vec(step(), 0..100),
        d_row in -3i16..=3,
        d_col in -12i16..=12,
    ) {
        let mut engine = Engine::with_seed(seed);
        for s in steps {
            play(&mut engine, s);
        }

        let before = *engine.active();
        let board = engine.board().clone();
        if !engine.try_move(d_row, d_col) {
            prop_assert_eq!(*engine.active(), before);
        }
        prop_assert_eq!(engine.board(), &board);
    }

    #[test]
    fn game_over_is_terminal(
        seed in any::<u64>(),
        steps in proptest::collection::vec(step(), 0..60),
    ) {
        let mut engine = Engine::with_seed(seed);
        // Hard drops alone always top out a 10x20 board.
        while !engine.game_over() {
            engine.hard_drop();
        }
        let score = engine.score();
        let board = engine.board().clone();
        let active = *engine.active();

        for s in steps {
            play(&mut engine, s);
        }
        prop_assert!(engine.game_over());
        prop_assert_eq!(engine.score(), score);
        prop_assert_eq!(engine.board(), &board);
        prop_assert_eq!(*engine.active(), active);
    }
}

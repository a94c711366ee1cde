//! Scoring and leaderboard tests.

use snake_ladder::core::{GameConfig, GameRng, Player, PlayerId};
use snake_ladder::rules::{Roll, RulesEngine, ScriptedRolls, StepOutcome};
use snake_ladder::scoring::{ScoreEngine, MAX_SQUARE_SCORE, MIN_SQUARE_SCORE};

/// Square values are fixed per engine and within range.
#[test]
fn test_square_values_stable() {
    let engine = RulesEngine::new(GameConfig::default()).unwrap();

    let first: Vec<u32> = (0..64).map(|p| engine.score_of(p)).collect();
    let second: Vec<u32> = (0..64).map(|p| engine.score_of(p)).collect();

    assert_eq!(first, second);
    assert!(first
        .iter()
        .all(|v| (MIN_SQUARE_SCORE..=MAX_SQUARE_SCORE).contains(v)));
}

/// Different seeds give different tables.
#[test]
fn test_seed_changes_table() {
    let a = ScoreEngine::new(&mut GameRng::new(1));
    let b = ScoreEngine::new(&mut GameRng::new(2));
    assert_ne!(a.table(), b.table());
}

/// Only the final landing of a move scores, not the squares passed through.
#[test]
fn test_only_final_square_scores() {
    let mut engine = RulesEngine::with_rolls(
        GameConfig::new(2).with_links(vec![]),
        ScriptedRolls::new([Roll::forward(3)]),
    )
    .unwrap();

    engine.roll_dice().unwrap();
    while engine.advance_step().is_applied() {
        assert_eq!(engine.players()[0].total_score(), 0);
    }

    assert_eq!(engine.players()[0].total_score(), engine.score_of(3));
    assert_eq!(engine.advance_step(), StepOutcome::Idle);
}

/// The engine's leaderboard ranks live players.
#[test]
fn test_engine_leaderboard() {
    let mut engine = RulesEngine::with_rolls(
        GameConfig::new(3).with_links(vec![]),
        ScriptedRolls::new([Roll::backward(1)]),
    )
    .unwrap();

    // Everyone stays on square 0, so player 1 ends ahead after two rolls.
    for _ in 0..4 {
        engine.roll_dice().unwrap();
        while engine.advance_step().is_applied() {}
    }

    let ranked: Vec<&str> = engine.leaderboard().into_iter().map(Player::name).collect();
    assert_eq!(ranked, vec!["Player 1", "Player 2", "Player 3"]);
    assert!(engine.players()[0].total_score() > engine.players()[1].total_score());
}

/// Resetting scores keeps the table and the win counters.
#[test]
fn test_reset_scores_only_touches_totals() {
    let mut scores = ScoreEngine::new(&mut GameRng::new(3));
    let table = scores.table().to_vec();
    let mut players: Vec<Player> = PlayerId::all(2).map(Player::new).collect();

    scores.apply_landing(&mut players[0], 10);
    scores.record_win(&players[0]);
    scores.reset_scores(players.iter_mut());

    assert!(players.iter().all(|p| p.total_score() == 0));
    assert_eq!(scores.table(), table.as_slice());
    assert_eq!(scores.session_win_count(players[0].name()), 1);
}

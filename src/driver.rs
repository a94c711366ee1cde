//! Headless driver: rolls and ticks the engine until the game ends.
//!
//! Interactive front ends schedule [`RulesEngine::advance_step`] on a timer
//! (the board animates at one step per [`TICK_INTERVAL`]). The driver does
//! the same work without waiting, for simulations, replays and benchmarks.

use std::time::Duration;

use tracing::debug;

use crate::core::PlayerId;
use crate::rules::{RollRejected, RollSource, RulesEngine, StepOutcome, TurnEnd};

/// Interval between animation steps in an interactive front end.
pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Summary of a driven game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverReport {
    pub winner: Option<PlayerId>,
    /// Rolls taken.
    pub turns: usize,
    /// Animation steps applied.
    pub ticks: usize,
}

/// Runs turns against a borrowed engine.
pub struct TickDriver<'a, R: RollSource> {
    engine: &'a mut RulesEngine<R>,
    max_turns: usize,
    turns: usize,
    ticks: usize,
}

impl<'a, R: RollSource> TickDriver<'a, R> {
    /// Drive `engine` for at most `max_turns` rolls.
    pub fn new(engine: &'a mut RulesEngine<R>, max_turns: usize) -> Self {
        Self {
            engine,
            max_turns,
            turns: 0,
            ticks: 0,
        }
    }

    /// Roll once and tick until the move completes.
    ///
    /// A move left half-animated by someone else is finished first.
    pub fn play_turn(&mut self) -> Result<Option<TurnEnd>, RollRejected> {
        if self.engine.is_animating() {
            self.drain_ticks();
        }
        self.engine.roll_dice()?;
        self.turns += 1;
        Ok(self.drain_ticks())
    }

    fn drain_ticks(&mut self) -> Option<TurnEnd> {
        loop {
            match self.engine.advance_step() {
                StepOutcome::Moved(_) => self.ticks += 1,
                StepOutcome::Finished(end) => return Some(end),
                StepOutcome::Idle => return None,
            }
        }
    }

    /// Play until someone wins or the turn limit is reached.
    pub fn run(&mut self) -> DriverReport {
        while self.turns < self.max_turns {
            match self.play_turn() {
                Ok(Some(end)) if end.winner.is_some() => break,
                Ok(_) => {}
                Err(_) => break,
            }
        }

        let report = self.report();
        debug!(winner = ?report.winner, turns = report.turns, ticks = report.ticks, "driver finished");
        report
    }

    #[must_use]
    pub fn report(&self) -> DriverReport {
        DriverReport {
            winner: self.engine.winner_id(),
            turns: self.turns,
            ticks: self.ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::rules::engine::EVENT_LOG_CAPACITY;
    use crate::rules::{Roll, ScriptedRolls};

    #[test]
    fn test_run_all_forward_reaches_the_end() {
        let mut engine = RulesEngine::with_rolls(
            GameConfig::new(2).with_links(vec![]),
            ScriptedRolls::new([Roll::forward(6)]),
        )
        .unwrap();

        let report = TickDriver::new(&mut engine, 100).run();

        assert!(report.winner.is_some());
        assert!(report.ticks >= 63);
        assert_eq!(engine.session_win_count(engine.winner().unwrap().name()), 1);
    }

    #[test]
    fn test_turn_limit() {
        let mut engine = RulesEngine::with_rolls(
            GameConfig::new(2).with_links(vec![]),
            ScriptedRolls::new([Roll::backward(3)]),
        )
        .unwrap();

        let report = TickDriver::new(&mut engine, 10).run();

        assert_eq!(report.winner, None);
        assert_eq!(report.turns, 10);
        assert_eq!(report.ticks, 30);
    }

    #[test]
    fn test_play_turn_after_win_is_rejected() {
        let mut engine = RulesEngine::with_rolls(
            GameConfig::new(1).with_links(vec![]),
            ScriptedRolls::new([Roll::forward(6)]),
        )
        .unwrap();
        let mut driver = TickDriver::new(&mut engine, 1_000);
        driver.run();

        assert!(matches!(
            driver.play_turn(),
            Err(RollRejected::GameOver { .. })
        ));
    }

    #[test]
    fn test_seeded_games_replay_identically() {
        let play = |seed| {
            let mut engine = RulesEngine::new(GameConfig::new(3).with_seed(seed)).unwrap();
            TickDriver::new(&mut engine, 500).run()
        };
        assert_eq!(play(17), play(17));
    }

    #[test]
    fn test_long_undrained_run_keeps_event_log_bounded() {
        let mut engine = RulesEngine::with_rolls(
            GameConfig::new(2).with_links(vec![]),
            ScriptedRolls::new([Roll::backward(6)]),
        )
        .unwrap();

        let report = TickDriver::new(&mut engine, 100_000).run();

        assert_eq!(report.turns, 100_000);
        assert_eq!(engine.events().len(), EVENT_LOG_CAPACITY);
    }
}

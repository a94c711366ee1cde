//! The turn and move orchestrator.
//!
//! ## State machine
//!
//! Each turn goes `Idle -> Animating -> Idle`:
//!
//! 1. [`RulesEngine::roll_dice`] draws a roll, plans every tick of the move
//!    against a scratch copy of the current player's path and marks the
//!    engine as animating.
//! 2. [`RulesEngine::advance_step`] applies one planned step per call.
//! 3. The first call that finds the plan empty applies post-move effects
//!    (scoring, shortcut unlock, win bookkeeping, turn rotation) and
//!    returns the engine to idle.
//!
//! The engine defines no timing. Whatever drives it (a UI timer, a game
//! loop, [`TickDriver`](crate::driver::TickDriver)) calls `advance_step`
//! until it stops reporting progress.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use super::outcome::{DiceOutcome, RollRejected, StepMove, StepOutcome, TurnEnd};
use super::plan::{is_prime, plan_move};
use super::roll::{RandomRolls, Roll, RollSource};
use crate::board::{LinkSet, Track};
use crate::core::{ConfigError, GameConfig, GameRng, Player, PlayerId, PlayerMap};
use crate::events::GameEvent;
use crate::scoring::ScoreEngine;
use crate::view::{GameSnapshot, PlayerView};

/// RNG context for the point table.
pub const SCORE_TABLE_CONTEXT: &str = "score_table";
/// RNG context for the randomly placed link.
pub const LINK_CONTEXT: &str = "links";
/// RNG context for dice.
pub const DICE_CONTEXT: &str = "dice";
/// Events kept between drains; older ones are dropped first.
pub const EVENT_LOG_CAPACITY: usize = 1024;

/// Rules engine for one session of games.
///
/// Board, links and the point table are fixed at construction. Players
/// and turn order are rebuilt by [`reset_game`](Self::reset_game).
#[derive(Clone, Debug)]
pub struct RulesEngine<R: RollSource = RandomRolls> {
    config: GameConfig,
    track: Track,
    links: LinkSet,
    scores: ScoreEngine,
    rolls: R,
    players: PlayerMap<Player>,
    /// Front is the current player.
    turn_queue: VecDeque<PlayerId>,
    last_roll: Option<Roll>,
    animating: bool,
    win_recorded: bool,
    events: VecDeque<GameEvent>,
}

impl RulesEngine<RandomRolls> {
    /// Create an engine whose dice come from the config's seed.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rolls = RandomRolls::new(GameRng::new(config.seed).for_context(DICE_CONTEXT));
        Self::with_rolls(config, rolls)
    }
}

impl<R: RollSource> RulesEngine<R> {
    /// Create an engine drawing rolls from `rolls`.
    pub fn with_rolls(config: GameConfig, rolls: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let master = GameRng::new(config.seed);
        let scores = ScoreEngine::new(&mut master.for_context(SCORE_TABLE_CONTEXT));
        let links = match &config.links {
            Some(links) => LinkSet::new(links.clone()),
            None => LinkSet::standard(&mut master.for_context(LINK_CONTEXT)),
        };

        let player_count = config.player_count;
        debug!(seed = config.seed, players = player_count, links = links.len(), "engine created");

        Ok(Self {
            track: Track::new(),
            links,
            scores,
            rolls,
            players: Self::fresh_players(player_count),
            turn_queue: PlayerId::all(player_count).collect(),
            last_roll: None,
            animating: false,
            win_recorded: false,
            events: VecDeque::new(),
            config,
        })
    }

    fn fresh_players(player_count: usize) -> PlayerMap<Player> {
        PlayerMap::new(player_count, Player::new)
    }

    // === Entry points ===

    /// Roll for the current player and plan the move.
    ///
    /// Refused once someone has won or while a move is still animating.
    pub fn roll_dice(&mut self) -> Result<DiceOutcome, RollRejected> {
        if let Some(winner) = self.winner_id() {
            warn!(winner = %winner, "roll refused, game is over");
            return Err(RollRejected::GameOver { winner });
        }
        let current = self.current_player_id();
        if self.animating {
            warn!(player = %current, "roll refused, move in progress");
            return Err(RollRejected::Animating { player: current });
        }

        let roll = self
            .rolls
            .next_roll(self.config.dice_sides, self.config.forward_probability);

        let last_index = self.track.last_index();
        let player = &mut self.players[current];
        player.record_roll();
        let plan = plan_move(
            player.path(),
            roll,
            player.shortcut_unlocked(),
            &self.links,
            last_index,
        );
        player.set_plan(plan.steps.iter().copied());

        self.last_roll = Some(roll);
        self.animating = true;

        debug!(
            player = %current,
            dice = roll.value,
            forward = roll.forward,
            target = plan.target,
            steps = ?plan.steps.as_slice(),
            "rolled"
        );
        self.push_event(GameEvent::DiceRolled {
            player: current,
            value: roll.value,
            forward: roll.forward,
            target: plan.target,
        });

        Ok(DiceOutcome {
            player: current,
            roll,
            plan: plan.steps,
            target: plan.target,
        })
    }

    /// Advance the animation by one tick.
    pub fn advance_step(&mut self) -> StepOutcome {
        if !self.animating {
            return StepOutcome::Idle;
        }

        let current = self.current_player_id();
        let player = &mut self.players[current];

        match player.next_planned_step() {
            Some(next) => {
                let from = player.position();
                let backtrack = player.apply_step(next);

                debug!(player = %current, from, to = next, backtrack, "step");
                self.push_event(GameEvent::Stepped {
                    player: current,
                    from,
                    to: next,
                    backtrack,
                });

                StepOutcome::Moved(StepMove {
                    player: current,
                    from,
                    to: next,
                    backtrack,
                })
            }
            None => StepOutcome::Finished(self.finish_move(current)),
        }
    }

    /// Post-move effects for the player whose plan just drained.
    fn finish_move(&mut self, current: PlayerId) -> TurnEnd {
        let position = self.players[current].position();
        let points = self
            .scores
            .apply_landing(&mut self.players[current], position);

        let min_rolls = self.config.unlock_min_rolls;
        let player = &mut self.players[current];
        let total = player.total_score();
        let unlocked = is_prime(Track::label_number(position))
            && player.roll_count() >= min_rolls
            && player.unlock_shortcuts();

        self.push_event(GameEvent::Landed {
            player: current,
            position,
            points,
            total,
        });
        if unlocked {
            info!(player = %current, position, "shortcuts unlocked");
            self.push_event(GameEvent::ShortcutUnlocked {
                player: current,
                position,
            });
        }

        self.animating = false;

        let extra_turn = self.track.is_bonus(position, self.config.bonus_interval);
        if extra_turn {
            info!(player = %current, position, "bonus square, extra roll");
            self.push_event(GameEvent::ExtraTurn {
                player: current,
                position,
            });
        } else {
            self.turn_queue.rotate_left(1);
            let next = self.current_player_id();
            self.push_event(GameEvent::TurnPassed {
                from: current,
                to: next,
            });
        }

        let winner = self.winner_id();
        if let Some(winner) = winner {
            self.record_winner(winner);
        }

        TurnEnd {
            player: current,
            position,
            points,
            unlocked,
            extra_turn,
            winner,
            next_player: self.current_player_id(),
        }
    }

    fn record_winner(&mut self, winner: PlayerId) {
        if self.win_recorded {
            return;
        }
        self.win_recorded = true;

        let player = &self.players[winner];
        let session_wins = self.scores.record_win(player);
        let name = player.name().to_string();
        let score = player.total_score();
        info!(player = %winner, score, session_wins, "winner");
        self.push_event(GameEvent::Won {
            player: winner,
            name,
            score,
            session_wins,
        });
    }

    /// Replace every player with a fresh one and restart the turn order.
    ///
    /// Safe mid-animation: the old plan goes away with the old players.
    /// The point table and session wins are kept.
    pub fn reset_game(&mut self, player_count: usize) -> Result<(), ConfigError> {
        GameConfig::validate_player_count(player_count)?;

        self.players = Self::fresh_players(player_count);
        self.turn_queue = PlayerId::all(player_count).collect();
        self.last_roll = None;
        self.animating = false;
        self.win_recorded = false;

        info!(players = player_count, "game reset");
        self.push_event(GameEvent::Reset { player_count });
        Ok(())
    }

    /// Reset the game and zero every player's score.
    pub fn new_game(&mut self, player_count: usize) -> Result<(), ConfigError> {
        self.reset_game(player_count)?;
        self.scores.reset_scores(self.players.values_mut());
        Ok(())
    }

    // === Queries ===

    /// First player, in player order, standing on the final square.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        let last = self.track.last_index();
        self.players.values().find(|p| p.position() == last)
    }

    #[must_use]
    pub fn winner_id(&self) -> Option<PlayerId> {
        self.winner().map(Player::id)
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.turn_queue
            .front()
            .copied()
            .unwrap_or(PlayerId::new(0))
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_id()]
    }

    /// All players in player order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        self.players.as_slice()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.as_slice().get(id.index())
    }

    /// Turn order, current player first.
    pub fn turn_order(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.turn_queue.iter().copied()
    }

    /// Face of the last roll, or 0 if nothing was rolled since the reset.
    #[must_use]
    pub fn last_dice_roll(&self) -> u32 {
        self.last_roll.map_or(0, |roll| roll.value)
    }

    #[must_use]
    pub fn was_last_move_forward(&self) -> bool {
        self.last_roll.is_some_and(|roll| roll.forward)
    }

    #[must_use]
    pub fn last_roll(&self) -> Option<Roll> {
        self.last_roll
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    #[must_use]
    pub fn links(&self) -> &LinkSet {
        &self.links
    }

    #[must_use]
    pub fn scores(&self) -> &ScoreEngine {
        &self.scores
    }

    #[must_use]
    pub fn score_of(&self, position: usize) -> u32 {
        self.scores.score_of(position)
    }

    /// Current players ranked by score.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&Player> {
        self.scores.leaderboard(self.players.values())
    }

    #[must_use]
    pub fn session_win_count(&self, name: &str) -> u32 {
        self.scores.session_win_count(name)
    }

    #[must_use]
    pub fn rolls(&self) -> &R {
        &self.rolls
    }

    // === Events and views ===

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == EVENT_LOG_CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Events since the last drain, oldest first. At most
    /// [`EVENT_LOG_CAPACITY`] are kept.
    #[must_use]
    pub fn events(&self) -> &VecDeque<GameEvent> {
        &self.events
    }

    /// Take every pending event.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Immutable copy of everything a front end draws.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self.players.values().map(PlayerView::from).collect(),
            turn_order: self.turn_queue.iter().copied().collect(),
            last_roll: self.last_roll,
            animating: self.animating,
            winner: self.winner_id(),
            links: self.links.as_slice().to_vec(),
            square_scores: self.scores.table().to_vec(),
            ranking: self.leaderboard().into_iter().map(Player::id).collect(),
            dice: self.rolls.checkpoint(),
        }
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }
}

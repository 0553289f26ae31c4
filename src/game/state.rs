//! Match state: the single mutable aggregate of a duel.
//!
//! ## Lifecycle
//!
//! - Created in `SelectingDifficulty` with the token at the center.
//! - `select_difficulty` fixes the factor pool, draws the first question
//!   and enters `Playing`.
//! - `apply` performs the change a [`Transition`] describes. A win moves
//!   to `Finished`.
//! - `restart` takes a finished match back to `SelectingDifficulty` with
//!   everything reinitialized.
//!
//! The track's pellet set is an `im` persistent set, so cloning a state
//! for a read-only snapshot is cheap.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{
    DuelError, MatchConfig, Movement, Phase, PhaseKind, Player, PlayerPair, RangeRng, Result,
    Track,
};
use crate::difficulty::FactorPool;
use crate::question::{Question, QuestionGenerator};
use crate::rules::{evaluate, Transition};

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    track: Track,
    token_position: usize,
    active_player: Player,
    streaks: PlayerPair<u32>,
    win_streak: u32,
    generator: QuestionGenerator,
    difficulty: Option<String>,
    factor_pool: Option<FactorPool>,
    current_question: Option<Question>,
    second_chance: bool,
    phase: Phase,
}

impl MatchState {
    /// Create a fresh match waiting for a difficulty pick.
    ///
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn new(config: &MatchConfig) -> Result<Self> {
        config.validate()?;
        let track = Track::new(config.track_length, config.steps())?;
        Ok(Self {
            token_position: track.center(),
            track,
            active_player: Player::First,
            streaks: PlayerPair::with_value(0),
            win_streak: config.win_streak,
            generator: QuestionGenerator::from_config(config),
            difficulty: None,
            factor_pool: None,
            current_question: None,
            second_chance: false,
            phase: Phase::SelectingDifficulty,
        })
    }

    // === Accessors ===

    /// The track, including consumed pellets.
    #[must_use]
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Current token cell.
    #[must_use]
    pub fn token_position(&self) -> usize {
        self.token_position
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// A player's consecutive first-try correct answers.
    #[must_use]
    pub fn streak(&self, player: Player) -> u32 {
        self.streaks[player]
    }

    /// Both streaks.
    #[must_use]
    pub fn streaks(&self) -> &PlayerPair<u32> {
        &self.streaks
    }

    /// Streak that wins the match.
    #[must_use]
    pub fn win_streak(&self) -> u32 {
        self.win_streak
    }

    /// Selected difficulty id, once chosen.
    #[must_use]
    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    /// Factor pool for this match, once chosen.
    #[must_use]
    pub fn factor_pool(&self) -> Option<&FactorPool> {
        self.factor_pool.as_ref()
    }

    /// Question currently on screen.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    /// True iff the active player already missed the current question once.
    #[must_use]
    pub fn second_chance(&self) -> bool {
        self.second_chance
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Winner, once the match is finished.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.phase.winner()
    }

    /// Check if the match has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase.kind() == PhaseKind::Finished
    }

    // === Phase checks ===

    /// Fail with `InvalidPhase` unless the match is in `expected`.
    pub fn expect_phase(&self, expected: PhaseKind) -> Result<()> {
        let actual = self.phase.kind();
        if actual != expected {
            return Err(DuelError::InvalidPhase { expected, actual });
        }
        Ok(())
    }

    /// Current question, failing with `InvalidPhase` outside `Playing`.
    pub fn playing_question(&self) -> Result<&Question> {
        self.expect_phase(PhaseKind::Playing)?;
        self.current_question.as_ref().ok_or(DuelError::InvalidPhase {
            expected: PhaseKind::Playing,
            actual: self.phase.kind(),
        })
    }

    /// Draw a fresh question from this match's factor pool.
    pub fn next_question<R: RangeRng>(&self, rng: &mut R) -> Result<Question> {
        let pool = self.factor_pool.as_ref().ok_or(DuelError::EmptyFactorPool)?;
        self.generator.generate(pool.as_slice(), rng)
    }

    // === Transitions ===

    /// Fix the factor pool, draw the first question and start playing.
    ///
    /// Fails with `InvalidPhase` unless the match is `SelectingDifficulty`.
    pub fn select_difficulty<R: RangeRng>(
        &mut self,
        id: impl Into<String>,
        pool: FactorPool,
        rng: &mut R,
    ) -> Result<&Question> {
        self.expect_phase(PhaseKind::SelectingDifficulty)?;

        let id = id.into();
        let question = self.generator.generate(pool.as_slice(), rng)?;
        info!("difficulty {} selected, factors {:?}", id, pool.as_slice());

        self.difficulty = Some(id);
        self.factor_pool = Some(pool);
        self.second_chance = false;
        self.phase = Phase::Playing;
        let question = self.current_question.insert(question);
        Ok(&*question)
    }

    /// Evaluate an answer and apply the resulting transition.
    pub fn submit<R: RangeRng>(&mut self, answer: i64, rng: &mut R) -> Result<Transition> {
        let transition = evaluate(self, answer, rng)?;
        self.apply(&transition)?;
        Ok(transition)
    }

    /// Perform the state change a transition describes.
    ///
    /// Fails with `InvalidPhase` outside `Playing`, with `StaleTransition`
    /// if the transition was produced for the other player, and with
    /// `InvalidTransition` if it does not follow from the current state.
    pub fn apply(&mut self, transition: &Transition) -> Result<()> {
        self.expect_phase(PhaseKind::Playing)?;
        let player = transition.player();
        if player != self.active_player {
            return Err(DuelError::StaleTransition {
                player,
                active: self.active_player,
            });
        }
        self.check_transition(transition)?;

        match transition {
            Transition::Advanced { streak, movement, next_question, .. } => {
                self.streaks[player] = *streak;
                self.track.consume_path(movement);
                self.token_position = movement.to;
                self.pass_turn(next_question.clone());
            }
            Transition::Won { streak, movement, final_position, .. } => {
                self.streaks[player] = *streak;
                self.track.consume_path(movement);
                // The winner's token runs on to its goal end.
                self.track.consume_path(&Movement {
                    player,
                    from: movement.to,
                    to: *final_position,
                });
                self.token_position = *final_position;
                self.current_question = None;
                self.second_chance = false;
                self.phase = Phase::Finished { winner: player };
                info!("{} wins with streak {} at cell {}", player, streak, final_position);
            }
            Transition::SecondChance { .. } => {
                self.second_chance = true;
            }
            Transition::Recovered { next_question, .. } => {
                self.pass_turn(next_question.clone());
            }
            Transition::TurnLost { next_question, .. } => {
                self.streaks[player] = 0;
                self.pass_turn(next_question.clone());
            }
        }

        debug!(
            "token at {}, streaks {:?}, {} to play",
            self.token_position,
            self.streaks.as_array(),
            self.active_player
        );
        Ok(())
    }

    /// Reinitialize a finished match and return to difficulty selection.
    ///
    /// Fails with `InvalidPhase` unless the match is `Finished`.
    pub fn restart(&mut self) -> Result<()> {
        self.expect_phase(PhaseKind::Finished)?;

        self.track.reset();
        self.token_position = self.track.center();
        self.active_player = Player::First;
        self.streaks = PlayerPair::with_value(0);
        self.difficulty = None;
        self.factor_pool = None;
        self.current_question = None;
        self.second_chance = false;
        self.phase = Phase::SelectingDifficulty;
        info!("match restarted");
        Ok(())
    }

    /// Reject transitions that evaluating an answer now could not produce.
    fn check_transition(&self, transition: &Transition) -> Result<()> {
        let player = transition.player();
        let streak = self.streaks[player];

        let expects_second_chance = matches!(
            transition,
            Transition::Recovered { .. } | Transition::TurnLost { .. }
        );
        if expects_second_chance != self.second_chance {
            return Err(DuelError::InvalidTransition(format!(
                "{} transition while second chance is {}",
                transition.kind_name(),
                self.second_chance
            )));
        }

        match transition {
            Transition::Advanced { streak: next, movement, .. }
            | Transition::Won { streak: next, movement, .. } => {
                let expected = self.track.advance(self.token_position, player);
                if *movement != expected {
                    return Err(DuelError::InvalidTransition(format!(
                        "movement {}->{} does not match {}->{}",
                        movement.from, movement.to, expected.from, expected.to
                    )));
                }
                if *next != streak + 1 {
                    return Err(DuelError::InvalidTransition(format!(
                        "streak {next} does not follow {streak}"
                    )));
                }
                let wins = *next >= self.win_streak || self.track.is_boundary(expected.to);
                if wins != matches!(transition, Transition::Won { .. }) {
                    return Err(DuelError::InvalidTransition(format!(
                        "{} transition but the win condition is {}",
                        transition.kind_name(),
                        wins
                    )));
                }
            }
            Transition::Recovered { streak: kept, .. } if *kept != streak => {
                return Err(DuelError::InvalidTransition(format!(
                    "recovered streak {kept} differs from {streak}"
                )));
            }
            _ => {}
        }

        if let Transition::Won { final_position, .. } = transition {
            if *final_position != self.track.goal(player) {
                return Err(DuelError::InvalidTransition(format!(
                    "final position {final_position} is not the goal of {player}"
                )));
            }
        }
        Ok(())
    }

    fn pass_turn(&mut self, next_question: Question) {
        self.active_player = self.active_player.opponent();
        self.current_question = Some(next_question);
        self.second_chance = false;
    }

    #[cfg(test)]
    pub(crate) fn set_token_position_for_test(&mut self, position: usize) {
        self.token_position = position;
    }
}

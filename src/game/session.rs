//! Event-driven match session.
//!
//! A [`Session`] is what a front end talks to. It owns the configuration,
//! the difficulty registry, the RNG and the match state, and turns input
//! [`Event`]s into [`EventOutcome`]s. Every applied transition is appended
//! to a persistent history with a sequence number.

use im::Vector;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use super::feedback::Feedback;
use super::state::MatchState;
use crate::core::{DuelError, GameRng, GameRngState, MatchConfig, PhaseKind, Result};
use crate::difficulty::DifficultyRegistry;
use crate::question::Question;
use crate::rules::Transition;

/// Input a front end feeds into a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Pick a difficulty by registry id.
    SelectDifficulty(String),
    /// Type in an answer.
    SubmitAnswer(i64),
    /// Click one of the offered choices, by index.
    SelectChoice(usize),
    /// Start over after a finished match.
    Restart,
    /// Close the session.
    Quit,
}

/// What handling an event did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventOutcome {
    DifficultySelected {
        difficulty: String,
        question: Question,
    },
    Answered {
        transition: Transition,
        feedback: Feedback,
    },
    Restarted,
    Quit,
}

/// A transition tagged with its position in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    pub sequence: u32,
    pub transition: Transition,
}

impl TransitionRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(sequence: u32, transition: Transition) -> Self {
        Self {
            sequence,
            transition,
        }
    }
}

/// A running duel plus everything needed to drive it.
#[derive(Clone, Debug)]
pub struct Session {
    config: MatchConfig,
    registry: DifficultyRegistry,
    rng: GameRng,
    state: MatchState,
    history: Vector<TransitionRecord>,
    next_sequence: u32,
    closed: bool,
}

impl Session {
    /// Start a session with the standard difficulty levels.
    ///
    /// Seeds from `config.seed`, or from entropy when unset.
    pub fn new(config: MatchConfig) -> Result<Self> {
        Self::with_registry(config, DifficultyRegistry::standard())
    }

    /// Start a session with a custom difficulty registry.
    pub fn with_registry(config: MatchConfig, registry: DifficultyRegistry) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::build(config, registry, rng)
    }

    /// Resume a session from a saved RNG position.
    ///
    /// The match itself starts fresh; only the question stream is restored.
    /// The saved state takes the place of `config.seed`.
    pub fn with_rng_state(config: MatchConfig, rng_state: &GameRngState) -> Result<Self> {
        if let Some(seed) = config.seed.filter(|&seed| seed != rng_state.seed) {
            warn!("config seed {} ignored in favour of saved seed {}", seed, rng_state.seed);
        }
        let rng = GameRng::from_state(rng_state);
        Self::build(config, DifficultyRegistry::standard(), rng)
    }

    fn build(config: MatchConfig, registry: DifficultyRegistry, rng: GameRng) -> Result<Self> {
        let state = MatchState::new(&config)?;
        info!(
            "session started: track {}, win streak {}, seed {}",
            config.track_length,
            config.win_streak,
            rng.seed()
        );
        Ok(Self {
            config,
            registry,
            rng,
            state,
            history: Vector::new(),
            next_sequence: 0,
            closed: false,
        })
    }

    // === Event handling ===

    /// Process one event.
    ///
    /// Fails with `SessionClosed` once `Quit` has been handled.
    pub fn handle(&mut self, event: Event) -> Result<EventOutcome> {
        if self.closed {
            return Err(DuelError::SessionClosed);
        }
        debug!("handling {:?}", event);

        match event {
            Event::SelectDifficulty(id) => self.select_difficulty(&id),
            Event::SubmitAnswer(answer) => self.submit_answer(answer),
            Event::SelectChoice(index) => self.select_choice(index),
            Event::Restart => self.restart(),
            Event::Quit => {
                self.quit();
                Ok(EventOutcome::Quit)
            }
        }
    }

    /// Choose a difficulty and draw the first question.
    ///
    /// The phase is checked before the registry lookup, so a stray pick
    /// during play reports `InvalidPhase` even for an unknown id.
    pub fn select_difficulty(&mut self, id: &str) -> Result<EventOutcome> {
        self.ensure_open()?;
        self.state.expect_phase(PhaseKind::SelectingDifficulty)?;

        let pool = self.registry.factors_for(id)?.clone();
        let question = self.state.select_difficulty(id, pool, &mut self.rng)?.clone();
        Ok(EventOutcome::DifficultySelected {
            difficulty: id.to_string(),
            question,
        })
    }

    /// Submit a typed answer.
    pub fn submit_answer(&mut self, answer: i64) -> Result<EventOutcome> {
        self.ensure_open()?;
        let transition = self.state.submit(answer, &mut self.rng)?;
        let feedback = self.feedback_for(&transition);

        self.history
            .push_back(TransitionRecord::new(self.next_sequence, transition.clone()));
        self.next_sequence += 1;

        Ok(EventOutcome::Answered {
            transition,
            feedback,
        })
    }

    /// Submit the choice at `index`.
    ///
    /// Fails with `InvalidChoice` for an index outside the offered choices.
    pub fn select_choice(&mut self, index: usize) -> Result<EventOutcome> {
        self.ensure_open()?;
        let answer = self.state.playing_question()?.choice(index)?;
        self.submit_answer(answer)
    }

    /// Restart a finished match and clear the history.
    pub fn restart(&mut self) -> Result<EventOutcome> {
        self.ensure_open()?;
        self.state.restart()?;
        self.history = Vector::new();
        self.next_sequence = 0;
        Ok(EventOutcome::Restarted)
    }

    /// Close the session. Later events fail with `SessionClosed`.
    pub fn quit(&mut self) {
        if !self.closed {
            info!("session closed after {} transitions", self.history.len());
        }
        self.closed = true;
    }

    // === Queries ===

    /// Borrow the current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Owned copy of the current match state.
    #[must_use]
    pub fn snapshot(&self) -> MatchState {
        self.state.clone()
    }

    /// Transitions applied since the match started.
    #[must_use]
    pub fn history(&self) -> &Vector<TransitionRecord> {
        &self.history
    }

    #[must_use]
    pub fn registry(&self) -> &DifficultyRegistry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current RNG position, for replaying the question stream.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Check if `Quit` has been handled.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Question prompt for the active player, while playing.
    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        let question = self.state.current_question()?;
        let name = self.config.player_name(self.state.active_player());
        Some(question.prompt(name))
    }

    /// Feedback line for a transition, using this session's player names.
    #[must_use]
    pub fn feedback_for(&self, transition: &Transition) -> Feedback {
        Feedback::for_transition(transition, &self.config.player_names, self.config.win_streak)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(DuelError::SessionClosed);
        }
        Ok(())
    }
}

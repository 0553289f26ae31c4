//! Match configuration.
//!
//! Front ends build a `MatchConfig` at startup (or load one from JSON)
//! and hand it to a [`Session`](crate::game::Session). Defaults reproduce
//! the classic duel: a 61-cell track, four in a row to win.

use serde::{Deserialize, Serialize};

use super::error::{DuelError, Result};
use super::player::{Player, PlayerPair};

/// Largest factor a pool may hold. Keeps every product well inside `i64`.
pub const MAX_FACTOR: u32 = 1_000_000;

/// Largest distractor span a configuration may ask for.
pub const MAX_DISTRACTOR_SPAN: i64 = 1_000;

/// Default number of track cells.
pub const DEFAULT_TRACK_LENGTH: usize = 61;

/// Default consecutive first-try answers needed to win.
pub const DEFAULT_WIN_STREAK: u32 = 4;

/// Default half-width of the first distractor's offset range.
pub const DEFAULT_FIRST_DISTRACTOR_SPAN: i64 = 10;

/// Default half-width of the second distractor's offset range.
pub const DEFAULT_SECOND_DISTRACTOR_SPAN: i64 = 20;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of track cells. Must be odd so a true center exists.
    pub track_length: usize,

    /// Consecutive first-try correct answers that win the match.
    ///
    /// Also divides the half-track into movement steps:
    /// `steps = (track_length / 2) / win_streak`.
    pub win_streak: u32,

    /// Display names for player 0 and player 1.
    pub player_names: PlayerPair<String>,

    /// First distractor offset is drawn from `[-span, span] \ {0}`.
    pub first_distractor_span: i64,

    /// Second distractor offset is drawn from `[-span, span] \ {0}`.
    pub second_distractor_span: i64,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            track_length: DEFAULT_TRACK_LENGTH,
            win_streak: DEFAULT_WIN_STREAK,
            player_names: PlayerPair::new("Player 1".to_string(), "Player 2".to_string()),
            first_distractor_span: DEFAULT_FIRST_DISTRACTOR_SPAN,
            second_distractor_span: DEFAULT_SECOND_DISTRACTOR_SPAN,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// ```
    /// use pacmath::core::MatchConfig;
    ///
    /// let config = MatchConfig::from_json(r#"{ "track_length": 41, "seed": 9 }"#).unwrap();
    /// assert_eq!(config.track_length, 41);
    /// assert_eq!(config.win_streak, 4);
    /// assert_eq!(config.seed, Some(9));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the track length.
    #[must_use]
    pub fn with_track_length(mut self, length: usize) -> Self {
        self.track_length = length;
        self
    }

    /// Set the streak needed to win.
    #[must_use]
    pub fn with_win_streak(mut self, streak: u32) -> Self {
        self.win_streak = streak;
        self
    }

    /// Set a player's display name.
    #[must_use]
    pub fn with_player_name(mut self, player: Player, name: impl Into<String>) -> Self {
        self.player_names[player] = name.into();
        self
    }

    /// Set both distractor spans.
    #[must_use]
    pub fn with_distractor_spans(mut self, first: i64, second: i64) -> Self {
        self.first_distractor_span = first;
        self.second_distractor_span = second;
        self
    }

    /// Fix the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Display name of a player.
    #[must_use]
    pub fn player_name(&self, player: Player) -> &str {
        &self.player_names[player]
    }

    /// Cells moved per first-try correct answer.
    #[must_use]
    pub fn steps(&self) -> usize {
        if self.win_streak == 0 {
            return 0;
        }
        (self.track_length / 2) / self.win_streak as usize
    }

    /// Check every constraint the engine relies on.
    pub fn validate(&self) -> Result<()> {
        if self.track_length % 2 == 0 {
            return Err(DuelError::InvalidConfig(format!(
                "track_length must be odd, got {}",
                self.track_length
            )));
        }
        if self.win_streak == 0 {
            return Err(DuelError::InvalidConfig("win_streak must be at least 1".into()));
        }
        if self.steps() == 0 {
            return Err(DuelError::InvalidConfig(format!(
                "track_length {} is too short for win_streak {}",
                self.track_length, self.win_streak
            )));
        }
        if self.first_distractor_span < 1 {
            return Err(DuelError::InvalidConfig(
                "first_distractor_span must be at least 1".into(),
            ));
        }
        if self.second_distractor_span < 2 {
            return Err(DuelError::InvalidConfig(
                "second_distractor_span must be at least 2".into(),
            ));
        }
        for span in [self.first_distractor_span, self.second_distractor_span] {
            if span > MAX_DISTRACTOR_SPAN {
                return Err(DuelError::InvalidConfig(format!(
                    "distractor span {span} exceeds {MAX_DISTRACTOR_SPAN}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::new();
        assert_eq!(config.track_length, 61);
        assert_eq!(config.win_streak, 4);
        assert_eq!(config.steps(), 7);
        assert_eq!(config.player_name(Player::First), "Player 1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new()
            .with_track_length(21)
            .with_win_streak(2)
            .with_player_name(Player::Second, "Leticia")
            .with_distractor_spans(5, 8)
            .with_seed(11);

        assert_eq!(config.steps(), 5);
        assert_eq!(config.player_name(Player::Second), "Leticia");
        assert_eq!(config.first_distractor_span, 5);
        assert_eq!(config.second_distractor_span, 8);
        assert_eq!(config.seed, Some(11));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_even_track() {
        let err = MatchConfig::new().with_track_length(60).validate().unwrap_err();
        assert!(matches!(err, DuelError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_zero_steps() {
        let config = MatchConfig::new().with_track_length(5).with_win_streak(4);
        assert_eq!(config.steps(), 0);
        assert!(config.validate().is_err());

        assert!(MatchConfig::new().with_win_streak(0).validate().is_err());
    }

    #[test]
    fn test_rejects_narrow_spans() {
        assert!(MatchConfig::new().with_distractor_spans(0, 20).validate().is_err());
        assert!(MatchConfig::new().with_distractor_spans(10, 1).validate().is_err());
    }

    #[test]
    fn test_rejects_wide_spans() {
        let config = MatchConfig::new().with_distractor_spans(10, MAX_DISTRACTOR_SPAN + 1);
        assert!(matches!(config.validate(), Err(DuelError::InvalidConfig(_))));

        let err = MatchConfig::from_json(r#"{ "first_distractor_span": 1099511627776 }"#);
        assert!(matches!(err, Err(DuelError::InvalidConfig(_))));

        let config = MatchConfig::new()
            .with_distractor_spans(MAX_DISTRACTOR_SPAN - 1, MAX_DISTRACTOR_SPAN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "track_length": 31,
            "player_names": ["Larissa", "Leticia"]
        }"#;
        let config = MatchConfig::from_json(json).unwrap();
        assert_eq!(config.track_length, 31);
        assert_eq!(config.player_name(Player::First), "Larissa");
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(matches!(
            MatchConfig::from_json("{ \"track_length\": 30 }"),
            Err(DuelError::InvalidConfig(_))
        ));
        assert!(matches!(
            MatchConfig::from_json("{ track_length }"),
            Err(DuelError::Config(_))
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = MatchConfig::new().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(MatchConfig::from_json(&json).unwrap(), config);
    }
}

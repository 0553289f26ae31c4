//! Match phases.
//!
//! `SelectingDifficulty -> Playing -> Finished`, and `Finished ->
//! SelectingDifficulty` on restart. The winner lives inside `Finished`
//! so a winner can only exist once the match is over.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Current phase of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a difficulty pick.
    SelectingDifficulty,
    /// Questions are being answered.
    Playing,
    /// Match over.
    Finished { winner: Player },
}

impl Phase {
    /// The phase without its payload, for comparisons and error reports.
    #[must_use]
    pub const fn kind(self) -> PhaseKind {
        match self {
            Phase::SelectingDifficulty => PhaseKind::SelectingDifficulty,
            Phase::Playing => PhaseKind::Playing,
            Phase::Finished { .. } => PhaseKind::Finished,
        }
    }

    /// Winner, if the match is finished.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Payload-free phase tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseKind {
    SelectingDifficulty,
    Playing,
    Finished,
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PhaseKind::SelectingDifficulty => "SelectingDifficulty",
            PhaseKind::Playing => "Playing",
            PhaseKind::Finished => "Finished",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_winner() {
        assert_eq!(Phase::Playing.kind(), PhaseKind::Playing);
        assert_eq!(Phase::Playing.winner(), None);

        let done = Phase::Finished { winner: Player::Second };
        assert_eq!(done.kind(), PhaseKind::Finished);
        assert_eq!(done.winner(), Some(Player::Second));
    }
}

//! The result of evaluating one submitted answer.
//!
//! A `Transition` says what happened and carries everything
//! [`MatchState::apply`](crate::game::MatchState::apply) needs to perform
//! the change, plus what a front end needs to animate it (movement,
//! revealed answer, next question).

use serde::{Deserialize, Serialize};

use crate::core::{Movement, Player};
use crate::question::Question;

/// Outcome of one answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// First-try correct answer; the match goes on and the turn passes.
    Advanced {
        player: Player,
        streak: u32,
        movement: Movement,
        next_question: Question,
    },

    /// First-try correct answer that wins the match.
    ///
    /// `final_position` is the winner's goal end of the track.
    Won {
        player: Player,
        streak: u32,
        movement: Movement,
        final_position: usize,
    },

    /// First wrong answer. Same player, same question.
    SecondChance {
        player: Player,
        submitted: i64,
        correct_answer: i64,
    },

    /// Correct on the second try. No movement, streak unchanged, turn passes.
    Recovered {
        player: Player,
        streak: u32,
        next_question: Question,
    },

    /// Wrong twice. Streak reset to 0, turn passes.
    TurnLost {
        player: Player,
        submitted: i64,
        correct_answer: i64,
        next_question: Question,
    },
}

impl Transition {
    /// Player who answered.
    #[must_use]
    pub fn player(&self) -> Player {
        match self {
            Transition::Advanced { player, .. }
            | Transition::Won { player, .. }
            | Transition::SecondChance { player, .. }
            | Transition::Recovered { player, .. }
            | Transition::TurnLost { player, .. } => *player,
        }
    }

    /// Variant name, for logs and error messages.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Transition::Advanced { .. } => "Advanced",
            Transition::Won { .. } => "Won",
            Transition::SecondChance { .. } => "SecondChance",
            Transition::Recovered { .. } => "Recovered",
            Transition::TurnLost { .. } => "TurnLost",
        }
    }

    /// Check whether the submitted answer was correct.
    #[must_use]
    pub fn was_correct(&self) -> bool {
        matches!(
            self,
            Transition::Advanced { .. } | Transition::Won { .. } | Transition::Recovered { .. }
        )
    }

    /// Token movement, if the token moved.
    #[must_use]
    pub fn movement(&self) -> Option<&Movement> {
        match self {
            Transition::Advanced { movement, .. } | Transition::Won { movement, .. } => Some(movement),
            _ => None,
        }
    }

    /// Question the next player answers, if the turn passed.
    #[must_use]
    pub fn next_question(&self) -> Option<&Question> {
        match self {
            Transition::Advanced { next_question, .. }
            | Transition::Recovered { next_question, .. }
            | Transition::TurnLost { next_question, .. } => Some(next_question),
            _ => None,
        }
    }

    /// Winner, if this transition ended the match.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Transition::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Check whether the turn passes to the opponent.
    #[must_use]
    pub fn switches_turn(&self) -> bool {
        self.next_question().is_some()
    }

    /// Answering player's streak after this transition.
    ///
    /// `None` for a granted second chance, which leaves the streak as is.
    #[must_use]
    pub fn streak_after(&self) -> Option<u32> {
        match self {
            Transition::Advanced { streak, .. }
            | Transition::Won { streak, .. }
            | Transition::Recovered { streak, .. } => Some(*streak),
            Transition::TurnLost { .. } => Some(0),
            Transition::SecondChance { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_chance_accessors() {
        let t = Transition::SecondChance {
            player: Player::First,
            submitted: 10,
            correct_answer: 12,
        };
        assert_eq!(t.player(), Player::First);
        assert!(!t.was_correct());
        assert!(t.movement().is_none());
        assert!(!t.switches_turn());
        assert_eq!(t.winner(), None);
        assert_eq!(t.streak_after(), None);
    }

    #[test]
    fn test_won_accessors() {
        let movement = Movement { player: Player::Second, from: 9, to: 2 };
        let t = Transition::Won {
            player: Player::Second,
            streak: 4,
            movement,
            final_position: 0,
        };
        assert!(t.was_correct());
        assert_eq!(t.movement(), Some(&movement));
        assert_eq!(t.winner(), Some(Player::Second));
        assert!(!t.switches_turn());
        assert_eq!(t.streak_after(), Some(4));
    }
}

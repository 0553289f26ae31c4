//! Player-facing feedback for each transition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::PlayerPair;
use crate::rules::Transition;

/// How a front end should present a feedback line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackTone {
    Correct,
    Wrong,
    Victory,
}

/// Message shown after an answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub tone: FeedbackTone,
    pub message: String,
}

impl Feedback {
    /// Build the message for `transition`.
    ///
    /// Streak counts are shown against `win_streak`; a win names the
    /// winner from `names`.
    #[must_use]
    pub fn for_transition(
        transition: &Transition,
        names: &PlayerPair<String>,
        win_streak: u32,
    ) -> Self {
        match transition {
            Transition::Advanced { streak, .. } => Self {
                tone: FeedbackTone::Correct,
                message: format!("Correct! ({streak}/{win_streak})"),
            },
            Transition::Won { player, .. } => Self {
                tone: FeedbackTone::Victory,
                message: format!("{} wins!", names[*player]),
            },
            Transition::SecondChance { correct_answer, .. } => Self {
                tone: FeedbackTone::Wrong,
                message: format!("Wrong! The answer was {correct_answer}. Second chance!"),
            },
            Transition::Recovered { streak, .. } => Self {
                tone: FeedbackTone::Correct,
                message: format!(
                    "Correct on second chance! The token does not move. ({streak}/{win_streak})"
                ),
            },
            Transition::TurnLost { correct_answer, .. } => Self {
                tone: FeedbackTone::Wrong,
                message: format!("Wrong again! The answer was {correct_answer}. Turn lost!"),
            },
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, MatchConfig, Player};
    use crate::difficulty::FactorPool;
    use crate::game::MatchState;

    fn names() -> PlayerPair<String> {
        PlayerPair::new("Larissa".to_string(), "Leticia".to_string())
    }

    fn started() -> (MatchState, GameRng) {
        let mut rng = GameRng::new(3);
        let mut state = MatchState::new(&MatchConfig::new()).unwrap();
        state
            .select_difficulty("4", FactorPool::new([7]).unwrap(), &mut rng)
            .unwrap();
        (state, rng)
    }

    #[test]
    fn test_correct_message() {
        let (mut state, mut rng) = started();
        let t = state.submit(49, &mut rng).unwrap();
        let fb = Feedback::for_transition(&t, &names(), 4);
        assert_eq!(fb.tone, FeedbackTone::Correct);
        assert_eq!(fb.to_string(), "Correct! (1/4)");
    }

    #[test]
    fn test_second_chance_messages() {
        let (mut state, mut rng) = started();
        let t = state.submit(48, &mut rng).unwrap();
        assert_eq!(
            Feedback::for_transition(&t, &names(), 4).message,
            "Wrong! The answer was 49. Second chance!"
        );

        let t = state.submit(49, &mut rng).unwrap();
        assert_eq!(
            Feedback::for_transition(&t, &names(), 4).message,
            "Correct on second chance! The token does not move. (0/4)"
        );
    }

    #[test]
    fn test_turn_lost_message() {
        let (mut state, mut rng) = started();
        state.submit(1, &mut rng).unwrap();
        let t = state.submit(2, &mut rng).unwrap();
        let fb = Feedback::for_transition(&t, &names(), 4);
        assert_eq!(fb.tone, FeedbackTone::Wrong);
        assert_eq!(fb.message, "Wrong again! The answer was 49. Turn lost!");
    }

    #[test]
    fn test_win_names_the_winner() {
        let (mut state, mut rng) = started();
        // Player 1 always loses the turn, so player 0 builds a streak of 4.
        let mut last = None;
        while !state.is_finished() {
            let t = match state.active_player() {
                Player::First => state.submit(49, &mut rng).unwrap(),
                Player::Second => {
                    state.submit(0, &mut rng).unwrap();
                    state.submit(0, &mut rng).unwrap()
                }
            };
            last = Some(t);
        }
        let fb = Feedback::for_transition(&last.unwrap(), &names(), 4);
        assert_eq!(fb.tone, FeedbackTone::Victory);
        assert_eq!(fb.message, "Larissa wins!");
    }
}

//! Round evaluation: decides what a submitted answer does.
//!
//! | second chance | correct | effect |
//! |---|---|---|
//! | no  | yes | streak + 1, token moves `steps` toward the player's goal; win on streak or boundary, else turn passes |
//! | no  | no  | second chance granted, nothing else changes |
//! | yes | yes | turn passes, no movement, streak unchanged |
//! | yes | no  | streak reset to 0, turn passes |
//!
//! Evaluation never mutates the state. The only side effect is drawing the
//! next question from the RNG when the turn passes.

use log::debug;

use super::transition::Transition;
use crate::core::{RangeRng, Result};
use crate::game::MatchState;

/// Evaluate `submitted` against the current question.
///
/// Fails with `InvalidPhase` unless the match is `Playing`.
pub fn evaluate<R: RangeRng>(state: &MatchState, submitted: i64, rng: &mut R) -> Result<Transition> {
    let question = state.playing_question()?;
    let player = state.active_player();
    let streak = state.streak(player);
    let correct_answer = question.correct_answer();
    let correct = question.is_correct(submitted);

    debug!(
        "{} answered {} to {} (correct {}, second chance {})",
        player,
        submitted,
        question,
        correct_answer,
        state.second_chance()
    );

    let transition = match (state.second_chance(), correct) {
        (false, true) => {
            let streak = streak + 1;
            let track = state.track();
            let movement = track.advance(state.token_position(), player);

            // Both win conditions are checked on every first-try success.
            if streak >= state.win_streak() || track.is_boundary(movement.to) {
                Transition::Won {
                    player,
                    streak,
                    movement,
                    final_position: track.goal(player),
                }
            } else {
                Transition::Advanced {
                    player,
                    streak,
                    movement,
                    next_question: state.next_question(rng)?,
                }
            }
        }
        (false, false) => Transition::SecondChance {
            player,
            submitted,
            correct_answer,
        },
        (true, true) => Transition::Recovered {
            player,
            streak,
            next_question: state.next_question(rng)?,
        },
        (true, false) => Transition::TurnLost {
            player,
            submitted,
            correct_answer,
            next_question: state.next_question(rng)?,
        },
    };

    Ok(transition)
}

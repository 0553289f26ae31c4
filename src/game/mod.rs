//! Match state and the session that drives it.
//!
//! - `state`: the `MatchState` aggregate and its phase transitions
//! - `feedback`: player-facing messages for each transition
//! - `session`: event handling, history and RNG ownership

pub mod feedback;
pub mod session;
pub mod state;

pub use feedback::{Feedback, FeedbackTone};
pub use session::{Event, EventOutcome, Session, TransitionRecord};
pub use state::MatchState;

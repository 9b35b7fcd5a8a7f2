//! Assistant module for VitalSense
//!
//! The simulated mental-health chat assistant. Replies come from an
//! ordered keyword rule table, not a model; the session layer adds the
//! transcript, the typing delay, and the idle/awaiting state machine.
//!
//! - `rules` - `RuleTable`, the first-match-wins keyword responder
//! - `session` - `ChatSession`, transcript orchestration around the table

mod rules;
mod session;

pub use rules::{GREETING, Rule, RuleTable, respond};
pub use session::{ChatSession, PendingReply, SessionState, TYPING_DELAY};

use super::rules::{GREETING, RuleTable};
use crate::types::Message;
use std::time::Duration;

/// Simulated thinking time before the assistant turn appears.
pub const TYPING_DELAY: Duration = Duration::from_millis(1500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

/// The reply owed for an accepted submit, to be applied once the typing
/// delay has elapsed. Single-use: applying it consumes it.
#[derive(Debug)]
pub struct PendingReply {
    reply: String,
}

/// One chat conversation: an append-only transcript driven by the rule
/// table, with a fixed simulated typing delay between the user turn and
/// the generated assistant turn.
///
/// A submit while a reply is still pending is dropped, so assistant turns
/// always land directly after the user turn that triggered them.
pub struct ChatSession {
    table: RuleTable,
    transcript: Vec<Message>,
    state: SessionState,
    delay: Duration,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            table: RuleTable::builtin(),
            transcript: vec![Message::assistant(GREETING)],
            state: SessionState::Idle,
            delay: TYPING_DELAY,
        }
    }

    /// Override the typing delay, e.g. `Duration::ZERO` in tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_table(mut self, table: RuleTable) -> Self {
        self.table = table;
        self
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.state == SessionState::AwaitingResponse
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Append the user turn and generate its reply. Returns `None` (and
    /// leaves the transcript untouched) for blank input or while a prior
    /// reply is still pending.
    pub fn begin_submit(&mut self, text: &str) -> Option<PendingReply> {
        let trimmed = text.trim();
        if trimmed.is_empty() || self.is_awaiting_response() {
            return None;
        }
        self.transcript.push(Message::user(trimmed));
        self.state = SessionState::AwaitingResponse;
        Some(PendingReply {
            reply: self.table.respond(trimmed).to_string(),
        })
    }

    /// Append the assistant turn for an accepted submit and return to idle.
    pub fn apply_reply(&mut self, pending: PendingReply) {
        self.transcript.push(Message::assistant(pending.reply));
        self.state = SessionState::Idle;
    }

    /// Submit one user message and wait out the typing delay before the
    /// assistant turn is appended. Returns false if the submit was dropped.
    pub async fn submit(&mut self, text: &str) -> bool {
        let Some(pending) = self.begin_submit(text) else {
            return false;
        };
        tokio::time::sleep(self.delay).await;
        self.apply_reply(pending);
        true
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn session_starts_with_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, Role::Assistant);
        assert_eq!(session.transcript()[0].content, GREETING);
        assert!(!session.is_awaiting_response());
    }

    #[test]
    fn blank_input_is_dropped() {
        let mut session = ChatSession::new();
        assert!(session.begin_submit("   ").is_none());
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn submit_while_awaiting_is_dropped() {
        let mut session = ChatSession::new();
        let pending = session.begin_submit("hello").expect("first submit accepted");
        assert!(session.begin_submit("hello again").is_none());
        session.apply_reply(pending);
        assert!(session.begin_submit("hello again").is_some());
    }
}

//! Integration tests for the rule-based assistant
//!
//! Covers responder determinism and precedence, and the chat session's
//! transcript ordering around the simulated typing delay. Sessions run on
//! tokio's paused clock so the delay costs no wall time.

use std::time::Duration;
use vitalsense::assistant::{ChatSession, GREETING, respond};
use vitalsense::types::Role;

mod responder_tests {
    use super::*;

    #[test]
    fn same_input_always_maps_to_same_reply() {
        let reply = respond("I'm feeling very stressed");
        for _ in 0..3 {
            assert_eq!(respond("I'm feeling very stressed"), reply);
        }
        assert!(reply.contains("breathing exercise"));
    }

    #[test]
    fn earlier_rule_wins_when_keywords_overlap() {
        // "stressed" matches rule 1, "thanks" matches rule 4; the table
        // order decides, regardless of keyword position in the input.
        let reply = respond("thanks, though I'm still stressed");
        assert!(reply.contains("breathing exercise"));
        assert!(!reply.contains("very welcome"));
    }

    #[test]
    fn unmatched_and_empty_input_get_default_reply() {
        let default = respond("");
        assert_eq!(respond("xyz123"), default);
        assert!(default.contains("Thank you for sharing"));
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(respond("CAN'T SLEEP"), respond("can't sleep"));
    }
}

mod session_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn submit_appends_user_turn_then_generated_reply() {
        let mut session = ChatSession::new();
        assert!(session.submit("hello").await);

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 3); // greeting + user + reply
        let user = &transcript[transcript.len() - 2];
        let reply = &transcript[transcript.len() - 1];

        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "hello");
        assert_eq!(reply.role, Role::Assistant);
        assert_eq!(reply.content, respond("hello"));
        assert!(reply.created_at >= user.created_at);
        assert!(!session.is_awaiting_response());
    }

    #[tokio::test(start_paused = true)]
    async fn keyword_submit_gets_matching_reply() {
        let mut session = ChatSession::new();
        session.submit("I'm feeling stressed").await;

        let reply = session.transcript().last().unwrap();
        assert!(reply.content.contains("breathing exercise"));
    }

    #[tokio::test(start_paused = true)]
    async fn blank_submit_is_dropped() {
        let mut session = ChatSession::new();
        assert!(!session.submit("   ").await);
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].content, GREETING);
    }

    #[tokio::test]
    async fn delay_is_injectable() {
        let mut session = ChatSession::new().with_delay(Duration::ZERO);
        assert!(session.submit("thanks").await);
        assert!(session.transcript().last().unwrap().content.contains("very welcome"));
    }

    #[test]
    fn submit_while_awaiting_response_is_dropped() {
        let mut session = ChatSession::new();
        let pending = session.begin_submit("hello").expect("accepted");
        assert!(session.is_awaiting_response());

        assert!(session.begin_submit("are you there?").is_none());
        assert_eq!(session.transcript().len(), 2); // greeting + first user turn

        session.apply_reply(pending);
        assert!(!session.is_awaiting_response());
        assert_eq!(session.transcript().len(), 3);
    }
}

use once_cell::sync::Lazy;

/// Opening assistant message every chat session starts with.
pub const GREETING: &str = "Hello! I'm your AI mental health assistant. I'm here to listen, provide support, and help you manage stress. How are you feeling today?";

const STRESS_REPLY: &str = "I understand you're feeling stressed. Let's try a quick breathing exercise: Take a deep breath in for 4 counts, hold for 4, and exhale for 4. Repeat this 3 times. Would you like to talk about what's causing the stress?";

const SADNESS_REPLY: &str = "I'm sorry you're feeling this way. Your feelings are valid. Sometimes it helps to break down what's troubling you. Would you like to share what's on your mind? Remember, if you're experiencing severe depression, please reach out to a professional through our Doctors Directory.";

const SLEEP_REPLY: &str = "Sleep issues can really affect our mental health. Here are some tips: maintain a consistent sleep schedule, avoid screens 1 hour before bed, and try relaxation techniques. Would you like me to guide you through a relaxation exercise?";

const THANKS_REPLY: &str = "You're very welcome! I'm here whenever you need support. Remember, taking care of your mental health is a sign of strength. Is there anything else I can help you with today?";

const EMERGENCY_REPLY: &str = "If you're in crisis or need immediate help, please use our Emergency Support feature in the navigation menu, or call your local emergency services. For non-emergency support, I'm here to listen and help. What would you like to talk about?";

const FALLBACK_REPLY: &str = "Thank you for sharing that with me. I'm here to support you. Can you tell me more about how you're feeling? Sometimes talking through our thoughts can help us understand them better.";

/// One keyword-set-to-reply pair. Keywords match case-insensitively as
/// substrings of the input.
pub struct Rule {
    keywords: Vec<String>,
    reply: String,
}

impl Rule {
    pub fn new(keywords: &[&str], reply: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            reply: reply.to_string(),
        }
    }

    fn matches(&self, normalized_input: &str) -> bool {
        self.keywords.iter().any(|k| normalized_input.contains(k.as_str()))
    }
}

/// Ordered rule table with a fallback reply. Evaluation is
/// first-match-wins over the table order.
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: String,
}

impl RuleTable {
    pub fn new(rules: Vec<Rule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// The built-in demo table. Order matters: earlier rules win.
    pub fn builtin() -> Self {
        Self::new(
            vec![
                Rule::new(&["stress", "anxious", "worried"], STRESS_REPLY),
                Rule::new(&["sad", "depressed", "down"], SADNESS_REPLY),
                Rule::new(&["sleep", "insomnia", "tired"], SLEEP_REPLY),
                Rule::new(&["thank", "thanks"], THANKS_REPLY),
                Rule::new(&["help", "emergency"], EMERGENCY_REPLY),
            ],
            FALLBACK_REPLY,
        )
    }

    /// Map one free-text input to a reply. Pure and total: any string,
    /// including the empty one, yields a reply.
    pub fn respond(&self, input: &str) -> &str {
        let normalized = input.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::builtin()
    }
}

static BUILTIN: Lazy<RuleTable> = Lazy::new(RuleTable::builtin);

/// Respond with the built-in table.
pub fn respond(input: &str) -> &'static str {
    BUILTIN.respond(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_are_case_insensitive() {
        assert_eq!(respond("I'm SO Stressed out"), STRESS_REPLY);
        assert_eq!(respond("can't SLEEP lately"), SLEEP_REPLY);
    }

    #[test]
    fn earlier_rule_wins_on_overlap() {
        // "stress" (rule 1) beats "thanks" (rule 4).
        assert_eq!(respond("thanks, but I'm still stressed"), STRESS_REPLY);
        // "sad" (rule 2) beats "tired" (rule 3).
        assert_eq!(respond("tired and sad"), SADNESS_REPLY);
    }

    #[test]
    fn unmatched_input_gets_fallback() {
        assert_eq!(respond(""), FALLBACK_REPLY);
        assert_eq!(respond("xyz123"), FALLBACK_REPLY);
    }

    #[test]
    fn same_input_same_output() {
        let first = respond("I'm feeling very stressed");
        let second = respond("I'm feeling very stressed");
        assert_eq!(first, second);
        assert_eq!(first, STRESS_REPLY);
    }
}

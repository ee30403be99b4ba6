use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Quick-help buttons shown in the buddy sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    Ideas,
    Spelling,
    Improve,
    Details,
}

impl QuickAction {
    pub const ALL: [QuickAction; 4] = [
        QuickAction::Ideas,
        QuickAction::Spelling,
        QuickAction::Improve,
        QuickAction::Details,
    ];

    /// The label is also what gets echoed into the transcript as the user
    /// message when the button is pressed.
    pub fn label(self) -> &'static str {
        match self {
            QuickAction::Ideas => "Give me ideas",
            QuickAction::Spelling => "Check my spelling",
            QuickAction::Improve => "Make it better",
            QuickAction::Details => "Add more details",
        }
    }
}

/// Source of assistant replies. The canned implementation stands in for a
/// real chat-completion service.
pub trait ReplyProvider {
    fn quick_reply(&mut self, action: QuickAction) -> String;
    fn free_reply(&mut self, input: &str) -> String;
}

const FREE_TEXT_REPLIES: [&str; 4] = [
    "That's a great question! Let me help you with that.",
    "I love your creativity! Here's what I think...",
    "Good thinking! You're on the right track.",
    "That's an interesting idea! Let's explore it together.",
];

pub struct CannedReplies {
    rng: SmallRng,
}

impl CannedReplies {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    #[cfg(test)]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for CannedReplies {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplyProvider for CannedReplies {
    fn quick_reply(&mut self, action: QuickAction) -> String {
        let reply = match action {
            QuickAction::Ideas => {
                "Here are some ideas to help your story: Try adding more characters, describe what they look like, or tell us what they're feeling! You could also add some exciting action or a surprise twist!"
            }
            QuickAction::Spelling => {
                "I'll help you check your spelling! Keep writing and I'll point out any words that might need fixing. Remember, it's okay to make mistakes - that's how we learn!"
            }
            QuickAction::Improve => {
                "To make your writing even better, try using more describing words (adjectives) and action words (verbs). Show don't tell - instead of saying 'I was happy', try 'I smiled so wide my cheeks hurt!'"
            }
            QuickAction::Details => {
                "Great idea! Add details about what you can see, hear, smell, taste, or touch. This helps readers feel like they're right there in your story! What colors do you see? What sounds do you hear?"
            }
        };
        reply.to_string()
    }

    fn free_reply(&mut self, _input: &str) -> String {
        let idx = self.rng.gen_range(0..FREE_TEXT_REPLIES.len());
        FREE_TEXT_REPLIES[idx].to_string()
    }
}

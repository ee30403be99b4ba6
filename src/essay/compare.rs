/// Minimum trimmed char count before comparison feedback is produced.
pub const COMPARE_MIN_CHARS: usize = 50;

const TOO_SHORT_FEEDBACK: [&str; 2] = [
    "You need to write more in the writing area before comparing.",
    "Try writing at least a few sentences to get meaningful comparison feedback.",
];

const CANNED_FEEDBACK: [&str; 4] = [
    "Your opening could be more engaging like the example.",
    "The example uses more descriptive language and sensory details.",
    "Your writing has good ideas but could benefit from more varied sentence structures.",
    "Try adding more specific details to bring your writing to life.",
];

/// Placeholder for a real comparison service: the feedback is gated on a
/// length threshold only, never computed from either text.
pub fn comparison_feedback(user_content: &str) -> &'static [&'static str] {
    if user_content.trim().chars().count() < COMPARE_MIN_CHARS {
        &TOO_SHORT_FEEDBACK
    } else {
        &CANNED_FEEDBACK
    }
}

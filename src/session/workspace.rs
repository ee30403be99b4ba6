use std::time::Duration;

use crate::buddy::replies::{CannedReplies, QuickAction};
use crate::buddy::transcript::Transcript;
use crate::session::editor::TextEditor;
use crate::ui::line_input::LineInput;

/// Word-count gate for submitting a draft for feedback.
pub const SUBMIT_MIN_WORDS: usize = 50;
/// Word count at which the status bar celebrates a good length.
pub const GOOD_LENGTH_WORDS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkspaceFocus {
    Editor,
    Buddy,
}

/// State for the writing workspace screen: the draft editor, the Writing
/// Buddy sidebar, and the one-time tutorial overlay.
pub struct Workspace {
    pub editor: TextEditor,
    pub transcript: Transcript,
    pub replies: CannedReplies,
    pub chat_input: LineInput,
    pub focus: WorkspaceFocus,
    pub show_buddy: bool,
    pub show_tutorial: bool,
    pub text_type: String,
}

impl Workspace {
    pub fn new(text_type: &str, draft: &str, reply_delay: Duration, tutorial_seen: bool) -> Self {
        let mut transcript = Transcript::new(reply_delay);
        transcript.push_buddy(&format!(
            "Hi there! I'm your Writing Buddy! I'm here to help you write an amazing {text_type}. \
             Just ask me anything or use the quick help shortcuts below!"
        ));
        Self {
            editor: TextEditor::from_content(draft),
            transcript,
            replies: CannedReplies::new(),
            chat_input: LineInput::new(""),
            focus: WorkspaceFocus::Editor,
            show_buddy: true,
            show_tutorial: !tutorial_seen,
            text_type: text_type.to_string(),
        }
    }

    pub fn word_count(&self) -> usize {
        self.editor.word_count()
    }

    pub fn can_submit(&self) -> bool {
        self.word_count() >= SUBMIT_MIN_WORDS
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            WorkspaceFocus::Editor => WorkspaceFocus::Buddy,
            WorkspaceFocus::Buddy => WorkspaceFocus::Editor,
        };
    }

    pub fn toggle_buddy(&mut self) {
        self.show_buddy = !self.show_buddy;
        if !self.show_buddy {
            self.focus = WorkspaceFocus::Editor;
        }
    }

    /// Send the chat input line. Blank input no-ops inside the transcript;
    /// the input box is only cleared when a message actually went out.
    pub fn send_chat(&mut self) {
        let text = self.chat_input.value().to_string();
        if self.transcript.send_free_text(&text, &mut self.replies) {
            self.chat_input.clear();
        }
    }

    pub fn send_quick(&mut self, action: QuickAction) {
        self.transcript.send_quick(action, &mut self.replies);
    }

    /// Buddy-side confirmation appended after a successful draft save.
    pub fn note_saved(&mut self) {
        self.transcript
            .push_buddy("Great job! Your work has been saved!");
    }

    pub fn dismiss_tutorial(&mut self) {
        self.show_tutorial = false;
    }

    /// Teardown: drop pending replies so none fire into a dead screen.
    pub fn cancel_pending_replies(&mut self) {
        self.transcript.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    fn workspace(tutorial_seen: bool) -> Workspace {
        Workspace::new("narrative", "", Duration::from_millis(1500), tutorial_seen)
    }

    #[test]
    fn test_welcome_message_mentions_text_type() {
        let ws = workspace(true);
        assert_eq!(ws.transcript.messages().len(), 1);
        assert!(ws.transcript.messages()[0].content.contains("narrative"));
    }

    #[test]
    fn test_tutorial_gated_on_seen_flag() {
        assert!(workspace(false).show_tutorial);
        assert!(!workspace(true).show_tutorial);
    }

    #[test]
    fn test_submit_gate_at_50_words() {
        let mut ws = workspace(true);
        assert!(!ws.can_submit());
        let text = "word ".repeat(49);
        ws.editor = TextEditor::from_content(text.trim());
        assert!(!ws.can_submit());
        let text = "word ".repeat(50);
        ws.editor = TextEditor::from_content(text.trim());
        assert!(ws.can_submit());
    }

    #[test]
    fn test_send_chat_clears_input_only_on_send() {
        let mut ws = workspace(true);
        ws.chat_input = LineInput::new("   ");
        ws.send_chat();
        assert_eq!(ws.chat_input.value(), "   ");
        assert_eq!(ws.transcript.messages().len(), 1); // welcome only

        ws.chat_input = LineInput::new("help me");
        ws.send_chat();
        assert!(ws.chat_input.is_empty());
        assert_eq!(ws.transcript.messages().len(), 2);
    }

    #[test]
    fn test_save_appends_confirmation() {
        let mut ws = workspace(true);
        ws.note_saved();
        let last = ws.transcript.messages().last().unwrap();
        assert!(last.content.contains("saved"));
        // Confirmation is immediate, not a delayed reply
        assert!(!ws.transcript.is_typing());
    }

    #[test]
    fn test_hiding_buddy_returns_focus_to_editor() {
        let mut ws = workspace(true);
        ws.toggle_focus();
        assert_eq!(ws.focus, WorkspaceFocus::Buddy);
        ws.toggle_buddy();
        assert!(!ws.show_buddy);
        assert_eq!(ws.focus, WorkspaceFocus::Editor);
    }

    #[test]
    fn test_cancel_on_teardown() {
        let mut ws = workspace(true);
        ws.chat_input = LineInput::new("question");
        ws.send_chat();
        assert!(ws.transcript.is_typing());
        ws.cancel_pending_replies();
        assert!(!ws.transcript.is_typing());
        assert_eq!(
            ws.transcript.poll(Instant::now() + Duration::from_secs(5)),
            0
        );
    }
}

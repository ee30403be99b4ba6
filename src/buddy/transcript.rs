use std::time::{Duration, Instant};

use crate::buddy::message::{BuddyMessage, Sender};
use crate::buddy::replies::{QuickAction, ReplyProvider};

/// A scheduled buddy reply. Replies are deadline-based and polled from the
/// app tick loop rather than fired from detached timers, so they can be
/// cancelled when the workspace is left.
struct PendingReply {
    due_at: Instant,
    content: String,
}

/// Append-only chat transcript with simulated asynchronous replies.
///
/// Per send: Idle -> user message appended synchronously -> reply pending
/// (`is_typing` true) -> reply appended on a later `poll` -> Idle. Multiple
/// rapid sends queue independent pending replies.
pub struct Transcript {
    messages: Vec<BuddyMessage>,
    pending: Vec<PendingReply>,
    next_id: u64,
    reply_delay: Duration,
}

impl Transcript {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            messages: Vec::new(),
            pending: Vec::new(),
            next_id: 1,
            reply_delay,
        }
    }

    pub fn messages(&self) -> &[BuddyMessage] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        !self.pending.is_empty()
    }

    fn append(&mut self, sender: Sender, content: &str) {
        let msg = BuddyMessage::new(self.next_id, sender, content);
        self.next_id += 1;
        self.messages.push(msg);
    }

    /// Append a buddy message immediately, bypassing the reply delay.
    /// Used for the welcome message and save confirmations.
    pub fn push_buddy(&mut self, content: &str) {
        self.append(Sender::Buddy, content);
    }

    /// Send free-text input. Blank/whitespace-only input is a silent no-op
    /// and does not start a typing indicator. Returns whether a message was
    /// actually sent.
    pub fn send_free_text(&mut self, text: &str, provider: &mut dyn ReplyProvider) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.append(Sender::User, text);
        let content = provider.free_reply(text);
        self.pending.push(PendingReply {
            due_at: Instant::now() + self.reply_delay,
            content,
        });
        true
    }

    /// Send a quick-suggestion action: the button label is echoed as the user
    /// message and the action-keyed reply is scheduled.
    pub fn send_quick(&mut self, action: QuickAction, provider: &mut dyn ReplyProvider) {
        self.append(Sender::User, action.label());
        let content = provider.quick_reply(action);
        self.pending.push(PendingReply {
            due_at: Instant::now() + self.reply_delay,
            content,
        });
    }

    /// Append every pending reply whose deadline has passed. Returns the
    /// number of replies delivered.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut delivered = 0;
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].due_at <= now {
                let reply = self.pending.remove(i);
                self.append(Sender::Buddy, &reply.content);
                delivered += 1;
            } else {
                i += 1;
            }
        }
        delivered
    }

    /// Drop all pending replies without delivering them. Called on workspace
    /// teardown so no reply fires into a dead screen.
    pub fn cancel_pending(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buddy::replies::CannedReplies;

    fn transcript() -> (Transcript, CannedReplies) {
        (Transcript::new(Duration::from_millis(1500)), CannedReplies::seeded(3))
    }

    #[test]
    fn test_blank_send_is_noop() {
        let (mut t, mut replies) = transcript();
        assert!(!t.send_free_text("", &mut replies));
        assert!(!t.send_free_text("   \t\n", &mut replies));
        assert!(t.messages().is_empty());
        assert!(!t.is_typing());
    }

    #[test]
    fn test_send_appends_user_message_synchronously() {
        let (mut t, mut replies) = transcript();
        assert!(t.send_free_text("how do I start?", &mut replies));
        assert_eq!(t.messages().len(), 1);
        assert_eq!(t.messages()[0].sender, Sender::User);
        assert_eq!(t.messages()[0].content, "how do I start?");
        assert!(t.is_typing());
    }

    #[test]
    fn test_reply_arrives_after_delay() {
        let (mut t, mut replies) = transcript();
        t.send_free_text("hello", &mut replies);

        // Before the deadline nothing is delivered
        assert_eq!(t.poll(Instant::now()), 0);
        assert!(t.is_typing());

        // At/after the deadline exactly one buddy message appears
        let delivered = t.poll(Instant::now() + Duration::from_millis(1500));
        assert_eq!(delivered, 1);
        assert_eq!(t.messages().len(), 2);
        assert_eq!(t.messages()[1].sender, Sender::Buddy);
        assert!(!t.is_typing());
    }

    #[test]
    fn test_rapid_sends_queue_independent_replies() {
        let (mut t, mut replies) = transcript();
        t.send_free_text("one", &mut replies);
        t.send_free_text("two", &mut replies);
        t.send_free_text("three", &mut replies);
        assert_eq!(t.messages().len(), 3);
        assert!(t.is_typing());

        let delivered = t.poll(Instant::now() + Duration::from_secs(2));
        assert_eq!(delivered, 3);
        assert_eq!(t.messages().len(), 6);
        assert!(!t.is_typing());
    }

    #[test]
    fn test_quick_action_echoes_label_and_replies() {
        let (mut t, mut replies) = transcript();
        t.send_quick(QuickAction::Improve, &mut replies);
        assert_eq!(t.messages()[0].content, "Make it better");
        t.poll(Instant::now() + Duration::from_secs(2));
        assert!(t.messages()[1].content.contains("Show don't tell"));
    }

    #[test]
    fn test_cancel_pending_drops_replies() {
        let (mut t, mut replies) = transcript();
        t.send_free_text("hello", &mut replies);
        t.cancel_pending();
        assert!(!t.is_typing());
        assert_eq!(t.poll(Instant::now() + Duration::from_secs(10)), 0);
        // User message survives; no buddy reply ever lands
        assert_eq!(t.messages().len(), 1);
    }

    #[test]
    fn test_message_ids_are_monotonic() {
        let (mut t, mut replies) = transcript();
        t.push_buddy("welcome");
        t.send_free_text("hi", &mut replies);
        t.poll(Instant::now() + Duration::from_secs(2));
        let ids: Vec<u64> = t.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: u32 = 1;

/// Per-user state persisted across sessions: the tutorial gate, lesson
/// completion marks, and the practice streak.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileData {
    pub schema_version: u32,
    /// Gate for the workspace tutorial overlay; once set it stays set.
    pub tutorial_seen: bool,
    pub completed_lessons: Vec<String>,
    pub total_submissions: u32,
    pub streak_days: u32,
    pub best_streak: u32,
    pub last_practice_date: Option<String>,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tutorial_seen: false,
            completed_lessons: Vec::new(),
            total_submissions: 0,
            streak_days: 0,
            best_streak: 0,
            last_practice_date: None,
        }
    }
}

impl ProfileData {
    /// Check if loaded data has a stale schema version and needs reset.
    pub fn needs_reset(&self) -> bool {
        self.schema_version != SCHEMA_VERSION
    }

    pub fn is_lesson_completed(&self, slug: &str) -> bool {
        self.completed_lessons.iter().any(|s| s == slug)
    }

    pub fn toggle_lesson_completed(&mut self, slug: &str) {
        if let Some(pos) = self.completed_lessons.iter().position(|s| s == slug) {
            self.completed_lessons.remove(pos);
        } else {
            self.completed_lessons.push(slug.to_string());
        }
    }

    /// Update the daily practice streak for a submission made today.
    pub fn record_practice(&mut self, today: &str, yesterday: &str) {
        self.total_submissions += 1;
        if self.last_practice_date.as_deref() == Some(today) {
            return;
        }
        if self.last_practice_date.as_deref() == Some(yesterday) {
            self.streak_days += 1;
        } else {
            self.streak_days = 1;
        }
        self.best_streak = self.best_streak.max(self.streak_days);
        self.last_practice_date = Some(today.to_string());
    }
}

/// The saved writing draft. One draft per profile; the text type it was
/// written under travels with it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DraftData {
    pub schema_version: u32,
    pub text_type: String,
    pub content: String,
    pub saved_at: Option<DateTime<Utc>>,
}

impl Default for DraftData {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            text_type: String::new(),
            content: String::new(),
            saved_at: None,
        }
    }
}

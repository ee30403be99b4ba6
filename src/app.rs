use std::time::Instant;

use chrono::{Duration as ChronoDuration, Local};

use crate::catalog::lesson::{self, Lesson, LessonTab};
use crate::catalog::quiz::QuizState;
use crate::config::Config;
use crate::essay::browser::ExampleBrowser;
use crate::essay::example::MockExampleProvider;
use crate::session::workspace::Workspace;
use crate::store::json_store::JsonStore;
use crate::store::schema::{DraftData, ProfileData};
use crate::ui::components::menu::Menu;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Menu,
    LessonList,
    Lesson,
    Examples,
    Workspace,
    Settings,
}

pub struct App {
    pub screen: AppScreen,
    pub menu: Menu<'static>,
    pub theme: &'static Theme,
    pub config: Config,
    pub profile: ProfileData,
    pub store: Option<JsonStore>,
    pub should_quit: bool,

    pub lessons: Vec<Lesson>,
    pub lesson_selected: usize,
    pub lesson_tab: LessonTab,
    pub quiz: QuizState,
    pub question_cursor: usize,
    pub lesson_scroll: u16,

    pub browser: Option<ExampleBrowser>,
    pub workspace: Option<Workspace>,

    pub settings_selected: usize,
    /// Transient status line shown in the footer until the next key.
    pub status: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self::with_store(config, JsonStore::new().ok())
    }

    pub fn with_store(mut config: Config, store: Option<JsonStore>) -> Self {
        config.validate();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));
        let menu = Menu::new(theme);

        let profile = if let Some(ref s) = store {
            // load_profile returns None if file exists but can't parse (schema mismatch)
            match s.load_profile() {
                Some(pd) if !pd.needs_reset() => pd,
                _ => ProfileData::default(),
            }
        } else {
            ProfileData::default()
        };

        Self {
            screen: AppScreen::Menu,
            menu,
            theme,
            config,
            profile,
            store,
            should_quit: false,
            lessons: lesson::load_all(),
            lesson_selected: 0,
            lesson_tab: LessonTab::Overview,
            quiz: QuizState::new(),
            question_cursor: 0,
            lesson_scroll: 0,
            browser: None,
            workspace: None,
            settings_selected: 0,
            status: None,
        }
    }

    pub fn current_lesson(&self) -> Option<&Lesson> {
        self.lessons.get(self.lesson_selected)
    }

    pub fn open_lesson_list(&mut self) {
        self.screen = AppScreen::LessonList;
    }

    pub fn open_lesson(&mut self) {
        if self.current_lesson().is_none() {
            return;
        }
        self.lesson_tab = LessonTab::Overview;
        self.quiz = QuizState::new();
        self.question_cursor = 0;
        self.lesson_scroll = 0;
        self.screen = AppScreen::Lesson;
    }

    /// Jump straight to a lesson by day number (used by `--lesson`).
    pub fn open_lesson_by_day(&mut self, day: u32) -> bool {
        if let Some(idx) = self.lessons.iter().position(|l| l.day == day) {
            self.lesson_selected = idx;
            self.open_lesson();
            true
        } else {
            false
        }
    }

    pub fn open_examples(&mut self) {
        self.browser = Some(ExampleBrowser::new(
            &MockExampleProvider,
            &self.config.text_type,
        ));
        self.screen = AppScreen::Examples;
    }

    pub fn close_examples(&mut self) {
        self.browser = None;
        self.screen = AppScreen::Menu;
    }

    pub fn open_workspace(&mut self) {
        let draft = self
            .store
            .as_ref()
            .map(|s| s.load_draft())
            .unwrap_or_default();
        // A saved draft keeps the text type it was written under
        let text_type = if draft.text_type.is_empty() {
            self.config.text_type.clone()
        } else {
            draft.text_type.clone()
        };
        self.workspace = Some(Workspace::new(
            &text_type,
            &draft.content,
            self.config.buddy_reply_delay(),
            self.profile.tutorial_seen,
        ));
        self.screen = AppScreen::Workspace;
    }

    /// Teardown for the workspace: cancel scheduled replies so none fire into
    /// a dead screen, and persist the draft.
    pub fn close_workspace(&mut self) {
        if let Some(ws) = self.workspace.as_mut() {
            ws.cancel_pending_replies();
        }
        self.save_draft();
        self.workspace = None;
        self.screen = AppScreen::Menu;
    }

    pub fn save_draft(&mut self) {
        let Some(ws) = self.workspace.as_ref() else {
            return;
        };
        let Some(store) = self.store.as_ref() else {
            return;
        };
        let draft = DraftData {
            text_type: ws.text_type.clone(),
            content: ws.editor.content(),
            saved_at: Some(chrono::Utc::now()),
            ..DraftData::default()
        };
        if store.save_draft(&draft).is_err() {
            self.status = Some("Could not save draft".to_string());
        }
    }

    /// Submit the draft for feedback. Gated on the workspace word count;
    /// counts toward the daily practice streak.
    pub fn submit_draft(&mut self) {
        let can_submit = self.workspace.as_ref().is_some_and(|ws| ws.can_submit());
        if !can_submit {
            self.status = Some("Keep going! You need at least 50 words to submit.".to_string());
            return;
        }
        let today = Local::now().date_naive();
        let yesterday = today - ChronoDuration::days(1);
        self.profile.record_practice(
            &today.format("%Y-%m-%d").to_string(),
            &yesterday.format("%Y-%m-%d").to_string(),
        );
        self.save_profile();
        self.save_draft();
        if let Some(ws) = self.workspace.as_mut() {
            ws.note_saved();
        }
        self.status = Some(format!(
            "Submitted! Streak: {} day{}",
            self.profile.streak_days,
            if self.profile.streak_days == 1 { "" } else { "s" }
        ));
    }

    pub fn dismiss_tutorial(&mut self) {
        if let Some(ws) = self.workspace.as_mut() {
            ws.dismiss_tutorial();
        }
        if !self.profile.tutorial_seen {
            self.profile.tutorial_seen = true;
            self.save_profile();
        }
    }

    pub fn toggle_lesson_completed(&mut self) {
        if let Some(slug) = self.current_lesson().map(|l| l.slug.clone()) {
            self.profile.toggle_lesson_completed(&slug);
            self.save_profile();
        }
    }

    pub fn save_profile(&mut self) {
        if let Some(store) = self.store.as_ref() {
            if store.save_profile(&self.profile).is_err() {
                self.status = Some("Could not save progress".to_string());
            }
        }
    }

    pub fn save_config(&mut self) {
        if self.config.save().is_err() {
            self.status = Some("Could not save settings".to_string());
        }
    }

    pub fn settings_cycle_forward(&mut self) {
        self.cycle_setting(1);
    }

    pub fn settings_cycle_backward(&mut self) {
        self.cycle_setting(-1);
    }

    fn cycle_setting(&mut self, dir: isize) {
        match self.settings_selected {
            0 => {
                let themes = Theme::available_themes();
                if let Some(name) = cycle_item(&self.config.theme, &themes, dir) {
                    self.config.theme = name;
                    if let Some(theme) = Theme::load(&self.config.theme) {
                        let theme: &'static Theme = Box::leak(Box::new(theme));
                        self.theme = theme;
                        self.menu.theme = theme;
                    }
                }
            }
            1 => {
                let types: Vec<String> = crate::config::TEXT_TYPES
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                if let Some(t) = cycle_item(&self.config.text_type, &types, dir) {
                    self.config.text_type = t;
                }
            }
            2 => {
                let step = 500i64;
                let delay = self.config.buddy_reply_delay_ms as i64 + step * dir as i64;
                self.config.buddy_reply_delay_ms = delay.clamp(0, 10_000) as u64;
            }
            _ => {}
        }
    }

    /// Tick: deliver any buddy replies whose deadline has passed.
    pub fn on_tick(&mut self) {
        if let Some(ws) = self.workspace.as_mut() {
            ws.transcript.poll(Instant::now());
        }
    }
}

/// Step through `items` from `current`, wrapping in either direction.
fn cycle_item(current: &str, items: &[String], dir: isize) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    let len = items.len() as isize;
    let pos = items.iter().position(|i| i == current).unwrap_or(0) as isize;
    let next = (pos + dir).rem_euclid(len) as usize;
    Some(items[next].clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::with_store(Config::default(), None)
    }

    #[test]
    fn test_starts_on_menu() {
        let app = app();
        assert_eq!(app.screen, AppScreen::Menu);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_open_lesson_resets_quiz_state() {
        let mut app = app();
        app.open_lesson_list();
        app.open_lesson();
        assert_eq!(app.screen, AppScreen::Lesson);
        assert_eq!(app.lesson_tab, LessonTab::Overview);
        assert!(!app.quiz.revealed());
    }

    #[test]
    fn test_open_lesson_by_day() {
        let mut app = app();
        assert!(app.open_lesson_by_day(27));
        assert_eq!(app.current_lesson().unwrap().day, 27);
        assert!(!app.open_lesson_by_day(999));
    }

    #[test]
    fn test_examples_use_configured_text_type() {
        let mut app = app();
        app.config.text_type = "persuasive".to_string();
        app.open_examples();
        let browser = app.browser.as_ref().unwrap();
        assert!(
            browser
                .selected_example()
                .unwrap()
                .id
                .starts_with("persuasive")
        );
    }

    #[test]
    fn test_close_workspace_cancels_pending_replies() {
        let mut app = app();
        app.open_workspace();
        {
            let ws = app.workspace.as_mut().unwrap();
            ws.chat_input = crate::ui::line_input::LineInput::new("hello");
            ws.send_chat();
            assert!(ws.transcript.is_typing());
        }
        app.close_workspace();
        assert!(app.workspace.is_none());
        assert_eq!(app.screen, AppScreen::Menu);
    }

    #[test]
    fn test_submit_below_gate_sets_status_only() {
        let mut app = app();
        app.open_workspace();
        app.submit_draft();
        assert_eq!(app.profile.total_submissions, 0);
        assert!(app.status.as_ref().unwrap().contains("50 words"));
    }

    #[test]
    fn test_submit_records_streak() {
        let mut app = app();
        app.open_workspace();
        let text = "word ".repeat(60);
        app.workspace.as_mut().unwrap().editor =
            crate::session::editor::TextEditor::from_content(text.trim());
        app.submit_draft();
        assert_eq!(app.profile.total_submissions, 1);
        assert_eq!(app.profile.streak_days, 1);
    }

    #[test]
    fn test_settings_cycle_text_type_wraps() {
        let mut app = app();
        app.settings_selected = 1;
        app.settings_cycle_backward();
        assert_eq!(app.config.text_type, "descriptive");
        app.settings_cycle_forward();
        assert_eq!(app.config.text_type, "narrative");
    }

    #[test]
    fn test_settings_delay_clamps() {
        let mut app = app();
        app.settings_selected = 2;
        app.config.buddy_reply_delay_ms = 0;
        app.settings_cycle_backward();
        assert_eq!(app.config.buddy_reply_delay_ms, 0);
        app.settings_cycle_forward();
        assert_eq!(app.config.buddy_reply_delay_ms, 500);
    }

    #[test]
    fn test_tutorial_flag_persists_in_profile() {
        let mut app = app();
        app.open_workspace();
        assert!(app.workspace.as_ref().unwrap().show_tutorial);
        app.dismiss_tutorial();
        assert!(app.profile.tutorial_seen);
        assert!(!app.workspace.as_ref().unwrap().show_tutorial);

        // Reopening no longer shows the overlay
        app.close_workspace();
        app.open_workspace();
        assert!(!app.workspace.as_ref().unwrap().show_tutorial);
    }
}

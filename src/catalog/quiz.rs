use std::collections::HashMap;

use crate::catalog::lesson::{Lesson, Question};

/// Per-lesson answer state: question key -> selected option index.
/// Created when the lesson screen opens and dropped when it is left;
/// never persisted.
#[derive(Default)]
pub struct QuizState {
    answers: HashMap<String, usize>,
    revealed: bool,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, question: &Question, option: usize) {
        if option < question.options.len() {
            self.answers.insert(question.key.clone(), option);
        }
    }

    pub fn selected(&self, question: &Question) -> Option<usize> {
        self.answers.get(&question.key).copied()
    }

    /// Reveal per-question feedback. Selections stay editable afterwards,
    /// matching the original check-answers behavior.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// None until answers are revealed; afterwards an unanswered question
    /// counts as incorrect.
    pub fn feedback(&self, question: &Question) -> Option<bool> {
        if !self.revealed {
            return None;
        }
        Some(self.selected(question) == Some(question.answer))
    }

    pub fn score(&self, lesson: &Lesson) -> (usize, usize) {
        let mut correct = 0;
        let mut total = 0;
        for q in lesson.questions() {
            total += 1;
            if self.selected(q) == Some(q.answer) {
                correct += 1;
            }
        }
        (correct, total)
    }
}

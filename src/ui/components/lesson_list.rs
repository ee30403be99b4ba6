use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::catalog::lesson::Lesson;
use crate::store::schema::ProfileData;
use crate::ui::theme::Theme;

pub struct LessonList<'a> {
    pub lessons: &'a [Lesson],
    pub selected: usize,
    pub profile: &'a ProfileData,
    pub theme: &'a Theme,
}

impl<'a> LessonList<'a> {
    pub fn new(lessons: &'a [Lesson], profile: &'a ProfileData, theme: &'a Theme) -> Self {
        Self {
            lessons,
            selected: 0,
            profile,
            theme,
        }
    }
}

impl Widget for &LessonList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let completed = self
            .lessons
            .iter()
            .filter(|l| self.profile.is_lesson_completed(&l.slug))
            .count();
        let title = format!(" Lessons ({completed}/{} done) ", self.lessons.len());

        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = inner.height as usize;
        // Keep the selection on screen
        let offset = if self.selected >= visible {
            self.selected + 1 - visible
        } else {
            0
        };

        let lines: Vec<Line> = self
            .lessons
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, lesson)| {
                let is_selected = i == self.selected;
                let done = self.profile.is_lesson_completed(&lesson.slug);
                let mark = if done { "\u{2713}" } else { " " };
                let indicator = if is_selected { ">" } else { " " };
                let text = format!(
                    " {indicator} [{mark}] Day {day:>2}  {title}",
                    day = lesson.day,
                    title = lesson.title
                );

                let mut style = Style::default().fg(if is_selected {
                    colors.accent()
                } else if done {
                    colors.success()
                } else {
                    colors.fg()
                });
                if is_selected {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(Span::styled(text, style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::catalog::lesson::{Lesson, LessonTab, Section};
use crate::catalog::quiz::QuizState;
use crate::ui::theme::Theme;

/// One lesson with its Overview / Activities / Practice tab bar. The quiz
/// cursor points at a question; option keys 1-9 select an answer for it.
pub struct LessonView<'a> {
    pub lesson: &'a Lesson,
    pub tab: LessonTab,
    pub quiz: &'a QuizState,
    pub question_cursor: usize,
    pub completed: bool,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl Widget for &LessonView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let mark = if self.completed { " \u{2713}" } else { "" };
        let block = Block::bordered()
            .title(format!(
                " Day {}: {}{mark} ",
                self.lesson.day, self.lesson.title
            ))
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        self.render_tab_bar(layout[0], buf);

        match self.tab {
            LessonTab::Overview => self.render_sections(&self.lesson.overview, layout[1], buf),
            LessonTab::Activities => self.render_activities(layout[1], buf),
            LessonTab::Practice => self.render_sections(&self.lesson.practice, layout[1], buf),
        }
    }
}

impl LessonView<'_> {
    fn render_tab_bar(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut spans = vec![Span::raw(" ")];
        for tab in LessonTab::ALL {
            let style = if tab == self.tab {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(colors.accent_dim())
            };
            spans.push(Span::styled(tab.title(), style));
            spans.push(Span::raw("   "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_sections(&self, sections: &[Section], area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut lines: Vec<Line> = Vec::new();

        if sections.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing here for this lesson.",
                Style::default().fg(colors.text_muted()),
            )));
        }
        for section in sections {
            lines.push(Line::from(Span::styled(
                section.heading.clone(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )));
            for body_line in section.body.lines() {
                lines.push(Line::from(Span::styled(
                    body_line.to_string(),
                    Style::default().fg(colors.fg()),
                )));
            }
            lines.push(Line::from(""));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }

    fn render_activities(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut lines: Vec<Line> = Vec::new();
        let mut q_index = 0usize;

        if self.lesson.activities.is_empty() {
            lines.push(Line::from(Span::styled(
                "No activities for this lesson.",
                Style::default().fg(colors.text_muted()),
            )));
        }

        for activity in &self.lesson.activities {
            lines.push(Line::from(Span::styled(
                activity.title.clone(),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )));
            if !activity.intro.is_empty() {
                for intro_line in activity.intro.lines() {
                    lines.push(Line::from(Span::styled(
                        intro_line.to_string(),
                        Style::default().fg(colors.text_muted()),
                    )));
                }
            }
            lines.push(Line::from(""));

            for question in &activity.questions {
                let is_current = q_index == self.question_cursor;
                let cursor = if is_current { ">" } else { " " };
                let mut prompt_style = Style::default().fg(colors.fg());
                if is_current {
                    prompt_style = prompt_style.add_modifier(Modifier::BOLD);
                }
                lines.push(Line::from(Span::styled(
                    format!("{cursor} {}", question.prompt),
                    prompt_style,
                )));
                if let Some(passage) = &question.passage {
                    for passage_line in passage.lines() {
                        lines.push(Line::from(Span::styled(
                            format!("    \u{201c}{passage_line}\u{201d}"),
                            Style::default()
                                .fg(colors.text_muted())
                                .add_modifier(Modifier::ITALIC),
                        )));
                    }
                }

                let selected = self.quiz.selected(question);
                for (i, option) in question.options.iter().enumerate() {
                    let is_picked = selected == Some(i);
                    let marker = if is_picked { "\u{25cf}" } else { "\u{25cb}" };
                    let style = match self.quiz.feedback(question) {
                        Some(true) if is_picked => Style::default().fg(colors.success()),
                        Some(false) if is_picked => Style::default().fg(colors.error()),
                        Some(_) if i == question.answer => {
                            Style::default().fg(colors.success())
                        }
                        _ if is_picked => Style::default().fg(colors.accent()),
                        _ => Style::default().fg(colors.fg()),
                    };
                    lines.push(Line::from(Span::styled(
                        format!("    {marker} [{}] {option}", i + 1),
                        style,
                    )));
                }

                if let Some(correct) = self.quiz.feedback(question) {
                    let (text, color) = if correct {
                        ("    Correct!", colors.success())
                    } else {
                        ("    Not quite. The highlighted option is the answer.", colors.error())
                    };
                    lines.push(Line::from(Span::styled(
                        text,
                        Style::default().fg(color).add_modifier(Modifier::ITALIC),
                    )));
                }
                lines.push(Line::from(""));
                q_index += 1;
            }
        }

        if self.quiz.revealed() && q_index > 0 {
            let (correct, total) = self.quiz.score(self.lesson);
            lines.push(Line::from(Span::styled(
                format!("Score: {correct}/{total}"),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_lesson() -> Lesson {
        Lesson {
            day: 1,
            slug: "sample".to_string(),
            title: "Sample".to_string(),
            overview: vec![Section {
                heading: "Objective".to_string(),
                body: "Write well.".to_string(),
            }],
            activities: Vec::new(),
            practice: Vec::new(),
        }
    }

    #[test]
    fn test_inactive_tabs_use_dim_accent() {
        let theme = Theme::default();
        let lesson = sample_lesson();
        let quiz = QuizState::new();
        let view = LessonView {
            lesson: &lesson,
            tab: LessonTab::Overview,
            quiz: &quiz,
            question_cursor: 0,
            completed: false,
            scroll: 0,
            theme: &theme,
        };

        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        (&view).render(area, &mut buf);

        // Tab bar sits on the first row inside the border
        let fgs: Vec<_> = (0..area.width).map(|x| buf[(x, 1)].style().fg).collect();
        assert!(fgs.contains(&Some(theme.colors.accent())));
        assert!(fgs.contains(&Some(theme.colors.accent_dim())));
    }
}

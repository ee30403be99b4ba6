use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::buddy::message::Sender;
use crate::buddy::replies::QuickAction;
use crate::buddy::transcript::Transcript;
use crate::ui::layout::wrapped_line_count;
use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// The Writing Buddy chat column: transcript, typing indicator, quick-help
/// shortcuts, and the input line.
pub struct BuddySidebar<'a> {
    pub transcript: &'a Transcript,
    pub input: &'a LineInput,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for &BuddySidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(" Writing Buddy ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(4),
                Constraint::Length(1),
                Constraint::Length(QuickAction::ALL.len() as u16),
                Constraint::Length(1),
            ])
            .split(inner);

        self.render_transcript(rows[0], buf);
        self.render_typing_indicator(rows[1], buf);
        self.render_quick_help(rows[2], buf);
        self.render_input(rows[3], buf);
    }
}

impl BuddySidebar<'_> {
    fn render_transcript(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut lines: Vec<Line> = Vec::new();

        for message in self.transcript.messages() {
            let (name, color) = match message.sender {
                Sender::User => ("You", colors.chat_user()),
                Sender::Buddy => ("Buddy", colors.chat_buddy()),
            };
            lines.push(Line::from(Span::styled(
                format!("{name}:"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
            for content_line in message.content.lines() {
                lines.push(Line::from(Span::styled(
                    content_line.to_string(),
                    Style::default().fg(colors.fg()),
                )));
            }
            lines.push(Line::from(""));
        }

        // Pin the newest messages to the bottom once the transcript overflows
        let width = area.width.max(1) as usize;
        let total: usize = lines
            .iter()
            .map(|l| {
                let text: String = l.spans.iter().map(|s| s.content.as_ref()).collect();
                wrapped_line_count(&text, width)
            })
            .sum();
        let scroll = total.saturating_sub(area.height as usize) as u16;

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .render(area, buf);
    }

    fn render_typing_indicator(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        if self.transcript.is_typing() {
            Paragraph::new(Line::from(Span::styled(
                "Buddy is typing...",
                Style::default()
                    .fg(colors.text_muted())
                    .add_modifier(Modifier::ITALIC),
            )))
            .render(area, buf);
        }
    }

    fn render_quick_help(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let lines: Vec<Line> = QuickAction::ALL
            .iter()
            .enumerate()
            .map(|(i, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("[F{}] ", i + 1),
                        Style::default().fg(colors.accent()),
                    ),
                    Span::styled(action.label(), Style::default().fg(colors.text_muted())),
                ])
            })
            .collect();
        Paragraph::new(lines).render(area, buf);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let (before, at, after) = self.input.render_parts();

        let base = Style::default().fg(colors.fg());
        let mut spans = vec![
            Span::styled("> ", Style::default().fg(colors.accent())),
            Span::styled(before.to_string(), base),
        ];
        if self.focused {
            match at {
                Some(ch) => {
                    spans.push(Span::styled(
                        ch.to_string(),
                        base.add_modifier(Modifier::REVERSED),
                    ));
                    spans.push(Span::styled(after.to_string(), base));
                }
                None => spans.push(Span::styled(" ", base.add_modifier(Modifier::REVERSED))),
            }
        } else if let Some(ch) = at {
            spans.push(Span::styled(ch.to_string(), base));
            spans.push(Span::styled(after.to_string(), base));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

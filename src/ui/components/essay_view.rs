use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::essay::annotation::{excerpt, segments};
use crate::essay::browser::ExampleBrowser;
use crate::essay::example::Level;
use crate::ui::theme::Theme;

/// The annotated example-essay screen: level selector, essay text with
/// highlighted ranges, the annotation list, and the optional comparison pane.
pub struct EssayView<'a> {
    pub browser: &'a ExampleBrowser,
    pub theme: &'a Theme,
    pub show_annotation_pane: bool,
}

impl Widget for &EssayView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Example Essays ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(inner);

        self.render_level_bar(rows[0], buf);

        if let Some(feedback) = &self.browser.comparison {
            self.render_comparison(feedback, rows[1], buf);
            return;
        }

        if self.show_annotation_pane {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
                .split(rows[1]);
            self.render_text(cols[0], buf);
            self.render_annotations(cols[1], buf);
        } else {
            self.render_text(rows[1], buf);
        }
    }
}

impl EssayView<'_> {
    fn render_level_bar(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mut spans = vec![Span::raw(" ")];
        for level in Level::ALL {
            let style = if level == self.browser.level {
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(colors.accent_dim())
            };
            spans.push(Span::styled(level.label(), style));
            spans.push(Span::raw("   "));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    /// Essay text styled per segment. The annotation under the cursor gets
    /// the note highlight, other annotated ranges the base highlight.
    fn render_text(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let Some(example) = self.browser.selected_example() else {
            Paragraph::new(Line::from(Span::styled(
                " No examples for this text type.",
                Style::default().fg(colors.text_muted()),
            )))
            .render(area, buf);
            return;
        };

        let chars: Vec<char> = example.text.chars().collect();
        let segs = segments(chars.len(), &example.annotations);

        // Segment offsets are char offsets; rebuild per-line spans so ratatui
        // can wrap them.
        let mut lines: Vec<Line> = vec![Line::from(format!(" {} ", example.title))
            .style(Style::default().add_modifier(Modifier::BOLD).fg(colors.accent()))];
        lines.push(Line::from(""));
        let mut current: Vec<Span> = Vec::new();

        for seg in &segs {
            let style = match seg.annotation {
                Some(idx) if idx == self.browser.annotation_cursor => Style::default()
                    .fg(colors.note_fg())
                    .bg(colors.note_bg())
                    .add_modifier(Modifier::BOLD),
                Some(_) => Style::default()
                    .fg(colors.annotation_fg())
                    .bg(colors.annotation_bg()),
                None => Style::default().fg(colors.fg()),
            };

            let text: String = chars[seg.start..seg.end].iter().collect();
            for (i, part) in text.split('\n').enumerate() {
                if i > 0 {
                    lines.push(Line::from(std::mem::take(&mut current)));
                }
                if !part.is_empty() {
                    current.push(Span::styled(part.to_string(), style));
                }
            }
        }
        lines.push(Line::from(current));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((self.browser.scroll as u16, 0))
            .render(area, buf);
    }

    fn render_annotations(&self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let Some(example) = self.browser.selected_example() else {
            return;
        };

        let block = Block::bordered()
            .title(" What makes this good? ")
            .border_style(Style::default().fg(colors.border()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        for (i, annotation) in example.annotations.iter().enumerate() {
            let is_current = i == self.browser.annotation_cursor;
            let indicator = if is_current { ">" } else { " " };
            let style = if is_current {
                Style::default()
                    .fg(colors.note_fg())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_muted())
            };
            lines.push(Line::from(Span::styled(
                format!("{indicator} {}", excerpt(&example.text, annotation)),
                style,
            )));
            if is_current {
                for note_line in annotation.note.lines() {
                    lines.push(Line::from(Span::styled(
                        format!("    {note_line}"),
                        Style::default().fg(colors.fg()),
                    )));
                }
            }
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }

    fn render_comparison(&self, feedback: &[String], area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(" Compared with your draft ")
            .border_style(Style::default().fg(colors.border_focused()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = vec![Line::from("")];
        for item in feedback {
            lines.push(Line::from(Span::styled(
                format!(" \u{2022} {item}"),
                Style::default().fg(colors.fg()),
            )));
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            " Press Esc to close",
            Style::default().fg(colors.text_muted()),
        )));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

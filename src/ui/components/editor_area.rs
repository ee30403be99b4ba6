use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::editor::TextEditor;
use crate::session::workspace::{GOOD_LENGTH_WORDS, SUBMIT_MIN_WORDS};
use crate::ui::theme::Theme;

/// The draft editor pane. The cursor cell is drawn in reverse video; there is
/// no terminal cursor while raw mode is active.
pub struct EditorArea<'a> {
    pub editor: &'a TextEditor,
    pub text_type: &'a str,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl Widget for &EditorArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let words = self.editor.word_count();
        let count_note = if words >= GOOD_LENGTH_WORDS {
            format!(" {words} words - great length! ")
        } else if words >= SUBMIT_MIN_WORDS {
            format!(" {words} words ")
        } else {
            format!(" {words}/{SUBMIT_MIN_WORDS} words to submit ")
        };

        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(format!(" Your {} ", self.text_type))
            .title_bottom(count_note)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines: Vec<Line> = Vec::new();
        let (cursor_row, cursor_col) = self.editor.cursor();
        let visible = (inner.height as usize).max(1);
        // Scroll so the cursor row stays on screen
        let offset = if cursor_row >= visible {
            cursor_row + 1 - visible
        } else {
            0
        };

        for (row, text) in self.editor.lines().iter().enumerate().skip(offset).take(visible) {
            if self.focused && row == cursor_row {
                lines.push(cursor_line(text, cursor_col, colors.fg()));
            } else {
                lines.push(Line::from(Span::styled(
                    text.clone(),
                    Style::default().fg(colors.fg()),
                )));
            }
        }

        if self.editor.is_empty() {
            lines.push(Line::from(Span::styled(
                "Start writing here...",
                Style::default().fg(colors.text_muted()),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Split a line at the cursor column and draw the cursor cell reversed.
fn cursor_line(text: &str, col: usize, fg: ratatui::style::Color) -> Line<'static> {
    let base = Style::default().fg(fg);
    let cursor_style = base.add_modifier(Modifier::REVERSED);

    let chars: Vec<char> = text.chars().collect();
    if col >= chars.len() {
        return Line::from(vec![
            Span::styled(text.to_string(), base),
            Span::styled(" ", cursor_style),
        ]);
    }
    let before: String = chars[..col].iter().collect();
    let at: String = chars[col].to_string();
    let after: String = chars[col + 1..].iter().collect();
    Line::from(vec![
        Span::styled(before, base),
        Span::styled(at, cursor_style),
        Span::styled(after, base),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn test_cursor_line_splits_at_column() {
        let line = cursor_line("hello", 2, Color::White);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "he");
        assert_eq!(line.spans[1].content, "l");
        assert_eq!(line.spans[2].content, "lo");
    }

    #[test]
    fn test_cursor_at_end_appends_block() {
        let line = cursor_line("hi", 2, Color::White);
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[1].content, " ");
    }

    #[test]
    fn test_empty_editor_shows_placeholder() {
        let editor = TextEditor::new();
        let theme = Theme::default();
        let widget = EditorArea {
            editor: &editor,
            text_type: "narrative",
            focused: false,
            theme: &theme,
        };

        let area = Rect::new(0, 0, 40, 6);
        let mut buf = Buffer::empty(area);
        (&widget).render(area, &mut buf);

        let text: String = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        assert!(text.contains("Start writing here..."));
        assert!(text.contains("Your narrative"));
    }
}

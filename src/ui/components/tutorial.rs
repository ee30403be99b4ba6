use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

use crate::ui::layout::centered_rect;
use crate::ui::theme::Theme;

/// First-visit tutorial overlay for the workspace. Shown once per profile;
/// dismissing it sets the persisted flag.
pub struct TutorialOverlay<'a> {
    pub theme: &'a Theme,
}

impl Widget for &TutorialOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let popup = centered_rect(60, 60, area);

        Clear.render(popup, buf);
        let block = Block::bordered()
            .title(" Welcome to your Writing Workspace! ")
            .border_style(Style::default().fg(colors.border_focused()))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let step = |key: &str, text: &str| {
            Line::from(vec![
                Span::styled(
                    format!("  {key}  "),
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(text.to_string(), Style::default().fg(colors.fg())),
            ])
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Here's how everything works:",
                Style::default().fg(colors.fg()),
            )),
            Line::from(""),
            step("Type away", "The big pane is yours. Just start writing!"),
            step("Tab      ", "Switch between your writing and the Writing Buddy."),
            step("F1-F4    ", "Quick help: ideas, spelling, improvements, details."),
            step("Ctrl+S   ", "Save your draft. It will be here next time."),
            step("Ctrl+E   ", "Submit for feedback once you reach 50 words."),
            step("Ctrl+B   ", "Hide or show the Writing Buddy."),
            Line::from(""),
            Line::from(Span::styled(
                "  The word counter at the bottom cheers you on as you go.",
                Style::default().fg(colors.text_muted()),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to start writing",
                Style::default()
                    .fg(colors.success())
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

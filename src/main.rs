mod app;
mod buddy;
mod catalog;
mod config;
mod essay;
mod event;
mod session;
mod store;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use app::{App, AppScreen};
use buddy::replies::QuickAction;
use catalog::lesson::LessonTab;
use config::Config;
use essay::example::Level;
use event::{AppEvent, EventHandler};
use session::workspace::WorkspaceFocus;
use ui::components::buddy_sidebar::BuddySidebar;
use ui::components::editor_area::EditorArea;
use ui::components::essay_view::EssayView;
use ui::components::lesson_list::LessonList;
use ui::components::lesson_view::LessonView;
use ui::components::tutorial::TutorialOverlay;
use ui::layout::AppLayout;
use ui::line_input::InputResult;

#[derive(Parser)]
#[command(name = "quillr", version, about = "Terminal writing tutor for exam preparation")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short = 'T', long, help = "Text type (narrative, persuasive, descriptive)")]
    text_type: Option<String>,

    #[arg(short, long, help = "Open a lesson by day number")]
    lesson: Option<u32>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(text_type) = cli.text_type {
        config.text_type = text_type;
    }

    let mut app = App::new(config);
    if let Some(day) = cli.lesson {
        if !app.open_lesson_by_day(day) {
            eprintln!("No lesson for day {day}");
        }
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(Duration::from_millis(100));

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(_, _) => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    app.status = None;

    match app.screen {
        AppScreen::Menu => handle_menu_key(app, key),
        AppScreen::LessonList => handle_lesson_list_key(app, key),
        AppScreen::Lesson => handle_lesson_key(app, key),
        AppScreen::Examples => handle_examples_key(app, key),
        AppScreen::Workspace => handle_workspace_key(app, key),
        AppScreen::Settings => handle_settings_key(app, key),
    }
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('1') => app.open_lesson_list(),
        KeyCode::Char('2') => app.open_examples(),
        KeyCode::Char('3') => app.open_workspace(),
        KeyCode::Char('c') => app.screen = AppScreen::Settings,
        KeyCode::Up | KeyCode::Char('k') => app.menu.prev(),
        KeyCode::Down | KeyCode::Char('j') => app.menu.next(),
        KeyCode::Enter => match app.menu.selected {
            0 => app.open_lesson_list(),
            1 => app.open_examples(),
            2 => app.open_workspace(),
            3 => app.screen = AppScreen::Settings,
            _ => {}
        },
        _ => {}
    }
}

fn handle_lesson_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.screen = AppScreen::Menu,
        KeyCode::Down | KeyCode::Char('j') => {
            if !app.lessons.is_empty() {
                app.lesson_selected = (app.lesson_selected + 1).min(app.lessons.len() - 1);
            }
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.lesson_selected = app.lesson_selected.saturating_sub(1);
        }
        KeyCode::Enter => app.open_lesson(),
        KeyCode::Char('x') | KeyCode::Char(' ') => app.toggle_lesson_completed(),
        _ => {}
    }
}

fn handle_lesson_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.screen = AppScreen::LessonList,
        KeyCode::Tab => {
            app.lesson_tab = app.lesson_tab.next();
            app.lesson_scroll = 0;
        }
        KeyCode::BackTab => {
            app.lesson_tab = app.lesson_tab.prev();
            app.lesson_scroll = 0;
        }
        KeyCode::Char('m') => app.toggle_lesson_completed(),
        _ => {}
    }

    if app.lesson_tab == LessonTab::Activities {
        handle_activities_key(app, key);
    } else {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                app.lesson_scroll = app.lesson_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.lesson_scroll = app.lesson_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }
}

fn handle_activities_key(app: &mut App, key: KeyEvent) {
    let question_count = app
        .current_lesson()
        .map(|l| l.questions().count())
        .unwrap_or(0);

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if question_count > 0 {
                app.question_cursor = (app.question_cursor + 1).min(question_count - 1);
            }
            app.lesson_scroll = app.lesson_scroll.saturating_add(2);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.question_cursor = app.question_cursor.saturating_sub(1);
            app.lesson_scroll = app.lesson_scroll.saturating_sub(2);
        }
        KeyCode::Char(ch @ '1'..='9') => {
            let option = ch as usize - '1' as usize;
            let question = app
                .current_lesson()
                .and_then(|l| l.questions().nth(app.question_cursor))
                .cloned();
            if let Some(q) = question {
                app.quiz.select(&q, option);
            }
        }
        KeyCode::Enter | KeyCode::Char('c') => app.quiz.reveal(),
        _ => {}
    }
}

fn handle_examples_key(app: &mut App, key: KeyEvent) {
    let Some(browser) = app.browser.as_mut() else {
        app.screen = AppScreen::Menu;
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            if browser.comparison.is_some() {
                browser.close_comparison();
            } else {
                app.close_examples();
            }
        }
        KeyCode::Char('1') | KeyCode::Char('b') => browser.select_level(Level::Basic),
        KeyCode::Char('2') | KeyCode::Char('i') => browser.select_level(Level::Intermediate),
        KeyCode::Char('3') | KeyCode::Char('a') => browser.select_level(Level::Advanced),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('n') => browser.next_annotation(),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('p') => browser.prev_annotation(),
        KeyCode::PageDown => browser.scroll = browser.scroll.saturating_add(5),
        KeyCode::PageUp => browser.scroll = browser.scroll.saturating_sub(5),
        KeyCode::Char('c') => {
            let content = app
                .store
                .as_ref()
                .map(|s| s.load_draft().content)
                .unwrap_or_default();
            browser.compare_with(&content);
        }
        _ => {}
    }
}

fn handle_workspace_key(app: &mut App, key: KeyEvent) {
    let Some(ws) = app.workspace.as_mut() else {
        app.screen = AppScreen::Menu;
        return;
    };

    // The tutorial overlay swallows input until dismissed
    if ws.show_tutorial {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_tutorial();
        }
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc if ws.focus == WorkspaceFocus::Buddy => {
            ws.focus = WorkspaceFocus::Editor;
            return;
        }
        KeyCode::Esc => {
            app.close_workspace();
            return;
        }
        KeyCode::Tab if ws.show_buddy => {
            ws.toggle_focus();
            return;
        }
        KeyCode::Char('b') if ctrl => {
            ws.toggle_buddy();
            return;
        }
        KeyCode::Char('s') if ctrl => {
            app.save_draft();
            if let Some(ws) = app.workspace.as_mut() {
                ws.note_saved();
            }
            app.status = Some("Draft saved".to_string());
            return;
        }
        KeyCode::Char('e') if ctrl => {
            app.submit_draft();
            return;
        }
        KeyCode::F(n @ 1..=4) => {
            let action = QuickAction::ALL[n as usize - 1];
            ws.send_quick(action);
            return;
        }
        _ => {}
    }

    match ws.focus {
        WorkspaceFocus::Editor => match key.code {
            KeyCode::Char(ch) if !ctrl => ws.editor.insert_char(ch),
            KeyCode::Enter => ws.editor.insert_newline(),
            KeyCode::Backspace => ws.editor.backspace(),
            KeyCode::Left => ws.editor.move_left(),
            KeyCode::Right => ws.editor.move_right(),
            KeyCode::Up => ws.editor.move_up(),
            KeyCode::Down => ws.editor.move_down(),
            KeyCode::Home => ws.editor.move_home(),
            KeyCode::End => ws.editor.move_end(),
            _ => {}
        },
        WorkspaceFocus::Buddy => match ws.chat_input.handle(key) {
            InputResult::Submit => ws.send_chat(),
            InputResult::Continue | InputResult::Cancel => {}
        },
    }
}

fn handle_settings_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.save_config();
            app.screen = AppScreen::Menu;
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.settings_selected = app.settings_selected.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.settings_selected = (app.settings_selected + 1).min(2);
        }
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.settings_cycle_forward(),
        KeyCode::Left | KeyCode::Char('h') => app.settings_cycle_backward(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    match app.screen {
        AppScreen::Menu => render_menu(frame, app),
        AppScreen::LessonList => render_lesson_list(frame, app),
        AppScreen::Lesson => render_lesson(frame, app),
        AppScreen::Examples => render_examples(frame, app),
        AppScreen::Workspace => render_workspace(frame, app),
        AppScreen::Settings => render_settings(frame, app),
    }
}

fn header_line(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, info: &str) {
    let colors = &app.theme.colors;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " quillr ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            info.to_string(),
            Style::default()
                .fg(colors.text_muted())
                .bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn footer_line(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect, hints: &[&str]) {
    let colors = &app.theme.colors;
    let lines: Vec<Line> = match &app.status {
        Some(status) => vec![Line::from(Span::styled(
            format!(" {status} "),
            Style::default().fg(colors.warning()),
        ))],
        None => ui::layout::pack_hint_lines(hints, area.width as usize)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(colors.text_muted()))))
            .collect(),
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_menu(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let streak_text = if app.profile.streak_days > 0 {
        format!(" | {} day streak", app.profile.streak_days)
    } else {
        String::new()
    };
    let done = app
        .lessons
        .iter()
        .filter(|l| app.profile.is_lesson_completed(&l.slug))
        .count();
    let header_info = format!(
        " {done}/{} lessons | {} submissions{streak_text}",
        app.lessons.len(),
        app.profile.total_submissions,
    );
    header_line(frame, app, layout[0], &header_info);

    let menu_area = ui::layout::centered_rect(50, 80, layout[1]);
    frame.render_widget(&app.menu, menu_area);

    footer_line(
        frame,
        app,
        layout[2],
        &["[1-3] Open", "[c] Settings", "[q] Quit"],
    );
}

fn render_lesson_list(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    header_line(frame, app, layout[0], " Lessons");

    let mut list = LessonList::new(&app.lessons, &app.profile, app.theme);
    list.selected = app.lesson_selected;
    frame.render_widget(&list, layout[1]);

    footer_line(
        frame,
        app,
        layout[2],
        &["[Enter] Open", "[x] Mark done", "[j/k] Move", "[Esc] Back"],
    );
}

fn render_lesson(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let Some(lesson) = app.current_lesson() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let view = LessonView {
        lesson,
        tab: app.lesson_tab,
        quiz: &app.quiz,
        question_cursor: app.question_cursor,
        completed: app.profile.is_lesson_completed(&lesson.slug),
        scroll: app.lesson_scroll,
        theme: app.theme,
    };
    frame.render_widget(&view, layout[0]);

    let hints: &[&str] = match app.lesson_tab {
        LessonTab::Activities => &[
            "[Tab] Next tab",
            "[j/k] Question",
            "[1-9] Answer",
            "[Enter] Check",
            "[m] Mark done",
            "[Esc] Back",
        ],
        _ => &["[Tab] Next tab", "[j/k] Scroll", "[m] Mark done", "[Esc] Back"],
    };
    footer_line(frame, app, layout[1], hints);
}

fn render_examples(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let Some(browser) = app.browser.as_ref() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let tier = ui::layout::LayoutTier::from_area(layout[0]);
    let view = EssayView {
        browser,
        theme: app.theme,
        show_annotation_pane: tier.show_annotation_pane(),
    };
    frame.render_widget(&view, layout[0]);

    footer_line(
        frame,
        app,
        layout[1],
        &[
            "[1-3] Level",
            "[j/k] Annotation",
            "[c] Compare with my draft",
            "[Esc] Back",
        ],
    );
}

fn render_workspace(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let Some(ws) = app.workspace.as_ref() else {
        return;
    };

    let app_layout = AppLayout::with_sidebar(area, ws.show_buddy);

    let words = ws.word_count();
    let streak_text = if app.profile.streak_days > 0 {
        format!(" | {} day streak", app.profile.streak_days)
    } else {
        String::new()
    };
    header_line(
        frame,
        app,
        app_layout.header,
        &format!(" Writing Workspace | {words} words{streak_text}"),
    );

    let editor = EditorArea {
        editor: &ws.editor,
        text_type: &ws.text_type,
        focused: ws.focus == WorkspaceFocus::Editor,
        theme: app.theme,
    };
    frame.render_widget(&editor, app_layout.main);

    if let Some(sidebar_area) = app_layout.sidebar {
        let sidebar = BuddySidebar {
            transcript: &ws.transcript,
            input: &ws.chat_input,
            focused: ws.focus == WorkspaceFocus::Buddy,
            theme: app.theme,
        };
        frame.render_widget(&sidebar, sidebar_area);
    }

    footer_line(
        frame,
        app,
        app_layout.footer,
        &[
            "[Tab] Buddy",
            "[F1-F4] Quick help",
            "[^S] Save",
            "[^E] Submit",
            "[^B] Hide buddy",
            "[Esc] Leave",
        ],
    );

    if ws.show_tutorial {
        let overlay = TutorialOverlay { theme: app.theme };
        frame.render_widget(&overlay, area);
    }
}

fn render_settings(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let centered = ui::layout::centered_rect(60, 70, area);

    let block = Block::bordered()
        .title(" Settings ")
        .border_style(Style::default().fg(colors.accent()))
        .style(Style::default().bg(colors.bg()));
    let inner = block.inner(centered);
    block.render(centered, frame.buffer_mut());

    let fields: Vec<(String, String)> = vec![
        ("Theme".to_string(), app.config.theme.clone()),
        ("Text Type".to_string(), app.config.text_type.clone()),
        (
            "Buddy Reply Delay".to_string(),
            format!("{} ms", app.config.buddy_reply_delay_ms),
        ),
    ];

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(fields.len() as u16 * 3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    let header = Paragraph::new(Line::from(Span::styled(
        "  Use arrows to navigate, Enter/Right to change, ESC to save & exit",
        Style::default().fg(colors.text_muted()),
    )));
    header.render(layout[0], frame.buffer_mut());

    let field_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .iter()
                .map(|_| Constraint::Length(3))
                .collect::<Vec<_>>(),
        )
        .split(layout[1]);

    for (i, (label, value)) in fields.iter().enumerate() {
        let is_selected = i == app.settings_selected;
        let indicator = if is_selected { " > " } else { "   " };

        let label_text = format!("{indicator}{label}:");
        let value_text = format!("  < {value} >");

        let label_style = Style::default()
            .fg(if is_selected {
                colors.accent()
            } else {
                colors.fg()
            })
            .add_modifier(if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            });

        let value_style = Style::default().fg(if is_selected {
            colors.warning()
        } else {
            colors.text_muted()
        });

        let lines = vec![
            Line::from(Span::styled(label_text, label_style)),
            Line::from(Span::styled(value_text, value_style)),
        ];
        Paragraph::new(lines).render(field_layout[i], frame.buffer_mut());
    }

    let footer = Paragraph::new(Line::from(Span::styled(
        "  [ESC] Save & back  [Enter/arrows] Change value",
        Style::default().fg(colors.accent()),
    )));
    footer.render(layout[3], frame.buffer_mut());
}

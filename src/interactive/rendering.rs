//! TUI rendering with ratatui
//!
//! One screen per game view, dispatched on the session's view tag.

use super::app::App;
use crate::core::LetterState;
use crate::engine::LetterBag;
use crate::game::GameView;
use crate::grid::GRID_SIZE;
use crate::wordle::PlayState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match app.session.view() {
        GameView::Home => render_home(f, f.area()),
        GameView::Wordle => render_wordle(f, app),
        GameView::Crossword => render_crossword(f, app),
        GameView::CrosswordComplete => render_complete(f, app),
    }
}

fn bordered(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn state_style(state: LetterState) -> Style {
    match state {
        LetterState::Correct => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterState::WrongPosition => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterState::Absent => Style::default().fg(Color::DarkGray),
        LetterState::Unknown => Style::default().fg(Color::White),
    }
}

fn render_home(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "GRIDWORD",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Solve Wordle levels to earn letter tokens,"),
        Line::from("then spend them filling the crossword."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" play    "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]),
    ];

    let home = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(bordered("Welcome"));
    f.render_widget(home, area);
}

fn render_wordle(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(f.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(3)])
        .split(chunks[0]);

    render_guess_board(f, app, left[0]);
    render_status_bar(f, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_bag(f, app.session.bag(), right[0]);
    render_stats(f, app, right[1]);
}

fn render_guess_board(f: &mut Frame, app: &App, area: Rect) {
    let wordle = app.session.wordle();
    let mut lines = Vec::new();

    for row in wordle.guesses() {
        let spans: Vec<Span> = row
            .letters()
            .iter()
            .zip(row.feedback().states())
            .map(|(&letter, &state)| {
                Span::styled(format!(" {} ", char::from(letter)), state_style(state))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    // Live input row
    if wordle.play_state() == PlayState::Input {
        let mut spans: Vec<Span> = wordle
            .buffer()
            .iter()
            .map(|&letter| {
                Span::styled(
                    format!(" {} ", char::from(letter)),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            })
            .collect();
        for _ in wordle.buffer().len()..5 {
            spans.push(Span::styled(" _ ", Style::default().fg(Color::DarkGray)));
        }
        lines.push(Line::from(spans));
    } else {
        lines.push(Line::from(Span::styled(
            "Solved! Enter for the next level",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let title = format!("Wordle - Level {}", wordle.level());
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(&title));
    f.render_widget(board, area);
}

fn render_crossword(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(f.area());

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(11), Constraint::Length(3)])
        .split(chunks[0]);

    render_grid(f, app, left[0]);
    render_status_bar(f, app, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Length(5)])
        .split(chunks[1]);

    render_bag(f, app.session.bag(), right[0]);
    render_crossword_help(f, right[1]);
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let level = app.session.crossword_level();
    let state = app.session.crossword();
    let active = level.words().get(state.current_word_index);

    let mut lines = Vec::new();
    for y in 0..GRID_SIZE {
        let mut spans = Vec::new();
        for x in 0..GRID_SIZE {
            let (text, mut style) = if level.is_word_cell(x, y) {
                match state.letter_at(x, y) {
                    Some(letter) => (
                        format!(" {} ", char::from(letter)),
                        state_style(state.state_at(x, y)),
                    ),
                    None if app.show_solution => (
                        format!(
                            " {} ",
                            level.solution_at(x, y).map_or(' ', char::from)
                        ),
                        Style::default().fg(Color::DarkGray),
                    ),
                    None => (" · ".to_string(), Style::default().fg(Color::White)),
                }
            } else {
                ("   ".to_string(), Style::default())
            };

            if active.is_some_and(|word| word.contains(x, y)) {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            if (x, y) == (state.cursor_x, state.cursor_y) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }

    let title = format!(
        "Crossword - Level {} ({} words)",
        level.level(),
        level.word_count()
    );
    let grid = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(bordered(&title));
    f.render_widget(grid, area);
}

fn render_crossword_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("Type letters to place, Backspace removes"),
        Line::from("Space direction · ←/→ word · Enter check"),
        Line::from("Tab wordle · F2 reveal · Esc home"),
    ])
    .block(bordered("Keys"));
    f.render_widget(help, area);
}

fn render_bag(f: &mut Frame, bag: &LetterBag, area: Rect) {
    let mut lines = vec![Line::from(format!("{} tokens", bag.total()))];

    let mut current = Vec::new();
    for (i, &count) in bag.counts().iter().enumerate() {
        if count == 0 {
            continue;
        }
        let letter = char::from(b'A' + i as u8);
        current.push(Span::styled(
            format!("{letter}:{count} "),
            Style::default().fg(Color::Yellow),
        ));
        if current.len() == 6 {
            lines.push(Line::from(std::mem::take(&mut current)));
        }
    }
    if !current.is_empty() {
        lines.push(Line::from(current));
    }
    if bag.total() == 0 {
        lines.push(Line::from(Span::styled(
            "Solve Wordle levels to earn letters",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).block(bordered("Letter Bag"));
    f.render_widget(panel, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let best = stats
        .best_level_score
        .map_or_else(|| "-".to_string(), |b| b.to_string());

    let lines = vec![
        Line::from(format!("Levels:  {}", stats.levels_completed)),
        Line::from(format!(
            "Streak:  {} (best {})",
            stats.current_streak, stats.max_streak
        )),
        Line::from(format!("Guesses: {}", stats.total_guesses)),
        Line::from(format!("Best:    {best}")),
        Line::from(format!("Average: {:.2}", stats.average_guesses())),
    ];

    let panel = Paragraph::new(lines).block(bordered("Statistics"));
    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = app.status.as_deref().unwrap_or("Tab switches modes");
    let bar = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .block(bordered("Status"));
    f.render_widget(bar, area);
}

fn render_complete(f: &mut Frame, app: &App) {
    let level = app.session.crossword_level();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Level {} complete!", level.level()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("All {} words solved", level.word_count())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" next level    "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" home"),
        ]),
    ];

    let screen = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(bordered("Crossword"));
    f.render_widget(screen, f.area());
}

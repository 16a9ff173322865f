//! TUI application state and logic

use crate::core::Word;
use crate::engine::FrameInput;
use crate::game::{GameSession, GameView, SessionError};
use crate::wordle::{PlayState, SubmitOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub status: Option<String>,
    pub show_solution: bool,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create the app on the home screen
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary has no usable words.
    pub fn new(dictionary: &'a [Word], seed: Option<u64>) -> Result<Self, SessionError> {
        Ok(Self {
            session: GameSession::new(dictionary, seed)?,
            status: None,
            show_solution: false,
            should_quit: false,
        })
    }

    /// Route one key press to the active view
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.session.view() {
            GameView::Home => self.handle_home_key(key.code),
            GameView::Wordle => self.handle_wordle_key(key.code),
            GameView::Crossword => self.handle_crossword_key(key.code),
            GameView::CrosswordComplete => self.handle_complete_key(key.code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.start();
                self.status = Some("Guess the word to earn letter tokens".to_string());
            }
            _ => {}
        }
    }

    fn handle_wordle_key(&mut self, code: KeyCode) {
        // A completed level waits for a continue key
        if self.session.wordle().play_state() == PlayState::LevelComplete {
            match code {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.session.wordle_continue();
                    self.status = Some(format!("Level {}", self.session.wordle().level()));
                }
                KeyCode::Tab => self.session.toggle_view(),
                KeyCode::Esc => self.session.go_home(),
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Esc => self.session.go_home(),
            KeyCode::Tab => self.session.toggle_view(),
            KeyCode::Backspace => self.session.wordle_backspace(),
            KeyCode::Enter => match self.session.wordle_submit() {
                SubmitOutcome::Solved { awarded } => {
                    self.status = Some(format!(
                        "Solved! '{}' added to your letter bag",
                        char::from(awarded)
                    ));
                }
                SubmitOutcome::Wrong => self.status = None,
                SubmitOutcome::Rejected => {
                    self.status = Some("Need all five letters first".to_string());
                }
            },
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                self.session.wordle_letter(c as u8);
            }
            _ => {}
        }
    }

    fn handle_crossword_key(&mut self, code: KeyCode) {
        let mut input = FrameInput::default();

        match code {
            KeyCode::Esc => {
                self.session.go_home();
                return;
            }
            KeyCode::Tab => {
                self.session.toggle_view();
                return;
            }
            KeyCode::F(2) => {
                self.show_solution = !self.show_solution;
                return;
            }
            KeyCode::Char(' ') => input.toggle_direction = true,
            KeyCode::Left => input.prev_word = true,
            KeyCode::Right => input.next_word = true,
            KeyCode::Up => input.up = true,
            KeyCode::Down => input.down = true,
            KeyCode::Backspace => input.backspace = true,
            KeyCode::Enter => input.commit = true,
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                input.letter = Some(c.to_ascii_uppercase() as u8);
            }
            _ => return,
        }

        self.session.crossword_frame(&input);
    }

    fn handle_complete_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.session.crossword_continue();
                self.status = Some(format!(
                    "Crossword level {}",
                    self.session.crossword_level().level()
                ));
            }
            KeyCode::Esc => self.session.go_home(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

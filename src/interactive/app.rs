//! TUI application state and logic

use crate::core::Color;
use crate::game::{GameConfig, GameSession, GameStatus, Submission};
use crate::input::{DragSession, DragSource, HitTest, PointerTracker, Release, Scene};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Position};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub session: GameSession,
    pub pointer: PointerTracker,
    /// Hit-test scene from the last drawn frame
    pub scene: Scene,
    /// Slot targeted by keyboard placement
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_won: usize,
    pub total_attempts: usize,
    pub best: Option<usize>,
}

impl Statistics {
    #[must_use]
    pub fn average_attempts(&self) -> Option<f64> {
        (self.rounds_won > 0).then(|| self.total_attempts as f64 / self.rounds_won as f64)
    }
}

impl App {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            session: GameSession::new(config),
            pointer: PointerTracker::new(),
            scene: Scene::new(),
            cursor: 0,
            messages: vec![Message {
                text: "Crack the hidden color order. Press 's' to start.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    pub fn start_round(&mut self) {
        self.pointer.abort(&mut self.session);
        self.session.start_round();
        self.cursor = 0;
        self.messages.clear();
        self.add_message(
            &format!(
                "New round with {} bottles. Drag from the pool into the slots.",
                self.session.difficulty()
            ),
            MessageStyle::Info,
        );
    }

    pub fn back_to_start(&mut self) {
        self.pointer.abort(&mut self.session);
        self.session.reset();
        self.cursor = 0;
        self.add_message("Back at the start screen.", MessageStyle::Info);
    }

    pub fn submit(&mut self) {
        match self.session.submit_guess() {
            Submission::Rejected => {
                let missing = self.session.remaining();
                if self.session.status() == GameStatus::InProgress && missing > 0 {
                    let noun = if missing == 1 { "bottle" } else { "bottles" };
                    self.add_message(&format!("Need {missing} more {noun}"), MessageStyle::Error);
                }
            }
            Submission::Miss { correct } => {
                self.add_message(
                    &format!(
                        "{correct} of {} in the right place",
                        self.session.difficulty()
                    ),
                    MessageStyle::Info,
                );
            }
            Submission::Won { attempts } => {
                self.stats.rounds_won += 1;
                self.stats.total_attempts += attempts;
                self.stats.best = Some(self.stats.best.map_or(attempts, |b| b.min(attempts)));
                self.cursor = 0;

                let noun = if attempts == 1 { "attempt" } else { "attempts" };
                self.add_message(
                    &format!("🏆 Perfect! Solved in {attempts} {noun}!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' to play again or 'b' to go back.", MessageStyle::Info);
            }
        }
    }

    /// Place the `n`th pool color (0-based) at the cursor
    pub fn place_at_cursor(&mut self, n: usize) {
        let Some(color) = self.session.palette().get(n) else {
            return;
        };
        if self.session.drag_start(DragSource::Pool(color)) {
            self.session.drop(self.cursor);
            self.move_cursor(1);
        }
    }

    pub fn clear_at_cursor(&mut self) {
        self.session.clear_slot(self.cursor);
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let last = self.session.difficulty().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Slot to highlight as the drop target
    #[must_use]
    pub fn hover(&self) -> Option<usize> {
        self.pointer.hover()
    }

    /// Color being dragged from the pool, if any
    #[must_use]
    pub fn dragged_color(&self) -> Option<Color> {
        match self.session.drag_session() {
            DragSession::FromPool(c) => Some(c),
            DragSession::FromSlot(i) => self.session.board().get(i),
            DragSession::None => None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.session.status() {
            GameStatus::NotStarted => match key.code {
                KeyCode::Char('+' | '=') => {
                    self.session.grow_difficulty();
                }
                KeyCode::Char('-') => {
                    self.session.shrink_difficulty();
                }
                KeyCode::Char('s') | KeyCode::Enter => self.start_round(),
                _ => {}
            },
            GameStatus::InProgress => match key.code {
                KeyCode::Left => self.move_cursor(-1),
                KeyCode::Right => self.move_cursor(1),
                KeyCode::Char(c @ '1'..='8') => {
                    self.place_at_cursor(c as usize - '1' as usize);
                }
                KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                    self.clear_at_cursor();
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Char('n') => self.start_round(),
                KeyCode::Char('b') | KeyCode::Esc => self.back_to_start(),
                KeyCode::Char('a') => self.toggle_answer(),
                KeyCode::Char('h') => self.toggle_history(),
                _ => {}
            },
            GameStatus::Won => match key.code {
                KeyCode::Char('n' | 's') | KeyCode::Enter => self.start_round(),
                KeyCode::Char('b') | KeyCode::Esc => self.back_to_start(),
                KeyCode::Char('a') => self.toggle_answer(),
                KeyCode::Char('h') => self.toggle_history(),
                _ => {}
            },
        }
    }

    fn toggle_answer(&mut self) {
        let on = !self.session.answer_revealed();
        self.session.reveal_answer(on);
    }

    fn toggle_history(&mut self) {
        let on = !self.session.history_visible();
        self.session.toggle_history(on);
    }

    /// Dispatch one terminal event
    ///
    /// Losing focus mid-drag abandons the drag, since the release will
    /// never be reported.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => self.pointer.abort(&mut self.session),
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let point = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer.press(point, &self.scene, &mut self.session);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.pointer.move_to(point, &self.scene, &self.session);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let release = self.pointer.release(point, &self.scene, &mut self.session);
                debug!(?release, "pointer released");
                if let Release::Dropped(Some(_)) = release
                    && let Some(slot) = self.scene.slot_at(point)
                {
                    self.cursor = slot;
                }
            }
            MouseEventKind::Down(MouseButton::Right) => {
                if let Some(slot) = self.scene.slot_at(point) {
                    self.session.clear_slot(slot);
                }
            }
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
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let mut scene = Scene::new();
        terminal.draw(|f| scene = super::rendering::ui(f, &app))?;
        app.scene = scene;

        app.handle_event(event::read()?);

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

//! Application state and key handling.

use crate::games::tictactoe::{GameOptions, GameView, Position};
use crate::session::{GameEvent, GameSession};
use crossterm::event::KeyCode;
use tokio::sync::mpsc;
use tracing::debug;

use super::input::{digit_position, move_cursor};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board; arrows move the cursor, Enter plays.
    #[default]
    Board,
    /// The history list; arrows select an entry, Enter jumps to it.
    History,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
pub struct App {
    session: GameSession,
    events: mpsc::UnboundedReceiver<GameEvent>,
    cursor: Position,
    focus: Focus,
    selected: usize,
    last_event: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    pub fn new(options: GameOptions) -> Self {
        let mut session = GameSession::new(options);
        let events = session.subscribe();
        Self {
            session,
            events,
            cursor: Position::Center,
            focus: Focus::default(),
            selected: 0,
            last_event: None,
            should_quit: false,
        }
    }

    /// Render-ready view of the game.
    pub fn view(&self) -> GameView {
        self.session.view()
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Description of the most recent change, if any.
    pub fn last_event(&self) -> Option<&str> {
        self.last_event.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    ///
    /// Refused moves and jumps are ignored without feedback.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            _ => {
                if let Some(pos) = digit_position(key) {
                    self.cursor = pos;
                    self.play(pos);
                } else {
                    match self.focus {
                        Focus::Board => self.handle_board_key(key),
                        Focus::History => self.handle_history_key(key),
                    }
                }
            }
        }
        self.drain_events();
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        let last = self.session.game().last_move();
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => self.selected = (self.selected + 1).min(last),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = last,
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(e) = self.session.jump_to(self.selected) {
                    debug!(error = %e, "Jump ignored");
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        if let Err(e) = self.session.play(pos) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Applies pending notifications from the session.
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "Handling game event");
            match event {
                GameEvent::MovePlayed {
                    mv,
                    move_number,
                    discarded,
                } => {
                    self.selected = move_number;
                    self.last_event = Some(if discarded > 0 {
                        format!(
                            "{} played {} (move #{}, {} later moves discarded)",
                            mv.player,
                            mv.position.label(),
                            move_number,
                            discarded
                        )
                    } else {
                        format!("{} played {} (move #{})", mv.player, mv.position.label(), move_number)
                    });
                }
                GameEvent::Jumped { move_number } => {
                    self.selected = move_number;
                    self.last_event = Some(format!("Viewing move #{}", move_number));
                }
            }
        }
    }
}

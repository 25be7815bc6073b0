//! A game plus change notifications for whoever renders it.

use crate::games::tictactoe::{
    GameHistory, GameOptions, GameView, JumpError, Move, MoveError, Position,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Notification sent to subscribers after the game changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was applied and became the newest snapshot.
    MovePlayed {
        /// The move.
        mv: Move,
        /// Index of the new snapshot.
        move_number: usize,
        /// Snapshots dropped because the move was made from the past.
        discarded: usize,
    },
    /// The cursor moved to another snapshot.
    Jumped {
        /// Index of the snapshot now on display.
        move_number: usize,
    },
}

/// Owns a [`GameHistory`] and broadcasts a [`GameEvent`] for every change.
///
/// Refused moves and jumps change nothing and notify nobody.
#[derive(Debug, Default)]
pub struct GameSession {
    game: GameHistory,
    subscribers: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl GameSession {
    /// Creates a session around a fresh game.
    #[instrument]
    pub fn new(options: GameOptions) -> Self {
        info!("Creating new game session");
        Self {
            game: GameHistory::with_options(options),
            subscribers: Vec::new(),
        }
    }

    /// The game state.
    pub fn game(&self) -> &GameHistory {
        &self.game
    }

    /// Render-ready view of the game.
    pub fn view(&self) -> GameView {
        GameView::from(&self.game)
    }

    /// Registers a new subscriber.
    #[instrument(skip(self))]
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        debug!(subscribers = self.subscribers.len(), "Subscriber added");
        rx
    }

    /// Plays the next mark at `pos`.
    ///
    /// # Errors
    ///
    /// Passes through [`MoveError`] from [`GameHistory::apply_move`].
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<Move, MoveError> {
        let discarded = self.game.last_move() - self.game.current_move();
        let mv = self.game.apply_move(pos)?;
        self.publish(GameEvent::MovePlayed {
            mv,
            move_number: self.game.current_move(),
            discarded,
        });
        Ok(mv)
    }

    /// Moves the cursor to snapshot `move_number`.
    ///
    /// # Errors
    ///
    /// Passes through [`JumpError`] from [`GameHistory::jump_to`].
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<usize, JumpError> {
        let target = self.game.jump_to(move_number)?;
        self.publish(GameEvent::Jumped {
            move_number: target,
        });
        Ok(target)
    }

    /// Sends `event` to every live subscriber, dropping closed ones.
    fn publish(&mut self, event: GameEvent) {
        debug!(?event, "Publishing game event");
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

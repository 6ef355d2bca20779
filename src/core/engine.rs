use crate::core::events::{CompositeEventHandler, EventLogger, GameEvent, GameEventHandler};
use crate::core::game_state::{BoardSnapshot, GameState, Outcome};
use crate::core::Player;
use crate::utils::MoveError;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Owns one game: board, turn and outcome, plus the observers that are told
/// about moves and results.
///
/// Every call runs to completion before returning. Subscribers are invoked
/// inline and are expected to hand work off rather than block.
pub struct GameEngine {
    state: GameState,
    event_log: EventLogger,
    subscribers: CompositeEventHandler,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            event_log: EventLogger::default(),
            subscribers: CompositeEventHandler::new(),
        }
    }

    pub fn subscribe<H: GameEventHandler + 'static>(&mut self, handler: H) {
        self.subscribers.add_handler(handler);
    }

    /// Places the current player's mark on `index` and re-evaluates the
    /// outcome. A move that completes a line emits exactly one `GameWon`
    /// event, however many lines it completes.
    pub fn apply_move(&mut self, index: usize) -> Result<BoardSnapshot, MoveError> {
        let mover = self.state.turn();

        if let Err(err) = self.state.apply_move(index) {
            debug!("Rejected move at {} by {}: {}", index, mover, err);
            return Err(err);
        }

        let move_number = self.state.moves_played();
        debug!("{} marked cell {} (move {})", mover, index, move_number);
        self.emit_event(GameEvent::move_applied(index, mover, move_number));

        match self.state.outcome() {
            Outcome::Win(winner) => {
                let line = self.state.winning_line().unwrap_or_default();
                info!("{} wins on line {:?}", winner, line);
                self.emit_event(GameEvent::game_won(winner, line));
            }
            Outcome::Draw => {
                info!("Game drawn after {} moves", move_number);
                self.emit_event(GameEvent::game_drawn(move_number));
            }
            Outcome::InProgress => {}
        }

        Ok(self.state.snapshot())
    }

    pub fn reset(&mut self) -> BoardSnapshot {
        info!("Resetting board ({} moves played)", self.state.moves_played());
        self.state.reset();
        self.state.snapshot()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.snapshot()
    }

    pub fn current_player(&self) -> Player {
        self.state.turn()
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.outcome().is_terminal()
    }

    pub fn get_event_history(&self) -> &VecDeque<GameEvent> {
        self.event_log.get_events()
    }

    pub fn get_recent_events(&self, count: usize) -> Vec<GameEvent> {
        self.event_log
            .get_recent_events(count)
            .into_iter()
            .cloned()
            .collect()
    }

    fn emit_event(&mut self, event: GameEvent) {
        self.event_log.handle_event(&event);
        self.subscribers.handle_event(&event);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, warn};

use crate::core::{GameEvent, GameEventHandler, Player};

/// Forwards win notifications to the front end without waiting on playback.
pub struct CelebrationHandler {
    sender: UnboundedSender<Player>,
}

pub fn celebration_channel() -> (CelebrationHandler, UnboundedReceiver<Player>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (CelebrationHandler { sender }, receiver)
}

impl GameEventHandler for CelebrationHandler {
    fn handle_event(&mut self, event: &GameEvent) {
        let Some(winner) = event.winner() else {
            return;
        };

        debug!("Queueing celebration for {}", winner);
        if self.sender.send(winner).is_err() {
            warn!("Celebration receiver dropped; skipping celebration");
        }
    }
}

/// One frame of falling confetti. Frames shift the pattern so consecutive
/// frames appear to move.
pub fn confetti_frame(frame: usize, width: usize) -> String {
    const PIECES: [char; 6] = ['*', '.', '+', 'o', '\'', ' '];
    (0..width)
        .map(|column| PIECES[(column * 5 + frame) % PIECES.len()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEngine;

    #[test]
    fn test_handler_forwards_wins_only() {
        let (mut handler, mut receiver) = celebration_channel();

        handler.handle_event(&GameEvent::move_applied(0, Player::PlayerA, 1));
        handler.handle_event(&GameEvent::game_drawn(9));
        assert!(receiver.try_recv().is_err());

        handler.handle_event(&GameEvent::game_won(Player::PlayerB, [2, 5, 8]));
        assert_eq!(receiver.try_recv().ok(), Some(Player::PlayerB));
    }

    #[test]
    fn test_engine_win_reaches_receiver_once() {
        let (handler, mut receiver) = celebration_channel();
        let mut engine = GameEngine::new();
        engine.subscribe(handler);

        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).unwrap();
        }

        assert_eq!(receiver.try_recv().ok(), Some(Player::PlayerA));
        assert!(receiver.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_does_not_panic() {
        let (mut handler, receiver) = celebration_channel();
        drop(receiver);
        handler.handle_event(&GameEvent::game_won(Player::PlayerA, [0, 1, 2]));
    }

    #[test]
    fn test_confetti_frames_move() {
        let first = confetti_frame(0, 20);
        let second = confetti_frame(1, 20);

        assert_eq!(first.chars().count(), 20);
        assert_ne!(first, second);
        assert_eq!(confetti_frame(0, 20), first);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use uuid::Uuid;

use crate::core::Player;
use crate::utils::GameResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameEvent {
    pub id: Uuid,
    pub event_type: GameEventType,
    pub timestamp: DateTime<Utc>,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEventType {
    MoveApplied,
    GameWon,
    GameDrawn,
}

impl GameEvent {
    pub fn new(event_type: GameEventType, data: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }

    pub fn move_applied(index: usize, player: Player, move_number: usize) -> Self {
        let data = serde_json::json!({
            "cell": index,
            "player": player,
            "move_number": move_number
        });
        Self::new(GameEventType::MoveApplied, data)
    }

    pub fn game_won(winner: Player, line: [usize; 3]) -> Self {
        let data = serde_json::json!({
            "winner": winner,
            "line": line
        });
        Self::new(GameEventType::GameWon, data)
    }

    pub fn game_drawn(move_count: usize) -> Self {
        let data = serde_json::json!({
            "move_count": move_count
        });
        Self::new(GameEventType::GameDrawn, data)
    }

    pub fn winner(&self) -> Option<Player> {
        match self.event_type {
            GameEventType::GameWon => serde_json::from_value(self.data["winner"].clone()).ok(),
            _ => None,
        }
    }

    pub fn is_win(&self) -> bool {
        self.event_type == GameEventType::GameWon
    }
}

/// Receives engine notifications. Implementations run inline on the engine's
/// call path and must return without waiting on playback.
pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

pub struct EventLogger {
    events: VecDeque<GameEvent>,
    max_events: usize,
}

impl EventLogger {
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }

    pub fn get_events(&self) -> &VecDeque<GameEvent> {
        &self.events
    }

    pub fn get_events_by_type(&self, event_type: &GameEventType) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|event| &event.event_type == event_type)
            .collect()
    }

    pub fn get_recent_events(&self, count: usize) -> Vec<&GameEvent> {
        self.events.iter().rev().take(count).collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn export_events(&self) -> GameResult<String> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }

    pub fn get_event_count(&self) -> usize {
        self.events.len()
    }

    pub fn get_event_count_by_type(&self, event_type: &GameEventType) -> usize {
        self.events
            .iter()
            .filter(|event| &event.event_type == event_type)
            .count()
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl GameEventHandler for EventLogger {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.push_back(event.clone());

        while self.events.len() > self.max_events {
            self.events.pop_front();
        }
    }
}

pub struct CompositeEventHandler {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl CompositeEventHandler {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler<H: GameEventHandler + 'static>(&mut self, handler: H) {
        self.handlers.push(Box::new(handler));
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CompositeEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEventHandler for CompositeEventHandler {
    fn handle_event(&mut self, event: &GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event);
        }
    }
}

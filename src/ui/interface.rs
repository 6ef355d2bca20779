use dialoguer::{Confirm, Select};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::core::{BoardSnapshot, GameEngine, Player};
use crate::ui::celebration::celebration_channel;
use crate::ui::{Display, DisplayOptions, ThemeManager};
use crate::utils::GameResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play(usize),
    Reset,
    Quit,
}

impl MenuAction {
    pub fn label(&self) -> String {
        match self {
            MenuAction::Play(index) => format!("Cell {}", index + 1),
            MenuAction::Reset => "🔄 Reset".to_string(),
            MenuAction::Quit => "🚪 Quit".to_string(),
        }
    }
}

/// Choices offered for `snapshot`: every empty cell while the game runs,
/// then Reset and Quit. A finished game offers only Reset and Quit.
pub fn menu_actions(snapshot: &BoardSnapshot) -> Vec<MenuAction> {
    let mut actions: Vec<MenuAction> = if snapshot.outcome.is_terminal() {
        Vec::new()
    } else {
        snapshot
            .board
            .empty_cells()
            .into_iter()
            .map(MenuAction::Play)
            .collect()
    };
    actions.push(MenuAction::Reset);
    actions.push(MenuAction::Quit);
    actions
}

pub struct GameInterface {
    engine: GameEngine,
    display: Display,
    config: Config,
    celebrations: UnboundedReceiver<Player>,
}

impl GameInterface {
    pub fn new(config: Config) -> GameResult<Self> {
        info!("Initializing game interface");

        let options = DisplayOptions {
            labels: [
                config.label(Player::PlayerA).to_string(),
                config.label(Player::PlayerB).to_string(),
            ],
            show_cell_numbers: config.ui.show_cell_numbers,
        };
        let mut display = Display::new(ThemeManager::new(), options);

        if !display.set_theme(&config.ui.theme) {
            let available = display.get_available_themes().join(", ");
            warn!(
                "Unknown theme '{}', using default (available: {})",
                config.ui.theme, available
            );
        }

        let (celebration, celebrations) = celebration_channel();
        let mut engine = GameEngine::new();
        engine.subscribe(celebration);

        Ok(Self {
            engine,
            display,
            config,
            celebrations,
        })
    }

    pub async fn run(&mut self) -> GameResult<()> {
        info!("Starting game interface");

        loop {
            let snapshot = self.engine.snapshot();
            self.render(&snapshot)?;
            self.play_pending_celebrations().await?;

            let actions = menu_actions(&snapshot);
            let labels: Vec<String> = actions.iter().map(MenuAction::label).collect();

            let selection = Select::new()
                .with_prompt(if snapshot.outcome.is_terminal() {
                    "Game over"
                } else {
                    "Pick a cell"
                })
                .items(&labels)
                .default(0)
                .interact()?;

            match actions[selection] {
                MenuAction::Play(index) => self.play(index),
                MenuAction::Reset => self.reset_board()?,
                MenuAction::Quit => break,
            }
        }

        self.display.show_separator()?;
        self.display.show_message("Thanks for playing!", "info")?;
        info!("Game session ended");
        Ok(())
    }

    fn render(&self, snapshot: &BoardSnapshot) -> GameResult<()> {
        if let Err(err) = self.display.clear_screen() {
            debug!("Could not clear the screen: {}", err);
        }
        self.display.show_title("Tic-Tac-Toe")?;
        self.display.show_banner(snapshot)?;
        self.display.show_board(snapshot)?;
        Ok(())
    }

    /// Applies a move; rejected moves leave the board as it was, like a tap
    /// on a taken square.
    fn play(&mut self, index: usize) {
        let before = self.engine.snapshot();
        match self.engine.apply_move(index) {
            Ok(after) => debug!("Cells changed: {:?}", after.changed_cells(&before)),
            Err(err) => debug!("Ignoring move at cell {}: {}", index, err),
        }
    }

    fn reset_board(&mut self) -> GameResult<()> {
        let snapshot = self.engine.snapshot();
        let in_progress = !snapshot.outcome.is_terminal() && snapshot.board.filled_count() > 0;

        if self.config.game.confirm_reset && in_progress {
            let confirmed = Confirm::new()
                .with_prompt("Abandon the current game?")
                .default(false)
                .interact()?;
            if !confirmed {
                return Ok(());
            }
        }

        self.engine.reset();
        // A celebration queued for the finished game is no longer relevant.
        while self.celebrations.try_recv().is_ok() {}
        Ok(())
    }

    async fn play_pending_celebrations(&mut self) -> GameResult<()> {
        while let Ok(winner) = self.celebrations.try_recv() {
            if !self.config.celebration.enabled {
                debug!("Celebration disabled; skipping for {}", winner);
                continue;
            }

            self.display
                .play_celebration(
                    winner,
                    self.config.celebration.frames,
                    self.config.get_animation_delay_ms(),
                    self.config.celebration.play_sound,
                )
                .await?;
        }
        Ok(())
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, CELL_COUNT};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_menu_on_fresh_board() {
        let actions = menu_actions(&GameEngine::new().snapshot());

        assert_eq!(actions.len(), CELL_COUNT + 2);
        assert_eq!(actions[0], MenuAction::Play(0));
        assert_eq!(actions[CELL_COUNT - 1], MenuAction::Play(8));
        assert_eq!(&actions[CELL_COUNT..], &[MenuAction::Reset, MenuAction::Quit]);
    }

    #[test]
    fn test_menu_skips_taken_cells() {
        let mut engine = GameEngine::new();
        engine.apply_move(4).unwrap();

        let actions = menu_actions(&engine.snapshot());

        assert!(!actions.contains(&MenuAction::Play(4)));
        assert_eq!(actions.len(), CELL_COUNT + 1);
    }

    #[test]
    fn test_menu_after_game_over() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).unwrap();
        }

        let actions = menu_actions(&engine.snapshot());

        assert_eq!(actions, vec![MenuAction::Reset, MenuAction::Quit]);
    }

    #[test]
    fn test_action_labels() {
        assert_eq!(MenuAction::Play(0).label(), "Cell 1");
        assert_eq!(MenuAction::Play(8).label(), "Cell 9");
    }

    #[tokio::test]
    async fn test_interface_plays_and_resets() {
        let mut config = Config::default();
        config.celebration.enabled = false;
        config.ui.theme = "missing".to_string();
        let mut interface = GameInterface::new(config).unwrap();

        for index in [0, 3, 1, 4, 2] {
            interface.play(index);
        }
        // Taken and out-of-game moves are ignored.
        interface.play(0);
        assert_eq!(
            interface.engine().outcome(),
            Outcome::Win(Player::PlayerA)
        );

        interface.play_pending_celebrations().await.unwrap();
        assert!(interface.celebrations.try_recv().is_err());

        interface.reset_board().unwrap();
        assert_eq!(interface.engine().snapshot(), GameEngine::new().snapshot());
    }

    #[test]
    fn test_reset_discards_queued_celebration() {
        let mut interface = GameInterface::new(Config::default()).unwrap();

        for index in [0, 3, 1, 4, 2] {
            interface.play(index);
        }
        interface.reset_board().unwrap();

        assert!(interface.celebrations.try_recv().is_err());
        assert_eq!(interface.engine().outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_render_without_terminal() {
        let interface = GameInterface::new(Config::default()).unwrap();
        let snapshot = interface.engine().snapshot();

        interface.render(&snapshot).unwrap();
    }
}

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::Player;
use crate::utils::{GameError, GameResult};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
    pub celebration: CelebrationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player_a_label: String,
    pub player_b_label: String,
    pub confirm_reset: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub show_cell_numbers: bool,
    pub animation_speed: AnimationSpeed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CelebrationConfig {
    pub enabled: bool,
    pub play_sound: bool,
    pub frames: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationSpeed {
    None,
    Slow,
    Medium,
    Fast,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_a_label: "X".to_string(),
            player_b_label: "O".to_string(),
            confirm_reset: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_cell_numbers: true,
            animation_speed: AnimationSpeed::Medium,
        }
    }
}

impl Default for CelebrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            play_sound: true,
            frames: 12,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> GameResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to_file(path)?;
            return Ok(default_config);
        }

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).format(::config::FileFormat::Toml))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> GameResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GameError::configuration(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_content = toml::to_string_pretty(self)?;

        std::fs::write(path, toml_content)
            .map_err(|e| GameError::configuration(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> GameResult<()> {
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(GameError::configuration("Invalid logging level")),
        }

        let a = self.game.player_a_label.trim();
        let b = self.game.player_b_label.trim();
        if a.is_empty() || b.is_empty() {
            return Err(GameError::configuration("Player labels cannot be empty"));
        }
        if a == b {
            return Err(GameError::configuration("Player labels must differ"));
        }

        if self.celebration.enabled && self.celebration.frames == 0 {
            return Err(GameError::configuration(
                "Celebration needs at least one frame when enabled",
            ));
        }

        Ok(())
    }

    pub fn merge_with_cli(&mut self, cli_config: CliConfig) {
        if let Some(log_level) = cli_config.log_level {
            self.logging.level = log_level;
        }
        if cli_config.debug {
            self.logging.level = "debug".to_string();
        }
        if let Some(theme) = cli_config.theme {
            self.ui.theme = theme;
        }
        if cli_config.no_celebration {
            self.celebration.enabled = false;
        }
    }

    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::PlayerA => &self.game.player_a_label,
            Player::PlayerB => &self.game.player_b_label,
        }
    }

    pub fn get_animation_delay_ms(&self) -> u64 {
        match self.ui.animation_speed {
            AnimationSpeed::None => 0,
            AnimationSpeed::Slow => 150,
            AnimationSpeed::Medium => 75,
            AnimationSpeed::Fast => 25,
        }
    }
}

// Configuration that can be overridden by CLI arguments
#[derive(Debug, Default)]
pub struct CliConfig {
    pub log_level: Option<String>,
    pub debug: bool,
    pub theme: Option<String>,
    pub no_celebration: bool,
}

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tic_tac_toe::config::CliConfig;
use tic_tac_toe::{Config, GameInterface, VERSION};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "tic-tac-toe")]
#[command(about = "Two-player tic-tac-toe in the terminal")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Colour theme (default, dark, light)
    #[arg(short, long)]
    theme: Option<String>,

    /// Skip the win celebration
    #[arg(long)]
    no_celebration: bool,
}

impl Cli {
    fn overrides(&self) -> CliConfig {
        CliConfig {
            log_level: None,
            debug: self.debug,
            theme: self.theme.clone(),
            no_celebration: self.no_celebration,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => Config::default(),
    };
    config.merge_with_cli(cli.overrides());
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!("tic_tac_toe={},warn", config.logging.level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting Tic-Tac-Toe v{}", VERSION);

    let mut game_interface = GameInterface::new(config)?;

    if let Err(e) = game_interface.run().await {
        error!("Game error: {}", e);
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from(["tic-tac-toe", "--debug", "--theme", "dark"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.theme.as_deref(), Some("dark"));
        assert!(!cli.no_celebration);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from(["tic-tac-toe", "--no-celebration"]).unwrap();
        let mut config = Config::default();

        config.merge_with_cli(cli.overrides());

        assert!(!config.celebration.enabled);
        assert_eq!(config.logging.level, "info");
    }
}

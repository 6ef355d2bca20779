use console::Term;
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::sleep;

use crate::core::{BoardSnapshot, Mark, Outcome, Player};
use crate::ui::celebration::confetti_frame;
use crate::ui::ThemeManager;

const CONFETTI_WIDTH: usize = 23;

/// Settings the renderer needs from the configuration.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub labels: [String; 2],
    pub show_cell_numbers: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            labels: ["X".to_string(), "O".to_string()],
            show_cell_numbers: true,
        }
    }
}

pub struct Display {
    term: Term,
    theme_manager: ThemeManager,
    options: DisplayOptions,
}

impl Display {
    pub fn new(theme_manager: ThemeManager, options: DisplayOptions) -> Self {
        Self {
            term: Term::stdout(),
            theme_manager,
            options,
        }
    }

    pub fn label(&self, player: Player) -> &str {
        match player {
            Player::PlayerA => &self.options.labels[0],
            Player::PlayerB => &self.options.labels[1],
        }
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        self.term.clear_screen()
    }

    pub fn show_title(&self, title: &str) -> io::Result<()> {
        let styled_title = self.theme_manager.apply_style(title, "title");
        let border = "═".repeat(CONFETTI_WIDTH);
        let styled_border = self.theme_manager.apply_style(&border, "separator");

        writeln!(io::stdout(), "{}", styled_title)?;
        writeln!(io::stdout(), "{}", styled_border)?;
        writeln!(io::stdout())?;

        Ok(())
    }

    /// "Player: X" while the game runs, "Winner: X" or "Draw" once it ends.
    pub fn banner_text(&self, snapshot: &BoardSnapshot) -> String {
        match snapshot.outcome {
            Outcome::InProgress => format!("Player: {}", self.label(snapshot.turn)),
            Outcome::Win(winner) => format!("Winner: {}", self.label(winner)),
            Outcome::Draw => "Draw".to_string(),
        }
    }

    pub fn show_banner(&self, snapshot: &BoardSnapshot) -> io::Result<()> {
        let style = match snapshot.outcome {
            Outcome::InProgress => "banner",
            Outcome::Win(_) => "winner",
            Outcome::Draw => "draw",
        };
        let styled = self
            .theme_manager
            .apply_style(&self.banner_text(snapshot), style);
        writeln!(io::stdout(), "  {}", styled)?;
        writeln!(io::stdout())?;
        Ok(())
    }

    /// Plain text for one cell, before styling.
    fn cell_text(&self, snapshot: &BoardSnapshot, index: usize) -> String {
        match snapshot.cell(index) {
            Some(Mark::Taken(player)) => self.label(player).to_string(),
            _ if self.options.show_cell_numbers => (index + 1).to_string(),
            _ => " ".to_string(),
        }
    }

    fn cell_style(&self, snapshot: &BoardSnapshot, index: usize) -> &'static str {
        let on_winning_line = snapshot
            .winning_line
            .is_some_and(|line| line.contains(&index));

        match snapshot.cell(index) {
            Some(Mark::Taken(_)) if on_winning_line => "winning_cell",
            Some(Mark::Taken(Player::PlayerA)) => "mark_a",
            Some(Mark::Taken(Player::PlayerB)) => "mark_b",
            _ => "cell_number",
        }
    }

    /// The grid as lines of plain text, row-major.
    pub fn board_lines(&self, snapshot: &BoardSnapshot) -> Vec<String> {
        self.grid_lines(snapshot, |_, text| text.to_string())
    }

    fn grid_lines<F>(&self, snapshot: &BoardSnapshot, style_cell: F) -> Vec<String>
    where
        F: Fn(usize, &str) -> String,
    {
        let width = self
            .options
            .labels
            .iter()
            .map(|label| label.chars().count())
            .max()
            .unwrap_or(1)
            .max(1);
        let divider = vec!["─".repeat(width + 2); 3].join("┼");

        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            if row > 0 {
                lines.push(divider.clone());
            }
            let cells: Vec<String> = (0..3)
                .map(|column| {
                    let index = row * 3 + column;
                    let text = format!("{:^width$}", self.cell_text(snapshot, index));
                    format!(" {} ", style_cell(index, &text))
                })
                .collect();
            lines.push(cells.join("│"));
        }
        lines
    }

    pub fn show_board(&self, snapshot: &BoardSnapshot) -> io::Result<()> {
        let lines = self.grid_lines(snapshot, |index, text| {
            self.theme_manager
                .apply_style(text, self.cell_style(snapshot, index))
        });

        for line in lines {
            writeln!(io::stdout(), "  {}", line)?;
        }
        writeln!(io::stdout())?;
        Ok(())
    }

    /// Confetti animation for `winner`. `bell` rings the terminal bell once
    /// when the animation starts.
    pub async fn play_celebration(
        &self,
        winner: Player,
        frames: usize,
        frame_delay_ms: u64,
        bell: bool,
    ) -> io::Result<()> {
        if bell {
            self.term.write_str("\x07")?;
        }

        let message = format!("🎉 {} wins! 🎉", self.label(winner));
        for frame in 0..frames {
            if frame > 0 {
                self.term.clear_last_lines(3)?;
            }

            let confetti = confetti_frame(frame, CONFETTI_WIDTH);
            self.term
                .write_line(&self.theme_manager.apply_style(&confetti, "confetti"))?;
            self.term.write_line(
                &self
                    .theme_manager
                    .apply_style(&format!("{:^width$}", message, width = CONFETTI_WIDTH), "winner"),
            )?;
            self.term.write_line(
                &self
                    .theme_manager
                    .apply_style(&confetti_frame(frame + 3, CONFETTI_WIDTH), "confetti"),
            )?;

            if frame_delay_ms > 0 {
                sleep(Duration::from_millis(frame_delay_ms)).await;
            }
        }

        writeln!(io::stdout())?;
        Ok(())
    }

    pub fn show_message(&self, message: &str, style: &str) -> io::Result<()> {
        let styled_message = self.theme_manager.apply_style(message, style);
        writeln!(io::stdout(), "{}", styled_message)?;
        Ok(())
    }

    pub fn show_separator(&self) -> io::Result<()> {
        let separator = "━".repeat(CONFETTI_WIDTH);
        self.show_message(&separator, "separator")
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        self.theme_manager.set_theme(theme_name)
    }

    pub fn get_available_themes(&self) -> Vec<String> {
        self.theme_manager.list_themes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameEngine;
    use pretty_assertions::assert_eq;

    fn display() -> Display {
        Display::new(ThemeManager::new(), DisplayOptions::default())
    }

    #[test]
    fn test_empty_board_shows_cell_numbers() {
        let lines = display().board_lines(&GameEngine::new().snapshot());

        assert_eq!(
            lines,
            vec![
                " 1 │ 2 │ 3 ",
                "───┼───┼───",
                " 4 │ 5 │ 6 ",
                "───┼───┼───",
                " 7 │ 8 │ 9 ",
            ]
        );
    }

    #[test]
    fn test_board_shows_marks() {
        let mut engine = GameEngine::new();
        engine.apply_move(0).unwrap();
        engine.apply_move(4).unwrap();

        let options = DisplayOptions {
            show_cell_numbers: false,
            ..Default::default()
        };
        let lines = Display::new(ThemeManager::new(), options).board_lines(&engine.snapshot());

        assert_eq!(lines[0], " X │   │   ");
        assert_eq!(lines[2], "   │ O │   ");
    }

    #[test]
    fn test_wide_labels_widen_cells() {
        let options = DisplayOptions {
            labels: ["AA".to_string(), "B".to_string()],
            show_cell_numbers: true,
        };
        let lines = Display::new(ThemeManager::new(), options).board_lines(&GameEngine::new().snapshot());

        assert_eq!(lines[1], "────┼────┼────");
        assert_eq!(lines[0].chars().count(), 14);
    }

    #[test]
    fn test_banner_text() {
        let display = display();
        let mut engine = GameEngine::new();

        assert_eq!(display.banner_text(&engine.snapshot()), "Player: X");
        engine.apply_move(0).unwrap();
        assert_eq!(display.banner_text(&engine.snapshot()), "Player: O");

        for index in [3, 1, 4, 2] {
            engine.apply_move(index).unwrap();
        }
        assert_eq!(display.banner_text(&engine.snapshot()), "Winner: X");

        engine.reset();
        for index in [0, 1, 2, 3, 5, 4, 6, 8, 7] {
            engine.apply_move(index).unwrap();
        }
        assert_eq!(display.banner_text(&engine.snapshot()), "Draw");
    }

    #[test]
    fn test_winning_cells_are_highlighted() {
        let display = display();
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.apply_move(index).unwrap();
        }
        let snapshot = engine.snapshot();

        assert_eq!(display.cell_style(&snapshot, 0), "winning_cell");
        assert_eq!(display.cell_style(&snapshot, 3), "mark_b");
        assert_eq!(display.cell_style(&snapshot, 8), "cell_number");
    }
}

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: HashMap<String, ColorConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorConfig {
    pub foreground: Option<String>,
    pub style: Vec<String>,
}

impl Theme {
    /// Builds a theme from `(style name, foreground, modifiers)` rows, where
    /// modifiers are space separated.
    fn from_rows(name: &str, rows: &[(&str, &str, &str)]) -> Self {
        let colors = rows
            .iter()
            .map(|&(style_name, foreground, modifiers)| {
                (
                    style_name.to_string(),
                    ColorConfig {
                        foreground: Some(foreground.to_string()),
                        style: modifiers.split_whitespace().map(str::to_string).collect(),
                    },
                )
            })
            .collect();

        Self {
            name: name.to_string(),
            colors,
        }
    }
}

pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme: String,
}

impl ThemeManager {
    pub const DEFAULT_THEME: &'static str = "default";

    pub fn new() -> Self {
        let mut manager = Self {
            themes: HashMap::new(),
            current_theme: Self::DEFAULT_THEME.to_string(),
        };

        manager.load_default_themes();
        manager
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        if self.themes.contains_key(theme_name) {
            self.current_theme = theme_name.to_string();
            true
        } else {
            false
        }
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme
    }

    fn current_theme(&self) -> Option<&Theme> {
        self.themes
            .get(&self.current_theme)
            .or_else(|| self.themes.get(Self::DEFAULT_THEME))
    }

    pub fn apply_style(&self, text: &str, style_name: &str) -> String {
        let Some(color_config) = self
            .current_theme()
            .and_then(|theme| theme.colors.get(style_name))
        else {
            return text.to_string();
        };

        let mut styled = text.normal();

        if let Some(color) = color_config.foreground.as_deref().and_then(parse_color) {
            styled = styled.color(color);
        }

        for modifier in &color_config.style {
            styled = match modifier.as_str() {
                "bold" => styled.bold(),
                "italic" => styled.italic(),
                "underline" => styled.underline(),
                "dimmed" => styled.dimmed(),
                "reversed" => styled.reversed(),
                _ => styled,
            };
        }

        styled.to_string()
    }

    pub fn list_themes(&self) -> Vec<String> {
        let mut names: Vec<String> = self.themes.keys().cloned().collect();
        names.sort();
        names
    }

    fn load_default_themes(&mut self) {
        let default = Theme::from_rows(
            "default",
            &[
                ("title", "cyan", "bold"),
                ("banner", "white", "bold"),
                ("mark_a", "red", "bold"),
                ("mark_b", "blue", "bold"),
                ("winning_cell", "green", "bold reversed"),
                ("cell_number", "bright_black", "dimmed"),
                ("winner", "green", "bold"),
                ("draw", "yellow", "bold"),
                ("confetti", "magenta", "bold"),
                ("info", "blue", ""),
                ("separator", "bright_black", "dimmed"),
            ],
        );

        // Mirrors the dark colour scheme: bright marks on a dark terminal.
        let dark = Theme::from_rows(
            "dark",
            &[
                ("title", "bright_cyan", "bold"),
                ("banner", "bright_white", "bold"),
                ("mark_a", "bright_red", "bold"),
                ("mark_b", "bright_white", "bold"),
                ("winning_cell", "bright_green", "bold reversed"),
                ("cell_number", "bright_black", ""),
                ("winner", "bright_green", "bold"),
                ("draw", "bright_yellow", "bold"),
                ("confetti", "bright_magenta", "bold"),
                ("info", "bright_blue", ""),
                ("separator", "bright_black", ""),
            ],
        );

        let light = Theme::from_rows(
            "light",
            &[
                ("title", "blue", "bold"),
                ("banner", "black", "bold"),
                ("mark_a", "red", "bold"),
                ("mark_b", "black", "bold"),
                ("winning_cell", "green", "bold underline"),
                ("winner", "magenta", "bold"),
                ("draw", "blue", "bold"),
            ],
        );

        for theme in [default, dark, light] {
            self.themes.insert(theme.name.clone(), theme);
        }
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_color(color_name: &str) -> Option<Color> {
    match color_name.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "bright_black" => Some(Color::BrightBlack),
        "bright_red" => Some(Color::BrightRed),
        "bright_green" => Some(Color::BrightGreen),
        "bright_yellow" => Some(Color::BrightYellow),
        "bright_blue" => Some(Color::BrightBlue),
        "bright_magenta" => Some(Color::BrightMagenta),
        "bright_cyan" => Some(Color::BrightCyan),
        "bright_white" => Some(Color::BrightWhite),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_manager_creation() {
        let manager = ThemeManager::new();
        assert_eq!(manager.current_theme_name(), "default");
        assert_eq!(manager.list_themes(), vec!["dark", "default", "light"]);
    }

    #[test]
    fn test_set_theme() {
        let mut manager = ThemeManager::new();

        assert!(manager.set_theme("dark"));
        assert_eq!(manager.current_theme_name(), "dark");

        assert!(!manager.set_theme("nonexistent"));
        assert_eq!(manager.current_theme_name(), "dark");
    }

    #[test]
    fn test_apply_style() {
        colored::control::set_override(true);
        let manager = ThemeManager::new();

        let styled = manager.apply_style("X", "mark_a");
        assert!(styled.contains('X'));
        assert_ne!(styled, "X");

        let unstyled = manager.apply_style("X", "nonexistent");
        assert_eq!(unstyled, "X");
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("red"), Some(Color::Red));
        assert_eq!(parse_color("RED"), Some(Color::Red));
        assert_eq!(parse_color("bright_green"), Some(Color::BrightGreen));
        assert_eq!(parse_color("invalid"), None);
    }
}

//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Widest column the game wraps short messages to; the art is 90 columns wide.
const MAX_WRAP_WIDTH: usize = 90;

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn heading_style(&self) -> ColoredString;
    fn art_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn realm_menu_style(&self) -> ColoredString;
    fn realm_heading_style(&self) -> ColoredString;
    fn action_menu_style(&self) -> ColoredString;
    fn action_heading_style(&self) -> ColoredString;
    fn back_option_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn riddle_style(&self) -> ColoredString;
    fn success_style(&self) -> ColoredString;
    fn failure_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
    fn guidance_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.green()
    }
    fn heading_style(&self) -> ColoredString {
        self.green().bold()
    }
    fn art_style(&self) -> ColoredString {
        self.green().bold()
    }
    fn description_style(&self) -> ColoredString {
        self.green()
    }
    fn realm_menu_style(&self) -> ColoredString {
        self.bright_yellow()
    }
    fn realm_heading_style(&self) -> ColoredString {
        self.bright_yellow().bold()
    }
    fn action_menu_style(&self) -> ColoredString {
        self.yellow()
    }
    fn action_heading_style(&self) -> ColoredString {
        self.yellow().bold()
    }
    fn back_option_style(&self) -> ColoredString {
        self.truecolor(255, 140, 0)
    }
    fn prompt_style(&self) -> ColoredString {
        self.blue().bold()
    }
    fn riddle_style(&self) -> ColoredString {
        self.bright_magenta()
    }
    fn success_style(&self) -> ColoredString {
        self.yellow()
    }
    fn failure_style(&self) -> ColoredString {
        self.red().bold()
    }
    fn denied_style(&self) -> ColoredString {
        self.red()
    }
    fn guidance_style(&self) -> ColoredString {
        self.white().bold()
    }
    fn item_style(&self) -> ColoredString {
        self.green()
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn heading_style(&self) -> ColoredString {
        self.as_str().heading_style()
    }
    fn art_style(&self) -> ColoredString {
        self.as_str().art_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn realm_menu_style(&self) -> ColoredString {
        self.as_str().realm_menu_style()
    }
    fn realm_heading_style(&self) -> ColoredString {
        self.as_str().realm_heading_style()
    }
    fn action_menu_style(&self) -> ColoredString {
        self.as_str().action_menu_style()
    }
    fn action_heading_style(&self) -> ColoredString {
        self.as_str().action_heading_style()
    }
    fn back_option_style(&self) -> ColoredString {
        self.as_str().back_option_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn riddle_style(&self) -> ColoredString {
        self.as_str().riddle_style()
    }
    fn success_style(&self) -> ColoredString {
        self.as_str().success_style()
    }
    fn failure_style(&self) -> ColoredString {
        self.as_str().failure_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
    fn guidance_style(&self) -> ColoredString {
        self.as_str().guidance_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
}

/// Wrapping options for short prose messages.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(MAX_WRAP_WIDTH))
}

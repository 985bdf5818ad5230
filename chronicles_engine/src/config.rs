//! Command-line configuration.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Chronicles of Forgotten Lands: a riddle adventure in three realms.")]
pub struct Cli {
    /// Never clear the screen between scenes (handy for piped or recorded sessions).
    #[arg(long)]
    pub no_clear: bool,
    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
    /// Print the content catalog as JSON and exit.
    #[arg(long)]
    pub dump_catalog: bool,
}

/// Runtime settings derived from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub clear_screen: bool,
    pub color: bool,
    pub dump_catalog: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
            dump_catalog: false,
        }
    }
}

impl From<Cli> for GameConfig {
    fn from(cli: Cli) -> Self {
        Self {
            clear_screen: !cli.no_clear,
            color: !cli.no_color,
            dump_catalog: cli.dump_catalog,
        }
    }
}

impl GameConfig {
    /// Switch off ANSI styling globally if color is disabled.
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

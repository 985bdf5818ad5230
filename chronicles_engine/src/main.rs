#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Chronicles of Forgotten Lands **
//! Riddle adventure across three realms

use chronicles_data::{locations, validate_catalog};
use chronicles_engine::{Cli, GameConfig, InputManager, PlayerState, View, run_game};

use anyhow::{Context, Result, bail};
use clap::Parser;
use log::{error, info};

fn main() -> Result<()> {
    env_logger::init();
    let config = GameConfig::from(Cli::parse());
    config.apply_color();

    let catalog: Vec<_> = locations().collect();
    if config.dump_catalog {
        let json = serde_json::to_string_pretty(&catalog).context("while serializing the catalog")?;
        println!("{json}");
        return Ok(());
    }

    let problems = validate_catalog(&catalog);
    if !problems.is_empty() {
        problems.iter().for_each(|p| error!("catalog: {p}"));
        bail!("content catalog failed validation ({} problem(s))", problems.len());
    }
    info!("catalog validated: {} locations", catalog.len());

    let mut state = PlayerState::new();
    let mut view = View::with_config(&config);
    let mut input = InputManager::new();
    run_game(&mut state, &mut view, &mut input).context("while running the game")
}

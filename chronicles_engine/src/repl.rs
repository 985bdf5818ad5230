//! Top-level game loop.
//!
//! The player picks a realm from the title screen, plays it until choosing to
//! go back, and repeats until choosing to exit. The submodules hold the
//! per-location action handling and the terminal input facility.

pub mod input;
pub mod scenario;

pub use input::{InputManager, NumberPrompt, ScriptedInput};
pub use scenario::{ScenarioAction, ScenarioFlow, dispatch};

use anyhow::{Context, Result};
use chronicles_data::LocationId;
use log::{info, warn};

use crate::error::GameError;
use crate::player::PlayerState;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

/// Control flow signal telling the outer loop whether to keep going.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the game until the player exits or input closes.
///
/// # Errors
/// - on terminal input failure (closed input ends the game normally)
pub fn run_game(state: &mut PlayerState, view: &mut View, input: &mut dyn NumberPrompt) -> Result<()> {
    info!("starting a new journey");
    loop {
        match realm_menu(state, view, input) {
            Ok(ReplControl::Continue) => {},
            Ok(ReplControl::Quit) => break,
            Err(err) if is_input_closed(&err) => {
                info!("input closed; ending the session");
                exit_game(state, view);
                break;
            },
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<GameError>(), Some(GameError::InputClosed))
}

/// Show the title screen and realm menu, then handle one selection.
///
/// Invalid selections re-present the menu. Returns `Quit` on exit, `Continue`
/// after the player comes back from a realm.
///
/// # Errors
/// - if reading the selection fails, or a realm's loop fails
pub fn realm_menu(state: &mut PlayerState, view: &mut View, input: &mut dyn NumberPrompt) -> Result<ReplControl> {
    view.push(ViewItem::ClearScreen);
    view.push(ViewItem::TitleAndRules);
    loop {
        view.push(ViewItem::RealmMenu);
        view.flush();

        let prompt = "\n      Where will you go? 💬 ".prompt_style().to_string();
        let choice = input.ask_number(&prompt).context("while reading the realm selection")?;
        if choice == 0 {
            return Ok(exit_game(state, view));
        }
        match LocationId::from_menu_choice(choice) {
            Some(id) => {
                play_scenario(state, view, input, id)?;
                return Ok(ReplControl::Continue);
            },
            None => {
                warn!("invalid realm selection {choice}");
                invalid_choice(view);
            },
        }
    }
}

/// Play one realm until the player chooses to go back.
///
/// # Errors
/// - if reading a selection fails
pub fn play_scenario(
    state: &mut PlayerState,
    view: &mut View,
    input: &mut dyn NumberPrompt,
    id: LocationId,
) -> Result<()> {
    info!("entering {id}");
    state.mark_visited(id);
    view.push_scene(id);

    loop {
        view.push(ViewItem::ActionMenu(id));
        view.flush();

        let prompt = "Choose an action 💬 ".prompt_style().to_string();
        let selection = input
            .ask_number(&prompt)
            .with_context(|| format!("while reading an action at {id}"))?;
        let action = ScenarioAction::from_selection(selection);
        if dispatch(state, view, input, id, action)? == ScenarioFlow::Leave {
            return Ok(());
        }
    }
}

/// Say goodbye and signal the outer loop to stop.
pub fn exit_game(state: &PlayerState, view: &mut View) -> ReplControl {
    let visited: Vec<_> = state.visited().map(LocationId::key).collect();
    info!("player exiting; visited: [{}]", visited.join(", "));
    info!("final inventory:");
    state.inventory.iter().for_each(|item| info!("- {item}"));

    view.push(ViewItem::ClearScreen);
    view.push(ViewItem::TitleAndRules);
    view.push(ViewItem::Goodbye);
    view.flush();
    ReplControl::Quit
}

/// Tell the player the selection was not on the menu.
pub fn invalid_choice(view: &mut View) {
    view.push(ViewItem::ClearScreen);
    view.push(ViewItem::TitleAndRules);
    view.push(ViewItem::InvalidChoice);
}

//! `repl::scenario` module
//!
//! Maps a selection from a location's action menu onto the player's progress:
//! answering riddles for items, attempting the objective, or leaving.

use anyhow::Result;
use chronicles_data::{ItemDef, LocationDef, LocationId, RiddleDef, location};
use log::{error, info, warn};

use crate::error::GameError;
use crate::player::{FinishOutcome, PlayerState, ProgressStage};
use crate::repl::input::NumberPrompt;
use crate::riddle::challenge;
use crate::view::{View, ViewItem};

/// A selection from a location's action menu.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScenarioAction {
    /// Return to the realm menu.
    Back,
    /// Answer the riddle for a 0-based item slot.
    Attempt(usize),
    /// Attempt the location's objective.
    Finish,
    Invalid(i64),
}

impl ScenarioAction {
    pub fn from_selection(selection: i64) -> Self {
        match selection {
            0 => ScenarioAction::Back,
            1 => ScenarioAction::Attempt(0),
            2 => ScenarioAction::Attempt(1),
            3 => ScenarioAction::Attempt(2),
            4 => ScenarioAction::Finish,
            other => ScenarioAction::Invalid(other),
        }
    }
}

/// An action that keeps the player in the location.
#[derive(Debug, Copy, Clone)]
enum Request {
    Attempt(usize),
    Finish,
    Invalid(i64),
}

/// Whether the player stays in the location after an action.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScenarioFlow {
    Stay,
    Leave,
}

/// Look up a location, checking the catalog returned the one asked for.
///
/// # Errors
/// - `GameError::MissingLocation` if the catalog and the identifier disagree
pub fn location_def(id: LocationId) -> Result<&'static LocationDef, GameError> {
    let loc = location(id);
    if loc.id == id {
        Ok(loc)
    } else {
        Err(GameError::MissingLocation(id))
    }
}

/// Apply one action-menu selection for a location.
///
/// A finished location replays its victory screen whatever was chosen. A location
/// whose items were all just collected shows its one-time congratulations first
/// and defers the chosen action. Going back always leaves.
///
/// # Errors
/// - if the input facility fails while a riddle is waiting for an answer
pub fn dispatch(
    state: &mut PlayerState,
    view: &mut View,
    input: &mut dyn NumberPrompt,
    id: LocationId,
    action: ScenarioAction,
) -> Result<ScenarioFlow> {
    let request = match action {
        ScenarioAction::Back => {
            info!("leaving {id} for the realm menu");
            return Ok(ScenarioFlow::Leave);
        },
        ScenarioAction::Attempt(slot) => Request::Attempt(slot),
        ScenarioAction::Finish => Request::Finish,
        ScenarioAction::Invalid(selection) => Request::Invalid(selection),
    };

    let loc = match location_def(id) {
        Ok(loc) => loc,
        Err(err) => {
            error!("{err}");
            view.push(ViewItem::Error(format!("Error: {err}.")));
            return Ok(ScenarioFlow::Stay);
        },
    };

    match state.stage(id) {
        ProgressStage::Finished => {
            info!("{id} already finished; replaying victory");
            view.push(ViewItem::ClearScreen);
            view.push(ViewItem::Victory(id));
        },
        ProgressStage::ReadyToFinish if !state.was_notified(id) => {
            info!("all items collected at {id}; deferring {request:?} for the congratulations");
            view.push_scene(id);
            view.push(ViewItem::AllItemsCollected(id));
            state.mark_notified(id);
        },
        _ => match request {
            Request::Attempt(slot) => attempt_item(state, view, input, loc, slot)?,
            Request::Finish => finish_objective(state, view, id),
            Request::Invalid(selection) => {
                warn!("invalid action {selection} at {id}");
                view.push_scene(id);
                view.push(ViewItem::InvalidChoice);
            },
        },
    }

    view.push(ViewItem::CollectedItems(state.collected(id).to_vec()));
    Ok(ScenarioFlow::Stay)
}

fn slot_content(loc: &'static LocationDef, slot: usize) -> Result<(&'static RiddleDef, &'static ItemDef), GameError> {
    match (loc.riddle(slot), loc.item(slot)) {
        (Some(riddle), Some(item)) => Ok((riddle, item)),
        _ => Err(GameError::MissingRiddle { location: loc.id, slot }),
    }
}

fn attempt_item(
    state: &mut PlayerState,
    view: &mut View,
    input: &mut dyn NumberPrompt,
    loc: &'static LocationDef,
    slot: usize,
) -> Result<()> {
    let (riddle, item) = match slot_content(loc, slot) {
        Ok(content) => content,
        Err(err) => {
            error!("{err}");
            view.push(ViewItem::Error(format!("Error: {err}.")));
            return Ok(());
        },
    };

    if state.has_collected(loc.id, item.name) {
        view.push_scene(loc.id);
        view.push(ViewItem::AlreadyCollected { location: loc.id, slot });
        return Ok(());
    }

    view.push_scene(loc.id);
    if challenge(riddle, view, input)? {
        state.collect(loc.id, item.name);
        view.push_scene(loc.id);
        view.push(ViewItem::CorrectAnswer(item.name.to_string()));
    } else {
        view.push_scene(loc.id);
        view.push(ViewItem::RiddleFailed);
    }
    Ok(())
}

fn finish_objective(state: &mut PlayerState, view: &mut View, id: LocationId) {
    match state.finish(id) {
        FinishOutcome::Finished | FinishOutcome::AlreadyFinished => {
            view.push(ViewItem::ClearScreen);
            view.push(ViewItem::Victory(id));
        },
        FinishOutcome::NotReady { collected } => {
            info!("objective at {id} attempted with {collected} item(s)");
            view.push_scene(id);
            view.push(ViewItem::NeedMoreItems(id));
        },
    }
}

//! Player -- progress state for a single game session
//!
//! Tracks, per location, which items have been collected, whether the one-time
//! "all items collected" message has been shown and whether the location's
//! objective is complete. Items from finished locations are moved into the
//! global inventory.

use chronicles_data::{ITEMS_PER_LOCATION, LocationId, location};

use log::{info, warn};
use std::collections::{BTreeSet, HashMap};

/// Where a location stands in its progression.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProgressStage {
    /// Fewer than three items collected.
    Exploring,
    /// All three items collected, objective not yet done.
    ReadyToFinish,
    /// Objective done; terminal.
    Finished,
}

/// Result of attempting a location's objective.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FinishOutcome {
    Finished,
    NotReady { collected: usize },
    AlreadyFinished,
}

/// Per-location progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationProgress {
    collected: Vec<String>,
    notified: bool,
    finished: bool,
}

impl LocationProgress {
    pub fn collected(&self) -> &[String] {
        &self.collected
    }

    pub fn stage(&self) -> ProgressStage {
        if self.finished {
            ProgressStage::Finished
        } else if self.collected.len() == ITEMS_PER_LOCATION {
            ProgressStage::ReadyToFinish
        } else {
            ProgressStage::Exploring
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    /// Items from every finished location, in the order they were added.
    pub inventory: Vec<String>,
    progress: HashMap<LocationId, LocationProgress>,
    visited: BTreeSet<LocationId>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    fn progress_mut(&mut self, id: LocationId) -> &mut LocationProgress {
        self.progress.entry(id).or_default()
    }

    /// Items collected so far at a location, in collection order.
    pub fn collected(&self, id: LocationId) -> &[String] {
        self.progress.get(&id).map(LocationProgress::collected).unwrap_or_default()
    }

    pub fn has_collected(&self, id: LocationId, item_name: &str) -> bool {
        self.collected(id).iter().any(|name| name == item_name)
    }

    /// Add an item to a location's collection.
    ///
    /// Returns true if the item was newly added. Re-collecting is a no-op, and names
    /// that do not belong to the location are refused so a location never holds more
    /// than its three items.
    pub fn collect(&mut self, id: LocationId, item_name: &str) -> bool {
        if location(id).find_item(item_name).is_none() {
            warn!("refusing to collect '{item_name}' at {id}: not one of its items");
            return false;
        }
        if self.has_collected(id, item_name) {
            return false;
        }
        let progress = self.progress_mut(id);
        progress.collected.push(item_name.to_string());
        info!("collected '{item_name}' at {id} ({}/{ITEMS_PER_LOCATION})", progress.collected.len());
        true
    }

    /// True iff all three of the location's items have been collected.
    pub fn all_collected(&self, id: LocationId) -> bool {
        self.collected(id).len() == ITEMS_PER_LOCATION
    }

    /// Record that the "all items collected" message was shown.
    ///
    /// Only takes effect once every item is collected; the flag never resets.
    pub fn mark_notified(&mut self, id: LocationId) -> bool {
        if !self.all_collected(id) {
            warn!("not marking {id} as notified: items still missing");
            return false;
        }
        self.progress_mut(id).notified = true;
        true
    }

    pub fn was_notified(&self, id: LocationId) -> bool {
        self.progress.get(&id).is_some_and(|p| p.notified)
    }

    /// Complete a location's objective, moving its items into the global inventory.
    pub fn finish(&mut self, id: LocationId) -> FinishOutcome {
        if self.is_finished(id) {
            return FinishOutcome::AlreadyFinished;
        }
        if !self.all_collected(id) {
            return FinishOutcome::NotReady {
                collected: self.collected(id).len(),
            };
        }

        let items = self.collected(id).to_vec();
        for item in items {
            if !self.inventory.contains(&item) {
                self.inventory.push(item);
            }
        }
        self.progress_mut(id).finished = true;
        info!("objective '{}' completed at {id}", location(id).objective);
        FinishOutcome::Finished
    }

    pub fn is_finished(&self, id: LocationId) -> bool {
        self.progress.get(&id).is_some_and(|p| p.finished)
    }

    pub fn stage(&self, id: LocationId) -> ProgressStage {
        self.progress.get(&id).map_or(ProgressStage::Exploring, LocationProgress::stage)
    }

    pub fn mark_visited(&mut self, id: LocationId) {
        self.visited.insert(id);
    }

    pub fn visited(&self) -> impl Iterator<Item = LocationId> + '_ {
        self.visited.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicles_data::locations;

    fn collect_all(state: &mut PlayerState, id: LocationId) {
        for name in location(id).item_names() {
            state.collect(id, name);
        }
    }

    #[test]
    fn collecting_twice_is_idempotent() {
        for loc in locations() {
            let mut state = PlayerState::new();
            let first = loc.items[0].name;
            assert!(state.collect(loc.id, first));
            assert!(!state.collect(loc.id, first));
            assert_eq!(state.collected(loc.id).to_vec(), vec![first.to_string()]);
        }
    }

    #[test]
    fn foreign_items_are_refused() {
        let mut state = PlayerState::new();
        assert!(!state.collect(LocationId::Castle, "Map Piece 1"));
        assert!(state.collected(LocationId::Castle).is_empty());
    }

    #[test]
    fn finish_before_all_collected_changes_nothing() {
        for loc in locations() {
            let mut state = PlayerState::new();
            assert_eq!(state.finish(loc.id), FinishOutcome::NotReady { collected: 0 });
            state.collect(loc.id, loc.items[0].name);
            state.collect(loc.id, loc.items[2].name);
            assert_eq!(state.finish(loc.id), FinishOutcome::NotReady { collected: 2 });
            assert!(!state.is_finished(loc.id));
            assert!(state.inventory.is_empty());
            assert_eq!(state.stage(loc.id), ProgressStage::Exploring);
        }
    }

    #[test]
    fn finish_moves_items_into_inventory_once() {
        for loc in locations() {
            let mut state = PlayerState::new();
            collect_all(&mut state, loc.id);
            assert_eq!(state.stage(loc.id), ProgressStage::ReadyToFinish);
            assert_eq!(state.finish(loc.id), FinishOutcome::Finished);
            assert_eq!(state.finish(loc.id), FinishOutcome::AlreadyFinished);

            let expected: Vec<String> = loc.item_names().map(String::from).collect();
            assert_eq!(state.inventory, expected);
            assert!(state.is_finished(loc.id));
            assert_eq!(state.stage(loc.id), ProgressStage::Finished);
        }
    }

    #[test]
    fn inventory_aggregates_across_locations() {
        let mut state = PlayerState::new();
        collect_all(&mut state, LocationId::Village);
        collect_all(&mut state, LocationId::Castle);
        state.finish(LocationId::Village);
        state.finish(LocationId::Castle);
        assert_eq!(state.inventory.len(), 6);
        assert_eq!(state.inventory[0], "Ancient Book of Secrets");
        assert_eq!(state.inventory[3], "Ancient Key");
    }

    #[test]
    fn notification_requires_all_items_and_sticks() {
        let mut state = PlayerState::new();
        let id = LocationId::Island;
        assert!(!state.mark_notified(id));
        assert!(!state.was_notified(id));

        collect_all(&mut state, id);
        assert!(state.mark_notified(id));
        assert!(state.was_notified(id));

        state.finish(id);
        assert!(state.was_notified(id));
    }

    #[test]
    fn untouched_locations_are_exploring() {
        let state = PlayerState::new();
        for id in LocationId::ALL {
            assert_eq!(state.stage(id), ProgressStage::Exploring);
            assert!(state.collected(id).is_empty());
            assert!(!state.was_notified(id));
            assert!(!state.is_finished(id));
        }
    }

    #[test]
    fn visited_locations_are_ordered_and_unique() {
        let mut state = PlayerState::new();
        state.mark_visited(LocationId::Village);
        state.mark_visited(LocationId::Castle);
        state.mark_visited(LocationId::Village);
        let visited: Vec<_> = state.visited().collect();
        assert_eq!(visited, vec![LocationId::Castle, LocationId::Village]);
    }
}

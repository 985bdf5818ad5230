use serde::Serialize;
use std::fmt;

/// Number of menu options every location offers (three riddles plus the objective).
pub const OPTIONS_PER_LOCATION: usize = 4;
/// Number of riddles, and therefore collectible items, per location.
pub const ITEMS_PER_LOCATION: usize = 3;

/// One of the three fixed story settings.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LocationId {
    Castle,
    Island,
    Village,
}

impl LocationId {
    /// All locations in realm-menu order.
    pub const ALL: [LocationId; 3] = [LocationId::Castle, LocationId::Island, LocationId::Village];

    /// Resolve a 1-based realm menu selection.
    pub fn from_menu_choice(choice: i64) -> Option<LocationId> {
        let index = usize::try_from(choice.checked_sub(1)?).ok()?;
        Self::ALL.get(index).copied()
    }

    /// 1-based position of this location in the realm menu.
    pub fn menu_number(self) -> usize {
        match self {
            LocationId::Castle => 1,
            LocationId::Island => 2,
            LocationId::Village => 3,
        }
    }

    /// Short lowercase key, used in logs.
    pub fn key(self) -> &'static str {
        match self {
            LocationId::Castle => "castle",
            LocationId::Island => "island",
            LocationId::Village => "village",
        }
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A multiple-choice riddle guarding one item.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiddleDef {
    pub question: &'static str,
    pub options: &'static [&'static str],
    /// 0-based index into `options`.
    pub correct: usize,
}

impl RiddleDef {
    /// Returns true if a 1-based selection names the correct option.
    ///
    /// Out-of-range selections (zero, negative, past the last option) are simply wrong.
    pub fn is_correct(&self, selection: i64) -> bool {
        selection
            .checked_sub(1)
            .and_then(|index| usize::try_from(index).ok())
            .is_some_and(|index| index == self.correct)
    }
}

/// A collectible unlocked by answering its riddle.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ItemDef {
    pub name: &'static str,
    pub icon: &'static str,
    /// Shown when the player picks this item's action again after collecting it.
    pub already_collected: &'static str,
}

/// Location-specific message text.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocationMessages {
    /// Guidance when the objective is attempted with fewer than three items.
    pub need_more: &'static str,
    /// One-time congratulations once the third item is in hand.
    pub all_collected: &'static str,
    /// Win screen (art and text) replayed every time the finished location is acted on.
    pub victory: &'static str,
}

/// A complete, immutable story location.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LocationDef {
    pub id: LocationId,
    pub name: &'static str,
    pub description: &'static str,
    pub art: &'static str,
    /// Menu labels for actions 1 through 4.
    pub options: [&'static str; OPTIONS_PER_LOCATION],
    /// Riddle `n` guards item `n`.
    pub riddles: [RiddleDef; ITEMS_PER_LOCATION],
    pub items: [ItemDef; ITEMS_PER_LOCATION],
    /// Short name of the final action, for logs ("open the treasure").
    pub objective: &'static str,
    pub messages: LocationMessages,
}

impl LocationDef {
    /// Riddle for a 0-based item slot.
    pub fn riddle(&self, slot: usize) -> Option<&RiddleDef> {
        self.riddles.get(slot)
    }

    /// Item for a 0-based item slot.
    pub fn item(&self, slot: usize) -> Option<&ItemDef> {
        self.items.get(slot)
    }

    /// Item names in slot order.
    pub fn item_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.items.iter().map(|item| item.name)
    }

    /// Look up one of this location's items by name.
    pub fn find_item(&self, name: &str) -> Option<&ItemDef> {
        self.items.iter().find(|item| item.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RIDDLE: RiddleDef = RiddleDef {
        question: "What am I?",
        options: &["A key", "A sword", "A spell"],
        correct: 0,
    };

    #[test]
    fn riddle_accepts_only_the_stored_answer() {
        assert!(RIDDLE.is_correct(1));
        assert!(!RIDDLE.is_correct(2));
        assert!(!RIDDLE.is_correct(3));
    }

    #[test]
    fn riddle_treats_out_of_range_as_wrong() {
        assert!(!RIDDLE.is_correct(0));
        assert!(!RIDDLE.is_correct(-1));
        assert!(!RIDDLE.is_correct(4));
        assert!(!RIDDLE.is_correct(i64::MIN));
        assert!(!RIDDLE.is_correct(i64::MAX));
    }

    #[test]
    fn menu_choice_maps_to_locations() {
        assert_eq!(LocationId::from_menu_choice(1), Some(LocationId::Castle));
        assert_eq!(LocationId::from_menu_choice(2), Some(LocationId::Island));
        assert_eq!(LocationId::from_menu_choice(3), Some(LocationId::Village));
        assert_eq!(LocationId::from_menu_choice(0), None);
        assert_eq!(LocationId::from_menu_choice(4), None);
        assert_eq!(LocationId::from_menu_choice(-2), None);
    }

    #[test]
    fn menu_number_round_trips_for_every_location() {
        for id in LocationId::ALL {
            let choice = i64::try_from(id.menu_number()).unwrap();
            assert_eq!(LocationId::from_menu_choice(choice), Some(id));
        }
    }
}

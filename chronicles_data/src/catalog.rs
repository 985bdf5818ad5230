//! The compiled-in content catalog: three locations, their riddles, items and messages.

use crate::defs::{ItemDef, LocationDef, LocationId, LocationMessages, RiddleDef};

/// Block-letter banner and welcome text for the title screen.
pub const TITLE_ART: &str = include_str!("../art/title.txt");
/// Boxed banner shown after an out-of-range menu selection.
pub const INVALID_CHOICE_ART: &str = include_str!("../art/invalid_choice.txt");
/// Farewell banner.
pub const GOODBYE_ART: &str = include_str!("../art/goodbye.txt");

/// "How to Play" section of the title screen.
pub const HOW_TO_PLAY: &str = "      1. Choose a realm to explore: venture into the castle, cross the island,\n\
    \x20        or discover the village.\n\
    \x20     2. Solve riddles and collect 3 enchanted items that unlock the path to\n\
    \x20        victory.";

/// "Controls" section of the title screen.
pub const CONTROLS: &str = "      \u{2022}  Use the numbered options to make your decisions.\n\
    \x20     \u{2022}  At any time, you can choose to go back to the beginning by selecting '0'\n\
    \x20        in a realm, or choose to exit the game by selecting '0' in the homepage.";

/// Closing line of the title screen.
pub const READY_PROMPT: &str = "      Are you ready to embark on this mystical adventure? \u{2728}";

pub static CASTLE: LocationDef = LocationDef {
    id: LocationId::Castle,
    name: "Echoing Castle",
    description: "You stand before the Echoing Castle, its towering walls looming in silence. The entrance,\n\
        overgrown with vines, leads to shadowed halls where your footsteps echo. Inside, faded\n\
        tapestries tell stories of battles long past. A regal throne sits ahead, worn by time,\n\
        and dark passages beckon with hidden secrets. Somewhere within, a treasure waits to be\n\
        unlocked, but you'll need to find three magical objects first.",
    art: include_str!("../art/castle.txt"),
    options: [
        "Explore the castle",
        "Inspect the throne",
        "Examine the passages",
        "Open the treasure",
    ],
    riddles: [
        RiddleDef {
            question: "As you wander the castle halls, an inscription appears on the cold stone: I open doors\n\
                to forgotten places, yet I am silent and still. I hold power in my metal form, waiting\n\
                to fulfill. What am I?",
            options: &["A key", "A sword", "A spell"],
            correct: 0,
        },
        RiddleDef {
            question: "As you approach the throne, a faint glow reveals a message on its base: I hang near the\n\
                heart and glow with magic's might. I protect from the shadows and keep evil from sight.\n\
                What am I?",
            options: &["A lantern", "A shield", "A magic amulet"],
            correct: 2,
        },
        RiddleDef {
            question: "Deep in the castle's hidden passages, you come across a glowing script on the wall: I\n\
                show what cannot be seen, I reveal what is to come. In my glass, all futures are spun.\n\
                What am I?",
            options: &["A crystal ball", "A mirror", "A clock"],
            correct: 0,
        },
    ],
    items: [
        ItemDef {
            name: "Ancient Key",
            icon: "🗝️",
            already_collected: "You have already collected the 🗝️  while exploring the castle.",
        },
        ItemDef {
            name: "Magic Amulet",
            icon: "🧿",
            already_collected: "You have already collected the 🧿 while inspecting the throne.",
        },
        ItemDef {
            name: "Crystal Ball",
            icon: "🔮",
            already_collected: "You have already collected the 🔮 while examining the passages.",
        },
    ],
    objective: "open the treasure",
    messages: LocationMessages {
        need_more: "You need 3 magic items to open the treasure! Keep exploring.",
        all_collected: "Congratulations!!!\n\
            You have collected 3 magical items: 🗝️  🧿 🔮.\n\
            You can now open the treasure. Choose action 4.",
        victory: include_str!("../art/castle_victory.txt"),
    },
};

pub static ISLAND: LocationDef = LocationDef {
    id: LocationId::Island,
    name: "Desert Island",
    description: "You find yourself on the sunlit Desert Island of Lost Sands, with golden sands and swaying\n\
        palm trees. The salty breeze fills the air as distant seagulls cry overhead. To leave the\n\
        island, you must collect three pieces of a map, scattered across its hidden locations. The\n\
        dense jungle to the east calls for exploration. To the west, a shipwreck lies half-buried\n\
        in the sand, offering secrets from the past. Inland, a dark cave entrance is hidden among\n\
        the vines, daring you to investigate its depths. The island may seem serene, but its\n\
        secrets are your key to escape.",
    art: include_str!("../art/island.txt"),
    options: [
        "Explore the jungle",
        "Investigate the cave",
        "Examine the shipwreck",
        "Leave the beach",
    ],
    riddles: [
        RiddleDef {
            question: "You are deep in the jungle, and a mysterious voice in the wind asks: 'I am the beginning\n\
                of the end, and the end of every place. I begin eternity and end space. What am I?'",
            options: &["The earth", "The sun", "The letter 'E'"],
            correct: 2,
        },
        RiddleDef {
            question: "As you enter the dark cave, an inscription on the wall reads: 'The more you take, the\n\
                more you leave behind. What am I?'",
            options: &["Footsteps", "Time", "Shadows"],
            correct: 0,
        },
        RiddleDef {
            question: "The ghostly remains of the ship whisper to you: 'I have seas without water, coasts without\n\
                sand, towns without people, mountains without land. What am I?'",
            options: &["A dream", "A map", "A desert"],
            correct: 1,
        },
    ],
    items: [
        ItemDef {
            name: "Map Piece 1",
            icon: "🗺️",
            already_collected: "You have already collected 🗺️  (1) while exploring the jungle.",
        },
        ItemDef {
            name: "Map Piece 2",
            icon: "🗺️",
            already_collected: "You have already collected 🗺️  (2) while investigating the cave.",
        },
        ItemDef {
            name: "Map Piece 3",
            icon: "🗺️",
            already_collected: "You have already collected 🗺️  (3) while examining the shipwreck.",
        },
    ],
    objective: "leave the island",
    messages: LocationMessages {
        need_more: "You need 3 map pieces to leave the island! Keep exploring.",
        all_collected: "Congratulations!!!\n\
            You have collected 3 map pieces: 🗺️  🗺️  🗺️.\n\
            You can now leave the island. Choose action 4 to escape.",
        victory: include_str!("../art/island_victory.txt"),
    },
};

pub static VILLAGE: LocationDef = LocationDef {
    id: LocationId::Village,
    name: "Forgotten Village",
    description: "You arrive in the Forgotten Village, a place frozen in time. Cobbled streets wind past old\n\
        cottages with ivy-covered walls and mossy roofs. The empty marketplace is silent, with\n\
        weathered stalls hinting at a bustling past. Tall trees surround the village, their shadows\n\
        falling over hidden corners and forgotten paths. A crumbling well stands in the center, and\n\
        the air is filled with the scent of old wood and wildflowers. The village feels full of\n\
        mystery, waiting for someone to discover its secrets.",
    art: include_str!("../art/village.txt"),
    options: [
        "Visit the abandoned library",
        "Go to the forgotten well",
        "Inspect the blacksmith's shop",
        "Seek the Wise Elder",
    ],
    riddles: [
        RiddleDef {
            question: "The old scholar shows you the cover of the Ancient Book of Secrets. To unlock its pages,\n\
                you must complete the phrase: 'In the heart of the village lies the secret of\u{2026}'",
            options: &["Knowledge", "Time", "Wealth"],
            correct: 0,
        },
        RiddleDef {
            question: "The guardian of the chalice presents three objects: a candle, a torch, and a star. One of\n\
                these lights the way through the dark. Which one shines brightest at night?",
            options: &["A candle", "A torch", "A star"],
            correct: 2,
        },
        RiddleDef {
            question: "The crystal glows brightly as it presents a riddle: I speak without a mouth and hear\n\
                without ears. I have no body, but I come alive with wind. What am I?",
            options: &["A tree", "An echo", "A river"],
            correct: 1,
        },
    ],
    items: [
        ItemDef {
            name: "Ancient Book of Secrets",
            icon: "📖",
            already_collected: "You have already collected the 📖 while exploring the library.",
        },
        ItemDef {
            name: "Golden Chalice",
            icon: "🏆",
            already_collected: "You have already collected the 🏆 while inspecting the well.",
        },
        ItemDef {
            name: "Crystal of Fate",
            icon: "💎",
            already_collected: "You have already collected the 💎 while investigating the shop.",
        },
    ],
    objective: "visit the Wise Elder",
    messages: LocationMessages {
        need_more: "You need all 3 sacred items to visit the Wise Elder! Keep exploring.",
        all_collected: "Congratulations!!!\n\
            You have collected 3 ancient items: 📖  🏆  💎.\n\
            You can now visit the Wise Elder to seek his wisdom. Choose action 4.",
        victory: include_str!("../art/village_victory.txt"),
    },
};

/// Look up a location by identifier.
pub fn location(id: LocationId) -> &'static LocationDef {
    match id {
        LocationId::Castle => &CASTLE,
        LocationId::Island => &ISLAND,
        LocationId::Village => &VILLAGE,
    }
}

/// All locations in realm-menu order.
pub fn locations() -> impl Iterator<Item = &'static LocationDef> {
    LocationId::ALL.into_iter().map(location)
}

/// Display icon for an item name from any location; `None` for unknown names.
pub fn item_icon(name: &str) -> Option<&'static str> {
    locations().find_map(|loc| loc.find_item(name)).map(|item| item.icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_matching_location() {
        for id in LocationId::ALL {
            assert_eq!(location(id).id, id);
        }
    }

    #[test]
    fn castle_items_in_slot_order() {
        let names: Vec<_> = CASTLE.item_names().collect();
        assert_eq!(names, vec!["Ancient Key", "Magic Amulet", "Crystal Ball"]);
    }

    #[test]
    fn item_icons_cover_every_location() {
        assert_eq!(item_icon("Ancient Key"), Some("🗝️"));
        assert_eq!(item_icon("Map Piece 2"), Some("🗺️"));
        assert_eq!(item_icon("Crystal of Fate"), Some("💎"));
        assert_eq!(item_icon("Rubber Duck"), None);
    }

    #[test]
    fn catalog_serializes_for_dump() {
        let catalog: Vec<_> = locations().collect();
        let json = serde_json::to_value(&catalog).unwrap();
        let realms = json.as_array().unwrap();
        assert_eq!(realms.len(), 3);

        let ids: Vec<_> = realms.iter().map(|loc| loc["id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["castle", "island", "village"]);

        let castle = &realms[0];
        let correct: Vec<_> = castle["riddles"]
            .as_array()
            .unwrap()
            .iter()
            .map(|riddle| riddle["correct"].as_u64().unwrap())
            .collect();
        assert_eq!(correct, vec![0, 2, 0]);
        assert_eq!(castle["items"][0]["name"], "Ancient Key");
        assert_eq!(realms[1]["items"][2]["name"], "Map Piece 3");
        assert_eq!(realms[2]["items"][1]["name"], "Golden Chalice");
        assert_eq!(realms[2]["riddles"][2]["correct"], 1);
        assert_eq!(castle["options"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn art_files_are_embedded() {
        assert!(CASTLE.art.contains("WELCOME TO THE CASTLE OF ETERNAL ECHOES"));
        assert!(ISLAND.art.contains("WELCOME TO THE DESERT ISLAND OF LOST SANDS"));
        assert!(VILLAGE.art.contains("WELCOME TO THE FORGOTTEN VILLAGE"));
        assert!(VILLAGE.messages.victory.contains("VILLAGE QUEST"));
        assert!(INVALID_CHOICE_ART.contains("Invalid choice"));
        assert!(GOODBYE_ART.contains("Goodbye"));
    }
}

//! View module.
//!
//! Handlers push [`ViewItem`]s describing what the player should see; the view
//! renders them when flushed, which happens right before every prompt. A
//! headless view renders nothing and keeps a transcript instead, which is what
//! the session tests inspect.

use std::io::{self, Write};

use chronicles_data::{
    CONTROLS, GOODBYE_ART, HOW_TO_PLAY, INVALID_CHOICE_ART, LocationId, READY_PROMPT, TITLE_ART, item_icon, location,
    locations,
};
use log::warn;
use textwrap::fill;
use variantly::Variantly;

use crate::config::GameConfig;
use crate::style::{GameStyle, normal_block};

const ICON_CORRECT: &str = "🙂";
const ICON_STOP: &str = "🛑";
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Something the player should see.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum ViewItem {
    ClearScreen,
    TitleAndRules,
    RealmMenu,
    /// A location's art and description.
    Scene(LocationId),
    ActionMenu(LocationId),
    Riddle {
        question: &'static str,
        options: &'static [&'static str],
    },
    CorrectAnswer(String),
    RiddleFailed,
    AlreadyCollected {
        location: LocationId,
        slot: usize,
    },
    NeedMoreItems(LocationId),
    AllItemsCollected(LocationId),
    Victory(LocationId),
    /// The current location's collected items; empty renders the empty-state line.
    CollectedItems(Vec<String>),
    InvalidChoice,
    Goodbye,
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Terminal,
    Headless,
}

/// Aggregates view items between prompts and renders them on `flush`.
#[derive(Debug, Clone)]
pub struct View {
    pub clear_screen: bool,
    pub items: Vec<ViewItem>,
    output: Output,
    transcript: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Terminal view with default settings.
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            clear_screen: config.clear_screen,
            items: Vec::new(),
            output: Output::Terminal,
            transcript: Vec::new(),
        }
    }

    /// A view that renders nothing and records every flushed item.
    pub fn headless() -> Self {
        Self {
            clear_screen: false,
            items: Vec::new(),
            output: Output::Headless,
            transcript: Vec::new(),
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Clear the screen and show a location's art and description.
    pub fn push_scene(&mut self, id: LocationId) {
        self.push(ViewItem::ClearScreen);
        self.push(ViewItem::Scene(id));
    }

    /// Everything flushed so far by a headless view.
    pub fn transcript(&self) -> &[ViewItem] {
        &self.transcript
    }

    /// Display all pending items and clear the buffer.
    pub fn flush(&mut self) {
        let items = std::mem::take(&mut self.items);
        match self.output {
            Output::Headless => self.transcript.extend(items),
            Output::Terminal => {
                for item in &items {
                    self.render(item);
                }
                if let Err(err) = io::stdout().flush() {
                    warn!("failed to flush stdout: {err}");
                }
            },
        }
    }

    fn render(&self, item: &ViewItem) {
        match item {
            ViewItem::ClearScreen => {
                if self.clear_screen {
                    print!("{CLEAR_SCREEN}");
                }
            },
            ViewItem::TitleAndRules => title_and_rules(),
            ViewItem::RealmMenu => realm_menu(),
            ViewItem::Scene(id) => {
                let loc = location(*id);
                println!("{}", loc.art.art_style());
                println!("{}", loc.description.description_style());
            },
            ViewItem::ActionMenu(id) => action_menu(*id),
            ViewItem::Riddle { question, options } => {
                println!("\n {}", question.riddle_style());
                for (idx, option) in options.iter().enumerate() {
                    println!("{}", format!("   {}. {option}", idx + 1).riddle_style());
                }
            },
            ViewItem::CorrectAnswer(_) => {
                println!("{}", format!("\n{ICON_CORRECT} Correct Answer {ICON_CORRECT}").success_style());
            },
            ViewItem::RiddleFailed => {
                println!(
                    "{}",
                    format!("\n{ICON_STOP} You failed the riddle and are back at the entrance. {ICON_STOP}")
                        .failure_style()
                );
            },
            ViewItem::AlreadyCollected { location: id, slot } => {
                let text = location(*id)
                    .item(*slot)
                    .map_or("You have already collected the required items.", |item| item.already_collected);
                println!("{}", format!("\n{text}\nChoose another action.").guidance_style());
            },
            ViewItem::NeedMoreItems(id) => {
                let text = fill(location(*id).messages.need_more, normal_block());
                println!("\n{}", text.denied_style());
            },
            ViewItem::AllItemsCollected(id) => {
                let text = textwrap::indent(location(*id).messages.all_collected, "    ");
                println!("\n{}", text.heading_style());
            },
            ViewItem::Victory(id) => {
                let loc = location(*id);
                println!("{}", loc.art.art_style());
                println!("\n{}", loc.messages.victory.heading_style());
                println!("{}", "\nPlease go back to the beginning.".back_option_style());
            },
            ViewItem::CollectedItems(items) => collected_items(items),
            ViewItem::InvalidChoice => {
                println!("\n{}\n", INVALID_CHOICE_ART.failure_style());
            },
            ViewItem::Goodbye => {
                println!("\n\n{}\n\n", GOODBYE_ART.heading_style());
            },
            ViewItem::Error(msg) => {
                println!("{}", fill(msg, normal_block()).error_style());
            },
        }
    }
}

fn title_and_rules() {
    println!("{}", TITLE_ART.title_style());
    println!("\n{}\n", "      How to Play:".heading_style());
    println!("{}", HOW_TO_PLAY.title_style());
    println!("\n{}\n", "      Controls:".heading_style());
    println!("{}", CONTROLS.title_style());
    println!("\n{}\n", READY_PROMPT.heading_style());
}

fn realm_menu() {
    println!("{}\n", "      Begin your adventure! Choose your realm:".realm_heading_style());
    for loc in locations() {
        println!(
            "{}",
            format!("         {}. {}", loc.id.menu_number(), loc.name).realm_menu_style()
        );
    }
    println!("{}", "         0. Exit Game".back_option_style());
}

fn action_menu(id: LocationId) {
    println!("{}", "\nWhat do you want to do next?\n".action_heading_style());
    for (idx, option) in location(id).options.iter().enumerate() {
        println!("{}", format!("  {}. {option}", idx + 1).action_menu_style());
    }
    println!("{}", "  0. Go back to the beginning\n".back_option_style());
}

fn collected_items(items: &[String]) {
    if items.is_empty() {
        println!("{}", "You have not collected any items yet.".back_option_style());
        return;
    }
    println!("{}", "\nYou have collected the following items:".heading_style());
    for item in items {
        let icon = item_icon(item).unwrap_or_default();
        println!("{}", format!("   {item} {icon}").item_style());
    }
}

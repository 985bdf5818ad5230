//! Riddle challenge: show a riddle, read one selection, report whether it was right.

use anyhow::{Context, Result};
use chronicles_data::RiddleDef;
use log::info;

use crate::repl::input::NumberPrompt;
use crate::style::GameStyle;
use crate::view::{View, ViewItem};

/// Present a riddle and read the player's answer.
///
/// Any number is accepted; anything other than the correct option (including
/// out-of-range selections) is a wrong answer.
///
/// # Errors
/// - if the input facility fails or closes while waiting for the answer
pub fn challenge(riddle: &RiddleDef, view: &mut View, input: &mut dyn NumberPrompt) -> Result<bool> {
    view.push(ViewItem::Riddle {
        question: riddle.question,
        options: riddle.options,
    });
    view.flush();

    let prompt = "\nChoose an answer 💬 ".prompt_style().to_string();
    let answer = input.ask_number(&prompt).context("while reading a riddle answer")?;
    let correct = riddle.is_correct(answer);
    info!("riddle answered with {answer}: {}", if correct { "correct" } else { "wrong" });
    Ok(correct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::repl::input::ScriptedInput;
    use chronicles_data::{CASTLE, ISLAND};

    #[test]
    fn correct_selection_succeeds() {
        let riddle = &ISLAND.riddles[2];
        let mut view = View::headless();
        let mut input = ScriptedInput::new([2]);
        assert!(challenge(riddle, &mut view, &mut input).unwrap());
    }

    #[test]
    fn every_other_selection_fails() {
        let riddle = &CASTLE.riddles[1];
        for answer in [0, 1, 2, 4, 99, -3] {
            let mut view = View::headless();
            let mut input = ScriptedInput::new([answer]);
            assert!(!challenge(riddle, &mut view, &mut input).unwrap(), "answer {answer}");
        }
    }

    #[test]
    fn riddle_is_shown_before_reading() {
        let riddle = &CASTLE.riddles[0];
        let mut view = View::headless();
        let mut input = ScriptedInput::new([1]);
        challenge(riddle, &mut view, &mut input).unwrap();
        assert_eq!(
            view.transcript(),
            [ViewItem::Riddle {
                question: riddle.question,
                options: riddle.options,
            }]
        );
    }

    #[test]
    fn closed_input_is_reported() {
        let mut view = View::headless();
        let mut input = ScriptedInput::default();
        let err = challenge(&CASTLE.riddles[0], &mut view, &mut input).unwrap_err();
        assert!(matches!(err.downcast_ref::<GameError>(), Some(GameError::InputClosed)));
    }
}

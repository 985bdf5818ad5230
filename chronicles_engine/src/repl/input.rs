//! Terminal input handling for the game's numbered menus.
//!
//! Every prompt in the game asks for a single integer. [`InputManager`] reads
//! lines through rustyline when attached to a terminal and plain stdin
//! otherwise; [`ScriptedInput`] feeds a fixed list of answers.

use std::collections::VecDeque;
use std::io::{self, IsTerminal, Write};

use log::{debug, info, warn};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::GameError;
use crate::style::GameStyle;

/// Source of numeric menu selections.
pub trait NumberPrompt {
    /// Block until the player supplies an integer.
    ///
    /// # Errors
    /// - `GameError::InputClosed` once no more input can arrive
    /// - `GameError::Input` on terminal failure
    fn ask_number(&mut self, prompt: &str) -> Result<i64, GameError>;
}

/// What came back from one read of the selection prompt.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Parse a line of player input as an integer selection.
pub fn parse_selection(line: &str) -> Option<i64> {
    line.trim().parse().ok()
}

/// Reads menu selections from the player's terminal.
///
/// Line editing comes from `rustyline` when stdin is a TTY. Piped input, or an
/// editor that fails, drops down to reading raw lines from stdin. Nothing is
/// kept between sessions.
pub struct InputManager {
    reader: SelectionReader,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a TTY; reading selections line by line");
            return Self {
                reader: SelectionReader::Piped,
            };
        }
        let reader = DefaultEditor::new().map_or_else(
            |err| {
                warn!("line editor unavailable ({err}); reading selections line by line");
                SelectionReader::Piped
            },
            |editor| {
                info!("reading selections through rustyline");
                SelectionReader::Editor(Box::new(editor))
            },
        );
        Self { reader }
    }

    /// Read one raw line at `prompt`.
    ///
    /// An editor failure is logged and the read is retried once on plain stdin,
    /// which is then used for the rest of the session.
    ///
    /// # Errors
    /// - if stdin itself cannot be read
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        let err = match self.reader.read(prompt) {
            Ok(event) => return Ok(event),
            Err(err) => err,
        };
        if matches!(self.reader, SelectionReader::Piped) {
            return Err(err);
        }
        warn!("line editor failed ({err}); continuing on plain stdin");
        self.reader = SelectionReader::Piped;
        self.reader.read(prompt)
    }
}

impl NumberPrompt for InputManager {
    fn ask_number(&mut self, prompt: &str) -> Result<i64, GameError> {
        read_selection(prompt, |p| self.read_line(p), &mut io::stdout())
    }
}

/// Keep reading lines until one parses as an integer.
///
/// Blank lines and Ctrl-C re-prompt silently; other non-numeric lines write a
/// hint to `hints` first.
///
/// # Errors
/// - `GameError::InputClosed` when the line source reports end of input
/// - `GameError::Input` if reading a line or writing the hint fails
pub fn read_selection(
    prompt: &str,
    mut read_line: impl FnMut(&str) -> io::Result<InputEvent>,
    hints: &mut impl Write,
) -> Result<i64, GameError> {
    loop {
        let line = match read_line(prompt)? {
            InputEvent::Line(line) => line,
            InputEvent::Interrupted => continue,
            InputEvent::Eof => return Err(GameError::InputClosed),
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Some(number) = parse_selection(&line) {
            return Ok(number);
        }
        debug!("rejected non-numeric input {line:?}");
        writeln!(hints, "{}", "Please enter a number.".error_style())?;
    }
}

enum SelectionReader {
    Editor(Box<DefaultEditor>),
    Piped,
}

impl SelectionReader {
    fn read(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            SelectionReader::Editor(editor) => match editor.readline(prompt) {
                Ok(line) => Ok(InputEvent::Line(line)),
                Err(err) => readline_event(err),
            },
            SelectionReader::Piped => read_stdin_line(prompt),
        }
    }
}

fn read_stdin_line(prompt: &str) -> io::Result<InputEvent> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(InputEvent::Eof);
    }
    Ok(InputEvent::Line(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn readline_event(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

/// Pre-recorded selections, answered in order.
///
/// Running out of answers behaves like the terminal closing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<i64>,
}

impl ScriptedInput {
    pub fn new(answers: impl IntoIterator<Item = i64>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// Number of answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl NumberPrompt for ScriptedInput {
    fn ask_number(&mut self, _prompt: &str) -> Result<i64, GameError> {
        self.answers.pop_front().ok_or(GameError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_c_and_ctrl_d_become_events() {
        assert_eq!(readline_event(ReadlineError::Interrupted).unwrap(), InputEvent::Interrupted);
        assert_eq!(readline_event(ReadlineError::Eof).unwrap(), InputEvent::Eof);
    }

    #[test]
    fn editor_io_failures_stay_errors() {
        let err = readline_event(ReadlineError::Io(io::Error::other("tty gone"))).unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
    }

    /// Line source that replays `events`, then reports end of input.
    fn lines(events: Vec<InputEvent>) -> impl FnMut(&str) -> io::Result<InputEvent> {
        let mut events = VecDeque::from(events);
        move |_prompt| Ok(events.pop_front().unwrap_or(InputEvent::Eof))
    }

    fn line(text: &str) -> InputEvent {
        InputEvent::Line(text.to_string())
    }

    #[test]
    fn non_numeric_lines_get_a_hint_and_reprompt() {
        let mut hints = Vec::new();
        let events = vec![line("abc"), line(""), InputEvent::Interrupted, line("  "), line("2")];
        let number = read_selection("?", lines(events), &mut hints).unwrap();
        assert_eq!(number, 2);

        let hints = String::from_utf8(hints).unwrap();
        assert_eq!(hints.matches("Please enter a number.").count(), 1);
    }

    #[test]
    fn blank_lines_and_ctrl_c_reprompt_silently() {
        let mut hints = Vec::new();
        let events = vec![InputEvent::Interrupted, line(""), line("\t"), line("0")];
        assert_eq!(read_selection("?", lines(events), &mut hints).unwrap(), 0);
        assert!(hints.is_empty());
    }

    #[test]
    fn end_of_input_closes_the_prompt() {
        let mut hints = Vec::new();
        let result = read_selection("?", lines(vec![line("nope"), InputEvent::Eof]), &mut hints);
        assert!(matches!(result, Err(GameError::InputClosed)));
    }

    #[test]
    fn line_source_failures_are_input_errors() {
        let mut hints = Vec::new();
        let result = read_selection("?", |_| Err(io::Error::other("tty gone")), &mut hints);
        assert!(matches!(result, Err(GameError::Input(_))));
    }

    #[test]
    fn each_read_sees_the_prompt() {
        let mut prompts = Vec::new();
        let mut answers = VecDeque::from(vec![line("x"), line("4")]);
        let mut hints = Vec::new();
        let number = read_selection(
            "Choose an action",
            |prompt| {
                prompts.push(prompt.to_string());
                Ok(answers.pop_front().unwrap_or(InputEvent::Eof))
            },
            &mut hints,
        )
        .unwrap();
        assert_eq!(number, 4);
        assert_eq!(prompts, vec!["Choose an action", "Choose an action"]);
    }

    #[test]
    fn parses_padded_and_signed_numbers() {
        assert_eq!(parse_selection(" 3 "), Some(3));
        assert_eq!(parse_selection("-1"), Some(-1));
        assert_eq!(parse_selection("0\r"), Some(0));
    }

    #[test]
    fn rejects_non_numeric_lines() {
        assert_eq!(parse_selection("castle"), None);
        assert_eq!(parse_selection("2.5"), None);
        assert_eq!(parse_selection(""), None);
    }

    #[test]
    fn scripted_input_answers_in_order_then_closes() {
        let mut input = ScriptedInput::new([2, 0]);
        assert_eq!(input.ask_number("?").unwrap(), 2);
        assert_eq!(input.remaining(), 1);
        assert_eq!(input.ask_number("?").unwrap(), 0);
        assert!(matches!(input.ask_number("?"), Err(GameError::InputClosed)));
    }
}

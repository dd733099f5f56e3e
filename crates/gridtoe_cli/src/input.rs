//! Line-oriented terminal input with validated results.
//!
//! Every prompt loops until the player types something acceptable, so bad
//! input never grows the stack.

use crate::config::Mode;
use gridtoe::Board;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Error reading from or writing to the terminal.
#[derive(Debug, derive_more::Display)]
pub enum InputError {
    /// Input ended before a valid answer was given.
    #[display("Input closed before a valid answer was given")]
    Closed,

    /// Underlying I/O failure.
    #[display("Terminal I/O failed: {}", _0)]
    Io(std::io::Error),
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::Closed => None,
            InputError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        InputError::Io(err)
    }
}

/// A place to print messages and read answers.
pub trait Console {
    /// Prints a line of text.
    fn say(&mut self, text: &str) -> Result<(), InputError>;

    /// Prints text without a trailing newline.
    fn show(&mut self, text: &str) -> Result<(), InputError>;

    /// Reads one line, without its line ending.
    fn read_line(&mut self) -> Result<String, InputError>;
}

/// Console over any reader and writer (stdin/stdout in the binary).
#[derive(Debug)]
pub struct Terminal<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a console over the given streams.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the writer, for inspecting captured output.
    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, text: &str) -> Result<(), InputError> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    fn show(&mut self, text: &str) -> Result<(), InputError> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, InputError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Closed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

// ─────────────────────────────────────────────────────────────
//  Parsing
// ─────────────────────────────────────────────────────────────

/// Parses an optionally `+`-signed run of decimal digits greater than zero.
pub fn parse_positive(input: &str) -> Option<usize> {
    let input = input.trim();
    let digits = input.strip_prefix('+').unwrap_or(input);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok().filter(|&n| n > 0)
}

/// Parses a coordinate component in `[1, size]`.
pub fn parse_coordinate(input: &str, size: usize) -> Option<usize> {
    parse_positive(input).filter(|&n| n <= size)
}

/// Parses an opponent choice: `p`, `c`, `player` or `computer`.
pub fn parse_mode(input: &str) -> Option<Mode> {
    match input.trim().to_lowercase().as_str() {
        "p" | "player" => Some(Mode::Pvp),
        "c" | "computer" => Some(Mode::Pvc),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────
//  Prompts
// ─────────────────────────────────────────────────────────────

/// Prints `prompt`, then reads lines until `parse` accepts one.
///
/// `retry` is printed after every rejected line.
pub fn ask<T>(
    console: &mut dyn Console,
    prompt: &str,
    retry: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, InputError> {
    console.say(prompt)?;
    loop {
        let line = console.read_line()?;
        match parse(&line) {
            Some(value) => return Ok(value),
            None => {
                debug!(input = %line, "Rejected input");
                console.say(retry)?;
            }
        }
    }
}

const SIZE_QUESTION: &str = "What size game do you want to play? \
    (Please pick a positive integer - 3 will give you the traditional 3x3 game.)";

/// Asks for the board size.
///
/// Unlike the other prompts, the question is repeated after every rejected
/// line. Sizes above [`Board::MAX_SIZE`] are refused.
#[instrument(skip(console))]
pub fn ask_size(console: &mut dyn Console) -> Result<usize, InputError> {
    loop {
        console.say(SIZE_QUESTION)?;
        let line = console.read_line()?;
        match parse_positive(&line) {
            Some(size) if size <= Board::MAX_SIZE => return Ok(size),
            Some(size) => {
                debug!(size, "Board size too large");
                console.say(&format!(
                    "That's too big! The largest board is {0}x{0}. Try again.",
                    Board::MAX_SIZE
                ))?;
            }
            None => {
                debug!(input = %line, "Rejected board size");
                console.say("That's not a positive integer! Try again.")?;
            }
        }
    }
}

/// Asks whether to play another player or the computer.
#[instrument(skip(console))]
pub fn ask_mode(console: &mut dyn Console) -> Result<Mode, InputError> {
    ask(
        console,
        "Who would you like to play against? ([P]layer or [C]omputer)",
        "That's not a valid input. Please select either 'p' or 'c'.",
        parse_mode,
    )
}

/// Asks for one coordinate component (`axis` is "x" or "y").
#[instrument(skip(console))]
pub fn ask_coordinate(
    console: &mut dyn Console,
    axis: &str,
    size: usize,
) -> Result<usize, InputError> {
    ask(
        console,
        &format!("Please input {} coordinates: ", axis),
        &format!("Incorrect input! Please select an integer between 1 and {}.", size),
        |line| parse_coordinate(line, size),
    )
}

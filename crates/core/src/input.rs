//! Line input with cancellation reported as a value.
//!
//! A user cancel (Ctrl+C) is an expected outcome of reading a line, so it is
//! returned as [`LineInput::Interrupted`] instead of an error.

use std::io::{stderr, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, queue};
use log::debug;

use crate::error::{Error, Result};

/// What a single line read produced.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LineInput {
    /// A full line, without its terminator.
    Line(String),
    /// The user cancelled the read.
    Interrupted,
}

/// Something that can block until the user enters one line.
pub trait LineSource {
    /// Reads one line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputClosed`] at end of input, or an I/O error.
    fn read_line(&mut self) -> Result<LineInput>;
}

/// Reads lines from any buffered reader, such as piped stdin.
///
/// A buffered reader has no way to signal a cancel, so this never returns
/// [`LineInput::Interrupted`].
pub struct BufLineSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> BufLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufLineSource<R> {
    fn read_line(&mut self) -> Result<LineInput> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }

        let trimmed_length = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_length);
        Ok(LineInput::Line(line))
    }
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
    }
}

/// What the terminal reader should do after one key event.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum KeyStep {
    /// Keep reading, echoing the edit.
    Edit(Echo),
    /// The read is over.
    Finished(LineInput),
    /// The user closed the input.
    Closed,
}

/// The echo for an edit of the line being typed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Echo {
    Nothing,
    Char(char),
    Erase,
}

/// Applies one key event to the line being typed.
///
/// Only key presses count. Ctrl+C interrupts the read, Ctrl+D closes the
/// input when the line is empty, and Enter hands over the typed line.
pub fn apply_key(key_event: &KeyEvent, buffer: &mut String) -> KeyStep {
    if key_event.kind != KeyEventKind::Press {
        return KeyStep::Edit(Echo::Nothing);
    }

    let control = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('c') if control => KeyStep::Finished(LineInput::Interrupted),
        KeyCode::Char('d') if control && buffer.is_empty() => KeyStep::Closed,
        KeyCode::Enter => KeyStep::Finished(LineInput::Line(std::mem::take(buffer))),
        KeyCode::Backspace => match buffer.pop() {
            Some(_) => KeyStep::Edit(Echo::Erase),
            None => KeyStep::Edit(Echo::Nothing),
        },
        KeyCode::Char(c) if !control => {
            buffer.push(c);
            KeyStep::Edit(Echo::Char(c))
        }
        _ => KeyStep::Edit(Echo::Nothing),
    }
}

/// Reads a line from the terminal in raw mode, echoing to stderr as the user
/// types so that stdout only carries results.
///
/// Ctrl+C cancels the read; Ctrl+D on an empty line closes the input.
#[derive(Default)]
pub struct TerminalLineSource;

impl TerminalLineSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineSource for TerminalLineSource {
    fn read_line(&mut self) -> Result<LineInput> {
        let mut echo = stderr();
        let mut buffer = String::new();

        enable_raw_mode()?;
        let _raw_mode_guard = RawModeGuard; // Raw mode is disabled when this goes out of scope

        loop {
            let Event::Key(key_event) = event::read()? else {
                continue;
            };

            match apply_key(&key_event, &mut buffer) {
                KeyStep::Edit(Echo::Nothing) => continue,
                KeyStep::Edit(Echo::Char(c)) => queue!(echo, Print(c))?,
                KeyStep::Edit(Echo::Erase) => {
                    queue!(echo, cursor::MoveLeft(1), Print(' '), cursor::MoveLeft(1))?;
                }
                KeyStep::Finished(input) => {
                    if input == LineInput::Interrupted {
                        debug!("Line read interrupted by user");
                    }
                    queue!(echo, Print("\r\n"))?;
                    echo.flush()?;
                    return Ok(input);
                }
                KeyStep::Closed => {
                    queue!(echo, Print("\r\n"))?;
                    echo.flush()?;
                    return Err(Error::InputClosed);
                }
            }

            echo.flush()?;
        }
    }
}

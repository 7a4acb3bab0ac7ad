//! Interactive console prompts: the numbered menu, free-text entry, the
//! loading animation and the credits block.

use std::io::{stderr, stdin, Stderr, Stdin, StdinLock, Write};
use std::thread;
use std::time::Duration;

use crossterm::{cursor, Command};
use log::{debug, info};

use crate::config::{DEFAULT_JUMP_LINE, DEFAULT_LOADING_HEADER, DEFAULT_LOADING_STEP};
use crate::credits::{print_credence, CredenceOptions, Credits};
use crate::error::Result;
use crate::input::{BufLineSource, LineInput, LineSource, TerminalLineSource};
use crate::printer::{Paint, PrintOptions, Printer};
use crate::prompt::{
    choose, title_fragments, Attempt, Menu, Outcome, PickOptions, Selection, CANCELLED_MESSAGE,
    INVALID_OPTION_MESSAGE,
};
use crate::style::{Color, StyleSet};

const LOADING_FRAMES: usize = 100;
const LOADING_BAR_WIDTH: usize = 25;

/// Settings for [`Console::loading`].
#[derive(Clone, PartialEq, Debug)]
pub struct LoadingOptions {
    /// Pause before each frame.
    pub step: Duration,
    /// Draw a bar instead of a percentage.
    pub bar: bool,
    pub header: String,
    /// Foreground code for the header.
    pub foreground: String,
}

impl Default for LoadingOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_LOADING_STEP,
            bar: false,
            header: DEFAULT_LOADING_HEADER.to_string(),
            foreground: String::new(),
        }
    }
}

/// Settings for [`Console::entry`].
#[derive(Clone, PartialEq, Debug)]
pub struct EntryOptions {
    pub paint: Paint,
    /// Written between the question and the answer.
    pub jump_line: String,
}

impl Default for EntryOptions {
    fn default() -> Self {
        Self {
            paint: Paint::default(),
            jump_line: DEFAULT_JUMP_LINE.to_string(),
        }
    }
}

/// A printer paired with a line source.
pub struct Console<W: Write, L: LineSource> {
    printer: Printer<W>,
    input: L,
}

impl Console<Stderr, TerminalLineSource> {
    /// Prompts on stderr, reading answers from the terminal in raw mode.
    ///
    /// Stdout stays free for results, so `$(...)` captures only the answer.
    #[must_use]
    pub fn terminal() -> Self {
        Self::new(Printer::new(stderr()), TerminalLineSource::new())
    }
}

impl Console<Stderr, BufLineSource<StdinLock<'static>>> {
    /// Prompts on stderr, reading answers line by line from standard input.
    #[must_use]
    pub fn piped() -> Self {
        let stdin: Stdin = stdin();
        Self::new(Printer::new(stderr()), BufLineSource::new(stdin.lock()))
    }
}

impl<W: Write, L: LineSource> Console<W, L> {
    pub fn new(printer: Printer<W>, input: L) -> Self {
        Self { printer, input }
    }

    pub fn printer(&mut self) -> &mut Printer<W> {
        &mut self.printer
    }

    pub fn into_printer(self) -> Printer<W> {
        self.printer
    }

    /// Renders the menu once, reads one answer and reports what happened.
    ///
    /// An invalid answer and a cancel are reported as values, each after its
    /// message has been printed.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is denied, the input is closed, or an
    /// I/O operation fails.
    pub fn pick_once(&mut self, menu: &Menu, options: &PickOptions) -> Result<Attempt> {
        let styles = StyleSet::for_menu(self.printer.platform(), options.colorful);

        self.render_menu(menu, options, &styles)?;

        let answer = match self.input.read_line()? {
            LineInput::Line(answer) => answer,
            LineInput::Interrupted => {
                self.print_message(CANCELLED_MESSAGE, styles.warning(), &styles)?;
                return Ok(Attempt::Cancelled);
            }
        };

        match choose(menu, options, &answer) {
            Ok(selection) => Ok(Attempt::Selected(selection)),
            Err(invalid) => {
                self.print_message(INVALID_OPTION_MESSAGE, styles.error(), &styles)?;
                Ok(Attempt::Invalid(invalid))
            }
        }
    }

    /// Shows the menu until the user picks an option or cancels.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is denied, the input is closed, or an
    /// I/O operation fails.
    pub fn pick(&mut self, menu: &Menu, options: &PickOptions) -> Result<Outcome<Selection>> {
        loop {
            match self.pick_once(menu, options)? {
                Attempt::Selected(selection) => {
                    info!("Selected `{}` from menu `{}`", selection.label(), menu.title());
                    return Ok(Outcome::Answered(selection));
                }
                Attempt::Cancelled => {
                    info!("Menu `{}` cancelled by user", menu.title());
                    return Ok(Outcome::Cancelled);
                }
                Attempt::Invalid(invalid) => {
                    debug!("Invalid answer ({invalid}), showing menu again");
                }
            }
        }
    }

    /// Asks a free-text question and returns the answer as typed.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is denied, the input is closed, or an
    /// I/O operation fails.
    pub fn entry(&mut self, text: &str, options: &EntryOptions) -> Result<Outcome<String>> {
        let paint = &options.paint;
        self.printer.write_str(&format!(
            "{}{text}{}{}",
            paint.prefix(),
            options.jump_line,
            paint.reset
        ))?;

        match self.input.read_line()? {
            LineInput::Line(answer) => Ok(Outcome::Answered(answer)),
            LineInput::Interrupted => {
                let styles = StyleSet::new(self.printer.platform());
                self.printer.write_str(&format!(
                    "\n{} Aborted by user.{}\n",
                    styles.warning(),
                    styles.reset()
                ))?;
                Ok(Outcome::Cancelled)
            }
        }
    }

    /// Prints the header, then animates a percentage or bar from 1 to 100.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is denied or writing fails.
    pub fn loading(&mut self, options: &LoadingOptions) -> Result<()> {
        let styles = StyleSet::new(self.printer.platform());
        let paint = Paint::new(&styles).foreground(options.foreground.clone());
        self.printer
            .print(&[options.header.as_str()], &PrintOptions::painted(paint))?;

        for frame in 1..=LOADING_FRAMES {
            thread::sleep(options.step);

            let mut line = String::new();
            cursor::MoveToColumn(0).write_ansi(&mut line)?;
            if options.bar {
                line.push_str(&loading_bar(frame));
            } else {
                line.push_str(&format!("{frame}%"));
            }
            self.printer.write_str(&line)?;
        }

        self.printer.write_str("\n")
    }

    /// Prints the credits block through this console's printer.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is denied or writing fails.
    pub fn credence(&mut self, credits: &Credits, options: &CredenceOptions) -> Result<()> {
        print_credence(&mut self.printer, credits, options)
    }

    fn render_menu(
        &mut self,
        menu: &Menu,
        options: &PickOptions,
        styles: &StyleSet,
    ) -> Result<()> {
        let title_paint = Paint::new(styles).foreground(styles.question());
        self.printer.print(
            &title_fragments(menu, options),
            &PrintOptions::painted(title_paint),
        )?;

        for (position, option) in menu.options().iter().enumerate() {
            self.printer.write_str(&format!(
                "{}[{}] {}{}{}\n",
                styles.foreground(Color::BrightGreen),
                position + 1,
                styles.foreground(Color::BrightMagenta),
                option,
                styles.reset()
            ))?;
        }

        self.printer.write_str(&format!(
            "{}{} {}",
            styles.foreground(Color::BrightCyan),
            options.answer,
            styles.reset()
        ))
    }

    fn print_message(&mut self, message: &str, icon: String, styles: &StyleSet) -> Result<()> {
        let paint = Paint::new(styles).foreground(icon);
        self.printer.print(&[message], &PrintOptions::painted(paint))?;
        Ok(())
    }
}

fn loading_bar(frame: usize) -> String {
    let filled = frame / 4;
    format!(
        "[{}{}]",
        "#".repeat(filled),
        " ".repeat(LOADING_BAR_WIDTH - filled)
    )
}

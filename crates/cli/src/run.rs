//! Executes a parsed command.
//!
//! Prompts, typed echo and the loading animation go through the console,
//! which renders on stderr. Answers and printed text go to a separate results
//! printer on stdout, so `choice=$(tp pick ...)` captures only the choice.

use std::io::{stdin, stdout, Write};
use std::time::{Duration, SystemTime};

use crossterm::tty::IsTty;
use log::{debug, info};
use termpick_core::banner::billboard;
use termpick_core::config::{
    get_file_path, DEFAULT_BANNER_WIDTH, DEFAULT_CREDENCE_COLUMN, DEFAULT_JUMP_LINE,
    DEFAULT_LOADING_HEADER, DEFAULT_LOADING_STEP,
};
use termpick_core::console::{Console, EntryOptions, LoadingOptions};
use termpick_core::credits::{get_credits, print_credence, CredenceOptions};
use termpick_core::error::Result;
use termpick_core::input::LineSource;
use termpick_core::printer::{Paint, PrintOptions, Printer};
use termpick_core::prompt::Outcome;
use termpick_core::style::{Layer, StyleSet};

use crate::cli_args::{
    Args, BillboardArgs, Command, CredenceArgs, EntryArgs, LoadingArgs, PickArgs, PrintArgs,
};

/// Runs the command on the terminal, reading answers in raw mode when stdin
/// is a terminal and line by line otherwise.
///
/// # Errors
///
/// Returns any error raised while resolving or running the command.
pub fn execute(args: &Args) -> Result<()> {
    let mut results = Printer::new(stdout());

    if stdin().is_tty() {
        debug!("Reading answers from the terminal");
        run(&args.command, &mut Console::terminal(), &mut results)
    } else {
        debug!("Reading answers from piped standard input");
        run(&args.command, &mut Console::piped(), &mut results)
    }
}

/// Runs `command`, prompting through `console` and writing answers and
/// printed text to `results`.
///
/// # Errors
///
/// Returns any error raised while resolving or running the command.
pub fn run<W: Write, L: LineSource, O: Write>(
    command: &Command,
    console: &mut Console<W, L>,
    results: &mut Printer<O>,
) -> Result<()> {
    match command {
        Command::Pick(pick_args) => pick(pick_args, console, results),
        Command::Entry(entry_args) => entry(entry_args, console, results),
        Command::Print(print_args) => print(print_args, results),
        Command::Loading(loading_args) => loading(loading_args, console),
        Command::Credence(credence_args) => credence(credence_args, results),
        Command::Billboard(billboard_args) => banner(billboard_args, results),
    }
}

fn pick<W: Write, L: LineSource, O: Write>(
    args: &PickArgs,
    console: &mut Console<W, L>,
    results: &mut Printer<O>,
) -> Result<()> {
    let (menu, options) = args.resolve()?;

    match console.pick(&menu, &options)? {
        Outcome::Answered(selection) => {
            results.print(&[selection], &PrintOptions::default())?;
        }
        Outcome::Cancelled => info!("Nothing selected"),
    }

    Ok(())
}

fn entry<W: Write, L: LineSource, O: Write>(
    args: &EntryArgs,
    console: &mut Console<W, L>,
    results: &mut Printer<O>,
) -> Result<()> {
    let styles = StyleSet::new(console.printer().platform());
    let options = EntryOptions {
        paint: args.style.paint(&styles),
        jump_line: args
            .jump_line
            .clone()
            .unwrap_or_else(|| DEFAULT_JUMP_LINE.to_string()),
    };

    if let Outcome::Answered(answer) = console.entry(&args.text, &options)? {
        results.print(&[answer], &PrintOptions::default())?;
    }

    Ok(())
}

fn print<O: Write>(args: &PrintArgs, results: &mut Printer<O>) -> Result<()> {
    let styles = StyleSet::new(results.platform());
    let options = PrintOptions {
        paint: args.style.paint(&styles),
        sep: args.sep.clone(),
        end: args.end.clone().unwrap_or_else(|| "\n".to_string()),
    };

    results.print(&args.fragments, &options)?;
    Ok(())
}

fn loading<W: Write, L: LineSource>(args: &LoadingArgs, console: &mut Console<W, L>) -> Result<()> {
    let styles = StyleSet::new(console.printer().platform());
    let options = LoadingOptions {
        step: args
            .step_ms
            .map_or(DEFAULT_LOADING_STEP, Duration::from_millis),
        bar: args.bar,
        header: args
            .header
            .clone()
            .unwrap_or_else(|| DEFAULT_LOADING_HEADER.to_string()),
        foreground: args
            .foreground
            .map(|key| styles.resolve(Layer::Foreground, key))
            .unwrap_or_default(),
    };

    console.loading(&options)
}

fn credence<O: Write>(args: &CredenceArgs, results: &mut Printer<O>) -> Result<()> {
    let credits = get_credits(&get_file_path(&args.credits_file))?;

    let styles = StyleSet::new(results.platform());
    let options = CredenceOptions {
        paint: Paint::new(&styles).foreground(
            args.foreground
                .map(|key| styles.resolve(Layer::Foreground, key))
                .unwrap_or_default(),
        ),
        column: args.column.unwrap_or(DEFAULT_CREDENCE_COLUMN),
        year: args.year.unwrap_or_else(current_year),
    };

    print_credence(results, &credits, &options)
}

fn banner<O: Write>(args: &BillboardArgs, results: &mut Printer<O>) -> Result<()> {
    let text = billboard(
        &args.text,
        args.justify,
        args.width.unwrap_or(DEFAULT_BANNER_WIDTH),
    )?;

    let styles = StyleSet::new(results.platform());
    let options = PrintOptions {
        end: String::new(),
        ..PrintOptions::painted(args.style.paint(&styles))
    };

    results.print(&[text], &options)?;
    Ok(())
}

/// The current UTC year, read from an RFC 3339 timestamp such as
/// `2024-05-01T12:00:00Z`.
fn current_year() -> i32 {
    let timestamp = humantime::format_rfc3339_seconds(SystemTime::now()).to_string();
    timestamp
        .get(..4)
        .and_then(|year| year.parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_year() {
        assert!(current_year() >= 2024);
    }
}

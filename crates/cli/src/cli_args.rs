//! Command-line argument parsing.
//!
//! This module defines the command-line interface of the `tp` binary using
//! the `clap` crate, and turns the parsed arguments into the menus and paints
//! the core library works with.

use clap::{Parser, Subcommand};
use log::debug;
use termpick_core::banner::Justify;
use termpick_core::config::get_file_path;
use termpick_core::error::{Error, Result};
use termpick_core::menu_file::get_menu_definition;
use termpick_core::printer::Paint;
use termpick_core::prompt::{Menu, PickOptions};
use termpick_core::style::{Layer, StyleKey, StyleSet};

/// Command-line arguments for the `tp` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use termpick_cli::cli_args::{Args, Command};
///
/// let args = Args::parse_from(["tp", "pick", "-t", "Pick a letter", "A", "B"]);
/// assert!(matches!(args.command, Command::Pick(_)));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "tp", version, about = "Numbered menus, questions and styled text for the terminal")]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Log debug messages to stderr. `RUST_LOG` takes precedence.
    #[arg(long, short = 'v', global = true, action)]
    pub verbose: bool,

    /// Append log records to this file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a numbered menu and print the chosen option.
    Pick(PickArgs),
    /// Ask a question and print the answer.
    Entry(EntryArgs),
    /// Print styled text.
    Print(PrintArgs),
    /// Show a loading animation.
    Loading(LoadingArgs),
    /// Print project credits from a YAML credits file.
    Credence(CredenceArgs),
    /// Print text as a large FIGlet banner.
    Billboard(BillboardArgs),
}

/// Style keys shared by the commands that print styled text.
#[derive(clap::Args, Debug, Default)]
pub struct StyleArgs {
    /// Foreground color or icon, e.g. `red`, `bright_cyan`, `warning`.
    #[arg(long)]
    pub foreground: Option<StyleKey>,

    /// Background color or icon, e.g. `white`, `bright_blue`.
    #[arg(long)]
    pub background: Option<StyleKey>,

    /// Text effect, e.g. `bold`, `underline`, `reverse`.
    #[arg(long)]
    pub effect: Option<StyleKey>,
}

impl StyleArgs {
    /// Resolves the requested keys against `styles`.
    #[must_use]
    pub fn paint(&self, styles: &StyleSet) -> Paint {
        let resolve = |layer: Layer, key: Option<StyleKey>| {
            key.map(|key| styles.resolve(layer, key)).unwrap_or_default()
        };

        Paint::new(styles)
            .foreground(resolve(Layer::Foreground, self.foreground))
            .background(resolve(Layer::Background, self.background))
            .effect(resolve(Layer::Foreground, self.effect))
    }
}

#[derive(clap::Args, Debug)]
pub struct PickArgs {
    /// Path to a YAML menu file. Other arguments override its values.
    #[arg(long, short = 'm')]
    pub menu_file: Option<String>,

    /// The menu title or question.
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// Text shown before the answer is typed. Defaults to `Answer:`.
    #[arg(long, short = 'a')]
    pub answer: Option<String>,

    /// Print the 0-based index and the label, separated by a tab.
    #[arg(long, short = 'i', overrides_with = "no_index")]
    pub index: bool,

    /// Print only the label, even if the menu file asks for the index.
    #[arg(long, overrides_with = "index")]
    pub no_index: bool,

    /// Color the menu.
    #[arg(long, short = 'c', overrides_with = "no_colorful")]
    pub colorful: bool,

    /// Do not color the menu, even if the menu file asks for it.
    #[arg(long, overrides_with = "colorful")]
    pub no_colorful: bool,

    /// Lower-case the printed label.
    #[arg(long, short = 'l', overrides_with = "no_lowercase")]
    pub lowercase: bool,

    /// Keep the label's case, even if the menu file asks to lower-case it.
    #[arg(long, overrides_with = "lowercase")]
    pub no_lowercase: bool,

    /// Show `(Ctrl+C to Cancel)` after the title.
    #[arg(long, short = 'x', overrides_with = "no_cancel_hint")]
    pub cancel_hint: bool,

    /// Hide the cancel hint, even if the menu file shows it.
    #[arg(long, overrides_with = "cancel_hint")]
    pub no_cancel_hint: bool,

    /// The menu options, in order.
    pub options: Vec<String>,
}

impl PickArgs {
    /// Builds the validated menu and its settings, reading the menu file if
    /// one was given.
    ///
    /// # Errors
    ///
    /// Returns an error if the menu file cannot be loaded, if no title was
    /// given, or if the menu fails validation.
    pub fn resolve(&self) -> Result<(Menu, PickOptions)> {
        let (title, options, mut pick_options) = match &self.menu_file {
            Some(menu_file) => {
                let menu_path = get_file_path(menu_file);
                debug!("Menu path: `{menu_path}`");

                let definition = get_menu_definition(&menu_path)?;
                let pick_options = definition.pick_options();
                let title = self.title.clone().unwrap_or(definition.title);
                let options = if self.options.is_empty() {
                    definition.options
                } else {
                    self.options.clone()
                };
                (title, options, pick_options)
            }
            None => {
                let title = self.title.clone().ok_or(Error::MissingTitle)?;
                (title, self.options.clone(), PickOptions::default())
            }
        };

        if let Some(answer) = &self.answer {
            pick_options.answer.clone_from(answer);
        }
        apply_switch(&mut pick_options.index, self.index, self.no_index);
        apply_switch(&mut pick_options.colorful, self.colorful, self.no_colorful);
        apply_switch(&mut pick_options.lowercase, self.lowercase, self.no_lowercase);
        apply_switch(
            &mut pick_options.show_cancel_hint,
            self.cancel_hint,
            self.no_cancel_hint,
        );

        Ok((Menu::new(title, options)?, pick_options))
    }
}

/// Overrides a file setting when its `--flag` or `--no-flag` was given.
fn apply_switch(setting: &mut bool, on: bool, off: bool) {
    if on {
        *setting = true;
    } else if off {
        *setting = false;
    }
}

#[derive(clap::Args, Debug)]
pub struct EntryArgs {
    /// The question to ask.
    pub text: String,

    /// Written between the question and the answer. Defaults to a new line
    /// followed by `> `.
    #[arg(long, short = 'j')]
    pub jump_line: Option<String>,

    #[command(flatten)]
    pub style: StyleArgs,
}

#[derive(clap::Args, Debug)]
pub struct PrintArgs {
    /// Text fragments, joined by the separator.
    #[arg(required = true)]
    pub fragments: Vec<String>,

    /// Placed between fragments.
    #[arg(long, default_value = " ")]
    pub sep: String,

    /// Placed after the text instead of a new line.
    #[arg(long)]
    pub end: Option<String>,

    #[command(flatten)]
    pub style: StyleArgs,
}

#[derive(clap::Args, Debug)]
pub struct LoadingArgs {
    /// Draw a bar instead of a percentage.
    #[arg(long, short = 'b', action)]
    pub bar: bool,

    /// Header printed above the animation. Defaults to `[Loading]`.
    #[arg(long)]
    pub header: Option<String>,

    /// Milliseconds between frames. Defaults to 30.
    #[arg(long)]
    pub step_ms: Option<u64>,

    /// Foreground color or icon for the header.
    #[arg(long)]
    pub foreground: Option<StyleKey>,
}

#[derive(clap::Args, Debug)]
pub struct CredenceArgs {
    /// Path to a YAML credits file.
    pub credits_file: String,

    /// Width the credits are centred in. Defaults to 80.
    #[arg(long)]
    pub column: Option<usize>,

    /// Year shown in the footer. Defaults to the current year.
    #[arg(long)]
    pub year: Option<i32>,

    /// Foreground color or icon for every line.
    #[arg(long)]
    pub foreground: Option<StyleKey>,
}

#[derive(clap::Args, Debug)]
pub struct BillboardArgs {
    /// The banner text.
    pub text: String,

    /// Banner position: auto, left, center or right.
    #[arg(long, default_value_t = Justify::Auto)]
    pub justify: Justify,

    /// Width used to center or right-justify the banner. Defaults to 80.
    #[arg(long)]
    pub width: Option<usize>,

    #[command(flatten)]
    pub style: StyleArgs,
}

//! Termpick CLI Library
//!
//! This crate provides the `tp` command-line front end for termpick. It parses
//! arguments, loads menu files, sets up logging, and runs the prompts from
//! `termpick-core` against the terminal.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and menu resolution
//! - [`run`]: Executes a parsed command against a console
//! - [`logging`]: Log record format and logger setup, to stderr or a log file
//!
//! # Examples
//!
//! ```bash
//! # Numbered menu, prints the chosen label
//! tp pick -t "What is your favorite programming language?" C Rust Python
//!
//! # Menu from a YAML file, printing index and label, without the file's colors
//! tp pick -m ~/menus/languages.yml --no-colorful --index
//!
//! # The menu is drawn on stderr, so only the choice is captured
//! choice=$(tp pick -t "Continue?" Yes No)
//!
//! # Free-text question
//! tp entry "What's your name?" --foreground question
//!
//! # Styled text
//! tp print "Not found" --foreground error --effect bold
//!
//! # Loading bar
//! tp loading --bar
//!
//! # Credits block and banner
//! tp credence ~/credits.yml --foreground cyan
//! tp billboard "Hello!" --justify center
//! ```

pub mod cli_args;
pub mod logging;
pub mod run;

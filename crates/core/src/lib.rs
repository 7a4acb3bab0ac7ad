//! Termpick Core Library
//!
//! This crate provides the building blocks of termpick, a small toolkit for
//! interactive terminal prompts: ANSI styles, a styled printer, and a numbered
//! selection menu that the user answers by typing an option number.
//!
//! # Key Features
//!
//! - **Style Resolution**: Immutable [`style::StyleSet`] values that resolve colors,
//!   effects and icons to escape codes, or to nothing on Windows-family platforms
//! - **Styled Printing**: Join fragments and wrap them in escape codes
//! - **Selection Menus**: Validated menus with retry on invalid answers and
//!   cancellation reported as a value
//! - **Entry and Loading**: Free-text questions and a simple loading animation
//! - **Credits and Banners**: A centred credits block and FIGlet banners
//! - **Menu Files**: Load menus from YAML
//!
//! # Examples
//!
//! Running a menu against scripted input:
//!
//! ```
//! use std::io::Cursor;
//! use termpick_core::console::Console;
//! use termpick_core::input::BufLineSource;
//! use termpick_core::platform::Platform;
//! use termpick_core::printer::Printer;
//! use termpick_core::prompt::{Menu, Outcome, PickOptions, Selection};
//!
//! let menu = Menu::new("Pick a letter", ["A", "B", "C"])?;
//! let printer = Printer::for_platform(Vec::new(), Platform::Unix, vec![]);
//! let mut console = Console::new(printer, BufLineSource::new(Cursor::new("2\n")));
//!
//! let outcome = console.pick(&menu, &PickOptions::default())?;
//! assert_eq!(outcome, Outcome::Answered(Selection::Label("B".to_string())));
//! # Ok::<(), termpick_core::error::Error>(())
//! ```

pub mod banner;
pub mod config;
pub mod console;
pub mod credits;
pub mod error;
pub mod input;
pub mod menu_file;
pub mod platform;
pub mod printer;
pub mod prompt;
pub mod style;

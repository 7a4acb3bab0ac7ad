//! Menu definitions and the rules of the numbered selection prompt.
//!
//! This module holds the validated [`Menu`], the per-invocation
//! [`PickOptions`], and the pure interpretation of an answer. The interactive
//! loop that renders the menu and reads answers lives in
//! [`crate::console::Console`].

use std::fmt::{Display, Formatter};

use crate::config::{CANCEL_HINT, DEFAULT_ANSWER_PROMPT};
use crate::error::{Error, Result};

/// Printed, error-styled, when an answer does not name an option.
pub const INVALID_OPTION_MESSAGE: &str = "Option invalid!";

/// Printed, warning-styled, when the user cancels the menu.
pub const CANCELLED_MESSAGE: &str = "Canceled by user.";

/// A title and its non-empty list of options.
///
/// Both the title and every option are guaranteed non-empty.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Menu {
    title: String,
    options: Vec<String>,
}

impl Menu {
    /// Validates and builds a menu.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTitle`], [`Error::EmptyOptions`] or
    /// [`Error::EmptyOption`] (with the 1-based position of the offending
    /// option).
    pub fn new<S: Into<String>>(
        title: impl Into<String>,
        options: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let title = title.into();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        if options.is_empty() {
            return Err(Error::EmptyOptions);
        }

        if let Some(position) = options.iter().position(String::is_empty) {
            return Err(Error::EmptyOption {
                position: position + 1,
            });
        }

        Ok(Self { title, options })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false: a menu cannot be built without options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// How a menu is shown and what a selection returns.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PickOptions {
    /// Text shown before the answer is typed.
    pub answer: String,
    /// Return the 0-based index along with the label.
    pub index: bool,
    /// Color the menu.
    pub colorful: bool,
    /// Lower-case the returned label.
    pub lowercase: bool,
    /// Append the cancel hint to the title.
    pub show_cancel_hint: bool,
}

impl Default for PickOptions {
    fn default() -> Self {
        Self {
            answer: DEFAULT_ANSWER_PROMPT.to_string(),
            index: false,
            colorful: false,
            lowercase: false,
            show_cancel_hint: false,
        }
    }
}

/// The option a user picked.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Selection {
    Label(String),
    /// The 0-based index and the label.
    Indexed(usize, String),
}

impl Selection {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Selection::Label(label) | Selection::Indexed(_, label) => label,
        }
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::Label(_) => None,
            Selection::Indexed(index, _) => Some(*index),
        }
    }
}

impl Display for Selection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Selection::Label(label) => f.write_str(label),
            Selection::Indexed(index, label) => write!(f, "{index}\t{label}"),
        }
    }
}

/// Why an answer did not select an option.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum InvalidChoice {
    /// A number outside `1..=len`, as typed.
    OutOfRange(i64),
    /// Not a base-10 integer.
    NotANumber(String),
}

impl Display for InvalidChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidChoice::OutOfRange(number) => write!(f, "option {number} is out of range"),
            InvalidChoice::NotANumber(raw) => write!(f, "`{raw}` is not a number"),
        }
    }
}

/// The result of one render-and-read round of the menu.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Attempt {
    Selected(Selection),
    Invalid(InvalidChoice),
    Cancelled,
}

/// The result of an interactive prompt that the user may cancel.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Outcome<T> {
    Answered(T),
    Cancelled,
}

impl<T> Outcome<T> {
    #[must_use]
    pub fn answered(self) -> Option<T> {
        match self {
            Outcome::Answered(value) => Some(value),
            Outcome::Cancelled => None,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Outcome::Cancelled)
    }
}

/// The fragments of the title line: the title, then the cancel hint if shown.
#[must_use]
pub fn title_fragments<'a>(menu: &'a Menu, options: &PickOptions) -> Vec<&'a str> {
    let mut fragments = vec![menu.title()];
    if options.show_cancel_hint {
        fragments.push(CANCEL_HINT);
    }
    fragments
}

/// Interprets a typed answer as a 1-based option number.
///
/// # Errors
///
/// Returns the reason the answer does not name an option.
pub fn choose(
    menu: &Menu,
    options: &PickOptions,
    answer: &str,
) -> std::result::Result<Selection, InvalidChoice> {
    let answer = answer.trim();
    let number = answer
        .parse::<i64>()
        .map_err(|_| InvalidChoice::NotANumber(answer.to_string()))?;

    let position = number - 1;
    if position < 0 || position >= menu.len() as i64 {
        return Err(InvalidChoice::OutOfRange(number));
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let position = position as usize;
    let label = &menu.options()[position];
    let label = if options.lowercase {
        label.to_lowercase()
    } else {
        label.clone()
    };

    Ok(if options.index {
        Selection::Indexed(position, label)
    } else {
        Selection::Label(label)
    })
}

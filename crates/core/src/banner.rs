//! Large FIGlet banners.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use figlet_rs::FIGfont;

use crate::error::{Error, Result};

/// Where the banner sits in the available width.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Justify {
    /// Left aligned, the FIGlet default.
    #[default]
    Auto,
    Left,
    Center,
    Right,
}

impl FromStr for Justify {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Justify::Auto),
            "left" => Ok(Justify::Left),
            "center" | "centre" => Ok(Justify::Center),
            "right" => Ok(Justify::Right),
            _ => Err(Error::UnknownJustify(s.to_string())),
        }
    }
}

impl Display for Justify {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Justify::Auto => f.write_str("auto"),
            Justify::Left => f.write_str("left"),
            Justify::Center => f.write_str("center"),
            Justify::Right => f.write_str("right"),
        }
    }
}

/// Renders `text` in the standard FIGlet font, justified within `width`.
///
/// Every row ends with a newline and has no trailing spaces.
///
/// # Errors
///
/// Returns [`Error::Banner`] if the font cannot be loaded or `text` cannot be
/// rendered.
pub fn billboard(text: &str, justify: Justify, width: usize) -> Result<String> {
    let font = FIGfont::standard().map_err(Error::Banner)?;
    let figure = font
        .convert(text)
        .ok_or_else(|| Error::Banner(format!("cannot render \"{text}\"")))?;

    let rows: Vec<String> = figure
        .to_string()
        .lines()
        .map(|row| row.trim_end().to_string())
        .collect();
    Ok(justify_rows(&rows, justify, width))
}

/// Shifts the whole block so its widest row is centred or right aligned.
fn justify_rows(rows: &[String], justify: Justify, width: usize) -> String {
    let block_width = rows
        .iter()
        .map(|row| row.chars().count())
        .max()
        .unwrap_or_default();

    let indent = match justify {
        Justify::Auto | Justify::Left => 0,
        Justify::Center => width.saturating_sub(block_width) / 2,
        Justify::Right => width.saturating_sub(block_width),
    };

    rows.iter()
        .map(|row| {
            if row.is_empty() {
                "\n".to_string()
            } else {
                format!("{}{row}\n", " ".repeat(indent))
            }
        })
        .collect()
}

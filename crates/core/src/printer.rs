//! Styled text output.
//!
//! The [`Printer`] wraps text fragments in escape codes and writes them to its
//! output. It holds no style state: the codes come from a [`Paint`] resolved
//! by the caller from a [`StyleSet`].

use std::fmt::{Display, Write as _};
use std::io::Write;

use itertools::{Itertools, Position};

use crate::error::Result;
use crate::platform::Platform;
use crate::style::StyleSet;

/// Escape codes applied around one printed line. Every field may be empty.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct Paint {
    pub reset: String,
    pub effect: String,
    pub foreground: String,
    pub background: String,
}

impl Paint {
    /// A paint that only resets, using the reset code of `styles`.
    #[must_use]
    pub fn new(styles: &StyleSet) -> Self {
        Self {
            reset: styles.reset().to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn foreground(mut self, code: impl Into<String>) -> Self {
        self.foreground = code.into();
        self
    }

    #[must_use]
    pub fn background(mut self, code: impl Into<String>) -> Self {
        self.background = code.into();
        self
    }

    #[must_use]
    pub fn effect(mut self, code: impl Into<String>) -> Self {
        self.effect = code.into();
        self
    }

    /// Everything written before the text.
    #[must_use]
    pub fn prefix(&self) -> String {
        format!(
            "{}{}{}{}",
            self.reset, self.effect, self.foreground, self.background
        )
    }
}

/// Options for a single [`Printer::print`] call.
#[derive(Clone, PartialEq, Debug)]
pub struct PrintOptions {
    pub paint: Paint,
    pub sep: String,
    pub end: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            paint: Paint::default(),
            sep: " ".to_string(),
            end: "\n".to_string(),
        }
    }
}

impl PrintOptions {
    #[must_use]
    pub fn painted(paint: Paint) -> Self {
        Self {
            paint,
            ..Self::default()
        }
    }
}

pub struct Printer<W: Write> {
    out: W,
    platform: Platform,
    denied_platforms: Vec<Platform>,
}

impl<W: Write> Printer<W> {
    /// A printer for the current platform that refuses to run on Windows.
    pub fn new(out: W) -> Self {
        Self::for_platform(out, Platform::current(), vec![Platform::Windows])
    }

    pub fn for_platform(out: W, platform: Platform, denied_platforms: Vec<Platform>) -> Self {
        Self {
            out,
            platform,
            denied_platforms,
        }
    }

    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Joins `fragments` with the separator, wraps them in the paint and
    /// writes the line followed by the terminator.
    ///
    /// Returns the fragments unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is denied, if a fragment fails to
    /// format, or if writing to the output fails.
    pub fn print<'a, T: Display>(
        &mut self,
        fragments: &'a [T],
        options: &PrintOptions,
    ) -> Result<&'a [T]> {
        self.platform.deny(&self.denied_platforms)?;

        let mut line = options.paint.prefix();
        for (position, fragment) in fragments.iter().with_position() {
            if matches!(position, Position::Middle | Position::Last) {
                line.push_str(&options.sep);
            }
            write!(line, "{fragment}")?;
        }
        line.push_str(&options.paint.reset);
        line.push_str(&options.end);

        self.write_str(&line)?;
        Ok(fragments)
    }

    /// Writes `text` as is and flushes.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform is denied or writing fails.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        self.platform.deny(&self.denied_platforms)?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

//! Platform identification and the explicit platform guard.
//!
//! Styling and printing depend on the platform family only: Windows-family
//! platforms get no ANSI codes, and callers may refuse to run on them at all.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};

/// The platform families that change styling behaviour.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// The platform this binary was compiled for.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Maps a platform identifier such as `win32`, `nt`, `linux` or `darwin`
    /// to its family. Anything that is not Windows-family is treated as Unix.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        let identifier = identifier.trim().to_lowercase();
        if identifier.starts_with("win") || identifier == "nt" {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    /// Whether ANSI escape codes should be emitted on this platform.
    #[must_use]
    pub fn supports_ansi(self) -> bool {
        self != Platform::Windows
    }

    /// Guard clause for operations that refuse to run on some platforms.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] if `self` is in `denied`.
    pub fn deny(self, denied: &[Platform]) -> Result<()> {
        if denied.contains(&self) {
            debug!("Refusing to run on denied platform `{self}`");
            return Err(Error::UnsupportedPlatform { platform: self });
        }

        Ok(())
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Windows => f.write_str("windows"),
            Platform::Unix => f.write_str("unix"),
        }
    }
}

impl FromStr for Platform {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Platform::from_identifier(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_identifiers() {
        for identifier in ["win32", "windows", "nt", "Win64", " WIN32 "] {
            assert_eq!(Platform::from_identifier(identifier), Platform::Windows);
        }
    }

    #[test]
    fn test_unix_identifiers() {
        for identifier in ["linux", "darwin", "posix", "freebsd", "cygwin", ""] {
            assert_eq!(Platform::from_identifier(identifier), Platform::Unix);
        }
    }

    #[test]
    fn test_supports_ansi() {
        assert!(Platform::Unix.supports_ansi());
        assert!(!Platform::Windows.supports_ansi());
    }

    #[test]
    fn test_deny_guard() {
        assert!(Platform::Unix.deny(&[Platform::Windows]).is_ok());
        assert!(Platform::Windows.deny(&[]).is_ok());

        let result = Platform::Windows.deny(&[Platform::Windows]);
        assert!(matches!(
            result,
            Err(Error::UnsupportedPlatform {
                platform: Platform::Windows
            })
        ));
    }

    #[test]
    fn test_unsupported_platform_message() {
        let err = Platform::Windows.deny(&[Platform::Windows]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "This software is not compatible with this (windows) operating system."
        );
    }

    #[test]
    fn test_from_str() {
        let platform: Platform = "nt".parse().unwrap();
        assert_eq!(platform, Platform::Windows);
    }
}

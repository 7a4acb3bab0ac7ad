use thiserror::Error;

use crate::platform::Platform;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The title cannot be empty.")]
    EmptyTitle,

    #[error("The menu must contain at least one option.")]
    EmptyOptions,

    #[error("The options cannot contain an empty element (option {}).", .position)]
    EmptyOption { position: usize },

    #[error("A title is required, either as an argument or in a menu file.")]
    MissingTitle,

    #[error("This software is not compatible with this ({}) operating system.", .platform)]
    UnsupportedPlatform { platform: Platform },

    #[error("Unknown style: \"{}\"", _0)]
    UnknownStyle(String),

    #[error("Unknown justification: \"{}\". Use auto, left, center or right.", _0)]
    UnknownJustify(String),

    #[error("Could not render banner: {}", _0)]
    Banner(String),

    #[error("Could not render text for printing.")]
    Format(#[from] std::fmt::Error),

    #[error("Input was closed before an answer was given.")]
    InputClosed,

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    /// Whether this error was raised by menu validation, before any rendering.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyTitle | Self::EmptyOptions | Self::EmptyOption { .. }
        )
    }
}

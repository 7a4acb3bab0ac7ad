//! YAML menu definitions.
//!
//! A menu file holds a title, its options and, optionally, the prompt
//! settings:
//!
//! ```yaml
//! title: What is your favorite programming language?
//! options: [C, Rust, Python]
//! colorful: true
//! show_cancel_hint: true
//! ```

use std::fs::File;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::prompt::{Menu, PickOptions};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MenuDefinition {
    pub title: String,
    pub options: Vec<String>,
    pub answer: Option<String>,
    pub index: Option<bool>,
    pub colorful: Option<bool>,
    pub lowercase: Option<bool>,
    pub show_cancel_hint: Option<bool>,
}

impl MenuDefinition {
    /// Validates the title and options into a [`Menu`].
    ///
    /// # Errors
    ///
    /// Returns a validation error if the title or any option is empty, or if
    /// there are no options.
    pub fn to_menu(&self) -> Result<Menu> {
        Menu::new(self.title.clone(), self.options.iter().cloned())
    }

    /// The prompt settings from the file, with defaults for missing keys.
    #[must_use]
    pub fn pick_options(&self) -> PickOptions {
        let defaults = PickOptions::default();
        PickOptions {
            answer: self.answer.clone().unwrap_or(defaults.answer),
            index: self.index.unwrap_or(defaults.index),
            colorful: self.colorful.unwrap_or(defaults.colorful),
            lowercase: self.lowercase.unwrap_or(defaults.lowercase),
            show_cancel_hint: self.show_cancel_hint.unwrap_or(defaults.show_cancel_hint),
        }
    }
}

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path)
        .map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

/// Loads a menu definition from a YAML file.
///
/// The definition is only parsed here; call [`MenuDefinition::to_menu`] to
/// validate it.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid menu
/// definition.
///
/// # Examples
///
/// ```no_run
/// use termpick_core::menu_file::get_menu_definition;
///
/// let definition = get_menu_definition("menus/languages.yml")?;
/// let menu = definition.to_menu()?;
/// println!("{} options", menu.len());
/// # Ok::<(), termpick_core::error::Error>(())
/// ```
pub fn get_menu_definition(menu_path: &str) -> Result<MenuDefinition> {
    let definition: MenuDefinition = read_yaml("menu", menu_path)?;

    debug!(
        "Loaded menu `{}` with {} options from `{}`",
        definition.title,
        definition.options.len(),
        menu_path
    );

    Ok(definition)
}

/// Opens `path` and deserializes it, tagging errors with `file_description`.
pub(crate) fn read_yaml<T: DeserializeOwned>(file_description: &str, path: &str) -> Result<T> {
    let reader = get_reader(file_description, path)?;

    serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            file_description.to_string(),
            path.to_string(),
            e,
        )
    })
}

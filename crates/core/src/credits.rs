//! Project credits and the centred `credence` block.
//!
//! A credits file names the application and lists one entry per contributor.
//! Entry keys keep their file order:
//!
//! ```yaml
//! app_name: Snakypy
//! app_version: "0.1.0"
//! app_url: https://github.com/snakypy/snakypy
//! credence:
//!   - my_name: William Canin
//!     email: example@domain.com
//!     locale: Brazil - SP
//! ```

use std::io::Write;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::config::DEFAULT_CREDENCE_COLUMN;
use crate::error::Result;
use crate::menu_file::read_yaml;
use crate::printer::{Paint, PrintOptions, Printer};

const RULE_WIDTH: usize = 57;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credits {
    pub app_name: String,
    pub app_version: String,
    pub app_url: String,
    pub credence: Vec<IndexMap<String, String>>,
}

/// Settings for [`print_credence`].
#[derive(Clone, PartialEq, Debug)]
pub struct CredenceOptions {
    /// Applied to every non-blank line.
    pub paint: Paint,
    /// Width the lines are centred in.
    pub column: usize,
    /// Year shown in the footer.
    pub year: i32,
}

impl CredenceOptions {
    #[must_use]
    pub fn new(year: i32) -> Self {
        Self {
            paint: Paint::default(),
            column: DEFAULT_CREDENCE_COLUMN,
            year,
        }
    }
}

/// Loads credits from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid credits file.
pub fn get_credits(credits_path: &str) -> Result<Credits> {
    let credits: Credits = read_yaml("credits", credits_path)?;
    debug!(
        "Loaded {} credit entries for `{}` from `{}`",
        credits.credence.len(),
        credits.app_name,
        credits_path
    );
    Ok(credits)
}

/// The lines of the credits block, centred in `column`. Blank lines are empty.
#[must_use]
pub fn credence_lines(credits: &Credits, year: i32, column: usize) -> Vec<String> {
    let rule = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        center(&rule, column),
        center(
            &format!("{} - Version {}", credits.app_name, credits.app_version),
            column,
        ),
        center(&rule, column),
        String::new(),
        center("Credence:", column),
        String::new(),
    ];

    for entry in &credits.credence {
        for (key, value) in entry {
            lines.push(center(&format!("{}: {value}", key_title(key)), column));
        }
        lines.push(String::new());
    }

    lines.extend([
        center(&rule, column),
        center(
            &format!("{} © {year} - All Rights Reserved.", credits.app_name),
            column,
        ),
        center(&format!("Home: {}", credits.app_url), column),
        center(&rule, column),
    ]);

    lines
}

/// Prints the credits block, painting every non-blank line.
///
/// # Errors
///
/// Returns an error if the platform is denied or writing fails.
pub fn print_credence<W: Write>(
    printer: &mut Printer<W>,
    credits: &Credits,
    options: &CredenceOptions,
) -> Result<()> {
    let painted = PrintOptions::painted(options.paint.clone());

    for line in credence_lines(credits, options.year, options.column) {
        if line.is_empty() {
            printer.write_str("\n")?;
        } else {
            printer.print(&[line], &painted)?;
        }
    }

    Ok(())
}

/// Left-pads `text` so it sits in the middle of `width`. Odd margins put the
/// extra space on the right, which is left off.
fn center(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }

    let margin = width - length;
    let left = margin / 2 + (margin & width & 1);
    format!("{}{text}", " ".repeat(left))
}

/// `my_name` becomes `My Name`.
fn key_title(key: &str) -> String {
    let mut previous_is_letter = false;
    let titled: String = key
        .chars()
        .flat_map(|c| {
            let mapped: Vec<char> = if previous_is_letter {
                c.to_lowercase().collect()
            } else {
                c.to_uppercase().collect()
            };
            previous_is_letter = c.is_alphabetic();
            mapped
        })
        .collect();

    titled.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::platform::Platform;
    use crate::style::{Color, StyleSet};
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    fn snakypy() -> Credits {
        let mut william = IndexMap::new();
        william.insert("my_name".to_string(), "William Canin".to_string());
        william.insert("email".to_string(), "example@domain.com".to_string());

        let mut maria = IndexMap::new();
        maria.insert("my_name".to_string(), "Maria".to_string());

        Credits {
            app_name: "Snakypy".to_string(),
            app_version: "0.1.0".to_string(),
            app_url: "https://github.com/snakypy/snakypy".to_string(),
            credence: vec![william, maria],
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abc", 6), " abc");
        assert_eq!(center("abc", 7), "  abc");
        assert_eq!(center("too long", 4), "too long");
        assert_eq!(
            center(&"-".repeat(57), 80),
            format!("{}{}", " ".repeat(11), "-".repeat(57))
        );
    }

    #[test]
    fn test_key_title() {
        assert_eq!(key_title("my_name"), "My Name");
        assert_eq!(key_title("EMAIL"), "Email");
        assert_eq!(key_title("home-page"), "Home-Page");
    }

    #[test]
    fn test_credence_lines() {
        let lines = credence_lines(&snakypy(), 2026, 57);
        let rule = "-".repeat(57);

        assert_eq!(
            lines,
            vec![
                rule.clone(),
                format!("{}Snakypy - Version 0.1.0", " ".repeat(17)),
                rule.clone(),
                String::new(),
                format!("{}Credence:", " ".repeat(24)),
                String::new(),
                format!("{}My Name: William Canin", " ".repeat(18)),
                format!("{}Email: example@domain.com", " ".repeat(16)),
                String::new(),
                format!("{}My Name: Maria", " ".repeat(22)),
                String::new(),
                rule.clone(),
                format!("{}Snakypy © 2026 - All Rights Reserved.", " ".repeat(10)),
                format!("{}Home: https://github.com/snakypy/snakypy", " ".repeat(9)),
                rule,
            ]
        );
    }

    #[test]
    fn test_no_entries() {
        let credits = Credits {
            credence: vec![],
            ..snakypy()
        };
        let lines = credence_lines(&credits, 2026, 80);
        assert_eq!(lines.len(), 10);
        assert!(lines[9].ends_with(&"-".repeat(57)));
    }

    #[test]
    fn test_print_credence_paints_non_blank_lines() {
        let styles = StyleSet::new(Platform::Unix);
        let options = CredenceOptions {
            paint: Paint::new(&styles).foreground(styles.foreground(Color::Cyan)),
            column: 57,
            year: 2026,
        };
        let mut printer = Printer::for_platform(Vec::new(), Platform::Unix, vec![]);
        print_credence(&mut printer, &snakypy(), &options).unwrap();

        let output = String::from_utf8(printer.into_inner()).unwrap();
        let rows: Vec<&str> = output.lines().collect();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[0], format!("\x1b[0m\x1b[36m{}\x1b[0m", "-".repeat(57)));
        assert_eq!(rows[3], "");
    }

    #[test]
    fn test_get_credits_keeps_key_order() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            "app_name: Snakypy\napp_version: \"0.1.0\"\napp_url: https://snakypy.dev\ncredence:\n  - website: https://williamcanin.me\n    my_name: William Canin\n"
        )
        .unwrap();

        let credits = get_credits(temp_file.path().to_str().unwrap()).unwrap();
        let keys: Vec<&str> = credits.credence[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["website", "my_name"]);
    }

    #[test]
    fn test_get_credits_requires_credence() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "app_name: Snakypy\napp_version: \"0.1.0\"\napp_url: x\n").unwrap();

        let result = get_credits(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(Error::Yaml { .. })));
    }
}

//! Default values and path utilities.

use std::time::Duration;

/// Text shown before the user types a menu answer.
pub const DEFAULT_ANSWER_PROMPT: &str = "Answer:";

/// Suffix added to a menu title when the cancel hint is shown.
pub const CANCEL_HINT: &str = "(Ctrl+C to Cancel)";

/// Written after an entry question, before the answer.
pub const DEFAULT_JUMP_LINE: &str = "\n> ";

/// Header printed above the loading animation.
pub const DEFAULT_LOADING_HEADER: &str = "[Loading]";

/// Pause before each of the loading animation's frames.
pub const DEFAULT_LOADING_STEP: Duration = Duration::from_millis(30);

/// Width the credits block is centred in.
pub const DEFAULT_CREDENCE_COLUMN: usize = 80;

/// Width a centred or right-justified banner is aligned in.
pub const DEFAULT_BANNER_WIDTH: usize = 80;

/// Resolves a menu or credits file path, expanding `~`.
///
/// # Examples
///
/// ```
/// use termpick_core::config::get_file_path;
///
/// let expanded = get_file_path("~/menus/languages.yml");
/// assert!(!expanded.starts_with('~'));
/// assert_eq!(get_file_path("/etc/menu.yml"), "/etc/menu.yml");
/// ```
#[must_use]
pub fn get_file_path(file_path: &str) -> String {
    shellexpand::tilde(file_path).to_string()
}

//! ANSI color and text effect resolution.
//!
//! A [`StyleSet`] is an immutable value that resolves a requested color, effect
//! or semantic icon into an SGR escape sequence. When styling is disabled (on a
//! Windows-family platform, or when the caller asks for plain output) every
//! lookup yields an empty string, so callers can always interpolate the result.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::platform::Platform;

/// Resets every color and effect.
pub const RESET: &str = "\x1b[0m";

const FOREGROUND_SEQUENCES: [&str; 16] = [
    "\x1b[30m", "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m", "\x1b[37m",
    "\x1b[90m", "\x1b[91m", "\x1b[92m", "\x1b[93m", "\x1b[94m", "\x1b[95m", "\x1b[96m", "\x1b[97m",
];

const BACKGROUND_SEQUENCES: [&str; 16] = [
    "\x1b[40m", "\x1b[41m", "\x1b[42m", "\x1b[43m", "\x1b[44m", "\x1b[45m", "\x1b[46m", "\x1b[47m",
    "\x1b[100m", "\x1b[101m", "\x1b[102m", "\x1b[103m", "\x1b[104m", "\x1b[105m", "\x1b[106m",
    "\x1b[107m",
];

/// The eight standard terminal colors and their bright variants.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    fn position(self) -> usize {
        self as usize
    }

    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "brightblack" => Color::BrightBlack,
            "brightred" => Color::BrightRed,
            "brightgreen" => Color::BrightGreen,
            "brightyellow" => Color::BrightYellow,
            "brightblue" => Color::BrightBlue,
            "brightmagenta" => Color::BrightMagenta,
            "brightcyan" => Color::BrightCyan,
            "brightwhite" => Color::BrightWhite,
            _ => return None,
        })
    }
}

/// Text effects.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Effect {
    Bold,
    Italic,
    Underline,
    SlowBlink,
    RapidBlink,
    Reverse,
}

impl Effect {
    fn sequence(self) -> &'static str {
        match self {
            Effect::Bold => "\x1b[1m",
            Effect::Italic => "\x1b[3m",
            Effect::Underline => "\x1b[4m",
            Effect::SlowBlink => "\x1b[5m",
            Effect::RapidBlink => "\x1b[6m",
            Effect::Reverse => "\x1b[7m",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "bold" => Effect::Bold,
            "italic" => Effect::Italic,
            "underline" => Effect::Underline,
            "blink" | "slowblink" => Effect::SlowBlink,
            "rapidblink" => Effect::RapidBlink,
            "reverse" | "reversecolor" => Effect::Reverse,
            _ => return None,
        })
    }
}

/// Semantic icons, each a color followed by a glyph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Icon {
    Warning,
    Error,
    Finish,
    Question,
}

impl Icon {
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Icon::Warning => Color::BrightYellow,
            Icon::Error => Color::BrightRed,
            Icon::Finish => Color::BrightGreen,
            Icon::Question => Color::BrightCyan,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "warning" => Icon::Warning,
            "error" => Icon::Error,
            "finish" => Icon::Finish,
            "question" => Icon::Question,
            _ => return None,
        })
    }
}

/// Which layer a color applies to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Layer {
    Foreground,
    Background,
}

/// A named style lookup such as `red`, `BRIGHT_CYAN`, `bold` or `warning`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StyleKey {
    Color(Color),
    Effect(Effect),
    Icon(Icon),
}

impl FromStr for StyleKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        if let Some(color) = Color::from_name(&normalized) {
            return Ok(StyleKey::Color(color));
        }

        if let Some(effect) = Effect::from_name(&normalized) {
            return Ok(StyleKey::Effect(effect));
        }

        if let Some(icon) = Icon::from_name(&normalized) {
            return Ok(StyleKey::Icon(icon));
        }

        Err(Error::UnknownStyle(s.to_string()))
    }
}

/// Glyphs placed after the color code of each semantic icon.
#[derive(Clone, PartialEq, Debug)]
pub struct Icons {
    pub warning: String,
    pub error: String,
    pub finish: String,
    pub question: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            warning: "⚠ ".to_string(),
            error: "✖ ".to_string(),
            finish: "✔ ".to_string(),
            question: "➜ ".to_string(),
        }
    }
}

impl Icons {
    fn glyph(&self, icon: Icon) -> &str {
        match icon {
            Icon::Warning => &self.warning,
            Icon::Error => &self.error,
            Icon::Finish => &self.finish,
            Icon::Question => &self.question,
        }
    }
}

/// Resolves style requests to escape sequences, or to empty strings when
/// styling is disabled.
#[derive(Clone, PartialEq, Debug)]
pub struct StyleSet {
    enabled: bool,
    icons: Icons,
}

impl StyleSet {
    /// Styles for `platform` with the default icon glyphs.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        Self::with_icons(platform, Icons::default())
    }

    #[must_use]
    pub fn with_icons(platform: Platform, icons: Icons) -> Self {
        Self {
            enabled: platform.supports_ansi(),
            icons,
        }
    }

    /// A style set where every lookup is empty.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            enabled: false,
            icons: Icons::default(),
        }
    }

    /// Styles for a colorful menu, or plain output when `colorful` is false.
    #[must_use]
    pub fn for_menu(platform: Platform, colorful: bool) -> Self {
        if colorful {
            Self::new(platform)
        } else {
            Self::plain()
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub fn reset(&self) -> &'static str {
        self.gate(RESET)
    }

    #[must_use]
    pub fn foreground(&self, color: Color) -> &'static str {
        self.gate(FOREGROUND_SEQUENCES[color.position()])
    }

    #[must_use]
    pub fn background(&self, color: Color) -> &'static str {
        self.gate(BACKGROUND_SEQUENCES[color.position()])
    }

    #[must_use]
    pub fn color(&self, layer: Layer, color: Color) -> &'static str {
        match layer {
            Layer::Foreground => self.foreground(color),
            Layer::Background => self.background(color),
        }
    }

    #[must_use]
    pub fn effect(&self, effect: Effect) -> &'static str {
        self.gate(effect.sequence())
    }

    /// The icon's color code followed by its glyph. Empty, glyph included,
    /// when styling is disabled.
    #[must_use]
    pub fn icon(&self, layer: Layer, icon: Icon) -> String {
        if !self.enabled {
            return String::new();
        }

        format!("{}{}", self.color(layer, icon.color()), self.icons.glyph(icon))
    }

    #[must_use]
    pub fn warning(&self) -> String {
        self.icon(Layer::Foreground, Icon::Warning)
    }

    #[must_use]
    pub fn error(&self) -> String {
        self.icon(Layer::Foreground, Icon::Error)
    }

    #[must_use]
    pub fn finish(&self) -> String {
        self.icon(Layer::Foreground, Icon::Finish)
    }

    #[must_use]
    pub fn question(&self) -> String {
        self.icon(Layer::Foreground, Icon::Question)
    }

    /// Resolves a parsed key. Effects ignore the layer.
    #[must_use]
    pub fn resolve(&self, layer: Layer, key: StyleKey) -> String {
        match key {
            StyleKey::Color(color) => self.color(layer, color).to_string(),
            StyleKey::Effect(effect) => self.effect(effect).to_string(),
            StyleKey::Icon(icon) => self.icon(layer, icon),
        }
    }

    fn gate(&self, sequence: &'static str) -> &'static str {
        if self.enabled {
            sequence
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_COLORS: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    const ALL_EFFECTS: [Effect; 6] = [
        Effect::Bold,
        Effect::Italic,
        Effect::Underline,
        Effect::SlowBlink,
        Effect::RapidBlink,
        Effect::Reverse,
    ];

    #[test]
    fn test_standard_color_codes() {
        let styles = StyleSet::new(Platform::Unix);
        assert_eq!(styles.foreground(Color::Black), "\x1b[30m");
        assert_eq!(styles.foreground(Color::White), "\x1b[37m");
        assert_eq!(styles.background(Color::Black), "\x1b[40m");
        assert_eq!(styles.background(Color::Red), "\x1b[41m");
    }

    #[test]
    fn test_bright_color_codes() {
        let styles = StyleSet::new(Platform::Unix);
        assert_eq!(styles.foreground(Color::BrightRed), "\x1b[91m");
        assert_eq!(styles.foreground(Color::BrightWhite), "\x1b[97m");
        assert_eq!(styles.background(Color::BrightMagenta), "\x1b[105m");
        assert_eq!(styles.background(Color::BrightWhite), "\x1b[107m");
    }

    #[test]
    fn test_effect_codes() {
        let styles = StyleSet::new(Platform::Unix);
        let codes: Vec<&str> = ALL_EFFECTS.iter().map(|e| styles.effect(*e)).collect();
        assert_eq!(
            codes,
            vec!["\x1b[1m", "\x1b[3m", "\x1b[4m", "\x1b[5m", "\x1b[6m", "\x1b[7m"]
        );
        assert_eq!(styles.reset(), "\x1b[0m");
    }

    #[test]
    fn test_windows_yields_empty_strings() {
        let styles = StyleSet::new(Platform::Windows);
        assert!(!styles.is_enabled());

        for color in ALL_COLORS {
            assert_eq!(styles.foreground(color), "");
            assert_eq!(styles.background(color), "");
        }
        for effect in ALL_EFFECTS {
            assert_eq!(styles.effect(effect), "");
        }
        assert_eq!(styles.reset(), "");
        assert_eq!(styles.warning(), "");
        assert_eq!(styles.icon(Layer::Background, Icon::Question), "");
    }

    #[test]
    fn test_default_icons() {
        let styles = StyleSet::new(Platform::Unix);
        assert_eq!(styles.warning(), "\x1b[93m⚠ ");
        assert_eq!(styles.error(), "\x1b[91m✖ ");
        assert_eq!(styles.finish(), "\x1b[92m✔ ");
        assert_eq!(styles.question(), "\x1b[96m➜ ");
    }

    #[test]
    fn test_custom_icons_on_background() {
        let icons = Icons {
            error: "[x] ".to_string(),
            ..Icons::default()
        };
        let styles = StyleSet::with_icons(Platform::Unix, icons);
        assert_eq!(styles.icon(Layer::Background, Icon::Error), "\x1b[101m[x] ");
        assert_eq!(styles.icon(Layer::Background, Icon::Finish), "\x1b[102m✔ ");
    }

    #[test]
    fn test_plain_and_menu_styles() {
        assert_eq!(StyleSet::for_menu(Platform::Unix, false), StyleSet::plain());
        assert!(StyleSet::for_menu(Platform::Unix, true).is_enabled());
        assert!(!StyleSet::for_menu(Platform::Windows, true).is_enabled());
    }

    #[test]
    fn test_style_key_parsing() {
        assert_eq!(
            "red".parse::<StyleKey>().unwrap(),
            StyleKey::Color(Color::Red)
        );
        assert_eq!(
            "BRIGHT_CYAN".parse::<StyleKey>().unwrap(),
            StyleKey::Color(Color::BrightCyan)
        );
        assert_eq!(
            "bright-black".parse::<StyleKey>().unwrap(),
            StyleKey::Color(Color::BrightBlack)
        );
        assert_eq!(
            "Underline".parse::<StyleKey>().unwrap(),
            StyleKey::Effect(Effect::Underline)
        );
        assert_eq!(
            "reverse_color".parse::<StyleKey>().unwrap(),
            StyleKey::Effect(Effect::Reverse)
        );
        assert_eq!(
            "WARNING".parse::<StyleKey>().unwrap(),
            StyleKey::Icon(Icon::Warning)
        );
    }

    #[test]
    fn test_unknown_style_key() {
        let result = "chartreuse".parse::<StyleKey>();
        assert!(matches!(result, Err(Error::UnknownStyle(name)) if name == "chartreuse"));
    }

    #[test]
    fn test_resolve() {
        let styles = StyleSet::new(Platform::Unix);
        assert_eq!(
            styles.resolve(Layer::Background, StyleKey::Color(Color::Blue)),
            "\x1b[44m"
        );
        assert_eq!(
            styles.resolve(Layer::Background, StyleKey::Effect(Effect::Bold)),
            "\x1b[1m"
        );
        assert_eq!(
            styles.resolve(Layer::Foreground, StyleKey::Icon(Icon::Finish)),
            "\x1b[92m✔ "
        );
    }
}

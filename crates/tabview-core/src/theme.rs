//! Colour themes for the tab strip
//!
//! A theme supplies the palette used for tab classes (normal, selected,
//! disabled), the editing toolbar and the content border. Themes can be
//! picked by name or loaded from TOML.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Complete theme definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    /// Theme display name
    pub name: String,
    /// Color palette
    pub colors: ThemeColors,
    /// Border around the content container
    pub borders: BorderStyle,
}

/// Color palette for the theme
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeColors {
    /// Bar and content background
    #[serde(with = "color_serde")]
    pub background: Color,
    /// Content text
    #[serde(with = "color_serde")]
    pub foreground: Color,
    /// Selected tab
    #[serde(with = "color_serde")]
    pub accent: Color,
    /// Unselected enabled tabs and dividers
    #[serde(with = "color_serde")]
    pub muted: Color,
    /// Disabled tabs
    #[serde(with = "color_serde")]
    pub disabled: Color,
    /// Editing toolbar background
    #[serde(with = "color_serde")]
    pub toolbar: Color,
}

/// Border style for the content container
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Rounded corners (default)
    #[default]
    Rounded,
    /// Square corners
    Square,
    /// Double-line borders
    Double,
    /// No borders
    None,
}

/// Custom serde module for ratatui Color
mod color_serde {
    use ratatui::style::Color;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match color {
            Color::Reset => "reset".to_string(),
            Color::Black => "black".to_string(),
            Color::Red => "red".to_string(),
            Color::Green => "green".to_string(),
            Color::Yellow => "yellow".to_string(),
            Color::Blue => "blue".to_string(),
            Color::Magenta => "magenta".to_string(),
            Color::Cyan => "cyan".to_string(),
            Color::Gray => "gray".to_string(),
            Color::DarkGray => "darkgray".to_string(),
            Color::LightRed => "lightred".to_string(),
            Color::LightGreen => "lightgreen".to_string(),
            Color::LightYellow => "lightyellow".to_string(),
            Color::LightBlue => "lightblue".to_string(),
            Color::LightMagenta => "lightmagenta".to_string(),
            Color::LightCyan => "lightcyan".to_string(),
            Color::White => "white".to_string(),
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            Color::Indexed(i) => format!("indexed:{}", i),
        };
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }

    fn parse_color(s: &str) -> Result<Color, String> {
        match s.to_lowercase().as_str() {
            "reset" => Ok(Color::Reset),
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "blue" => Ok(Color::Blue),
            "magenta" => Ok(Color::Magenta),
            "cyan" => Ok(Color::Cyan),
            "gray" | "grey" => Ok(Color::Gray),
            "darkgray" | "darkgrey" => Ok(Color::DarkGray),
            "lightred" => Ok(Color::LightRed),
            "lightgreen" => Ok(Color::LightGreen),
            "lightyellow" => Ok(Color::LightYellow),
            "lightblue" => Ok(Color::LightBlue),
            "lightmagenta" => Ok(Color::LightMagenta),
            "lightcyan" => Ok(Color::LightCyan),
            "white" => Ok(Color::White),
            s if s.starts_with('#') => {
                let hex = s.trim_start_matches('#');
                if hex.len() != 6 {
                    return Err(format!("invalid hex color: {}", s));
                }
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|_| format!("invalid hex color: {}", s))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|_| format!("invalid hex color: {}", s))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|_| format!("invalid hex color: {}", s))?;
                Ok(Color::Rgb(r, g, b))
            }
            s if s.starts_with("indexed:") => {
                let idx = s
                    .trim_start_matches("indexed:")
                    .parse::<u8>()
                    .map_err(|_| format!("invalid indexed color: {}", s))?;
                Ok(Color::Indexed(idx))
            }
            _ => Err(format!("unknown color: {}", s)),
        }
    }
}

impl Theme {
    /// Creates the default dark theme
    pub fn dark() -> Self {
        Theme {
            name: "Dark".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(30, 30, 46),
                foreground: Color::Rgb(205, 214, 244),
                accent: Color::Rgb(137, 180, 250),
                muted: Color::Rgb(147, 153, 178),
                disabled: Color::Rgb(88, 91, 112),
                toolbar: Color::Rgb(49, 50, 68),
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// Creates a light theme
    pub fn light() -> Self {
        Theme {
            name: "Light".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(239, 241, 245),
                foreground: Color::Rgb(76, 79, 105),
                accent: Color::Rgb(30, 102, 245),
                muted: Color::Rgb(108, 111, 133),
                disabled: Color::Rgb(172, 176, 190),
                toolbar: Color::Rgb(220, 224, 232),
            },
            borders: BorderStyle::Square,
        }
    }

    /// Creates a Nord theme
    pub fn nord() -> Self {
        Theme {
            name: "Nord".to_string(),
            colors: ThemeColors {
                background: Color::Rgb(46, 52, 64),
                foreground: Color::Rgb(236, 239, 244),
                accent: Color::Rgb(136, 192, 208),
                muted: Color::Rgb(216, 222, 233),
                disabled: Color::Rgb(76, 86, 106),
                toolbar: Color::Rgb(59, 66, 82),
            },
            borders: BorderStyle::Rounded,
        }
    }

    /// Looks up a built-in theme by case-insensitive name
    ///
    /// ```
    /// use tabview_core::Theme;
    ///
    /// assert_eq!(Theme::by_name("NORD").map(|t| t.name), Some("Nord".to_string()));
    /// assert!(Theme::by_name("solarized").is_none());
    /// ```
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dark" => Some(Theme::dark()),
            "light" => Some(Theme::light()),
            "nord" => Some(Theme::nord()),
            _ => None,
        }
    }

    /// Parses a theme from TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML string is malformed or contains invalid values.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes the theme to TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        assert_eq!(Theme::dark().name, "Dark");
        assert_eq!(Theme::light().name, "Light");
        assert_eq!(Theme::nord().name, "Nord");
        assert_eq!(Theme::default(), Theme::dark());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Theme::by_name("dark"), Some(Theme::dark()));
        assert_eq!(Theme::by_name("Light"), Some(Theme::light()));
        assert!(Theme::by_name("").is_none());
    }

    #[test]
    fn test_disabled_differs_from_muted() {
        for theme in [Theme::dark(), Theme::light(), Theme::nord()] {
            assert_ne!(theme.colors.disabled, theme.colors.muted, "{}", theme.name);
        }
    }

    #[test]
    fn test_theme_toml_roundtrip() {
        for original in [Theme::dark(), Theme::light(), Theme::nord()] {
            let toml_str = original.to_toml().expect("serialization should work");
            let parsed = Theme::from_toml(&toml_str).expect("parsing should work");
            assert_eq!(original, parsed);
        }
    }

    #[test]
    fn test_mixed_color_parsing() {
        let toml_str = r##"
            name = "Map"
            borders = "double"

            [colors]
            background = "#1e1e2e"
            foreground = "white"
            accent = "indexed:4"
            muted = "grey"
            disabled = "darkgray"
            toolbar = "black"
        "##;
        let theme = Theme::from_toml(toml_str).expect("should parse colors");
        assert_eq!(theme.colors.background, Color::Rgb(30, 30, 46));
        assert_eq!(theme.colors.foreground, Color::White);
        assert_eq!(theme.colors.accent, Color::Indexed(4));
        assert_eq!(theme.colors.muted, Color::Gray);
        assert_eq!(theme.borders, BorderStyle::Double);
    }

    #[test]
    fn test_unknown_color_rejected() {
        let toml_str = r##"
            name = "Bad"
            borders = "none"

            [colors]
            background = "#12"
            foreground = "white"
            accent = "blue"
            muted = "gray"
            disabled = "darkgray"
            toolbar = "black"
        "##;
        assert!(Theme::from_toml(toml_str).is_err());
    }
}

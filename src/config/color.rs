//! RGBA color value used for viewer backgrounds.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use {
    serde::{Deserialize, Serialize},
    thiserror::Error,
};

/// Error returned when a color string is not `#rrggbb` or `#rrggbbaa`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid color '{input}': expected #rrggbb or #rrggbbaa")]
pub struct ColorParseError {
    /// The rejected input.
    pub input: String,
}

/// An 8-bit-per-channel RGBA color.
///
/// Serialized as `#rrggbb` when opaque and `#rrggbbaa` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 0xff,
        }
    }

    /// Creates a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Returns `true` when the alpha channel is fully opaque.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.alpha == 0xff
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let error = || ColorParseError {
            input: s.to_string(),
        };

        let hex = s.trim().strip_prefix('#').ok_or_else(error)?;
        if !matches!(hex.len(), 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(error());
        }

        let channel = |index: usize| {
            u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).map_err(|_| error())
        };

        let alpha = if hex.len() == 8 { channel(3)? } else { 0xff };
        Ok(Self::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)?;
        if !self.is_opaque() {
            write!(f, "{:02x}", self.alpha)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::color::Color;

    #[test]
    fn test_color_parsing() {
        let test_cases = vec![
            ("#ffffff", Some(Color::WHITE)),
            ("#000000", Some(Color::BLACK)),
            ("#1A2b3C", Some(Color::rgb(0x1a, 0x2b, 0x3c))),
            ("#10203040", Some(Color::rgba(0x10, 0x20, 0x30, 0x40))),
            ("  #ff0000 ", Some(Color::rgb(0xff, 0, 0))),
            ("ffffff", None),
            ("#fff", None),
            ("#gggggg", None),
            ("#ff00ff0", None),
            ("", None),
        ];

        for (input, expected) in test_cases {
            assert_eq!(input.parse::<Color>().ok(), expected, "Failed for input: {input}");
        }
    }

    #[test]
    fn test_sign_characters_are_not_hex_digits() {
        for input in ["#+f+f+f", "#+fffff", "#-1ffff", "#ff+f+f+f"] {
            assert!(input.parse::<Color>().is_err(), "Accepted input: {input}");
        }
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgb(0x1a, 0x2b, 0x3c).to_string(), "#1a2b3c");
        assert_eq!(Color::rgba(0, 0, 0, 0x80).to_string(), "#00000080");
    }

    #[test]
    fn test_color_serde_as_string() {
        let json = serde_json::to_string(&Color::rgb(0x33, 0x66, 0x99)).unwrap();
        assert_eq!(json, "\"#336699\"");

        let parsed: Color = serde_json::from_str("\"#336699\"").unwrap();
        assert_eq!(parsed, Color::rgb(0x33, 0x66, 0x99));

        assert!(serde_json::from_str::<Color>("\"blue\"").is_err());
    }

    #[test]
    fn test_parse_error_message() {
        let error = "blue".parse::<Color>().unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid color 'blue': expected #rrggbb or #rrggbbaa"
        );
    }
}

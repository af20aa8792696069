//! Parsing of the HTML color strings the device server publishes.
//!
//! The server renders every strip pixel as `rgb(r, g, b)`; the device
//! state color may also be a `#rrggbb` literal. Parsing is only needed
//! for display, so records keep the raw strings and callers parse lazily.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unrecognized color '{input}'")]
pub struct ColorParseError {
    pub input: String,
}

impl HtmlColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HtmlColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let err = || ColorParseError {
            input: s.to_string(),
        };

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(err());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
            return Ok(Self::new(channel(0)?, channel(2)?, channel(4)?));
        }

        let inner = trimmed
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;

        let channels: Vec<u8> = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>().map_err(|_| err()))
            .collect::<Result<_, _>>()?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(err()),
        }
    }
}

impl fmt::Display for HtmlColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(
            "rgb(100, 30, 50)".parse::<HtmlColor>().unwrap(),
            HtmlColor::new(100, 30, 50)
        );
        assert_eq!(
            "rgb(100,30,50)".parse::<HtmlColor>().unwrap(),
            HtmlColor::new(100, 30, 50)
        );
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(
            "#ff8000".parse::<HtmlColor>().unwrap(),
            HtmlColor::new(255, 128, 0)
        );
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("rgb(300, 0, 0)".parse::<HtmlColor>().is_err());
        assert!("rgb(1, 2)".parse::<HtmlColor>().is_err());
        assert!("#fff".parse::<HtmlColor>().is_err());
        assert!("red".parse::<HtmlColor>().is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(HtmlColor::new(255, 128, 0).to_hex(), "#ff8000");
    }

    #[test]
    fn test_display_matches_server_format() {
        assert_eq!(HtmlColor::new(1, 2, 3).to_string(), "rgb(1, 2, 3)");
    }
}

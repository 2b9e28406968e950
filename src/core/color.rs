//! Ball colors.
//!
//! The engine only ever sees a `Color`; string input from a UI layer goes
//! through `FromStr`, so an unknown color is rejected at the parse boundary
//! instead of silently scoring nobody.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseColorError;

/// One of the three ball colors in the bag.
///
/// Serialized in lowercase (`"red"`, `"blue"`, `"green"`) to match the
/// snapshot wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Green,
}

impl Color {
    /// All colors, in bag declaration order.
    pub const ALL: [Color; 3] = [Color::Red, Color::Blue, Color::Green];

    /// Lowercase name of the color.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            other => Err(ParseColorError(other.to_string())),
        }
    }
}

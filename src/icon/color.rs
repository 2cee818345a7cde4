use std::fmt;
use std::str::FromStr;

use anyhow::ensure;
use image::Rgb;
use serde::{Deserialize, Serialize};

/// Solid canvas color, written as `#RRGGBB` in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Background(pub Rgb<u8>);

impl Background {
    /// Dark navy `#0A1628`.
    pub const DEFAULT: Self = Self(Rgb([10, 22, 40]));
}

impl Default for Background {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for Background {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        ensure!(
            hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            "Invalid color {:?}, expected #RRGGBB",
            s
        );
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Self(Rgb([channel(0)?, channel(2)?, channel(4)?])))
    }
}

impl TryFrom<String> for Background {
    type Error = anyhow::Error;

    fn try_from(value: String) -> anyhow::Result<Self> {
        value.parse()
    }
}

impl From<Background> for String {
    fn from(color: Background) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0 .0;
        write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
    }
}

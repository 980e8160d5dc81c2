//! Light/dark color scheme signal from the hosting terminal

use serde::{Deserialize, Serialize};

/// Environment variable many terminals set to `"<fg>;<bg>"` ANSI color indices
pub const COLORFGBG_ENV: &str = "COLORFGBG";

/// Light or dark appearance of the host terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn toggled(self) -> Self {
        match self {
            ColorScheme::Light => ColorScheme::Dark,
            ColorScheme::Dark => ColorScheme::Light,
        }
    }

    /// Interpret a `COLORFGBG` value such as `"15;0"` or `"0;default;15"`.
    ///
    /// The last field is the background color index. Indices 0-6 and 8 are
    /// dark backgrounds; 7 and 9-15 are light.
    pub fn from_colorfgbg(value: &str) -> Option<Self> {
        let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        match bg {
            0..=6 | 8 => Some(ColorScheme::Dark),
            7 | 9..=15 => Some(ColorScheme::Light),
            _ => None,
        }
    }

    /// Read the scheme from the environment, if the terminal reports one
    pub fn detect() -> Option<Self> {
        let value = std::env::var(COLORFGBG_ENV).ok()?;
        let scheme = Self::from_colorfgbg(&value);
        tracing::debug!("{}={:?} -> {:?}", COLORFGBG_ENV, value, scheme);
        scheme
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

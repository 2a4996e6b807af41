//! Error correction levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// QR error correction level. Higher levels survive more damage but hold
/// less data per code.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum ErrorCorrection {
    /// ~7% recovery
    #[default]
    #[serde(alias = "l")]
    #[value(name = "L", alias = "l")]
    L,
    /// ~15% recovery
    #[serde(alias = "m")]
    #[value(name = "M", alias = "m")]
    M,
    /// ~25% recovery
    #[serde(alias = "q")]
    #[value(name = "Q", alias = "q")]
    Q,
    /// ~30% recovery
    #[serde(alias = "h")]
    #[value(name = "H", alias = "h")]
    H,
}

impl ErrorCorrection {
    /// Single-letter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(format!(
                "unknown error correction level '{}' (expected L, M, Q, or H)",
                s
            )),
        }
    }
}

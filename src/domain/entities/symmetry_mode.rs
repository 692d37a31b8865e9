use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Mirror mode selected by the command argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymmetryMode {
    /// Left half mirrored onto the right half.
    LeftRight,
    /// Top half mirrored onto the bottom half.
    TopBottom,
    /// Top-left quadrant rotated 180° onto the bottom-right quadrant.
    Center,
}

impl SymmetryMode {
    /// All modes, in display order.
    pub const ALL: [Self; 3] = [Self::LeftRight, Self::TopBottom, Self::Center];

    /// Accepted argument tokens for this mode.
    #[must_use]
    pub const fn synonyms(self) -> &'static [&'static str] {
        match self {
            Self::LeftRight => &["左右", "lr", "left", "左右对称"],
            Self::TopBottom => &["上下", "ud", "vertical", "updown", "上下对称"],
            Self::Center => &["中心", "center", "rot", "180", "中心对称"],
        }
    }

    /// Resolves an argument token, already lowercased by the caller.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.synonyms().contains(&token))
    }

    /// Short ASCII code used in logs.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::LeftRight => "lr",
            Self::TopBottom => "ud",
            Self::Center => "center",
        }
    }
}

impl std::fmt::Display for SymmetryMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when an argument matches no mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown symmetry mode: {0}")]
pub struct UnknownMode(pub String);

impl FromStr for SymmetryMode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        Self::from_token(&token).ok_or(UnknownMode(token))
    }
}

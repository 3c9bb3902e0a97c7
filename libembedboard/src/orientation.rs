//! Orientation detection
//!
//! Maps (URL, platform) to a coarse aspect-ratio hint used only to pick a
//! fallback display height. The rules are per-platform path checks; they are
//! recomputed from the stored URL on every render, never cached, so a rule
//! change retroactively applies to already-stored entries.

use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Coarse aspect-ratio hint for an embedded post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Tall content (shorts, reels, TikTok videos, pins)
    Portrait,
    /// Wide content (regular videos, text posts)
    Landscape,
    /// Square content (Instagram feed posts)
    Square,
    /// No rule matched the platform tag
    Unknown,
}

impl Orientation {
    /// Returns the lowercase orientation tag
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
            Self::Square => "square",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detect the display orientation for a post URL on a given platform
///
/// # Rules
///
/// - YouTube: `/shorts/` in the path is portrait, everything else landscape
/// - TikTok: always portrait
/// - Instagram: `/reel/` or `/reels/` is portrait, everything else square
/// - Pinterest: `/pin/` is portrait, boards and everything else landscape
/// - Twitter, Facebook, LinkedIn, Bluesky: landscape, no sub-rule
#[must_use]
pub fn detect_orientation(url: &str, platform: Platform) -> Orientation {
    match platform {
        Platform::YouTube => {
            if url.contains("/shorts/") {
                Orientation::Portrait
            } else {
                Orientation::Landscape
            }
        }
        Platform::TikTok => Orientation::Portrait,
        Platform::Instagram => {
            if url.contains("/reel/") || url.contains("/reels/") {
                Orientation::Portrait
            } else {
                Orientation::Square
            }
        }
        Platform::Pinterest => {
            if url.contains("/pin/") {
                Orientation::Portrait
            } else {
                Orientation::Landscape
            }
        }
        Platform::Twitter | Platform::Facebook | Platform::LinkedIn | Platform::Bluesky => {
            Orientation::Landscape
        }
    }
}

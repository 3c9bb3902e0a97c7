//! Platform detection
//!
//! This module provides utilities for detecting which social media platform a
//! post URL belongs to, based on substring matching against the host portion
//! of well-known platform domains.
//!
//! Detection is driven by an ordered rule table evaluated top to bottom, first
//! match wins. A URL that happens to contain more than one platform substring
//! resolves to whichever rule comes first in the table - this tie-break order
//! is part of the contract, not an accident.
//!
//! # Example
//!
//! ```
//! use libembedboard::platform::{detect_platform, Platform};
//!
//! let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
//! assert_eq!(detect_platform(url), Some(Platform::YouTube));
//!
//! assert_eq!(detect_platform("https://example.com/post/1"), None);
//! ```

use serde::{Deserialize, Serialize};

/// Social media platform that a post URL belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Twitter / X posts (twitter.com, x.com)
    Twitter,
    /// Instagram posts and reels (instagram.com)
    Instagram,
    /// YouTube videos and shorts (youtube.com, youtu.be)
    YouTube,
    /// TikTok videos (tiktok.com)
    TikTok,
    /// Facebook posts (facebook.com, fb.com)
    Facebook,
    /// LinkedIn posts (linkedin.com)
    LinkedIn,
    /// Pinterest pins and boards (pinterest.com)
    Pinterest,
    /// Bluesky posts (bsky.app, blueskyweb.xyz)
    Bluesky,
}

/// Ordered detection rules: (substrings, platform), first match wins.
///
/// Public so the tie-break order is a testable data structure rather than a
/// cascade of conditionals buried in a function body.
pub const DETECTION_RULES: &[(&[&str], Platform)] = &[
    (&["twitter.com", "x.com"], Platform::Twitter),
    (&["instagram.com"], Platform::Instagram),
    (&["youtube.com", "youtu.be"], Platform::YouTube),
    (&["tiktok.com"], Platform::TikTok),
    (&["facebook.com", "fb.com"], Platform::Facebook),
    (&["linkedin.com"], Platform::LinkedIn),
    (&["pinterest.com"], Platform::Pinterest),
    (&["bsky.app", "blueskyweb.xyz"], Platform::Bluesky),
];

impl Platform {
    /// Returns the lowercase platform tag (e.g. "twitter", "bluesky")
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::YouTube => "youtube",
            Self::TikTok => "tiktok",
            Self::Facebook => "facebook",
            Self::LinkedIn => "linkedin",
            Self::Pinterest => "pinterest",
            Self::Bluesky => "bluesky",
        }
    }

    /// Returns the human-readable platform name used in user-facing messages
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
            Self::TikTok => "TikTok",
            Self::Facebook => "Facebook",
            Self::LinkedIn => "LinkedIn",
            Self::Pinterest => "Pinterest",
            Self::Bluesky => "Bluesky",
        }
    }

    /// All supported platforms, in detection order
    #[must_use]
    pub fn all() -> impl Iterator<Item = Platform> {
        DETECTION_RULES.iter().map(|(_, platform)| *platform)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detect which platform a post URL belongs to
///
/// Matching is a plain substring check against the full URL string - no
/// path-grammar validation is performed (a deliberate looseness: an
/// Instagram URL with a nonsense path still classifies as Instagram).
///
/// # Returns
///
/// The first matching platform in [`DETECTION_RULES`] order, or `None` if
/// no rule matches.
#[must_use]
pub fn detect_platform(url: &str) -> Option<Platform> {
    for (needles, platform) in DETECTION_RULES {
        if needles.iter().any(|needle| url.contains(needle)) {
            return Some(*platform);
        }
    }
    None
}

/// Comma-separated list of supported platform names, in detection order
///
/// Used to build the unsupported-platform error message.
#[must_use]
pub fn supported_list() -> String {
    Platform::all()
        .map(|p| p.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}

//! Submission evaluation
//!
//! Turns the raw draft text from the input field into either an accepted
//! [`Submission`] or a [`SubmitError`] carrying the user-visible message.
//! Checks run in a fixed order: empty draft, URL well-formedness, platform
//! detection. Evaluation is synchronous and side-effect free; there is no
//! pending state, and a rejection never blocks the next attempt.

use url::Url;

use crate::error::SubmitError;
use crate::platform::{self, Platform};

/// A draft that passed validation and platform detection
///
/// The URL is stored exactly as typed (after the check, not normalized);
/// platform and orientation are recomputed from it at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The accepted URL, as entered
    pub url: String,
    /// Platform detected at submission time
    pub platform: Platform,
}

/// Check whether a string parses as an absolute URL
///
/// Syntax only - no network access, no existence check.
#[must_use]
pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

/// Evaluate a draft for submission
///
/// # Errors
///
/// - [`SubmitError::EmptyInput`] if the draft is empty or whitespace-only
/// - [`SubmitError::MalformedUrl`] if the draft is not an absolute URL
/// - [`SubmitError::UnsupportedPlatform`] if no platform rule matches;
///   the message lists all eight supported platform names
pub fn classify_submission(draft: &str) -> Result<Submission, SubmitError> {
    if draft.trim().is_empty() {
        return Err(SubmitError::EmptyInput);
    }

    if !is_valid_url(draft) {
        return Err(SubmitError::MalformedUrl);
    }

    let platform =
        platform::detect_platform(draft).ok_or_else(|| {
            SubmitError::UnsupportedPlatform(platform::supported_list())
        })?;

    tracing::debug!(url = draft, platform = platform.as_str(), "submission accepted");

    Ok(Submission {
        url: draft.to_string(),
        platform,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_url_accepts_absolute_urls() {
        assert!(is_valid_url("https://twitter.com/user/status/1"));
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("ftp://host/file"));
    }

    #[test]
    fn test_is_valid_url_rejects_relative_and_garbage() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url("/just/a/path"));
        assert!(!is_valid_url("twitter.com/user"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_empty_draft_is_rejected() {
        assert_eq!(classify_submission(""), Err(SubmitError::EmptyInput));
        assert_eq!(classify_submission("   \t  "), Err(SubmitError::EmptyInput));
    }

    #[test]
    fn test_malformed_url_is_rejected() {
        assert_eq!(
            classify_submission("not a url"),
            Err(SubmitError::MalformedUrl)
        );
    }

    #[test]
    fn test_valid_url_without_platform_is_unsupported() {
        let result = classify_submission("https://example.com/post/1");
        match result {
            Err(SubmitError::UnsupportedPlatform(list)) => {
                for name in [
                    "Twitter",
                    "Instagram",
                    "YouTube",
                    "TikTok",
                    "Facebook",
                    "LinkedIn",
                    "Pinterest",
                    "Bluesky",
                ] {
                    assert!(list.contains(name));
                }
            }
            other => panic!("Expected UnsupportedPlatform, got {:?}", other),
        }
    }

    #[test]
    fn test_accepted_submission_keeps_url_verbatim() {
        let url = "https://www.instagram.com/reel/abc123";
        let submission = classify_submission(url).unwrap();
        assert_eq!(submission.url, url);
        assert_eq!(submission.platform, Platform::Instagram);
    }

    #[test]
    fn test_checks_run_in_order() {
        // An empty draft reports EmptyInput even though it is also not a URL
        assert_eq!(classify_submission(""), Err(SubmitError::EmptyInput));
        // A malformed draft reports MalformedUrl even if it names a platform
        assert_eq!(
            classify_submission("twitter.com/user/status/1"),
            Err(SubmitError::MalformedUrl)
        );
    }

    #[test]
    fn test_bluesky_url_is_accepted() {
        let submission = classify_submission("https://bsky.app/profile/x/post/1").unwrap();
        assert_eq!(submission.platform, Platform::Bluesky);
    }
}

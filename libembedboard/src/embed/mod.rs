//! Embed dispatch
//!
//! For each stored URL this module recomputes platform and orientation,
//! derives a display height, and routes the result to a platform-specific
//! [`EmbedRenderer`]. The renderer is the external collaborator that actually
//! fetches and displays content; from the core's perspective the call is
//! fire-and-forget, and renderer failures are logged but never surfaced.

use serde::Serialize;

use crate::config::HeightsConfig;
use crate::error::Result;
use crate::orientation::{self, Orientation};
use crate::platform::{self, Platform};

pub mod mock;

/// Width passed to every renderer: fill the container
pub const FULL_WIDTH_PERCENT: u8 = 100;

/// What gets handed to a renderer for one embed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedRequest {
    pub url: String,
    /// Percentage of the container width
    pub width_percent: u8,
    /// Fallback display height in pixels, tuned to the inferred orientation
    pub height: u16,
}

/// Fully computed dispatch decision for one stored URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedPlan {
    /// Platform the URL classified as
    pub platform: Platform,
    /// Orientation inferred from the URL shape
    pub orientation: Orientation,
    /// Renderer the request is routed to (Bluesky routes to Twitter)
    pub target: Platform,
    pub request: EmbedRequest,
}

/// Capability interface for the external embed-rendering collaborator
///
/// Implementations own all network fetching, markup and failure presentation.
/// The core only selects the target and hands over the request.
pub trait EmbedRenderer {
    /// Render the embed for `target` with the given request
    fn render(&self, target: Platform, request: &EmbedRequest) -> Result<()>;

    /// Renderer name for logging
    fn name(&self) -> &str;
}

/// Pick the renderer a platform routes to
///
/// Bluesky has no dedicated renderer and is routed to the Twitter-style one
/// as an accepted approximation. Every other platform routes to itself.
#[must_use]
pub fn render_target(platform: Platform) -> Platform {
    match platform {
        Platform::Bluesky => Platform::Twitter,
        other => other,
    }
}

/// Derive the fallback display height for an orientation
///
/// Portrait content gets the tallest box, square a medium one, and
/// landscape or unknown the shortest.
#[must_use]
pub fn display_height(orientation: Orientation, heights: &HeightsConfig) -> u16 {
    match orientation {
        Orientation::Portrait => heights.portrait,
        Orientation::Square => heights.square,
        Orientation::Landscape | Orientation::Unknown => heights.landscape,
    }
}

/// Compute the dispatch plan for a stored URL
///
/// Recomputed from scratch on every display. Returns `None` when the URL no
/// longer matches any platform rule (possible if the rule table changed after
/// the entry was stored).
#[must_use]
pub fn embed_plan(url: &str, heights: &HeightsConfig) -> Option<EmbedPlan> {
    let platform = platform::detect_platform(url)?;
    let orientation = orientation::detect_orientation(url, platform);

    Some(EmbedPlan {
        platform,
        orientation,
        target: render_target(platform),
        request: EmbedRequest {
            url: url.to_string(),
            width_percent: FULL_WIDTH_PERCENT,
            height: display_height(orientation, heights),
        },
    })
}

/// Plan and route one stored URL to a renderer
///
/// Renderer failures (network errors, broken widgets) are invisible to the
/// caller: they are logged and the plan is still returned, matching the
/// fire-and-forget contract.
pub fn dispatch(
    renderer: &dyn EmbedRenderer,
    url: &str,
    heights: &HeightsConfig,
) -> Option<EmbedPlan> {
    let plan = embed_plan(url, heights)?;

    if let Err(e) = renderer.render(plan.target, &plan.request) {
        tracing::warn!(
            renderer = renderer.name(),
            target = plan.target.as_str(),
            url,
            error = %e,
            "embed renderer failed"
        );
    }

    Some(plan)
}

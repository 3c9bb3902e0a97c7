//! Mock renderer for testing
//!
//! Records every render call so tests can verify routing decisions without
//! a real widget library or network access, and can be configured to fail
//! to exercise the fire-and-forget error path.

use std::sync::{Arc, Mutex};

use crate::error::{BoardError, Result};
use crate::platform::Platform;

use super::{EmbedRenderer, EmbedRequest};

/// Configurable mock embed renderer
pub struct MockRenderer {
    name: String,
    succeeds: bool,
    error: Option<String>,
    calls: Arc<Mutex<Vec<(Platform, EmbedRequest)>>>,
}

impl MockRenderer {
    /// Create a mock renderer that always succeeds
    pub fn success(name: &str) -> Self {
        Self {
            name: name.to_string(),
            succeeds: true,
            error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock renderer that fails every render call
    pub fn failure(name: &str, error: &str) -> Self {
        Self {
            name: name.to_string(),
            succeeds: false,
            error: Some(error.to_string()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All (target, request) pairs seen so far, in call order
    pub fn calls(&self) -> Vec<(Platform, EmbedRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

impl EmbedRenderer for MockRenderer {
    fn render(&self, target: Platform, request: &EmbedRequest) -> Result<()> {
        self.calls.lock().unwrap().push((target, request.clone()));

        if self.succeeds {
            Ok(())
        } else {
            Err(BoardError::Render(
                self.error
                    .clone()
                    .unwrap_or_else(|| "mock render failure".to_string()),
            ))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::FULL_WIDTH_PERCENT;

    fn request(url: &str) -> EmbedRequest {
        EmbedRequest {
            url: url.to_string(),
            width_percent: FULL_WIDTH_PERCENT,
            height: 400,
        }
    }

    #[test]
    fn test_success_renderer_records_calls() {
        let renderer = MockRenderer::success("mock");
        let req = request("https://twitter.com/u/status/1");

        renderer.render(Platform::Twitter, &req).unwrap();
        renderer.render(Platform::YouTube, &req).unwrap();

        let calls = renderer.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, Platform::Twitter);
        assert_eq!(calls[1].0, Platform::YouTube);
    }

    #[test]
    fn test_failure_renderer_returns_error_but_records_call() {
        let renderer = MockRenderer::failure("mock", "no widget");
        let result = renderer.render(Platform::Twitter, &request("https://x.com/u/status/1"));

        assert!(result.is_err());
        assert_eq!(renderer.calls().len(), 1);
    }

    #[test]
    fn test_renderer_name() {
        let renderer = MockRenderer::success("card-renderer");
        assert_eq!(renderer.name(), "card-renderer");
    }
}

//! Analysis service
//!
//! Wraps an optional [`TextGenerator`]. [`AnalysisService::analyze`] never
//! fails: every problem is logged and answered with the canned payload.

use crate::error::AnalysisError;
use crate::prompt::render_prompt;
use crate::reply::interpret_reply;
use crate::types::{AnalysisRequest, AnalysisResponse};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// An external text-generation backend
///
/// Implementations own their transport and credentials. The service only
/// hands over a prompt and reads back text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce a reply for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError>;

    /// Short name used in logs
    fn name(&self) -> &str {
        "text-generator"
    }
}

/// Analysis front door
#[derive(Clone, Default)]
pub struct AnalysisService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl fmt::Debug for AnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisService")
            .field("generator", &self.generator.as_ref().map(|g| g.name()))
            .finish()
    }
}

impl AnalysisService {
    /// Service with no backend; every call returns the fallback
    #[inline]
    #[must_use]
    pub fn offline() -> Self {
        Self::default()
    }

    /// Service backed by `generator`
    #[inline]
    #[must_use]
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Whether a backend is configured
    #[inline]
    #[must_use]
    pub fn is_online(&self) -> bool {
        self.generator.is_some()
    }

    /// Analyze a raw JSON request body
    ///
    /// A body that is not JSON is logged and answered with the fallback
    /// carrying [`FALLBACK_ERROR`](crate::FALLBACK_ERROR).
    ///
    /// # Errors
    /// Returns [`AnalysisError::InvalidRequest`] when the body is JSON without
    /// a `logs` array.
    pub async fn analyze_body(&self, body: &str) -> Result<AnalysisResponse, AnalysisError> {
        match AnalysisRequest::from_json(body) {
            Ok(request) => Ok(self.analyze(&request).await),
            Err(AnalysisError::MalformedBody(e)) => {
                tracing::error!("Analysis failed: unreadable request body: {}", e);
                Ok(AnalysisResponse::fallback_with_error())
            }
            Err(e) => Err(e),
        }
    }

    /// Analyze a request
    ///
    /// # Outcomes
    /// - no backend: fallback
    /// - backend error: fallback with [`FALLBACK_ERROR`](crate::FALLBACK_ERROR)
    /// - unreadable reply: fallback
    /// - otherwise the interpreted reply
    pub async fn analyze(&self, request: &AnalysisRequest) -> AnalysisResponse {
        let Some(generator) = &self.generator else {
            tracing::warn!("No text generator configured, serving fallback analysis");
            return AnalysisResponse::fallback();
        };

        tracing::info!("Analyzing {} records with {}", request.logs.len(), generator.name());
        let prompt = render_prompt(&request.logs);

        let reply = match generator.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Analysis failed: {}", e);
                return AnalysisResponse::fallback_with_error();
            }
        };

        match interpret_reply(&reply) {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Serving fallback analysis: {}", e);
                AnalysisResponse::fallback()
            }
        }
    }
}

//! Request and response payloads
//!
//! Field names follow the JSON contract (camelCase) so the payloads can be
//! exchanged with the page verbatim.

use crate::error::AnalysisError;
use fatigue_corpus::{Corpus, LogRecord};
use serde::{Deserialize, Serialize};

/// Records sent for analysis by default
pub const SAMPLE_LIMIT: usize = 200;

/// `{ "logs": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Records to analyze
    pub logs: Vec<LogRecord>,
}

impl AnalysisRequest {
    /// Request for the first [`SAMPLE_LIMIT`] records of a corpus
    #[must_use]
    pub fn from_corpus(corpus: &Corpus) -> Self {
        Self {
            logs: corpus.sample(SAMPLE_LIMIT).to_vec(),
        }
    }

    /// Parse a JSON request body
    ///
    /// # Errors
    /// Returns [`AnalysisError::MalformedBody`] when the body is not JSON and
    /// [`AnalysisError::InvalidRequest`] when it is JSON but not an object
    /// with a `logs` array of records.
    pub fn from_json(body: &str) -> Result<Self, AnalysisError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| AnalysisError::MalformedBody(e.to_string()))?;
        serde_json::from_value(value).map_err(|e| AnalysisError::InvalidRequest(e.to_string()))
    }
}

/// Overall incident severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// Severity of a single annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationSeverity {
    Error,
    Warning,
    Info,
}

/// A note pinned to one service in the diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Service the note belongs to
    pub service: String,
    /// Note text
    pub message: String,
    /// How bad it is
    pub severity: AnnotationSeverity,
}

impl Annotation {
    /// Create an annotation
    #[must_use]
    pub fn new(service: impl Into<String>, message: impl Into<String>, severity: AnnotationSeverity) -> Self {
        Self {
            service: service.into(),
            message: message.into(),
            severity,
        }
    }
}

/// Root-cause summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    /// One-line root cause
    pub root_cause: String,
    /// Services on the failure path
    pub affected_services: Vec<String>,
    /// Overall severity
    pub severity: Severity,
    /// Per-service notes
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

/// `{ diagram, analysis, fallback?, error? }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    /// Flowchart description
    pub diagram: String,
    /// Root-cause summary
    pub analysis: Analysis,
    /// Set when the canned payload was served
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    /// Set when the canned payload replaced a failed call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisResponse {
    /// True when this is the canned payload
    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.fallback.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_uses_camel_case_and_skips_absent_flags() {
        let response = AnalysisResponse {
            diagram: "flowchart LR".to_string(),
            analysis: Analysis {
                root_cause: "x".to_string(),
                affected_services: vec!["a".to_string()],
                severity: Severity::Low,
                annotations: vec![],
            },
            fallback: None,
            error: None,
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["analysis"]["rootCause"], "x");
        assert_eq!(value["analysis"]["affectedServices"][0], "a");
        assert_eq!(value["analysis"]["severity"], "low");
        assert!(value.get("fallback").is_none());
        assert!(value.get("error").is_none());
    }

    #[test]
    fn request_requires_logs_array() {
        assert!(matches!(
            AnalysisRequest::from_json(r#"{"logs": 3}"#),
            Err(AnalysisError::InvalidRequest(_))
        ));
        assert!(matches!(AnalysisRequest::from_json("{}"), Err(AnalysisError::InvalidRequest(_))));
        assert_eq!(AnalysisRequest::from_json(r#"{"logs": []}"#).unwrap().logs.len(), 0);
    }

    #[test]
    fn syntax_error_is_not_an_invalid_request() {
        assert!(matches!(
            AnalysisRequest::from_json("{not json"),
            Err(AnalysisError::MalformedBody(_))
        ));
        assert!(matches!(AnalysisRequest::from_json(""), Err(AnalysisError::MalformedBody(_))));
    }

    #[test]
    fn from_corpus_takes_sample() {
        let corpus = fatigue_corpus::shared();
        let request = AnalysisRequest::from_corpus(corpus);
        assert_eq!(request.logs.len(), SAMPLE_LIMIT);
        assert_eq!(request.logs[0].id, 0);
    }
}

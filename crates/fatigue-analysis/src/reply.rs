//! Interpreting the text generator's reply

use crate::error::AnalysisError;
use crate::types::{Analysis, AnalysisResponse, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

static MERMAID_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```mermaid\n([\s\S]*?)```").expect("mermaid block pattern compiles"));

/// Turn a raw reply into a response
///
/// A JSON payload is taken as is. Failing that, a fenced `mermaid` block is
/// used as the diagram with a generic summary.
///
/// # Errors
/// [`AnalysisError::Unparseable`] when the reply holds neither.
pub fn interpret_reply(text: &str) -> Result<AnalysisResponse, AnalysisError> {
    if let Ok(response) = serde_json::from_str::<AnalysisResponse>(text.trim()) {
        return Ok(response);
    }

    let diagram = MERMAID_BLOCK
        .captures(text)
        .and_then(|c| c.get(1))
        .ok_or(AnalysisError::Unparseable)?;

    tracing::debug!("Reply was not JSON, extracted diagram block");
    Ok(AnalysisResponse {
        diagram: diagram.as_str().to_string(),
        analysis: Analysis {
            root_cause: "Analysis extracted from logs".to_string(),
            affected_services: Vec::new(),
            severity: Severity::High,
            annotations: Vec::new(),
        },
        fallback: None,
        error: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_reply() {
        let reply = r#"{
            "diagram": "flowchart LR\n A --> B",
            "analysis": {
                "rootCause": "db down",
                "affectedServices": ["order-service"],
                "severity": "high",
                "annotations": [{"service": "order-service", "message": "503", "severity": "error"}]
            }
        }"#;
        let response = interpret_reply(reply).unwrap();
        assert_eq!(response.analysis.root_cause, "db down");
        assert_eq!(response.analysis.annotations.len(), 1);
        assert!(!response.is_fallback());
    }

    #[test]
    fn mermaid_block_reply() {
        let reply = "Here you go:\n```mermaid\nflowchart LR\n  A --> B\n```\nThanks";
        let response = interpret_reply(reply).unwrap();
        assert_eq!(response.diagram, "flowchart LR\n  A --> B\n");
        assert_eq!(response.analysis.severity, Severity::High);
        assert!(response.analysis.affected_services.is_empty());
    }

    #[test]
    fn prose_reply_is_unparseable() {
        assert_eq!(interpret_reply("I think the gateway timed out."), Err(AnalysisError::Unparseable));
    }

    #[test]
    fn json_with_unknown_severity_falls_through() {
        let reply = r#"{"diagram": "x", "analysis": {"rootCause": "y", "affectedServices": [], "severity": "apocalyptic"}}"#;
        assert_eq!(interpret_reply(reply), Err(AnalysisError::Unparseable));
    }
}

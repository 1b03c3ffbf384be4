//! Canned payload served whenever a live analysis is unavailable

use crate::types::{Analysis, AnalysisResponse, Annotation, AnnotationSeverity, Severity};

/// Message attached when the fallback replaces a failed call
pub const FALLBACK_ERROR: &str = "Analysis failed, showing demo data";

const FALLBACK_DIAGRAM: &str = "flowchart LR
    subgraph Frontend
        FE[frontend]
    end

    subgraph Services
        CS[checkout-service]
        PG[payment-gateway]:::error
        AS[auth-service]
        IS[inventory-service]
    end

    subgraph Data
        DB[(postgres)]
        REDIS[(redis)]
    end

    subgraph External
        STRIPE[stripe-api]:::error
    end

    FE --> CS
    CS --> PG
    CS --> AS
    CS --> IS
    CS --> DB
    CS --> REDIS
    PG --> STRIPE

    classDef error fill:#f85149,stroke:#f85149,color:#fff

    linkStyle 1 stroke:#f85149,stroke-width:3px
    linkStyle 6 stroke:#f85149,stroke-width:3px";

/// The canned flowchart
#[must_use]
pub fn fallback_diagram() -> String {
    FALLBACK_DIAGRAM.to_string()
}

/// The canned root-cause summary
#[must_use]
pub fn fallback_analysis() -> Analysis {
    Analysis {
        root_cause: "Payment gateway timeout due to upstream Stripe API failure".to_string(),
        affected_services: ["checkout-service", "payment-gateway", "stripe-api"]
            .map(String::from)
            .to_vec(),
        severity: Severity::Critical,
        annotations: vec![
            Annotation::new("payment-gateway", "3 retry attempts failed", AnnotationSeverity::Error),
            Annotation::new(
                "payment-gateway",
                "Response time: 30,000ms (timeout)",
                AnnotationSeverity::Error,
            ),
            Annotation::new("checkout-service", "Connection pool exhausted", AnnotationSeverity::Warning),
            Annotation::new("stripe-api", "Upstream dependency unavailable", AnnotationSeverity::Error),
        ],
    }
}

impl AnalysisResponse {
    /// Canned payload, flagged `fallback: true`
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            diagram: fallback_diagram(),
            analysis: fallback_analysis(),
            fallback: Some(true),
            error: None,
        }
    }

    /// Canned payload carrying [`FALLBACK_ERROR`]
    #[must_use]
    pub fn fallback_with_error() -> Self {
        Self {
            error: Some(FALLBACK_ERROR.to_string()),
            ..Self::fallback()
        }
    }
}

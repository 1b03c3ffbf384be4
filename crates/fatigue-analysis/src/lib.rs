//! Alert Fatigue Analysis
//!
//! The contract between the corpus and an external root-cause analyzer:
//! - **AnalysisRequest / AnalysisResponse**: JSON payloads
//! - **render_prompt**: what the analyzer is asked
//! - **interpret_reply**: JSON or fenced diagram extraction
//! - **AnalysisService**: degrades to a canned payload on any failure
//!
//! # Example
//!
//! ```rust
//! use fatigue_analysis::{AnalysisRequest, AnalysisService};
//!
//! # async fn example() {
//! let corpus = fatigue_corpus::shared();
//! let service = AnalysisService::offline();
//! let response = service.analyze(&AnalysisRequest::from_corpus(corpus)).await;
//! assert!(response.is_fallback());
//! # }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod error;
pub mod fallback;
pub mod prompt;
pub mod reply;
pub mod service;
pub mod types;

// Re-exports
pub use error::AnalysisError;
pub use fallback::{fallback_analysis, fallback_diagram, FALLBACK_ERROR};
pub use prompt::render_prompt;
pub use reply::interpret_reply;
pub use service::{AnalysisService, TextGenerator};
pub use types::{
    Analysis, AnalysisRequest, AnalysisResponse, Annotation, AnnotationSeverity, Severity,
    SAMPLE_LIMIT,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Alert Fatigue Corpus
//!
//! A deterministic synthetic incident: 1000 heterogeneous log records spread
//! over a two-hour window, with one record (id 847) carrying the root cause
//! and a cluster of near-miss decoys around it.
//!
//! # Pipeline
//!
//! - **SeededStream**: call-local mulberry32 stream
//! - **fill_template**: placeholder substitution
//! - **LineFormat**: five physical line syntaxes
//! - **classify**: category precedence rules
//! - **generate**: the assembler
//!
//! # Example
//!
//! ```rust
//! use fatigue_corpus::{generate_default, Category};
//!
//! let corpus = generate_default();
//! corpus.verify().unwrap();
//!
//! let hits = corpus.search("payment-gateway");
//! assert!(hits.iter().any(|r| r.id == 847));
//!
//! let groups = corpus.group_by_category();
//! assert_eq!(groups.total(), corpus.len());
//! assert!(!groups.get(Category::K8s).is_empty());
//! ```

pub mod cache;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod query;
pub mod record;
pub mod rng;
pub mod template;

// Re-exports
pub use cache::shared;
pub use catalog::ANSWER_ID;
pub use classify::classify;
pub use config::CorpusConfig;
pub use corpus::{format_timestamp, generate, generate_default, Corpus, CORPUS_SIZE, WINDOW_MS};
pub use error::{ConfigError, CorpusError};
pub use format::{Line, LineFormat};
pub use query::{find_answer, group_by_category, level_histogram, search, significant_events, CategoryGroups};
pub use record::{Category, Level, LogRecord};
pub use rng::{SeededStream, DEFAULT_SEED};
pub use template::{fill_template, Placeholder};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the corpus
    pub use crate::{
        generate, generate_default, shared, Category, Corpus, CorpusConfig, Level, LogRecord,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

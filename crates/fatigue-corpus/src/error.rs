//! Error types for the corpus
//!
//! Generation itself is total. These errors describe contract violations found
//! by [`Corpus::verify`](crate::Corpus::verify) and configuration problems.

use std::path::PathBuf;

/// Corpus contract violations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorpusError {
    /// Record count differs from the fixed corpus size
    #[error("expected {expected} records, found {actual}")]
    WrongCount {
        /// Required size
        expected: usize,
        /// Observed size
        actual: usize,
    },

    /// A record's id does not match its position
    #[error("record at position {position} has id {id}")]
    IdGap {
        /// Position in the sequence
        position: usize,
        /// Id found there
        id: usize,
    },

    /// Timestamps went backwards
    #[error("timestamp regression at id {id}: {previous} > {current}")]
    TimestampRegression {
        /// Offending record
        id: usize,
        /// Timestamp of the record before it
        previous: String,
        /// Its own timestamp
        current: String,
    },

    /// No record carries the answer id
    #[error("answer record {0} is missing")]
    AnswerMissing(usize),

    /// The answer slot holds something else
    #[error("answer record {id} does not carry the root cause: {reason}")]
    AnswerMismatch {
        /// Answer id
        id: usize,
        /// What differs
        reason: String,
    },
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("cannot read config {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// The config text is not valid TOML for [`CorpusConfig`](crate::CorpusConfig)
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

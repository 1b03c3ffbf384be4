//! Log record types
//!
//! [`LogRecord`] is the only entity in the corpus. Records are created once by
//! the assembler and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Severity of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    /// Verbose diagnostics
    Debug,
    /// Normal operation
    Info,
    /// Degraded but working
    Warn,
    /// Failure
    Error,
}

impl Level {
    /// All levels, least to most severe
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    /// Upper-case name (`DEBUG`, `INFO`, ...)
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Lower-case name, used by the key=value line format
    #[inline]
    #[must_use]
    pub const fn as_lower(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        }
    }

    /// Single lower-case letter, used by the k8s-short line format
    #[inline]
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Level::Debug => 'd',
            Level::Info => 'i',
            Level::Warn => 'w',
            Level::Error => 'e',
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping bucket assigned to every record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Kubernetes control plane and pod lifecycle
    K8s,
    /// Application chatter that matches nothing more specific
    App,
    /// Authentication and sessions
    Auth,
    /// Database and connection pools
    Database,
    /// Request/response traffic
    Http,
    /// Host resources
    System,
}

impl Category {
    /// All categories in bucket order
    pub const ALL: [Category; 6] = [
        Category::K8s,
        Category::App,
        Category::Auth,
        Category::Database,
        Category::Http,
        Category::System,
    ];

    /// Lower-case name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::K8s => "k8s",
            Category::App => "app",
            Category::Auth => "auth",
            Category::Database => "database",
            Category::Http => "http",
            Category::System => "system",
        }
    }

    /// Position in [`Category::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// One generated log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Position in the corpus, doubles as the line number
    pub id: usize,
    /// `YYYY-MM-DD HH:MM:SS.mmmZ`
    pub timestamp: String,
    /// Severity
    pub level: Level,
    /// Emitting service
    pub service: String,
    /// Filled message text
    pub message: String,
    /// The message rendered in one of the physical line formats
    pub raw: String,
    /// Grouping bucket
    pub category: Category,
}

impl LogRecord {
    /// Whether this record mentions `needle` (case-insensitive) in its raw
    /// line, message or service
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.raw.to_lowercase().contains(&needle)
            || self.message.to_lowercase().contains(&needle)
            || self.service.to_lowercase().contains(&needle)
    }
}

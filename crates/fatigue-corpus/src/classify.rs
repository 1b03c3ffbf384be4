//! Category classifier
//!
//! First match wins: k8s, auth, database, http, system, then app. Keyword
//! matching is case-sensitive.

use crate::catalog::K8S_SERVICES;
use crate::record::Category;

const AUTH_SERVICE: &str = "auth-service";

const K8S_KEYWORDS: [&str; 2] = ["Pod", "Container"];
const AUTH_KEYWORDS: [&str; 3] = ["auth", "login", "session"];
const DATABASE_KEYWORDS: [&str; 3] = ["database", "query", "connection pool"];
const HTTP_KEYWORDS: [&str; 3] = ["Request", "status=", "endpoint"];
const SYSTEM_KEYWORDS: [&str; 3] = ["memory", "CPU", "disk"];

fn mentions(message: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| message.contains(k))
}

/// Classify a record from its service and message
///
/// # Example
/// ```
/// use fatigue_corpus::{classify, Category};
///
/// assert_eq!(classify("auth-service", "Token validated for user-123"), Category::Auth);
/// assert_eq!(
///     classify("checkout-service", "Database connection pool exhausted"),
///     Category::Database
/// );
/// ```
#[must_use]
pub fn classify(service: &str, message: &str) -> Category {
    if K8S_SERVICES.contains(&service) || mentions(message, &K8S_KEYWORDS) {
        Category::K8s
    } else if service == AUTH_SERVICE || mentions(message, &AUTH_KEYWORDS) {
        Category::Auth
    } else if mentions(message, &DATABASE_KEYWORDS) {
        Category::Database
    } else if mentions(message, &HTTP_KEYWORDS) {
        Category::Http
    } else if mentions(message, &SYSTEM_KEYWORDS) {
        Category::System
    } else {
        Category::App
    }
}

//! Process-wide reference corpus
//!
//! Built on first access and shared read-only afterwards.

use crate::corpus::{generate_default, Corpus};
use once_cell::sync::Lazy;

static SHARED: Lazy<Corpus> = Lazy::new(|| {
    tracing::debug!("Building shared reference corpus");
    generate_default()
});

/// The reference corpus (seed 42), generated once per process
#[must_use]
pub fn shared() -> &'static Corpus {
    &SHARED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_is_built_once() {
        assert!(std::ptr::eq(shared(), shared()));
    }

    #[test]
    fn shared_matches_fresh_generation() {
        assert_eq!(*shared(), generate_default());
    }
}

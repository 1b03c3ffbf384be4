//! Read-only queries over a record slice
//!
//! None of these draw randomness or allocate new records; results borrow from
//! the input.

use crate::catalog::{ANSWER_ID, SIGNIFICANT_IDS};
use crate::record::{Category, Level, LogRecord};
use std::collections::HashSet;

/// Maximum number of significant events reported
pub const SIGNIFICANT_LIMIT: usize = 5;

const SIGNIFICANT_ERRORS: usize = 3;
const SIGNIFICANT_POOL_WARNINGS: usize = 2;

/// Case-insensitive substring search over raw line, message and service
///
/// A blank query returns every record.
#[must_use]
pub fn search<'a>(records: &'a [LogRecord], query: &str) -> Vec<&'a LogRecord> {
    if query.trim().is_empty() {
        return records.iter().collect();
    }
    records.iter().filter(|r| r.matches(query)).collect()
}

/// The answer record, if present
#[must_use]
pub fn find_answer(records: &[LogRecord]) -> Option<&LogRecord> {
    records.iter().find(|r| r.id == ANSWER_ID)
}

/// Records partitioned by category
///
/// Every category has a bucket, possibly empty. Records keep their relative
/// order inside a bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryGroups<'a> {
    buckets: [Vec<&'a LogRecord>; 6],
}

impl<'a> CategoryGroups<'a> {
    /// Records in one bucket
    #[must_use]
    pub fn get(&self, category: Category) -> &[&'a LogRecord] {
        &self.buckets[category.index()]
    }

    /// Buckets in [`Category::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[&'a LogRecord])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |c| (c, self.buckets[c.index()].as_slice()))
    }

    /// Sum of all bucket sizes
    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

/// Partition records into the six category buckets
#[must_use]
pub fn group_by_category(records: &[LogRecord]) -> CategoryGroups<'_> {
    let mut groups = CategoryGroups::default();
    for record in records {
        groups.buckets[record.category.index()].push(record);
    }
    groups
}

/// Records worth surfacing first
///
/// The pinned ids in corpus order, then the earliest errors, then the earliest
/// warnings about pools; deduplicated and capped at [`SIGNIFICANT_LIMIT`].
#[must_use]
pub fn significant_events(records: &[LogRecord]) -> Vec<&LogRecord> {
    let pinned = records.iter().filter(|r| SIGNIFICANT_IDS.contains(&r.id));
    let errors = records
        .iter()
        .filter(|r| r.level == Level::Error)
        .take(SIGNIFICANT_ERRORS);
    let pool_warnings = records
        .iter()
        .filter(|r| r.level == Level::Warn && r.message.contains("pool"))
        .take(SIGNIFICANT_POOL_WARNINGS);

    let mut seen = HashSet::new();
    pinned
        .chain(errors)
        .chain(pool_warnings)
        .filter(|r| seen.insert(r.id))
        .take(SIGNIFICANT_LIMIT)
        .collect()
}

/// Count of records per level, in [`Level::ALL`] order
#[must_use]
pub fn level_histogram(records: &[LogRecord]) -> [(Level, usize); 4] {
    Level::ALL.map(|level| (level, records.iter().filter(|r| r.level == level).count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: usize, level: Level, service: &str, message: &str, category: Category) -> LogRecord {
        LogRecord {
            id,
            timestamp: format!("2024-12-20 03:00:{:02}.000Z", id % 60),
            level,
            service: service.to_string(),
            message: message.to_string(),
            raw: format!("{level} [{service}] {message}"),
            category,
        }
    }

    fn fixture() -> Vec<LogRecord> {
        vec![
            record(0, Level::Info, "auth-service", "Session created", Category::Auth),
            record(1, Level::Error, "order-service", "Timeout waiting", Category::App),
            record(2, Level::Warn, "payment-gateway", "Connection pool running low", Category::App),
            record(3, Level::Debug, "etcd", "Pulling image", Category::K8s),
            record(4, Level::Error, "checkout-service", "Circuit breaker opened", Category::App),
        ]
    }

    #[test]
    fn blank_query_returns_everything() {
        let records = fixture();
        assert_eq!(search(&records, "   ").len(), records.len());
    }

    #[test]
    fn search_is_case_insensitive_over_service() {
        let records = fixture();
        let hits = search(&records, "PAYMENT");
        assert_eq!(hits.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn groups_keep_every_key() {
        let records = fixture();
        let groups = group_by_category(&records);
        assert!(groups.get(Category::System).is_empty());
        assert_eq!(groups.iter().count(), 6);
        assert_eq!(groups.total(), records.len());
        let app: Vec<usize> = groups.get(Category::App).iter().map(|r| r.id).collect();
        assert_eq!(app, vec![1, 2, 4]);
    }

    #[test]
    fn significant_dedupes_and_orders() {
        let records = fixture();
        let ids: Vec<usize> = significant_events(&records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 4, 2]);
    }

    #[test]
    fn histogram_counts_levels() {
        let records = fixture();
        let hist = level_histogram(&records);
        assert_eq!(hist, [(Level::Debug, 1), (Level::Info, 1), (Level::Warn, 1), (Level::Error, 2)]);
    }

    #[test]
    fn no_answer_in_fixture() {
        assert!(find_answer(&fixture()).is_none());
    }
}

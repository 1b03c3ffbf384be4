//! Corpus assembler
//!
//! Drives the stream, template engine, line formats and classifier to build
//! the fixed-size incident corpus. Each call owns a fresh [`SeededStream`], so
//! concurrent or repeated generations never disturb each other.

use crate::catalog::{
    templates_for, ANSWER_ID, ANSWER_MESSAGE, ANSWER_SERVICE, DECOYS, DECOY_WINDOW, K8S_SERVICES,
    K8S_TEMPLATES, LEVEL_WEIGHTS, SERVICES,
};
use crate::classify::classify;
use crate::config::CorpusConfig;
use crate::error::CorpusError;
use crate::format::{Line, LineFormat};
use crate::query::{self, CategoryGroups};
use crate::record::{Category, Level, LogRecord};
use crate::rng::SeededStream;
use crate::template::fill_template;
use chrono::{DateTime, Duration, Utc};

/// Records per corpus
pub const CORPUS_SIZE: usize = 1000;

/// Length of the synthetic incident window
pub const WINDOW_MS: i64 = 2 * 60 * 60 * 1000;

/// Upper bound (inclusive) of the per-record jitter
pub const MAX_JITTER_MS: i64 = 999;

/// A k8s record is emitted when `next_int(0, K8S_ODDS) == 0`
const K8S_ODDS: i64 = 10;

const SPACING_MS: i64 = WINDOW_MS / CORPUS_SIZE as i64;

/// Format a timestamp as `YYYY-MM-DD HH:MM:SS.mmmZ`
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S%.3fZ").to_string()
}

/// Generate the corpus for `config`
///
/// # Example
/// ```
/// use fatigue_corpus::{generate, CorpusConfig};
///
/// let corpus = generate(&CorpusConfig::default());
/// assert_eq!(corpus.len(), 1000);
/// assert_eq!(corpus.answer().unwrap().service, "checkout-service");
/// ```
#[must_use]
pub fn generate(config: &CorpusConfig) -> Corpus {
    let mut stream = SeededStream::new(config.seed);
    let records: Vec<LogRecord> = (0..CORPUS_SIZE)
        .map(|id| next_record(id, config.base_time, &mut stream))
        .collect();

    tracing::debug!("Generated {} records with seed {}", records.len(), config.seed);

    Corpus {
        seed: config.seed,
        records,
    }
}

/// Generate the reference corpus (seed 42)
#[inline]
#[must_use]
pub fn generate_default() -> Corpus {
    generate(&CorpusConfig::default())
}

#[allow(clippy::cast_possible_wrap)]
fn next_record(id: usize, base: DateTime<Utc>, stream: &mut SeededStream) -> LogRecord {
    let offset = id as i64 * SPACING_MS + stream.next_int(0, MAX_JITTER_MS);
    let timestamp = format_timestamp(base + Duration::milliseconds(offset));

    if id == ANSWER_ID {
        return answer_record(id, timestamp);
    }

    if DECOY_WINDOW.contains(&id) {
        let decoy = stream.pick(&DECOYS);
        let message = fill_template(decoy.template, stream);
        let category = classify(decoy.service, &message);
        return assemble(id, timestamp, decoy.level, decoy.service, message, category, stream);
    }

    if stream.next_int(0, K8S_ODDS) == 0 {
        let template = stream.pick(&K8S_TEMPLATES);
        let service = *stream.pick(&K8S_SERVICES);
        let message = fill_template(template, stream);
        return assemble(id, timestamp, Level::Info, service, message, Category::K8s, stream);
    }

    let level = draw_level(stream);
    let template = stream.pick(templates_for(level));
    let service = *stream.pick(&SERVICES);
    let message = fill_template(template, stream);
    let category = classify(service, &message);
    assemble(id, timestamp, level, service, message, category, stream)
}

fn draw_level(stream: &mut SeededStream) -> Level {
    let roll = stream.next_int(0, 99);
    let mut cumulative = 0;
    for (level, weight) in LEVEL_WEIGHTS {
        cumulative += weight;
        if roll < cumulative {
            return level;
        }
    }
    Level::Debug
}

fn assemble(
    id: usize,
    timestamp: String,
    level: Level,
    service: &str,
    message: String,
    category: Category,
    stream: &mut SeededStream,
) -> LogRecord {
    let raw = LineFormat::draw(stream).render(&Line {
        timestamp: &timestamp,
        level,
        service,
        message: &message,
    });
    LogRecord {
        id,
        timestamp,
        level,
        service: service.to_string(),
        message,
        raw,
        category,
    }
}

fn answer_record(id: usize, timestamp: String) -> LogRecord {
    let raw = LineFormat::Plain.render(&Line {
        timestamp: &timestamp,
        level: Level::Error,
        service: ANSWER_SERVICE,
        message: ANSWER_MESSAGE,
    });
    LogRecord {
        id,
        timestamp,
        level: Level::Error,
        service: ANSWER_SERVICE.to_string(),
        message: ANSWER_MESSAGE.to_string(),
        raw,
        category: Category::App,
    }
}

/// An immutable generated corpus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    seed: u32,
    records: Vec<LogRecord>,
}

impl Corpus {
    /// Wrap existing records, e.g. a corpus read back from JSON Lines
    ///
    /// Nothing is checked here; call [`Corpus::verify`] to validate.
    #[must_use]
    pub fn from_records(seed: u32, records: Vec<LogRecord>) -> Self {
        Self { seed, records }
    }

    /// Seed the corpus was generated from
    #[inline]
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// All records in id order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the corpus holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in id order
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    /// Record by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: usize) -> Option<&LogRecord> {
        self.records.get(id).filter(|r| r.id == id)
    }

    /// The first `n` records (fewer if the corpus is shorter)
    #[inline]
    #[must_use]
    pub fn sample(&self, n: usize) -> &[LogRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Consume into the record vector
    #[inline]
    #[must_use]
    pub fn into_records(self) -> Vec<LogRecord> {
        self.records
    }

    /// See [`query::search`]
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&LogRecord> {
        query::search(&self.records, query)
    }

    /// See [`query::find_answer`]
    #[must_use]
    pub fn answer(&self) -> Option<&LogRecord> {
        query::find_answer(&self.records)
    }

    /// See [`query::group_by_category`]
    #[must_use]
    pub fn group_by_category(&self) -> CategoryGroups<'_> {
        query::group_by_category(&self.records)
    }

    /// See [`query::significant_events`]
    #[must_use]
    pub fn significant_events(&self) -> Vec<&LogRecord> {
        query::significant_events(&self.records)
    }

    /// Check the corpus contract
    ///
    /// # Errors
    /// Returns the first violation found: wrong size, an id that does not
    /// match its position, a timestamp that goes backwards, or a missing or
    /// altered answer record.
    pub fn verify(&self) -> Result<(), CorpusError> {
        if self.records.len() != CORPUS_SIZE {
            return Err(CorpusError::WrongCount {
                expected: CORPUS_SIZE,
                actual: self.records.len(),
            });
        }

        for (position, record) in self.records.iter().enumerate() {
            if record.id != position {
                return Err(CorpusError::IdGap { position, id: record.id });
            }
        }

        for pair in self.records.windows(2) {
            if pair[1].timestamp < pair[0].timestamp {
                return Err(CorpusError::TimestampRegression {
                    id: pair[1].id,
                    previous: pair[0].timestamp.clone(),
                    current: pair[1].timestamp.clone(),
                });
            }
        }

        let answer = self.answer().ok_or(CorpusError::AnswerMissing(ANSWER_ID))?;
        let mismatch = |reason: String| CorpusError::AnswerMismatch { id: ANSWER_ID, reason };
        if answer.level != Level::Error {
            return Err(mismatch(format!("level is {}", answer.level)));
        }
        if answer.service != ANSWER_SERVICE {
            return Err(mismatch(format!("service is {}", answer.service)));
        }
        if answer.message != ANSWER_MESSAGE {
            return Err(mismatch(format!("message is {:?}", answer.message)));
        }

        Ok(())
    }
}

impl AsRef<[LogRecord]> for Corpus {
    fn as_ref(&self) -> &[LogRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a LogRecord;
    type IntoIter = std::slice::Iter<'a, LogRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_level_follows_cumulative_weights() {
        // Walk the stream until each bucket shows up; all four must appear.
        let mut stream = SeededStream::new(1);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let level = draw_level(&mut stream);
            seen[Level::ALL.iter().position(|l| *l == level).unwrap()] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn answer_raw_is_plain_format() {
        let record = answer_record(ANSWER_ID, "2024-12-20 04:41:38.000Z".to_string());
        assert_eq!(
            record.raw,
            "2024-12-20 04:41:38.000Z ERROR [checkout-service] upstream request failed \
             upstream_timeout_ms=30000 target=payment-gateway retry_count=3 correlation_id=req-7f8a2b"
        );
    }

    #[test]
    fn timestamp_format_has_millis() {
        let at = crate::config::default_base_time() + Duration::milliseconds(1234);
        assert_eq!(format_timestamp(at), "2024-12-20 03:00:01.234Z");
    }

    #[test]
    fn spacing_exceeds_jitter() {
        assert!(SPACING_MS > MAX_JITTER_MS);
    }

    #[test]
    fn get_checks_id() {
        let corpus = generate_default();
        assert_eq!(corpus.get(10).map(|r| r.id), Some(10));
        assert!(corpus.get(CORPUS_SIZE).is_none());
    }

    #[test]
    fn sample_is_clamped() {
        let corpus = generate_default();
        assert_eq!(corpus.sample(200).len(), 200);
        assert_eq!(corpus.sample(5000).len(), CORPUS_SIZE);
    }
}

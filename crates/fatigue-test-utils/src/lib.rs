//! Testing utilities for the Alert Fatigue workspace
//!
//! Shared record builders and a scripted text generator.

#![allow(missing_docs)]

use async_trait::async_trait;
use chrono::Duration;
use fatigue_analysis::{AnalysisError, TextGenerator};
use fatigue_corpus::{classify, format_timestamp, Level, Line, LineFormat, LogRecord};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn record(id: usize, level: Level, service: &str, message: &str) -> LogRecord {
    let seconds = i64::try_from(id).unwrap_or(i64::MAX);
    let at = fatigue_corpus::config::default_base_time() + Duration::seconds(seconds);
    let timestamp = format_timestamp(at);
    let raw = LineFormat::Plain.render(&Line {
        timestamp: &timestamp,
        level,
        service,
        message,
    });
    LogRecord {
        id,
        timestamp,
        level,
        service: service.to_string(),
        message: message.to_string(),
        raw,
        category: classify(service, message),
    }
}

pub fn incident_records() -> Vec<LogRecord> {
    vec![
        record(0, Level::Info, "api-gateway", "Request completed status=200 duration=41ms"),
        record(1, Level::Warn, "payment-gateway", "Connection pool at 80% capacity"),
        record(2, Level::Error, "checkout-service", "Timeout waiting for response from payment-gateway"),
        record(3, Level::Info, "auth-service", "Token validated for user-123"),
    ]
}

/// Generator that replays a fixed reply and records what it was asked
pub struct ScriptedGenerator {
    reply: Result<String, AnalysisError>,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl ScriptedGenerator {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::new(Ok(text.into()))
    }

    pub fn failing(error: AnalysisError) -> Self {
        Self::new(Err(error))
    }

    fn new(reply: Result<String, AnalysisError>) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock() = Some(prompt.to_string());
        self.reply.clone()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

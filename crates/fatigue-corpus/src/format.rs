//! Physical line formats
//!
//! The same logical record can appear as any of five line syntaxes, the way a
//! real pipeline ingests differently formatted sources.

use crate::record::Level;
use crate::rng::SeededStream;
use serde::Serialize;

/// A physical log-line syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineFormat {
    /// `{"@timestamp":..,"level":..,"service":..,"message":..}`
    Json,
    /// `<ts> [LEVEL] <service>: <message>`
    Bracketed,
    /// `<ts> <l> <service> <message>`
    K8sShort,
    /// `ts=<ts> level=<level> svc=<service> msg="<message>"`
    KeyValue,
    /// `<ts> LEVEL [<service>] <message>`
    Plain,
}

impl LineFormat {
    /// All formats in draw order
    pub const ALL: [LineFormat; 5] = [
        LineFormat::Json,
        LineFormat::Bracketed,
        LineFormat::K8sShort,
        LineFormat::KeyValue,
        LineFormat::Plain,
    ];

    /// Draw a format uniformly from the stream
    pub fn draw(stream: &mut SeededStream) -> Self {
        *stream.pick(&Self::ALL)
    }

    /// Render one record in this format
    #[must_use]
    pub fn render(self, line: &Line<'_>) -> String {
        let Line { timestamp, level, service, message } = *line;
        match self {
            LineFormat::Json => json_line(line),
            LineFormat::Bracketed => format!("{timestamp} [{level}] {service}: {message}"),
            LineFormat::K8sShort => format!("{timestamp} {} {service} {message}", level.short()),
            LineFormat::KeyValue => format!(
                "ts={timestamp} level={} svc={service} msg=\"{message}\"",
                level.as_lower()
            ),
            LineFormat::Plain => format!("{timestamp} {level} [{service}] {message}"),
        }
    }
}

/// The logical fields shared by every format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Formatted timestamp
    pub timestamp: &'a str,
    /// Severity
    pub level: Level,
    /// Emitting service
    pub service: &'a str,
    /// Message text
    pub message: &'a str,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    #[serde(rename = "@timestamp")]
    timestamp: &'a str,
    level: Level,
    service: &'a str,
    message: &'a str,
}

fn json_line(line: &Line<'_>) -> String {
    let body = JsonLine {
        timestamp: line.timestamp,
        level: line.level,
        service: line.service,
        message: line.message,
    };
    // Only string fields and a unit enum; serialization cannot fail.
    serde_json::to_string(&body).unwrap_or_default()
}

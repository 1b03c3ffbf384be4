//! Prompt sent to the text generator

use crate::types::SAMPLE_LIMIT;
use fatigue_corpus::LogRecord;

const INSTRUCTIONS: &str = "Analyze these application logs and create a Mermaid flowchart \
showing the service architecture and the error flow. Identify the root cause of any issues.";

const REPLY_SHAPE: &str = r#"Respond with ONLY a JSON object in this exact format:
{
  "diagram": "flowchart LR\n    A[service1] --> B[service2]\n    ...",
  "analysis": {
    "rootCause": "Brief description of root cause",
    "affectedServices": ["service1", "service2"],
    "severity": "critical|high|medium|low",
    "annotations": [
      {"service": "service-name", "message": "issue description", "severity": "error|warning|info"}
    ]
  }
}

The diagram should:
1. Show all services mentioned in the logs
2. Highlight the error path in red using :::error class
3. Use flowchart LR (left-to-right) layout
4. Include databases/external services if mentioned"#;

/// Render the analysis prompt from the raw lines of the first
/// [`SAMPLE_LIMIT`] records
#[must_use]
pub fn render_prompt(logs: &[LogRecord]) -> String {
    let sample = logs
        .iter()
        .take(SAMPLE_LIMIT)
        .map(|r| r.raw.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    format!("{INSTRUCTIONS}\n\nLOGS:\n{sample}\n\n{REPLY_SHAPE}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_raw_lines_up_to_limit() {
        let corpus = fatigue_corpus::shared();
        let prompt = render_prompt(corpus.records());
        assert!(prompt.contains(&corpus.records()[0].raw));
        assert!(prompt.contains(&corpus.records()[SAMPLE_LIMIT - 1].raw));
        assert!(!prompt.contains(&corpus.records()[fatigue_corpus::ANSWER_ID].raw));
        assert!(prompt.ends_with("4. Include databases/external services if mentioned"));
    }

    #[test]
    fn empty_logs_still_render() {
        let prompt = render_prompt(&[]);
        assert!(prompt.contains("LOGS:\n\n"));
    }
}

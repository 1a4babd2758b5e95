//! Application telemetry events and sinks.
//!
//! cutline records lightweight operational signals (fetch latency, row
//! counts, comment submissions) through a pluggable sink. Nothing is
//! transmitted anywhere; the stderr sink exists for local debugging.

use std::io;

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted by cutline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// A record store read finished.
    FetchCompleted {
        /// Which query ran (`universities`, `results`, `result`, `comments`).
        query: String,
        /// Wall-clock latency in milliseconds.
        latency_ms: u64,
        /// Rows returned (0 on failure).
        row_count: usize,
        /// Whether the store answered successfully.
        succeeded: bool,
    },
    /// A comment submission finished.
    CommentSubmitted {
        /// Exam result the comment was posted to.
        exam_id: u64,
        /// Whether the insert succeeded.
        succeeded: bool,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let Ok(serialised) = serde_json::to_string(&event) else {
            return;
        };

        let _ignored = writeln_stderr(&serialised);
    }
}

fn writeln_stderr(message: &str) -> io::Result<()> {
    use io::Write;

    let mut stderr = io::stderr().lock();
    writeln!(stderr, "{message}")
}

/// Test helpers for asserting on emitted telemetry.
#[cfg(any(test, feature = "test-support"))]
pub mod test_support {
    use std::sync::Mutex;

    use super::{TelemetryEvent, TelemetrySink};

    /// Sink that keeps every event in memory.
    #[derive(Debug, Default)]
    pub struct RecordingTelemetrySink {
        events: Mutex<Vec<TelemetryEvent>>,
    }

    impl RecordingTelemetrySink {
        /// Returns a copy of the recorded events.
        #[must_use]
        pub fn events(&self) -> Vec<TelemetryEvent> {
            self.events
                .lock()
                .map(|events| events.clone())
                .unwrap_or_default()
        }
    }

    impl TelemetrySink for RecordingTelemetrySink {
        fn record(&self, event: TelemetryEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingTelemetrySink;
    use super::{TelemetryEvent, TelemetrySink};

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingTelemetrySink::default();
        sink.record(TelemetryEvent::CommentSubmitted {
            exam_id: 4,
            succeeded: true,
        });

        assert_eq!(
            sink.events(),
            vec![TelemetryEvent::CommentSubmitted {
                exam_id: 4,
                succeeded: true,
            }]
        );
    }

    #[test]
    fn events_serialise_with_snake_case_tag() {
        let event = TelemetryEvent::FetchCompleted {
            query: "results".to_owned(),
            latency_ms: 12,
            row_count: 3,
            succeeded: true,
        };

        let json = serde_json::to_value(&event).expect("event should serialise");
        assert_eq!(
            json.get("type").and_then(serde_json::Value::as_str),
            Some("fetch_completed")
        );
    }
}

//! Move-selection telemetry
//!
//! An [`AIEngine`](crate::engine::AIEngine) configured with a sink emits one
//! [`TelemetryRecord`] after every move it selects. Sink failures are logged
//! and swallowed; they never reach the caller or disturb the search.

use std::io::Write;
use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;

use crate::board::{Pos, Stone};
use crate::engine::{Decision, Difficulty};
use crate::error::TelemetryError;

/// One record per `select_move` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryRecord {
    pub difficulty: Difficulty,
    pub player: Stone,
    pub strategy: &'static str,
    pub candidate_count: usize,
    pub decision: Decision,
    #[serde(rename = "move")]
    pub chosen: Option<Pos>,
    pub score: Option<i32>,
    pub elapsed_ms: f64,
    /// Hard difficulty only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchTelemetry>,
}

/// Search counters reported by the hard difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTelemetry {
    pub nodes_evaluated: u64,
    pub max_depth_reached: u8,
    pub pruned_branches: u64,
    pub search_depth: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
}

/// Receiver for telemetry records.
pub trait TelemetrySink {
    fn record(&mut self, record: &TelemetryRecord) -> Result<(), TelemetryError>;
}

impl<F> TelemetrySink for F
where
    F: FnMut(&TelemetryRecord) -> Result<(), TelemetryError>,
{
    fn record(&mut self, record: &TelemetryRecord) -> Result<(), TelemetryError> {
        self(record)
    }
}

/// Writes each record as one line of JSON.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TelemetrySink for JsonLinesSink<W> {
    fn record(&mut self, record: &TelemetryRecord) -> Result<(), TelemetryError> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

/// Deliver a record, containing both errors and panics raised by the sink.
pub(crate) fn emit(sink: &mut dyn TelemetrySink, record: &TelemetryRecord) {
    match catch_unwind(AssertUnwindSafe(|| sink.record(record))) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => log::warn!("telemetry sink failed: {}", err),
        Err(_) => log::warn!("telemetry sink panicked; record dropped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TelemetryRecord {
        TelemetryRecord {
            difficulty: Difficulty::Hard,
            player: Stone::White,
            strategy: "minimax",
            candidate_count: 8,
            decision: Decision::Search,
            chosen: Some(Pos::new(7, 8)),
            score: Some(1_250),
            elapsed_ms: 3.5,
            search: Some(SearchTelemetry {
                nodes_evaluated: 120,
                max_depth_reached: 3,
                pruned_branches: 14,
                search_depth: 3,
                profile: None,
            }),
        }
    }

    #[test]
    fn test_json_lines_sink_writes_one_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.record(&sample()).unwrap();
        sink.record(&sample()).unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(value["difficulty"], "hard");
        assert_eq!(value["player"], "white");
        assert_eq!(value["decision"], "search");
        assert_eq!(value["move"]["row"], 7);
        assert_eq!(value["search"]["prunedBranches"], 14);
        assert!(value["search"].get("profile").is_none());
    }

    #[test]
    fn test_emit_swallows_errors() {
        let mut failing = |_: &TelemetryRecord| -> Result<(), TelemetryError> {
            Err(TelemetryError::Sink("disk full".into()))
        };
        emit(&mut failing, &sample());
    }

    #[test]
    fn test_emit_swallows_panics() {
        let mut panicking = |_: &TelemetryRecord| -> Result<(), TelemetryError> {
            panic!("sink exploded");
        };
        emit(&mut panicking, &sample());
    }
}

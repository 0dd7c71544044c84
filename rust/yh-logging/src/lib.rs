//! yh-logging: NDJSON events for planner decisions and simulations.
//!
//! Append-only, one JSON object per line, so partially written logs stay readable.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event schema version.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

/// Minimal schema versioning carried by every event.
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfoV1 {
    pub schema_version: u32,
    pub ruleset_id: &'static str,
    pub tool_version: &'static str,
}

impl VersionInfoV1 {
    pub fn new(ruleset_id: &'static str) -> Self {
        Self {
            schema_version: EVENT_SCHEMA_VERSION,
            ruleset_id,
            tool_version: VERSION,
        }
    }
}

/// One hold chosen by the planner.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub hand: Vec<u8>,
    pub num_die_sides: u8,
    pub hold: Vec<u8>,
    pub expected_value: f64,
    pub holds_considered: usize,
}

/// One simulated turn.
#[derive(Debug, Clone, Serialize)]
pub struct TurnEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub game: u64,
    pub opening: Vec<u8>,
    pub holds: Vec<Vec<u8>>,
    pub final_hand: Vec<u8>,
    pub score: u32,
    pub opening_expected_value: f64,
}

/// End-of-run simulation summary.
#[derive(Debug, Clone, Serialize)]
pub struct SimSummaryEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub games: u64,
    pub seed: u64,
    pub rerolls: u32,
    pub chance: String,
    pub mean: f64,
    pub median: u32,
    pub std_dev: f64,
    pub min: u32,
    pub max: u32,
    pub mean_opening_expected_value: f64,
}

#[derive(Debug, Error)]
pub enum NdjsonError {
    #[error("event log I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("event serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}

impl Drop for NdjsonWriter {
    fn drop(&mut self) {
        let _ = self.w.flush();
    }
}

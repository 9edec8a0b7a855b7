//! Statistics collected during a listing run

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters for a single listing run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingStatistics {
    /// Number of file paths emitted
    pub file_count: usize,
    /// Number of directories descended into (root included)
    pub directory_count: usize,
    /// Entries skipped because they could not be read
    pub skipped_count: usize,
    /// Bytes written to the output target
    pub output_size_bytes: u64,
    /// Walk time in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ListingStatistics {
    fn default() -> Self {
        Self {
            file_count: 0,
            directory_count: 0,
            skipped_count: 0,
            output_size_bytes: 0,
            processing_time_ms: 0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ListingStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Create statistics for a completed walk
    pub fn for_walk(
        file_count: usize,
        directory_count: usize,
        skipped_count: usize,
        processing_time: Duration,
    ) -> Self {
        Self {
            file_count,
            directory_count,
            skipped_count,
            output_size_bytes: 0,
            processing_time_ms: processing_time.as_millis() as u64,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Record how many bytes ended up in the output
    pub fn record_output(&mut self, bytes: u64) {
        self.output_size_bytes = bytes;
        self.collected_at = chrono::Utc::now();
    }

    /// Files listed per second of walk time
    pub fn files_per_sec(&self) -> f64 {
        if self.processing_time_ms > 0 {
            self.file_count as f64 / (self.processing_time_ms as f64 / 1000.0)
        } else {
            0.0
        }
    }

    /// Get a formatted multi-line summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Files: {}", self.file_count),
            format!("Directories: {}", self.directory_count),
        ];
        if self.skipped_count > 0 {
            lines.push(format!("Skipped: {}", self.skipped_count));
        }
        lines.push(format!("Output size: {} bytes", self.output_size_bytes));
        lines.push(format!(
            "Processing time: {:.1}s ({:.0} files/s)",
            self.processing_time_ms as f64 / 1000.0,
            self.files_per_sec()
        ));
        lines.push(format!(
            "Collected at: {}",
            self.collected_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        ));
        lines.join("\n")
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

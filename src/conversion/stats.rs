//! Statistics for conversion operations

use crate::conversion::engine::ConversionMetadata;
use serde::{Deserialize, Serialize};

/// Statistics for one or more conversions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionStatistics {
    /// Input JSON size in bytes
    pub input_size_bytes: u64,
    /// Output HTML size in bytes
    pub output_size_bytes: u64,
    /// Number of HTML elements rendered
    pub element_count: usize,
    /// Processing time in milliseconds
    pub processing_time_ms: u64,
    /// Number of files processed
    pub file_count: usize,
    /// Number of files that failed
    pub failed_count: usize,
    /// Average time per conversion
    pub avg_time_per_operation_ms: f32,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for ConversionStatistics {
    fn default() -> Self {
        Self {
            input_size_bytes: 0,
            output_size_bytes: 0,
            element_count: 0,
            processing_time_ms: 0,
            file_count: 0,
            failed_count: 0,
            avg_time_per_operation_ms: 0.0,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl ConversionStatistics {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics for a single conversion
    pub fn for_conversion(metadata: &ConversionMetadata) -> Self {
        Self {
            input_size_bytes: metadata.input_size,
            output_size_bytes: metadata.output_size,
            element_count: metadata.element_count,
            processing_time_ms: metadata.processing_time_ms,
            file_count: 1,
            failed_count: 0,
            avg_time_per_operation_ms: metadata.processing_time_ms as f32,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Combine statistics from multiple operations
    pub fn combine(&mut self, other: &Self) {
        self.input_size_bytes += other.input_size_bytes;
        self.output_size_bytes += other.output_size_bytes;
        self.element_count += other.element_count;
        self.file_count += other.file_count;
        self.failed_count += other.failed_count;
        self.processing_time_ms += other.processing_time_ms;

        self.avg_time_per_operation_ms = if self.file_count > 0 {
            self.processing_time_ms as f32 / self.file_count as f32
        } else {
            0.0
        };

        self.collected_at = chrono::Utc::now();
    }

    /// Record a file that could not be converted
    pub fn record_failure(&mut self) {
        self.failed_count += 1;
        self.collected_at = chrono::Utc::now();
    }

    /// Output size relative to input size, in percent
    pub fn expansion_percent(&self) -> f32 {
        if self.input_size_bytes == 0 {
            return 0.0;
        }
        (self.output_size_bytes as f32 / self.input_size_bytes as f32) * 100.0
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        let mut summary = format!(
            "Converted {} file(s) in {:.1}s - {} elements, {} bytes of HTML",
            self.file_count,
            self.processing_time_ms as f32 / 1000.0,
            self.element_count,
            self.output_size_bytes
        );
        if self.failed_count > 0 {
            summary.push_str(&format!(", {} failed", self.failed_count));
        }
        summary
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

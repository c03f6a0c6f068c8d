//! ECG trace ingestion.
//!
//! Traces are flat numeric text: `#`-prefixed comment lines, then the
//! sampling rate in Hz as the first value, then the raw sample trace.
//! Values are comma-delimited with one or more per line.

use crate::error::{HealthtraceError, Result};
use std::path::Path;

/// A single-lead ECG trace with its sampling rate.
#[derive(Debug, Clone, PartialEq)]
pub struct EcgTrace {
    sampling_rate: f64,
    samples: Vec<f64>,
}

impl EcgTrace {
    /// Build a trace from an already-parsed sampling rate and samples.
    pub fn new(sampling_rate: f64, samples: Vec<f64>) -> Result<Self> {
        if !(sampling_rate.is_finite() && sampling_rate > 0.0) {
            return Err(HealthtraceError::InvalidParameter(format!(
                "sampling rate must be positive, got {sampling_rate}"
            )));
        }
        Ok(Self {
            sampling_rate,
            samples,
        })
    }

    /// Load a trace file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(HealthtraceError::io)?;
        Self::parse(&text)
    }

    /// Parse trace text. The first numeric value is the sampling rate; all
    /// following values are samples.
    pub fn parse(text: &str) -> Result<Self> {
        let mut sampling_rate = None;
        let mut samples = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                let value: f64 =
                    token
                        .parse()
                        .map_err(|_| HealthtraceError::MalformedRecord {
                            line: index + 1,
                            reason: format!("unparseable number: {token:?}"),
                        })?;
                if sampling_rate.is_none() {
                    sampling_rate = Some(value);
                } else {
                    samples.push(value);
                }
            }
        }

        let sampling_rate = sampling_rate.ok_or(HealthtraceError::EmptyData)?;
        Self::new(sampling_rate, samples)
    }

    /// Sampling rate in Hz.
    pub fn sampling_rate(&self) -> f64 {
        self.sampling_rate
    }

    /// Raw sample values, in recording order.
    pub fn values(&self) -> &[f64] {
        &self.samples
    }

    /// Consume the trace, keeping only the sample values.
    pub fn into_values(self) -> Vec<f64> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Timestamp of each sample in seconds from the start of the recording.
    pub fn times(&self) -> Vec<f64> {
        (0..self.samples.len())
            .map(|frame| frame as f64 / self.sampling_rate)
            .collect()
    }

    /// Total duration of the recording in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sampling_rate
    }
}

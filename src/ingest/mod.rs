//! Sequence providers: loaders that turn raw health exports into numeric
//! signals for the discrepancy engine.
//!
//! Two sources are supported:
//!
//! - [`activity`]: daily activity summaries (energy burned, exercise time,
//!   stand hours) exported as CSV with one dated record per day.
//! - [`ecg`]: flat ECG traces, a sampling-rate header followed by the raw
//!   sample values.
//!
//! Both produce plain `Vec<f64>` signals. Callers feeding activity
//! magnitudes to the engine should scale them into roughly [0, 1] first
//! (see [`activity::normalize_by_max`]); the engine performs no
//! normalization of its own.

pub mod activity;
pub mod ecg;

pub use activity::{normalize_by_max, ActivityColumn, ActivityLog, ActivityRecord};
pub use ecg::EcgTrace;

//! # healthtrace
//!
//! Analysis of personal health time-series: daily activity summaries and
//! ECG traces, with a kernel-based change-point discrepancy estimator at
//! the core.
//!
//! The [`ingest`] loaders turn raw exports into plain numeric signals; the
//! [`discrepancy`] engine scores every interior position of a signal by how
//! dissimilar its recent past is from its near future. Spikes in the
//! resulting profile mark candidate regime changes (a new training habit, a
//! changed baseline). Peak picking and rendering are left to the caller.
//!
//! ```no_run
//! use healthtrace::prelude::*;
//!
//! fn main() -> healthtrace::Result<()> {
//!     let log = ActivityLog::load("export/activity.csv")?;
//!     let energy = log.values_of(ActivityColumn::EnergyBurned)?;
//!     // The engine's default bandwidth assumes values roughly in [0, 1]
//!     let signal = normalize_by_max(&energy)?;
//!
//!     let spec = CostSpec::default().window_size(50).gamma(0.1);
//!     let profile = signal_discrepancy(&signal, &spec);
//!     assert_eq!(profile.len(), signal.len());
//!     Ok(())
//! }
//! ```

pub mod discrepancy;
pub mod error;
pub mod ingest;

pub use error::{HealthtraceError, Result};

pub mod prelude {
    pub use crate::discrepancy::{signal_discrepancy, CostFunction, CostSpec};
    pub use crate::error::{HealthtraceError, Result};
    pub use crate::ingest::{normalize_by_max, ActivityColumn, ActivityLog, EcgTrace};
}

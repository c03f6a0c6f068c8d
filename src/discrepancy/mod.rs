//! Change-point discrepancy estimation.
//!
//! Scores every interior position of a one-dimensional signal by how
//! dissimilar the signal's recent past is from its near future, producing a
//! same-length profile whose spikes mark candidate regime changes.
//!
//! The statistic is a kernelized two-sample divergence: within a sliding
//! window centered at each index, the average self-similarity of the two
//! half-windows is contrasted against the average self-similarity of the
//! whole window. Internally coherent but mutually dissimilar halves yield a
//! large positive score.
//!
//! # Example
//!
//! ```
//! use healthtrace::discrepancy::{signal_discrepancy, CostSpec};
//!
//! // Level shift halfway through
//! let mut signal = vec![0.0; 30];
//! signal.extend(vec![1.0; 30]);
//!
//! let spec = CostSpec::default().window_size(10).gamma(1.0);
//! let profile = signal_discrepancy(&signal, &spec);
//!
//! assert_eq!(profile.len(), signal.len());
//! let peak = profile
//!     .iter()
//!     .enumerate()
//!     .max_by(|a, b| a.1.total_cmp(b.1))
//!     .map(|(i, _)| i)
//!     .unwrap();
//! assert!((29..=31).contains(&peak));
//! ```
//!
//! Only the raw profile is produced; thresholding and peak picking are left
//! to the caller.

pub mod cost;
pub mod engine;

pub use cost::{rbf_kernel, CostFunction, CostSpec, DEFAULT_GAMMA, DEFAULT_WINDOW_SIZE};
pub use engine::signal_discrepancy;

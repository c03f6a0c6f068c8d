//! Cost-function selection and kernel evaluation for discrepancy profiles.

/// Default comparison window size.
pub const DEFAULT_WINDOW_SIZE: usize = 50;

/// Default RBF kernel bandwidth.
pub const DEFAULT_GAMMA: f64 = 1.0;

/// Cost functions the discrepancy engine can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostFunction {
    /// Radial basis function kernel: `k(x, y) = exp(-gamma * (x - y)^2)`.
    #[default]
    Rbf,
}

impl CostFunction {
    /// Case-insensitive lookup by name.
    ///
    /// Unknown names yield `None`, which the engine treats as a no-op cost
    /// (all-zero profile), not an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "rbf" => Some(CostFunction::Rbf),
            _ => None,
        }
    }
}

/// Cost-function selector plus parameters for the discrepancy engine.
///
/// The cost is selected by name so that unrecognized selectors degrade to an
/// all-zero profile instead of failing; see
/// [`signal_discrepancy`](super::signal_discrepancy).
#[derive(Debug, Clone, PartialEq)]
pub struct CostSpec {
    /// Cost-function name, matched case-insensitively.
    pub name: String,
    /// Size of the comparison window. Coerced up to the nearest even value
    /// (minimum 2) before use.
    pub window_size: usize,
    /// Kernel bandwidth. Tuned assuming signal values roughly in [0, 1].
    pub gamma: f64,
}

impl Default for CostSpec {
    fn default() -> Self {
        Self {
            name: "rbf".to_string(),
            window_size: DEFAULT_WINDOW_SIZE,
            gamma: DEFAULT_GAMMA,
        }
    }
}

impl CostSpec {
    /// Create a spec for the named cost function with default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the comparison window size.
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the kernel bandwidth.
    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Resolve the named cost function, if recognized.
    pub fn cost_function(&self) -> Option<CostFunction> {
        CostFunction::from_name(&self.name)
    }

    /// Effective window size: even-coerced (odd rounds up) and clamped to a
    /// minimum of 2 so the engine never divides by zero.
    pub fn effective_window(&self) -> usize {
        (self.window_size + self.window_size % 2).max(2)
    }
}

/// RBF kernel `exp(-gamma * (x - y)^2)`.
///
/// Symmetric, bounded in (0, 1] for positive `gamma`, maximal when `x == y`.
#[inline]
pub fn rbf_kernel(x: f64, y: f64, gamma: f64) -> f64 {
    let diff = x - y;
    (-gamma * diff * diff).exp()
}

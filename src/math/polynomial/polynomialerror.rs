use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolynomialError {
    /// xmin == xmax, or one of the edges is not finite
    #[error("invalid domain [{xmin}, {xmax}]: edges must be finite and distinct")]
    InvalidDomain { xmin: f64, xmax: f64 },

    #[error("domain mismatch: [{}, {}] vs [{}, {}]", left.0, left.1, right.0, right.1)]
    DomainMismatch { left: (f64, f64), right: (f64, f64) },

    #[error("covariance matrix must be square and non-empty, got {rows}x{cols}")]
    NonSquareCovariance { rows: usize, cols: usize },
}

use crate::parameter::ParameterError;
use thiserror::Error;

/// Error type for out-of-domain states and convergence problems.
#[derive(Error, Debug)]
pub enum SteamError {
    #[error("`{0}` did not converge within the maximum number of iterations.")]
    NotConverged(String),
    #[error("No IF-97 region contains T = {temperature} K, p = {pressure} bar.")]
    OutOfRegion { temperature: f64, pressure: f64 },
    #[error("Saturation properties are not available below the triple point.")]
    BelowTriplePoint,
    #[error("Saturation properties are not available above the critical point.")]
    AboveCriticalPoint,
    #[error("Vapor quality must lie in [0, 1]: x = {0}.")]
    InvalidQuality(f64),
    #[error("Pressure p = {0} bar is outside the range of the formulation.")]
    InvalidPressure(f64),
    #[error("Polynomial exponent {0} exceeds the sanity bound; the coefficient data is corrupted.")]
    CorruptedCoefficients(i32),
    #[error("Arrays of length {0} and {1} cannot be broadcast together.")]
    BroadcastMismatch(usize, usize),
    #[error(transparent)]
    ParameterError(#[from] ParameterError),
}

/// Convenience type for `Result<T, SteamError>`.
pub type SteamResult<T> = Result<T, SteamError>;

use log::warn;
use rayon::ThreadPoolBuildError;
use std::error::Error;
use std::fmt;

/// Errors reported by the quadrature operations
#[derive(Debug)]
pub enum QuadratureError {
    /// The requested number of subintervals was zero
    InvalidNumIntervals(usize),
    /// The worker pool could not be constructed
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuadratureError::InvalidNumIntervals(n) => {
                write!(f, "invalid number of subintervals: {} (need n >= 1)", n)
            }
            QuadratureError::ThreadPool(err) => {
                write!(f, "could not build worker pool: {}", err)
            }
        }
    }
}

impl Error for QuadratureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QuadratureError::InvalidNumIntervals(_) => None,
            QuadratureError::ThreadPool(err) => Some(err),
        }
    }
}

impl From<ThreadPoolBuildError> for QuadratureError {
    fn from(err: ThreadPoolBuildError) -> Self {
        QuadratureError::ThreadPool(err)
    }
}

pub type QuadratureResult<T> = std::result::Result<T, QuadratureError>;

/// Reject a degenerate subinterval count before any step size is derived.
pub(crate) fn check_num_intervals(n: usize) -> QuadratureResult<()> {
    if n < 1 {
        warn!("invalid number of subintervals: {} (need n >= 1)", n);
        Err(QuadratureError::InvalidNumIntervals(n))
    } else {
        Ok(())
    }
}

use core::fmt;

/// Result alias for `concord`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by validation and metric computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// Assignment and truth sequences have different lengths.
    LengthMismatch {
        /// Number of cluster assignments.
        assignments: usize,
        /// Number of ground-truth labels.
        truth: usize,
    },

    /// A label token could not be read as a non-negative integer.
    InvalidLabel {
        /// Zero-based position of the token in its list.
        position: usize,
        /// The offending token.
        token: String,
    },

    /// Metric is undefined because it would divide by zero.
    DivisionByZero {
        /// Metric being computed.
        metric: &'static str,
        /// Number of points in the input.
        n_points: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },
}

impl Error {
    /// True for errors raised while validating input sequences.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput | Error::LengthMismatch { .. } | Error::InvalidLabel { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::LengthMismatch { assignments, truth } => write!(
                f,
                "assignments and ground truth must be the same length: {assignments} vs {truth}"
            ),
            Error::InvalidLabel { position, token } => {
                write!(f, "label {position} is not a non-negative integer: {token:?}")
            }
            Error::DivisionByZero { metric, n_points } => {
                write!(f, "{metric} is undefined for {n_points} point(s): division by zero")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

//! Error types returned by the sampler.

use std::fmt::{self, Display};

use thiserror::Error;

/// The coordinate of the chain state a numeric failure was observed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordinate {
    X,
    Y,
}

impl Coordinate {
    /// Maps a state index (0 for x, 1 for y) to its coordinate.
    pub fn from_index(i: usize) -> Self {
        if i == 0 {
            Coordinate::X
        } else {
            Coordinate::Y
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::X => write!(f, "x"),
            Coordinate::Y => write!(f, "y"),
        }
    }
}

/// Every way a sampler run can fail. A run either returns a complete trace or
/// exactly one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GibbsError {
    /// A static parameter is outside its domain. Raised before any draw.
    #[error("domain error: invalid {parameter} = {value}: {reason}")]
    Domain {
        parameter: &'static str,
        value: String,
        reason: &'static str,
    },

    /// A chain coordinate became non-positive or non-finite.
    #[error(
        "numeric error at iteration {iteration}: {coordinate} = {value:e} is not a finite positive number"
    )]
    Numeric {
        iteration: usize,
        coordinate: Coordinate,
        value: f64,
    },

    /// The source of uniform variates failed or ran dry.
    #[error("entropy error: {0}")]
    Entropy(String),
}

impl GibbsError {
    pub(crate) fn domain(
        parameter: &'static str,
        value: impl Display,
        reason: &'static str,
    ) -> Self {
        GibbsError::Domain {
            parameter,
            value: value.to_string(),
            reason,
        }
    }

    /// Returns `true` for errors raised before the chain started.
    pub fn is_domain(&self) -> bool {
        matches!(self, GibbsError::Domain { .. })
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, GibbsError::Numeric { .. })
    }

    pub fn is_entropy(&self) -> bool {
        matches!(self, GibbsError::Entropy(_))
    }
}

/// Checks that a chain coordinate can serve as a rate or be recorded.
pub(crate) fn check_positive(
    value: f64,
    iteration: usize,
    coordinate: Coordinate,
) -> Result<f64, GibbsError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GibbsError::Numeric {
            iteration,
            coordinate,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_message_names_parameter() {
        let err = GibbsError::domain("bound", -1.0, "must be finite and strictly positive");
        assert!(err.is_domain());
        assert_eq!(
            err.to_string(),
            "domain error: invalid bound = -1: must be finite and strictly positive"
        );
    }

    #[test]
    fn test_check_positive() {
        assert_eq!(check_positive(0.25, 3, Coordinate::X), Ok(0.25));
        for bad in [0.0, -0.0, -1.0, f64::INFINITY] {
            let err = check_positive(bad, 7, Coordinate::Y).unwrap_err();
            match err {
                GibbsError::Numeric {
                    iteration,
                    coordinate,
                    ..
                } => {
                    assert_eq!(iteration, 7);
                    assert_eq!(coordinate, Coordinate::Y);
                }
                other => panic!("Expected a numeric error, got {other:?}"),
            }
        }
        assert!(check_positive(f64::NAN, 0, Coordinate::X).is_err());
    }

    #[test]
    fn test_numeric_message() {
        let err = GibbsError::Numeric {
            iteration: 12,
            coordinate: Coordinate::X,
            value: 0.0,
        };
        assert!(err.is_numeric());
        assert!(err.to_string().starts_with("numeric error at iteration 12: x ="));
    }
}

//! Relative tolerance applied to sample values

use thiserror::Error;

/// Errors constructing a [`Tolerance`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToleranceError {
    #[error("limit must be a finite number, got {0}")]
    NotFinite(f32),

    #[error("limit must not be negative, got {0}")]
    Negative(f32),
}

/// Fractional difference allowed between a sample and its counterpart
///
/// The bounds are scaled from the second value and the test branches on the
/// sign of the first, so the check is not symmetric in its arguments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    limit: f32,
    lower: f32,
    upper: f32,
}

impl Tolerance {
    /// Default limit used when none is given
    pub const DEFAULT_LIMIT: f32 = 1.0e-4;

    pub const DEFAULT: Tolerance = Tolerance {
        limit: Self::DEFAULT_LIMIT,
        lower: 1.0 - Self::DEFAULT_LIMIT,
        upper: 1.0 + Self::DEFAULT_LIMIT,
    };

    pub fn new(limit: f32) -> Result<Self, ToleranceError> {
        if !limit.is_finite() {
            return Err(ToleranceError::NotFinite(limit));
        }
        if limit < 0.0 {
            return Err(ToleranceError::Negative(limit));
        }
        Ok(Self {
            limit,
            lower: 1.0 - limit,
            upper: 1.0 + limit,
        })
    }

    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// Whether `a` is close enough to `b`
    ///
    /// When `a` is exactly zero (or NaN) no test is applied and any `b` is
    /// accepted. This is a gap in the formula, most likely unintended, kept so
    /// that existing regression baselines keep passing.
    pub fn within(&self, a: f32, b: f32) -> bool {
        if a > 0.0 {
            !(a < b * self.lower || a > b * self.upper)
        } else if a < 0.0 {
            !(a > b * self.lower || a < b * self.upper)
        } else {
            true
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f32> for Tolerance {
    type Error = ToleranceError;

    fn try_from(limit: f32) -> Result<Self, Self::Error> {
        Self::new(limit)
    }
}

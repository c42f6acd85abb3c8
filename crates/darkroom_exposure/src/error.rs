//! Exposure arithmetic error types.

/// Errors raised by the exposure conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExposureError {
    /// An exposure time was zero, negative or not a finite number.
    #[error("exposure time must be greater than 0, got {value}")]
    NonPositiveTime {
        /// The rejected time, in seconds.
        value: f64,
    },

    /// A print dimension was zero, negative or not a finite number.
    #[error("print dimension must be greater than 0, got {value}")]
    NonPositiveDimension {
        /// The rejected dimension.
        value: f64,
    },

    /// A print size string could not be parsed.
    #[error("invalid print size '{0}', expected WIDTHxHEIGHT")]
    InvalidPrintSize(String),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, ExposureError>;

/// Rejects anything that is not a finite, strictly positive time.
pub(crate) fn check_time(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ExposureError::NonPositiveTime { value })
    }
}

/// Rejects anything that is not a finite, strictly positive dimension.
pub(crate) fn check_dimension(value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ExposureError::NonPositiveDimension { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_time() {
        assert_eq!(check_time(1.5), Ok(1.5));
        assert!(check_time(0.0).is_err());
        assert!(check_time(-2.0).is_err());
        assert!(check_time(f64::NAN).is_err());
        assert!(check_time(f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ExposureError::NonPositiveTime { value: -1.0 };
        assert_eq!(err.to_string(), "exposure time must be greater than 0, got -1");
    }
}

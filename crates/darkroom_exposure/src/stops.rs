//! Conversions between exposure times, stops and printer's points.
//!
//! All functions are pure. Times are in seconds but any unit works as long as
//! both arguments share it; only the ratio matters.

use crate::error::{Result, check_time};

/// Number of printer's points in one stop.
pub const POINTS_PER_STOP: f64 = 12.0;

/// Difference between two exposure times, in stops.
///
/// Positive when `new_time` is longer than `base_time`.
///
/// # Errors
///
/// Returns [`ExposureError::NonPositiveTime`](crate::ExposureError::NonPositiveTime)
/// if either time is not greater than zero.
pub fn time_difference_in_stops(base_time: f64, new_time: f64) -> Result<f64> {
    let base_time = check_time(base_time)?;
    let new_time = check_time(new_time)?;
    Ok((new_time / base_time).log2())
}

/// Difference between two exposure times, in printer's points.
///
/// # Errors
///
/// Same as [`time_difference_in_stops`].
pub fn time_difference_in_points(base_time: f64, new_time: f64) -> Result<f64> {
    Ok(time_difference_in_stops(base_time, new_time)? * POINTS_PER_STOP)
}

/// Time multiplier for a difference in stops.
#[must_use]
pub fn stop_difference_to_multiplier(stops: f64) -> f64 {
    stops.exp2()
}

/// Time multiplier for a difference in printer's points.
#[must_use]
pub fn point_difference_to_multiplier(points: f64) -> f64 {
    stop_difference_to_multiplier(points / POINTS_PER_STOP)
}

/// Adjust an exposure time by a number of stops.
///
/// # Errors
///
/// Returns [`ExposureError::NonPositiveTime`](crate::ExposureError::NonPositiveTime)
/// if `base_time` is not greater than zero.
pub fn adjust_time_by_stops(base_time: f64, stops: f64) -> Result<f64> {
    let base_time = check_time(base_time)?;
    Ok(base_time * stop_difference_to_multiplier(stops))
}

/// Adjust an exposure time by a number of printer's points.
///
/// # Errors
///
/// Same as [`adjust_time_by_stops`].
pub fn adjust_time_by_points(base_time: f64, points: f64) -> Result<f64> {
    let base_time = check_time(base_time)?;
    Ok(base_time * point_difference_to_multiplier(points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExposureError;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_doubling_is_one_stop() {
        assert_close(time_difference_in_stops(6.0, 12.0).unwrap(), 1.0);
        assert_close(time_difference_in_stops(12.0, 6.0).unwrap(), -1.0);
        assert_close(time_difference_in_stops(10.0, 10.0).unwrap(), 0.0);
    }

    #[test]
    fn test_stops_rejects_non_positive_times() {
        assert_eq!(
            time_difference_in_stops(0.0, 12.0),
            Err(ExposureError::NonPositiveTime { value: 0.0 })
        );
        assert_eq!(
            time_difference_in_stops(12.0, -1.0),
            Err(ExposureError::NonPositiveTime { value: -1.0 })
        );
        assert!(time_difference_in_stops(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_points_are_twelfths() {
        assert_close(time_difference_in_points(6.0, 12.0).unwrap(), 12.0);
        assert_close(time_difference_in_points(16.0, 4.0).unwrap(), -24.0);
        assert!(time_difference_in_points(-3.0, 12.0).is_err());
    }

    #[test]
    fn test_multipliers() {
        assert_eq!(stop_difference_to_multiplier(0.0), 1.0);
        assert_close(stop_difference_to_multiplier(1.0), 2.0);
        assert_close(stop_difference_to_multiplier(-2.0), 0.25);
        assert_close(point_difference_to_multiplier(12.0), 2.0);
        assert_close(point_difference_to_multiplier(6.0), std::f64::consts::SQRT_2);
    }

    #[test]
    fn test_adjust_by_stops() {
        assert_close(adjust_time_by_stops(12.0, 1.0).unwrap(), 24.0);
        assert_close(adjust_time_by_stops(12.0, -1.0).unwrap(), 6.0);
        assert_close(adjust_time_by_stops(12.0, 0.0).unwrap(), 12.0);
        assert!(adjust_time_by_stops(0.0, 1.0).is_err());
    }

    #[test]
    fn test_adjust_by_points() {
        assert_close(adjust_time_by_points(12.0, 12.0).unwrap(), 24.0);
        assert_close(adjust_time_by_points(12.0, -12.0).unwrap(), 6.0);
        assert!(adjust_time_by_points(-5.0, 3.0).is_err());
    }

    #[test]
    fn test_stops_and_adjust_agree() {
        let stops = time_difference_in_stops(7.5, 19.0).unwrap();
        assert_close(adjust_time_by_stops(7.5, stops).unwrap(), 19.0);

        let points = time_difference_in_points(7.5, 19.0).unwrap();
        assert_close(adjust_time_by_points(7.5, points).unwrap(), 19.0);
    }
}

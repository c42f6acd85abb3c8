//! Print dimensions and resize compensation.
//!
//! Enlarging a print spreads the same light over a larger area, so the
//! exposure has to grow with the area. [`resize_print_in_stops`] expresses
//! that change in stops.

use std::fmt;
use std::str::FromStr;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{ExposureError, Result, check_dimension};
use crate::stops::adjust_time_by_stops;

/// Width and height of a print, in any consistent unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrintSize {
    /// Horizontal dimension.
    pub x: f64,
    /// Vertical dimension.
    pub y: f64,
}

impl PrintSize {
    /// Create a print size.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the size as a vector.
    #[must_use]
    pub fn to_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Area of the print.
    #[must_use]
    pub fn area(self) -> f64 {
        self.to_dvec2().element_product()
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(self) -> f64 {
        self.x / self.y
    }

    /// Check that both dimensions are finite and greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ExposureError::NonPositiveDimension`] for the first bad
    /// dimension.
    pub fn validate(self) -> Result<Self> {
        check_dimension(self.x)?;
        check_dimension(self.y)?;
        Ok(self)
    }

    /// The largest size with this print's aspect ratio that fits inside
    /// `bounds`. The print is never rotated.
    ///
    /// # Errors
    ///
    /// Returns [`ExposureError::NonPositiveDimension`] if either size has a
    /// dimension that is not greater than zero.
    pub fn fit_within(self, bounds: PrintSize) -> Result<PrintSize> {
        let scale = self.fit_scale(bounds)?;
        Ok((self.to_dvec2() * scale).into())
    }

    /// Linear scale factor that maps this size onto the largest same-aspect
    /// rectangle inside `bounds`. The limiting dimension wins.
    fn fit_scale(self, bounds: PrintSize) -> Result<f64> {
        let old = self.validate()?.to_dvec2();
        let new = bounds.validate()?.to_dvec2();
        Ok((new / old).min_element())
    }
}

impl From<DVec2> for PrintSize {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<PrintSize> for DVec2 {
    fn from(size: PrintSize) -> Self {
        size.to_dvec2()
    }
}

impl fmt::Display for PrintSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl FromStr for PrintSize {
    type Err = ExposureError;

    /// Parses `"8x10"`, `"8 x 10"` or `"9.5X12"`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ExposureError::InvalidPrintSize(s.to_string());
        let (x, y) = s
            .split_once(['x', 'X', '×'])
            .ok_or_else(invalid)?;
        let x: f64 = x.trim().parse().map_err(|_| invalid())?;
        let y: f64 = y.trim().parse().map_err(|_| invalid())?;
        PrintSize::new(x, y).validate()
    }
}

/// Exposure change, in stops, needed when going from an `old` print to one
/// that fills as much of the `new` bounding box as the old aspect ratio
/// allows.
///
/// The result is `log2(fitted_area / old_area)`: positive when enlarging,
/// negative when reducing, zero for the same size.
///
/// # Errors
///
/// Returns [`ExposureError::NonPositiveDimension`] if any dimension is not
/// greater than zero.
pub fn resize_print_in_stops(old: PrintSize, new: PrintSize) -> Result<f64> {
    let scale = old.fit_scale(new)?;
    // Area grows with the square of the linear scale.
    Ok(2.0 * scale.log2())
}

/// Exposure time for a resized print, given the time that worked for `old`.
///
/// # Errors
///
/// Returns [`ExposureError`] if the time or any dimension is not greater
/// than zero.
pub fn resize_exposure(base_time: f64, old: PrintSize, new: PrintSize) -> Result<f64> {
    let stops = resize_print_in_stops(old, new)?;
    adjust_time_by_stops(base_time, stops)
}

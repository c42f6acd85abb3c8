//! # darkroom_exposure
//!
//! Exposure arithmetic for darkroom printing. Converts between exposure-time
//! ratios, photographic stops and printer's points, and works out how much
//! exposure a print needs when it is enlarged or reduced.
//!
//! A **stop** doubles or halves the light reaching the paper. A **printer's
//! point** is a twelfth of a stop, fine enough for dodging and burning.
//!
//! This crate provides:
//!
//! - [`stops`]: time/stop/point conversions.
//! - [`print_size`]: [`PrintSize`] and resize compensation.
//! - [`error`]: [`ExposureError`].
//!
//! ```rust
//! use darkroom_exposure::{adjust_time_by_stops, resize_print_in_stops, PrintSize};
//!
//! let stops = resize_print_in_stops(PrintSize::new(4.0, 6.0), PrintSize::new(8.0, 12.0)).unwrap();
//! assert_eq!(stops, 2.0);
//! assert_eq!(adjust_time_by_stops(12.0, stops).unwrap(), 48.0);
//! ```

pub mod error;
pub mod print_size;
pub mod stops;

// Re-export glam's double-precision vector; print sizes convert to and from it.
pub use glam::DVec2;

pub use error::ExposureError;
pub use print_size::{PrintSize, resize_exposure, resize_print_in_stops};
pub use stops::{
    POINTS_PER_STOP, adjust_time_by_points, adjust_time_by_stops, point_difference_to_multiplier,
    stop_difference_to_multiplier, time_difference_in_points, time_difference_in_stops,
};

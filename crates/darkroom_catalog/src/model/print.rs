//! Darkroom prints.

use std::fmt;

use chrono::NaiveDate;
use darkroom_exposure::{PrintSize, resize_exposure};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::{EnlargerId, FinishId, FrameId, PaperId};

/// A print made in the darkroom.
///
/// Prints are identified by the day they were made and their sequence number
/// within that day, e.g. `20120202-1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Print {
    pub date: NaiveDate,
    pub sequence: u32,
    pub paper: PaperId,
    /// Must be one of the paper's finishes.
    pub finish: FinishId,
    /// Negative the print was made from, if recorded.
    #[serde(default)]
    pub frame: Option<FrameId>,
    /// Must have a carrier for the frame's format.
    #[serde(default)]
    pub enlarger: Option<EnlargerId>,
    #[serde(default)]
    pub size: Option<PrintSize>,
    /// Base exposure time in seconds.
    #[serde(default)]
    pub exposure_seconds: Option<f64>,
}

impl Print {
    #[must_use]
    pub fn new(date: NaiveDate, sequence: u32, paper: PaperId, finish: FinishId) -> Self {
        Self {
            date,
            sequence,
            paper,
            finish,
            frame: None,
            enlarger: None,
            size: None,
            exposure_seconds: None,
        }
    }

    #[must_use]
    pub fn from_frame(mut self, frame: FrameId, enlarger: Option<EnlargerId>) -> Self {
        self.frame = Some(frame);
        self.enlarger = enlarger;
        self
    }

    #[must_use]
    pub fn with_exposure(mut self, size: PrintSize, exposure_seconds: f64) -> Self {
        self.size = Some(size);
        self.exposure_seconds = Some(exposure_seconds);
        self
    }

    /// Checks that only need the print itself.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(seconds) = self.exposure_seconds {
            if !(seconds.is_finite() && seconds > 0.0) {
                return Err(ValidationError::NonPositiveExposure(seconds));
            }
        }
        if let Some(size) = self.size {
            size.validate()?;
        }
        Ok(())
    }

    /// `"{YYYYMMDD}-{sequence}"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", self.date.format("%Y%m%d"), self.sequence)
    }

    /// Exposure time for printing the same negative at another size, keeping
    /// this print's aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingPrintData`] if the print has no size
    /// or exposure recorded, or [`ValidationError::Exposure`] if `new` is not
    /// a valid size.
    pub fn exposure_for_size(&self, new: PrintSize) -> Result<f64, ValidationError> {
        let missing = |field| ValidationError::MissingPrintData {
            print: self.label(),
            field,
        };
        let size = self.size.ok_or_else(|| missing("size"))?;
        let seconds = self.exposure_seconds.ok_or_else(|| missing("exposure time"))?;
        Ok(resize_exposure(seconds, size, new)?)
    }
}

impl fmt::Display for Print {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

//! Catalog error types.

use darkroom_exposure::ExposureError;

/// A record breaks one of the catalog's business rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Multigrade papers take their contrast from filtration, not a fixed grade.
    #[error("multigrade papers can not have a grade specified")]
    MultigradeWithGrade,

    /// Graded papers must say which grade they are.
    #[error("graded papers must have a grade specified")]
    GradedWithoutGrade,

    /// Paper grades run from 00 (stored as -1) to 5.
    #[error("paper grade must be between -1 (00) and 5, got {0}")]
    GradeOutOfRange(i8),

    /// The print's finish is not one the paper is sold in.
    #[error("finish '{finish}' is not available for paper '{paper}'")]
    FinishNotOnPaper {
        /// Label of the requested finish.
        finish: String,
        /// Label of the paper.
        paper: String,
    },

    /// The enlarger has no negative carrier for the frame's film format.
    #[error("enlarger '{enlarger}' does not support film format '{format}'")]
    EnlargerFormatMismatch {
        /// Label of the enlarger.
        enlarger: String,
        /// Label of the frame's film format.
        format: String,
    },

    /// Frame numbers start at 00 (stored as -1).
    #[error("frame index must be -1 (00) or greater, got {0}")]
    FrameIndexOutOfRange(i32),

    /// Film speeds are ISO numbers and can not be zero.
    #[error("{0} must be greater than 0")]
    ZeroSpeed(&'static str),

    /// A stored exposure time is zero or negative.
    #[error("exposure time must be greater than 0, got {0}")]
    NonPositiveExposure(f64),

    /// A stored print size or computed exposure was rejected.
    #[error(transparent)]
    Exposure(#[from] ExposureError),

    /// A calculation needs a field the record does not carry.
    #[error("print {print} has no {field} recorded")]
    MissingPrintData {
        /// Label of the print.
        print: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// A required text field is blank.
    #[error("{0} must not be empty")]
    EmptyName(&'static str),
}

/// Errors returned by [`Catalog`](crate::Catalog) operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The record failed validation.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Kind of record that was looked up.
        kind: &'static str,
        /// The raw id that was looked up.
        id: u64,
    },

    /// A table has run out of ids, usually because a snapshot row carries
    /// an id at the very top of the `u64` range.
    #[error("no {kind} ids left to allocate")]
    IdOverflow {
        /// Kind of record whose ids ran out.
        kind: &'static str,
    },

    /// Film roll names are unique across the catalog.
    #[error("a film roll named '{0}' already exists")]
    DuplicateFilmRoll(String),

    /// A roll can only have one frame with a given index.
    #[error("frame {frame_number} already exists on roll '{roll}'")]
    DuplicateFrame {
        /// Name of the film roll.
        roll: String,
        /// The duplicated frame number.
        frame_number: String,
    },

    /// Prints are looked up by their `YYYYMMDD-sequence` label.
    #[error("a print labelled '{0}' already exists")]
    DuplicatePrint(String),

    /// Snapshot file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file is not valid JSON for a catalog.
    #[error("snapshot format error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for catalog results.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<ExposureError> for CatalogError {
    fn from(err: ExposureError) -> Self {
        Self::Validation(ValidationError::Exposure(err))
    }
}

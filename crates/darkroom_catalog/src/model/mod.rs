//! Catalog record types.
//!
//! Records refer to each other by id. Rules that only need the record itself
//! live on the record (`validate`); rules that need related records take
//! them as arguments and are orchestrated by [`Catalog`](crate::Catalog).

pub mod enlarger;
pub mod film;
pub mod manufacturer;
pub mod paper;
pub mod print;
pub mod roll;

pub use enlarger::{Enlarger, EnlargerKind};
pub use film::{Developer, Film, FilmFormat, Process};
pub use manufacturer::Manufacturer;
pub use paper::{Grade, PaperType, PhotoPaper, PhotoPaperFinish};
pub use print::Print;
pub use roll::{FilmRoll, FilmRollDraft, Frame};

use crate::error::ValidationError;

/// Rejects blank names.
pub(crate) fn require_name(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyName(field));
    }
    Ok(())
}

/// Label shared by products shown with their maker's short name.
pub(crate) fn branded_label(manufacturer: &Manufacturer, name: &str) -> String {
    format!("{} {}", manufacturer.short_name, name)
}

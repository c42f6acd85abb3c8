//! # darkroom_catalog
//!
//! Inventory of an analog darkroom: film stocks and the rolls shot on them,
//! developers, papers and their finishes, enlargers, and the prints made
//! from each negative.
//!
//! This crate provides:
//!
//! - [`id`]: typed record identifiers ([`FilmId`], [`PrintId`], ...).
//! - [`model`]: the record types and their own validation rules.
//! - [`Table`]: per-kind storage with monotonic id allocation.
//! - [`Catalog`]: the validated, cross-referenced store.
//! - [`CatalogSnapshot`]: JSON import/export.
//! - [`error`]: [`ValidationError`] and [`CatalogError`].
//!
//! ```rust
//! use chrono::NaiveDate;
//! use darkroom_catalog::{Catalog, Manufacturer, PaperType, PhotoPaper, PhotoPaperFinish, Print};
//!
//! let mut catalog = Catalog::new();
//! let ilford = catalog.add_manufacturer(Manufacturer::new("Ilford Photo", "Ilford")).unwrap();
//! let glossy = catalog.add_finish(PhotoPaperFinish::new("glossy")).unwrap();
//! let matte = catalog.add_finish(PhotoPaperFinish::new("matte")).unwrap();
//! let paper = catalog
//!     .add_paper(PhotoPaper::multigrade("MGIV", ilford, PaperType::ResinCoated).with_finish(glossy))
//!     .unwrap();
//!
//! let day = NaiveDate::from_ymd_opt(2016, 3, 25).unwrap();
//! assert!(catalog.add_print(Print::new(day, 1, paper, glossy)).is_ok());
//! assert!(catalog.add_print(Print::new(day, 2, paper, matte)).is_err());
//! ```

pub mod catalog;
pub mod error;
pub mod id;
pub mod model;
pub mod snapshot;
pub mod table;

pub use catalog::Catalog;
pub use error::{CatalogError, ValidationError};
pub use id::{
    DeveloperId, EnlargerId, FilmFormatId, FilmId, FilmRollId, FinishId, FrameId, ManufacturerId,
    PaperId, PrintId, RecordId,
};
pub use model::{
    Developer, Enlarger, EnlargerKind, Film, FilmFormat, FilmRoll, FilmRollDraft, Frame, Grade,
    Manufacturer, PaperType, PhotoPaper, PhotoPaperFinish, Print, Process,
};
pub use snapshot::CatalogSnapshot;
pub use table::Table;

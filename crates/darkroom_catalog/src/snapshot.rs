//! JSON snapshots of a catalog.
//!
//! A snapshot is a plain serde document holding every table keyed by id.
//! Loading one replays every row through the same checks as the `add_*`
//! methods, in dependency order, so a hand-edited file can not smuggle in a
//! print on the wrong paper or a frame on a missing roll.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::id::{
    DeveloperId, EnlargerId, FilmFormatId, FilmId, FilmRollId, FinishId, FrameId, ManufacturerId,
    PaperId, PrintId,
};
use crate::model::{
    Developer, Enlarger, Film, FilmFormat, FilmRoll, Frame, Manufacturer, PhotoPaper,
    PhotoPaperFinish, Print,
};

/// Serialisable image of a [`Catalog`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub manufacturers: BTreeMap<ManufacturerId, Manufacturer>,
    pub film_formats: BTreeMap<FilmFormatId, FilmFormat>,
    pub films: BTreeMap<FilmId, Film>,
    pub developers: BTreeMap<DeveloperId, Developer>,
    pub film_rolls: BTreeMap<FilmRollId, FilmRoll>,
    pub frames: BTreeMap<FrameId, Frame>,
    pub finishes: BTreeMap<FinishId, PhotoPaperFinish>,
    pub papers: BTreeMap<PaperId, PhotoPaper>,
    pub enlargers: BTreeMap<EnlargerId, Enlarger>,
    pub prints: BTreeMap<PrintId, Print>,
}

/// Restore one table, checking each row against what is already loaded.
macro_rules! restore_table {
    ($catalog:ident, $rows:expr, $table:ident, $check:ident) => {
        for (id, row) in $rows {
            $catalog.$check(&row)?;
            $catalog.$table.restore(id, row)?;
        }
    };
}

impl Catalog {
    /// Copy every table into a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            manufacturers: self.manufacturers.rows().clone(),
            film_formats: self.film_formats.rows().clone(),
            films: self.films.rows().clone(),
            developers: self.developers.rows().clone(),
            film_rolls: self.film_rolls.rows().clone(),
            frames: self.frames.rows().clone(),
            finishes: self.finishes.rows().clone(),
            papers: self.papers.rows().clone(),
            enlargers: self.enlargers.rows().clone(),
            prints: self.prints.rows().clone(),
        }
    }

    /// Rebuild a catalog from a snapshot, validating every row.
    ///
    /// Ids are kept; new records added afterwards get ids above the highest
    /// restored id of their kind.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`](crate::CatalogError) a row
    /// produces. Rows may only refer to kinds restored before them.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self> {
        let mut catalog = Catalog::new();
        restore_table!(catalog, snapshot.manufacturers, manufacturers, check_manufacturer);
        restore_table!(catalog, snapshot.film_formats, film_formats, check_film_format);
        restore_table!(catalog, snapshot.films, films, check_film);
        restore_table!(catalog, snapshot.developers, developers, check_developer);
        restore_table!(catalog, snapshot.film_rolls, film_rolls, check_film_roll);
        restore_table!(catalog, snapshot.frames, frames, check_frame);
        restore_table!(catalog, snapshot.finishes, finishes, check_finish);
        restore_table!(catalog, snapshot.papers, papers, check_paper);
        restore_table!(catalog, snapshot.enlargers, enlargers, check_enlarger);
        restore_table!(catalog, snapshot.prints, prints, check_print);
        Ok(catalog)
    }

    /// Parse and validate a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Serialise the catalog to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    /// Load and validate a catalog from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let snapshot: CatalogSnapshot = serde_json::from_reader(reader)?;
        let catalog = Self::from_snapshot(snapshot)?;
        info!(
            path = %path.display(),
            films = catalog.films.len(),
            rolls = catalog.film_rolls.len(),
            prints = catalog.prints.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Write the catalog to a JSON file, replacing any existing file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &self.snapshot())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        info!(path = %path.display(), "catalog saved");
        Ok(())
    }
}

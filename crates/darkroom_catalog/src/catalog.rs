//! In-memory catalog of darkroom inventory.
//!
//! The [`Catalog`] owns one [`Table`] per record kind. Every `add_*` call
//! checks the record's own rules and every id it refers to before anything
//! is stored, so a failed call leaves the catalog untouched.

use tracing::{debug, warn};

use crate::error::{CatalogError, Result, ValidationError};
use crate::id::{
    DeveloperId, EnlargerId, FilmFormatId, FilmId, FilmRollId, FinishId, FrameId, ManufacturerId,
    PaperId, PrintId,
};
use crate::model::{
    Developer, Enlarger, Film, FilmFormat, FilmRoll, FilmRollDraft, Frame, Manufacturer,
    PhotoPaper, PhotoPaperFinish, Print,
};
use crate::table::Table;

/// The darkroom inventory: materials, equipment, negatives and prints.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) manufacturers: Table<ManufacturerId, Manufacturer>,
    pub(crate) film_formats: Table<FilmFormatId, FilmFormat>,
    pub(crate) films: Table<FilmId, Film>,
    pub(crate) developers: Table<DeveloperId, Developer>,
    pub(crate) film_rolls: Table<FilmRollId, FilmRoll>,
    pub(crate) frames: Table<FrameId, Frame>,
    pub(crate) finishes: Table<FinishId, PhotoPaperFinish>,
    pub(crate) papers: Table<PaperId, PhotoPaper>,
    pub(crate) enlargers: Table<EnlargerId, Enlarger>,
    pub(crate) prints: Table<PrintId, Print>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Materials --

    pub fn add_manufacturer(&mut self, manufacturer: Manufacturer) -> Result<ManufacturerId> {
        self.check_manufacturer(&manufacturer)?;
        let id = self.manufacturers.insert(manufacturer)?;
        debug!(%id, "added manufacturer");
        Ok(id)
    }

    pub fn add_film_format(&mut self, format: FilmFormat) -> Result<FilmFormatId> {
        self.check_film_format(&format)?;
        let id = self.film_formats.insert(format)?;
        debug!(%id, "added film format");
        Ok(id)
    }

    pub fn add_film(&mut self, film: Film) -> Result<FilmId> {
        self.check_film(&film)?;
        let label = film.label(self.manufacturers.require(film.manufacturer)?);
        let id = self.films.insert(film)?;
        debug!(%id, %label, "added film");
        Ok(id)
    }

    pub fn add_developer(&mut self, developer: Developer) -> Result<DeveloperId> {
        self.check_developer(&developer)?;
        let id = self.developers.insert(developer)?;
        debug!(%id, "added developer");
        Ok(id)
    }

    pub fn add_finish(&mut self, finish: PhotoPaperFinish) -> Result<FinishId> {
        self.check_finish(&finish)?;
        let id = self.finishes.insert(finish)?;
        debug!(%id, "added paper finish");
        Ok(id)
    }

    pub fn add_paper(&mut self, paper: PhotoPaper) -> Result<PaperId> {
        self.check_paper(&paper)?;
        let label = paper.label(self.manufacturers.require(paper.manufacturer)?);
        let id = self.papers.insert(paper)?;
        debug!(%id, %label, "added photo paper");
        Ok(id)
    }

    pub fn add_enlarger(&mut self, enlarger: Enlarger) -> Result<EnlargerId> {
        self.check_enlarger(&enlarger)?;
        let id = self.enlargers.insert(enlarger)?;
        debug!(%id, "added enlarger");
        Ok(id)
    }

    // -- Negatives and prints --

    /// Add a film roll, filling in missing speeds from the film's box speed.
    pub fn add_film_roll(&mut self, draft: FilmRollDraft) -> Result<FilmRollId> {
        let film = self.films.require(draft.film)?;
        let roll = draft.resolve(film);
        self.check_film_roll(&roll)?;
        let id = self.film_rolls.insert(roll)?;
        debug!(%id, "added film roll");
        Ok(id)
    }

    pub fn add_frame(&mut self, frame: Frame) -> Result<FrameId> {
        self.check_frame(&frame)?;
        let label = frame.label(self.film_rolls.require(frame.film_roll)?);
        let id = self.frames.insert(frame)?;
        debug!(%id, %label, "added frame");
        Ok(id)
    }

    pub fn add_print(&mut self, print: Print) -> Result<PrintId> {
        self.check_print(&print)?;
        let label = print.label();
        let id = self.prints.insert(print)?;
        debug!(%id, %label, "added print");
        Ok(id)
    }

    // -- Checks --
    //
    // Shared by the `add_*` methods and snapshot loading. None of them
    // mutate the catalog.

    pub(crate) fn check_manufacturer(&self, manufacturer: &Manufacturer) -> Result<()> {
        Ok(manufacturer.validate()?)
    }

    pub(crate) fn check_film_format(&self, format: &FilmFormat) -> Result<()> {
        Ok(format.validate()?)
    }

    pub(crate) fn check_film(&self, film: &Film) -> Result<()> {
        film.validate()?;
        self.manufacturers.require(film.manufacturer)?;
        for format in &film.formats {
            self.film_formats.require(*format)?;
        }
        Ok(())
    }

    pub(crate) fn check_developer(&self, developer: &Developer) -> Result<()> {
        developer.validate()?;
        self.manufacturers.require(developer.manufacturer)?;
        Ok(())
    }

    pub(crate) fn check_finish(&self, finish: &PhotoPaperFinish) -> Result<()> {
        Ok(finish.validate()?)
    }

    pub(crate) fn check_paper(&self, paper: &PhotoPaper) -> Result<()> {
        paper.validate()?;
        self.manufacturers.require(paper.manufacturer)?;
        for finish in &paper.finishes {
            self.finishes.require(*finish)?;
        }
        Ok(())
    }

    pub(crate) fn check_enlarger(&self, enlarger: &Enlarger) -> Result<()> {
        enlarger.validate()?;
        for format in &enlarger.formats {
            self.film_formats.require(*format)?;
        }
        Ok(())
    }

    pub(crate) fn check_film_roll(&self, roll: &FilmRoll) -> Result<()> {
        roll.validate()?;
        let film = self.films.require(roll.film)?;
        let format = self.film_formats.require(roll.format)?;
        if !film.formats.is_empty() && !film.formats.contains(&roll.format) {
            warn!(
                roll = %roll.name,
                film = %film.name,
                format = %format.name,
                "roll format not listed for film"
            );
        }
        if let Some(developer) = roll.developer {
            self.developers.require(developer)?;
        }
        if self.find_film_roll(&roll.name).is_some() {
            return Err(CatalogError::DuplicateFilmRoll(roll.name.clone()));
        }
        Ok(())
    }

    pub(crate) fn check_frame(&self, frame: &Frame) -> Result<()> {
        frame.validate()?;
        let roll = self.film_rolls.require(frame.film_roll)?;
        let taken = self
            .frames
            .iter()
            .any(|(_, f)| f.film_roll == frame.film_roll && f.index == frame.index);
        if taken {
            return Err(CatalogError::DuplicateFrame {
                roll: roll.name.clone(),
                frame_number: frame.frame_number(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_print(&self, print: &Print) -> Result<()> {
        print.validate()?;
        let paper = self.papers.require(print.paper)?;
        let finish = self.finishes.require(print.finish)?;
        if !paper.offers_finish(print.finish) {
            return Err(ValidationError::FinishNotOnPaper {
                finish: finish.name.clone(),
                paper: self.paper_label(print.paper)?,
            }
            .into());
        }

        let frame = match print.frame {
            Some(id) => Some(self.frames.require(id)?),
            None => None,
        };
        let enlarger = match print.enlarger {
            Some(id) => Some(self.enlargers.require(id)?),
            None => None,
        };
        if let (Some(frame), Some(enlarger)) = (frame, enlarger) {
            let roll = self.film_rolls.require(frame.film_roll)?;
            if !enlarger.supports(roll.format) {
                let format = self.film_formats.require(roll.format)?;
                return Err(ValidationError::EnlargerFormatMismatch {
                    enlarger: enlarger.name.clone(),
                    format: format.name.clone(),
                }
                .into());
            }
        }

        let taken = self
            .prints
            .iter()
            .any(|(_, p)| p.date == print.date && p.sequence == print.sequence);
        if taken {
            return Err(CatalogError::DuplicatePrint(print.label()));
        }
        Ok(())
    }

    // -- Tables --

    #[must_use]
    pub fn manufacturers(&self) -> &Table<ManufacturerId, Manufacturer> {
        &self.manufacturers
    }

    #[must_use]
    pub fn film_formats(&self) -> &Table<FilmFormatId, FilmFormat> {
        &self.film_formats
    }

    #[must_use]
    pub fn films(&self) -> &Table<FilmId, Film> {
        &self.films
    }

    #[must_use]
    pub fn developers(&self) -> &Table<DeveloperId, Developer> {
        &self.developers
    }

    #[must_use]
    pub fn film_rolls(&self) -> &Table<FilmRollId, FilmRoll> {
        &self.film_rolls
    }

    #[must_use]
    pub fn frames(&self) -> &Table<FrameId, Frame> {
        &self.frames
    }

    #[must_use]
    pub fn finishes(&self) -> &Table<FinishId, PhotoPaperFinish> {
        &self.finishes
    }

    #[must_use]
    pub fn papers(&self) -> &Table<PaperId, PhotoPaper> {
        &self.papers
    }

    #[must_use]
    pub fn enlargers(&self) -> &Table<EnlargerId, Enlarger> {
        &self.enlargers
    }

    #[must_use]
    pub fn prints(&self) -> &Table<PrintId, Print> {
        &self.prints
    }

    /// Record counts per kind, in dependency order.
    #[must_use]
    pub fn counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("manufacturers", self.manufacturers.len()),
            ("film formats", self.film_formats.len()),
            ("films", self.films.len()),
            ("developers", self.developers.len()),
            ("film rolls", self.film_rolls.len()),
            ("frames", self.frames.len()),
            ("paper finishes", self.finishes.len()),
            ("photo papers", self.papers.len()),
            ("enlargers", self.enlargers.len()),
            ("prints", self.prints.len()),
        ]
    }

    // -- Labels --

    pub fn film_label(&self, id: FilmId) -> Result<String> {
        let film = self.films.require(id)?;
        Ok(film.label(self.manufacturers.require(film.manufacturer)?))
    }

    pub fn developer_label(&self, id: DeveloperId) -> Result<String> {
        let developer = self.developers.require(id)?;
        Ok(developer.label(self.manufacturers.require(developer.manufacturer)?))
    }

    pub fn paper_label(&self, id: PaperId) -> Result<String> {
        let paper = self.papers.require(id)?;
        Ok(paper.label(self.manufacturers.require(paper.manufacturer)?))
    }

    pub fn frame_label(&self, id: FrameId) -> Result<String> {
        let frame = self.frames.require(id)?;
        Ok(frame.label(self.film_rolls.require(frame.film_roll)?))
    }

    // -- Lookups --

    /// Films ordered by manufacturer short name, then film name.
    #[must_use]
    pub fn films_sorted(&self) -> Vec<(FilmId, &Film)> {
        let mut films: Vec<_> = self.films.iter().collect();
        films.sort_by_key(|(_, film)| {
            let maker = self
                .manufacturers
                .get(film.manufacturer)
                .map(|m| m.short_name.clone())
                .unwrap_or_default();
            (maker, film.name.clone())
        });
        films
    }

    /// Frames on a roll, ordered by index.
    #[must_use]
    pub fn frames_for_roll(&self, roll: FilmRollId) -> Vec<(FrameId, &Frame)> {
        let mut frames: Vec<_> = self
            .frames
            .iter()
            .filter(|(_, frame)| frame.film_roll == roll)
            .collect();
        frames.sort_by_key(|(_, frame)| frame.index);
        frames
    }

    /// Prints ordered by date, then sequence.
    #[must_use]
    pub fn prints_sorted(&self) -> Vec<(PrintId, &Print)> {
        let mut prints: Vec<_> = self.prints.iter().collect();
        prints.sort_by_key(|(_, print)| (print.date, print.sequence));
        prints
    }

    #[must_use]
    pub fn find_film_roll(&self, name: &str) -> Option<(FilmRollId, &FilmRoll)> {
        self.film_rolls.iter().find(|(_, roll)| roll.name == name)
    }

    /// Find a print by its `YYYYMMDD-sequence` label.
    #[must_use]
    pub fn find_print(&self, label: &str) -> Option<(PrintId, &Print)> {
        self.prints.iter().find(|(_, print)| print.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use darkroom_exposure::PrintSize;

    use super::*;
    use crate::model::{EnlargerKind, PaperType, Process};

    /// Mirrors a small real darkroom: one maker, two formats, a multigrade
    /// paper sold only in glossy, and an enlarger with only a 35mm carrier.
    struct Fixture {
        catalog: Catalog,
        glossy: FinishId,
        matte: FinishId,
        paper: PaperId,
        frame_120: FrameId,
        frame_35mm: FrameId,
        enlarger: EnlargerId,
    }

    fn fixture() -> Fixture {
        let mut catalog = Catalog::new();
        let maker = catalog
            .add_manufacturer(Manufacturer::new("manufacturer", "test"))
            .unwrap();
        let glossy = catalog.add_finish(PhotoPaperFinish::new("glossy")).unwrap();
        let matte = catalog.add_finish(PhotoPaperFinish::new("matte")).unwrap();
        let paper = catalog
            .add_paper(
                PhotoPaper::multigrade("photo_paper", maker, PaperType::ResinCoated)
                    .with_finish(glossy),
            )
            .unwrap();

        let f35 = catalog.add_film_format(FilmFormat::new("35mm", true)).unwrap();
        let f120 = catalog.add_film_format(FilmFormat::new("120", true)).unwrap();
        let film = catalog
            .add_film(
                Film::new("film", maker, 200, Process::BlackAndWhite)
                    .with_format(f35)
                    .with_format(f120),
            )
            .unwrap();

        let roll_120 = catalog
            .add_film_roll(FilmRollDraft::new("film_roll_120", film, f120))
            .unwrap();
        let frame_120 = catalog.add_frame(Frame::new(roll_120, 1)).unwrap();
        let roll_35mm = catalog
            .add_film_roll(FilmRollDraft::new("film_roll_35mm", film, f35))
            .unwrap();
        let frame_35mm = catalog.add_frame(Frame::new(roll_35mm, 1)).unwrap();

        let enlarger = catalog
            .add_enlarger(Enlarger::new("enlarger", EnlargerKind::Condenser, false).with_format(f35))
            .unwrap();

        Fixture {
            catalog,
            glossy,
            matte,
            paper,
            frame_120,
            frame_35mm,
            enlarger,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2016, 3, 25).unwrap()
    }

    #[test]
    fn test_print_valid_finish() {
        let mut fx = fixture();
        let print = Print::new(date(), 1, fx.paper, fx.glossy);
        assert!(fx.catalog.add_print(print).is_ok());
    }

    #[test]
    fn test_print_invalid_finish() {
        let mut fx = fixture();
        let print = Print::new(date(), 1, fx.paper, fx.matte);
        let err = fx.catalog.add_print(print).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Validation(ValidationError::FinishNotOnPaper { .. })
        ));
        assert!(fx.catalog.prints().is_empty());
    }

    #[test]
    fn test_print_valid_enlarger() {
        let mut fx = fixture();
        let print = Print::new(date(), 1, fx.paper, fx.glossy)
            .from_frame(fx.frame_35mm, Some(fx.enlarger));
        assert!(fx.catalog.add_print(print).is_ok());
    }

    #[test]
    fn test_print_invalid_enlarger() {
        let mut fx = fixture();
        let print = Print::new(date(), 1, fx.paper, fx.glossy)
            .from_frame(fx.frame_120, Some(fx.enlarger));
        match fx.catalog.add_print(print) {
            Err(CatalogError::Validation(ValidationError::EnlargerFormatMismatch {
                enlarger,
                format,
            })) => {
                assert_eq!(enlarger, "enlarger");
                assert_eq!(format, "120");
            }
            other => panic!("expected format mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_print_frame_without_enlarger() {
        let mut fx = fixture();
        let print = Print::new(date(), 1, fx.paper, fx.glossy).from_frame(fx.frame_120, None);
        assert!(fx.catalog.add_print(print).is_ok());
    }

    #[test]
    fn test_print_non_positive_exposure() {
        let mut fx = fixture();
        let print = Print::new(date(), 1, fx.paper, fx.glossy)
            .with_exposure(PrintSize::new(8.0, 10.0), -3.0);
        assert!(matches!(
            fx.catalog.add_print(print),
            Err(CatalogError::Validation(ValidationError::NonPositiveExposure(_)))
        ));
    }

    #[test]
    fn test_dangling_reference_rejected() {
        let mut fx = fixture();
        let print = Print::new(date(), 1, PaperId(99), fx.glossy);
        match fx.catalog.add_print(print) {
            Err(CatalogError::NotFound { kind, id }) => {
                assert_eq!(kind, "photo paper");
                assert_eq!(id, 99);
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_film_roll_speeds_default_to_box_speed() {
        let fx = fixture();
        let (_, roll) = fx.catalog.find_film_roll("film_roll_120").unwrap();
        assert_eq!(roll.shot_speed, 200);
        assert_eq!(roll.developed_speed, 200);
    }

    #[test]
    fn test_duplicate_roll_name_rejected() {
        let mut fx = fixture();
        let (_, roll) = fx.catalog.find_film_roll("film_roll_120").unwrap();
        let draft = FilmRollDraft::new("film_roll_120", roll.film, roll.format);
        assert!(matches!(
            fx.catalog.add_film_roll(draft),
            Err(CatalogError::DuplicateFilmRoll(name)) if name == "film_roll_120"
        ));
    }

    #[test]
    fn test_duplicate_frame_rejected() {
        let mut fx = fixture();
        let roll = fx.catalog.frames().get(fx.frame_120).unwrap().film_roll;
        assert!(matches!(
            fx.catalog.add_frame(Frame::new(roll, 1)),
            Err(CatalogError::DuplicateFrame { .. })
        ));
        assert!(fx.catalog.add_frame(Frame::new(roll, -1)).is_ok());
    }

    #[test]
    fn test_frames_for_roll_sorted_by_index() {
        let mut fx = fixture();
        let roll = fx.catalog.frames().get(fx.frame_120).unwrap().film_roll;
        fx.catalog.add_frame(Frame::new(roll, 5)).unwrap();
        fx.catalog.add_frame(Frame::new(roll, -1)).unwrap();
        let numbers: Vec<_> = fx
            .catalog
            .frames_for_roll(roll)
            .into_iter()
            .map(|(_, f)| f.frame_number())
            .collect();
        assert_eq!(numbers, vec!["00", "1", "5"]);
    }

    #[test]
    fn test_labels() {
        let fx = fixture();
        assert_eq!(fx.catalog.paper_label(fx.paper).unwrap(), "test photo_paper");
        assert_eq!(fx.catalog.frame_label(fx.frame_35mm).unwrap(), "film_roll_35mm-1");
        assert_eq!(fx.catalog.film_label(FilmId(1)).unwrap(), "test film");
    }

    #[test]
    fn test_films_sorted_by_maker_then_name() {
        let mut catalog = Catalog::new();
        let kodak = catalog
            .add_manufacturer(Manufacturer::new("Eastman Kodak", "Kodak"))
            .unwrap();
        let ilford = catalog
            .add_manufacturer(Manufacturer::new("Ilford Photo", "Ilford"))
            .unwrap();
        catalog
            .add_film(Film::new("Tri-X", kodak, 400, Process::BlackAndWhite))
            .unwrap();
        catalog
            .add_film(Film::new("HP5 Plus", ilford, 400, Process::BlackAndWhite))
            .unwrap();
        catalog
            .add_film(Film::new("FP4 Plus", ilford, 125, Process::BlackAndWhite))
            .unwrap();

        let names: Vec<_> = catalog
            .films_sorted()
            .into_iter()
            .map(|(id, _)| catalog.film_label(id).unwrap())
            .collect();
        assert_eq!(names, vec!["Ilford FP4 Plus", "Ilford HP5 Plus", "Kodak Tri-X"]);
    }

    #[test]
    fn test_find_print_by_label() {
        let mut fx = fixture();
        fx.catalog
            .add_print(Print::new(date(), 2, fx.paper, fx.glossy))
            .unwrap();
        let (_, print) = fx.catalog.find_print("20160325-2").unwrap();
        assert_eq!(print.sequence, 2);
        assert!(fx.catalog.find_print("20160325-3").is_none());
    }

    #[test]
    fn test_roll_format_not_listed_for_film_is_accepted() {
        let mut catalog = Catalog::new();
        let ilford = catalog
            .add_manufacturer(Manufacturer::new("Ilford Photo", "Ilford"))
            .unwrap();
        let f35 = catalog.add_film_format(FilmFormat::new("35mm", false)).unwrap();
        let f120 = catalog.add_film_format(FilmFormat::new("120", true)).unwrap();
        let hp5 = catalog
            .add_film(Film::new("HP5 Plus", ilford, 400, Process::BlackAndWhite).with_format(f35))
            .unwrap();
        let roll = catalog
            .add_film_roll(FilmRollDraft::new("R001", hp5, f120))
            .unwrap();
        assert_eq!(catalog.film_rolls().get(roll).unwrap().format, f120);
    }

    #[test]
    fn test_duplicate_print_label_rejected() {
        let mut fx = fixture();
        fx.catalog
            .add_print(Print::new(date(), 1, fx.paper, fx.glossy))
            .unwrap();
        assert!(matches!(
            fx.catalog.add_print(Print::new(date(), 1, fx.paper, fx.glossy)),
            Err(CatalogError::DuplicatePrint(label)) if label == "20160325-1"
        ));
        assert_eq!(fx.catalog.prints().len(), 1);

        // Same sequence on another day is a different print.
        let next_day = date().succ_opt().unwrap();
        assert!(fx
            .catalog
            .add_print(Print::new(next_day, 1, fx.paper, fx.glossy))
            .is_ok());
    }
}

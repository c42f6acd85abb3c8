//! Individual rolls of film and the frames on them.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Film, require_name};
use crate::error::ValidationError;
use crate::id::{DeveloperId, FilmFormatId, FilmId, FilmRollId};

/// A film roll as entered, before its speeds are resolved against the film.
///
/// Either speed may be left out; see [`FilmRollDraft::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmRollDraft {
    pub name: String,
    pub film: FilmId,
    pub format: FilmFormatId,
    #[serde(default)]
    pub developer: Option<DeveloperId>,
    #[serde(default)]
    pub shot_speed: Option<u32>,
    #[serde(default)]
    pub developed_speed: Option<u32>,
    #[serde(default)]
    pub shot_date: Option<NaiveDate>,
    #[serde(default)]
    pub developed_date: Option<NaiveDate>,
    #[serde(default)]
    pub photographer: Option<String>,
}

impl FilmRollDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, film: FilmId, format: FilmFormatId) -> Self {
        Self {
            name: name.into(),
            film,
            format,
            developer: None,
            shot_speed: None,
            developed_speed: None,
            shot_date: None,
            developed_date: None,
            photographer: None,
        }
    }

    #[must_use]
    pub fn shot_at(mut self, speed: u32) -> Self {
        self.shot_speed = Some(speed);
        self
    }

    #[must_use]
    pub fn developed_at(mut self, speed: u32) -> Self {
        self.developed_speed = Some(speed);
        self
    }

    #[must_use]
    pub fn with_developer(mut self, developer: DeveloperId) -> Self {
        self.developer = Some(developer);
        self
    }

    #[must_use]
    pub fn with_dates(mut self, shot: Option<NaiveDate>, developed: Option<NaiveDate>) -> Self {
        self.shot_date = shot;
        self.developed_date = developed;
        self
    }

    #[must_use]
    pub fn with_photographer(mut self, photographer: impl Into<String>) -> Self {
        self.photographer = Some(photographer.into());
        self
    }

    /// Fill in missing speeds from the film's box speed.
    ///
    /// A roll with no speeds was shot and developed at box speed. A roll with
    /// only a shot speed was developed for that speed. A roll with only a
    /// developed speed was shot at box speed.
    #[must_use]
    pub fn resolve(self, film: &Film) -> FilmRoll {
        let (shot_speed, developed_speed) = match (self.shot_speed, self.developed_speed) {
            (None, None) => (film.speed, film.speed),
            (Some(shot), None) => (shot, shot),
            (None, Some(developed)) => (film.speed, developed),
            (Some(shot), Some(developed)) => (shot, developed),
        };
        FilmRoll {
            name: self.name,
            film: self.film,
            format: self.format,
            developer: self.developer,
            shot_speed,
            developed_speed,
            shot_date: self.shot_date,
            developed_date: self.developed_date,
            photographer: self.photographer,
        }
    }
}

/// A single roll (or batch of sheets) of a film stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmRoll {
    /// Unique name, usually the negative sleeve number.
    pub name: String,
    pub film: FilmId,
    pub format: FilmFormatId,
    pub developer: Option<DeveloperId>,
    /// Exposure index the roll was shot at.
    pub shot_speed: u32,
    /// Speed the roll was developed for (push/pull).
    pub developed_speed: u32,
    pub shot_date: Option<NaiveDate>,
    pub developed_date: Option<NaiveDate>,
    pub photographer: Option<String>,
}

impl FilmRoll {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "film roll name")?;
        if self.shot_speed == 0 {
            return Err(ValidationError::ZeroSpeed("shot speed"));
        }
        if self.developed_speed == 0 {
            return Err(ValidationError::ZeroSpeed("developed speed"));
        }
        Ok(())
    }

    /// Push (positive) or pull (negative) in stops relative to the speed the
    /// roll was shot at.
    #[must_use]
    pub fn push_stops(&self) -> f64 {
        (f64::from(self.developed_speed) / f64::from(self.shot_speed)).log2()
    }
}

impl fmt::Display for FilmRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One negative on a film roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub film_roll: FilmRollId,
    /// Position on the roll. `-1` is the "00" frame before frame 0.
    pub index: i32,
}

impl Frame {
    /// Lowest valid index, printed as "00".
    pub const DOUBLE_ZERO: i32 = -1;

    #[must_use]
    pub fn new(film_roll: FilmRollId, index: i32) -> Self {
        Self { film_roll, index }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.index < Self::DOUBLE_ZERO {
            return Err(ValidationError::FrameIndexOutOfRange(self.index));
        }
        Ok(())
    }

    /// Number as printed on the film edge.
    #[must_use]
    pub fn frame_number(&self) -> String {
        if self.index == Self::DOUBLE_ZERO {
            "00".to_string()
        } else {
            self.index.to_string()
        }
    }

    /// `"{roll name}-{frame number}"`.
    #[must_use]
    pub fn label(&self, roll: &FilmRoll) -> String {
        format!("{}-{}", roll.name, self.frame_number())
    }
}

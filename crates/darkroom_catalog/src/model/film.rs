//! Film stocks, formats and developers.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Manufacturer, branded_label, require_name};
use crate::error::ValidationError;
use crate::id::{FilmFormatId, ManufacturerId};

/// A film format such as 35mm, 120 or 4x5 sheet film.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmFormat {
    pub name: String,
    /// `true` for roll film, `false` for sheet film.
    pub roll_film: bool,
}

impl FilmFormat {
    #[must_use]
    pub fn new(name: impl Into<String>, roll_film: bool) -> Self {
        Self {
            name: name.into(),
            roll_film,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "film format name")
    }
}

impl fmt::Display for FilmFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Chemical process a film is designed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Process {
    #[serde(rename = "B&W")]
    BlackAndWhite,
    #[serde(rename = "C41")]
    C41,
    #[serde(rename = "E6")]
    E6,
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Process::BlackAndWhite => "black and white",
            Process::C41 => "C-41",
            Process::E6 => "E-6",
        })
    }
}

/// A film stock, e.g. Ilford HP5 Plus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub name: String,
    pub manufacturer: ManufacturerId,
    /// Box speed (ISO).
    pub speed: u32,
    /// Formats the stock is sold in.
    #[serde(default)]
    pub formats: BTreeSet<FilmFormatId>,
    pub process: Process,
}

impl Film {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        manufacturer: ManufacturerId,
        speed: u32,
        process: Process,
    ) -> Self {
        Self {
            name: name.into(),
            manufacturer,
            speed,
            formats: BTreeSet::new(),
            process,
        }
    }

    /// Add a format the stock is available in.
    #[must_use]
    pub fn with_format(mut self, format: FilmFormatId) -> Self {
        self.formats.insert(format);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "film name")?;
        if self.speed == 0 {
            return Err(ValidationError::ZeroSpeed("film speed"));
        }
        Ok(())
    }

    /// `"{short name} {name}"`, e.g. `"Ilford HP5 Plus"`.
    #[must_use]
    pub fn label(&self, manufacturer: &Manufacturer) -> String {
        branded_label(manufacturer, &self.name)
    }
}

/// A film developer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Developer {
    pub name: String,
    pub manufacturer: ManufacturerId,
    /// `true` for powder developers mixed into stock solution.
    pub powder: bool,
}

impl Developer {
    #[must_use]
    pub fn new(name: impl Into<String>, manufacturer: ManufacturerId, powder: bool) -> Self {
        Self {
            name: name.into(),
            manufacturer,
            powder,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "developer name")
    }

    #[must_use]
    pub fn label(&self, manufacturer: &Manufacturer) -> String {
        branded_label(manufacturer, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maker() -> Manufacturer {
        Manufacturer::new("test manufacturer", "test")
    }

    #[test]
    fn test_format_display() {
        assert_eq!(FilmFormat::new("test film_format", true).to_string(), "test film_format");
    }

    #[test]
    fn test_film_label_uses_short_name() {
        let film = Film::new("test film", ManufacturerId(1), 200, Process::BlackAndWhite);
        assert_eq!(film.label(&maker()), "test test film");
    }

    #[test]
    fn test_developer_label_uses_short_name() {
        let dev = Developer::new("test developer", ManufacturerId(1), false);
        assert_eq!(dev.label(&maker()), "test test developer");
    }

    #[test]
    fn test_process_wire_names() {
        assert_eq!(serde_json::to_string(&Process::BlackAndWhite).unwrap(), r#""B&W""#);
        let p: Process = serde_json::from_str(r#""C41""#).unwrap();
        assert_eq!(p, Process::C41);
        assert_eq!(Process::E6.to_string(), "E-6");
    }

    #[test]
    fn test_with_format_deduplicates() {
        let film = Film::new("HP5 Plus", ManufacturerId(1), 400, Process::BlackAndWhite)
            .with_format(FilmFormatId(2))
            .with_format(FilmFormatId(2));
        assert_eq!(film.formats.len(), 1);
    }
}

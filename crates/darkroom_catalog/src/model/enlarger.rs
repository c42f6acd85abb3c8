use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::require_name;
use crate::error::ValidationError;
use crate::id::FilmFormatId;

/// Light source of an enlarger head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnlargerKind {
    Condenser,
    Diffuser,
}

impl fmt::Display for EnlargerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EnlargerKind::Condenser => "condenser",
            EnlargerKind::Diffuser => "diffuser",
        })
    }
}

/// An enlarger and the negative formats it has carriers for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enlarger {
    pub name: String,
    pub kind: EnlargerKind,
    /// Has a dichroic colour head (can dial in multigrade filtration).
    pub color_head: bool,
    #[serde(default)]
    pub formats: BTreeSet<FilmFormatId>,
}

impl Enlarger {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EnlargerKind, color_head: bool) -> Self {
        Self {
            name: name.into(),
            kind,
            color_head,
            formats: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_format(mut self, format: FilmFormatId) -> Self {
        self.formats.insert(format);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "enlarger name")
    }

    #[must_use]
    pub fn supports(&self, format: FilmFormatId) -> bool {
        self.formats.contains(&format)
    }
}

impl fmt::Display for Enlarger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let e = Enlarger::new("test enlarger", EnlargerKind::Condenser, false);
        assert_eq!(e.to_string(), "test enlarger");
    }

    #[test]
    fn test_supports_only_listed_formats() {
        let e = Enlarger::new("Durst M605", EnlargerKind::Diffuser, true).with_format(FilmFormatId(1));
        assert!(e.supports(FilmFormatId(1)));
        assert!(!e.supports(FilmFormatId(2)));
    }
}

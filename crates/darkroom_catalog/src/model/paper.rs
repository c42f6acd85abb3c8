//! Photographic papers and their surface finishes.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Manufacturer, branded_label, require_name};
use crate::error::ValidationError;
use crate::id::{FinishId, ManufacturerId};

/// A paper surface, e.g. glossy, pearl or matte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPaperFinish {
    pub name: String,
}

impl PhotoPaperFinish {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "finish name")
    }
}

impl fmt::Display for PhotoPaperFinish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Paper base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaperType {
    /// Resin-coated.
    #[serde(rename = "RC")]
    ResinCoated,
    /// Fibre-based.
    #[serde(rename = "FB")]
    FibreBased,
}

impl fmt::Display for PaperType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaperType::ResinCoated => "resin-coated",
            PaperType::FibreBased => "fibre-based",
        })
    }
}

/// Contrast grade of a graded paper, from 00 (softest) to 5 (hardest).
///
/// Stored as an integer where grade 00 is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub struct Grade(i8);

impl Grade {
    pub const DOUBLE_ZERO: Grade = Grade(-1);
    pub const MIN: i8 = -1;
    pub const MAX: i8 = 5;

    /// Create a grade from its stored value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::GradeOutOfRange`] outside `-1..=5`.
    pub fn new(value: i8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::GradeOutOfRange(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> i8 {
        self.0
    }
}

impl TryFrom<i8> for Grade {
    type Error = ValidationError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grade> for i8 {
    fn from(grade: Grade) -> Self {
        grade.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::DOUBLE_ZERO {
            f.write_str("00")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A photographic paper product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoPaper {
    pub name: String,
    pub manufacturer: ManufacturerId,
    pub paper_type: PaperType,
    /// Variable-contrast paper, graded by filtration at print time.
    pub multigrade: bool,
    /// Fixed grade; only set for graded papers.
    #[serde(default)]
    pub grade: Option<Grade>,
    /// Finishes the paper is sold in.
    #[serde(default)]
    pub finishes: BTreeSet<FinishId>,
}

impl PhotoPaper {
    /// A variable-contrast paper.
    #[must_use]
    pub fn multigrade(
        name: impl Into<String>,
        manufacturer: ManufacturerId,
        paper_type: PaperType,
    ) -> Self {
        Self {
            name: name.into(),
            manufacturer,
            paper_type,
            multigrade: true,
            grade: None,
            finishes: BTreeSet::new(),
        }
    }

    /// A fixed-grade paper.
    #[must_use]
    pub fn graded(
        name: impl Into<String>,
        manufacturer: ManufacturerId,
        paper_type: PaperType,
        grade: Grade,
    ) -> Self {
        Self {
            name: name.into(),
            manufacturer,
            paper_type,
            multigrade: false,
            grade: Some(grade),
            finishes: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_finish(mut self, finish: FinishId) -> Self {
        self.finishes.insert(finish);
        self
    }

    /// A paper is either multigrade with no grade, or graded with one.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "paper name")?;
        match (self.multigrade, self.grade) {
            (true, Some(_)) => Err(ValidationError::MultigradeWithGrade),
            (false, None) => Err(ValidationError::GradedWithoutGrade),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn offers_finish(&self, finish: FinishId) -> bool {
        self.finishes.contains(&finish)
    }

    #[must_use]
    pub fn label(&self, manufacturer: &Manufacturer) -> String {
        branded_label(manufacturer, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(multigrade: bool, grade: Option<i8>) -> PhotoPaper {
        PhotoPaper {
            name: "test photo_paper".to_string(),
            manufacturer: ManufacturerId(1),
            paper_type: PaperType::ResinCoated,
            multigrade,
            grade: grade.map(|g| Grade::new(g).unwrap()),
            finishes: BTreeSet::new(),
        }
    }

    #[test]
    fn test_multigrade_valid() {
        assert!(paper(true, None).validate().is_ok());
    }

    #[test]
    fn test_multigrade_with_grade_invalid() {
        assert_eq!(
            paper(true, Some(2)).validate(),
            Err(ValidationError::MultigradeWithGrade)
        );
    }

    #[test]
    fn test_graded_valid() {
        assert!(paper(false, Some(2)).validate().is_ok());
    }

    #[test]
    fn test_graded_without_grade_invalid() {
        assert_eq!(
            paper(false, None).validate(),
            Err(ValidationError::GradedWithoutGrade)
        );
    }

    #[test]
    fn test_label() {
        let maker = Manufacturer::new("test manufacturer", "test");
        assert_eq!(paper(true, None).label(&maker), "test test photo_paper");
    }

    #[test]
    fn test_grade_range_and_display() {
        assert_eq!(Grade::new(-1).unwrap().to_string(), "00");
        assert_eq!(Grade::new(0).unwrap().to_string(), "0");
        assert_eq!(Grade::new(5).unwrap().to_string(), "5");
        assert_eq!(Grade::new(6), Err(ValidationError::GradeOutOfRange(6)));
        assert_eq!(Grade::new(-2), Err(ValidationError::GradeOutOfRange(-2)));
    }

    #[test]
    fn test_grade_deserialize_rejects_out_of_range() {
        let grade: Grade = serde_json::from_str("-1").unwrap();
        assert_eq!(grade, Grade::DOUBLE_ZERO);
        assert!(serde_json::from_str::<Grade>("9").is_err());
    }

    #[test]
    fn test_paper_type_wire_names() {
        assert_eq!(serde_json::to_string(&PaperType::FibreBased).unwrap(), r#""FB""#);
        assert_eq!(PaperType::ResinCoated.to_string(), "resin-coated");
    }
}

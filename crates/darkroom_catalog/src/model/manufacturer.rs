use std::fmt;

use serde::{Deserialize, Serialize};

use super::require_name;
use crate::error::ValidationError;

/// A maker of film, chemistry, paper or equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Full name, e.g. `"Ilford Photo"`.
    pub name: String,
    /// Short name used in product labels, e.g. `"Ilford"`.
    pub short_name: String,
}

impl Manufacturer {
    #[must_use]
    pub fn new(name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require_name(&self.name, "manufacturer name")?;
        require_name(&self.short_name, "manufacturer short name")
    }
}

impl fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

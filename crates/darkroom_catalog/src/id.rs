//! Record identifiers.
//!
//! Every record kind gets its own `u64` newtype so a [`FilmId`] can never be
//! passed where a [`PaperId`] is expected. Ids are allocated per table and
//! start at 1.

use serde::{Deserialize, Serialize};

/// Common behaviour of all record identifiers.
pub trait RecordId: Copy + Ord + std::fmt::Debug + std::fmt::Display {
    /// Human-readable name of the record kind (e.g. `"film"`).
    const KIND: &'static str;

    /// Wrap a raw identifier.
    fn from_raw(id: u64) -> Self;

    /// Returns the raw identifier.
    fn raw(self) -> u64;
}

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl RecordId for $name {
            const KIND: &'static str = $kind;

            fn from_raw(id: u64) -> Self {
                Self(id)
            }

            fn raw(self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", $kind, self.0)
            }
        }
    };
}

record_id!(
    /// Identifies a [`Manufacturer`](crate::Manufacturer).
    ManufacturerId,
    "manufacturer"
);
record_id!(
    /// Identifies a [`FilmFormat`](crate::FilmFormat).
    FilmFormatId,
    "film format"
);
record_id!(
    /// Identifies a [`Film`](crate::Film).
    FilmId,
    "film"
);
record_id!(
    /// Identifies a [`Developer`](crate::Developer).
    DeveloperId,
    "developer"
);
record_id!(
    /// Identifies a [`FilmRoll`](crate::FilmRoll).
    FilmRollId,
    "film roll"
);
record_id!(
    /// Identifies a [`Frame`](crate::Frame).
    FrameId,
    "frame"
);
record_id!(
    /// Identifies a [`PhotoPaperFinish`](crate::PhotoPaperFinish).
    FinishId,
    "paper finish"
);
record_id!(
    /// Identifies a [`PhotoPaper`](crate::PhotoPaper).
    PaperId,
    "photo paper"
);
record_id!(
    /// Identifies an [`Enlarger`](crate::Enlarger).
    EnlargerId,
    "enlarger"
);
record_id!(
    /// Identifies a [`Print`](crate::Print).
    PrintId,
    "print"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_kind() {
        assert_eq!(FilmId(3).to_string(), "film#3");
        assert_eq!(PaperId(12).to_string(), "photo paper#12");
    }

    #[test]
    fn test_raw_roundtrip() {
        let id = FrameId::from_raw(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(<FrameId as RecordId>::KIND, "frame");
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&PrintId(7)).unwrap();
        assert_eq!(json, "7");
        let id: PrintId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, PrintId(7));
    }
}

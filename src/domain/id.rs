//! Opaque stable identifiers for notes and tags.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ulid::Ulid;

/// Number of characters shown when an id is abbreviated for display.
const PREFIX_LEN: usize = 10;

/// Error returned when parsing an empty identifier.
#[derive(Debug, Clone)]
pub struct ParseIdError {
    kind: &'static str,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} id cannot be empty", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generates a fresh identifier (a ULID, so ids sort by creation time).
            pub fn new() -> Self {
                Self(Ulid::new().to_string())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the leading characters used in listings.
            pub fn prefix(&self) -> &str {
                match self.0.char_indices().nth(PREFIX_LEN) {
                    Some((end, _)) => &self.0[..end],
                    None => &self.0,
                }
            }

            /// Returns the creation time encoded in the id.
            ///
            /// Ids written by other tools need not be ULIDs, in which case
            /// there is no timestamp to recover.
            pub fn timestamp(&self) -> Option<DateTime<Utc>> {
                let ulid = Ulid::from_string(&self.0).ok()?;
                DateTime::from_timestamp_millis(ulid.timestamp_ms() as i64)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(\"{}\")", stringify!($name), self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ParseIdError { kind: $kind });
                }
                Ok(Self(s.to_string()))
            }
        }
    };
}

opaque_id!(
    /// Identifier of a note. Immutable for the lifetime of the note.
    NoteId,
    "note"
);

opaque_id!(
    /// Identifier of a tag. Notes hold these instead of embedding tags.
    TagId,
    "tag"
);

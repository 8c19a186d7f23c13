/// Shared types used across the codebase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Polymorphic record identifier.
///
/// Records carry two identifiers: a store-native serial sequence id and an
/// externally visible object id (UUID). Clients may address a record by
/// either form; the variant is resolved once at the API boundary by format
/// inspection and dispatched to the matching column/field from there on.
///
/// Serializes as a JSON number (serial) or a UUID string (object id), which
/// is also the shape embedded in token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Serial(i64),
    Object(Uuid),
}

impl RecordId {
    /// Resolve a raw path segment into an identifier variant.
    ///
    /// All-decimal-digit input is a serial id; anything that parses as a
    /// UUID is an object id. Everything else is rejected, never retried as
    /// the other form against the store.
    pub fn parse(raw: &str) -> Option<RecordId> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            return raw.parse::<i64>().ok().map(RecordId::Serial);
        }
        Uuid::parse_str(raw).ok().map(RecordId::Object)
    }
}

impl FromStr for RecordId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s).ok_or(())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Serial(n) => write!(f, "{}", n),
            RecordId::Object(u) => write!(f, "{}", u),
        }
    }
}

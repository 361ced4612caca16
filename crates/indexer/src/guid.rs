use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IndexerError;

/// Length of a Unity asset GUID in characters.
pub const GUID_LEN: usize = 32;

/// Check whether a token is syntactically a Unity asset GUID: exactly
/// 32 characters, each one of `0-9a-f`. Uppercase is rejected.
pub fn is_guid(word: &str) -> bool {
    word.len() == GUID_LEN
        && word
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// A validated Unity asset GUID, e.g. `0ef2e22c39155c943b015dcf2f79bb99`.
///
/// Validity is purely syntactic; there is no checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Guid(String);

impl Guid {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Guid {
    type Err = IndexerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_guid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(IndexerError::InvalidGuid(s.to_string()))
        }
    }
}

impl TryFrom<String> for Guid {
    type Error = IndexerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Guid> for String {
    fn from(guid: Guid) -> Self {
        guid.0
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

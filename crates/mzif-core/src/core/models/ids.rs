use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of characters in a structure identifier line (e.g. `1ABC`).
pub const STRUCTURE_ID_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StructureId(String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "Structure identifier must be exactly {len} characters (got '{0}')",
    len = STRUCTURE_ID_LEN
)]
pub struct ParseStructureIdError(pub String);

impl StructureId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for StructureId {
    type Err = ParseStructureIdError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_string())
    }
}

impl TryFrom<String> for StructureId {
    type Error = ParseStructureIdError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        if s.chars().count() == STRUCTURE_ID_LEN {
            Ok(Self(s))
        } else {
            Err(ParseStructureIdError(s))
        }
    }
}

impl From<StructureId> for String {
    fn from(id: StructureId) -> Self {
        id.0
    }
}

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StructureId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_four_character_identifiers() {
        let id: StructureId = "1ABC".parse().unwrap();
        assert_eq!(id.as_str(), "1ABC");
        assert_eq!(id.to_string(), "1ABC");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert!("1ÄBC".parse::<StructureId>().is_ok());
    }

    #[test]
    fn rejects_other_lengths() {
        assert_eq!(
            "1AB".parse::<StructureId>(),
            Err(ParseStructureIdError("1AB".to_string()))
        );
        assert!("1ABCD".parse::<StructureId>().is_err());
        assert!("".parse::<StructureId>().is_err());
    }
}

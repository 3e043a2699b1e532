//! Identifier types

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identity of a cart line.
///
/// Positional indices shift when an earlier line is removed; a `LineId`
/// keeps pointing at the same line for as long as it exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(Uuid);

impl LineId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(LineId::generate(), LineId::generate());
    }

    #[test]
    fn display_has_prefix() {
        let uuid = Uuid::nil();
        assert_eq!(
            LineId::from_uuid(uuid).to_string(),
            "line:00000000-0000-0000-0000-000000000000"
        );
    }
}

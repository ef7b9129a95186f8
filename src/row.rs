//! Lookup table rows

use serde::{Deserialize, Serialize};

/// Maximum byte length of a row's `name` and `description`, enforced by the
/// storage schema
pub const MAX_TEXT_LEN: usize = 128;

/// A reference-table row mirroring one enumeration member.
///
/// `id` is dictated by the member's integer value, never auto-generated.
/// `description` is the empty string when the member carries no annotation;
/// rows never hold an absent marker for it. Seeded rows are read-only to the
/// application afterwards, though hand-edits made directly in the database
/// survive reseeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRow {
    /// Primary identity, equal to the enumeration member's value
    pub id: i32,
    /// Symbolic name of the member
    pub name: String,
    /// Description annotation, or empty
    pub description: String,
}

impl LookupRow {
    /// Create a new row
    pub fn new(id: i32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for LookupRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            write!(f, "{} {}", self.id, self.name)
        } else {
            write!(f, "{} {} ({})", self.id, self.name, self.description)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_creation() {
        let row = LookupRow::new(1, "Brilliant", "Something really good");
        assert_eq!(row.id, 1);
        assert_eq!(row.name, "Brilliant");
        assert_eq!(row.description, "Something really good");
    }

    #[test]
    fn test_display() {
        assert_eq!(LookupRow::new(2, "Good", "").to_string(), "2 Good");
        assert_eq!(
            LookupRow::new(5, "Terrible", "Something really bad").to_string(),
            "5 Terrible (Something really bad)"
        );
    }
}

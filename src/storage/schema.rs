//! Database schema definitions

use crate::row::MAX_TEXT_LEN;

/// Default lookup table name
pub const DEFAULT_TABLE: &str = "lookup";

/// SQL to create a lookup table.
///
/// `id` carries the enumeration member's value, so no AUTOINCREMENT; the
/// primary key doubles as the unique-constraint backstop against two seeding
/// passes staging the same id. Text columns get the length bound the row
/// model documents.
pub fn create_lookup_table(table: &str) -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS {table} (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL CHECK (length(name) <= {max}),
    description TEXT NOT NULL DEFAULT '' CHECK (length(description) <= {max})
)
"#,
        table = table,
        max = MAX_TEXT_LEN
    )
}

/// Check that a table name is a bare SQL identifier.
///
/// Table names are interpolated into statements, so anything beyond
/// `[A-Za-z_][A-Za-z0-9_]*` is refused at open time.
pub fn is_valid_table_name(table: &str) -> bool {
    let mut chars = table.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

//! SQLite storage implementation

use std::collections::HashSet;
use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};

use super::schema;
use crate::row::LookupRow;
use crate::seed::LookupStore;
use crate::{Error, Result};

/// SQLite-backed lookup table with an in-memory staging buffer.
///
/// One table per enumeration; the table name is fixed at open time. Staged
/// rows are invisible to readers until [`commit`](Self::commit), but they do
/// count as existing for reconciliation, so seeding twice against one open
/// store stages nothing the second time.
#[derive(Debug)]
pub struct SqliteLookupStore {
    conn: Connection,
    table: String,
    staged: Vec<LookupRow>,
}

impl SqliteLookupStore {
    /// Open a database file (creates if it doesn't exist) with the default
    /// lookup table
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_table(path, schema::DEFAULT_TABLE)
    }

    /// Open a database file with a named lookup table
    pub fn open_table(path: &Path, table: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::with_connection(conn, table)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::with_connection(conn, schema::DEFAULT_TABLE)
    }

    fn with_connection(conn: Connection, table: &str) -> Result<Self> {
        if !schema::is_valid_table_name(table) {
            return Err(Error::InvalidTableName(table.to_string()));
        }
        let store = Self {
            conn,
            table: table.to_string(),
            staged: Vec::new(),
        };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<()> {
        self.conn.execute(&schema::create_lookup_table(&self.table), [])?;
        Ok(())
    }

    /// Table this store reads and seeds
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Rows staged but not yet committed
    pub fn staged_rows(&self) -> &[LookupRow] {
        &self.staged
    }

    /// Insert all staged rows, then clear the buffer.
    ///
    /// Plain inserts. A duplicate id (for instance from a concurrent seeding
    /// pass that staged the same member) surfaces as a key-constraint error
    /// here; rows inserted before the failure stay put unless the caller
    /// wrapped the pass in its own transaction. Returns the number of rows
    /// written.
    pub fn commit(&mut self) -> Result<usize> {
        let sql = format!(
            "INSERT INTO {} (id, name, description) VALUES (?1, ?2, ?3)",
            self.table
        );
        {
            let mut stmt = self.conn.prepare(&sql)?;
            for row in &self.staged {
                stmt.execute(params![row.id, row.name, row.description])?;
            }
        }

        let count = self.staged.len();
        self.staged.clear();
        tracing::info!("committed {} lookup rows into `{}`", count, self.table);
        Ok(count)
    }

    /// Insert a row directly, bypassing staging.
    ///
    /// This is the hand-maintenance path; seeded rows normally arrive through
    /// [`stage`](LookupStore::stage) and [`commit`](Self::commit).
    pub fn insert_row(&self, row: &LookupRow) -> Result<()> {
        let sql = format!(
            "INSERT INTO {} (id, name, description) VALUES (?1, ?2, ?3)",
            self.table
        );
        self.conn.execute(&sql, params![row.id, row.name, row.description])?;
        Ok(())
    }

    /// Get a committed row by id
    pub fn get_row(&self, id: i32) -> Result<Option<LookupRow>> {
        let sql = format!(
            "SELECT id, name, description FROM {} WHERE id = ?1",
            self.table
        );
        self.conn
            .query_row(&sql, [id], |row| self.row_to_lookup(row))
            .optional()
            .map_err(Into::into)
    }

    /// All committed rows, ordered by id
    pub fn all_rows(&self) -> Result<Vec<LookupRow>> {
        let sql = format!(
            "SELECT id, name, description FROM {} ORDER BY id",
            self.table
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let rows = stmt
            .query_map([], |row| self.row_to_lookup(row))?
            .filter_map(|r| r.ok())
            .collect();

        Ok(rows)
    }

    /// Count committed rows
    pub fn count_rows(&self) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.table);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to a LookupRow
    fn row_to_lookup(&self, row: &rusqlite::Row) -> rusqlite::Result<LookupRow> {
        Ok(LookupRow {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        })
    }
}

impl LookupStore for SqliteLookupStore {
    fn existing_ids(&self) -> Result<HashSet<i32>> {
        let sql = format!("SELECT id FROM {}", self.table);
        let mut stmt = self.conn.prepare(&sql)?;

        let mut ids: HashSet<i32> = stmt
            .query_map([], |row| row.get(0))?
            .filter_map(|r| r.ok())
            .collect();

        ids.extend(self.staged.iter().map(|r| r.id));
        Ok(ids)
    }

    fn stage(&mut self, row: LookupRow) {
        tracing::debug!("staged row {} into `{}`", row.id, self.table);
        self.staged.push(row);
    }
}

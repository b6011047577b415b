//! `SQLite` schema for the slot database.
//!
//! The slot database is a single key-value table. Schema creation is
//! idempotent, and a version marker is kept in the table itself so future
//! layouts can migrate from older databases.

use rusqlite::Connection;

use crate::error::Result;

/// The current schema version.
pub const CURRENT_VERSION: i32 = 1;

/// Key under which the schema version is stored.
const VERSION_KEY: &str = "schema_version";

/// SQL statement to create the slots table.
pub const CREATE_SLOTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS slots (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[CREATE_SLOTS_TABLE];

/// Initialize the slot database schema.
///
/// Creates the table if it doesn't exist and stamps the schema version on
/// a fresh database.
///
/// # Errors
///
/// Returns an error if a schema statement fails.
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    for statement in SCHEMA_STATEMENTS {
        conn.execute(statement, [])?;
    }

    conn.execute(
        "INSERT OR IGNORE INTO slots (key, value) VALUES (?1, ?2)",
        (VERSION_KEY, CURRENT_VERSION.to_string()),
    )?;

    Ok(())
}

/// Read the schema version from an initialized database.
///
/// # Errors
///
/// Returns an error if the version row is missing or unreadable.
pub fn schema_version(conn: &Connection) -> Result<i32> {
    let value: String = conn.query_row(
        "SELECT value FROM slots WHERE key = ?1",
        [VERSION_KEY],
        |row| row.get(0),
    )?;
    Ok(value.parse().unwrap_or(0))
}

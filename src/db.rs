//! Database initialization.

use rusqlite::Connection;

use crate::storage::create_storage_table;

/// Create the tables used by the application if they do not exist yet.
///
/// # Errors
/// Returns an error if a table cannot be created.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_storage_table(connection)
}

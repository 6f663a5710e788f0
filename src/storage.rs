//! Persistent key-value storage backed by a single SQLite table.
//!
//! Each key holds one whole value. Writes replace the previous value, there
//! are no partial updates.

use rusqlite::{Connection, OptionalExtension};
use serde::{Serialize, de::DeserializeOwned};

use crate::Error;

/// The key for the JSON encoded list of entries.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// The key for the JSON encoded list of category names.
pub const CATEGORIES_KEY: &str = "categories";
/// The key for the dark mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Create the storage table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_storage_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        (),
    )?;

    Ok(())
}

/// Get the raw value stored under `key`, or `None` if the key has never been
/// written or has been removed.
pub fn get_item(key: &str, connection: &Connection) -> Result<Option<String>, Error> {
    connection
        .prepare("SELECT value FROM storage WHERE key = :key")?
        .query_row(&[(":key", key)], |row| row.get(0))
        .optional()
        .map_err(|error| error.into())
}

/// Store `value` under `key`, replacing any existing value.
pub fn set_item(key: &str, value: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO storage (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key, value),
    )?;

    Ok(())
}

/// Remove `key` from storage. Removing a missing key does nothing.
pub fn remove_item(key: &str, connection: &Connection) -> Result<(), Error> {
    connection.execute("DELETE FROM storage WHERE key = ?1", (key,))?;

    Ok(())
}

/// Get the value stored under `key` decoded from JSON.
///
/// # Errors
/// Returns [Error::CorruptStorage] if the stored text is not valid JSON for `T`.
pub fn get_json<T: DeserializeOwned>(key: &str, connection: &Connection) -> Result<Option<T>, Error> {
    let Some(text) = get_item(key, connection)? else {
        return Ok(None);
    };

    serde_json::from_str(&text)
        .map(Some)
        .map_err(|error| Error::CorruptStorage {
            key: key.to_owned(),
            reason: error.to_string(),
        })
}

/// Store `value` under `key` encoded as JSON.
pub fn set_json<T: Serialize + ?Sized>(
    key: &str,
    value: &T,
    connection: &Connection,
) -> Result<(), Error> {
    let text = serde_json::to_string(value)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    set_item(key, &text, connection)
}

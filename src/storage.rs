//! The key-value store that every module keeps its records in.
//!
//! Each module stores its whole collection as one JSON document under its own
//! key and rewrites the whole document after every change.

use rusqlite::{Connection, OptionalExtension};
use serde::{Serialize, de::DeserializeOwned};

use crate::Error;

/// The keys that the modules store their collections under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKey {
    Habits,
    Transactions,
    Todos,
}

impl StorageKey {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKey::Habits => "habits",
            StorageKey::Transactions => "transactions",
            StorageKey::Todos => "todos",
        }
    }
}

/// Create the tables used by the application if they do not exist yet.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_storage_table(connection)?;

    Ok(())
}

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

/// Load the value stored under `key`, or the default value if nothing has been stored yet.
///
/// # Errors
/// Returns an [Error::CorruptData] if the stored JSON cannot be decoded as `T`,
/// or an [Error::SqlError] if there is some other SQL error.
pub fn load<T>(key: StorageKey, connection: &Connection) -> Result<T, Error>
where
    T: DeserializeOwned + Default,
{
    let stored: Option<String> = connection
        .query_row(
            "SELECT value FROM storage WHERE key = ?1",
            (key.as_str(),),
            |row| row.get(0),
        )
        .optional()?;

    match stored {
        Some(json) => serde_json::from_str(&json).map_err(|error| {
            tracing::error!("could not decode the data stored under {}: {error}", key.as_str());
            Error::CorruptData(key.as_str().to_owned(), error.to_string())
        }),
        None => Ok(T::default()),
    }
}

/// Replace the value stored under `key` with `value`.
///
/// # Errors
/// Returns an [Error::JSONSerializationError] if `value` cannot be encoded,
/// or an [Error::SqlError] if there is some other SQL error.
pub fn save<T>(key: StorageKey, value: &T, connection: &Connection) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value)
        .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

    connection.execute(
        "INSERT INTO storage (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        (key.as_str(), json),
    )?;

    Ok(())
}

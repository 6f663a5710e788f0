//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rusqlite::Connection;

use crate::{
    Error,
    ledger::{LedgerStore, LoadPolicy},
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The ledger and the storage it is mirrored to.
    pub ledger_store: Arc<Mutex<LedgerStore>>,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database and load the ledger from it
    /// according to `load_policy`.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or the stored ledger is corrupt.
    pub fn new(
        db_connection: Connection,
        local_timezone: &str,
        load_policy: LoadPolicy,
    ) -> Result<Self, Error> {
        let ledger_store = LedgerStore::open(db_connection, load_policy)?;

        Ok(Self {
            ledger_store: Arc::new(Mutex::new(ledger_store)),
            local_timezone: local_timezone.to_owned(),
        })
    }
}

/// The state needed by the handlers that read or change the ledger.
#[derive(Debug, Clone)]
pub struct LedgerState {
    /// The ledger and the storage it is mirrored to.
    pub ledger_store: Arc<Mutex<LedgerStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
}

impl FromRef<AppState> for LedgerState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            ledger_store: state.ledger_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

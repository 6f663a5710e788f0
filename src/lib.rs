//! Budget Tracker is a single-page web app for recording income and expenses.
//!
//! Entries are kept in an in-memory ledger that is mirrored to a SQLite
//! key-value store after every change. The page is rendered on the server and
//! shows the entry list, the income/expense totals and a donut chart of
//! expenses grouped by category.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod category;
mod config;
mod db;
mod endpoints;
mod entry;
mod html;
mod internal_server_error;
mod ledger;
mod logging;
mod not_found;
mod overview;
mod routing;
mod storage;
mod theme;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use category::{CategoryName, DEFAULT_CATEGORIES};
pub use config::Config;
pub use db::initialize as initialize_db;
pub use ledger::{Entry, EntryId, EntryKind, LedgerStore, LoadPolicy, NewEntry};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use theme::Theme;
pub use timezone::get_local_offset;

use crate::{
    alert::Alert, internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount was not a finite, non-negative number.
    ///
    /// Holds the raw text the user submitted.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The description was empty or only whitespace.
    #[error("description cannot be empty")]
    EmptyDescription,

    /// An empty string was used to create a category name.
    #[error("category name cannot be empty")]
    EmptyCategoryName,

    /// The entry referred to a category that is not in the category set.
    #[error("\"{0}\" is not a known category")]
    UnknownCategory(String),

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while serializing a value as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// A stored value could not be decoded.
    #[error("the stored value for \"{key}\" is corrupt: {reason}")]
    CorruptStorage {
        /// The storage key holding the bad value.
        key: String,
        /// Why decoding failed.
        reason: String,
    },

    /// Could not acquire the ledger lock.
    #[error("could not acquire the ledger lock")]
    LedgerLockError,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// No entry identifier is left after the given one.
    #[error("no entry identifier is left after {0}")]
    EntryIdOverflow(i64),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::LedgerLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        let (status_code, message, details) = match self {
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                "Invalid amount".to_owned(),
                format!("\"{amount}\" is not a valid amount. Enter a number that is zero or more."),
            ),
            Error::EmptyDescription => (
                StatusCode::BAD_REQUEST,
                "Missing description".to_owned(),
                "Describe what the transaction was for.".to_owned(),
            ),
            Error::EmptyCategoryName => (
                StatusCode::BAD_REQUEST,
                "Missing category name".to_owned(),
                "Type a name for the new category.".to_owned(),
            ),
            Error::UnknownCategory(category) => (
                StatusCode::BAD_REQUEST,
                "Unknown category".to_owned(),
                format!(
                    "The category \"{category}\" does not exist. \
                    Choose one from the list or add a custom category."
                ),
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid Timezone Settings".to_owned(),
                format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            ),
            Error::SqlError(_) | Error::JSONSerializationError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not save your changes".to_owned(),
                "The change is shown but was not written to storage. \
                Check the server logs for more details."
                    .to_owned(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong".to_owned(),
                "An unexpected error occurred, check the server logs for more details.".to_owned(),
            ),
        };

        (status_code, Alert::Error { message, details }).into_response()
    }
}

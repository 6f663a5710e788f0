//! Defines the endpoint for deleting an entry.

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::{
    Error,
    app_state::LedgerState,
    entry::form::EntryFormDefaults,
    ledger::EntryId,
    overview::ledger_content_response,
};

/// A route handler for deleting an entry, responds with the refreshed page content.
///
/// Deleting an entry that does not exist leaves the ledger unchanged.
pub async fn delete_entry_endpoint(
    State(state): State<LedgerState>,
    Path(entry_id): Path<EntryId>,
) -> Response {
    let mut store = match state.ledger_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    match store.remove(&entry_id) {
        Ok(Some(_)) => {}
        Ok(None) => tracing::warn!("Tried to delete entry {entry_id} which does not exist"),
        Err(error) => {
            tracing::error!("Could not delete entry {entry_id}: {error}");
            return error.into_alert_response();
        }
    }

    ledger_content_response(&store, &state.local_timezone, &EntryFormDefaults::default())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;

    use crate::{
        app_state::LedgerState,
        category::CategoryName,
        entry::EMPTY_LIST_MESSAGE,
        ledger::{EntryId, EntryKind, LedgerStore, LoadPolicy, NewEntry},
        test_utils::{assert_valid_html, must_select, parse_html_fragment, text_of},
    };

    use super::delete_entry_endpoint;

    fn get_test_state_with_entry() -> (LedgerState, EntryId) {
        let mut store =
            LedgerStore::open(Connection::open_in_memory().unwrap(), LoadPolicy::Reset).unwrap();
        let entry = store
            .add(
                NewEntry::new(
                    "Coffee",
                    4.5,
                    EntryKind::Expense,
                    CategoryName::new_unchecked("groceries"),
                )
                .unwrap(),
            )
            .unwrap();

        let state = LedgerState {
            ledger_store: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        };

        (state, entry.id)
    }

    #[tokio::test]
    async fn deleting_only_entry_shows_empty_state() {
        let (state, id) = get_test_state_with_entry();

        let response = delete_entry_endpoint(State(state.clone()), Path(id)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        assert_eq!(text_of(&html, "#entry-list"), EMPTY_LIST_MESSAGE);
        let chart = must_select(&html, "#expense-chart");
        assert_eq!(chart.value().attr("style"), Some("display: none;"));
        assert!(
            state
                .ledger_store
                .lock()
                .unwrap()
                .ledger()
                .entries()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn deleting_missing_entry_changes_nothing() {
        let (state, _) = get_test_state_with_entry();

        let response =
            delete_entry_endpoint(State(state.clone()), Path(EntryId::new("nope"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            state.ledger_store.lock().unwrap().ledger().entries().len(),
            1
        );
    }
}

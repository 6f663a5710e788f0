//! Defines the endpoint for editing an entry.
//!
//! Editing takes the entry out of the ledger and puts its values back into
//! the form. Submitting the form adds it again as a new entry.

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

/// A route handler for editing an entry, responds with the refreshed page
/// content and the form filled in with the entry's values.
///
/// Editing an entry that does not exist leaves the ledger unchanged and the form empty.
pub async fn edit_entry_endpoint(
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

    let form_defaults = match store.remove(&entry_id) {
        Ok(Some(entry)) => EntryFormDefaults::from(entry),
        Ok(None) => {
            tracing::warn!("Tried to edit entry {entry_id} which does not exist");
            EntryFormDefaults::default()
        }
        Err(error) => {
            tracing::error!("Could not remove entry {entry_id} for editing: {error}");
            return error.into_alert_response();
        }
    };

    ledger_content_response(&store, &state.local_timezone, &form_defaults)
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
        ledger::{EntryId, EntryKind, LedgerStore, LoadPolicy, NewEntry},
        test_utils::{
            assert_form_input_with_value, assert_valid_html, must_get_form, parse_html_fragment,
        },
    };

    use super::edit_entry_endpoint;

    fn get_test_state() -> LedgerState {
        let store =
            LedgerStore::open(Connection::open_in_memory().unwrap(), LoadPolicy::Reset).unwrap();

        LedgerState {
            ledger_store: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    #[tokio::test]
    async fn edit_removes_entry_and_prefills_form() {
        let state = get_test_state();
        let entry = state
            .ledger_store
            .lock()
            .unwrap()
            .add(
                NewEntry::new(
                    "Salary",
                    1000.0,
                    EntryKind::Income,
                    CategoryName::new_unchecked("utilities"),
                )
                .unwrap(),
            )
            .unwrap();

        let response = edit_entry_endpoint(State(state.clone()), Path(entry.id)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "description", "text", "Salary");
        assert_form_input_with_value(&form, "amount", "number", "1000");
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
    async fn editing_missing_entry_leaves_form_empty() {
        let state = get_test_state();

        let response = edit_entry_endpoint(State(state), Path(EntryId::new("42"))).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_fragment(response).await;
        let form = must_get_form(&html);
        assert_form_input_with_value(&form, "description", "text", "");
    }
}

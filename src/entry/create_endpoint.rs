//! Defines the endpoint for creating a new entry.

use axum::{extract::State, response::Response};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;

use crate::{
    Error,
    app_state::LedgerState,
    category::CategoryName,
    entry::form::{CUSTOM_CATEGORY_OPTION, EntryForm, EntryFormDefaults},
    ledger::{NewEntry, parse_amount},
    overview::ledger_content_response,
};

/// A route handler for creating a new entry, responds with the refreshed page content.
///
/// A custom category is added to the category set only once the rest of the
/// form has been validated.
pub async fn create_entry_endpoint(
    State(state): State<LedgerState>,
    Form(form): Form<EntryForm>,
) -> Response {
    let (new_entry, custom_category) = match validate_form(&form) {
        Ok(validated) => validated,
        Err(error) => {
            tracing::debug!("rejected new entry: {error}");
            return error.into_alert_response();
        }
    };

    let mut store = match state.ledger_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    if let Some(category) = custom_category {
        if let Err(error) = store.add_category(category) {
            tracing::error!("could not add category: {error}");
            return error.into_alert_response();
        }
    }

    if let Err(error) = store.add(new_entry) {
        tracing::error!("could not create entry: {error}");
        return error.into_alert_response();
    }

    ledger_content_response(&store, &state.local_timezone, &EntryFormDefaults::default())
}

/// Validate every field so that bad input never changes the ledger.
///
/// Returns the new entry and, if one was typed in, the custom category to add.
fn validate_form(form: &EntryForm) -> Result<(NewEntry, Option<CategoryName>), Error> {
    let amount = parse_amount(&form.amount)?;

    let (category, custom_category) = if form.category == CUSTOM_CATEGORY_OPTION {
        let category = CategoryName::new(form.custom_category.as_deref().unwrap_or_default())?;
        (category.clone(), Some(category))
    } else {
        (CategoryName::new(&form.category)?, None)
    };

    let new_entry = NewEntry::new(&form.description, amount, form.kind, category)?;

    Ok((new_entry, custom_category))
}

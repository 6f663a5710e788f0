//! The list of entries, newest first.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::UtcOffset;

use crate::{
    Error,
    app_state::LedgerState,
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, BUTTON_SECONDARY_STYLE, format_currency},
    ledger::{Entry, EntryId, EntryKind},
    timezone::get_local_offset,
};

/// The text shown in place of the list when there are no entries.
pub const EMPTY_LIST_MESSAGE: &str = "No transactions yet. Add your first transaction above!";

/// The query parameters for the entry list.
#[derive(Debug, Default, Deserialize)]
pub struct EntryListQuery {
    /// The entry to show with its edit and delete buttons.
    #[serde(default)]
    pub expanded: Option<EntryId>,
}

/// A route handler for the entry list with at most one entry expanded.
pub async fn get_entry_list(
    State(state): State<LedgerState>,
    Query(query): Query<EntryListQuery>,
) -> Response {
    let Some(local_offset) = get_local_offset(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_alert_response();
    };

    let store = match state.ledger_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_alert_response();
        }
    };

    entry_list_view(
        store.ledger().entries(),
        query.expanded.as_ref(),
        local_offset,
    )
    .into_response()
}

/// Render `entries` in the order given.
///
/// Only the entry matching `expanded` shows its edit and delete buttons.
/// Clicking an entry expands it, or collapses it if it is already expanded.
pub fn entry_list_view(
    entries: &[Entry],
    expanded: Option<&EntryId>,
    local_offset: UtcOffset,
) -> Markup {
    html! {
        div id="entry-list" class="w-full"
        {
            @if entries.is_empty() {
                p class="text-center text-gray-500 dark:text-gray-400" { (EMPTY_LIST_MESSAGE) }
            } @else {
                ul class="divide-y divide-gray-200 dark:divide-gray-700"
                {
                    @for entry in entries {
                        (entry_view(entry, expanded == Some(&entry.id), local_offset))
                    }
                }
            }
        }
    }
}

fn entry_view(entry: &Entry, is_expanded: bool, local_offset: UtcOffset) -> Markup {
    let toggle_url = if is_expanded {
        endpoints::ENTRIES_API.to_owned()
    } else {
        format!("{}?expanded={}", endpoints::ENTRIES_API, entry.id)
    };
    let amount_style = match entry.kind {
        EntryKind::Income => "font-semibold text-green-600 dark:text-green-400",
        EntryKind::Expense => "font-semibold text-red-600 dark:text-red-400",
    };

    html! {
        li
            data-entry-id=(entry.id.as_ref())
            class=(if is_expanded { "py-3 expanded" } else { "py-3" })
        {
            div
                hx-get=(toggle_url)
                hx-target="#entry-list"
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
                class="flex items-center justify-between gap-4 cursor-pointer"
            {
                div
                {
                    p class="font-medium" { (entry.description) }

                    p class="text-sm text-gray-500 dark:text-gray-400"
                    {
                        span class="mr-2" { (format_date(entry, local_offset)) }
                        span { (entry.category.as_ref()) }
                    }
                }

                span class=(amount_style)
                {
                    (entry.kind.sign()) (format_currency(entry.amount))
                }
            }

            @if is_expanded {
                (entry_actions(&entry.id))
            }
        }
    }
}

fn entry_actions(id: &EntryId) -> Markup {
    html! {
        div class="flex justify-end gap-2 mt-2"
        {
            button
                type="button"
                hx-post=(format_endpoint(endpoints::EDIT_ENTRY, id.as_ref()))
                hx-target="#ledger-content"
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
                class=(BUTTON_SECONDARY_STYLE)
            {
                "Edit"
            }

            button
                type="button"
                hx-delete=(format_endpoint(endpoints::ENTRY, id.as_ref()))
                hx-confirm="Are you sure you want to delete this transaction?"
                hx-target="#ledger-content"
                hx-target-error="#alert-container"
                hx-swap="outerHTML"
                class=(BUTTON_DELETE_STYLE)
            {
                "Delete"
            }
        }
    }
}

/// The entry's creation date in the local timezone as day/month/year, e.g. "9/3/2026".
fn format_date(entry: &Entry, local_offset: UtcOffset) -> String {
    let date = entry.date.to_offset(local_offset).date();

    format!("{}/{}/{}", date.day(), u8::from(date.month()), date.year())
}

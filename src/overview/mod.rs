//! The single page of the app: the entry form, totals, expense chart and entry list.
//!
//! Every change to the ledger responds with the whole page content so that
//! the totals, chart and list are always derived from the same state.

mod chart;
mod summary;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::UtcOffset;

use crate::{
    Error,
    app_state::LedgerState,
    entry::{EntryFormDefaults, entry_form_view, entry_list_view},
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base},
    ledger::{LedgerStore, expenses_by_category, summarize},
    timezone::get_local_offset,
};

use chart::{chart_view, expense_chart};
use summary::summary_view;

/// A route handler for the full page.
pub async fn get_ledger_page(State(state): State<LedgerState>) -> Response {
    let Some(local_offset) = get_local_offset(&state.local_timezone) else {
        tracing::error!("Invalid timezone {}", state.local_timezone);
        return Error::InvalidTimezoneError(state.local_timezone).into_response();
    };

    let store = match state.ledger_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire ledger lock: {error}");
            return Error::LedgerLockError.into_response();
        }
    };

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold" { "Budget Tracker" }

            (ledger_content_view(&store, local_offset, &EntryFormDefaults::default()))
        }
    };

    base(
        "Budget Tracker",
        store.theme(),
        &["/static/echarts.6.0.0.min.js"],
        &content,
    )
    .into_response()
}

/// Render the page content for the current state of `store` as a response
/// fragment for htmx to swap in.
pub fn ledger_content_response(
    store: &LedgerStore,
    local_timezone: &str,
    form_defaults: &EntryFormDefaults,
) -> Response {
    let Some(local_offset) = get_local_offset(local_timezone) else {
        tracing::error!("Invalid timezone {local_timezone}");
        return Error::InvalidTimezoneError(local_timezone.to_owned()).into_alert_response();
    };

    ledger_content_view(store, local_offset, form_defaults).into_response()
}

fn ledger_content_view(
    store: &LedgerStore,
    local_offset: UtcOffset,
    form_defaults: &EntryFormDefaults,
) -> Markup {
    let ledger = store.ledger();
    let entries = ledger.entries();
    let chart = expense_chart(&expenses_by_category(entries), store.theme());

    html! {
        div id="ledger-content" class="w-full flex flex-col gap-6"
        {
            section class=(CARD_STYLE)
            {
                h2 class="mb-4 text-xl font-semibold" { "Add Transaction" }
                (entry_form_view(ledger.categories(), form_defaults))
            }

            (summary_view(&summarize(entries)))

            section class=(CARD_STYLE)
            {
                h2 class="mb-4 text-xl font-semibold" { "Expenses by Category" }
                (chart_view(chart.as_ref()))
            }

            section class=(CARD_STYLE)
            {
                h2 class="mb-4 text-xl font-semibold" { "Transactions" }
                (entry_list_view(entries, None, local_offset))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;

    use crate::{
        app_state::LedgerState,
        category::CategoryName,
        entry::EMPTY_LIST_MESSAGE,
        ledger::{EntryKind, LedgerStore, LoadPolicy, NewEntry},
        test_utils::{
            assert_valid_html, count_matches, must_select, parse_html_document, text_of,
        },
        theme::Theme,
    };

    use super::get_ledger_page;

    fn get_test_state(store: LedgerStore) -> LedgerState {
        LedgerState {
            ledger_store: Arc::new(Mutex::new(store)),
            local_timezone: "Etc/UTC".to_owned(),
        }
    }

    fn open_store() -> LedgerStore {
        LedgerStore::open(Connection::open_in_memory().unwrap(), LoadPolicy::Reset).unwrap()
    }

    #[tokio::test]
    async fn empty_page_shows_message_and_hides_chart() {
        let state = get_test_state(open_store());

        let response = get_ledger_page(State(state)).await;

        assert_eq!(response.status(), StatusCode::OK);
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(text_of(&html, "#entry-list"), EMPTY_LIST_MESSAGE);
        let chart = must_select(&html, "#expense-chart");
        assert_eq!(chart.value().attr("style"), Some("display: none;"));
    }

    #[tokio::test]
    async fn page_shows_totals_and_chart() {
        let mut store = open_store();
        store
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
        let state = get_test_state(store);

        let response = get_ledger_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(text_of(&html, "#total-balance"), "-₹4.50");
        let chart = must_select(&html, "#expense-chart");
        assert_eq!(chart.value().attr("style"), None);
    }

    #[tokio::test]
    async fn page_uses_stored_theme() {
        let mut store = open_store();
        store.set_theme(Theme::Dark).unwrap();
        let state = get_test_state(store);

        let response = get_ledger_page(State(state)).await;

        let html = parse_html_document(response).await;
        assert_eq!(count_matches(&html, "html.dark"), 1);
    }

    #[tokio::test]
    async fn invalid_timezone_shows_error_page() {
        let state = LedgerState {
            local_timezone: "Middle/Earth".to_owned(),
            ..get_test_state(open_store())
        };

        let response = get_ledger_page(State(state)).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

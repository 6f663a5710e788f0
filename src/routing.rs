//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    entry::{
        create_entry_endpoint, delete_entry_endpoint, edit_entry_endpoint, get_category_field,
        get_entry_list,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    overview::get_ledger_page,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_ledger_page))
        .route(
            endpoints::ENTRIES_API,
            get(get_entry_list).post(create_entry_endpoint),
        )
        .route(endpoints::ENTRY, delete(delete_entry_endpoint))
        .route(endpoints::EDIT_ENTRY, post(edit_entry_endpoint))
        .route(endpoints::CATEGORY_FIELD, get(get_category_field))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

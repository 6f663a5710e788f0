//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/entries/{entry_id}', use [format_endpoint].

/// The single page showing the entry form, totals, chart and entry list.
pub const ROOT: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create entries and to fetch the entry list.
pub const ENTRIES_API: &str = "/api/entries";
/// The route to delete a single entry.
pub const ENTRY: &str = "/api/entries/{entry_id}";
/// The route to start editing an entry.
pub const EDIT_ENTRY: &str = "/api/entries/{entry_id}/edit";
/// The route for the category field of the entry form.
pub const CATEGORY_FIELD: &str = "/api/category_field";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/entries/{entry_id}', '{entry_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

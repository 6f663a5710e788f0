//! Creating, editing, deleting and listing ledger entries.

mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod list;

pub use create_endpoint::create_entry_endpoint;
pub use delete_endpoint::delete_entry_endpoint;
pub use edit_endpoint::edit_entry_endpoint;
pub use form::{EntryFormDefaults, entry_form_view, get_category_field};
pub use list::{entry_list_view, get_entry_list};

#[cfg(test)]
pub use list::EMPTY_LIST_MESSAGE;

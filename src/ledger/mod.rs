//! The ledger of income and expense entries, its persistence and the totals derived from it.

mod aggregation;
mod domain;
mod store;

pub use aggregation::{CategoryTotal, Summary, expenses_by_category, summarize};
pub use domain::{Entry, EntryId, EntryKind, NewEntry, parse_amount};
pub use store::{LedgerStore, LoadPolicy};

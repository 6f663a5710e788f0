//! Core entry domain types.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, category::CategoryName};

/// The identifier of an entry.
///
/// Identifiers are derived from the creation time in milliseconds since the
/// Unix epoch and strictly increase within a ledger.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Wrap an identifier string, e.g. one taken from a URL.
    pub fn new(id: &str) -> Self {
        Self(id.to_owned())
    }

    pub(super) fn from_millis(millis: i64) -> Self {
        Self(millis.to_string())
    }

    /// The timestamp the identifier was derived from, if it is numeric.
    pub(super) fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether money was earned or spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money earned.
    Income,
    /// Money spent.
    #[default]
    Expense,
}

impl EntryKind {
    /// The form value and CSS class for the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    /// The sign shown in front of amounts of this kind.
    pub fn sign(self) -> &'static str {
        match self {
            EntryKind::Income => "+",
            EntryKind::Expense => "-",
        }
    }
}

impl Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            other => Err(format!("unknown entry type \"{other}\"")),
        }
    }
}

/// One recorded income or expense.
///
/// The JSON field names match the stored `transactions` list, so `kind` is
/// written as `type` and `date` as an RFC 3339 string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// The unique identifier of the entry.
    pub id: EntryId,
    /// What the money was for.
    pub description: String,
    /// The non-negative amount of money. The direction is given by `kind`.
    pub amount: f64,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// The category the entry belongs to.
    pub category: CategoryName,
    /// When the entry was created.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The validated user input for a new entry.
///
/// The identifier and creation time are assigned by the ledger.
#[derive(Clone, Debug, PartialEq)]
pub struct NewEntry {
    pub(super) description: String,
    pub(super) amount: f64,
    pub(super) kind: EntryKind,
    pub(super) category: CategoryName,
}

impl NewEntry {
    /// Validate the fields of a new entry.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::EmptyDescription] if `description` is empty or only whitespace,
    /// - or [Error::InvalidAmount] if `amount` is negative, NaN or infinite.
    pub fn new(
        description: &str,
        amount: f64,
        kind: EntryKind,
        category: CategoryName,
    ) -> Result<Self, Error> {
        let description = description.trim();

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        if !amount.is_finite() || amount < 0.0 {
            return Err(Error::InvalidAmount(amount.to_string()));
        }

        Ok(Self {
            description: description.to_owned(),
            amount,
            kind,
            category,
        })
    }
}

/// Parse the text of the amount field.
///
/// # Errors
/// Returns [Error::InvalidAmount] holding the original text if it is not a
/// finite, non-negative number.
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

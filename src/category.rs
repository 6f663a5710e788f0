//! Category names used to group entries.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::Error;

/// The categories every ledger starts with.
pub const DEFAULT_CATEGORIES: [&str; 5] = [
    "groceries",
    "entertainment",
    "utilities",
    "transportation",
    "healthcare",
];

/// A validated, non-empty, lowercase category name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Create a category name from user input.
    ///
    /// Surrounding whitespace is trimmed and the name is lowercased so that
    /// "Rent" and "rent " refer to the same category.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyCategoryName] if `name` is empty or only whitespace.
    pub fn new(name: &str) -> Result<Self, Error> {
        let name = name.trim();

        if name.is_empty() {
            Err(Error::EmptyCategoryName)
        } else {
            Ok(Self(name.to_lowercase()))
        }
    }

    /// Create a category name without validation.
    ///
    /// The caller should ensure that the string is not empty and already lowercase.
    pub fn new_unchecked(name: &str) -> Self {
        Self(name.to_owned())
    }

    /// The name with its first character in uppercase, e.g. "groceries" becomes "Groceries".
    pub fn display_label(&self) -> String {
        let mut graphemes = self.0.graphemes(true);

        match graphemes.next() {
            Some(first) => format!("{}{}", first.to_uppercase(), graphemes.as_str()),
            None => String::new(),
        }
    }
}

/// The five default categories in their seeded order.
pub fn default_categories() -> Vec<CategoryName> {
    DEFAULT_CATEGORIES
        .iter()
        .map(|name| CategoryName::new_unchecked(name))
        .collect()
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CategoryName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryName::new(s)
    }
}

impl TryFrom<String> for CategoryName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CategoryName::new(&value)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

impl Display for CategoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

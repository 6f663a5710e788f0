//! The ledger of entries and categories and the store that persists it.

use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    Error,
    category::{CategoryName, default_categories},
    db::initialize,
    ledger::{Entry, EntryId, NewEntry},
    storage::{CATEGORIES_KEY, TRANSACTIONS_KEY, get_json, remove_item, set_json},
    theme::{Theme, load_theme, save_theme},
};

// ============================================================================
// IN-MEMORY LEDGER
// ============================================================================

/// The ordered list of entries (newest first) and the set of known categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    entries: Vec<Entry>,
    categories: Vec<CategoryName>,
    /// The most recently issued identifier, used to keep identifiers increasing.
    last_id: i64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(Vec::new(), default_categories())
    }
}

impl Ledger {
    /// Create a ledger from previously stored entries and categories.
    ///
    /// `entries` must already be ordered newest first. Duplicate categories are dropped.
    pub fn new(entries: Vec<Entry>, categories: Vec<CategoryName>) -> Self {
        let last_id = entries
            .iter()
            .filter_map(|entry| entry.id.as_millis())
            .max()
            .unwrap_or(0);

        let mut ledger = Self {
            entries,
            categories: Vec::with_capacity(categories.len()),
            last_id,
        };

        for category in categories {
            ledger.add_category(category);
        }

        ledger
    }

    /// The entries, newest first.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The known categories in the order they were added.
    pub fn categories(&self) -> &[CategoryName] {
        &self.categories
    }

    /// Whether `category` is in the category set.
    pub fn has_category(&self, category: &CategoryName) -> bool {
        self.categories.contains(category)
    }

    /// Find an entry by its identifier.
    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Add `new_entry` to the front of the list with an identifier derived from `now`.
    ///
    /// # Errors
    /// Returns [Error::UnknownCategory] if the entry's category is not in the category set,
    /// or [Error::EntryIdOverflow] if a stored identifier leaves no larger one to issue.
    pub fn insert(&mut self, new_entry: NewEntry, now: OffsetDateTime) -> Result<&Entry, Error> {
        if !self.has_category(&new_entry.category) {
            return Err(Error::UnknownCategory(new_entry.category.to_string()));
        }

        let entry = Entry {
            id: self.next_id(now)?,
            description: new_entry.description,
            amount: new_entry.amount,
            kind: new_entry.kind,
            category: new_entry.category,
            date: now,
        };

        self.entries.insert(0, entry);

        Ok(&self.entries[0])
    }

    /// Remove the entry with `id`, returning it. Does nothing if there is no such entry.
    pub fn remove(&mut self, id: &EntryId) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| &entry.id == id)?;

        Some(self.entries.remove(index))
    }

    /// Add `category` to the category set. Returns `false` if it was already present.
    pub fn add_category(&mut self, category: CategoryName) -> bool {
        if self.has_category(&category) {
            return false;
        }

        self.categories.push(category);
        true
    }

    /// Add the categories of any entries that are missing from the category set.
    ///
    /// Returns the categories that were added.
    fn add_missing_entry_categories(&mut self) -> Vec<CategoryName> {
        let missing: Vec<CategoryName> = self
            .entries
            .iter()
            .map(|entry| entry.category.clone())
            .collect();

        missing
            .into_iter()
            .filter(|category| self.add_category(category.clone()))
            .collect()
    }

    fn next_id(&mut self, now: OffsetDateTime) -> Result<EntryId, Error> {
        let millis = (now.unix_timestamp_nanos() / 1_000_000) as i64;
        // Two entries created in the same millisecond still get distinct, ordered identifiers.
        let after_last = self
            .last_id
            .checked_add(1)
            .ok_or(Error::EntryIdOverflow(self.last_id))?;
        let id = millis.max(after_last);
        self.last_id = id;

        Ok(EntryId::from_millis(id))
    }
}

// ============================================================================
// PERSISTENT STORE
// ============================================================================

/// How to treat previously stored data when the store is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Load the stored entries, categories and theme.
    #[default]
    Restore,
    /// Discard stored entries and reset the categories to the defaults.
    Reset,
}

/// The ledger together with the storage it is mirrored to.
///
/// Every mutation updates the in-memory ledger first and then writes the
/// affected values to storage in full. If the write fails the error is
/// returned and the in-memory change is kept; the next successful write
/// brings storage back in line.
#[derive(Debug)]
pub struct LedgerStore {
    ledger: Ledger,
    theme: Theme,
    connection: Connection,
}

impl LedgerStore {
    /// Open the store on `connection`, creating the storage table if needed.
    ///
    /// # Errors
    /// Returns an error if the storage cannot be read or written, or a
    /// [Error::CorruptStorage] if a stored value cannot be decoded.
    pub fn open(connection: Connection, policy: LoadPolicy) -> Result<Self, Error> {
        initialize(&connection)?;

        let theme = load_theme(&connection)?;

        let ledger = match policy {
            LoadPolicy::Reset => {
                remove_item(TRANSACTIONS_KEY, &connection)?;
                let ledger = Ledger::default();
                set_json(CATEGORIES_KEY, ledger.categories(), &connection)?;
                tracing::info!("Cleared stored entries and reset categories");

                ledger
            }
            LoadPolicy::Restore => {
                let entries: Vec<Entry> =
                    get_json(TRANSACTIONS_KEY, &connection)?.unwrap_or_default();
                let categories = get_json(CATEGORIES_KEY, &connection)?
                    .unwrap_or_else(default_categories);
                let mut ledger = Ledger::new(entries, categories);

                for category in ledger.add_missing_entry_categories() {
                    tracing::warn!("Added missing category \"{category}\" used by a stored entry");
                }

                set_json(TRANSACTIONS_KEY, ledger.entries(), &connection)?;
                set_json(CATEGORIES_KEY, ledger.categories(), &connection)?;
                tracing::info!(
                    "Restored {} entries and {} categories",
                    ledger.entries().len(),
                    ledger.categories().len()
                );

                ledger
            }
        };

        Ok(Self {
            ledger,
            theme,
            connection,
        })
    }

    /// The current in-memory ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The display theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Change the display theme and persist it.
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), Error> {
        self.theme = theme;
        save_theme(theme, &self.connection)
    }

    /// Add a new entry to the front of the ledger and persist the entries and categories.
    ///
    /// # Errors
    /// Returns [Error::UnknownCategory] if the entry's category is not in the
    /// category set, or a storage error if the write fails.
    pub fn add(&mut self, new_entry: NewEntry) -> Result<Entry, Error> {
        let entry = self
            .ledger
            .insert(new_entry, OffsetDateTime::now_utc())?
            .clone();

        self.save_entries()?;
        self.save_categories()?;
        tracing::debug!("Added entry {}", entry.id);

        Ok(entry)
    }

    /// Remove the entry with `id` and persist the entries.
    ///
    /// Returns `None` without touching storage if there is no such entry.
    pub fn remove(&mut self, id: &EntryId) -> Result<Option<Entry>, Error> {
        let Some(entry) = self.ledger.remove(id) else {
            return Ok(None);
        };

        self.save_entries()?;
        tracing::debug!("Removed entry {id}");

        Ok(Some(entry))
    }

    /// Add `category` to the category set and persist the categories.
    ///
    /// Returns `false` without touching storage if the category already exists.
    pub fn add_category(&mut self, category: CategoryName) -> Result<bool, Error> {
        if !self.ledger.add_category(category.clone()) {
            return Ok(false);
        }

        self.save_categories()?;
        tracing::debug!("Added category \"{category}\"");

        Ok(true)
    }

    fn save_entries(&self) -> Result<(), Error> {
        set_json(TRANSACTIONS_KEY, self.ledger.entries(), &self.connection)
    }

    fn save_categories(&self) -> Result<(), Error> {
        set_json(CATEGORIES_KEY, self.ledger.categories(), &self.connection)
    }
}

// ============================================================================
// TESTS
// ============================================================================

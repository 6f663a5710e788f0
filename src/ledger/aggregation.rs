//! Totals derived from the list of entries.

use crate::{
    category::CategoryName,
    ledger::{Entry, EntryKind},
};

/// The income, expense and balance totals for a list of entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expenses: f64,
    /// Income minus expenses.
    pub balance: f64,
}

/// Calculate the totals for `entries`.
pub fn summarize(entries: &[Entry]) -> Summary {
    let (income, expenses) =
        entries
            .iter()
            .fold((0.0, 0.0), |(income, expenses), entry| match entry.kind {
                EntryKind::Income => (income + entry.amount, expenses),
                EntryKind::Expense => (income, expenses + entry.amount),
            });

    Summary {
        income,
        expenses,
        balance: income - expenses,
    }
}

/// The total spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category the total is for.
    pub category: CategoryName,
    /// The sum of expense amounts in the category.
    pub total: f64,
}

/// Sum the expenses in `entries` per category.
///
/// Categories appear in the order they are first seen in `entries`. Income
/// entries are ignored and categories without expenses are left out.
pub fn expenses_by_category(entries: &[Entry]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for entry in entries.iter().filter(|entry| entry.kind == EntryKind::Expense) {
        match totals
            .iter_mut()
            .find(|total| total.category == entry.category)
        {
            Some(total) => total.total += entry.amount,
            None => totals.push(CategoryTotal {
                category: entry.category.clone(),
                total: entry.amount,
            }),
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::{
        category::CategoryName,
        ledger::{Entry, EntryId, EntryKind},
    };

    use super::{CategoryTotal, Summary, expenses_by_category, summarize};

    fn entry(id: &str, amount: f64, kind: EntryKind, category: &str) -> Entry {
        Entry {
            id: EntryId::new(id),
            description: format!("entry {id}"),
            amount,
            kind,
            category: CategoryName::new_unchecked(category),
            date: datetime!(2026-10-19 10:00 UTC),
        }
    }

    #[test]
    fn summary_of_no_entries_is_zero() {
        assert_eq!(summarize(&[]), Summary::default());
    }

    #[test]
    fn summary_adds_income_and_expenses() {
        let entries = [
            entry("3", 200.0, EntryKind::Expense, "utilities"),
            entry("2", 1000.0, EntryKind::Income, "utilities"),
            entry("1", 50.0, EntryKind::Expense, "groceries"),
        ];

        let got = summarize(&entries);

        assert_eq!(
            got,
            Summary {
                income: 1000.0,
                expenses: 250.0,
                balance: 750.0,
            }
        );
    }

    #[test]
    fn balance_can_be_negative() {
        let entries = [entry("1", 4.5, EntryKind::Expense, "groceries")];

        let got = summarize(&entries);

        assert_eq!(got.balance, -4.5);
    }

    #[test]
    fn expenses_grouped_in_first_seen_order() {
        let entries = [
            entry("4", 30.0, EntryKind::Expense, "utilities"),
            entry("3", 20.0, EntryKind::Expense, "groceries"),
            entry("2", 500.0, EntryKind::Income, "entertainment"),
            entry("1", 10.0, EntryKind::Expense, "utilities"),
        ];

        let got = expenses_by_category(&entries);

        assert_eq!(
            got,
            [
                CategoryTotal {
                    category: CategoryName::new_unchecked("utilities"),
                    total: 40.0,
                },
                CategoryTotal {
                    category: CategoryName::new_unchecked("groceries"),
                    total: 20.0,
                },
            ]
        );
    }

    #[test]
    fn income_only_has_no_expense_totals() {
        let entries = [entry("1", 1000.0, EntryKind::Income, "utilities")];

        assert!(expenses_by_category(&entries).is_empty());
    }
}

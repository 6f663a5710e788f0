//! The form for adding entries and its category field.

use axum::{extract::Query, response::IntoResponse};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    category::CategoryName,
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_RADIO_GROUP_STYLE, FORM_RADIO_INPUT_STYLE,
        FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
    },
    ledger::{Entry, EntryKind},
};

/// The value of the category option that reveals the custom category input.
///
/// Chosen so that it cannot clash with a category name, which are lowercase.
pub const CUSTOM_CATEGORY_OPTION: &str = "__CUSTOM__";

/// The form data for creating an entry.
#[derive(Debug, Deserialize)]
pub struct EntryForm {
    /// What the money was for.
    pub description: String,
    /// The raw text of the amount field, parsed by the handler so that bad
    /// input can be reported with an alert.
    pub amount: String,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// The selected category, or [CUSTOM_CATEGORY_OPTION].
    pub category: String,
    /// The name typed into the custom category input.
    #[serde(default)]
    pub custom_category: Option<String>,
}

/// The values to show in the form when it is rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryFormDefaults {
    pub description: String,
    pub amount: Option<f64>,
    pub kind: EntryKind,
    pub category: Option<CategoryName>,
}

impl From<Entry> for EntryFormDefaults {
    fn from(entry: Entry) -> Self {
        Self {
            description: entry.description,
            amount: Some(entry.amount),
            kind: entry.kind,
            category: Some(entry.category),
        }
    }
}

pub fn entry_form_view(categories: &[CategoryName], defaults: &EntryFormDefaults) -> Markup {
    let amount = defaults.amount.map(|amount| amount.to_string());

    html! {
        form
            id="entry-form"
            hx-post=(endpoints::ENTRIES_API)
            hx-target="#ledger-content"
            hx-target-error="#alert-container"
            hx-swap="outerHTML"
            class="w-full space-y-4"
        {
            div
            {
                label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                input
                    type="text"
                    name="description"
                    id="description"
                    placeholder="e.g. Coffee"
                    value=(defaults.description)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount (₹)" }

                input
                    type="number"
                    name="amount"
                    id="amount"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    value=[amount]
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            fieldset
            {
                legend class=(FORM_LABEL_STYLE) { "Type" }

                div class=(FORM_RADIO_GROUP_STYLE)
                {
                    @for kind in [EntryKind::Expense, EntryKind::Income]
                    {
                        label class="flex-1"
                        {
                            input
                                type="radio"
                                name="type"
                                value=(kind.as_str())
                                checked[kind == defaults.kind]
                                required
                                class=(FORM_RADIO_INPUT_STYLE);

                            span class=(FORM_RADIO_LABEL_STYLE)
                            {
                                @match kind {
                                    EntryKind::Expense => { "Expense" }
                                    EntryKind::Income => { "Income" }
                                }
                            }
                        }
                    }
                }
            }

            div
            {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                (category_select(categories, defaults.category.as_ref()))
            }

            (custom_category_field(false))

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
        }
    }
}

fn category_select(categories: &[CategoryName], selected: Option<&CategoryName>) -> Markup {
    html! {
        select
            name="category"
            id="category"
            required
            hx-get=(endpoints::CATEGORY_FIELD)
            hx-trigger="change"
            hx-target="#custom-category-field"
            hx-swap="outerHTML"
            class=(FORM_TEXT_INPUT_STYLE)
        {
            option value="" selected[selected.is_none()] { "Select Category" }

            @for category in categories
            {
                option
                    value=(category.as_ref())
                    selected[selected == Some(category)]
                {
                    (category.display_label())
                }
            }

            option value=(CUSTOM_CATEGORY_OPTION) { "Add Custom Category" }
        }
    }
}

/// The text input for a new category, hidden unless `is_visible`.
fn custom_category_field(is_visible: bool) -> Markup {
    html! {
        div
            id="custom-category-field"
            class=[(!is_visible).then_some("hidden")]
        {
            label for="custom_category" class=(FORM_LABEL_STYLE) { "New Category" }

            input
                type="text"
                name="custom_category"
                id="custom_category"
                placeholder="Enter custom category"
                required[is_visible]
                disabled[!is_visible]
                class=(FORM_TEXT_INPUT_STYLE);
        }
    }
}

/// The query parameters sent when the category select changes.
#[derive(Debug, Deserialize)]
pub struct CategoryFieldQuery {
    #[serde(default)]
    pub category: String,
}

/// A route handler for the custom category input, shown only when the custom option is selected.
pub async fn get_category_field(Query(query): Query<CategoryFieldQuery>) -> impl IntoResponse {
    custom_category_field(query.category == CUSTOM_CATEGORY_OPTION)
}

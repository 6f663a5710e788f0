//! Cards showing the balance, income and expense totals.

use maud::{Markup, html};

use crate::{html::format_currency, ledger::Summary};

pub(super) fn summary_view(summary: &Summary) -> Markup {
    let cards = [
        ("total-balance", "Total Balance", summary.balance, "text-gray-900 dark:text-white"),
        ("total-income", "Income", summary.income, "text-green-600 dark:text-green-400"),
        ("total-expenses", "Expenses", summary.expenses, "text-red-600 dark:text-red-400"),
    ];

    html! {
        section id="summary" class="w-full grid grid-cols-1 sm:grid-cols-3 gap-4"
        {
            @for (id, label, amount, style) in cards {
                div class="p-4 bg-white rounded-lg shadow dark:bg-gray-800"
                {
                    h3 class="text-sm font-medium text-gray-500 dark:text-gray-400" { (label) }
                    p id=(id) class={ "text-2xl font-bold " (style) } { (format_currency(amount)) }
                }
            }
        }
    }
}

//! The donut chart of expenses grouped by category.
//!
//! The chart is generated as an ECharts configuration and rendered with an
//! inline script. The script runs on every swap of the page content, so it
//! disposes the previous chart instance before creating a new one.

use charming::{
    Chart,
    component::Legend,
    datatype::DataPointItem,
    element::{Color, JsFunction, TextStyle, Tooltip, Trigger},
    series::Pie,
};
use maud::{Markup, PreEscaped, html};

use crate::{ledger::CategoryTotal, theme::Theme};

/// The HTML element ID of the chart container.
pub(super) const CHART_ID: &str = "expense-chart";

/// The segment colours, assigned by category index and repeated after the last one.
pub(super) const PALETTE: [&str; 8] = [
    "#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#6366f1", "#ec4899", "#8b5cf6", "#14b8a6",
];

/// Build the expense chart, or `None` if there are no expenses to show.
pub(super) fn expense_chart(totals: &[CategoryTotal], theme: Theme) -> Option<Chart> {
    if totals.is_empty() {
        return None;
    }

    let data: Vec<DataPointItem> = totals
        .iter()
        .map(|total| DataPointItem::new(total.total).name(total.category.display_label()))
        .collect();

    let chart = Chart::new()
        .color(PALETTE.iter().map(|color| Color::from(*color)).collect())
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .value_formatter(currency_formatter()),
        )
        .legend(
            Legend::new()
                .bottom(0)
                .text_style(TextStyle::new().color(theme.legend_text_color()).font_size(12)),
        )
        .series(
            Pie::new()
                .name("Expenses")
                .radius(vec!["40%", "70%"])
                .data(data),
        );

    Some(chart)
}

fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-IN', {
              style: 'currency',
              currency: 'INR'
            });
            return currencyFormatter.format(number);",
    )
}

/// The chart container followed by the script that draws `chart` into it.
///
/// With no chart the container is hidden and any previous chart is disposed.
pub(super) fn chart_view(chart: Option<&Chart>) -> Markup {
    html! {
        div
            id=(CHART_ID)
            class="w-full min-h-[380px]"
            style=[chart.is_none().then_some("display: none;")]
        {}

        script { (chart_script(chart)) }
    }
}

fn chart_script(chart: Option<&Chart>) -> PreEscaped<String> {
    let draw = match chart {
        Some(chart) => format!(
            r#"chartDom.style.display = "block";
                window.expenseChart = echarts.init(chartDom);
                window.expenseChart.setOption({});"#,
            escape_script_text(&chart.to_string())
        ),
        None => r#"chartDom.style.display = "none";"#.to_owned(),
    };

    PreEscaped(format!(
        r#"(function() {{
                const chartDom = document.getElementById("{CHART_ID}");
                if (window.expenseChart) {{
                    window.expenseChart.dispose();
                    window.expenseChart = null;
                }}
                {draw}

                if (!window.expenseChartResizeListener) {{
                    window.expenseChartResizeListener = () => window.expenseChart && window.expenseChart.resize();
                    window.addEventListener('resize', window.expenseChartResizeListener);
                }}
            }})();"#
    ))
}

/// Escape `<` so that text from category names cannot close the script
/// element or open a comment inside it. `<` only occurs inside string
/// literals of the chart options, where `\u003c` reads back as `<`.
fn escape_script_text(options: &str) -> String {
    options.replace('<', "\\u003c")
}

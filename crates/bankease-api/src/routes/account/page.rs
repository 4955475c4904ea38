//! Account overview rendering

use bankease_core::{AccountSnapshot, ActivityKind, TrendPoint};
use bankease_utils::{escape_html, format_day, MoneyFormat};
use rust_decimal::Decimal;

use crate::action_button;

pub fn render_account(snapshot: &AccountSnapshot, money: &MoneyFormat) -> String {
    let mut activity_rows = String::new();
    for entry in &snapshot.recent_activity {
        let amount_class = match entry.kind {
            ActivityKind::Credit => "text-green-600",
            ActivityKind::Debit => "text-red-600",
        };
        activity_rows.push_str(&format!(
            r#"<li class='flex items-center justify-between py-3'>
    <div><p class='font-medium'>{}</p><p class='text-sm text-gray-500'>{}</p></div>
    <span class='font-medium {}'>{}</span>
</li>"#,
            escape_html(&entry.description),
            format_day(&entry.date),
            amount_class,
            money.format_signed(entry.amount, &snapshot.currency)
        ));
    }

    format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Account Overview</h2></div>
<div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
    <p class='text-sm text-gray-500'>Total Balance</p>
    <p class='text-3xl font-bold'>{}</p>
    <div class='flex gap-3 mt-4'>{}{}</div>
</div>
<div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
    <h3 class='text-lg font-semibold mb-4'>Spending Trends</h3>
    {}
</div>
<div class='bg-white rounded-xl shadow-sm p-6'>
    <h3 class='text-lg font-semibold mb-2'>Recent Activity</h3>
    <ul class='divide-y'>{}</ul>
</div>"#,
        money.format(snapshot.total_balance, &snapshot.currency),
        action_button(
            "/account/view-transactions",
            "View Transactions",
            "px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700"
        ),
        action_button(
            "/account/pay-bills",
            "Pay Bills",
            "px-4 py-2 border rounded-lg hover:bg-gray-50"
        ),
        trend_chart(&snapshot.trends),
        activity_rows
    )
}

/// Paired bars per month, scaled to the largest value
fn trend_chart(trends: &[TrendPoint]) -> String {
    let max = trends
        .iter()
        .flat_map(|p| [p.spending, p.income])
        .max()
        .unwrap_or(Decimal::ONE);
    let height = |value: Decimal| -> Decimal {
        if max.is_zero() {
            Decimal::ZERO
        } else {
            (value * Decimal::ONE_HUNDRED / max).round()
        }
    };

    let mut bars = String::new();
    for point in trends {
        bars.push_str(&format!(
            r#"<div class='flex flex-col items-center flex-1'>
    <div class='flex items-end gap-0.5 h-32 w-full justify-center'>
        <div class='w-2 bg-red-400 rounded-t' style='height: {}%' title='Spending {}'></div>
        <div class='w-2 bg-green-400 rounded-t' style='height: {}%' title='Income {}'></div>
    </div>
    <span class='text-xs text-gray-500 mt-1'>{}</span>
</div>"#,
            height(point.spending),
            point.spending,
            height(point.income),
            point.income,
            point.month
        ));
    }
    format!(
        r#"<div class='flex gap-1'>{}</div>
<div class='flex gap-4 mt-3 text-xs text-gray-500'>
    <span>🟥 Spending</span><span>🟩 Income</span>
</div>"#,
        bars
    )
}

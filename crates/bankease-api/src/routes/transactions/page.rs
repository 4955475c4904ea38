//! Transaction detail rendering

use bankease_core::{
    CancelOutcome, SessionSnapshot, TransactionParty, TransactionRecord, TransactionStatus,
};
use bankease_utils::{capitalize, escape_html, format_long_date, format_time, MoneyFormat};

use crate::action_button;

const SECONDARY_BUTTON: &str = "px-4 py-2 border rounded-lg hover:bg-gray-50";

/// Detail card for the selected transaction
pub fn render_transaction(snapshot: &SessionSnapshot, money: &MoneyFormat) -> String {
    match &snapshot.selected_transaction {
        Some(record) => render_record(record, money),
        None => r#"<div class='bg-white rounded-xl shadow-sm p-6 text-gray-500'>
    No transaction selected.
</div>"#
            .to_string(),
    }
}

fn render_record(record: &TransactionRecord, money: &MoneyFormat) -> String {
    let amount_class = if record.is_debit() { "text-red-600" } else { "text-gray-900" };

    let mut rows = vec![
        ("Date", format_long_date(&record.timestamp)),
        ("Time", format_time(&record.timestamp)),
        ("Type", capitalize(&record.kind.to_string())),
        ("From", party_html(&record.from)),
    ];
    if let Some(to) = &record.to {
        rows.push(("To", party_html(to)));
    }
    if let Some(reference) = &record.reference_number {
        rows.push(("Reference", escape_html(reference)));
    }
    if let Some(notes) = &record.notes {
        rows.push(("Notes", escape_html(notes)));
    }
    rows.push(("Transaction ID", escape_html(&record.id)));

    let details: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<div class='flex justify-between py-2'>
    <dt class='text-sm text-gray-500'>{}</dt><dd class='font-medium text-right'>{}</dd>
</div>"#,
                label, value
            )
        })
        .collect();

    let cancel = if record.is_cancellable() {
        action_button(
            "/transactions/cancel",
            "Cancel Transaction",
            "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700",
        )
    } else {
        String::new()
    };

    format!(
        r#"<div class='mb-4'>{}</div>
<div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
    <div class='flex items-start justify-between mb-4'>
        <div>
            <h2 class='text-xl font-bold'>{}</h2>
            <p class='text-3xl font-bold mt-1 {}'>{}</p>
        </div>
        {}
    </div>
    <dl class='divide-y'>{}</dl>
</div>
<div class='flex flex-wrap gap-3'>{}{}{}</div>"#,
        action_button("/transactions/back", "← Back", "text-sm text-indigo-600 hover:underline"),
        escape_html(&record.description),
        amount_class,
        money.format(record.amount, &record.currency),
        status_badge(record.status),
        details,
        cancel,
        action_button("/transactions/contact-support", "Contact Support", SECONDARY_BUTTON),
        action_button("/transactions/view-history", "View History", SECONDARY_BUTTON),
    )
}

fn party_html(party: &TransactionParty) -> String {
    match &party.account_type {
        Some(account_type) => format!(
            "{}<br><span class='text-sm text-gray-500 font-normal'>{}</span>",
            escape_html(&party.name),
            escape_html(account_type)
        ),
        None => escape_html(&party.name),
    }
}

fn status_badge(status: TransactionStatus) -> String {
    let class = match status {
        TransactionStatus::Completed => "bg-green-100 text-green-700",
        TransactionStatus::Processing => "bg-yellow-100 text-yellow-700",
        TransactionStatus::Pending => "bg-gray-100 text-gray-700",
        TransactionStatus::Failed => "bg-red-100 text-red-700",
    };
    format!(
        "<span class='px-3 py-1 rounded-full text-sm font-medium {}'>{}</span>",
        class,
        capitalize(&status.to_string())
    )
}

/// User-facing text for a cancel attempt
pub fn cancel_message(outcome: &CancelOutcome) -> String {
    match outcome {
        CancelOutcome::Cancelled { .. } => "Transaction cancelled.".to_string(),
        CancelOutcome::NotCancellable { status, .. } => {
            format!("This transaction is {} and can no longer be cancelled.", status)
        }
        CancelOutcome::NoSelection => "No transaction is selected.".to_string(),
    }
}

//! Support & FAQ rendering

use bankease_core::fixtures::FAQ_ENTRIES;
use bankease_core::{faq, FaqSearch, SearchOutcome};
use bankease_utils::escape_html;

use crate::action_button;

/// Search box, results list and the contact button
pub fn render_support(query: &str) -> String {
    let results = render_faq_results(&faq::search(&FAQ_ENTRIES, query));
    format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Support &amp; FAQ</h2></div>
<div class='bg-white rounded-xl shadow-sm p-6 mb-6'>
    <input type='search' name='q' value='{}' placeholder='Search FAQs...'
        class='w-full px-3 py-2 border rounded-lg'
        hx-get='/support/results' hx-trigger='input changed delay:300ms, search'
        hx-target='#faq-results' hx-swap='innerHTML'>
    <div id='faq-results' class='mt-4'>{}</div>
</div>
<div class='bg-white rounded-xl shadow-sm p-6 text-center'>
    <p class='text-gray-500 mb-3'>Can't find what you're looking for?</p>
    {}
</div>"#,
        escape_html(query),
        results,
        action_button(
            "/support/contact",
            "Contact Support",
            "px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700"
        )
    )
}

/// Results list with a header matching the search outcome
pub fn render_faq_results(search: &FaqSearch<'_>) -> String {
    let header = match search.outcome {
        SearchOutcome::ShowingAll => String::new(),
        SearchOutcome::Matches { count } => format!(
            "<p class='text-sm text-gray-500 mb-2'>{} result{} for \"{}\"</p>",
            count,
            if count == 1 { "" } else { "s" },
            escape_html(&search.query)
        ),
        SearchOutcome::NoResults => {
            return format!(
                "<p class='text-gray-500 text-center py-6'>No results found for \"{}\".</p>",
                escape_html(&search.query)
            )
        }
    };

    let mut items = String::new();
    for entry in &search.entries {
        items.push_str(&format!(
            r#"<details class='border rounded-lg p-3'>
    <summary class='font-medium cursor-pointer'>{}</summary>
    <p class='mt-2 text-gray-600'>{}</p>
</details>"#,
            escape_html(entry.question),
            escape_html(entry.answer)
        ));
    }
    format!("{}<div class='space-y-2'>{}</div>", header, items)
}

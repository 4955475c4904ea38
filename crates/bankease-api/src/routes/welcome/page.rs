//! Welcome screen rendering

use crate::action_button;

pub fn render_welcome() -> String {
    format!(
        r#"<div class='flex items-center justify-center py-16'>
    <div class='bg-white rounded-xl shadow-sm p-8 max-w-md w-full text-center'>
        <div class='text-5xl mb-4'>🏦</div>
        <h2 class='text-2xl font-bold mb-2'>Welcome to BankEase</h2>
        <p class='text-gray-500 mb-6'>Your simple, secure and smart banking companion.</p>
        {}
    </div>
</div>"#,
        action_button(
            "/welcome/start",
            "Get Started",
            "w-full px-4 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700"
        )
    )
}

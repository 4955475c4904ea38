//! Settings screen rendering

use bankease_core::{Language, SessionSnapshot};

use crate::action_button;

pub fn render_settings(snapshot: &SessionSnapshot) -> String {
    let prefs = &snapshot.preferences;

    let language_options: String = Language::ALL
        .iter()
        .map(|language| {
            let selected = if *language == prefs.language { " selected" } else { "" };
            format!("<option value='{}'{}>{}</option>", language, selected, language.label())
        })
        .collect();

    let checked = |on: bool| if on { " checked" } else { "" };

    format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>Application Settings</h2></div>
<form hx-post='/settings/preferences' hx-target='#app' hx-swap='outerHTML'
    class='bg-white rounded-xl shadow-sm p-6 mb-6 space-y-4'>
    <h3 class='text-lg font-semibold'>Preferences</h3>
    <label class='flex items-center justify-between'>
        <span>Language</span>
        <select name='language' class='px-3 py-2 border rounded-lg bg-white'>{}</select>
    </label>
    <label class='flex items-center justify-between'>
        <span>Transaction Alerts</span>
        <input type='checkbox' name='transaction_alerts' value='on' class='h-4 w-4'{}>
    </label>
    <label class='flex items-center justify-between'>
        <span>Dark Mode</span>
        <input type='checkbox' name='dark_mode' value='on' class='h-4 w-4'{}>
    </label>
    <button type='submit' class='px-4 py-2 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>
        Save Preferences
    </button>
</form>
<div class='bg-white rounded-xl shadow-sm p-6'>
    <h3 class='text-lg font-semibold mb-4'>Account</h3>
    {}
</div>"#,
        language_options,
        checked(prefs.transaction_alerts),
        checked(prefs.dark_mode),
        action_button(
            "/settings/logout",
            "Log Out",
            "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700"
        )
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::settings::PreferencesForm;
    use bankease_core::{Action, Session};

    #[test]
    fn test_form_reflects_preferences() {
        let mut session = Session::default();
        session.dispatch(Action::SetLanguage { language: Language::Es }).unwrap();
        let html = render_settings(&session.snapshot());
        assert!(html.contains("<option value='es' selected>Español</option>"));
        assert!(html.contains("name='transaction_alerts' value='on' class='h-4 w-4' checked"));
        assert!(html.contains("name='dark_mode' value='on' class='h-4 w-4'>"));
    }

    #[test]
    fn test_unchecked_boxes_disable_preferences() {
        let form = PreferencesForm {
            language: Language::En,
            transaction_alerts: None,
            dark_mode: Some("on".to_string()),
        };
        assert_eq!(
            form.into_actions(),
            vec![
                Action::SetLanguage { language: Language::En },
                Action::SetTransactionAlerts { enabled: false },
                Action::SetDarkMode { enabled: true },
            ]
        );
    }
}

//! Onboarding screen rendering

use bankease_core::fixtures::ONBOARDING_FEATURES;
use bankease_core::{OnboardingFeature, SessionSnapshot};
use bankease_utils::escape_html;

use crate::action_button;

/// Checkbox grid of features, pre-checked from the session
pub fn render_onboarding(snapshot: &SessionSnapshot) -> String {
    let mut options = String::new();
    for feature in ONBOARDING_FEATURES.iter() {
        let checked = snapshot.onboarding_selections.iter().any(|id| id == feature.id);
        options.push_str(&feature_option(feature, checked));
    }

    format!(
        r#"<div class='bg-white rounded-xl shadow-sm p-6'>
    <h2 class='text-2xl font-bold mb-1'>Select Features</h2>
    <p class='text-gray-500 mb-6'>
        Choose what you would like to explore. You can change this later.
    </p>
    <form hx-post='/onboarding/complete' hx-target='#app' hx-swap='outerHTML'>
        <div class='grid grid-cols-1 sm:grid-cols-2 gap-3 mb-6'>{}</div>
        <button type='submit'
            class='w-full px-4 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700'>
            Complete Onboarding
        </button>
    </form>
    <div class='mt-3 text-center'>{}</div>
</div>"#,
        options,
        action_button("/onboarding/skip", "Skip for now", "text-sm text-gray-500 hover:underline")
    )
}

fn feature_option(feature: &OnboardingFeature, checked: bool) -> String {
    format!(
        r#"<label
    class='flex items-center gap-3 p-3 border rounded-lg hover:bg-gray-50 cursor-pointer'>
    <input type='checkbox' name='{}' value='on' class='h-4 w-4 text-indigo-600'{}>
    <span>{}</span>
</label>"#,
        escape_html(feature.id),
        if checked { " checked" } else { "" },
        escape_html(feature.label)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bankease_core::{Action, Session};

    #[test]
    fn test_previous_selections_are_checked() {
        let mut session = Session::default();
        session.dispatch(Action::Start).unwrap();
        session
            .dispatch(Action::CompleteOnboarding {
                selections: ["rewards_program".to_string()].into_iter().collect(),
            })
            .unwrap();
        let html = render_onboarding(&session.snapshot());
        assert!(html
            .contains("name='rewards_program' value='on' class='h-4 w-4 text-indigo-600' checked"));
        assert!(html.contains("name='savings_goals' value='on' class='h-4 w-4 text-indigo-600'>"));
        assert_eq!(html.matches("type='checkbox'").count(), 12);
    }

    #[test]
    fn test_feature_label_is_escaped() {
        let feature = OnboardingFeature {
            id: "tips",
            label: "Tips & <Tricks>",
        };
        let html = feature_option(&feature, false);
        assert!(html.contains("<span>Tips &amp; &lt;Tricks&gt;</span>"));
        assert!(!html.contains(" checked"));
    }
}

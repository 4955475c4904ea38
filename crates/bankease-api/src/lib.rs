//! HTTP server with HTMX screens
//!
//! Routes are organized into one module per screen:
//! - routes::welcome: Landing card
//! - routes::onboarding: Feature selection
//! - routes::account: Balance, trends and recent activity
//! - routes::transactions: Selected transaction detail
//! - routes::settings: Preferences and logout
//! - routes::support: FAQ search
//!
//! Every form post dispatches one [`Action`] to the shared [`Session`] and
//! answers with the re-rendered application shell.

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    extract::Path,
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use bankease_config::{Config, CurrencyConfig, SymbolPosition};
use bankease_core::{
    fixtures, AccountSnapshot, Action, CoreError, DispatchOutcome, Screen, Session,
    SessionSnapshot,
};
use bankease_utils::{escape_html, MoneyFormat};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<Session>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, session: Session) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            config,
        }
    }

    /// Apply `action` under the write lock and return the resulting state
    pub async fn apply(
        &self,
        action: Action,
    ) -> Result<(DispatchOutcome, SessionSnapshot), ApiError> {
        let mut session = self.session.write().await;
        let outcome = session.dispatch(action)?;
        Ok((outcome, session.snapshot()))
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.session.read().await.snapshot()
    }

    pub fn money_format(&self) -> MoneyFormat {
        money_format(&self.config.currency)
    }

    /// Overview figures in the configured currency
    pub fn account_snapshot(&self) -> AccountSnapshot {
        fixtures::account_snapshot().with_currency(&self.config.currency.default_currency)
    }
}

/// Translate the currency section of the config into a formatter
pub fn money_format(currency: &CurrencyConfig) -> MoneyFormat {
    MoneyFormat {
        decimal_places: currency.decimal_places,
        thousands_separator: currency.thousands_separator.clone(),
        decimal_separator: currency.decimal_separator.clone(),
        symbol_before: currency.symbol_position == SymbolPosition::Before,
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::account::{api_account_summary, htmx_pay_bills, htmx_view_transactions};
    use routes::onboarding::{
        api_onboarding_features, htmx_complete_onboarding, htmx_skip_onboarding,
    };
    use routes::settings::{api_settings, htmx_logout, htmx_save_preferences};
    use routes::support::{api_faq, htmx_contact_support, htmx_faq_results};
    use routes::transactions::{
        htmx_back, htmx_cancel_transaction, htmx_transaction_contact_support, htmx_view_history,
    };
    use routes::welcome::htmx_start;

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/state", get(api_state))
        .route("/api/actions", post(api_dispatch))
        .route("/api/faq", get(api_faq))
        .route("/api/account/summary", get(api_account_summary))
        .route("/api/onboarding/features", get(api_onboarding_features))
        .route("/api/settings", get(api_settings))
        // HTMX page routes
        .route("/", get(index_page))
        .route("/navigate/:screen", post(htmx_navigate))
        .route("/welcome/start", post(htmx_start))
        .route("/onboarding/complete", post(htmx_complete_onboarding))
        .route("/onboarding/skip", post(htmx_skip_onboarding))
        .route("/account/view-transactions", post(htmx_view_transactions))
        .route("/account/pay-bills", post(htmx_pay_bills))
        .route("/transactions/cancel", post(htmx_cancel_transaction))
        .route("/transactions/back", post(htmx_back))
        .route("/transactions/contact-support", post(htmx_transaction_contact_support))
        .route("/transactions/view-history", post(htmx_view_history))
        .route("/settings/logout", post(htmx_logout))
        .route("/settings/preferences", post(htmx_save_preferences))
        .route("/support/contact", post(htmx_contact_support))
        // HTMX partial routes
        .route("/support/results", get(htmx_faq_results))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound {
        resource: uri.path().to_string(),
    }
}

/// Current session state (JSON API)
async fn api_state(state: axum::extract::State<AppState>) -> Json<SessionSnapshot> {
    Json(state.snapshot().await)
}

/// Dispatch an action (JSON API)
async fn api_dispatch(
    state: axum::extract::State<AppState>,
    Json(action): Json<Action>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (outcome, snapshot) = state.apply(action).await?;
    Ok(Json(serde_json::json!({
        "outcome": outcome,
        "state": snapshot,
    })))
}

/// Render whatever screen the session is on
async fn index_page(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let snapshot = state.snapshot().await;
    axum::response::Html(render_screen(&state, &headers, &snapshot, None))
}

/// HTMX: navigation bar
async fn htmx_navigate(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    Path(screen): Path<String>,
) -> Result<axum::response::Html<String>, ApiError> {
    let target = screen.parse::<Screen>().map_err(|reason| CoreError::InvalidValue {
        field: "screen".to_string(),
        reason,
    })?;
    dispatch_and_render(&state, &headers, Action::NavigateTo { screen: target }).await
}

/// Dispatch `action` and answer with the re-rendered shell.
/// An ignored action is reported in a notice above the screen. A rejected
/// action is a 409 for plain callers and a notice for HTMX, which does not
/// swap error responses.
pub async fn dispatch_and_render(
    state: &AppState,
    headers: &axum::http::HeaderMap,
    action: Action,
) -> Result<axum::response::Html<String>, ApiError> {
    let (outcome, snapshot) = match state.apply(action).await {
        Ok(applied) => applied,
        Err(ApiError::Conflict { details }) if is_htmx_request(headers) => {
            log::warn!("Rejected [{}] {}", details.code, details.message);
            let snapshot = state.snapshot().await;
            return Ok(axum::response::Html(render_screen(
                state,
                headers,
                &snapshot,
                Some(&details.message),
            )));
        }
        Err(e) => return Err(e),
    };
    let notice = match &outcome {
        DispatchOutcome::Ignored { reason } => Some(reason.clone()),
        _ => None,
    };
    Ok(axum::response::Html(render_screen(state, headers, &snapshot, notice.as_deref())))
}

// ==================== Template Functions ====================

/// Heading for each screen
pub fn screen_title(screen: Screen) -> &'static str {
    match screen {
        Screen::Welcome => "Welcome to BankEase",
        Screen::Onboarding => "Onboarding - Select Features",
        Screen::AccountOverview => "Account Overview",
        Screen::TransactionDetails => "Transaction Details",
        Screen::Settings => "Application Settings",
        Screen::SupportFaq => "Support & FAQ",
    }
}

/// Document title for each screen
pub fn page_title(screen: Screen) -> String {
    format!("{} | BankEase Prototype", screen_title(screen))
}

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
    </style>
</head>
<body>
    {}
</body>
</html>"#,
        escape_html(title),
        content
    )
}

/// Button that posts to `path` and swaps the whole application shell
pub fn action_button(path: &str, label: &str, class: &str) -> String {
    format!(
        r#"<button hx-post='{}' hx-target='#app' hx-swap='outerHTML' class='{}'>{}</button>"#,
        path,
        class,
        escape_html(label)
    )
}

/// Primary navigation bar (Account / Settings / Support)
pub fn nav_bar(current: Screen) -> String {
    let links = [
        (Screen::AccountOverview, "Account", "🏦"),
        (Screen::Settings, "Settings", "⚙️"),
        (Screen::SupportFaq, "Support", "💬"),
    ];

    let mut nav = String::from("<nav class='bg-white border-t sm:border-t-0 sm:border-b'>");
    nav.push_str("<ul class='flex justify-around sm:justify-center sm:gap-6 py-2'>");
    for (screen, label, icon) in &links {
        let active_class = if *screen == current {
            "bg-indigo-50 text-indigo-600"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        nav.push_str(&format!(
            r#"<li><button hx-post='/navigate/{}' hx-target='#app' hx-swap='outerHTML'
    class='flex items-center gap-2 px-3 py-2 rounded-lg {}'>{}<span>{}</span></button></li>"#,
            screen.slug(),
            active_class,
            icon,
            label
        ));
    }
    nav.push_str("</ul></nav>");
    nav
}

fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap screen content in the application shell, as a full page or as an
/// HTMX fragment
pub fn page_response(
    headers: &axum::http::HeaderMap,
    snapshot: &SessionSnapshot,
    inner_content: &str,
) -> String {
    let theme = if snapshot.preferences.dark_mode {
        "bg-gray-900 text-gray-100 dark"
    } else {
        "bg-gray-50 text-gray-900"
    };
    let nav = if snapshot.main_navigation {
        nav_bar(snapshot.screen)
    } else {
        String::new()
    };
    let shell = format!(
        r#"<div id='app' class='min-h-screen flex flex-col {}' data-screen='{}'>
    <header class='px-6 py-4 border-b bg-white'>
        <h1 class='text-xl font-bold text-indigo-600'>BankEase</h1>
    </header>
    {}
    <main class='flex-1 overflow-auto p-6 max-w-4xl w-full mx-auto'>{}</main>
</div>"#,
        theme, snapshot.screen, nav, inner_content
    );

    let title = page_title(snapshot.screen);
    if is_htmx_request(headers) {
        format!("<title>{}</title>{}", escape_html(&title), shell)
    } else {
        base_html(&title, &shell)
    }
}

/// Inline message shown above the screen content
pub fn notice_html(message: &str) -> String {
    format!(
        r#"<div role='status'
    class='mb-4 rounded-lg border border-amber-200 bg-amber-50 p-3 text-sm text-amber-800'>
    {}
</div>"#,
        escape_html(message)
    )
}

/// Render the session's current screen
pub fn render_screen(
    state: &AppState,
    headers: &axum::http::HeaderMap,
    snapshot: &SessionSnapshot,
    notice: Option<&str>,
) -> String {
    let money = state.money_format();
    let body = match snapshot.screen {
        Screen::Welcome => routes::welcome::render_welcome(),
        Screen::Onboarding => routes::onboarding::render_onboarding(snapshot),
        Screen::AccountOverview => {
            routes::account::render_account(&state.account_snapshot(), &money)
        }
        Screen::TransactionDetails => routes::transactions::render_transaction(snapshot, &money),
        Screen::Settings => routes::settings::render_settings(snapshot),
        Screen::SupportFaq => routes::support::render_support(""),
    };
    let inner = match notice {
        Some(message) => format!("{}{}", notice_html(message), body),
        None => body,
    };
    page_response(headers, snapshot, &inner)
}

/// Start the HTTP server and serve until Ctrl-C
pub async fn start_server(config: Config, session: Session) -> anyhow::Result<()> {
    let addr = config.bind_address();
    let state = AppState::new(config, session);

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting BankEase server on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Current screen)");
    log::info!("  - /api/state (Session snapshot)");
    log::info!("  - /api/actions (Dispatch an action)");
    log::info!("  - /api/faq?q= (FAQ search)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use bankease_core::NavigationPolicy;
    use tower::ServiceExt;

    fn app(policy: NavigationPolicy) -> (Router, AppState) {
        app_with_config(Config::default(), policy)
    }

    fn app_with_config(config: Config, policy: NavigationPolicy) -> (Router, AppState) {
        let session = Session::new(&config).with_policy(policy);
        let state = AppState::new(config, session);
        (create_router(state.clone()), state)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("hx-request", "true")
            .body(Body::empty())
            .unwrap()
    }

    fn post_plain(uri: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn post_form(uri: &str, form: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("hx-request", "true")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap()
    }

    fn post_json(uri: &str, json: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (router, _) = app(NavigationPolicy::Strict);
        let response = router.oneshot(get_req("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "OK");
    }

    #[tokio::test]
    async fn test_index_renders_welcome_page() {
        let (router, _) = app(NavigationPolicy::Strict);
        let response = router.oneshot(get_req("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Welcome to BankEase | BankEase Prototype</title>"));
        assert!(html.contains("/welcome/start"));
        assert!(!html.contains("/navigate/settings"));
    }

    #[tokio::test]
    async fn test_htmx_request_gets_fragment() {
        let (router, _) = app(NavigationPolicy::Strict);
        let response = router.oneshot(post("/welcome/start")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(!html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<title>Onboarding - Select Features | BankEase Prototype</title>"));
        assert!(html.contains("data-screen='ONBOARDING'"));
    }

    #[tokio::test]
    async fn test_api_actions_dispatch() {
        let (router, state) = app(NavigationPolicy::Strict);
        let response = router
            .oneshot(post_json("/api/actions", serde_json::json!({ "action": "start" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["outcome"]["outcome"], "applied");
        assert_eq!(body["state"]["screen"], "ONBOARDING");
        assert_eq!(state.snapshot().await.screen, Screen::Onboarding);
    }

    #[tokio::test]
    async fn test_direct_detail_jump_is_conflict() {
        let (router, state) = app(NavigationPolicy::Strict);
        state.apply(Action::Start).await.unwrap();
        state.apply(Action::SkipOnboarding).await.unwrap();

        let response = router.oneshot(post_plain("/navigate/transaction")).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["code"], "DETAIL_REQUIRES_TRANSACTION");
        assert_eq!(state.snapshot().await.screen, Screen::AccountOverview);
    }

    #[tokio::test]
    async fn test_strict_rejection_renders_notice_for_htmx() {
        let (router, state) = app(NavigationPolicy::Strict);
        state.apply(Action::Start).await.unwrap();
        state.apply(Action::SkipOnboarding).await.unwrap();

        let response = router.clone().oneshot(post("/navigate/transaction")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("role='status'"));
        assert!(html.contains("data-screen='ACCOUNT_OVERVIEW'"));
        assert_eq!(state.snapshot().await.screen, Screen::AccountOverview);

        let response = router.oneshot(post("/transactions/back")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("role='status'"));
        assert!(html.contains("data-screen='ACCOUNT_OVERVIEW'"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (router, _) = app(NavigationPolicy::Strict);
        let response = router.oneshot(get_req("/nowhere")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"], "Not Found");
        assert_eq!(body["message"], "Not found: /nowhere");
    }

    #[tokio::test]
    async fn test_overview_uses_configured_currency() {
        let mut config = Config::default();
        config.currency.default_currency = "EUR".to_string();
        let (router, state) = app_with_config(config, NavigationPolicy::Strict);
        state.apply(Action::Start).await.unwrap();

        let response = router.clone().oneshot(post("/onboarding/skip")).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("€12,345.67"));
        assert!(!html.contains("$12,345.67"));

        let response = router.oneshot(get_req("/api/account/summary")).await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["currency"], "EUR");
        assert_eq!(state.snapshot().await.screen, Screen::AccountOverview);
    }

    #[tokio::test]
    async fn test_unknown_screen_is_bad_request() {
        let (router, _) = app(NavigationPolicy::Strict);
        let response = router.oneshot(post("/navigate/vault")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_lenient_policy_renders_notice() {
        let (router, state) = app(NavigationPolicy::Lenient);
        let response = router.oneshot(post("/transactions/back")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("role='status'"));
        assert!(html.contains("data-screen='WELCOME'"));
        assert_eq!(state.snapshot().await.screen, Screen::Welcome);
    }

    #[tokio::test]
    async fn test_form_flow_through_pay_bills() {
        let (router, state) = app(NavigationPolicy::Strict);

        let response = router.clone().oneshot(post("/welcome/start")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .clone()
            .oneshot(post_form(
                "/onboarding/complete",
                "savings_goals=on&budgeting_aids=on&bogus=on",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("$12,345.67"));
        assert!(html.contains("/navigate/settings"));
        assert_eq!(
            state.snapshot().await.onboarding_selections,
            vec!["budgeting_aids".to_string(), "savings_goals".to_string()]
        );

        let response = router.clone().oneshot(post("/account/pay-bills")).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Electricity Bill Payment"));
        assert!(html.contains("/transactions/cancel"));

        let response = router.clone().oneshot(post("/transactions/cancel")).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Transaction cancelled"));
        assert!(!html.contains("hx-post='/transactions/cancel'"));

        let response = router.clone().oneshot(post("/transactions/back")).await.unwrap();
        assert!(body_text(response).await.contains("data-screen='ACCOUNT_OVERVIEW'"));
        assert!(state.snapshot().await.selected_transaction.is_some());
    }

    #[tokio::test]
    async fn test_faq_search_api() {
        let (router, _) = app(NavigationPolicy::Strict);
        let response = router.clone().oneshot(get_req("/api/faq?q=PASSWORD")).await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["outcome"]["kind"], "matches");
        assert_eq!(body["entries"][0]["id"], "faq1");

        let response = router.oneshot(get_req("/api/faq")).await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["outcome"]["kind"], "showing_all");
        assert_eq!(body["entries"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_faq_results_fragment() {
        let (router, _) = app(NavigationPolicy::Strict);
        let response = router
            .clone()
            .oneshot(get_req("/support/results?q=zzzznomatch"))
            .await
            .unwrap();
        let html = body_text(response).await;
        assert!(html.contains("No results found for"));
        assert!(html.contains("zzzznomatch"));

        let response = router.oneshot(get_req("/support/results?q=fraud")).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("How do I report a fraudulent transaction?"));
        assert!(!html.contains("Are my deposits insured?"));
    }

    #[tokio::test]
    async fn test_settings_preferences_and_logout() {
        let (router, state) = app(NavigationPolicy::Strict);
        state.apply(Action::Start).await.unwrap();
        state.apply(Action::SkipOnboarding).await.unwrap();
        state.apply(Action::NavigateTo { screen: Screen::Settings }).await.unwrap();

        let response = router
            .clone()
            .oneshot(post_form("/settings/preferences", "language=fr&dark_mode=on"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.screen, Screen::Settings);
        assert_eq!(snapshot.preferences.language, bankease_core::Language::Fr);
        assert!(snapshot.preferences.dark_mode);
        assert!(!snapshot.preferences.transaction_alerts);

        let response = router.oneshot(post("/settings/logout")).await.unwrap();
        assert!(body_text(response).await.contains("data-screen='WELCOME'"));
        assert_eq!(state.snapshot().await.screen, Screen::Welcome);
    }

    #[tokio::test]
    async fn test_json_read_endpoints() {
        let (router, _) = app(NavigationPolicy::Strict);

        let response = router.clone().oneshot(get_req("/api/account/summary")).await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["total_balance"], "12345.67");
        assert_eq!(body["trends"].as_array().unwrap().len(), 12);

        let response = router.clone().oneshot(get_req("/api/onboarding/features")).await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body.as_array().unwrap().len(), 12);

        let response = router.oneshot(get_req("/api/settings")).await.unwrap();
        let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["config"]["server"]["port"], 8080);
        assert_eq!(body["preferences"]["language"], "en");
    }
}

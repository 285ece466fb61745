use std::sync::LazyLock;

pub struct UiText {
    // --- Header ---
    pub app_title: String,
    pub app_subtitle: String,
    pub button_run: String,
    pub button_running: String,
    pub badge_demo_mode: String,
    pub badge_backend_online: String,
    pub badge_backend_offline: String,
    pub label_updated: String,
    pub label_never: String,

    // --- Controls ---
    pub controls_heading: String,
    pub label_risk: String,
    pub label_horizon: String,

    // --- Prediction panel ---
    pub prediction_heading: String,
    pub badge_loading: String,
    pub badge_ready: String,
    pub badge_live: String,
    pub loading_body: String,
    pub idle_body: String,
    pub label_confidence: String,
    pub label_prob_up: String,
    pub label_prob_down: String,
    pub label_top_sector: String,
    pub error_heading: String,

    // --- Chart ---
    pub chart_heading: String,
    pub chart_subtitle: String,
    pub badge_bullish: String,
    pub badge_bearish: String,
    pub chart_confidence_prefix: String,

    // --- Sectors / companies / reasoning ---
    pub sectors_heading: String,
    pub sectors_empty: String,
    pub companies_heading: String,
    pub companies_empty: String,
    pub label_recommended: String,
    pub reasoning_heading: String,

    // --- Alert ---
    pub alert_title: String,
    pub alert_dismiss: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Market Pulse".to_string(),
    app_subtitle: "Hybrid ML + LLM Prediction Engine".to_string(),
    button_run: "Run Prediction".to_string(),
    button_running: "Analyzing...".to_string(),
    badge_demo_mode: "Demo Mode".to_string(),
    badge_backend_online: "Backend Online".to_string(),
    badge_backend_offline: "Backend Offline".to_string(),
    label_updated: "Updated".to_string(),
    label_never: "Never".to_string(),

    controls_heading: "Prediction Parameters".to_string(),
    label_risk: "Risk Level".to_string(),
    label_horizon: "Investment Horizon".to_string(),

    prediction_heading: "Core Prediction (Model v3.1)".to_string(),
    badge_loading: "Loading".to_string(),
    badge_ready: "Ready".to_string(),
    badge_live: "Live".to_string(),
    loading_body: "Analyzing market data...".to_string(),
    idle_body: "Select risk level and horizon, then run a prediction to get \
        AI-powered market insights."
        .to_string(),
    label_confidence: "Confidence".to_string(),
    label_prob_up: "P(up)".to_string(),
    label_prob_down: "P(down)".to_string(),
    label_top_sector: "Top Sector".to_string(),
    error_heading: "Prediction Error".to_string(),

    chart_heading: "Market Trend Analysis".to_string(),
    chart_subtitle: "30-Day Historical & Forecast".to_string(),
    badge_bullish: "Bullish Signal".to_string(),
    badge_bearish: "Bearish Signal".to_string(),
    chart_confidence_prefix: "AI Confidence:".to_string(),

    sectors_heading: "Recommended Sectors".to_string(),
    sectors_empty: "No sectors available".to_string(),
    companies_heading: "Top Stock Picks".to_string(),
    companies_empty: "No companies available".to_string(),
    label_recommended: "AI Recommended".to_string(),
    reasoning_heading: "Model Reasoning".to_string(),

    alert_title: "Prediction Error".to_string(),
    alert_dismiss: "Dismiss".to_string(),
});

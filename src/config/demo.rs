use std::time::Duration;

use crate::config::Direction;

/// The canned response demo mode serves for every request.
/// Deterministic - no randomness.
pub struct DemoPrediction {
    pub direction: Direction,
    pub probability_up: f64,
    pub probability_down: f64,
    pub sectors: &'static [&'static str],
    pub companies: &'static [&'static str],
    pub reasoning: &'static str,
}

pub struct DemoConfig {
    pub simulated_latency: Duration,
    pub prediction: DemoPrediction,
}

pub const DEMO: DemoConfig = DemoConfig {
    simulated_latency: Duration::from_millis(1000),
    prediction: DemoPrediction {
        direction: Direction::Up,
        probability_up: 0.78,
        probability_down: 0.22,
        sectors: &["Technology", "Energy", "Healthcare"],
        companies: &[
            "AAPL", "NVDA", "XOM", "JNJ", "MSFT", "GOOGL", "META", "TSLA",
        ],
        reasoning: "Positive macro momentum, improving sentiment, and sector rotation \
            favor risk-on positioning. Technology sector shows strong AI-driven growth, \
            Energy benefits from supply constraints, and Healthcare maintains defensive \
            stability.",
    },
};

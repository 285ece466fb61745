use serde::{Deserialize, Serialize};

use crate::config::{Confidence, DEMO, Direction, Horizon, RiskLevel};
use crate::data::PredictError;

/// Companies beyond this rank are not shown.
pub const MAX_DISPLAY_COMPANIES: usize = 10;

/// Parameters sent with a prediction request. Built fresh from the current
/// selection at trigger time and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PredictionRequest {
    pub risk_level: RiskLevel,
    pub investment_horizon: Horizon,
}

impl PredictionRequest {
    pub fn new(risk_level: RiskLevel, investment_horizon: Horizon) -> Self {
        Self {
            risk_level,
            investment_horizon,
        }
    }
}

/// Canonical internal prediction shape. Wire responses are normalized into
/// this exactly once at the provider boundary; panels never see the dual
/// nested/flat schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub direction: Direction,
    pub probability_up: f64,
    pub probability_down: f64,
    pub sectors: Vec<String>,
    pub companies: Vec<String>,
    pub reasoning: String,
}

impl Prediction {
    /// The deterministic demo-mode response.
    pub fn demo() -> Self {
        let p = &DEMO.prediction;
        Self {
            direction: p.direction,
            probability_up: p.probability_up,
            probability_down: p.probability_down,
            sectors: p.sectors.iter().map(|s| s.to_string()).collect(),
            companies: p.companies.iter().map(|s| s.to_string()).collect(),
            reasoning: p.reasoning.to_string(),
        }
    }

    pub fn confidence(&self) -> Confidence {
        Confidence::from_probabilities(self.probability_up, self.probability_down)
    }

    /// Ranked companies truncated for display. Rank = position + 1.
    pub fn display_companies(&self) -> &[String] {
        let n = self.companies.len().min(MAX_DISPLAY_COMPANIES);
        &self.companies[..n]
    }
}

/// Nested "tier3" schema used by the richer response format.
#[derive(Debug, Clone, Deserialize)]
pub struct WireTier3 {
    pub sp500_direction: Option<Direction>,
    pub probability_up: Option<f64>,
    pub probability_down: Option<f64>,
    pub recommended_sectors: Option<Vec<String>>,
    pub top_companies: Option<Vec<String>>,
    pub reasoning: Option<String>,
}

/// Raw backend response. Two schema versions are in the wild: the nested
/// `tier3_prediction` format and the flat legacy format. Every field is
/// optional here; `normalize` decides what is actually required.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePrediction {
    pub timestamp: Option<String>,
    pub tier1_snapshot: Option<serde_json::Value>,
    pub tier2_risk_level: Option<String>,
    pub tier2_horizon: Option<String>,
    pub tier3_prediction: Option<WireTier3>,

    // Flat legacy fields
    pub direction: Option<Direction>,
    pub sectors: Option<Vec<String>>,
    pub companies: Option<Vec<String>>,
    pub reasoning: Option<String>,
    pub probability_up: Option<f64>,
    pub probability_down: Option<f64>,
}

impl WirePrediction {
    /// Collapse the dual-shape response into the canonical form, preferring
    /// nested fields and falling back to the flat legacy ones per field.
    /// A response with no direction in either shape is invalid.
    pub fn normalize(self) -> Result<Prediction, PredictError> {
        let tier3 = self.tier3_prediction;

        let direction = tier3
            .as_ref()
            .and_then(|t| t.sp500_direction)
            .or(self.direction)
            .ok_or(PredictError::InvalidShape)?;

        let probability_up = tier3
            .as_ref()
            .and_then(|t| t.probability_up)
            .or(self.probability_up)
            .unwrap_or(0.0);
        let probability_down = tier3
            .as_ref()
            .and_then(|t| t.probability_down)
            .or(self.probability_down)
            .unwrap_or(0.0);

        let sectors = tier3
            .as_ref()
            .and_then(|t| t.recommended_sectors.clone())
            .or(self.sectors)
            .unwrap_or_default();
        let companies = tier3
            .as_ref()
            .and_then(|t| t.top_companies.clone())
            .or(self.companies)
            .unwrap_or_default();
        let reasoning = tier3
            .and_then(|t| t.reasoning)
            .or(self.reasoning)
            .unwrap_or_default();

        Ok(Prediction {
            direction,
            probability_up,
            probability_down,
            sectors,
            companies,
            reasoning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_json() -> serde_json::Value {
        serde_json::json!({
            "timestamp": "2026-01-05T00:00:00Z",
            "tier2_risk_level": "medium",
            "tier2_horizon": "Mid",
            "tier3_prediction": {
                "sp500_direction": "UP",
                "probability_up": 0.78,
                "probability_down": 0.22,
                "recommended_sectors": ["Technology", "Energy", "Healthcare"],
                "top_companies": ["AAPL", "NVDA", "XOM"],
                "reasoning": "risk-on"
            }
        })
    }

    fn flat_json() -> serde_json::Value {
        serde_json::json!({
            "direction": "UP",
            "probability_up": 0.78,
            "probability_down": 0.22,
            "sectors": ["Technology", "Energy", "Healthcare"],
            "companies": ["AAPL", "NVDA", "XOM"],
            "reasoning": "risk-on"
        })
    }

    #[test]
    fn request_serializes_to_wire_contract() {
        let req = PredictionRequest::new(RiskLevel::Medium, Horizon::Mid);
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"risk_level": "medium", "investment_horizon": "Mid"})
        );
    }

    #[test]
    fn flat_and_nested_shapes_normalize_identically() {
        let nested: WirePrediction = serde_json::from_value(nested_json()).unwrap();
        let flat: WirePrediction = serde_json::from_value(flat_json()).unwrap();
        assert_eq!(nested.normalize().unwrap(), flat.normalize().unwrap());
    }

    #[test]
    fn nested_fields_win_over_flat_ones() {
        let mut json = nested_json();
        json["sectors"] = serde_json::json!(["Utilities"]);
        json["direction"] = serde_json::json!("DOWN");

        let wire: WirePrediction = serde_json::from_value(json).unwrap();
        let p = wire.normalize().unwrap();
        assert_eq!(p.direction, Direction::Up);
        assert_eq!(p.sectors, vec!["Technology", "Energy", "Healthcare"]);
    }

    #[test]
    fn missing_direction_is_an_invalid_shape() {
        let wire: WirePrediction =
            serde_json::from_value(serde_json::json!({"sectors": ["Technology"]})).unwrap();
        assert!(matches!(wire.normalize(), Err(PredictError::InvalidShape)));
    }

    #[test]
    fn demo_probabilities_sum_to_one() {
        let p = Prediction::demo();
        assert!((p.probability_up + p.probability_down - 1.0).abs() < 1e-9);
        assert!(!p.sectors.is_empty());
    }

    #[test]
    fn demo_confidence_displays_78_percent() {
        assert_eq!(Prediction::demo().confidence().to_string(), "78.0%");
    }

    #[test]
    fn company_display_truncates_to_ten_preserving_order() {
        let mut p = Prediction::demo();
        p.companies = (0..15).map(|i| format!("TICK{i}")).collect();

        let shown = p.display_companies();
        assert_eq!(shown.len(), MAX_DISPLAY_COMPANIES);
        assert_eq!(shown[0], "TICK0");
        assert_eq!(shown[9], "TICK9");

        // Shorter lists pass through untouched.
        p.companies = vec!["AAPL".into(), "NVDA".into()];
        assert_eq!(p.display_companies(), ["AAPL", "NVDA"]);
    }
}

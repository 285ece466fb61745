//! Closed enum sets shared by the request model and the UI selectors.

use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

/// Appetite for risk. Wire format is lowercase ("low"/"medium"/"high").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low Risk"),
            Self::Medium => write!(f, "Medium Risk"),
            Self::High => write!(f, "High Risk"),
        }
    }
}

/// Investment time window bucket. Wire format is capitalized ("Short"/"Mid"/"Long").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, Default)]
pub enum Horizon {
    Short,
    #[default]
    Mid,
    Long,
}

impl Horizon {
    /// Rough calendar range shown under the selector label.
    pub fn time_range(&self) -> &'static str {
        match self {
            Self::Short => "1-3 months",
            Self::Mid => "3-12 months",
            Self::Long => "1+ years",
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Short => write!(f, "Short Term"),
            Self::Mid => write!(f, "Mid Term"),
            Self::Long => write!(f, "Long Term"),
        }
    }
}

/// Predicted market movement. Wire format is uppercase ("UP"/"DOWN").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "UP"),
            Self::Down => write!(f, "DOWN"),
        }
    }
}

/// Displayed certainty metric: max of the two complementary probabilities,
/// carried as a percentage in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    pub(crate) fn from_probabilities(up: f64, down: f64) -> Self {
        Self(up.max(down) * 100.0)
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_strings_match_backend_contract() {
        assert_eq!(serde_json::to_string(&RiskLevel::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Horizon::Mid).unwrap(), "\"Mid\"");
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"UP\"");

        let dir: Direction = serde_json::from_str("\"DOWN\"").unwrap();
        assert_eq!(dir, Direction::Down);
    }

    #[test]
    fn confidence_formats_to_one_decimal() {
        let c = Confidence::from_probabilities(0.78, 0.22);
        assert_eq!(c.to_string(), "78.0%");

        // The larger of the two probabilities always wins.
        let c = Confidence::from_probabilities(0.41, 0.59);
        assert_eq!(c.to_string(), "59.0%");
    }
}

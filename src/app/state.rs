use serde::{Deserialize, Serialize};

use crate::config::{Horizon, RiskLevel};
use crate::models::PredictionRequest;

/// Current user choices. Updating either field is a plain assignment; the
/// closed enum sets make invalid values a type error rather than a runtime
/// check. Persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Selection {
    pub risk_level: RiskLevel,
    pub horizon: Horizon,
}

impl Selection {
    /// Snapshot the selection into an immutable request.
    pub fn to_request(self) -> PredictionRequest {
        PredictionRequest::new(self.risk_level, self.horizon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_medium_mid() {
        let s = Selection::default();
        assert_eq!(s.risk_level, RiskLevel::Medium);
        assert_eq!(s.horizon, Horizon::Mid);
    }

    #[test]
    fn request_snapshots_current_selection() {
        let s = Selection {
            risk_level: RiskLevel::High,
            horizon: Horizon::Long,
        };
        let req = s.to_request();
        assert_eq!(req.risk_level, RiskLevel::High);
        assert_eq!(req.investment_horizon, Horizon::Long);
    }
}

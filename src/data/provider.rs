use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

use crate::config::{BACKEND, DEMO};
use crate::data::PredictError;
use crate::models::{Prediction, PredictionRequest, WirePrediction};

/// Abstract interface for obtaining a market prediction.
#[async_trait]
pub trait PredictionProvider: Send + Sync {
    /// Resolve one prediction for the given request parameters.
    async fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictError>;

    /// One-shot backend liveness probe, polled at startup.
    async fn check_health(&self) -> bool;
}

/// Demo-mode provider: waits the simulated latency, then serves the canned
/// response. The request content is ignored on purpose - what the
/// parameters mean for the result is the real backend's business.
pub struct DemoProvider;

#[async_trait]
impl PredictionProvider for DemoProvider {
    async fn predict(&self, _request: &PredictionRequest) -> Result<Prediction, PredictError> {
        tokio::time::sleep(DEMO.simulated_latency).await;
        Ok(Prediction::demo())
    }

    async fn check_health(&self) -> bool {
        true
    }
}

/// Live provider speaking the POST /predict + GET /health contract.
pub struct HttpProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl HttpProvider {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(BACKEND.request_timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn classify(err: reqwest::Error) -> PredictError {
        if err.is_timeout() {
            PredictError::Timeout
        } else if err.is_connect() {
            PredictError::Unreachable
        } else {
            PredictError::Unknown(err.to_string())
        }
    }
}

#[async_trait]
impl PredictionProvider for HttpProvider {
    async fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictError> {
        let url = format!("{}{}", self.base_url, BACKEND.predict_path);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            return Err(PredictError::server(status.as_u16(), message));
        }

        let wire: WirePrediction = response.json().await.map_err(|err| {
            log::warn!("Prediction response was not valid JSON: {err}");
            PredictError::InvalidShape
        })?;
        wire.normalize()
    }

    async fn check_health(&self) -> bool {
        let url = format!("{}{}", self.base_url, BACKEND.health_path);
        match self.client.get(&url).send().await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Direction, Horizon, RiskLevel};

    #[tokio::test(start_paused = true)]
    async fn demo_provider_serves_the_canned_prediction() {
        let provider = DemoProvider;
        let request = PredictionRequest::new(RiskLevel::Medium, Horizon::Mid);

        let prediction = provider.predict(&request).await.unwrap();
        assert_eq!(prediction.direction, Direction::Up);
        assert_eq!(prediction.probability_up, 0.78);
        assert_eq!(
            prediction.sectors,
            vec!["Technology", "Energy", "Healthcare"]
        );
        assert_eq!(prediction.companies[0], "AAPL");
    }

    #[tokio::test(start_paused = true)]
    async fn demo_provider_ignores_request_parameters() {
        let provider = DemoProvider;
        let a = provider
            .predict(&PredictionRequest::new(RiskLevel::Low, Horizon::Short))
            .await
            .unwrap();
        let b = provider
            .predict(&PredictionRequest::new(RiskLevel::High, Horizon::Long))
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn demo_provider_is_always_healthy() {
        assert!(DemoProvider.check_health().await);
    }

    #[tokio::test]
    async fn http_provider_reports_unreachable_backend_as_unhealthy() {
        // Port 9 (discard) is not serving HTTP on loopback.
        let provider = HttpProvider::new("http://127.0.0.1:9/").unwrap();
        assert!(!provider.check_health().await);
    }
}

use std::sync::{
    Arc,
    mpsc::{self, Receiver, Sender},
};
use std::thread;

use chrono::{DateTime, Utc};
use eframe::egui::Context;
use tokio::runtime::Runtime;

use crate::data::{PredictError, PredictionProvider};
use crate::models::{Prediction, PredictionRequest};

/// Lifecycle of one prediction fetch. Exactly one variant holds at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(Prediction),
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

/// Backend liveness as shown in the header badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Unknown,
    Healthy,
    Unhealthy,
}

enum ControllerEvent {
    Health(bool),
    Settled {
        seq: u64,
        result: Result<Prediction, PredictError>,
    },
}

/// Owns the fetch lifecycle: spawns provider calls onto a worker thread and
/// folds their resolutions back into `FetchState`. All mutation happens
/// here, on the UI thread, in response to user actions and channel events.
pub struct DashboardController {
    provider: Arc<dyn PredictionProvider>,
    state: FetchState,
    /// Most recent successful result; survives later errors so the panels
    /// can keep stale data visible.
    last_result: Option<Prediction>,
    last_updated: Option<DateTime<Utc>>,
    health: HealthStatus,
    /// Sequence number of the request currently in flight (or the last one
    /// started). Resolutions carrying an older number are discarded, so a
    /// superseded response can never overwrite a newer one.
    seq: u64,
    event_tx: Sender<ControllerEvent>,
    event_rx: Receiver<ControllerEvent>,
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new(Arc::new(crate::data::DemoProvider))
    }
}

impl DashboardController {
    pub fn new(provider: Arc<dyn PredictionProvider>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        Self {
            provider,
            state: FetchState::default(),
            last_result: None,
            last_updated: None,
            health: HealthStatus::default(),
            seq: 0,
            event_tx,
            event_rx,
        }
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn health(&self) -> HealthStatus {
        self.health
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    /// The prediction panels should currently render: the live success
    /// payload, or the retained previous result while loading / after an
    /// error.
    pub fn visible_prediction(&self) -> Option<&Prediction> {
        match &self.state {
            FetchState::Success(prediction) => Some(prediction),
            _ => self.last_result.as_ref(),
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Clear a shown error without touching retained results.
    pub fn dismiss_error(&mut self) {
        if matches!(self.state, FetchState::Error(_)) {
            self.state = FetchState::Idle;
        }
    }

    /// Probe backend health once; the result lands via the event channel.
    pub fn check_health(&self, ctx: &Context) {
        let provider = Arc::clone(&self.provider);
        let tx = self.event_tx.clone();
        let ctx = ctx.clone();
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            let healthy = rt.block_on(provider.check_health());
            let _ = tx.send(ControllerEvent::Health(healthy));
            ctx.request_repaint();
        });
    }

    /// Start a fetch for the given parameters. Synchronously transitions to
    /// `Loading` and clears any prior error. Returns false (and does
    /// nothing) when a request is already in flight - the UI also disables
    /// the trigger, but the state machine does not rely on that.
    pub fn request_prediction(&mut self, request: PredictionRequest, ctx: &Context) -> bool {
        if self.state.is_loading() {
            log::warn!("Prediction request ignored: a request is already in flight");
            return false;
        }

        self.seq += 1;
        self.state = FetchState::Loading;
        log::info!(
            "Requesting prediction #{} ({:?} / {:?})",
            self.seq,
            request.risk_level,
            request.investment_horizon
        );

        let provider = Arc::clone(&self.provider);
        let tx = self.event_tx.clone();
        let ctx = ctx.clone();
        let seq = self.seq;
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            let result = rt.block_on(provider.predict(&request));
            let _ = tx.send(ControllerEvent::Settled { seq, result });
            ctx.request_repaint();
        });
        true
    }

    /// Drain pending events. Called once per frame.
    pub fn poll(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::Health(healthy) => {
                self.health = if healthy {
                    HealthStatus::Healthy
                } else {
                    HealthStatus::Unhealthy
                };
            }
            ControllerEvent::Settled { seq, result } => {
                if seq != self.seq {
                    log::info!("Discarding stale resolution #{seq} (current is #{})", self.seq);
                    return;
                }
                match result {
                    Ok(prediction) => {
                        // Timestamp is resolution time, not request time.
                        self.last_updated = Some(Utc::now());
                        self.last_result = Some(prediction.clone());
                        self.state = FetchState::Success(prediction);
                    }
                    Err(err) => {
                        log::warn!("Prediction request #{seq} failed: {err}");
                        self.state = FetchState::Error(err.to_string());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Horizon, RiskLevel};
    use crate::data::DemoProvider;
    use async_trait::async_trait;
    use mockall::mock;
    use std::time::{Duration, Instant};

    mock! {
        Provider {}

        #[async_trait]
        impl PredictionProvider for Provider {
            async fn predict(
                &self,
                request: &PredictionRequest,
            ) -> Result<Prediction, PredictError>;
            async fn check_health(&self) -> bool;
        }
    }

    fn controller() -> DashboardController {
        DashboardController::new(Arc::new(DemoProvider))
    }

    fn request() -> PredictionRequest {
        PredictionRequest::new(RiskLevel::Medium, Horizon::Mid)
    }

    fn settle(c: &mut DashboardController, seq: u64, result: Result<Prediction, PredictError>) {
        c.handle_event(ControllerEvent::Settled { seq, result });
    }

    #[test]
    fn trigger_transitions_to_loading_synchronously() {
        let mut c = controller();
        assert_eq!(*c.state(), FetchState::Idle);

        assert!(c.request_prediction(request(), &Context::default()));
        assert!(c.state().is_loading());
    }

    #[test]
    fn second_trigger_while_loading_is_rejected() {
        let mut c = controller();
        assert!(c.request_prediction(request(), &Context::default()));
        assert!(!c.request_prediction(request(), &Context::default()));
        assert_eq!(c.seq, 1);
    }

    #[test]
    fn success_stores_result_and_timestamp() {
        let mut c = controller();
        c.request_prediction(request(), &Context::default());
        assert!(c.last_updated().is_none());

        settle(&mut c, 1, Ok(Prediction::demo()));
        assert_eq!(*c.state(), FetchState::Success(Prediction::demo()));
        assert!(c.last_updated().is_some());
        assert_eq!(c.visible_prediction(), Some(&Prediction::demo()));
    }

    #[test]
    fn error_preserves_previous_success() {
        let mut c = controller();
        c.request_prediction(request(), &Context::default());
        settle(&mut c, 1, Ok(Prediction::demo()));

        c.request_prediction(request(), &Context::default());
        settle(&mut c, 2, Err(PredictError::Unreachable));

        assert_eq!(c.error_message(), Some("server unreachable"));
        // Stale-but-valid data stays on screen.
        assert_eq!(c.visible_prediction(), Some(&Prediction::demo()));
        // The trigger is usable again.
        assert!(!c.state().is_loading());
    }

    #[test]
    fn new_request_clears_prior_error_but_not_prior_result() {
        let mut c = controller();
        c.request_prediction(request(), &Context::default());
        settle(&mut c, 1, Ok(Prediction::demo()));
        c.request_prediction(request(), &Context::default());
        settle(&mut c, 2, Err(PredictError::Timeout));

        c.request_prediction(request(), &Context::default());
        assert!(c.error_message().is_none());
        assert!(c.state().is_loading());
        assert_eq!(c.visible_prediction(), Some(&Prediction::demo()));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut c = controller();
        c.request_prediction(request(), &Context::default());
        // Request #1 fails but settles only after a #2 has started.
        settle(&mut c, 1, Err(PredictError::Unreachable));
        c.request_prediction(request(), &Context::default());

        settle(&mut c, 1, Ok(Prediction::demo()));
        assert!(c.state().is_loading(), "stale #1 must not overwrite #2");

        settle(&mut c, 2, Ok(Prediction::demo()));
        assert_eq!(*c.state(), FetchState::Success(Prediction::demo()));
    }

    #[test]
    fn dismissing_an_error_keeps_retained_data() {
        let mut c = controller();
        c.request_prediction(request(), &Context::default());
        settle(&mut c, 1, Ok(Prediction::demo()));
        c.request_prediction(request(), &Context::default());
        settle(&mut c, 2, Err(PredictError::Unreachable));

        c.dismiss_error();
        assert_eq!(*c.state(), FetchState::Idle);
        assert_eq!(c.visible_prediction(), Some(&Prediction::demo()));
    }

    #[test]
    fn health_events_update_the_badge_state() {
        let mut c = controller();
        assert_eq!(c.health(), HealthStatus::Unknown);
        c.handle_event(ControllerEvent::Health(true));
        assert_eq!(c.health(), HealthStatus::Healthy);
        c.handle_event(ControllerEvent::Health(false));
        assert_eq!(c.health(), HealthStatus::Unhealthy);
    }

    #[test]
    fn failing_provider_surfaces_classified_error_end_to_end() {
        let mut provider = MockProvider::new();
        provider
            .expect_predict()
            .returning(|_| Err(PredictError::Unreachable));

        let mut c = DashboardController::new(Arc::new(provider));
        c.request_prediction(request(), &Context::default());

        let deadline = Instant::now() + Duration::from_secs(5);
        while c.state().is_loading() && Instant::now() < deadline {
            c.poll();
            thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(c.error_message(), Some("server unreachable"));
    }
}

//! Configuration module for the dashboard.

mod backend;
mod demo;
mod ticker;
mod types;

pub use backend::{BACKEND, BackendConfig};
pub use demo::{DEMO, DemoConfig};
pub use ticker::TICKER;
pub use types::{Confidence, Direction, Horizon, RiskLevel};

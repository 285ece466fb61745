mod error;
mod provider;

pub use error::PredictError;
pub use provider::{DemoProvider, HttpProvider, PredictionProvider};

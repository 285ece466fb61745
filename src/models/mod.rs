mod prediction;

pub use prediction::{MAX_DISPLAY_COMPANIES, Prediction, PredictionRequest, WirePrediction};

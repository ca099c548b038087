//! Prediction pipeline: fetch → indicators → scale → forecast → explain

pub mod explanation;
pub mod orchestrator;
pub mod scaler;

pub use explanation::explain;
pub use orchestrator::PredictionOrchestrator;
pub use scaler::MinMaxScaler;

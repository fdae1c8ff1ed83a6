/// Batcher
pub mod batcher;

/// The prediction service
pub mod predictor;

pub use batcher::{Batcher, Infer};
pub use predictor::{Prediction, Predictor};

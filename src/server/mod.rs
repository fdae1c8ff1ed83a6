/// Request handlers
pub mod handlers;

/// Page rendering
pub mod pages;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use burn::tensor::backend::Backend;
use derive_new::new;

use crate::pipelines::sentiment::Predictor;

pub use handlers::HandlerError;
pub use pages::Pages;

/// Shared immutable application state
///
/// Built once at startup and handed to every request by reference. The model,
/// tokenizer, and parsed templates are never mutated after construction.
#[derive(new)]
pub struct AppState<B: Backend> {
    /// The prediction service
    pub predictor: Predictor<B>,

    /// Parsed page templates
    pub pages: Pages,
}

/// Build the application router over the shared state
pub fn router<B: Backend>(state: Arc<AppState<B>>) -> Router {
    Router::new()
        .route("/", get(handlers::index::<B>))
        .route("/predict", post(handlers::predict::<B>))
        .with_state(state)
}

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use burn::tensor::backend::Backend;
use serde::Deserialize;

use super::AppState;

/// Form payload for the predict endpoint
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    /// The raw review text
    pub rawtext: String,
}

/// Errors surfaced by the request handlers
#[derive(Debug, thiserror::Error)]
pub enum HandlerError {
    /// The page template failed to render
    #[error("unable to render page: {0}")]
    Render(#[from] liquid::Error),

    /// Tokenization or inference failed
    #[error("unable to predict: {0}")]
    Predict(#[from] anyhow::Error),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// Render the review input form
pub async fn index<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
) -> Result<Html<String>, HandlerError> {
    Ok(Html(state.pages.index()?))
}

/// Predict the sentiment class for the submitted review
pub async fn predict<B: Backend>(
    State(state): State<Arc<AppState<B>>>,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>, HandlerError> {
    log::debug!("received review: {}", form.rawtext);

    let prediction = state.predictor.predict(&form.rawtext)?;

    let page = state
        .pages
        .prediction(prediction.class, prediction.label.as_deref().unwrap_or(""))?;

    Ok(Html(page))
}

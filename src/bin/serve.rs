//! HTTP server rendering sentiment predictions for submitted reviews

use std::{env, sync::Arc};

use anyhow::Result;
use burn::backend::{ndarray::NdArrayDevice, NdArray};
use sentiment_serve::{
    pipelines::sentiment::Predictor,
    server::{self, AppState, Pages},
};
use tokio::net::TcpListener;

/// Directory holding the model topology, weights, and tokenizer artifacts
static ARTIFACT_DIR: &str = "models";

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    let device = NdArrayDevice::default();

    let predictor = Predictor::<NdArray>::load(ARTIFACT_DIR, device)?;
    let pages = Pages::new()?;

    let state = Arc::new(AppState::new(predictor, pages));

    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(5000);

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;

    log::info!("Listening on port {port}");

    axum::serve(listener, server::router(state)).await?;

    Ok(())
}

//! Handler-level tests for the HTTP surface

mod common;

use std::sync::Arc;

use axum::{extract::State, Form};
use burn::backend::{ndarray::NdArrayDevice, NdArray};
use sentiment_serve::{
    pipelines::sentiment::Predictor,
    server::{
        handlers::{self, PredictForm},
        AppState, Pages,
    },
};

fn state() -> Arc<AppState<NdArray>> {
    let dir = common::write_artifacts();

    let predictor = Predictor::load(
        dir.path().to_str().expect("utf-8 path"),
        NdArrayDevice::default(),
    )
    .expect("artifacts load");

    Arc::new(AppState::new(predictor, Pages::new().expect("template parses")))
}

#[tokio::test]
async fn index_renders_the_form_without_a_prediction() {
    let page = handlers::index(State(state())).await.expect("handler succeeds");

    assert!(page.0.contains("name=\"rawtext\""));
    assert!(page.0.contains("action=\"/predict\""));
    assert!(!page.0.contains("Predicted class"));
}

#[tokio::test]
async fn predict_renders_a_class_index() {
    let form = Form(PredictForm {
        rawtext: "good movie".to_string(),
    });

    let page = handlers::predict(State(state()), form)
        .await
        .expect("handler succeeds");

    assert!(page.0.contains("Predicted class"));
}

#[tokio::test]
async fn predict_handles_markup_and_punctuation() {
    let form = Form(PredictForm {
        rawtext: "<b>Terrible</b> movie, 0/10!".to_string(),
    });

    let page = handlers::predict(State(state()), form)
        .await
        .expect("handler succeeds");

    assert!(page.0.contains("Predicted class"));
}

use std::fs;

use burn::{
    backend::{ndarray::NdArrayDevice, NdArray},
    config::Config as _,
    module::Module,
    record::{CompactRecorder, Recorder},
};
use sentiment_serve::models::rnn::{Config, RnnConfig};
use tempfile::TempDir;

/// A fitted word-level tokenizer covering the test vocabulary
static TOKENIZER_JSON: &str = r#"{
  "version": "1.0",
  "truncation": null,
  "padding": null,
  "added_tokens": [],
  "normalizer": null,
  "pre_tokenizer": { "type": "WhitespaceSplit" },
  "post_processor": null,
  "decoder": null,
  "model": {
    "type": "WordLevel",
    "vocab": {
      "[UNK]": 1,
      "good": 2,
      "movie": 3,
      "bad": 4,
      "terrible": 5
    },
    "unk_token": "[UNK]"
  }
}"#;

/// Write a complete artifact set (config, weights, tokenizer) into a temp dir
pub fn write_artifacts() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir is created");

    let config = Config::new(
        RnnConfig::new().with_embedding_size(8).with_hidden_size(4),
        [(0, "negative".to_string()), (1, "positive".to_string())].into(),
    );

    let device = NdArrayDevice::default();
    let model = config.init::<NdArray>(&device);

    CompactRecorder::new()
        .record(model.into_record(), dir.path().join("model"))
        .expect("weights are recorded");

    config
        .save(dir.path().join("config.json"))
        .expect("config is saved");

    fs::write(dir.path().join("tokenizer.json"), TOKENIZER_JSON).expect("tokenizer is written");

    dir
}

use burn::{
    config::Config as _,
    module::Module,
    record::{CompactRecorder, Recorder},
    tensor::backend::Backend,
};

use super::{config::Config, model::Model};

/// Reconstruct an inference-ready model from the artifact directory
///
/// Reads `config.json` for the topology and class map, then populates the
/// module graph with the weights record. Both files are startup-time hard
/// dependencies; a missing or mismatched artifact is a fatal error.
pub fn load<B: Backend>(artifact_dir: &str, device: &B::Device) -> anyhow::Result<(Model<B>, Config)> {
    let config = Config::load(format!("{artifact_dir}/config.json").as_str())
        .map_err(|e| anyhow!("Unable to load config file: {}", e))?;

    let record = CompactRecorder::new()
        .load(format!("{artifact_dir}/model").into(), device)
        .map_err(|e| anyhow!("Unable to load trained model weights: {}", e))?;

    let model = config.init(device).load_record(record);

    println!("Loaded model from {artifact_dir}");

    Ok((model, config))
}

use std::collections::HashMap;

use burn::tensor::backend::Backend;
use derive_new::new;
use tokenizers::Tokenizer;

use crate::{
    models::rnn::{loader, Model},
    utils::tensors::class_indexes,
};

use super::Batcher;

/// A single class prediction
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Prediction {
    /// Index of the highest-scoring output class
    pub class: usize,

    /// The class name label, when the class map knows the index
    pub label: Option<String>,
}

/// Immutable prediction service holding the loaded model and tokenizer
///
/// Constructed once at startup and shared by reference across requests.
/// Nothing mutates it afterwards, so identical input always yields the
/// identical prediction.
pub struct Predictor<B: Backend> {
    /// The loaded model
    model: Model<B>,

    /// Batcher turning raw text into model input
    batcher: Batcher<B>,

    /// A map from class ids to class name labels
    id2label: HashMap<usize, String>,
}

impl<B: Backend> Predictor<B> {
    /// Load the model, class map, and fitted tokenizer from the artifact directory
    pub fn load(artifact_dir: &str, device: B::Device) -> anyhow::Result<Self> {
        let (model, config) = loader::load(artifact_dir, &device)?;

        let tokenizer = Tokenizer::from_file(format!("{artifact_dir}/tokenizer.json"))
            .map_err(|e| anyhow!("Unable to load tokenizer: {}", e))?;

        let batcher = Batcher::new(tokenizer, &config, device);

        Ok(Self {
            model,
            batcher,
            id2label: config.id2label,
        })
    }

    /// Run one forward pass over a single review and take the argmax class
    pub fn predict(&self, text: &str) -> anyhow::Result<Prediction> {
        let item = self.batcher.batch(vec![text.to_string()])?;

        log::debug!("encoded {:?} into {:?}", text, item.tokens.dims());

        let scores = self.model.infer(item);

        let class = class_indexes(scores)
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Model returned an empty prediction batch"))?;

        let label = self.id2label.get(&class).cloned();

        log::debug!("predicted class {class} ({label:?})");

        Ok(Prediction::new(class, label))
    }
}

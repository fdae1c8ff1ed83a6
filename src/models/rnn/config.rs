use std::collections::HashMap;

use burn::{
    nn::{EmbeddingConfig, LinearConfig, LstmConfig},
    tensor::backend::Backend,
};

use super::model::Model;

/// The recurrent network topology
#[derive(burn::config::Config)]
pub struct RnnConfig {
    /// Vocabulary size covered by the embedding table, padding included
    #[config(default = 2000)]
    pub vocab_size: usize,

    /// Dimension of the token embedding
    #[config(default = 128)]
    pub embedding_size: usize,

    /// The recurrent hidden state size
    #[config(default = 196)]
    pub hidden_size: usize,

    /// The padding token ID
    #[config(default = 0)]
    pub pad_token_id: usize,

    /// Fixed input sequence length
    #[config(default = 28)]
    pub max_seq_len: usize,
}

/// The Model Configuration
#[derive(burn::config::Config)]
pub struct Config {
    /// The network topology
    pub model: RnnConfig,

    /// A map from class ids to class name labels
    pub id2label: HashMap<usize, String>,
}

impl Config {
    /// Initializes the model with default weights
    pub fn init<B: Backend>(&self, device: &B::Device) -> Model<B> {
        let embedding =
            EmbeddingConfig::new(self.model.vocab_size, self.model.embedding_size).init(device);

        let lstm =
            LstmConfig::new(self.model.embedding_size, self.model.hidden_size, true).init(device);

        let n_classes = self.id2label.len();

        let output = LinearConfig::new(self.model.hidden_size, n_classes).init(device);

        Model {
            embedding,
            lstm,
            output,
            hidden_size: self.model.hidden_size,
            n_classes,
        }
    }
}

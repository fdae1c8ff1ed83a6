use burn::tensor::{backend::Backend, Int, Tensor};
use derive_new::new;
use tokenizers::Tokenizer;

use crate::{
    models::rnn::Config,
    utils::{tensors::pad_left_to, text},
};

/// The token the tokenizer artifact uses for out-of-vocabulary words
static UNK_TOKEN: &str = "[UNK]";

/// An inference batch of tokenized reviews
#[derive(Debug, Clone, new)]
pub struct Infer<B: Backend> {
    /// Tokenized text as 2D tensor: [batch_size, max_seq_length]
    pub tokens: Tensor<B, 2, Int>,
}

/// Struct for batching reviews for inference
#[derive(Clone)]
pub struct Batcher<B: Backend> {
    /// Tokenizer for converting text to token IDs
    tokenizer: Tokenizer,

    /// Fixed sequence length fed to the model
    max_seq_length: usize,

    /// ID of the padding token
    pad_token_id: usize,

    /// ID of the UNK token, dropped from encoded sequences
    unk_token_id: usize,

    /// Token IDs at or above this cap are dropped
    vocab_cap: usize,

    /// Device on which to perform computation
    device: B::Device,
}

impl<B: Backend> Batcher<B> {
    /// Creates a new batcher
    pub fn new(tokenizer: Tokenizer, config: &Config, device: B::Device) -> Self {
        let unk_token_id = tokenizer
            .token_to_id(UNK_TOKEN)
            .map(|id| id as usize)
            .unwrap_or(config.model.pad_token_id + 1);

        Self {
            tokenizer,
            max_seq_length: config.model.max_seq_len,
            pad_token_id: config.model.pad_token_id,
            unk_token_id,
            vocab_cap: config.model.vocab_size,
            device,
        }
    }

    /// Collects a vector of reviews into an inference batch
    ///
    /// Reviews are normalized, encoded against the fitted vocabulary, and
    /// left-padded to the fixed sequence length. Out-of-vocabulary words and
    /// IDs beyond the vocabulary cap are dropped, so a review with no known
    /// words becomes an all-padding row rather than an error.
    pub fn batch(&self, items: Vec<String>) -> anyhow::Result<Infer<B>> {
        let mut token_ids_list = Vec::with_capacity(items.len());

        for input in items {
            let cleaned = text::normalize(&input);

            let encoding = self
                .tokenizer
                .encode(cleaned, false)
                .map_err(|e| anyhow!("Unable to encode text: {}", e))?;

            let token_ids: Vec<_> = encoding
                .get_ids()
                .iter()
                .map(|t| *t as usize)
                .filter(|id| *id != self.unk_token_id && *id < self.vocab_cap)
                .collect();

            token_ids_list.push(token_ids);
        }

        Ok(Infer::new(pad_left_to(
            self.pad_token_id,
            token_ids_list,
            self.max_seq_length,
            &self.device,
        )))
    }
}

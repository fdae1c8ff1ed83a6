use burn::{
    module::Module,
    nn::{Embedding, Linear, Lstm},
    tensor::{activation::softmax, backend::Backend, Tensor},
};
use derive_new::new;

use crate::pipelines::sentiment::batcher::Infer;

/// Recurrent network for sentiment classification
#[derive(Module, Debug, new)]
pub struct Model<B: Backend> {
    /// Token embedding table
    pub embedding: Embedding<B>,

    /// Recurrent layer consuming the embedded sequence
    pub lstm: Lstm<B>,

    /// Linear layer projecting the final hidden state onto the classes
    pub output: Linear<B>,

    /// The recurrent hidden state size
    pub hidden_size: usize,

    /// Total number of classes
    pub n_classes: usize,
}

/// Define model behavior
impl<B: Backend> Model<B> {
    /// Defines forward pass for inference
    pub fn infer(&self, input: Infer<B>) -> Tensor<B, 2> {
        let [batch_size, seq_length] = input.tokens.dims();

        let embedded = self.embedding.forward(input.tokens);

        let (_, hidden) = self.lstm.forward(embedded, None);

        // The final hidden state summarizes the whole sequence
        let last = hidden
            .slice([0..batch_size, seq_length - 1..seq_length])
            .reshape([batch_size, self.hidden_size]);

        softmax(self.output.forward(last), 1)
    }
}

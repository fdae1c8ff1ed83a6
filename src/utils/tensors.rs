use burn::tensor::{backend::Backend, Data, ElementConversion, Int, Shape, Tensor};

/// Pad token sequences on the left to exactly `seq_length` positions
///
/// Sequences longer than `seq_length` keep their trailing tokens. Every row of
/// the returned tensor has exactly `seq_length` positions.
pub fn pad_left_to<B: Backend>(
    pad_token: usize,
    tokens_list: Vec<Vec<usize>>,
    seq_length: usize,
    device: &B::Device,
) -> Tensor<B, 2, Int> {
    let batch_size = tokens_list.len();

    let mut tensor = Tensor::zeros([batch_size, seq_length], device);
    tensor = tensor.add_scalar(pad_token as i64);

    for (index, tokens) in tokens_list.into_iter().enumerate() {
        let skip = tokens.len().saturating_sub(seq_length);
        let tail: Vec<i64> = tokens.into_iter().skip(skip).map(|e| e as i64).collect();

        if tail.is_empty() {
            continue;
        }

        let start = seq_length - tail.len();
        let len = tail.len();

        tensor = tensor.slice_assign(
            [index..index + 1, start..seq_length],
            Tensor::from_data(
                Data::new(
                    tail.into_iter().map(|e| e.elem()).collect(),
                    Shape::new([1, len]),
                ),
                device,
            ),
        );
    }

    tensor
}

/// Convert a batch of class scores into the index of each row's maximum
pub fn class_indexes<B: Backend>(predictions: Tensor<B, 2>) -> Vec<usize> {
    predictions
        .argmax(1)
        .into_data()
        .convert::<i64>()
        .value
        .into_iter()
        .map(|index| index as usize)
        .collect()
}

//! # Encode / Reconstruct
//!
//! Any transform that can map its output back to its input space implements
//! [`AutoEncoder`]; [`reconstruct`] composes the two directions. Comparing a
//! reconstruction with its input measures what a compressive transform loses.

use crate::{
    errors::UbResult,
    sequences::{PaddedBatch, PaddedSequence},
    types::TokenType,
};

/// A transform with an (approximate) inverse.
///
/// `In` is the input type; it may be unsized, such as `[S]`.
pub trait AutoEncoder<In: ?Sized> {
    /// The encoded representation.
    type Encoded;

    /// The decoded representation.
    type Decoded;

    /// Encode an input.
    fn encode(
        &self,
        input: &In,
    ) -> UbResult<Self::Encoded>;

    /// Decode an encoded representation.
    fn decode(
        &self,
        encoded: &Self::Encoded,
    ) -> UbResult<Self::Decoded>;
}

/// Encode `input`, then decode the result.
pub fn reconstruct<In, E>(
    encoder: &E,
    input: &In,
) -> UbResult<E::Decoded>
where
    In: ?Sized,
    E: AutoEncoder<In> + ?Sized,
{
    let encoded = encoder.encode(input)?;
    encoder.decode(&encoded)
}

/// Documents encode to a [`PaddedBatch`]; batches decode to the unpadded
/// terms of each document, in input order.
impl<T, S> AutoEncoder<[S]> for PaddedSequence<T>
where
    T: TokenType,
    S: AsRef<str>,
{
    type Encoded = PaddedBatch<T>;
    type Decoded = Vec<Vec<String>>;

    fn encode(
        &self,
        input: &[S],
    ) -> UbResult<Self::Encoded> {
        self.transform(input)
    }

    fn decode(
        &self,
        encoded: &Self::Encoded,
    ) -> UbResult<Self::Decoded> {
        let mut decoded = vec![Vec::new(); encoded.batch_size()];
        for (row, &src) in encoded.order().iter().enumerate() {
            decoded[src] = self
                .inverse_transform([encoded.sequence(row)])?
                .pop()
                .unwrap_or_default();
        }
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequences::PaddedSequenceOptions;

    #[test]
    fn test_reconstruct_sequences() {
        let mut sequencer = PaddedSequenceOptions::default()
            .with_sort(true)
            .build::<u32>()
            .unwrap();
        sequencer.fit(&["The cat sat", "on the mat"]).unwrap();

        let docs = ["the dog", "a cat sat on the mat", ""];
        let decoded = reconstruct(&sequencer, &docs[..]).unwrap();
        assert_eq!(
            decoded,
            vec![
                vec!["the", "<UNK>"],
                vec!["<UNK>", "cat", "sat", "on", "the", "mat"],
                vec!["<UNK>"],
            ]
        );
    }

    #[test]
    fn test_trait_object() {
        let mut sequencer = PaddedSequenceOptions::default().build::<u16>().unwrap();
        sequencer.fit(&["x y"]).unwrap();

        let encoder: &dyn AutoEncoder<
            [&str],
            Encoded = PaddedBatch<u16>,
            Decoded = Vec<Vec<String>>,
        > = &sequencer;
        let decoded = reconstruct(encoder, &["y x z"][..]).unwrap();
        assert_eq!(decoded, vec![vec!["y", "x", "<UNK>"]]);
    }
}

// src/huffman/encoder.rs

//! Symbol-to-bit-sequence encoder backed by a code dictionary.

use crate::bits::BitBuffer;
use crate::utils::error::{CodecError, Result};
use std::collections::BTreeMap;

/// Encodes symbols by dictionary lookup and concatenation.
///
/// The dictionary is built once from a tree and never mutated afterwards;
/// [`encode_symbol`](Self::encode_symbol) hands out clones so a caller can
/// never corrupt the stored code words.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder {
    dictionary: BTreeMap<i32, BitBuffer>,
}

impl HuffmanEncoder {
    /// Builds the encoder from `(symbol, code)` pairs.
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i32, BitBuffer)>,
    {
        Self {
            dictionary: entries.into_iter().collect(),
        }
    }

    /// Number of symbols in the dictionary.
    pub fn len(&self) -> usize {
        self.dictionary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionary.is_empty()
    }

    /// Returns a copy of the code word for one symbol.
    pub fn encode_symbol(&self, symbol: i32) -> Result<BitBuffer> {
        self.dictionary
            .get(&symbol)
            .cloned()
            .ok_or(CodecError::DictionaryMiss(symbol))
    }

    /// Encodes a whole sequence, concatenating the per-symbol code words in
    /// input order.
    pub fn encode(&self, sequence: &[i32]) -> Result<BitBuffer> {
        let mut encoded = BitBuffer::new();
        for &symbol in sequence {
            let code = self
                .dictionary
                .get(&symbol)
                .ok_or(CodecError::DictionaryMiss(symbol))?;
            encoded.extend_bits(code.iter());
        }
        Ok(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::HuffmanTree;

    fn sample_tree() -> HuffmanTree {
        HuffmanTree::from_entries(&[(1, 0), (1, 2), (2, 5)]).expect("tree")
    }

    #[test]
    fn test_encode_symbol_returns_clone() {
        let encoder = sample_tree().encoder();
        let mut code = encoder.encode_symbol(5).unwrap();
        code.push(1);
        // The stored entry is unaffected by mutation of the returned copy.
        assert_eq!(encoder.encode_symbol(5).unwrap().len(), 1);
    }

    #[test]
    fn test_encode_concatenates_in_input_order() {
        let encoder = sample_tree().encoder();
        // 5 -> "1", 2 -> "00", 0 -> "01"
        let encoded = encoder.encode(&[5, 2, 0]).unwrap();
        assert_eq!(encoded.len(), 5);
        assert_eq!(encoded.as_bytes(), &[0b1000_1000]);
    }

    #[test]
    fn test_bit_count_matches_sum_of_code_lengths() {
        let encoder = sample_tree().encoder();
        let sequence = [5, 5, 0, 2, 5, 0];
        let encoded = encoder.encode(&sequence).unwrap();
        let expected: usize = sequence
            .iter()
            .map(|&s| encoder.encode_symbol(s).unwrap().len())
            .sum();
        assert_eq!(encoded.len(), expected);
    }

    #[test]
    fn test_unknown_symbol_is_a_dictionary_miss() {
        let encoder = sample_tree().encoder();
        assert!(matches!(
            encoder.encode_symbol(7),
            Err(CodecError::DictionaryMiss(7))
        ));
        assert!(matches!(
            encoder.encode(&[5, 7]),
            Err(CodecError::DictionaryMiss(7))
        ));
    }

    #[test]
    fn test_empty_sequence_encodes_to_empty_buffer() {
        let encoder = sample_tree().encoder();
        let encoded = encoder.encode(&[]).unwrap();
        assert!(encoded.is_empty());
    }
}

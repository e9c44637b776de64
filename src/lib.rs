//! A Rust library for compressing mono PCM audio into a statically
//! decodable form for flash-constrained firmware.
//!
//! The pipeline delta-encodes the sample stream, builds a Huffman tree
//! from the delta histogram, and produces two artifacts: a flattened
//! offset-jump decode table that a microcontroller walks directly out of
//! read-only memory, and the packed encoded bit stream.
//!
//! # Quick Start
//!
//! ```ignore
//! use pcm_encoder::{Endianness, PcmEncoder, SampleFormat};
//!
//! let format = SampleFormat {
//!     sample_rate: 8_000,
//!     bit_depth: 8,
//!     signed: false,
//!     endianness: Endianness::Little,
//!     channels: 1,
//! };
//!
//! // `samples` comes from an audio container reader.
//! let encoded = PcmEncoder::new(format, samples)?.encode()?;
//! assert!(encoded.self_check);
//!
//! // `encoded.table` and `encoded.payload` are what the source emitter
//! // writes into the firmware image.
//! println!("table: {} x {}-bit", encoded.table.len(), encoded.table.element_bits());
//! println!("payload: {} bits", encoded.payload.bit_length);
//! ```
//!
//! The whole input is buffered before the tree is built; this is a
//! one-shot encoder, not a streaming one.

// Core modules
pub mod bits;
pub mod codec;
pub mod huffman;
pub mod sample;
pub mod utils;

// Public pipeline API
pub use codec::{DecodeTable, EncodedAudio, Payload, PcmEncoder};

// Building blocks (for custom encoding workflows)
pub use bits::BitBuffer;
pub use huffman::{HuffmanDecoder, HuffmanEncoder, HuffmanTree, Node};
pub use sample::{Endianness, Histogram, SampleFormat};

// Error types
pub use utils::error::{CodecError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_api_round_trip() {
        let sequence = [3, 4, 5, 3, 0, 2, 9, 8, 3, 10, 3, 7, 2, 5, 6];
        let histogram = Histogram::from_sequence(&sequence);
        let tree = HuffmanTree::from_histogram(&histogram).unwrap();
        let encoded = tree.encoder().encode(&sequence).unwrap();
        let decoded = tree.decoder().decode_all(&encoded).unwrap();
        assert_eq!(decoded, sequence);
    }

    #[test]
    fn test_public_api_pipeline() {
        let format = SampleFormat {
            sample_rate: 8_000,
            bit_depth: 8,
            signed: true,
            endianness: Endianness::Little,
            channels: 1,
        };
        let encoded = PcmEncoder::new(format, vec![0x00, 0x01, 0xff, 0x02])
            .unwrap()
            .encode()
            .unwrap();
        assert!(encoded.self_check);
        assert_eq!(encoded.sample_count, 4);
    }
}

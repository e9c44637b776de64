// src/codec/encoder.rs

//! The whole-buffer encoding pipeline: sample transform, histogram, code
//! tree, bit stream, self-check.

use super::artifacts::{DecodeTable, EncodedAudio, Payload};
use crate::huffman::HuffmanTree;
use crate::sample::{self, Histogram, SampleFormat};
use crate::utils::error::{CodecError, Result};
use log::{debug, info, warn};

/// One-shot encoder for a complete, in-memory sample buffer.
///
/// Every stage fully consumes its input before the next starts; the whole
/// buffer has to be seen before a histogram, and hence a tree, can exist.
/// There is no retry and no partial output: encoding either completes or
/// fails deterministically on malformed input.
pub struct PcmEncoder {
    format: SampleFormat,
    bytes: Vec<u8>,
}

impl PcmEncoder {
    /// Validates the format up front and takes ownership of the raw byte
    /// buffer handed over by the container reader.
    pub fn new(format: SampleFormat, bytes: Vec<u8>) -> Result<Self> {
        format.validate()?;
        Ok(Self { format, bytes })
    }

    pub fn format(&self) -> &SampleFormat {
        &self.format
    }

    /// Runs the full pipeline and returns the persisted artifacts.
    pub fn encode(&self) -> Result<EncodedAudio> {
        info!("encoding {} byte(s) of {}", self.bytes.len(), self.format);

        let deltas = sample::transform(&self.format, &self.bytes)?;
        let histogram = Histogram::from_sequence(&deltas);
        if histogram.is_empty() {
            return Err(CodecError::InvalidArg(
                "input stream contains no samples".to_string(),
            ));
        }
        debug!(
            "{} delta value(s), {} distinct symbol(s)",
            histogram.total(),
            histogram.distinct()
        );

        let tree = HuffmanTree::from_histogram(&histogram)?;
        let encoded = tree.encoder().encode(&deltas)?;
        let decoder = tree.decoder();

        let original_bits = deltas.len() as u64 * self.format.bit_depth as u64;
        info!(
            "encoded {} bit(s) into {} ({:.2}% of original), decode table {} word(s)",
            original_bits,
            encoded.len(),
            encoded.len() as f64 / original_bits as f64 * 100.0,
            decoder.len()
        );

        // Diagnostic round trip of the freshly produced stream against the
        // delta sequence it came from.
        let self_check = match decoder.decode_all(&encoded) {
            Ok(decoded) => decoded == deltas,
            Err(_) => false,
        };
        if self_check {
            debug!("round-trip self-check passed");
        } else {
            warn!("round-trip self-check failed, encoded data is suspect");
        }

        Ok(EncodedAudio {
            sample_rate: self.format.sample_rate,
            bit_depth: self.format.bit_depth,
            signed: self.format.signed,
            sample_count: deltas.len(),
            table: DecodeTable::new(decoder.table().to_vec()),
            payload: Payload::from_bits(&encoded),
            self_check,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::huffman::HuffmanDecoder;
    use crate::sample::Endianness;

    fn mono_8bit_unsigned() -> SampleFormat {
        SampleFormat {
            sample_rate: 8_000,
            bit_depth: 8,
            signed: false,
            endianness: Endianness::Little,
            channels: 1,
        }
    }

    #[test]
    fn test_pipeline_self_check_passes() {
        let bytes = vec![128, 130, 131, 130, 128, 126, 125, 126, 128, 130, 131, 130];
        let encoder = PcmEncoder::new(mono_8bit_unsigned(), bytes).unwrap();
        let encoded = encoder.encode().unwrap();

        assert!(encoded.self_check);
        assert_eq!(encoded.sample_count, 12);
        assert_eq!(encoded.sample_rate, 8_000);
        assert_eq!(encoded.bit_depth, 8);
        assert!(!encoded.signed);
    }

    #[test]
    fn test_artifacts_reproduce_delta_sequence() {
        let bytes = vec![10, 20, 20, 10, 0, 10, 20, 20, 10, 0];
        let encoder = PcmEncoder::new(mono_8bit_unsigned(), bytes.clone()).unwrap();
        let encoded = encoder.encode().unwrap();

        // A decoder built from nothing but the persisted artifacts must
        // reproduce the delta sequence, whose cumulative sum is the input.
        let decoder = HuffmanDecoder::new(encoded.table.entries().to_vec());
        let deltas = decoder.decode_all(&encoded.payload.to_bits().unwrap()).unwrap();
        let samples = sample::accumulate(&deltas);
        assert_eq!(
            samples,
            bytes.iter().map(|&b| b as i32).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_payload_bit_length_matches_dictionary_cost() {
        let bytes = vec![1, 2, 3, 1, 2, 1, 1, 1];
        let encoder = PcmEncoder::new(mono_8bit_unsigned(), bytes).unwrap();
        let encoded = encoder.encode().unwrap();
        assert_eq!(
            encoded.payload.bytes.len(),
            (encoded.payload.bit_length as usize).div_ceil(8)
        );
        assert!(encoded.compression_ratio() > 0.0);
    }

    #[test]
    fn test_constant_input_uses_degenerate_tree() {
        // Constant samples give the constant-zero delta after the first
        // value; two distinct symbols at most.
        let bytes = vec![7; 50];
        let encoder = PcmEncoder::new(mono_8bit_unsigned(), bytes).unwrap();
        let encoded = encoder.encode().unwrap();
        assert!(encoded.self_check);
        assert_eq!(encoded.sample_count, 50);
    }

    #[test]
    fn test_bad_format_rejected_at_construction() {
        let stereo = SampleFormat {
            channels: 2,
            ..mono_8bit_unsigned()
        };
        assert!(matches!(
            PcmEncoder::new(stereo, vec![0, 0]),
            Err(CodecError::FormatUnsupported(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        let encoder = PcmEncoder::new(mono_8bit_unsigned(), Vec::new()).unwrap();
        assert!(matches!(
            encoder.encode(),
            Err(CodecError::InvalidArg(_))
        ));
    }
}

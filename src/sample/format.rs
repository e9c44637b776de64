// src/sample/format.rs

//! The raw-stream format descriptor handed over by the audio container
//! reader, and its pre-flight validation.

use crate::utils::error::{CodecError, Result};
use std::fmt;

/// Bit depths the transform accepts.
pub const SUPPORTED_BIT_DEPTHS: [u8; 2] = [8, 16];

/// Byte order of the raw sample stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
}

impl fmt::Display for Endianness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endianness::Little => write!(f, "LE"),
            Endianness::Big => write!(f, "BE"),
        }
    }
}

/// Describes the raw PCM stream: how many bits per sample, signedness,
/// byte order, channel count and sample rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleFormat {
    pub sample_rate: u32,
    pub bit_depth: u8,
    pub signed: bool,
    pub endianness: Endianness,
    pub channels: u16,
}

impl SampleFormat {
    /// Rejects formats the pipeline cannot process. This runs before any
    /// transform touches the sample data; a bad format is never a
    /// mid-stream condition.
    pub fn validate(&self) -> Result<()> {
        if self.channels != 1 {
            return Err(CodecError::FormatUnsupported(format!(
                "mono input required, got {} channel(s)",
                self.channels
            )));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&self.bit_depth) {
            return Err(CodecError::FormatUnsupported(format!(
                "bit depth {} not supported (supported: 8, 16)",
                self.bit_depth
            )));
        }
        Ok(())
    }

    pub fn bytes_per_sample(&self) -> usize {
        (self.bit_depth / 8) as usize
    }
}

impl fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Hz, {}-bit {} {}, {} channel(s)",
            self.sample_rate,
            self.bit_depth,
            if self.signed { "signed" } else { "unsigned" },
            self.endianness,
            self.channels
        )
    }
}

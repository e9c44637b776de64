// src/codec/artifacts.rs

//! The persisted outputs of an encoding run: the flattened decode table
//! and the packed bit payload, plus the format fields a decoder needs to
//! reproduce the original delta sequence exactly. Turning these into
//! source-code text is the emission writer's job; this module only fixes
//! the byte values and widths it must emit.

use crate::bits::BitBuffer;
use crate::utils::error::Result;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

/// The flattened offset-jump decode table, destined for read-only storage
/// on the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeTable {
    entries: Vec<i32>,
}

impl DecodeTable {
    pub fn new(entries: Vec<i32>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[i32] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The narrowest signed element width (8, 16 or 32 bits) that holds
    /// every table entry, i.e. every symbol value and every jump offset.
    pub fn element_bits(&self) -> u8 {
        if self
            .entries
            .iter()
            .all(|&entry| i8::try_from(entry).is_ok())
        {
            8
        } else if self
            .entries
            .iter()
            .all(|&entry| i16::try_from(entry).is_ok())
        {
            16
        } else {
            32
        }
    }
}

/// The encoded bit stream: its exact bit count and the packed, zero-padded
/// byte storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub bit_length: u32,
    pub bytes: Vec<u8>,
}

impl Payload {
    /// Captures an encoded buffer's storage.
    pub fn from_bits(bits: &BitBuffer) -> Self {
        Self {
            bit_length: bits.len() as u32,
            bytes: bits.as_bytes().to_vec(),
        }
    }

    /// Rebuilds the bit buffer, validating byte count and padding.
    pub fn to_bits(&self) -> Result<BitBuffer> {
        BitBuffer::from_bytes(self.bytes.clone(), self.bit_length as usize)
    }

    /// Writes the payload as a little-endian bit count followed by the
    /// packed bytes.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_u32::<LittleEndian>(self.bit_length)?;
        writer.write_all(&self.bytes)?;
        Ok(())
    }

    /// Reads back a payload written by [`write_to`](Self::write_to).
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let bit_length = reader.read_u32::<LittleEndian>()?;
        let mut bytes = vec![0u8; (bit_length as usize).div_ceil(8)];
        reader.read_exact(&mut bytes)?;
        Ok(Self { bit_length, bytes })
    }
}

/// Everything the emission writer persists for one audio clip. Together
/// with the table and payload, the retained format fields let the target
/// decoder reconstruct the delta sequence and play it back.
#[derive(Debug, Clone)]
pub struct EncodedAudio {
    pub sample_rate: u32,
    pub bit_depth: u8,
    pub signed: bool,
    /// Number of samples (= delta values) that were encoded.
    pub sample_count: usize,
    pub table: DecodeTable,
    pub payload: Payload,
    /// Outcome of the round-trip self-check run right after encoding.
    pub self_check: bool,
}

impl EncodedAudio {
    /// Encoded size relative to the original stream size, in bits.
    pub fn compression_ratio(&self) -> f64 {
        let original_bits = self.sample_count as u64 * self.bit_depth as u64;
        if original_bits == 0 {
            return 0.0;
        }
        self.payload.bit_length as f64 / original_bits as f64
    }
}

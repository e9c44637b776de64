// src/huffman/decoder.rs

//! Bit-stream decoder walking the flattened offset-jump table.
//!
//! This walk is the contract an embedded decoder replicates directly out of
//! read-only memory, so its exact stepping rule must not change. Per input
//! bit: on a 1-bit, jump over the left child (by `offset + 1` slots when
//! the current slot holds a sub-table length, by 2 slots when it marks a
//! leaf). Then, wherever the walk now stands, a zero slot means the path
//! resolved to a leaf: the adjacent slot is the symbol, and the walk
//! restarts at position 0. A non-zero slot means descending one slot into
//! the sub-table before the next bit.

use crate::bits::BitBuffer;
use crate::utils::error::{CodecError, Result};

/// Decodes bit streams against a flattened decode table.
#[derive(Debug, Clone)]
pub struct HuffmanDecoder {
    table: Vec<i32>,
}

impl HuffmanDecoder {
    pub fn new(table: Vec<i32>) -> Self {
        Self { table }
    }

    /// The flattened table, as emitted into firmware.
    pub fn table(&self) -> &[i32] {
        &self.table
    }

    /// Number of table slots (words of read-only storage on the target).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Decodes a bit sequence lazily. Every call starts a fresh walk at the
    /// table root; stopping early just drops the iterator.
    ///
    /// The iterator ends when the input is exhausted at a symbol boundary.
    /// Exhaustion in the middle of a code word, or a walk that leaves the
    /// table, yields a final [`CodecError::MalformedStream`].
    pub fn decode<I>(&self, bits: I) -> Decode<'_, I::IntoIter>
    where
        I: IntoIterator<Item = u8>,
    {
        Decode {
            table: &self.table,
            bits: bits.into_iter(),
            done: false,
        }
    }

    /// Decodes a whole buffer into a symbol vector.
    pub fn decode_all(&self, bits: &BitBuffer) -> Result<Vec<i32>> {
        self.decode(bits).collect()
    }
}

/// Lazy decoding iterator; see [`HuffmanDecoder::decode`].
pub struct Decode<'a, I> {
    table: &'a [i32],
    bits: I,
    done: bool,
}

impl<I: Iterator<Item = u8>> Decode<'_, I> {
    fn slot(&self, position: usize) -> Result<i32> {
        self.table.get(position).copied().ok_or_else(|| {
            CodecError::MalformedStream(format!(
                "decode walked outside the table (position {position}, table length {})",
                self.table.len()
            ))
        })
    }

    fn next_symbol(&mut self) -> Result<Option<i32>> {
        let mut position = 0usize;
        let mut mid_symbol = false;
        loop {
            let Some(bit) = self.bits.next() else {
                if mid_symbol {
                    return Err(CodecError::MalformedStream(
                        "bit stream exhausted in the middle of a code word".to_string(),
                    ));
                }
                return Ok(None);
            };
            mid_symbol = true;
            if bit != 0 {
                let offset = self.slot(position)?;
                if offset < 0 {
                    return Err(CodecError::MalformedStream(format!(
                        "negative jump offset {offset} at table position {position}"
                    )));
                }
                position += if offset != 0 { offset as usize + 1 } else { 2 };
            }
            if self.slot(position)? == 0 {
                return Ok(Some(self.slot(position + 1)?));
            }
            position += 1;
        }
    }
}

impl<I: Iterator<Item = u8>> Iterator for Decode<'_, I> {
    type Item = Result<i32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_symbol() {
            Ok(Some(symbol)) => Some(Ok(symbol)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

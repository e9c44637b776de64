// src/sample/transform.rs

//! Stateless transforms turning a raw PCM byte stream into the delta
//! sequence that gets entropy-coded.
//!
//! The target decoder is little endian, so multi-byte words are normalized
//! to little endian first. Wider-than-8-bit samples are then constrained to
//! half of the 16-bit range so that their first differences always fit in
//! 16 bits (plus the sign), and finally delta-encoded: the narrow, heavily
//! repeated delta values are what make the code tree small and the encoded
//! stream short.

use super::format::{Endianness, SampleFormat};
use crate::utils::error::{CodecError, Result};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

// Half-range peaks for wider-than-8-bit samples.
const SIGNED_PEAK_MAX: i32 = 16_383;
const SIGNED_PEAK_MIN: i32 = -16_384;
const UNSIGNED_PEAK_MAX: i32 = 32_767;
const UNSIGNED_CENTER: i32 = 16_384;

/// Decodes the raw byte stream per the format descriptor and returns the
/// delta sequence ready for histogram construction.
pub fn transform(format: &SampleFormat, bytes: &[u8]) -> Result<Vec<i32>> {
    format.validate()?;
    let samples = match format.bit_depth {
        8 => decode_8bit(format, bytes),
        16 => decode_16bit(format, bytes)?,
        other => {
            return Err(CodecError::FormatUnsupported(format!(
                "bit depth {other} not supported (supported: 8, 16)"
            )));
        }
    };
    Ok(delta(&samples))
}

/// 8-bit samples need no range work: an 8-bit delta always fits the
/// destination width. Signed formats are reinterpreted from the raw bytes'
/// two's-complement representation.
fn decode_8bit(format: &SampleFormat, bytes: &[u8]) -> Vec<i32> {
    if format.signed {
        bytes.iter().map(|&b| (b as i8) as i32).collect()
    } else {
        bytes.iter().map(|&b| b as i32).collect()
    }
}

fn decode_16bit(format: &SampleFormat, bytes: &[u8]) -> Result<Vec<i32>> {
    if bytes.len() % 2 != 0 {
        return Err(CodecError::MalformedStream(format!(
            "16-bit stream has a trailing odd byte ({} bytes total)",
            bytes.len()
        )));
    }
    let mut words = vec![0u16; bytes.len() / 2];
    match format.endianness {
        Endianness::Little => LittleEndian::read_u16_into(bytes, &mut words),
        Endianness::Big => BigEndian::read_u16_into(bytes, &mut words),
    }
    let mut samples: Vec<i32> = if format.signed {
        words.into_iter().map(|w| (w as i16) as i32).collect()
    } else {
        words.into_iter().map(|w| w as i32).collect()
    };
    constrain_to_half_range(format, &mut samples);
    Ok(samples)
}

/// Rescales the samples into the half-range peaks when any of them falls
/// outside, scaling linearly around the center and rounding to nearest.
/// Quiet streams that already fit pass through untouched.
fn constrain_to_half_range(format: &SampleFormat, samples: &mut [i32]) {
    let (peak_min, peak_max, center, sample_range_max) = if format.signed {
        (
            SIGNED_PEAK_MIN,
            SIGNED_PEAK_MAX,
            0,
            (1i32 << (format.bit_depth - 1)) - 1,
        )
    } else {
        (
            0,
            UNSIGNED_PEAK_MAX,
            UNSIGNED_CENTER,
            (1i32 << format.bit_depth) - 1,
        )
    };
    if samples
        .iter()
        .all(|&v| (peak_min..=peak_max).contains(&v))
    {
        return;
    }
    let scale = peak_max as f64 / sample_range_max as f64;
    for value in samples.iter_mut() {
        let scaled = ((*value - center) as f64 * scale + center as f64).round() as i32;
        *value = scaled.clamp(peak_min, peak_max);
    }
}

/// First difference over the original sequence: `out[0] = in[0]`,
/// `out[i] = in[i] - in[i-1]`.
pub fn delta(values: &[i32]) -> Vec<i32> {
    let Some((&first, _)) = values.split_first() else {
        return Vec::new();
    };
    let mut deltas = Vec::with_capacity(values.len());
    deltas.push(first);
    deltas.extend(values.windows(2).map(|pair| pair[1] - pair[0]));
    deltas
}

/// Cumulative sum, the inverse of [`delta`]: feeding it a delta sequence
/// recovers the original samples exactly.
pub fn accumulate(deltas: &[i32]) -> Vec<i32> {
    let mut total = 0i32;
    deltas
        .iter()
        .map(|&d| {
            total += d;
            total
        })
        .collect()
}

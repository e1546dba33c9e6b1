//! Canonical short/long-form length encoding and decoding
//!
//! Encoding always produces the minimal DER form: one octet for values up to
//! 127, otherwise a header octet `0x80 | n` followed by `n` big-endian value
//! octets with no leading zero. Decoding accepts the looser BER forms it may
//! meet in the wild: the indefinite marker `0x80` and long forms padded with
//! leading zero octets (stripped, never re-emitted).

use crate::constants::{LENGTH_BUF_SIZE, MAX_LENGTH_OCTETS};
use crate::error::CodecError;
use crate::stream::{ByteSink, ByteSource};
use serde::{Deserialize, Serialize};

/// Outcome of decoding a BER length field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Length {
    /// A definite length: this many content octets follow
    Definite(u32),

    /// Indefinite form: content runs until a two-zero-octet marker
    Indefinite,
}

impl Length {
    /// Whether this is a definite length
    pub const fn is_definite(&self) -> bool {
        matches!(self, Length::Definite(_))
    }

    /// The declared length, or `None` for the indefinite form
    pub const fn value(&self) -> Option<u32> {
        match self {
            Length::Definite(n) => Some(*n),
            Length::Indefinite => None,
        }
    }
}

/// Minimal number of octets needed to represent `value`
///
/// Returns 0 for 0; callers only reach this on the long-form path where
/// `value > 0x7f` holds.
fn byte_precision(value: u32) -> usize {
    (32 - value.leading_zeros() as usize).div_ceil(8)
}

/// Encode `length` into its canonical octet form, returning the octet count
///
/// `output` must hold at least [`LENGTH_BUF_SIZE`] octets.
pub fn encode_length(length: u32, output: &mut [u8]) -> usize {
    if length <= 0x7f {
        output[0] = length as u8;
        return 1;
    }

    let n = byte_precision(length);
    output[0] = 0x80 | n as u8;
    for j in 0..n {
        output[1 + j] = (length >> ((n - 1 - j) * 8)) as u8;
    }
    1 + n
}

/// Encode `length` directly into `sink`, returning the octet count written
pub fn write_length<S: ByteSink>(length: u32, sink: &mut S) -> usize {
    let mut buf = [0u8; LENGTH_BUF_SIZE];
    let n = encode_length(length, &mut buf);
    debug_assert!(n <= LENGTH_BUF_SIZE);
    sink.put_slice(&buf[..n]);
    n
}

/// Decode a BER length field from `source`
///
/// Short form yields the octet value itself. Long form checks that the
/// promised value octets are actually retrievable before consuming any,
/// strips non-canonical leading zeros, and accepts at most two effective
/// value octets; anything wider fails with [`CodecError::LengthOverflow`].
/// A bare `0x80` header yields [`Length::Indefinite`] and consumes nothing
/// further; the caller must watch for the end-of-content marker.
pub fn decode_length<S: ByteSource>(source: &mut S) -> Result<Length, CodecError> {
    let b = source.get().ok_or(CodecError::Truncated {
        needed: 1,
        available: 0,
    })?;

    if b & 0x80 == 0 {
        return Ok(Length::Definite(u32::from(b)));
    }

    let mut length_octets = (b & 0x7f) as usize;
    if length_octets == 0 {
        return Ok(Length::Indefinite);
    }

    let available = source.max_retrievable();
    if available < length_octets {
        return Err(CodecError::Truncated {
            needed: length_octets,
            available,
        });
    }

    // Availability was checked above; the gets below cannot come up short.
    let mut b = source.get().ok_or(CodecError::Truncated {
        needed: length_octets,
        available: 0,
    })?;
    while b == 0 && length_octets > 1 {
        b = source.get().ok_or(CodecError::Truncated {
            needed: length_octets - 1,
            available: 0,
        })?;
        length_octets -= 1;
    }

    match length_octets {
        1 => Ok(Length::Definite(u32::from(b))),
        2 => {
            let low = source.get().ok_or(CodecError::Truncated {
                needed: 1,
                available: 0,
            })?;
            Ok(Length::Definite((u32::from(b) << 8) | u32::from(low)))
        }
        octets => {
            debug_assert!(octets > MAX_LENGTH_OCTETS);
            Err(CodecError::LengthOverflow { octets })
        }
    }
}

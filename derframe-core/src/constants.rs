//! Constants and limits for the BER/DER framing codec

/// Universal tag number for SEQUENCE
pub const SEQUENCE: u8 = 0x10;

/// Bit marking a tag as constructed (content is nested TLV elements)
pub const CONSTRUCTED: u8 = 0x20;

/// The single tag octet opening a constructed SEQUENCE
pub const SEQUENCE_CONSTRUCTED: u8 = SEQUENCE | CONSTRUCTED;

/// Largest length value this codec can decode (two length octets)
///
/// Length fields reducing to three or more value octets after zero-stripping
/// are rejected. This ceiling is a stated capacity limit of the codec, not an
/// oversight; widening it changes memory-sizing assumptions downstream.
pub const MAX_LENGTH: u32 = 0xFFFF;

/// Maximum number of value octets in a decoded length field
pub const MAX_LENGTH_OCTETS: usize = 2;

/// Scratch buffer size for an encoded length header
///
/// A 32-bit length encodes to at most 5 octets; 10 leaves a margin.
pub const LENGTH_BUF_SIZE: usize = 10;

/// End-of-content marker terminating an indefinite-length construct
pub const END_OF_CONTENT: u16 = 0x0000;

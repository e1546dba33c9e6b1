//! Error types for codec operations
//!
//! Every variant of [`CodecError`] means the same thing to a caller: the input
//! was malformed and decoding cannot continue. The variants exist for
//! diagnostics only. Out-of-range indexing into a [`SecBlock`] is a contract
//! violation and panics; it is deliberately not represented here.
//!
//! [`SecBlock`]: crate::secblock::SecBlock

/// Errors that can occur while decoding BER framing
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Tag octet did not match the expected value
    #[cfg_attr(
        feature = "std",
        error("Bad tag: expected {expected:#04x}, got {found:#04x}")
    )]
    BadTag {
        /// The tag octet the decoder required.
        expected: u8,
        /// The tag octet actually read.
        found: u8,
    },

    /// Stream ended inside a header field
    #[cfg_attr(
        feature = "std",
        error("Truncated input: needed {needed} more bytes, {available} available")
    )]
    Truncated {
        /// The number of bytes the field still required.
        needed: usize,
        /// The number of bytes the source could supply.
        available: usize,
    },

    /// Length field requires more value octets than the 16-bit ceiling allows
    #[cfg_attr(
        feature = "std",
        error("Length field of {octets} octets exceeds the 2-octet capacity")
    )]
    LengthOverflow {
        /// Effective value-octet count after leading zeros were stripped.
        octets: usize,
    },

    /// Indefinite-length frame did not close with the two-zero-octet marker
    #[cfg_attr(
        feature = "std",
        error("Bad end-of-content marker: expected 0x0000, got {found:#06x}")
    )]
    BadEndOfContent {
        /// The two octets read in place of the marker, big-endian.
        found: u16,
    },
}

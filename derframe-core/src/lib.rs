//! # Derframe Core
//!
//! A minimal BER/DER tag-length-value framing codec with an owning buffer for
//! secret byte material.
//!
//! ## Modules
//!
//! - `constants`: Tag values and codec limits
//! - `stream`: Byte source/sink contract and the in-memory `ByteQueue`
//! - `length`: Canonical short/long-form length encoding and decoding
//! - `sequence`: Scoped decode/encode of constructed SEQUENCE frames
//! - `secblock`: Securely-erasable owning buffer (`SecBlock`)

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod constants;
pub mod error;
pub mod length;
pub mod secblock;
pub mod sequence;
pub mod stream;

// Re-export commonly used types
pub use error::CodecError;
pub use length::Length;
pub use secblock::{SecBlock, SecByteBlock, SecWordBlock};
pub use sequence::{SequenceDecoder, SequenceEncoder};
pub use stream::{ByteQueue, ByteSink, ByteSource};

/// Result type alias for Derframe operations
pub type Result<T> = core::result::Result<T, CodecError>;

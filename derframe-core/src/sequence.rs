//! Scoped decode and encode of constructed SEQUENCE frames
//!
//! Both halves follow an open/close discipline. [`SequenceDecoder::open`]
//! validates the tag and length header; the caller then reads the body
//! through the decoder and must call [`SequenceDecoder::close`] to consume
//! the end-of-content marker of indefinite frames. [`SequenceEncoder::open`]
//! buffers everything written into it; [`SequenceEncoder::close`] emits
//! `tag || canonical-length || body` to the real sink in one pass, so the
//! header is always correct no matter how the body was assembled.
//!
//! Frames nest by construction order: open a child on the parent, close the
//! child before the parent. Rust destructors cannot fail, so close is an
//! explicit consuming call rather than a `Drop` impl; the types are
//! `#[must_use]` to keep a forgotten close visible.

use crate::constants::{END_OF_CONTENT, SEQUENCE_CONSTRUCTED};
use crate::error::CodecError;
use crate::length::{decode_length, write_length, Length};
use crate::stream::{ByteQueue, ByteSink, ByteSource};

#[cfg(feature = "logging")]
use tracing::debug;

/// Scoped reader for one constructed SEQUENCE frame
///
/// The declared length is exposed via [`length`](Self::length); this type
/// does not itself bound body reads against it, so a caller that needs
/// exactly-`length` consumption must count for itself.
#[must_use = "a sequence must be closed to consume its end-of-content marker"]
pub struct SequenceDecoder<'a, S: ByteSource> {
    source: &'a mut S,
    length: Length,
}

impl<'a, S: ByteSource> SequenceDecoder<'a, S> {
    /// Open a sequence: validate the tag octet and decode the length header
    pub fn open(source: &'a mut S) -> Result<Self, CodecError> {
        let tag = source.get().ok_or(CodecError::Truncated {
            needed: 1,
            available: 0,
        })?;
        if tag != SEQUENCE_CONSTRUCTED {
            return Err(CodecError::BadTag {
                expected: SEQUENCE_CONSTRUCTED,
                found: tag,
            });
        }

        let length = decode_length(source)?;

        #[cfg(feature = "logging")]
        debug!("Opened sequence with length {:?}", length);

        Ok(Self { source, length })
    }

    /// The length declared in the frame header
    pub const fn length(&self) -> Length {
        self.length
    }

    /// Close the sequence
    ///
    /// For an indefinite frame this reads the two-octet end-of-content
    /// marker and requires it to be zero; for a definite frame it reads
    /// nothing. Call after the body has been consumed.
    pub fn close(self) -> Result<(), CodecError> {
        if let Length::Indefinite = self.length {
            let marker = self.source.get_u16().ok_or(CodecError::Truncated {
                needed: 2,
                available: self.source.max_retrievable(),
            })?;
            if marker != END_OF_CONTENT {
                return Err(CodecError::BadEndOfContent { found: marker });
            }

            #[cfg(feature = "logging")]
            debug!("Consumed end-of-content marker");
        }
        Ok(())
    }
}

// Body reads go through the decoder, so nested frames open on their parent.
impl<S: ByteSource> ByteSource for SequenceDecoder<'_, S> {
    fn get(&mut self) -> Option<u8> {
        self.source.get()
    }

    fn get_u16(&mut self) -> Option<u16> {
        self.source.get_u16()
    }

    fn max_retrievable(&self) -> usize {
        self.source.max_retrievable()
    }
}

/// Scoped writer for one constructed SEQUENCE frame
///
/// Holds the whole body in memory until close; the cost of knowing the
/// length before the header octets are emitted.
#[must_use = "a sequence must be closed to emit its header and body"]
pub struct SequenceEncoder<'a, W: ByteSink> {
    sink: &'a mut W,
    queue: ByteQueue,
}

impl<'a, W: ByteSink> SequenceEncoder<'a, W> {
    /// Open a sequence: subsequent writes accumulate in an internal buffer
    pub fn open(sink: &'a mut W) -> Self {
        Self {
            sink,
            queue: ByteQueue::new(),
        }
    }

    /// Number of body octets buffered so far
    pub fn buffered_len(&self) -> usize {
        self.queue.len()
    }

    /// Close the sequence: emit tag, canonical length, and the buffered
    /// body to the real sink, returning the total octet count written
    pub fn close(self) -> usize {
        let body_len = self.queue.len();

        #[cfg(feature = "logging")]
        debug!("Closing sequence with {} body octets", body_len);

        self.sink.put(SEQUENCE_CONSTRUCTED);
        let header_len = write_length(body_len as u32, self.sink);

        let mut queue = self.queue;
        queue.transfer_to(self.sink);

        1 + header_len + body_len
    }
}

// Children, including nested encoders, write into the buffer transparently.
impl<W: ByteSink> ByteSink for SequenceEncoder<'_, W> {
    fn put(&mut self, byte: u8) {
        self.queue.put(byte);
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        self.queue.put_slice(bytes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_decode_empty_definite_sequence() {
        let mut source = ByteQueue::from_slice(&[0x30, 0x00]);
        let decoder = SequenceDecoder::open(&mut source).unwrap();

        assert_eq!(decoder.length(), Length::Definite(0));
        decoder.close().unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_decode_bad_tag() {
        let mut source = ByteQueue::from_slice(&[0x31, 0x00]);
        let result = SequenceDecoder::open(&mut source);

        assert_eq!(
            result.err(),
            Some(CodecError::BadTag {
                expected: 0x30,
                found: 0x31
            })
        );
    }

    #[test]
    fn test_decode_indefinite_sequence() {
        let mut source = ByteQueue::from_slice(&[0x30, 0x80, 0xAA, 0xBB, 0x00, 0x00]);
        let mut decoder = SequenceDecoder::open(&mut source).unwrap();

        assert_eq!(decoder.length(), Length::Indefinite);
        assert_eq!(decoder.get(), Some(0xAA));
        assert_eq!(decoder.get(), Some(0xBB));
        decoder.close().unwrap();
        assert!(source.is_empty());
    }

    #[test]
    fn test_indefinite_missing_marker_fails_at_close() {
        let mut source = ByteQueue::from_slice(&[0x30, 0x80]);
        let decoder = SequenceDecoder::open(&mut source).unwrap();

        assert!(matches!(
            decoder.close(),
            Err(CodecError::Truncated { needed: 2, .. })
        ));
    }

    #[test]
    fn test_indefinite_nonzero_marker_fails_at_close() {
        let mut source = ByteQueue::from_slice(&[0x30, 0x80, 0x00, 0x01]);
        let decoder = SequenceDecoder::open(&mut source).unwrap();

        assert_eq!(
            decoder.close(),
            Err(CodecError::BadEndOfContent { found: 0x0001 })
        );
    }

    #[test]
    fn test_encode_small_body() {
        let mut out = Vec::new();
        let mut encoder = SequenceEncoder::open(&mut out);
        encoder.put_slice(&[0x01, 0x02, 0x03]);

        let written = encoder.close();
        assert_eq!(written, 5);
        assert_eq!(out, [0x30, 0x03, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_encode_empty_body() {
        let mut out = Vec::new();
        let encoder = SequenceEncoder::open(&mut out);

        assert_eq!(encoder.close(), 2);
        assert_eq!(out, [0x30, 0x00]);
    }

    #[test]
    fn test_encode_long_form_header() {
        let mut out = Vec::new();
        let mut encoder = SequenceEncoder::open(&mut out);
        encoder.put_slice(&[0x5A; 200]);

        let written = encoder.close();
        assert_eq!(written, 1 + 2 + 200);
        assert_eq!(&out[..3], &[0x30, 0x81, 200]);
        assert_eq!(&out[3..], &[0x5A; 200]);
    }

    #[test]
    fn test_encode_nested() {
        let mut out = Vec::new();
        let mut outer = SequenceEncoder::open(&mut out);
        outer.put(0xAA);

        let mut inner = SequenceEncoder::open(&mut outer);
        inner.put_slice(&[0x01, 0x02]);
        inner.close();

        outer.close();
        assert_eq!(out, [0x30, 0x05, 0xAA, 0x30, 0x02, 0x01, 0x02]);
    }
}

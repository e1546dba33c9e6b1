//! Byte stream contract consumed by the codec
//!
//! The codec never owns the streams it frames; it reads from any
//! [`ByteSource`] and writes to any [`ByteSink`]. [`ByteQueue`] is the one
//! concrete implementation the crate ships: an in-memory FIFO used as the
//! encoder's internal buffer and as both ends of the contract in tests.

use alloc::vec::Vec;
use bytes::{Buf, BufMut, BytesMut};

/// A byte-oriented source the decoder pulls from
pub trait ByteSource {
    /// Retrieve one byte, or `None` if the source is exhausted
    fn get(&mut self) -> Option<u8>;

    /// Retrieve a big-endian 16-bit value, or `None` unless two bytes are
    /// immediately available (a short read consumes nothing)
    fn get_u16(&mut self) -> Option<u16>;

    /// Number of bytes immediately retrievable
    fn max_retrievable(&self) -> usize;
}

/// A byte-oriented sink the encoder pushes to
pub trait ByteSink {
    /// Append one byte
    fn put(&mut self, byte: u8);

    /// Append a run of bytes
    fn put_slice(&mut self, bytes: &[u8]);
}

/// In-memory FIFO byte queue implementing both sides of the stream contract
#[derive(Debug, Default, Clone)]
pub struct ByteQueue {
    buf: BytesMut,
}

impl ByteQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            buf: BytesMut::new(),
        }
    }

    /// Create a queue holding a copy of `data`
    pub fn from_slice(data: &[u8]) -> Self {
        Self {
            buf: BytesMut::from(data),
        }
    }

    /// Number of bytes currently held
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the queue holds no bytes
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// View the held bytes in retrieval order
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Drain every held byte into `sink`, in order, emptying this queue
    pub fn transfer_to<S: ByteSink>(&mut self, sink: &mut S) {
        sink.put_slice(&self.buf);
        self.buf.clear();
    }
}

impl ByteSource for ByteQueue {
    fn get(&mut self) -> Option<u8> {
        if self.buf.has_remaining() {
            Some(self.buf.get_u8())
        } else {
            None
        }
    }

    fn get_u16(&mut self) -> Option<u16> {
        if self.buf.remaining() >= 2 {
            Some(self.buf.get_u16())
        } else {
            None
        }
    }

    fn max_retrievable(&self) -> usize {
        self.buf.remaining()
    }
}

impl ByteSink for ByteQueue {
    fn put(&mut self, byte: u8) {
        self.buf.put_u8(byte);
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }
}

impl ByteSink for Vec<u8> {
    fn put(&mut self, byte: u8) {
        self.push(byte);
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

impl ByteSink for BytesMut {
    fn put(&mut self, byte: u8) {
        self.put_u8(byte);
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

//! Fuzzing placeholder for derframe-core decode paths
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_decode_length

use derframe_core::stream::{ByteQueue, ByteSource};

pub fn fuzz_decode_length(data: &[u8]) {
    use derframe_core::length::decode_length;

    // Try to decode - should never panic
    let mut source = ByteQueue::from_slice(data);
    let _ = decode_length(&mut source);
}

pub fn fuzz_open_sequence(data: &[u8]) {
    use derframe_core::sequence::SequenceDecoder;

    // Open, drain the body, close - should never panic
    let mut source = ByteQueue::from_slice(data);
    if let Ok(mut decoder) = SequenceDecoder::open(&mut source) {
        while decoder.get().is_some() {}
        let _ = decoder.close();
    }
}

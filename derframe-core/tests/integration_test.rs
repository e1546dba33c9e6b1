//! Integration tests for the complete encode → stream → decode flow

use derframe_core::{
    length::Length,
    secblock::SecByteBlock,
    sequence::{SequenceDecoder, SequenceEncoder},
    stream::{ByteQueue, ByteSink, ByteSource},
};

#[test]
fn test_round_trip_flat_sequence() {
    // Step 1: Encode a sequence holding raw content octets
    let mut wire = Vec::new();
    let mut encoder = SequenceEncoder::open(&mut wire);
    encoder.put_slice(b"payload");
    let written = encoder.close();

    assert_eq!(written, wire.len());
    assert_eq!(wire[0], 0x30);

    // Step 2: Decode it back off a queue fed from the wire bytes
    let mut source = ByteQueue::from_slice(&wire);
    let mut decoder = SequenceDecoder::open(&mut source).unwrap();
    assert_eq!(decoder.length(), Length::Definite(7));

    let mut body = Vec::new();
    for _ in 0..7 {
        body.push(decoder.get().unwrap());
    }
    decoder.close().unwrap();

    assert_eq!(body, b"payload");
    assert!(source.is_empty());
}

#[test]
fn test_round_trip_nested_sequences() {
    // outer { 0xAA, inner { 0x01 0x02 }, 0xBB }
    let mut wire = Vec::new();
    let mut outer = SequenceEncoder::open(&mut wire);
    outer.put(0xAA);

    let mut inner = SequenceEncoder::open(&mut outer);
    inner.put_slice(&[0x01, 0x02]);
    inner.close();

    outer.put(0xBB);
    outer.close();

    let mut source = ByteQueue::from_slice(&wire);
    let mut outer = SequenceDecoder::open(&mut source).unwrap();
    assert_eq!(outer.length(), Length::Definite(6));

    assert_eq!(outer.get(), Some(0xAA));

    let mut inner = SequenceDecoder::open(&mut outer).unwrap();
    assert_eq!(inner.length(), Length::Definite(2));
    assert_eq!(inner.get(), Some(0x01));
    assert_eq!(inner.get(), Some(0x02));
    inner.close().unwrap();

    assert_eq!(outer.get(), Some(0xBB));
    outer.close().unwrap();
    assert!(source.is_empty());
}

#[test]
fn test_decode_indefinite_stream_built_by_hand() {
    // Indefinite frames only ever come from a foreign encoder; build one
    let mut source = ByteQueue::from_slice(&[0x30, 0x80, 0xDE, 0xAD, 0x00, 0x00]);

    let mut decoder = SequenceDecoder::open(&mut source).unwrap();
    assert_eq!(decoder.length(), Length::Indefinite);

    assert_eq!(decoder.get(), Some(0xDE));
    assert_eq!(decoder.get(), Some(0xAD));
    decoder.close().unwrap();
    assert!(source.is_empty());
}

#[test]
fn test_decoded_body_held_in_secblock() {
    // Encode 48 octets of "key material", decode into a SecByteBlock
    let secret: Vec<u8> = (0..48).collect();
    let mut wire = Vec::new();
    let mut encoder = SequenceEncoder::open(&mut wire);
    encoder.put_slice(&secret);
    encoder.close();

    let mut source = ByteQueue::from_slice(&wire);
    let mut decoder = SequenceDecoder::open(&mut source).unwrap();
    let declared = decoder.length().value().unwrap() as usize;

    let mut key = SecByteBlock::new(declared);
    for slot in key.iter_mut() {
        *slot = decoder.get().unwrap();
    }
    decoder.close().unwrap();

    assert_eq!(key.as_slice(), secret.as_slice());

    // Shrink to the first 32 octets, then wipe
    key.resize(32);
    assert_eq!(key.as_slice(), &secret[..32]);
    key.clean_reset(32);
    assert!(key.iter().all(|&b| b == 0));
}

#[test]
fn test_large_body_uses_two_octet_length() {
    let body = vec![0x77u8; 300];
    let mut wire = Vec::new();
    let mut encoder = SequenceEncoder::open(&mut wire);
    encoder.put_slice(&body);
    encoder.close();

    assert_eq!(&wire[..4], &[0x30, 0x82, 0x01, 0x2C]);

    let mut source = ByteQueue::from_slice(&wire);
    let mut decoder = SequenceDecoder::open(&mut source).unwrap();
    assert_eq!(decoder.length(), Length::Definite(300));

    for expected in &body {
        assert_eq!(decoder.get(), Some(*expected));
    }
    decoder.close().unwrap();
}

#[test]
fn test_truncated_stream_fails_at_open() {
    let mut source = ByteQueue::from_slice(&[0x30]);
    assert!(SequenceDecoder::open(&mut source).is_err());

    let mut source = ByteQueue::new();
    assert!(SequenceDecoder::open(&mut source).is_err());
}

#[test]
fn test_queue_to_queue_transfer() {
    let mut staging = ByteQueue::new();
    let mut encoder = SequenceEncoder::open(&mut staging);
    encoder.put_slice(&[1, 2, 3]);
    encoder.close();

    let mut wire = ByteQueue::new();
    staging.transfer_to(&mut wire);

    assert!(staging.is_empty());
    assert_eq!(wire.as_slice(), &[0x30, 0x03, 1, 2, 3]);
}

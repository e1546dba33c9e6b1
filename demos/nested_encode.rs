//! Nested sequence encoding example

use derframe_core::length::Length;
use derframe_core::secblock::SecByteBlock;
use derframe_core::sequence::{SequenceDecoder, SequenceEncoder};
use derframe_core::stream::{ByteQueue, ByteSink, ByteSource};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Derframe Nested Encoding Example\n");

    // Pretend key material the outer sequence wraps
    let mut key = SecByteBlock::new(32);
    for (i, b) in key.iter_mut().enumerate() {
        *b = (i * 7) as u8;
    }

    // Encode: outer { version octet, inner { key } }
    let mut wire = Vec::new();
    let mut outer = SequenceEncoder::open(&mut wire);
    outer.put(0x01);

    let mut inner = SequenceEncoder::open(&mut outer);
    inner.put_slice(&key);
    let inner_len = inner.close();

    let total = outer.close();

    println!("Inner frame: {} bytes", inner_len);
    println!("Total wire:  {} bytes", total);
    println!("Wire bytes:  {}", hex::encode(&wire));

    // Decode it back
    let mut source = ByteQueue::from_slice(&wire);
    let mut outer = SequenceDecoder::open(&mut source)?;
    println!("\nOuter length: {:?}", outer.length());

    let version = outer.get().expect("version octet");
    println!("Version: {}", version);

    let mut inner = SequenceDecoder::open(&mut outer)?;
    let declared = match inner.length() {
        Length::Definite(n) => n as usize,
        Length::Indefinite => unreachable!("our encoder only emits definite lengths"),
    };

    let mut recovered = SecByteBlock::new(declared);
    for slot in recovered.iter_mut() {
        *slot = inner.get().expect("key octet");
    }
    inner.close()?;
    outer.close()?;

    assert_eq!(recovered, key);
    println!("Recovered {} key bytes intact", recovered.len());

    Ok(())
}

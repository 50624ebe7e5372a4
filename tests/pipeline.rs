use std::sync::Once;

use huffc::container::{read_container, write_container};
use huffc::{decode_message, encode_message, BitArray, HuffError};

static INIT: Once = Once::new();

fn setup() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

fn roundtrip(message: &[u8]) {
    let encoded = encode_message(message).unwrap();
    let mut file = vec![];
    write_container(&encoded, &mut file).unwrap();

    let read = read_container(&mut file.as_slice()).unwrap();
    let decoded = decode_message(&read.tree_bits, &read.message_bits).unwrap();
    assert_eq!(decoded, message);
}

#[test]
fn roundtrip_messages() {
    setup();
    roundtrip(b"aab");
    roundtrip(b"z");
    roundtrip(b"hello world\n");
    roundtrip(&[0; 4096]);
    roundtrip(&(0..=255).collect::<Vec<u8>>());
    roundtrip(&(0..=255).rev().cycle().take(10_000).collect::<Vec<u8>>());
    roundtrip(
        &(0..50_000_u32)
            .map(|i| (i.wrapping_mul(2_654_435_761) >> 27) as u8)
            .collect::<Vec<u8>>(),
    );
}

#[test]
fn two_symbol_scenario() {
    setup();
    let encoded = encode_message(b"aab").unwrap();
    assert_eq!(encoded.message_bits.to_string(), "110");
    assert_eq!(encoded.tree_bits.to_string(), "1001100010001100001");
}

#[test]
fn single_symbol_message() {
    setup();
    let encoded = encode_message(b"aaaaaaaa").unwrap();
    // one bit per occurrence
    assert_eq!(encoded.message_bits.len(), 8);
    assert_eq!(encoded.tree_bits.to_string(), "001100001");
    let decoded = decode_message(&encoded.tree_bits, &encoded.message_bits).unwrap();
    assert_eq!(decoded, b"aaaaaaaa");
}

#[test]
fn compresses_text() {
    setup();
    let message: Vec<u8> = b"it was the best of times, it was the worst of times\n"
        .iter()
        .cycle()
        .take(10_000)
        .cloned()
        .collect();
    let encoded = encode_message(&message).unwrap();
    assert!(encoded.compression_percent(message.len()) > 30.0);
}

#[test]
fn truncated_message_bits() {
    setup();
    let encoded = encode_message(b"abcdefgh abcdefgh\n").unwrap();
    let shortened: BitArray = encoded
        .message_bits
        .iter()
        .take(encoded.message_bits.len() - 1)
        .collect();
    assert!(matches!(
        decode_message(&encoded.tree_bits, &shortened),
        Err(HuffError::MalformedBitstream(_))
    ));
}

#[test]
fn broken_tree_bits() {
    setup();
    let encoded = encode_message(b"abc").unwrap();
    let shortened: BitArray = encoded.tree_bits.iter().skip(1).collect();
    assert!(matches!(
        decode_message(&shortened, &encoded.message_bits),
        Err(HuffError::InvalidTreeFormat(_))
    ));
}

#[test]
fn truncated_container() {
    setup();
    let encoded = encode_message(b"hello world\n").unwrap();
    let mut file = vec![];
    write_container(&encoded, &mut file).unwrap();
    file.truncate(file.len() - 2);
    assert!(matches!(
        read_container(&mut file.as_slice()),
        Err(HuffError::MalformedBitstream(_))
    ));
}

use huffc::{decode_message, encode_message};

fn main() {
    let input: Vec<u8> = b"{\"id\":1234,\"name\":\"huffc\",\"tags\":[\"tree\",\"heap\",\"bits\"],\"active\":true}\n"
        .iter()
        .cycle()
        .take(66_000)
        .cloned()
        .collect();
    let mut len = 0;
    for _ in 0..10 {
        let encoded = encode_message(&input).unwrap();
        len += encoded.num_bits();
        let decoded = decode_message(&encoded.tree_bits, &encoded.message_bits).unwrap();
        assert_eq!(decoded.len(), input.len());
    }
    println!("{:?}", len);
}

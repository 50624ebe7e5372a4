/*!
huffc encodes byte messages with a huffman code and decodes them again.

A message is encoded into two bit arrays: the huffman tree in a compact pre-order form, and the
message bits. Both together are enough to restore the message, no symbol counts are transmitted.
[`container`] writes both arrays one after another into a file.

```
let message = b"an example message\n";
let encoded = huffc::encode_message(message).unwrap();
println!("Compression: {:.1}%", encoded.compression_percent(message.len()));

let decoded = huffc::decode_message(&encoded.tree_bits, &encoded.message_bits).unwrap();
assert_eq!(decoded, message);
```

The building blocks live in the workspace crates: `bitstream` for the bit array, `common` for the
error type, the priority queue and the histogram, `hufflpuff` for the huffman tree.
*/

use log::debug;

pub use bitstream::BitArray;
pub use common::HuffError;
pub use hufflpuff::Tree;

pub mod container;

/// The two bit arrays of an encoded message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    /// the huffman tree, serialized in pre-order
    pub tree_bits: BitArray,
    /// the message, encoded with the codes of the tree
    pub message_bits: BitArray,
}

impl Encoded {
    /// Total number of bits of tree and message.
    pub fn num_bits(&self) -> usize {
        self.tree_bits.len() + self.message_bits.len()
    }

    /// Space saved in percent, compared to 8 bits per byte of the original message.
    ///
    /// Negative if the encoded form is larger, which is usual for short messages since the tree is
    /// included.
    pub fn compression_percent(&self, original_len: usize) -> f64 {
        if original_len == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.num_bits() as f64 / (8 * original_len) as f64)
    }
}

/// builds a tree for `message` and encodes the tree and the message with it
pub fn encode_message(message: &[u8]) -> Result<Encoded, HuffError> {
    let tree = hufflpuff::build_tree(message)?;
    let index = hufflpuff::build_index(&tree);
    let message_bits = hufflpuff::encode(&index, message)?;
    let tree_bits = hufflpuff::encode_tree(&tree);
    debug!(
        "message {} bytes, tree {} bits, message {} bits",
        message.len(),
        tree_bits.len(),
        message_bits.len()
    );
    Ok(Encoded {
        tree_bits,
        message_bits,
    })
}

/// restores the tree from `tree_bits` and decodes `message_bits` with it
pub fn decode_message(tree_bits: &BitArray, message_bits: &BitArray) -> Result<Vec<u8>, HuffError> {
    let tree = hufflpuff::deserialize_tree(tree_bits)?;
    hufflpuff::decode(&tree, message_bits)
}

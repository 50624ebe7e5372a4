/*!
hufflpuff builds huffman trees and encodes/decodes byte messages with them.

The tree is built with a min-heap over the symbol counts. Besides the message, the tree itself can be
written into a compact pre-order bitstream, so a decoder needs nothing but the two bit arrays.

```
use hufflpuff::*;

let message = b"abracadabra";
let tree = build_tree(message).unwrap();
let bits = encode(&build_index(&tree), message).unwrap();
let tree_bits = encode_tree(&tree);

let decoded_tree = deserialize_tree(&tree_bits).unwrap();
assert_eq!(decode(&decoded_tree, &bits).unwrap(), message);
```
*/

pub mod compress;
pub mod decompress;
pub mod tree;

pub use crate::compress::{build_index, encode, test_prefix_property, Code, CodeIndex};
pub use crate::decompress::decode;
pub use crate::tree::{build_tree, build_tree_from_counts, deserialize_tree, encode_tree, Node, Tree};
pub use bitstream::BitArray;
pub use common::{count_simple, CountsTable, HuffError};

#![no_main]

use hufflpuff::*;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let tree = build_tree(data).unwrap();
    let bits = encode(&build_index(&tree), data).unwrap();
    let tree = deserialize_tree(&encode_tree(&tree)).unwrap();
    assert_eq!(decode(&tree, &bits).unwrap(), data);
});

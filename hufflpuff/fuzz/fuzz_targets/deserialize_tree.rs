#![no_main]

use hufflpuff::*;
use libfuzzer_sys::fuzz_target;

// arbitrary bits may be rejected, but never panic. Accepted trees serialize back to the input.
fuzz_target!(|data: &[u8]| {
    let bits: BitArray = data.iter().map(|byte| byte & 1 == 1).collect();
    if let Ok(tree) = deserialize_tree(&bits) {
        assert_eq!(encode_tree(&tree), bits);
        let _ = decode(&tree, &bits);
    }
});

#![no_main]

use hufflpuff::build_index;
use hufflpuff::build_tree;
use hufflpuff::test_prefix_property;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let tree = build_tree(data).unwrap();
    if tree.num_symbols() > 1 {
        test_prefix_property(&build_index(&tree));
    }
});

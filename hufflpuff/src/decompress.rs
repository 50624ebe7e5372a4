use bitstream::BitArray;
use common::HuffError;
use log::debug;

use crate::tree::Tree;

/// Decodes `bits` by walking `tree` from the root, `0` goes left and `1` goes right. Reaching a
/// leaf emits its symbol and restarts at the root.
///
/// A single leaf tree encodes every symbol as `0`.
pub fn decode(tree: &Tree, bits: &BitArray) -> Result<Vec<u8>, HuffError> {
    let root = tree.get_root_node();
    if let Some(symbol) = root.symbol() {
        if let Some(pos) = bits.iter().position(|bit| bit) {
            return Err(HuffError::MalformedBitstream(format!(
                "bit {} is set, but the tree has a single symbol",
                pos
            )));
        }
        return Ok(vec![symbol; bits.len()]);
    }

    let mut out = Vec::with_capacity(bits.len() / tree.get_depth().max(1) as usize);
    let mut node = root;
    let mut code_start = 0;
    for (pos, bit) in bits.iter().enumerate() {
        let next = if bit { node.right() } else { node.left() };
        node = match next {
            Some(next) => tree.get_node(next),
            None => {
                return Err(HuffError::MalformedBitstream(format!(
                    "internal node without child at bit {}",
                    pos
                )))
            }
        };
        if let Some(symbol) = node.symbol() {
            out.push(symbol);
            node = root;
            code_start = pos + 1;
        }
    }
    if code_start != bits.len() {
        return Err(HuffError::MalformedBitstream(format!(
            "bitstream ends inside a code starting at bit {}",
            code_start
        )));
    }
    debug!("decoded {} bits into {} bytes", bits.len(), out.len());
    Ok(out)
}

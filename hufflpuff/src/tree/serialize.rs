//! Pre-order bit serialization of a [`Tree`].
//!
//! An internal node is written as a `1` followed by its left and then its right subtree. A leaf is
//! written as a `0` followed by its symbol, 8 bits MSB first. Counts are not stored.

use bitstream::BitArray;
use common::HuffError;
use log::debug;

use crate::tree::Tree;
use crate::Node;

/// A tree over a single byte alphabet has at most 256 leaves and 255 internal nodes.
pub const MAX_TREE_NODES: usize = 511;

/// Writes the shape and symbols of `tree` into a bit array of exactly [`Tree::serialized_len`] bits.
pub fn encode_tree(tree: &Tree) -> BitArray {
    let mut bits = BitArray::new(tree.serialized_len());
    let mut pos = 0;
    tree.walk_tree(&mut |node, _path| match node.symbol() {
        Some(symbol) => {
            // shape bit of a leaf is 0
            pos += 1;
            for shift in (0..8).rev() {
                if (symbol >> shift) & 1 == 1 {
                    bits.set(pos);
                }
                pos += 1;
            }
        }
        None => {
            bits.set(pos);
            pos += 1;
        }
    });
    debug_assert_eq!(pos, bits.len());
    debug!(
        "serialized tree with {} nodes into {} bits",
        tree.num_nodes(),
        bits.len()
    );
    bits
}

fn invalid<T>(msg: String) -> Result<T, HuffError> {
    Err(HuffError::InvalidTreeFormat(msg))
}

/// Reads a tree written by [`encode_tree`]. All bits of `bits` have to be part of the tree.
///
/// The returned tree is stored in pre-order, the root is at position 0. Counts are 0.
pub fn deserialize_tree(bits: &BitArray) -> Result<Tree, HuffError> {
    if bits.is_empty() {
        return invalid("empty tree bitstream".to_string());
    }
    let mut nodes: Vec<Node> = Vec::new();
    let mut seen_symbols = [false; 256];
    // last internal node read, new nodes are attached to it or to the closest ancestor with a free slot
    let mut frontier: Option<usize> = None;
    let mut pos = 0;

    while pos < bits.len() {
        let parent = match frontier {
            None => None,
            Some(start) => match find_open_slot(&nodes, start) {
                Some(parent) => Some(parent),
                None => {
                    return invalid(format!(
                        "tree is complete but {} bits are left",
                        bits.len() - pos
                    ))
                }
            },
        };
        if nodes.len() >= MAX_TREE_NODES {
            return invalid(format!("more than {} nodes", MAX_TREE_NODES));
        }

        let is_internal = bits.test(pos);
        pos += 1;
        let node = if is_internal {
            Node::default()
        } else {
            if pos + 8 > bits.len() {
                return invalid(format!(
                    "leaf at bit {} is truncated, {} of 8 symbol bits present",
                    pos - 1,
                    bits.len() - pos
                ));
            }
            let mut symbol = 0_u8;
            for _ in 0..8 {
                symbol = (symbol << 1) | bits.test(pos) as u8;
                pos += 1;
            }
            if seen_symbols[symbol as usize] {
                return invalid(format!("symbol {} appears twice", symbol));
            }
            seen_symbols[symbol as usize] = true;
            Node {
                symbol: Some(symbol),
                ..Default::default()
            }
        };

        let node_pos = nodes.len();
        nodes.push(node);
        if let Some(parent) = parent {
            attach(&mut nodes, parent, node_pos)?;
        }
        if is_internal || frontier.is_none() {
            frontier = Some(node_pos);
        }
    }

    if let Some(open) = nodes.iter().position(|node| node.has_open_slot()) {
        return invalid(format!("bitstream ended, node {} misses a child", open));
    }
    debug!("deserialized tree with {} nodes", nodes.len());
    Ok(Tree {
        nodes,
        root_node: 0,
    })
}

/// walks up the parent links starting at `start` until a node with a free child slot is found
fn find_open_slot(nodes: &[Node], start: usize) -> Option<usize> {
    let mut current = start;
    loop {
        if nodes[current].has_open_slot() {
            return Some(current);
        }
        current = nodes[current].parent()?;
    }
}

/// attaches `child` as left child, or as right child if the left one is taken
fn attach(nodes: &mut [Node], parent: usize, child: usize) -> Result<(), HuffError> {
    let child_pos = child as u16;
    let parent_node = &mut nodes[parent];
    if parent_node.left.is_none() {
        parent_node.left = Some(child_pos);
    } else if parent_node.right.is_none() {
        parent_node.right = Some(child_pos);
    } else {
        return invalid(format!("node {} already has two children", parent));
    }
    let number_bits = match parent_node.number_bits.checked_add(1) {
        Some(number_bits) => number_bits,
        None => return invalid("tree is deeper than 255 levels".to_string()),
    };
    nodes[child].parent = Some(parent as u16);
    nodes[child].number_bits = number_bits;
    Ok(())
}

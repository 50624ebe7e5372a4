use common::{
    count_simple, get_num_unique_symbols, symbol_counts, CountsTable, HuffError, PriorityQueue,
};
use log::{debug, log_enabled, trace, Level};

use crate::tree::Tree;
use crate::Node;

/// creates a huffman tree for the bytes in `input`
#[inline]
pub fn build_tree(input: &[u8]) -> Result<Tree, HuffError> {
    if input.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    build_tree_from_counts(&count_simple(input))
}

/// creates a huffman tree from a histogram
///
/// One leaf per present symbol is put into a min-heap keyed by count. The two lightest nodes are
/// extracted, the first one becomes the left child and the second one the right child of a new
/// parent which goes back into the heap. The last remaining node is the root.
///
/// The leaves are stored first (ascending by symbol), parents are appended in creation order, so
/// every parent sits at a higher position than its children and the root is the last node.
pub fn build_tree_from_counts(counts: &CountsTable) -> Result<Tree, HuffError> {
    let num_symbols = get_num_unique_symbols(counts);
    if num_symbols == 0 {
        return Err(HuffError::EmptyInput);
    }
    let mut nodes: Vec<Node> = Vec::with_capacity(2 * num_symbols - 1);
    nodes.extend(symbol_counts(counts).map(|(symbol, count)| Node {
        symbol: Some(symbol),
        count,
        ..Default::default()
    }));

    // every merge extracts two and inserts one, so the heap never holds more than the leaves
    let mut heap = PriorityQueue::new_min(num_symbols, |a: &(usize, u16), b: &(usize, u16)| {
        a.0.cmp(&b.0)
    });
    for (pos, node) in nodes.iter().enumerate() {
        heap.insert((node.count, pos as u16))?;
    }

    while heap.len() > 1 {
        let (left_count, left_pos) = heap.extract().ok_or(HuffError::EmptyInput)?;
        let (right_count, right_pos) = heap.extract().ok_or(HuffError::EmptyInput)?;

        let parent_pos = nodes.len() as u16;
        nodes[left_pos as usize].parent = Some(parent_pos);
        nodes[right_pos as usize].parent = Some(parent_pos);
        nodes.push(Node {
            count: left_count + right_count,
            left: Some(left_pos),
            right: Some(right_pos),
            ..Default::default()
        });
        heap.insert((left_count + right_count, parent_pos))?;
    }
    let root_node = nodes.len() - 1;

    // parents are strictly after their children, so walking backwards visits each parent first
    for parent_pos in (0..nodes.len()).rev() {
        let parent_node = nodes[parent_pos];
        for child in parent_node.left.iter().chain(parent_node.right.iter()) {
            nodes[*child as usize].number_bits = parent_node.number_bits + 1;
        }
    }

    let tree = Tree { nodes, root_node };
    debug!(
        "built tree with {} symbols, {} nodes, depth {}",
        num_symbols,
        tree.num_nodes(),
        tree.get_depth()
    );
    if log_enabled!(Level::Trace) {
        for node in tree.get_symbol_nodes() {
            trace!("{:?}", node);
        }
    }
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::minimum_tree_depth;

    fn symbol_depth(tree: &Tree, symbol: u8) -> u8 {
        tree.get_symbol_nodes()
            .find(|node| node.symbol() == Some(symbol))
            .map(|node| node.number_bits())
            .unwrap()
    }

    fn validate_tree(tree: &Tree) {
        let root = tree.get_root_node();
        assert_eq!(root.parent(), None);
        assert_eq!(root.number_bits(), 0);
        for (pos, node) in tree.nodes.iter().enumerate() {
            if node.is_leaf() {
                assert!(node.left().is_none() && node.right().is_none());
                continue;
            }
            let left = node.left().unwrap();
            let right = node.right().unwrap();
            assert_eq!(tree.get_node(left).parent(), Some(pos));
            assert_eq!(tree.get_node(right).parent(), Some(pos));
            assert_eq!(
                node.count(),
                tree.get_node(left).count() + tree.get_node(right).count()
            );
            assert_eq!(tree.get_node(left).number_bits(), node.number_bits() + 1);
        }
        assert_eq!(tree.num_nodes(), 2 * tree.num_symbols() - 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(build_tree(&[]), Err(HuffError::EmptyInput)));
        assert!(matches!(
            build_tree_from_counts(&[0; 256]),
            Err(HuffError::EmptyInput)
        ));
    }

    #[test]
    fn test_two_symbols() {
        let tree = build_tree(b"aab").unwrap();
        validate_tree(&tree);
        assert_eq!(tree.num_nodes(), 3);
        assert_eq!(tree.num_symbols(), 2);
        assert_eq!(tree.root_node_pos(), 2);
        let root = tree.get_root_node();
        // the lighter node is extracted first and becomes the left child
        assert_eq!(tree.get_node(root.left().unwrap()).symbol(), Some(b'b'));
        assert_eq!(tree.get_node(root.right().unwrap()).symbol(), Some(b'a'));
        assert_eq!(root.count(), 3);
    }

    #[test]
    fn test_single_symbol() {
        let tree = build_tree(&[255]).unwrap();
        validate_tree(&tree);
        assert_eq!(tree.num_nodes(), 1);
        assert_eq!(tree.get_root_node().symbol(), Some(255));
        assert_eq!(tree.get_depth(), 0);
        assert_eq!(tree.estimate_compressed_size(), 1);

        let tree = build_tree(&[7; 1000]).unwrap();
        assert_eq!(tree.get_root_node().count(), 1000);
        assert_eq!(tree.estimate_compressed_size(), 125);
    }

    #[test]
    fn test_zstd_example_depths() {
        let mut src = vec![0_u8; 14];
        src.extend(vec![1; 7]);
        src.extend(vec![2; 3]);
        src.push(4);
        src.push(5);
        let tree = build_tree(&src).unwrap();
        validate_tree(&tree);
        assert_eq!(symbol_depth(&tree, 0), 1);
        assert_eq!(symbol_depth(&tree, 1), 2);
        assert_eq!(symbol_depth(&tree, 2), 3);
        assert_eq!(symbol_depth(&tree, 4), 4);
        assert_eq!(symbol_depth(&tree, 5), 4);
        assert_eq!(tree.get_root_node().count(), 26);
    }

    #[test]
    fn test_fibonacci_counts() {
        let mut counts = [0; 256];
        let fib = [1, 1, 2, 3, 5, 8, 13];
        for (symbol, count) in fib.iter().enumerate() {
            counts[symbol] = *count;
        }
        let tree = build_tree_from_counts(&counts).unwrap();
        validate_tree(&tree);
        assert_eq!(tree.get_depth(), 6);
        let root = tree.get_root_node();
        assert_eq!(tree.get_node(root.left().unwrap()).symbol(), Some(6));
        assert_eq!(symbol_depth(&tree, 0), 6);
        assert_eq!(symbol_depth(&tree, 1), 6);
        assert_eq!(symbol_depth(&tree, 2), 5);
    }

    #[test]
    fn test_balanced_tree_all_symbols() {
        let src: Vec<u8> = (0..=255).collect();
        let tree = build_tree(&src).unwrap();
        validate_tree(&tree);
        assert_eq!(tree.num_symbols(), 256);
        assert_eq!(tree.num_nodes(), 511);
        assert_eq!(tree.get_depth() as usize, minimum_tree_depth(256));
        assert!(tree.get_symbol_nodes().all(|node| node.number_bits() == 8));
        assert_eq!(tree.estimate_compressed_size(), 256);
    }

    #[test]
    fn test_skewed_counts() {
        let src: Vec<u8> = vec![
            1, 2, 3, 3, 4, 4, 5, 5, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 6, 7,
            7, 7, 7, 7, 7, 7, 7,
        ];
        let tree = build_tree(&src).unwrap();
        validate_tree(&tree);
        assert_eq!(symbol_depth(&tree, 6), 1);
        assert!(symbol_depth(&tree, 1) >= symbol_depth(&tree, 7));
    }
}

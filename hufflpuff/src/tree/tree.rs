use super::tree_node::Node;
use crate::tree::render_tree::render_plan_to;

/// Huffman tree stored as an arena of nodes.
///
/// Children are referenced by their position in `nodes`, every node also knows the position of its
/// parent. A tree built from counts has its leaves at the beginning and the root at the end, a tree
/// read from a bitstream is stored in pre-order with the root at position 0.
#[derive(Debug, Clone)]
pub struct Tree {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root_node: usize,
}

impl Tree {
    #[inline]
    pub fn get_node(&self, node_pos: usize) -> &Node {
        &self.nodes[node_pos]
    }
    #[inline]
    pub fn get_root_node(&self) -> &Node {
        &self.nodes[self.root_node]
    }
    #[inline]
    pub fn root_node_pos(&self) -> usize {
        self.root_node
    }

    /// number of leaves and internal nodes
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// number of leaves, which is the number of distinct symbols
    pub fn num_symbols(&self) -> usize {
        self.get_symbol_nodes().count()
    }

    /// length of the pre-order serialization: one shape bit per node plus 8 bits per leaf
    pub fn serialized_len(&self) -> usize {
        self.num_nodes() + 8 * self.num_symbols()
    }

    /// deepest level of the tree, 0 for a single leaf
    pub fn get_depth(&self) -> u8 {
        self.nodes.iter().map(|node| node.number_bits).max().unwrap_or(0)
    }

    /// returns all nodes in the tree containing a symbol, excluding intermediate parent nodes
    pub fn get_symbol_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.is_leaf())
    }

    /// returns estimated compressed size in byte
    ///
    /// Only meaningful for trees built from counts. A single leaf still costs one bit per symbol.
    pub fn estimate_compressed_size(&self) -> usize {
        (self.estimate_compressed_size_bits() + 7) / 8
    }

    /// number of bits the message the tree was built from encodes to
    pub fn estimate_compressed_size_bits(&self) -> usize {
        self.get_symbol_nodes()
            .map(|node| node.count * node.number_bits.max(1) as usize)
            .sum()
    }

    /// Visits every node in pre-order, starting at the root.
    ///
    /// `fun` receives the node and the path from the root to it, `false` for a left turn and `true`
    /// for a right turn.
    pub fn walk_tree<F>(&self, fun: &mut F)
    where
        F: FnMut(&Node, &[bool]),
    {
        let mut path = Vec::with_capacity(self.get_depth() as usize);
        self.walk_graph_internal(&mut path, self.root_node, fun);
    }

    fn walk_graph_internal<F>(&self, path: &mut Vec<bool>, node_pos: usize, fun: &mut F)
    where
        F: FnMut(&Node, &[bool]),
    {
        let node = &self.nodes[node_pos];
        fun(node, path);
        if let Some(left) = node.left {
            path.push(false);
            self.walk_graph_internal(path, left as usize, fun);
            path.pop();
        }
        if let Some(right) = node.right {
            path.push(true);
            self.walk_graph_internal(path, right as usize, fun);
            path.pop();
        }
    }

    /// Same shape and same symbols at the same positions. Counts and arena layout are ignored.
    pub fn structurally_eq(&self, other: &Tree) -> bool {
        self.node_structurally_eq(self.root_node, other, other.root_node)
    }

    fn node_structurally_eq(&self, node_pos: usize, other: &Tree, other_pos: usize) -> bool {
        let node = &self.nodes[node_pos];
        let other_node = &other.nodes[other_pos];
        if node.symbol != other_node.symbol {
            return false;
        }
        let children_eq = |own: Option<u16>, theirs: Option<u16>| match (own, theirs) {
            (None, None) => true,
            (Some(own), Some(theirs)) => {
                self.node_structurally_eq(own as usize, other, theirs as usize)
            }
            _ => false,
        };
        children_eq(node.left, other_node.left) && children_eq(node.right, other_node.right)
    }
}

/// renders the tree in the graphviz dot format
impl std::fmt::Display for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut out = vec![];
        render_plan_to(self, &mut out).map_err(|_| std::fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&out))
    }
}

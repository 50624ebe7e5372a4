#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    /// the symbol, limited to single byte alphabet. Only leaf nodes carry a symbol
    pub(crate) symbol: Option<u8>,
    /// the number of occurences, summed up for parents. 0 for trees read from a bitstream
    pub(crate) count: usize,
    /// position of the left node in the array
    pub(crate) left: Option<u16>,
    /// position of the right node in the array
    pub(crate) right: Option<u16>,
    /// position of the parent node in the array, None for the root node
    pub(crate) parent: Option<u16>,
    /// depth of the node, which is the code length for leaf nodes
    pub(crate) number_bits: u8,
}

impl Node {
    #[inline]
    pub fn symbol(&self) -> Option<u8> {
        self.symbol
    }
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }
    #[inline]
    pub fn left(&self) -> Option<usize> {
        self.left.map(usize::from)
    }
    #[inline]
    pub fn right(&self) -> Option<usize> {
        self.right.map(usize::from)
    }
    #[inline]
    pub fn parent(&self) -> Option<usize> {
        self.parent.map(usize::from)
    }
    #[inline]
    pub fn number_bits(&self) -> u8 {
        self.number_bits
    }
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }

    /// an internal node which can still take a child
    #[inline]
    pub(crate) fn has_open_slot(&self) -> bool {
        !self.is_leaf() && (self.left.is_none() || self.right.is_none())
    }
}

impl core::fmt::Debug for Node {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!(
            "Node{{ symbol:{:?} count:{} number_bits:{:?} left:{:?} right:{:?} parent:{:?} }}",
            self.symbol, self.count, self.number_bits, self.left, self.right, self.parent
        ))
    }
}

use crate::Tree;
use std::borrow::Cow;

#[derive(Debug, Clone)]
pub struct Edge {
    from: u16,
    to: u16,
    transition: u8, // 0 or 1
}

/// Writes the tree as a graphviz digraph. Nodes are identified by their arena position.
pub fn render_plan_to<W: std::io::Write>(graph: &Tree, output: &mut W) -> std::io::Result<()> {
    dot::render(graph, output)
}

impl<'a> dot::Labeller<'a, u16, Edge> for Tree {
    fn graph_id(&'a self) -> dot::Id<'a> {
        dot::Id::new("huffman").unwrap()
    }

    fn node_id(&'a self, n: &u16) -> dot::Id<'a> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&'a self, n: &u16) -> dot::LabelText<'a> {
        let node = self.get_node(*n as usize);
        let out = match (node.symbol(), node.count()) {
            (Some(symbol), 0) => format!("Symbl:{:?}", symbol),
            (Some(symbol), count) => format!("Cnt:{:?} Symbl:{:?}", count, symbol),
            (None, count) => format!("Cnt:{:?}", count),
        };
        dot::LabelText::LabelStr(out.into())
    }

    fn edge_label(&'a self, ed: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::LabelStr(ed.transition.to_string().into())
    }
}

impl<'a> dot::GraphWalk<'a, u16, Edge> for Tree {
    fn nodes(&'a self) -> dot::Nodes<'a, u16> {
        (0..self.num_nodes() as u16).collect::<Vec<_>>().into()
    }

    fn edges(&'a self) -> dot::Edges<'a, Edge> {
        let mut edges = vec![];
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(left) = node.left {
                edges.push(Edge {
                    from: i as u16,
                    to: left,
                    transition: 0,
                });
            }
            if let Some(right) = node.right {
                edges.push(Edge {
                    from: i as u16,
                    to: right,
                    transition: 1,
                });
            }
        }
        Cow::Owned(edges)
    }

    fn source(&'a self, e: &Edge) -> u16 {
        e.from
    }

    fn target(&'a self, e: &Edge) -> u16 {
        e.to
    }
}

use std::io;
use std::io::Write;

use itertools::Itertools;

use crate::parser::Expr;
use crate::symbols::NOT_SIGN;

/// Renderable view of a syntax tree: one graph node per unique subtree.
pub struct ExprGraph {
    pub nodes: Vec<Expr>,
}

type GraphNode = usize;
type GraphEdge = (usize, String, usize);

impl ExprGraph {
    pub fn new(root: &Expr) -> Self {
        Self {
            nodes: Self::nodes_recursive(root).into_iter().unique().collect(),
        }
    }

    pub fn render_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }

    fn nodes_recursive(root: &Expr) -> Vec<Expr> {
        let this_node = vec![root.clone()];

        match root {
            Expr::BinaryOp(_, left, right) => {
                let left_nodes = Self::nodes_recursive(left);
                let right_nodes = Self::nodes_recursive(right);

                left_nodes
                    .into_iter()
                    .chain(right_nodes)
                    .chain(this_node)
                    .collect()
            }
            Expr::Not(child) => Self::nodes_recursive(child)
                .into_iter()
                .chain(this_node)
                .collect(),
            Expr::True | Expr::False | Expr::Var(_) => this_node,
        }
    }

    fn position(&self, expr: &Expr) -> GraphNode {
        self.nodes
            .iter()
            .position(|node| node == expr)
            .expect("cannot find position")
    }
}

impl<'a> dot::Labeller<'a, GraphNode, GraphEdge> for ExprGraph {
    fn graph_id(&self) -> dot::Id<'a> {
        dot::Id::new("syntax_tree").expect("cannot create Id named 'syntax_tree'")
    }

    fn node_id(&self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(format!("n_{}", n))
            .unwrap_or_else(|_| panic!("cannot create Id named 'n_{n}'"))
    }

    fn node_label(&self, n: &GraphNode) -> dot::LabelText<'a> {
        match &self.nodes[*n] {
            Expr::BinaryOp(op, _, _) => dot::LabelText::label(format!("{:?}", op)),
            Expr::Not(_) => dot::LabelText::label(NOT_SIGN.to_string()),
            Expr::True => dot::LabelText::label("True".to_string()),
            Expr::False => dot::LabelText::label("False".to_string()),
            Expr::Var(name) => dot::LabelText::label(format!("Var {}", name)),
        }
    }

    fn edge_label(&self, e: &GraphEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.1.clone())
    }
}

impl<'a> dot::GraphWalk<'a, GraphNode, GraphEdge> for ExprGraph {
    fn nodes(&self) -> dot::Nodes<'a, GraphNode> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&self) -> dot::Edges<'a, GraphEdge> {
        let mut edges: Vec<GraphEdge> = Vec::new();

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Expr::BinaryOp(_, left, right) => {
                    edges.push((i, "L".to_string(), self.position(left)));
                    edges.push((i, "R".to_string(), self.position(right)));
                }
                Expr::Not(child) => {
                    edges.push((i, String::new(), self.position(child)));
                }
                Expr::True | Expr::False | Expr::Var(_) => {}
            }
        }

        edges.into()
    }

    fn source(&self, e: &GraphEdge) -> GraphNode {
        e.0
    }

    fn target(&self, e: &GraphEdge) -> GraphNode {
        e.2
    }
}

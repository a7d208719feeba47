use crate::ocpt::ocpt_struct::{OCPTNode, OCPTOperatorLabel};
use crate::tree_layout::layout_struct::{
    LayoutContent, LayoutEdge, LayoutNode, NodeHierarchy, Position,
};
use serde::{Deserialize, Serialize};

/// Vertical offset of the root row.
pub const TOP_OFFSET: f64 = 50.0;
/// Vertical distance between depth levels.
pub const ROW_HEIGHT: f64 = 100.0;
/// Minimum horizontal space between siblings.
pub const MIN_SIBLING_SPACING: f64 = 180.0;
/// Maximum total width a sibling group may spread over.
pub const MAX_SPREAD_WIDTH: f64 = 800.0;
/// Horizontal coordinate of the root node.
pub const ROOT_X: f64 = 400.0;

///
/// The positioned nodes, parent-child edges, and hierarchy map of one
/// layout pass
///
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TreeLayout {
    /// Positioned nodes in pre-order
    pub nodes: Vec<LayoutNode>,
    /// One directed edge from each non-root node's parent
    pub edges: Vec<LayoutEdge>,
    /// Parent id to ordered child ids
    pub hierarchy: NodeHierarchy,
}

///
/// Error while laying out an object-centric process tree
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The input carried more than one root; only single-root trees are
    /// supported
    MultipleRootsUnsupported(usize),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::MultipleRootsUnsupported(count) => {
                write!(f, "expected at most one process tree root, got {count}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Lays out an object-centric process tree into positioned nodes and
/// parent-child edges.
///
/// The tree is traversed pre-order from the single root. Each level occupies
/// a fixed row; a single child sits directly beneath its parent, while larger
/// sibling groups spread symmetrically around the parent with a spacing of
/// `min(`[`MIN_SIBLING_SPACING`]`, `[`MAX_SPREAD_WIDTH`]` / N)`, keeping wide
/// fan-outs compact. `flower` operators become one terminal node listing
/// their children's labels and are not recursed into.
///
/// An empty input yields an empty layout; more than one root is rejected
/// with [`LayoutError::MultipleRootsUnsupported`].
pub fn layout_process_tree(tree: &[OCPTNode]) -> Result<TreeLayout, LayoutError> {
    let root = match tree {
        [] => return Ok(TreeLayout::default()),
        [root] => root,
        roots => return Err(LayoutError::MultipleRootsUnsupported(roots.len())),
    };

    let mut builder = LayoutBuilder::default();
    builder.place(root, None, 0, 0, 1, ROOT_X);
    Ok(TreeLayout {
        nodes: builder.nodes,
        edges: builder.edges,
        hierarchy: builder.hierarchy,
    })
}

/// Owns the synthetic id counter of one layout pass, so repeated layouts of
/// the same tree are independent and structurally identical.
#[derive(Debug, Default)]
struct LayoutBuilder {
    next_id: usize,
    nodes: Vec<LayoutNode>,
    edges: Vec<LayoutEdge>,
    hierarchy: NodeHierarchy,
}

impl LayoutBuilder {
    fn place(
        &mut self,
        node: &OCPTNode,
        parent_id: Option<&str>,
        depth: usize,
        sibling_index: usize,
        total_siblings: usize,
        parent_x: f64,
    ) {
        let node_id = format!("node-{}", self.next_id);
        self.next_id += 1;

        if let Some(parent_id) = parent_id {
            self.hierarchy.record_child(parent_id, &node_id);
            self.edges.push(LayoutEdge {
                id: format!("edge-{parent_id}-{node_id}"),
                source: parent_id.to_string(),
                target: node_id.clone(),
            });
        }

        let x = if total_siblings == 1 {
            parent_x
        } else {
            let spacing = MIN_SIBLING_SPACING.min(MAX_SPREAD_WIDTH / total_siblings as f64);
            let total_width = (total_siblings - 1) as f64 * spacing;
            parent_x - total_width / 2.0 + sibling_index as f64 * spacing
        };
        let position = Position {
            x,
            y: TOP_OFFSET + depth as f64 * ROW_HEIGHT,
        };

        let content = match node {
            OCPTNode::Operator(op) if op.label == OCPTOperatorLabel::Flower => {
                LayoutContent::Flower {
                    children: op
                        .children
                        .iter()
                        .map(|child| child.display_label().to_string())
                        .collect(),
                }
            }
            OCPTNode::Operator(op) => LayoutContent::Operator {
                label: op.label.as_str().to_string(),
            },
            OCPTNode::Leaf(leaf) => LayoutContent::Activity {
                activity: leaf.activity.clone(),
                ots: leaf.ots.iter().map(|tag| tag.ot.clone()).collect(),
            },
        };

        let is_flower = matches!(content, LayoutContent::Flower { .. });
        self.nodes.push(LayoutNode {
            id: node_id.clone(),
            position,
            content,
            selected: false,
        });

        // Flower children are collapsed into the node itself.
        if is_flower {
            return;
        }

        if let OCPTNode::Operator(op) = node {
            let total = op.children.len();
            for (index, child) in op.children.iter().enumerate() {
                self.place(child, Some(&node_id), depth + 1, index, total, x);
            }
        }
    }
}

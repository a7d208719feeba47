use crate::tree_layout::layout_struct::{LayoutNode, NodeHierarchy, Position};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

///
/// An interactive change event for a laid-out tree node
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeChange {
    /// The node was dragged to a new position
    Position {
        /// Id of the moved node
        id: String,
        /// Its new position
        position: Position,
    },
    /// The node's selection state changed
    Selection {
        /// Id of the node
        id: String,
        /// New selection state
        selected: bool,
    },
}

/// Applies a batch of node changes, propagating each move to the moved
/// node's entire descendant subtree.
///
/// A moved node's transitive descendants (via `hierarchy`) are shifted by the
/// same delta as the node itself. Changes are applied in the order received
/// and each node's position is updated at most once per batch: if both an
/// ancestor and one of its descendants are explicit move targets, whichever
/// is processed first wins and the later explicit move is skipped. Selection
/// changes pass through independently of the position logic.
///
/// The input slice is left untouched; updated copies are returned.
pub fn apply_node_changes(
    nodes: &[LayoutNode],
    hierarchy: &NodeHierarchy,
    changes: &[NodeChange],
) -> Vec<LayoutNode> {
    let mut updated: Vec<LayoutNode> = nodes.to_vec();
    let index_by_id: HashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id.as_str(), index))
        .collect();
    let mut moved: HashSet<&str> = HashSet::new();

    for change in changes {
        match change {
            NodeChange::Position { id, position } => {
                if moved.contains(id.as_str()) {
                    continue;
                }
                let Some(&index) = index_by_id.get(id.as_str()) else {
                    continue;
                };

                let delta_x = position.x - updated[index].position.x;
                let delta_y = position.y - updated[index].position.y;
                updated[index].position = *position;
                moved.insert(id.as_str());

                for descendant in hierarchy.descendants_of(id) {
                    let Some(&descendant_index) = index_by_id.get(descendant.as_str()) else {
                        continue;
                    };
                    if !moved.insert(nodes[descendant_index].id.as_str()) {
                        continue;
                    }
                    updated[descendant_index].position.x += delta_x;
                    updated[descendant_index].position.y += delta_y;
                }
            }
            NodeChange::Selection { id, selected } => {
                if let Some(&index) = index_by_id.get(id.as_str()) {
                    updated[index].selected = *selected;
                }
            }
        }
    }

    updated
}

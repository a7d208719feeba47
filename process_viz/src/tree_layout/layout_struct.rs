use serde::{Deserialize, Serialize};
use std::collections::HashMap;

///
/// A 2D canvas position
///
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

///
/// The tree content a [`LayoutNode`] was created from
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LayoutContent {
    /// An operator node, labeled with the operator name
    Operator {
        /// Operator label (sequence, parallel, exclusive, redo)
        label: String,
    },
    /// An activity leaf
    Activity {
        /// Activity value
        activity: String,
        /// Object types the activity relates to
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        ots: Vec<String>,
    },
    /// A collapsed `flower` operator listing all of its children's labels
    Flower {
        /// Display labels of the collapsed children
        children: Vec<String>,
    },
}

///
/// A positioned node of one tree-layout pass
///
/// Created and owned by the layout engine for one pass; drag propagation
/// derives updated copies, the inputs are never patched in place.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutNode {
    /// Pass-scoped synthetic id (`node-<counter>`)
    pub id: String,
    /// Canvas position
    pub position: Position,
    /// Back-reference to the originating tree content
    pub content: LayoutContent,
    /// Interactive selection state
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub selected: bool,
}

///
/// A directed parent-to-child edge of one tree-layout pass
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutEdge {
    /// Derived edge id (`edge-<parent>-<child>`)
    pub id: String,
    /// Synthetic id of the parent node
    pub source: String,
    /// Synthetic id of the child node
    pub target: String,
}

///
/// Parent-to-children id mapping of one tree-layout pass
///
/// Built once per layout pass and read-only thereafter; drag propagation uses
/// it to resolve the descendant subtree of a moved node.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NodeHierarchy {
    children: HashMap<String, Vec<String>>,
}

impl NodeHierarchy {
    /// Appends `child` to the ordered child list of `parent`.
    pub fn record_child(&mut self, parent: &str, child: &str) {
        self.children
            .entry(parent.to_string())
            .or_default()
            .push(child.to_string());
    }

    /// Returns the ordered direct children of `id`.
    pub fn children_of(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns all transitive descendants of `id` in pre-order.
    pub fn descendants_of(&self, id: &str) -> Vec<String> {
        let mut descendants = Vec::new();
        for child in self.children_of(id) {
            descendants.push(child.clone());
            descendants.extend(self.descendants_of(child));
        }
        descendants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descendants_are_transitive() {
        let mut hierarchy = NodeHierarchy::default();
        hierarchy.record_child("node-0", "node-1");
        hierarchy.record_child("node-0", "node-2");
        hierarchy.record_child("node-1", "node-3");

        assert_eq!(hierarchy.children_of("node-0"), ["node-1", "node-2"]);
        assert_eq!(
            hierarchy.descendants_of("node-0"),
            vec!["node-1", "node-3", "node-2"]
        );
        assert!(hierarchy.descendants_of("node-3").is_empty());
        assert!(hierarchy.children_of("missing").is_empty());
    }
}

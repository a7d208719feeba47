use serde::{Deserialize, Serialize};

/// Fill color of nodes on the first side of a cut.
pub const SET1_FILL: &str = "#166534";
/// Fill color of nodes on the second side of a cut.
pub const SET2_FILL: &str = "#075985";
/// Fill color of an unmodified DFG edge.
pub const EDGE_DEFAULT_FILL: &str = "#6b7280";
/// Fill color of an edge scheduled for insertion.
pub const EDGE_ADD_FILL: &str = "#10b981";
/// Fill color of an edge scheduled for removal.
pub const EDGE_REMOVE_FILL: &str = "#ef4444";

/// Cluster tag of nodes on the first side of a cut.
pub const SET1_CLUSTER: &str = "Set 1";
/// Cluster tag of nodes on the second side of a cut.
pub const SET2_CLUSTER: &str = "Set 2";

///
/// A render-ready graph node
///
/// Ids are synthetic (`n-<counter>`) and stable only within the
/// transformation pass that produced them.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderNode {
    /// Pass-scoped synthetic id
    pub id: String,
    /// Display label
    pub label: String,
    /// Fill color
    pub fill: String,
    /// Cluster tag and originating activity
    #[serde(default)]
    pub data: RenderNodeData,
    /// Cluster classification tag, used by the canvas to group nodes
    #[serde(rename = "type")]
    pub node_type: String,
}

///
/// Auxiliary data attached to a [`RenderNode`]
///
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RenderNodeData {
    /// Cluster classification tag
    #[serde(rename = "type", default)]
    pub node_type: String,
    /// The activity this node was created from
    #[serde(default)]
    pub activity: String,
}

///
/// A render-ready graph edge
///
/// `source`/`target` reference [`RenderNode`] ids of the same pass; the edge
/// id is derived as `<source>-<target>`, so at most one rendered edge exists
/// per ordered node pair.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderEdge {
    /// Synthetic id of the source node
    pub source: String,
    /// Synthetic id of the target node
    pub target: String,
    /// Derived edge id
    pub id: String,
    /// Stringified edge cost
    pub label: String,
    /// Fill color
    pub fill: String,
}

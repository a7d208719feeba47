#![warn(
    clippy::doc_markdown,
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs
)]

#![doc = include_str!("../README.md")]

///
/// Directly-follows graph as delivered by the analysis backend
///
pub mod dfg {
    /// [`DirectlyFollowsGraph`] wire struct and node/edge records
    pub mod dfg_struct;

    #[doc(inline)]
    pub use dfg_struct::DirectlyFollowsGraph;
}

///
/// Object-centric process trees (OCPT)
///
pub mod ocpt {
    /// [`OCPTNode`] wire struct and sub-structs
    pub mod ocpt_struct;

    #[doc(inline)]
    pub use ocpt_struct::OCPTNode;
}

///
/// Cut suggestions and edge-modification costs
///
pub mod cut {
    /// Aggregation of added/removed edge costs and per-cut edge tables
    pub mod cost;
    /// [`CutSuggestion`] wire struct and sub-structs
    pub mod cut_struct;

    #[doc(inline)]
    pub use cut_struct::CutSuggestion;
}

///
/// Render-ready graph records for a cut suggestion over a DFG
///
pub mod render_graph {
    /// Coloring of DFG nodes by start/end activity membership
    pub mod activity_coloring;
    /// Transformation of a [`CutSuggestion`](crate::cut::CutSuggestion) + DFG into render records
    pub mod cut_graph;
    /// [`RenderNode`]/[`RenderEdge`] structs and fill colors
    pub mod render_struct;
    /// Filtering of malformed render records before rendering
    pub mod validation;

    #[doc(inline)]
    pub use render_struct::{RenderEdge, RenderNode};
}

///
/// OCPT layout and interactive drag propagation
///
pub mod tree_layout {
    /// Propagation of node moves to entire subtrees
    pub mod drag;
    /// Recursive OCPT layout into positioned nodes and edges
    pub mod layout_engine;
    /// [`LayoutNode`]/[`LayoutEdge`]/[`NodeHierarchy`] structs
    pub mod layout_struct;

    #[doc(inline)]
    pub use layout_struct::{LayoutEdge, LayoutNode, NodeHierarchy, Position};
}

///
/// Analysis backend exchange: snapshot payloads and the cut-selection round-trip
///
pub mod backend {
    /// Blocking HTTP client for the analysis backend
    ///
    /// __Requires the `backend-client` feature to be enabled__
    #[cfg(feature = "backend-client")]
    pub mod client;
    /// [`AnalysisSnapshot`](payload::AnalysisSnapshot) and request wire structs
    pub mod payload;
}

/// Util module with smaller helper functions
pub mod utils;

#[doc(inline)]
pub use backend::payload::AnalysisSnapshot;

#[doc(inline)]
pub use cut::cost::aggregate_edge_costs;

#[doc(inline)]
pub use cut::cut_struct::CutSuggestion;

#[doc(inline)]
pub use dfg::dfg_struct::DirectlyFollowsGraph;

#[doc(inline)]
pub use render_graph::activity_coloring::color_by_activity_role;

#[doc(inline)]
pub use render_graph::cut_graph::transform_cut;

#[doc(inline)]
pub use render_graph::validation::validate_render_records;

#[doc(inline)]
pub use tree_layout::drag::apply_node_changes;

#[doc(inline)]
pub use tree_layout::layout_engine::layout_process_tree;

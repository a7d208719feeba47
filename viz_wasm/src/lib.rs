mod utils;

use process_viz::backend::payload::AnalysisSnapshot;
use process_viz::cut::cost::{aggregate_edge_costs, CostEdge};
use process_viz::cut::cut_struct::CutSuggestion;
use process_viz::dfg::dfg_struct::{DfgNode, DirectlyFollowsGraph};
use process_viz::ocpt::ocpt_struct::OCPTNode;
use process_viz::render_graph::activity_coloring::color_by_activity_role;
use process_viz::render_graph::cut_graph::transform_cut;
use process_viz::render_graph::validation::validate_render_records;
use process_viz::tree_layout::drag::{apply_node_changes, NodeChange};
use process_viz::tree_layout::layout_engine::layout_process_tree;
use process_viz::tree_layout::layout_struct::{LayoutNode, NodeHierarchy};
use serde_json::Value;
use utils::set_panic_hook;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    // Use `js_namespace` here to bind `console.log(..)` instead of just
    // `log(..)`
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Parse an analysis snapshot from a JSON byte slice and hand it back as a
/// JS object, with absent collections filled in as empty ones
#[wasm_bindgen]
pub fn wasm_parse_snapshot(json_data: &[u8]) -> Result<JsValue, JsValue> {
    set_panic_hook();
    let snapshot =
        AnalysisSnapshot::from_json_slice(json_data).map_err(|e| JsValue::from(e.to_string()))?;
    console_log!(
        "Got snapshot: {} nodes, {} cuts",
        snapshot.dfg.nodes.len(),
        snapshot.cut_suggestions_list.cuts.len()
    );
    Ok(serde_wasm_bindgen::to_value(&snapshot)?)
}

/// Transform a cut suggestion plus the current DFG into render-ready node and
/// edge records
#[wasm_bindgen]
pub fn wasm_transform_cut_graph(cut: JsValue, dfg: JsValue) -> Result<JsValue, JsValue> {
    set_panic_hook();
    let cut: CutSuggestion = serde_wasm_bindgen::from_value(cut)?;
    let dfg: DirectlyFollowsGraph = serde_wasm_bindgen::from_value(dfg)?;
    Ok(serde_wasm_bindgen::to_value(&transform_cut(&cut, &dfg))?)
}

/// Filter raw render records down to the well-formed, cross-consistent subset
#[wasm_bindgen]
pub fn wasm_validate_render_records(nodes: JsValue, edges: JsValue) -> Result<JsValue, JsValue> {
    set_panic_hook();
    let nodes: Option<Vec<Value>> = serde_wasm_bindgen::from_value(nodes)?;
    let edges: Option<Vec<Value>> = serde_wasm_bindgen::from_value(edges)?;
    let validated = validate_render_records(nodes.as_deref(), edges.as_deref());
    Ok(serde_wasm_bindgen::to_value(&validated)?)
}

/// Recolor DFG nodes by their start/end activity membership
#[wasm_bindgen]
pub fn wasm_color_activity_nodes(
    nodes: JsValue,
    start_activities: JsValue,
    end_activities: JsValue,
) -> Result<JsValue, JsValue> {
    set_panic_hook();
    let nodes: Vec<DfgNode> = serde_wasm_bindgen::from_value(nodes)?;
    let start_activities: Vec<String> = serde_wasm_bindgen::from_value(start_activities)?;
    let end_activities: Vec<String> = serde_wasm_bindgen::from_value(end_activities)?;
    let colored = color_by_activity_role(&nodes, &start_activities, &end_activities);
    Ok(serde_wasm_bindgen::to_value(&colored)?)
}

/// Lay out an object-centric process tree into positioned nodes, edges and a
/// hierarchy map
#[wasm_bindgen]
pub fn wasm_layout_process_tree(tree: JsValue) -> Result<JsValue, JsValue> {
    set_panic_hook();
    let tree: Vec<OCPTNode> = serde_wasm_bindgen::from_value(tree)?;
    let layout = layout_process_tree(&tree).map_err(|e| JsValue::from(e.to_string()))?;
    Ok(serde_wasm_bindgen::to_value(&layout)?)
}

/// Apply a batch of node changes, shifting each moved node's subtree along
/// with it
#[wasm_bindgen]
pub fn wasm_apply_node_changes(
    nodes: JsValue,
    hierarchy: JsValue,
    changes: JsValue,
) -> Result<JsValue, JsValue> {
    set_panic_hook();
    let nodes: Vec<LayoutNode> = serde_wasm_bindgen::from_value(nodes)?;
    let hierarchy: NodeHierarchy = serde_wasm_bindgen::from_value(hierarchy)?;
    let changes: Vec<NodeChange> = serde_wasm_bindgen::from_value(changes)?;
    let updated = apply_node_changes(&nodes, &hierarchy, &changes);
    Ok(serde_wasm_bindgen::to_value(&updated)?)
}

/// Sum the costs of removed and added edge lists
#[wasm_bindgen]
pub fn wasm_aggregate_edge_costs(removed: JsValue, added: JsValue) -> Result<JsValue, JsValue> {
    set_panic_hook();
    let removed: Vec<CostEdge> = serde_wasm_bindgen::from_value(removed)?;
    let added: Vec<CostEdge> = serde_wasm_bindgen::from_value(added)?;
    let totals = aggregate_edge_costs(&removed, &added);
    Ok(serde_wasm_bindgen::to_value(&totals)?)
}

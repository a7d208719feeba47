use crate::render_graph::render_struct::{RenderEdge, RenderNode, RenderNodeData};
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use tracing::warn;

///
/// The outcome of filtering raw render records
///
/// Holds only well-formed, cross-consistent records plus the number of
/// records that were dropped, so callers can surface that filtering removed
/// anything.
///
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ValidatedRenderGraph {
    /// Accepted nodes
    pub nodes: Vec<RenderNode>,
    /// Accepted edges; endpoints reference accepted node ids only
    pub edges: Vec<RenderEdge>,
    /// Number of node records dropped
    pub dropped_nodes: usize,
    /// Number of edge records dropped
    pub dropped_edges: usize,
}

impl ValidatedRenderGraph {
    /// Returns `true` if filtering removed at least one record.
    pub fn dropped_any(&self) -> bool {
        self.dropped_nodes > 0 || self.dropped_edges > 0
    }
}

/// Filters raw render records down to the well-formed, cross-consistent
/// subset.
///
/// A node is kept iff `id`, `label`, `fill`, and `type` are all present text
/// values. An edge is kept iff `source`, `target`, `id`, `label`, and `fill`
/// are all present text values and both endpoints match the id of an
/// already-accepted node. Malformed records are dropped silently (a warning
/// is logged); `None` input behaves as an empty list. Never fails.
pub fn validate_render_records(
    nodes: Option<&[Value]>,
    edges: Option<&[Value]>,
) -> ValidatedRenderGraph {
    let mut result = ValidatedRenderGraph::default();
    let mut dropped_ids: Vec<&str> = Vec::new();

    for record in nodes.unwrap_or_default() {
        match parse_node(record) {
            Some(node) => result.nodes.push(node),
            None => {
                result.dropped_nodes += 1;
                dropped_ids.push(text_field(record, "id").unwrap_or("<no id>"));
            }
        }
    }

    let node_ids: HashSet<&str> = result.nodes.iter().map(|n| n.id.as_str()).collect();
    for record in edges.unwrap_or_default() {
        match parse_edge(record, &node_ids) {
            Some(edge) => result.edges.push(edge),
            None => {
                result.dropped_edges += 1;
                dropped_ids.push(text_field(record, "id").unwrap_or("<no id>"));
            }
        }
    }

    if result.dropped_any() {
        warn!(
            dropped_nodes = result.dropped_nodes,
            dropped_edges = result.dropped_edges,
            ids = %dropped_ids.iter().join(", "),
            "dropped malformed render records before rendering"
        );
    }

    result
}

fn text_field<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

fn parse_node(record: &Value) -> Option<RenderNode> {
    let id = text_field(record, "id")?;
    let label = text_field(record, "label")?;
    let fill = text_field(record, "fill")?;
    let node_type = text_field(record, "type")?;

    let data = record
        .get("data")
        .and_then(|data| serde_json::from_value::<RenderNodeData>(data.clone()).ok())
        .unwrap_or_default();

    Some(RenderNode {
        id: id.to_string(),
        label: label.to_string(),
        fill: fill.to_string(),
        data,
        node_type: node_type.to_string(),
    })
}

fn parse_edge(record: &Value, node_ids: &HashSet<&str>) -> Option<RenderEdge> {
    let source = text_field(record, "source")?;
    let target = text_field(record, "target")?;
    let id = text_field(record, "id")?;
    let label = text_field(record, "label")?;
    let fill = text_field(record, "fill")?;

    if !node_ids.contains(source) || !node_ids.contains(target) {
        return None;
    }

    Some(RenderEdge {
        source: source.to_string(),
        target: target.to_string(),
        id: id.to_string(),
        label: label.to_string(),
        fill: fill.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: Value) -> Vec<Value> {
        value.as_array().unwrap().clone()
    }

    #[test]
    fn well_formed_records_pass_through() {
        let nodes = records(json!([
            { "id": "n-0", "label": "Set 1 register", "fill": "#166534", "type": "Set 1" },
            { "id": "n-1", "label": "Set 2 ship", "fill": "#075985", "type": "Set 2" }
        ]));
        let edges = records(json!([
            { "source": "n-0", "target": "n-1", "id": "n-0-n-1", "label": "4", "fill": "#6b7280" }
        ]));

        let validated = validate_render_records(Some(&nodes), Some(&edges));
        assert_eq!(validated.nodes.len(), 2);
        assert_eq!(validated.edges.len(), 1);
        assert!(!validated.dropped_any());
    }

    #[test]
    fn nodes_with_missing_or_non_text_fields_are_dropped() {
        let nodes = records(json!([
            { "id": "n-0", "label": "ok", "fill": "#166534", "type": "Set 1" },
            { "id": "n-1", "label": "no fill", "type": "Set 1" },
            { "id": "n-2", "label": "numeric type", "fill": "#075985", "type": 7 },
            { "id": 3, "label": "numeric id", "fill": "#075985", "type": "Set 2" }
        ]));

        let validated = validate_render_records(Some(&nodes), None);
        assert_eq!(validated.nodes.len(), 1);
        assert_eq!(validated.nodes[0].id, "n-0");
        assert_eq!(validated.dropped_nodes, 3);
    }

    #[test]
    fn edges_must_reference_accepted_nodes() {
        let nodes = records(json!([
            { "id": "n-0", "label": "a", "fill": "#166534", "type": "Set 1" },
            { "id": "n-1", "label": "b", "fill": "#075985", "type": 7 }
        ]));
        let edges = records(json!([
            { "source": "n-0", "target": "n-0", "id": "n-0-n-0", "label": "1", "fill": "#6b7280" },
            { "source": "n-0", "target": "n-1", "id": "n-0-n-1", "label": "2", "fill": "#6b7280" },
            { "source": "n-0", "target": "n-9", "id": "n-0-n-9", "label": "3", "fill": "#6b7280" }
        ]));

        // n-1 is itself invalid, so the edge pointing at it must go too.
        let validated = validate_render_records(Some(&nodes), Some(&edges));
        assert_eq!(validated.edges.len(), 1);
        assert_eq!(validated.edges[0].id, "n-0-n-0");
        assert_eq!(validated.dropped_edges, 2);
        assert!(validated.dropped_any());
    }

    #[test]
    fn absent_input_yields_empty_output() {
        let validated = validate_render_records(None, None);
        assert!(validated.nodes.is_empty());
        assert!(validated.edges.is_empty());
        assert!(!validated.dropped_any());
    }

    #[test]
    fn transformer_output_validates_cleanly() {
        use crate::render_graph::cut_graph::transform_cut;

        let cut = serde_json::from_str(
            r#"{
                "cut_type": "sequence",
                "set1": ["register", "check"],
                "set2": ["ship"],
                "edges_to_be_added": [["register", "ship"]],
                "edges_to_be_removed": [["ship", "register"]],
                "cost_to_add_edge": 2,
                "total_cost": 5
            }"#,
        )
        .unwrap();
        let dfg = serde_json::from_str(
            r#"{
                "nodes": [],
                "edges": [
                    { "source": "register", "target": "check", "cost": 4 },
                    { "source": "ship", "target": "register", "cost": 3 }
                ]
            }"#,
        )
        .unwrap();
        let graph = transform_cut(&cut, &dfg);

        let nodes: Vec<Value> = graph
            .nodes
            .iter()
            .map(|n| serde_json::to_value(n).unwrap())
            .collect();
        let edges: Vec<Value> = graph
            .edges
            .iter()
            .map(|e| serde_json::to_value(e).unwrap())
            .collect();

        let validated = validate_render_records(Some(&nodes), Some(&edges));
        assert_eq!(validated.nodes, graph.nodes);
        assert_eq!(validated.edges, graph.edges);
        assert!(!validated.dropped_any());
    }
}

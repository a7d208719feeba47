use crate::cut::cut_struct::CutSuggestion;
use crate::dfg::dfg_struct::{edge_key, DirectlyFollowsGraph};
use crate::render_graph::render_struct::{
    RenderEdge, RenderNode, RenderNodeData, EDGE_ADD_FILL, EDGE_DEFAULT_FILL, EDGE_REMOVE_FILL,
    SET1_CLUSTER, SET1_FILL, SET2_CLUSTER, SET2_FILL,
};
use crate::utils::{finite_or_zero, format_cost};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

///
/// The render records produced for one cut suggestion over a DFG
///
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CutGraph {
    /// One node per activity of the cut, first side before second side
    pub nodes: Vec<RenderNode>,
    /// Colored edges: kept DFG edges plus genuinely new insertions
    pub edges: Vec<RenderEdge>,
}

/// Transforms a cut suggestion plus DFG into colored render records.
///
/// Every activity of `set1` (fully, in order) and then `set2` becomes one
/// [`RenderNode`] with a fresh `n-<counter>` id; empty activity values are
/// skipped. DFG edges whose endpoints both map to a created node are emitted
/// with a neutral fill and their own cost, overridden to green with the cut's
/// uniform add cost when scheduled for insertion, or to red (original cost)
/// when scheduled for removal. Insertions with no counterpart in the DFG are
/// appended as additional green edges. If the DFG carries no edges at all,
/// the result is empty.
pub fn transform_cut(cut: &CutSuggestion, dfg: &DirectlyFollowsGraph) -> CutGraph {
    if dfg.edges.is_empty() {
        return CutGraph::default();
    }

    let mut nodes = Vec::new();
    let mut node_id_by_activity: HashMap<&str, String> = HashMap::new();
    let mut node_counter = 0usize;

    let sides = [
        (&cut.set1, SET1_CLUSTER, SET1_FILL),
        (&cut.set2, SET2_CLUSTER, SET2_FILL),
    ];
    for (activities, cluster, fill) in sides {
        for activity in activities {
            if activity.is_empty() {
                continue;
            }
            let id = format!("n-{node_counter}");
            node_counter += 1;
            node_id_by_activity.insert(activity.as_str(), id.clone());
            nodes.push(RenderNode {
                id,
                label: format!("{cluster} {activity}"),
                fill: fill.to_string(),
                data: RenderNodeData {
                    node_type: cluster.to_string(),
                    activity: activity.clone(),
                },
                node_type: cluster.to_string(),
            });
        }
    }

    let dfg_edge_keys: HashSet<String> = dfg
        .edges
        .iter()
        .map(|e| edge_key(&e.source, &e.target))
        .collect();
    let keys_to_add: HashSet<String> = cut
        .edges_to_be_added
        .iter()
        .map(|(source, target)| edge_key(source, target))
        .collect();
    let keys_to_remove: HashSet<String> = cut
        .edges_to_be_removed
        .iter()
        .map(|(source, target)| edge_key(source, target))
        .collect();

    let add_cost = finite_or_zero(cut.cost_to_add_edge);
    let mut edges = Vec::new();

    for edge in &dfg.edges {
        let (Some(source_id), Some(target_id)) = (
            node_id_by_activity.get(edge.source.as_str()),
            node_id_by_activity.get(edge.target.as_str()),
        ) else {
            // Endpoint outside the cut's activity sets: not rendered.
            continue;
        };

        let key = edge_key(&edge.source, &edge.target);
        let (fill, cost) = if keys_to_add.contains(&key) {
            (EDGE_ADD_FILL, add_cost)
        } else if keys_to_remove.contains(&key) {
            (EDGE_REMOVE_FILL, finite_or_zero(edge.cost))
        } else {
            (EDGE_DEFAULT_FILL, finite_or_zero(edge.cost))
        };

        edges.push(RenderEdge {
            source: source_id.clone(),
            target: target_id.clone(),
            id: format!("{source_id}-{target_id}"),
            label: format_cost(cost),
            fill: fill.to_string(),
        });
    }

    // Insertions with no existing DFG edge get their own green edge; existing
    // ones were already recolored above.
    for (source, target) in &cut.edges_to_be_added {
        if dfg_edge_keys.contains(&edge_key(source, target)) {
            continue;
        }
        let (Some(source_id), Some(target_id)) = (
            node_id_by_activity.get(source.as_str()),
            node_id_by_activity.get(target.as_str()),
        ) else {
            continue;
        };
        edges.push(RenderEdge {
            source: source_id.clone(),
            target: target_id.clone(),
            id: format!("{source_id}-{target_id}"),
            label: format_cost(add_cost),
            fill: EDGE_ADD_FILL.to_string(),
        });
    }

    CutGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub const SAMPLE_JSON_DFG: &str = r#"
{
    "nodes": [
        { "id": "0", "label": "register" },
        { "id": "1", "label": "check" },
        { "id": "2", "label": "ship" },
        { "id": "3", "label": "archive" }
    ],
    "edges": [
        { "source": "register", "target": "check", "cost": 4 },
        { "source": "check", "target": "ship", "cost": 9 },
        { "source": "ship", "target": "register", "cost": 3 },
        { "source": "ship", "target": "archive", "cost": 1 }
    ]
}"#;

    pub const SAMPLE_JSON_CUT: &str = r#"
{
    "cut_type": "sequence",
    "set1": ["register", "check"],
    "set2": ["ship"],
    "edges_to_be_added": [["register", "ship"]],
    "edges_to_be_removed": [["ship", "register"]],
    "cost_to_add_edge": 2,
    "total_cost": 5
}"#;

    fn sample_input() -> (CutSuggestion, DirectlyFollowsGraph) {
        (
            serde_json::from_str(SAMPLE_JSON_CUT).unwrap(),
            serde_json::from_str(SAMPLE_JSON_DFG).unwrap(),
        )
    }

    #[test]
    fn nodes_are_numbered_set1_before_set2() {
        let (cut, dfg) = sample_input();
        let graph = transform_cut(&cut, &dfg);

        let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n-0", "n-1", "n-2"]);
        assert_eq!(graph.nodes[0].label, "Set 1 register");
        assert_eq!(graph.nodes[0].node_type, SET1_CLUSTER);
        assert_eq!(graph.nodes[0].fill, SET1_FILL);
        assert_eq!(graph.nodes[2].label, "Set 2 ship");
        assert_eq!(graph.nodes[2].node_type, SET2_CLUSTER);
        assert_eq!(graph.nodes[2].fill, SET2_FILL);
        assert_eq!(graph.nodes[2].data.activity, "ship");
    }

    #[test]
    fn edges_are_colored_by_modification() {
        let (cut, dfg) = sample_input();
        let graph = transform_cut(&cut, &dfg);

        // ship->archive is dropped (archive is outside the cut); the three
        // remaining DFG edges are emitted, plus one genuinely new insertion.
        assert_eq!(graph.edges.len(), 4);

        let by_id: std::collections::HashMap<&str, &RenderEdge> =
            graph.edges.iter().map(|e| (e.id.as_str(), e)).collect();

        let kept = by_id["n-0-n-1"]; // register->check
        assert_eq!(kept.fill, EDGE_DEFAULT_FILL);
        assert_eq!(kept.label, "4");

        let removed = by_id["n-2-n-0"]; // ship->register
        assert_eq!(removed.fill, EDGE_REMOVE_FILL);
        assert_eq!(removed.label, "3");

        let added = by_id["n-0-n-2"]; // register->ship, absent from the DFG
        assert_eq!(added.fill, EDGE_ADD_FILL);
        assert_eq!(added.label, "2");
    }

    #[test]
    fn insertions_already_in_the_dfg_are_not_emitted_twice() {
        let (mut cut, dfg) = sample_input();
        // check->ship exists in the DFG: recolor it instead of appending.
        cut.edges_to_be_added = vec![("check".into(), "ship".into())];
        let graph = transform_cut(&cut, &dfg);

        let matching: Vec<&RenderEdge> =
            graph.edges.iter().filter(|e| e.id == "n-1-n-2").collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].fill, EDGE_ADD_FILL);
        assert_eq!(matching[0].label, "2");
    }

    #[test]
    fn every_edge_references_an_emitted_node() {
        let (cut, dfg) = sample_input();
        let graph = transform_cut(&cut, &dfg);

        let node_ids: std::collections::HashSet<&str> =
            graph.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &graph.edges {
            assert!(node_ids.contains(edge.source.as_str()));
            assert!(node_ids.contains(edge.target.as_str()));
        }
    }

    #[test]
    fn empty_activities_are_skipped() {
        let (mut cut, dfg) = sample_input();
        cut.set1 = vec!["register".into(), String::new(), "check".into()];
        let graph = transform_cut(&cut, &dfg);

        assert_eq!(graph.nodes.len(), 3);
        assert!(graph.nodes.iter().all(|n| !n.data.activity.is_empty()));
        assert!(graph.nodes.len() <= cut.set1.len() + cut.set2.len());
    }

    #[test]
    fn transformation_is_idempotent() {
        let (cut, dfg) = sample_input();
        assert_eq!(transform_cut(&cut, &dfg), transform_cut(&cut, &dfg));
    }

    #[test]
    fn dfg_without_edges_produces_empty_output() {
        let (cut, _) = sample_input();
        let dfg: DirectlyFollowsGraph = serde_json::from_str(r#"{ "nodes": [] }"#).unwrap();
        assert_eq!(transform_cut(&cut, &dfg), CutGraph::default());
    }

    #[test]
    fn non_finite_costs_render_as_zero() {
        let (mut cut, mut dfg) = sample_input();
        dfg.edges[0].cost = f64::NAN;
        cut.cost_to_add_edge = f64::INFINITY;
        let graph = transform_cut(&cut, &dfg);

        assert!(graph.edges.iter().all(|e| !e.label.contains("NaN")));
        let by_id: std::collections::HashMap<&str, &RenderEdge> =
            graph.edges.iter().map(|e| (e.id.as_str(), e)).collect();
        assert_eq!(by_id["n-0-n-1"].label, "0");
        assert_eq!(by_id["n-0-n-2"].label, "0");
    }
}

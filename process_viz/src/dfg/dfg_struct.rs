use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Activity in a directly-follows graph.
pub type Activity = String;

/// A directly-follows graph as delivered by the analysis backend.
///
/// The backend serializes `nodes` and `edges` either as JSON arrays or as
/// JSON objects keyed by an internal id. Both shapes are normalized into
/// ordered sequences at the deserialization boundary (object values are taken
/// in enumeration order); any other shape is a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DirectlyFollowsGraph {
    /// Activity-bearing node records
    #[serde(default, deserialize_with = "keyed_or_listed")]
    pub nodes: Vec<DfgNode>,
    /// Directly-follows edges annotated with a cost
    #[serde(default, deserialize_with = "keyed_or_listed")]
    pub edges: Vec<DfgEdge>,
}

impl DirectlyFollowsGraph {
    /// Returns the cost of the edge from `source` to `target`, if present.
    ///
    /// Lookup is by activity value, matching the `source`/`target` fields of
    /// the edge records exactly.
    pub fn edge_cost(&self, source: &str, target: &str) -> Option<f64> {
        self.edges
            .iter()
            .find(|e| e.source == source && e.target == target)
            .map(|e| e.cost)
    }
}

/// A node record of a [`DirectlyFollowsGraph`].
///
/// Edge endpoints reference nodes by their `label`, not their `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DfgNode {
    /// Backend-assigned node id
    pub id: String,
    /// Activity value displayed on the node
    pub label: Activity,
    /// Fill color, assigned client-side by activity classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Optional cluster classification tag
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
}

/// A directed edge of a [`DirectlyFollowsGraph`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DfgEdge {
    /// Source activity
    pub source: Activity,
    /// Target activity
    pub target: Activity,
    /// Edge cost (observed transition weight)
    #[serde(default)]
    pub cost: f64,
}

/// Key under which an ordered activity pair is looked up in edge sets.
pub fn edge_key(source: &str, target: &str) -> String {
    format!("{source}-{target}")
}

/// Accepts either a JSON array or a JSON object (values in enumeration order).
fn keyed_or_listed<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum KeyedOrListed<T> {
        Listed(Vec<T>),
        Keyed(IndexMap<String, T>),
    }

    Ok(match KeyedOrListed::deserialize(deserializer)? {
        KeyedOrListed::Listed(records) => records,
        KeyedOrListed::Keyed(records) => records.into_values().collect(),
    })
}

use crate::cut::cut_struct::CutSuggestion;
use crate::dfg::dfg_struct::{Activity, DirectlyFollowsGraph};
use crate::utils::finite_or_zero;
use serde::{Deserialize, Serialize};

/// A `(source, target, cost)` edge-modification tuple as delivered by the
/// backend in `total_edges_added`/`total_edges_removed`.
pub type CostEdge = (Activity, Activity, f64);

///
/// Summed costs of the removed and added edge lists
///
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct EdgeCostTotals {
    /// Sum over the removed-edge list
    pub removed: f64,
    /// Sum over the added-edge list
    pub added: f64,
    /// Grand total of both lists
    pub total: f64,
}

/// Sums the costs of the removed and added edge lists independently and
/// reports their grand total. Empty lists contribute zero; non-finite costs
/// are coerced to zero.
pub fn aggregate_edge_costs(removed: &[CostEdge], added: &[CostEdge]) -> EdgeCostTotals {
    let removed: f64 = removed.iter().map(|(_, _, cost)| finite_or_zero(*cost)).sum();
    let added: f64 = added.iter().map(|(_, _, cost)| finite_or_zero(*cost)).sum();
    EdgeCostTotals {
        removed,
        added,
        total: removed + added,
    }
}

/// Returns `true` if at least one edge list holds an entry. When both are
/// empty the modified-edges summary is not rendered at all.
pub fn has_edge_modifications(removed: &[CostEdge], added: &[CostEdge]) -> bool {
    !removed.is_empty() || !added.is_empty()
}

///
/// One row of the per-cut edge tables shown next to the cut graph
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EdgeRow {
    /// Source activity
    pub source: Activity,
    /// Target activity
    pub target: Activity,
    /// Cost shown for this modification
    pub cost: f64,
}

///
/// The "edges to be added" and "edges to be removed" tables of one cut
///
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CutEdgeTables {
    /// Rows for edges the cut would insert, priced at the uniform add cost
    pub to_add: Vec<EdgeRow>,
    /// Rows for edges the cut would remove, priced at their current DFG cost
    pub to_remove: Vec<EdgeRow>,
}

/// Materializes the edge tables of a cut suggestion.
///
/// Added edges carry the cut's uniform `cost_to_add_edge`; removed edges carry
/// the cost of the corresponding DFG edge, or 0 when the DFG has no such edge.
pub fn cut_edge_tables(cut: &CutSuggestion, dfg: &DirectlyFollowsGraph) -> CutEdgeTables {
    let add_cost = finite_or_zero(cut.cost_to_add_edge);
    CutEdgeTables {
        to_add: cut
            .edges_to_be_added
            .iter()
            .map(|(source, target)| EdgeRow {
                source: source.clone(),
                target: target.clone(),
                cost: add_cost,
            })
            .collect(),
        to_remove: cut
            .edges_to_be_removed
            .iter()
            .map(|(source, target)| EdgeRow {
                source: source.clone(),
                target: target.clone(),
                cost: finite_or_zero(dfg.edge_cost(source, target).unwrap_or(0.0)),
            })
            .collect(),
    }
}

use crate::dfg::dfg_struct::Activity;
use serde::{Deserialize, Serialize};

/// An ordered `(source, target)` activity pair of an edge modification.
pub type ActivityPair = (Activity, Activity);

///
/// A candidate binary partition of the DFG activities, proposed by the
/// analysis backend together with the edge modifications needed to make the
/// partition exact and their costs.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CutSuggestion {
    /// Backend-defined cut operator tag (sequence, parallel, exclusive, ...)
    pub cut_type: String,
    /// Activities on the first side of the cut
    #[serde(default)]
    pub set1: Vec<Activity>,
    /// Activities on the second side of the cut
    #[serde(default)]
    pub set2: Vec<Activity>,
    /// Edges that would be inserted to perform this cut
    #[serde(default)]
    pub edges_to_be_added: Vec<ActivityPair>,
    /// Edges that would be removed to perform this cut
    #[serde(default)]
    pub edges_to_be_removed: Vec<ActivityPair>,
    /// Uniform cost assigned to any inserted edge
    #[serde(default)]
    pub cost_to_add_edge: f64,
    /// Total cost of performing this cut
    #[serde(default)]
    pub total_cost: f64,
}

impl CutSuggestion {
    /// The total cost as shown in the suggestion list, with a placeholder for
    /// non-finite values.
    pub fn display_total_cost(&self) -> String {
        crate::utils::display_cost_or_placeholder(self.total_cost)
    }
}

///
/// The list of cut suggestions delivered with an analysis snapshot
///
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CutSuggestionsList {
    /// Candidate cuts in backend ranking order
    #[serde(default)]
    pub cuts: Vec<CutSuggestion>,
}

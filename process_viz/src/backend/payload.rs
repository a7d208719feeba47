use crate::cut::cost::CostEdge;
use crate::cut::cut_struct::{CutSuggestion, CutSuggestionsList};
use crate::dfg::dfg_struct::DirectlyFollowsGraph;
use crate::ocpt::ocpt_struct::OCPTNode;
use serde::{Deserialize, Serialize};

///
/// The full graph/tree state delivered by the analysis backend
///
/// Returned both by the initial `GET` and by the cut-selection `POST`; a new
/// snapshot always replaces the previous one wholesale. Absent collections
/// decode to empty ones.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisSnapshot {
    /// Current directly-follows graph
    #[serde(default)]
    pub dfg: DirectlyFollowsGraph,
    /// Start activities of the current DFG
    #[serde(default)]
    pub start_activities: Vec<String>,
    /// End activities of the current DFG
    #[serde(default)]
    pub end_activities: Vec<String>,
    /// Candidate cuts proposed for the current DFG
    #[serde(default)]
    pub cut_suggestions_list: CutSuggestionsList,
    /// Process tree discovered so far (at most one root)
    #[serde(rename = "OCPT", default)]
    pub ocpt: Vec<OCPTNode>,
    /// Edges removed across all performed cuts, with their costs
    #[serde(default)]
    pub total_edges_removed: Vec<CostEdge>,
    /// Edges added across all performed cuts, with their costs
    #[serde(default)]
    pub total_edges_added: Vec<CostEdge>,
    /// Whether the DFG decomposes without further edge modifications
    #[serde(default = "default_true")]
    pub is_perfectly_cut: bool,
}

impl Default for AnalysisSnapshot {
    fn default() -> Self {
        Self {
            dfg: DirectlyFollowsGraph::default(),
            start_activities: Vec::new(),
            end_activities: Vec::new(),
            cut_suggestions_list: CutSuggestionsList::default(),
            ocpt: Vec::new(),
            total_edges_removed: Vec::new(),
            total_edges_added: Vec::new(),
            is_perfectly_cut: true,
        }
    }
}

impl AnalysisSnapshot {
    /// Parses a snapshot from a JSON byte slice.
    pub fn from_json_slice(slice: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(slice)
    }

    /// Builds the request body that reports `cut` as the operator's choice.
    pub fn cut_selected_request(&self, cut: &CutSuggestion) -> CutSelectedRequest {
        CutSelectedRequest {
            dfg: self.dfg.clone(),
            ocpt: self.ocpt.clone(),
            start_activities: self.start_activities.clone(),
            end_activities: self.end_activities.clone(),
            is_perfectly_cut: self.is_perfectly_cut,
            cut_suggestions_list: self.cut_suggestions_list.clone(),
            cut_selected: cut.clone(),
            total_edges_removed: self.total_edges_removed.clone(),
            total_edges_added: self.total_edges_added.clone(),
        }
    }
}

fn default_true() -> bool {
    true
}

///
/// Body of the `POST /cut-selected` request: the current client state plus
/// the chosen cut
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CutSelectedRequest {
    /// Current directly-follows graph
    pub dfg: DirectlyFollowsGraph,
    /// Current process tree
    pub ocpt: Vec<OCPTNode>,
    /// Current start activities
    pub start_activities: Vec<String>,
    /// Current end activities
    pub end_activities: Vec<String>,
    /// Current perfectly-cut flag
    pub is_perfectly_cut: bool,
    /// The cut suggestions the choice was made from
    pub cut_suggestions_list: CutSuggestionsList,
    /// The cut the operator picked
    pub cut_selected: CutSuggestion,
    /// Edges removed so far
    pub total_edges_removed: Vec<CostEdge>,
    /// Edges added so far
    pub total_edges_added: Vec<CostEdge>,
}

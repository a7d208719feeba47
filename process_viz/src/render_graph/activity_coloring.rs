use crate::dfg::dfg_struct::DfgNode;

/// Fill color of nodes that are neither start nor end activities.
pub const ROLE_DEFAULT_FILL: &str = "#60a6bf";
/// Fill color of start activities.
pub const ROLE_START_FILL: &str = "#56db82";
/// Fill color of end activities.
pub const ROLE_END_FILL: &str = "#F44336";
/// Fill color of activities that are both start and end.
pub const ROLE_START_END_FILL: &str = "#FFC107";

/// Recolors DFG nodes by start/end activity membership.
///
/// Membership is decided by exact equality between a node's `label` and the
/// members of the activity collections. The input is left untouched; new node
/// records are returned.
pub fn color_by_activity_role(
    nodes: &[DfgNode],
    start_activities: &[String],
    end_activities: &[String],
) -> Vec<DfgNode> {
    nodes
        .iter()
        .map(|node| {
            let is_start = start_activities.iter().any(|a| *a == node.label);
            let is_end = end_activities.iter().any(|a| *a == node.label);

            let fill = if is_start && is_end {
                ROLE_START_END_FILL
            } else if is_start {
                ROLE_START_FILL
            } else if is_end {
                ROLE_END_FILL
            } else {
                ROLE_DEFAULT_FILL
            };

            DfgNode {
                fill: Some(fill.to_string()),
                ..node.clone()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(label: &str) -> DfgNode {
        DfgNode {
            id: label.to_string(),
            label: label.to_string(),
            fill: None,
            node_type: None,
        }
    }

    #[test]
    fn nodes_are_colored_by_membership() {
        let nodes = vec![node("register"), node("ship"), node("express"), node("idle")];
        let start = vec!["register".to_string(), "express".to_string()];
        let end = vec!["ship".to_string(), "express".to_string()];

        let colored = color_by_activity_role(&nodes, &start, &end);

        assert_eq!(colored[0].fill.as_deref(), Some(ROLE_START_FILL));
        assert_eq!(colored[1].fill.as_deref(), Some(ROLE_END_FILL));
        assert_eq!(colored[2].fill.as_deref(), Some(ROLE_START_END_FILL));
        assert_eq!(colored[3].fill.as_deref(), Some(ROLE_DEFAULT_FILL));
    }

    #[test]
    fn input_nodes_are_not_mutated() {
        let nodes = vec![node("register")];
        let _ = color_by_activity_role(&nodes, &["register".to_string()], &[]);
        assert_eq!(nodes[0].fill, None);
    }

    #[test]
    fn matching_is_by_exact_label() {
        let nodes = vec![node("Register")];
        let colored = color_by_activity_role(&nodes, &["register".to_string()], &[]);
        assert_eq!(colored[0].fill.as_deref(), Some(ROLE_DEFAULT_FILL));
    }
}

use serde::{Deserialize, Serialize};

///
/// Node in an object-centric process tree as delivered by the analysis backend
///
/// Either an operator with an ordered list of children, or an activity leaf.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum OCPTNode {
    /// Operator node of an object-centric process tree
    Operator(OCPTOperator),
    /// Activity leaf node of an object-centric process tree
    Leaf(OCPTLeaf),
}

impl OCPTNode {
    /// Returns the label shown for this node: the operator name for operator
    /// nodes, the activity value for leaves.
    pub fn display_label(&self) -> &str {
        match self {
            OCPTNode::Operator(op) => op.label.as_str(),
            OCPTNode::Leaf(leaf) => &leaf.activity,
        }
    }
}

///
/// Operator label enum for [`OCPTOperator`]
///
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OCPTOperatorLabel {
    /// Sequence operator
    Sequence,
    /// Concurrency operator
    Parallel,
    /// Exclusive choice operator
    Exclusive,
    /// Loop operator
    Redo,
    /// Any-order leaf collection, rendered collapsed into a single node
    Flower,
}

impl OCPTOperatorLabel {
    /// The wire/display spelling of the operator label.
    pub fn as_str(&self) -> &'static str {
        match self {
            OCPTOperatorLabel::Sequence => "sequence",
            OCPTOperatorLabel::Parallel => "parallel",
            OCPTOperatorLabel::Exclusive => "exclusive",
            OCPTOperatorLabel::Redo => "redo",
            OCPTOperatorLabel::Flower => "flower",
        }
    }
}

///
/// An operator node in an object-centric process tree
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OCPTOperator {
    /// The operator label
    pub label: OCPTOperatorLabel,
    /// The ordered children of the operator node
    #[serde(default)]
    pub children: Vec<OCPTNode>,
}

///
/// An activity leaf in an object-centric process tree
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OCPTLeaf {
    /// The activity value of the leaf
    pub activity: String,
    /// Object types the activity relates to
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ots: Vec<ObjectTypeTag>,
}

///
/// An object-type annotation of an [`OCPTLeaf`]
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectTypeTag {
    /// Object type name
    pub ot: String,
}

use super::field::{ObjectDescriptor, StateDescriptor};
use std::collections::BTreeMap;

/// Operator applied to a criteria group when the document omits one
pub const DEFAULT_OPERATOR: &str = "AND";

/// Remaining XML attributes of a criteria node (`negate`, `comment`, ...)
pub type NodeAttributes = BTreeMap<String, String>;

/// A dereferenced OVAL test: the check plus its resolved object and state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestResolution {
    pub check_type: String,
    pub check: String,
    pub object: ObjectDescriptor,
    pub state: StateDescriptor,
}

/// Boolean group (`<criteria>`) with its children in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaGroup {
    pub operator: String,
    pub attributes: NodeAttributes,
    pub children: Vec<CriteriaNode>,
}

impl CriteriaGroup {
    pub fn new(operator: String, attributes: NodeAttributes, children: Vec<CriteriaNode>) -> Self {
        Self {
            operator,
            attributes,
            children,
        }
    }

    /// Number of resolved tests reachable from this group
    pub fn leaf_count(&self) -> usize {
        self.children.iter().map(CriteriaNode::leaf_count).sum()
    }

    /// Maximum nesting depth, counting this group as 1
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(CriteriaNode::depth)
            .max()
            .unwrap_or(0)
    }
}

/// Node of a fully resolved criteria tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaNode {
    /// Nested `<criteria>`
    Group(CriteriaGroup),

    /// `<criterion>` whose `test_ref` was resolved
    Leaf {
        attributes: NodeAttributes,
        test: TestResolution,
    },

    /// `<extend_definition>` inlined with the referenced definition's criteria
    Extension {
        definition_ref: String,
        attributes: NodeAttributes,
        criteria: CriteriaGroup,
    },
}

impl CriteriaNode {
    pub fn leaf_count(&self) -> usize {
        match self {
            CriteriaNode::Group(group) => group.leaf_count(),
            CriteriaNode::Leaf { .. } => 1,
            CriteriaNode::Extension { criteria, .. } => criteria.leaf_count(),
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            CriteriaNode::Group(group) => group.depth(),
            CriteriaNode::Leaf { .. } => 0,
            CriteriaNode::Extension { criteria, .. } => 1 + criteria.depth(),
        }
    }

    pub fn as_test(&self) -> Option<&TestResolution> {
        match self {
            CriteriaNode::Leaf { test, .. } => Some(test),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&CriteriaGroup> {
        match self {
            CriteriaNode::Group(group) => Some(group),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(check_type: &str) -> CriteriaNode {
        CriteriaNode::Leaf {
            attributes: NodeAttributes::new(),
            test: TestResolution {
                check_type: check_type.to_string(),
                check: "ALL".to_string(),
                object: ObjectDescriptor::default(),
                state: StateDescriptor::default(),
            },
        }
    }

    #[test]
    fn test_group_counts_leaves_recursively() {
        let inner = CriteriaGroup::new(
            "OR".to_string(),
            NodeAttributes::new(),
            vec![leaf("rpminfo_test"), leaf("rpminfo_test")],
        );
        let root = CriteriaGroup::new(
            DEFAULT_OPERATOR.to_string(),
            NodeAttributes::new(),
            vec![leaf("uname_test"), CriteriaNode::Group(inner)],
        );

        assert_eq!(root.leaf_count(), 3);
        assert_eq!(root.depth(), 2);
    }

    #[test]
    fn test_extension_adds_a_level() {
        let extended = CriteriaGroup::new(
            "OR".to_string(),
            NodeAttributes::new(),
            vec![leaf("rpminfo_test")],
        );
        let root = CriteriaGroup::new(
            "AND".to_string(),
            NodeAttributes::new(),
            vec![CriteriaNode::Extension {
                definition_ref: "oval:t:def:base".to_string(),
                attributes: NodeAttributes::new(),
                criteria: extended,
            }],
        );

        assert_eq!(root.depth(), 3);
        assert_eq!(root.leaf_count(), 1);
    }

    #[test]
    fn test_empty_group_depth() {
        let group = CriteriaGroup::new("AND".to_string(), NodeAttributes::new(), vec![]);
        assert_eq!(group.depth(), 1);
        assert_eq!(group.leaf_count(), 0);
    }

    #[test]
    fn test_node_accessors() {
        let node = leaf("textfilecontent54_test");
        assert_eq!(
            node.as_test().map(|t| t.check_type.as_str()),
            Some("textfilecontent54_test")
        );
        assert!(node.as_group().is_none());
    }
}

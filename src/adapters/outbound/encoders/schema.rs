//! Output schema messages
//!
//! Protocol Buffers messages (proto3) consumed by downstream scanners. Field
//! tags are part of the wire contract and must never be renumbered. The same
//! structs serialize to the JSON projection with proto field names; absent
//! optionals and empty collections are omitted, as in canonical proto3 JSON.
//!
//! ```proto
//! message Field { optional string datatype = 1; optional string operation = 2; optional string value = 3; }
//! message Object { map<string, Field> fields = 1; map<string, bool> behaviors = 2; }
//! message State { map<string, Field> fields = 1; }
//! message Test { string check_type = 1; string check = 2; Object object = 3; State state = 4; }
//! message Criterion { map<string, string> attributes = 1; Test test = 2; }
//! message ExtendDefinition { string definition_ref = 1; map<string, string> attributes = 2; Criteria criteria = 3; }
//! message CriteriaNode { oneof node { Criteria criteria = 1; Criterion criterion = 2; ExtendDefinition extend_definition = 3; } }
//! message Criteria { string operator = 1; map<string, string> attributes = 2; repeated CriteriaNode children = 3; }
//! message Cve { string id = 1; optional string cvss3 = 2; }
//! message Vulnerability { string id = 1; string class_ = 2; string title = 3; string description = 4;
//!                         string family = 5; repeated Cve cve = 6; Criteria criteria = 7; }
//! message VulnerabilityList { repeated Vulnerability vulnerability = 1; }
//! ```

use crate::oval_extraction::domain::{
    CriteriaGroup, CriteriaNode as DomainCriteriaNode, CveReference, FieldDescriptor,
    ObjectDescriptor, StateDescriptor, TestResolution, VulnerabilityDefinition,
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Field {
    #[prost(string, optional, tag = "1")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[prost(string, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[prost(string, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Object {
    #[prost(btree_map = "string, message", tag = "1")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Field>,
    #[prost(btree_map = "string, bool", tag = "2")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub behaviors: BTreeMap<String, bool>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct State {
    #[prost(btree_map = "string, message", tag = "1")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, Field>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Test {
    #[prost(string, tag = "1")]
    pub check_type: String,
    #[prost(string, tag = "2")]
    pub check: String,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<Object>,
    #[prost(message, optional, tag = "4")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<State>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Criterion {
    #[prost(btree_map = "string, string", tag = "1")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[prost(message, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<Test>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct ExtendDefinition {
    #[prost(string, tag = "1")]
    pub definition_ref: String,
    #[prost(btree_map = "string, string", tag = "2")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[prost(message, optional, tag = "3")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Criteria>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct CriteriaNode {
    #[prost(oneof = "criteria_node::Node", tags = "1, 2, 3")]
    #[serde(flatten)]
    pub node: Option<criteria_node::Node>,
}

pub mod criteria_node {
    use serde::Serialize;

    #[derive(Clone, PartialEq, ::prost::Oneof, Serialize)]
    #[serde(rename_all = "snake_case")]
    pub enum Node {
        #[prost(message, tag = "1")]
        Criteria(super::Criteria),
        #[prost(message, tag = "2")]
        Criterion(super::Criterion),
        #[prost(message, tag = "3")]
        ExtendDefinition(super::ExtendDefinition),
    }
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Criteria {
    #[prost(string, tag = "1")]
    pub operator: String,
    #[prost(btree_map = "string, string", tag = "2")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[prost(message, repeated, tag = "3")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CriteriaNode>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Cve {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, optional, tag = "2")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvss3: Option<String>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct Vulnerability {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub class_: String,
    #[prost(string, tag = "3")]
    pub title: String,
    #[prost(string, tag = "4")]
    pub description: String,
    #[prost(string, tag = "5")]
    pub family: String,
    #[prost(message, repeated, tag = "6")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cve: Vec<Cve>,
    #[prost(message, optional, tag = "7")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Criteria>,
}

#[derive(Clone, PartialEq, ::prost::Message, Serialize)]
pub struct VulnerabilityList {
    #[prost(message, repeated, tag = "1")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vulnerability: Vec<Vulnerability>,
}

impl VulnerabilityList {
    /// Maps domain definitions onto the root message, keeping their order
    pub fn from_definitions(definitions: &[VulnerabilityDefinition]) -> Self {
        Self {
            vulnerability: definitions.iter().map(Vulnerability::from).collect(),
        }
    }
}

impl From<&FieldDescriptor> for Field {
    fn from(field: &FieldDescriptor) -> Self {
        Self {
            datatype: field.datatype().map(str::to_string),
            operation: field.operation().map(str::to_string),
            value: field.value().map(str::to_string),
        }
    }
}

fn fields_to_schema(fields: &BTreeMap<String, FieldDescriptor>) -> BTreeMap<String, Field> {
    fields
        .iter()
        .map(|(name, field)| (name.clone(), Field::from(field)))
        .collect()
}

impl From<&ObjectDescriptor> for Object {
    fn from(object: &ObjectDescriptor) -> Self {
        Self {
            fields: fields_to_schema(object.fields()),
            behaviors: object.behaviors().cloned().unwrap_or_default(),
        }
    }
}

impl From<&StateDescriptor> for State {
    fn from(state: &StateDescriptor) -> Self {
        Self {
            fields: fields_to_schema(state.fields()),
        }
    }
}

impl From<&TestResolution> for Test {
    fn from(test: &TestResolution) -> Self {
        Self {
            check_type: test.check_type.clone(),
            check: test.check.clone(),
            object: Some(Object::from(&test.object)),
            state: Some(State::from(&test.state)),
        }
    }
}

impl From<&CriteriaGroup> for Criteria {
    fn from(group: &CriteriaGroup) -> Self {
        Self {
            operator: group.operator.clone(),
            attributes: group.attributes.clone(),
            children: group.children.iter().map(CriteriaNode::from).collect(),
        }
    }
}

impl From<&DomainCriteriaNode> for CriteriaNode {
    fn from(node: &DomainCriteriaNode) -> Self {
        let node = match node {
            DomainCriteriaNode::Group(group) => criteria_node::Node::Criteria(group.into()),
            DomainCriteriaNode::Leaf { attributes, test } => {
                criteria_node::Node::Criterion(Criterion {
                    attributes: attributes.clone(),
                    test: Some(test.into()),
                })
            }
            DomainCriteriaNode::Extension {
                definition_ref,
                attributes,
                criteria,
            } => criteria_node::Node::ExtendDefinition(ExtendDefinition {
                definition_ref: definition_ref.clone(),
                attributes: attributes.clone(),
                criteria: Some(criteria.into()),
            }),
        };
        Self { node: Some(node) }
    }
}

impl From<&CveReference> for Cve {
    fn from(cve: &CveReference) -> Self {
        Self {
            id: cve.id.clone(),
            cvss3: cve.cvss3.clone(),
        }
    }
}

impl From<&VulnerabilityDefinition> for Vulnerability {
    fn from(definition: &VulnerabilityDefinition) -> Self {
        Self {
            id: definition.id.clone(),
            class_: definition.class.clone(),
            title: definition.title.clone(),
            description: definition.description.clone(),
            family: definition.family.clone(),
            cve: definition.cve.iter().map(Cve::from).collect(),
            criteria: Some(Criteria::from(&definition.criteria)),
        }
    }
}

pub mod criteria;
pub mod definition;
pub mod field;

pub use criteria::{CriteriaGroup, CriteriaNode, NodeAttributes, TestResolution, DEFAULT_OPERATOR};
pub use definition::{CveReference, VulnerabilityDefinition, VulnerabilityList};
pub use field::{normalize_token, Behaviors, FieldDescriptor, ObjectDescriptor, StateDescriptor};

mod criteria_resolver;
mod definition_extractor;
mod leaf_resolver;
mod reference_tables;
pub mod xml;

pub use criteria_resolver::{CriteriaElementKind, CriteriaResolver, MAX_CRITERIA_DEPTH};
pub use definition_extractor::DefinitionExtractor;
pub use leaf_resolver::LeafResolver;
pub use reference_tables::ReferenceTables;

use crate::oval_extraction::domain::VulnerabilityList;

/// ExtractionResponse - Internal response DTO from the extraction use case
///
/// Holds the fully resolved definitions; adapters encode them afterwards.
#[derive(Debug, Clone)]
pub struct ExtractionResponse {
    /// Resolved definitions in document order
    pub definitions: VulnerabilityList,
    /// Number of `<definition>` elements in the document, before the limit
    pub total_definitions: usize,
}

impl ExtractionResponse {
    pub fn new(definitions: VulnerabilityList, total_definitions: usize) -> Self {
        Self {
            definitions,
            total_definitions,
        }
    }

    /// True when the limit cut off part of the document
    pub fn is_truncated(&self) -> bool {
        self.definitions.len() < self.total_definitions
    }
}

use crate::oval_extraction::domain::VulnerabilityDefinition;
use crate::shared::Result;

/// SchemaEncoder port for serializing definitions into the output schema
///
/// Implementations map the domain list onto the `VulnerabilityList` schema
/// message and serialize it (binary wire format, JSON projection, ...).
pub trait SchemaEncoder {
    /// Encodes the definitions, preserving their order
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn encode(&self, definitions: &[VulnerabilityDefinition]) -> Result<Vec<u8>>;

    /// Short name of the encoding, used in progress messages
    fn name(&self) -> &'static str;
}

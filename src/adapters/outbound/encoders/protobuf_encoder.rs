use super::schema::VulnerabilityList;
use crate::oval_extraction::domain::VulnerabilityDefinition;
use crate::ports::outbound::SchemaEncoder;
use crate::shared::Result;
use anyhow::Context;
use prost::Message;

/// ProtobufEncoder adapter producing the binary wire format
///
/// This adapter implements the SchemaEncoder port for `.bin` output.
pub struct ProtobufEncoder;

impl ProtobufEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Parses bytes produced by [`SchemaEncoder::encode`] back into the schema
    pub fn decode(&self, bytes: &[u8]) -> Result<VulnerabilityList> {
        VulnerabilityList::decode(bytes).context("Failed to decode VulnerabilityList message")
    }
}

impl Default for ProtobufEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaEncoder for ProtobufEncoder {
    fn encode(&self, definitions: &[VulnerabilityDefinition]) -> Result<Vec<u8>> {
        Ok(VulnerabilityList::from_definitions(definitions).encode_to_vec())
    }

    fn name(&self) -> &'static str {
        "protobuf"
    }
}

use super::schema::VulnerabilityList;
use crate::oval_extraction::domain::VulnerabilityDefinition;
use crate::ports::outbound::SchemaEncoder;
use crate::shared::Result;
use anyhow::Context;

/// JsonEncoder adapter producing the JSON projection of the schema
///
/// Keys are the proto field names (`class_`, `check_type`, ...).
pub struct JsonEncoder;

impl JsonEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaEncoder for JsonEncoder {
    fn encode(&self, definitions: &[VulnerabilityDefinition]) -> Result<Vec<u8>> {
        let message = VulnerabilityList::from_definitions(definitions);
        let mut json =
            serde_json::to_vec_pretty(&message).context("Failed to serialize JSON output")?;
        json.push(b'\n');
        Ok(json)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

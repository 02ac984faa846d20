use crate::adapters::outbound::encoders::{JsonEncoder, ProtobufEncoder};
use crate::ports::outbound::SchemaEncoder;

/// Encoding of the output schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderType {
    Protobuf,
    Json,
}

/// Factory for creating schema encoders
///
/// This factory encapsulates the creation logic for the encoder implementations.
/// It belongs in the application layer as it selects infrastructure adapters
/// based on the requested outputs.
pub struct EncoderFactory;

impl EncoderFactory {
    /// Creates an encoder instance for the specified encoding
    ///
    /// # Examples
    /// ```
    /// use oval_proto::application::factories::{EncoderFactory, EncoderType};
    ///
    /// let encoder = EncoderFactory::create(EncoderType::Json);
    /// assert_eq!(encoder.name(), "json");
    /// ```
    pub fn create(encoder_type: EncoderType) -> Box<dyn SchemaEncoder> {
        match encoder_type {
            EncoderType::Protobuf => Box::new(ProtobufEncoder::new()),
            EncoderType::Json => Box::new(JsonEncoder::new()),
        }
    }
}

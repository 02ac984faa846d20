/// Encoder adapters for the output schema
mod json_encoder;
mod protobuf_encoder;
pub mod schema;

pub use json_encoder::JsonEncoder;
pub use protobuf_encoder::ProtobufEncoder;

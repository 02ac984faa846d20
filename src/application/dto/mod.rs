/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod extraction_request;
mod extraction_response;
mod output_target;

pub use extraction_request::ExtractionRequest;
pub use extraction_response::ExtractionResponse;
pub use output_target::OutputTarget;

/// Use cases module containing application business logic orchestration
mod export_definitions;
mod extract_definitions;

pub use export_definitions::{ExportDefinitionsUseCase, OutputSink};
pub use extract_definitions::ExtractDefinitionsUseCase;

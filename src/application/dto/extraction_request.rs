use std::path::PathBuf;

/// ExtractionRequest - Internal request DTO for the extraction use case
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    /// Path to the OVAL XML document
    pub input_path: PathBuf,
    /// Maximum number of definitions to resolve, in document order (all when None)
    pub limit: Option<usize>,
}

impl ExtractionRequest {
    pub fn new(input_path: PathBuf, limit: Option<usize>) -> Self {
        Self { input_path, limit }
    }
}

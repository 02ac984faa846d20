use crate::shared::Result;
use std::path::Path;

/// OvalDocumentReader port for loading the raw OVAL XML text
///
/// Parsing stays in the application core; readers only fetch bytes.
pub trait OvalDocumentReader {
    /// Reads the OVAL document at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file is larger than the accepted maximum
    /// - The content is not valid UTF-8
    fn read_document(&self, path: &Path) -> Result<String>;
}

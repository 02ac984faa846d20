use crate::shared::Result;

/// OutputPresenter port for presenting encoded output
///
/// This port abstracts the output destination (binary file, stdout, etc.).
pub trait OutputPresenter {
    /// Writes the encoded content to the destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination path is rejected by the security checks
    fn present(&self, content: &[u8]) -> Result<()>;
}

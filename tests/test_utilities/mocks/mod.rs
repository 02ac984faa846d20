/// Mock implementations for testing
mod mock_document_reader;
mod mock_output_presenter;
mod mock_progress_reporter;

pub use mock_document_reader::MockDocumentReader;
pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};

use crate::oval_extraction::domain::VulnerabilityDefinition;
use crate::ports::outbound::{OutputPresenter, ProgressReporter, SchemaEncoder};
use crate::shared::Result;

/// One requested output: an encoding and the destination it is written to
pub struct OutputSink {
    encoder: Box<dyn SchemaEncoder>,
    presenter: Box<dyn OutputPresenter>,
}

impl OutputSink {
    pub fn new(encoder: Box<dyn SchemaEncoder>, presenter: Box<dyn OutputPresenter>) -> Self {
        Self { encoder, presenter }
    }

    pub fn encoder_name(&self) -> &'static str {
        self.encoder.name()
    }
}

/// ExportDefinitionsUseCase - Encodes resolved definitions and writes them out
///
/// Every sink is encoded before the first one is written, so an encoding
/// failure leaves no output behind.
pub struct ExportDefinitionsUseCase<PR> {
    progress_reporter: PR,
}

impl<PR> ExportDefinitionsUseCase<PR>
where
    PR: ProgressReporter,
{
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    /// Encodes `definitions` for every sink, then presents the results in sink order
    pub fn execute(
        &self,
        definitions: &[VulnerabilityDefinition],
        sinks: &[OutputSink],
    ) -> Result<()> {
        if sinks.is_empty() {
            self.progress_reporter.report_error(
                "⚠️  Warning: No output requested. Use --outfile and/or --outstd to write the definitions.",
            );
            return Ok(());
        }

        let encoded = sinks
            .iter()
            .map(|sink| {
                self.progress_reporter.report(&format!(
                    "📝 Encoding {} output...",
                    sink.encoder_name()
                ));
                sink.encoder
                    .encode(definitions)
                    .map(|content| (sink, content))
            })
            .collect::<Result<Vec<_>>>()?;

        for (sink, content) in encoded {
            sink.presenter.present(&content)?;
            self.progress_reporter.report(&format!(
                "✅ {} output complete ({} bytes)",
                sink.encoder_name(),
                content.len()
            ));
        }

        Ok(())
    }
}

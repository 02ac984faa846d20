use crate::application::dto::{ExtractionRequest, ExtractionResponse};
use crate::oval_extraction::services::xml::parse_document;
use crate::oval_extraction::services::{DefinitionExtractor, ReferenceTables};
use crate::ports::outbound::{OvalDocumentReader, ProgressReporter};
use crate::shared::error::Section;
use crate::shared::Result;

/// ExtractDefinitionsUseCase - Core use case for OVAL extraction
///
/// This use case orchestrates reading the document, indexing its reference
/// sections and resolving every selected definition, using generic
/// dependency injection for the infrastructure dependencies.
///
/// # Type Parameters
/// * `DR` - OvalDocumentReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ExtractDefinitionsUseCase<DR, PR> {
    document_reader: DR,
    progress_reporter: PR,
}

impl<DR, PR> ExtractDefinitionsUseCase<DR, PR>
where
    DR: OvalDocumentReader,
    PR: ProgressReporter,
{
    /// Creates a new ExtractDefinitionsUseCase with injected dependencies
    pub fn new(document_reader: DR, progress_reporter: PR) -> Self {
        Self {
            document_reader,
            progress_reporter,
        }
    }

    /// Executes the extraction use case
    ///
    /// # Arguments
    /// * `request` - Input path and optional definition limit
    ///
    /// # Returns
    /// ExtractionResponse holding the fully resolved definitions in document order
    ///
    /// # Errors
    /// Fails on the first unreadable document, malformed XML or definition
    /// that cannot be fully resolved. No partial list is returned.
    pub fn execute(&self, request: ExtractionRequest) -> Result<ExtractionResponse> {
        // Step 1: Read and parse the document
        self.progress_reporter.report(&format!(
            "📖 Loading OVAL document from: {}",
            request.input_path.display()
        ));

        let content = self.document_reader.read_document(&request.input_path)?;
        let document = parse_document(&content)?;

        // Step 2: Index the reference sections
        let tables = ReferenceTables::build(&document);
        self.progress_reporter.report(&format!(
            "✅ Indexed {} test(s), {} object(s), {} state(s)",
            tables.len(Section::Tests),
            tables.len(Section::Objects),
            tables.len(Section::States)
        ));

        // Step 3: Select definitions
        let total_definitions = DefinitionExtractor::select(&document, None).len();
        let selected = DefinitionExtractor::select(&document, request.limit);

        if selected.len() < total_definitions {
            self.progress_reporter.report(&format!(
                "✂️  Limiting output to the first {} of {} definition(s)",
                selected.len(),
                total_definitions
            ));
        }

        if selected.is_empty() {
            self.progress_reporter
                .report_completion("✅ No definitions selected");
            return Ok(ExtractionResponse::new(Vec::new(), total_definitions));
        }

        // Step 4: Resolve each definition, aborting on the first failure
        self.progress_reporter.report(&format!(
            "🔗 Resolving {} definition(s)...",
            selected.len()
        ));

        let mut definitions = Vec::with_capacity(selected.len());
        for (index, node) in selected.iter().enumerate() {
            let id = DefinitionExtractor::definition_id(*node);

            let definition = match DefinitionExtractor::extract_definition(&tables, *node) {
                Ok(definition) => definition,
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("❌ Failed to resolve definition {}", id));
                    return Err(anyhow::Error::new(e)
                        .context(format!("Failed to resolve definition \"{}\"", id)));
                }
            };

            self.progress_reporter
                .report_progress(index + 1, selected.len(), Some(id));
            definitions.push(definition);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} definition(s)",
            definitions.len()
        ));

        Ok(ExtractionResponse::new(definitions, total_definitions))
    }
}

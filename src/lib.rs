//! oval-proto - OVAL vulnerability definition converter
//!
//! This library resolves the definitions of an OVAL (Open Vulnerability and
//! Assessment Language) XML document into self-contained criteria trees and
//! encodes them as Protocol Buffers and/or JSON, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`oval_extraction`): Pure data model and resolution services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use oval_proto::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let document_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case and resolve the first ten definitions
//! let use_case = ExtractDefinitionsUseCase::new(document_reader, progress_reporter);
//! let request = ExtractionRequest::new(PathBuf::from("rhel-9.oval.xml"), Some(10));
//! let response = use_case.execute(request)?;
//!
//! // Encode
//! let bytes = ProtobufEncoder::new().encode(&response.definitions)?;
//! println!("{} bytes", bytes.len());
//! # Ok(())
//! # }
//! ```
//!
//! Callers that already hold the document text can skip the use case and its
//! progress reporting and go through [`DefinitionExtractor::extract`]
//! (`oval_extraction::services`) directly:
//!
//! ```
//! use oval_proto::oval_extraction::services::xml::parse_document;
//! use oval_proto::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let xml = r#"<oval_definitions xmlns="http://oval.mitre.org/XMLSchema/oval-definitions-5">
//!   <definitions>
//!     <definition id="oval:org.test:def:1" class="inventory">
//!       <metadata>
//!         <title>Test Linux is installed</title>
//!         <affected family="unix"/>
//!         <description>Inventory.</description>
//!       </metadata>
//!       <criteria operator="OR"/>
//!     </definition>
//!   </definitions>
//! </oval_definitions>"#;
//!
//! let document = parse_document(xml)?;
//! let definitions = DefinitionExtractor::extract(&document, None)?;
//! assert_eq!(definitions[0].class, "INVENTORY");
//! # Ok(())
//! # }
//! ```
//!
//! [`DefinitionExtractor::extract`]: oval_extraction::services::DefinitionExtractor::extract

pub mod adapters;
pub mod application;
pub mod oval_extraction;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::encoders::{JsonEncoder, ProtobufEncoder};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{ExtractionRequest, ExtractionResponse, OutputTarget};
    pub use crate::application::factories::OutputSinkFactory;
    pub use crate::application::use_cases::{
        ExportDefinitionsUseCase, ExtractDefinitionsUseCase, OutputSink,
    };
    pub use crate::oval_extraction::domain::{
        CriteriaGroup, CriteriaNode, CveReference, FieldDescriptor, ObjectDescriptor,
        StateDescriptor, TestResolution, VulnerabilityDefinition, VulnerabilityList,
    };
    pub use crate::oval_extraction::services::{
        CriteriaResolver, DefinitionExtractor, LeafResolver, ReferenceTables,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, OvalDocumentReader, ProgressReporter, SchemaEncoder,
    };
    pub use crate::shared::error::{ExitCode, OvalError};
    pub use crate::shared::Result;
}

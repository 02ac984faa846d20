use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow pipelines to distinguish argument mistakes from
/// conversion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested definition was resolved and written
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable document, unresolved reference, I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Section of an OVAL document that holds referenceable elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Definitions,
    Tests,
    Objects,
    States,
}

impl Section {
    /// Tag name of the section container element
    pub fn tag(self) -> &'static str {
        match self {
            Section::Definitions => "definitions",
            Section::Tests => "tests",
            Section::Objects => "objects",
            Section::States => "states",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Application-specific errors for OVAL extraction.
///
/// Every variant is fatal: the run aborts before any output is written.
#[derive(Debug, Error)]
pub enum OvalError {
    #[error("Failed to parse OVAL document: {details}\n\n💡 Hint: Please verify that the input is well-formed XML")]
    DocumentParseError { details: String },

    #[error("Reference not found: no element with id \"{id}\" in <{section}>")]
    ReferenceNotFound { section: Section, id: String },

    #[error("Malformed test \"{id}\": {reason}")]
    MalformedTest { id: String, reason: String },

    #[error("Definition \"{definition}\" is missing mandatory metadata: {field}")]
    MissingMetadata { definition: String, field: String },

    #[error("<{element}> in definition \"{definition}\" has no {attribute} attribute")]
    MissingReference {
        definition: String,
        element: String,
        attribute: String,
    },

    #[error("Reference cycle detected while extending definition \"{id}\"")]
    ReferenceCycle { id: String },

    #[error("Criteria tree of definition \"{definition}\" exceeds the maximum depth of {max_depth}")]
    CriteriaTooDeep { definition: String, max_depth: usize },

    #[error("Unsupported element <{tag}> inside criteria of definition \"{definition}\"")]
    UnsupportedCriteriaElement { definition: String, tag: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for request and config values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

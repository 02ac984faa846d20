use std::path::PathBuf;

/// Destination of one encoding of the resolved definitions
///
/// Binary and JSON outputs are independent; a run may request either, both
/// or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Protocol Buffers wire format written to a file
    Binary(PathBuf),
    /// Pretty-printed JSON written to stdout
    JsonStdout,
}

impl OutputTarget {
    /// Builds the target list from the two independent output options
    pub fn from_options(outfile: Option<PathBuf>, outstd: bool) -> Vec<OutputTarget> {
        let mut targets = Vec::new();
        if let Some(path) = outfile {
            targets.push(OutputTarget::Binary(path));
        }
        if outstd {
            targets.push(OutputTarget::JsonStdout);
        }
        targets
    }
}

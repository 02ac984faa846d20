use clap::Parser;
use std::path::PathBuf;

/// Convert OVAL vulnerability definitions into Protocol Buffers / JSON
#[derive(Parser, Debug)]
#[command(name = "oval-proto")]
#[command(version)]
#[command(
    about = "Resolve OVAL vulnerability definitions into a self-contained Protocol Buffers / JSON schema",
    long_about = None
)]
pub struct Args {
    /// Path to the OVAL XML document
    #[arg(short, long, value_name = "PATH")]
    pub infile: Option<PathBuf>,

    /// Binary (Protocol Buffers) output file; ".bin" is appended when missing
    #[arg(short, long, value_name = "PATH")]
    pub outfile: Option<PathBuf>,

    /// Write the JSON projection to stdout
    #[arg(long)]
    pub outstd: bool,

    /// Resolve only the first N definitions, in document order
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// Path to a config file (defaults to ./oval-proto.config.yml when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

//! Configuration file support for oval-proto.
//!
//! Provides YAML-based configuration through `oval-proto.config.yml` files,
//! including data structures, file loading, validation and merging with the
//! command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::cli::Args;
use oval_proto::shared::Result;

pub const CONFIG_FILENAME: &str = "oval-proto.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub infile: Option<PathBuf>,
    pub outfile: Option<PathBuf>,
    pub outstd: Option<bool>,
    pub limit: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Options of one run after merging the config file and the CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub infile: Option<PathBuf>,
    pub outfile: Option<PathBuf>,
    pub outstd: bool,
    pub limit: Option<usize>,
    pub quiet: bool,
}

impl RunOptions {
    /// CLI values take precedence; the config fills in whatever was not given.
    pub fn merge(args: &Args, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();
        Self {
            infile: args.infile.clone().or(config.infile),
            outfile: args.outfile.clone().or(config.outfile),
            outstd: args.outstd || config.outstd.unwrap_or(false),
            limit: args.limit.or(config.limit),
            quiet: args.quiet,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
///
/// Relative `infile` / `outfile` paths are resolved against the directory
/// holding the config file.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let Some(base) = path.parent() {
        config.infile = config.infile.map(|p| resolve_relative(base, p));
        config.outfile = config.outfile.map(|p| resolve_relative(base, p));
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    log::debug!("using config file {}", config_path.display());
    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    for (key, value) in [("infile", &config.infile), ("outfile", &config.outfile)] {
        if value
            .as_ref()
            .is_some_and(|p| p.as_os_str().to_string_lossy().trim().is_empty())
        {
            bail!(
                "Invalid config: '{}' must not be empty.\n\n\
                 💡 Hint: Remove the key or give it a file path.",
                key
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() && !base.as_os_str().is_empty() {
        base.join(path)
    } else {
        path
    }
}

mod cli;
mod config;

use clap::error::ErrorKind;
use clap::CommandFactory;
use cli::Args;
use config::{discover_config, load_config_from_path, ConfigFile, RunOptions, CONFIG_FILENAME};
use oval_proto::adapters::outbound::console::StderrProgressReporter;
use oval_proto::adapters::outbound::filesystem::FileSystemReader;
use oval_proto::application::dto::{ExtractionRequest, OutputTarget};
use oval_proto::application::factories::OutputSinkFactory;
use oval_proto::application::use_cases::{ExportDefinitionsUseCase, ExtractDefinitionsUseCase};
use oval_proto::shared::error::ExitCode;
use oval_proto::shared::Result;
use owo_colors::OwoColorize;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    let config = load_config(&args)?;
    let options = RunOptions::merge(&args, config);

    let Some(infile) = options.infile.clone() else {
        Args::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "the following required argument was not provided: --infile <PATH>\n\n\
                 Pass --infile or set `infile` in the config file",
            )
            .exit();
    };

    let progress_reporter = || {
        if options.quiet {
            StderrProgressReporter::quiet()
        } else {
            StderrProgressReporter::new()
        }
    };

    // Create use case with injected dependencies
    let extract = ExtractDefinitionsUseCase::new(FileSystemReader::new(), progress_reporter());
    let response = extract.execute(ExtractionRequest::new(infile, options.limit))?;

    // Encode every requested output, then write them
    let targets = OutputTarget::from_options(options.outfile.clone(), options.outstd);
    let sinks = OutputSinkFactory::create_all(targets);

    let export = ExportDefinitionsUseCase::new(progress_reporter());
    export.execute(&response.definitions, &sinks)?;

    log::debug!(
        "{} of {} definition(s) exported",
        response.definitions.len(),
        response.total_definitions
    );

    Ok(())
}

/// Loads the config file: explicit `--config` first, otherwise auto-discovery in the working directory
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    if let Some(path) = args.config.as_deref() {
        let config = load_config_from_path(path)?;
        if !args.quiet {
            eprintln!("📄 Loaded config from: {}", path.display());
        }
        return Ok(Some(config));
    }

    let cwd = std::env::current_dir()?;
    let config = discover_config(&cwd)?;
    if config.is_some() && !args.quiet {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            cwd.join(CONFIG_FILENAME).display()
        );
    }
    Ok(config)
}

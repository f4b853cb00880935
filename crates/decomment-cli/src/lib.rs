//! Command-line runtime for the decomment comment stripper.
//!
//! The runtime parses arguments, loads layered configuration, collects the
//! target files, and strips their comments in place. It is exercised both
//! from the binary entrypoint and from tests where configuration loading and
//! IO streams are substituted.

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use decomment_config::Config;
use decomment_syntax::Remover;
use tracing::{info, warn};

mod cli;
mod config;
mod errors;
mod files;
mod process;
mod telemetry;

use cli::Cli;
use config::{ConfigLoader, OrthoConfigLoader, prepare_cli_arguments, split_config_arguments};
use errors::AppError;
use files::ExtensionFilter;
use process::{FileOutcome, Processor, Summary};

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) const fn new(stdout: &'a mut W, stderr: &'a mut E) -> Self {
        Self { stdout, stderr }
    }
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr);
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

/// Runs the CLI with a custom configuration loader.
pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let args: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&args);
    let cli_arguments = prepare_cli_arguments(&args, &split);

    let result = Cli::try_parse_from(cli_arguments)
        .map_err(AppError::CliUsage)
        .and_then(|cli| {
            loader
                .load(&split.config_arguments)
                .map(|config| (cli, config))
        })
        .and_then(|(cli, config)| {
            telemetry::initialise(&config)?;
            execute(&cli, &config, io)
        });

    match result {
        Ok(exit_code) => exit_code,
        Err(AppError::CliUsage(error)) if !error.use_stderr() => {
            let _ = write!(io.stdout, "{error}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            let _ = writeln!(io.stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn execute<W, E>(cli: &Cli, config: &Config, io: &mut IoStreams<'_, W, E>) -> Result<ExitCode, AppError>
where
    W: Write,
    E: Write,
{
    let remover = Remover::new(cli.removal_options(config));
    let filter = ExtensionFilter::new(&cli.ext);
    let collected = files::collect(&cli.path, cli.walks_recursively(), &filter)?;

    for (path, error) in &collected.failures {
        warn!(path = %path.display(), %error, "skipping unreadable entry");
        let _ = writeln!(io.stderr, "Failed: {}: {error}", path.display());
    }

    let processor = Processor::new(&remover, cli.language.as_deref(), cli.mode());
    let mut summary = Summary::default();
    for path in &collected.files {
        match processor.process(path) {
            Ok(outcome) => {
                match outcome {
                    FileOutcome::Updated => writeln!(io.stdout, "Updated: {}", path.display()),
                    FileOutcome::WouldChange => {
                        writeln!(io.stdout, "Would change: {}", path.display())
                    }
                    FileOutcome::Unchanged => Ok(()),
                }
                .map_err(AppError::WriteOutput)?;
                summary.record(outcome);
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to process file");
                let _ = writeln!(io.stderr, "Failed: {}: {error}", path.display());
                summary.record_failure();
            }
        }
    }

    info!(processed = summary.processed, updated = summary.updated, "run complete");
    writeln!(io.stdout, "{summary}").map_err(AppError::WriteOutput)?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests;

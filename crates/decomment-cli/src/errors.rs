//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Failures that abort an invocation.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise logging: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("cannot access {}: {source}", path.display())]
    Access { path: PathBuf, source: io::Error },
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}

/// Failures confined to a single file; reported and skipped.
#[derive(Debug, Error)]
pub(crate) enum FileError {
    #[error("failed to read file: {0}")]
    Read(io::Error),
    #[error("failed to write backup {}: {source}", path.display())]
    Backup { path: PathBuf, source: io::Error },
    #[error("failed to write file: {0}")]
    Write(io::Error),
    #[error("failed to list directory entry: {0}")]
    Walk(walkdir::Error),
}

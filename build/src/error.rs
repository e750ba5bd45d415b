use std::{io, path::PathBuf, process::ExitStatus};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("reading source directory {0} failed")]
    ReadSourceDir(PathBuf, #[source] io::Error),
    #[error("creating output directory {0} failed")]
    CreateOutputDir(PathBuf, #[source] io::Error),
    #[error("reading output directory {0} failed")]
    ReadOutputDir(PathBuf, #[source] io::Error),
    #[error("removing stale output {0} failed")]
    RemoveOutput(PathBuf, #[source] io::Error),
    #[error("compiling {0} failed with {1}")]
    CompileFailed(PathBuf, ExitStatus),
    #[error("could not launch the shader compiler for {0}")]
    Launch(PathBuf, #[source] io::Error),
}

#[derive(Debug, Error)]
#[error("unknown failure policy {0:?}, expected one of ignore, log, abort")]
pub struct ParsePolicyError(pub String);

use std::{
    ffi::OsStr,
    fmt::{self, Display},
    io,
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

use log::debug;

use crate::{error::Error, tool::expand_env};

/// What happened to a single compiler invocation.
#[derive(Debug)]
pub enum Outcome {
    Succeeded,
    Failed(ExitStatus),
    NotLaunched(io::Error),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn into_result(self, input: &Path) -> Result<(), Error> {
        match self {
            Self::Succeeded => Ok(()),
            Self::Failed(status) => Err(Error::CompileFailed(input.into(), status)),
            Self::NotLaunched(error) => Err(Error::Launch(input.into(), error)),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(status) => write!(f, "{}", status),
            Self::NotLaunched(error) => write!(f, "not launched: {}", error),
        }
    }
}

pub trait ShaderCompiler {
    fn compile(&mut self, input: &Path, output: &Path) -> Outcome;
}

/// Output path for a source named `name`: `<output_dir>/<name>.spv`.
pub fn artifact_path(output_dir: &Path, name: &OsStr) -> PathBuf {
    let mut file_name = name.to_os_string();
    file_name.push(".spv");
    output_dir.join(file_name)
}

/// Runs an external `glslangValidator`-compatible executable as
/// `<program> -V <input> -o <output>`, blocking until it exits.
#[derive(Clone, Debug)]
pub struct Validator {
    program: PathBuf,
}

impl Validator {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_template(template: &str) -> Self {
        Self::new(expand_env(template))
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn command(&self, input: &Path, output: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command.arg("-V").arg(input).arg("-o").arg(output);
        command
    }
}

impl ShaderCompiler for Validator {
    fn compile(&mut self, input: &Path, output: &Path) -> Outcome {
        debug!(
            "{} -V {} -o {}",
            self.program.display(),
            input.display(),
            output.display()
        );
        match self.command(input, output).status() {
            Ok(status) if status.success() => Outcome::Succeeded,
            Ok(status) => Outcome::Failed(status),
            Err(error) => Outcome::NotLaunched(error),
        }
    }
}

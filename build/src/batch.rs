use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    str::FromStr,
};

use log::{debug, info, warn};

use crate::{
    clean::{clear_output, create_output},
    compiler::{artifact_path, Outcome, ShaderCompiler},
    error::{Error, ParsePolicyError},
    source::scan,
};

/// How a failed invocation affects the batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailurePolicy {
    Ignore,
    Log,
    Abort,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        Self::Ignore
    }
}

impl FromStr for FailurePolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(Self::Ignore),
            "log" => Ok(Self::Log),
            "abort" => Ok(Self::Abort),
            _ => Err(ParsePolicyError(s.into())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub name: OsString,
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Default)]
pub struct Report {
    pub removed: usize,
    pub outcomes: Vec<(Job, Outcome)>,
}

impl Report {
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_success())
            .count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// One pass over a source directory: list, filter, optionally clear the
/// output directory, then compile every source in turn.
#[derive(Clone, Debug)]
pub struct Batch {
    source_dir: PathBuf,
    output_dir: PathBuf,
    clear: bool,
    create_output: bool,
    sort: bool,
    on_failure: FailurePolicy,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new("shaders", Path::new("shaders").join("bin"))
    }
}

impl Batch {
    pub fn new(source_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: output_dir.into(),
            clear: true,
            create_output: false,
            sort: false,
            on_failure: FailurePolicy::default(),
        }
    }

    pub fn clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    pub fn create_output(mut self, create_output: bool) -> Self {
        self.create_output = create_output;
        self
    }

    pub fn sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn on_failure(mut self, on_failure: FailurePolicy) -> Self {
        self.on_failure = on_failure;
        self
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Reads the source directory and computes the jobs without touching the
    /// output directory.
    pub fn plan(&self) -> Result<Vec<Job>, Error> {
        let mut names = scan(&self.source_dir)?;
        if self.sort {
            names.sort();
        }
        Ok(names
            .into_iter()
            .map(|name| Job {
                input: self.source_dir.join(&name),
                output: artifact_path(&self.output_dir, &name),
                name,
            })
            .collect())
    }

    pub fn run(&self, compiler: &mut impl ShaderCompiler) -> Result<Report, Error> {
        let jobs = self.plan()?;
        debug!(
            "found {} shader sources in {}",
            jobs.len(),
            self.source_dir.display()
        );
        if self.create_output {
            create_output(&self.output_dir)?;
        }
        let removed = if self.clear {
            clear_output(&self.output_dir)?
        } else {
            0
        };
        let mut report = Report {
            removed,
            outcomes: Vec::with_capacity(jobs.len()),
        };
        for job in jobs {
            let outcome = compiler.compile(&job.input, &job.output);
            let outcome = match (self.on_failure, outcome) {
                (FailurePolicy::Abort, Outcome::Failed(status)) => {
                    return Err(Error::CompileFailed(job.input, status));
                }
                (FailurePolicy::Abort, Outcome::NotLaunched(error)) => {
                    return Err(Error::Launch(job.input, error));
                }
                (FailurePolicy::Log, outcome) if !outcome.is_success() => {
                    warn!("compiling {} failed: {}", job.input.display(), outcome);
                    outcome
                }
                (_, outcome) => outcome,
            };
            report.outcomes.push((job, outcome));
        }
        info!(
            "compiled {} of {} shaders into {}",
            report.succeeded(),
            report.outcomes.len(),
            self.output_dir.display()
        );
        Ok(report)
    }
}

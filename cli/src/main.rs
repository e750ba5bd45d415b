use std::{io::Write, path::PathBuf};

use build::{default_tool_template, Batch, FailurePolicy, Validator};
use env_logger::Env;
use eyre::WrapErr;
use log::debug;
use structopt::StructOpt;

/// Compiles every GLSL source in a directory to SPIR-V with glslangValidator.
#[derive(StructOpt, Debug)]
#[structopt(name = "spvbatch")]
struct Opt {
    /// Directory holding the shader sources
    #[structopt(long, default_value = "shaders", parse(from_os_str))]
    source: PathBuf,

    /// Directory receiving the `.spv` artifacts
    #[structopt(long, default_value = "shaders/bin", parse(from_os_str))]
    output: PathBuf,

    /// Compiler path; `%VAR%`, `${VAR}` and `$VAR` are read from the environment
    #[structopt(long, env = "SPVBATCH_TOOL")]
    tool: Option<String>,

    /// Leave existing artifacts in the output directory
    #[structopt(long)]
    keep_output: bool,

    /// Create the output directory if it is missing
    #[structopt(long)]
    create_output: bool,

    /// Compile sources in file name order
    #[structopt(long)]
    sort: bool,

    /// What to do when the compiler fails
    #[structopt(
        long,
        default_value = "ignore",
        possible_values = &["ignore", "log", "abort"]
    )]
    on_failure: FailurePolicy,

    /// Print the compiler invocations without running them
    #[structopt(long)]
    dry_run: bool,
}

impl Opt {
    fn batch(&self) -> Batch {
        Batch::new(&self.source, &self.output)
            .clear(!self.keep_output)
            .create_output(self.create_output)
            .sort(self.sort)
            .on_failure(self.on_failure)
    }

    fn validator(&self) -> Validator {
        match &self.tool {
            Some(template) => Validator::from_template(template),
            None => Validator::from_template(&default_tool_template()),
        }
    }
}

/// Writes one line per planned invocation; neither the output directory nor
/// the compiler is touched.
fn dry_run(batch: &Batch, validator: &Validator, out: &mut impl Write) -> eyre::Result<()> {
    for job in batch.plan()? {
        writeln!(out, "{:?}", validator.command(&job.input, &job.output))?;
    }
    Ok(())
}

fn main() -> eyre::Result<()> {
    stable_eyre::install()?;
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let opt = Opt::from_args();
    let batch = opt.batch();
    let mut validator = opt.validator();
    if opt.dry_run {
        return dry_run(&batch, &validator, &mut std::io::stdout());
    }
    debug!("using {}", validator.program().display());
    batch
        .run(&mut validator)
        .wrap_err_with(|| format!("compiling {} failed", batch.source_dir().display()))?;
    Ok(())
}

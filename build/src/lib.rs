//! Batch compilation of GLSL sources into SPIR-V through an external
//! `glslangValidator` executable.

mod batch;
mod clean;
mod compiler;
mod error;
mod source;
mod tool;

pub use batch::{Batch, FailurePolicy, Job, Report};
pub use clean::{clear_output, create_output};
pub use compiler::{artifact_path, Outcome, ShaderCompiler, Validator};
pub use error::{Error, ParsePolicyError};
pub use source::{has_marker, is_shader_source, scan, SHADER_MARKERS};
pub use tool::{default_tool_template, expand, expand_env};

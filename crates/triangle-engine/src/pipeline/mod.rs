//! Shader pipeline builder.
//!
//! Compiles GLSL stages into shader objects and links them into a program.
//! Diagnostics are returned as values; callers decide whether a failure is
//! fatal. The engine's own policy (see `build_program`) is to log and carry on.

mod error;
mod program;
mod shader;
mod source;

pub use error::{CompileError, LinkError, PipelineError};
pub use program::{build_program, link, PipelineBuild, ShaderProgram};
pub use shader::{compile, CompileStatus, ShaderObject};
pub use source::{ShaderSource, ShaderStage};

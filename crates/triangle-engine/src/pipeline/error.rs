use std::fmt;

use super::source::ShaderStage;

/// A shader stage failed to compile.
///
/// `log` is the driver diagnostic fetched from the failing stage's own handle.
#[derive(Debug, Clone, PartialEq)]
pub struct CompileError {
    pub stage: ShaderStage,
    pub log: String,
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR::SHADER::{}::COMPILATION_FAILED\n{}", self.stage.label(), self.log)
    }
}

impl std::error::Error for CompileError {}

/// The program failed to link.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkError {
    pub log: String,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR::SHADER::PROGRAM::LINKING_FAILED\n{}", self.log)
    }
}

impl std::error::Error for LinkError {}

/// Anything the pipeline builder can report.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    Compile(CompileError),
    Link(LinkError),
    /// `link` was handed objects that are not a (vertex, fragment) pair.
    StageMismatch {
        vertex: ShaderStage,
        fragment: ShaderStage,
    },
    /// The driver refused to allocate a shader or program object.
    Driver(String),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Compile(e) => write!(f, "{e}"),
            PipelineError::Link(e) => write!(f, "{e}"),
            PipelineError::StageMismatch { vertex, fragment } => write!(
                f,
                "cannot link a {vertex} shader in the vertex slot \
                 with a {fragment} shader in the fragment slot"
            ),
            PipelineError::Driver(msg) => write!(f, "GL driver error: {msg}"),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Compile(e) => Some(e),
            PipelineError::Link(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CompileError> for PipelineError {
    fn from(e: CompileError) -> Self {
        PipelineError::Compile(e)
    }
}

impl From<LinkError> for PipelineError {
    fn from(e: LinkError) -> Self {
        PipelineError::Link(e)
    }
}

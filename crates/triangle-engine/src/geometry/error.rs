use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The slice does not hold exactly one triangle.
    VertexCount { expected: usize, actual: usize },
    /// The driver refused to allocate a buffer or vertex array.
    Driver(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::VertexCount { expected, actual } => {
                write!(f, "expected {expected} vertex floats, got {actual}")
            }
            GeometryError::Driver(msg) => write!(f, "GL driver error: {msg}"),
        }
    }
}

impl std::error::Error for GeometryError {}

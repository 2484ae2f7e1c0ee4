use std::fmt;

/// Programmable pipeline stage a shader runs in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Upper-case stage name used in diagnostic labels.
    pub fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "VERTEX",
            ShaderStage::Fragment => "FRAGMENT",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// GLSL text for one stage. Immutable once built.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShaderSource<'a> {
    stage: ShaderStage,
    text: &'a str,
}

impl<'a> ShaderSource<'a> {
    pub const fn new(stage: ShaderStage, text: &'a str) -> Self {
        Self { stage, text }
    }

    pub const fn vertex(text: &'a str) -> Self {
        Self::new(ShaderStage::Vertex, text)
    }

    pub const fn fragment(text: &'a str) -> Self {
        Self::new(ShaderStage::Fragment, text)
    }

    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }
}

use crate::device::GlApi;

use super::error::{CompileError, PipelineError};
use super::source::{ShaderSource, ShaderStage};

/// Driver-side outcome of a compile.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CompileStatus {
    Compiled,
    Failed,
}

/// A compiled (or failed) shader object.
///
/// The driver allocates a handle even when compilation fails, so a failed
/// object still exists and must be released. `link` consumes and deletes
/// both objects it is given; otherwise call [`ShaderObject::delete`].
#[derive(Debug)]
pub struct ShaderObject<S> {
    stage: ShaderStage,
    handle: S,
    status: CompileStatus,
    log: String,
}

impl<S: Copy> ShaderObject<S> {
    #[inline]
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    #[inline]
    pub fn handle(&self) -> S {
        self.handle
    }

    #[inline]
    pub fn status(&self) -> CompileStatus {
        self.status
    }

    #[inline]
    pub fn is_compiled(&self) -> bool {
        self.status == CompileStatus::Compiled
    }

    /// Driver diagnostic for this stage. Empty on a clean compile.
    #[inline]
    pub fn log(&self) -> &str {
        &self.log
    }

    /// Returns the compile failure as an error value, if any.
    pub fn check(&self) -> Result<(), CompileError> {
        match self.status {
            CompileStatus::Compiled => Ok(()),
            CompileStatus::Failed => Err(CompileError {
                stage: self.stage,
                log: self.log.clone(),
            }),
        }
    }

    pub fn delete<G>(self, gl: &G)
    where
        G: GlApi<Shader = S>,
    {
        gl.delete_shader(self.handle);
    }
}

/// Compiles one stage.
///
/// A compile failure is not an `Err`: the object comes back with
/// `CompileStatus::Failed` and its own log, and [`ShaderObject::check`]
/// yields the `CompileError`. `Err` is reserved for handle allocation
/// failures, where no object exists.
pub fn compile<G: GlApi>(
    gl: &G,
    source: &ShaderSource<'_>,
) -> Result<ShaderObject<G::Shader>, PipelineError> {
    let stage = source.stage();
    let handle = gl.create_shader(stage).map_err(PipelineError::Driver)?;

    gl.shader_source(handle, source.text());
    gl.compile_shader(handle);

    let (status, log) = if gl.shader_compile_status(handle) {
        (CompileStatus::Compiled, String::new())
    } else {
        (CompileStatus::Failed, gl.shader_info_log(handle))
    };

    log::debug!("{stage} shader {handle:?}: {status:?}");

    Ok(ShaderObject {
        stage,
        handle,
        status,
        log,
    })
}

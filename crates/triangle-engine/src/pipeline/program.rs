use crate::device::GlApi;

use super::error::{LinkError, PipelineError};
use super::shader::{compile, ShaderObject};
use super::source::{ShaderSource, ShaderStage};

/// A successfully linked vertex + fragment program.
///
/// Only linked programs are ever handed out; a program that fails to link is
/// deleted inside [`link`]. Release with [`ShaderProgram::delete`] before the
/// context goes away.
#[derive(Debug)]
pub struct ShaderProgram<P> {
    handle: P,
    log: String,
}

impl<P: Copy> ShaderProgram<P> {
    #[inline]
    pub fn handle(&self) -> P {
        self.handle
    }

    /// Linker diagnostic. Empty on a clean link.
    #[inline]
    pub fn log(&self) -> &str {
        &self.log
    }

    pub fn bind<G>(&self, gl: &G)
    where
        G: GlApi<Program = P>,
    {
        gl.use_program(Some(self.handle));
    }

    pub fn delete<G>(self, gl: &G)
    where
        G: GlApi<Program = P>,
    {
        gl.delete_program(self.handle);
    }
}

/// Links a vertex and a fragment object into a program.
///
/// Both objects are consumed: they are detached and deleted whatever the
/// outcome. Objects that failed to compile are still attached; the driver
/// then rejects the link and its log is returned in the `LinkError`.
pub fn link<G: GlApi>(
    gl: &G,
    vertex: ShaderObject<G::Shader>,
    fragment: ShaderObject<G::Shader>,
) -> Result<ShaderProgram<G::Program>, PipelineError> {
    if vertex.stage() != ShaderStage::Vertex || fragment.stage() != ShaderStage::Fragment {
        let err = PipelineError::StageMismatch {
            vertex: vertex.stage(),
            fragment: fragment.stage(),
        };
        vertex.delete(gl);
        fragment.delete(gl);
        return Err(err);
    }

    let program = match gl.create_program() {
        Ok(p) => p,
        Err(msg) => {
            vertex.delete(gl);
            fragment.delete(gl);
            return Err(PipelineError::Driver(msg));
        }
    };

    gl.attach_shader(program, vertex.handle());
    gl.attach_shader(program, fragment.handle());
    gl.link_program(program);

    let linked = gl.program_link_status(program);
    let log = if linked {
        String::new()
    } else {
        gl.program_info_log(program)
    };

    gl.detach_shader(program, vertex.handle());
    gl.detach_shader(program, fragment.handle());
    vertex.delete(gl);
    fragment.delete(gl);

    if !linked {
        gl.delete_program(program);
        return Err(LinkError { log }.into());
    }

    log::debug!("linked shader program {program:?}");
    Ok(ShaderProgram { handle: program, log })
}

/// Result of [`build_program`]: the program if one linked, plus every
/// diagnostic raised on the way.
#[derive(Debug)]
pub struct PipelineBuild<P> {
    pub program: Option<ShaderProgram<P>>,
    pub errors: Vec<PipelineError>,
}

impl<P> PipelineBuild<P> {
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compiles both stages and links them.
///
/// Failures never abort: each one is logged at `error` level and collected,
/// and the build carries on with whatever the driver produced. A compile
/// failure therefore usually surfaces twice, once as `Compile` and once as
/// the resulting `Link` error. If no program links, `program` is `None` and
/// rendering proceeds without one.
pub fn build_program<G: GlApi>(
    gl: &G,
    vertex: &ShaderSource<'_>,
    fragment: &ShaderSource<'_>,
) -> PipelineBuild<G::Program> {
    let mut errors = Vec::new();

    let vs = match compile(gl, vertex) {
        Ok(obj) => obj,
        Err(e) => {
            log::error!("{e}");
            errors.push(e);
            return PipelineBuild { program: None, errors };
        }
    };

    let fs = match compile(gl, fragment) {
        Ok(obj) => obj,
        Err(e) => {
            log::error!("{e}");
            errors.push(e);
            vs.delete(gl);
            return PipelineBuild { program: None, errors };
        }
    };

    for obj in [&vs, &fs] {
        if let Err(e) = obj.check() {
            log::error!("{e}");
            errors.push(e.into());
        }
    }

    let program = match link(gl, vs, fs) {
        Ok(p) => Some(p),
        Err(e) => {
            log::error!("{e}");
            errors.push(e);
            None
        }
    };

    PipelineBuild { program, errors }
}

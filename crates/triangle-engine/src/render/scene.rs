use crate::device::GlApi;
use crate::geometry::{self, BufferUsage, GeometryError, VertexBuffer};
use crate::pipeline::{build_program, PipelineError, ShaderProgram, ShaderSource};

/// The GPU objects the frame loop renders with: one vertex buffer and at
/// most one linked program.
///
/// A failed shader build leaves `program` empty; the diagnostics stay
/// available through [`TriangleScene::diagnostics`].
pub struct TriangleScene<G: GlApi> {
    geometry: VertexBuffer<G>,
    program: Option<ShaderProgram<G::Program>>,
    diagnostics: Vec<PipelineError>,
}

impl<G: GlApi> TriangleScene<G> {
    /// Uploads `vertices`, then compiles and links the two stages.
    ///
    /// Only geometry failures are returned as `Err`; shader failures are
    /// logged and recorded.
    pub fn build(
        gl: &G,
        vertex: &ShaderSource<'_>,
        fragment: &ShaderSource<'_>,
        vertices: &[f32],
    ) -> Result<Self, GeometryError> {
        let geometry = geometry::upload(gl, vertices, BufferUsage::StaticDraw)?;
        let build = build_program(gl, vertex, fragment);

        if build.program.is_none() {
            log::warn!("no shader program linked; frames will not draw geometry");
        }

        Ok(Self {
            geometry,
            program: build.program,
            diagnostics: build.errors,
        })
    }

    #[inline]
    pub fn geometry(&self) -> &VertexBuffer<G> {
        &self.geometry
    }

    #[inline]
    pub fn program(&self) -> Option<&ShaderProgram<G::Program>> {
        self.program.as_ref()
    }

    #[inline]
    pub fn diagnostics(&self) -> &[PipelineError] {
        &self.diagnostics
    }

    /// Draws the triangle with the linked program.
    ///
    /// Returns `false` (and issues nothing) when no program linked.
    pub fn draw(&self, gl: &G) -> bool {
        let Some(program) = &self.program else {
            return false;
        };

        program.bind(gl);
        self.geometry.bind(gl);
        gl.draw_triangles(0, self.geometry.vertex_count() as i32);
        true
    }

    /// Deletes the program and the buffer.
    pub fn release(self, gl: &G) {
        gl.use_program(None);
        gl.bind_vertex_array(None);
        if let Some(program) = self.program {
            program.delete(gl);
        }
        self.geometry.delete(gl);
    }
}

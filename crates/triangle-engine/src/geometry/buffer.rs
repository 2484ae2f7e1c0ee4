use crate::device::GlApi;

use super::error::GeometryError;

/// Floats per vertex (x, y, z).
pub const COMPONENTS_PER_VERTEX: usize = 3;

/// Vertices per buffer. The engine only ever draws a single triangle.
pub const TRIANGLE_VERTEX_COUNT: usize = 3;

pub const TRIANGLE_FLOATS: usize = COMPONENTS_PER_VERTEX * TRIANGLE_VERTEX_COUNT;

/// Attribute location the vertex shader reads positions from.
const POSITION_LOCATION: u32 = 0;

/// Driver hint for how often the buffer contents change.
///
/// The triangle is written once and drawn every frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferUsage {
    StaticDraw,
}

/// One triangle's positions in GPU memory.
///
/// Pairs the array buffer with the vertex array object that describes it as
/// attribute 0 = `vec3`. Invariant: always 3 vertices of 3 floats.
pub struct VertexBuffer<G: GlApi> {
    buffer: G::Buffer,
    vao: G::VertexArray,
    usage: BufferUsage,
}

/// Uploads `vertices` into a fresh buffer.
///
/// `vertices` must be exactly [`TRIANGLE_FLOATS`] long.
pub fn upload<G: GlApi>(
    gl: &G,
    vertices: &[f32],
    usage: BufferUsage,
) -> Result<VertexBuffer<G>, GeometryError> {
    check_len(vertices)?;

    let vao = gl.create_vertex_array().map_err(GeometryError::Driver)?;
    let buffer = match gl.create_buffer() {
        Ok(b) => b,
        Err(msg) => {
            gl.delete_vertex_array(vao);
            return Err(GeometryError::Driver(msg));
        }
    };

    gl.bind_vertex_array(Some(vao));
    gl.bind_array_buffer(Some(buffer));
    gl.array_buffer_data(bytemuck::cast_slice(vertices), usage);
    gl.float_attribute(POSITION_LOCATION, COMPONENTS_PER_VERTEX as i32);
    gl.bind_vertex_array(None);
    gl.bind_array_buffer(None);

    log::debug!(
        "uploaded {} vertices into buffer {buffer:?}",
        vertices.len() / COMPONENTS_PER_VERTEX
    );

    Ok(VertexBuffer { buffer, vao, usage })
}

fn check_len(vertices: &[f32]) -> Result<(), GeometryError> {
    if vertices.len() != TRIANGLE_FLOATS {
        return Err(GeometryError::VertexCount {
            expected: TRIANGLE_FLOATS,
            actual: vertices.len(),
        });
    }
    Ok(())
}

impl<G: GlApi> VertexBuffer<G> {
    #[inline]
    pub fn buffer(&self) -> G::Buffer {
        self.buffer
    }

    #[inline]
    pub fn usage(&self) -> BufferUsage {
        self.usage
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        TRIANGLE_VERTEX_COUNT
    }

    #[inline]
    pub fn components_per_vertex(&self) -> usize {
        COMPONENTS_PER_VERTEX
    }

    /// Size of the driver-side storage in bytes, as reported by GL.
    pub fn byte_len(&self, gl: &G) -> usize {
        gl.bind_array_buffer(Some(self.buffer));
        let len = gl.array_buffer_size();
        gl.bind_array_buffer(None);
        len
    }

    /// Replaces the contents with `vertices`, keeping the usage hint.
    pub fn rewrite(&self, gl: &G, vertices: &[f32]) -> Result<(), GeometryError> {
        check_len(vertices)?;
        gl.bind_array_buffer(Some(self.buffer));
        gl.array_buffer_data(bytemuck::cast_slice(vertices), self.usage);
        gl.bind_array_buffer(None);
        Ok(())
    }

    /// Binds the vertex array for a draw.
    pub fn bind(&self, gl: &G) {
        gl.bind_vertex_array(Some(self.vao));
    }

    pub fn delete(self, gl: &G) {
        gl.delete_vertex_array(self.vao);
        gl.delete_buffer(self.buffer);
    }
}

//! GPU-resident vertex data.

mod buffer;
mod error;

pub use buffer::{
    upload, BufferUsage, VertexBuffer, COMPONENTS_PER_VERTEX, TRIANGLE_FLOATS,
    TRIANGLE_VERTEX_COUNT,
};
pub use error::GeometryError;

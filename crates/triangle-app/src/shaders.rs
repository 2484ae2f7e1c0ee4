use triangle_engine::pipeline::ShaderSource;

pub const VERTEX_SHADER: ShaderSource<'static> = ShaderSource::vertex(
    "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
",
);

pub const FRAGMENT_SHADER: ShaderSource<'static> = ShaderSource::fragment(
    "#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
",
);

/// One triangle in normalized device coordinates.
#[rustfmt::skip]
pub const TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

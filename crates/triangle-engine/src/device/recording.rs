//! In-memory `GlApi` + `Present` used by unit tests.
//!
//! Records every call in order and simulates just enough driver behavior
//! (compile status, link status, buffer storage) to exercise the engine
//! without a display.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;

use crate::geometry::BufferUsage;
use crate::pipeline::ShaderStage;

use super::api::{GlApi, Present};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum GlCall {
    CreateShader(ShaderStage, u32),
    CompileShader(u32),
    ShaderInfoLog(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    DetachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    ProgramInfoLog(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    BufferData { buffer: u32, len: usize, usage: BufferUsage },
    DeleteBuffer(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    FloatAttribute { location: u32, components: i32 },
    DeleteVertexArray(u32),
    Viewport(i32, i32),
    ClearColor([f32; 4]),
    Clear,
    DrawTriangles { first: i32, count: i32 },
    Present,
}

#[derive(Debug)]
struct ShaderRecord {
    stage: ShaderStage,
    source: String,
    compiled: bool,
    log: String,
    deleted: bool,
}

#[derive(Debug, Default)]
struct ProgramRecord {
    attached: Vec<u32>,
    linked: bool,
    log: String,
    deleted: bool,
}

#[derive(Debug, Default)]
struct BufferRecord {
    data: Vec<u8>,
    deleted: bool,
}

#[derive(Debug, Default)]
struct State {
    next_handle: u32,
    refuse_allocations: bool,
    shaders: HashMap<u32, ShaderRecord>,
    programs: HashMap<u32, ProgramRecord>,
    buffers: HashMap<u32, BufferRecord>,
    vertex_arrays: HashMap<u32, bool>,
    bound_buffer: Option<u32>,
    calls: Vec<GlCall>,
}

impl State {
    fn allocate(&mut self) -> Result<u32, String> {
        if self.refuse_allocations {
            return Err("out of memory".to_string());
        }
        self.next_handle += 1;
        Ok(self.next_handle)
    }
}

#[derive(Debug, Default)]
pub(crate) struct RecordingGl {
    state: RefCell<State>,
}

impl RecordingGl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A driver that fails every object allocation.
    pub(crate) fn refusing_allocations() -> Self {
        let gl = Self::default();
        gl.state.borrow_mut().refuse_allocations = true;
        gl
    }

    pub(crate) fn calls(&self) -> Vec<GlCall> {
        self.state.borrow().calls.clone()
    }

    pub(crate) fn clear_calls(&self) {
        self.state.borrow_mut().calls.clear();
    }

    pub(crate) fn live_shaders(&self) -> usize {
        self.state.borrow().shaders.values().filter(|s| !s.deleted).count()
    }

    pub(crate) fn live_programs(&self) -> usize {
        self.state.borrow().programs.values().filter(|p| !p.deleted).count()
    }

    pub(crate) fn live_buffers(&self) -> usize {
        self.state.borrow().buffers.values().filter(|b| !b.deleted).count()
    }

    pub(crate) fn live_vertex_arrays(&self) -> usize {
        self.state.borrow().vertex_arrays.values().filter(|live| **live).count()
    }

    pub(crate) fn buffer_contents(&self, buffer: u32) -> Vec<u8> {
        self.state
            .borrow()
            .buffers
            .get(&buffer)
            .map(|b| b.data.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: GlCall) {
        self.state.borrow_mut().calls.push(call);
    }
}

/// Rough stand-in for a GLSL front end: requires a `#version` line and a
/// terminating `;` on every statement line.
fn check_glsl(source: &str) -> Result<(), String> {
    if !source.trim_start().starts_with("#version") {
        return Err("0:1: error: missing #version directive".to_string());
    }

    for (i, line) in source.lines().enumerate() {
        let line = line.trim();
        let is_structural = line.is_empty()
            || line.starts_with('#')
            || line.starts_with("//")
            || line.ends_with('{')
            || line == "}"
            || (line.starts_with("void ") && line.ends_with(')'));
        if !is_structural && !line.ends_with(';') {
            return Err(format!("0:{}: error: syntax error, expecting ';' after '{line}'", i + 1));
        }
    }

    Ok(())
}

impl GlApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type Buffer = u32;
    type VertexArray = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let mut st = self.state.borrow_mut();
        let id = st.allocate()?;
        st.shaders.insert(
            id,
            ShaderRecord {
                stage,
                source: String::new(),
                compiled: false,
                log: String::new(),
                deleted: false,
            },
        );
        st.calls.push(GlCall::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        if let Some(s) = self.state.borrow_mut().shaders.get_mut(&shader) {
            s.source = source.to_string();
        }
    }

    fn compile_shader(&self, shader: u32) {
        let mut st = self.state.borrow_mut();
        if let Some(s) = st.shaders.get_mut(&shader) {
            match check_glsl(&s.source) {
                Ok(()) => {
                    s.compiled = true;
                    s.log.clear();
                }
                Err(log) => {
                    s.compiled = false;
                    s.log = log;
                }
            }
        }
        st.calls.push(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.state.borrow().shaders.get(&shader).is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.record(GlCall::ShaderInfoLog(shader));
        self.state
            .borrow()
            .shaders
            .get(&shader)
            .map(|s| s.log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        let mut st = self.state.borrow_mut();
        if let Some(s) = st.shaders.get_mut(&shader) {
            s.deleted = true;
        }
        st.calls.push(GlCall::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let mut st = self.state.borrow_mut();
        let id = st.allocate()?;
        st.programs.insert(id, ProgramRecord::default());
        st.calls.push(GlCall::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut st = self.state.borrow_mut();
        if let Some(p) = st.programs.get_mut(&program) {
            p.attached.push(shader);
        }
        st.calls.push(GlCall::AttachShader { program, shader });
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        let mut st = self.state.borrow_mut();
        if let Some(p) = st.programs.get_mut(&program) {
            p.attached.retain(|s| *s != shader);
        }
        st.calls.push(GlCall::DetachShader { program, shader });
    }

    fn link_program(&self, program: u32) {
        let mut st = self.state.borrow_mut();
        let attached = st
            .programs
            .get(&program)
            .map(|p| p.attached.clone())
            .unwrap_or_default();

        let stages: Vec<(ShaderStage, bool)> = attached
            .iter()
            .filter_map(|id| st.shaders.get(id))
            .map(|s| (s.stage, s.compiled))
            .collect();

        let outcome = if stages.iter().any(|(_, compiled)| !compiled) {
            Err("error: linking with uncompiled/unspecialized shader".to_string())
        } else if stages.len() != 2
            || !stages.iter().any(|(s, _)| *s == ShaderStage::Vertex)
            || !stages.iter().any(|(s, _)| *s == ShaderStage::Fragment)
        {
            Err("error: program needs exactly one vertex and one fragment shader".to_string())
        } else {
            Ok(())
        };

        if let Some(p) = st.programs.get_mut(&program) {
            match outcome {
                Ok(()) => {
                    p.linked = true;
                    p.log.clear();
                }
                Err(log) => {
                    p.linked = false;
                    p.log = log;
                }
            }
        }
        st.calls.push(GlCall::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.state.borrow().programs.get(&program).is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        self.record(GlCall::ProgramInfoLog(program));
        self.state
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.log.clone())
            .unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(GlCall::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        let mut st = self.state.borrow_mut();
        if let Some(p) = st.programs.get_mut(&program) {
            p.deleted = true;
        }
        st.calls.push(GlCall::DeleteProgram(program));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let mut st = self.state.borrow_mut();
        let id = st.allocate()?;
        st.buffers.insert(id, BufferRecord::default());
        st.calls.push(GlCall::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        let mut st = self.state.borrow_mut();
        st.bound_buffer = buffer;
        st.calls.push(GlCall::BindArrayBuffer(buffer));
    }

    fn array_buffer_data(&self, data: &[u8], usage: BufferUsage) {
        let mut st = self.state.borrow_mut();
        let Some(buffer) = st.bound_buffer else {
            return;
        };
        if let Some(b) = st.buffers.get_mut(&buffer) {
            b.data = data.to_vec();
        }
        st.calls.push(GlCall::BufferData {
            buffer,
            len: data.len(),
            usage,
        });
    }

    fn array_buffer_size(&self) -> usize {
        let st = self.state.borrow();
        st.bound_buffer
            .and_then(|id| st.buffers.get(&id))
            .map_or(0, |b| b.data.len())
    }

    fn delete_buffer(&self, buffer: u32) {
        let mut st = self.state.borrow_mut();
        if let Some(b) = st.buffers.get_mut(&buffer) {
            b.deleted = true;
        }
        st.calls.push(GlCall::DeleteBuffer(buffer));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let mut st = self.state.borrow_mut();
        let id = st.allocate()?;
        st.vertex_arrays.insert(id, true);
        st.calls.push(GlCall::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: Option<u32>) {
        self.record(GlCall::BindVertexArray(vao));
    }

    fn float_attribute(&self, location: u32, components: i32) {
        self.record(GlCall::FloatAttribute { location, components });
    }

    fn delete_vertex_array(&self, vao: u32) {
        let mut st = self.state.borrow_mut();
        st.vertex_arrays.insert(vao, false);
        st.calls.push(GlCall::DeleteVertexArray(vao));
    }

    fn viewport(&self, width: i32, height: i32) {
        self.record(GlCall::Viewport(width, height));
    }

    fn clear_color(&self, rgba: [f32; 4]) {
        self.record(GlCall::ClearColor(rgba));
    }

    fn clear_color_buffer(&self) {
        self.record(GlCall::Clear);
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(GlCall::DrawTriangles { first, count });
    }
}

impl Present for RecordingGl {
    fn present(&self) -> Result<()> {
        self.record(GlCall::Present);
        Ok(())
    }
}

use glam::Vec4;

use crate::resources::buffer::UniformBuffer;
use crate::resources::uniforms::IllumUniforms;

/// Opaque handle to a named slot in a shader's uniform block.
///
/// Obtained from [`IllumShader::uniform_location`]; only meaningful against
/// the shader it was resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformLocation {
    pub(crate) offset: usize,
    pub(crate) size: usize,
}

/// Shader program for the fixed illumination material model.
///
/// Owns the generated WGSL source, the uniform layout reflected from
/// [`IllumUniforms`], and the CPU-side uniform state a renderer uploads
/// before drawing. Uniform writes go through locations, mirroring the
/// GL-style binding contract: looking up a name the block does not define
/// yields no location, and writes through a missing location are dropped
/// silently.
#[derive(Debug)]
pub struct IllumShader {
    source: String,
    layout: Vec<(String, UniformLocation)>,
    uniforms: UniformBuffer,
}

impl IllumShader {
    #[must_use]
    pub fn new() -> Self {
        let source = generate_source();
        let layout = IllumUniforms::fields()
            .iter()
            .map(|field| {
                (
                    format!("u_material.{}", field.name),
                    UniformLocation {
                        offset: field.offset,
                        size: field.size,
                    },
                )
            })
            .collect();

        let uniforms = UniformBuffer::new(
            &IllumUniforms::default(),
            wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            Some("IllumUniforms"),
        );

        log::debug!("Generated illum shader ({} bytes of WGSL)", source.len());

        Self {
            source,
            layout,
            uniforms,
        }
    }

    /// The generated WGSL source.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The CPU-side uniform state for this program.
    #[must_use]
    pub fn uniform_buffer(&self) -> &UniformBuffer {
        &self.uniforms
    }

    /// Resolves a dotted uniform name (`"u_material.ambient"`) to a location.
    ///
    /// `None` is the missing-uniform sentinel; no error is raised.
    #[must_use]
    pub fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.layout
            .iter()
            .find(|(slot, _)| slot == name)
            .map(|(_, location)| *location)
    }

    /// Writes a `vec4<f32>` uniform. A `None` location is a silent no-op.
    pub fn set_uniform_vec4(&self, location: Option<UniformLocation>, value: Vec4) {
        if let Some(location) = location {
            debug_assert_eq!(location.size, std::mem::size_of::<Vec4>());
            self.uniforms
                .write_at(location.offset, bytemuck::bytes_of(&value));
        }
    }

    /// Writes an `f32` uniform. A `None` location is a silent no-op.
    pub fn set_uniform_f32(&self, location: Option<UniformLocation>, value: f32) {
        if let Some(location) = location {
            debug_assert_eq!(location.size, std::mem::size_of::<f32>());
            self.uniforms
                .write_at(location.offset, bytemuck::bytes_of(&value));
        }
    }
}

impl Default for IllumShader {
    fn default() -> Self {
        Self::new()
    }
}

/// Splices the material block definition into the illumination template.
fn generate_source() -> String {
    let mut source = IllumUniforms::wgsl_struct_def("IllumUniforms");
    source.push_str(
        "
@group(0) @binding(0) var<uniform> u_material: IllumUniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
};

@vertex
fn vs_main(
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
) -> VertexOutput {
    var out: VertexOutput;
    out.clip_position = vec4<f32>(position, 1.0);
    out.normal = normal;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let n_dot_l = max(dot(normalize(in.normal), vec3<f32>(0.0, 0.0, 1.0)), 0.0);
    let color = u_material.ambient
        + u_material.diffuse * n_dot_l
        + u_material.specular * pow(max(n_dot_l, 1e-4), u_material.shininess);
    return vec4<f32>(color.rgb, u_material.diffuse.a);
}
",
    );
    source
}

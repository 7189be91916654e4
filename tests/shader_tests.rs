//! Shader material tests
//!
//! Tests for:
//! - IllumUniforms layout reflection and WGSL generation
//! - UniformBuffer versioning and sub-range writes
//! - IllumShader uniform location lookup (missing-name sentinel)
//! - ShaderMaterial pass-through binding

use glam::Vec4;
use wisp::resources::{IllumUniforms, Material, UniformBuffer};
use wisp::shaders::{IllumShader, ShaderMaterial};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ============================================================================
// IllumUniforms: layout
// ============================================================================

#[test]
fn uniform_block_field_layout() {
    let fields = IllumUniforms::fields();
    assert_eq!(fields.len(), 4);

    let names: Vec<&str> = fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["ambient", "diffuse", "specular", "shininess"]);

    assert_eq!(fields[0].offset, 0);
    assert_eq!(fields[1].offset, 16);
    assert_eq!(fields[2].offset, 32);
    assert_eq!(fields[3].offset, 48);
    assert_eq!(fields[3].size, 4);

    // Padded out to the WGSL struct size.
    assert_eq!(std::mem::size_of::<IllumUniforms>(), 64);
}

#[test]
fn uniform_block_wgsl_definition() {
    let def = IllumUniforms::wgsl_struct_def("IllumUniforms");
    assert!(def.starts_with("struct IllumUniforms {"));
    assert!(def.contains("ambient: vec4<f32>"));
    assert!(def.contains("shininess: f32"));
    assert!(!def.contains("_padding"));
}

// ============================================================================
// UniformBuffer
// ============================================================================

#[test]
fn uniform_buffer_tracks_versions() {
    let buffer = UniformBuffer::new(
        &IllumUniforms::default(),
        wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        Some("test"),
    );

    assert_eq!(buffer.version(), 0);
    assert_eq!(buffer.len(), 64);
    assert_eq!(buffer.label(), "test");
    assert!(buffer.usage().contains(wgpu::BufferUsages::UNIFORM));

    buffer.update(&IllumUniforms::default());
    assert_eq!(buffer.version(), 1);

    buffer.write_at(48, bytemuck::bytes_of(&90.0_f32));
    assert_eq!(buffer.version(), 2);

    let snapshot: IllumUniforms = buffer.read();
    assert_eq!(snapshot.shininess, 90.0);
}

#[test]
fn uniform_buffer_bytes_snapshot() {
    let uniforms = IllumUniforms {
        ambient: Vec4::splat(0.25),
        ..IllumUniforms::default()
    };
    let buffer = UniformBuffer::new(&uniforms, wgpu::BufferUsages::UNIFORM, None);

    assert_eq!(buffer.bytes(), bytemuck::bytes_of(&uniforms).to_vec());
    assert_eq!(buffer.label(), "UniformBuffer");
}

// ============================================================================
// IllumShader: lookup and writes
// ============================================================================

#[test]
fn shader_source_carries_material_block() {
    let shader = IllumShader::new();
    let source = shader.source();

    assert!(source.contains("struct IllumUniforms {"));
    assert!(source.contains("@group(0) @binding(0) var<uniform> u_material: IllumUniforms;"));
    assert!(source.contains("@vertex"));
    assert!(source.contains("@fragment"));
}

#[test]
fn shader_uniform_location_lookup() {
    let shader = IllumShader::new();

    assert!(shader.uniform_location("u_material.ambient").is_some());
    assert!(shader.uniform_location("u_material.diffuse").is_some());
    assert!(shader.uniform_location("u_material.specular").is_some());
    assert!(shader.uniform_location("u_material.shininess").is_some());

    // Missing uniforms resolve to the sentinel, never an error.
    assert!(shader.uniform_location("u_material.emissive").is_none());
    assert!(shader.uniform_location("ambient").is_none());
}

#[test]
fn shader_write_through_missing_location_is_noop() {
    let shader = IllumShader::new();
    let before = shader.uniform_buffer().version();

    shader.set_uniform_vec4(None, Vec4::splat(9.0));
    shader.set_uniform_f32(None, 9.0);

    assert_eq!(shader.uniform_buffer().version(), before);
    let state: IllumUniforms = shader.uniform_buffer().read();
    assert_eq!(state, IllumUniforms::default());
}

#[test]
fn shader_uniform_writes_land_at_reflected_offsets() {
    let shader = IllumShader::new();
    let location = shader.uniform_location("u_material.specular");

    shader.set_uniform_vec4(location, Vec4::new(0.5, 0.6, 0.7, 1.0));

    let state: IllumUniforms = shader.uniform_buffer().read();
    assert_eq!(state.specular, Vec4::new(0.5, 0.6, 0.7, 1.0));
    // Neighboring fields untouched.
    assert_eq!(state.diffuse, IllumUniforms::default().diffuse);
    assert_eq!(state.shininess, IllumUniforms::default().shininess);
}

// ============================================================================
// ShaderMaterial
// ============================================================================

#[test]
fn shader_material_loads_material_fields() {
    init_logs();

    let shader = IllumShader::new();
    let binder = ShaderMaterial::new(&shader);

    let mut material = Material::new();
    material.set_ambient(Vec4::new(0.1, 0.2, 0.3, 1.0));
    material.set_diffuse(Vec4::new(0.9, 0.8, 0.7, 0.5));
    material.set_specular(Vec4::new(1.0, 1.0, 0.0, 1.0));
    material.set_shininess(64.0);

    let before = shader.uniform_buffer().version();
    binder.load_to_shader(&material, &shader);

    assert!(shader.uniform_buffer().version() > before);

    let state: IllumUniforms = shader.uniform_buffer().read();
    assert_eq!(state.ambient, material.ambient());
    assert_eq!(state.diffuse, material.diffuse());
    assert_eq!(state.specular, material.specular());
    assert_eq!(state.shininess, material.shininess());
}

#[test]
fn shader_material_load_is_repeatable() {
    let shader = IllumShader::new();
    let binder = ShaderMaterial::new(&shader);

    let mut material = Material::new();
    material.set_shininess(2.0);
    binder.load_to_shader(&material, &shader);

    material.set_shininess(128.0);
    binder.load_to_shader(&material, &shader);

    let state: IllumUniforms = shader.uniform_buffer().read();
    assert_eq!(state.shininess, 128.0);
}

// ============================================================================
// Material
// ============================================================================

#[test]
fn material_defaults() {
    let material = Material::default();
    assert_eq!(material.ambient(), Vec4::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(material.diffuse(), Vec4::ONE);
    assert_eq!(material.specular(), Vec4::new(0.2, 0.2, 0.2, 1.0));
    assert_eq!(material.shininess(), 20.0);
}

#[test]
fn material_setters() {
    let mut material = Material::new();
    material.set_diffuse(Vec4::new(1.0, 0.0, 0.0, 1.0));
    material.set_shininess(4.0);

    assert_eq!(material.diffuse(), Vec4::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(material.shininess(), 4.0);
}

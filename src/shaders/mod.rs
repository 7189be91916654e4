//! Shader program module
//!
//! The illumination shader program and its material uniform binder:
//! - IllumShader: generated WGSL source plus the reflected uniform layout
//! - ShaderMaterial: cached uniform locations for the material block

pub mod illum_shader;
pub mod shader_material;

pub use illum_shader::{IllumShader, UniformLocation};
pub use shader_material::ShaderMaterial;

use std::mem::{offset_of, size_of};

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};

// ============================================================================
// Rust type -> WGSL type name mapping
// ============================================================================

pub trait WgslType {
    fn wgsl_type_name() -> &'static str;
}

impl WgslType for f32 {
    fn wgsl_type_name() -> &'static str {
        "f32"
    }
}
impl WgslType for i32 {
    fn wgsl_type_name() -> &'static str {
        "i32"
    }
}
impl WgslType for u32 {
    fn wgsl_type_name() -> &'static str {
        "u32"
    }
}
impl WgslType for Vec2 {
    fn wgsl_type_name() -> &'static str {
        "vec2<f32>"
    }
}
impl WgslType for Vec3 {
    fn wgsl_type_name() -> &'static str {
        "vec3<f32>"
    }
}
impl WgslType for Vec4 {
    fn wgsl_type_name() -> &'static str {
        "vec4<f32>"
    }
}
impl WgslType for Mat4 {
    fn wgsl_type_name() -> &'static str {
        "mat4x4<f32>"
    }
}

// ============================================================================
// Illumination uniform block
// ============================================================================

/// One reflected field of a uniform block: its WGSL name and byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformField {
    pub name: &'static str,
    pub ty: &'static str,
    pub offset: usize,
    pub size: usize,
}

/// Uniform block for the fixed illumination material model.
///
/// The Rust layout mirrors the WGSL struct exactly: three `vec4<f32>` fields
/// at offsets 0/16/32 and the shininess scalar at 48, padded to the 64-byte
/// WGSL struct size.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct IllumUniforms {
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: Vec4,
    pub shininess: f32,
    pub _padding: [f32; 3],
}

impl IllumUniforms {
    /// The reflected field table. Padding is not a field.
    #[must_use]
    pub fn fields() -> [UniformField; 4] {
        [
            UniformField {
                name: "ambient",
                ty: Vec4::wgsl_type_name(),
                offset: offset_of!(Self, ambient),
                size: size_of::<Vec4>(),
            },
            UniformField {
                name: "diffuse",
                ty: Vec4::wgsl_type_name(),
                offset: offset_of!(Self, diffuse),
                size: size_of::<Vec4>(),
            },
            UniformField {
                name: "specular",
                ty: Vec4::wgsl_type_name(),
                offset: offset_of!(Self, specular),
                size: size_of::<Vec4>(),
            },
            UniformField {
                name: "shininess",
                ty: f32::wgsl_type_name(),
                offset: offset_of!(Self, shininess),
                size: size_of::<f32>(),
            },
        ]
    }

    /// Generates the WGSL struct definition for this block.
    #[must_use]
    pub fn wgsl_struct_def(struct_name: &str) -> String {
        let mut code = format!("struct {struct_name} {{\n");
        for field in Self::fields() {
            code.push_str(&format!("    {}: {},\n", field.name, field.ty));
        }
        code.push_str("};\n");
        code
    }
}

impl Default for IllumUniforms {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.0, 0.0, 0.0, 0.0),
            diffuse: Vec4::ONE,
            specular: Vec4::new(0.2, 0.2, 0.2, 1.0),
            shininess: 20.0,
            _padding: [0.0; 3],
        }
    }
}

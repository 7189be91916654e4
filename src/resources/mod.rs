//! CPU-side render resource definitions
//!
//! Data the renderer consumes without owning a GPU device:
//! - Material: illumination material properties
//! - Uniforms: shader uniform block layout and WGSL generation
//! - Buffer: CPU shadow of a GPU buffer with version tracking

pub mod buffer;
pub mod material;
pub mod uniforms;

pub use buffer::UniformBuffer;
pub use material::Material;
pub use uniforms::{IllumUniforms, UniformField, WgslType};

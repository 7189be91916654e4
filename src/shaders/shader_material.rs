use crate::resources::material::Material;
use crate::shaders::illum_shader::{IllumShader, UniformLocation};

/// Uniform binder for the illumination material block.
///
/// Resolves the four material uniform locations once, against one compiled
/// shader, and stays immutable afterwards. A uniform the shader does not
/// define resolves to the `None` sentinel and its writes are dropped, so
/// loading is always a straight pass-through with no error signaling.
#[derive(Debug, Clone)]
pub struct ShaderMaterial {
    ambient: Option<UniformLocation>,
    diffuse: Option<UniformLocation>,
    specular: Option<UniformLocation>,
    shininess: Option<UniformLocation>,
}

impl ShaderMaterial {
    #[must_use]
    pub fn new(shader: &IllumShader) -> Self {
        Self {
            ambient: locate(shader, "u_material.ambient"),
            diffuse: locate(shader, "u_material.diffuse"),
            specular: locate(shader, "u_material.specular"),
            shininess: locate(shader, "u_material.shininess"),
        }
    }

    /// Pushes the material's fields into the shader's uniform state.
    pub fn load_to_shader(&self, material: &Material, shader: &IllumShader) {
        shader.set_uniform_vec4(self.ambient, material.ambient());
        shader.set_uniform_vec4(self.diffuse, material.diffuse());
        shader.set_uniform_vec4(self.specular, material.specular());
        shader.set_uniform_f32(self.shininess, material.shininess());
    }
}

fn locate(shader: &IllumShader, name: &str) -> Option<UniformLocation> {
    let location = shader.uniform_location(name);
    if location.is_none() {
        log::debug!("Uniform {name} not found in illum shader, writes will be dropped");
    }
    location
}

use glam::Vec4;

/// Surface properties for the fixed illumination model.
///
/// A plain value holder; [`ShaderMaterial`](crate::ShaderMaterial) pushes
/// these fields into a shader's uniform state each draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    ambient: Vec4,
    diffuse: Vec4,
    specular: Vec4,
    shininess: f32,
}

impl Material {
    #[must_use]
    pub fn new() -> Self {
        Self {
            ambient: Vec4::new(0.0, 0.0, 0.0, 0.0),
            diffuse: Vec4::ONE,
            specular: Vec4::new(0.2, 0.2, 0.2, 1.0),
            shininess: 20.0,
        }
    }

    #[must_use]
    pub fn ambient(&self) -> Vec4 {
        self.ambient
    }

    pub fn set_ambient(&mut self, ambient: Vec4) {
        self.ambient = ambient;
    }

    #[must_use]
    pub fn diffuse(&self) -> Vec4 {
        self.diffuse
    }

    pub fn set_diffuse(&mut self, diffuse: Vec4) {
        self.diffuse = diffuse;
    }

    #[must_use]
    pub fn specular(&self) -> Vec4 {
        self.specular
    }

    pub fn set_specular(&mut self, specular: Vec4) {
        self.specular = specular;
    }

    #[must_use]
    pub fn shininess(&self) -> f32 {
        self.shininess
    }

    pub fn set_shininess(&mut self, shininess: f32) {
        self.shininess = shininess;
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new()
    }
}

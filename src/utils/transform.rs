use std::f32::consts::{PI, TAU};

use glam::{Affine3A, Mat4, Quat, Vec2, Vec3};

/// 2D affine pose: position, non-uniform scale, a z-ordering scalar, and a
/// rotation about the Z axis.
///
/// Emits the column-major model matrix `T * R * S` on demand. All operations
/// are pure value manipulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    position: Vec2,
    scale: Vec2,
    z: f32,
    rotation_in_rad: f32,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            z: 0.0,
            rotation_in_rad: 0.0,
        }
    }

    /// Copies all pose fields into `target`, overwriting its state.
    pub fn clone_to(&self, target: &mut Transform) {
        target.position = self.position;
        target.scale = self.scale;
        target.z = self.z;
        target.rotation_in_rad = self.rotation_in_rad;
    }

    // ========================================================================
    // Position
    // ========================================================================

    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, x: f32, y: f32) {
        self.set_x_pos(x);
        self.set_y_pos(y);
    }

    /// The position lifted to 3D with the z-order scalar.
    #[must_use]
    pub fn position_3d(&self) -> Vec3 {
        Vec3::new(self.position.x, self.position.y, self.z)
    }

    #[must_use]
    pub fn x_pos(&self) -> f32 {
        self.position.x
    }

    pub fn set_x_pos(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn inc_x_pos_by(&mut self, delta: f32) {
        self.position.x += delta;
    }

    #[must_use]
    pub fn y_pos(&self) -> f32 {
        self.position.y
    }

    pub fn set_y_pos(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn inc_y_pos_by(&mut self, delta: f32) {
        self.position.y += delta;
    }

    #[must_use]
    pub fn z_pos(&self) -> f32 {
        self.z
    }

    pub fn set_z_pos(&mut self, z: f32) {
        self.z = z;
    }

    pub fn inc_z_pos_by(&mut self, delta: f32) {
        self.z += delta;
    }

    // ========================================================================
    // Size
    // ========================================================================

    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.scale
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.set_width(width);
        self.set_height(height);
    }

    /// Grows both axes by `delta`.
    pub fn inc_size_by(&mut self, delta: f32) {
        self.inc_width_by(delta);
        self.inc_height_by(delta);
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.scale.x
    }

    pub fn set_width(&mut self, width: f32) {
        self.scale.x = width;
    }

    pub fn inc_width_by(&mut self, delta: f32) {
        self.scale.x += delta;
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.scale.y
    }

    pub fn set_height(&mut self, height: f32) {
        self.scale.y = height;
    }

    pub fn inc_height_by(&mut self, delta: f32) {
        self.scale.y += delta;
    }

    // ========================================================================
    // Rotation
    // ========================================================================

    #[must_use]
    pub fn rotation_in_rad(&self) -> f32 {
        self.rotation_in_rad
    }

    /// Sets the rotation, wrapping values above 2π back into range.
    ///
    /// Only the upper side is bounded: values strictly greater than 2π wrap
    /// down by repeated subtraction, negative values are stored as-is.
    pub fn set_rotation_in_rad(&mut self, rotation_in_rad: f32) {
        self.rotation_in_rad = rotation_in_rad;
        while self.rotation_in_rad > TAU {
            self.rotation_in_rad -= TAU;
        }
    }

    pub fn inc_rotation_by_rad(&mut self, delta_rad: f32) {
        self.set_rotation_in_rad(self.rotation_in_rad + delta_rad);
    }

    #[must_use]
    pub fn rotation_in_degree(&self) -> f32 {
        self.rotation_in_rad * 180.0 / PI
    }

    pub fn set_rotation_in_degree(&mut self, rotation_in_degree: f32) {
        self.set_rotation_in_rad(rotation_in_degree * PI / 180.0);
    }

    pub fn inc_rotation_by_degree(&mut self, delta_degree: f32) {
        self.inc_rotation_by_rad(delta_degree * PI / 180.0);
    }

    // ========================================================================
    // Model matrix
    // ========================================================================

    /// Builds the column-major model matrix: translate by the 3D position,
    /// rotate about Z, then scale by `(width, height, 1)`.
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        let affine = Affine3A::from_scale_rotation_translation(
            Vec3::new(self.scale.x, self.scale.y, 1.0),
            Quat::from_rotation_z(self.rotation_in_rad),
            self.position_3d(),
        );
        Mat4::from(affine)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

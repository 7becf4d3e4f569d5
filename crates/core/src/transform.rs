use crate::{EulerRot, Mat4, Quat, Vec3};

/// Placement of a scene object: position, Euler rotation (XYZ, radians), scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    #[inline]
    pub const fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    #[inline]
    pub fn from_trs(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    #[inline]
    pub fn translated(mut self, offset: Vec3) -> Self {
        self.position += offset;
        self
    }

    #[inline]
    pub fn set_scalar_scale(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }

    /// Rotate by `speed` (radians per second, per axis) over `dt` seconds.
    #[inline]
    pub fn spin(&mut self, speed: Vec3, dt: f32) {
        self.rotation += speed * dt;
    }

    /// matrix = T * R * S
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.position)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

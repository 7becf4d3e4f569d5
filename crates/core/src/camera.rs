use crate::sizes::Sizes;
use crate::{Mat4, Vec3};

/// Perspective camera (right-handed) whose aspect follows a [`Sizes`] provider.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y_rad: f32,
    pub z_near: f32,
    pub z_far: f32,
    pub aspect: f32,
}

impl Camera {
    #[allow(clippy::too_many_arguments)]
    pub fn new_perspective(
        eye: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y_rad: f32,
        z_near: f32,
        z_far: f32,
        aspect: f32,
    ) -> Self {
        Self {
            eye,
            target,
            up,
            fov_y_rad,
            z_near,
            z_far,
            aspect,
        }
    }

    /// 75° vertical fov looking at the origin from +Z, aspect taken from `sizes`.
    pub fn looking_at_origin(sizes: &impl Sizes, distance: f32) -> Self {
        let mut cam = Self::new_perspective(
            Vec3::new(0.0, 0.0, distance),
            Vec3::ZERO,
            Vec3::Y,
            75f32.to_radians(),
            0.1,
            1000.0,
            1.0,
        );
        cam.fit_to(sizes);
        cam
    }

    /// Copy the aspect of `sizes`. Returns `false` and keeps the current
    /// aspect when it is not finite or not positive (e.g. zero height).
    pub fn fit_to(&mut self, sizes: &impl Sizes) -> bool {
        if !sizes.has_valid_aspect() {
            return false;
        }
        self.aspect = sizes.aspect();
        true
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// OpenGL-style projection (z in [-1, 1]).
    #[inline]
    pub fn proj(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_rad,
            self.aspect.max(1e-6),
            self.z_near,
            self.z_far,
        )
    }

    #[inline]
    pub fn proj_view(&self) -> Mat4 {
        self.proj() * self.view()
    }

    #[inline]
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }
}

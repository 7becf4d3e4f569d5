//! Core shared types: viewport sizing, camera, transforms and small UI math helpers.

pub use glam::{EulerRot, Mat4, Quat, Vec3, vec3};

pub mod camera;
pub mod class_names;
pub mod easing;
pub mod sizes;
pub mod time;
pub mod transform;
pub mod transition;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid size '{0}', expected WIDTHxHEIGHT")]
    InvalidSize(String),
    #[error("Invalid chrome entry '{0}', expected SELECTOR:HEIGHT")]
    InvalidChrome(String),
    #[error("Environment unavailable: {0}")]
    Environment(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use sizes::{FixedSizes, Sizes};

    #[test]
    fn camera_fitted_to_fixed_sizes_is_finite() {
        let mut cam = camera::Camera::new_perspective(
            vec3(0.0, 0.0, 4.0),
            vec3(0.0, 0.0, 0.0),
            Vec3::Y,
            60f32.to_radians(),
            0.1,
            100.0,
            1.0,
        );
        let sizes = FixedSizes::new(1920.0, 1080.0);
        assert!(cam.fit_to(&sizes));
        assert_eq!(cam.aspect, sizes.aspect());
        let a = cam.proj_view().to_cols_array();
        assert!(a.iter().all(|f| f.is_finite()));
    }

    #[test]
    fn errors_render_their_input() {
        let err = CoreError::InvalidSize("12by4".into());
        assert_eq!(err.to_string(), "Invalid size '12by4', expected WIDTHxHEIGHT");
    }
}

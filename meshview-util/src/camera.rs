//! Camera parameters for viewing point clouds and meshes

use crate::projection::persp_fov;
use crate::view::look_at;
use meshview_core::{Error, Matrix4f, Point3f, Result, Vector3f};

/// Position, orientation and lens of a viewer camera
///
/// `forward` and `up` are unit directions. Use [`Camera::look_towards`] to
/// aim the camera at a point instead of setting `forward` directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Point3f,
    pub forward: Vector3f,
    pub up: Vector3f,
    /// Vertical field of view in radians
    pub fovy: f32,
    /// Width over height
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(
        position: Point3f,
        forward: Vector3f,
        up: Vector3f,
        fovy: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        Self {
            position,
            forward,
            up,
            fovy,
            aspect,
            z_near,
            z_far,
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Result<Matrix4f> {
        look_at(&self.position, &self.forward, &self.up)
    }

    /// Get the projection matrix
    pub fn projection_matrix(&self) -> Result<Matrix4f> {
        persp_fov(self.fovy, self.aspect, self.z_near, self.z_far)
    }

    /// Projection times view, mapping world space straight to clip space
    pub fn view_projection(&self) -> Result<Matrix4f> {
        Ok(self.projection_matrix()? * self.view_matrix()?)
    }

    /// Point the camera at `target`
    pub fn look_towards(&mut self, target: &Point3f) -> Result<()> {
        let forward = (*target - self.position)
            .try_normalize(f32::EPSILON)
            .ok_or_else(|| Error::invalid_argument("camera target coincides with its position"))?;
        self.forward = forward;
        Ok(())
    }

    /// Move the camera along its forward direction
    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.forward * distance;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(
            Point3f::new(0.0, 0.0, 5.0),
            Vector3f::new(0.0, 0.0, -1.0),
            Vector3f::new(0.0, 1.0, 0.0),
            std::f32::consts::FRAC_PI_4,
            16.0 / 9.0,
            0.1,
            100.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Perspective3;

    #[test]
    fn test_default_camera_sees_origin_at_center() {
        let camera = Camera::default();
        let clip = camera.view_projection().unwrap() * Point3f::origin().to_homogeneous();
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-6);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-6);
        assert_relative_eq!(clip.w, 5.0, epsilon = 1e-5);
        let depth = clip.z / clip.w;
        assert!(depth > -1.0 && depth < 1.0);
    }

    #[test]
    fn test_look_towards_matches_target_based_view() {
        let mut camera = Camera::default();
        camera.position = Point3f::new(4.0, 3.0, 2.0);
        let target = Point3f::new(-1.0, 0.5, 0.0);
        camera.look_towards(&target).unwrap();

        assert_relative_eq!(camera.forward.norm(), 1.0, epsilon = 1e-6);
        let expected = Matrix4f::look_at_rh(&camera.position, &target, &camera.up);
        assert_relative_eq!(camera.view_matrix().unwrap(), expected, epsilon = 1e-5);
    }

    #[test]
    fn test_look_towards_own_position_fails() {
        let mut camera = Camera::default();
        let before = camera.clone();
        let position = camera.position;
        assert!(matches!(camera.look_towards(&position), Err(Error::InvalidArgument(_))));
        assert_eq!(camera, before);
    }

    #[test]
    fn test_projection_agrees_with_opengl_perspective() {
        let camera = Camera::default();
        let expected = Perspective3::new(camera.aspect, camera.fovy, camera.z_near, camera.z_far);
        assert_relative_eq!(
            camera.projection_matrix().unwrap(),
            expected.into_inner(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn test_move_forward() {
        let mut camera = Camera::default();
        camera.move_forward(2.0);
        assert_relative_eq!(camera.position, Point3f::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_invalid_lens_propagates() {
        let camera = Camera { z_near: 10.0, z_far: 1.0, ..Camera::default() };
        assert!(camera.projection_matrix().is_err());
        assert!(camera.view_projection().is_err());

        let camera = Camera { up: Vector3f::new(0.0, 0.0, 1.0), ..Camera::default() };
        assert!(camera.view_matrix().is_err());
    }
}

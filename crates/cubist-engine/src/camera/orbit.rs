use glam::{Mat4, Vec3};

use super::Projection;

/// Spherical orbit camera aimed at the origin.
///
/// `theta` is the polar angle, `phi` the azimuth, both stored in radians.
/// The angles carry no range invariant; they wrap trigonometrically.
///
/// Known edge case: when `theta` is a multiple of π the eye is colinear with
/// the `+Y` up vector and the look-at transform is degenerate. The model does
/// not correct this; input surfaces that want to avoid the poles clamp their
/// own ranges.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraState {
    radius: f32,
    theta: f32,
    phi: f32,
    projection: Projection,
}

impl CameraState {
    /// Initial camera: radius 6, both angles at 45°, perspective projection.
    pub fn initial() -> Self {
        Self {
            radius: 6.0,
            theta: 45f32.to_radians(),
            phi: 45f32.to_radians(),
            projection: Projection::Perspective,
        }
    }

    /// Orbit radius. `radius > 0` is a caller contract, not enforced here.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn theta(&self) -> f32 {
        self.theta
    }

    #[inline]
    pub fn phi(&self) -> f32 {
        self.phi
    }

    #[inline]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    #[inline]
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Sets the polar angle. The input surface speaks degrees; conversion to
    /// radians happens here and nowhere else.
    #[inline]
    pub fn set_theta_degrees(&mut self, degrees: f32) {
        self.theta = degrees.to_radians();
    }

    /// Sets the azimuthal angle, in degrees (see [`set_theta_degrees`]).
    ///
    /// [`set_theta_degrees`]: CameraState::set_theta_degrees
    #[inline]
    pub fn set_phi_degrees(&mut self, degrees: f32) {
        self.phi = degrees.to_radians();
    }

    #[inline]
    pub fn set_projection(&mut self, projection: Projection) {
        self.projection = projection;
    }

    /// Eye position on the orbit sphere:
    /// `radius * (sinθ·cosφ, sinθ·sinφ, cosθ)`.
    pub fn eye_position(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        self.radius * Vec3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta)
    }

    /// View transform: look from the eye toward the origin, `+Y` up.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), Vec3::ZERO, Vec3::Y)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn initial_defaults() {
        let cam = CameraState::initial();
        assert_eq!(cam.radius(), 6.0);
        assert_relative_eq!(cam.theta(), std::f32::consts::FRAC_PI_4);
        assert_relative_eq!(cam.phi(), std::f32::consts::FRAC_PI_4);
        assert_eq!(cam.projection(), Projection::Perspective);
    }

    #[test]
    fn setters_convert_degrees_to_radians() {
        let mut cam = CameraState::initial();
        cam.set_theta_degrees(90.0);
        cam.set_phi_degrees(180.0);
        assert_relative_eq!(cam.theta(), std::f32::consts::FRAC_PI_2);
        assert_relative_eq!(cam.phi(), std::f32::consts::PI);
    }

    #[test]
    fn eye_on_equator_at_zero_azimuth_is_on_the_x_axis() {
        let mut cam = CameraState::initial();
        cam.set_theta_degrees(90.0);
        cam.set_phi_degrees(0.0);
        let eye = cam.eye_position();
        assert_relative_eq!(eye.x, 6.0, epsilon = 1e-5);
        assert_relative_eq!(eye.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn view_matrix_maps_eye_to_view_origin() {
        let cam = CameraState::initial();
        let mapped = cam.view_matrix().transform_point3(cam.eye_position());
        assert_relative_eq!(mapped.length(), 0.0, epsilon = 1e-4);
    }

    #[test]
    fn view_matrix_places_target_ahead_at_orbit_distance() {
        let cam = CameraState::initial();
        let origin_in_view = cam.view_matrix().transform_point3(Vec3::ZERO);
        assert_relative_eq!(origin_in_view.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(origin_in_view.y, 0.0, epsilon = 1e-4);
        assert_relative_eq!(origin_in_view.z, -cam.radius(), epsilon = 1e-4);
    }
}

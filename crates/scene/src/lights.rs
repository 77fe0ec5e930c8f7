//! Light set for the logo scene
//!
//! Three lights, created once at scene assembly with fixed defaults and
//! mutated at any time by the debug panel. The renderer reads the current
//! values when it builds its uniform buffers, so changes take effect on
//! the next frame without any explicit propagation step.

use glam::{EulerRot, Mat3, Vec3};

/// Uniform light with no direction or position.
#[derive(Debug, Clone, Copy)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 2.0,
        }
    }
}

/// Sun-style light shining from `position` toward the origin.
#[derive(Debug, Clone, Copy)]
pub struct DirectionalLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing from the scene toward the light.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        self.position.normalize_or_zero()
    }
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 0.0,
            position: Vec3::new(5.0, 5.0, 5.0),
        }
    }
}

/// Rectangular plate emitting from its front face, along local -Z.
///
/// Position and rotation are the panel-tunable fields; width and height
/// stay fixed for this scene.
#[derive(Debug, Clone, Copy)]
pub struct RectAreaLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
    /// Euler angles (radians, XYZ order).
    pub rotation: Vec3,
    pub width: f32,
    pub height: f32,
}

impl RectAreaLight {
    /// World-space emission direction of the plate's front face.
    #[must_use]
    pub fn emission_direction(&self) -> Vec3 {
        let basis = Mat3::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        basis * Vec3::NEG_Z
    }
}

impl Default for RectAreaLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 3.0,
            position: Vec3::new(0.0, 0.0, 3.0),
            rotation: Vec3::ZERO,
            width: 3.0,
            height: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rect_light_faces_the_origin() {
        let light = RectAreaLight::default();
        // Plate at +Z with no rotation emits along -Z, toward the logo.
        assert!((light.emission_direction() - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn rect_light_rotation_turns_the_plate() {
        let light = RectAreaLight {
            rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
            ..RectAreaLight::default()
        };
        // Quarter turn around Y swings -Z onto -X.
        assert!((light.emission_direction() - Vec3::NEG_X).length() < 1e-5);
    }

    #[test]
    fn directional_light_direction_is_normalized() {
        let light = DirectionalLight::default();
        assert!((light.direction().length() - 1.0).abs() < 1e-6);
    }
}

//! Per-frame rotation of the logo group
//!
//! The render loop adds a [`RotationSpeed`] into a [`RotationState`] once
//! per frame. The accumulation is unbounded on purpose: angles are never
//! wrapped or clamped, matching the visual behavior of a demo that spins
//! forever.

use glam::{EulerRot, Mat4};

/// Orientation the logo starts in: flat spin with a quarter turn around Z.
pub const STARTING_ROTATION: (f32, f32, f32) = (0.0, 0.0, std::f32::consts::FRAC_PI_2);

/// Euler angles (radians, XYZ order) applied to the model group each frame.
///
/// Owned exclusively by the render loop; nothing else reads or writes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    /// Rotation state at the fixed starting pose.
    #[must_use]
    pub fn starting_pose() -> Self {
        let (x, y, z) = STARTING_ROTATION;
        Self { x, y, z }
    }

    /// Add one frame's worth of speed on each axis.
    pub fn advance(&mut self, speed: &RotationSpeed) {
        self.x += speed.x;
        self.y += speed.y;
        self.z += speed.z;
    }

    /// Model matrix for the current orientation.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.x, self.y, self.z)
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::starting_pose()
    }
}

/// Radians added to each rotation axis per frame.
///
/// Written by the debug panel, read by the render loop. Both run on the
/// same thread, one callback at a time, so no synchronization is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSpeed {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for RotationSpeed {
    fn default() -> Self {
        Self {
            x: 0.005,
            y: 0.005,
            z: 0.005,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn starting_pose_is_quarter_turn_around_z() {
        let state = RotationState::starting_pose();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, FRAC_PI_2);
    }

    #[test]
    fn advance_adds_speed_componentwise() {
        let mut state = RotationState::starting_pose();
        let speed = RotationSpeed {
            x: 0.01,
            y: -0.02,
            z: 0.03,
        };
        state.advance(&speed);
        assert!((state.x - 0.01).abs() < 1e-6);
        assert!((state.y + 0.02).abs() < 1e-6);
        assert!((state.z - (FRAC_PI_2 + 0.03)).abs() < 1e-6);
    }

    #[test]
    fn accumulation_never_wraps() {
        let mut state = RotationState::starting_pose();
        let speed = RotationSpeed {
            x: 0.1,
            y: 0.1,
            z: 0.1,
        };
        for _ in 0..1000 {
            state.advance(&speed);
        }
        // 1000 frames at 0.1 rad/frame is far past 2*pi; the accumulator
        // keeps counting instead of wrapping.
        assert!(state.x > 99.0);
    }

    #[test]
    fn matrix_of_starting_pose_rotates_x_axis_to_y() {
        let state = RotationState::starting_pose();
        let rotated = state.matrix().transform_vector3(glam::Vec3::X);
        assert!((rotated - glam::Vec3::Y).length() < 1e-5);
    }
}

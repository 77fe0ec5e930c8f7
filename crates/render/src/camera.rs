//! Camera and orbit controller
//!
//! This module provides a perspective camera plus orbit-style controls:
//! drag to rotate around a fixed look-at target, scroll to zoom, with
//! motion damping so the view glides to a stop.

use glam::{Mat4, Vec3};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};

/// Keep the orbit off the poles so the view never flips.
const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 1e-3;

/// Perspective camera looking at the logo.
pub struct Camera {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector of the camera.
    pub up: Vec3,
    /// Aspect ratio of the render target.
    pub aspect: f32,
    /// Field of view in radians.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Create the camera at its fixed initial pose.
    #[must_use]
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 2.2, 0.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            up: Vec3::Y,
            aspect,
            fovy: 75.0f32.to_radians(),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    /// Update the aspect ratio when the viewport changes.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Combined view projection matrix for the current pose.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }
}

/// Damped orbit controls around a fixed target.
///
/// Mouse drags accumulate into pending deltas; [`OrbitControls::update`]
/// applies a damped fraction of them each frame, so a released drag keeps
/// easing the camera for a few frames before settling.
pub struct OrbitControls {
    pub target: Vec3,
    yaw: f32,
    pitch: f32,
    radius: f32,
    yaw_delta: f32,
    pitch_delta: f32,
    scroll: f32,
    damping: f32,
    rotate_speed: f32,
    mouse_pressed: bool,
    last_cursor: Option<(f64, f64)>,
}

impl OrbitControls {
    /// Derive the orbit state from the camera's current pose.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        let mut controls = Self {
            target: camera.target,
            yaw: 0.0,
            pitch: 0.0,
            radius: 1.0,
            yaw_delta: 0.0,
            pitch_delta: 0.0,
            scroll: 0.0,
            damping: 0.05,
            rotate_speed: 0.005,
            mouse_pressed: false,
            last_cursor: None,
        };
        controls.set_from_eye(camera.eye);
        controls
    }

    fn set_from_eye(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        self.radius = offset.length().max(0.05);
        self.pitch = (offset.y / self.radius).clamp(-1.0, 1.0).asin();
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw = offset.x.atan2(offset.z);
    }

    fn eye(&self) -> Vec3 {
        let horizontal = self.radius * self.pitch.cos();
        self.target
            + Vec3::new(
                horizontal * self.yaw.sin(),
                self.radius * self.pitch.sin(),
                horizontal * self.yaw.cos(),
            )
    }

    /// Queue a rotation from a mouse drag, in screen pixels.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.yaw_delta -= dx as f32 * self.rotate_speed;
        self.pitch_delta += dy as f32 * self.rotate_speed;
    }

    /// Queue a zoom step; positive moves the camera closer.
    pub fn zoom(&mut self, amount: f32) {
        self.scroll += amount;
    }

    /// Feed a window event into the controls.
    ///
    /// Returns `true` when the event was a camera interaction.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.mouse_pressed = *state == ElementState::Pressed;
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.mouse_pressed {
                    if let Some((lx, ly)) = self.last_cursor {
                        self.rotate(position.x - lx, position.y - ly);
                    }
                }
                self.last_cursor = Some((position.x, position.y));
                self.mouse_pressed
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y * 0.1,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.02,
                };
                self.zoom(amount);
                true
            }
            _ => false,
        }
    }

    /// Re-derive the orbit after the panel moved the camera eye height.
    pub fn set_eye_height(&mut self, camera: &mut Camera, height: f32) {
        let mut eye = camera.eye;
        eye.y = height;
        self.set_from_eye(eye);
        camera.eye = self.eye();
    }

    /// Advance the damped look-at recalculation by one step and write the
    /// resulting pose into the camera.
    pub fn update(&mut self, camera: &mut Camera) {
        self.yaw += self.yaw_delta * self.damping;
        self.pitch += self.pitch_delta * self.damping;
        self.yaw_delta *= 1.0 - self.damping;
        self.pitch_delta *= 1.0 - self.damping;
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);

        if self.scroll != 0.0 {
            self.radius = (self.radius * (1.0 - self.scroll * 0.5)).max(0.05);
            self.scroll = 0.0;
        }

        camera.eye = self.eye();
        camera.target = self.target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settle(controls: &mut OrbitControls, camera: &mut Camera, steps: usize) {
        for _ in 0..steps {
            controls.update(camera);
        }
    }

    #[test]
    fn camera_keeps_its_configured_frustum() {
        let camera = Camera::new(16.0 / 9.0);
        assert!((camera.fovy - 75.0f32.to_radians()).abs() < 1e-6);
        assert!((camera.znear - 0.1).abs() < 1e-6);
        assert!((camera.zfar - 100.0).abs() < 1e-6);
    }

    #[test]
    fn set_aspect_only_touches_aspect() {
        let mut camera = Camera::new(1.0);
        let eye = camera.eye;
        camera.set_aspect(2.0);
        assert_eq!(camera.aspect, 2.0);
        assert_eq!(camera.eye, eye);
    }

    #[test]
    fn update_keeps_the_eye_on_the_orbit_sphere() {
        let mut camera = Camera::new(1.0);
        let mut controls = OrbitControls::from_camera(&camera);
        let radius = (camera.eye - camera.target).length();

        controls.rotate(120.0, -40.0);
        settle(&mut controls, &mut camera, 200);

        let settled = (camera.eye - camera.target).length();
        assert!((settled - radius).abs() < 1e-3);
    }

    #[test]
    fn damped_drag_eventually_applies_in_full() {
        let mut camera = Camera::new(1.0);
        camera.eye = Vec3::new(0.0, 1.0, 3.0);
        let mut controls = OrbitControls::from_camera(&camera);

        controls.rotate(100.0, 0.0);
        settle(&mut controls, &mut camera, 500);

        // 100 px at 0.005 rad/px, full delta applied once damping drains.
        assert!((controls.yaw - (-0.5)).abs() < 1e-3);
    }

    #[test]
    fn pitch_never_reaches_the_pole() {
        let mut camera = Camera::new(1.0);
        camera.eye = Vec3::new(0.0, 1.0, 3.0);
        let mut controls = OrbitControls::from_camera(&camera);

        controls.rotate(0.0, 1e6);
        settle(&mut controls, &mut camera, 500);

        assert!(controls.pitch <= PITCH_LIMIT);
        assert!(camera.eye.is_finite());
    }

    #[test]
    fn eye_height_write_rederives_the_orbit() {
        let mut camera = Camera::new(1.0);
        let mut controls = OrbitControls::from_camera(&camera);

        controls.set_eye_height(&mut camera, 3.0);
        assert!((camera.eye.y - 3.0).abs() < 1e-5);

        // The next update step holds the pose instead of snapping back.
        controls.update(&mut camera);
        assert!((camera.eye.y - 3.0).abs() < 1e-4);
    }
}

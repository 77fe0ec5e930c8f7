//! Scene assembly
//!
//! Builds the whole CPU-side scene once at startup: lights, fog, rotation
//! state and the empty model group, all at their hard-coded defaults.
//! Every tunable field here is mutated in place by the debug panel and
//! read by the renderer on the next frame.

use crate::animation::AnimationMixer;
use crate::fog::Fog;
use crate::group::ModelGroup;
use crate::lights::{AmbientLight, DirectionalLight, RectAreaLight};
use crate::rotation::{RotationSpeed, RotationState};

/// Default camera eye height, matching the initial camera position.
pub const DEFAULT_CAMERA_HEIGHT: f32 = 2.2;

/// The complete mutable scene the render loop draws every frame.
#[derive(Debug)]
pub struct Scene {
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    pub rect: RectAreaLight,
    pub fog: Fog,
    pub rotation: RotationState,
    pub rotation_speed: RotationSpeed,
    /// Panel-tunable camera eye height; the orbit controls re-derive their
    /// spherical coordinates from it when it changes.
    pub camera_height: f32,
    pub group: ModelGroup,
    /// Present only when the loaded asset carries animation clips.
    pub mixer: Option<AnimationMixer>,
}

impl Scene {
    /// Assemble the scene with its fixed initial parameter values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ambient: AmbientLight::default(),
            directional: DirectionalLight::default(),
            rect: RectAreaLight::default(),
            fog: Fog::default(),
            rotation: RotationState::starting_pose(),
            rotation_speed: RotationSpeed::default(),
            camera_height: DEFAULT_CAMERA_HEIGHT,
            group: ModelGroup::new(),
            mixer: None,
        }
    }

    /// One animation step: advance the mixer when present, then add the
    /// current speed into the rotation accumulator.
    pub fn advance(&mut self, delta: f32) {
        if let Some(mixer) = self.mixer.as_mut() {
            mixer.advance(delta);
        }
        self.rotation.advance(&self.rotation_speed);
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn defaults_match_the_fixed_startup_values() {
        let scene = Scene::new();
        assert!((scene.ambient.intensity - 2.0).abs() < f32::EPSILON);
        assert!((scene.directional.intensity - 0.0).abs() < f32::EPSILON);
        assert!((scene.rect.intensity - 3.0).abs() < f32::EPSILON);
        assert!((scene.fog.near - 1.0).abs() < f32::EPSILON);
        assert!((scene.fog.far - 4.0).abs() < f32::EPSILON);
        assert!((scene.camera_height - 2.2).abs() < f32::EPSILON);
        assert!((scene.rotation.z - FRAC_PI_2).abs() < f32::EPSILON);
        assert!(scene.group.is_empty());
        assert!(scene.mixer.is_none());
    }

    #[test]
    fn advance_steps_rotation_with_current_speed() {
        let mut scene = Scene::new();
        scene.rotation_speed = RotationSpeed {
            x: 0.01,
            y: 0.0,
            z: 0.0,
        };
        scene.advance(0.016);
        assert!((scene.rotation.x - 0.01).abs() < 1e-6);
    }

    #[test]
    fn advance_drives_the_mixer_when_present() {
        let mut scene = Scene::new();
        scene.mixer = Some(AnimationMixer::new());
        scene.advance(0.5);
        assert!((scene.mixer.unwrap().elapsed() - 0.5).abs() < 1e-6);
    }
}

//! GPU-compatible type definitions for rendering
//!
//! Uniform buffer structures mirrored by the WGSL shaders. Everything is
//! `Pod` so it can be written to the GPU with a plain byte copy; vec3
//! fields are widened to vec4 to satisfy uniform alignment rules.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use scene::Scene;

use crate::camera::Camera;

fn pack(v: Vec3, w: f32) -> [f32; 4] {
    [v.x, v.y, v.z, w]
}

/// Per-frame camera and model transforms.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct GlobalsUniform {
    /// Combined view projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Model matrix of the logo group.
    pub model: [[f32; 4]; 4],
    /// Camera eye position, xyz; w unused.
    pub camera_pos: [f32; 4],
}

impl GlobalsUniform {
    #[must_use]
    pub fn new(camera: &Camera, model: Mat4) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            model: model.to_cols_array_2d(),
            camera_pos: pack(camera.eye, 0.0),
        }
    }
}

/// Current state of the three scene lights.
///
/// Intensities ride in the `w` lane of their color vectors.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct LightsUniform {
    /// Ambient rgb + intensity.
    pub ambient: [f32; 4],
    /// Unit direction toward the directional light, xyz.
    pub sun_direction: [f32; 4],
    /// Directional rgb + intensity.
    pub sun_color: [f32; 4],
    /// Rect plate center, xyz.
    pub rect_position: [f32; 4],
    /// Rect plate emission direction, xyz.
    pub rect_direction: [f32; 4],
    /// Rect rgb + intensity.
    pub rect_color: [f32; 4],
    /// Rect plate width and height; zw unused.
    pub rect_size: [f32; 4],
}

impl LightsUniform {
    #[must_use]
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            ambient: pack(scene.ambient.color, scene.ambient.intensity),
            sun_direction: pack(scene.directional.direction(), 0.0),
            sun_color: pack(scene.directional.color, scene.directional.intensity),
            rect_position: pack(scene.rect.position, 0.0),
            rect_direction: pack(scene.rect.emission_direction(), 0.0),
            rect_color: pack(scene.rect.color, scene.rect.intensity),
            rect_size: [scene.rect.width, scene.rect.height, 0.0, 0.0],
        }
    }
}

/// Linear fog parameters.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FogUniform {
    /// Fog rgb + near distance.
    pub color_near: [f32; 4],
    /// Far distance in x; yzw unused.
    pub params: [f32; 4],
}

impl FogUniform {
    #[must_use]
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            color_near: pack(scene.fog.color, scene.fog.near),
            params: [scene.fog.far, 0.0, 0.0, 0.0],
        }
    }
}

/// Vertex of the coordinate-axes overlay.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct AxisVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Axes-helper line list: X red, Y green, Z blue, each 2 units long.
pub const AXES_VERTICES: [AxisVertex; 6] = [
    AxisVertex {
        position: [0.0, 0.0, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    AxisVertex {
        position: [2.0, 0.0, 0.0],
        color: [1.0, 0.0, 0.0],
    },
    AxisVertex {
        position: [0.0, 0.0, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    AxisVertex {
        position: [0.0, 2.0, 0.0],
        color: [0.0, 1.0, 0.0],
    },
    AxisVertex {
        position: [0.0, 0.0, 0.0],
        color: [0.0, 0.0, 1.0],
    },
    AxisVertex {
        position: [0.0, 0.0, 2.0],
        color: [0.0, 0.0, 1.0],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lights_uniform_carries_live_intensities() {
        let mut scene = Scene::new();
        scene.ambient.intensity = 5.5;
        scene.rect.intensity = 12.0;
        let uniform = LightsUniform::from_scene(&scene);
        assert!((uniform.ambient[3] - 5.5).abs() < 1e-6);
        assert!((uniform.rect_color[3] - 12.0).abs() < 1e-6);
    }

    #[test]
    fn fog_uniform_packs_near_and_far() {
        let scene = Scene::new();
        let uniform = FogUniform::from_scene(&scene);
        assert!((uniform.color_near[3] - 1.0).abs() < 1e-6);
        assert!((uniform.params[0] - 4.0).abs() < 1e-6);
    }

    #[test]
    fn globals_uniform_records_the_eye() {
        let camera = Camera::new(1.0);
        let uniform = GlobalsUniform::new(&camera, Mat4::IDENTITY);
        assert!((uniform.camera_pos[1] - 2.2).abs() < 1e-6);
    }
}

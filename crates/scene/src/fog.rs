//! Linear distance fog

use glam::Vec3;

/// Linear fog blended in over the `[near, far]` distance band.
///
/// Nothing enforces `near <= far`; an inverted band is passed to the
/// shader as-is and degenerates visually rather than erroring.
#[derive(Debug, Clone, Copy)]
pub struct Fog {
    pub color: Vec3,
    pub near: f32,
    pub far: f32,
}

impl Default for Fog {
    fn default() -> Self {
        Self {
            color: Vec3::new(0.0, 0.0, 1.0),
            near: 1.0,
            far: 4.0,
        }
    }
}

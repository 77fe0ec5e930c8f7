//! Ranges for the live-tunable parameters
//!
//! Each debug-panel control is declared as a [`ParamRange`] (min, max,
//! step). The panel clamps every write at this boundary, which is what
//! keeps stored values inside their declared range; nothing else guards
//! the fields.

/// Inclusive bounds and UI step granularity for one tunable value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f64,
}

impl ParamRange {
    /// Clamp a candidate value to `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Rotation speed per axis, radians per frame.
pub const ROTATION_SPEED: ParamRange = ParamRange {
    min: -0.1,
    max: 0.1,
    step: 0.001,
};

/// Ambient light intensity.
pub const AMBIENT_INTENSITY: ParamRange = ParamRange {
    min: 0.0,
    max: 8.0,
    step: 0.1,
};

/// Directional light intensity.
pub const DIRECTIONAL_INTENSITY: ParamRange = ParamRange {
    min: 0.0,
    max: 8.0,
    step: 0.1,
};

/// Rect-area light intensity.
pub const RECT_INTENSITY: ParamRange = ParamRange {
    min: 0.0,
    max: 20.0,
    step: 0.1,
};

/// Rect-area light position, each axis.
pub const RECT_POSITION: ParamRange = ParamRange {
    min: -10.0,
    max: 10.0,
    step: 0.1,
};

/// Rect-area light rotation, each axis.
pub const RECT_ROTATION: ParamRange = ParamRange {
    min: -std::f32::consts::PI,
    max: std::f32::consts::PI,
    step: 0.1,
};

/// Fog near and far distances share one range; near <= far is not
/// enforced anywhere.
pub const FOG_DISTANCE: ParamRange = ParamRange {
    min: 0.0,
    max: 8.0,
    step: 0.1,
};

/// Camera eye height above the floor.
pub const CAMERA_HEIGHT: ParamRange = ParamRange {
    min: 0.0,
    max: 5.0,
    step: 0.01,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_passes_in_range_values_through() {
        assert_eq!(AMBIENT_INTENSITY.clamp(3.5), 3.5);
        assert_eq!(ROTATION_SPEED.clamp(-0.05), -0.05);
    }

    #[test]
    fn clamp_snaps_below_min_to_min() {
        assert_eq!(AMBIENT_INTENSITY.clamp(-1.0), 0.0);
        assert_eq!(ROTATION_SPEED.clamp(-7.0), -0.1);
    }

    #[test]
    fn clamp_snaps_above_max_to_max() {
        assert_eq!(RECT_INTENSITY.clamp(99.0), 20.0);
        assert_eq!(CAMERA_HEIGHT.clamp(5.01), 5.0);
    }

    #[test]
    fn clamp_keeps_boundary_values() {
        assert_eq!(FOG_DISTANCE.clamp(0.0), 0.0);
        assert_eq!(FOG_DISTANCE.clamp(8.0), 8.0);
    }
}

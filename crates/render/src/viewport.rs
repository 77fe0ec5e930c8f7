//! Viewport sizing
//!
//! Tracks the window's physical size and scale factor and derives the
//! render-surface resolution from them. The device pixel ratio is capped
//! at 2 so high-density displays don't quadruple the fill-rate cost.

/// Highest device-pixel-ratio the draw surface will honor.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

/// Current window dimensions as seen by the resize handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    /// Physical window width in hardware pixels.
    pub width: u32,
    /// Physical window height in hardware pixels.
    pub height: u32,
    /// Window scale factor (hardware pixels per logical pixel).
    pub scale_factor: f64,
}

impl ViewportSize {
    #[must_use]
    pub fn new(width: u32, height: u32, scale_factor: f64) -> Self {
        Self {
            width,
            height,
            scale_factor,
        }
    }

    /// Aspect ratio used for the camera projection.
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Draw-surface resolution with the pixel ratio capped.
    ///
    /// Below the cap this is the physical size unchanged; above it the
    /// resolution is scaled down so the effective ratio is
    /// [`MAX_PIXEL_RATIO`]. Never returns a zero dimension.
    #[must_use]
    pub fn surface_resolution(&self) -> (u32, u32) {
        let scale = if self.scale_factor > MAX_PIXEL_RATIO {
            MAX_PIXEL_RATIO / self.scale_factor
        } else {
            1.0
        };
        let width = (f64::from(self.width) * scale).round() as u32;
        let height = (f64::from(self.height) * scale).round() as u32;
        (width.max(1), height.max(1))
    }

    /// Pixels per point for UI layout, honoring the same cap.
    #[must_use]
    pub fn pixels_per_point(&self) -> f32 {
        self.scale_factor.min(MAX_PIXEL_RATIO) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_matches_window_at_ordinary_density() {
        let viewport = ViewportSize::new(1280, 720, 1.0);
        assert_eq!(viewport.surface_resolution(), (1280, 720));
        assert!((viewport.aspect() - 1280.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn pixel_ratio_is_capped_at_two() {
        // A 3x display reports 3840x2160 physical for a 1280x720 window;
        // the cap renders at 2x, i.e. 2560x1440.
        let viewport = ViewportSize::new(3840, 2160, 3.0);
        assert_eq!(viewport.surface_resolution(), (2560, 1440));
        assert!((viewport.pixels_per_point() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn retina_density_passes_through_unscaled() {
        let viewport = ViewportSize::new(2560, 1440, 2.0);
        assert_eq!(viewport.surface_resolution(), (2560, 1440));
    }

    #[test]
    fn resize_is_idempotent_for_unchanged_dimensions() {
        let first = ViewportSize::new(1920, 1080, 1.5);
        let second = ViewportSize::new(1920, 1080, 1.5);
        assert_eq!(first, second);
        assert_eq!(first.surface_resolution(), second.surface_resolution());
        assert!((first.aspect() - second.aspect()).abs() < f32::EPSILON);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let viewport = ViewportSize::new(800, 0, 1.0);
        assert!(viewport.aspect().is_finite());
        assert_eq!(viewport.surface_resolution().1, 1);
    }
}

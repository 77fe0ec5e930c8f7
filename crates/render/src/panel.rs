//! Debug panel
//!
//! An egui overlay exposing every live-tunable scene parameter as a
//! slider. The panel starts hidden; the first key press reveals it (and
//! the axes overlay with it) for the rest of the run, with no way to hide
//! it again. Slider writes are clamped to their declared range and
//! land directly in the scene structs the render loop reads next frame.

use egui_wgpu::ScreenDescriptor;
use scene::params::{
    AMBIENT_INTENSITY, CAMERA_HEIGHT, DIRECTIONAL_INTENSITY, FOG_DISTANCE, RECT_INTENSITY,
    RECT_POSITION, RECT_ROTATION, ROTATION_SPEED,
};
use scene::{ParamRange, Scene};
use winit::event::WindowEvent;
use winit::window::Window;

use crate::viewport::ViewportSize;

/// Panel visibility; revealing is one-way.
#[derive(Debug, Default)]
pub struct Panel {
    visible: bool,
}

impl Panel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the panel visible. Further calls are no-ops.
    pub fn reveal(&mut self) {
        if !self.visible {
            tracing::info!("debug panel revealed");
            self.visible = true;
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

/// One slider bound to a live scene field.
fn bind(ui: &mut egui::Ui, value: &mut f32, range: ParamRange, label: &str) {
    ui.add(
        egui::Slider::new(value, range.min..=range.max)
            .step_by(range.step)
            .clamp_to_range(true)
            .text(label),
    );
}

/// Build the control set: rotation speed per axis, the three light
/// intensities, rect plate position/rotation, fog band and camera height.
fn controls_ui(ctx: &egui::Context, scene: &mut Scene) {
    egui::Window::new("Tweaks")
        .default_width(300.0)
        .show(ctx, |ui| {
            bind(ui, &mut scene.rotation_speed.x, ROTATION_SPEED, "Rotation Speed X");
            bind(ui, &mut scene.rotation_speed.y, ROTATION_SPEED, "Rotation Speed Y");
            bind(ui, &mut scene.rotation_speed.z, ROTATION_SPEED, "Rotation Speed Z");

            bind(ui, &mut scene.ambient.intensity, AMBIENT_INTENSITY, "Ambient Light Intensity");
            bind(
                ui,
                &mut scene.directional.intensity,
                DIRECTIONAL_INTENSITY,
                "Directional Light Intensity",
            );

            bind(ui, &mut scene.rect.intensity, RECT_INTENSITY, "Rectangle Light Intensity");
            bind(ui, &mut scene.rect.position.x, RECT_POSITION, "Rectangle Light PosX");
            bind(ui, &mut scene.rect.position.y, RECT_POSITION, "Rectangle Light PosY");
            bind(ui, &mut scene.rect.position.z, RECT_POSITION, "Rectangle Light PosZ");
            bind(ui, &mut scene.rect.rotation.x, RECT_ROTATION, "Rectangle Light RotX");
            bind(ui, &mut scene.rect.rotation.y, RECT_ROTATION, "Rectangle Light RotY");
            bind(ui, &mut scene.rect.rotation.z, RECT_ROTATION, "Rectangle Light RotZ");

            bind(ui, &mut scene.fog.near, FOG_DISTANCE, "Fog Near");
            bind(ui, &mut scene.fog.far, FOG_DISTANCE, "Fog Far");

            bind(ui, &mut scene.camera_height, CAMERA_HEIGHT, "Camera Position Y");
        });
}

/// egui state plus the GPU resources to paint it.
pub struct PanelRenderer {
    ctx: egui::Context,
    winit_state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

impl PanelRenderer {
    pub fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat, window: &Window) -> Self {
        let ctx = egui::Context::default();
        let winit_state = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
        );
        let renderer = egui_wgpu::Renderer::new(device, surface_format, None, 1);
        Self {
            ctx,
            winit_state,
            renderer,
        }
    }

    /// Forward a window event to egui.
    ///
    /// Returns `true` when egui consumed it (pointer over the panel),
    /// which keeps drags on the sliders from also orbiting the camera.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.winit_state.on_window_event(window, event).consumed
    }

    /// Run the UI for this frame and paint it over the scene.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        encoder: &mut wgpu::CommandEncoder,
        window: &Window,
        view: &wgpu::TextureView,
        viewport: &ViewportSize,
        scene: &mut Scene,
    ) {
        let raw_input = self.winit_state.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| controls_ui(ctx, scene));
        self.winit_state
            .handle_platform_output(window, full_output.platform_output);

        let (width, height) = viewport.surface_resolution();
        let screen = ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: viewport.pixels_per_point(),
        };
        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        for (id, delta) in &full_output.textures_delta.set {
            self.renderer.update_texture(device, queue, *id, delta);
        }
        self.renderer
            .update_buffers(device, queue, encoder, &paint_jobs, &screen);

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Panel Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.renderer.render(&mut rpass, &paint_jobs, &screen);
        }

        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_starts_hidden() {
        let panel = Panel::new();
        assert!(!panel.is_visible());
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut panel = Panel::new();
        panel.reveal();
        assert!(panel.is_visible());
        // Any number of further key presses leaves it visible.
        for _ in 0..10 {
            panel.reveal();
            assert!(panel.is_visible());
        }
    }

    #[test]
    fn slider_ranges_clamp_writes() {
        // The slider enforces the same bounds ParamRange declares; a write
        // past either end stores the boundary value.
        assert_eq!(AMBIENT_INTENSITY.clamp(100.0), AMBIENT_INTENSITY.max);
        assert_eq!(ROTATION_SPEED.clamp(-1.0), ROTATION_SPEED.min);
    }
}

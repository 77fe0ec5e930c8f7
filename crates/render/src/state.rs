//! Per-frame application state
//!
//! One context struct owns the window, the GPU resources, the camera and
//! the scene, and is borrowed by the event loop for input, resize and
//! redraw handling. No module-level globals anywhere.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;
use winit::event::{ElementState, Ime, KeyEvent, WindowEvent};
use winit::window::Window;

use scene::{spawn_load, MeshData, PendingModel, Scene};

use crate::camera::{Camera, OrbitControls};
use crate::gpu_types::{FogUniform, GlobalsUniform, LightsUniform, AXES_VERTICES};
use crate::panel::{Panel, PanelRenderer};
use crate::pipeline;
use crate::time::FrameTimer;
use crate::viewport::ViewportSize;

/// Clear color: the fog blue, fully transparent.
const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 0.0,
};

/// Uploaded vertex/index buffers for the logo mesh.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

fn upload_mesh(device: &wgpu::Device, mesh: &MeshData) -> GpuMesh {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Logo Vertex Buffer"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Logo Index Buffer"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });
    GpuMesh {
        vertex_buffer,
        index_buffer,
        index_count: mesh.index_count(),
    }
}

pub struct State {
    pub window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    viewport: ViewportSize,
    depth_view: wgpu::TextureView,
    mesh_pipeline: wgpu::RenderPipeline,
    axes_pipeline: wgpu::RenderPipeline,
    globals_buffer: wgpu::Buffer,
    lights_buffer: wgpu::Buffer,
    fog_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    axes_buffer: wgpu::Buffer,
    mesh: Option<GpuMesh>,
    scene: Scene,
    camera: Camera,
    controls: OrbitControls,
    panel: Panel,
    panel_renderer: PanelRenderer,
    pending_model: Option<PendingModel>,
    timer: FrameTimer,
    applied_camera_height: f32,
    ime_composing: bool,
}

impl State {
    /// Assemble the scene and every GPU resource, then kick off the
    /// asynchronous model load.
    pub async fn new(window: Arc<Window>, model_path: &Path) -> Result<Self> {
        let instance = wgpu::Instance::default();
        let surface = unsafe {
            instance.create_surface_unsafe(wgpu::SurfaceTargetUnsafe::from_window(&*window)?)?
        };
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to get adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Viewer Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("failed to request device")?;

        let size = window.inner_size();
        let viewport = ViewportSize::new(size.width, size.height, window.scale_factor());
        let (width, height) = viewport.surface_resolution();
        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            desired_maximum_frame_latency: 2,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let scene = Scene::new();
        let camera = Camera::new(viewport.aspect());
        let controls = OrbitControls::from_camera(&camera);

        let globals = GlobalsUniform::new(&camera, scene.rotation.matrix());
        let globals_buffer = pipeline::create_uniform_buffer(&device, "Globals Buffer", &globals);
        let lights_buffer = pipeline::create_uniform_buffer(
            &device,
            "Lights Buffer",
            &LightsUniform::from_scene(&scene),
        );
        let fog_buffer =
            pipeline::create_uniform_buffer(&device, "Fog Buffer", &FogUniform::from_scene(&scene));

        let bind_group_layout = pipeline::create_bind_group_layout(&device);
        let bind_group = pipeline::create_bind_group(
            &device,
            &bind_group_layout,
            &globals_buffer,
            &lights_buffer,
            &fog_buffer,
        );
        let mesh_pipeline = pipeline::create_mesh_pipeline(&device, &bind_group_layout, format);
        let axes_pipeline = pipeline::create_axes_pipeline(&device, &bind_group_layout, format);
        let depth_view = pipeline::create_depth_view(&device, width, height);

        let axes_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Axes Vertex Buffer"),
            contents: bytemuck::cast_slice(&AXES_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let panel_renderer = PanelRenderer::new(&device, format, &window);

        // The load runs while the loop animates the still-empty group.
        let pending_model = Some(spawn_load(model_path.to_path_buf()));

        let applied_camera_height = scene.camera_height;

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            viewport,
            depth_view,
            mesh_pipeline,
            axes_pipeline,
            globals_buffer,
            lights_buffer,
            fog_buffer,
            bind_group,
            axes_buffer,
            mesh: None,
            scene,
            camera,
            controls,
            panel: Panel::new(),
            panel_renderer,
            pending_model,
            timer: FrameTimer::new(),
            applied_camera_height,
            ime_composing: false,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// React to a viewport change: camera projection, surface resolution
    /// and depth buffer all follow the new size.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            // Minimized; keep the previous configuration.
            return;
        }
        self.viewport = ViewportSize::new(
            new_size.width,
            new_size.height,
            self.window.scale_factor(),
        );
        let (width, height) = self.viewport.surface_resolution();
        self.config.width = width;
        self.config.height = height;
        self.camera.set_aspect(self.viewport.aspect());
        self.surface.configure(&self.device, &self.config);
        self.depth_view = pipeline::create_depth_view(&self.device, width, height);
    }

    /// Route a window event to the panel, the reveal key handling, or the
    /// orbit controls. Returns `true` when the event was consumed.
    pub fn input(&mut self, event: &WindowEvent) -> bool {
        // egui only sees events once the panel is visible; while hidden it
        // would otherwise buffer input it never drains.
        if self.panel.is_visible() && self.panel_renderer.on_window_event(&self.window, event) {
            return true;
        }
        match event {
            WindowEvent::Ime(ime) => {
                self.ime_composing = matches!(ime, Ime::Preedit(text, _) if !text.is_empty());
                true
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                // Keys pressed mid-IME-composition are text entry, not a
                // reveal request.
                if !self.ime_composing {
                    self.panel.reveal();
                }
                true
            }
            _ => self.controls.handle_event(event),
        }
    }

    /// One animation step: clock, rotation, load handoff, camera.
    pub fn update(&mut self) {
        let delta = self.timer.tick();
        self.scene.advance(delta);

        if let Some(pending) = self.pending_model.take() {
            match pending.poll() {
                Some(Ok(mesh)) => {
                    self.mesh = Some(upload_mesh(&self.device, &mesh));
                    self.scene.group.attach(mesh);
                    tracing::info!("model attached after {:.2}s", self.timer.elapsed());
                }
                // The group stays empty forever; nothing retries.
                Some(Err(err)) => tracing::warn!("model load failed: {err}"),
                // Still decoding; keep polling next frame.
                None => self.pending_model = Some(pending),
            }
        }

        if (self.scene.camera_height - self.applied_camera_height).abs() > f32::EPSILON {
            self.controls
                .set_eye_height(&mut self.camera, self.scene.camera_height);
            self.applied_camera_height = self.scene.camera_height;
        }
        self.controls.update(&mut self.camera);
    }

    /// Draw one frame: scene pass (mesh plus axes overlay once revealed),
    /// then the panel overlay.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let globals = GlobalsUniform::new(&self.camera, self.scene.rotation.matrix());
        self.queue
            .write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
        self.queue.write_buffer(
            &self.lights_buffer,
            0,
            bytemuck::bytes_of(&LightsUniform::from_scene(&self.scene)),
        );
        self.queue.write_buffer(
            &self.fog_buffer,
            0,
            bytemuck::bytes_of(&FogUniform::from_scene(&self.scene)),
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("enc") });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(mesh) = &self.mesh {
                rpass.set_pipeline(&self.mesh_pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                rpass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }

            if self.panel.is_visible() {
                rpass.set_pipeline(&self.axes_pipeline);
                rpass.set_bind_group(0, &self.bind_group, &[]);
                rpass.set_vertex_buffer(0, self.axes_buffer.slice(..));
                rpass.draw(0..AXES_VERTICES.len() as u32, 0..1);
            }
        }

        if self.panel.is_visible() {
            self.panel_renderer.draw(
                &self.device,
                &self.queue,
                &mut encoder,
                &self.window,
                &view,
                &self.viewport,
                &mut self.scene,
            );
        }

        self.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }
}

//! # Windowed renderer for the spinning-logo viewer
//!
//! Owns everything that touches the window or the GPU: surface and device
//! setup, the forward mesh pipeline with its light/fog uniforms, the
//! axes-helper overlay, the damped orbit camera, the egui debug panel and
//! the winit event loop that ties them together. The scene itself lives
//! in the `scene` crate and is only borrowed here, one frame at a time.

pub mod camera;
pub mod gpu_types;
pub mod panel;
pub mod pipeline;
pub mod run;
pub mod state;
pub mod time;
pub mod viewport;

pub use run::run;

//! Event loop wiring
//!
//! Builds the window, constructs the [`State`] context once, and runs the
//! winit event loop until the window is closed. Redraws are requested
//! continuously, so the animation never idles.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

use crate::state::State;

/// Open the viewer window and run until it is closed.
///
/// # Errors
///
/// Returns any error from window creation or GPU setup. Once the loop is
/// running, only surface loss handling applies; there is no pause state
/// and no other recovery path.
pub fn run(model_path: &Path) -> Result<()> {
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Logo Viewer")
            .build(&event_loop)
            .context("failed to create window")?,
    );

    let mut state = pollster::block_on(State::new(window.clone(), model_path))?;

    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == state.window().id() => {
                if !state.input(event) {
                    match event {
                        WindowEvent::CloseRequested => elwt.exit(),
                        WindowEvent::Resized(physical_size) => {
                            state.resize(*physical_size);
                        }
                        WindowEvent::RedrawRequested => {
                            state.update();
                            match state.render() {
                                Ok(()) => {}
                                // Reconfigure the surface if lost
                                Err(wgpu::SurfaceError::Lost) => {
                                    state.resize(state.window.inner_size());
                                }
                                // The system is out of memory, we should probably quit
                                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                // Other errors (Outdated, Timeout) resolve by the next frame
                                Err(e) => tracing::warn!("surface error: {e:?}"),
                            }
                        }
                        _ => {}
                    }
                }
            }
            Event::AboutToWait => {
                state.window().request_redraw();
            }
            _ => {}
        }
    })?;
    Ok(())
}

#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Scene data for the spinning-logo viewer
//!
//! CPU-side description of everything the renderer draws: the rotation
//! state driving the logo, the light set, fog, the model placeholder group
//! and the asynchronous glTF load that eventually fills it. Nothing in
//! this crate touches the window or the GPU, so the whole scene model is
//! unit-testable.
//!
//! ## Key Components
//!
//! -   **Rotation:** [`RotationState`] accumulates [`RotationSpeed`] once
//!     per frame; see the [`rotation`] module.
//! -   **Lights and fog:** [`AmbientLight`], [`DirectionalLight`],
//!     [`RectAreaLight`] and [`Fog`] hold the live parameters the debug
//!     panel mutates and the renderer reads every frame.
//! -   **Model loading:** [`loader::spawn_load`] decodes a glTF file on a
//!     background thread and hands the result to the render loop through
//!     a single-use channel; [`ModelGroup`] accepts the payload at most
//!     once.

pub mod animation;
pub mod fog;
pub mod group;
pub mod lights;
pub mod loader;
pub mod model;
pub mod params;
pub mod rotation;
pub mod scene;

pub use animation::AnimationMixer;
pub use fog::Fog;
pub use group::ModelGroup;
pub use lights::{AmbientLight, DirectionalLight, RectAreaLight};
pub use loader::{spawn_load, PendingModel};
pub use model::{MeshData, ModelError, Vertex};
pub use params::ParamRange;
pub use rotation::{RotationSpeed, RotationState};
pub use scene::Scene;

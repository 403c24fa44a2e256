// src/lib.rs
//! SDF Raymarch
//!
//! Scene flattening, shape packing and compute dispatch for signed-distance
//! raymarching on wgpu.

pub mod config;
pub mod error;
pub mod frame;
pub mod gfx;
pub mod logging;
pub mod prelude;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use config::RaymarchConfig;
pub use error::{RenderError, SceneError};
pub use frame::{render_frame, FrameOutput};

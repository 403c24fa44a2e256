// src/gfx/rendering/mod.rs
//! Compute raymarching
//!
//! GPU context acquisition, dispatch sizing, the WGSL interface prelude and
//! the per-frame compute pass.

pub mod dispatch;
pub mod gpu_context;
pub mod raymarch_pass;
pub mod shader_interface;

// Re-export main types
pub use dispatch::DispatchGrid;
pub use gpu_context::GpuContext;
pub use raymarch_pass::RaymarchPass;
pub use shader_interface::{compose_shader, interface_prelude};

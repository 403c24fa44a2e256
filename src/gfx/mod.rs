//! # Graphics Module
//!
//! Everything between a scene description and a dispatched raymarch kernel.
//!
//! ## Architecture Overview
//!
//! - **Scene** ([`scene`]) - Node hierarchy with shape and light components, shape registry and flattening
//! - **Resources** ([`resources`]) - Packed shape records, frame uniforms, bindings and render targets
//! - **Camera** ([`camera`]) - The [`Camera`](camera::Camera) trait with orbit and fly implementations
//! - **Rendering** ([`rendering`]) - GPU context, dispatch sizing, WGSL interface and the compute pass
//!
//! ## Usage
//!
//! ```no_run
//! use sdf_raymarch::gfx::{rendering::{GpuContext, RaymarchPass}, scene::SceneGraph};
//! use sdf_raymarch::RaymarchConfig;
//!
//! # fn main() -> Result<(), sdf_raymarch::RenderError> {
//! let ctx = GpuContext::new_headless_blocking()?;
//! let kernel = "@compute @workgroup_size(WORKGROUP_SIZE, WORKGROUP_SIZE) fn cs_main() {}";
//! let pass = RaymarchPass::new(&ctx, kernel, &RaymarchConfig::default())?;
//! let scene = SceneGraph::new();
//! # let _ = (pass, scene);
//! # Ok(())
//! # }
//! ```

pub mod camera;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::Camera;
pub use rendering::{GpuContext, RaymarchPass};
pub use scene::SceneGraph;

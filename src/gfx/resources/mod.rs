// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Shape records, frame uniforms, bind groups and the destination image
//! consumed by the raymarch kernel.

pub mod frame_parameters;
pub mod global_bindings;
pub mod shape_buffer;
pub mod texture_resource;

// Re-export main types
pub use frame_parameters::{FrameParameterBuilder, FrameParameters, RaymarchUBO, RaymarchUniforms};
pub use global_bindings::RaymarchBindings;
pub use shape_buffer::{pack, PackedShapes, ShapeBuffer, ShapeRecord, SHAPE_RECORD_SIZE};
pub use texture_resource::{SizedTarget, TargetCache, TargetDescriptor, TextureResource};

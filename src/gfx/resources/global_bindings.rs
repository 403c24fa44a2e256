//! Bind group layout shared by the raymarch kernel
//!
//! Slot order MUST match the `@binding` indices in the interface prelude:
//!
//! | binding | resource                        |
//! |---------|---------------------------------|
//! | 0       | source image (read)             |
//! | 1       | destination image (write)       |
//! | 2       | shape records (storage, read)   |
//! | 3       | frame uniforms                  |

use crate::wgpu_utils::{
    binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc},
    binding_types,
};

use super::{frame_parameters::RaymarchUBO, shape_buffer::ShapeBuffer};

/// Owns the bind group layout; bind groups are rebuilt every frame since
/// the shape buffer is recreated per pass.
pub struct RaymarchBindings {
    bind_group_layout: BindGroupLayoutWithDesc,
}

impl RaymarchBindings {
    pub fn new(device: &wgpu::Device, target_format: wgpu::TextureFormat) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_compute(binding_types::texture_2d_unfilterable())
            .next_binding_compute(binding_types::image_2d(
                target_format,
                wgpu::StorageTextureAccess::WriteOnly,
            ))
            .next_binding_compute(binding_types::storage_buffer_read_only())
            .next_binding_compute(binding_types::uniform())
            .create(device, "Raymarch Bind Group Layout");

        Self { bind_group_layout }
    }

    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout.layout
    }

    /// Creates the bind group for one frame
    pub fn create_bind_group(
        &self,
        device: &wgpu::Device,
        source: &wgpu::TextureView,
        destination: &wgpu::TextureView,
        shapes: &ShapeBuffer,
        uniforms: &RaymarchUBO,
    ) -> wgpu::BindGroup {
        BindGroupBuilder::new(&self.bind_group_layout)
            .texture(source)
            .texture(destination)
            .resource(shapes.binding_resource())
            .resource(uniforms.binding_resource())
            .create(device, "Raymarch Bind Group")
    }
}

//! Packed shape records and the per-frame storage buffer holding them
//!
//! The record layout is shared with the `Shape` struct declared in the
//! interface prelude ([`crate::gfx::rendering::shader_interface`]). Field order,
//! field count and the 56-byte stride must stay in lockstep with it.

use bytemuck::Zeroable;
use wgpu::util::DeviceExt;

use crate::gfx::scene::FlatShape;

/// Multiplier applied to blend strength at pack time
pub const BLEND_STRENGTH_SCALE: f32 = 3.0;

/// Size in bytes of one packed record: 11 floats + 3 ints
pub const SHAPE_RECORD_SIZE: usize = 14 * 4;

/// One shape as the kernel reads it
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ShapeRecord {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub colour: [f32; 3],
    pub lightness: f32,
    pub shape_type: i32,
    pub operation: i32,
    pub blend_strength: f32,
    pub num_children: i32,
}

impl From<&FlatShape> for ShapeRecord {
    fn from(flat: &FlatShape) -> Self {
        Self {
            position: flat.position.into(),
            scale: flat.scale.into(),
            colour: flat.shape.colour,
            lightness: flat.shape.lightness,
            shape_type: flat.shape.shape_type.code(),
            operation: flat.shape.operation.code(),
            blend_strength: flat.shape.blend_strength() * BLEND_STRENGTH_SCALE,
            num_children: flat.num_children as i32,
        }
    }
}

/// CPU-side result of packing a flattened frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackedShapes {
    pub records: Vec<ShapeRecord>,
    pub count: u32,
}

impl PackedShapes {
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.records)
    }
}

/// Serializes shapes in order, one fixed-size record each
pub fn pack(ordered: &[FlatShape]) -> PackedShapes {
    let records: Vec<ShapeRecord> = ordered.iter().map(ShapeRecord::from).collect();
    PackedShapes {
        count: records.len() as u32,
        records,
    }
}

/// Storage buffer holding one frame's shape records.
///
/// The GPU allocation is destroyed when this value is dropped, so a frame
/// pass releases it on every exit path, including early returns.
pub struct ShapeBuffer {
    buffer: wgpu::Buffer,
    count: u32,
}

impl ShapeBuffer {
    /// Uploads packed records into a fresh read-only storage buffer.
    ///
    /// Storage bindings cannot be empty, so zero shapes still allocate a
    /// single zeroed record; [`count`](Self::count) stays 0.
    pub fn upload(device: &wgpu::Device, packed: &PackedShapes) -> Self {
        let placeholder = [ShapeRecord::zeroed()];
        let contents: &[u8] = if packed.is_empty() {
            bytemuck::cast_slice(&placeholder)
        } else {
            packed.as_bytes()
        };

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Shape Buffer"),
            contents,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });

        log::trace!(
            "uploaded {} shapes ({} bytes)",
            packed.count,
            contents.len()
        );

        Self {
            buffer,
            count: packed.count,
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource<'_> {
        self.buffer.as_entire_binding()
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}

impl Drop for ShapeBuffer {
    fn drop(&mut self) {
        self.buffer.destroy();
    }
}

// src/wgpu_utils/binding_types.rs
//! WGPU binding type utilities

pub fn buffer(read_only: bool) -> wgpu::BindingType {
    wgpu::BindingType::Buffer {
        ty: wgpu::BufferBindingType::Storage { read_only },
        has_dynamic_offset: false,
        min_binding_size: None,
    }
}

pub fn storage_buffer_read_only() -> wgpu::BindingType {
    buffer(true)
}

pub fn uniform() -> wgpu::BindingType {
    wgpu::BindingType::Buffer {
        ty: wgpu::BufferBindingType::Uniform,
        has_dynamic_offset: false,
        min_binding_size: None,
    }
}

/// Float texture read with `textureLoad`
pub fn texture_2d_unfilterable() -> wgpu::BindingType {
    wgpu::BindingType::Texture {
        sample_type: wgpu::TextureSampleType::Float { filterable: false },
        view_dimension: wgpu::TextureViewDimension::D2,
        multisampled: false,
    }
}

pub fn image_2d(
    format: wgpu::TextureFormat,
    access: wgpu::StorageTextureAccess,
) -> wgpu::BindingType {
    wgpu::BindingType::StorageTexture {
        access,
        view_dimension: wgpu::TextureViewDimension::D2,
        format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_buffer_is_read_only() {
        assert!(matches!(
            storage_buffer_read_only(),
            wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Storage { read_only: true },
                ..
            }
        ));
    }

    #[test]
    fn test_image_2d_keeps_format() {
        let ty = image_2d(
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::StorageTextureAccess::WriteOnly,
        );
        assert!(matches!(
            ty,
            wgpu::BindingType::StorageTexture {
                format: wgpu::TextureFormat::Rgba8Unorm,
                access: wgpu::StorageTextureAccess::WriteOnly,
                ..
            }
        ));
    }
}

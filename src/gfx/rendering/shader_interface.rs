//! WGSL interface prelude shared by every raymarch kernel
//!
//! Kernels are plain WGSL appended to the prelude. The prelude declares the
//! `Shape` and `Uniforms` structs, the four group 0 bindings and a few
//! accessors; the kernel only supplies its entry point, e.g.
//!
//! ```wgsl
//! @compute @workgroup_size(WORKGROUP_SIZE, WORKGROUP_SIZE)
//! fn cs_main(@builtin(global_invocation_id) id: vec3<u32>) {
//!     let size = textureDimensions(destination_image);
//!     if (id.x >= size.x || id.y >= size.y) { return; }
//!     textureStore(destination_image, id.xy, vec4<f32>(0.0, 0.0, 0.0, 1.0));
//! }
//! ```

use crate::{config::RaymarchConfig, error::RenderError};

/// Prelude source before substitution
pub const INTERFACE_TEMPLATE: &str = include_str!("raymarch_interface.wgsl");

/// WGSL storage texel format name for a destination format
pub fn storage_format_name(format: wgpu::TextureFormat) -> Option<&'static str> {
    use wgpu::TextureFormat as F;

    let name = match format {
        F::Rgba8Unorm => "rgba8unorm",
        F::Rgba8Snorm => "rgba8snorm",
        F::Rgba16Float => "rgba16float",
        F::Rgba32Float => "rgba32float",
        F::Bgra8Unorm => "bgra8unorm",
        _ => return None,
    };
    Some(name)
}

/// Prelude with the destination format and workgroup size filled in
pub fn interface_prelude(config: &RaymarchConfig) -> Result<String, RenderError> {
    let format = storage_format_name(config.target_format)
        .ok_or(RenderError::UnsupportedFormat(config.target_format))?;

    let workgroup_size = config.workgroup_size.max(1).to_string();

    Ok(INTERFACE_TEMPLATE
        .replace("{{TARGET_FORMAT}}", format)
        .replace("{{WORKGROUP_SIZE}}", &workgroup_size))
}

/// Full shader source: prelude followed by the kernel
pub fn compose_shader(kernel: &str, config: &RaymarchConfig) -> Result<String, RenderError> {
    let mut source = interface_prelude(config)?;
    source.push('\n');
    source.push_str(kernel);
    Ok(source)
}

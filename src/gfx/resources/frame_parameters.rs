//! Per-frame camera and light parameters for the raymarch kernel

use cgmath::{Matrix4, SquareMatrix, Vector3};

use crate::{
    config::RaymarchConfig,
    error::RenderError,
    gfx::{
        camera::{convert_matrix4_to_array, Camera},
        scene::Light,
    },
    wgpu_utils::uniform_buffer::UniformBuffer,
};

/// Scalar and matrix inputs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParameters {
    pub camera_to_world: Matrix4<f32>,
    pub inverse_projection: Matrix4<f32>,
    /// Forward direction for directional lights, world position otherwise
    pub light_vector: Vector3<f32>,
    pub light_is_positional: bool,
    pub effect_strength: f32,
}

impl FrameParameters {
    /// Lays the parameters out as the kernel's uniform block
    pub fn to_uniforms(&self, num_shapes: u32) -> RaymarchUniforms {
        RaymarchUniforms {
            camera_to_world: convert_matrix4_to_array(self.camera_to_world),
            camera_inverse_projection: convert_matrix4_to_array(self.inverse_projection),
            light: self.light_vector.into(),
            position_light: self.light_is_positional as u32,
            num_shapes,
            effect_strength: self.effect_strength,
            _padding: [0; 2],
        }
    }
}

/// Uniform block content.
///
/// MUST match the `Uniforms` struct in the interface prelude exactly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RaymarchUniforms {
    pub camera_to_world: [[f32; 4]; 4],
    pub camera_inverse_projection: [[f32; 4]; 4],
    pub light: [f32; 3],
    pub position_light: u32,
    pub num_shapes: u32,
    pub effect_strength: f32,
    pub _padding: [u32; 2],
}
// Total: 64 + 64 + 12 + 4 + 4 + 4 + 8 = 160 bytes

/// Type alias for the raymarch uniform buffer
pub type RaymarchUBO = UniformBuffer<RaymarchUniforms>;

/// Computes [`FrameParameters`] from a camera and the scene's light
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameParameterBuilder {
    effect_strength: f32,
}

impl FrameParameterBuilder {
    pub fn new(config: &RaymarchConfig) -> Self {
        Self {
            effect_strength: config.effect_strength,
        }
    }

    /// Builds the frame parameters.
    ///
    /// # Errors
    /// [`RenderError::MissingLight`] when `light` is `None`; no default light
    /// is substituted. [`RenderError::DegenerateLight`] for a zero or
    /// non-finite light vector. [`RenderError::SingularProjection`] when the
    /// camera's projection cannot be inverted.
    pub fn build<C: Camera + ?Sized>(
        &self,
        camera: &C,
        light: Option<&Light>,
    ) -> Result<FrameParameters, RenderError> {
        let light = light.ok_or(RenderError::MissingLight)?;
        let light_vector = light.shading_vector().ok_or(RenderError::DegenerateLight)?;
        let inverse_projection = camera
            .projection_matrix()
            .invert()
            .ok_or(RenderError::SingularProjection)?;

        Ok(FrameParameters {
            camera_to_world: camera.camera_to_world(),
            inverse_projection,
            light_vector,
            light_is_positional: light.is_positional(),
            effect_strength: self.effect_strength,
        })
    }
}

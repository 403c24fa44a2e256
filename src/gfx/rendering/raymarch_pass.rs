// src/gfx/rendering/raymarch_pass.rs
//! Compute pass that runs a raymarch kernel over one frame

use crate::{
    config::RaymarchConfig,
    error::RenderError,
    frame::FrameOutput,
    gfx::resources::{
        RaymarchBindings, RaymarchUBO, ShapeBuffer, TargetCache, TargetDescriptor,
        TextureResource,
    },
};

use super::{gpu_context::GpuContext, shader_interface::compose_shader};

/// Pipeline, bindings and destination image for a caller-provided kernel.
///
/// The destination image is kept between frames and only recreated when the
/// frame size changes. The shape buffer lives for a single [`render`] call.
///
/// [`render`]: RaymarchPass::render
pub struct RaymarchPass {
    pipeline: wgpu::ComputePipeline,
    bindings: RaymarchBindings,
    uniforms: RaymarchUBO,
    targets: TargetCache<TextureResource>,
    descriptor: TargetDescriptor,
}

impl RaymarchPass {
    /// Compiles `kernel` against the interface prelude.
    ///
    /// # Errors
    /// [`RenderError::UnsupportedFormat`] for a destination format the prelude
    /// cannot declare, [`RenderError::Gpu`] when shader or pipeline creation
    /// fails validation.
    pub fn new(
        ctx: &GpuContext,
        kernel: &str,
        config: &RaymarchConfig,
    ) -> Result<Self, RenderError> {
        let source = compose_shader(kernel, config)?;
        let device = &ctx.device;

        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let bindings = RaymarchBindings::new(device, config.target_format);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Raymarch Shader"),
            source: wgpu::ShaderSource::Wgsl(source.into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Raymarch Pipeline Layout"),
            bind_group_layouts: &[bindings.bind_group_layout()],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("Raymarch Pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: Some(config.entry_point.as_str()),
            compilation_options: Default::default(),
            cache: None,
        });

        let uniforms = RaymarchUBO::new(device);

        if let Some(error) = pollster::block_on(device.pop_error_scope()) {
            return Err(RenderError::Gpu(error.to_string()));
        }

        log::debug!(
            "raymarch pipeline ready (entry point `{}`)",
            config.entry_point
        );

        Ok(Self {
            pipeline,
            bindings,
            uniforms,
            targets: TargetCache::new(),
            descriptor: TargetDescriptor {
                device: ctx.device.clone(),
                format: config.target_format,
            },
        })
    }

    /// Runs the kernel for `frame`, reading `source` and writing the destination image.
    ///
    /// The shape buffer is uploaded, bound and released within this call
    /// whether or not the dispatch passes validation.
    pub fn render(
        &mut self,
        ctx: &GpuContext,
        frame: &FrameOutput,
        source: &wgpu::TextureView,
    ) -> Result<&TextureResource, RenderError> {
        let device = &ctx.device;
        device.push_error_scope(wgpu::ErrorFilter::Validation);

        let shapes = ShapeBuffer::upload(device, &frame.shapes);
        self.uniforms
            .update_content(&ctx.queue, frame.parameters.to_uniforms(shapes.count()));

        let (width, height) = frame.size;
        let target = self.targets.ensure(&self.descriptor, width, height);

        let bind_group =
            self.bindings
                .create_bind_group(device, source, &target.view, &shapes, &self.uniforms);

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Raymarch Encoder"),
        });

        {
            let mut compute_pass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: Some("Raymarch Pass"),
                timestamp_writes: None,
            });

            compute_pass.set_pipeline(&self.pipeline);
            compute_pass.set_bind_group(0, &bind_group, &[]);
            let (x, y, z) = frame.dispatch.workgroups();
            compute_pass.dispatch_workgroups(x, y, z);
        }

        ctx.queue.submit(std::iter::once(encoder.finish()));
        drop(shapes);

        log::trace!(
            "raymarched {} shapes into {}x{} ({}x{} groups)",
            frame.shapes.count,
            width,
            height,
            frame.dispatch.x,
            frame.dispatch.y
        );

        match pollster::block_on(device.pop_error_scope()) {
            Some(error) => Err(RenderError::Gpu(error.to_string())),
            None => Ok(target),
        }
    }

    /// Destination image from the most recent frame
    pub fn target(&self) -> Option<&TextureResource> {
        self.targets.get()
    }
}

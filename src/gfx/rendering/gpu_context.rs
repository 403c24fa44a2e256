// src/gfx/rendering/gpu_context.rs
//! Headless device and queue acquisition

use std::sync::Arc;

use crate::error::RenderError;

/// Device and queue shared by every raymarch pass
#[derive(Clone)]
pub struct GpuContext {
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
}

impl GpuContext {
    /// Requests an adapter without a surface and opens a device on it.
    ///
    /// The raymarch pass only needs compute and storage textures, so
    /// downlevel limits are enough.
    pub async fn new_headless() -> Result<Self, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| RenderError::AdapterUnavailable(e.to_string()))?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        if !adapter
            .get_downlevel_capabilities()
            .flags
            .contains(wgpu::DownlevelFlags::COMPUTE_SHADERS)
        {
            return Err(RenderError::AdapterUnavailable(format!(
                "{} does not support compute shaders",
                info.name
            )));
        }

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Raymarch Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .map_err(|e| RenderError::DeviceRequest(e.to_string()))?;

        Ok(Self::from_parts(device, queue))
    }

    /// Blocking variant of [`new_headless`](Self::new_headless)
    pub fn new_headless_blocking() -> Result<Self, RenderError> {
        pollster::block_on(Self::new_headless())
    }

    /// Wraps a device and queue the host already owns
    pub fn from_parts(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device: Arc::new(device),
            queue: Arc::new(queue),
        }
    }
}

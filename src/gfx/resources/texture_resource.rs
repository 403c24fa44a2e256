//! Render target management for the raymarch destination image
//!
//! The destination texture follows the camera's pixel size. It is kept
//! across frames and only recreated when those dimensions change.

use std::sync::Arc;

/// A 2D resource that can be sized, created and released
pub trait SizedTarget: Sized {
    type Context: ?Sized;

    fn create(context: &Self::Context, width: u32, height: u32) -> Self;

    fn size(&self) -> (u32, u32);

    /// Frees the underlying allocation
    fn release(self);
}

/// Everything needed to create a destination texture
#[derive(Clone)]
pub struct TargetDescriptor {
    pub device: Arc<wgpu::Device>,
    pub format: wgpu::TextureFormat,
}

/// Writable destination texture bound as a storage image
pub struct TextureResource {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
}

impl TextureResource {
    /// Creates a storage texture the kernel can write and later passes can sample or copy
    pub fn create_storage_target(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        label: &str,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::STORAGE_BINDING
                | wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_SRC,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view }
    }
}

impl SizedTarget for TextureResource {
    type Context = TargetDescriptor;

    fn create(context: &Self::Context, width: u32, height: u32) -> Self {
        Self::create_storage_target(
            &context.device,
            context.format,
            width,
            height,
            "Raymarch Target",
        )
    }

    fn size(&self) -> (u32, u32) {
        (self.texture.width(), self.texture.height())
    }

    fn release(self) {
        self.texture.destroy();
    }
}

/// Holds at most one target and recreates it only on size changes
pub struct TargetCache<T: SizedTarget> {
    target: Option<T>,
}

impl<T: SizedTarget> TargetCache<T> {
    pub fn new() -> Self {
        Self { target: None }
    }

    /// Returns a target of exactly `width` x `height`.
    ///
    /// A stale target is released before its replacement is created.
    /// Zero dimensions are clamped to one pixel.
    pub fn ensure(&mut self, context: &T::Context, width: u32, height: u32) -> &T {
        let size = (width.max(1), height.max(1));

        if let Some(existing) = self.target.take() {
            if existing.size() == size {
                return self.target.insert(existing);
            }
            log::debug!(
                "render target resized from {:?} to {:?}",
                existing.size(),
                size
            );
            existing.release();
        }

        self.target.insert(T::create(context, size.0, size.1))
    }

    pub fn get(&self) -> Option<&T> {
        self.target.as_ref()
    }

    /// Releases the held target, if any
    pub fn release(&mut self) {
        if let Some(target) = self.target.take() {
            target.release();
        }
    }
}

impl<T: SizedTarget> Default for TargetCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: SizedTarget> Drop for TargetCache<T> {
    fn drop(&mut self) {
        self.release();
    }
}

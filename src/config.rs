//! Raymarch pass configuration

/// Settings that shape the compute dispatch and the per-frame parameters.
///
/// Defaults match the tile size and preview factor the interface prelude
/// is written against, so most callers only toggle [`coarse_preview`].
///
/// [`coarse_preview`]: RaymarchConfig::coarse_preview
#[derive(Debug, Clone, PartialEq)]
pub struct RaymarchConfig {
    /// Work-items per workgroup along each image axis
    pub workgroup_size: u32,
    /// Resolution divisor applied in coarse preview mode
    pub coarse_factor: u32,
    pub coarse_preview: bool,
    /// Reserved shader hook, forwarded untouched
    pub effect_strength: f32,
    /// Format of the destination storage texture
    pub target_format: wgpu::TextureFormat,
    /// Entry point of the caller-provided kernel
    pub entry_point: String,
}

impl RaymarchConfig {
    pub const DEFAULT_WORKGROUP_SIZE: u32 = 16;
    pub const DEFAULT_COARSE_FACTOR: u32 = 16;
    pub const DEFAULT_ENTRY_POINT: &'static str = "cs_main";

    pub fn with_coarse_preview(mut self, enabled: bool) -> Self {
        self.coarse_preview = enabled;
        self
    }

    pub fn with_effect_strength(mut self, strength: f32) -> Self {
        self.effect_strength = strength;
        self
    }

    pub fn with_target_format(mut self, format: wgpu::TextureFormat) -> Self {
        self.target_format = format;
        self
    }

    pub fn with_entry_point(mut self, entry_point: impl Into<String>) -> Self {
        self.entry_point = entry_point.into();
        self
    }
}

impl Default for RaymarchConfig {
    fn default() -> Self {
        Self {
            workgroup_size: Self::DEFAULT_WORKGROUP_SIZE,
            coarse_factor: Self::DEFAULT_COARSE_FACTOR,
            coarse_preview: false,
            effect_strength: 0.0,
            target_format: wgpu::TextureFormat::Rgba8Unorm,
            entry_point: Self::DEFAULT_ENTRY_POINT.to_string(),
        }
    }
}

//! Error types for scene editing and frame rendering

use thiserror::Error;

use crate::gfx::scene::NodeId;

/// Errors raised while editing the scene graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    #[error("node {0:?} does not exist in the scene graph")]
    MissingNode(NodeId),
    #[error("parenting {child:?} under {parent:?} would create a cycle")]
    Cycle { child: NodeId, parent: NodeId },
}

/// Errors raised while building or executing a frame pass
#[derive(Error, Debug)]
pub enum RenderError {
    /// No light could be discovered; the caller must provide exactly one.
    #[error("no light found in the scene")]
    MissingLight,
    #[error("light direction or position is degenerate")]
    DegenerateLight,
    #[error("camera projection matrix is not invertible")]
    SingularProjection,
    #[error("no suitable GPU adapter available: {0}")]
    AdapterUnavailable(String),
    #[error("failed to request a GPU device: {0}")]
    DeviceRequest(String),
    #[error("storage texture format {0:?} is not supported by the raymarch kernel")]
    UnsupportedFormat(wgpu::TextureFormat),
    #[error("GPU validation failed during the raymarch pass: {0}")]
    Gpu(String),
    #[error(transparent)]
    Scene(#[from] SceneError),
}

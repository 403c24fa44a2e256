//! # Prelude
//!
//! Commonly used types for building a scene and rendering it.
//!
//! ```no_run
//! use sdf_raymarch::prelude::*;
//!
//! fn main() -> Result<(), RenderError> {
//!     init_logging(LoggingConfig::default());
//!
//!     let mut scene = SceneGraph::new();
//!     scene.add_shape("ball", Transform::identity(), Shape::new(ShapeType::Sphere));
//!     let sun = scene.add_node("sun", Transform::identity().with_rotation_x(Deg(-45.0)));
//!     scene.attach_light(sun, LightKind::Directional)?;
//!
//!     let camera = OrbitCamera::new(5.0, 0.3, 0.0, Vector3::zero(), 640, 480);
//!     let light = scene.find_light();
//!     let frame = render_frame(&scene, &camera, light.as_ref(), &RaymarchConfig::default())?;
//!     assert_eq!(frame.shapes.count, 1);
//!     Ok(())
//! }
//! ```

// Re-export core types
pub use crate::config::RaymarchConfig;
pub use crate::error::{RenderError, SceneError};
pub use crate::frame::{render_frame, FrameOutput};
pub use crate::logging::{init_logging, LoggingConfig};

// Re-export scene types
pub use crate::gfx::scene::{
    flatten, Light, LightKind, NodeId, Operation, SceneGraph, Shape, ShapeRegistry, ShapeType,
    Transform,
};

// Re-export camera types
pub use crate::gfx::camera::{Camera, FlyCamera, OrbitCamera, Projection};

// Re-export GPU types
pub use crate::gfx::rendering::{DispatchGrid, GpuContext, RaymarchPass};
pub use crate::gfx::resources::{pack, PackedShapes};

// Re-export common external dependencies
pub use cgmath::{Deg, InnerSpace, Vector3, Zero};

//! # Scene Management Module
//!
//! Holds the transform hierarchy that shapes and lights live in, and turns it
//! into the flat shape sequence consumed by the raymarch kernel.
//!
//! ## Key Components
//!
//! - [`SceneGraph`] - Node arena with ordered child slots and optional components
//! - [`Shape`] - Implicit shape component ([`ShapeType`] + [`Operation`] + material)
//! - [`ShapeRegistry`] - Per-frame snapshot of all live shapes
//! - [`flatten`] - Parent-then-children ordering with operation sort
//!
//! ## Usage
//!
//! ```no_run
//! use sdf_raymarch::gfx::scene::*;
//!
//! let mut scene = SceneGraph::new();
//! let body = scene.add_shape("body", Transform::identity(), Shape::new(ShapeType::Cube));
//! scene
//!     .add_child_shape(
//!         body,
//!         "hole",
//!         Transform::from_position(0.0, 0.5, 0.0),
//!         Shape::new(ShapeType::Sphere).with_operation(Operation::Cut),
//!     )
//!     .unwrap();
//!
//! let ordered = flatten(&scene.enumerate());
//! assert_eq!(ordered[0].num_children, 1);
//! ```

pub mod flatten;
pub mod light;
pub mod registry;
pub mod scene;
pub mod shape;
pub mod transform;

// Re-export main types
pub use flatten::{flatten, FlatShape};
pub use light::{Light, LightKind};
pub use registry::{ShapeEntry, ShapeRegistry};
pub use scene::{Node, NodeId, SceneGraph};
pub use shape::{Operation, Shape, ShapeType};
pub use transform::Transform;

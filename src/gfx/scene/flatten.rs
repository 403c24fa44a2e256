//! # Scene Flattening
//!
//! Turns the shape hierarchy into the flat, ordered sequence the raymarch
//! kernel walks front to back.
//!
//! ## Ordering
//!
//! 1. Shapes are stable-sorted by [`Operation`] code, so equal operations keep
//!    their discovery order.
//! 2. Each top-level shape is emitted in that order, immediately followed by
//!    its direct child shapes in sibling-slot order.
//!
//! Only one level of nesting is supported. A shape whose nearest shape
//! ancestor is itself a child is never emitted.
//!
//! [`Operation`]: super::Operation

use std::collections::HashMap;

use cgmath::{ElementWise, Vector3};

use super::{registry::ShapeEntry, scene::NodeId, shape::Shape};

/// A shape placed in the packed sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatShape {
    pub node: NodeId,
    pub shape: Shape,
    pub position: Vector3<f32>,
    /// Local scale, times the parent shape's scale for children
    pub scale: Vector3<f32>,
    /// Direct child shapes following this one; always 0 for children
    pub num_children: u32,
}

/// Flattens a registry snapshot into kernel order.
///
/// Children listed in a top-level shape's slots but missing from `shapes`
/// are skipped, as are slots holding plain nodes.
pub fn flatten(shapes: &[ShapeEntry]) -> Vec<FlatShape> {
    let by_node: HashMap<NodeId, &ShapeEntry> =
        shapes.iter().map(|entry| (entry.node, entry)).collect();

    let mut sorted: Vec<&ShapeEntry> = shapes.iter().collect();
    sorted.sort_by_key(|entry| entry.shape.operation.code());

    let mut flat = Vec::with_capacity(shapes.len());
    for parent in sorted.into_iter().filter(|e| e.parent_shape.is_none()) {
        let children: Vec<&ShapeEntry> = parent
            .child_slots
            .iter()
            .filter_map(|slot| by_node.get(slot).copied())
            .filter(|child| child.parent_shape == Some(parent.node))
            .collect();

        flat.push(FlatShape {
            node: parent.node,
            shape: parent.shape,
            position: parent.position,
            scale: parent.local_scale,
            num_children: children.len() as u32,
        });

        for child in children {
            flat.push(FlatShape {
                node: child.node,
                shape: child.shape,
                position: child.position,
                scale: child.local_scale.mul_element_wise(parent.local_scale),
                num_children: 0,
            });
        }
    }

    let dropped = shapes.len().saturating_sub(flat.len());
    if dropped > 0 {
        log::debug!("dropped {dropped} shapes nested deeper than one level");
    }

    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::{Operation, SceneGraph, ShapeRegistry, ShapeType, Transform};

    fn shape(op: Operation) -> Shape {
        Shape::new(ShapeType::Sphere).with_operation(op)
    }

    fn operations(flat: &[FlatShape]) -> Vec<Operation> {
        flat.iter().map(|s| s.shape.operation).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(flatten(&[]).is_empty());
    }

    #[test]
    fn test_top_level_sorted_by_operation() {
        let mut scene = SceneGraph::new();
        scene.add_shape("cut", Transform::identity(), shape(Operation::Cut));
        scene.add_shape("none", Transform::identity(), shape(Operation::None));
        scene.add_shape("blend", Transform::identity(), shape(Operation::Blend));

        let flat = flatten(&scene.enumerate());
        assert_eq!(
            operations(&flat),
            vec![Operation::None, Operation::Blend, Operation::Cut]
        );
        assert!(flat.iter().all(|s| s.num_children == 0));
    }

    #[test]
    fn test_ties_keep_discovery_order() {
        let mut scene = SceneGraph::new();
        let a = scene.add_shape("a", Transform::identity(), shape(Operation::Blend));
        let b = scene.add_shape("b", Transform::identity(), shape(Operation::None));
        let c = scene.add_shape("c", Transform::identity(), shape(Operation::Blend));
        let d = scene.add_shape("d", Transform::identity(), shape(Operation::None));

        let order: Vec<NodeId> = flatten(&scene.enumerate()).iter().map(|s| s.node).collect();
        assert_eq!(order, vec![b, d, a, c]);
    }

    #[test]
    fn test_children_follow_parent_and_skip_plain_slots() {
        let mut scene = SceneGraph::new();
        let parent = scene.add_shape("parent", Transform::identity(), shape(Operation::None));
        let child_a = scene
            .add_child_shape(parent, "a", Transform::identity(), shape(Operation::Mask))
            .unwrap();
        scene
            .add_child(parent, "plain", Transform::identity())
            .unwrap();
        let child_b = scene
            .add_child_shape(parent, "b", Transform::identity(), shape(Operation::Blend))
            .unwrap();

        let flat = flatten(&scene.enumerate());
        let order: Vec<NodeId> = flat.iter().map(|s| s.node).collect();
        assert_eq!(order, vec![parent, child_a, child_b]);
        assert_eq!(flat[0].num_children, 2);
        assert_eq!(flat[1].num_children, 0);
        assert_eq!(flat[2].num_children, 0);
    }

    #[test]
    fn test_groups_ordered_by_parent_operation() {
        let mut scene = SceneGraph::new();
        let cut = scene.add_shape("cut", Transform::identity(), shape(Operation::Cut));
        let cut_child = scene
            .add_child_shape(
                cut,
                "cut child",
                Transform::identity(),
                shape(Operation::None),
            )
            .unwrap();
        let base = scene.add_shape("base", Transform::identity(), shape(Operation::None));

        let order: Vec<NodeId> = flatten(&scene.enumerate()).iter().map(|s| s.node).collect();
        assert_eq!(order, vec![base, cut, cut_child]);
    }

    #[test]
    fn test_grandchildren_are_dropped() {
        let mut scene = SceneGraph::new();
        let top = scene.add_shape("top", Transform::identity(), shape(Operation::None));
        let child = scene
            .add_child_shape(top, "child", Transform::identity(), shape(Operation::None))
            .unwrap();
        let grandchild = scene
            .add_child_shape(
                child,
                "grandchild",
                Transform::identity(),
                shape(Operation::None),
            )
            .unwrap();

        let flat = flatten(&scene.enumerate());
        assert_eq!(flat.len(), 2);
        assert!(flat.iter().all(|s| s.node != grandchild));
        assert_eq!(flat[0].num_children, 1);
    }

    #[test]
    fn test_shape_below_plain_node_under_shape_is_dropped() {
        let mut scene = SceneGraph::new();
        let top = scene.add_shape("top", Transform::identity(), shape(Operation::None));
        let group = scene
            .add_child(top, "group", Transform::identity())
            .unwrap();
        let hidden = scene
            .add_child_shape(
                group,
                "hidden",
                Transform::identity(),
                shape(Operation::None),
            )
            .unwrap();

        let flat = flatten(&scene.enumerate());
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].num_children, 0);
        assert!(flat.iter().all(|s| s.node != hidden));
    }

    #[test]
    fn test_child_scale_inherits_parent_scale() {
        let mut scene = SceneGraph::new();
        let parent = scene.add_shape(
            "parent",
            Transform::identity().with_scale(2.0, 4.0, 1.0),
            shape(Operation::None),
        );
        scene
            .add_child_shape(
                parent,
                "child",
                Transform::identity().with_scale(0.5, 0.5, 3.0),
                shape(Operation::None),
            )
            .unwrap();

        let flat = flatten(&scene.enumerate());
        assert_eq!(flat[0].scale, Vector3::new(2.0, 4.0, 1.0));
        assert_eq!(flat[1].scale, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_child_emitted_with_parent_regardless_of_own_operation() {
        let mut scene = SceneGraph::new();
        let mask = scene.add_shape("mask", Transform::identity(), shape(Operation::Mask));
        let child = scene
            .add_child_shape(mask, "child", Transform::identity(), shape(Operation::None))
            .unwrap();
        let blend = scene.add_shape("blend", Transform::identity(), shape(Operation::Blend));

        let order: Vec<NodeId> = flatten(&scene.enumerate()).iter().map(|s| s.node).collect();
        assert_eq!(order, vec![blend, mask, child]);
    }
}

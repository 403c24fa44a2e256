//! Per-frame snapshot of the shapes present in a scene

use cgmath::Vector3;

use super::{
    scene::{NodeId, SceneGraph},
    shape::Shape,
};

/// One live shape as seen at enumeration time
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeEntry {
    pub node: NodeId,
    pub shape: Shape,
    /// World-space position taken from the node's world transform
    pub position: Vector3<f32>,
    pub local_scale: Vector3<f32>,
    /// Nearest ancestor carrying a shape; `None` means the shape is top-level
    pub parent_shape: Option<NodeId>,
    /// Every direct child slot of the node, shape or not, in sibling order
    pub child_slots: Vec<NodeId>,
}

/// Source of the shapes to render in a frame
pub trait ShapeRegistry {
    /// Returns every live shape in discovery order. Must not mutate the scene.
    fn enumerate(&self) -> Vec<ShapeEntry>;
}

impl ShapeRegistry for SceneGraph {
    fn enumerate(&self) -> Vec<ShapeEntry> {
        self.iter()
            .filter_map(|(id, node)| {
                let shape = node.shape?;
                let world = self.world_matrix(id)?;
                Some(ShapeEntry {
                    node: id,
                    shape,
                    position: world.w.truncate(),
                    local_scale: node.transform.scale,
                    parent_shape: self.nearest_shape_ancestor(id),
                    child_slots: node.children().to_vec(),
                })
            })
            .collect()
    }
}

impl ShapeRegistry for [ShapeEntry] {
    fn enumerate(&self) -> Vec<ShapeEntry> {
        self.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::scene::{ShapeType, Transform};

    #[test]
    fn test_enumerate_skips_plain_nodes() {
        let mut scene = SceneGraph::new();
        scene.add_node("empty", Transform::identity());
        let cube = scene.add_shape(
            "cube",
            Transform::from_position(0.0, 1.0, 0.0),
            Shape::new(ShapeType::Cube),
        );

        let entries = scene.enumerate();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].node, cube);
        assert_eq!(entries[0].position, Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(entries[0].parent_shape, None);
    }

    #[test]
    fn test_enumerate_resolves_parent_shape_and_slots() {
        let mut scene = SceneGraph::new();
        let parent = scene.add_shape(
            "parent",
            Transform::from_position(2.0, 0.0, 0.0),
            Shape::default(),
        );
        let plain = scene
            .add_child(parent, "plain", Transform::identity())
            .unwrap();
        let child = scene
            .add_child_shape(
                parent,
                "child",
                Transform::from_position(0.0, 0.0, 1.0).with_uniform_scale(0.5),
                Shape::new(ShapeType::Torus),
            )
            .unwrap();

        let entries = scene.enumerate();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].child_slots, vec![plain, child]);

        let child_entry = &entries[1];
        assert_eq!(child_entry.parent_shape, Some(parent));
        assert_eq!(child_entry.position, Vector3::new(2.0, 0.0, 1.0));
        assert_eq!(child_entry.local_scale, Vector3::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_shape_parented_to_plain_node_is_top_level() {
        let mut scene = SceneGraph::new();
        let group = scene.add_node("group", Transform::identity());
        scene
            .add_child_shape(group, "sphere", Transform::identity(), Shape::default())
            .unwrap();

        assert_eq!(scene.enumerate()[0].parent_shape, None);
    }
}

use cgmath::{Matrix4, Quaternion, SquareMatrix};
use slotmap::SlotMap;

use crate::error::SceneError;

use super::{
    light::{Light, LightKind},
    shape::Shape,
    transform::Transform,
};

slotmap::new_key_type! {
    /// Handle to a node in a [`SceneGraph`]
    pub struct NodeId;
}

/// A transform node with optional shape and light components
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub shape: Option<Shape>,
    pub light: Option<LightKind>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(name: &str, transform: Transform) -> Self {
        Self {
            name: name.to_string(),
            transform,
            shape: None,
            light: None,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child slots in sibling order
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Transform hierarchy holding every shape and light in the scene.
///
/// Nodes are enumerated in the order they were added, which is the
/// discovery order the flattener uses to break operation ties.
#[derive(Debug, Default)]
pub struct SceneGraph {
    nodes: SlotMap<NodeId, Node>,
    order: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Iterates nodes in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.order.iter().map(move |&id| (id, &self.nodes[id]))
    }

    /// Adds a root node
    pub fn add_node(&mut self, name: &str, transform: Transform) -> NodeId {
        let id = self.nodes.insert(Node::new(name, transform));
        self.order.push(id);
        id
    }

    /// Adds a node in the next free child slot of `parent`
    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: &str,
        transform: Transform,
    ) -> Result<NodeId, SceneError> {
        if !self.contains(parent) {
            return Err(SceneError::MissingNode(parent));
        }
        let id = self.add_node(name, transform);
        self.nodes[id].parent = Some(parent);
        self.nodes[parent].children.push(id);
        Ok(id)
    }

    /// Moves `child` under `parent` (appended as the last slot), or to the root with `None`
    pub fn set_parent(&mut self, child: NodeId, parent: Option<NodeId>) -> Result<(), SceneError> {
        if !self.contains(child) {
            return Err(SceneError::MissingNode(child));
        }
        if let Some(parent) = parent {
            if !self.contains(parent) {
                return Err(SceneError::MissingNode(parent));
            }
            let mut cursor = Some(parent);
            while let Some(id) = cursor {
                if id == child {
                    return Err(SceneError::Cycle { child, parent });
                }
                cursor = self.nodes[id].parent;
            }
        }

        self.detach_from_parent(child);
        self.nodes[child].parent = parent;
        if let Some(parent) = parent {
            self.nodes[parent].children.push(child);
        }
        Ok(())
    }

    /// Removes a node together with its whole subtree
    pub fn remove(&mut self, id: NodeId) -> Result<(), SceneError> {
        if !self.contains(id) {
            return Err(SceneError::MissingNode(id));
        }
        self.detach_from_parent(id);

        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.remove(next) {
                pending.extend(node.children);
            }
        }
        let nodes = &self.nodes;
        self.order.retain(|id| nodes.contains_key(*id));
        Ok(())
    }

    pub fn attach_shape(&mut self, id: NodeId, shape: Shape) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(id).ok_or(SceneError::MissingNode(id))?;
        node.shape = Some(shape);
        Ok(())
    }

    pub fn detach_shape(&mut self, id: NodeId) -> Result<Option<Shape>, SceneError> {
        let node = self.nodes.get_mut(id).ok_or(SceneError::MissingNode(id))?;
        Ok(node.shape.take())
    }

    pub fn attach_light(&mut self, id: NodeId, kind: LightKind) -> Result<(), SceneError> {
        let node = self.nodes.get_mut(id).ok_or(SceneError::MissingNode(id))?;
        node.light = Some(kind);
        Ok(())
    }

    /// Convenience for adding a root node that carries a shape
    pub fn add_shape(&mut self, name: &str, transform: Transform, shape: Shape) -> NodeId {
        let id = self.add_node(name, transform);
        self.nodes[id].shape = Some(shape);
        id
    }

    /// Convenience for adding a child node that carries a shape
    pub fn add_child_shape(
        &mut self,
        parent: NodeId,
        name: &str,
        transform: Transform,
        shape: Shape,
    ) -> Result<NodeId, SceneError> {
        let id = self.add_child(parent, name, transform)?;
        self.nodes[id].shape = Some(shape);
        Ok(id)
    }

    /// Composes local matrices from the root down to `id`
    pub fn world_matrix(&self, id: NodeId) -> Option<Matrix4<f32>> {
        let mut node = self.nodes.get(id)?;
        let mut world = node.transform.matrix();
        while let Some(parent) = node.parent {
            node = &self.nodes[parent];
            world = node.transform.matrix() * world;
        }
        Some(world)
    }

    /// Composes local rotations from the root down to `id`, ignoring scale
    pub fn world_rotation(&self, id: NodeId) -> Option<Quaternion<f32>> {
        let mut node = self.nodes.get(id)?;
        let mut rotation = node.transform.rotation;
        while let Some(parent) = node.parent {
            node = &self.nodes[parent];
            rotation = node.transform.rotation * rotation;
        }
        Some(rotation)
    }

    /// Closest ancestor of `id` that carries a shape component
    pub fn nearest_shape_ancestor(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = self.nodes.get(id)?.parent;
        while let Some(parent) = cursor {
            let node = &self.nodes[parent];
            if node.shape.is_some() {
                return Some(parent);
            }
            cursor = node.parent;
        }
        None
    }

    /// First light in discovery order, resolved into world space
    pub fn find_light(&self) -> Option<Light> {
        let mut lights = self
            .iter()
            .filter_map(|(id, node)| node.light.map(|kind| (id, kind)));
        let (id, kind) = lights.next()?;
        let extra = lights.count();
        if extra > 0 {
            log::warn!("scene has {} lights, using the first one", extra + 1);
        }
        let world = self.world_matrix(id).unwrap_or_else(Matrix4::identity);
        let rotation = self
            .world_rotation(id)
            .unwrap_or_else(|| Quaternion::new(1.0, 0.0, 0.0, 0.0));
        Some(Light::from_world(kind, world.w.truncate(), rotation))
    }

    fn detach_from_parent(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id].parent.take() {
            if let Some(parent) = self.nodes.get_mut(parent) {
                parent.children.retain(|child| *child != id);
            }
        }
    }
}

//! Per-frame CPU pipeline: snapshot, flatten, pack and parameterize
//!
//! [`render_frame`] is what a host calls once per tick. It touches no GPU
//! state; the result is handed to a [`RaymarchPass`] to execute.
//!
//! [`RaymarchPass`]: crate::gfx::rendering::RaymarchPass

use crate::{
    config::RaymarchConfig,
    error::RenderError,
    gfx::{
        camera::Camera,
        rendering::DispatchGrid,
        resources::{pack, FrameParameterBuilder, FrameParameters, PackedShapes},
        scene::{flatten, Light, ShapeRegistry},
    },
};

/// Everything the kernel needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub shapes: PackedShapes,
    pub parameters: FrameParameters,
    pub dispatch: DispatchGrid,
    /// Destination image size in pixels
    pub size: (u32, u32),
}

/// Builds the frame for `scene` seen through `camera`.
///
/// # Errors
/// Fails with [`RenderError::MissingLight`] when `light` is `None`, with
/// [`RenderError::DegenerateLight`] for an unusable light vector, and with
/// [`RenderError::SingularProjection`] for a degenerate camera projection.
pub fn render_frame<R, C>(
    scene: &R,
    camera: &C,
    light: Option<&Light>,
    config: &RaymarchConfig,
) -> Result<FrameOutput, RenderError>
where
    R: ShapeRegistry + ?Sized,
    C: Camera + ?Sized,
{
    let parameters = FrameParameterBuilder::new(config).build(camera, light)?;

    let entries = scene.enumerate();
    let ordered = flatten(&entries);
    let shapes = pack(&ordered);

    let size = camera.pixel_size();
    let dispatch = DispatchGrid::cover(size.0, size.1, config);

    log::trace!(
        "frame: {} registered, {} packed, {}x{} pixels",
        entries.len(),
        shapes.count,
        size.0,
        size.1
    );

    Ok(FrameOutput {
        shapes,
        parameters,
        dispatch,
        size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        camera::{FlyCamera, Projection},
        resources::ShapeRecord,
        scene::{LightKind, Operation, SceneGraph, Shape, ShapeType, Transform},
    };
    use approx::assert_relative_eq;
    use cgmath::{Deg, Vector3};

    fn camera() -> FlyCamera {
        FlyCamera::new(
            (0.0, 0.0, 5.0),
            Deg(-90.0),
            Deg(0.0),
            Projection::new(320, 240, Deg(45.0), 0.1, 100.0),
        )
    }

    fn sun() -> Light {
        Light::directional(Vector3::new(0.0, -1.0, 0.0))
    }

    fn shape(op: Operation) -> Shape {
        Shape::new(ShapeType::Cube).with_operation(op)
    }

    fn frame_with(scene: &SceneGraph, light: Option<&Light>) -> Result<FrameOutput, RenderError> {
        render_frame(scene, &camera(), light, &RaymarchConfig::default())
    }

    fn column<T>(frame: &FrameOutput, field: impl Fn(&ShapeRecord) -> T) -> Vec<T> {
        frame.shapes.records.iter().map(field).collect()
    }

    #[test]
    fn test_top_level_shapes_ordered_by_operation() {
        let mut scene = SceneGraph::new();
        scene.add_shape("cut", Transform::identity(), shape(Operation::Cut));
        scene.add_shape("none", Transform::identity(), shape(Operation::None));
        scene.add_shape("blend", Transform::identity(), shape(Operation::Blend));

        let frame = frame_with(&scene, Some(&sun())).unwrap();

        assert_eq!(column(&frame, |r| r.operation), vec![0, 1, 2]);
        assert_eq!(column(&frame, |r| r.num_children), vec![0, 0, 0]);
        assert_eq!(frame.shapes.count, 3);
    }

    #[test]
    fn test_children_follow_parent() {
        let mut scene = SceneGraph::new();
        let parent = scene.add_shape("parent", Transform::identity(), shape(Operation::Blend));
        scene
            .add_child_shape(parent, "a", Transform::identity(), shape(Operation::Mask))
            .unwrap();
        scene
            .add_child(parent, "plain", Transform::identity())
            .unwrap();
        scene
            .add_child_shape(parent, "b", Transform::identity(), shape(Operation::Cut))
            .unwrap();

        let frame = frame_with(&scene, Some(&sun())).unwrap();

        assert_eq!(frame.shapes.records.len(), 3);
        assert_eq!(column(&frame, |r| r.num_children), vec![2, 0, 0]);
        assert_eq!(column(&frame, |r| r.operation), vec![1, 3, 2]);
    }

    #[test]
    fn test_empty_scene() {
        let scene = SceneGraph::new();
        let frame = frame_with(&scene, Some(&sun())).unwrap();

        assert!(frame.shapes.is_empty());
        let uniforms = frame.parameters.to_uniforms(frame.shapes.count);
        assert_eq!(uniforms.num_shapes, 0);
    }

    #[test]
    fn test_missing_light_fails() {
        let mut scene = SceneGraph::new();
        scene.add_shape("s", Transform::identity(), Shape::default());

        let result = frame_with(&scene, None);
        assert!(matches!(result, Err(RenderError::MissingLight)));
    }

    #[test]
    fn test_light_discovered_from_scene() {
        let mut scene = SceneGraph::new();
        let lamp = scene.add_node("lamp", Transform::from_position(1.0, 2.0, 3.0));
        scene.attach_light(lamp, LightKind::Point).unwrap();

        let light = scene.find_light();
        let frame = frame_with(&scene, light.as_ref()).unwrap();

        assert!(frame.parameters.light_is_positional);
        assert_eq!(frame.parameters.light_vector, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_zero_scaled_light_keeps_rotation() {
        let mut scene = SceneGraph::new();
        let node = scene.add_node(
            "sun",
            Transform::identity()
                .with_rotation_x(Deg(-90.0))
                .with_uniform_scale(0.0),
        );
        scene.attach_light(node, LightKind::Directional).unwrap();

        let light = scene.find_light();
        let forward = frame_with(&scene, light.as_ref())
            .unwrap()
            .parameters
            .light_vector;

        assert!(forward.x.is_finite());
        assert!(forward.z.is_finite());
        assert_relative_eq!(forward.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_direction_light_fails() {
        let scene = SceneGraph::new();
        let light = Light::directional(Vector3::new(0.0, 0.0, 0.0));

        let result = frame_with(&scene, Some(&light));
        assert!(matches!(result, Err(RenderError::DegenerateLight)));
    }

    #[test]
    fn test_size_and_dispatch_follow_camera() {
        let scene = SceneGraph::new();
        let frame = frame_with(&scene, Some(&sun())).unwrap();
        assert_eq!(frame.size, (320, 240));
        assert_eq!(frame.dispatch, DispatchGrid { x: 20, y: 15 });

        let coarse = RaymarchConfig::default().with_coarse_preview(true);
        let frame = render_frame(&scene, &camera(), Some(&sun()), &coarse).unwrap();
        assert_eq!(frame.size, (320, 240));
        assert_eq!(frame.dispatch, DispatchGrid { x: 2, y: 1 });
    }

    #[test]
    fn test_registry_slice_is_accepted() {
        let mut scene = SceneGraph::new();
        scene.add_shape("s", Transform::identity(), Shape::default());
        let entries = scene.enumerate();
        let config = RaymarchConfig::default();

        let frame = render_frame(entries.as_slice(), &camera(), Some(&sun()), &config).unwrap();
        assert_eq!(frame.shapes.count, 1);
    }
}

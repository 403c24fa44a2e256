use cgmath::{InnerSpace, Quaternion, Rotation, Vector3};

/// Light component kinds.
///
/// Only `Directional` is treated as a direction; every other kind is sent
/// to the kernel as a world-space position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Point,
    Spot,
}

/// A light resolved into world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vector3<f32>,
    /// Normalized world-space forward (local -Z)
    pub forward: Vector3<f32>,
}

impl Light {
    pub fn directional(forward: Vector3<f32>) -> Self {
        Self {
            kind: LightKind::Directional,
            position: Vector3::new(0.0, 0.0, 0.0),
            forward: forward.normalize(),
        }
    }

    pub fn point(position: Vector3<f32>) -> Self {
        Self {
            kind: LightKind::Point,
            position,
            forward: -Vector3::unit_z(),
        }
    }

    /// Resolves a light component from its node's world position and world rotation.
    ///
    /// Scale never reaches the forward direction, so a scaled or flattened
    /// node still yields a unit vector.
    pub fn from_world(kind: LightKind, position: Vector3<f32>, rotation: Quaternion<f32>) -> Self {
        let rotation = if rotation.magnitude2() > f32::EPSILON {
            rotation.normalize()
        } else {
            Quaternion::new(1.0, 0.0, 0.0, 0.0)
        };
        Self {
            kind,
            position,
            forward: rotation.rotate_vector(-Vector3::unit_z()).normalize(),
        }
    }

    /// Direction or position the kernel receives, if it is usable.
    ///
    /// Returns `None` for a non-finite position or a forward direction that
    /// is zero or non-finite.
    pub fn shading_vector(&self) -> Option<Vector3<f32>> {
        let finite = |v: Vector3<f32>| v.x.is_finite() && v.y.is_finite() && v.z.is_finite();
        if self.is_positional() {
            finite(self.position).then_some(self.position)
        } else {
            let usable = finite(self.forward) && self.forward.magnitude2() > f32::EPSILON;
            usable.then_some(self.forward)
        }
    }

    pub fn is_positional(&self) -> bool {
        self.kind != LightKind::Directional
    }
}

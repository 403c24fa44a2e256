//! Shape component and the enums shared with the GPU kernel

/// Primitive the kernel evaluates for a shape.
///
/// The discriminants are the integer codes written into each packed record.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ShapeType {
    #[default]
    Sphere = 0,
    Cube = 1,
    Torus = 2,
    Tube = 3,
}

impl ShapeType {
    pub const ALL: [ShapeType; 4] = [Self::Sphere, Self::Cube, Self::Torus, Self::Tube];

    /// Integer code used on the wire
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.code() == code)
    }
}

/// How a shape composes with the shapes evaluated before it.
///
/// The integer code doubles as the flattening sort key, so shapes are
/// always packed in `None < Blend < Cut < Mask` order.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Operation {
    #[default]
    None = 0,
    Blend = 1,
    Cut = 2,
    Mask = 3,
}

impl Operation {
    pub const ALL: [Operation; 4] = [Self::None, Self::Blend, Self::Cut, Self::Mask];

    /// Integer code used on the wire and as the ordering key
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.code() == code)
    }
}

/// Implicit shape attached to a scene node.
///
/// Position and scale are not stored here; they come from the owning
/// node's transform when the registry is enumerated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub shape_type: ShapeType,
    pub operation: Operation,
    /// Linear RGB in [0, 1]
    pub colour: [f32; 3],
    pub lightness: f32,
    blend_strength: f32,
}

impl Shape {
    pub fn new(shape_type: ShapeType) -> Self {
        Self {
            shape_type,
            ..Default::default()
        }
    }

    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = operation;
        self
    }

    pub fn with_colour(mut self, r: f32, g: f32, b: f32) -> Self {
        self.colour = [r, g, b];
        self
    }

    pub fn with_lightness(mut self, lightness: f32) -> Self {
        self.lightness = lightness;
        self
    }

    pub fn with_blend_strength(mut self, strength: f32) -> Self {
        self.set_blend_strength(strength);
        self
    }

    /// Sets the blend strength, clamped to [0, 1]
    pub fn set_blend_strength(&mut self, strength: f32) {
        self.blend_strength = strength.clamp(0.0, 1.0);
    }

    pub fn blend_strength(&self) -> f32 {
        self.blend_strength
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            shape_type: ShapeType::Sphere,
            operation: Operation::None,
            colour: [1.0, 1.0, 1.0],
            lightness: 1.0,
            blend_strength: 0.0,
        }
    }
}

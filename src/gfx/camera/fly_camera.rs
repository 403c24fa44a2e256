use super::camera_utils::{camera_to_world_from_basis, Camera};
use cgmath::*;

const SAFE_FRAC_PI_2: f32 = std::f32::consts::FRAC_PI_2 - 0.0001;

/// Perspective projection sized in pixels
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pixels: (u32, u32),
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(
        width: u32,
        height: u32,
        fovy: F,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            pixels: (width.max(1), height.max(1)),
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = (width.max(1), height.max(1));
    }

    pub fn pixels(&self) -> (u32, u32) {
        self.pixels
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        let aspect = self.pixels.0 as f32 / self.pixels.1 as f32;
        perspective(self.fovy, aspect, self.znear, self.zfar)
    }
}

/// Free-flying camera looking along yaw/pitch, Y up
#[derive(Debug, Clone, Copy)]
pub struct FlyCamera {
    pub position: Point3<f32>,
    yaw: Rad<f32>,
    pitch: Rad<f32>,
    pub projection: Projection,
}

impl FlyCamera {
    pub fn new<V: Into<Point3<f32>>, Y: Into<Rad<f32>>, P: Into<Rad<f32>>>(
        position: V,
        yaw: Y,
        pitch: P,
        projection: Projection,
    ) -> Self {
        let mut camera = Self {
            position: position.into(),
            yaw: Rad(0.0),
            pitch: Rad(0.0),
            projection,
        };
        camera.set_yaw(yaw);
        camera.set_pitch(pitch);
        camera
    }

    pub fn set_yaw<Y: Into<Rad<f32>>>(&mut self, yaw: Y) {
        self.yaw = yaw.into();
    }

    /// Pitch is kept just short of straight up/down so the basis stays valid
    pub fn set_pitch<P: Into<Rad<f32>>>(&mut self, pitch: P) {
        let pitch: Rad<f32> = pitch.into();
        self.pitch = Rad(pitch.0.clamp(-SAFE_FRAC_PI_2, SAFE_FRAC_PI_2));
    }

    pub fn yaw(&self) -> Rad<f32> {
        self.yaw
    }

    pub fn pitch(&self) -> Rad<f32> {
        self.pitch
    }

    pub fn forward(&self) -> Vector3<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.0.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.0.sin_cos();
        Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize()
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.forward(), Vector3::unit_y())
    }
}

impl Camera for FlyCamera {
    fn pixel_size(&self) -> (u32, u32) {
        self.projection.pixels()
    }

    fn camera_to_world(&self) -> Matrix4<f32> {
        camera_to_world_from_basis(self.position, self.forward(), Vector3::unit_y())
    }

    fn projection_matrix(&self) -> Matrix4<f32> {
        self.projection.calc_matrix()
    }
}

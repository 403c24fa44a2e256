use cgmath::{InnerSpace, Matrix4, Point3, Vector3, Vector4};

/// What the raymarch pass needs to know about a camera
pub trait Camera {
    /// Current render size in pixels (width, height)
    fn pixel_size(&self) -> (u32, u32);

    /// Maps camera space into world space
    fn camera_to_world(&self) -> Matrix4<f32>;

    /// Camera-space to clip-space projection
    fn projection_matrix(&self) -> Matrix4<f32>;
}

/// Inverse of `Matrix4::look_to_rh`, built from the orthonormal basis directly.
///
/// Columns are right, up, back (-forward) and the eye position.
pub fn camera_to_world_from_basis(
    eye: Point3<f32>,
    forward: Vector3<f32>,
    up: Vector3<f32>,
) -> Matrix4<f32> {
    let f = forward.normalize();
    let s = f.cross(up).normalize();
    let u = s.cross(f);
    Matrix4::from_cols(
        s.extend(0.0),
        u.extend(0.0),
        (-f).extend(0.0),
        Vector4::new(eye.x, eye.y, eye.z, 1.0),
    )
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    let mut result = [[0.0; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            result[i][j] = matrix4[i][j];
        }
    }

    result
}

pub mod camera_utils;
pub mod fly_camera;
pub mod orbit_camera;

// Re-export main types
pub use camera_utils::{convert_matrix4_to_array, Camera};
pub use fly_camera::{FlyCamera, Projection};
pub use orbit_camera::{OrbitCamera, OrbitCameraBounds};

//! Orbit camera model and projection selection.
//!
//! The camera is plain owned state mutated by the input surface and read by
//! the render path each frame; there are no process-wide singletons. All
//! trigonometry operates in radians; degree values exist only at the setter
//! boundary.

mod orbit;
mod projection;

pub use orbit::CameraState;
pub use projection::{projection_matrix, Projection};

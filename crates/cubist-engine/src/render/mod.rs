//! GPU rendering subsystem.
//!
//! Owns the cube's GPU resources (pipelines, vertex/index buffers, camera
//! uniform) and issues one indexed draw per frame. Topology and index count
//! are looked up from the visualization mode in a single table; there is no
//! per-mode draw code.

mod buffers;
mod ctx;
mod cube;
mod dispatch;

pub use buffers::BufferSet;
pub use ctx::{RenderCtx, RenderTarget};
pub use cube::CubeRenderer;
pub use dispatch::{draw_params, DrawParams};

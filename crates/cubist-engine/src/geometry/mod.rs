//! Static cube geometry catalog.
//!
//! Everything in this module is pure data: vertex positions, the two index
//! sets (solid triangles, wireframe edges), the face ordering, and the named
//! color palettes. No GPU types leak in here; uploading lives in `render`.

pub mod cube;
mod mode;
pub mod palette;

pub use cube::{Face, FACE_COUNT, VERTEX_COUNT};
pub use mode::VisualizationMode;
pub use palette::{Color, Palette};

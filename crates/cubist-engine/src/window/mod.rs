//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, and wires them to the GPU layer.
//! One render pass executes per redraw; the loop schedules the next pass only
//! after the current one returns, and input events drain between frames.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};

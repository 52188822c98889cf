//! Time subsystem.
//!
//! Supplies the per-frame timing half of the frame context: one `FrameClock`
//! per render loop, ticked once per presented frame.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};

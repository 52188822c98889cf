//! Core engine-facing contracts.
//!
//! Defines the stable interface between the runtime (platform loop) and the
//! viewer application: a per-frame context plus an app trait that receives
//! raw window events for input wiring.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};

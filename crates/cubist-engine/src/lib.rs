//! Cubist engine crate.
//!
//! This crate owns the platform + GPU runtime pieces and the cube rendering
//! core used by the viewer binary.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod geometry;
pub mod camera;
pub mod render;

mod app;
mod controls;

use anyhow::Result;

use cubist_engine::device::GpuInit;
use cubist_engine::logging::{init_logging, LoggingConfig};
use cubist_engine::window::{Runtime, RuntimeConfig};

use crate::app::ViewerApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!("cubist: orbit cube viewer");
    println!("  arrows      orbit (polar / azimuth, 5° steps)");
    println!("  +/- or W/S  zoom (orbit radius)");
    println!("  P           perspective / orthographic");
    println!("  M           cycle visualization mode");
    println!("  1 / 2 / 3   palette: classic / muted / pastel");
    println!("  Esc         quit");
    println!();

    let config = RuntimeConfig {
        title: "cubist".to_string(),
        ..Default::default()
    };

    Runtime::run(config, GpuInit::default(), ViewerApp::new())
}

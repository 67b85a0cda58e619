// SPDX-License-Identifier: MPL-2.0
//! Logger setup for the binary.
//!
//! `RUST_LOG` overrides the default filter. The GPU stack is capped at
//! warnings because it logs every frame at `info`.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "iced_mockup=info";

/// Installs the global logger. Calling it twice is harmless.
pub fn init_logger() {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER));
    builder.filter_module("naga", LevelFilter::Warn);
    builder.filter_module("wgpu", LevelFilter::Warn);
    builder.filter_module("iced_wgpu", LevelFilter::Warn);
    builder.filter_module("iced_winit", LevelFilter::Warn);
    builder.format_timestamp_millis();

    let _ = builder.try_init();
}

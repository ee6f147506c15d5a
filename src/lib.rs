//! Library exports for inkpad.
//!
//! The drawing session, rendering, and save pipeline are host-independent:
//! any front end that can deliver pointer samples and show a Cairo surface
//! can drive them. The `inkpad` binary replays recorded scripts; the
//! `dump_config_schema` binary shares the configuration types.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;

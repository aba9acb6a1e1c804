//! Tile Blend viewer
//!
//! The sampler lives in `tileblend-core`, GPU and CPU surfaces in
//! `tileblend-renderer`, configuration in `tileblend-config`. This crate
//! holds the host side: key bindings, slider state, the image gallery and
//! the redraw bookkeeping shared by the window and headless binaries.

pub mod commands;
pub mod controls;
pub mod gallery;
pub mod viewer;

pub use commands::{Command, command_for_key};
pub use controls::{ParamControls, Slider, SliderId};
pub use gallery::Gallery;
pub use viewer::{Response, Viewer};

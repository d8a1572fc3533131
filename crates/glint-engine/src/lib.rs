//! Glint engine crate.
//!
//! This crate owns the platform + GPU runtime pieces the demo binary builds on:
//! window/event-loop plumbing, wgpu device bring-up, input translation, frame
//! timing, and the textured-quad renderer with its resource loaders.

pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;

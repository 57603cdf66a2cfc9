//! Paintkit engine crate.
//!
//! Runtime support for generated vector drawing code: geometry fitting,
//! gradient ramps, single-slot resource caches, typefaces and color helpers.
//! The rendering backend is reached through the traits in [`render`].

pub mod cache;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;

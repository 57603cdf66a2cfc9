//! Backend contracts.
//!
//! Generated drawing code talks to the rendering backend only through these
//! traits. A backend implements [`Canvas`] for drawing, [`ShaderFactory`] for
//! turning shader descriptors into its native handles, and [`TextMeasure`]
//! for text metrics.
//!
//! Convention: design units, top-left origin, +Y down.

mod canvas;

pub use canvas::{Canvas, ShaderFactory, TextMeasure};

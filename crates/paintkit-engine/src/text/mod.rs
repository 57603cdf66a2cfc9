//! Text: typefaces, the process-wide typeface registry, and single-line
//! baseline layout.
//!
//! Font bytes come from a [`FontProvider`]; parsing and glyph metrics use
//! `fontdue`. Glyph rasterization belongs to the backend.

mod layout;
mod registry;
mod typeface;

pub use layout::{TextAlign, TextLayout, TextPaint};
pub use registry::{
    install_typeface_provider, typeface, DirectoryFonts, EmbeddedFonts, FontProvider,
    TypefaceRegistry,
};
pub use typeface::{FontLoadError, FontMetrics, LoadTypeface, Typeface};

//! Single-slot "rebuild if changed" caches.
//!
//! Generated drawing code runs every frame with, usually, the same
//! parameters. Each cache remembers the one resource it last built and the
//! exact parameters used to build it, and only rebuilds when any parameter
//! differs. The previous resource is released before the replacement is
//! built, so at most one resource per cache is live at any time.
//!
//! These are not general caches: one slot, one key, no eviction policy.

mod shader;
mod slot;
mod text;

pub use shader::{LinearGradientCache, RadialGradientCache};
pub use slot::{ResourceBuilder, SlotCache};
pub use text::TextLayoutCache;

//! Recording backend.
//!
//! Responsibilities:
//! - record what generated drawing code draws, in call order
//! - own a shader table so shader handle lifetimes can be observed
//!
//! Used by the studio and by tests in place of a real rendering backend.

mod cmd;
mod list;

pub use cmd::{DrawCmd, ShaderId};
pub use list::DrawList;

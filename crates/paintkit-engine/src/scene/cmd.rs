use crate::coords::{Path, Vec2};
use crate::paint::Paint;
use crate::text::{TextAlign, TextPaint};

/// Handle into a [`DrawList`](super::DrawList)'s shader table.
///
/// Released slots are reused; the generation tells a stale id apart from
/// the shader that took over its slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ShaderId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl ShaderId {
    #[inline]
    pub fn index(self) -> usize {
        self.index
    }

    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    FillPath {
        path: Path,
        paint: Paint<ShaderId>,
    },
    TextOnPath {
        text: String,
        path: Path,
        offset: Vec2,
        paint: TextPaint,
        align: TextAlign,
    },
}

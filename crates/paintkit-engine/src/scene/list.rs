use crate::coords::{Path, Vec2};
use crate::paint::{Paint, Shader};
use crate::render::{Canvas, ShaderFactory};
use crate::text::{TextAlign, TextPaint};

use super::{DrawCmd, ShaderId};

#[derive(Debug, Default)]
struct ShaderSlot {
    generation: u32,
    shader: Option<Shader>,
}

/// Recorded draw stream plus the shader table it references.
///
/// - `push` order is paint order
/// - released shader slots go on a free list and are reused with a bumped
///   generation, so the table stays as large as the peak live count
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawCmd>,
    shaders: Vec<ShaderSlot>,
    free: Vec<usize>,
    created: usize,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps the shader table: shaders belong to
    /// whoever created them, typically a cache that outlives the frame.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns commands in recording order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }

    /// The descriptor behind a live shader.
    pub fn shader(&self, id: ShaderId) -> Option<&Shader> {
        self.shaders
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.shader.as_ref())
    }

    /// Number of created shaders not yet released.
    #[inline]
    pub fn live_shaders(&self) -> usize {
        self.shaders.len() - self.free.len()
    }

    /// Total number of shaders ever created.
    #[inline]
    pub fn created_shaders(&self) -> usize {
        self.created
    }

    /// Size of the shader table, live and free slots included.
    #[inline]
    pub fn shader_capacity(&self) -> usize {
        self.shaders.len()
    }
}

impl Canvas for DrawList {
    type Shader = ShaderId;

    fn fill_path(&mut self, path: &Path, paint: &Paint<ShaderId>) {
        if let Paint::Shader(id) = paint {
            if self.shader(*id).is_none() {
                log::warn!("DrawList::fill_path: shader {:?} is not live", id);
            }
        }
        self.push(DrawCmd::FillPath { path: path.clone(), paint: paint.clone() });
    }

    fn draw_text_on_path(
        &mut self,
        text: &str,
        path: &Path,
        offset: Vec2,
        paint: &TextPaint,
        align: TextAlign,
    ) {
        self.push(DrawCmd::TextOnPath {
            text: text.to_owned(),
            path: path.clone(),
            offset,
            paint: paint.clone(),
            align,
        });
    }
}

impl ShaderFactory for DrawList {
    type Handle = ShaderId;

    fn create_shader(&mut self, shader: &Shader) -> ShaderId {
        if !shader.is_valid() {
            log::warn!("DrawList::create_shader: degenerate shader descriptor {:?}", shader);
        }
        self.created += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.shaders[index];
            slot.generation = slot.generation.wrapping_add(1);
            slot.shader = Some(shader.clone());
            return ShaderId { index, generation: slot.generation };
        }

        self.shaders.push(ShaderSlot { generation: 0, shader: Some(shader.clone()) });
        ShaderId { index: self.shaders.len() - 1, generation: 0 }
    }

    fn release_shader(&mut self, handle: ShaderId) {
        let released = self
            .shaders
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.shader.take());
        match released {
            Some(_) => self.free.push(handle.index),
            None => log::warn!("DrawList::release_shader: unknown or released shader {:?}", handle),
        }
    }
}

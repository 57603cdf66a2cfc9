use crate::render::TextMeasure;
use crate::text::{TextAlign, TextLayout, TextPaint};

use super::{ResourceBuilder, SlotCache};

#[derive(Debug, Clone, PartialEq)]
struct TextKey {
    text: String,
    paint: TextPaint,
    width: f32,
    align: TextAlign,
}

struct LayoutBuilder<'a, M: ?Sized>(&'a M);

impl<M: TextMeasure + ?Sized> ResourceBuilder<TextKey> for LayoutBuilder<'_, M> {
    type Resource = TextLayout;

    fn build(&mut self, key: &TextKey) -> TextLayout {
        TextLayout::new(key.text.clone(), key.paint.clone(), key.width, key.align, self.0)
    }
}

/// Holds the layout for the last text run requested.
///
/// Layouts own no backend resources, so dropping the cache is enough to
/// dispose of it.
#[derive(Debug)]
pub struct TextLayoutCache {
    slot: SlotCache<TextKey, TextLayout>,
}

impl TextLayoutCache {
    pub const fn new() -> Self {
        Self { slot: SlotCache::new("TextLayoutCache") }
    }

    /// Returns the layout for `text` set with `paint` in a box `width` wide.
    ///
    /// The returned layout keeps its memoized baseline path across calls with
    /// identical arguments.
    pub fn get<M>(
        &mut self,
        measure: &M,
        text: &str,
        paint: &TextPaint,
        width: f32,
        align: TextAlign,
    ) -> &mut TextLayout
    where
        M: TextMeasure + ?Sized,
    {
        self.slot.get_or_rebuild_with(
            |k| k.text == text && k.paint == *paint && k.width == width && k.align == align,
            || TextKey { text: text.to_owned(), paint: paint.clone(), width, align },
            &mut LayoutBuilder(measure),
        )
    }

    #[inline]
    pub fn current(&self) -> Option<&TextLayout> {
        self.slot.current()
    }

    #[inline]
    pub fn builds(&self) -> u64 {
        self.slot.builds()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.slot.take();
    }
}

impl Default for TextLayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::DrawList;
    use crate::text::FontMetrics;

    fn paint() -> TextPaint {
        TextPaint::new(14.0, Color::BLACK)
    }

    #[test]
    fn identical_arguments_reuse_the_layout() {
        let metrics = FontMetrics::new();
        let mut cache = TextLayoutCache::new();
        let mut list = DrawList::new();

        cache.get(&metrics, "Save", &paint(), 80.0, TextAlign::Center).draw(&mut list);
        let layout = cache.get(&metrics, "Save", &paint(), 80.0, TextAlign::Center);
        assert!(layout.has_baseline());
        assert_eq!(cache.builds(), 1);
    }

    #[test]
    fn any_field_change_rebuilds() {
        let metrics = FontMetrics::new();
        let mut cache = TextLayoutCache::new();

        cache.get(&metrics, "Save", &paint(), 80.0, TextAlign::Center);
        cache.get(&metrics, "Saved", &paint(), 80.0, TextAlign::Center);
        cache.get(&metrics, "Saved", &TextPaint::new(15.0, Color::BLACK), 80.0, TextAlign::Center);
        cache.get(&metrics, "Saved", &TextPaint::new(15.0, Color::GRAY), 80.0, TextAlign::Center);
        cache.get(&metrics, "Saved", &TextPaint::new(15.0, Color::GRAY), 81.0, TextAlign::Center);
        let layout =
            cache.get(&metrics, "Saved", &TextPaint::new(15.0, Color::GRAY), 81.0, TextAlign::Right);

        assert_eq!(layout.text(), "Saved");
        assert_eq!(layout.align(), TextAlign::Right);
        assert!(!layout.has_baseline());
        assert_eq!(cache.builds(), 6);
    }

    #[test]
    fn clear_forces_a_rebuild() {
        let metrics = FontMetrics::new();
        let mut cache = TextLayoutCache::new();
        cache.get(&metrics, "A", &paint(), 10.0, TextAlign::Left);
        cache.clear();
        assert!(cache.current().is_none());
        cache.get(&metrics, "A", &paint(), 10.0, TextAlign::Left);
        assert_eq!(cache.builds(), 2);
    }
}

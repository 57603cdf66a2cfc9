use crate::coords::Vec2;
use crate::paint::{Gradient, Shader};
use crate::render::ShaderFactory;

use super::{ResourceBuilder, SlotCache};

/// Cache key that knows which shader it describes.
trait ShaderKey {
    fn shader(&self) -> Shader;
}

#[derive(Debug, Clone, PartialEq)]
struct LinearKey {
    gradient: Gradient,
    start: Vec2,
    end: Vec2,
}

impl ShaderKey for LinearKey {
    fn shader(&self) -> Shader {
        self.gradient.linear(self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct RadialKey {
    gradient: Gradient,
    start_center: Vec2,
    start_radius: f32,
    end_center: Vec2,
    end_radius: f32,
}

impl ShaderKey for RadialKey {
    fn shader(&self) -> Shader {
        self.gradient
            .radial(self.start_center, self.start_radius, self.end_center, self.end_radius)
    }
}

/// Adapts a [`ShaderFactory`] to the slot cache's builder interface.
struct FactoryBuilder<'a, F: ?Sized>(&'a mut F);

impl<K: ShaderKey, F: ShaderFactory + ?Sized> ResourceBuilder<K> for FactoryBuilder<'_, F> {
    type Resource = F::Handle;

    fn build(&mut self, key: &K) -> F::Handle {
        self.0.create_shader(&key.shader())
    }

    fn release(&mut self, handle: F::Handle) {
        self.0.release_shader(handle);
    }
}

/// Holds the backend shader for the last linear gradient requested.
///
/// The handle belongs to the factory that created it: call
/// [`release`](Self::release) with that factory before dropping the cache.
#[derive(Debug)]
pub struct LinearGradientCache<H> {
    slot: SlotCache<LinearKey, H>,
}

impl<H> LinearGradientCache<H> {
    pub const fn new() -> Self {
        Self { slot: SlotCache::new("LinearGradientCache") }
    }

    /// Returns the shader for `gradient` running from `start` to `end`.
    pub fn get<F>(&mut self, factory: &mut F, gradient: &Gradient, start: Vec2, end: Vec2) -> &H
    where
        F: ShaderFactory<Handle = H> + ?Sized,
    {
        let key = LinearKey { gradient: gradient.clone(), start, end };
        self.slot.get_or_rebuild(key, &mut FactoryBuilder(factory))
    }

    pub fn release<F>(&mut self, factory: &mut F)
    where
        F: ShaderFactory<Handle = H> + ?Sized,
    {
        self.slot.release(&mut FactoryBuilder(factory));
    }

    #[inline]
    pub fn current(&self) -> Option<&H> {
        self.slot.current()
    }

    #[inline]
    pub fn builds(&self) -> u64 {
        self.slot.builds()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }
}

impl<H> Default for LinearGradientCache<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Drop for LinearGradientCache<H> {
    fn drop(&mut self) {
        if !self.slot.is_empty() {
            log::warn!("{} dropped while holding a shader; call release() first", self.slot.label());
        }
    }
}

/// Holds the backend shader for the last two-circle radial gradient
/// requested.
///
/// Same ownership rules as [`LinearGradientCache`].
#[derive(Debug)]
pub struct RadialGradientCache<H> {
    slot: SlotCache<RadialKey, H>,
}

impl<H> RadialGradientCache<H> {
    pub const fn new() -> Self {
        Self { slot: SlotCache::new("RadialGradientCache") }
    }

    /// Returns the shader for `gradient` between the two circles.
    ///
    /// See [`Gradient::radial`] for how the circles map onto the backend's
    /// single-circle primitive.
    pub fn get<F>(
        &mut self,
        factory: &mut F,
        gradient: &Gradient,
        start_center: Vec2,
        start_radius: f32,
        end_center: Vec2,
        end_radius: f32,
    ) -> &H
    where
        F: ShaderFactory<Handle = H> + ?Sized,
    {
        let key = RadialKey {
            gradient: gradient.clone(),
            start_center,
            start_radius,
            end_center,
            end_radius,
        };
        self.slot.get_or_rebuild(key, &mut FactoryBuilder(factory))
    }

    pub fn release<F>(&mut self, factory: &mut F)
    where
        F: ShaderFactory<Handle = H> + ?Sized,
    {
        self.slot.release(&mut FactoryBuilder(factory));
    }

    #[inline]
    pub fn current(&self) -> Option<&H> {
        self.slot.current()
    }

    #[inline]
    pub fn builds(&self) -> u64 {
        self.slot.builds()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }
}

impl<H> Default for RadialGradientCache<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Drop for RadialGradientCache<H> {
    fn drop(&mut self) {
        if !self.slot.is_empty() {
            log::warn!("{} dropped while holding a shader; call release() first", self.slot.label());
        }
    }
}

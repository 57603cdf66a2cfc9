/// Builds and disposes the resource held by a [`SlotCache`].
pub trait ResourceBuilder<K> {
    type Resource;

    fn build(&mut self, key: &K) -> Self::Resource;

    /// Disposes a resource that is being replaced or evicted.
    fn release(&mut self, resource: Self::Resource) {
        drop(resource);
    }
}

#[derive(Debug)]
struct Entry<K, R> {
    key: K,
    resource: R,
}

/// One-slot cache keyed by the full parameter tuple `K`.
///
/// Keys compare with `PartialEq`, exactly: floats are not compared with a
/// tolerance, so any change to any field triggers a rebuild.
#[derive(Debug)]
pub struct SlotCache<K, R> {
    label: &'static str,
    slot: Option<Entry<K, R>>,
    builds: u64,
}

impl<K: PartialEq, R> SlotCache<K, R> {
    /// Creates an empty cache. `label` names the cache in log output.
    pub const fn new(label: &'static str) -> Self {
        Self { label, slot: None, builds: 0 }
    }

    /// Returns the resource for `key`, rebuilding it if `key` differs from
    /// the key of the held resource.
    pub fn get_or_rebuild<B>(&mut self, key: K, builder: &mut B) -> &mut R
    where
        B: ResourceBuilder<K, Resource = R> + ?Sized,
    {
        let entry = match self.slot.take() {
            Some(entry) if entry.key == key => entry,
            stale => self.rebuild(stale, key, builder),
        };
        &mut self.slot.insert(entry).resource
    }

    /// Like [`get_or_rebuild`](Self::get_or_rebuild), for keys that are
    /// costly to own: `matches` checks the held key against borrowed
    /// parameters, and `make_key` is only called when a rebuild is needed.
    pub fn get_or_rebuild_with<B, M, F>(&mut self, matches: M, make_key: F, builder: &mut B) -> &mut R
    where
        B: ResourceBuilder<K, Resource = R> + ?Sized,
        M: Fn(&K) -> bool,
        F: FnOnce() -> K,
    {
        let entry = match self.slot.take() {
            Some(entry) if matches(&entry.key) => entry,
            stale => self.rebuild(stale, make_key(), builder),
        };
        &mut self.slot.insert(entry).resource
    }

    fn rebuild<B>(&mut self, stale: Option<Entry<K, R>>, key: K, builder: &mut B) -> Entry<K, R>
    where
        B: ResourceBuilder<K, Resource = R> + ?Sized,
    {
        if let Some(old) = stale {
            builder.release(old.resource);
        }
        let resource = builder.build(&key);
        self.builds += 1;
        log::trace!("{}: rebuilt (build #{})", self.label, self.builds);
        Entry { key, resource }
    }

    /// Releases the held resource, if any, through `builder`.
    pub fn release<B>(&mut self, builder: &mut B)
    where
        B: ResourceBuilder<K, Resource = R> + ?Sized,
    {
        if let Some(entry) = self.slot.take() {
            builder.release(entry.resource);
        }
    }

    /// Empties the slot and hands back the key and resource.
    pub fn take(&mut self) -> Option<(K, R)> {
        self.slot.take().map(|e| (e.key, e.resource))
    }

    #[inline]
    pub fn current(&self) -> Option<&R> {
        self.slot.as_ref().map(|e| &e.resource)
    }

    #[inline]
    pub fn key(&self) -> Option<&K> {
        self.slot.as_ref().map(|e| &e.key)
    }

    /// Number of times a resource has been built.
    #[inline]
    pub fn builds(&self) -> u64 {
        self.builds
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        self.label
    }
}

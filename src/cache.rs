use crate::shape::TessellatedShape;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Tessellated meshes of shapes that are drawn with a cache key, in local space.
pub(crate) struct Cache {
    tessellation_cache: LruCache<u64, TessellatedShape>,
}

impl Cache {
    pub(crate) fn new(size: NonZeroUsize) -> Self {
        Self {
            tessellation_cache: LruCache::new(size),
        }
    }

    pub fn len(&self) -> usize {
        self.tessellation_cache.len()
    }

    pub(crate) fn get_tessellation(&mut self, cache_key: &u64) -> Option<&TessellatedShape> {
        self.tessellation_cache.get(cache_key)
    }

    pub(crate) fn insert_tessellation(&mut self, cache_key: u64, tessellation: TessellatedShape) {
        self.tessellation_cache.put(cache_key, tessellation);
    }
}

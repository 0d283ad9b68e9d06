use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique entity identifier.
///
/// Ids are never reused, so an id from a dropped scene cannot alias an
/// entity in a newer one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EntityId(u64);

impl EntityId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value registered in a [`Scene`](super::Scene), tagged with its id.
///
/// Derefs to the wrapped entity so `scene.cameras()[0].position()` reads
/// naturally.
#[derive(Debug)]
pub struct Entity<T> {
    id: EntityId,
    value: T,
}

impl<T> Entity<T> {
    pub(crate) fn new(value: T) -> Self {
        Self { id: EntityId::next(), value }
    }

    #[inline]
    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl<T> Deref for Entity<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Entity<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

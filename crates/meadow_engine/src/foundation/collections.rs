//! Specialized collection types

pub use slotmap::{SlotMap, DefaultKey};
use slotmap::Key;

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<DefaultKey, T>;

/// Typed handle for type-safe asset references
pub struct TypedHandle<T> {
    key: DefaultKey,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> TypedHandle<T> {
    /// Create a new typed handle from a key
    pub fn new(key: DefaultKey) -> Self {
        Self {
            key,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get the underlying key
    pub fn key(&self) -> DefaultKey {
        self.key
    }

    /// Slot index, suitable as a renderer-side texture slot
    pub fn index(&self) -> u32 {
        (self.key.data().as_ffi() & 0xffff_ffff) as u32
    }
}

// Manual impls: deriving would put bounds on `T`
impl<T> Clone for TypedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedHandle<T> {}

impl<T> std::fmt::Debug for TypedHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TypedHandle").field(&self.key).finish()
    }
}

impl<T> PartialEq for TypedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedHandle<T> {}

impl<T> std::hash::Hash for TypedHandle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    #[test]
    fn test_typed_handle_identity() {
        let mut map: HandleMap<u32> = HandleMap::new();
        let a = TypedHandle::<Dummy>::new(map.insert(1));
        let b = TypedHandle::<Dummy>::new(map.insert(2));

        assert_eq!(a, a);
        assert_ne!(a, b);
        assert_eq!(map[a.key()], 1);
        assert_ne!(a.index(), b.index());
    }

    #[test]
    fn test_typed_handle_debug_without_debug_payload() {
        let mut map: HandleMap<u32> = HandleMap::new();
        let handle = TypedHandle::<Dummy>::new(map.insert(7));

        assert!(format!("{handle:?}").starts_with("TypedHandle("));
    }
}

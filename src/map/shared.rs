//! Lock-guarded [`OptionMap`] for concurrent callers.
//!
//! An `OptionMap` assumes one writer at a time. [`SharedOptionMap`] puts a
//! single `parking_lot::RwLock` around one map so several threads can read
//! and write it, with every read observing the writes that completed before
//! it began.

use super::{DefaultHashBuilder, OptionMap};
use crate::optional::Optional;
use parking_lot::RwLock;
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// An [`OptionMap`] behind a reader-writer lock.
///
/// Single operations (`get_cloned`, `set`, `delete`, `clear`) take the lock
/// for their own duration. Use [`read`](Self::read) or
/// [`write`](Self::write) to run several steps under one acquisition.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use std::thread;
/// use optionmap::map::SharedOptionMap;
/// use optionmap::optional::Optional;
///
/// let catalog: Arc<SharedOptionMap<u32, String>> = Arc::new(SharedOptionMap::new());
///
/// let writer = {
///     let catalog = Arc::clone(&catalog);
///     thread::spawn(move || {
///         catalog.set(1, "Lamp".to_string());
///     })
/// };
/// writer.join().unwrap();
///
/// assert_eq!(catalog.get_cloned(&1), Optional::Some("Lamp".to_string()));
/// ```
pub struct SharedOptionMap<K, V, S = DefaultHashBuilder> {
    inner: RwLock<OptionMap<K, V, S>>,
}

impl<K, V> SharedOptionMap<K, V, DefaultHashBuilder> {
    /// Creates an empty shared map.
    pub fn new() -> Self {
        Self::from(OptionMap::new())
    }
}

impl<K, V, S> SharedOptionMap<K, V, S> {
    /// Runs `function` with shared access to the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::map::SharedOptionMap;
    ///
    /// let cart: SharedOptionMap<&str, u32> = SharedOptionMap::new();
    /// cart.set("apple", 2);
    /// cart.set("pear", 3);
    /// let total: u32 = cart.read(|map| map.values().sum());
    /// assert_eq!(total, 5);
    /// ```
    ///
    /// # Deadlocks
    ///
    /// The lock is not reentrant. Calling any method of the same
    /// `SharedOptionMap` from inside `function`, including formatting it with
    /// `{:?}`, may block forever once a writer is queued. Use the map passed to
    /// `function` instead.
    pub fn read<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&OptionMap<K, V, S>) -> R,
    {
        let guard = self.inner.read();
        tracing::trace!("acquired read lock on shared option map");
        function(&*guard)
    }

    /// Runs `function` with exclusive access to the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::map::SharedOptionMap;
    /// use optionmap::optional::Optional;
    ///
    /// let cart: SharedOptionMap<&str, u32> = SharedOptionMap::new();
    /// cart.set("apple", 2);
    ///
    /// // Increment in one step so no other writer interleaves.
    /// cart.write(|map| {
    ///     let quantity = map.get(&"apple").map_or(0, |quantity| *quantity);
    ///     map.set("apple", quantity + 1);
    /// });
    /// assert_eq!(cart.get_cloned(&"apple"), Optional::Some(3));
    /// ```
    ///
    /// # Deadlocks
    ///
    /// The lock is not reentrant. Calling any method of the same
    /// `SharedOptionMap` from inside `function`, including formatting it with
    /// `{:?}`, blocks forever. Read and update through the map passed to
    /// `function` instead.
    pub fn write<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&mut OptionMap<K, V, S>) -> R,
    {
        let mut guard = self.inner.write();
        tracing::trace!("acquired write lock on shared option map");
        function(&mut *guard)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Deletes every entry.
    pub fn clear(&self) {
        self.write(OptionMap::clear);
    }

    /// Consumes the lock and returns the map.
    pub fn into_inner(self) -> OptionMap<K, V, S> {
        self.inner.into_inner()
    }
}

impl<K, V, S> SharedOptionMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Looks up `key` and clones the value under a read lock.
    pub fn get_cloned<Q>(&self, key: &Q) -> Optional<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.read(|map| map.get_cloned(key))
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.read(|map| map.contains_key(key))
    }

    /// Inserts `value` under `key` under a write lock.
    pub fn set(&self, key: K, value: V) {
        self.write(|map| {
            map.set(key, value);
        });
    }

    /// Deletes `key` under a write lock; returns `true` if it was present.
    pub fn delete<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.write(|map| map.delete(key))
    }
}

impl<K, V, S> From<OptionMap<K, V, S>> for SharedOptionMap<K, V, S> {
    fn from(map: OptionMap<K, V, S>) -> Self {
        Self {
            inner: RwLock::new(map),
        }
    }
}

impl<K, V> Default for SharedOptionMap<K, V, DefaultHashBuilder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for SharedOptionMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.read(|map| formatter.debug_tuple("SharedOptionMap").field(map).finish())
    }
}

static_assertions::assert_impl_all!(SharedOptionMap<String, i32>: Send, Sync);
static_assertions::assert_not_impl_any!(SharedOptionMap<std::rc::Rc<str>, i32>: Send, Sync);

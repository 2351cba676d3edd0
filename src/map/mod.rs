//! Keyed container whose lookups return [`Optional`].
//!
//! [`OptionMap`] wraps a hash map and never exposes its "key absent" state
//! directly: [`get`](OptionMap::get) always answers with an `Optional`, which
//! is `Some(value)` exactly when the key is present.
//!
//! # Examples
//!
//! ```rust
//! use optionmap::map::OptionMap;
//! use optionmap::optional::Optional;
//!
//! let mut map = OptionMap::new();
//! map.set("a", 1).set("b", 2);
//! assert!(map.delete(&"a"));
//!
//! assert_eq!(map.get(&"a"), Optional::None);
//! assert_eq!(map.get(&"b"), Optional::Some(&2));
//!
//! map.clear();
//! assert_eq!(map.get(&"b"), Optional::None);
//! ```
//!
//! # Hashers
//!
//! The default hasher is selected by Cargo feature: `fxhash` uses
//! `rustc_hash::FxBuildHasher`, `ahash` uses `ahash::RandomState`, and
//! without either the standard library's `RandomState` is used.

#[cfg(feature = "sync")]
mod shared;

#[cfg(feature = "sync")]
pub use shared::SharedOptionMap;

use crate::optional::Optional;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};

/// The hasher used by [`OptionMap`] unless another one is given.
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hasher used by [`OptionMap`] unless another one is given.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hasher used by [`OptionMap`] unless another one is given.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = hash_map::RandomState;

/// A hash map whose lookups return [`Optional`] instead of a nullable value.
///
/// Keys are unique and iteration order is unspecified. The only mutators are
/// [`set`](Self::set), [`delete`](Self::delete), [`remove`](Self::remove),
/// [`clear`](Self::clear) and [`get_mut`](Self::get_mut); each takes
/// `&mut self`, so a map is written by one owner at a time. Wrap it in a
/// `SharedOptionMap` (feature `sync`) to share it across threads.
///
/// # Type Parameters
///
/// * `K` - The key type
/// * `V` - The value type
/// * `S` - The hasher builder
///
/// # Examples
///
/// ```rust
/// use optionmap::map::OptionMap;
///
/// let mut cart: OptionMap<String, u32> = OptionMap::new();
/// cart.set("apple".to_string(), 2);
///
/// let quantity = cart.get("apple").map_or(0, |quantity| *quantity);
/// assert_eq!(quantity, 2);
/// let missing = cart.get("pear").map_or(0, |quantity| *quantity);
/// assert_eq!(missing, 0);
/// ```
#[derive(Clone)]
pub struct OptionMap<K, V, S = DefaultHashBuilder> {
    entries: HashMap<K, V, S>,
}

impl<K, V> OptionMap<K, V, DefaultHashBuilder> {
    /// Creates an empty map.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(DefaultHashBuilder::default()),
        }
    }

    /// Creates an empty map with room for at least `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }
}

impl<K, V, S> OptionMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`.
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hash_builder),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deletes every entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::map::OptionMap;
    ///
    /// let mut map: OptionMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    /// map.clear();
    /// assert!(map.get(&"a").is_none());
    /// assert!(map.get(&"b").is_none());
    /// ```
    pub fn clear(&mut self) {
        tracing::trace!(removed = self.entries.len(), "option map cleared");
        self.entries.clear();
    }

    /// Returns an iterator over `(&key, &value)` pairs in arbitrary order.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// Returns an iterator over the keys in arbitrary order.
    #[inline]
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// Returns an iterator over the values in arbitrary order.
    #[inline]
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Returns the map's hasher builder.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.entries.hasher()
    }
}

impl<K, V, S> OptionMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Looks up `key`.
    ///
    /// Returns `Some(&value)` if `key` is present and `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::map::OptionMap;
    /// use optionmap::optional::Optional;
    ///
    /// let mut map = OptionMap::new();
    /// assert_eq!(map.get(&1), Optional::None);
    ///
    /// map.set(1, "one");
    /// assert_eq!(map.get(&1), Optional::Some(&"one"));
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Optional<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Optional::from_nullable(self.entries.get(key))
    }

    /// Looks up `key` and clones the value.
    #[inline]
    pub fn get_cloned<Q>(&self, key: &Q) -> Optional<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.get(key).map(V::clone)
    }

    /// Looks up `key` for in-place modification.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::map::OptionMap;
    /// use optionmap::optional::Optional;
    ///
    /// let mut cart = OptionMap::new();
    /// cart.set("apple", 1);
    /// if let Optional::Some(quantity) = cart.get_mut(&"apple") {
    ///     *quantity += 2;
    /// }
    /// assert_eq!(cart.get(&"apple"), Optional::Some(&3));
    /// ```
    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Optional<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        Optional::from_nullable(self.entries.get_mut(key))
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Inserts `value` under `key`, overwriting any previous value.
    ///
    /// Returns the map so calls can be chained.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::map::OptionMap;
    /// use optionmap::optional::Optional;
    ///
    /// let mut map = OptionMap::new();
    /// map.set("k", 1).set("k", 2);
    /// assert_eq!(map.get(&"k"), Optional::Some(&2));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        let replaced = self.entries.insert(key, value).is_some();
        tracing::trace!(replaced, length = self.entries.len(), "option map entry set");
        self
    }

    /// Deletes the entry for `key`.
    ///
    /// Returns `true` if the key was present and removed, `false` if it was
    /// absent. Deleting an absent key is not an error.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.entries.remove(key).is_some();
        tracing::trace!(removed, length = self.entries.len(), "option map entry deleted");
        removed
    }

    /// Removes the entry for `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Optional<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = Optional::from_nullable(self.entries.remove(key));
        tracing::trace!(
            removed = removed.is_some(),
            length = self.entries.len(),
            "option map entry removed"
        );
        removed
    }
}

impl<K, V> Default for OptionMap<K, V, DefaultHashBuilder> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> PartialEq for OptionMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V, S> Eq for OptionMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for OptionMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for OptionMap<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("{")?;
        let mut first = true;
        for (key, value) in &self.entries {
            if first {
                first = false;
            } else {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        formatter.write_str("}")
    }
}

impl<K, V, S> FromIterator<(K, V)> for OptionMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::with_hasher(S::default());
        map.extend(iterator);
        map
    }
}

impl<K, V, S> Extend<(K, V)> for OptionMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I>(&mut self, iterator: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iterator {
            self.set(key, value);
        }
    }
}

impl<K, V, S> IntoIterator for OptionMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a OptionMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V, S, const N: usize> From<[(K, V); N]> for OptionMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, S> serde::Serialize for OptionMap<K, V, S>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<Sr>(&self, serializer: Sr) -> Result<Sr::Ok, Sr::Error>
    where
        Sr: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct OptionMapVisitor<K, V, S> {
    marker: std::marker::PhantomData<fn() -> OptionMap<K, V, S>>,
}

#[cfg(feature = "serde")]
impl<K, V, S> OptionMapVisitor<K, V, S> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::de::Visitor<'de> for OptionMapVisitor<K, V, S>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    type Value = OptionMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = OptionMap::with_hasher(S::default());
        while let Some((key, value)) = access.next_entry()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, S> serde::Deserialize<'de> for OptionMap<K, V, S>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(OptionMapVisitor::new())
    }
}

static_assertions::assert_impl_all!(OptionMap<String, i32>: Send, Sync, Clone, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::{none, some};
    use rstest::rstest;

    #[rstest]
    fn test_new_map_is_empty() {
        let map: OptionMap<&str, i32> = OptionMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get(&"anything"), none());
    }

    #[rstest]
    fn test_set_then_get() {
        let mut map = OptionMap::new();
        map.set("a", 1);
        assert_eq!(map.get(&"a"), some(&1));
        assert_eq!(map.get_cloned(&"a"), some(1));
    }

    #[rstest]
    fn test_set_overwrites() {
        let mut map = OptionMap::new();
        map.set("a", 1).set("a", 2);
        assert_eq!(map.get(&"a"), some(&2));
        assert_eq!(map.len(), 1);
    }

    #[rstest]
    #[case("a", true)]
    #[case("missing", false)]
    fn test_delete_reports_presence(#[case] key: &str, #[case] expected: bool) {
        let mut map = OptionMap::new();
        map.set("a", 1);
        assert_eq!(map.delete(key), expected);
        assert_eq!(map.get(key), none());
    }

    #[rstest]
    fn test_remove_returns_value() {
        let mut map = OptionMap::new();
        map.set("a", 1);
        assert_eq!(map.remove(&"a"), some(1));
        assert_eq!(map.remove(&"a"), none());
    }

    #[rstest]
    fn test_clear_removes_everything() {
        let mut map: OptionMap<&str, i32> = OptionMap::from([("a", 1), ("b", 2)]);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.get(&"a"), none());
        assert_eq!(map.get(&"b"), none());
    }

    #[rstest]
    fn test_string_keys_borrow_as_str() {
        let mut map: OptionMap<String, i32> = OptionMap::new();
        map.set("apple".to_string(), 3);
        assert!(map.contains_key("apple"));
        assert_eq!(map.get("apple"), some(&3));
        assert!(map.delete("apple"));
    }

    #[rstest]
    fn test_get_mut_modifies_in_place() {
        let mut map = OptionMap::new();
        map.set(1, 10);
        if let Optional::Some(value) = map.get_mut(&1) {
            *value += 5;
        }
        assert_eq!(map.get(&1), some(&15));
        assert_eq!(map.get_mut(&2), Optional::None);
    }

    #[rstest]
    fn test_display_empty() {
        let map: OptionMap<i32, i32> = OptionMap::new();
        assert_eq!(format!("{map}"), "{}");
    }

    #[rstest]
    fn test_display_single_entry() {
        let map: OptionMap<&str, i32> = OptionMap::from([("a", 1)]);
        assert_eq!(format!("{map}"), "{a: 1}");
    }

    #[rstest]
    fn test_debug_single_entry() {
        let map: OptionMap<&str, i32> = OptionMap::from([("a", 1)]);
        assert_eq!(format!("{map:?}"), "{\"a\": 1}");
    }

    #[rstest]
    fn test_equality_ignores_insertion_order() {
        let left: OptionMap<i32, i32> = OptionMap::from([(1, 1), (2, 2)]);
        let right: OptionMap<i32, i32> = OptionMap::from([(2, 2), (1, 1)]);
        assert_eq!(left, right);
    }

    #[rstest]
    fn test_with_custom_hasher() {
        let mut map: OptionMap<i32, i32, hash_map::RandomState> =
            OptionMap::with_hasher(hash_map::RandomState::new());
        map.set(1, 2);
        assert_eq!(map.get(&1), some(&2));
    }

    #[rstest]
    fn test_into_iter_yields_all_entries() {
        let map: OptionMap<i32, i32> = OptionMap::from([(1, 10), (2, 20)]);
        let mut entries: Vec<(i32, i32)> = map.into_iter().collect();
        entries.sort_unstable();
        assert_eq!(entries, vec![(1, 10), (2, 20)]);
    }
}

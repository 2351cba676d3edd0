//! Monoid type class - a semigroup with an identity element.
//!
//! # Laws
//!
//! ```text
//! M::empty().combine(a) == a
//! a.combine(M::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optionmap::optional::Optional;
//! use optionmap::typeclass::Monoid;
//!
//! let labels = vec![
//!     Optional::some("a".to_string()),
//!     Optional::none(),
//!     Optional::some("b".to_string()),
//! ];
//! assert_eq!(Optional::combine_all(labels), Optional::some("ab".to_string()));
//! ```

use super::semigroup::Semigroup;
use crate::optional::Optional;

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every element of `iterator`, starting from [`empty`](Self::empty).
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    #[inline]
    fn empty() -> Self {
        Self::new()
    }
}

/// `Optional` forms a monoid when its inner type is a semigroup.
/// The identity element is `None`.
impl<T: Semigroup> Monoid for Optional<T> {
    #[inline]
    fn empty() -> Self {
        Self::None
    }
}

/// The identity element is the empty map.
#[cfg(feature = "map")]
impl<K, V, S> Monoid for crate::map::OptionMap<K, V, S>
where
    K: Eq + std::hash::Hash,
    S: std::hash::BuildHasher + Default,
{
    #[inline]
    fn empty() -> Self {
        Self::with_hasher(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::{none, some};
    use rstest::rstest;

    #[rstest]
    #[case(some("x".to_string()))]
    #[case(none())]
    fn optional_identity(#[case] value: Optional<String>) {
        assert_eq!(Optional::empty().combine(value.clone()), value);
        assert_eq!(value.clone().combine(Optional::empty()), value);
    }

    #[rstest]
    fn combine_all_of_nothing_is_empty() {
        assert_eq!(Optional::<String>::combine_all(Vec::new()), none());
        assert_eq!(String::combine_all(Vec::new()), String::new());
    }

    #[rstest]
    fn vec_combine_all_flattens() {
        assert_eq!(Vec::combine_all(vec![vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
    }

    #[cfg(feature = "map")]
    #[rstest]
    fn option_map_combine_all_layers_updates() {
        use crate::map::OptionMap;

        let layers: Vec<OptionMap<&str, i32>> = vec![
            OptionMap::from([("a", 1)]),
            OptionMap::from([("a", 2), ("b", 3)]),
        ];
        let merged = OptionMap::combine_all(layers);
        assert_eq!(merged.get(&"a"), some(&2));
        assert_eq!(merged.get(&"b"), some(&3));
        assert!(OptionMap::<&str, i32>::empty().is_empty());
    }
}

//! Foldable type class - reducing a structure to a summary value.
//!
//! An [`Optional`] folds as a structure of zero or one elements. An
//! [`OptionMap`](crate::map::OptionMap) folds over its values in arbitrary
//! order, so only order-insensitive folds give stable results on it.
//!
//! # Examples
//!
//! ```rust
//! use optionmap::map::OptionMap;
//! use optionmap::typeclass::Foldable;
//!
//! let cart: OptionMap<&str, u32> = OptionMap::from([("apple", 2), ("pear", 3)]);
//! let items = cart.fold_left(0, |total, quantity| total + quantity);
//! assert_eq!(items, 5);
//! ```

use super::higher::TypeConstructor;
use super::monoid::Monoid;
use crate::optional::Optional;

/// A type class for structures that can be folded to a summary value.
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Maps each element to a monoid and combines the results.
    #[inline]
    fn fold_map<M, F>(self, mut function: F) -> M
    where
        M: Monoid,
        F: FnMut(Self::Inner) -> M,
        Self: Sized,
    {
        self.fold_left(M::empty(), |accumulator, element| {
            accumulator.combine(function(element))
        })
    }

    /// Returns `true` if the structure has no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements.
    fn length(&self) -> usize;

    /// Collects the elements into a vector.
    #[inline]
    fn to_vec(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut elements, element| {
            elements.push(element);
            elements
        })
    }

    /// Returns the first element satisfying `predicate`.
    #[inline]
    fn find<P>(self, mut predicate: P) -> Optional<Self::Inner>
    where
        P: FnMut(&Self::Inner) -> bool,
        Self: Sized,
    {
        self.fold_left(Optional::None, |found, element| {
            if found.is_none() && predicate(&element) {
                Optional::Some(element)
            } else {
                found
            }
        })
    }

    /// Returns `true` if any element satisfies `predicate`.
    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool;

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty structure satisfies every predicate.
    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Inner) -> bool;
}

impl<A> Foldable for Optional<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Self::Some(element) => function(init, element),
            Self::None => init,
        }
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(A, B) -> B,
    {
        match self {
            Self::Some(element) => function(element, init),
            Self::None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_some())
    }

    #[inline]
    fn exists<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.as_ref().is_some_and(|element| predicate(element))
    }

    #[inline]
    fn for_all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&A) -> bool,
    {
        self.as_ref().map_or(true, |element| predicate(element))
    }
}

#[cfg(feature = "map")]
impl<K, V, S> Foldable for crate::map::OptionMap<K, V, S> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, V) -> B,
    {
        self.into_iter().map(|(_, value)| value).fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(V, B) -> B,
    {
        let values: Vec<V> = self.into_iter().map(|(_, value)| value).collect();
        values
            .into_iter()
            .rev()
            .fold(init, |accumulator, value| function(value, accumulator))
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }

    fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        self.values().any(predicate)
    }

    fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        self.values().all(predicate)
    }
}

//! Semigroup type class - an associative binary operation.
//!
//! # Laws
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optionmap::optional::Optional;
//! use optionmap::typeclass::Semigroup;
//!
//! let greeting = Optional::some("Hello, ".to_string());
//! let name = Optional::some("World!".to_string());
//! assert_eq!(greeting.combine(name), Optional::some("Hello, World!".to_string()));
//!
//! // An absent side leaves the other unchanged
//! let absent = Optional::<String>::none();
//! assert_eq!(absent.combine(Optional::some("x".to_string())), Optional::some("x".to_string()));
//! ```

use crate::optional::Optional;

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values by cloning them.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `Optional` forms a semigroup when its inner type is a semigroup.
///
/// - `Some(a).combine(Some(b))` = `Some(a.combine(b))`
/// - `Some(a).combine(None)` = `Some(a)`
/// - `None.combine(Some(b))` = `Some(b)`
/// - `None.combine(None)` = `None`
impl<T: Semigroup> Semigroup for Optional<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            (Self::None, Self::None) => Self::None,
        }
    }
}

/// `OptionMap` forms a semigroup under right-biased union.
///
/// Every entry of `other` is set on `self`, so for a key present on both
/// sides the right-hand value wins, exactly as repeated `set` calls would.
#[cfg(feature = "map")]
impl<K, V, S> Semigroup for crate::map::OptionMap<K, V, S>
where
    K: Eq + std::hash::Hash,
    S: std::hash::BuildHasher,
{
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

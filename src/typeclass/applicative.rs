//! Applicative type class - combining independent values in a context.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value,
//! and `map2`, which combines two values that do not depend on each other.
//! For [`Optional`], a combination is present only when every input is.
//!
//! # Laws
//!
//! ```text
//! pure(x).map2(fb, f) == fb.fmap(|b| f(x, b))      // left identity
//! fa.map2(pure(y), f) == fa.fmap(|a| f(a, y))      // right identity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optionmap::optional::Optional;
//! use optionmap::typeclass::Applicative;
//!
//! let price = Optional::some(250_u32);
//! let quantity = Optional::some(3_u32);
//! assert_eq!(price.map2(quantity, |p, q| p * q), Optional::some(750));
//!
//! let unknown = Optional::<u32>::none();
//! assert_eq!(price.map2(unknown, |p, q| p * q), Optional::None);
//! ```

use super::functor::Functor;
use crate::optional::Optional;

/// A type class for functors that can lift values and combine contexts.
pub trait Applicative: Functor {
    /// Lifts a pure value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two values in the context with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three values in the context with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two values in the context.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies a function in the context to a value in the context.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Optional<A> {
    #[inline]
    fn pure<B>(value: B) -> Optional<B> {
        Optional::Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Optional<B>, function: F) -> Optional<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Self::Some(a), Optional::Some(b)) => Optional::Some(function(a, b)),
            _ => Optional::None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Optional<B>, third: Optional<C>, function: F) -> Optional<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Some(a), Optional::Some(b), Optional::Some(c)) => {
                Optional::Some(function(a, b, c))
            }
            _ => Optional::None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Optional<B>) -> Optional<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Some(function), Optional::Some(b)) => Optional::Some(function(b)),
            _ => Optional::None,
        }
    }
}

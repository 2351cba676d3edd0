//! Monad type class - sequencing computations within a context.
//!
//! For [`Optional`], `flat_map` chains lookups that may each come back
//! absent, stopping at the first `None`.
//!
//! # Laws
//!
//! ```text
//! pure(a).flat_map(f) == f(a)                                   // left identity
//! m.flat_map(pure) == m                                         // right identity
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g)) // associativity
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optionmap::map::OptionMap;
//! use optionmap::optional::Optional;
//! use optionmap::typeclass::Monad;
//!
//! let mut cart = OptionMap::new();
//! cart.set("apple", 2_u32);
//! let mut prices = OptionMap::new();
//! prices.set("apple", 150_u32);
//!
//! let line_total = cart
//!     .get(&"apple")
//!     .flat_map(|quantity| prices.get(&"apple").map(|price| price * quantity));
//! assert_eq!(line_total, Optional::some(300));
//! ```

use super::applicative::Applicative;
use crate::optional::Optional;

/// A type class for applicatives that support dependent sequencing.
pub trait Monad: Applicative {
    /// Applies a function that returns a new context and flattens the result.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Sequences two computations, discarding the first result.
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

impl<A> Monad for Optional<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Optional<B>
    where
        F: FnOnce(A) -> Optional<B>,
    {
        self.and_then(function)
    }
}

//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over `Optional<_>` as a type constructor directly.
//! [`TypeConstructor`] records the applied type (`Inner`) and how to apply
//! the same constructor to another type (`WithType<B>`), which is enough to
//! state `Functor`, `Applicative` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use optionmap::optional::Optional;
//! use optionmap::typeclass::TypeConstructor;
//!
//! fn absent_like<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Optional<String> = absent_like(Optional::some(42));
//! assert_eq!(absent, Optional::None);
//! ```

use crate::optional::Optional;

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type this constructor is currently applied to.
/// - `WithType<B>`: The same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Optional<A> {
    type Inner = A;
    type WithType<B> = Optional<B>;
}

#[cfg(feature = "map")]
impl<K, V, S> TypeConstructor for crate::map::OptionMap<K, V, S> {
    type Inner = V;
    type WithType<B> = crate::map::OptionMap<K, B, S>;
}

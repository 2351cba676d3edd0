//! Type class traits and their instances for [`Optional`](crate::optional::Optional)
//! and [`OptionMap`](crate::map::OptionMap).
//!
//! - [`Functor`]: Mapping over the contained value
//! - [`Applicative`]: Combining independent values
//! - [`Monad`]: Sequencing dependent lookups
//! - [`Foldable`]: Reducing a structure to a summary value
//! - [`Semigroup`]: Associative binary operations
//! - [`Monoid`]: Semigroup with identity element
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types. [`TypeConstructor`] uses a
//! generic associated type to name "the same container holding another
//! type", which is what `fmap` and `flat_map` need to express their
//! signatures.
//!
//! # Examples
//!
//! ## Using Functor and Monad
//!
//! ```rust
//! use optionmap::optional::Optional;
//! use optionmap::typeclass::{Functor, Monad};
//!
//! let quantity = Optional::some(3_u32);
//! assert_eq!(quantity.fmap(|q| q * 2), Optional::some(6));
//!
//! let checked = quantity.flat_map(|q| if q > 0 { Optional::some(q) } else { Optional::none() });
//! assert_eq!(checked, Optional::some(3));
//! ```
//!
//! ## Using Monoid
//!
//! ```rust
//! use optionmap::map::OptionMap;
//! use optionmap::typeclass::{Monoid, Semigroup};
//!
//! let defaults: OptionMap<&str, u32> = OptionMap::from([("limit", 10), ("page", 1)]);
//! let overrides: OptionMap<&str, u32> = OptionMap::from([("limit", 50)]);
//!
//! let settings = OptionMap::combine_all([defaults, overrides]);
//! assert_eq!(settings.get(&"limit").unwrap_or(&0), &50);
//! assert_eq!(settings.get(&"page").unwrap_or(&0), &1);
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;

pub use applicative::Applicative;
pub use foldable::Foldable;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::Monoid;
pub use semigroup::Semigroup;

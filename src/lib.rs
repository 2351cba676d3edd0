//! # optionmap
//!
//! An explicit presence/absence container, [`Optional<T>`](optional::Optional),
//! and a keyed map whose lookups return it instead of a nullable value.
//!
//! ## Overview
//!
//! State that would otherwise be read through nullable lookups (cart entries
//! keyed by product, a product catalog keyed by id) is stored in an
//! [`OptionMap`](map::OptionMap). Every read yields an `Optional`, and callers
//! branch with [`fold`](optional::Optional::fold),
//! [`map_or`](optional::Optional::map_or) or
//! [`unwrap_or`](optional::Optional::unwrap_or) rather than assuming presence.
//!
//! - **Optional**: `Some`/`None` sum type with a combinator API
//! - **`OptionMap`**: hash map whose `get` returns `Optional`
//! - **`SharedOptionMap`**: lock-guarded `OptionMap` for concurrent callers
//! - **Type Classes**: Functor, Applicative, Monad, Foldable, Semigroup, Monoid
//! - **Assertions**: `assert_some!`, `assert_none!`, `assert_some_eq!`, `assert_some_matching!`
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and their instances
//! - `map`: `OptionMap`
//! - `sync`: `SharedOptionMap` (uses `parking_lot`)
//! - `serde`: `Serialize`/`Deserialize` for `Optional` and `OptionMap`
//! - `fxhash` / `ahash`: faster default hashers for `OptionMap`
//! - `full`: Enable all features except the alternative hashers
//!
//! ## Logging
//!
//! Map mutations emit `trace` events and failed unwraps a `debug` event
//! through `tracing`. No subscriber is installed by this crate.
//!
//! ## Example
//!
//! ```rust
//! use optionmap::prelude::*;
//!
//! let mut cart: OptionMap<&str, u32> = OptionMap::new();
//! cart.set("apple", 2).set("pear", 1);
//! cart.delete(&"apple");
//!
//! assert_eq!(cart.get(&"apple"), Optional::None);
//! assert_eq!(cart.get(&"pear").map(|quantity| quantity * 10), Optional::Some(10));
//! assert_eq!(cart.get(&"apple").to_string(), "None");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optionmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optional::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "map")]
    pub use crate::map::*;

    pub use crate::{assert_none, assert_some, assert_some_eq, assert_some_matching};
}

pub mod assertions;
pub mod optional;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "map")]
pub mod map;

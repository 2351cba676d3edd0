//! Optional type - a value that is either present or absent.
//!
//! This module provides [`Optional<T>`], which is either `Some(T)` holding
//! exactly one value or `None` holding nothing. It replaces nullable lookups:
//! code that receives an `Optional` has to decide what absence means before
//! it can reach the value.
//!
//! # Examples
//!
//! ```rust
//! use optionmap::optional::{Optional, none, some};
//!
//! let present = some(21);
//! let absent: Optional<i32> = none();
//!
//! // Case analysis with both branches
//! assert_eq!(present.fold(|n| n * 2, || -1), 42);
//! assert_eq!(absent.fold(|n| n * 2, || -1), -1);
//!
//! // Fallbacks instead of null checks
//! assert_eq!(absent.unwrap_or(0), 0);
//! assert_eq!(present.map_or(0, |n| n + 1), 22);
//!
//! // Canonical rendering
//! assert_eq!(some(123).to_string(), "Some(123)");
//! assert_eq!(some("value").to_string(), "Some('value')");
//! assert_eq!(absent.to_string(), "None");
//! ```

mod display;
mod error;
mod iter;

pub use display::ValueDisplay;
pub use error::UnwrapError;
pub use iter::{IntoIter, Iter, IterMut};

use std::ops::Deref;

/// A value that is either present (`Some`) or absent (`None`).
///
/// An `Optional` never changes variant behind the caller's back: every
/// combinator consumes or borrows it and returns a new value. The only
/// in-place operation is [`take`](Self::take), which requires `&mut`.
///
/// # Type Parameters
///
/// * `T` - The type of the contained value
///
/// # Examples
///
/// ```rust
/// use optionmap::optional::Optional;
///
/// let price: Optional<u32> = Optional::some(1999);
/// let label = price.map_or_else(
///     || "unavailable".to_string(),
///     |cents| format!("${}.{:02}", cents / 100, cents % 100),
/// );
/// assert_eq!(label, "$19.99");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Optional<T> {
    /// No value. Orders before every `Some`.
    None,
    /// A present value.
    Some(T),
}

/// Wraps a value in [`Optional::Some`].
///
/// # Examples
///
/// ```rust
/// use optionmap::optional::{Optional, some};
///
/// assert_eq!(some(1), Optional::Some(1));
/// ```
#[inline]
pub const fn some<T>(value: T) -> Optional<T> {
    Optional::Some(value)
}

/// Returns [`Optional::None`].
///
/// # Examples
///
/// ```rust
/// use optionmap::optional::{Optional, none};
///
/// assert_eq!(none::<i32>(), Optional::None);
/// ```
#[inline]
pub const fn none<T>() -> Optional<T> {
    Optional::None
}

/// Cold path shared by [`Optional::unwrap`] and [`Optional::expect`].
#[cold]
#[track_caller]
fn unwrap_failed(error: &UnwrapError) -> ! {
    tracing::debug!(reason = %error, "unwrapped an empty optional");
    panic!("{error}")
}

impl<T> Optional<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present value.
    #[inline]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::None
    }

    /// Converts a standard library option into an `Optional`.
    ///
    /// `Some(value)` becomes `Optional::Some(value)` and `None` becomes
    /// `Optional::None`. A key that is absent from a map and a lookup that
    /// produced no value are therefore indistinguishable afterwards.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// assert_eq!(Optional::from_nullable(Some(3)), Optional::Some(3));
    /// assert_eq!(Optional::<i32>::from_nullable(None), Optional::None);
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    /// Converts this `Optional` back into a standard library option.
    #[inline]
    pub fn into_nullable(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Querying
    // =========================================================================

    /// Returns `true` if this is `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// assert!(Optional::some("value").is_some());
    /// assert!(!Optional::<&str>::none().is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if this is `Some` and the value satisfies `predicate`.
    ///
    /// The predicate is not called on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// assert!(Optional::some(0).is_some_and(|x| x < 1));
    /// assert!(!Optional::some(2).is_some_and(|x| x < 1));
    /// assert!(!Optional::<i32>::none().is_some_and(|x| x < 1));
    /// ```
    #[inline]
    pub fn is_some_and<P>(self, predicate: P) -> bool
    where
        P: FnOnce(T) -> bool,
    {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with exactly `message` if this is `None`. Use
    /// [`try_expect`](Self::try_expect) to get the failure as an
    /// [`UnwrapError`] instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// let value = Optional::some(123).expect("Value should have been Some<T>");
    /// assert_eq!(value, 123);
    /// ```
    ///
    /// ```rust,should_panic
    /// use optionmap::optional::Optional;
    ///
    /// Optional::<i32>::none().expect("Value should have been Some<T>");
    /// ```
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => unwrap_failed(&UnwrapError::new(message.to_owned())),
        }
    }

    /// Returns the contained value.
    ///
    /// Prefer [`expect`](Self::expect), [`unwrap_or`](Self::unwrap_or) or
    /// [`unwrap_or_else`](Self::unwrap_or_else): a `None` here is treated as
    /// a programming error.
    ///
    /// # Panics
    ///
    /// Panics with [`UnwrapError::DEFAULT_MESSAGE`] if this is `None`.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => unwrap_failed(&UnwrapError::default()),
        }
    }

    /// Returns the contained value, or an [`UnwrapError`] carrying `message`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// let error = Optional::<i32>::none().try_expect("product must exist").unwrap_err();
    /// assert_eq!(error.message(), "product must exist");
    /// ```
    #[inline]
    pub fn try_expect(self, message: &str) -> Result<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::new(message.to_owned())),
        }
    }

    /// Returns the contained value, or an [`UnwrapError`] with the default
    /// message.
    ///
    /// # Errors
    ///
    /// Returns `Err` if this is `None`.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, UnwrapError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(UnwrapError::default()),
        }
    }

    /// Returns the contained value or `fallback`.
    ///
    /// `fallback` is evaluated eagerly; pass a closure to
    /// [`unwrap_or_else`](Self::unwrap_or_else) when it is expensive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// assert_eq!(Optional::some(123).unwrap_or(321), 123);
    /// assert_eq!(Optional::none().unwrap_or(321), 321);
    /// ```
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the contained value or computes one from `function`.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => function(),
        }
    }

    /// Returns the contained value or `T::default()`.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Some(value) => value,
            Self::None => T::default(),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies `function` to the contained value.
    ///
    /// `function` is not called on `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// assert_eq!(Optional::some(1).map(|x| x + 1), Optional::Some(2));
    /// assert_eq!(Optional::<i32>::none().map(|x| x + 1), Optional::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Optional::Some(function(value)),
            Self::None => Optional::None,
        }
    }

    /// Calls `function` with a reference to the contained value, then returns
    /// `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// let mut seen = Vec::new();
    /// let value = Optional::some(123).inspect(|x| seen.push(*x));
    /// assert_eq!(value, Optional::Some(123));
    /// assert_eq!(seen, vec![123]);
    /// ```
    #[inline]
    #[must_use]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    /// Applies `function` to the contained value, or returns `fallback`.
    ///
    /// `fallback` is evaluated eagerly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// assert_eq!(Optional::some("value").map_or(123, |s| s.len()), 5);
    /// assert_eq!(Optional::<&str>::none().map_or(123, |s| s.len()), 123);
    /// ```
    #[inline]
    pub fn map_or<U, F>(self, fallback: U, function: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => fallback,
        }
    }

    /// Applies `function` to the contained value, or computes a fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// let k = 21;
    /// assert_eq!(Optional::some("value").map_or_else(|| 2 * k, |s| s.len()), 5);
    /// assert_eq!(Optional::<&str>::none().map_or_else(|| 2 * k, |s| s.len()), 42);
    /// ```
    #[inline]
    pub fn map_or_else<U, D, F>(self, get_fallback: D, function: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => get_fallback(),
        }
    }

    /// Keeps the value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// let is_even = |x: &i32| x % 2 == 0;
    /// assert_eq!(Optional::some(2).filter(is_even), Optional::Some(2));
    /// assert_eq!(Optional::some(1).filter(is_even), Optional::None);
    /// assert_eq!(Optional::none().filter(is_even), Optional::None);
    /// ```
    #[inline]
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if let Self::Some(value) = self
            && predicate(&value)
        {
            return Self::Some(value);
        }
        Self::None
    }

    // =========================================================================
    // Case Analysis
    // =========================================================================

    /// Eliminates the `Optional` by applying exactly one of two functions.
    ///
    /// This is pattern matching as a function: `on_some` receives the value
    /// of a `Some`, `on_none` is called for a `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// let on_some = |x: i32| x * 2;
    /// let on_none = || -1;
    /// assert_eq!(Optional::some(21).fold(on_some, on_none), 42);
    /// assert_eq!(Optional::none().fold(on_some, on_none), -1);
    /// ```
    #[inline]
    pub fn fold<U, S, N>(self, on_some: S, on_none: N) -> U
    where
        S: FnOnce(T) -> U,
        N: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    // =========================================================================
    // Reference Access
    // =========================================================================

    /// Converts `&Optional<T>` into `Optional<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Optional<&T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts `&mut Optional<T>` into `Optional<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match self {
            Self::Some(value) => Optional::Some(value),
            Self::None => Optional::None,
        }
    }

    /// Converts `&Optional<T>` into `Optional<&T::Target>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// let title = Optional::some(String::from("Lamp"));
    /// assert_eq!(title.as_deref(), Optional::Some("Lamp"));
    /// ```
    #[inline]
    pub fn as_deref(&self) -> Optional<&T::Target>
    where
        T: Deref,
    {
        self.as_ref().map(|value| value.deref())
    }

    /// Takes the value out, leaving `None` in its place.
    #[inline]
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Self::None)
    }

    /// Returns an iterator over the contained value (zero or one items).
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref())
    }

    /// Returns a mutable iterator over the contained value.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut())
    }

    // =========================================================================
    // Combining
    // =========================================================================

    /// Chains a computation that may itself be absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Optional::some(x / 2) } else { Optional::none() };
    /// assert_eq!(Optional::some(8).and_then(halve), Optional::Some(4));
    /// assert_eq!(Optional::some(3).and_then(halve), Optional::None);
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Optional<U>
    where
        F: FnOnce(T) -> Optional<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Optional::None,
        }
    }

    /// Returns `other` if this is `Some`, otherwise `None`.
    #[inline]
    pub fn and<U>(self, other: Optional<U>) -> Optional<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Optional::None,
        }
    }

    /// Returns `self` if it is `Some`, otherwise `other`.
    #[inline]
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    /// Returns `self` if it is `Some`, otherwise the result of `function`.
    #[inline]
    #[must_use]
    pub fn or_else<F>(self, function: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => function(),
        }
    }

    /// Returns whichever side is `Some` when exactly one of them is.
    #[inline]
    #[must_use]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) | (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Pairs two present values.
    #[inline]
    pub fn zip<U>(self, other: Optional<U>) -> Optional<(T, U)> {
        match (self, other) {
            (Self::Some(left), Optional::Some(right)) => Optional::Some((left, right)),
            _ => Optional::None,
        }
    }

    /// Converts into a `Result`, using `error` for `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err(error)` if this is `None`.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error),
        }
    }

    /// Converts into a `Result`, computing the error for `None`.
    ///
    /// # Errors
    ///
    /// Returns `Err(function())` if this is `None`.
    #[inline]
    pub fn ok_or_else<E, F>(self, function: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(function()),
        }
    }
}

impl<T> Optional<Optional<T>> {
    /// Removes one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optionmap::optional::Optional;
    ///
    /// assert_eq!(Optional::some(Optional::some(1)).flatten(), Optional::Some(1));
    /// assert_eq!(Optional::some(Optional::<i32>::none()).flatten(), Optional::None);
    /// ```
    #[inline]
    pub fn flatten(self) -> Optional<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Optional::None,
        }
    }
}

impl<T> Default for Optional<T> {
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    #[inline]
    fn from(value: Optional<T>) -> Self {
        value.into_nullable()
    }
}

impl<A, V> FromIterator<Optional<A>> for Optional<V>
where
    V: FromIterator<A>,
{
    /// Collects every value, or returns `None` at the first absent element.
    fn from_iter<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Optional<A>>,
    {
        iterator
            .into_iter()
            .map(Optional::into_nullable)
            .collect::<Option<V>>()
            .into()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Some(value) => serializer.serialize_some(value),
            Self::None => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Optional<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Self::from_nullable)
    }
}

//! Test assertions for [`Optional`](crate::optional::Optional) values.
//!
//! Each macro panics with a message that names the actual value, in the same
//! shape as `assert_eq!`:
//!
//! - [`assert_some!`]: `expected None to be Some(any)`
//! - [`assert_none!`]: `expected Some(1) to be None`
//! - [`assert_some_eq!`]: `expected Some(1) to be Some(2)`
//! - [`assert_some_matching!`]: `expected Some(1) to match the predicate`
//!
//! Values are rendered with the canonical `Display` form of `Optional`, so
//! text shows up quoted (`Some('apple')`). The contained type must implement
//! [`ValueDisplay`](crate::optional::ValueDisplay), and so must the expected
//! value of [`assert_some_eq!`].

/// Asserts that an `Optional` is `Some` and evaluates to the contained value.
///
/// An optional trailing format string is appended to the panic message.
///
/// # Examples
///
/// ```
/// use optionmap::assert_some;
/// use optionmap::optional::Optional;
///
/// let quantity = assert_some!(Optional::some(3));
/// assert_eq!(quantity, 3);
/// ```
///
/// ```should_panic
/// use optionmap::assert_some;
/// use optionmap::optional::Optional;
///
/// assert_some!(Optional::<i32>::none(), "cart entry for {}", "apple");
/// ```
#[macro_export]
macro_rules! assert_some {
    ($optional:expr $(,)?) => {
        match $optional {
            $crate::optional::Optional::Some(value) => value,
            actual => ::core::panic!("expected {} to be Some(any)", actual),
        }
    };

    ($optional:expr, $($message:tt)+) => {
        match $optional {
            $crate::optional::Optional::Some(value) => value,
            actual => ::core::panic!(
                "expected {} to be Some(any): {}",
                actual,
                ::core::format_args!($($message)+)
            ),
        }
    };
}

/// Asserts that an `Optional` is `None`.
///
/// # Examples
///
/// ```
/// use optionmap::assert_none;
/// use optionmap::map::OptionMap;
///
/// let cart: OptionMap<&str, u32> = OptionMap::new();
/// assert_none!(cart.get(&"apple"));
/// ```
#[macro_export]
macro_rules! assert_none {
    ($optional:expr $(,)?) => {
        match $optional {
            $crate::optional::Optional::None => {}
            actual => ::core::panic!("expected {} to be None", actual),
        }
    };

    ($optional:expr, $($message:tt)+) => {
        match $optional {
            $crate::optional::Optional::None => {}
            actual => ::core::panic!(
                "expected {} to be None: {}",
                actual,
                ::core::format_args!($($message)+)
            ),
        }
    };
}

/// Asserts that an `Optional` is `Some` and its value equals `expected`.
///
/// Both sides are borrowed, so neither is moved.
///
/// # Examples
///
/// ```
/// use optionmap::assert_some_eq;
/// use optionmap::optional::Optional;
///
/// let name = Optional::some("apple".to_string());
/// assert_some_eq!(name, "apple");
/// assert!(name.is_some());
/// ```
#[macro_export]
macro_rules! assert_some_eq {
    ($optional:expr, $expected:expr $(,)?) => {
        match (&$optional, &$expected) {
            (actual, expected) => {
                if !actual.as_ref().is_some_and(|value| *value == *expected) {
                    ::core::panic!(
                        "expected {} to be {}",
                        actual,
                        $crate::optional::Optional::Some(expected)
                    );
                }
            }
        }
    };
}

/// Asserts that an `Optional` is `Some` and its value satisfies `predicate`.
///
/// The predicate receives a reference to the contained value.
///
/// # Examples
///
/// ```
/// use optionmap::assert_some_matching;
/// use optionmap::optional::Optional;
///
/// assert_some_matching!(Optional::some(12), |quantity: &i32| *quantity > 10);
/// ```
#[macro_export]
macro_rules! assert_some_matching {
    ($optional:expr, $predicate:expr $(,)?) => {
        match &$optional {
            actual => {
                if !actual.as_ref().is_some_and($predicate) {
                    ::core::panic!("expected {} to match the predicate", actual);
                }
            }
        }
    };
}

//! Canonical textual rendering of [`Optional`].
//!
//! `Some(123)` renders as `Some(123)`, textual values are quoted with single
//! quotes (`Some('value')`), and an absent value renders as `None`. Which
//! types count as textual is decided by [`ValueDisplay`].

use super::Optional;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Renders a value inside `Some(...)`.
///
/// Numbers and `bool` render through their `Display` implementation; string
/// and character types render wrapped in single quotes. Implement this for
/// your own types to make `Optional<YourType>` displayable.
///
/// # Examples
///
/// ```rust
/// use std::fmt;
/// use optionmap::optional::{Optional, ValueDisplay};
///
/// struct ProductId(u32);
///
/// impl ValueDisplay for ProductId {
///     fn fmt_value(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(formatter, "#{}", self.0)
///     }
/// }
///
/// assert_eq!(Optional::some(ProductId(7)).to_string(), "Some(#7)");
/// ```
pub trait ValueDisplay {
    /// Writes the rendering of `self` to `formatter`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the formatter fails.
    fn fmt_value(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! plain_value_display {
    ($($value_type:ty),* $(,)?) => {
        $(
            impl ValueDisplay for $value_type {
                #[inline]
                fn fmt_value(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, formatter)
                }
            }
        )*
    };
}

macro_rules! quoted_value_display {
    ($($value_type:ty),* $(,)?) => {
        $(
            impl ValueDisplay for $value_type {
                #[inline]
                fn fmt_value(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(formatter, "'{self}'")
                }
            }
        )*
    };
}

plain_value_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

quoted_value_display!(str, String, char, Box<str>, Rc<str>, Arc<str>);

impl ValueDisplay for Cow<'_, str> {
    #[inline]
    fn fmt_value(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "'{self}'")
    }
}

impl<T: ValueDisplay + ?Sized> ValueDisplay for &T {
    #[inline]
    fn fmt_value(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_value(formatter)
    }
}

impl<T: ValueDisplay + ?Sized> ValueDisplay for &mut T {
    #[inline]
    fn fmt_value(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_value(formatter)
    }
}

impl<T: ValueDisplay> ValueDisplay for Optional<T> {
    #[inline]
    fn fmt_value(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, formatter)
    }
}

/// The rendering of an `Optional` before width and alignment are applied.
struct Unpadded<'a, T>(&'a Optional<T>);

impl<T: ValueDisplay> fmt::Display for Unpadded<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Optional::Some(value) => {
                formatter.write_str("Some(")?;
                value.fmt_value(formatter)?;
                formatter.write_str(")")
            }
            Optional::None => formatter.write_str("None"),
        }
    }
}

/// Width, fill, alignment and precision apply to the whole rendering, as
/// they do for a `str`.
///
/// ```rust
/// use optionmap::optional::Optional;
///
/// assert_eq!(format!("[{:>10}]", Optional::some(1)), "[   Some(1)]");
/// assert_eq!(format!("[{:<6}]", Optional::<i32>::none()), "[None  ]");
/// ```
impl<T: ValueDisplay> fmt::Display for Optional<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if formatter.width().is_none() && formatter.precision().is_none() {
            return fmt::Display::fmt(&Unpadded(self), formatter);
        }
        formatter.pad(&Unpadded(self).to_string())
    }
}

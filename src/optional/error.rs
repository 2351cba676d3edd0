//! Error raised when a value is extracted from an empty [`Optional`](super::Optional).

use std::borrow::Cow;

/// Represents an attempt to extract the value of a `None`.
///
/// [`Optional::unwrap`](super::Optional::unwrap) and
/// [`Optional::expect`](super::Optional::expect) panic with this error's
/// message; [`Optional::try_unwrap`](super::Optional::try_unwrap) and
/// [`Optional::try_expect`](super::Optional::try_expect) return it.
///
/// # Examples
///
/// ```rust
/// use optionmap::optional::UnwrapError;
///
/// let error = UnwrapError::new("Value should have been Some<T>");
/// assert_eq!(format!("{error}"), "Value should have been Some<T>");
///
/// let default = UnwrapError::default();
/// assert_eq!(default.message(), "Option should not be None");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnwrapError {
    message: Cow<'static, str>,
}

impl UnwrapError {
    /// The message used by `unwrap` and `try_unwrap`.
    pub const DEFAULT_MESSAGE: &'static str = "Option should not be None";

    /// Creates an error carrying `message`.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message this error carries.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for UnwrapError {
    fn default() -> Self {
        Self {
            message: Cow::Borrowed(Self::DEFAULT_MESSAGE),
        }
    }
}

impl std::fmt::Display for UnwrapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for UnwrapError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_is_message_only() {
        let error = UnwrapError::new("product must be in the catalog");
        assert_eq!(format!("{error}"), "product must be in the catalog");
    }

    #[rstest]
    fn test_default_message() {
        assert_eq!(UnwrapError::default().message(), UnwrapError::DEFAULT_MESSAGE);
        assert_eq!(UnwrapError::default(), UnwrapError::new(UnwrapError::DEFAULT_MESSAGE));
    }

    #[rstest]
    fn test_owned_message() {
        let error = UnwrapError::new(format!("missing {}", 42));
        assert_eq!(error.message(), "missing 42");
    }

    #[rstest]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&UnwrapError::default());
    }
}

// Copyright (c) 2024-present, verdict contributors
// This source code is licensed under the MIT License
// (found in the LICENSE-MIT file in the repository)

use crate::{
    error::{Error, InvalidOperation},
    Either,
};

/// Outcome of an operation, carrying either a value or an error message
/// with an optional classification tag
///
/// A result can only be created through [`Result::ok`] and [`Result::fail`]
/// (or [`Result::fail_with_type`]) and never changes afterwards.
///
/// ```
/// use verdict::Result;
///
/// let found = Result::ok(42);
/// assert!(found.is_success());
/// assert_eq!(&42, found.get_value());
/// assert_eq!("", found.error());
///
/// let missing = Result::<u32>::fail_with_type("user 7 does not exist", "NotFound");
/// assert!(missing.is_failure());
/// assert_eq!(Some("NotFound"), missing.error_type());
/// ```
///
/// Fields cannot be reassigned, even through a mutable binding:
///
/// ```compile_fail,E0616
/// let mut result = verdict::Result::ok(1);
/// result.is_success = false;
/// ```
///
/// ```compile_fail,E0616
/// let mut result = verdict::Result::<u8>::fail("boom");
/// result.value = Some(1);
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[must_use]
pub struct Result<T> {
    is_success: bool,
    error: String,

    /// Present if and only if the result is successful
    value: Option<T>,

    kind: Option<String>,
}

impl<T> Result<T> {
    pub(crate) fn try_new(
        is_success: bool,
        error: String,
        value: Option<T>,
        kind: Option<String>,
    ) -> std::result::Result<Self, Error> {
        if is_success && !error.is_empty() {
            return Err(InvalidOperation::SuccessWithError.into());
        }

        if !is_success && error.is_empty() {
            return Err(InvalidOperation::FailureWithoutError.into());
        }

        if is_success != value.is_some() {
            return Err(InvalidOperation::ValueMismatch.into());
        }

        Ok(Self {
            is_success,
            error,
            value,
            kind,
        })
    }

    fn new(is_success: bool, error: String, value: Option<T>, kind: Option<String>) -> Self {
        match Self::try_new(is_success, error, value, kind) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Refusing to construct result: {e}");
                panic!("{e}");
            }
        }
    }

    /// Creates a successful result holding `value`.
    pub fn ok(value: T) -> Self {
        Self::new(true, String::new(), Some(value), None)
    }

    /// Creates a failed result with the given error message.
    ///
    /// # Panics
    ///
    /// Panics if `error` is empty, because a failure needs a message.
    pub fn fail<E: Into<String>>(error: E) -> Self {
        let error = error.into();
        log::trace!("Failed result: {error:?}");
        Self::new(false, error, None, None)
    }

    /// Creates a failed result with the given error message and
    /// classification tag (e.g. `"NotFound"`).
    ///
    /// # Panics
    ///
    /// Panics if `error` is empty, because a failure needs a message.
    pub fn fail_with_type<E: Into<String>, K: Into<String>>(error: E, error_type: K) -> Self {
        let error = error.into();
        let kind = error_type.into();
        log::trace!("Failed result ({kind}): {error:?}");
        Self::new(false, error, None, Some(kind))
    }

    /// Returns `true` if the result is successful.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    /// Returns `true` if the result failed.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !self.is_success
    }

    /// Error message, empty for successful results.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Classification tag of a failure.
    ///
    /// Always `None` for successful results.
    #[must_use]
    pub fn error_type(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Returns the value without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValueOfFailure`] if the result failed.
    pub fn try_value(&self) -> std::result::Result<&T, Error> {
        if self.is_failure() {
            return Err(Error::ValueOfFailure);
        }

        self.value.as_ref().ok_or(Error::ValueOfFailure)
    }

    /// Returns the value of a successful result.
    ///
    /// Check [`Result::is_success`] first.
    ///
    /// # Panics
    ///
    /// Panics if the result failed.
    #[must_use]
    pub fn get_value(&self) -> &T {
        match self.try_value() {
            Ok(value) => value,
            Err(_) => value_of_failure(&self.error),
        }
    }

    /// Consumes the result, returning the value of a successful result.
    ///
    /// # Panics
    ///
    /// Panics if the result failed.
    #[must_use]
    pub fn into_value(self) -> T {
        match self.value {
            Some(value) if self.is_success => value,
            _ => value_of_failure(&self.error),
        }
    }
}

fn value_of_failure(error: &str) -> ! {
    log::error!("Value requested from failed result {error:?}");
    panic!("{}", Error::ValueOfFailure);
}

impl Result<()> {
    /// Creates a successful result that carries no value.
    pub fn empty() -> Self {
        Self::ok(())
    }
}

impl<T> std::fmt::Display for Result<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_success {
            return write!(f, "ok");
        }

        match &self.kind {
            Some(kind) => write!(f, "failed ({kind}): {}", self.error),
            None => write!(f, "failed: {}", self.error),
        }
    }
}

impl<T> From<Result<T>> for std::result::Result<T, String> {
    fn from(value: Result<T>) -> Self {
        value.value.ok_or(value.error)
    }
}

impl<T> From<Result<T>> for Either<T, String> {
    fn from(value: Result<T>) -> Self {
        let result: std::result::Result<T, String> = value.into();
        result.into()
    }
}

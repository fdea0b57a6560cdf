// Copyright (c) 2024-present, verdict contributors
// This source code is licensed under the MIT License
// (found in the LICENSE-MIT file in the repository)

/// Contradictory or incomplete arguments given when constructing a [`crate::Result`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvalidOperation {
    /// A successful result was given a non-empty error message
    SuccessWithError,

    /// A failing result was given no error message
    FailureWithoutError,

    /// A value was given to a failing result, or withheld from a successful one
    ValueMismatch,
}

impl std::fmt::Display for InvalidOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            Self::SuccessWithError => "A result cannot be successful and contain an error",
            Self::FailureWithoutError => "A failing result needs to contain an error message",
            Self::ValueMismatch => "A result holds a value if and only if it is successful",
        };
        write!(f, "InvalidOperation: {msg}")
    }
}

/// Represents misuse of the outcome types
///
/// These signal programming errors, not domain failures.
/// Domain failures are modelled as data, see [`crate::Result::fail`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Construction arguments violate the result invariants
    InvalidOperation(InvalidOperation),

    /// The value of a failed result was requested
    ValueOfFailure,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOperation(op) => write!(f, "{op}"),
            Self::ValueOfFailure => write!(f, "Cannot retrieve the value from a failed result"),
        }
    }
}

impl std::error::Error for Error {}

impl From<InvalidOperation> for Error {
    fn from(value: InvalidOperation) -> Self {
        Self::InvalidOperation(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn invalid_operation_display() {
        assert_eq!(
            "InvalidOperation: A result cannot be successful and contain an error",
            Error::from(InvalidOperation::SuccessWithError).to_string(),
        );
        assert_eq!(
            "InvalidOperation: A failing result needs to contain an error message",
            Error::from(InvalidOperation::FailureWithoutError).to_string(),
        );
        assert_eq!(
            "InvalidOperation: A result holds a value if and only if it is successful",
            Error::from(InvalidOperation::ValueMismatch).to_string(),
        );
    }

    #[test]
    fn value_of_failure_display() {
        assert_eq!(
            "Cannot retrieve the value from a failed result",
            Error::ValueOfFailure.to_string(),
        );
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::ValueOfFailure);
        assert!(err.source().is_none());
    }
}

// Copyright (c) 2024-present, verdict contributors
// This source code is licensed under the MIT License
// (found in the LICENSE-MIT file in the repository)

/// Outcome of an operation that is either a success of type `S`
/// or a failure of type `F`
///
/// Use `match` or the narrowing accessors to reach the payload.
///
/// ```
/// use verdict::{failure, success, Either};
///
/// let parsed: Either<u16, String> = success(8080);
/// assert!(parsed.is_success());
/// assert_eq!(Some(&8080), parsed.success_data());
///
/// let parsed: Either<u16, String> = failure("not a port".into());
///
/// match parsed {
///     Either::Success(port) => unreachable!("{port}"),
///     Either::Failure(reason) => assert_eq!("not a port", reason),
/// }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[must_use]
pub enum Either<S, F> {
    /// Successful outcome
    Success(S),

    /// Failed outcome
    Failure(F),
}

use Either::{Failure, Success};

/// Wraps `data` as a successful outcome
pub fn success<S, F>(data: S) -> Either<S, F> {
    Success(data)
}

/// Wraps `data` as a failed outcome
pub fn failure<S, F>(data: F) -> Either<S, F> {
    Failure(data)
}

impl<S, F> Either<S, F> {
    /// Returns `true` if this is the [`Either::Success`] variant.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Success(_))
    }

    /// Returns `true` if this is the [`Either::Failure`] variant.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Failure(_))
    }

    /// Returns the success payload, if any.
    #[must_use]
    pub fn success_data(&self) -> Option<&S> {
        match self {
            Success(data) => Some(data),
            Failure(_) => None,
        }
    }

    /// Returns the failure payload, if any.
    #[must_use]
    pub fn failure_data(&self) -> Option<&F> {
        match self {
            Success(_) => None,
            Failure(data) => Some(data),
        }
    }

    /// Consumes the outcome, returning the success payload, if any.
    #[must_use]
    pub fn into_success(self) -> Option<S> {
        match self {
            Success(data) => Some(data),
            Failure(_) => None,
        }
    }

    /// Consumes the outcome, returning the failure payload, if any.
    #[must_use]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Success(_) => None,
            Failure(data) => Some(data),
        }
    }

    /// Borrows both payload types, keeping the variant.
    pub fn as_ref(&self) -> Either<&S, &F> {
        match self {
            Success(data) => Success(data),
            Failure(data) => Failure(data),
        }
    }
}

impl<S, F> From<std::result::Result<S, F>> for Either<S, F> {
    fn from(value: std::result::Result<S, F>) -> Self {
        match value {
            Ok(data) => Success(data),
            Err(data) => Failure(data),
        }
    }
}

impl<S, F> From<Either<S, F>> for std::result::Result<S, F> {
    fn from(value: Either<S, F>) -> Self {
        match value {
            Success(data) => Ok(data),
            Failure(data) => Err(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use test_log::test;

    #[test]
    fn either_success_discriminant() {
        let mut rng = rand::rng();

        for _ in 0..1_000 {
            let v: i64 = rng.random();
            let outcome = success::<_, ()>(v);
            assert!(outcome.is_success());
            assert!(!outcome.is_failure());
            assert_eq!(Some(&v), outcome.success_data());
            assert_eq!(None, outcome.failure_data());
        }
    }

    #[test]
    fn either_failure_discriminant() {
        let mut rng = rand::rng();

        for _ in 0..1_000 {
            let v: u32 = rng.random();
            let outcome = failure::<(), _>(v);
            assert!(!outcome.is_success());
            assert!(outcome.is_failure());
            assert_eq!(Some(&v), outcome.failure_data());
            assert_eq!(None, outcome.success_data());
        }
    }

    #[test]
    fn either_payload_types_differ() {
        let outcome: Either<Vec<u8>, &str> = success(vec![1, 2, 3]);

        if let Success(bytes) = &outcome {
            assert_eq!(3, bytes.len());
        } else {
            panic!("should be success");
        }

        assert_eq!(Some(vec![1, 2, 3]), outcome.into_success());
    }

    #[test]
    fn either_into_failure() {
        let outcome: Either<u8, String> = failure("disk full".to_owned());
        assert_eq!(None, outcome.clone().into_success());
        assert_eq!(Some("disk full".to_owned()), outcome.into_failure());
    }

    #[test]
    fn either_as_ref_keeps_variant() {
        let outcome: Either<String, u8> = failure(4);
        assert_eq!(Failure(&4), outcome.as_ref());
        assert!(outcome.is_failure());
    }

    #[test]
    fn either_std_result_interop() {
        let ok: std::result::Result<u8, &str> = Ok(1);
        assert_eq!(Success(1), Either::from(ok));

        let err: std::result::Result<u8, &str> = Err("nope");
        assert_eq!(Failure("nope"), Either::from(err));

        let back: std::result::Result<u8, &str> = failure("nope").into();
        assert_eq!(Err("nope"), back);
    }
}

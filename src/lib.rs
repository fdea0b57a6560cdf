// Copyright (c) 2024-present, verdict contributors
// This source code is licensed under the MIT License
// (found in the LICENSE-MIT file in the repository)

//! Verdict models the outcome of an operation as a value instead of unwinding. It provides:
//!
//! - [`Either`], a two-variant success/failure union with a typed payload per variant
//! - [`Result`], a success/failure object carrying a value, or an error message with an optional type tag
//!
//! Both types are immutable once constructed and are `Send + Sync` whenever their payloads are.
//!
//! Domain failures are ordinary values. Misusing the API, like failing without a message
//! or reading the value of a failed [`Result`], is a programming error and panics.
//!
//! ```
//! use verdict::{failure, success, Either, Result};
//!
//! fn parse_port(s: &str) -> Either<u16, String> {
//!     match s.parse() {
//!         Ok(port) => success(port),
//!         Err(e) => failure(e.to_string()),
//!     }
//! }
//!
//! assert!(parse_port("8080").is_success());
//! assert!(parse_port("http").is_failure());
//!
//! fn lookup(id: u32) -> Result<&'static str> {
//!     if id == 1 {
//!         Result::ok("alice")
//!     } else {
//!         Result::fail_with_type(format!("user {id} does not exist"), "NotFound")
//!     }
//! }
//!
//! let user = lookup(2);
//!
//! if user.is_failure() {
//!     assert_eq!(Some("NotFound"), user.error_type());
//! }
//!
//! // Or, without risking a panic
//! assert!(user.try_value().is_err());
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod either;
mod error;
mod result;

pub use {
    either::{failure, success, Either},
    error::{Error, InvalidOperation},
    result::Result,
};

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

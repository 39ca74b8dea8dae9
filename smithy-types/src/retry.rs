/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Classification of service faults for whoever owns the retry policy.
//!
//! Model crates only classify; deciding whether and when to retry belongs to the transport.

/// Retry classes a model crate can derive from fault metadata alone.
///
/// Throttling and transient classes depend on transport state and are assigned by the transport.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The service failed on its side of the request (a Query protocol `Receiver` fault).
    ServerError,
}

/// Implemented by errors that can say how a retry policy should treat them.
pub trait ProvideErrorKind {
    /// Returns the retry class of this error, or `None` when it should not be retried.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// Returns the service error code, if one exists.
    fn code(&self) -> Option<&str>;
}

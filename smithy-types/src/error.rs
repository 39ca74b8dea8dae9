/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Metadata carried by every service fault.

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::collections::HashMap;
use std::fmt;

/// Which side of the call the service blamed for a fault.
///
/// AWS Query protocol error envelopes report this as `<Type>Sender</Type>` or
/// `<Type>Receiver</Type>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaultSource {
    /// The request was at fault.
    Sender,
    /// The service was at fault.
    Receiver,
}

impl FaultSource {
    /// Parses the envelope value, ignoring ASCII case.
    pub fn from_envelope(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("sender") {
            Some(FaultSource::Sender)
        } else if value.eq_ignore_ascii_case("receiver") {
            Some(FaultSource::Receiver)
        } else {
            None
        }
    }
}

/// Trait to retrieve error metadata from a fault
pub trait ProvideErrorMetadata {
    /// Returns the fault's metadata.
    fn meta(&self) -> &ErrorMetadata;

    /// Returns the error code if it's available.
    fn code(&self) -> Option<&str> {
        self.meta().code()
    }

    /// Returns the error message, if there is one.
    fn message(&self) -> Option<&str> {
        self.meta().message()
    }

    /// Returns the request ID the service assigned to the failed call.
    fn request_id(&self) -> Option<&str> {
        self.meta().request_id()
    }
}

/// Code, message and transport details of a service fault.
///
/// The transport fills this in from the error response. Model crates attach it to their
/// typed faults so the raw details stay reachable.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct ErrorMetadata {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
    source: Option<FaultSource>,
    status: Option<u16>,
    extras: Option<HashMap<&'static str, String>>,
}

/// Builder for [`ErrorMetadata`].
#[derive(Debug, Default)]
pub struct Builder {
    inner: ErrorMetadata,
}

impl Builder {
    /// Sets the error message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.inner.message = Some(message.into());
        self
    }

    /// Sets the error code.
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.inner.code = Some(code.into());
        self
    }

    /// Sets the request ID.
    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.inner.request_id = Some(request_id.into());
        self
    }

    /// Sets which side the service blamed.
    pub fn fault_source(mut self, source: FaultSource) -> Self {
        self.inner.source = Some(source);
        self
    }

    /// Sets the HTTP status code of the error response.
    pub fn status(mut self, status: u16) -> Self {
        self.inner.status = Some(status);
        self
    }

    /// Set a custom field on the error metadata
    ///
    /// Typically, these will be accessed with an extension trait:
    /// ```rust
    /// use smithy_types::ErrorMetadata;
    /// const HOST_ID: &str = "host_id";
    /// trait HostIdExt {
    ///     fn host_id(&self) -> Option<&str>;
    /// }
    ///
    /// impl HostIdExt for ErrorMetadata {
    ///     fn host_id(&self) -> Option<&str> {
    ///         self.extra(HOST_ID)
    ///     }
    /// }
    ///
    /// let meta = ErrorMetadata::builder().custom(HOST_ID, "x-1234").build();
    /// assert_eq!(meta.host_id(), Some("x-1234"));
    /// ```
    pub fn custom(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.inner
            .extras
            .get_or_insert_with(HashMap::new)
            .insert(key, value.into());
        self
    }

    /// Creates the metadata.
    pub fn build(self) -> ErrorMetadata {
        self.inner
    }
}

impl ErrorMetadata {
    /// Returns the error code.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the error message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the request ID.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns which side the service blamed, if it said.
    pub fn fault_source(&self) -> Option<FaultSource> {
        self.source
    }

    /// Returns the HTTP status code of the error response.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns additional information about the error if it's present.
    pub fn extra(&self, key: &'static str) -> Option<&str> {
        self.extras
            .as_ref()
            .and_then(|extras| extras.get(key).map(|k| k.as_str()))
    }

    /// Creates an `ErrorMetadata` builder.
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Converts the metadata back into a builder.
    pub fn into_builder(self) -> Builder {
        Builder { inner: self }
    }
}

impl ProvideErrorMetadata for ErrorMetadata {
    fn meta(&self) -> &ErrorMetadata {
        self
    }
}

impl ProvideErrorKind for ErrorMetadata {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        match self.source {
            Some(FaultSource::Receiver) => Some(ErrorKind::ServerError),
            _ => None,
        }
    }

    fn code(&self) -> Option<&str> {
        ErrorMetadata::code(self)
    }
}

impl fmt::Display for ErrorMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        if let Some(extras) = &self.extras {
            let mut keys: Vec<_> = extras.keys().collect();
            keys.sort_unstable();
            for key in keys {
                fmt.field(key, &extras[key]);
            }
        }
        fmt.finish()
    }
}

impl std::error::Error for ErrorMetadata {}

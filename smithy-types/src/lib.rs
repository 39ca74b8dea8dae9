/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Runtime types for smithy-rs generated model crates.
//!
//! Generated crates describe each of their shapes once, as a schema table handed to
//! [`shape!`]. Everything else a shape needs (typed getters, a builder, structural
//! equality and hashing, a diagnostic `Display`) is expanded from that table.

#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub mod error;
pub mod instant;
pub mod retry;
pub mod schema;
pub mod shape;

mod macros;

pub use crate::error::{ErrorMetadata, ProvideErrorMetadata};
pub use crate::instant::Instant;

// Paths used by `shape!` expansions.
#[doc(hidden)]
pub mod __private {
    pub use paste::paste;
    #[cfg(feature = "serde-serialize")]
    pub use serde;
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! <fullname>Amazon Relational Database Service</fullname>
//!
//! Model layer for Amazon RDS (API version 2014-10-31): operation inputs and outputs, the data types
//! they embed, and the faults the service returns. Sending requests is the job of a transport built on
//! top of this crate.
//!
//! ```
//! use rds::input::DescribeDbSnapshotAttributesInput;
//!
//! let input = DescribeDbSnapshotAttributesInput::builder()
//!     .db_snapshot_identifier("snap-123")
//!     .build();
//! assert_eq!(input.db_snapshot_identifier(), Some("snap-123"));
//! assert_eq!(input.to_string(), "{DBSnapshotIdentifier: snap-123}");
//! ```

#![warn(rust_2018_idioms, unreachable_pub)]

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use error::{Error, ErrorKind};
pub use operation::Operation;
pub use smithy_types::Instant;

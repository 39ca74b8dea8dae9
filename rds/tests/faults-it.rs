/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use rds::{Error, ErrorKind, Operation};
use smithy_types::error::FaultSource;
use smithy_types::{ErrorMetadata, ProvideErrorMetadata};

fn copy_snapshot(fail_with: Option<Error>) -> Result<(), Error> {
    match fail_with {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[test]
fn quota_fault_keeps_identity_and_message() {
    let err = Error::new(ErrorKind::SnapshotQuotaExceeded, "quota exceeded");
    let returned = copy_snapshot(Some(err.clone())).unwrap_err();

    assert_eq!(returned.kind(), ErrorKind::SnapshotQuotaExceeded);
    assert!(returned.is_snapshot_quota_exceeded());
    assert!(!returned.is_shared_snapshot_quota_exceeded());
    assert_eq!(returned.message(), Some("quota exceeded"));
    assert_eq!(returned, err);
    assert!(returned.is_modeled_for(Operation::CopyDbSnapshot));
    assert!(!returned.is_modeled_for(Operation::DescribeDbSnapshots));
}

#[test]
fn faults_are_std_errors() {
    let err: Box<dyn std::error::Error + Send + Sync> =
        Box::new(Error::new(ErrorKind::DbSnapshotNotFound, "snap-123 not found"));
    assert_eq!(err.to_string(), "DBSnapshotNotFound: snap-123 not found");
    let err = err.downcast::<Error>().expect("rds error");
    assert!(err.is_db_snapshot_not_found());
}

#[test]
fn transport_metadata_resolves_kind() {
    let meta = ErrorMetadata::builder()
        .code("InvalidDBSnapshotState")
        .message("snapshot is being created")
        .request_id("7c8a1b2e-0000-4000-8000-000000000000")
        .fault_source(FaultSource::Sender)
        .status(400)
        .build();
    let err = Error::from(meta);
    assert!(err.is_invalid_db_snapshot_state());
    assert_eq!(err.message(), Some("snapshot is being created"));
    assert_eq!(
        err.request_id(),
        Some("7c8a1b2e-0000-4000-8000-000000000000")
    );
    assert_eq!(err.meta().status(), Some(400));
}

#[test]
fn unknown_code_is_unhandled_but_kept() {
    let err = Error::from(
        ErrorMetadata::builder()
            .code("Throttling")
            .message("Rate exceeded")
            .build(),
    );
    assert!(err.is_unhandled());
    assert_eq!(err.kind(), ErrorKind::Unhandled);
    assert_eq!(err.code(), Some("Throttling"));
    assert_eq!(err.to_string(), "Throttling: Rate exceeded");
    assert!(!Operation::ALL.iter().any(|op| err.is_modeled_for(*op)));
}

#[test]
fn every_declared_fault_has_a_code() {
    for operation in Operation::ALL {
        for kind in operation.errors() {
            let code = kind.code().expect("declared faults are modeled");
            assert_eq!(ErrorKind::from_code(code), *kind, "{} in {}", code, operation);
        }
    }
}

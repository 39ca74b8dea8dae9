/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

#![cfg(feature = "serde-serialize")]

use rds::input::{CopyDbSnapshotInput, ModifyDbClusterInput};
use rds::model::{DbSnapshot, Tag};
use rds::Instant;
use serde_json::json;

#[test]
fn members_use_wire_names() {
    let input = CopyDbSnapshotInput::builder()
        .source_db_snapshot_identifier("snap-123")
        .target_db_snapshot_identifier("snap-123-copy")
        .tags(Tag::builder().key("env").value("test").build())
        .copy_tags(true)
        .build();
    assert_eq!(
        serde_json::to_value(&input).unwrap(),
        json!({
            "SourceDBSnapshotIdentifier": "snap-123",
            "TargetDBSnapshotIdentifier": "snap-123-copy",
            "Tags": [{ "Key": "env", "Value": "test" }],
            "CopyTags": true
        })
    );
}

#[test]
fn sensitive_members_are_skipped() {
    let input = ModifyDbClusterInput::builder()
        .db_cluster_identifier("c1")
        .master_user_password("some password")
        .build();
    let text = serde_json::to_string(&input).unwrap();
    assert_eq!(text, r#"{"DBClusterIdentifier":"c1"}"#);
}

#[test]
fn timestamps_are_rfc3339() {
    let snapshot = DbSnapshot::builder()
        .db_snapshot_identifier("snap-123")
        .snapshot_create_time(Instant::from_epoch_seconds(1576540098))
        .build();
    assert_eq!(
        serde_json::to_value(&snapshot).unwrap(),
        json!({
            "DBSnapshotIdentifier": "snap-123",
            "SnapshotCreateTime": "2019-12-16T23:48:18Z"
        })
    );
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use rds::input::{CreateDbClusterInput, ModifyDbClusterInput, RestoreDbInstanceFromS3Input};
use rds::model::PendingModifiedValues;

#[test]
fn validate_sensitive_trait() {
    let pending = PendingModifiedValues::builder()
        .master_user_password("some password")
        .build();
    let debug = format!("{:?}", pending);
    assert!(debug.starts_with("PendingModifiedValues { db_instance_class: None, allocated_storage: None, master_user_password: \"*** Sensitive Data Redacted ***\", port: None"));
    assert!(!debug.contains("some password"));
}

#[test]
fn builders_redact_too() {
    let builder = ModifyDbClusterInput::builder()
        .db_cluster_identifier("c1")
        .master_user_password("some password");
    assert!(!format!("{:?}", builder).contains("some password"));
    assert_eq!(
        builder.get_master_user_password().as_deref(),
        Some("some password")
    );
}

#[test]
fn diagnostic_string_redacts_passwords() {
    let input = RestoreDbInstanceFromS3Input::builder()
        .db_instance_identifier("db-1")
        .master_user_password("some password")
        .build();
    assert_eq!(
        input.to_string(),
        "{DBInstanceIdentifier: db-1,MasterUserPassword: *** Sensitive Data Redacted ***,}"
    );
}

#[test]
fn absent_password_is_not_rendered() {
    let input = CreateDbClusterInput::builder()
        .db_cluster_identifier("c1")
        .build();
    assert_eq!(input.to_string(), "{DBClusterIdentifier: c1,}");
}

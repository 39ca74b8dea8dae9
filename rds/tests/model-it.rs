/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rds::input::{DescribeDbSnapshotAttributesInput, DescribeDbSnapshotsInput};
use rds::model::{DoubleRange, Filter, Range, ScalingConfiguration};
use rds::output::ModifyCurrentDbClusterCapacityOutput;
use smithy_types::schema::StructureShape;
use std::collections::HashSet;

#[test]
fn snapshot_attributes_request() {
    let first = DescribeDbSnapshotAttributesInput::builder()
        .db_snapshot_identifier("snap-123")
        .build();
    assert_eq!(first.db_snapshot_identifier(), Some("snap-123"));

    let second = DescribeDbSnapshotAttributesInput::builder()
        .db_snapshot_identifier("snap-123")
        .build();
    assert_eq!(first, second);
    assert_eq!(first.shape_hash(), second.shape_hash());

    let third = DescribeDbSnapshotAttributesInput::builder()
        .db_snapshot_identifier("snap-456")
        .build();
    assert_ne!(first, third);

    let distinct: HashSet<_> = vec![first, second, third].into_iter().collect();
    assert_eq!(distinct.len(), 2);
}

#[test]
fn sequence_setter_appends() {
    let filter = Filter::builder()
        .extend_values(["x", "y"])
        .values("z")
        .build();
    assert_eq!(
        filter.values(),
        Some(&["x".to_owned(), "y".to_owned(), "z".to_owned()][..])
    );
}

#[test]
fn scalar_setter_replaces() {
    let filter = Filter::builder().name("engine").name("engine-version").build();
    assert_eq!(filter.name(), Some("engine-version"));
}

#[test]
fn set_none_clears() {
    let input = DescribeDbSnapshotsInput::builder()
        .filters(Filter::builder().name("a").build())
        .set_filters(None)
        .max_records(20)
        .set_max_records(None)
        .build();
    assert_eq!(input, DescribeDbSnapshotsInput::builder().build());
    assert_eq!(input.to_string(), "{}");
}

#[test]
fn range_renders_in_schema_order() {
    assert_eq!(DoubleRange::builder().from(1.0).build().to_string(), "{From: 1.0,}");
    assert_eq!(
        DoubleRange::builder().to(2.0).from(1.0).build().to_string(),
        "{From: 1.0,To: 2.0}"
    );
    assert_eq!(
        Range::builder().step(1000).from(5000).to(10000).build().to_string(),
        "{From: 5000,To: 10000,Step: 1000}"
    );
}

#[test]
fn output_renders_every_present_member() {
    let output = ModifyCurrentDbClusterCapacityOutput::builder()
        .db_cluster_identifier("serverless-1")
        .pending_capacity(8)
        .current_capacity(4)
        .seconds_before_timeout(300)
        .timeout_action("RollbackCapacityChange")
        .build();
    assert_eq!(
        output.to_string(),
        "{DBClusterIdentifier: serverless-1,PendingCapacity: 8,CurrentCapacity: 4,SecondsBeforeTimeout: 300,TimeoutAction: RollbackCapacityChange}"
    );
    assert_eq!(
        ModifyCurrentDbClusterCapacityOutput::schema().shape_id().as_str(),
        "com.amazonaws.rds#DBClusterCapacityInfo"
    );
}

#[test]
fn ranges_with_nan_bounds_equal_themselves() {
    let range = DoubleRange::builder().from(f64::NAN).to(2.5).build();
    assert_eq!(range, range.clone());
    let ranges: HashSet<_> = vec![range.clone(), range].into_iter().collect();
    assert_eq!(ranges.len(), 1);
    assert_ne!(
        DoubleRange::builder().from(0.0).build(),
        DoubleRange::builder().from(-0.0).build()
    );
}

#[derive(Debug, Clone)]
struct Members {
    min_capacity: Option<i32>,
    max_capacity: Option<i32>,
    auto_pause: Option<bool>,
    seconds_until_auto_pause: Option<i32>,
    timeout_action: Option<String>,
}

fn members() -> impl Strategy<Value = Members> {
    (
        proptest::option::of(any::<i32>()),
        proptest::option::of(any::<i32>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<i32>()),
        proptest::option::of("[A-Za-z]{0,24}"),
    )
        .prop_map(
            |(min_capacity, max_capacity, auto_pause, seconds_until_auto_pause, timeout_action)| {
                Members {
                    min_capacity,
                    max_capacity,
                    auto_pause,
                    seconds_until_auto_pause,
                    timeout_action,
                }
            },
        )
}

fn build(members: &Members) -> ScalingConfiguration {
    ScalingConfiguration::builder()
        .set_min_capacity(members.min_capacity)
        .set_max_capacity(members.max_capacity)
        .set_auto_pause(members.auto_pause)
        .set_seconds_until_auto_pause(members.seconds_until_auto_pause)
        .set_timeout_action(members.timeout_action.clone())
        .build()
}

proptest! {
    #[test]
    fn equality_is_reflexive_and_symmetric(members in members()) {
        let a = build(&members);
        let b = build(&members);
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &a);
        prop_assert_eq!(a.shape_hash(), b.shape_hash());
    }

    #[test]
    fn absent_never_equals_present(members in members(), timeout in "[A-Za-z]{1,8}", capacity in any::<i32>()) {
        let absent = build(&Members { timeout_action: None, ..members.clone() });
        let present = build(&Members { timeout_action: Some(timeout), ..members.clone() });
        prop_assert_ne!(&absent, &present);

        let absent = build(&Members { min_capacity: None, ..members.clone() });
        let present = build(&Members { min_capacity: Some(capacity), ..members });
        prop_assert_ne!(absent, present);
    }

    #[test]
    fn double_ranges_are_reflexive(from in proptest::option::of(any::<f64>()), to in proptest::option::of(any::<f64>())) {
        let range = DoubleRange::builder().set_from(from).set_to(to).build();
        let rebuilt = DoubleRange::builder().set_from(range.from()).set_to(range.to()).build();
        prop_assert_eq!(&range, &range);
        prop_assert_eq!(&range, &rebuilt);
        prop_assert_eq!(range.shape_hash(), rebuilt.shape_hash());
    }

    #[test]
    fn fluent_setters_are_independent(members in members()) {
        let mut builder = ScalingConfiguration::builder();
        if let Some(action) = &members.timeout_action {
            builder = builder.timeout_action(action.as_str());
        }
        if let Some(pause) = members.auto_pause {
            builder = builder.auto_pause(pause);
        }
        if let Some(max) = members.max_capacity {
            builder = builder.max_capacity(max);
        }
        if let Some(min) = members.min_capacity {
            builder = builder.min_capacity(min);
        }
        if let Some(seconds) = members.seconds_until_auto_pause {
            builder = builder.seconds_until_auto_pause(seconds);
        }
        let config = builder.build();
        prop_assert_eq!(config.min_capacity(), members.min_capacity);
        prop_assert_eq!(config.max_capacity(), members.max_capacity);
        prop_assert_eq!(config.auto_pause(), members.auto_pause);
        prop_assert_eq!(config.seconds_until_auto_pause(), members.seconds_until_auto_pause);
        prop_assert_eq!(config.timeout_action(), members.timeout_action.as_deref());
        prop_assert_eq!(&config, &build(&members));
    }
}

/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation outputs.

use crate::model::{
    DbCluster, DbClusterSnapshot, DbEngineVersion, DbInstance, DbSnapshot,
    DbSnapshotAttributesResult, OrderableDbInstanceOption, ValidDbInstanceModificationsMessage,
};
use smithy_types::shape;

shape! {
    #[non_exhaustive]
    pub struct CopyDbClusterSnapshotOutput = "com.amazonaws.rds#CopyDBClusterSnapshotResult" {
        db_cluster_snapshot: DbClusterSnapshot = "DBClusterSnapshot";
    }
}

shape! {
    #[non_exhaustive]
    pub struct CopyDbSnapshotOutput = "com.amazonaws.rds#CopyDBSnapshotResult" {
        db_snapshot: DbSnapshot = "DBSnapshot";
    }
}

shape! {
    #[non_exhaustive]
    pub struct CreateDbClusterOutput = "com.amazonaws.rds#CreateDBClusterResult" {
        db_cluster: DbCluster = "DBCluster";
    }
}

shape! {
    #[non_exhaustive]
    pub struct CreateDbInstanceReadReplicaOutput = "com.amazonaws.rds#CreateDBInstanceReadReplicaResult" {
        db_instance: DbInstance = "DBInstance";
    }
}

shape! {
    #[non_exhaustive]
    pub struct DeleteDbClusterOutput = "com.amazonaws.rds#DeleteDBClusterResult" {
        db_cluster: DbCluster = "DBCluster";
    }
}

shape! {
    /// <p>Contains the result of a successful invocation of the <code>DescribeDBEngineVersions</code> action.</p>
    #[non_exhaustive]
    pub struct DescribeDbEngineVersionsOutput = "com.amazonaws.rds#DBEngineVersionMessage" {
        /// <p>An optional pagination token provided by a previous request. If this parameter is specified, the
        /// response includes only records beyond the marker, up to the value specified by
        /// <code>MaxRecords</code>.</p>
        marker: String = "Marker";
        db_engine_versions: list DbEngineVersion = "DBEngineVersions";
    }
}

shape! {
    #[non_exhaustive]
    pub struct DescribeDbSnapshotAttributesOutput = "com.amazonaws.rds#DescribeDBSnapshotAttributesResult" {
        db_snapshot_attributes_result: DbSnapshotAttributesResult = "DBSnapshotAttributesResult";
    }
}

shape! {
    /// <p>Contains the result of a successful invocation of the <code>DescribeDBSnapshots</code> action.</p>
    #[non_exhaustive]
    pub struct DescribeDbSnapshotsOutput = "com.amazonaws.rds#DBSnapshotMessage" {
        marker: String = "Marker";
        db_snapshots: list DbSnapshot = "DBSnapshots";
    }
}

shape! {
    /// <p>Contains the result of a successful invocation of the
    /// <code>DescribeOrderableDBInstanceOptions</code> action.</p>
    #[non_exhaustive]
    pub struct DescribeOrderableDbInstanceOptionsOutput = "com.amazonaws.rds#OrderableDBInstanceOptionsMessage" {
        orderable_db_instance_options: list OrderableDbInstanceOption = "OrderableDBInstanceOptions";
        marker: String = "Marker";
    }
}

shape! {
    #[non_exhaustive]
    pub struct DescribeValidDbInstanceModificationsOutput = "com.amazonaws.rds#DescribeValidDBInstanceModificationsResult" {
        valid_db_instance_modifications_message: ValidDbInstanceModificationsMessage = "ValidDBInstanceModificationsMessage";
    }
}

shape! {
    #[non_exhaustive]
    pub struct ModifyCurrentDbClusterCapacityOutput = "com.amazonaws.rds#DBClusterCapacityInfo" {
        /// <p>A user-supplied DB cluster identifier. This identifier is the unique key that identifies a DB
        /// cluster.</p>
        db_cluster_identifier: String = "DBClusterIdentifier";
        /// <p>A value that specifies the capacity that the DB cluster scales to next.</p>
        pending_capacity: i32 = "PendingCapacity";
        /// <p>The current capacity of the DB cluster.</p>
        current_capacity: i32 = "CurrentCapacity";
        seconds_before_timeout: i32 = "SecondsBeforeTimeout";
        timeout_action: String = "TimeoutAction";
    }
}

shape! {
    #[non_exhaustive]
    pub struct ModifyDbClusterOutput = "com.amazonaws.rds#ModifyDBClusterResult" {
        db_cluster: DbCluster = "DBCluster";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbClusterFromS3Output = "com.amazonaws.rds#RestoreDBClusterFromS3Result" {
        db_cluster: DbCluster = "DBCluster";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbClusterFromSnapshotOutput = "com.amazonaws.rds#RestoreDBClusterFromSnapshotResult" {
        db_cluster: DbCluster = "DBCluster";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbClusterToPointInTimeOutput = "com.amazonaws.rds#RestoreDBClusterToPointInTimeResult" {
        db_cluster: DbCluster = "DBCluster";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbInstanceFromDbSnapshotOutput = "com.amazonaws.rds#RestoreDBInstanceFromDBSnapshotResult" {
        db_instance: DbInstance = "DBInstance";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbInstanceFromS3Output = "com.amazonaws.rds#RestoreDBInstanceFromS3Result" {
        db_instance: DbInstance = "DBInstance";
    }
}

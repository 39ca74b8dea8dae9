/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! The modeled RDS operations.
//!
//! [`Operation`] names an operation at runtime. Each operation also has a zero-sized marker type
//! implementing [`OperationShape`], which ties it to its input and output types at compile time.

use crate::error::ErrorKind;
use std::str::FromStr;

/// An operation name that isn't part of the RDS model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{name}` is not a modeled RDS operation")]
pub struct UnknownOperationError {
    name: String,
}

impl UnknownOperationError {
    /// The rejected operation name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ties an operation marker to its input and output shapes.
pub trait OperationShape {
    /// The operation's input.
    type Input;
    /// The operation's output.
    type Output;
    /// The runtime name of the operation.
    const OPERATION: Operation;
}

macro_rules! operations {
    ($(
        $(#[doc = $doc:literal])*
        $op:ident => $name:literal [$($err:ident),* $(,)?];
    )*) => {
        /// A modeled RDS operation.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum Operation {
            $(
                $(#[doc = $doc])*
                $op,
            )*
        }

        impl Operation {
            /// Every modeled operation.
            pub const ALL: &'static [Operation] = &[$(Operation::$op),*];

            /// The action name used on the wire, e.g. `CopyDBClusterSnapshot`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Operation::$op => $name,)*
                }
            }

            /// The faults this operation may return, as declared by the service.
            pub fn errors(&self) -> &'static [ErrorKind] {
                match self {
                    $(Operation::$op => &[$(ErrorKind::$err),*],)*
                }
            }
        }

        impl FromStr for Operation {
            type Err = UnknownOperationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Operation::$op),)*
                    _ => {
                        tracing::debug!(operation = s, "unknown RDS operation name");
                        Err(UnknownOperationError { name: s.to_owned() })
                    }
                }
            }
        }

        paste::paste! {
            $(
                $(#[doc = $doc])*
                #[derive(Debug, Clone, Copy, Default)]
                pub struct $op;

                impl OperationShape for $op {
                    type Input = crate::input::[<$op Input>];
                    type Output = crate::output::[<$op Output>];
                    const OPERATION: Operation = Operation::$op;
                }
            )*
        }
    };
}

operations! {
    /// <p>Copies a snapshot of a DB cluster.</p>
    CopyDbClusterSnapshot => "CopyDBClusterSnapshot" [
        DbClusterSnapshotAlreadyExists,
        DbClusterSnapshotNotFound,
        InvalidDbClusterState,
        InvalidDbClusterSnapshotState,
        SnapshotQuotaExceeded,
        KmsKeyNotAccessible,
    ];
    /// <p>Copies the specified DB snapshot.</p>
    CopyDbSnapshot => "CopyDBSnapshot" [
        DbSnapshotAlreadyExists,
        DbSnapshotNotFound,
        InvalidDbSnapshotState,
        SnapshotQuotaExceeded,
        KmsKeyNotAccessible,
    ];
    /// <p>Creates a new Amazon Aurora DB cluster.</p>
    CreateDbCluster => "CreateDBCluster" [
        DbClusterAlreadyExists,
        InsufficientStorageClusterCapacity,
        DbClusterQuotaExceeded,
        StorageQuotaExceeded,
        DbSubnetGroupNotFound,
        InvalidVpcNetworkState,
        InvalidDbClusterState,
        InvalidDbSubnetGroupState,
        InvalidSubnet,
        InvalidDbInstanceState,
        DbClusterParameterGroupNotFound,
        KmsKeyNotAccessible,
        DbClusterNotFound,
        DbInstanceNotFound,
        DbSubnetGroupDoesNotCoverEnoughAzs,
        GlobalClusterNotFound,
        InvalidGlobalClusterState,
        DomainNotFound,
    ];
    /// <p>Creates a new DB instance that acts as a read replica for an existing source DB instance.</p>
    CreateDbInstanceReadReplica => "CreateDBInstanceReadReplica" [
        DbInstanceAlreadyExists,
        InsufficientDbInstanceCapacity,
        DbParameterGroupNotFound,
        DbSecurityGroupNotFound,
        InstanceQuotaExceeded,
        StorageQuotaExceeded,
        DbInstanceNotFound,
        InvalidDbInstanceState,
        DbSubnetGroupNotFound,
        DbSubnetGroupDoesNotCoverEnoughAzs,
        InvalidSubnet,
        InvalidVpcNetworkState,
        ProvisionedIopsNotAvailableInAz,
        OptionGroupNotFound,
        DbSubnetGroupNotAllowed,
        InvalidDbSubnetGroup,
        StorageTypeNotSupported,
        KmsKeyNotAccessible,
        DomainNotFound,
    ];
    /// <p>Deletes a previously provisioned DB cluster.</p>
    DeleteDbCluster => "DeleteDBCluster" [
        DbClusterNotFound,
        InvalidDbClusterState,
        DbClusterSnapshotAlreadyExists,
        SnapshotQuotaExceeded,
        InvalidDbClusterSnapshotState,
    ];
    /// <p>Returns a list of the available DB engines.</p>
    DescribeDbEngineVersions => "DescribeDBEngineVersions" [];
    /// <p>Returns a list of DB snapshot attribute names and values for a manual DB snapshot.</p>
    DescribeDbSnapshotAttributes => "DescribeDBSnapshotAttributes" [DbSnapshotNotFound];
    /// <p>Returns information about DB snapshots.</p>
    DescribeDbSnapshots => "DescribeDBSnapshots" [DbSnapshotNotFound];
    /// <p>Returns a list of orderable DB instance options for the specified engine.</p>
    DescribeOrderableDbInstanceOptions => "DescribeOrderableDBInstanceOptions" [];
    /// <p>You can call <code>DescribeValidDBInstanceModifications</code> to learn what modifications you can
    /// make to your DB instance.</p>
    DescribeValidDbInstanceModifications => "DescribeValidDBInstanceModifications" [
        DbInstanceNotFound,
        InvalidDbInstanceState,
    ];
    /// <p>Set the capacity of an Aurora Serverless DB cluster to a specific value.</p>
    ModifyCurrentDbClusterCapacity => "ModifyCurrentDBClusterCapacity" [
        DbClusterNotFound,
        InvalidDbClusterState,
        InvalidDbClusterCapacity,
    ];
    /// <p>Modify a setting for an Amazon Aurora DB cluster.</p>
    ModifyDbCluster => "ModifyDBCluster" [
        DbClusterNotFound,
        InvalidDbClusterState,
        StorageQuotaExceeded,
        DbSubnetGroupNotFound,
        InvalidVpcNetworkState,
        InvalidDbSubnetGroupState,
        InvalidSubnet,
        DbClusterParameterGroupNotFound,
        InvalidDbSecurityGroupState,
        InvalidDbInstanceState,
        DbClusterAlreadyExists,
        DomainNotFound,
    ];
    /// <p>Creates an Amazon Aurora DB cluster from data stored in an Amazon S3 bucket.</p>
    RestoreDbClusterFromS3 => "RestoreDBClusterFromS3" [
        DbClusterAlreadyExists,
        DbClusterQuotaExceeded,
        StorageQuotaExceeded,
        DbSubnetGroupNotFound,
        InvalidVpcNetworkState,
        InvalidDbClusterState,
        InvalidDbSubnetGroupState,
        InvalidSubnet,
        InvalidS3Bucket,
        DbClusterParameterGroupNotFound,
        KmsKeyNotAccessible,
        DbClusterNotFound,
        DomainNotFound,
        InsufficientStorageClusterCapacity,
    ];
    /// <p>Creates a new DB cluster from a DB snapshot or DB cluster snapshot.</p>
    RestoreDbClusterFromSnapshot => "RestoreDBClusterFromSnapshot" [
        DbClusterAlreadyExists,
        DbClusterQuotaExceeded,
        StorageQuotaExceeded,
        DbSubnetGroupNotFound,
        DbSnapshotNotFound,
        DbClusterSnapshotNotFound,
        InsufficientDbClusterCapacity,
        InsufficientStorageClusterCapacity,
        InvalidDbSnapshotState,
        InvalidDbClusterSnapshotState,
        InvalidVpcNetworkState,
        InvalidRestore,
        InvalidSubnet,
        OptionGroupNotFound,
        KmsKeyNotAccessible,
        DomainNotFound,
        DbClusterParameterGroupNotFound,
    ];
    /// <p>Restores a DB cluster to an arbitrary point in time.</p>
    RestoreDbClusterToPointInTime => "RestoreDBClusterToPointInTime" [
        DbClusterAlreadyExists,
        DbClusterNotFound,
        DbClusterQuotaExceeded,
        DbClusterSnapshotNotFound,
        DbSubnetGroupNotFound,
        InsufficientDbClusterCapacity,
        InsufficientStorageClusterCapacity,
        InvalidDbClusterSnapshotState,
        InvalidDbClusterState,
        InvalidDbSnapshotState,
        InvalidRestore,
        InvalidSubnet,
        InvalidVpcNetworkState,
        KmsKeyNotAccessible,
        OptionGroupNotFound,
        StorageQuotaExceeded,
        DomainNotFound,
        DbClusterParameterGroupNotFound,
    ];
    /// <p>Creates a new DB instance from a DB snapshot.</p>
    RestoreDbInstanceFromDbSnapshot => "RestoreDBInstanceFromDBSnapshot" [
        DbInstanceAlreadyExists,
        DbSnapshotNotFound,
        InstanceQuotaExceeded,
        InsufficientDbInstanceCapacity,
        InvalidDbSnapshotState,
        StorageQuotaExceeded,
        InvalidVpcNetworkState,
        InvalidRestore,
        DbSubnetGroupNotFound,
        DbSubnetGroupDoesNotCoverEnoughAzs,
        InvalidSubnet,
        ProvisionedIopsNotAvailableInAz,
        OptionGroupNotFound,
        StorageTypeNotSupported,
        AuthorizationNotFound,
        KmsKeyNotAccessible,
        DbSecurityGroupNotFound,
        DomainNotFound,
        DbParameterGroupNotFound,
        BackupPolicyNotFound,
    ];
    /// <p>Amazon Relational Database Service (Amazon RDS) supports importing MySQL databases by using backup
    /// files.</p>
    RestoreDbInstanceFromS3 => "RestoreDBInstanceFromS3" [
        DbInstanceAlreadyExists,
        InsufficientDbInstanceCapacity,
        DbParameterGroupNotFound,
        DbSecurityGroupNotFound,
        InstanceQuotaExceeded,
        StorageQuotaExceeded,
        DbSubnetGroupNotFound,
        DbSubnetGroupDoesNotCoverEnoughAzs,
        InvalidSubnet,
        InvalidVpcNetworkState,
        InvalidS3Bucket,
        ProvisionedIopsNotAvailableInAz,
        OptionGroupNotFound,
        StorageTypeNotSupported,
        AuthorizationNotFound,
        KmsKeyNotAccessible,
        BackupPolicyNotFound,
    ];
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

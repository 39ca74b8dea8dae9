/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Faults returned by Amazon RDS.
//!
//! Every fault is an [`Error`]: an [`ErrorKind`] naming the condition plus the [`ErrorMetadata`] the
//! transport read off the error response. Branch on the kind, never on the message.

use crate::operation::Operation;
use smithy_types::retry::{self, ProvideErrorKind};
use smithy_types::{ErrorMetadata, ProvideErrorMetadata};
use std::fmt;

macro_rules! error_kinds {
    ($( $(#[doc = $doc:literal])* $variant:ident => $code:literal, )*) => {
        /// Kinds of fault Amazon RDS can return.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum ErrorKind {
            $(
                $(#[doc = $doc])*
                $variant,
            )*
            /// An error code that isn't part of the RDS model.
            Unhandled,
        }

        impl ErrorKind {
            /// Every modeled kind, excluding [`ErrorKind::Unhandled`].
            pub const ALL: &'static [ErrorKind] = &[$(ErrorKind::$variant),*];

            /// The error code the service sends for this kind. `None` for [`ErrorKind::Unhandled`].
            pub fn code(&self) -> Option<&'static str> {
                match self {
                    $(ErrorKind::$variant => Some($code),)*
                    ErrorKind::Unhandled => None,
                }
            }

            /// Resolves an error code to its kind. Codes outside the model resolve to
            /// [`ErrorKind::Unhandled`].
            pub fn from_code(code: &str) -> Self {
                match code {
                    $($code => ErrorKind::$variant,)*
                    _ => ErrorKind::Unhandled,
                }
            }
        }

        paste::paste! {
            impl Error {
                $(
                    #[doc = concat!("Returns `true` if the error kind is `ErrorKind::", stringify!($variant), "`.")]
                    pub fn [<is_ $variant:snake>](&self) -> bool {
                        matches!(self.kind, ErrorKind::$variant)
                    }
                )*
            }
        }
    };
}

error_kinds! {
    /// <p>The specified CIDR IP range or Amazon EC2 security group is already authorized for the specified DB
    /// security group.</p>
    AuthorizationAlreadyExists => "AuthorizationAlreadyExists",
    /// <p>The specified CIDR IP range or Amazon EC2 security group might not be authorized for the specified
    /// DB security group.</p>
    AuthorizationNotFound => "AuthorizationNotFound",
    /// <p>The DB security group authorization quota has been reached.</p>
    AuthorizationQuotaExceeded => "AuthorizationQuotaExceeded",
    BackupPolicyNotFound => "BackupPolicyNotFoundFault",
    /// <p><code>CertificateIdentifier</code> doesn't refer to an existing certificate.</p>
    CertificateNotFound => "CertificateNotFound",
    CustomAvailabilityZoneAlreadyExists => "CustomAvailabilityZoneAlreadyExists",
    CustomAvailabilityZoneNotFound => "CustomAvailabilityZoneNotFound",
    CustomAvailabilityZoneQuotaExceeded => "CustomAvailabilityZoneQuotaExceeded",
    /// <p>The user already has a DB cluster with the given identifier.</p>
    DbClusterAlreadyExists => "DBClusterAlreadyExistsFault",
    DbClusterBacktrackNotFound => "DBClusterBacktrackNotFoundFault",
    DbClusterEndpointAlreadyExists => "DBClusterEndpointAlreadyExistsFault",
    DbClusterEndpointNotFound => "DBClusterEndpointNotFoundFault",
    DbClusterEndpointQuotaExceeded => "DBClusterEndpointQuotaExceededFault",
    /// <p><code>DBClusterIdentifier</code> doesn't refer to an existing DB cluster.</p>
    DbClusterNotFound => "DBClusterNotFoundFault",
    /// <p><code>DBClusterParameterGroupName</code> doesn't refer to an existing DB cluster parameter
    /// group.</p>
    DbClusterParameterGroupNotFound => "DBClusterParameterGroupNotFound",
    /// <p>The user attempted to create a new DB cluster and the user has already reached the maximum allowed
    /// DB cluster quota.</p>
    DbClusterQuotaExceeded => "DBClusterQuotaExceededFault",
    DbClusterRoleAlreadyExists => "DBClusterRoleAlreadyExists",
    DbClusterRoleNotFound => "DBClusterRoleNotFound",
    DbClusterRoleQuotaExceeded => "DBClusterRoleQuotaExceeded",
    /// <p>The user already has a DB cluster snapshot with the given identifier.</p>
    DbClusterSnapshotAlreadyExists => "DBClusterSnapshotAlreadyExistsFault",
    /// <p><code>DBClusterSnapshotIdentifier</code> doesn't refer to an existing DB cluster snapshot.</p>
    DbClusterSnapshotNotFound => "DBClusterSnapshotNotFoundFault",
    /// <p>The user already has a DB instance with the given identifier.</p>
    DbInstanceAlreadyExists => "DBInstanceAlreadyExists",
    DbInstanceAutomatedBackupNotFound => "DBInstanceAutomatedBackupNotFound",
    DbInstanceAutomatedBackupQuotaExceeded => "DBInstanceAutomatedBackupQuotaExceeded",
    /// <p><code>DBInstanceIdentifier</code> doesn't refer to an existing DB instance.</p>
    DbInstanceNotFound => "DBInstanceNotFound",
    DbInstanceRoleAlreadyExists => "DBInstanceRoleAlreadyExists",
    DbInstanceRoleNotFound => "DBInstanceRoleNotFound",
    DbInstanceRoleQuotaExceeded => "DBInstanceRoleQuotaExceeded",
    DbLogFileNotFound => "DBLogFileNotFoundFault",
    DbParameterGroupAlreadyExists => "DBParameterGroupAlreadyExists",
    /// <p><code>DBParameterGroupName</code> doesn't refer to an existing DB parameter group.</p>
    DbParameterGroupNotFound => "DBParameterGroupNotFound",
    DbParameterGroupQuotaExceeded => "DBParameterGroupQuotaExceeded",
    DbProxyAlreadyExists => "DBProxyAlreadyExistsFault",
    DbProxyNotFound => "DBProxyNotFoundFault",
    DbProxyQuotaExceeded => "DBProxyQuotaExceededFault",
    DbProxyTargetAlreadyRegistered => "DBProxyTargetAlreadyRegisteredFault",
    DbProxyTargetGroupNotFound => "DBProxyTargetGroupNotFoundFault",
    DbProxyTargetNotFound => "DBProxyTargetNotFoundFault",
    /// <p>A DB security group with the name specified in <code>DBSecurityGroupName</code> already
    /// exists.</p>
    DbSecurityGroupAlreadyExists => "DBSecurityGroupAlreadyExists",
    /// <p><code>DBSecurityGroupName</code> doesn't refer to an existing DB security group.</p>
    DbSecurityGroupNotFound => "DBSecurityGroupNotFound",
    /// <p>A DB security group isn't allowed for this action.</p>
    DbSecurityGroupNotSupported => "DBSecurityGroupNotSupported",
    /// <p>The request would result in the user exceeding the allowed number of DB security groups.</p>
    DbSecurityGroupQuotaExceeded => "QuotaExceeded.DBSecurityGroup",
    /// <p><code>DBSnapshotIdentifier</code> is already used by an existing snapshot.</p>
    DbSnapshotAlreadyExists => "DBSnapshotAlreadyExists",
    /// <p><code>DBSnapshotIdentifier</code> doesn't refer to an existing DB snapshot.</p>
    DbSnapshotNotFound => "DBSnapshotNotFound",
    DbSubnetGroupAlreadyExists => "DBSubnetGroupAlreadyExists",
    /// <p>Subnets in the DB subnet group should cover at least two Availability Zones unless there is only
    /// one Availability Zone.</p>
    DbSubnetGroupDoesNotCoverEnoughAzs => "DBSubnetGroupDoesNotCoverEnoughAZs",
    /// <p>The DBSubnetGroup shouldn't be specified while creating read replicas that lie in the same region
    /// as the source instance.</p>
    DbSubnetGroupNotAllowed => "DBSubnetGroupNotAllowedFault",
    /// <p><code>DBSubnetGroupName</code> doesn't refer to an existing DB subnet group.</p>
    DbSubnetGroupNotFound => "DBSubnetGroupNotFoundFault",
    DbSubnetGroupQuotaExceeded => "DBSubnetGroupQuotaExceeded",
    DbSubnetQuotaExceeded => "DBSubnetQuotaExceededFault",
    DbUpgradeDependencyFailure => "DBUpgradeDependencyFailure",
    /// <p><code>Domain</code> doesn't refer to an existing Active Directory domain.</p>
    DomainNotFound => "DomainNotFoundFault",
    EventSubscriptionQuotaExceeded => "EventSubscriptionQuotaExceeded",
    ExportTaskAlreadyExists => "ExportTaskAlreadyExists",
    ExportTaskNotFound => "ExportTaskNotFound",
    GlobalClusterAlreadyExists => "GlobalClusterAlreadyExistsFault",
    GlobalClusterNotFound => "GlobalClusterNotFoundFault",
    GlobalClusterQuotaExceeded => "GlobalClusterQuotaExceededFault",
    IamRoleMissingPermissions => "IamRoleMissingPermissions",
    IamRoleNotFound => "IamRoleNotFound",
    InstallationMediaAlreadyExists => "InstallationMediaAlreadyExists",
    InstallationMediaNotFound => "InstallationMediaNotFound",
    /// <p>The request would result in the user exceeding the allowed number of DB instances.</p>
    InstanceQuotaExceeded => "InstanceQuotaExceeded",
    /// <p>The DB cluster doesn't have enough capacity for the current operation.</p>
    InsufficientDbClusterCapacity => "InsufficientDBClusterCapacityFault",
    /// <p>The specified DB instance class isn't available in the specified Availability Zone.</p>
    InsufficientDbInstanceCapacity => "InsufficientDBInstanceCapacity",
    /// <p>There is insufficient storage available for the current action.</p>
    InsufficientStorageClusterCapacity => "InsufficientStorageClusterCapacity",
    /// <p><code>Capacity</code> isn't a valid Aurora Serverless DB cluster capacity. Valid capacity values
    /// are <code>2</code>, <code>4</code>, <code>8</code>, <code>16</code>, <code>32</code>, <code>64</code>,
    /// <code>128</code>, and <code>256</code>.</p>
    InvalidDbClusterCapacity => "InvalidDBClusterCapacityFault",
    InvalidDbClusterEndpointState => "InvalidDBClusterEndpointStateFault",
    /// <p>The supplied value isn't a valid DB cluster snapshot state.</p>
    InvalidDbClusterSnapshotState => "InvalidDBClusterSnapshotStateFault",
    /// <p>The requested operation can't be performed while the cluster is in this state.</p>
    InvalidDbClusterState => "InvalidDBClusterStateFault",
    InvalidDbInstanceAutomatedBackupState => "InvalidDBInstanceAutomatedBackupState",
    /// <p>The DB instance isn't in a valid state.</p>
    InvalidDbInstanceState => "InvalidDBInstanceState",
    InvalidDbParameterGroupState => "InvalidDBParameterGroupState",
    InvalidDbProxyState => "InvalidDBProxyStateFault",
    /// <p>The state of the DB security group doesn't allow deletion.</p>
    InvalidDbSecurityGroupState => "InvalidDBSecurityGroupState",
    /// <p>The state of the DB snapshot doesn't allow deletion.</p>
    InvalidDbSnapshotState => "InvalidDBSnapshotState",
    /// <p>The DBSubnetGroup doesn't belong to the same VPC as that of an existing cross-region read replica
    /// of the same source instance.</p>
    InvalidDbSubnetGroup => "InvalidDBSubnetGroupFault",
    /// <p>The DB subnet group cannot be deleted because it's in use.</p>
    InvalidDbSubnetGroupState => "InvalidDBSubnetGroupStateFault",
    InvalidDbSubnetState => "InvalidDBSubnetStateFault",
    InvalidEventSubscriptionState => "InvalidEventSubscriptionState",
    InvalidExportOnly => "InvalidExportOnly",
    InvalidExportSourceState => "InvalidExportSourceState",
    InvalidExportTaskState => "InvalidExportTaskStateFault",
    InvalidGlobalClusterState => "InvalidGlobalClusterStateFault",
    InvalidOptionGroupState => "InvalidOptionGroupStateFault",
    /// <p>Cannot restore from VPC backup to non-VPC DB instance.</p>
    InvalidRestore => "InvalidRestoreFault",
    /// <p>The specified Amazon S3 bucket name can't be found or Amazon RDS isn't authorized to access the
    /// specified Amazon S3 bucket.</p>
    InvalidS3Bucket => "InvalidS3BucketFault",
    /// <p>The requested subnet is invalid, or multiple subnets were requested that are not all in a common
    /// VPC.</p>
    InvalidSubnet => "InvalidSubnet",
    /// <p>The DB subnet group doesn't cover all Availability Zones after it's created because of users'
    /// change.</p>
    InvalidVpcNetworkState => "InvalidVPCNetworkStateFault",
    /// <p>An error occurred accessing an AWS KMS key.</p>
    KmsKeyNotAccessible => "KMSKeyNotAccessibleFault",
    OptionGroupAlreadyExists => "OptionGroupAlreadyExistsFault",
    /// <p>The specified option group could not be found.</p>
    OptionGroupNotFound => "OptionGroupNotFoundFault",
    OptionGroupQuotaExceeded => "OptionGroupQuotaExceededFault",
    PointInTimeRestoreNotEnabled => "PointInTimeRestoreNotEnabled",
    /// <p>Provisioned IOPS not available in the specified Availability Zone.</p>
    ProvisionedIopsNotAvailableInAz => "ProvisionedIopsNotAvailableInAZFault",
    ReservedDbInstanceAlreadyExists => "ReservedDBInstanceAlreadyExists",
    ReservedDbInstanceNotFound => "ReservedDBInstanceNotFound",
    ReservedDbInstanceQuotaExceeded => "ReservedDBInstanceQuotaExceeded",
    ReservedDbInstancesOfferingNotFound => "ReservedDBInstancesOfferingNotFound",
    ResourceNotFound => "ResourceNotFoundFault",
    SnsInvalidTopic => "SNSInvalidTopic",
    SnsNoAuthorization => "SNSNoAuthorization",
    SnsTopicArnNotFound => "SNSTopicArnNotFound",
    SharedSnapshotQuotaExceeded => "SharedSnapshotQuotaExceeded",
    /// <p>The request would result in the user exceeding the allowed number of DB snapshots.</p>
    SnapshotQuotaExceeded => "SnapshotQuotaExceeded",
    SourceNotFound => "SourceNotFound",
    /// <p>The request would result in the user exceeding the allowed amount of storage available across all
    /// DB instances.</p>
    StorageQuotaExceeded => "StorageQuotaExceeded",
    /// <p>Storage of the <code>StorageType</code> specified can't be associated with the DB instance.</p>
    StorageTypeNotSupported => "StorageTypeNotSupported",
    SubnetAlreadyInUse => "SubnetAlreadyInUse",
    SubscriptionAlreadyExist => "SubscriptionAlreadyExist",
    SubscriptionCategoryNotFound => "SubscriptionCategoryNotFound",
    SubscriptionNotFound => "SubscriptionNotFound",
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code().unwrap_or("Unhandled"))
    }
}

/// A fault returned by Amazon RDS.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    meta: ErrorMetadata,
}

impl Error {
    /// Creates a fault of `kind` carrying `message`.
    ///
    /// ```
    /// use rds::error::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::SnapshotQuotaExceeded, "quota exceeded");
    /// assert_eq!(err.message(), Some("quota exceeded"));
    /// assert!(err.is_snapshot_quota_exceeded());
    /// assert_eq!(err.to_string(), "SnapshotQuotaExceeded: quota exceeded");
    /// ```
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let mut meta = ErrorMetadata::builder().message(message);
        if let Some(code) = kind.code() {
            meta = meta.code(code);
        }
        Self {
            kind,
            meta: meta.build(),
        }
    }

    /// Creates a fault from metadata the transport read off an error response.
    ///
    /// The kind is resolved from the metadata's error code.
    pub fn from_meta(meta: ErrorMetadata) -> Self {
        let kind = meta
            .code()
            .map_or(ErrorKind::Unhandled, ErrorKind::from_code);
        if kind == ErrorKind::Unhandled {
            tracing::debug!(code = ?meta.code(), request_id = ?meta.request_id(), "unmodeled RDS error code");
        }
        Self { kind, meta }
    }

    /// Creates an unhandled fault carrying `message`.
    pub fn unhandled(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unhandled, message)
    }

    /// Returns the kind of this fault.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the human-readable message, exactly as it was received.
    pub fn message(&self) -> Option<&str> {
        self.meta.message()
    }

    /// Returns the error code, if one was received.
    pub fn code(&self) -> Option<&str> {
        self.meta.code()
    }

    /// Returns the request ID, if one was received.
    pub fn request_id(&self) -> Option<&str> {
        self.meta.request_id()
    }

    /// Returns `true` for [`ErrorKind::Unhandled`].
    pub fn is_unhandled(&self) -> bool {
        matches!(self.kind, ErrorKind::Unhandled)
    }

    /// Returns `true` if `operation` declares this fault's kind.
    pub fn is_modeled_for(&self, operation: Operation) -> bool {
        operation.errors().contains(&self.kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code(), self.message()) {
            (Some(code), Some(message)) => write!(f, "{}: {}", code, message),
            (Some(code), None) => f.write_str(code),
            (None, Some(message)) => write!(f, "unhandled error: {}", message),
            (None, None) => f.write_str("unhandled error"),
        }
    }
}

impl std::error::Error for Error {}

impl ProvideErrorMetadata for Error {
    fn meta(&self) -> &ErrorMetadata {
        &self.meta
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<retry::ErrorKind> {
        self.meta.retryable_error_kind()
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl From<ErrorMetadata> for Error {
    fn from(meta: ErrorMetadata) -> Self {
        Self::from_meta(meta)
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};
    use smithy_types::error::FaultSource;
    use smithy_types::retry::{self, ProvideErrorKind};
    use smithy_types::ErrorMetadata;
    use tracing_test::traced_test;

    #[test]
    fn taxonomy_has_every_modeled_fault() {
        assert_eq!(ErrorKind::ALL.len(), 112);
        assert!(!ErrorKind::ALL.contains(&ErrorKind::Unhandled));
    }

    #[test]
    fn codes_round_trip() {
        for kind in ErrorKind::ALL {
            let code = kind.code().expect("modeled kinds have codes");
            assert_eq!(ErrorKind::from_code(code), *kind, "{}", code);
        }
        assert_eq!(ErrorKind::Unhandled.code(), None);
    }

    #[test]
    fn wire_codes_keep_their_casing() {
        assert_eq!(
            ErrorKind::DbSecurityGroupQuotaExceeded.code(),
            Some("QuotaExceeded.DBSecurityGroup")
        );
        assert_eq!(
            ErrorKind::KmsKeyNotAccessible.code(),
            Some("KMSKeyNotAccessibleFault")
        );
        assert_eq!(
            ErrorKind::from_code("DBClusterNotFoundFault"),
            ErrorKind::DbClusterNotFound
        );
        assert_eq!(
            ErrorKind::from_code("dbclusternotfoundfault"),
            ErrorKind::Unhandled
        );
    }

    #[test]
    fn same_message_different_kind_is_not_equal() {
        let quota = Error::new(ErrorKind::StorageQuotaExceeded, "quota exceeded");
        let snapshots = Error::new(ErrorKind::SnapshotQuotaExceeded, "quota exceeded");
        assert_eq!(quota.message(), Some("quota exceeded"));
        assert_ne!(quota, snapshots);
        assert!(quota.is_storage_quota_exceeded());
        assert!(!quota.is_snapshot_quota_exceeded());
        assert_eq!(
            quota,
            Error::new(ErrorKind::StorageQuotaExceeded, "quota exceeded")
        );
    }

    #[test]
    fn display_leads_with_code() {
        let err = Error::new(ErrorKind::DbClusterNotFound, "DBCluster c1 not found.");
        assert_eq!(
            err.to_string(),
            "DBClusterNotFoundFault: DBCluster c1 not found."
        );
        assert_eq!(
            Error::unhandled("boom").to_string(),
            "unhandled error: boom"
        );
        assert_eq!(ErrorKind::InvalidSubnet.to_string(), "InvalidSubnet");
    }

    #[test]
    fn receiver_faults_are_server_errors() {
        let err = Error::from_meta(
            ErrorMetadata::builder()
                .code("InsufficientDBInstanceCapacity")
                .fault_source(FaultSource::Receiver)
                .build(),
        );
        assert!(err.is_insufficient_db_instance_capacity());
        assert_eq!(
            err.retryable_error_kind(),
            Some(retry::ErrorKind::ServerError)
        );
        assert_eq!(
            Error::new(ErrorKind::InvalidSubnet, "bad subnet").retryable_error_kind(),
            None
        );
    }

    #[test]
    #[traced_test]
    fn unmodeled_codes_are_logged() {
        let err = Error::from_meta(
            ErrorMetadata::builder()
                .code("Throttling")
                .message("Rate exceeded")
                .request_id("req-1")
                .build(),
        );
        assert!(err.is_unhandled());
        assert_eq!(err.code(), Some("Throttling"));
        assert_eq!(err.to_string(), "Throttling: Rate exceeded");
        assert!(logs_contain("unmodeled RDS error code"));
        assert!(logs_contain("req-1"));
    }

    #[test]
    #[traced_test]
    fn modeled_codes_are_not_logged() {
        let err: Error = ErrorMetadata::builder()
            .code("DBSnapshotNotFound")
            .message("missing")
            .build()
            .into();
        assert!(err.is_db_snapshot_not_found());
        assert!(!logs_contain("unmodeled RDS error code"));
    }
}

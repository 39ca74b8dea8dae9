/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Operation inputs.
//!
//! Every input is built with its `builder()`. Building never fails: which members a request needs is
//! checked by the service, not here.

use crate::model::{
    CloudwatchLogsExportConfiguration, Filter, ProcessorFeature, ScalingConfiguration, Tag,
};
use smithy_types::{shape, Instant};

shape! {
    #[non_exhaustive]
    pub struct CopyDbClusterSnapshotInput = "com.amazonaws.rds#CopyDBClusterSnapshotMessage" {
        /// <p>The identifier of the DB cluster snapshot to copy. This parameter isn't case-sensitive.</p>
        source_db_cluster_snapshot_identifier: String = "SourceDBClusterSnapshotIdentifier";
        /// <p>The identifier of the new DB cluster snapshot to create from the source DB cluster snapshot.</p>
        target_db_cluster_snapshot_identifier: String = "TargetDBClusterSnapshotIdentifier";
        kms_key_id: String = "KmsKeyId";
        /// <p>The URL that contains a Signature Version 4 signed request for the
        /// <code>CopyDBClusterSnapshot</code> API action in the AWS Region that contains the source DB cluster
        /// snapshot to copy.</p>
        pre_signed_url: String = "PreSignedUrl";
        /// <p>A value that indicates whether to copy all tags from the source DB cluster snapshot to the target DB
        /// cluster snapshot. By default, tags are not copied.</p>
        copy_tags: bool = "CopyTags";
        tags: list Tag = "Tags";
    }
}

shape! {
    #[non_exhaustive]
    pub struct CopyDbSnapshotInput = "com.amazonaws.rds#CopyDBSnapshotMessage" {
        /// <p>The identifier for the source DB snapshot.</p>
        source_db_snapshot_identifier: String = "SourceDBSnapshotIdentifier";
        /// <p>The identifier for the copy of the snapshot.</p>
        target_db_snapshot_identifier: String = "TargetDBSnapshotIdentifier";
        kms_key_id: String = "KmsKeyId";
        tags: list Tag = "Tags";
        copy_tags: bool = "CopyTags";
        pre_signed_url: String = "PreSignedUrl";
        /// <p>The name of an option group to associate with the copy of the snapshot.</p>
        option_group_name: String = "OptionGroupName";
    }
}

shape! {
    #[non_exhaustive]
    pub struct CreateDbClusterInput = "com.amazonaws.rds#CreateDBClusterMessage" {
        availability_zones: list String = "AvailabilityZones";
        backup_retention_period: i32 = "BackupRetentionPeriod";
        character_set_name: String = "CharacterSetName";
        database_name: String = "DatabaseName";
        /// <p>The DB cluster identifier. This parameter is stored as a lowercase string.</p>
        db_cluster_identifier: String = "DBClusterIdentifier";
        db_cluster_parameter_group_name: String = "DBClusterParameterGroupName";
        vpc_security_group_ids: list String = "VpcSecurityGroupIds";
        db_subnet_group_name: String = "DBSubnetGroupName";
        /// <p>The name of the database engine to be used for this DB cluster.</p>
        engine: String = "Engine";
        engine_version: String = "EngineVersion";
        port: i32 = "Port";
        master_username: String = "MasterUsername";
        /// <p>The password for the master database user.</p>
        master_user_password: sensitive String = "MasterUserPassword";
        option_group_name: String = "OptionGroupName";
        preferred_backup_window: String = "PreferredBackupWindow";
        preferred_maintenance_window: String = "PreferredMaintenanceWindow";
        replication_source_identifier: String = "ReplicationSourceIdentifier";
        tags: list Tag = "Tags";
        storage_encrypted: bool = "StorageEncrypted";
        kms_key_id: String = "KmsKeyId";
        pre_signed_url: String = "PreSignedUrl";
        enable_iam_database_authentication: bool = "EnableIAMDatabaseAuthentication";
        /// <p>The target backtrack window, in seconds. To disable backtracking, set this value to 0.</p>
        backtrack_window: i64 = "BacktrackWindow";
        enable_cloudwatch_logs_exports: list String = "EnableCloudwatchLogsExports";
        /// <p>The DB engine mode of the DB cluster, either <code>provisioned</code>, <code>serverless</code>,
        /// <code>parallelquery</code>, <code>global</code>, or <code>multimaster</code>.</p>
        engine_mode: String = "EngineMode";
        scaling_configuration: ScalingConfiguration = "ScalingConfiguration";
        deletion_protection: bool = "DeletionProtection";
        global_cluster_identifier: String = "GlobalClusterIdentifier";
        enable_http_endpoint: bool = "EnableHttpEndpoint";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        domain: String = "Domain";
        domain_iam_role_name: String = "DomainIAMRoleName";
        enable_global_write_forwarding: bool = "EnableGlobalWriteForwarding";
    }
}

shape! {
    #[non_exhaustive]
    pub struct CreateDbInstanceReadReplicaInput = "com.amazonaws.rds#CreateDBInstanceReadReplicaMessage" {
        /// <p>The DB instance identifier of the read replica.</p>
        db_instance_identifier: String = "DBInstanceIdentifier";
        /// <p>The identifier of the DB instance that will act as the source for the read replica.</p>
        source_db_instance_identifier: String = "SourceDBInstanceIdentifier";
        db_instance_class: String = "DBInstanceClass";
        availability_zone: String = "AvailabilityZone";
        port: i32 = "Port";
        multi_az: bool = "MultiAZ";
        auto_minor_version_upgrade: bool = "AutoMinorVersionUpgrade";
        iops: i32 = "Iops";
        option_group_name: String = "OptionGroupName";
        db_parameter_group_name: String = "DBParameterGroupName";
        publicly_accessible: bool = "PubliclyAccessible";
        tags: list Tag = "Tags";
        db_subnet_group_name: String = "DBSubnetGroupName";
        vpc_security_group_ids: list String = "VpcSecurityGroupIds";
        storage_type: String = "StorageType";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        monitoring_interval: i32 = "MonitoringInterval";
        monitoring_role_arn: String = "MonitoringRoleArn";
        kms_key_id: String = "KmsKeyId";
        pre_signed_url: String = "PreSignedUrl";
        enable_iam_database_authentication: bool = "EnableIAMDatabaseAuthentication";
        enable_performance_insights: bool = "EnablePerformanceInsights";
        performance_insights_kms_key_id: String = "PerformanceInsightsKMSKeyId";
        performance_insights_retention_period: i32 = "PerformanceInsightsRetentionPeriod";
        enable_cloudwatch_logs_exports: list String = "EnableCloudwatchLogsExports";
        processor_features: list ProcessorFeature = "ProcessorFeatures";
        use_default_processor_features: bool = "UseDefaultProcessorFeatures";
        deletion_protection: bool = "DeletionProtection";
        domain: String = "Domain";
        domain_iam_role_name: String = "DomainIAMRoleName";
    }
}

shape! {
    #[non_exhaustive]
    pub struct DeleteDbClusterInput = "com.amazonaws.rds#DeleteDBClusterMessage" {
        /// <p>The DB cluster identifier for the DB cluster to be deleted. This parameter isn't case-sensitive.</p>
        db_cluster_identifier: String = "DBClusterIdentifier";
        /// <p>A value that indicates whether to skip the creation of a final DB cluster snapshot before the DB
        /// cluster is deleted.</p>
        skip_final_snapshot: bool = "SkipFinalSnapshot";
        /// <p>The DB cluster snapshot identifier of the new DB cluster snapshot created when
        /// <code>SkipFinalSnapshot</code> is disabled.</p>
        final_db_snapshot_identifier: String = "FinalDBSnapshotIdentifier";
    }
}

shape! {
    #[non_exhaustive]
    pub struct DescribeDbEngineVersionsInput = "com.amazonaws.rds#DescribeDBEngineVersionsMessage" {
        engine: String = "Engine";
        engine_version: String = "EngineVersion";
        db_parameter_group_family: String = "DBParameterGroupFamily";
        /// <p>This parameter isn't currently supported.</p>
        filters: list Filter = "Filters";
        max_records: i32 = "MaxRecords";
        marker: String = "Marker";
        default_only: bool = "DefaultOnly";
        list_supported_character_sets: bool = "ListSupportedCharacterSets";
        list_supported_timezones: bool = "ListSupportedTimezones";
        include_all: bool = "IncludeAll";
    }
}

shape! {
    #[non_exhaustive]
    pub struct DescribeDbSnapshotAttributesInput = "com.amazonaws.rds#DescribeDBSnapshotAttributesMessage" {
        /// <p>The identifier for the DB snapshot to describe the attributes for.</p>
        db_snapshot_identifier: String = "DBSnapshotIdentifier";
    }
}

shape! {
    #[non_exhaustive]
    pub struct DescribeDbSnapshotsInput = "com.amazonaws.rds#DescribeDBSnapshotsMessage" {
        /// <p>The ID of the DB instance to retrieve the list of DB snapshots for. This parameter can't be used in
        /// conjunction with <code>DBSnapshotIdentifier</code>.</p>
        db_instance_identifier: String = "DBInstanceIdentifier";
        /// <p>A specific DB snapshot identifier to describe. This parameter can't be used in conjunction with
        /// <code>DBInstanceIdentifier</code>.</p>
        db_snapshot_identifier: String = "DBSnapshotIdentifier";
        /// <p>The type of snapshots to be returned: <code>automated</code>, <code>manual</code>,
        /// <code>shared</code>, <code>public</code> or <code>awsbackup</code>.</p>
        snapshot_type: String = "SnapshotType";
        filters: list Filter = "Filters";
        /// <p>The maximum number of records to include in the response. Default: 100. Constraints: Minimum 20,
        /// maximum 100.</p>
        max_records: i32 = "MaxRecords";
        /// <p>An optional pagination token provided by a previous <code>DescribeDBSnapshots</code> request.</p>
        marker: String = "Marker";
        include_shared: bool = "IncludeShared";
        include_public: bool = "IncludePublic";
        /// <p>A specific DB resource ID to describe.</p>
        dbi_resource_id: String = "DbiResourceId";
    }
}

shape! {
    #[non_exhaustive]
    pub struct DescribeOrderableDbInstanceOptionsInput = "com.amazonaws.rds#DescribeOrderableDBInstanceOptionsMessage" {
        /// <p>The name of the engine to retrieve DB instance options for.</p>
        engine: String = "Engine";
        engine_version: String = "EngineVersion";
        db_instance_class: String = "DBInstanceClass";
        license_model: String = "LicenseModel";
        availability_zone_group: String = "AvailabilityZoneGroup";
        /// <p>A value that indicates whether to show only VPC or non-VPC offerings.</p>
        vpc: bool = "Vpc";
        filters: list Filter = "Filters";
        max_records: i32 = "MaxRecords";
        marker: String = "Marker";
    }
}

shape! {
    #[non_exhaustive]
    pub struct DescribeValidDbInstanceModificationsInput = "com.amazonaws.rds#DescribeValidDBInstanceModificationsMessage" {
        /// <p>The customer identifier or the ARN of your DB instance.</p>
        db_instance_identifier: String = "DBInstanceIdentifier";
    }
}

shape! {
    #[non_exhaustive]
    pub struct ModifyCurrentDbClusterCapacityInput = "com.amazonaws.rds#ModifyCurrentDBClusterCapacityMessage" {
        db_cluster_identifier: String = "DBClusterIdentifier";
        /// <p>The DB cluster capacity. When you change the capacity of a paused Aurora Serverless DB cluster, it
        /// automatically resumes.</p>
        capacity: i32 = "Capacity";
        /// <p>The amount of time, in seconds, that Aurora Serverless tries to find a scaling point to perform
        /// seamless scaling before enforcing the timeout action. The default is 300.</p>
        seconds_before_timeout: i32 = "SecondsBeforeTimeout";
        timeout_action: String = "TimeoutAction";
    }
}

shape! {
    #[non_exhaustive]
    pub struct ModifyDbClusterInput = "com.amazonaws.rds#ModifyDBClusterMessage" {
        /// <p>The DB cluster identifier for the cluster being modified. This parameter isn't case-sensitive.</p>
        db_cluster_identifier: String = "DBClusterIdentifier";
        new_db_cluster_identifier: String = "NewDBClusterIdentifier";
        /// <p>A value that indicates whether the modifications in this request and any pending modifications are
        /// asynchronously applied as soon as possible, regardless of the
        /// <code>PreferredMaintenanceWindow</code> setting for the DB cluster.</p>
        apply_immediately: bool = "ApplyImmediately";
        backup_retention_period: i32 = "BackupRetentionPeriod";
        db_cluster_parameter_group_name: String = "DBClusterParameterGroupName";
        vpc_security_group_ids: list String = "VpcSecurityGroupIds";
        port: i32 = "Port";
        master_user_password: sensitive String = "MasterUserPassword";
        option_group_name: String = "OptionGroupName";
        preferred_backup_window: String = "PreferredBackupWindow";
        preferred_maintenance_window: String = "PreferredMaintenanceWindow";
        enable_iam_database_authentication: bool = "EnableIAMDatabaseAuthentication";
        backtrack_window: i64 = "BacktrackWindow";
        cloudwatch_logs_export_configuration: CloudwatchLogsExportConfiguration = "CloudwatchLogsExportConfiguration";
        engine_version: String = "EngineVersion";
        allow_major_version_upgrade: bool = "AllowMajorVersionUpgrade";
        db_instance_parameter_group_name: String = "DBInstanceParameterGroupName";
        domain: String = "Domain";
        domain_iam_role_name: String = "DomainIAMRoleName";
        scaling_configuration: ScalingConfiguration = "ScalingConfiguration";
        deletion_protection: bool = "DeletionProtection";
        enable_http_endpoint: bool = "EnableHttpEndpoint";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        enable_global_write_forwarding: bool = "EnableGlobalWriteForwarding";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbClusterFromS3Input = "com.amazonaws.rds#RestoreDBClusterFromS3Message" {
        availability_zones: list String = "AvailabilityZones";
        backup_retention_period: i32 = "BackupRetentionPeriod";
        character_set_name: String = "CharacterSetName";
        database_name: String = "DatabaseName";
        db_cluster_identifier: String = "DBClusterIdentifier";
        db_cluster_parameter_group_name: String = "DBClusterParameterGroupName";
        vpc_security_group_ids: list String = "VpcSecurityGroupIds";
        db_subnet_group_name: String = "DBSubnetGroupName";
        engine: String = "Engine";
        engine_version: String = "EngineVersion";
        port: i32 = "Port";
        master_username: String = "MasterUsername";
        master_user_password: sensitive String = "MasterUserPassword";
        option_group_name: String = "OptionGroupName";
        preferred_backup_window: String = "PreferredBackupWindow";
        preferred_maintenance_window: String = "PreferredMaintenanceWindow";
        tags: list Tag = "Tags";
        storage_encrypted: bool = "StorageEncrypted";
        kms_key_id: String = "KmsKeyId";
        enable_iam_database_authentication: bool = "EnableIAMDatabaseAuthentication";
        /// <p>The identifier for the database engine that was backed up to create the files stored in the Amazon
        /// S3 bucket. Valid values: <code>mysql</code></p>
        source_engine: String = "SourceEngine";
        source_engine_version: String = "SourceEngineVersion";
        /// <p>The name of the Amazon S3 bucket that contains the data used to create the Amazon Aurora DB
        /// cluster.</p>
        s3_bucket_name: String = "S3BucketName";
        s3_prefix: String = "S3Prefix";
        s3_ingestion_role_arn: String = "S3IngestionRoleArn";
        backtrack_window: i64 = "BacktrackWindow";
        enable_cloudwatch_logs_exports: list String = "EnableCloudwatchLogsExports";
        deletion_protection: bool = "DeletionProtection";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        domain: String = "Domain";
        domain_iam_role_name: String = "DomainIAMRoleName";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbClusterFromSnapshotInput = "com.amazonaws.rds#RestoreDBClusterFromSnapshotMessage" {
        availability_zones: list String = "AvailabilityZones";
        /// <p>The name of the DB cluster to create from the DB snapshot or DB cluster snapshot. This parameter
        /// isn't case-sensitive.</p>
        db_cluster_identifier: String = "DBClusterIdentifier";
        /// <p>The identifier for the DB snapshot or DB cluster snapshot to restore from.</p>
        snapshot_identifier: String = "SnapshotIdentifier";
        engine: String = "Engine";
        engine_version: String = "EngineVersion";
        port: i32 = "Port";
        db_subnet_group_name: String = "DBSubnetGroupName";
        database_name: String = "DatabaseName";
        option_group_name: String = "OptionGroupName";
        vpc_security_group_ids: list String = "VpcSecurityGroupIds";
        tags: list Tag = "Tags";
        kms_key_id: String = "KmsKeyId";
        enable_iam_database_authentication: bool = "EnableIAMDatabaseAuthentication";
        backtrack_window: i64 = "BacktrackWindow";
        enable_cloudwatch_logs_exports: list String = "EnableCloudwatchLogsExports";
        engine_mode: String = "EngineMode";
        scaling_configuration: ScalingConfiguration = "ScalingConfiguration";
        db_cluster_parameter_group_name: String = "DBClusterParameterGroupName";
        deletion_protection: bool = "DeletionProtection";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        domain: String = "Domain";
        domain_iam_role_name: String = "DomainIAMRoleName";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbClusterToPointInTimeInput = "com.amazonaws.rds#RestoreDBClusterToPointInTimeMessage" {
        db_cluster_identifier: String = "DBClusterIdentifier";
        /// <p>The type of restore to be performed, either <code>full-copy</code> or
        /// <code>copy-on-write</code>.</p>
        restore_type: String = "RestoreType";
        source_db_cluster_identifier: String = "SourceDBClusterIdentifier";
        /// <p>The date and time to restore the DB cluster to. Can't be specified if the
        /// <code>UseLatestRestorableTime</code> parameter is enabled.</p>
        restore_to_time: Instant = "RestoreToTime";
        use_latest_restorable_time: bool = "UseLatestRestorableTime";
        port: i32 = "Port";
        db_subnet_group_name: String = "DBSubnetGroupName";
        option_group_name: String = "OptionGroupName";
        vpc_security_group_ids: list String = "VpcSecurityGroupIds";
        tags: list Tag = "Tags";
        kms_key_id: String = "KmsKeyId";
        enable_iam_database_authentication: bool = "EnableIAMDatabaseAuthentication";
        backtrack_window: i64 = "BacktrackWindow";
        enable_cloudwatch_logs_exports: list String = "EnableCloudwatchLogsExports";
        db_cluster_parameter_group_name: String = "DBClusterParameterGroupName";
        deletion_protection: bool = "DeletionProtection";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        domain: String = "Domain";
        domain_iam_role_name: String = "DomainIAMRoleName";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbInstanceFromDbSnapshotInput = "com.amazonaws.rds#RestoreDBInstanceFromDBSnapshotMessage" {
        db_instance_identifier: String = "DBInstanceIdentifier";
        /// <p>The identifier for the DB snapshot to restore from.</p>
        db_snapshot_identifier: String = "DBSnapshotIdentifier";
        db_instance_class: String = "DBInstanceClass";
        port: i32 = "Port";
        availability_zone: String = "AvailabilityZone";
        db_subnet_group_name: String = "DBSubnetGroupName";
        multi_az: bool = "MultiAZ";
        publicly_accessible: bool = "PubliclyAccessible";
        auto_minor_version_upgrade: bool = "AutoMinorVersionUpgrade";
        license_model: String = "LicenseModel";
        db_name: String = "DBName";
        engine: String = "Engine";
        iops: i32 = "Iops";
        option_group_name: String = "OptionGroupName";
        tags: list Tag = "Tags";
        storage_type: String = "StorageType";
        tde_credential_arn: String = "TdeCredentialArn";
        /// <p>The password for the given ARN from the key store in order to access the device.</p>
        tde_credential_password: sensitive String = "TdeCredentialPassword";
        vpc_security_group_ids: list String = "VpcSecurityGroupIds";
        domain: String = "Domain";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        domain_iam_role_name: String = "DomainIAMRoleName";
        enable_iam_database_authentication: bool = "EnableIAMDatabaseAuthentication";
        enable_cloudwatch_logs_exports: list String = "EnableCloudwatchLogsExports";
        processor_features: list ProcessorFeature = "ProcessorFeatures";
        use_default_processor_features: bool = "UseDefaultProcessorFeatures";
        db_parameter_group_name: String = "DBParameterGroupName";
        deletion_protection: bool = "DeletionProtection";
    }
}

shape! {
    #[non_exhaustive]
    pub struct RestoreDbInstanceFromS3Input = "com.amazonaws.rds#RestoreDBInstanceFromS3Message" {
        db_name: String = "DBName";
        db_instance_identifier: String = "DBInstanceIdentifier";
        allocated_storage: i32 = "AllocatedStorage";
        db_instance_class: String = "DBInstanceClass";
        engine: String = "Engine";
        master_username: String = "MasterUsername";
        master_user_password: sensitive String = "MasterUserPassword";
        db_security_groups: list String = "DBSecurityGroups";
        vpc_security_group_ids: list String = "VpcSecurityGroupIds";
        availability_zone: String = "AvailabilityZone";
        db_subnet_group_name: String = "DBSubnetGroupName";
        preferred_maintenance_window: String = "PreferredMaintenanceWindow";
        db_parameter_group_name: String = "DBParameterGroupName";
        backup_retention_period: i32 = "BackupRetentionPeriod";
        preferred_backup_window: String = "PreferredBackupWindow";
        port: i32 = "Port";
        multi_az: bool = "MultiAZ";
        engine_version: String = "EngineVersion";
        auto_minor_version_upgrade: bool = "AutoMinorVersionUpgrade";
        license_model: String = "LicenseModel";
        iops: i32 = "Iops";
        option_group_name: String = "OptionGroupName";
        publicly_accessible: bool = "PubliclyAccessible";
        tags: list Tag = "Tags";
        storage_type: String = "StorageType";
        storage_encrypted: bool = "StorageEncrypted";
        kms_key_id: String = "KmsKeyId";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        monitoring_interval: i32 = "MonitoringInterval";
        monitoring_role_arn: String = "MonitoringRoleArn";
        enable_iam_database_authentication: bool = "EnableIAMDatabaseAuthentication";
        /// <p>The name of the engine of your source database. Valid Values: <code>mysql</code></p>
        source_engine: String = "SourceEngine";
        source_engine_version: String = "SourceEngineVersion";
        s3_bucket_name: String = "S3BucketName";
        s3_prefix: String = "S3Prefix";
        /// <p>An AWS Identity and Access Management (IAM) role to allow Amazon RDS to access your Amazon S3
        /// bucket.</p>
        s3_ingestion_role_arn: String = "S3IngestionRoleArn";
        enable_performance_insights: bool = "EnablePerformanceInsights";
        performance_insights_kms_key_id: String = "PerformanceInsightsKMSKeyId";
        performance_insights_retention_period: i32 = "PerformanceInsightsRetentionPeriod";
        enable_cloudwatch_logs_exports: list String = "EnableCloudwatchLogsExports";
        processor_features: list ProcessorFeature = "ProcessorFeatures";
        use_default_processor_features: bool = "UseDefaultProcessorFeatures";
        deletion_protection: bool = "DeletionProtection";
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn read_replica_members_follow_wire_order() {
        let input = CreateDbInstanceReadReplicaInput::builder()
            .domain_iam_role_name("role")
            .db_instance_identifier("replica-1")
            .port(3306)
            .build();
        assert_eq!(
            input.to_string(),
            "{DBInstanceIdentifier: replica-1,Port: 3306,DomainIAMRoleName: role}"
        );
    }

    #[test]
    fn tags_append_across_calls() {
        let input = CopyDbSnapshotInput::builder()
            .tags(Tag::builder().key("a").value("1").build())
            .extend_tags(vec![
                Tag::builder().key("b").build(),
                Tag::builder().key("c").build(),
            ])
            .build();
        let keys: Vec<_> = input
            .tags()
            .unwrap_or_default()
            .iter()
            .filter_map(Tag::key)
            .collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn passwords_never_render() {
        let input = CreateDbClusterInput::builder()
            .db_cluster_identifier("c1")
            .master_user_password("hunter2")
            .build();
        assert!(!input.to_string().contains("hunter2"));
        assert!(!format!("{:?}", input).contains("hunter2"));
        let restore = RestoreDbInstanceFromDbSnapshotInput::builder()
            .tde_credential_password("hunter2")
            .build();
        assert!(!restore.to_string().contains("hunter2"));
    }

    #[test]
    fn point_in_time_restore_keeps_timestamp() {
        let when = Instant::from_epoch_millis(1_576_540_098_520);
        let input = RestoreDbClusterToPointInTimeInput::builder()
            .db_cluster_identifier("restored")
            .restore_to_time(when)
            .build();
        assert_eq!(input.restore_to_time(), Some(&when));
        assert_eq!(
            input.to_string(),
            "{DBClusterIdentifier: restored,RestoreToTime: 2019-12-16T23:48:18.52Z,}"
        );
    }
}

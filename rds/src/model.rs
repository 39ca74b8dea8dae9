/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Data types embedded in RDS operation inputs and outputs.

use smithy_types::{shape, Instant};

shape! {
    /// <p>Metadata assigned to an Amazon RDS resource consisting of a key-value pair.</p>
    pub struct Tag = "com.amazonaws.rds#Tag" {
        /// <p>A key is the required name of the tag. The string value can be from 1 to 128 Unicode characters in length
        /// and can't be prefixed with <code>aws:</code> or <code>rds:</code>.</p>
        key: String = "Key";
        /// <p>A value is the optional value of the tag.</p>
        value: String = "Value";
    }
}

shape! {
    /// <p>A filter name and value pair that is used to return a more specific list of results from a describe
    /// operation. Filters can be used to match a set of resources by specific criteria, such as IDs.</p>
    pub struct Filter = "com.amazonaws.rds#Filter" {
        /// <p>The name of the filter. Filter names are case-sensitive.</p>
        name: String = "Name";
        /// <p>One or more filter values. Filter values are case-sensitive.</p>
        values: list String = "Values";
    }
}

shape! {
    /// <p>Contains the processor features of a DB instance class.</p>
    pub struct ProcessorFeature = "com.amazonaws.rds#ProcessorFeature" {
        /// <p>The name of the processor feature. Valid names are <code>coreCount</code> and
        /// <code>threadsPerCore</code>.</p>
        name: String = "Name";
        /// <p>The value of a processor feature name.</p>
        value: String = "Value";
    }
}

shape! {
    /// <p>Contains the available processor feature information for the DB instance class of a DB instance.</p>
    pub struct AvailableProcessorFeature = "com.amazonaws.rds#AvailableProcessorFeature" {
        name: String = "Name";
        default_value: String = "DefaultValue";
        allowed_values: String = "AllowedValues";
    }
}

shape! {
    /// <p>Contains Availability Zone information.</p>
    pub struct AvailabilityZone = "com.amazonaws.rds#AvailabilityZone" {
        /// <p>The name of the Availability Zone.</p>
        name: String = "Name";
    }
}

shape! {
    /// <p>Contains the scaling configuration of an Aurora Serverless DB cluster.</p>
    pub struct ScalingConfiguration = "com.amazonaws.rds#ScalingConfiguration" {
        /// <p>The minimum capacity for an Aurora DB cluster in <code>serverless</code> DB engine mode.</p>
        min_capacity: i32 = "MinCapacity";
        /// <p>The maximum capacity for an Aurora DB cluster in <code>serverless</code> DB engine mode.</p>
        max_capacity: i32 = "MaxCapacity";
        /// <p>A value that indicates whether to allow or disallow automatic pause for an Aurora DB cluster in
        /// <code>serverless</code> DB engine mode.</p>
        auto_pause: bool = "AutoPause";
        /// <p>The time, in seconds, before an Aurora DB cluster in <code>serverless</code> mode is paused.</p>
        seconds_until_auto_pause: i32 = "SecondsUntilAutoPause";
        /// <p>The action to take when the timeout is reached, either <code>ForceApplyCapacityChange</code> or
        /// <code>RollbackCapacityChange</code>.</p>
        timeout_action: String = "TimeoutAction";
    }
}

shape! {
    /// <p>Shows the scaling configuration for an Aurora DB cluster in <code>serverless</code> DB engine mode.</p>
    pub struct ScalingConfigurationInfo = "com.amazonaws.rds#ScalingConfigurationInfo" {
        min_capacity: i32 = "MinCapacity";
        max_capacity: i32 = "MaxCapacity";
        auto_pause: bool = "AutoPause";
        seconds_until_auto_pause: i32 = "SecondsUntilAutoPause";
        timeout_action: String = "TimeoutAction";
    }
}

shape! {
    /// <p>The configuration setting for the log types to be enabled for export to CloudWatch Logs for a specific
    /// DB instance or DB cluster.</p>
    pub struct CloudwatchLogsExportConfiguration = "com.amazonaws.rds#CloudwatchLogsExportConfiguration" {
        /// <p>The list of log types to enable.</p>
        enable_log_types: list String = "EnableLogTypes";
        /// <p>The list of log types to disable.</p>
        disable_log_types: list String = "DisableLogTypes";
    }
}

shape! {
    /// <p>A list of the log types whose configuration is still pending.</p>
    pub struct PendingCloudwatchLogsExports = "com.amazonaws.rds#PendingCloudwatchLogsExports" {
        log_types_to_enable: list String = "LogTypesToEnable";
        log_types_to_disable: list String = "LogTypesToDisable";
    }
}

shape! {
    /// <p>This data type is used as a response element for queries on VPC security group membership.</p>
    pub struct VpcSecurityGroupMembership = "com.amazonaws.rds#VpcSecurityGroupMembership" {
        vpc_security_group_id: String = "VpcSecurityGroupId";
        status: String = "Status";
    }
}

shape! {
    /// <p>This data type is used as a response element in the following actions: <code>ModifyDBInstance</code>,
    /// <code>RebootDBInstance</code>, <code>RestoreDBInstanceFromDBSnapshot</code>.</p>
    pub struct DbSecurityGroupMembership = "com.amazonaws.rds#DBSecurityGroupMembership" {
        db_security_group_name: String = "DBSecurityGroupName";
        status: String = "Status";
    }
}

shape! {
    /// <p>Contains status information for a DB cluster option group.</p>
    pub struct DbClusterOptionGroupStatus = "com.amazonaws.rds#DBClusterOptionGroupStatus" {
        db_cluster_option_group_name: String = "DBClusterOptionGroupName";
        status: String = "Status";
    }
}

shape! {
    /// <p>Contains information about an instance that is part of a DB cluster.</p>
    pub struct DbClusterMember = "com.amazonaws.rds#DBClusterMember" {
        db_instance_identifier: String = "DBInstanceIdentifier";
        /// <p>Value that is <code>true</code> if the cluster member is the primary instance for the DB cluster.</p>
        is_cluster_writer: bool = "IsClusterWriter";
        db_cluster_parameter_group_status: String = "DBClusterParameterGroupStatus";
        /// <p>A value that specifies the order in which an Aurora Replica is promoted to the primary instance after
        /// a failure of the existing primary instance.</p>
        promotion_tier: i32 = "PromotionTier";
    }
}

shape! {
    /// <p>Describes an AWS Identity and Access Management (IAM) role that is associated with a DB cluster.</p>
    pub struct DbClusterRole = "com.amazonaws.rds#DBClusterRole" {
        role_arn: String = "RoleArn";
        /// <p>One of <code>ACTIVE</code>, <code>PENDING</code> or <code>INVALID</code>.</p>
        status: String = "Status";
        feature_name: String = "FeatureName";
    }
}

shape! {
    /// <p>Describes an AWS Identity and Access Management (IAM) role that is associated with a DB instance.</p>
    pub struct DbInstanceRole = "com.amazonaws.rds#DBInstanceRole" {
        role_arn: String = "RoleArn";
        feature_name: String = "FeatureName";
        status: String = "Status";
    }
}

shape! {
    /// <p>An Active Directory Domain membership record associated with the DB instance or cluster.</p>
    pub struct DomainMembership = "com.amazonaws.rds#DomainMembership" {
        /// <p>The identifier of the Active Directory Domain.</p>
        domain: String = "Domain";
        /// <p>The status of the Active Directory Domain membership for the DB instance or cluster.</p>
        status: String = "Status";
        /// <p>The fully qualified domain name of the Active Directory Domain.</p>
        fqdn: String = "FQDN";
        /// <p>The name of the IAM role to be used when making API calls to the Directory Service.</p>
        iam_role_name: String = "IAMRoleName";
    }
}

shape! {
    /// <p>This data type represents the information you need to connect to an Amazon RDS DB instance.</p>
    pub struct Endpoint = "com.amazonaws.rds#Endpoint" {
        /// <p>Specifies the DNS address of the DB instance.</p>
        address: String = "Address";
        /// <p>Specifies the port that the database engine is listening on.</p>
        port: i32 = "Port";
        /// <p>Specifies the ID that Amazon Route 53 assigns when you create a hosted zone.</p>
        hosted_zone_id: String = "HostedZoneId";
    }
}

shape! {
    /// <p>This data type is used as a response element for the <code>DescribeDBSubnetGroups</code> operation.</p>
    pub struct Subnet = "com.amazonaws.rds#Subnet" {
        subnet_identifier: String = "SubnetIdentifier";
        subnet_availability_zone: AvailabilityZone = "SubnetAvailabilityZone";
        subnet_status: String = "SubnetStatus";
    }
}

shape! {
    /// <p>Contains the details of an Amazon RDS DB subnet group.</p>
    pub struct DbSubnetGroup = "com.amazonaws.rds#DBSubnetGroup" {
        db_subnet_group_name: String = "DBSubnetGroupName";
        db_subnet_group_description: String = "DBSubnetGroupDescription";
        vpc_id: String = "VpcId";
        subnet_group_status: String = "SubnetGroupStatus";
        subnets: list Subnet = "Subnets";
        db_subnet_group_arn: String = "DBSubnetGroupArn";
    }
}

shape! {
    /// <p>The status of the DB parameter group.</p>
    pub struct DbParameterGroupStatus = "com.amazonaws.rds#DBParameterGroupStatus" {
        db_parameter_group_name: String = "DBParameterGroupName";
        parameter_apply_status: String = "ParameterApplyStatus";
    }
}

shape! {
    /// <p>Provides information on the option groups the DB instance is a member of.</p>
    pub struct OptionGroupMembership = "com.amazonaws.rds#OptionGroupMembership" {
        option_group_name: String = "OptionGroupName";
        /// <p>The status of the DB instance's option group membership.</p>
        status: String = "Status";
    }
}

shape! {
    /// <p>This data type is used as a response element in the <code>ModifyDBInstance</code> action and contains
    /// changes that will be applied during the next maintenance window.</p>
    pub struct PendingModifiedValues = "com.amazonaws.rds#PendingModifiedValues" {
        db_instance_class: String = "DBInstanceClass";
        allocated_storage: i32 = "AllocatedStorage";
        /// <p>The pending or currently-in-progress change of the master credentials for the DB instance.</p>
        master_user_password: sensitive String = "MasterUserPassword";
        port: i32 = "Port";
        backup_retention_period: i32 = "BackupRetentionPeriod";
        multi_az: bool = "MultiAZ";
        engine_version: String = "EngineVersion";
        license_model: String = "LicenseModel";
        iops: i32 = "Iops";
        db_instance_identifier: String = "DBInstanceIdentifier";
        storage_type: String = "StorageType";
        ca_certificate_identifier: String = "CACertificateIdentifier";
        db_subnet_group_name: String = "DBSubnetGroupName";
        pending_cloudwatch_logs_exports: PendingCloudwatchLogsExports = "PendingCloudwatchLogsExports";
        processor_features: list ProcessorFeature = "ProcessorFeatures";
    }
}

shape! {
    /// <p>Provides a list of status information for a DB instance.</p>
    pub struct DbInstanceStatusInfo = "com.amazonaws.rds#DBInstanceStatusInfo" {
        /// <p>This value is currently "read replication."</p>
        status_type: String = "StatusType";
        /// <p>Boolean value that is true if the instance is operating normally, or false if the instance is in an
        /// error state.</p>
        normal: bool = "Normal";
        status: String = "Status";
        /// <p>Details of the error if there is an error for the instance. If the instance isn't in an error state,
        /// this value is blank.</p>
        message: String = "Message";
    }
}

shape! {
    /// <p>Contains the details of an Amazon Aurora DB cluster.</p>
    pub struct DbCluster = "com.amazonaws.rds#DBCluster" {
        /// <p>For all database engines except Amazon Aurora, <code>AllocatedStorage</code> specifies the allocated
        /// storage size in gibibytes (GiB). For Aurora, <code>AllocatedStorage</code> always returns 1.</p>
        allocated_storage: i32 = "AllocatedStorage";
        /// <p>Provides the list of Availability Zones (AZs) where instances in the DB cluster can be created.</p>
        availability_zones: list String = "AvailabilityZones";
        backup_retention_period: i32 = "BackupRetentionPeriod";
        character_set_name: String = "CharacterSetName";
        database_name: String = "DatabaseName";
        /// <p>Contains a user-supplied DB cluster identifier. This identifier is the unique key that identifies a
        /// DB cluster.</p>
        db_cluster_identifier: String = "DBClusterIdentifier";
        db_cluster_parameter_group: String = "DBClusterParameterGroup";
        db_subnet_group: String = "DBSubnetGroup";
        /// <p>Specifies the current state of this DB cluster.</p>
        status: String = "Status";
        percent_progress: String = "PercentProgress";
        earliest_restorable_time: Instant = "EarliestRestorableTime";
        /// <p>Specifies the connection endpoint for the primary instance of the DB cluster.</p>
        endpoint: String = "Endpoint";
        reader_endpoint: String = "ReaderEndpoint";
        custom_endpoints: list String = "CustomEndpoints";
        multi_az: bool = "MultiAZ";
        engine: String = "Engine";
        engine_version: String = "EngineVersion";
        latest_restorable_time: Instant = "LatestRestorableTime";
        port: i32 = "Port";
        master_username: String = "MasterUsername";
        db_cluster_option_group_memberships: list DbClusterOptionGroupStatus = "DBClusterOptionGroupMemberships";
        preferred_backup_window: String = "PreferredBackupWindow";
        preferred_maintenance_window: String = "PreferredMaintenanceWindow";
        replication_source_identifier: String = "ReplicationSourceIdentifier";
        read_replica_identifiers: list String = "ReadReplicaIdentifiers";
        db_cluster_members: list DbClusterMember = "DBClusterMembers";
        vpc_security_groups: list VpcSecurityGroupMembership = "VpcSecurityGroups";
        hosted_zone_id: String = "HostedZoneId";
        storage_encrypted: bool = "StorageEncrypted";
        kms_key_id: String = "KmsKeyId";
        /// <p>The AWS Region-unique, immutable identifier for the DB cluster.</p>
        db_cluster_resource_id: String = "DbClusterResourceId";
        db_cluster_arn: String = "DBClusterArn";
        associated_roles: list DbClusterRole = "AssociatedRoles";
        iam_database_authentication_enabled: bool = "IAMDatabaseAuthenticationEnabled";
        clone_group_id: String = "CloneGroupId";
        cluster_create_time: Instant = "ClusterCreateTime";
        earliest_backtrack_time: Instant = "EarliestBacktrackTime";
        /// <p>The target backtrack window, in seconds. If this value is set to 0, backtracking is disabled for
        /// the DB cluster.</p>
        backtrack_window: i64 = "BacktrackWindow";
        backtrack_consumed_change_records: i64 = "BacktrackConsumedChangeRecords";
        enabled_cloudwatch_logs_exports: list String = "EnabledCloudwatchLogsExports";
        /// <p>The current capacity of an Aurora Serverless DB cluster. The capacity is 0 (zero) when the cluster
        /// is paused.</p>
        capacity: i32 = "Capacity";
        engine_mode: String = "EngineMode";
        scaling_configuration_info: ScalingConfigurationInfo = "ScalingConfigurationInfo";
        deletion_protection: bool = "DeletionProtection";
        http_endpoint_enabled: bool = "HttpEndpointEnabled";
        activity_stream_mode: String = "ActivityStreamMode";
        activity_stream_status: String = "ActivityStreamStatus";
        activity_stream_kms_key_id: String = "ActivityStreamKmsKeyId";
        activity_stream_kinesis_stream_name: String = "ActivityStreamKinesisStreamName";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        cross_account_clone: bool = "CrossAccountClone";
        domain_memberships: list DomainMembership = "DomainMemberships";
        global_write_forwarding_status: String = "GlobalWriteForwardingStatus";
        global_write_forwarding_requested: bool = "GlobalWriteForwardingRequested";
    }
}

shape! {
    /// <p>Contains the details for an Amazon RDS DB cluster snapshot.</p>
    pub struct DbClusterSnapshot = "com.amazonaws.rds#DBClusterSnapshot" {
        availability_zones: list String = "AvailabilityZones";
        db_cluster_snapshot_identifier: String = "DBClusterSnapshotIdentifier";
        db_cluster_identifier: String = "DBClusterIdentifier";
        snapshot_create_time: Instant = "SnapshotCreateTime";
        engine: String = "Engine";
        allocated_storage: i32 = "AllocatedStorage";
        status: String = "Status";
        port: i32 = "Port";
        vpc_id: String = "VpcId";
        cluster_create_time: Instant = "ClusterCreateTime";
        master_username: String = "MasterUsername";
        engine_version: String = "EngineVersion";
        license_model: String = "LicenseModel";
        snapshot_type: String = "SnapshotType";
        percent_progress: i32 = "PercentProgress";
        storage_encrypted: bool = "StorageEncrypted";
        kms_key_id: String = "KmsKeyId";
        db_cluster_snapshot_arn: String = "DBClusterSnapshotArn";
        /// <p>If the DB cluster snapshot was copied from a source DB cluster snapshot, the Amazon Resource Name
        /// (ARN) for the source DB cluster snapshot, otherwise, a null value.</p>
        source_db_cluster_snapshot_arn: String = "SourceDBClusterSnapshotArn";
        iam_database_authentication_enabled: bool = "IAMDatabaseAuthenticationEnabled";
    }
}

shape! {
    /// <p>Contains the details of an Amazon RDS DB instance.</p>
    pub struct DbInstance = "com.amazonaws.rds#DBInstance" {
        /// <p>Contains a user-supplied database identifier. This identifier is the unique key that identifies a
        /// DB instance.</p>
        db_instance_identifier: String = "DBInstanceIdentifier";
        db_instance_class: String = "DBInstanceClass";
        engine: String = "Engine";
        /// <p>Specifies the current state of this database.</p>
        db_instance_status: String = "DBInstanceStatus";
        master_username: String = "MasterUsername";
        db_name: String = "DBName";
        endpoint: Endpoint = "Endpoint";
        allocated_storage: i32 = "AllocatedStorage";
        instance_create_time: Instant = "InstanceCreateTime";
        preferred_backup_window: String = "PreferredBackupWindow";
        backup_retention_period: i32 = "BackupRetentionPeriod";
        db_security_groups: list DbSecurityGroupMembership = "DBSecurityGroups";
        vpc_security_groups: list VpcSecurityGroupMembership = "VpcSecurityGroups";
        db_parameter_groups: list DbParameterGroupStatus = "DBParameterGroups";
        availability_zone: String = "AvailabilityZone";
        db_subnet_group: DbSubnetGroup = "DBSubnetGroup";
        preferred_maintenance_window: String = "PreferredMaintenanceWindow";
        /// <p>Specifies that changes to the DB instance are pending. This element is only included when changes
        /// are pending.</p>
        pending_modified_values: PendingModifiedValues = "PendingModifiedValues";
        latest_restorable_time: Instant = "LatestRestorableTime";
        multi_az: bool = "MultiAZ";
        engine_version: String = "EngineVersion";
        auto_minor_version_upgrade: bool = "AutoMinorVersionUpgrade";
        read_replica_source_db_instance_identifier: String = "ReadReplicaSourceDBInstanceIdentifier";
        read_replica_db_instance_identifiers: list String = "ReadReplicaDBInstanceIdentifiers";
        read_replica_db_cluster_identifiers: list String = "ReadReplicaDBClusterIdentifiers";
        license_model: String = "LicenseModel";
        iops: i32 = "Iops";
        option_group_memberships: list OptionGroupMembership = "OptionGroupMemberships";
        character_set_name: String = "CharacterSetName";
        secondary_availability_zone: String = "SecondaryAvailabilityZone";
        publicly_accessible: bool = "PubliclyAccessible";
        /// <p>The status of a read replica. If the instance isn't a read replica, this is blank.</p>
        status_infos: list DbInstanceStatusInfo = "StatusInfos";
        storage_type: String = "StorageType";
        tde_credential_arn: String = "TdeCredentialArn";
        db_instance_port: i32 = "DbInstancePort";
        db_cluster_identifier: String = "DBClusterIdentifier";
        storage_encrypted: bool = "StorageEncrypted";
        kms_key_id: String = "KmsKeyId";
        dbi_resource_id: String = "DbiResourceId";
        ca_certificate_identifier: String = "CACertificateIdentifier";
        domain_memberships: list DomainMembership = "DomainMemberships";
        copy_tags_to_snapshot: bool = "CopyTagsToSnapshot";
        monitoring_interval: i32 = "MonitoringInterval";
        enhanced_monitoring_resource_arn: String = "EnhancedMonitoringResourceArn";
        monitoring_role_arn: String = "MonitoringRoleArn";
        promotion_tier: i32 = "PromotionTier";
        db_instance_arn: String = "DBInstanceArn";
        timezone: String = "Timezone";
        iam_database_authentication_enabled: bool = "IAMDatabaseAuthenticationEnabled";
        performance_insights_enabled: bool = "PerformanceInsightsEnabled";
        performance_insights_kms_key_id: String = "PerformanceInsightsKMSKeyId";
        performance_insights_retention_period: i32 = "PerformanceInsightsRetentionPeriod";
        enabled_cloudwatch_logs_exports: list String = "EnabledCloudwatchLogsExports";
        processor_features: list ProcessorFeature = "ProcessorFeatures";
        deletion_protection: bool = "DeletionProtection";
        associated_roles: list DbInstanceRole = "AssociatedRoles";
        listener_endpoint: Endpoint = "ListenerEndpoint";
        /// <p>The upper limit to which Amazon RDS can automatically scale the storage of the DB instance.</p>
        max_allocated_storage: i32 = "MaxAllocatedStorage";
    }
}

shape! {
    /// <p>Contains the details of an Amazon RDS DB snapshot.</p>
    pub struct DbSnapshot = "com.amazonaws.rds#DBSnapshot" {
        db_snapshot_identifier: String = "DBSnapshotIdentifier";
        db_instance_identifier: String = "DBInstanceIdentifier";
        snapshot_create_time: Instant = "SnapshotCreateTime";
        engine: String = "Engine";
        allocated_storage: i32 = "AllocatedStorage";
        status: String = "Status";
        port: i32 = "Port";
        availability_zone: String = "AvailabilityZone";
        vpc_id: String = "VpcId";
        instance_create_time: Instant = "InstanceCreateTime";
        master_username: String = "MasterUsername";
        engine_version: String = "EngineVersion";
        license_model: String = "LicenseModel";
        snapshot_type: String = "SnapshotType";
        iops: i32 = "Iops";
        option_group_name: String = "OptionGroupName";
        percent_progress: i32 = "PercentProgress";
        /// <p>The AWS Region that the DB snapshot was created in or copied from.</p>
        source_region: String = "SourceRegion";
        source_db_snapshot_identifier: String = "SourceDBSnapshotIdentifier";
        storage_type: String = "StorageType";
        tde_credential_arn: String = "TdeCredentialArn";
        encrypted: bool = "Encrypted";
        kms_key_id: String = "KmsKeyId";
        db_snapshot_arn: String = "DBSnapshotArn";
        timezone: String = "Timezone";
        iam_database_authentication_enabled: bool = "IAMDatabaseAuthenticationEnabled";
        processor_features: list ProcessorFeature = "ProcessorFeatures";
        dbi_resource_id: String = "DbiResourceId";
    }
}

shape! {
    /// <p>Contains the name and values of a manual DB snapshot attribute.</p>
    pub struct DbSnapshotAttribute = "com.amazonaws.rds#DBSnapshotAttribute" {
        /// <p>The name of the manual DB snapshot attribute. The attribute named <code>restore</code> refers to
        /// the list of AWS accounts that have permission to copy or restore the manual DB snapshot.</p>
        attribute_name: String = "AttributeName";
        /// <p>The value or values for the manual DB snapshot attribute.</p>
        attribute_values: list String = "AttributeValues";
    }
}

shape! {
    /// <p>Contains the results of a successful call to the <code>DescribeDBSnapshotAttributes</code> API action.</p>
    pub struct DbSnapshotAttributesResult = "com.amazonaws.rds#DBSnapshotAttributesResult" {
        db_snapshot_identifier: String = "DBSnapshotIdentifier";
        db_snapshot_attributes: list DbSnapshotAttribute = "DBSnapshotAttributes";
    }
}

shape! {
    /// <p>Contains a list of available options for a DB instance.</p>
    pub struct OrderableDbInstanceOption = "com.amazonaws.rds#OrderableDBInstanceOption" {
        engine: String = "Engine";
        engine_version: String = "EngineVersion";
        db_instance_class: String = "DBInstanceClass";
        license_model: String = "LicenseModel";
        availability_zone_group: String = "AvailabilityZoneGroup";
        availability_zones: list AvailabilityZone = "AvailabilityZones";
        multi_az_capable: bool = "MultiAZCapable";
        read_replica_capable: bool = "ReadReplicaCapable";
        /// <p>Indicates whether a DB instance is in a VPC.</p>
        vpc: bool = "Vpc";
        supports_storage_encryption: bool = "SupportsStorageEncryption";
        storage_type: String = "StorageType";
        supports_iops: bool = "SupportsIops";
        supports_enhanced_monitoring: bool = "SupportsEnhancedMonitoring";
        supports_iam_database_authentication: bool = "SupportsIAMDatabaseAuthentication";
        supports_performance_insights: bool = "SupportsPerformanceInsights";
        min_storage_size: i32 = "MinStorageSize";
        max_storage_size: i32 = "MaxStorageSize";
        min_iops_per_db_instance: i32 = "MinIopsPerDbInstance";
        max_iops_per_db_instance: i32 = "MaxIopsPerDbInstance";
        min_iops_per_gib: f64 = "MinIopsPerGib";
        max_iops_per_gib: f64 = "MaxIopsPerGib";
        available_processor_features: list AvailableProcessorFeature = "AvailableProcessorFeatures";
        supported_engine_modes: list String = "SupportedEngineModes";
        supports_storage_autoscaling: bool = "SupportsStorageAutoscaling";
        supports_kerberos_authentication: bool = "SupportsKerberosAuthentication";
        outpost_capable: bool = "OutpostCapable";
        supports_global_databases: bool = "SupportsGlobalDatabases";
    }
}

shape! {
    /// <p>A time zone associated with a <code>DBInstance</code> or a <code>DBSnapshot</code>.</p>
    pub struct Timezone = "com.amazonaws.rds#Timezone" {
        /// <p>The name of the time zone.</p>
        timezone_name: String = "TimezoneName";
    }
}

shape! {
    /// <p>This data type is used as a response element in the action <code>DescribeDBEngineVersions</code>.</p>
    pub struct CharacterSet = "com.amazonaws.rds#CharacterSet" {
        character_set_name: String = "CharacterSetName";
        character_set_description: String = "CharacterSetDescription";
    }
}

shape! {
    /// <p>The version of the database engine that a DB instance can be upgraded to.</p>
    pub struct UpgradeTarget = "com.amazonaws.rds#UpgradeTarget" {
        engine: String = "Engine";
        engine_version: String = "EngineVersion";
        description: String = "Description";
        auto_upgrade: bool = "AutoUpgrade";
        is_major_version_upgrade: bool = "IsMajorVersionUpgrade";
    }
}

shape! {
    /// <p>This data type is used as a response element in the action <code>DescribeDBEngineVersions</code>.</p>
    pub struct DbEngineVersion = "com.amazonaws.rds#DBEngineVersion" {
        engine: String = "Engine";
        engine_version: String = "EngineVersion";
        db_parameter_group_family: String = "DBParameterGroupFamily";
        db_engine_description: String = "DBEngineDescription";
        db_engine_version_description: String = "DBEngineVersionDescription";
        /// <p>The default character set for new instances of this engine version, if the
        /// <code>CharacterSetName</code> parameter of the CreateDBInstance API isn't specified.</p>
        default_character_set: CharacterSet = "DefaultCharacterSet";
        supported_character_sets: list CharacterSet = "SupportedCharacterSets";
        valid_upgrade_target: list UpgradeTarget = "ValidUpgradeTarget";
        supported_timezones: list Timezone = "SupportedTimezones";
        exportable_log_types: list String = "ExportableLogTypes";
        supports_log_exports_to_cloudwatch_logs: bool = "SupportsLogExportsToCloudwatchLogs";
        supports_read_replica: bool = "SupportsReadReplica";
        supported_engine_modes: list String = "SupportedEngineModes";
        supported_feature_names: list String = "SupportedFeatureNames";
        status: String = "Status";
    }
}

shape! {
    /// <p>A range of integer values.</p>
    pub struct Range = "com.amazonaws.rds#Range" {
        /// <p>The minimum value in the range.</p>
        from: i32 = "From";
        /// <p>The maximum value in the range.</p>
        to: i32 = "To";
        /// <p>The step value for the range. For example, if you have a range of 5,000 to 10,000, with a step value
        /// of 1,000, the valid values start at 5,000 and step up by 1,000.</p>
        step: i32 = "Step";
    }
}

shape! {
    /// <p>A range of double values.</p>
    pub struct DoubleRange = "com.amazonaws.rds#DoubleRange" {
        /// <p>The minimum value in the range.</p>
        from: f64 = "From";
        /// <p>The maximum value in the range.</p>
        to: f64 = "To";
    }
}

shape! {
    /// <p>Information about valid modifications that you can make to your DB instance.</p>
    pub struct ValidStorageOptions = "com.amazonaws.rds#ValidStorageOptions" {
        storage_type: String = "StorageType";
        /// <p>The valid range of storage in gibibytes.</p>
        storage_size: list Range = "StorageSize";
        /// <p>The valid range of provisioned IOPS.</p>
        provisioned_iops: list Range = "ProvisionedIops";
        /// <p>The valid range of Provisioned IOPS to gibibytes of storage multiplier.</p>
        iops_to_storage_ratio: list DoubleRange = "IopsToStorageRatio";
        supports_storage_autoscaling: bool = "SupportsStorageAutoscaling";
    }
}

shape! {
    /// <p>Information about valid modifications that you can make to your DB instance. Contains the result of a
    /// successful call to the <code>DescribeValidDBInstanceModifications</code> action.</p>
    pub struct ValidDbInstanceModificationsMessage = "com.amazonaws.rds#ValidDBInstanceModificationsMessage" {
        storage: list ValidStorageOptions = "Storage";
        valid_processor_features: list AvailableProcessorFeature = "ValidProcessorFeatures";
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use smithy_types::schema::{ShapeType, StructureShape};

    #[test]
    fn double_range_with_only_from() {
        let range = DoubleRange::builder().from(1.0).build();
        assert_eq!(range.to_string(), "{From: 1.0,}");
        assert_eq!(range.from(), Some(1.0));
        assert_eq!(range.to(), None);
    }

    #[test]
    fn double_range_with_only_to() {
        let range = DoubleRange::builder().to(2.5).build();
        assert_eq!(range.to_string(), "{To: 2.5}");
    }

    #[test]
    fn nested_shapes_render_inline() {
        let subnet = Subnet::builder()
            .subnet_identifier("subnet-1")
            .subnet_availability_zone(AvailabilityZone::builder().name("us-east-1a").build())
            .build();
        assert_eq!(
            subnet.to_string(),
            "{SubnetIdentifier: subnet-1,SubnetAvailabilityZone: {Name: us-east-1a},}"
        );
        assert_eq!(
            subnet.subnet_availability_zone().and_then(|az| az.name()),
            Some("us-east-1a")
        );
    }

    #[test]
    fn pending_password_is_redacted() {
        let pending = PendingModifiedValues::builder()
            .master_user_password("correct horse")
            .port(5432)
            .build();
        let rendered = pending.to_string();
        assert!(!rendered.contains("correct horse"));
        assert_eq!(
            rendered,
            "{MasterUserPassword: *** Sensitive Data Redacted ***,Port: 5432,}"
        );
        assert!(!format!("{:?}", pending).contains("correct horse"));
        assert_eq!(pending.master_user_password(), Some("correct horse"));
    }

    #[test]
    fn schema_uses_wire_names() {
        let schema = DbCluster::schema();
        assert_eq!(schema.shape_id().as_str(), "com.amazonaws.rds#DBCluster");
        assert_eq!(schema.members().len(), 54);
        let first = &schema.members()[0];
        assert_eq!((first.name, first.field), ("AllocatedStorage", "allocated_storage"));
        assert_eq!(
            schema.member("IAMDatabaseAuthenticationEnabled").map(|m| m.target),
            Some(ShapeType::Boolean)
        );
        assert_eq!(
            schema.member("backtrack_window").map(|m| m.target),
            Some(ShapeType::Long)
        );
        assert_eq!(
            schema.member("ClusterCreateTime").map(|m| m.target),
            Some(ShapeType::Timestamp)
        );
        assert!(PendingModifiedValues::schema()
            .member("MasterUserPassword")
            .map_or(false, |m| m.sensitive));
    }

    #[test]
    fn filter_values_accumulate() {
        let filter = Filter::builder()
            .name("engine")
            .values("mysql")
            .extend_values(["postgres", "aurora"])
            .build();
        assert_eq!(
            filter.values(),
            Some(&["mysql".to_owned(), "postgres".to_owned(), "aurora".to_owned()][..])
        );
        assert_eq!(filter.to_string(), "{Name: engine,Values: [mysql, postgres, aurora]}");
    }

    #[test]
    fn timestamps_render_as_rfc3339() {
        let snapshot = DbClusterSnapshot::builder()
            .snapshot_create_time(Instant::from_epoch_seconds(1_576_540_098))
            .build();
        assert_eq!(
            snapshot.to_string(),
            "{SnapshotCreateTime: 2019-12-16T23:48:18Z,}"
        );
    }
}

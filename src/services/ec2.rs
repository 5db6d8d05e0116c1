use crate::catalog::service;

service! {
    /// Statement provider for service [ec2](https://docs.aws.amazon.com/IAM/latest/UserGuide/list_amazonec2.html).
    ///
    /// Covers instances, EBS volumes and snapshots, and the VPC networking resources instances are launched into.
    /// Snapshots and images are regional but carry no account in their ARN.
    pub struct Ec2;
    prefix: "ec2",
    name: "Amazon EC2",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_amazonec2.html",
    actions: {
        attach_volume => "AttachVolume" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_AttachVolume.html",
            description: "Grants permission to attach an EBS volume to a running or stopped instance and expose it to the instance with the specified device name",
            resources: [
                ("instance", true, [
                    "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile", "ec2:InstanceType",
                    "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
                ]),
                ("volume", true, [
                    "ec2:AvailabilityZone", "ec2:Encrypted", "ec2:ParentSnapshot", "ec2:Region",
                    "ec2:ResourceTag/${TagKey}", "ec2:VolumeIops", "ec2:VolumeSize", "ec2:VolumeType",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        authorize_security_group_ingress => "AuthorizeSecurityGroupIngress" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_AuthorizeSecurityGroupIngress.html",
            description: "Grants permission to add one or more inbound rules to a VPC security group",
            resources: [("security-group", true, ["ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Vpc"])],
            conditions: [],
            dependent: [],
        }
        create_key_pair => "CreateKeyPair" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateKeyPair.html",
            description: "Grants permission to create a 2048-bit RSA key pair",
            resources: [("key-pair", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        create_security_group => "CreateSecurityGroup" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateSecurityGroup.html",
            description: "Grants permission to create a security group",
            resources: [
                ("security-group", true, []),
                ("vpc", true, ["ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Tenancy"]),
            ],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        create_snapshot => "CreateSnapshot" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateSnapshot.html",
            description: "Grants permission to create a snapshot of an EBS volume and store it in Amazon S3",
            resources: [
                ("snapshot", true, []),
                ("volume", true, [
                    "ec2:AvailabilityZone", "ec2:Encrypted", "ec2:ParentSnapshot", "ec2:Region",
                    "ec2:ResourceTag/${TagKey}", "ec2:VolumeIops", "ec2:VolumeSize", "ec2:VolumeType",
                ]),
            ],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        create_subnet => "CreateSubnet" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateSubnet.html",
            description: "Grants permission to create a subnet in a VPC",
            resources: [
                ("subnet", true, []),
                ("vpc", true, ["ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Tenancy"]),
            ],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        create_tags => "CreateTags" [Tagging] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateTags.html",
            description: "Grants permission to add or overwrite one or more tags for Amazon EC2 resources",
            resources: [
                ("instance", false, []),
                ("security-group", false, []),
                ("snapshot", false, []),
                ("subnet", false, []),
                ("volume", false, []),
                ("vpc", false, []),
            ],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys", "ec2:CreateAction"],
            dependent: [],
        }
        create_volume => "CreateVolume" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateVolume.html",
            description: "Grants permission to create an EBS volume",
            resources: [("volume", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        create_vpc => "CreateVpc" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_CreateVpc.html",
            description: "Grants permission to create a VPC with a specified CIDR block",
            resources: [("vpc", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        delete_key_pair => "DeleteKeyPair" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DeleteKeyPair.html",
            description: "Grants permission to delete a key pair by removing the public key from Amazon EC2",
            resources: [("key-pair", true, ["ec2:Region", "ec2:ResourceTag/${TagKey}"])],
            conditions: [],
            dependent: [],
        }
        delete_security_group => "DeleteSecurityGroup" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DeleteSecurityGroup.html",
            description: "Grants permission to delete a security group",
            resources: [("security-group", true, ["ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Vpc"])],
            conditions: [],
            dependent: [],
        }
        delete_snapshot => "DeleteSnapshot" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DeleteSnapshot.html",
            description: "Grants permission to delete an EBS snapshot",
            resources: [
                ("snapshot", true, [
                    "ec2:ParentVolume", "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:SnapshotTime",
                    "ec2:VolumeSize",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        delete_subnet => "DeleteSubnet" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DeleteSubnet.html",
            description: "Grants permission to delete a subnet",
            resources: [
                ("subnet", true, ["ec2:AvailabilityZone", "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Vpc"]),
            ],
            conditions: [],
            dependent: [],
        }
        delete_tags => "DeleteTags" [Tagging] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DeleteTags.html",
            description: "Grants permission to delete one or more tags from Amazon EC2 resources",
            resources: [
                ("instance", false, []),
                ("security-group", false, []),
                ("snapshot", false, []),
                ("subnet", false, []),
                ("volume", false, []),
                ("vpc", false, []),
            ],
            conditions: ["aws:TagKeys"],
            dependent: [],
        }
        delete_volume => "DeleteVolume" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DeleteVolume.html",
            description: "Grants permission to delete an EBS volume",
            resources: [
                ("volume", true, [
                    "ec2:AvailabilityZone", "ec2:Encrypted", "ec2:ParentSnapshot", "ec2:Region",
                    "ec2:ResourceTag/${TagKey}", "ec2:VolumeIops", "ec2:VolumeSize", "ec2:VolumeType",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        delete_vpc => "DeleteVpc" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DeleteVpc.html",
            description: "Grants permission to delete a VPC",
            resources: [("vpc", true, ["ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Tenancy"])],
            conditions: [],
            dependent: [],
        }
        describe_images => "DescribeImages" [List] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeImages.html",
            description: "Grants permission to describe one or more images (AMIs, AKIs, and ARIs)",
            resources: [],
            conditions: [],
            dependent: [],
        }
        describe_instances => "DescribeInstances" [List] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeInstances.html",
            description: "Grants permission to describe one or more instances",
            resources: [],
            conditions: [],
            dependent: [],
        }
        describe_security_groups => "DescribeSecurityGroups" [List] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeSecurityGroups.html",
            description: "Grants permission to describe one or more security groups",
            resources: [],
            conditions: [],
            dependent: [],
        }
        describe_snapshots => "DescribeSnapshots" [List] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeSnapshots.html",
            description: "Grants permission to describe one or more EBS snapshots",
            resources: [],
            conditions: [],
            dependent: [],
        }
        describe_subnets => "DescribeSubnets" [List] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeSubnets.html",
            description: "Grants permission to describe one or more subnets",
            resources: [],
            conditions: [],
            dependent: [],
        }
        describe_volumes => "DescribeVolumes" [List] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeVolumes.html",
            description: "Grants permission to describe one or more EBS volumes",
            resources: [],
            conditions: [],
            dependent: [],
        }
        describe_vpcs => "DescribeVpcs" [List] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DescribeVpcs.html",
            description: "Grants permission to describe one or more VPCs",
            resources: [],
            conditions: [],
            dependent: [],
        }
        detach_volume => "DetachVolume" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_DetachVolume.html",
            description: "Grants permission to detach an EBS volume from an instance",
            resources: [
                ("instance", true, [
                    "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile", "ec2:InstanceType",
                    "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
                ]),
                ("volume", true, [
                    "ec2:AvailabilityZone", "ec2:Encrypted", "ec2:ParentSnapshot", "ec2:Region",
                    "ec2:ResourceTag/${TagKey}", "ec2:VolumeIops", "ec2:VolumeSize", "ec2:VolumeType",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        get_console_output => "GetConsoleOutput" [Read] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_GetConsoleOutput.html",
            description: "Grants permission to get the console output for an instance",
            resources: [
                ("instance", true, [
                    "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile", "ec2:InstanceType",
                    "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        modify_instance_attribute => "ModifyInstanceAttribute" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ModifyInstanceAttribute.html",
            description: "Grants permission to modify an attribute of an instance",
            resources: [
                ("instance", true, [
                    "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile", "ec2:InstanceType",
                    "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
                ]),
                ("security-group", false, ["ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Vpc"]),
                ("volume", false, [
                    "ec2:AvailabilityZone", "ec2:Encrypted", "ec2:ParentSnapshot", "ec2:Region",
                    "ec2:ResourceTag/${TagKey}", "ec2:VolumeIops", "ec2:VolumeSize", "ec2:VolumeType",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        modify_snapshot_attribute => "ModifySnapshotAttribute" [PermissionsManagement] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_ModifySnapshotAttribute.html",
            description: "Grants permission to add or remove permission settings for a snapshot",
            resources: [
                ("snapshot", true, [
                    "ec2:ParentVolume", "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:SnapshotTime",
                    "ec2:VolumeSize",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        reboot_instances => "RebootInstances" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_RebootInstances.html",
            description: "Grants permission to request a reboot of one or more instances",
            resources: [
                ("instance", true, [
                    "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile", "ec2:InstanceType",
                    "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        run_instances => "RunInstances" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_RunInstances.html",
            description: "Grants permission to launch one or more instances",
            resources: [
                ("image", true, ["ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType"]),
                ("instance", true, [
                    "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile", "ec2:InstanceType",
                    "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
                ]),
                ("network-interface", true, [
                    "ec2:AvailabilityZone", "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Subnet", "ec2:Vpc",
                ]),
                ("security-group", true, ["ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Vpc"]),
                ("subnet", true, ["ec2:AvailabilityZone", "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Vpc"]),
                ("volume", true, [
                    "ec2:AvailabilityZone", "ec2:Encrypted", "ec2:ParentSnapshot", "ec2:Region",
                    "ec2:ResourceTag/${TagKey}", "ec2:VolumeIops", "ec2:VolumeSize", "ec2:VolumeType",
                ]),
                ("key-pair", false, ["ec2:Region", "ec2:ResourceTag/${TagKey}"]),
            ],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        start_instances => "StartInstances" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_StartInstances.html",
            description: "Grants permission to start a stopped instance",
            resources: [
                ("instance", true, [
                    "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile", "ec2:InstanceType",
                    "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        stop_instances => "StopInstances" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_StopInstances.html",
            description: "Grants permission to stop an Amazon EBS-backed instance",
            resources: [
                ("instance", true, [
                    "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile", "ec2:InstanceType",
                    "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
        terminate_instances => "TerminateInstances" [Write] {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/APIReference/API_TerminateInstances.html",
            description: "Grants permission to shut down one or more instances",
            resources: [
                ("instance", true, [
                    "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile", "ec2:InstanceType",
                    "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
                ]),
            ],
            conditions: [],
            dependent: [],
        }
    },
    resources: {
        on_image => "image" {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/AMIs.html",
            arn: "arn:${Partition}:ec2:${Region}::image/${ImageId}",
            params: (image_id: "ImageId"),
            segments: (region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}", "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType"],
        }
        on_instance => "instance" {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/Instances.html",
            arn: "arn:${Partition}:ec2:${Region}:${Account}:instance/${InstanceId}",
            params: (instance_id: "InstanceId"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: [
                "aws:ResourceTag/${TagKey}", "ec2:AvailabilityZone", "ec2:EbsOptimized", "ec2:InstanceProfile",
                "ec2:InstanceType", "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:RootDeviceType", "ec2:Tenancy",
            ],
        }
        on_key_pair => "key-pair" {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/ec2-key-pairs.html",
            arn: "arn:${Partition}:ec2:${Region}:${Account}:key-pair/${KeyPairName}",
            params: (key_pair_name: "KeyPairName"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}", "ec2:Region", "ec2:ResourceTag/${TagKey}"],
        }
        on_network_interface => "network-interface" {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/using-eni.html",
            arn: "arn:${Partition}:ec2:${Region}:${Account}:network-interface/${NetworkInterfaceId}",
            params: (network_interface_id: "NetworkInterfaceId"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: [
                "aws:ResourceTag/${TagKey}", "ec2:AvailabilityZone", "ec2:Region", "ec2:ResourceTag/${TagKey}",
                "ec2:Subnet", "ec2:Vpc",
            ],
        }
        on_security_group => "security-group" {
            url: "https://docs.aws.amazon.com/vpc/latest/userguide/VPC_SecurityGroups.html",
            arn: "arn:${Partition}:ec2:${Region}:${Account}:security-group/${SecurityGroupId}",
            params: (security_group_id: "SecurityGroupId"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}", "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Vpc"],
        }
        on_snapshot => "snapshot" {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSSnapshots.html",
            arn: "arn:${Partition}:ec2:${Region}::snapshot/${SnapshotId}",
            params: (snapshot_id: "SnapshotId"),
            segments: (region: REGION, partition: PARTITION),
            conditions: [
                "aws:ResourceTag/${TagKey}", "ec2:ParentVolume", "ec2:Region", "ec2:ResourceTag/${TagKey}",
                "ec2:SnapshotTime", "ec2:VolumeSize",
            ],
        }
        on_subnet => "subnet" {
            url: "https://docs.aws.amazon.com/vpc/latest/userguide/VPC_Subnets.html",
            arn: "arn:${Partition}:ec2:${Region}:${Account}:subnet/${SubnetId}",
            params: (subnet_id: "SubnetId"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: [
                "aws:ResourceTag/${TagKey}", "ec2:AvailabilityZone", "ec2:Region", "ec2:ResourceTag/${TagKey}",
                "ec2:Vpc",
            ],
        }
        on_volume => "volume" {
            url: "https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/EBSVolumes.html",
            arn: "arn:${Partition}:ec2:${Region}:${Account}:volume/${VolumeId}",
            params: (volume_id: "VolumeId"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: [
                "aws:ResourceTag/${TagKey}", "ec2:AvailabilityZone", "ec2:Encrypted", "ec2:ParentSnapshot",
                "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:VolumeIops", "ec2:VolumeSize", "ec2:VolumeType",
            ],
        }
        on_vpc => "vpc" {
            url: "https://docs.aws.amazon.com/vpc/latest/userguide/VPC_Subnets.html",
            arn: "arn:${Partition}:ec2:${Region}:${Account}:vpc/${VpcId}",
            params: (vpc_id: "VpcId"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}", "ec2:Region", "ec2:ResourceTag/${TagKey}", "ec2:Tenancy"],
        }
    },
    conditions: {
        if_availability_zone => "ec2:AvailabilityZone": String {
            "Filters access by the name of an Availability Zone in an AWS Region"
        }
        if_create_action => "ec2:CreateAction": String {
            "Filters access by the name of a resource-creating API action"
        }
        if_ebs_optimized => "ec2:EbsOptimized": Bool {
            "Filters access by whether the instance is enabled for EBS optimization"
        }
        if_encrypted => "ec2:Encrypted": Bool {
            "Filters access by whether the EBS volume is encrypted"
        }
        if_instance_profile => "ec2:InstanceProfile": Arn {
            "Filters access by the ARN of an instance profile"
        }
        if_instance_type => "ec2:InstanceType": String {
            "Filters access by the type of instance"
        }
        if_parent_snapshot => "ec2:ParentSnapshot": Arn {
            "Filters access by the ARN of the parent snapshot"
        }
        if_parent_volume => "ec2:ParentVolume": Arn {
            "Filters access by the ARN of the parent volume from which the snapshot was created"
        }
        if_region => "ec2:Region": String {
            "Filters access by the name of the AWS Region"
        }
        if_resource_tag(tag_key) => "ec2:ResourceTag/${TagKey}": String {
            "Filters access by a tag key and value pair of a resource"
        }
        if_root_device_type => "ec2:RootDeviceType": String {
            "Filters access by the root device type of the instance (ebs or instance-store)"
        }
        if_snapshot_time => "ec2:SnapshotTime": Date {
            "Filters access by the initiation time of a snapshot"
        }
        if_subnet => "ec2:Subnet": Arn {
            "Filters access by the ARN of the subnet"
        }
        if_tenancy => "ec2:Tenancy": String {
            "Filters access by the tenancy of the VPC or instance (default, dedicated, or host)"
        }
        if_volume_iops => "ec2:VolumeIops": Numeric {
            "Filters access by the number of input/output operations per second (IOPS) provisioned for the volume"
        }
        if_volume_size => "ec2:VolumeSize": Numeric {
            "Filters access by the size of the volume, in GiB"
        }
        if_volume_type => "ec2:VolumeType": String {
            "Filters access by the type of volume (gp2, gp3, io1, io2, st1, sc1, or standard)"
        }
        if_vpc => "ec2:Vpc": Arn {
            "Filters access by the ARN of the VPC"
        }
    }
}

#[cfg(test)]
mod tests;

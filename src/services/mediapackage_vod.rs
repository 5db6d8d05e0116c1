use crate::catalog::service;

service! {
    /// Statement provider for service [mediapackage-vod](https://docs.aws.amazon.com/IAM/latest/UserGuide/list_awselementalmediapackagevod.html).
    pub struct MediapackageVod;
    prefix: "mediapackage-vod",
    name: "AWS Elemental MediaPackage VOD",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_awselementalmediapackagevod.html",
    actions: {
        create_asset => "CreateAsset" [Write] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/assets.html#assetspost",
            description: "Grants permission to create an asset in AWS Elemental MediaPackage",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        create_packaging_configuration => "CreatePackagingConfiguration" [Write] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/packaging_configurations.html#packaging_configurationspost",
            description: "Grants permission to create a packaging configuration in AWS Elemental MediaPackage",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        create_packaging_group => "CreatePackagingGroup" [Write] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/packaging_groups.html#packaging_groupspost",
            description: "Grants permission to create a packaging group in AWS Elemental MediaPackage",
            resources: [],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        delete_asset => "DeleteAsset" [Write] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/assets-id.html#assets-iddelete",
            description: "Grants permission to delete an asset in AWS Elemental MediaPackage",
            resources: [("assets", true, [])],
            conditions: [],
            dependent: [],
        }
        delete_packaging_configuration => "DeletePackagingConfiguration" [Write] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/packaging_configurations-id.html#packaging_configurations-iddelete",
            description: "Grants permission to delete a packaging configuration in AWS Elemental MediaPackage",
            resources: [("packaging-configurations", true, [])],
            conditions: [],
            dependent: [],
        }
        delete_packaging_group => "DeletePackagingGroup" [Write] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/packaging_groups-id.html#packaging_groups-iddelete",
            description: "Grants permission to delete a packaging group in AWS Elemental MediaPackage",
            resources: [("packaging-groups", true, [])],
            conditions: [],
            dependent: [],
        }
        describe_asset => "DescribeAsset" [Read] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/assets-id.html#assets-idget",
            description: "Grants permission to view the details of an asset in AWS Elemental MediaPackage",
            resources: [("assets", true, [])],
            conditions: [],
            dependent: [],
        }
        describe_packaging_configuration => "DescribePackagingConfiguration" [Read] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/packaging_configurations-id.html#packaging_configurations-idget",
            description: "Grants permission to view the details of a packaging configuration in AWS Elemental MediaPackage",
            resources: [("packaging-configurations", true, [])],
            conditions: [],
            dependent: [],
        }
        describe_packaging_group => "DescribePackagingGroup" [Read] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/packaging_groups-id.html#packaging_groups-idget",
            description: "Grants permission to view the details of a packaging group in AWS Elemental MediaPackage",
            resources: [("packaging-groups", true, [])],
            conditions: [],
            dependent: [],
        }
        list_assets => "ListAssets" [List] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/assets.html#assetsget",
            description: "Grants permission to view a list of assets in AWS Elemental MediaPackage",
            resources: [],
            conditions: [],
            dependent: [],
        }
        list_packaging_configurations => "ListPackagingConfigurations" [List] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/packaging_configurations.html#packaging_configurationsget",
            description: "Grants permission to view a list of packaging configurations in AWS Elemental MediaPackage",
            resources: [],
            conditions: [],
            dependent: [],
        }
        list_packaging_groups => "ListPackagingGroups" [List] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/packaging_groups.html#packaging_groupsget",
            description: "Grants permission to view a list of packaging groups in AWS Elemental MediaPackage",
            resources: [],
            conditions: [],
            dependent: [],
        }
        list_tags_for_resource => "ListTagsForResource" [Read] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/tags-resource-arn.html#tags-resource-arnget",
            description: "Grants permission to list the tags assigned to a PackagingGroup, PackagingConfiguration, or Asset.",
            resources: [
                ("assets", false, []),
                ("packaging-configurations", false, []),
                ("packaging-groups", false, []),
            ],
            conditions: [],
            dependent: [],
        }
        tag_resource => "TagResource" [Write] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/tags-resource-arn.html#tags-resource-arnpost",
            description: "Grants permission to assign tags to a PackagingGroup, PackagingConfiguration, or Asset.",
            resources: [
                ("assets", false, []),
                ("packaging-configurations", false, []),
                ("packaging-groups", false, []),
            ],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        untag_resource => "UntagResource" [Write] {
            url: "https://docs.aws.amazon.com/mediapackage-vod/latest/apireference/tags-resource-arn.html#tags-resource-arndelete",
            description: "Grants permission to delete tags from a PackagingGroup, PackagingConfiguration, or Asset.",
            resources: [
                ("assets", false, []),
                ("packaging-configurations", false, []),
                ("packaging-groups", false, []),
            ],
            conditions: ["aws:TagKeys"],
            dependent: [],
        }
    },
    resources: {
        on_assets => "assets" {
            url: "https://docs.aws.amazon.com/mediapackage/latest/ug/asset.html",
            arn: "arn:${Partition}:mediapackage-vod:${Region}:${Account}:assets/${AssetIdentifier}",
            params: (asset_identifier: "AssetIdentifier"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}"],
        }
        on_packaging_configurations => "packaging-configurations" {
            url: "https://docs.aws.amazon.com/mediapackage/latest/ug/pkg-cfig.html",
            arn: "arn:${Partition}:mediapackage-vod:${Region}:${Account}:packaging-configurations/${PackagingConfigurationIdentifier}",
            params: (packaging_configuration_identifier: "PackagingConfigurationIdentifier"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}"],
        }
        on_packaging_groups => "packaging-groups" {
            url: "https://docs.aws.amazon.com/mediapackage/latest/ug/pkg-group.html",
            arn: "arn:${Partition}:mediapackage-vod:${Region}:${Account}:packaging-groups/${PackagingGroupIdentifier}",
            params: (packaging_group_identifier: "PackagingGroupIdentifier"),
            segments: (account: ACCOUNT, region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}"],
        }
    },
    conditions: {}
}

#[cfg(test)]
mod tests {
    use {
        super::{MediapackageVod, SERVICE},
        crate::{catalog::AccessLevel, StatementProvider},
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_create_asset() {
        let mut s = MediapackageVod::new(Some("Create"));
        s.create_asset();
        assert_eq!(s.actions(), ["mediapackage-vod:CreateAsset"]);
        assert_eq!(s.sid(), Some("Create"));
        assert!(!s.has_resources());
    }

    #[test_log::test]
    fn test_resource_segments() {
        let mut s = MediapackageVod::default();
        s.describe_asset()
            .on_assets("asset-1", None, None, None)
            .on_packaging_groups("group-1", Some("123456789012"), Some("eu-west-1"), None)
            .on_packaging_configurations("cfg-1", Some(""), Some(""), Some("aws-us-gov"));

        assert_eq!(
            s.resources(),
            [
                "arn:aws:mediapackage-vod:*:*:assets/asset-1",
                "arn:aws:mediapackage-vod:eu-west-1:123456789012:packaging-groups/group-1",
                "arn:aws-us-gov:mediapackage-vod:*:*:packaging-configurations/cfg-1",
            ]
        );
    }

    #[test_log::test]
    fn test_list_actions() {
        let mut s = MediapackageVod::default();
        s.all_list_actions();
        assert_eq!(
            s.actions(),
            [
                "mediapackage-vod:ListAssets",
                "mediapackage-vod:ListPackagingConfigurations",
                "mediapackage-vod:ListPackagingGroups",
            ]
        );
    }

    #[test_log::test]
    fn test_table() {
        assert_eq!(SERVICE.actions().len(), 15);
        assert_eq!(SERVICE.actions_with_access_level(AccessLevel::Tagging).count(), 0);
        assert!(SERVICE.condition_keys().is_empty());

        let untag = SERVICE.action("UntagResource").unwrap();
        assert_eq!(untag.condition_keys(), ["aws:TagKeys"]);
        assert!(untag.resource_types().iter().all(|r| !r.required()));
    }
}

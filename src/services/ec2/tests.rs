use {
    super::{Ec2, SERVICE},
    crate::{catalog::AccessLevel, condop, ConditionType, StatementProvider},
    chrono::{NaiveDate, TimeZone, Utc},
    indoc::indoc,
    pretty_assertions::assert_eq,
};

#[test_log::test]
fn test_create_vpc_chain() {
    let mut s = Ec2::new(Some("Sid1"));
    s.create_vpc()
        .on_vpc("vpc-123", Some("111122223333"), Some("us-east-1"), None)
        .if_resource_tag("Env", "prod", None);

    assert_eq!(s.sid(), Some("Sid1"));
    assert_eq!(s.actions(), ["ec2:CreateVpc"]);
    assert_eq!(s.resources(), ["arn:aws:ec2:us-east-1:111122223333:vpc/vpc-123"]);
    assert_eq!(s.conditions().len(), 1);

    let c = &s.conditions()[0];
    assert_eq!(c.op(), condop::StringLike);
    assert_eq!(c.key(), "ec2:ResourceTag/Env");
    assert_eq!(c.values(), ["prod"]);
}

#[test_log::test]
fn test_default_operators() {
    let mut s = Ec2::default();
    s.if_encrypted(None)
        .if_encrypted(Some(false))
        .if_volume_iops(5000, None)
        .if_region("us-east-1", None)
        .if_vpc("arn:aws:ec2:us-east-1:111122223333:vpc/vpc-123", None)
        .if_volume_size(100u32, Some(condop::NumericLessThanEquals));

    let ops: Vec<_> = s.conditions().iter().map(|c| c.op()).collect();
    assert_eq!(
        ops,
        [
            condop::Bool,
            condop::Bool,
            condop::NumericEquals,
            condop::StringLike,
            condop::ArnEquals,
            condop::NumericLessThanEquals
        ]
    );
    assert_eq!(s.conditions()[0].values(), ["true"]);
    assert_eq!(s.conditions()[1].values(), ["false"]);
    assert_eq!(s.conditions()[2].values(), ["5000"]);
    assert_eq!(s.conditions()[5].values(), ["100"]);
}

#[test_log::test]
fn test_snapshot_time() {
    let mut s = Ec2::default();
    s.if_snapshot_time(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), None)
        .if_snapshot_time(Utc.with_ymd_and_hms(2021, 6, 30, 12, 5, 9).unwrap(), Some(condop::DateGreaterThan))
        .if_snapshot_time("2022-01-01", Some(condop::DateLessThan));

    let c = s.conditions();
    assert_eq!(c[0].op(), condop::DateEquals);
    assert_eq!(c[0].values(), ["2020-01-01T00:00:00Z"]);
    assert_eq!(c[1].values(), ["2021-06-30T12:05:09Z"]);
    assert_eq!(c[2].values(), ["2022-01-01"]);
}

#[test_log::test]
fn test_duplicates_preserved() {
    let mut s = Ec2::default();
    s.create_tags()
        .create_tags()
        .on_instance("i-1", None, None, None)
        .on_instance("i-1", None, None, None)
        .if_instance_type("t3.micro", None)
        .if_instance_type("t3.micro", None);

    assert_eq!(s.actions(), ["ec2:CreateTags", "ec2:CreateTags"]);
    assert_eq!(s.resources(), ["arn:aws:ec2:*:*:instance/i-1", "arn:aws:ec2:*:*:instance/i-1"]);
    assert_eq!(s.conditions().len(), 2);
}

#[test_log::test]
fn test_accountless_resources() {
    let mut s = Ec2::default();
    s.on_snapshot("snap-0123", Some("eu-central-1"), None).on_image("ami-0abc", None, Some("aws-cn"));
    assert_eq!(s.resources(), ["arn:aws:ec2:eu-central-1::snapshot/snap-0123", "arn:aws-cn:ec2:*::image/ami-0abc"]);
}

#[test_log::test]
fn test_access_levels() {
    let mut s = Ec2::default();
    s.all_tagging_actions().all_permission_management_actions();
    assert_eq!(s.actions(), ["ec2:CreateTags", "ec2:DeleteTags", "ec2:ModifySnapshotAttribute"]);

    let mut s = Ec2::default();
    s.all_list_actions();
    assert_eq!(s.actions().len(), 7);
    assert!(s.actions().iter().all(|a| a.starts_with("ec2:Describe")));

    let reads: Vec<_> = SERVICE.actions_with_access_level(AccessLevel::Read).map(|a| a.name()).collect();
    assert_eq!(reads, ["GetConsoleOutput"]);
}

#[test_log::test]
fn test_condition_table() {
    assert_eq!(Ec2::info().condition_key("ec2:VolumeIops").unwrap().value_type(), ConditionType::Numeric);
    assert_eq!(Ec2::info().condition_key("ec2:ResourceTag/Env").unwrap().key(), "ec2:ResourceTag/${TagKey}");
    assert_eq!(Ec2::info().condition_key("ec2:SnapshotTime").unwrap().value_type(), ConditionType::Date);
    assert!(Ec2::info().condition_key("ec2:ResourceTag/").is_none());
    assert!(Ec2::info().condition_key("ec2:Nope").is_none());
}

#[test_log::test]
fn test_run_instances_statement() {
    let mut s = Ec2::new(Some("LaunchEncrypted"));
    s.run_instances()
        .on_instance("*", Some("111122223333"), Some("us-east-1"), None)
        .on_volume("*", Some("111122223333"), Some("us-east-1"), None)
        .on_image("*", Some("us-east-1"), None)
        .if_encrypted(None)
        .if_instance_type(["t3.micro", "t3.small"], Some(condop::StringEquals))
        .if_aws_request_tag("Team", "video", None);

    assert_eq!(
        s.to_string(),
        indoc! { r#"
        {
            "Sid": "LaunchEncrypted",
            "Effect": "Allow",
            "Action": "ec2:RunInstances",
            "Resource": [
                "arn:aws:ec2:us-east-1:111122223333:instance/*",
                "arn:aws:ec2:us-east-1:111122223333:volume/*",
                "arn:aws:ec2:us-east-1::image/*"
            ],
            "Condition": {
                "Bool": {
                    "ec2:Encrypted": "true"
                },
                "StringEquals": {
                    "ec2:InstanceType": [
                        "t3.micro",
                        "t3.small"
                    ]
                },
                "StringLike": {
                    "aws:RequestTag/Team": "video"
                }
            }
        }"# }
    );
}

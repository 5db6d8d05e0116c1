use {
    crate::{
        arn::{ArnDefaults, ArnTemplate, ACCOUNT, PARTITION, REGION},
        catalog::{self, AccessLevel, ConditionKeyInfo},
        services::provider_tests::{action_calls, resource_calls},
        ConditionType, StatementError,
    },
    indoc::indoc,
    pretty_assertions::assert_eq,
    std::collections::BTreeSet,
};

#[test_log::test]
fn test_action_methods_add_one_action() {
    for (info, calls) in action_calls() {
        assert_eq!(calls.len(), info.actions().len(), "{}: methods and table differ in size", info.prefix());

        for (name, added) in calls {
            assert_eq!(added, [format!("{}:{}", info.prefix(), name)]);
            assert!(info.action(name).is_some(), "{}:{} is not in the table", info.prefix(), name);
        }
    }
}

/// `ApiGatewayResourcePath` -> `api_gateway_resource_path`, the form resource method parameters are named in.
fn snake_case(placeholder: &str) -> String {
    let mut result = String::new();
    for (i, c) in placeholder.chars().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

#[test_log::test]
fn test_resource_methods_render_templates() {
    assert_eq!(snake_case("ApiGatewayResourcePath"), "api_gateway_resource_path");

    let segments = [PARTITION, REGION, ACCOUNT];
    for (info, calls) in resource_calls() {
        let names: Vec<_> = calls.iter().filter(|(_, supplied, _)| !supplied).map(|(name, ..)| *name).collect();
        let table: Vec<_> = info.resource_types().iter().map(|rt| rt.name()).collect();
        assert_eq!(names, table, "{}: resource methods and table differ", info.prefix());

        for (name, supplied, added) in calls {
            let template = ArnTemplate::new(info.resource_type(name).unwrap().arn());
            let values: Vec<(&str, String)> = template
                .placeholders()
                .into_iter()
                .filter(|ph| supplied || !segments.contains(ph))
                .map(|ph| (ph, snake_case(ph)))
                .collect();

            let expected = values
                .iter()
                .fold(template, |t, (ph, value)| t.with(ph, value))
                .render(&ArnDefaults::default());
            assert_eq!(added, [expected.clone()], "{}:{}", info.prefix(), name);
            assert!(!expected.contains("${"), "{}", expected);

            let partition = if supplied { "arn:partition:" } else { "arn:aws:" };
            assert!(expected.starts_with(partition), "{}", expected);
        }
    }
}

#[test_log::test]
fn test_action_names_unique() {
    for info in catalog::services() {
        let names: BTreeSet<_> = info.actions().iter().map(|a| a.name()).collect();
        assert_eq!(names.len(), info.actions().len(), "duplicate action in {}", info.prefix());

        let types: BTreeSet<_> = info.resource_types().iter().map(|r| r.name()).collect();
        assert_eq!(types.len(), info.resource_types().len(), "duplicate resource type in {}", info.prefix());
    }
}

#[test_log::test]
fn test_referenced_resource_types_exist() {
    for info in catalog::services() {
        for action in info.actions() {
            for rt in action.resource_types() {
                assert!(
                    info.resource_type(rt.name()).is_some(),
                    "{}:{} references unknown resource type {}",
                    info.prefix(),
                    action.name(),
                    rt.name()
                );
            }
        }
    }
}

#[test_log::test]
fn test_arn_templates() {
    for info in catalog::services() {
        let prefix = format!("arn:${{Partition}}:{}:", info.prefix());
        for rt in info.resource_types() {
            assert!(rt.arn().starts_with(&prefix), "{}", rt.arn());
            assert!(rt.arn().contains("${Region}"), "{}", rt.arn());
        }
    }
}

#[test_log::test]
fn test_service_condition_keys_declared() {
    for info in catalog::services() {
        let own = format!("{}:", info.prefix());
        let on_types = info.resource_types().iter().flat_map(|rt| rt.condition_keys().iter());
        let on_actions = info.actions().iter().flat_map(|a| a.condition_keys().iter());
        let on_action_types =
            info.actions().iter().flat_map(|a| a.resource_types().iter()).flat_map(|r| r.condition_keys().iter());
        let referenced = on_types.chain(on_actions).chain(on_action_types);

        for key in referenced.filter(|k| k.starts_with(&own)) {
            assert!(info.condition_key(key).is_some(), "{} is not declared", key);
        }
    }
}

#[test_log::test]
fn test_registry() {
    let prefixes: Vec<_> = catalog::services().map(|s| s.prefix()).collect();
    assert_eq!(prefixes, ["apigateway", "ec2", "kinesisvideo", "mediapackage-vod"]);

    let kv = catalog::service("kinesisvideo").unwrap();
    assert_eq!(kv.name(), "Amazon Kinesis Video Streams");
    assert_eq!(kv.action("PutMedia").unwrap().access_level(), AccessLevel::Write);

    assert_eq!(catalog::service("s3").unwrap_err(), StatementError::UnknownService("s3".to_string()));
    assert_eq!(catalog::service("s3").unwrap_err().to_string(), "Unknown service prefix: s3");
}

#[test_log::test]
fn test_condition_key_matches() {
    let tag = ConditionKeyInfo {
        key: "ec2:ResourceTag/${TagKey}",
        description: "",
        value_type: ConditionType::String,
    };
    assert!(tag.matches("ec2:ResourceTag/Env"));
    assert!(tag.matches("ec2:ResourceTag/${TagKey}"));
    assert!(!tag.matches("ec2:ResourceTag/"));
    assert!(!tag.matches("ec2:RequestTag/Env"));

    let plain = ConditionKeyInfo {
        key: "ec2:Region",
        description: "",
        value_type: ConditionType::String,
    };
    assert!(plain.matches("ec2:Region"));
    assert!(!plain.matches("ec2:region"));
}

#[test_log::test]
fn test_access_level_display() {
    assert_eq!(AccessLevel::PermissionsManagement.to_string(), "Permissions management");
    assert_eq!(AccessLevel::List.to_string(), "List");
    assert_eq!(serde_json::to_string(&AccessLevel::PermissionsManagement).unwrap(), r#""Permissions management""#);
}

#[test_log::test]
fn test_service_json() {
    let api = catalog::service("apigateway").unwrap();
    let json = api.to_string();
    assert!(json.starts_with(indoc! { r#"
        {
            "prefix": "apigateway",
            "name": "Manage Amazon API Gateway",
            "url": "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_manageamazonapigateway.html",
            "actions": [
                {
                    "name": "DELETE","# }));
    assert!(json.contains(r#""accessLevel": "Write""#));
    assert!(json.contains(r#""arn": "arn:${Partition}:apigateway:${Region}::${ApiGatewayResourcePath}""#));
    assert!(json.ends_with(indoc! { r#"
            "conditionKeys": []
        }"# }));
}

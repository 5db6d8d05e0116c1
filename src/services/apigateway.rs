use crate::catalog::service;

service! {
    /// Statement provider for service [apigateway](https://docs.aws.amazon.com/IAM/latest/UserGuide/list_manageamazonapigateway.html).
    ///
    /// API Gateway controls access with the HTTP verb used against the management API rather than one action per
    /// operation.
    pub struct Apigateway;
    prefix: "apigateway",
    name: "Manage Amazon API Gateway",
    url: "https://docs.aws.amazon.com/IAM/latest/UserGuide/list_manageamazonapigateway.html",
    actions: {
        delete => "DELETE" [Write] {
            url: "https://docs.aws.amazon.com/apigateway/api-reference/API_DELETE.html",
            description: "Used to delete resources",
            resources: [("apigateway-general", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        get => "GET" [Read] {
            url: "https://docs.aws.amazon.com/apigateway/api-reference/API_GET.html",
            description: "Used to get information about resources",
            resources: [("apigateway-general", true, [])],
            conditions: [],
            dependent: [],
        }
        patch => "PATCH" [Write] {
            url: "https://docs.aws.amazon.com/apigateway/api-reference/API_PATCH.html",
            description: "Used to update resources",
            resources: [("apigateway-general", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        post => "POST" [Write] {
            url: "https://docs.aws.amazon.com/apigateway/api-reference/API_POST.html",
            description: "Used to create child resources",
            resources: [("apigateway-general", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        put => "PUT" [Write] {
            url: "https://docs.aws.amazon.com/apigateway/api-reference/API_PUT.html",
            description: "Used to update resources (and, although not recommended, can be used to create child resources)",
            resources: [("apigateway-general", true, [])],
            conditions: ["aws:RequestTag/${TagKey}", "aws:TagKeys"],
            dependent: [],
        }
        set_web_acl => "SetWebACL" [Write] {
            url: "https://docs.aws.amazon.com/apigateway/api-reference/WEBACL_SET.html",
            description: "Gives WebAcl permissions to WAF",
            resources: [("apigateway-general", true, [])],
            conditions: [],
            dependent: [],
        }
        update_rest_api_policy => "UpdateRestApiPolicy" [Write] {
            url: "",
            description: "Used to update the Resource Policy for a given API",
            resources: [("apigateway-general", true, [])],
            conditions: [],
            dependent: [],
        }
    },
    resources: {
        on_apigateway_general => "apigateway-general" {
            url: "https://docs.aws.amazon.com/apigateway/latest/developerguide/permissions.html",
            arn: "arn:${Partition}:apigateway:${Region}::${ApiGatewayResourcePath}",
            params: (api_gateway_resource_path: "ApiGatewayResourcePath"),
            segments: (region: REGION, partition: PARTITION),
            conditions: ["aws:ResourceTag/${TagKey}"],
        }
    },
    conditions: {}
}

#[cfg(test)]
mod tests {
    use {
        super::Apigateway,
        crate::{condop, StatementProvider},
        indoc::indoc,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_verbs() {
        let mut s = Apigateway::new(Some("ApiAdmin"));
        s.get().post().put().patch().delete();
        assert_eq!(
            s.actions(),
            ["apigateway:GET", "apigateway:POST", "apigateway:PUT", "apigateway:PATCH", "apigateway:DELETE"]
        );
    }

    #[test_log::test]
    fn test_general_resource_has_no_account() {
        let mut s = Apigateway::default();
        s.get()
            .on_apigateway_general("/restapis/a1b2c3d4e5", Some("us-east-1"), None)
            .on_apigateway_general("/restapis/*/stages", None, Some("aws-cn"));
        assert_eq!(
            s.resources(),
            ["arn:aws:apigateway:us-east-1::/restapis/a1b2c3d4e5", "arn:aws-cn:apigateway:*::/restapis/*/stages"]
        );
    }

    #[test_log::test]
    fn test_statement_json() {
        let mut s = Apigateway::new(Some("TaggedApis"));
        s.deny()
            .update_rest_api_policy()
            .set_web_acl()
            .on_apigateway_general("/restapis/*", None, None)
            .if_aws_resource_tag("Stage", "prod", Some(condop::StringEquals));

        assert_eq!(
            s.to_string(),
            indoc! { r#"
            {
                "Sid": "TaggedApis",
                "Effect": "Deny",
                "Action": [
                    "apigateway:UpdateRestApiPolicy",
                    "apigateway:SetWebACL"
                ],
                "Resource": "arn:aws:apigateway:*::/restapis/*",
                "Condition": {
                    "StringEquals": {
                        "aws:ResourceTag/Stage": "prod"
                    }
                }
            }"# }
        );
    }
}

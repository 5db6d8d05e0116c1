use {
    crate::{
        serutil::{display_json, StringLikeList},
        ActionList, Condition, Effect, Principal, ResourceList,
    },
    derive_builder::Builder,
    serde::Serialize,
};

/// A single IAM policy statement, as written in a policy document.
#[derive(Builder, Clone, Debug, Eq, PartialEq, Serialize)]
#[builder(build_fn(validate = "Self::validate"))]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    sid: Option<String>,

    effect: Effect,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<ActionList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    not_action: Option<ActionList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<ResourceList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    not_resource: Option<ResourceList>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    principal: Option<Principal>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    not_principal: Option<Principal>,

    #[builder(setter(into, strip_option), default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<Condition>,
}

impl Statement {
    pub fn builder() -> StatementBuilder {
        StatementBuilder::default()
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    #[inline]
    pub fn action(&self) -> Option<&ActionList> {
        self.action.as_ref()
    }

    #[inline]
    pub fn not_action(&self) -> Option<&ActionList> {
        self.not_action.as_ref()
    }

    #[inline]
    pub fn resource(&self) -> Option<&ResourceList> {
        self.resource.as_ref()
    }

    #[inline]
    pub fn not_resource(&self) -> Option<&ResourceList> {
        self.not_resource.as_ref()
    }

    #[inline]
    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    #[inline]
    pub fn not_principal(&self) -> Option<&Principal> {
        self.not_principal.as_ref()
    }

    #[inline]
    pub fn condition(&self) -> Option<&Condition> {
        self.condition.as_ref()
    }
}

display_json!(Statement);

impl StatementBuilder {
    fn validate(&self) -> Result<(), String> {
        let mut errors = Vec::with_capacity(5);
        if self.effect.is_none() {
            errors.push("Effect must be set.");
        }

        match (&self.action, &self.not_action) {
            (Some(_), Some(_)) => errors.push("Action and NotAction cannot both be set."),
            (None, None) => errors.push("Either Action or NotAction must be set."),
            _ => (),
        }

        match (&self.resource, &self.not_resource) {
            (Some(_), Some(_)) => errors.push("Resource and NotResource cannot both be set."),
            (None, None) => errors.push("Either Resource or NotResource must be set."),
            _ => (),
        }

        if let (Some(_), Some(_)) = (&self.principal, &self.not_principal) {
            errors.push("Principal and NotPrincipal cannot both be set.");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.join(" "))
        }
    }
}

pub type StatementList = StringLikeList<Statement>;

#[cfg(test)]
mod tests {
    use {
        crate::{
            condop, Action, AwsPrincipal, Condition, Effect, Principal, Resource, SpecifiedPrincipal, Statement,
            StatementList,
        },
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn test_serialize_minimal() {
        let s = Statement::builder()
            .effect(Effect::Allow)
            .action(Action::from_str("kinesisvideo:GetMedia").unwrap())
            .resource(Resource::Any)
            .build()
            .unwrap();

        assert_eq!(s.sid(), None);
        assert_eq!(s.effect(), &Effect::Allow);
        assert!(s.not_action().is_none());
        assert!(s.condition().is_none());
        assert_eq!(
            s.to_string(),
            indoc! { r#"
            {
                "Effect": "Allow",
                "Action": "kinesisvideo:GetMedia",
                "Resource": "*"
            }"# }
        );
    }

    #[test_log::test]
    fn test_serialize_full() {
        let mut condition = Condition::new();
        condition.insert_values(condop::StringLike, "aws:RequestTag/Team", vec!["media".to_string()]);

        let principal: Principal = SpecifiedPrincipal::builder()
            .aws(AwsPrincipal::from_str("arn:aws:iam::123456789012:root").unwrap())
            .build()
            .unwrap()
            .into();

        let s = Statement::builder()
            .sid("Media1")
            .effect(Effect::Deny)
            .not_action(vec![
                Action::from_str("mediapackage-vod:DeleteAsset").unwrap(),
                Action::from_str("mediapackage-vod:DeletePackagingGroup").unwrap(),
            ])
            .not_resource(Resource::from_str("arn:aws:mediapackage-vod:*:*:assets/*").unwrap())
            .not_principal(principal.clone())
            .condition(condition)
            .build()
            .unwrap();

        assert_eq!(s.sid(), Some("Media1"));
        assert_eq!(s.not_principal(), Some(&principal));
        assert!(s.principal().is_none());
        assert_eq!(
            s.to_string(),
            indoc! { r#"
            {
                "Sid": "Media1",
                "Effect": "Deny",
                "NotAction": [
                    "mediapackage-vod:DeleteAsset",
                    "mediapackage-vod:DeletePackagingGroup"
                ],
                "NotResource": "arn:aws:mediapackage-vod:*:*:assets/*",
                "NotPrincipal": {
                    "AWS": "arn:aws:iam::123456789012:root"
                },
                "Condition": {
                    "StringLike": {
                        "aws:RequestTag/Team": "media"
                    }
                }
            }"# }
        );

        let list: StatementList = vec![s.clone()].into();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0], s);
    }

    #[test_log::test]
    fn test_validation() {
        let e = Statement::builder().build().unwrap_err();
        assert_eq!(
            e.to_string(),
            "Effect must be set. Either Action or NotAction must be set. Either Resource or NotResource must be set."
        );

        let e = Statement::builder()
            .effect(Effect::Allow)
            .action(Action::Any)
            .not_action(Action::Any)
            .resource(Resource::Any)
            .not_resource(Resource::Any)
            .principal(Principal::Any)
            .not_principal(Principal::Any)
            .build()
            .unwrap_err();
        assert_eq!(
            e.to_string(),
            "Action and NotAction cannot both be set. Resource and NotResource cannot both be set. Principal and \
             NotPrincipal cannot both be set."
        );
    }
}

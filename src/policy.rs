use {
    crate::{serutil::display_json, StatementError, StatementList},
    derive_builder::Builder,
    log::debug,
    serde::{
        ser::{SerializeMap, Serializer},
        Serialize,
    },
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Policy versions.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum PolicyVersion {
    /// No `Version` element is written.
    None,
    V2008_10_17,
    #[default]
    V2012_10_17,
}

impl PolicyVersion {
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl Display for PolicyVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::None => Ok(()),
            Self::V2008_10_17 => f.write_str("2008-10-17"),
            Self::V2012_10_17 => f.write_str("2012-10-17"),
        }
    }
}

impl FromStr for PolicyVersion {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2008-10-17" => Ok(Self::V2008_10_17),
            "2012-10-17" => Ok(Self::V2012_10_17),
            _ => {
                debug!("Unknown policy version: {}", s);
                Err(StatementError::InvalidPolicyVersion(s.to_string()))
            }
        }
    }
}

impl Serialize for PolicyVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A policy document holding one or more statements.
///
/// Serialized by hand so the `Version` element can be left out.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct Policy {
    /// The policy language version. Defaults to `2012-10-17`, which is required for policy variables such as
    /// `${aws:username}` in resource ARNs.
    #[builder(setter(into), default)]
    version: PolicyVersion,

    /// An optional identifier for the policy.
    #[builder(setter(into, strip_option), default)]
    id: Option<String>,

    /// The statements. A single statement is written as a bare object.
    #[builder(setter(into))]
    statement: StatementList,
}

impl Policy {
    #[inline]
    pub fn builder() -> PolicyBuilder {
        PolicyBuilder::default()
    }

    #[inline]
    pub fn version(&self) -> PolicyVersion {
        self.version
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn statement(&self) -> &StatementList {
        &self.statement
    }
}

display_json!(Policy);

impl Serialize for Policy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(None)?;
        if self.version.is_some() {
            state.serialize_entry("Version", &self.version)?;
        }
        if let Some(id) = &self.id {
            state.serialize_entry("Id", id)?;
        }
        state.serialize_entry("Statement", &self.statement)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{Action, Effect, Policy, PolicyVersion, Resource, Statement, StatementError},
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    fn read_only() -> Statement {
        Statement::builder()
            .effect(Effect::Allow)
            .action(vec![
                Action::from_str("kinesisvideo:Describe*").unwrap(),
                Action::from_str("kinesisvideo:List*").unwrap(),
            ])
            .resource(Resource::Any)
            .build()
            .unwrap()
    }

    #[test_log::test]
    fn test_policy_version() {
        assert_eq!(PolicyVersion::default(), PolicyVersion::V2012_10_17);
        assert_eq!(PolicyVersion::from_str("2008-10-17").unwrap(), PolicyVersion::V2008_10_17);
        assert_eq!(PolicyVersion::from_str("2012-10-17").unwrap().to_string(), "2012-10-17");
        assert!(PolicyVersion::None.is_none());
        assert_eq!(PolicyVersion::None.to_string(), "");
        assert_eq!(
            PolicyVersion::from_str("2020-01-01").unwrap_err(),
            StatementError::InvalidPolicyVersion("2020-01-01".to_string())
        );
    }

    #[test_log::test]
    fn test_builder() {
        let policy = Policy::builder().id("ReadOnly").statement(read_only()).build().unwrap();
        assert_eq!(policy.version(), PolicyVersion::V2012_10_17);
        assert_eq!(policy.id(), Some("ReadOnly"));
        assert_eq!(policy.statement().len(), 1);
        assert_eq!(
            policy.to_string(),
            indoc! { r#"
            {
                "Version": "2012-10-17",
                "Id": "ReadOnly",
                "Statement": {
                    "Effect": "Allow",
                    "Action": [
                        "kinesisvideo:Describe*",
                        "kinesisvideo:List*"
                    ],
                    "Resource": "*"
                }
            }"# }
        );

        let e = Policy::builder().build().unwrap_err();
        assert_eq!(e.to_string(), "`statement` must be initialized");
    }

    #[test_log::test]
    fn test_no_version() {
        let policy =
            Policy::builder().version(PolicyVersion::None).statement(vec![read_only(), read_only()]).build().unwrap();
        let json = policy.to_string();
        assert!(!json.contains("Version"));
        assert!(json.starts_with("{\n    \"Statement\": [\n"));
    }
}

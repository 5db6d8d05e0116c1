use {
    crate::{serutil::StringLikeList, StatementError},
    log::debug,
    serde::{ser::Serializer, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

pub type ResourceList = StringLikeList<Resource>;

/// A resource element in an IAM statement: either `*` or an ARN (which may itself contain wildcards).
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Resource {
    Any,
    Arn(String),
}

impl Resource {
    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }
}

impl FromStr for Resource {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "*" {
            return Ok(Self::Any);
        }

        let mut parts = s.splitn(6, ':');
        if parts.next() != Some("arn") || parts.count() != 5 {
            debug!("Failed to parse resource as ARN: {}", s);
            return Err(StatementError::InvalidResource(s.to_string()));
        }

        Ok(Self::Arn(s.to_string()))
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Any => f.write_str("*"),
            Self::Arn(arn) => f.write_str(arn),
        }
    }
}

impl Serialize for Resource {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{serutil::ListKind, Resource, ResourceList},
        indoc::indoc,
        pretty_assertions::assert_eq,
        std::str::FromStr,
    };

    #[test_log::test]
    fn check_from() {
        let arn = "arn:aws:kinesisvideo:*:*:stream/myStream/*".to_string();
        let rl1: ResourceList = Resource::Arn(arn.clone()).into();
        let rl2: ResourceList = vec![Resource::Arn(arn.clone())].into();

        assert_eq!(rl1, rl2);
        assert_eq!(rl1.kind(), ListKind::Single);
        assert_eq!(rl2.kind(), ListKind::List);
        assert_eq!(rl1[0], Resource::Arn(arn));

        assert_eq!(format!("{}", rl1), r#""arn:aws:kinesisvideo:*:*:stream/myStream/*""#);
        assert_eq!(
            format!("{}", rl2),
            indoc! { r#"
            [
                "arn:aws:kinesisvideo:*:*:stream/myStream/*"
            ]"# }
        );
    }

    #[test_log::test]
    fn check_parse() {
        assert_eq!(Resource::from_str("*").unwrap(), Resource::Any);
        assert!(Resource::from_str("*").unwrap().is_any());

        // API Gateway resources leave the account empty and carry colons in the resource path.
        let r = Resource::from_str("arn:aws:apigateway:*::/restapis/a1b2:c3").unwrap();
        assert_eq!(r.to_string(), "arn:aws:apigateway:*::/restapis/a1b2:c3");
        assert!(!r.is_any());
    }

    #[test_log::test]
    fn check_bad() {
        for bad in ["arn:aws", "foo-bar-baz", "https:aws:ec2:us-east-1:123456789012:instance/i-1"] {
            assert_eq!(Resource::from_str(bad).unwrap_err().to_string(), format!("Invalid resource: {}", bad));
        }
    }
}

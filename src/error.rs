use {
    crate::StatementBuilderError,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

#[derive(Debug, Eq, PartialEq)]
pub enum StatementError {
    InvalidAction(String),
    InvalidConditionOperator(String),
    InvalidPattern(String),
    InvalidPolicyVersion(String),
    InvalidPrincipal(String),
    InvalidResource(String),
    MissingAction,
    UnknownService(String),
    Validation(String),
}

impl Display for StatementError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::InvalidAction(action) => write!(f, "Invalid action: {}", action),
            Self::InvalidConditionOperator(operator) => write!(f, "Invalid condition operator: {}", operator),
            Self::InvalidPattern(pattern) => write!(f, "Invalid action pattern: {}", pattern),
            Self::InvalidPolicyVersion(version) => write!(f, "Invalid policy version: {}", version),
            Self::InvalidPrincipal(principal) => write!(f, "Invalid principal: {}", principal),
            Self::InvalidResource(resource) => write!(f, "Invalid resource: {}", resource),
            Self::MissingAction => f.write_str("Statement has no actions"),
            Self::UnknownService(prefix) => write!(f, "Unknown service prefix: {}", prefix),
            Self::Validation(msg) => f.write_str(msg),
        }
    }
}

impl Error for StatementError {}

impl From<StatementBuilderError> for StatementError {
    fn from(e: StatementBuilderError) -> Self {
        Self::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::{Statement, StatementError},
        pretty_assertions::{assert_eq, assert_ne},
    };

    #[test_log::test]
    fn test_display() {
        let _ = format!("{:?}", StatementError::InvalidAction("foo".to_string()));
        assert_eq!(StatementError::InvalidAction("foo".to_string()).to_string(), "Invalid action: foo");
        assert_eq!(
            StatementError::InvalidConditionOperator("Foo".to_string()).to_string(),
            "Invalid condition operator: Foo"
        );
        assert_eq!(StatementError::InvalidPattern("(".to_string()).to_string(), "Invalid action pattern: (");
        assert_eq!(StatementError::InvalidPolicyVersion("1".to_string()).to_string(), "Invalid policy version: 1");
        assert_eq!(StatementError::InvalidPrincipal("foo".to_string()).to_string(), "Invalid principal: foo");
        assert_eq!(StatementError::InvalidResource("foo".to_string()).to_string(), "Invalid resource: foo");
        assert_eq!(StatementError::MissingAction.to_string(), "Statement has no actions");
        assert_eq!(StatementError::UnknownService("xyz".to_string()).to_string(), "Unknown service prefix: xyz");
        assert_eq!(StatementError::Validation("Effect must be set.".to_string()).to_string(), "Effect must be set.");
    }

    #[test_log::test]
    fn test_from_builder_error() {
        let e: StatementError = Statement::builder().build().unwrap_err().into();
        assert!(matches!(e, StatementError::Validation(ref msg) if msg.starts_with("Effect must be set.")));
    }

    #[test_log::test]
    fn test_eq() {
        let e1a = StatementError::InvalidAction("foo".to_string());
        let e1b = StatementError::InvalidAction("foo".to_string());
        let e2 = StatementError::InvalidResource("foo".to_string());
        let e3 = StatementError::InvalidAction("bar".to_string());

        assert_eq!(e1a, e1b);
        assert_ne!(e1a, e2);
        assert_ne!(e1a, e3);
        assert_ne!(e2, e3);
    }
}

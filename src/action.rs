use {
    crate::{serutil::StringLikeList, StatementError},
    log::debug,
    serde::{ser::Serializer, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

pub type ActionList = StringLikeList<Action>;

/// A qualified action in an IAM statement: `service:ActionName`, possibly wildcarded, or `*`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    Any,
    Specific {
        service: String,
        action: String,
    },
}

impl Action {
    pub fn new<S: Into<String>, A: Into<String>>(service: S, action: A) -> Result<Self, StatementError> {
        let service = service.into();
        let action = action.into();
        let invalid = || StatementError::InvalidAction(format!("{}:{}", service, action));

        if service.is_empty() || action.is_empty() {
            debug!("Action '{service}:{action}' has an empty component.");
            return Err(invalid());
        }

        if !service.is_ascii() || !action.is_ascii() {
            debug!("Action '{service}:{action}' is not ASCII.");
            return Err(invalid());
        }

        // Hyphens and underscores may only appear inside a name, never at either end.
        let inner = |i: usize, len: usize, c: u8| i > 0 && i < len - 1 && (c == b'-' || c == b'_');

        for (i, c) in service.bytes().enumerate() {
            if !c.is_ascii_alphanumeric() && !inner(i, service.len(), c) {
                debug!("Action '{service}:{action}' has an invalid service.");
                return Err(invalid());
            }
        }

        for (i, c) in action.bytes().enumerate() {
            if !c.is_ascii_alphanumeric() && c != b'*' && c != b'?' && !inner(i, action.len(), c) {
                debug!("Action '{service}:{action}' has an invalid action.");
                return Err(invalid());
            }
        }

        Ok(Action::Specific {
            service,
            action,
        })
    }

    #[inline]
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[inline]
    pub fn service(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                service,
                ..
            } => service,
        }
    }

    #[inline]
    pub fn action(&self) -> &str {
        match self {
            Self::Any => "*",
            Self::Specific {
                action,
                ..
            } => action,
        }
    }
}

impl FromStr for Action {
    type Err = StatementError;

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        if v == "*" {
            return Ok(Self::Any);
        }

        match v.split_once(':') {
            Some((service, action)) if !action.contains(':') => Action::new(service, action),
            _ => Err(StatementError::InvalidAction(v.to_string())),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Any => f.write_str("*"),
            Self::Specific {
                service,
                action,
            } => write!(f, "{}:{}", service, action),
        }
    }
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

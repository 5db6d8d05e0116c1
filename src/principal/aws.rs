use {
    crate::{Resource, StatementError},
    lazy_static::lazy_static,
    log::debug,
    regex::Regex,
    serde::{ser::Serializer, Serialize},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

lazy_static! {
    static ref AWS_ACCOUNT_ID: Regex = Regex::new(r"^\d{12}$").unwrap();
}

/// An entry under the `AWS` key of a principal: a bare account id, an ARN, or `*`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum AwsPrincipal {
    Account(String),
    Any,
    Arn(String),
}

impl Display for AwsPrincipal {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::Account(account_id) => f.write_str(account_id),
            Self::Any => f.write_str("*"),
            Self::Arn(arn) => f.write_str(arn),
        }
    }
}

impl FromStr for AwsPrincipal {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, StatementError> {
        if s == "*" {
            Ok(Self::Any)
        } else if AWS_ACCOUNT_ID.is_match(s) {
            Ok(AwsPrincipal::Account(s.to_string()))
        } else {
            match Resource::from_str(s) {
                Ok(Resource::Arn(arn)) => Ok(AwsPrincipal::Arn(arn)),
                _ => {
                    debug!("AWS principal is neither an account id nor an ARN: {}", s);
                    Err(StatementError::InvalidPrincipal(s.to_string()))
                }
            }
        }
    }
}

impl Serialize for AwsPrincipal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

use {
    super::op::{self, ConditionOp},
    serde::Serialize,
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// The type of value a condition key carries.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ConditionType {
    String,
    #[serde(rename = "ARN")]
    Arn,
    Numeric,
    Bool,
    Date,
    #[serde(rename = "IPAddress")]
    IpAddress,
    Binary,
}

impl ConditionType {
    /// The operator used when a caller does not pick one.
    pub fn default_op(self) -> ConditionOp {
        match self {
            Self::String => op::StringLike,
            Self::Arn => op::ArnEquals,
            Self::Numeric => op::NumericEquals,
            Self::Bool => op::Bool,
            Self::Date => op::DateEquals,
            Self::IpAddress => op::IpAddress,
            Self::Binary => op::BinaryEquals,
        }
    }
}

impl Display for ConditionType {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(match self {
            Self::String => "String",
            Self::Arn => "ARN",
            Self::Numeric => "Numeric",
            Self::Bool => "Bool",
            Self::Date => "Date",
            Self::IpAddress => "IPAddress",
            Self::Binary => "Binary",
        })
    }
}

#[cfg(test)]
mod tests {
    use {
        super::ConditionType,
        crate::condop,
        pretty_assertions::assert_eq,
    };

    #[test_log::test]
    fn test_default_ops() {
        assert_eq!(ConditionType::String.default_op(), condop::StringLike);
        assert_eq!(ConditionType::Arn.default_op(), condop::ArnEquals);
        assert_eq!(ConditionType::Numeric.default_op(), condop::NumericEquals);
        assert_eq!(ConditionType::Bool.default_op(), condop::Bool);
        assert_eq!(ConditionType::Date.default_op(), condop::DateEquals);
        assert_eq!(ConditionType::IpAddress.default_op(), condop::IpAddress);
        assert_eq!(ConditionType::Binary.default_op(), condop::BinaryEquals);
    }

    #[test_log::test]
    fn test_default_op_matches_type() {
        for t in [
            ConditionType::String,
            ConditionType::Arn,
            ConditionType::Numeric,
            ConditionType::Bool,
            ConditionType::Date,
            ConditionType::IpAddress,
            ConditionType::Binary,
        ] {
            assert_eq!(t.default_op().condition_type(), Some(t));
            assert_eq!(serde_json::to_string(&t).unwrap(), format!("\"{}\"", t));
        }
    }
}

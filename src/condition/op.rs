use {
    super::{
        cmp::{
            ArnCmp, DateCmp, NumericCmp, StringCmp, BINARY_DISPLAY_NAMES, BOOL_DISPLAY_NAMES,
            IP_ADDRESS_DISPLAY_NAMES, NULL_DISPLAY_NAME,
        },
        kind::ConditionType,
        variant::Variant,
    },
    crate::StatementError,
    log::debug,
    serde::{ser::Serializer, Serialize},
    std::{
        fmt::{Debug, Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// An operator for a condition clause.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ConditionOp {
    /// Operators for ARNs.
    Arn(ArnCmp, Variant),

    /// Operators for binary values. Only [Variant::None] and [Variant::IfExists] have names; the negated variants
    /// are rendered as their non-negated forms.
    Binary(Variant),

    /// Operators on boolean values. Same restriction as [ConditionOp::Binary].
    Bool(Variant),

    /// Operators for date/time values.
    Date(DateCmp, Variant),

    /// Operators on IP addresses and networks.
    IpAddress(Variant),

    /// Operator on the presence/absence of a value.
    Null,

    /// Operators on numeric values.
    Numeric(NumericCmp, Variant),

    /// Operators on string values.
    String(StringCmp, Variant),
}

macro_rules! condition_ops {
    ($($name:ident => $op:expr,)*) => {
        $(
            #[doc = concat!("The `", stringify!($name), "` operator.")]
            pub const $name: ConditionOp = $op;
        )*

        /// Every named operator, in declaration order.
        pub const ALL: &[ConditionOp] = &[$($name,)*];

        fn lookup(s: &str) -> Option<ConditionOp> {
            match s {
                $(stringify!($name) => Some($name),)*
                _ => None,
            }
        }
    };
}

condition_ops! {
    ArnEquals => ConditionOp::Arn(ArnCmp::Equals, Variant::None),
    ArnEqualsIfExists => ConditionOp::Arn(ArnCmp::Equals, Variant::IfExists),
    ArnNotEquals => ConditionOp::Arn(ArnCmp::Equals, Variant::Negated),
    ArnNotEqualsIfExists => ConditionOp::Arn(ArnCmp::Equals, Variant::IfExistsNegated),
    ArnLike => ConditionOp::Arn(ArnCmp::Like, Variant::None),
    ArnLikeIfExists => ConditionOp::Arn(ArnCmp::Like, Variant::IfExists),
    ArnNotLike => ConditionOp::Arn(ArnCmp::Like, Variant::Negated),
    ArnNotLikeIfExists => ConditionOp::Arn(ArnCmp::Like, Variant::IfExistsNegated),
    BinaryEquals => ConditionOp::Binary(Variant::None),
    BinaryEqualsIfExists => ConditionOp::Binary(Variant::IfExists),
    Bool => ConditionOp::Bool(Variant::None),
    BoolIfExists => ConditionOp::Bool(Variant::IfExists),
    DateEquals => ConditionOp::Date(DateCmp::Equals, Variant::None),
    DateEqualsIfExists => ConditionOp::Date(DateCmp::Equals, Variant::IfExists),
    DateNotEquals => ConditionOp::Date(DateCmp::Equals, Variant::Negated),
    DateNotEqualsIfExists => ConditionOp::Date(DateCmp::Equals, Variant::IfExistsNegated),
    DateLessThan => ConditionOp::Date(DateCmp::LessThan, Variant::None),
    DateLessThanIfExists => ConditionOp::Date(DateCmp::LessThan, Variant::IfExists),
    DateGreaterThanEquals => ConditionOp::Date(DateCmp::LessThan, Variant::Negated),
    DateGreaterThanEqualsIfExists => ConditionOp::Date(DateCmp::LessThan, Variant::IfExistsNegated),
    DateLessThanEquals => ConditionOp::Date(DateCmp::LessThanEquals, Variant::None),
    DateLessThanEqualsIfExists => ConditionOp::Date(DateCmp::LessThanEquals, Variant::IfExists),
    DateGreaterThan => ConditionOp::Date(DateCmp::LessThanEquals, Variant::Negated),
    DateGreaterThanIfExists => ConditionOp::Date(DateCmp::LessThanEquals, Variant::IfExistsNegated),
    IpAddress => ConditionOp::IpAddress(Variant::None),
    IpAddressIfExists => ConditionOp::IpAddress(Variant::IfExists),
    NotIpAddress => ConditionOp::IpAddress(Variant::Negated),
    NotIpAddressIfExists => ConditionOp::IpAddress(Variant::IfExistsNegated),
    Null => ConditionOp::Null,
    NumericEquals => ConditionOp::Numeric(NumericCmp::Equals, Variant::None),
    NumericEqualsIfExists => ConditionOp::Numeric(NumericCmp::Equals, Variant::IfExists),
    NumericNotEquals => ConditionOp::Numeric(NumericCmp::Equals, Variant::Negated),
    NumericNotEqualsIfExists => ConditionOp::Numeric(NumericCmp::Equals, Variant::IfExistsNegated),
    NumericLessThan => ConditionOp::Numeric(NumericCmp::LessThan, Variant::None),
    NumericLessThanIfExists => ConditionOp::Numeric(NumericCmp::LessThan, Variant::IfExists),
    NumericGreaterThanEquals => ConditionOp::Numeric(NumericCmp::LessThan, Variant::Negated),
    NumericGreaterThanEqualsIfExists => ConditionOp::Numeric(NumericCmp::LessThan, Variant::IfExistsNegated),
    NumericLessThanEquals => ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::None),
    NumericLessThanEqualsIfExists => ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExists),
    NumericGreaterThan => ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::Negated),
    NumericGreaterThanIfExists => ConditionOp::Numeric(NumericCmp::LessThanEquals, Variant::IfExistsNegated),
    StringEquals => ConditionOp::String(StringCmp::Equals, Variant::None),
    StringEqualsIfExists => ConditionOp::String(StringCmp::Equals, Variant::IfExists),
    StringNotEquals => ConditionOp::String(StringCmp::Equals, Variant::Negated),
    StringNotEqualsIfExists => ConditionOp::String(StringCmp::Equals, Variant::IfExistsNegated),
    StringEqualsIgnoreCase => ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::None),
    StringEqualsIgnoreCaseIfExists => ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExists),
    StringNotEqualsIgnoreCase => ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::Negated),
    StringNotEqualsIgnoreCaseIfExists => ConditionOp::String(StringCmp::EqualsIgnoreCase, Variant::IfExistsNegated),
    StringLike => ConditionOp::String(StringCmp::Like, Variant::None),
    StringLikeIfExists => ConditionOp::String(StringCmp::Like, Variant::IfExists),
    StringNotLike => ConditionOp::String(StringCmp::Like, Variant::Negated),
    StringNotLikeIfExists => ConditionOp::String(StringCmp::Like, Variant::IfExistsNegated),
}

impl ConditionOp {
    /// The operator name as it appears in a policy document.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Arn(cmp, variant) => cmp.display_name(variant),
            Self::Binary(variant) => BINARY_DISPLAY_NAMES[usize::from(variant.if_exists())],
            Self::Bool(variant) => BOOL_DISPLAY_NAMES[usize::from(variant.if_exists())],
            Self::Date(cmp, variant) => cmp.display_name(variant),
            Self::IpAddress(variant) => IP_ADDRESS_DISPLAY_NAMES[variant.as_usize()],
            Self::Null => NULL_DISPLAY_NAME,
            Self::Numeric(cmp, variant) => cmp.display_name(variant),
            Self::String(cmp, variant) => cmp.display_name(variant),
        }
    }

    /// The value type this operator compares, or `None` for `Null`.
    pub fn condition_type(&self) -> Option<ConditionType> {
        match self {
            Self::Arn(..) => Some(ConditionType::Arn),
            Self::Binary(_) => Some(ConditionType::Binary),
            Self::Bool(_) => Some(ConditionType::Bool),
            Self::Date(..) => Some(ConditionType::Date),
            Self::IpAddress(_) => Some(ConditionType::IpAddress),
            Self::Null => None,
            Self::Numeric(..) => Some(ConditionType::Numeric),
            Self::String(..) => Some(ConditionType::String),
        }
    }

    /// The operator under the name it is written as. Negated binary and boolean variants have no name of their own
    /// and become their non-negated forms, so equal names always compare equal.
    pub fn canonical(self) -> Self {
        let plain = |variant: Variant| if variant.if_exists() { Variant::IfExists } else { Variant::None };

        match self {
            Self::Binary(variant) => Self::Binary(plain(variant)),
            Self::Bool(variant) => Self::Bool(plain(variant)),
            _ => self,
        }
    }

    /// The `...IfExists` form of this operator. `Null` has no such form and is returned unchanged.
    pub fn if_exists(self) -> Self {
        let set = |variant: Variant| Variant::from(variant as u8 | Variant::IfExists as u8);

        match self {
            Self::Arn(cmp, variant) => Self::Arn(cmp, set(variant)),
            Self::Binary(_) => Self::Binary(Variant::IfExists),
            Self::Bool(_) => Self::Bool(Variant::IfExists),
            Self::Date(cmp, variant) => Self::Date(cmp, set(variant)),
            Self::IpAddress(variant) => Self::IpAddress(set(variant)),
            Self::Null => Self::Null,
            Self::Numeric(cmp, variant) => Self::Numeric(cmp, set(variant)),
            Self::String(cmp, variant) => Self::String(cmp, set(variant)),
        }
    }
}

impl PartialEq<str> for ConditionOp {
    fn eq(&self, other: &str) -> bool {
        self.name() == other
    }
}

impl Display for ConditionOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl Serialize for ConditionOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for ConditionOp {
    type Err = StatementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match lookup(s) {
            Some(op) => Ok(op),
            None => {
                debug!("Unknown condition operator: {}", s);
                Err(StatementError::InvalidConditionOperator(s.to_string()))
            }
        }
    }
}

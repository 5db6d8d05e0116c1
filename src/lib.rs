#![warn(clippy::all)]

//! Typed, chainable builders for AWS IAM policy statements.
//!
//! Each supported service has a statement provider ([Ec2], [Kinesisvideo], [MediapackageVod], [Apigateway]) with
//! one method per action, one `on_*` method per resource type and one `if_*` method per condition key. Methods
//! come from a static catalog of the service's actions, resource types and condition keys (see [catalog]).
//!
//! ```
//! use iam_statement_builder::{Ec2, StatementProvider};
//!
//! let mut s = Ec2::new(Some("Sid1"));
//! s.create_vpc()
//!     .on_vpc("vpc-123", Some("111122223333"), Some("us-east-1"), None)
//!     .if_resource_tag("Env", "prod", None);
//!
//! assert_eq!(s.actions(), ["ec2:CreateVpc"]);
//! assert_eq!(s.resources(), ["arn:aws:ec2:us-east-1:111122223333:vpc/vpc-123"]);
//! ```

pub(crate) mod action;
pub mod arn;
pub(crate) mod builder;
pub mod catalog;
pub(crate) mod condition;
pub(crate) mod effect;
pub(crate) mod error;
pub(crate) mod policy;
pub(crate) mod principal;
pub(crate) mod resource;
pub(crate) mod serutil;
pub(crate) mod services;
pub(crate) mod statement;

pub use {
    action::{Action, ActionList},
    arn::{ArnDefaults, ArnDefaultsBuilder, ArnDefaultsBuilderError, ArnTemplate},
    builder::{ConditionEntry, PolicyStatement, StatementProvider},
    catalog::{AccessLevel, ServiceInfo},
    condition::{
        op as condop, ArnCmp, Condition, ConditionMap, ConditionOp, ConditionType, ConditionValue, DateCmp,
        IntoConditionValues, NumericCmp, StringCmp, Variant,
    },
    effect::Effect,
    error::StatementError,
    policy::{Policy, PolicyBuilder, PolicyBuilderError, PolicyVersion},
    principal::{
        AwsPrincipal, Principal, SpecifiedPrincipal, SpecifiedPrincipalBuilder, SpecifiedPrincipalBuilderError,
    },
    resource::{Resource, ResourceList},
    serutil::{ListKind, StringLikeList},
    services::{Apigateway, Ec2, Kinesisvideo, MediapackageVod},
    statement::{Statement, StatementBuilder, StatementBuilderError, StatementList},
};

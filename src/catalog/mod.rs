//! Static metadata for every service this crate knows about: actions, resource types and condition keys.

mod macros;

pub(crate) use macros::{condition_method, service};

use {
    crate::{serutil::display_json, services, ConditionType, StatementError},
    lazy_static::lazy_static,
    log::debug,
    serde::Serialize,
    std::{
        collections::BTreeMap,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// The coarse classification IAM gives each action.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum AccessLevel {
    List,
    Read,
    Write,
    #[serde(rename = "Permissions management")]
    PermissionsManagement,
    Tagging,
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(match self {
            Self::List => "List",
            Self::Read => "Read",
            Self::Write => "Write",
            Self::PermissionsManagement => "Permissions management",
            Self::Tagging => "Tagging",
        })
    }
}

/// A resource type an action can be scoped to.
#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResourceType {
    pub(crate) name: &'static str,
    pub(crate) required: bool,
    pub(crate) condition_keys: &'static [&'static str],
}

impl ActionResourceType {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn required(&self) -> bool {
        self.required
    }

    #[inline]
    pub fn condition_keys(&self) -> &'static [&'static str] {
        self.condition_keys
    }
}

#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionInfo {
    pub(crate) name: &'static str,
    pub(crate) url: &'static str,
    pub(crate) description: &'static str,
    pub(crate) access_level: AccessLevel,
    pub(crate) resource_types: &'static [ActionResourceType],
    pub(crate) condition_keys: &'static [&'static str],
    pub(crate) dependent_actions: &'static [&'static str],
}

impl ActionInfo {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Documentation URL. Empty for actions AWS has not documented.
    #[inline]
    pub fn url(&self) -> &'static str {
        self.url
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[inline]
    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }

    #[inline]
    pub fn resource_types(&self) -> &'static [ActionResourceType] {
        self.resource_types
    }

    /// Statement-level condition keys (those not tied to a resource type).
    #[inline]
    pub fn condition_keys(&self) -> &'static [&'static str] {
        self.condition_keys
    }

    /// Other actions a caller needs in order to perform this one.
    #[inline]
    pub fn dependent_actions(&self) -> &'static [&'static str] {
        self.dependent_actions
    }
}

#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTypeInfo {
    pub(crate) name: &'static str,
    pub(crate) url: &'static str,
    pub(crate) arn: &'static str,
    pub(crate) condition_keys: &'static [&'static str],
}

impl ResourceTypeInfo {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn url(&self) -> &'static str {
        self.url
    }

    /// The ARN template, e.g. `arn:${Partition}:ec2:${Region}:${Account}:vpc/${VpcId}`.
    #[inline]
    pub fn arn(&self) -> &'static str {
        self.arn
    }

    #[inline]
    pub fn condition_keys(&self) -> &'static [&'static str] {
        self.condition_keys
    }
}

#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionKeyInfo {
    pub(crate) key: &'static str,
    pub(crate) description: &'static str,
    #[serde(rename = "type")]
    pub(crate) value_type: ConditionType,
}

impl ConditionKeyInfo {
    /// The key, possibly with a `${TagKey}` placeholder.
    #[inline]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[inline]
    pub fn value_type(&self) -> ConditionType {
        self.value_type
    }

    /// Whether `key` names this condition key, filling any `${TagKey}` placeholder with an arbitrary tag key.
    pub fn matches(&self, key: &str) -> bool {
        match self.key.split_once("${TagKey}") {
            None => self.key == key,
            Some((prefix, suffix)) => {
                key.len() > prefix.len() + suffix.len() && key.starts_with(prefix) && key.ends_with(suffix)
            }
        }
    }
}

/// Everything known about one service.
#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub(crate) prefix: &'static str,
    pub(crate) name: &'static str,
    pub(crate) url: &'static str,
    pub(crate) actions: &'static [ActionInfo],
    pub(crate) resource_types: &'static [ResourceTypeInfo],
    pub(crate) condition_keys: &'static [ConditionKeyInfo],
}

display_json!(ServiceInfo);

impl ServiceInfo {
    /// The service prefix used in action names and ARNs, e.g. `mediapackage-vod`.
    #[inline]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn url(&self) -> &'static str {
        self.url
    }

    #[inline]
    pub fn actions(&self) -> &'static [ActionInfo] {
        self.actions
    }

    #[inline]
    pub fn resource_types(&self) -> &'static [ResourceTypeInfo] {
        self.resource_types
    }

    /// Condition keys defined by the service itself. Global `aws:` keys are not listed.
    #[inline]
    pub fn condition_keys(&self) -> &'static [ConditionKeyInfo] {
        self.condition_keys
    }

    pub fn action(&self, name: &str) -> Option<&'static ActionInfo> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn resource_type(&self, name: &str) -> Option<&'static ResourceTypeInfo> {
        self.resource_types.iter().find(|r| r.name == name)
    }

    /// Look up a condition key either by its declared form (`ec2:ResourceTag/${TagKey}`) or with the tag key
    /// filled in (`ec2:ResourceTag/Env`).
    pub fn condition_key(&self, key: &str) -> Option<&'static ConditionKeyInfo> {
        let keys = self.condition_keys;
        keys.iter().find(|c| c.key == key).or_else(|| keys.iter().find(|c| c.matches(key)))
    }

    /// Actions with the given access level, in table order.
    pub fn actions_with_access_level(&self, level: AccessLevel) -> impl Iterator<Item = &'static ActionInfo> {
        let actions: &'static [ActionInfo] = self.actions;
        actions.iter().filter(move |a| a.access_level == level)
    }
}

lazy_static! {
    static ref REGISTRY: BTreeMap<&'static str, &'static ServiceInfo> = {
        let mut registry = BTreeMap::new();
        for info in services::ALL {
            registry.insert(info.prefix, *info);
        }
        registry
    };
}

/// Every known service, ordered by prefix.
pub fn services() -> impl Iterator<Item = &'static ServiceInfo> {
    REGISTRY.values().copied()
}

/// Look up a service by its prefix.
pub fn service(prefix: &str) -> Result<&'static ServiceInfo, StatementError> {
    match REGISTRY.get(prefix) {
        Some(info) => Ok(*info),
        None => {
            debug!("No service registered with prefix {}", prefix);
            Err(StatementError::UnknownService(prefix.to_string()))
        }
    }
}

#[cfg(test)]
mod tests;

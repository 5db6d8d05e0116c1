use {
    crate::{
        arn::{ArnDefaults, ArnTemplate, ACCOUNT},
        catalog::{AccessLevel, ServiceInfo},
        serutil::{write_json, StringLikeList},
        Action, AwsPrincipal, Condition, ConditionOp, ConditionType, Effect, IntoConditionValues, Principal, Resource,
        SpecifiedPrincipal, Statement, StatementError,
    },
    log::{debug, trace},
    regex::RegexBuilder,
    serde::{ser::SerializeMap, Serialize, Serializer},
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// One condition added to a statement, in the order it was added.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConditionEntry {
    op: ConditionOp,
    key: String,
    values: Vec<String>,
}

impl ConditionEntry {
    #[inline]
    pub fn op(&self) -> ConditionOp {
        self.op
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Principals {
    public: bool,
    aws: Vec<String>,
    canonical_user: Vec<String>,
    federated: Vec<String>,
    service: Vec<String>,
}

impl Principals {
    fn is_empty(&self) -> bool {
        !self.public
            && self.aws.is_empty()
            && self.canonical_user.is_empty()
            && self.federated.is_empty()
            && self.service.is_empty()
    }

    fn to_principal(&self) -> Result<Option<Principal>, StatementError> {
        if self.public {
            return Ok(Some(Principal::Any));
        }

        if self.is_empty() {
            return Ok(None);
        }

        let mut builder = SpecifiedPrincipal::builder();
        if !self.aws.is_empty() {
            let aws = self.aws.iter().map(|p| AwsPrincipal::from_str(p)).collect::<Result<Vec<_>, _>>()?;
            builder.aws(StringLikeList::from_items(aws));
        }
        if !self.canonical_user.is_empty() {
            builder.canonical_user(StringLikeList::from_items(self.canonical_user.clone()));
        }
        if !self.federated.is_empty() {
            builder.federated(StringLikeList::from_items(self.federated.clone()));
        }
        if !self.service.is_empty() {
            builder.service(StringLikeList::from_items(self.service.clone()));
        }

        match builder.build() {
            Ok(specified) => Ok(Some(Principal::Specified(specified))),
            Err(e) => Err(StatementError::Validation(e.to_string())),
        }
    }
}

/// Unvalidated form of the principal element: `*`, or a map of the non-empty principal lists.
impl Serialize for Principals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.public {
            return serializer.serialize_str("*");
        }

        let mut map = serializer.serialize_map(None)?;
        for (name, values) in [
            ("AWS", &self.aws),
            ("CanonicalUser", &self.canonical_user),
            ("Federated", &self.federated),
            ("Service", &self.service),
        ] {
            if !values.is_empty() {
                map.serialize_entry(name, &raw_list(values))?;
            }
        }
        map.end()
    }
}

#[inline]
fn raw_list(values: &[String]) -> StringLikeList<&str> {
    StringLikeList::from_items(values.iter().map(String::as_str).collect())
}

/// The builder state laid out like a [Statement], with every value written as entered.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Draft<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    sid: Option<&'a str>,

    effect: Effect,

    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<StringLikeList<&'a str>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    not_action: Option<StringLikeList<&'a str>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<StringLikeList<&'a str>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    not_resource: Option<StringLikeList<&'a str>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    principal: Option<&'a Principals>,

    #[serde(skip_serializing_if = "Option::is_none")]
    not_principal: Option<&'a Principals>,

    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<Condition>,
}

/// The state of a policy statement under construction.
///
/// Collections are append-only and keep duplicates; nothing is validated until [PolicyStatement::to_statement].
/// A `PolicyStatement` is itself a [StatementProvider] that is not tied to any service.
#[derive(Clone, Debug, PartialEq)]
pub struct PolicyStatement {
    sid: Option<String>,
    effect: Effect,
    service: Option<&'static ServiceInfo>,
    actions: Vec<String>,
    not_action: bool,
    resources: Vec<String>,
    not_resource: bool,
    conditions: Vec<ConditionEntry>,
    principals: Principals,
    not_principal: bool,
    arn_defaults: ArnDefaults,
}

impl PolicyStatement {
    pub fn new(sid: Option<&str>) -> Self {
        Self {
            sid: sid.map(str::to_string),
            effect: Effect::default(),
            service: None,
            actions: Vec::new(),
            not_action: false,
            resources: Vec::new(),
            not_resource: false,
            conditions: Vec::new(),
            principals: Principals::default(),
            not_principal: false,
            arn_defaults: ArnDefaults::default(),
        }
    }

    pub(crate) fn with_service(sid: Option<&str>, service: &'static ServiceInfo) -> Self {
        Self {
            service: Some(service),
            ..Self::new(sid)
        }
    }

    #[inline]
    pub fn sid(&self) -> Option<&str> {
        self.sid.as_deref()
    }

    #[inline]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// The service this statement was created for, if any.
    #[inline]
    pub fn service(&self) -> Option<&'static ServiceInfo> {
        self.service
    }

    #[inline]
    pub fn actions(&self) -> &[String] {
        &self.actions
    }

    #[inline]
    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    #[inline]
    pub fn conditions(&self) -> &[ConditionEntry] {
        &self.conditions
    }

    #[inline]
    pub fn arn_defaults(&self) -> &ArnDefaults {
        &self.arn_defaults
    }

    #[inline]
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    #[inline]
    pub fn has_resources(&self) -> bool {
        !self.resources.is_empty()
    }

    #[inline]
    pub fn has_conditions(&self) -> bool {
        !self.conditions.is_empty()
    }

    #[inline]
    pub fn has_principals(&self) -> bool {
        !self.principals.is_empty()
    }

    /// Whether the actions are written as `NotAction`.
    #[inline]
    pub fn is_not_action(&self) -> bool {
        self.not_action
    }

    /// Whether the resources are written as `NotResource`.
    #[inline]
    pub fn is_not_resource(&self) -> bool {
        self.not_resource
    }

    /// Whether the principals are written as `NotPrincipal`.
    #[inline]
    pub fn is_not_principal(&self) -> bool {
        self.not_principal
    }

    /// Convert the accumulated state into an IAM [Statement].
    ///
    /// A statement without resources applies to `*`. Conditions sharing an operator and key are merged, keeping the
    /// order in which their values were added.
    ///
    /// # Errors
    ///
    /// * [StatementError::MissingAction] if no action was added.
    /// * [StatementError::InvalidAction], [StatementError::InvalidResource] or [StatementError::InvalidPrincipal] if
    ///   a free-form value added through [StatementProvider::add], [StatementProvider::on] or a `for_*` method is
    ///   malformed.
    pub fn to_statement(&self) -> Result<Statement, StatementError> {
        if self.actions.is_empty() {
            debug!("Statement {:?} has no actions", self.sid);
            return Err(StatementError::MissingAction);
        }

        let actions = self.actions.iter().map(|a| Action::from_str(a)).collect::<Result<Vec<_>, _>>()?;
        let resources = if self.resources.is_empty() {
            vec![Resource::Any]
        } else {
            self.resources.iter().map(|r| Resource::from_str(r)).collect::<Result<Vec<_>, _>>()?
        };

        let mut builder = Statement::builder();
        builder.effect(self.effect);

        if let Some(sid) = &self.sid {
            builder.sid(sid.clone());
        }

        if self.not_action {
            builder.not_action(StringLikeList::from_items(actions));
        } else {
            builder.action(StringLikeList::from_items(actions));
        }

        if self.not_resource {
            builder.not_resource(StringLikeList::from_items(resources));
        } else {
            builder.resource(StringLikeList::from_items(resources));
        }

        if let Some(principal) = self.principals.to_principal()? {
            if self.not_principal {
                builder.not_principal(principal);
            } else {
                builder.principal(principal);
            }
        }

        if let Some(condition) = self.condition() {
            builder.condition(condition);
        }

        Ok(builder.build()?)
    }

    fn condition(&self) -> Option<Condition> {
        if self.conditions.is_empty() {
            return None;
        }

        let mut condition = Condition::new();
        for entry in &self.conditions {
            condition.insert_values(entry.op, entry.key.clone(), entry.values.clone());
        }
        Some(condition)
    }

    fn draft(&self) -> Draft<'_> {
        let actions = (!self.actions.is_empty()).then(|| raw_list(&self.actions));
        let resources = if self.resources.is_empty() {
            StringLikeList::Single("*")
        } else {
            raw_list(&self.resources)
        };
        let principals = (!self.principals.is_empty()).then_some(&self.principals);

        Draft {
            sid: self.sid.as_deref(),
            effect: self.effect,
            action: if self.not_action { None } else { actions.clone() },
            not_action: if self.not_action { actions } else { None },
            resource: if self.not_resource { None } else { Some(resources.clone()) },
            not_resource: if self.not_resource { Some(resources) } else { None },
            principal: if self.not_principal { None } else { principals },
            not_principal: if self.not_principal { principals } else { None },
            condition: self.condition(),
        }
    }
}

impl Default for PolicyStatement {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Renders the statement as pretty-printed JSON.
///
/// A statement that [PolicyStatement::to_statement] rejects is still rendered, from its values as entered: the
/// `Action` element is left out when no action was added, and malformed values are written unchanged. Use
/// `to_statement` to find out whether the output is a valid statement.
impl Display for PolicyStatement {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self.to_statement() {
            Ok(statement) => write_json(&statement, f),
            Err(e) => {
                debug!("Rendering statement {:?} unvalidated: {}", self.sid, e);
                write_json(&self.draft(), f)
            }
        }
    }
}

impl StatementProvider for PolicyStatement {
    #[inline]
    fn statement(&self) -> &PolicyStatement {
        self
    }

    #[inline]
    fn statement_mut(&mut self) -> &mut PolicyStatement {
        self
    }
}

#[inline]
fn op_or_default(op: Option<ConditionOp>, value_type: ConditionType) -> Option<ConditionOp> {
    Some(op.unwrap_or_else(|| value_type.default_op()))
}

/// The fluent statement-building API shared by [PolicyStatement] and every service provider.
///
/// Every method returns `&mut Self` so calls chain. None of them fail except
/// [StatementProvider::all_matching_actions] on a malformed pattern.
pub trait StatementProvider {
    fn statement(&self) -> &PolicyStatement;

    fn statement_mut(&mut self) -> &mut PolicyStatement;

    /// Append a qualified action (`service:ActionName`). No validation is done here.
    fn add<A: Into<String>>(&mut self, action: A) -> &mut Self {
        let action = action.into();
        trace!("add action {}", action);
        self.statement_mut().actions.push(action);
        self
    }

    /// Append a resource ARN.
    fn on<R: Into<String>>(&mut self, arn: R) -> &mut Self {
        let arn = arn.into();
        trace!("add resource {}", arn);
        self.statement_mut().resources.push(arn);
        self
    }

    /// Append a condition. Without an operator, `StringLike` is used.
    ///
    /// A call with no values adds nothing. Negated `Bool` and `Binary` operators are stored in their
    /// [ConditionOp::canonical] form.
    fn if_condition<K: Into<String>, V: IntoConditionValues>(
        &mut self,
        key: K,
        values: V,
        op: Option<ConditionOp>,
    ) -> &mut Self {
        let entry = ConditionEntry {
            op: op.unwrap_or(crate::condop::StringLike).canonical(),
            key: key.into(),
            values: values.into_condition_values(),
        };
        if entry.values.is_empty() {
            debug!("Skipping condition {} {} with no values", entry.op, entry.key);
            return self;
        }
        trace!("add condition {} {} {:?}", entry.op, entry.key, entry.values);
        self.statement_mut().conditions.push(entry);
        self
    }

    fn allow(&mut self) -> &mut Self {
        self.statement_mut().effect = Effect::Allow;
        self
    }

    fn deny(&mut self) -> &mut Self {
        self.statement_mut().effect = Effect::Deny;
        self
    }

    /// Write the actions as `NotAction`.
    fn not_actions(&mut self) -> &mut Self {
        self.statement_mut().not_action = true;
        self
    }

    /// Write the resources as `NotResource`.
    fn not_resources(&mut self) -> &mut Self {
        self.statement_mut().not_resource = true;
        self
    }

    /// Write the principals as `NotPrincipal`.
    fn not_principals(&mut self) -> &mut Self {
        self.statement_mut().not_principal = true;
        self
    }

    /// Set the partition, region and account used when a resource method is called without them.
    fn with_arn_defaults(&mut self, defaults: ArnDefaults) -> &mut Self {
        self.statement_mut().arn_defaults = defaults;
        self
    }

    /// Append `<prefix>:*`, or `*` for a statement without a service.
    fn all_actions(&mut self) -> &mut Self {
        let action = match self.statement().service {
            Some(service) => format!("{}:*", service.prefix()),
            None => "*".to_string(),
        };
        self.add(action)
    }

    /// Append every action of the service whose name matches `pattern`, ignoring case. A statement without a
    /// service has no actions to match.
    ///
    /// # Errors
    ///
    /// [StatementError::InvalidPattern] if `pattern` is not a valid regular expression.
    fn all_matching_actions(&mut self, pattern: &str) -> Result<&mut Self, StatementError> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build().map_err(|e| {
            debug!("Invalid action pattern {}: {}", pattern, e);
            StatementError::InvalidPattern(pattern.to_string())
        })?;

        let service = match self.statement().service {
            Some(service) => service,
            None => {
                debug!("all_matching_actions({}) on a statement without a service", pattern);
                return Ok(self);
            }
        };

        for action in service.actions().iter().filter(|a| regex.is_match(a.name())) {
            self.add(format!("{}:{}", service.prefix(), action.name()));
        }

        Ok(self)
    }

    /// Append every action of the service with the given access level, in table order.
    fn all_actions_with_access_level(&mut self, level: AccessLevel) -> &mut Self {
        if let Some(service) = self.statement().service {
            for action in service.actions_with_access_level(level) {
                self.add(format!("{}:{}", service.prefix(), action.name()));
            }
        }
        self
    }

    fn all_list_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::List)
    }

    fn all_read_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::Read)
    }

    fn all_write_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::Write)
    }

    fn all_permission_management_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::PermissionsManagement)
    }

    fn all_tagging_actions(&mut self) -> &mut Self {
        self.all_actions_with_access_level(AccessLevel::Tagging)
    }

    /// Add the root user of an account (`arn:<partition>:iam::<account>:root`) as a principal. The partition comes
    /// from the statement's ARN defaults.
    fn for_account(&mut self, account: &str) -> &mut Self {
        let arn = ArnTemplate::new("arn:${Partition}:iam::${Account}:root")
            .with(ACCOUNT, account)
            .render(self.statement().arn_defaults());
        self.for_arn(arn)
    }

    /// Add an IAM user, role or other ARN as an `AWS` principal.
    fn for_arn<S: Into<String>>(&mut self, arn: S) -> &mut Self {
        self.statement_mut().principals.aws.push(arn.into());
        self
    }

    /// Add a service principal such as `kinesisvideo.amazonaws.com`.
    fn for_service<S: Into<String>>(&mut self, service: S) -> &mut Self {
        self.statement_mut().principals.service.push(service.into());
        self
    }

    /// Add a federated principal such as `cognito-identity.amazonaws.com`.
    fn for_federated<S: Into<String>>(&mut self, provider: S) -> &mut Self {
        self.statement_mut().principals.federated.push(provider.into());
        self
    }

    fn for_canonical_user<S: Into<String>>(&mut self, id: S) -> &mut Self {
        self.statement_mut().principals.canonical_user.push(id.into());
        self
    }

    /// Make the statement apply to everyone (`"Principal": "*"`).
    fn for_public(&mut self) -> &mut Self {
        self.statement_mut().principals.public = true;
        self
    }

    /// `aws:RequestTag/${TagKey}`: a tag passed in the request.
    fn if_aws_request_tag<V: IntoConditionValues>(
        &mut self,
        tag_key: &str,
        values: V,
        op: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_condition(format!("aws:RequestTag/{}", tag_key), values, op_or_default(op, ConditionType::String))
    }

    /// `aws:ResourceTag/${TagKey}`: a tag attached to the resource.
    fn if_aws_resource_tag<V: IntoConditionValues>(
        &mut self,
        tag_key: &str,
        values: V,
        op: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_condition(format!("aws:ResourceTag/{}", tag_key), values, op_or_default(op, ConditionType::String))
    }

    /// `aws:PrincipalTag/${TagKey}`: a tag attached to the calling principal.
    fn if_aws_principal_tag<V: IntoConditionValues>(
        &mut self,
        tag_key: &str,
        values: V,
        op: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_condition(format!("aws:PrincipalTag/{}", tag_key), values, op_or_default(op, ConditionType::String))
    }

    /// `aws:TagKeys`: the tag keys passed in the request.
    fn if_aws_tag_keys<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:TagKeys", values, op_or_default(op, ConditionType::String))
    }

    fn if_aws_requested_region<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:RequestedRegion", values, op_or_default(op, ConditionType::String))
    }

    fn if_aws_principal_account<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:PrincipalAccount", values, op_or_default(op, ConditionType::String))
    }

    fn if_aws_principal_org_id<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:PrincipalOrgID", values, op_or_default(op, ConditionType::String))
    }

    fn if_aws_source_vpc<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:SourceVpc", values, op_or_default(op, ConditionType::String))
    }

    fn if_aws_source_vpce<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:SourceVpce", values, op_or_default(op, ConditionType::String))
    }

    fn if_aws_user_agent<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:UserAgent", values, op_or_default(op, ConditionType::String))
    }

    fn if_aws_principal_arn<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:PrincipalArn", values, op_or_default(op, ConditionType::Arn))
    }

    fn if_aws_source_arn<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:SourceArn", values, op_or_default(op, ConditionType::Arn))
    }

    /// `aws:SourceIp`. Accepts strings as well as [ipnet::IpNet] and [std::net::IpAddr] values.
    fn if_aws_source_ip<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:SourceIp", values, op_or_default(op, ConditionType::IpAddress))
    }

    fn if_aws_current_time<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:CurrentTime", values, op_or_default(op, ConditionType::Date))
    }

    fn if_aws_token_issue_time<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:TokenIssueTime", values, op_or_default(op, ConditionType::Date))
    }

    fn if_aws_epoch_time<V: IntoConditionValues>(&mut self, values: V, op: Option<ConditionOp>) -> &mut Self {
        self.if_condition("aws:EpochTime", values, op_or_default(op, ConditionType::Numeric))
    }

    fn if_aws_multi_factor_auth_age<V: IntoConditionValues>(
        &mut self,
        values: V,
        op: Option<ConditionOp>,
    ) -> &mut Self {
        self.if_condition("aws:MultiFactorAuthAge", values, op_or_default(op, ConditionType::Numeric))
    }

    fn if_aws_secure_transport(&mut self, value: Option<bool>) -> &mut Self {
        self.if_condition("aws:SecureTransport", value.unwrap_or(true), Some(crate::condop::Bool))
    }

    fn if_aws_multi_factor_auth_present(&mut self, value: Option<bool>) -> &mut Self {
        self.if_condition("aws:MultiFactorAuthPresent", value.unwrap_or(true), Some(crate::condop::Bool))
    }

    fn if_aws_via_aws_service(&mut self, value: Option<bool>) -> &mut Self {
        self.if_condition("aws:ViaAWSService", value.unwrap_or(true), Some(crate::condop::Bool))
    }

    fn if_aws_principal_is_aws_service(&mut self, value: Option<bool>) -> &mut Self {
        self.if_condition("aws:PrincipalIsAWSService", value.unwrap_or(true), Some(crate::condop::Bool))
    }
}

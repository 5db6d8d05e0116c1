use {
    derive_builder::Builder,
    lazy_static::lazy_static,
    log::trace,
    regex::{Captures, Regex},
};

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\$\{([A-Za-z0-9]+)\}").unwrap();
}

/// Placeholder for the partition segment of an ARN template.
pub const PARTITION: &str = "Partition";

/// Placeholder for the region segment of an ARN template.
pub const REGION: &str = "Region";

/// Placeholder for the account segment of an ARN template.
pub const ACCOUNT: &str = "Account";

/// Values used for the partition, region and account segments when a caller leaves them out.
///
/// The defaults are `aws`, `*` and `*`: the commercial partition, any region, any account.
#[derive(Builder, Clone, Debug, Eq, PartialEq)]
pub struct ArnDefaults {
    #[builder(setter(into), default = "\"aws\".to_string()")]
    partition: String,

    #[builder(setter(into), default = "\"*\".to_string()")]
    region: String,

    #[builder(setter(into), default = "\"*\".to_string()")]
    account: String,
}

impl ArnDefaults {
    #[inline]
    pub fn builder() -> ArnDefaultsBuilder {
        ArnDefaultsBuilder::default()
    }

    #[inline]
    pub fn partition(&self) -> &str {
        &self.partition
    }

    #[inline]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[inline]
    pub fn account(&self) -> &str {
        &self.account
    }

    fn get(&self, placeholder: &str) -> &str {
        match placeholder {
            PARTITION => &self.partition,
            REGION => &self.region,
            ACCOUNT => &self.account,
            _ => "*",
        }
    }
}

impl Default for ArnDefaults {
    fn default() -> Self {
        Self {
            partition: "aws".to_string(),
            region: "*".to_string(),
            account: "*".to_string(),
        }
    }
}

/// An ARN template such as `arn:${Partition}:ec2:${Region}:${Account}:vpc/${VpcId}` and the values chosen for its
/// placeholders.
///
/// Rendering makes a single pass over the template, so substituted values are never rescanned: an identifier that
/// itself contains a policy variable (`${aws:username}`) is kept verbatim. Placeholders without a value fall back
/// to [ArnDefaults], and any other unfilled placeholder becomes `*`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArnTemplate<'a> {
    template: &'a str,
    values: Vec<(&'a str, &'a str)>,
}

impl<'a> ArnTemplate<'a> {
    pub fn new(template: &'a str) -> Self {
        Self {
            template,
            values: Vec::new(),
        }
    }

    #[inline]
    pub fn template(&self) -> &'a str {
        self.template
    }

    /// The placeholder names in the template, in order of appearance.
    pub fn placeholders(&self) -> Vec<&'a str> {
        let template: &'a str = self.template;
        PLACEHOLDER.captures_iter(template).filter_map(|caps| caps.get(1).map(|m| m.as_str())).collect()
    }

    /// Set the value of `placeholder`.
    pub fn with(mut self, placeholder: &'a str, value: &'a str) -> Self {
        self.values.retain(|(name, _)| *name != placeholder);
        self.values.push((placeholder, value));
        self
    }

    /// Set the value of `placeholder` if one was supplied. `None` and the empty string both leave the placeholder
    /// to its default.
    pub fn with_opt(self, placeholder: &'a str, value: Option<&'a str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.with(placeholder, value),
            _ => self,
        }
    }

    pub fn render(&self, defaults: &ArnDefaults) -> String {
        let arn = PLACEHOLDER.replace_all(self.template, |caps: &Captures| {
            let name = caps.get(1).map_or("", |m| m.as_str());
            match self.values.iter().find(|(placeholder, _)| *placeholder == name) {
                Some((_, value)) => (*value).to_string(),
                None => defaults.get(name).to_string(),
            }
        });

        trace!("ArnTemplate: {} -> {}", self.template, arn);
        arn.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{ArnDefaults, ArnTemplate, ACCOUNT, PARTITION, REGION},
        pretty_assertions::assert_eq,
    };

    const VPC: &str = "arn:${Partition}:ec2:${Region}:${Account}:vpc/${VpcId}";
    const STREAM: &str = "arn:${Partition}:kinesisvideo:${Region}:${Account}:stream/${StreamName}/${CreationTime}";

    #[test_log::test]
    fn test_placeholders() {
        let t = ArnTemplate::new(STREAM);
        assert_eq!(t.placeholders(), vec!["Partition", "Region", "Account", "StreamName", "CreationTime"]);
        assert_eq!(t.template(), STREAM);

        let t = ArnTemplate::new("arn:${Partition}:apigateway:${Region}::${ApiGatewayResourcePath}");
        assert_eq!(t.placeholders(), vec!["Partition", "Region", "ApiGatewayResourcePath"]);
    }

    #[test_log::test]
    fn test_render_all_values() {
        let arn = ArnTemplate::new(VPC)
            .with("VpcId", "vpc-123")
            .with_opt(ACCOUNT, Some("111122223333"))
            .with_opt(REGION, Some("us-east-1"))
            .with_opt(PARTITION, Some("aws-cn"))
            .render(&ArnDefaults::default());
        assert_eq!(arn, "arn:aws-cn:ec2:us-east-1:111122223333:vpc/vpc-123");
    }

    #[test_log::test]
    fn test_render_defaults() {
        let arn = ArnTemplate::new(VPC)
            .with("VpcId", "vpc-123")
            .with_opt(ACCOUNT, None)
            .with_opt(REGION, Some(""))
            .render(&ArnDefaults::default());
        assert_eq!(arn, "arn:aws:ec2:*:*:vpc/vpc-123");

        let defaults = ArnDefaults::builder().partition("aws-us-gov").region("us-gov-west-1").build().unwrap();
        assert_eq!(defaults.partition(), "aws-us-gov");
        assert_eq!(defaults.region(), "us-gov-west-1");
        assert_eq!(defaults.account(), "*");
        let arn = ArnTemplate::new(VPC).with("VpcId", "vpc-9").render(&defaults);
        assert_eq!(arn, "arn:aws-us-gov:ec2:us-gov-west-1:*:vpc/vpc-9");

        assert_eq!(ArnDefaults::builder().build().unwrap(), ArnDefaults::default());
    }

    #[test_log::test]
    fn test_unfilled_identifier_is_wildcarded() {
        let arn = ArnTemplate::new(STREAM).with("StreamName", "myStream").render(&ArnDefaults::default());
        assert_eq!(arn, "arn:aws:kinesisvideo:*:*:stream/myStream/*");
    }

    #[test_log::test]
    fn test_values_are_not_rescanned() {
        let arn = ArnTemplate::new(VPC)
            .with("VpcId", "${Region}")
            .with("VpcId", "${aws:username}")
            .render(&ArnDefaults::default());
        assert_eq!(arn, "arn:aws:ec2:*:*:vpc/${aws:username}");
    }
}

/// Declare a service: its metadata table in a `SERVICE` static, and a statement provider type with one method per
/// action, per resource type and per service condition key. Both come from the same tokens so they cannot drift.
macro_rules! service {
    (
        $(#[$meta:meta])*
        pub struct $Service:ident;
        prefix: $prefix:literal,
        name: $name:literal,
        url: $url:literal,
        actions: {
            $(
                $afn:ident => $aname:literal [$level:ident] {
                    url: $aurl:literal,
                    description: $adesc:literal,
                    resources: [$(($rt:literal, $req:literal, [$($rck:literal),* $(,)?])),* $(,)?],
                    conditions: [$($ack:literal),* $(,)?],
                    dependent: [$($dep:literal),* $(,)?],
                }
            )*
        },
        resources: {
            $(
                $rfn:ident => $rname:literal {
                    url: $rurl:literal,
                    arn: $arn:literal,
                    params: ($($param:ident: $ph:literal),* $(,)?),
                    segments: ($($seg:ident: $segph:ident),* $(,)?),
                    conditions: [$($rtck:literal),* $(,)?],
                }
            )*
        },
        conditions: {
            $(
                $cfn:ident $(($tag:ident))? => $ckey:literal: $ctype:ident { $cdesc:literal }
            )*
        }
    ) => {
        /// Metadata for this service.
        pub static SERVICE: $crate::catalog::ServiceInfo = $crate::catalog::ServiceInfo {
            prefix: $prefix,
            name: $name,
            url: $url,
            actions: &[
                $(
                    $crate::catalog::ActionInfo {
                        name: $aname,
                        url: $aurl,
                        description: $adesc,
                        access_level: $crate::catalog::AccessLevel::$level,
                        resource_types: &[
                            $(
                                $crate::catalog::ActionResourceType {
                                    name: $rt,
                                    required: $req,
                                    condition_keys: &[$($rck),*],
                                },
                            )*
                        ],
                        condition_keys: &[$($ack),*],
                        dependent_actions: &[$($dep),*],
                    },
                )*
            ],
            resource_types: &[
                $(
                    $crate::catalog::ResourceTypeInfo {
                        name: $rname,
                        url: $rurl,
                        arn: $arn,
                        condition_keys: &[$($rtck),*],
                    },
                )*
            ],
            condition_keys: &[
                $(
                    $crate::catalog::ConditionKeyInfo {
                        key: $ckey,
                        description: $cdesc,
                        value_type: $crate::ConditionType::$ctype,
                    },
                )*
            ],
        };

        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $Service {
            statement: $crate::PolicyStatement,
        }

        impl $Service {
            /// Create a statement, optionally with a statement id.
            pub fn new(sid: Option<&str>) -> Self {
                Self {
                    statement: $crate::PolicyStatement::with_service(sid, &SERVICE),
                }
            }

            /// The metadata table backing this provider.
            #[inline]
            pub fn info() -> &'static $crate::catalog::ServiceInfo {
                &SERVICE
            }

            $(
                #[doc = $adesc]
                #[doc = ""]
                #[doc = concat!("Access level: ", stringify!($level))]
                pub fn $afn(&mut self) -> &mut Self {
                    $crate::StatementProvider::add(self, concat!($prefix, ":", $aname))
                }
            )*

            $(
                #[doc = concat!("Adds a resource of type `", $rname, "` to the statement.")]
                #[doc = ""]
                #[doc = concat!("ARN template: `", $arn, "`")]
                pub fn $rfn(&mut self, $($param: &str,)* $($seg: Option<&str>,)*) -> &mut Self {
                    let arn = $crate::arn::ArnTemplate::new($arn)
                        $(.with($ph, $param))*
                        $(.with_opt($crate::arn::$segph, $seg))*
                        .render($crate::StatementProvider::statement(self).arn_defaults());
                    $crate::StatementProvider::on(self, arn)
                }
            )*

            $(
                $crate::catalog::condition_method! { $cfn [$($tag)?] $ckey $ctype $cdesc }
            )*

            #[cfg(test)]
            pub(crate) fn action_methods() -> Vec<(&'static str, fn(&mut Self) -> &mut Self)> {
                vec![$(($aname, Self::$afn as fn(&mut Self) -> &mut Self)),*]
            }

            /// Each resource method, called with every identifier set to its parameter name. With `true` the
            /// account, region and partition are also passed, each set to its parameter name.
            #[cfg(test)]
            pub(crate) fn resource_methods() -> Vec<(&'static str, fn(&mut Self, bool) -> &mut Self)> {
                vec![$(($rname, {
                    fn call(p: &mut $Service, supplied: bool) -> &mut $Service {
                        p.$rfn($(stringify!($param),)* $(supplied.then_some(stringify!($seg)),)*)
                    }
                    call as fn(&mut Self, bool) -> &mut Self
                })),*]
            }
        }

        impl Default for $Service {
            fn default() -> Self {
                Self::new(None)
            }
        }

        impl $crate::StatementProvider for $Service {
            #[inline]
            fn statement(&self) -> &$crate::PolicyStatement {
                &self.statement
            }

            #[inline]
            fn statement_mut(&mut self) -> &mut $crate::PolicyStatement {
                &mut self.statement
            }
        }

        impl std::ops::Deref for $Service {
            type Target = $crate::PolicyStatement;

            fn deref(&self) -> &$crate::PolicyStatement {
                &self.statement
            }
        }

        impl std::fmt::Display for $Service {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.statement, f)
            }
        }
    };
}

/// One `if_*` method for a service condition key. Bool keys take an optional flag; tag keys take the tag key first.
macro_rules! condition_method {
    ($cfn:ident [] $key:literal Bool $desc:literal) => {
        #[doc = $desc]
        #[doc = ""]
        #[doc = concat!("Applies the `Bool` operator to `", $key, "`. `None` means `true`.")]
        pub fn $cfn(&mut self, value: Option<bool>) -> &mut Self {
            $crate::StatementProvider::if_condition(self, $key, value.unwrap_or(true), Some($crate::condop::Bool))
        }
    };

    ($cfn:ident [$tag:ident] $key:literal $ctype:ident $desc:literal) => {
        #[doc = $desc]
        #[doc = ""]
        #[doc = concat!("Key: `", $key, "`. The operator defaults to the one for ", stringify!($ctype), " values.")]
        pub fn $cfn<V: $crate::IntoConditionValues>(
            &mut self,
            $tag: &str,
            value: V,
            op: Option<$crate::ConditionOp>,
        ) -> &mut Self {
            let op = op.unwrap_or_else(|| $crate::ConditionType::$ctype.default_op());
            $crate::StatementProvider::if_condition(self, $key.replace("${TagKey}", $tag), value, Some(op))
        }
    };

    ($cfn:ident [] $key:literal $ctype:ident $desc:literal) => {
        #[doc = $desc]
        #[doc = ""]
        #[doc = concat!("Key: `", $key, "`. The operator defaults to the one for ", stringify!($ctype), " values.")]
        pub fn $cfn<V: $crate::IntoConditionValues>(&mut self, value: V, op: Option<$crate::ConditionOp>) -> &mut Self {
            let op = op.unwrap_or_else(|| $crate::ConditionType::$ctype.default_op());
            $crate::StatementProvider::if_condition(self, $key, value, Some(op))
        }
    };
}

pub(crate) use {condition_method, service};

//! Statement providers, one per service.

mod apigateway;
mod ec2;
mod kinesisvideo;
mod mediapackage_vod;

pub use {apigateway::Apigateway, ec2::Ec2, kinesisvideo::Kinesisvideo, mediapackage_vod::MediapackageVod};

use crate::catalog::ServiceInfo;

/// Every service table compiled into the crate.
pub(crate) static ALL: &[&ServiceInfo] =
    &[&apigateway::SERVICE, &ec2::SERVICE, &kinesisvideo::SERVICE, &mediapackage_vod::SERVICE];

#[cfg(test)]
pub(crate) mod provider_tests {
    use {
        super::{Apigateway, Ec2, Kinesisvideo, MediapackageVod},
        crate::{catalog::ServiceInfo, StatementProvider},
    };

    /// For each service: the table and every `(action name, method)` pair the provider exposes.
    pub(crate) type ActionCheck = (&'static ServiceInfo, Vec<(&'static str, Vec<String>)>);

    fn run<P: StatementProvider + Default>(
        info: &'static ServiceInfo,
        methods: Vec<(&'static str, fn(&mut P) -> &mut P)>,
    ) -> ActionCheck {
        let calls = methods
            .into_iter()
            .map(|(name, method)| {
                let mut p = P::default();
                method(&mut p);
                (name, p.statement().actions().to_vec())
            })
            .collect();
        (info, calls)
    }

    /// For each service: the table and every `(resource type, segments supplied, resources appended)` call.
    pub(crate) type ResourceCheck = (&'static ServiceInfo, Vec<(&'static str, bool, Vec<String>)>);

    fn run_resources<P: StatementProvider + Default>(
        info: &'static ServiceInfo,
        methods: Vec<(&'static str, fn(&mut P, bool) -> &mut P)>,
    ) -> ResourceCheck {
        let mut calls = Vec::new();
        for (name, method) in methods {
            for supplied in [false, true] {
                let mut p = P::default();
                method(&mut p, supplied);
                calls.push((name, supplied, p.statement().resources().to_vec()));
            }
        }
        (info, calls)
    }

    /// Call every generated resource method on a fresh provider, with and without the optional segments.
    pub(crate) fn resource_calls() -> Vec<ResourceCheck> {
        vec![
            run_resources(Apigateway::info(), Apigateway::resource_methods()),
            run_resources(Ec2::info(), Ec2::resource_methods()),
            run_resources(Kinesisvideo::info(), Kinesisvideo::resource_methods()),
            run_resources(MediapackageVod::info(), MediapackageVod::resource_methods()),
        ]
    }

    /// Call every generated action method on a fresh provider and record what it appended.
    pub(crate) fn action_calls() -> Vec<ActionCheck> {
        vec![
            run(Apigateway::info(), Apigateway::action_methods()),
            run(Ec2::info(), Ec2::action_methods()),
            run(Kinesisvideo::info(), Kinesisvideo::action_methods()),
            run(MediapackageVod::info(), MediapackageVod::action_methods()),
        ]
    }
}

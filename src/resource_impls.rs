// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Implementations of the `ManifestResource` trait for all CRD types.
//!
//! The implementations are identical apart from the types involved, so they
//! are generated by a macro.

use crate::crd::apisix::{ApisixRoute, ApisixRouteSpec};
use crate::crd::capsule::{Tenant, TenantSpec};
use crate::crd::cert_manager::{
    Certificate, CertificateSpec, ClusterIssuer, ClusterIssuerSpec, Issuer, IssuerSpec,
};
use crate::crd::cilium::{CiliumNetworkPolicy, CiliumNetworkPolicySpec};
use crate::crd::flagger::{Canary, CanarySpec};
use crate::crd::kong::{KongUpstreamPolicy, KongUpstreamPolicySpec};
use crate::crd::kueue::{ResourceFlavor, ResourceFlavorSpec};
use crate::errors::ProviderError;
use crate::resource::{ManifestHandler, ManifestResource, ResourceHandler};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

macro_rules! impl_manifest_resource {
    ($resource:ty, $spec:ty) => {
        impl ManifestResource for $resource {
            type Spec = $spec;

            fn from_parts(metadata: ObjectMeta, spec: Self::Spec) -> Self {
                Self { metadata, spec }
            }
        }
    };
}

impl_manifest_resource!(Tenant, TenantSpec);
impl_manifest_resource!(Certificate, CertificateSpec);
impl_manifest_resource!(Issuer, IssuerSpec);
impl_manifest_resource!(ClusterIssuer, ClusterIssuerSpec);
impl_manifest_resource!(CiliumNetworkPolicy, CiliumNetworkPolicySpec);
impl_manifest_resource!(Canary, CanarySpec);
impl_manifest_resource!(ApisixRoute, ApisixRouteSpec);
impl_manifest_resource!(KongUpstreamPolicy, KongUpstreamPolicySpec);
impl_manifest_resource!(ResourceFlavor, ResourceFlavorSpec);

/// Create a lifecycle handler for every supported CRD type.
///
/// # Errors
///
/// Returns the first schema derivation error.
pub fn all_handlers() -> Result<Vec<Box<dyn ResourceHandler>>, ProviderError> {
    Ok(vec![
        handler::<Tenant>()?,
        handler::<Certificate>()?,
        handler::<Issuer>()?,
        handler::<ClusterIssuer>()?,
        handler::<CiliumNetworkPolicy>()?,
        handler::<Canary>()?,
        handler::<ApisixRoute>()?,
        handler::<KongUpstreamPolicy>()?,
        handler::<ResourceFlavor>()?,
    ])
}

fn handler<K: ManifestResource>() -> Result<Box<dyn ResourceHandler>, ProviderError> {
    Ok(Box::new(ManifestHandler::<K>::new()?))
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRDs owned by [Capsule](https://capsule.clastix.io/), see
//! <https://capsule.clastix.io/docs/reference/crds-apis/>.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `Tenant` groups namespaces under a set of owners and enforces shared policies.
///
/// # Example
///
/// ```yaml
/// apiVersion: capsule.clastix.io/v1beta2
/// kind: Tenant
/// metadata:
///   name: oil
/// spec:
///   owners:
///     - kind: User
///       name: alice
///   namespaceOptions:
///     quota: 3
/// ```
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "capsule.clastix.io",
    version = "v1beta2",
    kind = "Tenant",
    doc = "Tenant is a cluster-scoped grouping of namespaces sharing owners, quotas and policies."
)]
#[serde(rename_all = "camelCase")]
pub struct TenantSpec {
    /// Users, groups or service accounts owning the tenant.
    pub owners: Vec<TenantOwner>,

    /// Constraints applied to every namespace of the tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace_options: Option<NamespaceOptions>,

    /// Constraints applied to services created in tenant namespaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_options: Option<ServiceOptions>,

    /// Storage classes the tenant may use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_classes: Option<AllowedListSpec>,

    /// Ingress classes and hostnames the tenant may use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_options: Option<IngressOptions>,

    /// Container registries pods of the tenant may pull from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_registries: Option<AllowedListSpec>,

    /// Priority classes the tenant may use.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_classes: Option<AllowedListSpec>,

    /// Node selector forced onto every pod of the tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_selector: Option<BTreeMap<String, String>>,

    /// Resource quotas replicated into tenant namespaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_quotas: Option<ResourceQuotaSpec>,

    /// Blocks creation and update of resources in tenant namespaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cordoned: Option<bool>,

    /// Prevents the tenant from being deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_deletion: Option<bool>,
}

/// Owner of a tenant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantOwner {
    /// Kind of owner: `User`, `Group` or `ServiceAccount`.
    pub kind: String,

    /// Name of the owner.
    pub name: String,

    /// Cluster roles bound to the owner in every tenant namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_roles: Option<Vec<String>>,

    /// Cluster-scoped resources the owner may reach through capsule-proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_settings: Option<Vec<ProxySettings>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProxySettings {
    /// Resource kind, e.g. `Nodes` or `StorageClasses`.
    pub kind: String,

    /// Allowed operations: `List`, `Update`, `Delete`.
    pub operations: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceOptions {
    /// Maximum number of namespaces in the tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub quota: Option<i32>,

    /// Labels and annotations added to every tenant namespace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_metadata: Option<AdditionalMetadata>,

    /// Labels tenant owners may not set on namespaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden_labels: Option<ForbiddenListSpec>,

    /// Annotations tenant owners may not set on namespaces.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forbidden_annotations: Option<ForbiddenListSpec>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
}

/// Exact values and a regular expression that are allowed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllowedListSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_regex: Option<String>,
}

/// Exact values and a regular expression that are denied.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ForbiddenListSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denied: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub denied_regex: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngressOptions {
    /// Ingress classes tenant ingresses may reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_classes: Option<AllowedListSpec>,

    /// Hostnames tenant ingresses may claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_hostnames: Option<AllowedListSpec>,

    /// Scope of hostname collision checks: `Cluster`, `Tenant`, `Namespace` or `Disabled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname_collision_scope: Option<String>,

    /// Allows wildcard hostnames such as `*.example.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_wildcard_hostnames: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOptions {
    /// Labels and annotations added to every tenant service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_metadata: Option<AdditionalMetadata>,

    /// Service types tenant owners may create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_services: Option<AllowedServices>,

    /// External IPs services may use.
    #[serde(rename = "externalIPs", skip_serializing_if = "Option::is_none")]
    pub external_ips: Option<ExternalServiceIps>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllowedServices {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_port: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_name: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalServiceIps {
    /// CIDRs services may expose.
    pub allowed: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuotaSpec {
    /// Whether quotas are enforced per `Tenant` or per `Namespace`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ResourceQuotaItem>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuotaItem {
    /// Hard limits keyed by resource name, e.g. `limits.cpu: "8"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hard: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
}

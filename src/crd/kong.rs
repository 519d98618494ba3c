// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRDs owned by the [Kong Ingress Controller](https://docs.konghq.com/kubernetes-ingress-controller/),
//! see <https://docs.konghq.com/kubernetes-ingress-controller/latest/reference/custom-resources/>.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `KongUpstreamPolicy` configures load balancing and health checking of Kong upstreams.
///
/// Attached to Services through the `konghq.com/upstream-policy` annotation.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "configuration.konghq.com",
    version = "v1beta1",
    kind = "KongUpstreamPolicy",
    namespaced,
    doc = "KongUpstreamPolicy allows configuring algorithm that should be used for load balancing traffic between Kong Upstream's Targets. It also allows configuring health checks for Kong Upstream's Targets."
)]
#[serde(rename_all = "camelCase")]
pub struct KongUpstreamPolicySpec {
    /// `round-robin`, `consistent-hashing`, `least-connections`, `latency` or `sticky-sessions`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,

    /// Number of slots in the load balancer ring.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 10, max = 65536))]
    pub slots: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_on: Option<KongUpstreamHash>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_on_fallback: Option<KongUpstreamHash>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthchecks: Option<KongUpstreamHealthcheck>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sticky_sessions: Option<KongUpstreamStickySessions>,
}

/// Hash input; exactly one field should be set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KongUpstreamHash {
    /// `ip`, `consumer` or `path`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_arg: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_capture: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KongUpstreamHealthcheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<KongUpstreamActiveHealthcheck>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub passive: Option<KongUpstreamPassiveHealthcheck>,

    /// Minimum healthy target percentage for the upstream to be healthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KongUpstreamActiveHealthcheck {
    /// `http`, `https`, `tcp`, `grpc` or `grpcs`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_sni: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_verify_certificate: Option<bool>,

    /// Probe timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<i32>,

    /// Extra request headers; each header may carry several values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, Vec<String>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy: Option<KongUpstreamHealthcheckHealthy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unhealthy: Option<KongUpstreamHealthcheckUnhealthy>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KongUpstreamPassiveHealthcheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub healthy: Option<KongUpstreamHealthcheckHealthy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub unhealthy: Option<KongUpstreamHealthcheckUnhealthy>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KongUpstreamHealthcheckHealthy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_statuses: Option<Vec<i32>>,

    /// Seconds between probes of healthy targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub successes: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KongUpstreamHealthcheckUnhealthy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_failures: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_statuses: Option<Vec<i32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_failures: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KongUpstreamStickySessions {
    /// Cookie carrying the session target.
    pub cookie: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie_path: Option<String>,
}

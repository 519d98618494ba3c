// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRDs owned by [Flagger](https://flagger.app/), see
//! <https://docs.flagger.app/usage/how-it-works>.

use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `Canary` automates the promotion of a new workload revision behind a service mesh or ingress.
///
/// # Example
///
/// ```yaml
/// apiVersion: flagger.app/v1beta1
/// kind: Canary
/// metadata:
///   name: podinfo
///   namespace: test
/// spec:
///   targetRef:
///     apiVersion: apps/v1
///     kind: Deployment
///     name: podinfo
///   service:
///     port: 9898
///   analysis:
///     interval: 1m
///     threshold: 5
///     maxWeight: 50
///     stepWeight: 10
/// ```
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "flagger.app",
    version = "v1beta1",
    kind = "Canary",
    namespaced,
    doc = "Canary is the Schema for the canaries API. It describes the workload to shift traffic to and the analysis gating each step."
)]
#[serde(rename_all = "camelCase")]
pub struct CanarySpec {
    /// Traffic management provider, e.g. `istio`, `linkerd`, `nginx`, `gatewayapi:v1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Workload the canary controls.
    pub target_ref: LocalObjectReference,

    /// Autoscaler scaled alongside the workload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaler_ref: Option<LocalObjectReference>,

    /// Ingress used for traffic shifting with ingress-based providers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_ref: Option<LocalObjectReference>,

    /// Service generated for the primary and canary workloads.
    pub service: CanaryService,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<CanaryAnalysis>,

    /// Maximum seconds for the canary to make progress before it is rolled back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_deadline_seconds: Option<i32>,

    /// Promotes without running the analysis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_analysis: Option<bool>,

    /// Restores the original workload when the canary is deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revert_on_deletion: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspend: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalObjectReference {
    pub api_version: String,
    pub kind: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanaryService {
    /// Name of the generated service. Defaults to the target name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Container port exposed by the service.
    #[schemars(range(min = 1, max = 65535))]
    pub port: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_name: Option<String>,

    /// Container port number or name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_port: Option<IntOrString>,

    /// Exposes every container port of the workload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_discovery: Option<bool>,

    /// HTTP request timeout, e.g. `30s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    /// Istio gateways the virtual service is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateways: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<HttpRetry>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HttpRetry {
    pub attempts: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_try_timeout: Option<String>,

    /// Conditions triggering a retry, e.g. `gateway-error,connect-failure`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_on: Option<String>,
}

/// Analysis gating each promotion step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanaryAnalysis {
    /// Schedule interval, e.g. `1m`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    /// Number of checks before promotion for A/B and blue/green strategies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iterations: Option<i32>,

    /// Mirrors traffic to the canary before shifting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mirror: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 100))]
    pub mirror_weight: Option<i32>,

    /// Maximum traffic percentage routed to the canary.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 100))]
    pub max_weight: Option<i32>,

    /// Traffic increment per step.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 0, max = 100))]
    pub step_weight: Option<i32>,

    /// Explicit weights per step, overriding `stepWeight`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_weights: Option<Vec<i32>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_weight_promotion: Option<i32>,

    /// Failed checks tolerated before rollback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ready_threshold: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub canary_ready_threshold: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Vec<CanaryMetric>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Vec<CanaryWebhook>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_affinity: Option<SessionAffinity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanaryMetric {
    /// Builtin metric (`request-success-rate`, `request-duration`) or a custom name.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold_range: Option<CanaryThresholdRange>,

    /// Inline PromQL query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// `MetricTemplate` providing the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_ref: Option<CrossNamespaceObjectReference>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanaryThresholdRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CrossNamespaceObjectReference {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanaryWebhook {
    pub name: String,

    /// Hook stage: `confirm-rollout`, `pre-rollout`, `rollout`, `confirm-traffic-increase`,
    /// `confirm-promotion`, `post-rollout`, `rollback` or `event`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    pub url: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute_alert: Option<bool>,

    /// Payload sent to the webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionAffinity {
    pub cookie_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<i32>,
}

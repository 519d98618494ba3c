// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRDs owned by the [Apache APISIX ingress controller](https://apisix.apache.org/docs/ingress-controller/),
//! see <https://apisix.apache.org/docs/ingress-controller/references/apisix_route_v2/>.

use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `ApisixRoute` declares HTTP and TCP/UDP routes served by APISIX.
///
/// # Example
///
/// ```yaml
/// apiVersion: apisix.apache.org/v2
/// kind: ApisixRoute
/// metadata:
///   name: httpbin
///   namespace: web
/// spec:
///   http:
///     - name: rule1
///       match:
///         paths:
///           - /ip
///       backends:
///         - serviceName: httpbin
///           servicePort: 80
/// ```
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "apisix.apache.org",
    version = "v2",
    kind = "ApisixRoute",
    namespaced,
    doc = "ApisixRoute is used to define the route rules and upstreams for Apache APISIX."
)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteSpec {
    /// Ingress class the route belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_class_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http: Option<Vec<ApisixRouteHttp>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<Vec<ApisixRouteStream>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteHttp {
    /// Rule name, unique within the route.
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<UpstreamTimeout>,

    pub r#match: ApisixRouteHttpMatch,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub websocket: Option<bool>,

    /// `ApisixPluginConfig` applied to the rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_config_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub backends: Option<Vec<ApisixRouteHttpBackend>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<ApisixRouteAuthentication>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<ApisixRoutePlugin>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamTimeout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub send: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteHttpMatch {
    /// URI paths; a trailing `*` matches any suffix.
    pub paths: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosts: Option<Vec<String>>,

    /// Client CIDRs allowed to match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_addrs: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteHttpBackend {
    pub service_name: String,

    /// Service port number or name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_port: Option<IntOrString>,

    /// `endpoints` (default) or `service`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_granularity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,

    /// Named subset from the service's `ApisixUpstream`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subset: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteAuthentication {
    pub enable: bool,

    /// `basicAuth`, `keyAuth`, `jwtAuth`, `wolfRBAC`, `hmacAuth` or `ldapAuth`.
    pub r#type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_auth: Option<ApisixRouteAuthenticationKeyAuth>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteAuthenticationKeyAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

/// APISIX plugin attached to a rule.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRoutePlugin {
    /// Plugin name, e.g. `limit-count`.
    pub name: String,

    pub enable: bool,

    /// Plugin configuration, passed to APISIX as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(schema_with = "crate::crd::free_form_object")]
    pub config: Option<Value>,

    /// Secret whose data is merged into `config`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteStream {
    pub name: String,

    /// `TCP` or `UDP`.
    pub protocol: String,

    pub r#match: ApisixRouteStreamMatch,

    pub backend: ApisixRouteStreamBackend,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<ApisixRoutePlugin>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteStreamMatch {
    /// Port APISIX listens on for this stream route.
    pub ingress_port: i32,

    /// SNI host, for TLS streams.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApisixRouteStreamBackend {
    pub service_name: String,

    pub service_port: IntOrString,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolve_granularity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subset: Option<String>,
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRDs owned by [Kueue](https://kueue.sigs.k8s.io/), see
//! <https://kueue.sigs.k8s.io/docs/concepts/resource_flavor/>.

use k8s_openapi::api::core::v1::{Taint, Toleration};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `ResourceFlavor` describes a set of nodes workloads can be scheduled onto.
///
/// # Example
///
/// ```yaml
/// apiVersion: kueue.x-k8s.io/v1beta1
/// kind: ResourceFlavor
/// metadata:
///   name: spot
/// spec:
///   nodeLabels:
///     instance-type: spot
///   nodeTaints:
///     - key: spot
///       value: "true"
///       effect: NoSchedule
/// ```
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "kueue.x-k8s.io",
    version = "v1beta1",
    kind = "ResourceFlavor",
    doc = "ResourceFlavor is the Schema for the resourceflavors API. Workloads admitted with a flavor get its node labels injected as node selectors."
)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFlavorSpec {
    /// Labels associating the flavor with nodes; injected as node selectors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_labels: Option<BTreeMap<String, String>>,

    /// Taints the nodes of this flavor carry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_taints: Option<Vec<Taint>>,

    /// Tolerations added to admitted pods.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tolerations: Option<Vec<Toleration>>,

    /// `Topology` used for topology-aware scheduling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topology_name: Option<String>,
}

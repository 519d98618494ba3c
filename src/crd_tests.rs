// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the CRD types.

#[cfg(test)]
mod tests {
    use crate::crd::apisix::ApisixRoute;
    use crate::crd::capsule::{Tenant, TenantSpec};
    use crate::crd::cert_manager::{
        Certificate, CertificateSpec, ClusterIssuer, Issuer, IssuerReference,
    };
    use crate::crd::cilium::CiliumNetworkPolicy;
    use crate::crd::flagger::Canary;
    use crate::crd::kong::KongUpstreamPolicy;
    use crate::crd::kueue::{ResourceFlavor, ResourceFlavorSpec};
    use k8s_openapi::api::core::v1::Toleration;
    use kube::{CustomResourceExt, Resource};
    use serde_json::json;
    use std::collections::BTreeMap;

    fn scope_of<K: CustomResourceExt>() -> String {
        K::crd().spec.scope
    }

    #[test]
    fn test_group_versions_and_kinds() {
        assert_eq!(Tenant::api_version(&()), "capsule.clastix.io/v1beta2");
        assert_eq!(Certificate::api_version(&()), "cert-manager.io/v1");
        assert_eq!(Issuer::kind(&()), "Issuer");
        assert_eq!(ClusterIssuer::kind(&()), "ClusterIssuer");
        assert_eq!(CiliumNetworkPolicy::api_version(&()), "cilium.io/v2");
        assert_eq!(Canary::api_version(&()), "flagger.app/v1beta1");
        assert_eq!(ApisixRoute::api_version(&()), "apisix.apache.org/v2");
        assert_eq!(
            KongUpstreamPolicy::api_version(&()),
            "configuration.konghq.com/v1beta1"
        );
        assert_eq!(ResourceFlavor::api_version(&()), "kueue.x-k8s.io/v1beta1");
    }

    #[test]
    fn test_scopes() {
        assert_eq!(scope_of::<Tenant>(), "Cluster");
        assert_eq!(scope_of::<ClusterIssuer>(), "Cluster");
        assert_eq!(scope_of::<ResourceFlavor>(), "Cluster");
        assert_eq!(scope_of::<Certificate>(), "Namespaced");
        assert_eq!(scope_of::<Issuer>(), "Namespaced");
        assert_eq!(scope_of::<CiliumNetworkPolicy>(), "Namespaced");
        assert_eq!(scope_of::<Canary>(), "Namespaced");
        assert_eq!(scope_of::<ApisixRoute>(), "Namespaced");
        assert_eq!(scope_of::<KongUpstreamPolicy>(), "Namespaced");
    }

    #[test]
    fn test_certificate_serialization_omits_unset_fields() {
        let spec = CertificateSpec {
            secret_name: "tls".to_string(),
            issuer_ref: IssuerReference {
                name: "ca".to_string(),
                kind: None,
                group: None,
            },
            is_ca: Some(true),
            ..CertificateSpec::default()
        };

        let value = serde_json::to_value(&spec).unwrap();

        assert_eq!(
            value,
            json!({ "secretName": "tls", "issuerRef": { "name": "ca" }, "isCA": true })
        );
    }

    #[test]
    fn test_root_object_carries_api_version_and_kind() {
        let mut certificate = Certificate::new(
            "web",
            CertificateSpec {
                secret_name: "web-tls".to_string(),
                ..CertificateSpec::default()
            },
        );
        certificate.metadata.namespace = Some("default".to_string());

        let value = serde_json::to_value(&certificate).unwrap();

        assert_eq!(value["apiVersion"], "cert-manager.io/v1");
        assert_eq!(value["kind"], "Certificate");
        assert_eq!(value["metadata"]["namespace"], "default");
        assert_eq!(value["spec"]["secretName"], "web-tls");
    }

    #[test]
    fn test_cilium_acronym_fields() {
        let policy: CiliumNetworkPolicy = serde_json::from_value(json!({
            "apiVersion": "cilium.io/v2",
            "kind": "CiliumNetworkPolicy",
            "metadata": { "name": "egress", "namespace": "app" },
            "spec": {
                "endpointSelector": { "matchLabels": { "app": "web" } },
                "egress": [{
                    "toFQDNs": [{ "matchPattern": "*.example.com" }],
                    "toCIDRSet": [{ "cidr": "10.0.0.0/8", "except": ["10.96.0.0/12"] }],
                    "toPorts": [{ "ports": [{ "port": "443", "protocol": "TCP" }] }]
                }]
            }
        }))
        .unwrap();

        let egress = &policy.spec.egress.as_ref().unwrap()[0];
        assert_eq!(
            egress.to_fqdns.as_ref().unwrap()[0].match_pattern.as_deref(),
            Some("*.example.com")
        );
        assert_eq!(egress.to_cidr_set.as_ref().unwrap()[0].cidr, "10.0.0.0/8");

        let value = serde_json::to_value(&policy.spec).unwrap();
        assert!(value["egress"][0].get("toFQDNs").is_some());
        assert!(value["egress"][0].get("toCIDRSet").is_some());
    }

    #[test]
    fn test_tenant_external_ips_field_name() {
        let spec: TenantSpec = serde_json::from_value(json!({
            "owners": [{ "kind": "User", "name": "alice" }],
            "serviceOptions": { "externalIPs": { "allowed": ["10.0.0.0/24"] } }
        }))
        .unwrap();

        let allowed = &spec
            .service_options
            .as_ref()
            .and_then(|options| options.external_ips.as_ref())
            .unwrap()
            .allowed;
        assert_eq!(allowed, &vec!["10.0.0.0/24".to_string()]);
    }

    #[test]
    fn test_apisix_plugin_config_is_preserved() {
        let crd = serde_json::to_value(ApisixRoute::crd()).unwrap();
        let plugin = &crd["spec"]["versions"][0]["schema"]["openAPIV3Schema"]["properties"]
            ["spec"]["properties"]["http"]["items"]["properties"]["plugins"]["items"];

        assert_eq!(
            plugin["properties"]["config"]["x-kubernetes-preserve-unknown-fields"],
            json!(true)
        );
    }

    #[test]
    fn test_resource_flavor_with_core_types() {
        let mut labels = BTreeMap::new();
        labels.insert("instance-type".to_string(), "spot".to_string());

        let flavor = ResourceFlavor::new(
            "spot",
            ResourceFlavorSpec {
                node_labels: Some(labels),
                tolerations: Some(vec![Toleration {
                    key: Some("spot".to_string()),
                    operator: Some("Exists".to_string()),
                    effect: Some("NoSchedule".to_string()),
                    ..Toleration::default()
                }]),
                ..ResourceFlavorSpec::default()
            },
        );

        let value = serde_json::to_value(&flavor).unwrap();

        assert_eq!(value["spec"]["nodeLabels"]["instance-type"], "spot");
        assert_eq!(value["spec"]["tolerations"][0]["operator"], "Exists");
        assert!(value["spec"].get("nodeTaints").is_none());
    }

    #[test]
    fn test_canary_target_port_accepts_names_and_numbers() {
        let canary: Canary = serde_json::from_value(json!({
            "apiVersion": "flagger.app/v1beta1",
            "kind": "Canary",
            "metadata": { "name": "podinfo", "namespace": "test" },
            "spec": {
                "targetRef": { "apiVersion": "apps/v1", "kind": "Deployment", "name": "podinfo" },
                "service": { "port": 9898, "targetPort": "http" }
            }
        }))
        .unwrap();

        let value = serde_json::to_value(&canary.spec.service).unwrap();
        assert_eq!(value, json!({ "port": 9898, "targetPort": "http" }));
    }
}

// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the provider registry.

#[cfg(test)]
mod tests {
    use crate::constants::{
        DIAG_IMPORT_DROPPED_SUMMARY, DIAG_IMPORT_SUMMARY, DIAG_UNKNOWN_TYPE_SUMMARY,
    };
    use crate::diagnostics::Severity;
    use crate::crd::kueue::ResourceFlavor;
    use crate::errors::ProviderError;
    use crate::provider::*;
    use crate::resource::{ManifestHandler, ResourceHandler};
    use serde_json::json;

    const FLAVOR: &str = "k8s_kueue_x_k8s_io_resource_flavor_v1beta1";

    fn flavor_config() -> serde_json::Value {
        json!({
            "metadata": { "name": "spot" },
            "spec": {
                "node_labels": { "instance-type": "spot" },
                "node_taints": [{ "key": "spot", "value": "true", "effect": "NoSchedule" }]
            }
        })
    }

    #[test]
    fn test_metadata_lists_every_resource() {
        let provider = Provider::new().unwrap();
        let metadata = provider.metadata();

        assert_eq!(
            metadata.resources,
            vec![
                "k8s_apisix_apache_org_apisix_route_v2",
                "k8s_capsule_clastix_io_tenant_v1beta2",
                "k8s_cert_manager_io_certificate_v1",
                "k8s_cert_manager_io_cluster_issuer_v1",
                "k8s_cert_manager_io_issuer_v1",
                "k8s_cilium_io_cilium_network_policy_v2",
                "k8s_configuration_konghq_com_kong_upstream_policy_v1beta1",
                "k8s_flagger_app_canary_v1beta1",
                "k8s_kueue_x_k8s_io_resource_flavor_v1beta1",
            ]
        );
        assert_eq!(metadata.data_sources.len(), metadata.resources.len());
        assert!(metadata
            .data_sources
            .iter()
            .all(|name| name.ends_with("_manifest")));
    }

    #[test]
    fn test_duplicate_type_names_are_rejected() {
        let handlers: Vec<Box<dyn ResourceHandler>> = vec![
            Box::new(ManifestHandler::<ResourceFlavor>::new().unwrap()),
            Box::new(ManifestHandler::<ResourceFlavor>::new().unwrap()),
        ];

        let err = Provider::with_handlers(handlers).err().unwrap();
        assert!(matches!(err, ProviderError::SchemaGeneration { .. }));
    }

    #[test]
    fn test_schema_lookup() {
        let provider = Provider::new().unwrap();
        assert_eq!(provider.schema(FLAVOR).unwrap().kind, "ResourceFlavor");

        let data_source = provider
            .data_source_schema(&format!("{FLAVOR}_manifest"))
            .unwrap();
        assert_eq!(data_source.type_name, format!("{FLAVOR}_manifest"));

        assert!(provider.schema("k8s_example_com_widget_v1").is_err());
        assert!(provider.data_source_schema(FLAVOR).is_err());
    }

    #[test]
    fn test_unknown_type_produces_diagnostic() {
        let provider = Provider::new().unwrap();
        let response = provider.create("k8s_example_com_widget_v1", flavor_config());

        assert!(response.has_errors());
        assert!(response.new_state.is_none());
        assert_eq!(response.diagnostics[0].summary, DIAG_UNKNOWN_TYPE_SUMMARY);
    }

    #[test]
    fn test_lifecycle_dispatch() {
        let provider = Provider::new().unwrap();

        let created = provider.create(FLAVOR, flavor_config());
        assert!(!created.has_errors(), "{:?}", created.diagnostics);
        let state = created.new_state.unwrap();
        assert!(state["yaml"]
            .as_str()
            .unwrap()
            .contains("instance-type: spot"));

        let read = provider.read(FLAVOR, state.clone());
        assert_eq!(read.new_state.as_ref(), Some(&state));

        let updated = provider.update(FLAVOR, state.clone(), flavor_config());
        assert_eq!(updated.new_state.unwrap()["yaml"], state["yaml"]);

        let deleted = provider.delete(FLAVOR, state);
        assert!(!deleted.has_errors());
        assert!(deleted.new_state.is_none());
    }

    #[test]
    fn test_validate_accepts_data_source_names() {
        let provider = Provider::new().unwrap();

        assert!(!provider.validate(FLAVOR, flavor_config()).has_errors());
        assert!(!provider
            .validate(&format!("{FLAVOR}_manifest"), flavor_config())
            .has_errors());

        let mut config = flavor_config();
        config["spec"]["tolerations"] = json!("none");
        let response = provider.validate(FLAVOR, config);
        assert!(response.has_errors());
        assert_eq!(
            response.diagnostics[0].attribute.as_deref(),
            Some("spec.tolerations")
        );
    }

    #[test]
    fn test_read_data_source() {
        let provider = Provider::new().unwrap();

        let response = provider.read_data_source(&format!("{FLAVOR}_manifest"), flavor_config());
        let state = response.new_state.unwrap();
        assert_eq!(state["id"], "spot");
        assert_eq!(state["kind"], "ResourceFlavor");

        assert!(provider.read_data_source(FLAVOR, flavor_config()).has_errors());
    }

    #[test]
    fn test_import_dispatch() {
        let provider = Provider::new().unwrap();
        let created = provider.create(FLAVOR, flavor_config()).new_state.unwrap();

        let imported = provider.import(FLAVOR, created["yaml"].as_str().unwrap());
        assert!(!imported.has_errors(), "{:?}", imported.diagnostics);
        assert!(imported.diagnostics.is_empty());
        assert_eq!(imported.new_state.unwrap()["yaml"], created["yaml"]);
    }

    #[test]
    fn test_import_warns_about_server_populated_fields() {
        let provider = Provider::new().unwrap();
        let manifest = "apiVersion: kueue.x-k8s.io/v1beta1
kind: ResourceFlavor
metadata:
  name: spot
  uid: 0e6b5b9a-7f35-4c52-9a0e-5d2f0c6f1b11
  creationTimestamp: \"2024-05-01T10:00:00Z\"
spec:
  nodeLabels:
    instance-type: spot
";

        let response = provider.import(FLAVOR, manifest);

        assert!(!response.has_errors(), "{:?}", response.diagnostics);
        assert_eq!(response.diagnostics.len(), 1);
        let warning = &response.diagnostics[0];
        assert_eq!(warning.severity, Severity::Warning);
        assert_eq!(warning.summary, DIAG_IMPORT_DROPPED_SUMMARY);
        assert!(warning.detail.ends_with("metadata.creationTimestamp, metadata.uid"));
        assert_eq!(response.new_state.unwrap()["metadata"]["name"], "spot");
    }

    #[test]
    fn test_import_of_malformed_yaml_reports_import_failure() {
        let provider = Provider::new().unwrap();

        let response = provider.import(FLAVOR, "a: [unclosed");

        assert!(response.has_errors());
        assert_eq!(response.diagnostics[0].summary, DIAG_IMPORT_SUMMARY);
    }
}

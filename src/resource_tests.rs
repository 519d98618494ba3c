// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for the resource lifecycle handlers.

#[cfg(test)]
mod tests {
    use crate::crd::capsule::Tenant;
    use crate::crd::cert_manager::{Certificate, PrivateKeyAlgorithm};
    use crate::crd::flagger::Canary;
    use crate::errors::ProviderError;
    use crate::resource::*;
    use serde_json::{json, Value};

    fn certificate_handler() -> ManifestHandler<Certificate> {
        ManifestHandler::new().unwrap()
    }

    fn certificate_plan() -> Value {
        json!({
            "metadata": {
                "name": "example-com",
                "namespace": "web",
                "labels": { "app.kubernetes.io/name": "web" }
            },
            "spec": {
                "secret_name": "example-com-tls",
                "issuer_ref": { "name": "letsencrypt", "kind": "ClusterIssuer" },
                "dns_names": ["example.com", "www.example.com"],
                "private_key": { "algorithm": "ECDSA", "size": 256 },
                "is_ca": null
            }
        })
    }

    fn yaml(state: &Value) -> Certificate {
        serde_yaml::from_str(state["yaml"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_create_stamps_constants_and_renders_yaml() {
        let state = certificate_handler().create(certificate_plan()).unwrap();

        assert_eq!(state["api_version"], "cert-manager.io/v1");
        assert_eq!(state["kind"], "Certificate");
        assert!(state["id"].as_str().unwrap().parse::<i64>().unwrap() > 0);

        let text = state["yaml"].as_str().unwrap();
        assert!(text.starts_with("apiVersion: cert-manager.io/v1\nkind: Certificate\n"));
        assert!(text.contains("secretName: example-com-tls"));
        assert!(!text.contains("isCA"));

        let certificate = yaml(&state);
        assert_eq!(certificate.metadata.name.as_deref(), Some("example-com"));
        assert_eq!(certificate.metadata.namespace.as_deref(), Some("web"));
        assert_eq!(certificate.spec.issuer_ref.kind.as_deref(), Some("ClusterIssuer"));
        assert_eq!(
            certificate.spec.private_key.and_then(|key| key.algorithm),
            Some(PrivateKeyAlgorithm::Ecdsa)
        );
    }

    #[test]
    fn test_create_overwrites_api_version_and_kind() {
        let mut plan = certificate_plan();
        plan["api_version"] = json!("example.com/v9");
        plan["kind"] = json!("Bogus");

        let state = certificate_handler().create(plan).unwrap();

        assert_eq!(state["api_version"], "cert-manager.io/v1");
        assert_eq!(state["kind"], "Certificate");
    }

    #[test]
    fn test_read_and_delete_leave_state_alone() {
        let handler = certificate_handler();
        let state = handler.create(certificate_plan()).unwrap();

        assert_eq!(handler.read(state.clone()).unwrap(), state);
        assert!(handler.delete(state).is_ok());
    }

    #[test]
    fn test_update_matches_create_except_id() {
        let handler = certificate_handler();
        let created = handler.create(certificate_plan()).unwrap();
        let updated = handler.update(created.clone(), certificate_plan()).unwrap();

        assert_eq!(updated["yaml"], created["yaml"]);
        assert_eq!(updated["metadata"], created["metadata"]);
        assert_eq!(updated["spec"], created["spec"]);
        assert!(updated["id"].is_string());
    }

    #[test]
    fn test_namespace_rules() {
        let mut plan = certificate_plan();
        plan["metadata"]["namespace"] = Value::Null;
        let err = certificate_handler().create(plan).unwrap_err();
        assert_eq!(err.attribute_path(), Some("metadata.namespace"));

        let tenant: ManifestHandler<Tenant> = ManifestHandler::new().unwrap();
        let err = tenant
            .create(json!({
                "metadata": { "name": "oil", "namespace": "default" },
                "spec": { "owners": [{ "kind": "User", "name": "alice" }] }
            }))
            .unwrap_err();
        assert!(matches!(err, ProviderError::UnknownAttribute { .. }));
    }

    #[test]
    fn test_missing_spec_is_rejected_when_required() {
        let err = certificate_handler()
            .create(json!({ "metadata": { "name": "c", "namespace": "n" } }))
            .unwrap_err();
        assert_eq!(err.attribute_path(), Some("spec"));
    }

    #[test]
    fn test_invalid_enum_value_is_an_invalid_spec() {
        let mut plan = certificate_plan();
        plan["spec"]["private_key"]["algorithm"] = json!("DSA");

        let err = certificate_handler().create(plan).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidSpec { .. }));
    }

    #[test]
    fn test_unknown_root_attribute_is_invalid_state() {
        let mut plan = certificate_plan();
        plan["status"] = json!({});

        let err = certificate_handler().create(plan).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidState { .. }));
    }

    #[test]
    fn test_validate_does_not_render() {
        let handler = certificate_handler();
        assert!(handler.validate(certificate_plan()).is_ok());

        let mut plan = certificate_plan();
        plan["spec"]["dns_names"] = json!("example.com");
        assert!(matches!(
            handler.validate(plan),
            Err(ProviderError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_data_source_id_is_stable() {
        let handler = certificate_handler();
        let first = handler.read_data_source(certificate_plan()).unwrap();
        let second = handler.read_data_source(certificate_plan()).unwrap();

        assert_eq!(first["id"], "web/example-com");
        assert_eq!(first, second);
    }

    #[test]
    fn test_import_reproduces_rendered_yaml() {
        let handler = certificate_handler();
        let created = handler.create(certificate_plan()).unwrap();

        let imported = handler.import(created["yaml"].as_str().unwrap()).unwrap();
        assert!(imported.dropped.is_empty());

        let state = imported.state;
        assert_eq!(state["yaml"], created["yaml"]);
        assert_eq!(state["metadata"]["namespace"], "web");
        assert_eq!(state["spec"]["secret_name"], "example-com-tls");
        assert!(state["spec"]["common_name"].is_null());
    }

    #[test]
    fn test_import_rejects_spec_fields_without_attributes() {
        let manifest = "apiVersion: cert-manager.io/v1
kind: Certificate
metadata:
  name: c
  namespace: n
spec:
  secretName: s
  issuerRef:
    name: le
  bogusField: 1
";

        let err = certificate_handler().import(manifest).unwrap_err();
        assert!(matches!(err, ProviderError::UnknownAttribute { .. }));
        assert_eq!(err.attribute_path(), Some("spec.bogusField"));

        let nested = manifest.replace("  bogusField: 1\n", "  keystores:\n    pkcs12:\n      create: true\n");
        let err = certificate_handler().import(&nested).unwrap_err();
        assert_eq!(err.attribute_path(), Some("spec.keystores"));
    }

    #[test]
    fn test_import_rejects_unknown_root_fields() {
        let manifest = "apiVersion: cert-manager.io/v1
kind: Certificate
metadata:
  name: c
  namespace: n
spec:
  secretName: s
  issuerRef:
    name: le
extra: true
";

        let err = certificate_handler().import(manifest).unwrap_err();
        assert_eq!(err.attribute_path(), Some("extra"));
    }

    #[test]
    fn test_import_reports_server_populated_fields() {
        let manifest = "apiVersion: cert-manager.io/v1
kind: Certificate
metadata:
  name: c
  namespace: n
  uid: 9f1c0c3e-1b7a-4c36-a9a4-63c1bd1f1e4a
  resourceVersion: \"4711\"
spec:
  secretName: s
  issuerRef:
    name: le
status:
  conditions: []
";

        let imported = certificate_handler().import(manifest).unwrap();

        assert_eq!(
            imported.dropped,
            vec!["metadata.resourceVersion", "metadata.uid", "status"]
        );
        let text = imported.state["yaml"].as_str().unwrap();
        assert!(!text.contains("uid"));
        assert!(!text.contains("status"));
    }

    #[test]
    fn test_import_drops_namespace_of_cluster_scoped_kind() {
        let tenant: ManifestHandler<Tenant> = ManifestHandler::new().unwrap();
        let manifest = "apiVersion: capsule.clastix.io/v1beta2
kind: Tenant
metadata:
  name: oil
  namespace: default
spec:
  owners:
  - kind: User
    name: alice
";

        let imported = tenant.import(manifest).unwrap();

        assert_eq!(imported.dropped, vec!["metadata.namespace"]);
        assert!(imported.state["metadata"].get("namespace").is_none());
    }

    #[test]
    fn test_import_of_malformed_yaml_is_an_invalid_manifest() {
        let err = certificate_handler().import("a: [unclosed").unwrap_err();
        assert!(matches!(err, ProviderError::InvalidManifest(_)));
    }

    #[test]
    fn test_import_renders_numeric_target_port_as_integer() {
        let canary: ManifestHandler<Canary> = ManifestHandler::new().unwrap();
        let manifest = "apiVersion: flagger.app/v1beta1
kind: Canary
metadata:
  name: podinfo
  namespace: test
spec:
  targetRef:
    apiVersion: apps/v1
    kind: Deployment
    name: podinfo
  service:
    port: 9898
    targetPort: \"8080\"
";

        let state = canary.import(manifest).unwrap().state;

        assert_eq!(state["spec"]["service"]["target_port"], "8080");
        let text = state["yaml"].as_str().unwrap();
        assert!(text.contains("targetPort: 8080\n"), "{text}");
    }

    #[test]
    fn test_import_rejects_other_kinds() {
        let manifest = "apiVersion: cert-manager.io/v1\nkind: Issuer\nmetadata:\n  name: x\n  namespace: y\nspec: {}\n";

        let err = certificate_handler().import(manifest).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Manifest is cert-manager.io/v1/Issuer, expected cert-manager.io/v1/Certificate"
        );
    }

    #[test]
    fn test_model_round_trips_through_json() {
        let model: ResourceModel = serde_json::from_value(certificate_plan()).unwrap();
        assert_eq!(model.metadata.name, "example-com");
        assert!(model.id.is_none());

        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(value["metadata"]["namespace"], "web");
    }
}

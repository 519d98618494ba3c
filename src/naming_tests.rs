// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Unit tests for attribute and type name conventions.

#[cfg(test)]
mod tests {
    use crate::naming::*;

    #[test]
    fn test_snake_case_simple_fields() {
        assert_eq!(to_snake_case("secretName"), "secret_name");
        assert_eq!(to_snake_case("apiVersion"), "api_version");
        assert_eq!(to_snake_case("owners"), "owners");
        assert_eq!(to_snake_case("isCA"), "is_ca");
    }

    #[test]
    fn test_snake_case_acronyms() {
        assert_eq!(to_snake_case("fromCIDR"), "from_cidr");
        assert_eq!(to_snake_case("fromCIDRSet"), "from_cidr_set");
        assert_eq!(to_snake_case("toFQDNs"), "to_fqd_ns");
        assert_eq!(to_snake_case("hostedZoneID"), "hosted_zone_id");
        assert_eq!(to_snake_case("externalIPs"), "external_i_ps");
    }

    #[test]
    fn test_snake_case_digits_stay_attached() {
        assert_eq!(to_snake_case("ipv4Address"), "ipv4_address");
        assert_eq!(to_snake_case("http01"), "http01");
        assert_eq!(to_snake_case("dns01"), "dns01");
    }

    #[test]
    fn test_snake_case_separators() {
        assert_eq!(to_snake_case("cert-manager.io"), "cert_manager_io");
        assert_eq!(to_snake_case("a--b"), "a_b");
    }

    #[test]
    fn test_resource_type_names() {
        assert_eq!(
            resource_type_name("cert-manager.io", "v1", "Certificate"),
            "k8s_cert_manager_io_certificate_v1"
        );
        assert_eq!(
            resource_type_name("capsule.clastix.io", "v1beta2", "Tenant"),
            "k8s_capsule_clastix_io_tenant_v1beta2"
        );
        assert_eq!(
            resource_type_name("cilium.io", "v2", "CiliumNetworkPolicy"),
            "k8s_cilium_io_cilium_network_policy_v2"
        );
        assert_eq!(
            resource_type_name("configuration.konghq.com", "v1beta1", "KongUpstreamPolicy"),
            "k8s_configuration_konghq_com_kong_upstream_policy_v1beta1"
        );
    }

    #[test]
    fn test_data_source_names() {
        let resource = "k8s_flagger_app_canary_v1beta1";
        let data_source = data_source_type_name(resource);
        assert_eq!(data_source, "k8s_flagger_app_canary_v1beta1_manifest");
        assert_eq!(resource_for_data_source(&data_source), Some(resource));
        assert_eq!(resource_for_data_source(resource), None);
    }
}

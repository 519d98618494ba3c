// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! CRDs owned by [cert-manager](https://cert-manager.io/), see
//! [their API docs](https://cert-manager.io/docs/reference/api-docs/).

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `Certificate` requests an X.509 certificate from an issuer and stores it in a Secret.
///
/// # Example
///
/// ```yaml
/// apiVersion: cert-manager.io/v1
/// kind: Certificate
/// metadata:
///   name: example-com
///   namespace: web
/// spec:
///   secretName: example-com-tls
///   dnsNames:
///     - example.com
///   issuerRef:
///     name: letsencrypt
///     kind: ClusterIssuer
/// ```
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cert-manager.io",
    version = "v1",
    kind = "Certificate",
    namespaced,
    doc = "A Certificate resource should be created to ensure an up to date and signed X.509 certificate is stored in the Kubernetes Secret resource named in spec.secretName."
)]
#[serde(rename_all = "camelCase")]
pub struct CertificateSpec {
    /// Name of the Secret that will hold the signed certificate and private key.
    pub secret_name: String,

    /// Reference to the issuer responsible for issuing the certificate.
    pub issuer_ref: IssuerReference,

    /// Common name to be used on the certificate. Ignored by most clients in favour of `dnsNames`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,

    /// Requested lifetime of the certificate, e.g. `2160h`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    /// How long before expiry the certificate is renewed, e.g. `360h`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renew_before: Option<String>,

    /// DNS subject alternative names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,

    /// IP address subject alternative names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_addresses: Option<Vec<String>>,

    /// URI subject alternative names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uris: Option<Vec<String>>,

    /// Email subject alternative names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_addresses: Option<Vec<String>>,

    /// Full X.509 subject of the certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<X509Subject>,

    /// Private key options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key: Option<CertificatePrivateKey>,

    /// Key usages requested, e.g. `server auth`, `digital signature`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usages: Option<Vec<String>>,

    /// Marks the certificate as valid for certificate signing.
    #[serde(rename = "isCA", skip_serializing_if = "Option::is_none")]
    pub is_ca: Option<bool>,

    /// Number of CertificateRequest revisions to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1))]
    pub revision_history_limit: Option<i32>,

    /// Labels and annotations copied onto the generated Secret.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_template: Option<SecretTemplate>,
}

/// See <https://cert-manager.io/docs/reference/api-docs/#meta.cert-manager.io/v1.ObjectReference>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssuerReference {
    /// Name of the issuer.
    pub name: String,

    /// `Issuer` or `ClusterIssuer`. Defaults to `Issuer`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// API group of the issuer. Defaults to `cert-manager.io`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct X509Subject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_units: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub localities: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub provinces: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_addresses: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_codes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// See <https://cert-manager.io/docs/reference/api-docs/#cert-manager.io/v1.CertificatePrivateKey>.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificatePrivateKey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<PrivateKeyAlgorithm>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<PrivateKeyEncoding>,

    /// Key size in bits. Only meaningful for RSA and ECDSA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,

    /// Whether a new private key is generated on each issuance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_policy: Option<RotationPolicy>,
}

/// Private key algorithm: `RSA`, `ECDSA` or `Ed25519`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PrivateKeyAlgorithm {
    #[serde(rename = "RSA")]
    Rsa,
    #[serde(rename = "ECDSA")]
    Ecdsa,
    Ed25519,
}

/// Private key encoding: `PKCS1` or `PKCS8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PrivateKeyEncoding {
    #[serde(rename = "PKCS1")]
    Pkcs1,
    #[serde(rename = "PKCS8")]
    Pkcs8,
}

/// Private key rotation policy: `Never` or `Always`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum RotationPolicy {
    Never,
    Always,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

/// `Issuer` represents a certificate authority able to sign certificates in its namespace.
///
/// Exactly one of `acme`, `ca`, `selfSigned` or `vault` should be set.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cert-manager.io",
    version = "v1",
    kind = "Issuer",
    namespaced,
    doc = "An Issuer represents a certificate issuing authority which can be referenced as part of issuerRef fields. It is scoped to a single namespace."
)]
#[serde(rename_all = "camelCase")]
pub struct IssuerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acme: Option<AcmeIssuer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<CaIssuer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_signed: Option<SelfSignedIssuer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault: Option<VaultIssuer>,
}

/// `ClusterIssuer` is the cluster-scoped counterpart of [`Issuer`].
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "cert-manager.io",
    version = "v1",
    kind = "ClusterIssuer",
    doc = "A ClusterIssuer represents a certificate issuing authority which can be referenced as part of issuerRef fields. It is similar to an Issuer, however it is cluster-scoped."
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterIssuerSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acme: Option<AcmeIssuer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca: Option<CaIssuer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_signed: Option<SelfSignedIssuer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vault: Option<VaultIssuer>,
}

/// Reference to a key of a Secret in the issuer's namespace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeySelector {
    /// Name of the Secret.
    pub name: String,

    /// Key inside the Secret. Some fields default to a well-known key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

/// ACME (RFC 8555) issuer such as Let's Encrypt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcmeIssuer {
    /// ACME directory URL, e.g. `https://acme-v02.api.letsencrypt.org/directory`.
    pub server: String,

    /// Email address registered with the ACME account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Secret storing the ACME account private key.
    pub private_key_secret_ref: SecretKeySelector,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_tls_verify: Option<bool>,

    /// Chain to prefer when the ACME server offers several, e.g. `ISRG Root X1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_chain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_account_key_generation: Option<bool>,

    /// Challenge solvers, tried in order of selector specificity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solvers: Option<Vec<AcmeChallengeSolver>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcmeChallengeSolver {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<CertificateDnsNameSelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub http01: Option<AcmeChallengeSolverHttp01>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns01: Option<AcmeChallengeSolverDns01>,
}

/// Restricts which certificates a solver is used for.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CertificateDnsNameSelector {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_labels: Option<BTreeMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_zones: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcmeChallengeSolverHttp01 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress: Option<AcmeChallengeSolverHttp01Ingress>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcmeChallengeSolverHttp01Ingress {
    /// Ingress class annotation value for the solver ingress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingress_class_name: Option<String>,

    /// Name of an existing ingress to edit instead of creating one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcmeChallengeSolverDns01 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloudflare: Option<AcmeIssuerDns01ProviderCloudflare>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route53: Option<AcmeIssuerDns01ProviderRoute53>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcmeIssuerDns01ProviderCloudflare {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token_secret_ref: Option<SecretKeySelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_secret_ref: Option<SecretKeySelector>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcmeIssuerDns01ProviderRoute53 {
    /// AWS region, e.g. `eu-west-1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(rename = "hostedZoneID", skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,

    #[serde(rename = "accessKeyID", skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_access_key_secret_ref: Option<SecretKeySelector>,

    /// IAM role to assume.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Issuer signing with a CA key pair stored in a Secret.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CaIssuer {
    /// Secret holding `tls.crt` and `tls.key` of the signing CA.
    pub secret_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crl_distribution_points: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocsp_servers: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SelfSignedIssuer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crl_distribution_points: Option<Vec<String>>,
}

/// Issuer backed by a HashiCorp Vault PKI mount.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VaultIssuer {
    /// Vault server address, e.g. `https://vault.example.com:8200`.
    pub server: String,

    /// Signing path, e.g. `pki_int/sign/example-dot-com`.
    pub path: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Base64 PEM bundle used to validate the Vault server certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_bundle: Option<String>,

    pub auth: VaultAuth,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VaultAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_secret_ref: Option<SecretKeySelector>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kubernetes: Option<VaultKubernetesAuth>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VaultKubernetesAuth {
    /// Vault role to authenticate as.
    pub role: String,

    /// Mount path of the Kubernetes auth method. Defaults to `/v1/auth/kubernetes`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mount_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<SecretKeySelector>,
}

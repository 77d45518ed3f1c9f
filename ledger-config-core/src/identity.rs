//! Client identity, credential store and certificate authority records.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location and/or inline contents of a PEM file
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TlsConfig {
    /// Path of the PEM file
    #[serde(default)]
    pub path: PathBuf,

    /// Inline PEM; takes priority over `path` when non-empty
    #[serde(default)]
    pub pem: String,
}

impl TlsConfig {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pem: String::new(),
        }
    }

    /// Whether neither a path nor inline PEM is set
    pub fn is_empty(&self) -> bool {
        self.path.as_os_str().is_empty() && self.pem.is_empty()
    }
}

/// Private key and certificate used together for client authentication
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TlsKeyPair {
    pub key: TlsConfig,
    pub cert: TlsConfig,
}

/// Client side of a mutual TLS setup
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MutualTlsConfig {
    pub client: TlsKeyPair,
}

/// Where the crypto suite keeps private keys
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CryptoStoreType {
    pub path: PathBuf,
}

/// Where enrolled user credentials are kept
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CredentialStoreType {
    pub path: PathBuf,
    #[serde(default)]
    pub crypto_store: CryptoStoreType,
}

/// Client section of the identity configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Organization the client belongs to
    #[serde(default)]
    pub organization: String,

    pub credential_store: CredentialStoreType,

    /// Client key pair, present only when mutual TLS is in use
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_certs: Option<MutualTlsConfig>,
}

/// Registrar credentials for a certificate authority
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnrollCredentials {
    pub enroll_id: String,
    pub enroll_secret: String,
}

/// Settings for one certificate authority
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CaConfig {
    pub ca_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registrar: Option<EnrollCredentials>,
}

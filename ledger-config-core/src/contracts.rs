//! # Capability Contracts
//!
//! The three configuration interfaces a ledger client reads from. A single
//! provider type may implement all of them; consumers depend only on the
//! contract they need, usually as `&dyn EndpointConfig` or
//! `Arc<dyn IdentityConfig>`.

use bytes::Bytes;
use serde_json::Value;
use std::path::PathBuf;
use std::time::Duration;

use crate::identity::{CaConfig, ClientConfig};
use crate::topology::{
    ChannelNetworkConfig, ChannelPeer, NetworkConfig, NetworkPeer, OrdererConfig, PeerConfig,
};
use crate::types::{CertPool, EventServiceType, TimeoutType, TlsCertificate};
use crate::ConfigResult;

/// Settings for the cryptographic suite.
pub trait CryptoSuiteConfig: Send + Sync {
    fn is_security_enabled(&self) -> bool;

    /// Hash family, e.g. `"SHA2"`
    fn security_algorithm(&self) -> String;

    /// Security level in bits
    fn security_level(&self) -> u32;

    /// Provider name, e.g. `"sw"` or `"pkcs11"`
    fn security_provider(&self) -> String;

    /// Path of the PKCS#11 library; empty for software providers
    fn security_provider_lib_path(&self) -> String;

    fn security_provider_label(&self) -> String;

    fn security_provider_pin(&self) -> String;

    fn soft_verify(&self) -> bool;

    fn tcert_batch_size(&self) -> usize;
}

/// Network topology and endpoint settings.
///
/// Point lookups return `Ok(None)` when the configuration has no entry and
/// the provider treats that as a normal outcome; they return
/// [`crate::ConfigError::NotFound`] when a missing entry is an error.
pub trait EndpointConfig: Send + Sync {
    /// Timeout for the given category
    fn timeout(&self, kind: TimeoutType) -> Duration;

    /// Timeout for the given category, or the provider's default
    fn timeout_or_default(&self, kind: TimeoutType) -> Duration;

    fn msp_id(&self, org: &str) -> ConfigResult<String>;

    fn peer_msp_id(&self, name: &str) -> ConfigResult<String>;

    /// All orderers defined in the network
    fn orderers_config(&self) -> ConfigResult<Vec<OrdererConfig>>;

    fn orderer_config(&self, name: &str) -> ConfigResult<OrdererConfig>;

    /// Peers belonging to an organization
    fn peers_config(&self, org: &str) -> ConfigResult<Vec<PeerConfig>>;

    fn peer_config(&self, org: &str, name: &str) -> ConfigResult<Option<PeerConfig>>;

    fn peer_config_by_url(&self, url: &str) -> ConfigResult<PeerConfig>;

    fn network_config(&self) -> ConfigResult<Option<NetworkConfig>>;

    /// Every peer in the network, across organizations
    fn network_peers(&self) -> ConfigResult<Vec<NetworkPeer>>;

    fn channel_config(&self, name: &str) -> ConfigResult<Option<ChannelNetworkConfig>>;

    /// Peers joined to a channel, with their roles on it
    fn channel_peers(&self, name: &str) -> ConfigResult<Vec<ChannelPeer>>;

    fn channel_orderers(&self, name: &str) -> ConfigResult<Vec<OrdererConfig>>;

    /// Trusted CA pool, extended with `certs`
    fn tls_ca_cert_pool(&self, certs: &[Bytes]) -> ConfigResult<Option<CertPool>>;

    fn tls_client_certs(&self) -> ConfigResult<Vec<TlsCertificate>>;

    fn key_store_path(&self) -> PathBuf;

    fn credential_store_path(&self) -> PathBuf;

    fn ca_key_store_path(&self) -> PathBuf;

    fn crypto_config_path(&self) -> PathBuf;

    fn event_service_type(&self) -> EventServiceType;

    /// Raw configuration value by dotted key
    fn lookup(&self, key: &str) -> Option<Value>;
}

/// Client identity and certificate authority settings.
pub trait IdentityConfig: Send + Sync {
    fn client(&self) -> ConfigResult<ClientConfig>;

    fn ca_config(&self, org: &str) -> ConfigResult<CaConfig>;

    /// DER encoded server certificates of the organization's CA
    fn ca_server_certs(&self, org: &str) -> ConfigResult<Vec<Bytes>>;

    fn ca_client_key(&self, org: &str) -> ConfigResult<Option<Bytes>>;

    fn ca_client_cert(&self, org: &str) -> ConfigResult<Option<Bytes>>;
}

//! Configurable fake implementing all three configuration contracts.

use bytes::Bytes;
use ledger_config_core::{
    CaConfig, CertPool, ChannelNetworkConfig, ChannelPeer, ClientConfig, ConfigError,
    ConfigResult, CredentialStoreType, CryptoSuiteConfig, EndpointConfig, EventServiceType,
    IdentityConfig, MutualTlsConfig, NetworkConfig, NetworkPeer, OrdererConfig,
    PeerChannelConfig, PeerConfig, TimeoutType, TlsCertificate, TlsConfig, TlsKeyPair,
};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, trace};

use crate::options::MockConfigOptions;

/// URL of every peer and orderer the fake makes up.
pub const MOCK_URL: &str = "example.com";
/// Peer URL that never resolves.
pub const INVALID_PEER_URL: &str = "invalid";
/// Orderer and channel name that never resolves.
pub const INVALID_ORDERER_NAME: &str = "Invalid";
/// Channel name whose peer list is empty.
pub const NO_CHANNEL_PEERS: &str = "noChannelPeers";
/// Channel name whose single peer serves no role.
pub const NO_ENDPOINTS: &str = "noEndpoints";
/// Lookup key that never resolves, even if a value was stored under it.
pub const INVALID_LOOKUP_KEY: &str = "invalid";

pub const CLIENT_CREDENTIAL_STORE_PATH: &str = "/tmp/fabsdkgo_test/store";
pub const MUTUAL_TLS_CLIENT_KEY_PATH: &str =
    "../../../test/fixtures/config/mutual_tls/client_sdk_go-key.pem";
pub const MUTUAL_TLS_CLIENT_CERT_PATH: &str =
    "../../../test/fixtures/config/mutual_tls/client_sdk_go.pem";
pub const KEY_STORE_PATH: &str = "/tmp/fabsdkgo_test";
pub const CREDENTIAL_STORE_PATH: &str = "/tmp/userstore";

const TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Test double for [`CryptoSuiteConfig`], [`EndpointConfig`] and
/// [`IdentityConfig`].
///
/// Every query answers from an override if one was set, otherwise from a
/// fixed literal. A handful of sentinel inputs fail deterministically so
/// tests can drive the error paths of the code under test:
///
/// - `peer_config_by_url("invalid")` fails with `NotFound`
/// - `orderer_config("Invalid")` and `channel_orderers("Invalid")` fail with `NotFound`
/// - `tls_ca_cert_pool` fails with `InvalidConfiguration` when built with `error_case`
/// - `network_peers` fails with `NotFound` until an override is set
///
/// Configure the fake completely before handing it to the code under test.
/// Setters take `&mut self`; once the fake is shared (for example behind an
/// `Arc`) it can only be read. It holds no locks.
///
/// # Examples
///
/// ```rust
/// use ledger_config_core::{EndpointConfig, PeerConfig};
/// use ledger_config_testing::MockConfig;
///
/// let mut config = MockConfig::new();
/// config.set_custom_peer_cfg(PeerConfig::with_url("peer0.org1.example.com:7051"));
///
/// let peer = config.peer_config_by_url("grpcs://anything").unwrap();
/// assert_eq!(peer.url, "peer0.org1.example.com:7051");
/// assert!(config.peer_config_by_url("invalid").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    options: MockConfigOptions,
    custom_network_peer_cfg: Option<Vec<NetworkPeer>>,
    custom_peer_cfg: Option<PeerConfig>,
    custom_orderer_cfg: Option<OrdererConfig>,
    custom_random_orderer_cfg: Option<OrdererConfig>,
    lookup_values: HashMap<String, Value>,
}

impl MockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn customized(tls_enabled: bool, mutual_tls_enabled: bool, error_case: bool) -> Self {
        Self::with_options(
            MockConfigOptions::new()
                .with_tls_enabled(tls_enabled)
                .with_mutual_tls_enabled(mutual_tls_enabled)
                .with_error_case(error_case),
        )
    }

    pub fn with_options(options: MockConfigOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> MockConfigOptions {
        self.options
    }

    pub fn tls_enabled(&self) -> bool {
        self.options.tls_enabled
    }

    pub fn mutual_tls_enabled(&self) -> bool {
        self.options.mutual_tls_enabled
    }

    pub fn error_case(&self) -> bool {
        self.options.error_case
    }

    /// Answer [`EndpointConfig::network_peers`] with `peers`.
    pub fn set_custom_network_peer_cfg(&mut self, peers: Vec<NetworkPeer>) -> &mut Self {
        self.custom_network_peer_cfg = Some(peers);
        self
    }

    /// Answer every valid [`EndpointConfig::peer_config_by_url`] with `peer`.
    pub fn set_custom_peer_cfg(&mut self, peer: PeerConfig) -> &mut Self {
        self.custom_peer_cfg = Some(peer);
        self
    }

    /// Answer every valid orderer lookup with `orderer`.
    pub fn set_custom_orderer_cfg(&mut self, orderer: OrdererConfig) -> &mut Self {
        self.custom_orderer_cfg = Some(orderer);
        self
    }

    /// Answer [`MockConfig::random_orderer_config`] with `orderer`.
    pub fn set_custom_random_orderer_cfg(&mut self, orderer: OrdererConfig) -> &mut Self {
        self.custom_random_orderer_cfg = Some(orderer);
        self
    }

    /// Store a value for [`EndpointConfig::lookup`].
    pub fn set_lookup_value(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.lookup_values.insert(key.into(), value.into());
        self
    }

    /// Orderer a client would pick when it needs any orderer.
    ///
    /// Falls back to the regular orderer resolution when no random orderer
    /// override is set.
    pub fn random_orderer_config(&self) -> ConfigResult<OrdererConfig> {
        if let Some(orderer) = &self.custom_random_orderer_cfg {
            trace!(url = %orderer.url, "returning custom random orderer");
            return Ok(orderer.clone());
        }
        self.orderer_config("")
    }
}

impl CryptoSuiteConfig for MockConfig {
    fn is_security_enabled(&self) -> bool {
        false
    }

    fn security_algorithm(&self) -> String {
        "SHA2".to_string()
    }

    fn security_level(&self) -> u32 {
        256
    }

    fn security_provider(&self) -> String {
        "sw".to_string()
    }

    fn security_provider_lib_path(&self) -> String {
        String::new()
    }

    fn security_provider_label(&self) -> String {
        String::new()
    }

    fn security_provider_pin(&self) -> String {
        String::new()
    }

    fn soft_verify(&self) -> bool {
        false
    }

    fn tcert_batch_size(&self) -> usize {
        0
    }
}

impl EndpointConfig for MockConfig {
    fn timeout(&self, _kind: TimeoutType) -> Duration {
        TIMEOUT
    }

    fn timeout_or_default(&self, _kind: TimeoutType) -> Duration {
        DEFAULT_TIMEOUT
    }

    fn msp_id(&self, _org: &str) -> ConfigResult<String> {
        Ok(String::new())
    }

    fn peer_msp_id(&self, _name: &str) -> ConfigResult<String> {
        Ok(String::new())
    }

    fn orderers_config(&self) -> ConfigResult<Vec<OrdererConfig>> {
        Ok(vec![self.orderer_config("")?])
    }

    fn orderer_config(&self, name: &str) -> ConfigResult<OrdererConfig> {
        if name == INVALID_ORDERER_NAME {
            debug!(orderer = name, "rejecting orderer lookup");
            return Err(ConfigError::not_found("no orderer"));
        }
        if let Some(orderer) = &self.custom_orderer_cfg {
            trace!(orderer = name, url = %orderer.url, "returning custom orderer");
            return Ok(orderer.clone());
        }
        Ok(OrdererConfig::with_url(MOCK_URL))
    }

    fn peers_config(&self, _org: &str) -> ConfigResult<Vec<PeerConfig>> {
        Ok(Vec::new())
    }

    fn peer_config(&self, _org: &str, _name: &str) -> ConfigResult<Option<PeerConfig>> {
        Ok(None)
    }

    fn peer_config_by_url(&self, url: &str) -> ConfigResult<PeerConfig> {
        if url == INVALID_PEER_URL {
            debug!(url, "rejecting peer lookup");
            return Err(ConfigError::not_found("no peer"));
        }
        if let Some(peer) = &self.custom_peer_cfg {
            trace!(url, custom_url = %peer.url, "returning custom peer");
            return Ok(peer.clone());
        }
        Ok(PeerConfig::with_url(MOCK_URL))
    }

    fn network_config(&self) -> ConfigResult<Option<NetworkConfig>> {
        Ok(None)
    }

    fn network_peers(&self) -> ConfigResult<Vec<NetworkPeer>> {
        match &self.custom_network_peer_cfg {
            Some(peers) => {
                trace!(count = peers.len(), "returning custom network peers");
                Ok(peers.clone())
            }
            None => {
                debug!("no network peers configured");
                Err(ConfigError::not_found("no config"))
            }
        }
    }

    fn channel_config(&self, _name: &str) -> ConfigResult<Option<ChannelNetworkConfig>> {
        Ok(Some(ChannelNetworkConfig::default()))
    }

    fn channel_peers(&self, name: &str) -> ConfigResult<Vec<ChannelPeer>> {
        let peer_channel_config = match name {
            NO_CHANNEL_PEERS => return Ok(Vec::new()),
            NO_ENDPOINTS => PeerChannelConfig::no_roles(),
            _ => PeerChannelConfig::all_roles(),
        };

        Ok(vec![ChannelPeer {
            peer_channel_config,
            network_peer: NetworkPeer {
                peer_config: PeerConfig::with_url(MOCK_URL),
                ..Default::default()
            },
        }])
    }

    fn channel_orderers(&self, name: &str) -> ConfigResult<Vec<OrdererConfig>> {
        if name == INVALID_ORDERER_NAME {
            debug!(channel = name, "rejecting channel orderer lookup");
            return Err(ConfigError::not_found("no orderer"));
        }
        Ok(vec![self.orderer_config("")?])
    }

    fn tls_ca_cert_pool(&self, _certs: &[Bytes]) -> ConfigResult<Option<CertPool>> {
        if self.options.error_case {
            debug!("injecting TLS CA cert pool failure");
            return Err(ConfigError::invalid_configuration(
                "just to test error scenario",
            ));
        }
        Ok(None)
    }

    fn tls_client_certs(&self) -> ConfigResult<Vec<TlsCertificate>> {
        Ok(Vec::new())
    }

    fn key_store_path(&self) -> PathBuf {
        PathBuf::from(KEY_STORE_PATH)
    }

    fn credential_store_path(&self) -> PathBuf {
        PathBuf::from(CREDENTIAL_STORE_PATH)
    }

    fn ca_key_store_path(&self) -> PathBuf {
        PathBuf::from(KEY_STORE_PATH)
    }

    fn crypto_config_path(&self) -> PathBuf {
        PathBuf::new()
    }

    fn event_service_type(&self) -> EventServiceType {
        EventServiceType::Deliver
    }

    fn lookup(&self, key: &str) -> Option<Value> {
        if key == INVALID_LOOKUP_KEY {
            return None;
        }
        let value = self.lookup_values.get(key).cloned();
        if value.is_none() {
            trace!(key, "lookup key not set");
        }
        value
    }
}

impl IdentityConfig for MockConfig {
    fn client(&self) -> ConfigResult<ClientConfig> {
        let tls_certs = self.options.mutual_tls_enabled.then(|| MutualTlsConfig {
            client: TlsKeyPair {
                key: TlsConfig::from_path(MUTUAL_TLS_CLIENT_KEY_PATH),
                cert: TlsConfig::from_path(MUTUAL_TLS_CLIENT_CERT_PATH),
            },
        });

        Ok(ClientConfig {
            credential_store: CredentialStoreType {
                path: PathBuf::from(CLIENT_CREDENTIAL_STORE_PATH),
                ..Default::default()
            },
            tls_certs,
            ..Default::default()
        })
    }

    fn ca_config(&self, _org: &str) -> ConfigResult<CaConfig> {
        Ok(CaConfig {
            ca_name: "org1".to_string(),
            ..Default::default()
        })
    }

    fn ca_server_certs(&self, _org: &str) -> ConfigResult<Vec<Bytes>> {
        Ok(Vec::new())
    }

    fn ca_client_key(&self, _org: &str) -> ConfigResult<Option<Bytes>> {
        Ok(None)
    }

    fn ca_client_cert(&self, _org: &str) -> ConfigResult<Option<Bytes>> {
        Ok(None)
    }
}

/// Default fake, seen as a [`CryptoSuiteConfig`].
pub fn new_mock_crypto_config() -> Box<dyn CryptoSuiteConfig> {
    Box::new(MockConfig::new())
}

/// Default fake, seen as an [`EndpointConfig`].
pub fn new_mock_endpoint_config() -> Box<dyn EndpointConfig> {
    Box::new(MockConfig::new())
}

/// Default fake, seen as an [`IdentityConfig`].
pub fn new_mock_identity_config() -> Box<dyn IdentityConfig> {
    Box::new(MockConfig::new())
}

pub fn new_mock_crypto_config_customized(
    tls_enabled: bool,
    mutual_tls_enabled: bool,
    error_case: bool,
) -> Box<dyn CryptoSuiteConfig> {
    Box::new(MockConfig::customized(tls_enabled, mutual_tls_enabled, error_case))
}

pub fn new_mock_endpoint_config_customized(
    tls_enabled: bool,
    mutual_tls_enabled: bool,
    error_case: bool,
) -> Box<dyn EndpointConfig> {
    Box::new(MockConfig::customized(tls_enabled, mutual_tls_enabled, error_case))
}

pub fn new_mock_identity_config_customized(
    tls_enabled: bool,
    mutual_tls_enabled: bool,
    error_case: bool,
) -> Box<dyn IdentityConfig> {
    Box::new(MockConfig::customized(tls_enabled, mutual_tls_enabled, error_case))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orderer_override_used_by_every_orderer_query() {
        let mut config = MockConfig::new();
        let custom = OrdererConfig::with_url("orderer.example.com:7050");
        config.set_custom_orderer_cfg(custom.clone());

        assert_eq!(config.orderer_config("orderer0").unwrap(), custom);
        assert_eq!(config.orderers_config().unwrap(), vec![custom.clone()]);
        assert_eq!(config.channel_orderers("mychannel").unwrap(), vec![custom.clone()]);
        assert_eq!(config.random_orderer_config().unwrap(), custom);
    }

    #[test]
    fn test_random_orderer_override_is_independent() {
        let mut config = MockConfig::new();
        let random = OrdererConfig::with_url("orderer2.example.com:7050");
        config.set_custom_random_orderer_cfg(random.clone());

        assert_eq!(config.random_orderer_config().unwrap(), random);
        assert_eq!(config.orderer_config("orderer0").unwrap().url, MOCK_URL);
    }

    #[test]
    fn test_lookup_reads_stored_values() {
        let mut config = MockConfig::new();
        assert_eq!(config.lookup("client.organization"), None);

        config
            .set_lookup_value("client.organization", "org1")
            .set_lookup_value(INVALID_LOOKUP_KEY, 42);

        assert_eq!(
            config.lookup("client.organization"),
            Some(Value::String("org1".to_string()))
        );
        assert_eq!(config.lookup(INVALID_LOOKUP_KEY), None);
    }

    #[test]
    fn test_options_round_through_constructor() {
        let config = MockConfig::customized(true, false, true);
        assert!(config.tls_enabled());
        assert!(!config.mutual_tls_enabled());
        assert!(config.error_case());
        assert_eq!(
            config.options(),
            MockConfigOptions::new()
                .with_tls_enabled(true)
                .with_error_case(true)
        );
    }

    #[test]
    fn test_fixed_paths() {
        let config = MockConfig::new();
        assert_eq!(config.key_store_path(), PathBuf::from(KEY_STORE_PATH));
        assert_eq!(config.ca_key_store_path(), PathBuf::from(KEY_STORE_PATH));
        assert_eq!(config.credential_store_path(), PathBuf::from(CREDENTIAL_STORE_PATH));
        assert_eq!(config.crypto_config_path(), PathBuf::new());
    }
}

//! Consuming the fake through each capability contract, the way client code
//! under test sees it.

use ledger_config_core::{
    ConfigResult, CryptoSuiteConfig, EndpointConfig, IdentityConfig, PeerConfig,
};
use ledger_config_testing::mock_config::{
    CLIENT_CREDENTIAL_STORE_PATH, MOCK_URL, MUTUAL_TLS_CLIENT_CERT_PATH,
    MUTUAL_TLS_CLIENT_KEY_PATH,
};
use ledger_config_testing::{
    new_mock_crypto_config, new_mock_endpoint_config, new_mock_endpoint_config_customized,
    new_mock_identity_config, new_mock_identity_config_customized, MockConfig,
};
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// Stand-in for client code that only knows the endpoint contract.
fn resolve_endorsers(config: &dyn EndpointConfig, channel: &str) -> ConfigResult<Vec<String>> {
    Ok(config
        .channel_peers(channel)?
        .into_iter()
        .filter(|peer| peer.peer_channel_config.endorsing_peer)
        .map(|peer| config.peer_config_by_url(&peer.network_peer.peer_config.url))
        .collect::<ConfigResult<Vec<_>>>()?
        .into_iter()
        .map(|peer| peer.url)
        .collect())
}

#[test]
fn test_crypto_suite_literals() {
    let config = new_mock_crypto_config();

    assert_eq!(config.security_algorithm(), "SHA2");
    assert_eq!(config.security_level(), 256);
    assert_eq!(config.security_provider(), "sw");
    assert_eq!(config.security_provider_lib_path(), "");
    assert_eq!(config.security_provider_label(), "");
    assert_eq!(config.security_provider_pin(), "");
    assert!(!config.soft_verify());
    assert!(!config.is_security_enabled());
    assert_eq!(config.tcert_batch_size(), 0);
}

#[test]
fn test_client_without_mutual_tls() {
    let client = new_mock_identity_config().client().unwrap();

    assert_eq!(
        client.credential_store.path,
        Path::new(CLIENT_CREDENTIAL_STORE_PATH)
    );
    assert!(client.tls_certs.is_none());

    let json = serde_json::to_value(&client).unwrap();
    assert!(json.get("tls_certs").is_none());
}

#[test]
fn test_client_with_mutual_tls() {
    let client = new_mock_identity_config_customized(false, true, false)
        .client()
        .unwrap();

    let tls = client.tls_certs.expect("mutual TLS block");
    assert_eq!(tls.client.key.path, Path::new(MUTUAL_TLS_CLIENT_KEY_PATH));
    assert_eq!(tls.client.cert.path, Path::new(MUTUAL_TLS_CLIENT_CERT_PATH));
    assert!(tls.client.key.pem.is_empty());
    assert!(tls.client.cert.pem.is_empty());
}

#[test]
fn test_certificate_authority_stubs() {
    let config = new_mock_identity_config();

    assert_eq!(config.ca_config("org1").unwrap().ca_name, "org1");
    assert!(config.ca_server_certs("org1").unwrap().is_empty());
    assert_eq!(config.ca_client_key("org1").unwrap(), None);
    assert_eq!(config.ca_client_cert("org1").unwrap(), None);
}

#[test]
fn test_endpoint_constructors() {
    let config = new_mock_endpoint_config();
    assert!(config.tls_ca_cert_pool(&[]).unwrap().is_none());

    let config = new_mock_endpoint_config_customized(true, false, true);
    assert!(config.tls_ca_cert_pool(&[]).is_err());
}

#[test]
fn test_client_code_sees_overrides() {
    let mut config = MockConfig::new();
    assert_eq!(
        resolve_endorsers(&config, "mychannel").unwrap(),
        vec![MOCK_URL.to_string()]
    );
    assert!(resolve_endorsers(&config, "noEndpoints").unwrap().is_empty());

    config.set_custom_peer_cfg(PeerConfig::with_url("peer0.org1.example.com:7051"));
    assert_eq!(
        resolve_endorsers(&config, "mychannel").unwrap(),
        vec!["peer0.org1.example.com:7051".to_string()]
    );
}

#[test]
fn test_one_fake_serves_all_contracts() {
    let config = Arc::new(MockConfig::customized(true, true, false));

    let crypto: Arc<dyn CryptoSuiteConfig> = config.clone();
    let endpoint: Arc<dyn EndpointConfig> = config.clone();
    let identity: Arc<dyn IdentityConfig> = config.clone();

    assert_eq!(crypto.security_level(), 256);
    assert_eq!(endpoint.orderers_config().unwrap().len(), 1);
    assert!(identity.client().unwrap().tls_certs.is_some());
}

#[test]
fn test_configured_fake_shared_read_only_across_threads() {
    let mut config = MockConfig::new();
    config.set_custom_peer_cfg(PeerConfig::with_url("peer0.org1.example.com:7051"));
    let config: Arc<dyn EndpointConfig> = Arc::new(config);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let config = Arc::clone(&config);
            thread::spawn(move || {
                config
                    .peer_config_by_url(&format!("peer{}.example.com", i))
                    .map(|peer| peer.url)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(
            handle.join().unwrap().unwrap(),
            "peer0.org1.example.com:7051"
        );
    }
}

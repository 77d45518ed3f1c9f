//! # Ledger Config Core
//!
//! Configuration contracts for a distributed-ledger client.
//!
//! A client reads three kinds of configuration, each behind its own trait:
//!
//! - **CryptoSuiteConfig**: hash algorithm, security level and provider settings
//! - **EndpointConfig**: timeouts, peers, orderers, channels and TLS trust
//! - **IdentityConfig**: client credential store and certificate authorities
//!
//! The record types in [`topology`] and [`identity`] are plain serde
//! structs, so any provider (a file loader, a fake for tests) can build them.
//!
//! ```rust
//! use ledger_config_core::{EndpointConfig, PeerConfig};
//!
//! fn endorser_urls(config: &dyn EndpointConfig) -> Vec<String> {
//!     config
//!         .network_peers()
//!         .map(|peers| peers.into_iter().map(|p| p.peer_config.url).collect())
//!         .unwrap_or_default()
//! }
//! # let _ = PeerConfig::with_url("peer0.org1.example.com:7051");
//! ```

pub mod contracts;
pub mod error;
pub mod identity;
pub mod topology;
pub mod types;

// Re-export commonly used types for convenience
pub use contracts::{CryptoSuiteConfig, EndpointConfig, IdentityConfig};
pub use error::*;
pub use identity::*;
pub use topology::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let error = ConfigError::not_found("no peer");
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Not found: no peer");

        let error = ConfigError::invalid_configuration("bad pool");
        assert_eq!(error.kind(), ErrorKind::InvalidConfiguration);
        assert!(!error.is_not_found());
        assert_eq!(error.to_string(), "Invalid configuration: bad pool");
    }

    #[test]
    fn test_peer_channel_roles() {
        let all = PeerChannelConfig::all_roles();
        assert!(all.endorsing_peer && all.chaincode_query && all.ledger_query && all.event_source);
        assert!(all.has_any_role());

        let none = PeerChannelConfig::no_roles();
        assert!(!none.has_any_role());
        assert_eq!(none, PeerChannelConfig::default());
    }

    #[test]
    fn test_url_constructors() {
        let peer = PeerConfig::with_url("peer0.org1.example.com:7051");
        assert_eq!(peer.url, "peer0.org1.example.com:7051");
        assert!(peer.grpc_options.is_empty());
        assert!(peer.tls_ca_certs.is_empty());

        let orderer = OrdererConfig::with_url("orderer.example.com:7050");
        assert_eq!(orderer.url, "orderer.example.com:7050");
    }

    #[test]
    fn test_client_config_omits_absent_tls_block() {
        let client = ClientConfig {
            credential_store: CredentialStoreType {
                path: "/tmp/store".into(),
                ..Default::default()
            },
            ..Default::default()
        };

        let json = serde_json::to_value(&client).unwrap();
        assert!(json.get("tls_certs").is_none());
        assert_eq!(json["credential_store"]["path"], "/tmp/store");
    }

    #[test]
    fn test_timeout_type_keys_are_unique() {
        let mut keys: Vec<_> = TimeoutType::ALL.iter().map(|t| t.as_str()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), TimeoutType::ALL.len());
    }

    #[test]
    fn test_event_service_type_display() {
        assert_eq!(EventServiceType::Deliver.to_string(), "deliver");
        assert_eq!(EventServiceType::default(), EventServiceType::AutoDetect);
    }

    #[test]
    fn test_cert_pool() {
        let mut pool = CertPool::new();
        assert!(pool.is_empty());
        pool.add_cert(bytes::Bytes::from_static(b"\x30\x82"));
        assert_eq!(pool.len(), 1);
    }
}

//! Network topology records: peers, orderers and channels.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::identity::TlsConfig;

/// Connection settings for a single peer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeerConfig {
    /// gRPC endpoint of the peer
    pub url: String,

    /// Legacy event hub endpoint
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub event_url: String,

    /// Raw gRPC dial options keyed by option name
    #[serde(default)]
    pub grpc_options: HashMap<String, Value>,

    /// CA certificate used to verify the peer's TLS certificate
    #[serde(default)]
    pub tls_ca_certs: TlsConfig,
}

impl PeerConfig {
    /// Peer with only its URL set
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// Connection settings for a single orderer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrdererConfig {
    /// gRPC endpoint of the orderer
    pub url: String,

    /// Raw gRPC dial options keyed by option name
    #[serde(default)]
    pub grpc_options: HashMap<String, Value>,

    /// CA certificate used to verify the orderer's TLS certificate
    #[serde(default)]
    pub tls_ca_certs: TlsConfig,
}

impl OrdererConfig {
    /// Orderer with only its URL set
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

/// A peer as seen from the whole network, tagged with its owning MSP
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkPeer {
    pub peer_config: PeerConfig,
    pub msp_id: String,
}

/// Roles a peer plays on a particular channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PeerChannelConfig {
    pub endorsing_peer: bool,
    pub chaincode_query: bool,
    pub ledger_query: bool,
    pub event_source: bool,
}

impl PeerChannelConfig {
    /// A peer that endorses, answers queries and sources events
    pub fn all_roles() -> Self {
        Self {
            endorsing_peer: true,
            chaincode_query: true,
            ledger_query: true,
            event_source: true,
        }
    }

    /// A peer that is on the channel but serves no role
    pub fn no_roles() -> Self {
        Self::default()
    }

    pub fn has_any_role(&self) -> bool {
        self.endorsing_peer || self.chaincode_query || self.ledger_query || self.event_source
    }
}

/// A network peer together with its role on one channel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelPeer {
    pub peer_channel_config: PeerChannelConfig,
    pub network_peer: NetworkPeer,
}

/// Policy for querying channel configuration from peers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryChannelConfigPolicy {
    /// Minimum number of matching responses required
    pub min_responses: usize,
    /// Maximum number of peers to ask
    pub max_targets: usize,
}

/// Per-channel client policies
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChannelPolicies {
    pub query_channel_config: QueryChannelConfigPolicy,
}

/// Channel section of the network configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelNetworkConfig {
    /// Names of the orderers serving this channel
    #[serde(default)]
    pub orderers: Vec<String>,

    /// Peer names mapped to the roles they play on this channel
    #[serde(default)]
    pub peers: HashMap<String, PeerChannelConfig>,

    #[serde(default)]
    pub policies: ChannelPolicies,
}

/// Organization section of the network configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OrganizationConfig {
    pub msp_id: String,
    pub crypto_path: String,
    #[serde(default)]
    pub peers: Vec<String>,
    #[serde(default)]
    pub certificate_authorities: Vec<String>,
}

/// Complete network topology as loaded from configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub channels: HashMap<String, ChannelNetworkConfig>,
    #[serde(default)]
    pub organizations: HashMap<String, OrganizationConfig>,
    #[serde(default)]
    pub orderers: HashMap<String, OrdererConfig>,
    #[serde(default)]
    pub peers: HashMap<String, PeerConfig>,
}

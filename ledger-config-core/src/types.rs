//! # Core Types
//!
//! Small enums and certificate containers shared by the configuration contracts.

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a client-side timeout.
///
/// Endpoint configurations resolve a [`std::time::Duration`] per category.
/// Categories are grouped by the subsystem that waits on them.
///
/// # Examples
///
/// ```rust
/// use ledger_config_core::TimeoutType;
///
/// let kind = TimeoutType::PeerResponse;
/// assert_eq!(kind.to_string(), "peer.response");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeoutType {
    /// Establishing a connection to an endorsing peer
    EndorserConnection,
    /// Waiting for a peer to answer a proposal
    PeerResponse,
    /// Chaincode query round trip
    Query,
    /// Chaincode invoke round trip, including commit
    Execute,
    /// Establishing a connection to an orderer
    OrdererConnection,
    /// Waiting for an orderer to acknowledge a broadcast
    OrdererResponse,
    /// Establishing a connection to the event hub
    EventHubConnection,
    /// Registering for events
    EventReg,
    /// Establishing a connection to a discovery peer
    DiscoveryConnection,
    /// Waiting for a discovery peer to respond
    DiscoveryResponse,
    /// How long a failing discovery target stays greylisted
    DiscoveryGreylistExpiry,
    /// Resource management (channel creation, chaincode install)
    ResMgmt,
    /// Interval between channel configuration refreshes
    ChannelConfigRefresh,
    /// Interval between channel membership refreshes
    ChannelMembershipRefresh,
    /// Interval between cache sweeps
    CacheSweepInterval,
}

impl TimeoutType {
    /// Every timeout category, in declaration order.
    pub const ALL: [TimeoutType; 15] = [
        TimeoutType::EndorserConnection,
        TimeoutType::PeerResponse,
        TimeoutType::Query,
        TimeoutType::Execute,
        TimeoutType::OrdererConnection,
        TimeoutType::OrdererResponse,
        TimeoutType::EventHubConnection,
        TimeoutType::EventReg,
        TimeoutType::DiscoveryConnection,
        TimeoutType::DiscoveryResponse,
        TimeoutType::DiscoveryGreylistExpiry,
        TimeoutType::ResMgmt,
        TimeoutType::ChannelConfigRefresh,
        TimeoutType::ChannelMembershipRefresh,
        TimeoutType::CacheSweepInterval,
    ];

    /// Dotted configuration key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeoutType::EndorserConnection => "peer.connection",
            TimeoutType::PeerResponse => "peer.response",
            TimeoutType::Query => "client.query",
            TimeoutType::Execute => "client.execute",
            TimeoutType::OrdererConnection => "orderer.connection",
            TimeoutType::OrdererResponse => "orderer.response",
            TimeoutType::EventHubConnection => "eventService.connection",
            TimeoutType::EventReg => "eventService.registrationResponse",
            TimeoutType::DiscoveryConnection => "discovery.connection",
            TimeoutType::DiscoveryResponse => "discovery.response",
            TimeoutType::DiscoveryGreylistExpiry => "discovery.greylistExpiry",
            TimeoutType::ResMgmt => "client.resmgmt",
            TimeoutType::ChannelConfigRefresh => "channel.configRefresh",
            TimeoutType::ChannelMembershipRefresh => "channel.membershipRefresh",
            TimeoutType::CacheSweepInterval => "cache.sweepInterval",
        }
    }
}

impl fmt::Display for TimeoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which event service client implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventServiceType {
    /// Pick based on the capabilities of the channel
    #[default]
    AutoDetect,
    /// Block delivery service
    Deliver,
    /// Legacy event hub
    EventHub,
}

impl fmt::Display for EventServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventServiceType::AutoDetect => write!(f, "auto"),
            EventServiceType::Deliver => write!(f, "deliver"),
            EventServiceType::EventHub => write!(f, "eventhub"),
        }
    }
}

/// Pool of trusted CA certificates, each DER encoded.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CertPool {
    pub certs: Vec<Bytes>,
}

impl CertPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cert(&mut self, cert: Bytes) {
        self.certs.push(cert);
    }

    pub fn len(&self) -> usize {
        self.certs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.certs.is_empty()
    }
}

/// A TLS client certificate chain with its private key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TlsCertificate {
    /// DER encoded certificate chain, leaf first
    pub certificate: Vec<Bytes>,
    /// DER encoded private key, if loaded
    pub private_key: Option<Bytes>,
}

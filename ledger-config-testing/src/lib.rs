//! # Ledger Config Testing
//!
//! A configurable fake of the ledger client configuration contracts, so tests
//! can exercise code that reads configuration without config files,
//! certificates or a network.

pub mod mock_config;
pub mod options;

pub use mock_config::{
    new_mock_crypto_config, new_mock_crypto_config_customized, new_mock_endpoint_config,
    new_mock_endpoint_config_customized, new_mock_identity_config,
    new_mock_identity_config_customized, MockConfig,
};
pub use options::MockConfigOptions;

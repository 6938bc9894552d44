// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

/// Environment variable holding the HD wallet mnemonic.
pub const MNEMONIC_ENV: &str = "ROUTER_DEPLOY_MNEMONIC";

/// Environment variable holding a hex-encoded private key.
pub const PRIVATE_KEY_ENV: &str = "ROUTER_DEPLOY_PRIVATE_KEY";

/// Environment variable holding the RPC provider API key.
pub const API_KEY_ENV: &str = "ROUTER_DEPLOY_API_KEY";

/// Environment variable pointing at the network configuration file.
pub const CONFIG_ENV: &str = "ROUTER_DEPLOY_CONFIG";

/// Directory deployment records are written to.
pub const DEFAULT_RECORDS_DIR: &str = "deployments";

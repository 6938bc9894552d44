// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Environment configuration: how to reach each network and how to confirm deployments there.
//!
//! The built-in profiles cover the well-known public networks. A TOML file can replace any of
//! them or add new networks:
//!
//! ```toml
//! [compilers.solc]
//! version = "0.6.6"
//!
//! [networks.development]
//! endpoint = "http://localhost:8545"
//! network_id = 1337
//! gas = 6721975
//!
//! [wrapped_native]
//! development = "0x5FbDB2315678afecb367f032d93F642f64180aa3"
//! ```

use std::{collections::BTreeMap, fs, path::Path};

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use super::{network::Network, registry::NetworkAddressTable};

/// Endpoint template used by the built-in profiles.
pub const INFURA_ENDPOINT_TEMPLATE: &str = "https://{network}.infura.io/v3/{api_key}";

/// Compiler version the router artifact is expected to be built with.
pub const DEFAULT_SOLC_VERSION: &str = "0.6.6";

const NETWORK_PLACEHOLDER: &str = "{network}";
const API_KEY_PLACEHOLDER: &str = "{api_key}";

// Defaults for profiles read from a file that leave a field out.
const DEFAULT_GAS: u64 = 6_721_975;
const DEFAULT_CONFIRMATIONS: u64 = 0;
const DEFAULT_TIMEOUT_BLOCKS: u64 = 50;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no network profile named {0:?}")]
    UnknownNetwork(String),
    #[error("endpoint for {0} needs an API key, pass --api-key or set ROUTER_DEPLOY_API_KEY")]
    MissingApiKey(String),
}

/// Secret material injected at run time, never stored in configuration.
#[derive(Clone, Default)]
pub struct Credentials {
    pub api_key: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Connection and confirmation parameters for one network.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkProfile {
    /// RPC endpoint, optionally containing `{network}` and `{api_key}` placeholders.
    pub endpoint: String,
    pub network_id: u64,
    /// Gas limit for the deployment transaction.
    #[serde(default = "default_gas")]
    pub gas: u64,
    /// Blocks to wait on top of the one including the deployment.
    #[serde(default = "default_confirmations")]
    pub confirmations: u64,
    /// Blocks to wait for the deployment to be mined before giving up.
    #[serde(default = "default_timeout_blocks")]
    pub timeout_blocks: u64,
    #[serde(default)]
    pub skip_dry_run: bool,
}

fn default_gas() -> u64 {
    DEFAULT_GAS
}

fn default_confirmations() -> u64 {
    DEFAULT_CONFIRMATIONS
}

fn default_timeout_blocks() -> u64 {
    DEFAULT_TIMEOUT_BLOCKS
}

impl NetworkProfile {
    fn builtin(network: Network) -> Self {
        let gas = match network {
            Network::Ropsten => 8_000_000,
            _ => 5_500_000,
        };
        Self {
            endpoint: INFURA_ENDPOINT_TEMPLATE.to_string(),
            network_id: network.chain_id(),
            gas,
            confirmations: 2,
            timeout_blocks: 200,
            skip_dry_run: true,
        }
    }

    /// Renders the endpoint template into a concrete RPC URL.
    pub fn rpc_url(&self, network: &str, credentials: &Credentials) -> Result<String, ConfigError> {
        let url = self.endpoint.replace(NETWORK_PLACEHOLDER, network);
        if !url.contains(API_KEY_PLACEHOLDER) {
            return Ok(url);
        }
        match &credentials.api_key {
            Some(key) if !key.is_empty() => Ok(url.replace(API_KEY_PLACEHOLDER, key)),
            _ => Err(ConfigError::MissingApiKey(network.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerPin {
    pub version: String,
}

impl CompilerPin {
    /// Whether an artifact's reported compiler version (e.g. `0.6.6+commit.6c089d02`) satisfies
    /// the pin.
    pub fn matches(&self, reported: &str) -> bool {
        let reported = reported.trim().trim_start_matches('v');
        let release = reported.split('+').next().unwrap_or(reported);
        release == self.version.trim().trim_start_matches('v')
    }
}

impl Default for CompilerPin {
    fn default() -> Self {
        Self {
            version: DEFAULT_SOLC_VERSION.to_string(),
        }
    }
}

/// Immutable environment: profiles per network, the compiler pin and extra token addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentConfig {
    networks: BTreeMap<String, NetworkProfile>,
    compiler: CompilerPin,
    wrapped_native: BTreeMap<String, Address>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        let networks = Network::ALL
            .into_iter()
            .map(|n| (n.name().to_string(), NetworkProfile::builtin(n)))
            .collect();
        Self {
            networks,
            compiler: CompilerPin::default(),
            wrapped_native: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    networks: BTreeMap<String, NetworkProfile>,
    compilers: Option<TomlCompilers>,
    #[serde(default)]
    wrapped_native: BTreeMap<String, Address>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlCompilers {
    solc: Option<CompilerPin>,
}

impl EnvironmentConfig {
    /// Loads a TOML file and merges it over the built-in defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: TomlConfig = toml::from_str(text)?;
        let mut config = Self::default();
        config.networks.extend(file.networks);
        if let Some(solc) = file.compilers.and_then(|c| c.solc) {
            config.compiler = solc;
        }
        config.wrapped_native.extend(file.wrapped_native);
        Ok(config)
    }

    pub fn profile(&self, network: &str) -> Result<&NetworkProfile, ConfigError> {
        self.networks
            .get(network)
            .ok_or_else(|| ConfigError::UnknownNetwork(network.to_string()))
    }

    pub fn networks(&self) -> impl Iterator<Item = (&str, &NetworkProfile)> {
        self.networks.iter().map(|(name, p)| (name.as_str(), p))
    }

    pub fn compiler(&self) -> &CompilerPin {
        &self.compiler
    }

    /// Builds the token address table, including entries added by the config file.
    pub fn address_table(&self) -> NetworkAddressTable {
        NetworkAddressTable::with_entries(
            self.wrapped_native
                .iter()
                .map(|(name, addr)| (name.clone(), *addr)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles() {
        let config = EnvironmentConfig::default();
        for network in Network::ALL {
            let profile = config.profile(network.name()).unwrap();
            assert_eq!(profile.network_id, network.chain_id());
            assert_eq!(profile.confirmations, 2);
            assert_eq!(profile.timeout_blocks, 200);
            assert!(profile.skip_dry_run);
        }
        assert_eq!(config.profile("ropsten").unwrap().gas, 8_000_000);
        assert_eq!(config.profile("mainnet").unwrap().gas, 5_500_000);
        assert_eq!(config.compiler().version, "0.6.6");
    }

    #[test]
    fn unknown_profile() {
        let config = EnvironmentConfig::default();
        assert!(matches!(
            config.profile("sepolia"),
            Err(ConfigError::UnknownNetwork(name)) if name == "sepolia"
        ));
    }

    #[test]
    fn renders_endpoint() {
        let profile = EnvironmentConfig::default().profile("goerli").unwrap().clone();
        let creds = Credentials {
            api_key: Some("abc123".to_string()),
        };
        assert_eq!(
            profile.rpc_url("goerli", &creds).unwrap(),
            "https://goerli.infura.io/v3/abc123"
        );
        assert!(matches!(
            profile.rpc_url("goerli", &Credentials::default()),
            Err(ConfigError::MissingApiKey(_))
        ));
        let empty = Credentials {
            api_key: Some(String::new()),
        };
        assert!(profile.rpc_url("goerli", &empty).is_err());
    }

    #[test]
    fn endpoint_without_key_needs_no_credentials() {
        let profile = NetworkProfile {
            endpoint: "http://localhost:8545".to_string(),
            network_id: 1337,
            gas: DEFAULT_GAS,
            confirmations: 0,
            timeout_blocks: 50,
            skip_dry_run: false,
        };
        assert_eq!(
            profile.rpc_url("development", &Credentials::default()).unwrap(),
            "http://localhost:8545"
        );
    }

    #[test]
    fn merges_file_over_defaults() {
        let config = EnvironmentConfig::from_toml_str(
            r#"
            [compilers.solc]
            version = "0.6.12"

            [networks.mainnet]
            endpoint = "https://eth.example.org/{api_key}"
            network_id = 1
            gas = 6000000
            confirmations = 5
            timeout_blocks = 100
            skip_dry_run = false

            [networks.development]
            endpoint = "http://localhost:8545"
            network_id = 1337

            [wrapped_native]
            development = "0x1111111111111111111111111111111111111111"
            "#,
        )
        .unwrap();

        let mainnet = config.profile("mainnet").unwrap();
        assert_eq!(mainnet.gas, 6_000_000);
        assert_eq!(mainnet.confirmations, 5);
        assert!(!mainnet.skip_dry_run);

        let dev = config.profile("development").unwrap();
        assert_eq!(dev.gas, DEFAULT_GAS);
        assert_eq!(dev.confirmations, DEFAULT_CONFIRMATIONS);
        assert_eq!(dev.timeout_blocks, DEFAULT_TIMEOUT_BLOCKS);
        assert!(!dev.skip_dry_run);

        // untouched built-ins survive
        assert_eq!(config.profile("kovan").unwrap().network_id, 42);
        assert_eq!(config.compiler().version, "0.6.12");

        let table = config.address_table();
        assert_eq!(
            table.lookup("development").unwrap(),
            Address::repeat_byte(0x11)
        );
        assert!(table.lookup("mainnet").is_ok());
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = EnvironmentConfig::from_toml_str("mnemonic = \"abandon abandon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn rejects_unknown_profile_keys() {
        let err = EnvironmentConfig::from_toml_str(
            r#"
            [networks.development]
            endpoint = "http://localhost:8545"
            network_id = 1337
            timeoutBlocks = 7
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Toml(err) => assert!(err.to_string().contains("timeoutBlocks")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_unknown_compiler_keys() {
        for text in [
            "[compilers.solc]\nversion = \"0.6.6\"\noptimizer = true\n",
            "[compilers.vyper]\nversion = \"0.2.0\"\n",
        ] {
            assert!(matches!(
                EnvironmentConfig::from_toml_str(text),
                Err(ConfigError::Toml(_))
            ));
        }
    }

    #[test]
    fn load_reports_path() {
        let err = EnvironmentConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deploy.toml");
        fs::write(&path, "[compilers.solc]\nversion = \"0.5.16\"\n").unwrap();
        let config = EnvironmentConfig::load(&path).unwrap();
        assert_eq!(config.compiler().version, "0.5.16");
    }

    #[test]
    fn compiler_pin_matches_release() {
        let pin = CompilerPin::default();
        assert!(pin.matches("0.6.6+commit.6c089d02.Emscripten.clang"));
        assert!(pin.matches("v0.6.6"));
        assert!(!pin.matches("0.6.12+commit.27d51765"));
    }

    #[test]
    fn credentials_are_redacted() {
        let creds = Credentials {
            api_key: Some("secret".to_string()),
        };
        assert!(!format!("{creds:?}").contains("secret"));
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Local Anvil devnet for exercising real deployments.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::local::{coins_bip39::English, MnemonicBuilder},
};
use eyre::{Result, WrapErr};
use reqwest::{header::HeaderValue, Method, Response};
use testcontainers::{
    core::{wait::HttpWaitStrategy, IntoContainerPort, WaitFor},
    runners::AsyncRunner,
    ContainerAsync, GenericImage, ImageExt,
};

use crate::core::config::EnvironmentConfig;

/// Anvil's well-known development mnemonic; its accounts are pre-funded.
pub const DEVNET_MNEMONIC: &str = "test test test test test test test test test test test junk";
pub const DEVNET_CHAIN_ID: u64 = 1337;
pub const DEVNET_NETWORK: &str = "development";

const ANVIL_IMAGE_NAME: &str = "ghcr.io/foundry-rs/foundry";
const ANVIL_IMAGE_TAG: &str = "stable";
const ANVIL_PORT: u16 = 8545;

/// Manage an Anvil node running in a container.
pub struct Node {
    _container: ContainerAsync<GenericImage>,
    rpc: String,
}

impl Node {
    /// Starts a new Anvil node in the background, producing a block every second.
    /// The node is shut down when this struct is dropped.
    pub async fn new() -> Result<Self> {
        let wait_strategy = HttpWaitStrategy::new("/")
            .with_port(ANVIL_PORT.into())
            .with_method(Method::POST)
            .with_header("Content-Type", HeaderValue::from_static("application/json"))
            .with_body(r#"{"jsonrpc":"2.0","method":"eth_chainId","params":[],"id":1}"#)
            .with_response_matcher_async(anvil_response_matcher);
        let cmd = format!("anvil --host 0.0.0.0 --chain-id {DEVNET_CHAIN_ID} --block-time 1");
        let container = GenericImage::new(ANVIL_IMAGE_NAME, ANVIL_IMAGE_TAG)
            .with_exposed_port(ANVIL_PORT.tcp())
            .with_wait_for(WaitFor::Http(wait_strategy))
            .with_cmd(vec![cmd])
            .start()
            .await
            .wrap_err("failed to start Anvil container")?;
        let port = container
            .get_host_port_ipv4(ANVIL_PORT)
            .await
            .wrap_err("failed to get Anvil RPC port")?;
        Ok(Node {
            _container: container,
            rpc: format!("http://localhost:{port}"),
        })
    }

    pub fn rpc(&self) -> &str {
        &self.rpc
    }

    /// Provider signing with the first `count` accounts of the devnet mnemonic.
    pub async fn create_provider(&self, count: u32) -> Result<impl Provider + WalletProvider> {
        let mut signers = (0..count.max(1)).map(|index| {
            MnemonicBuilder::<English>::default()
                .phrase(DEVNET_MNEMONIC)
                .index(index)?
                .build()
        });
        let first = signers.next().ok_or_else(|| eyre::eyre!("no signers"))??;
        let mut wallet = EthereumWallet::new(first);
        for signer in signers {
            wallet.register_signer(signer?);
        }
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(self.rpc())
            .await?;
        Ok(provider)
    }

    /// Environment with a `development` profile pointing at this node.
    pub fn environment(&self, weth: Address) -> Result<EnvironmentConfig> {
        let toml = format!(
            r#"
            [networks.{DEVNET_NETWORK}]
            endpoint = "{rpc}"
            network_id = {DEVNET_CHAIN_ID}
            gas = 6721975
            confirmations = 1
            timeout_blocks = 20
            skip_dry_run = false

            [wrapped_native]
            {DEVNET_NETWORK} = "{weth}"
            "#,
            rpc = self.rpc,
        );
        Ok(EnvironmentConfig::from_toml_str(&toml)?)
    }
}

async fn anvil_response_matcher(response: Response) -> bool {
    let Ok(text) = response.text().await else {
        return false;
    };
    text.contains("result")
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{fs, path::PathBuf};

use alloy::{
    network::EthereumWallet,
    primitives::FixedBytes,
    providers::{Provider, ProviderBuilder, WalletProvider},
    signers::{
        local::{coins_bip39::English, LocalSigner, MnemonicBuilder, PrivateKeySigner},
        Signer,
    },
};
use eyre::{bail, eyre, Context};
use router_tools::{
    core::config::{Credentials, EnvironmentConfig, NetworkProfile},
    utils::decode0x,
};

use crate::{
    constants::{API_KEY_ENV, CONFIG_ENV, MNEMONIC_ENV, PRIVATE_KEY_ENV},
    utils::convert_gwei_to_wei,
};

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
    /// BIP-39 mnemonic to derive accounts from (m/44'/60'/0'/0/i)
    #[arg(long, env = MNEMONIC_ENV, hide_env_values = true)]
    mnemonic: Option<String>,
    /// Number of accounts to derive from the mnemonic
    #[arg(long, default_value = "1")]
    account_count: u32,
    /// File path to a text file containing a hex-encoded private key
    #[arg(long)]
    private_key_path: Option<PathBuf>,
    /// Private key as a hex string. Warning: this exposes your key to shell history
    #[arg(long, env = PRIVATE_KEY_ENV, hide_env_values = true)]
    private_key: Option<String>,
    /// Path to an Ethereum wallet keystore file (e.g. clef)
    #[arg(long)]
    keystore_path: Option<String>,
    /// Keystore password file
    #[arg(long)]
    keystore_password_path: Option<PathBuf>,
    /// Optional max fee per gas in gwei units.
    #[arg(long)]
    max_fee_per_gas_gwei: Option<String>,
}

impl AuthArgs {
    /// Signers in account order; the first one sends the deployment.
    pub fn signers(&self, chain_id: Option<u64>) -> eyre::Result<Vec<PrivateKeySigner>> {
        let signers = if let Some(key) = &self.private_key {
            vec![signer_from_hex(key)?]
        } else if let Some(file) = &self.private_key_path {
            let key = fs::read_to_string(file).wrap_err("could not open private key file")?;
            vec![signer_from_hex(&key)?]
        } else if let Some(phrase) = &self.mnemonic {
            mnemonic_signers(phrase, self.account_count)?
        } else if let Some(keystore) = &self.keystore_path {
            let password = self
                .keystore_password_path
                .as_ref()
                .map(fs::read_to_string)
                .unwrap_or(Ok("".into()))?;
            vec![LocalSigner::decrypt_keystore(keystore, password.trim_end())?]
        } else {
            bail!("no signer configured: pass --mnemonic, --private-key, --private-key-path or --keystore-path");
        };
        Ok(signers
            .into_iter()
            .map(|signer| signer.with_chain_id(chain_id))
            .collect())
    }

    fn build_wallet(&self, chain_id: u64) -> eyre::Result<EthereumWallet> {
        let mut signers = self.signers(Some(chain_id))?.into_iter();
        let first = signers.next().ok_or(eyre!("no signers"))?;
        let mut wallet = EthereumWallet::new(first);
        for signer in signers {
            wallet.register_signer(signer);
        }
        Ok(wallet)
    }

    pub fn get_max_fee_per_gas_wei(&self) -> eyre::Result<Option<u128>> {
        self.max_fee_per_gas_gwei
            .as_ref()
            .map(|fee_str| convert_gwei_to_wei(fee_str))
            .transpose()
    }
}

fn signer_from_hex(key: &str) -> eyre::Result<PrivateKeySigner> {
    if key.trim().is_empty() {
        bail!("empty private key");
    }
    let bytes = decode0x(key)?;
    if bytes.len() != 32 {
        bail!("private key must be 32 bytes, got {}", bytes.len());
    }
    let priv_key_bytes: FixedBytes<32> = FixedBytes::from_slice(&bytes);
    Ok(PrivateKeySigner::from_bytes(&priv_key_bytes)?)
}

fn mnemonic_signers(phrase: &str, count: u32) -> eyre::Result<Vec<PrivateKeySigner>> {
    if count == 0 {
        bail!("--account-count must be at least 1");
    }
    (0..count)
        .map(|index| {
            MnemonicBuilder::<English>::default()
                .phrase(phrase.trim())
                .index(index)?
                .build()
                .wrap_err("invalid mnemonic")
        })
        .collect()
}

#[derive(Debug, clap::Args)]
pub struct ConfigArgs {
    /// TOML file with network profiles, merged over the built-in ones
    #[arg(long, env = CONFIG_ENV)]
    config: Option<PathBuf>,
}

impl ConfigArgs {
    pub fn load(&self) -> eyre::Result<EnvironmentConfig> {
        match &self.config {
            Some(path) => Ok(EnvironmentConfig::load(path)?),
            None => Ok(EnvironmentConfig::default()),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct ProviderArgs {
    /// RPC endpoint, overriding the one from the network profile
    #[arg(short, long)]
    pub endpoint: Option<String>,
    /// API key substituted into the profile's endpoint template
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: Option<String>,
}

impl ProviderArgs {
    pub fn rpc_url(&self, network: &str, profile: &NetworkProfile) -> eyre::Result<String> {
        if let Some(endpoint) = &self.endpoint {
            return Ok(endpoint.clone());
        }
        let credentials = Credentials {
            api_key: self.api_key.clone(),
        };
        Ok(profile.rpc_url(network, &credentials)?)
    }

    pub async fn build_provider(&self, rpc_url: &str) -> eyre::Result<impl Provider> {
        let provider = ProviderBuilder::new().connect(rpc_url).await?;
        Ok(provider)
    }

    pub async fn build_provider_with_wallet(
        &self,
        rpc_url: &str,
        auth: &AuthArgs,
    ) -> eyre::Result<impl Provider + WalletProvider> {
        let provider = self.build_provider(rpc_url).await?;
        let chain_id = provider.get_chain_id().await?;
        let wallet = auth.build_wallet(chain_id)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect(rpc_url)
            .await?;
        Ok(provider)
    }
}

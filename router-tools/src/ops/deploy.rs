// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Router deployment.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use alloy::{
    primitives::Address,
    providers::{Provider, WalletProvider},
};

use crate::core::{
    artifact::Artifact,
    config::EnvironmentConfig,
    deployment::{Deployment, DeploymentConfig, RpcDeployer},
    migration::{Migration, FACTORY_ADDRESS},
    record::DeploymentRecord,
};

#[derive(Debug, Clone)]
pub struct DeployOptions {
    pub network: String,
    pub factory: Address,
    pub max_fee_per_gas_wei: Option<u128>,
    pub simulate_only: bool,
    /// Where to write the deployment record, if anywhere.
    pub records_dir: Option<PathBuf>,
    pub poll_interval: Option<Duration>,
}

impl DeployOptions {
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            factory: FACTORY_ADDRESS,
            max_fee_per_gas_wei: None,
            simulate_only: false,
            records_dir: None,
            poll_interval: None,
        }
    }
}

/// Reads the compiled router and checks it against the environment. Needs no node.
pub fn load_artifact(env: &EnvironmentConfig, path: impl AsRef<Path>) -> eyre::Result<Artifact> {
    let artifact = Artifact::load(path)?;
    artifact.check_router_constructor()?;
    artifact.check_compiler(env.compiler());
    Ok(artifact)
}

/// Runs the router migration against `provider`, using its signers as the available accounts.
pub async fn deploy(
    env: &EnvironmentConfig,
    opts: &DeployOptions,
    artifact: Artifact,
    provider: &(impl Provider + WalletProvider),
) -> eyre::Result<Deployment> {
    let profile = env.profile(&opts.network)?;

    let migration = Migration::builder()
        .artifact(artifact)
        .addresses(env.address_table())
        .factory(opts.factory)
        .build();

    let mut config = DeploymentConfig::from_profile(&opts.network, profile);
    config.max_fee_per_gas_wei = opts.max_fee_per_gas_wei;
    config.simulate_only = opts.simulate_only;
    if let Some(interval) = opts.poll_interval {
        config.poll_interval = interval;
    }

    let accounts = accounts(provider);
    let mut deployer = RpcDeployer::new(provider, config);
    let deployment = migration
        .run(&mut deployer, &opts.network, &accounts)
        .await?;

    if let (Deployment::Confirmed(deployed), Some(dir)) = (&deployment, &opts.records_dir) {
        let request = migration.request(&opts.network)?;
        let record = DeploymentRecord::new(&opts.network, profile.network_id, &request, deployed);
        let path = record.write(dir)?;
        info!(@grey, "wrote deployment record to {}", path.display());
    }
    Ok(deployment)
}

/// Signer addresses with the default signer first.
fn accounts(provider: &impl WalletProvider) -> Vec<Address> {
    let default = provider.default_signer_address();
    let mut accounts = vec![default];
    accounts.extend(provider.signer_addresses().filter(|addr| *addr != default));
    accounts
}

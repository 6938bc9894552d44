// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Creation transaction for the router contract.

use alloy::{
    network::TransactionBuilder,
    primitives::{Address, Bytes},
    rpc::types::TransactionRequest,
    sol_types::SolValue,
};

use crate::core::artifact::Artifact;

/// A single router deployment: the contract code plus its `(factory, weth)` constructor
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    contract: String,
    bytecode: Bytes,
    factory: Address,
    weth: Address,
}

impl DeploymentRequest {
    pub fn new(artifact: &Artifact, factory: Address, weth: Address) -> Self {
        Self {
            contract: artifact.name.clone(),
            bytecode: artifact.bytecode.clone(),
            factory,
            weth,
        }
    }

    pub fn contract(&self) -> &str {
        &self.contract
    }

    pub fn factory(&self) -> Address {
        self.factory
    }

    pub fn weth(&self) -> Address {
        self.weth
    }

    /// Constructor arguments in declaration order.
    pub fn constructor_args(&self) -> (Address, Address) {
        (self.factory, self.weth)
    }

    /// Creation bytecode followed by the ABI-encoded constructor arguments.
    pub fn init_code(&self) -> Bytes {
        let args = self.constructor_args().abi_encode_params();
        let mut code = Vec::with_capacity(self.bytecode.len() + args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend(args);
        code.into()
    }

    /// Unsigned creation transaction sent from `sender`.
    pub fn tx(&self, sender: Address) -> TransactionRequest {
        TransactionRequest::default()
            .with_from(sender)
            .with_deploy_code(self.init_code())
    }
}

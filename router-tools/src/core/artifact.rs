// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Compiled contract artifacts.
//!
//! Both Truffle-style artifacts (`bytecode` is a hex string) and Foundry-style artifacts
//! (`bytecode.object`) are accepted.

use std::{fs, path::Path};

use alloy::{json_abi::JsonAbi, primitives::Bytes};
use serde::Deserialize;

use super::config::CompilerPin;
use crate::utils::decode0x;

/// Name of the contract this tool deploys.
pub const ROUTER_CONTRACT_NAME: &str = "UniswapV2Router02";

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid artifact json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid bytecode hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("artifact contains no creation bytecode")]
    EmptyBytecode,
    #[error("bytecode references unlinked library {0}")]
    UnlinkedLibrary(String),
    #[error("constructor must take (address factory, address weth), found ({0})")]
    ConstructorMismatch(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Hex(String),
    Object { object: String },
}

#[derive(Debug, Deserialize)]
struct RawCompiler {
    version: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArtifact {
    contract_name: Option<String>,
    abi: JsonAbi,
    bytecode: RawBytecode,
    compiler: Option<RawCompiler>,
}

/// A precompiled contract ready to be deployed.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifact {
    pub name: String,
    pub abi: JsonAbi,
    pub bytecode: Bytes,
    pub compiler_version: Option<String>,
}

impl Artifact {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let fallback = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| ROUTER_CONTRACT_NAME.to_string());
        Self::from_json(&text, &fallback)
    }

    /// Parses artifact JSON, naming the contract `fallback_name` if the artifact does not.
    pub fn from_json(json: &str, fallback_name: &str) -> Result<Self, ArtifactError> {
        let raw: RawArtifact = serde_json::from_str(json)?;
        let code = match raw.bytecode {
            RawBytecode::Hex(code) => code,
            RawBytecode::Object { object } => object,
        };
        if let Some(start) = code.find("__") {
            let placeholder: String = code[start..]
                .trim_start_matches('_')
                .chars()
                .take_while(|c| *c != '_')
                .collect();
            return Err(ArtifactError::UnlinkedLibrary(placeholder));
        }
        let bytecode = decode0x(&code)?;
        if bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode);
        }
        Ok(Self {
            name: raw
                .contract_name
                .unwrap_or_else(|| fallback_name.to_string()),
            abi: raw.abi,
            bytecode: bytecode.into(),
            compiler_version: raw.compiler.map(|c| c.version),
        })
    }

    /// Ensures the constructor takes the factory and WETH addresses, in that order.
    pub fn check_router_constructor(&self) -> Result<(), ArtifactError> {
        let inputs: Vec<&str> = self
            .abi
            .constructor
            .as_ref()
            .map(|c| c.inputs.iter().map(|p| p.ty.as_str()).collect())
            .unwrap_or_default();
        if inputs != ["address", "address"] {
            return Err(ArtifactError::ConstructorMismatch(inputs.join(", ")));
        }
        Ok(())
    }

    /// Warns when the artifact was built with a compiler other than the pinned one.
    pub fn check_compiler(&self, pin: &CompilerPin) -> bool {
        match &self.compiler_version {
            Some(version) if !pin.matches(version) => {
                warn!(@yellow,
                    "{} was compiled with solc {version}, expected {}",
                    self.name,
                    pin.version
                );
                false
            }
            Some(_) => true,
            None => {
                debug!(@grey, "{} does not record its compiler version", self.name);
                true
            }
        }
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Tools for configuring and deploying the Uniswap V2 router.
//!
//! The [`core`] module holds the building blocks (network registry, environment configuration,
//! artifacts, deployment requests and the migration driver). The [`ops`] module strings them
//! together into the operations exposed by the `router-deploy` command line tool.

#[macro_use]
mod macros;

pub mod core;
pub(crate) mod error;
pub mod ops;
pub mod utils;

#[cfg(feature = "integration-tests")]
pub mod devnet;

pub use error::{Error, Result};

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

use router_tools::core::{
    artifact::ArtifactError, config::ConfigError, deployment::DeploymentError,
    migration::MigrationError, registry::RegistryError,
};

pub type DeployCliResult = Result<(), DeployCliError>;

/// Exit code for configuration mistakes the user can fix before anything touches the network.
const CONFIG_EXIT_CODE: u8 = 2;

#[derive(Debug)]
pub struct DeployCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl DeployCliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }

    fn failure(error: impl Into<eyre::Error>) -> Self {
        Self {
            error: error.into(),
            exit_code: ExitCode::FAILURE,
        }
    }

    fn config(error: impl Into<eyre::Error>) -> Self {
        Self {
            error: error.into(),
            exit_code: ExitCode::from(CONFIG_EXIT_CODE),
        }
    }
}

impl fmt::Display for DeployCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for DeployCliError {
    fn from(err: std::io::Error) -> Self {
        Self::failure(err)
    }
}

impl From<eyre::Error> for DeployCliError {
    fn from(error: eyre::Error) -> Self {
        // Errors raised before reaching the network are configuration errors.
        let is_config = error.downcast_ref::<ConfigError>().is_some()
            || error.downcast_ref::<RegistryError>().is_some()
            || error.downcast_ref::<ArtifactError>().is_some()
            || matches!(
                error.downcast_ref::<MigrationError>(),
                Some(MigrationError::Registry(_))
            );
        if is_config {
            Self::config(error)
        } else {
            Self::failure(error)
        }
    }
}

impl From<router_tools::Error> for DeployCliError {
    fn from(err: router_tools::Error) -> Self {
        Self::failure(err)
    }
}

impl From<ConfigError> for DeployCliError {
    fn from(err: ConfigError) -> Self {
        Self::config(err)
    }
}

impl From<RegistryError> for DeployCliError {
    fn from(err: RegistryError) -> Self {
        Self::config(err)
    }
}

impl From<ArtifactError> for DeployCliError {
    fn from(err: ArtifactError) -> Self {
        Self::config(err)
    }
}

impl From<MigrationError> for DeployCliError {
    fn from(err: MigrationError) -> Self {
        match err {
            MigrationError::Registry(err) => Self::config(err),
            err => Self::failure(err),
        }
    }
}

impl From<DeploymentError> for DeployCliError {
    fn from(err: DeploymentError) -> Self {
        Self::failure(err)
    }
}

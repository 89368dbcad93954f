// Copyright 2026, Sweetpad
// For licensing, see https://github.com/sweetpad-fi/sweetpad-deploy/blob/main/licenses/COPYRIGHT.md

use std::fmt;
use std::process::ExitCode;

pub type SweetpadCliResult = Result<(), SweetpadCliError>;

#[derive(Debug)]
pub struct SweetpadCliError {
    error: eyre::Error,
    exit_code: ExitCode,
}

impl SweetpadCliError {
    pub fn exit_code(&self) -> ExitCode {
        self.exit_code
    }
}

impl fmt::Display for SweetpadCliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.error.fmt(f)
    }
}

impl From<std::io::Error> for SweetpadCliError {
    fn from(err: std::io::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<eyre::Error> for SweetpadCliError {
    fn from(error: eyre::Error) -> Self {
        Self {
            error,
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sweetpad_tools::Error> for SweetpadCliError {
    fn from(err: sweetpad_tools::Error) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sweetpad_tools::core::config::ConfigError> for SweetpadCliError {
    fn from(err: sweetpad_tools::core::config::ConfigError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sweetpad_tools::core::network::NetworkError> for SweetpadCliError {
    fn from(err: sweetpad_tools::core::network::NetworkError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sweetpad_tools::core::accounts::AccountsError> for SweetpadCliError {
    fn from(err: sweetpad_tools::core::accounts::AccountsError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sweetpad_tools::core::script::RegistryError> for SweetpadCliError {
    fn from(err: sweetpad_tools::core::script::RegistryError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sweetpad_tools::core::plan::PlanError> for SweetpadCliError {
    fn from(err: sweetpad_tools::core::plan::PlanError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sweetpad_tools::core::store::StoreError> for SweetpadCliError {
    fn from(err: sweetpad_tools::core::store::StoreError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<sweetpad_tools::core::deployment::DeploymentError> for SweetpadCliError {
    fn from(err: sweetpad_tools::core::deployment::DeploymentError) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

impl From<alloy::transports::RpcError<alloy::transports::TransportErrorKind>>
    for SweetpadCliError
{
    fn from(err: alloy::transports::RpcError<alloy::transports::TransportErrorKind>) -> Self {
        Self {
            error: err.into(),
            exit_code: ExitCode::FAILURE,
        }
    }
}

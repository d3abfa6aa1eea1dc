use crate::constants::{AH_ENV_REMOTE_IDE, AH_ENV_VAR};

/// Environment-detection contract: is this process running inside an
/// Acquia Remote IDE?
#[cfg_attr(test, mockall::automock)]
pub trait RemoteIdeProbe {
    fn is_remote_ide(&self) -> bool;
}

/// Production probe backed by the Acquia hosting environment variable.
///
/// Cloud Platform sets `AH_SITE_ENVIRONMENT=IDE` inside Remote IDE
/// containers.
#[derive(Debug, Default)]
pub struct AhEnvProbe;

impl RemoteIdeProbe for AhEnvProbe {
    fn is_remote_ide(&self) -> bool {
        std::env::var(AH_ENV_VAR)
            .map(|v| v == AH_ENV_REMOTE_IDE)
            .unwrap_or(false)
    }
}

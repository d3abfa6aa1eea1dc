use crate::constants::{IDE_SSH_KEY_FILENAME_PREFIX, IDE_SSH_KEY_LABEL_PREFIX};
use crate::ide::probe::{AhEnvProbe, RemoteIdeProbe};
use crate::ssh::normalize_label;
use crate::utils::AcliError;

/// Identity of a remote IDE instance, as returned by the Cloud API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ide {
    pub label: String,
    pub uuid: String,
}

impl Ide {
    pub fn new(label: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            uuid: uuid.into(),
        }
    }
}

/// Naming and environment-guard helpers shared by IDE wizard commands.
///
/// Owns no state beyond the injected environment probe.
pub struct IdeWizard {
    probe: Box<dyn RemoteIdeProbe>,
}

impl Default for IdeWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl IdeWizard {
    pub fn new() -> Self {
        Self::with_probe(Box::new(AhEnvProbe))
    }

    pub fn with_probe(probe: Box<dyn RemoteIdeProbe>) -> Self {
        Self { probe }
    }

    /// Derive the SSH key label tagging the key generated for one IDE.
    ///
    /// The label is `IDE_<label>_<uuid>`, sanitized into the character set
    /// Cloud Platform accepts for key labels.
    pub fn ssh_key_label(&self, ide: &Ide) -> String {
        normalize_label(&format!(
            "{}{}_{}",
            IDE_SSH_KEY_LABEL_PREFIX, ide.label, ide.uuid
        ))
    }

    /// Guard: fail unless the current process runs inside a Remote IDE.
    pub fn require_remote_ide(&self) -> Result<(), AcliError> {
        if !self.probe.is_remote_ide() {
            return Err(AcliError::EnvironmentMismatch);
        }
        Ok(())
    }

    /// Filename under which the private key for one IDE is stored.
    pub fn ssh_key_filename(ide_uuid: &str) -> String {
        format!("{}{}", IDE_SSH_KEY_FILENAME_PREFIX, ide_uuid)
    }
}

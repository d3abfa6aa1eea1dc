/// Constants module to avoid magic strings in the codebase

// SSH Key Naming
pub const IDE_SSH_KEY_LABEL_PREFIX: &str = "IDE_";
pub const IDE_SSH_KEY_FILENAME_PREFIX: &str = "id_rsa_acquia_ide_";

// Environment Detection
pub const AH_ENV_VAR: &str = "AH_SITE_ENVIRONMENT";
pub const AH_ENV_REMOTE_IDE: &str = "IDE";

// API Spec Cache
pub const SPEC_CHECKSUM_RECORD: &str = "api-spec.checksum";
pub const SPEC_DOCUMENT_RECORD: &str = "api-spec.document";
pub const DEFAULT_SPEC_FILE: &str = "assets/acquia-spec.yaml";

// Media Types (in order of preference for example resolution)
pub const MEDIA_TYPE_JSON: &str = "application/json";
pub const MEDIA_TYPE_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

// Gateway module for ide
// All external access must go through this gateway

mod probe;
mod wizard;

pub use probe::{AhEnvProbe, RemoteIdeProbe};
pub use wizard::{Ide, IdeWizard};

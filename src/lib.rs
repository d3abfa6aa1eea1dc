pub mod apispec;
pub mod app;
pub mod cli;
pub mod constants;
pub mod ide;
pub mod ssh;
pub mod utils;

pub use apispec::SpecCache;
pub use app::{load_config, Config};
pub use ide::{Ide, IdeWizard};
pub use utils::AcliError;

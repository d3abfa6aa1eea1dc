// Gateway module for utils
// All external access must go through this gateway

mod errors;
mod logger;

pub use errors::AcliError;
pub use logger::init_logger;

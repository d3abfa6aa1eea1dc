// Gateway module for apispec
// All external access must go through this gateway

mod cache;
mod resolver;

pub use cache::{CacheStatus, SpecCache};
pub use resolver::{example_request_body, example_response, operation};

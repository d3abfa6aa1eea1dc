// Gateway module for ssh
// All external access must go through this gateway

mod label;

pub use label::normalize_label;

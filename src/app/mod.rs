// Gateway module for app
// All external access must go through this gateway

mod config;

pub use config::{get_config_dir, init_config, load_config, save_config, Config, SpecConfig};

// Gateway module for cli
// All external access must go through this gateway

mod args;
mod commands;

pub use args::{Cli, Commands, IdeCommands, SpecCommands};
pub use commands::handle_command;

use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;

use crate::{
    apispec::{example_request_body, example_response, SpecCache},
    app::{init_config, Config},
    ide::{Ide, IdeWizard},
};

use super::{Commands, IdeCommands, SpecCommands};

/// Handle CLI subcommands
pub fn handle_command(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Init => {
            println!("Initializing acli configuration...");
            init_config()?;
            println!("Configuration initialized successfully!");
            Ok(())
        }
        Commands::Spec {
            spec_file,
            cache_dir,
            command,
        } => handle_spec(command, config, spec_file.clone(), cache_dir.clone()),
        Commands::Ide(command) => handle_ide(command),
    }
}

/// Handle `acli spec ...` subcommands
fn handle_spec(
    command: &SpecCommands,
    config: &Config,
    spec_file: Option<PathBuf>,
    cache_dir: Option<PathBuf>,
) -> Result<()> {
    let spec_file = spec_file.unwrap_or_else(|| config.spec.file.clone());
    let cache_dir = cache_dir.unwrap_or_else(|| config.spec.cache_dir.clone());
    let mut cache = SpecCache::new(spec_file, cache_dir)?;

    match command {
        SpecCommands::Response {
            path,
            method,
            status,
        } => {
            let doc = cache.load_document()?;
            let example = example_response(&doc, path, method, *status)?;
            println!("{}", serde_json::to_string_pretty(&example)?);
        }
        SpecCommands::RequestBody { path } => {
            let doc = cache.load_document()?;
            let example = example_request_body(&doc, path)?;
            println!("{}", serde_json::to_string_pretty(&example)?);
        }
        SpecCommands::Status => {
            let status = cache.status()?;
            println!("API spec cache:");
            println!("  Spec file: {}", status.spec_file.display());
            println!("  Cache dir: {}", status.cache_dir.display());
            println!("  Current checksum: {}", status.current_checksum);
            match &status.cached_checksum {
                Some(cached) => println!("  Cached checksum:  {cached}"),
                None => println!("  Cached checksum:  (none)"),
            }
            if status.valid {
                println!("  {}", "Cache is valid".green());
            } else {
                println!("  {}", "Cache is stale or empty".yellow());
            }
        }
        SpecCommands::Clear => {
            cache.clear()?;
            println!("Spec cache cleared");
        }
    }

    Ok(())
}

/// Handle `acli ide ...` subcommands
fn handle_ide(command: &IdeCommands) -> Result<()> {
    let wizard = IdeWizard::new();

    match command {
        IdeCommands::SshKeyLabel { label, uuid } => {
            let ide = Ide::new(label.clone(), uuid.clone());
            println!("{}", wizard.ssh_key_label(&ide));
        }
        IdeCommands::SshKeyFilename { uuid } => {
            println!("{}", IdeWizard::ssh_key_filename(uuid));
        }
        IdeCommands::Verify => {
            wizard.require_remote_ide()?;
            println!("{}", "Running inside an Acquia Remote IDE".green());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const SPEC: &str = r#"
paths:
  /ides/{ideUuid}:
    get:
      responses:
        200:
          content:
            application/json:
              example:
                uuid: abc
"#;

    #[test]
    fn test_spec_response_command_end_to_end() {
        let dir = TempDir::new().unwrap();
        let spec_file = dir.path().join("acquia-spec.yaml");
        fs::write(&spec_file, SPEC).unwrap();

        let command = SpecCommands::Response {
            path: "/ides/{ideUuid}".to_string(),
            method: "get".to_string(),
            status: 200,
        };
        handle_spec(
            &command,
            &Config::default(),
            Some(spec_file),
            Some(dir.path().join("cache")),
        )
        .unwrap();
    }

    #[test]
    fn test_spec_response_command_unknown_status_fails() {
        let dir = TempDir::new().unwrap();
        let spec_file = dir.path().join("acquia-spec.yaml");
        fs::write(&spec_file, SPEC).unwrap();

        let command = SpecCommands::Response {
            path: "/ides/{ideUuid}".to_string(),
            method: "get".to_string(),
            status: 500,
        };
        let err = handle_spec(
            &command,
            &Config::default(),
            Some(spec_file),
            Some(dir.path().join("cache")),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Not found"));
    }
}

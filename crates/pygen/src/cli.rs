use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use clap::Parser;
use console::style;
use tracing::info;

use pygen_codegen::generate_wrapper;
use pygen_core::{BindingSpec, ConfigError, GenConfig};

use crate::backend;

/// Generate Python bindings for the editor backend.
#[derive(Parser)]
#[command(name = "pygen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the generator configuration.
    #[arg(short, long, default_value = "pygen.toml")]
    pub config: PathBuf,

    /// Skip the external formatting step.
    #[arg(long)]
    pub no_format: bool,
}

impl Cli {
    /// Execute one generation run: every binding entry, in order.
    /// Member-level problems were already downgraded to diagnostics by
    /// the generator; anything that reaches here aborts the run.
    pub fn execute(self) -> Result<()> {
        let cfg = GenConfig::load(&self.config)
            .with_context(|| format!("failed to load {}", self.config.display()))?;
        let registry = backend::registry();

        info!("Generating bindings for {} types", cfg.bindings.len());

        for entry in &cfg.bindings {
            let def = registry
                .get(&entry.type_name)
                .ok_or_else(|| ConfigError::UnknownType(entry.type_name.clone()))?
                .clone();
            let spec = BindingSpec::from_entry(def, entry);

            let module = generate_wrapper(&spec, &cfg);
            std::fs::write(&spec.output, module.render())
                .with_context(|| format!("failed to write {}", spec.output.display()))?;

            if !self.no_format {
                if let Some(argv) = &cfg.formatter {
                    run_formatter(argv, &spec.output)?;
                }
            }

            println!("{} {}", style("✓").green(), spec.output.display());
        }

        Ok(())
    }
}

/// Run the configured formatter over one output file. A failing
/// formatter aborts the whole run; there is no partial-success mode.
fn run_formatter(argv: &[String], path: &Path) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .context("formatter command is empty")?;

    let output = Command::new(program)
        .args(args)
        .arg(path)
        .output()
        .with_context(|| format!("failed to run formatter {:?}", program))?;

    if !output.status.success() {
        bail!(
            "formatter failed for {}: {}",
            path.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["pygen"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("pygen.toml"));
        assert!(!cli.no_format);
    }

    #[test]
    fn test_cli_parse_flags() {
        let cli = Cli::try_parse_from(["pygen", "--config", "other.toml", "--no-format"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(cli.no_format);
    }

    #[test]
    fn test_execute_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("region.go");

        let config = format!(
            r#"
            package = "sublime"
            namespace = "sublime"
            imports = ["fmt", "lime/backend/primitives"]

            [[bindings]]
            type = "Region"
            output = {:?}
            creatable = true
            "#,
            out
        );
        let config_path = dir.path().join("pygen.toml");
        std::fs::write(&config_path, config).unwrap();

        let cli = Cli {
            config: config_path,
            no_format: true,
        };
        cli.execute().unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert!(text.contains("package sublime"));
        assert!(text.contains("var _regionClass = py.Class{"));
    }

    #[test]
    fn test_execute_unknown_type_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("pygen.toml");
        std::fs::write(
            &config_path,
            r#"
            package = "sublime"
            namespace = "sublime"

            [[bindings]]
            type = "NoSuchType"
            output = "nosuch.go"
            "#,
        )
        .unwrap();

        let cli = Cli {
            config: config_path,
            no_format: true,
        };
        let err = cli.execute().unwrap_err();
        assert!(err.to_string().contains("NoSuchType"));
    }
}

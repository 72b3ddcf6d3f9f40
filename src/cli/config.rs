//! Config and schema CLI commands

use cadastro::config_validate::{validate_config_file, validate_project, Severity};
use cadastro::{
    CadastroConfig, CategoryCoverage, DocumentReport, Error, PermissionSet, Result,
};
use std::path::Path;

pub fn cmd_config(args: &[String]) -> Result<()> {
    if args.is_empty() {
        return Err(Error::Usage(
            "cadastro config <check|schema> [--config <path>] [--json]".to_string(),
        ));
    }

    match args[0].as_str() {
        "check" => {
            let json_output = args.contains(&"--json".to_string());

            let result = match super::util::config_path_arg(args) {
                Some(path) => validate_config_file(&path),
                None => {
                    let current_dir = std::env::current_dir().map_err(Error::Io)?;
                    validate_project(&current_dir)
                }
            };

            if json_output {
                let issues_json: Vec<_> = result.issues.iter().map(|i| {
                    serde_json::json!({
                        "severity": match i.severity { Severity::Error => "error", Severity::Warning => "warning" },
                        "code": i.code,
                        "message": i.message,
                        "file": i.file,
                    })
                }).collect();

                let output = serde_json::json!({
                    "valid": !result.has_errors(),
                    "errors": result.error_count(),
                    "warnings": result.warning_count(),
                    "issues": issues_json,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else if result.issues.is_empty() && result.config_valid {
                println!("✓ Configuration is valid");
            } else {
                for issue in &result.issues {
                    let (prefix, level) = match issue.severity {
                        Severity::Error => ("✗", "ERROR"),
                        Severity::Warning => ("⚠", "WARN"),
                    };
                    println!("{} [{}] {}: {}", prefix, issue.code, level, issue.message);
                    println!("  File: {}", issue.file);
                }

                println!();
                if result.has_errors() {
                    println!(
                        "✗ {} error(s), {} warning(s)",
                        result.error_count(),
                        result.warning_count()
                    );
                } else {
                    println!("✓ {} warning(s) (no errors)", result.warning_count());
                }
            }

            if result.has_errors() {
                return Err("Configuration validation failed".into());
            }
            Ok(())
        }
        "schema" => print_schema::<CadastroConfig>(),
        cmd => Err(format!(
            "Unknown config subcommand: {}. Use 'check' or 'schema'.",
            cmd
        )
        .into()),
    }
}

pub fn cmd_schema(args: &[String]) -> Result<()> {
    let schema_name = args.first().map(|s| s.as_str()).unwrap_or("list");

    match schema_name {
        "list" => {
            println!("Available schemas: config, report, selection, coverage");
            Ok(())
        }
        "config" => print_schema::<CadastroConfig>(),
        "report" | "document" => print_schema::<Vec<DocumentReport>>(),
        "selection" => print_schema::<PermissionSet>(),
        "coverage" => print_schema::<Vec<CategoryCoverage>>(),
        _ => Err(format!("Unknown schema: {}", schema_name).into()),
    }
}

fn print_schema<T: schemars::JsonSchema>() -> Result<()> {
    let schema = schemars::schema_for!(T);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

/// Logging level from the config the command will use, if any
pub fn configured_log_level(config_path: Option<&Path>) -> Option<String> {
    let config = match config_path {
        Some(path) => CadastroConfig::load(path).ok()?,
        None => {
            let current_dir = std::env::current_dir().ok()?;
            CadastroConfig::find(&current_dir).ok()??.1
        }
    };
    Some(config.logging.level)
}

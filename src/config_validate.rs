//! Config validation for cadastro
//!
//! Checks a `cadastro.yaml` for problems the loader itself accepts:
//! duplicate or malformed permission ids, templates pointing at ids the
//! catalog lacks, and explicit templates that grant nothing.

use crate::config::{CadastroConfig, CONFIG_FILE};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A validation issue found in config
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    pub file: String,
}

impl ConfigIssue {
    pub fn error(code: &str, message: &str, file: &str) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            message: message.to_string(),
            file: file.to_string(),
        }
    }

    pub fn warning(code: &str, message: &str, file: &str) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.to_string(),
            file: file.to_string(),
        }
    }
}

/// Result of config validation
#[derive(Debug, Default)]
pub struct ConfigValidationResult {
    pub issues: Vec<ConfigIssue>,
    pub config_valid: bool,
}

impl ConfigValidationResult {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }
}

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Lowercase dot-separated segments, e.g. `eventos.view`
static PERMISSION_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9_]+(\.[a-z0-9_]+)*$").expect("permission id pattern compiles")
});

/// Validate one `cadastro.yaml` file
pub fn validate_config_file(path: &Path) -> ConfigValidationResult {
    let mut result = ConfigValidationResult::default();
    let file_str = path.display().to_string();

    if !path.exists() {
        result
            .issues
            .push(ConfigIssue::error("E001", "File does not exist", &file_str));
        return result;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            result.issues.push(ConfigIssue::error(
                "E002",
                &format!("Cannot read file: {}", e),
                &file_str,
            ));
            return result;
        }
    };

    let config: CadastroConfig = match serde_norway::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            result.issues.push(ConfigIssue::error(
                "E003",
                &format!("Invalid YAML: {}", e),
                &file_str,
            ));
            return result;
        }
    };

    if config.version != 1 {
        result.issues.push(ConfigIssue::error(
            "E004",
            &format!(
                "Unsupported version: {}. Only version 1 is supported.",
                config.version
            ),
            &file_str,
        ));
    }

    validate_catalog(&config, &file_str, &mut result);
    validate_templates(&config, &file_str, &mut result);
    validate_logging(&config, &file_str, &mut result);

    result.config_valid = !result.has_errors();
    result
}

fn validate_catalog(config: &CadastroConfig, file: &str, result: &mut ConfigValidationResult) {
    let catalog = config.catalog();
    if catalog.is_empty() {
        result.issues.push(ConfigIssue::warning(
            "W010",
            "Permission catalog is empty. Templates and category toggles will grant nothing.",
            file,
        ));
        return;
    }

    let mut seen = HashSet::new();
    for permission in catalog.permissions() {
        if !seen.insert(permission.id.as_str()) {
            result.issues.push(ConfigIssue::error(
                "E010",
                &format!("Duplicate permission id '{}'", permission.id),
                file,
            ));
        }
        if !PERMISSION_ID.is_match(&permission.id) {
            result.issues.push(ConfigIssue::error(
                "E011",
                &format!(
                    "Permission id '{}' must be lowercase dot-separated segments of [a-z0-9_]",
                    permission.id
                ),
                file,
            ));
        }
        if permission.category.trim().is_empty() {
            result.issues.push(ConfigIssue::warning(
                "W012",
                &format!(
                    "Permission '{}' has no category and cannot be toggled as a group",
                    permission.id
                ),
                file,
            ));
        }
    }
}

fn validate_templates(config: &CadastroConfig, file: &str, result: &mut ConfigValidationResult) {
    use crate::permission::Template;

    let catalog = config.catalog();
    let mut seen = HashSet::new();

    for template in &config.permissions.templates {
        if !seen.insert(template.id.as_str()) {
            result.issues.push(ConfigIssue::error(
                "E013",
                &format!("Duplicate template id '{}'", template.id),
                file,
            ));
        }

        let Template::Explicit(ids) = &template.grant else {
            continue;
        };

        if ids.is_empty() {
            result.issues.push(ConfigIssue::warning(
                "W011",
                &format!(
                    "Template '{}' grants no permissions. Use kind: all_permissions to grant everything.",
                    template.id
                ),
                file,
            ));
        }

        for id in ids.iter().filter(|id| !catalog.contains(id)) {
            result.issues.push(ConfigIssue::error(
                "E012",
                &format!(
                    "Template '{}' references unknown permission '{}'",
                    template.id, id
                ),
                file,
            ));
        }
    }
}

fn validate_logging(config: &CadastroConfig, file: &str, result: &mut ConfigValidationResult) {
    // Directive lists like `cadastro=debug,warn` are left to the filter parser
    let level = config.logging.level.trim().to_ascii_lowercase();
    if !level.contains('=') && !level.contains(',') && !LOG_LEVELS.contains(&level.as_str()) {
        result.issues.push(ConfigIssue::warning(
            "W013",
            &format!(
                "logging.level '{}' is not one of {}",
                config.logging.level,
                LOG_LEVELS.join(", ")
            ),
            file,
        ));
    }
}

/// Find and validate `cadastro.yaml` in `root_dir` or its parents
pub fn validate_project(root_dir: &Path) -> ConfigValidationResult {
    match root_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.exists())
    {
        Some(config_file) => validate_config_file(&config_file),
        None => {
            let mut result = ConfigValidationResult::default();
            result.issues.push(ConfigIssue::warning(
                "W001",
                &format!("No {} found in this directory or its parents.", CONFIG_FILE),
                &root_dir.display().to_string(),
            ));
            result
        }
    }
}

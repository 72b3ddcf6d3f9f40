//! CLI utility helpers

use cadastro::{CadastroConfig, Error, PermissionSet, Result};
use std::path::{Path, PathBuf};

/// Flags that take a value, as `--flag value` or `--flag=value`
const VALUED: [&str; 6] = ["--kind", "-k", "--selected", "-s", "--config", "-c"];

/// Flags that stand alone
const SWITCHES: [&str; 1] = ["--json"];

/// Value given to `--name` or its short alias, in either spelling
pub fn flag_value<'a>(args: &'a [String], long: &str, short: &str) -> Option<&'a str> {
    args.iter().enumerate().find_map(|(i, arg)| {
        if arg == long || arg == short {
            return args.get(i + 1).map(String::as_str);
        }
        [long, short]
            .iter()
            .find_map(|flag| arg.strip_prefix(flag)?.strip_prefix('='))
    })
}

pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|arg| arg == flag)
}

/// Arguments that are neither flags nor flag values
///
/// An unrecognized `--flag` is a usage error rather than being dropped.
pub fn positional(args: &[String]) -> Result<Vec<&str>> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        let name = arg.split_once('=').map_or(arg.as_str(), |(name, _)| name);
        if VALUED.contains(&arg.as_str()) {
            skip_next = true;
        } else if VALUED.contains(&name) || SWITCHES.contains(&arg.as_str()) {
            continue;
        } else if arg.starts_with("--") {
            return Err(Error::Usage(format!("Unknown option: {}", arg)));
        } else {
            out.push(arg.as_str());
        }
    }
    Ok(out)
}

/// Parse `--selected a,b,c` into a selection; absent means empty
pub fn parse_selected_arg(args: &[String]) -> PermissionSet {
    flag_value(args, "--selected", "-s")
        .map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Load `--config <path>`, or search upward from the current directory
pub fn load_config(args: &[String]) -> Result<CadastroConfig> {
    if let Some(path) = flag_value(args, "--config", "-c") {
        return CadastroConfig::load(Path::new(path));
    }

    let current_dir = std::env::current_dir().map_err(Error::Io)?;
    match CadastroConfig::find(&current_dir)? {
        Some((_, config)) => Ok(config),
        None => Err(Error::Config(format!(
            "No {} found. Pass --config <path>.",
            cadastro::CONFIG_FILE
        ))),
    }
}

/// `--config` path if given, for the logging setup in `main`
pub fn config_path_arg(args: &[String]) -> Option<PathBuf> {
    flag_value(args, "--config", "-c").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_flag_value() {
        let a = args(&["123", "--kind", "cpf", "--json"]);
        assert_eq!(flag_value(&a, "--kind", "-k"), Some("cpf"));
        assert_eq!(flag_value(&a, "--config", "-c"), None);
        assert!(has_flag(&a, "--json"));
    }

    #[test]
    fn test_flag_value_with_equals() {
        let a = args(&["12345678909", "--kind=cnpj", "-c=demo.yaml"]);
        assert_eq!(flag_value(&a, "--kind", "-k"), Some("cnpj"));
        assert_eq!(flag_value(&a, "--config", "-c"), Some("demo.yaml"));
        assert_eq!(flag_value(&a, "--selected", "-s"), None);
        assert_eq!(config_path_arg(&a), Some(PathBuf::from("demo.yaml")));
    }

    #[test]
    fn test_flag_value_needs_exact_name() {
        let a = args(&["--kinds=cnpj", "--configure", "x"]);
        assert_eq!(flag_value(&a, "--kind", "-k"), None);
        assert_eq!(flag_value(&a, "--config", "-c"), None);
    }

    #[test]
    fn test_positional_skips_flag_values() {
        let a = args(&["toggle", "--selected", "a,b", "eventos.view", "--json"]);
        assert_eq!(positional(&a).unwrap(), vec!["toggle", "eventos.view"]);

        let a = args(&["12345678909", "--kind=cnpj", "-s=a,b"]);
        assert_eq!(positional(&a).unwrap(), vec!["12345678909"]);
    }

    #[test]
    fn test_positional_rejects_unknown_option() {
        let a = args(&["12345678909", "--knd=cnpj"]);
        assert!(matches!(positional(&a), Err(Error::Usage(_))));
        assert!(matches!(
            positional(&args(&["--verbose"])),
            Err(Error::Usage(_))
        ));
    }

    #[test]
    fn test_parse_selected_arg() {
        let a = args(&["-s", " a, b,,a "]);
        let selected = parse_selected_arg(&a);
        assert_eq!(selected.len(), 2);
        assert!(selected.contains("a") && selected.contains("b"));
        assert!(parse_selected_arg(&args(&[])).is_empty());
    }
}

//! cadastro CLI - Command-line interface
//!
//! Commands:
//!   validate - Check CPF/CNPJ check digits
//!   format   - Apply display masks
//!   perms    - Edit a permission selection
//!   config   - Check configuration
//!   schema   - Print JSON schemas

mod cli;

use cadastro::{Result, VERSION};
use cli::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured log filter
const LOG_ENV: &str = "CADASTRO_LOG";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    init_logging(&args);

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result: Result<()> = match args[1].as_str() {
        "validate" => cmd_validate(&args[2..]),
        "format" => cmd_format(&args[2..]),
        "perms" => cmd_perms(&args[2..]),
        "config" => cmd_config(&args[2..]),
        "schema" => cmd_schema(&args[2..]),
        "version" | "--version" | "-v" => {
            println!("cadastro {}", VERSION);
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            Err("Unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Install the stderr subscriber; `CADASTRO_LOG` wins over `logging.level`
fn init_logging(args: &[String]) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let config_path = cli::util::config_path_arg(args);
        let level = cli::config::configured_log_level(config_path.as_deref())
            .unwrap_or_else(|| "warn".to_string());
        EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_usage() {
    println!(
        r#"
cadastro - Brazilian document validation and permission editing

USAGE:
    cadastro <COMMAND> [OPTIONS]

COMMANDS:
    validate <document>...            Check CPF/CNPJ check digits
    format <value>...                 Apply a display mask
    perms toggle <id>                 Flip one permission
    perms category <name>             Toggle every permission in a category
    perms template <id>               Replace the selection with a template
    perms coverage                    Show per-category checkbox state
    perms templates                   List configured templates
    config check                      Validate cadastro.yaml
    config schema                     Print the cadastro.yaml JSON schema
    schema [name]                     Print JSON schema for output type

OPTIONS:
    --kind <cpf|cnpj>                 Document kind for validate (default: by length)
    --kind <cpf|cnpj|doc|phone|cep>   Mask for format (default: doc)
    --selected <a,b,c>                Starting selection for perms
    --config <file>                   Config file (default: search for cadastro.yaml)
    --json                            JSON output format (validate, perms, config check)

ENVIRONMENT:
    CADASTRO_LOG                      Log filter, e.g. debug or cadastro=trace

EXAMPLES:
    cadastro validate 123.456.789-09
    cadastro validate 11222333000181 --kind cnpj --json
    cadastro format 01310100 --kind cep
    cadastro perms category eventos --selected eventos.view
    cadastro perms template admin --json
"#
    );
}

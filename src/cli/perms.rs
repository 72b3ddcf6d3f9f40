//! Permission selection CLI commands
//!
//! Each subcommand starts from `--selected a,b,c`, applies one edit, and
//! prints the resulting selection. Everything except `toggle` reads the
//! catalog from `cadastro.yaml`.

use super::util::{has_flag, load_config, parse_selected_arg, positional};
use cadastro::{
    reduce, toggle_one, CadastroConfig, Coverage, Error, PermissionSet, Result, SelectionEdit,
};

const USAGE: &str = "cadastro perms <toggle <id>|category <name>|template <id>|coverage|templates> \
[--selected a,b,c] [--config <path>] [--json]";

pub fn cmd_perms(args: &[String]) -> Result<()> {
    let words = positional(args)?;
    let Some((&sub, rest)) = words.split_first() else {
        return Err(Error::Usage(USAGE.to_string()));
    };

    let selected = parse_selected_arg(args);
    let json_output = has_flag(args, "--json");

    // Flipping one id needs no catalog
    if sub == "toggle" {
        let id = required(rest, "toggle <id>")?;
        return print_selection(&toggle_one(&selected, id), json_output);
    }

    if !matches!(sub, "category" | "template" | "coverage" | "templates") {
        return Err(Error::Usage(format!(
            "Unknown perms subcommand: {}. {}",
            sub, USAGE
        )));
    }

    let config = load_config(args)?;
    for unknown in config.catalog().unknown_ids(&selected) {
        tracing::warn!(id = %unknown, "selected permission is not in the catalog");
    }

    match sub {
        "category" => {
            let category = required(rest, "category <name>")?;
            if config.catalog().ids_in_category(category).is_empty() {
                return Err(Error::UnknownCategory(category.to_string()));
            }
            let edit = SelectionEdit::ToggleCategory(category.to_string());
            print_selection(&reduce(&selected, &edit, config.catalog()), json_output)
        }
        "template" => {
            let id = required(rest, "template <id>")?;
            let template = config.template(id)?;
            print_selection(&template.apply(&selected, config.catalog()), json_output)
        }
        "coverage" => print_coverage(&config, &selected, json_output),
        _ => print_templates(&config, json_output),
    }
}

fn required<'a>(rest: &[&'a str], usage: &str) -> Result<&'a str> {
    rest.first()
        .copied()
        .ok_or_else(|| Error::Usage(format!("cadastro perms {}", usage)))
}

fn print_selection(selection: &PermissionSet, json_output: bool) -> Result<()> {
    if json_output {
        println!("{}", serde_json::to_string_pretty(selection)?);
    } else if selection.is_empty() {
        println!("(no permissions selected)");
    } else {
        for id in selection {
            println!("{}", id);
        }
    }
    Ok(())
}

fn print_coverage(
    config: &CadastroConfig,
    selected: &PermissionSet,
    json_output: bool,
) -> Result<()> {
    let report = config.catalog().coverage_by_category(selected);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for row in &report {
        println!(
            "{} {} ({}/{})",
            row.coverage.symbol(),
            row.category,
            row.selected,
            row.total
        );
    }

    let full = report
        .iter()
        .filter(|r| r.coverage == Coverage::Full)
        .count();
    println!("\n{} of {} categories fully selected", full, report.len());
    Ok(())
}

fn print_templates(config: &CadastroConfig, json_output: bool) -> Result<()> {
    let templates = &config.permissions.templates;

    if json_output {
        println!("{}", serde_json::to_string_pretty(templates)?);
        return Ok(());
    }

    for template in templates {
        let granted = template
            .apply(&PermissionSet::new(), config.catalog())
            .len();
        let name = if template.name.is_empty() {
            &template.id
        } else {
            &template.name
        };
        println!("{:<16} {} ({} permissions)", template.id, name, granted);
    }
    Ok(())
}

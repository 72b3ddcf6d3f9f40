//! Document validation CLI command

use super::util::{flag_value, has_flag, positional};
use cadastro::*;

pub fn cmd_validate(args: &[String]) -> Result<()> {
    let inputs = positional(args)?;
    if inputs.is_empty() {
        return Err(Error::Usage(
            "cadastro validate <document>... [--kind cpf|cnpj] [--json]".to_string(),
        ));
    }

    let kind = flag_value(args, "--kind", "-k")
        .map(str::parse::<DocumentKind>)
        .transpose()?;
    let json_output = has_flag(args, "--json");

    let reports: Vec<DocumentReport> = inputs
        .iter()
        .map(|input| validate_document(input, kind))
        .collect();

    for report in reports.iter().filter(|r| !r.valid) {
        tracing::info!(
            input = %report.input,
            error = report.error.as_deref().unwrap_or(""),
            "document rejected"
        );
    }

    // JSON is always an array, one report per input
    if json_output {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}", report.to_report());
        }
    }

    // Exit code: 0 = all valid, 1 = any invalid
    if reports.iter().all(|r| r.valid) {
        Ok(())
    } else {
        Err("Validation failed".into())
    }
}

//! Display mask CLI command

use super::util::{flag_value, positional};
use cadastro::*;

pub fn cmd_format(args: &[String]) -> Result<()> {
    let inputs = positional(args)?;
    if inputs.is_empty() {
        return Err(Error::Usage(
            "cadastro format <value>... [--kind cpf|cnpj|doc|phone|cep]".to_string(),
        ));
    }

    let kind = flag_value(args, "--kind", "-k")
        .map(str::parse::<FormatKind>)
        .transpose()?
        .unwrap_or(FormatKind::Document);

    for input in inputs {
        println!("{}", format_value(input, kind));
    }
    Ok(())
}

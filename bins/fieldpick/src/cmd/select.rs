use std::io::Read;

use fieldpick_api::{ToValue, Value};
use fieldpick_engine::Converter;

use crate::config::{SelectArgs, SelectConfig};
use crate::error::CliError;

pub fn run(args: SelectArgs) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => {
            let config = SelectConfig::load(path)?;
            tracing::info!(config = %path, fields = config.fields.len(), "loaded config");
            config
        }
        None => SelectConfig::default(),
    };

    let input = read_input(args.input.as_deref())?;
    let output = select(config, &args, &input)?;
    println!("{output}");
    Ok(())
}

/// Apply the configured and command-line field specs to a JSON document.
fn select(config: SelectConfig, args: &SelectArgs, input: &str) -> Result<String, CliError> {
    let mut fields = config.fields;
    fields.extend(args.fields.iter().cloned());
    if fields.is_empty() {
        return Err(CliError::NoFields);
    }

    let mut options = config.options;
    if args.strict {
        options.strict_specs = true;
    }

    let converter = Converter::with_options(&fields, options)?;
    let document: serde_json::Value = serde_json::from_str(input)?;
    let result: Value = converter.convert_value(&document.to_value())?;
    tracing::debug!(fields = fields.len(), kind = result.type_name(), "selected fields");

    let json = serde_json::Value::from(&result);
    let text = if args.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    Ok(text)
}

fn read_input(path: Option<&str>) -> Result<String, CliError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| CliError::Input {
            context: "read",
            detail: format!("'{path}': {e}"),
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| CliError::Input {
                    context: "stdin",
                    detail: e.to_string(),
                })?;
            Ok(buf)
        }
    }
}

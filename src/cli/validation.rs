use crate::cli::args::CliArgs;
use crate::output::OutputFormat;

pub fn is_valid_element_id(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub fn validate(args: &CliArgs) -> Result<(), String> {
    if let Some(raw) = args.output_format.as_deref() {
        if OutputFormat::parse(raw).is_none() {
            return Err(format!(
                "invalid --format '{raw}', expected text, json or html"
            ));
        }
    }
    if let Some(raw) = args.table_id.as_deref() {
        if !is_valid_element_id(raw) {
            return Err(format!("invalid --table-id '{raw}'"));
        }
    }
    if let Some(raw) = args.total_id.as_deref() {
        if !is_valid_element_id(raw) {
            return Err(format!("invalid --total-id '{raw}'"));
        }
    }
    if let Some(raw) = args.output.as_deref() {
        if raw.trim().is_empty() {
            return Err("invalid --output, expected a file path".to_string());
        }
    }
    Ok(())
}

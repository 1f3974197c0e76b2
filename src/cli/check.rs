//! Run pupil rules from the command line

use crate::{Rule, Validator, Value, output::render_tree, parse, tokenize};

use super::{CliError, json_to_batch};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The rule to check the value against
    pub rule: String,
    /// The value; `None` checks an absent value
    pub value: Option<String>,
}

/// Options for the batch command
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// JSON batch `{"field": [value, rule]}`
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
}

/// Validate one value against one rule
pub fn execute_check(options: &CheckOptions) -> Result<bool, CliError> {
    let value = options
        .value
        .as_deref()
        .map(Value::from)
        .unwrap_or(Value::Absent);

    Ok(Validator::new().validate_one(value, Rule::from(&options.rule))?)
}

/// Validate a JSON batch and return the results as a JSON object
pub fn execute_batch(options: &BatchOptions) -> Result<String, CliError> {
    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let json_value: serde_json::Value = serde_json::from_str(json_str)?;
    let batch = json_to_batch(json_value)?;

    let results = Validator::new().validate(&batch)?;

    let rendered = if options.pretty {
        serde_json::to_string_pretty(&results)
    } else {
        serde_json::to_string(&results)
    }?;
    Ok(rendered)
}

/// Tokenize a rule and return the tokens as JSON
pub fn execute_tokens(rule: &str, pretty: bool) -> Result<String, CliError> {
    let tokens = tokenize(rule);
    let rendered = if pretty {
        serde_json::to_string_pretty(&tokens)
    } else {
        serde_json::to_string(&tokens)
    }?;
    Ok(rendered)
}

/// Parse a rule and render its tree
pub fn execute_tree(rule: &str) -> Result<String, CliError> {
    let tree = parse(rule)?;
    Ok(render_tree(&tree))
}

/// Names of all checks a fresh validator knows
pub fn list_checks() -> Vec<String> {
    Validator::new()
        .registry()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

//! JSON <-> pupil conversion utilities

use crate::{Field, Rule, RuleBatch, Value};

use super::CliError;

/// Convert serde_json::Value to a pupil Value.
///
/// Arrays and objects have no pupil counterpart and are rejected.
pub fn json_to_value(v: serde_json::Value) -> Result<Value, CliError> {
    match v {
        serde_json::Value::Null => Ok(Value::Null),
        serde_json::Value::Bool(b) => Ok(Value::Boolean(b)),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Value::Integer(i)),
            None => n
                .as_f64()
                .map(Value::Float)
                .ok_or_else(|| CliError::UnsupportedValue(n.to_string())),
        },
        serde_json::Value::String(s) => Ok(Value::String(s)),
        other => Err(CliError::UnsupportedValue(other.to_string())),
    }
}

/// Read a batch from `{"field": [value, rule], ...}`.
///
/// The rule is a string or an array of tokens. Field order is kept.
pub fn json_to_batch(v: serde_json::Value) -> Result<RuleBatch, CliError> {
    let serde_json::Value::Object(fields) = v else {
        return Err(CliError::MalformedBatch(
            "expected an object of fields".to_string(),
        ));
    };

    let mut batch = RuleBatch::new();
    for (name, entry) in fields {
        let serde_json::Value::Array(pair) = entry else {
            return Err(CliError::MalformedBatch(format!(
                "field '{name}' must be a [value, rule] pair"
            )));
        };
        let [value, rule]: [serde_json::Value; 2] = pair.try_into().map_err(|_| {
            CliError::MalformedBatch(format!("field '{name}' must be a [value, rule] pair"))
        })?;

        let rule = Rule::try_from(rule)?;
        batch.insert(name, Field::new(json_to_value(value)?, rule));
    }

    Ok(batch)
}

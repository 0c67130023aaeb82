use std::collections::HashMap;

use libs::tera::{self, Filter, Value};

/// `{{ name | initials }}`: "Alice Johnson" becomes "AJ".
pub(crate) struct Initials;

impl Filter for Initials {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        let name = value
            .as_str()
            .ok_or_else(|| tera::Error::msg("initials expects a string"))?;
        let initials: String = name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect();

        Ok(Value::String(initials))
    }
}

use serde_json::Value;

/// Truthiness as the record producer sees it
///
/// `null`, `false`, `0` and `""` are falsy. Every other value is truthy,
/// including empty arrays and empty objects.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Look up a string argument, treating other JSON types as absent
pub fn str_arg<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    args.get(key).and_then(Value::as_str)
}

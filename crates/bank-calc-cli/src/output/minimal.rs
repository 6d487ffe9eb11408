use serde_json::Value;

/// Print just the headline figure from the output.
///
/// Looks for well-known result fields in order of priority, first in the
/// result object and then in its `summary`.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "maturity_value",
        "maturity_amount",
        "total_payment",
        "total_interest",
    ];

    let scopes = [Some(result_obj), result_obj.get("summary")];
    for scope in scopes.iter().flatten() {
        if let Value::Object(map) = scope {
            for key in &priority_keys {
                if let Some(val) = map.get(*key) {
                    if !val.is_null() {
                        return format_minimal(val);
                    }
                }
            }
        }
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_minimal(val));
        }
    }

    format_minimal(result_obj)
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

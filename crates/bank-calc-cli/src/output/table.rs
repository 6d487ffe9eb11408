use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

/// Format output as tables: scalar result fields as Field/Value rows, each
/// nested object flattened into the same table, and each array (a schedule)
/// as its own table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                print_result_tables(result);
                print_envelope_notes(map);
            } else {
                println!("{}", field_table(map));
            }
        }
        Value::Array(arr) => println!("{}", array_table(arr)),
        _ => println!("{}", value),
    }
}

fn print_result_tables(result: &Map<String, Value>) {
    let mut scalars = Builder::default();
    scalars.push_record(["Field", "Value"]);
    let mut arrays: Vec<(&str, &Vec<Value>)> = Vec::new();

    for (key, val) in result {
        match val {
            Value::Array(arr) => arrays.push((key.as_str(), arr)),
            Value::Object(inner) => {
                for (inner_key, inner_val) in inner {
                    scalars.push_record([format!("{key}.{inner_key}"), format_value(inner_val)]);
                }
            }
            _ => scalars.push_record([key.clone(), format_value(val)]),
        }
    }

    for (name, arr) in arrays {
        println!("{name}:");
        println!("{}", array_table(arr));
        println!();
    }
    println!("{}", Table::from(scalars));
}

fn print_envelope_notes(envelope: &Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn field_table(map: &Map<String, Value>) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.clone(), format_value(val)]);
    }
    Table::from(builder)
}

pub(crate) fn array_table(arr: &[Value]) -> String {
    let Some(Value::Object(first)) = arr.first() else {
        return arr.iter().map(format_value).collect::<Vec<_>>().join("\n");
    };

    let headers: Vec<String> = first.keys().cloned().collect();
    let mut builder = Builder::default();
    builder.push_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }

    Table::from(builder).to_string()
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

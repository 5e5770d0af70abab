use serde_json::Value;

/// Renders an `Information` payload as one line per reported value.
///
/// Handles the two common PUG View value shapes, `StringWithMarkup` and
/// `Number` (+ optional `Unit`); anything else is shown as compact JSON.
pub fn summarize_information(payload: &Value) -> Vec<String> {
    let Some(records) = payload.as_array() else {
        return vec![payload.to_string()];
    };
    records
        .iter()
        .filter_map(|r| r.get("Value"))
        .flat_map(summarize_value)
        .collect()
}

fn summarize_value(value: &Value) -> Vec<String> {
    if let Some(items) = value.get("StringWithMarkup").and_then(Value::as_array) {
        return items
            .iter()
            .filter_map(|i| i.get("String").and_then(Value::as_str))
            .map(str::to_string)
            .collect();
    }
    if let Some(numbers) = value.get("Number").and_then(Value::as_array) {
        let joined = numbers
            .iter()
            .map(Value::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        return match value.get("Unit").and_then(Value::as_str) {
            Some(unit) => vec![format!("{} {}", joined, unit)],
            None => vec![joined],
        };
    }
    vec![value.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_and_numbers_are_rendered() {
        let payload = json!([
            {"ReferenceNumber": 12, "Value": {"StringWithMarkup": [{"String": "56.08 °C"}]}},
            {"ReferenceNumber": 13, "Value": {"Number": [56.5], "Unit": "°C"}},
            {"ReferenceNumber": 14, "Value": {"Number": [0.79]}}
        ]);
        assert_eq!(
            summarize_information(&payload),
            vec!["56.08 °C", "56.5 °C", "0.79"]
        );
    }

    #[test]
    fn unknown_shapes_fall_back_to_json() {
        let payload = json!([{"Value": {"Boolean": [true]}}, {"Name": "no value"}]);
        assert_eq!(summarize_information(&payload), vec![r#"{"Boolean":[true]}"#]);
        assert_eq!(summarize_information(&json!("x")), vec![r#""x""#]);
    }
}

use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Prints `data` as a `{"ok": true, "data": ...}` envelope in JSON mode,
/// otherwise the text lines produced by `lines`.
pub fn emit<T: Serialize>(
    json: bool,
    data: &T,
    lines: impl FnOnce(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for line in lines(data) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Strings print bare; everything else as compact JSON.
pub fn scalar_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

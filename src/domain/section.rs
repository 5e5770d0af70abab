use crate::error::{PubChemError, Result};
use serde_json::Value;

/// Borrowed view of one PUG View section object.
///
/// A section carries a `TOCHeading` and either child sections (`Section`)
/// or a leaf payload (`Information`). Either field may be absent.
#[derive(Debug, Clone, Copy)]
pub struct SectionView<'a> {
    node: &'a serde_json::Map<String, Value>,
}

impl<'a> SectionView<'a> {
    pub fn new(value: &'a Value, context: &'static str) -> Result<Self> {
        value.as_object().map(|node| Self { node }).ok_or_else(|| {
            PubChemError::shape(
                context,
                format!("section is not an object: {}", kind(value)),
            )
        })
    }

    /// Views every entry of a `Section` array. Non-object entries are malformed.
    pub fn list(values: &'a [Value], context: &'static str) -> Result<Vec<Self>> {
        values.iter().map(|v| Self::new(v, context)).collect()
    }

    pub fn heading(&self) -> Option<&'a str> {
        self.node.get("TOCHeading").and_then(Value::as_str)
    }

    /// `Ok(None)` when the node has no `Section` field; an error when the field
    /// is there but is not an array.
    pub fn children(&self, context: &'static str) -> Result<Option<Vec<SectionView<'a>>>> {
        match self.node.get("Section") {
            None => Ok(None),
            Some(Value::Array(items)) => Self::list(items, context).map(Some),
            Some(other) => Err(PubChemError::shape(
                context,
                format!(
                    "`Section` of {:?} is {}, expected an array",
                    self.heading().unwrap_or("<untitled>"),
                    kind(other)
                ),
            )),
        }
    }

    pub fn information(&self) -> Option<&'a Value> {
        self.node.get("Information")
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

use crate::core::value::{FieldValue, Value};
use serde::{Deserialize, Serialize};

/// One result row, addressed by column alias.
///
/// Aliases are matched ASCII case-insensitively, so `"column_name"` and
/// `"COLUMN_NAME"` resolve to the same field. A missing alias reads as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn from_pairs<I, K, V>(entity: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let field_values = pairs
            .into_iter()
            .map(|(name, value)| FieldValue::new(name, value))
            .collect();
        RowData::new(entity, field_values)
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .map(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }

    pub fn get_string(&self, field: &str) -> String {
        self.get(field)
            .and_then(|f| f.value.as_string())
            .unwrap_or_default()
    }

    pub fn is_null(&self, field: &str) -> bool {
        self.get(field).is_none_or(|f| f.value.is_null())
    }
}

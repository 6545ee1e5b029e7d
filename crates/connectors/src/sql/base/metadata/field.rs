use model::core::value::Value;
use serde::Serialize;
use std::collections::HashMap;

/// Key role of a column that belongs to the primary key.
pub const KEY_PRIMARY: &str = "PRI";

/// Column descriptors of one table, keyed by column name.
pub type TableFields = HashMap<String, TableField>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableField {
    /// Position of the column in catalog row order, starting at zero.
    pub index: usize,
    pub name: String,
    pub data_type: String,
    pub nullable: bool,
    /// Default as reported by the catalog, not type-converted.
    pub default: Value,
    /// `KEY_PRIMARY` or empty.
    pub key: String,
    pub comment: String,
}

impl TableField {
    pub fn is_primary_key(&self) -> bool {
        self.key == KEY_PRIMARY
    }
}

/// Fields sorted by their catalog position.
pub fn ordered_fields(fields: &TableFields) -> Vec<&TableField> {
    let mut ordered: Vec<&TableField> = fields.values().collect();
    ordered.sort_by_key(|f| f.index);
    ordered
}

/// Names of the primary key columns, in catalog position order.
pub fn primary_keys(fields: &TableFields) -> Vec<&str> {
    ordered_fields(fields)
        .into_iter()
        .filter(|f| f.is_primary_key())
        .map(|f| f.name.as_str())
        .collect()
}

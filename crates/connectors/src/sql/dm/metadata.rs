use crate::sql::base::metadata::field::{KEY_PRIMARY, TableField};
use model::records::row::RowData;

pub const COL_COLUMN_NAME: &str = "COLUMN_NAME";
pub const COL_DATA_TYPE: &str = "DATA_TYPE";
pub const COL_NULLABLE: &str = "NULLABLE";
pub const COL_DATA_DEFAULT: &str = "DATA_DEFAULT";
pub const COL_JSON_DATA_TYPE: &str = "DJC_DATA_TYPE";
pub const COL_COMMENTS: &str = "COMMENTS";
pub const COL_CONSTRAINT_TYPE: &str = "CONSTRAINT_TYPE";

/// `NULLABLE` flag of a NOT NULL column. Nullable columns report `Y`.
const NOT_NULL_FLAG: &str = "N";
const CONSTRAINT_PRIMARY: &str = "P";
const JSON_TYPES: [&str; 2] = ["JSON", "JSONB"];

const QUERY_TABLE_FIELDS_SQL: &str = include_str!("sql/table_fields.sql");

/// Renders the catalog query for `table` in `schema`.
///
/// Both identifiers are upper-cased, matching how DM stores unquoted names.
pub fn table_fields_sql(table: &str, schema: &str) -> String {
    QUERY_TABLE_FIELDS_SQL
        .replace("{table}", &sql_literal(table))
        .replace("{schema}", &sql_literal(schema))
}

fn sql_literal(ident: &str) -> String {
    ident.to_uppercase().replace('\'', "''")
}

/// Column type as reported to callers.
///
/// A document-type catalog entry overrides the native type, except when it
/// is one of the JSON markers.
pub fn resolve_data_type(data_type: String, json_type: Option<String>) -> String {
    match json_type {
        Some(json_type)
            if !JSON_TYPES
                .iter()
                .any(|marker| json_type.eq_ignore_ascii_case(marker)) =>
        {
            json_type
        }
        _ => data_type,
    }
}

pub trait DmFieldMapper {
    fn from_dm_row(index: usize, row: &RowData) -> TableField;
}

impl DmFieldMapper for TableField {
    fn from_dm_row(index: usize, row: &RowData) -> TableField {
        let json_type =
            (!row.is_null(COL_JSON_DATA_TYPE)).then(|| row.get_string(COL_JSON_DATA_TYPE));

        let key = if !row.is_null(COL_CONSTRAINT_TYPE)
            && row.get_string(COL_CONSTRAINT_TYPE) == CONSTRAINT_PRIMARY
        {
            KEY_PRIMARY.to_string()
        } else {
            String::new()
        };

        TableField {
            index,
            name: row.get_string(COL_COLUMN_NAME),
            data_type: resolve_data_type(row.get_string(COL_DATA_TYPE), json_type),
            nullable: row.get_string(COL_NULLABLE) != NOT_NULL_FLAG,
            default: row.get_value(COL_DATA_DEFAULT),
            key,
            comment: row.get_string(COL_COMMENTS),
        }
    }
}

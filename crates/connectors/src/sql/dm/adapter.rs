use crate::{
    config::DriverConfig,
    sql::{
        base::{
            adapter::{LinkProvider, QueryExecutor, SchemaIntrospector},
            context::QueryContext,
            error::DbError,
            metadata::field::{TableField, TableFields},
        },
        dm::metadata::{DmFieldMapper, table_fields_sql},
    },
};
use async_trait::async_trait;
use tracing::{debug, trace, warn};

/// DM (Dameng) driver built on a link provider and a query executor.
pub struct DmDriver<P, E> {
    config: DriverConfig,
    links: P,
    executor: E,
}

impl<P, E> DmDriver<P, E>
where
    P: LinkProvider,
    E: QueryExecutor<P::Link>,
{
    pub fn new(config: DriverConfig, links: P, executor: E) -> Self {
        DmDriver {
            config,
            links,
            executor,
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }
}

#[async_trait]
impl<P, E> SchemaIntrospector for DmDriver<P, E>
where
    P: LinkProvider,
    E: QueryExecutor<P::Link>,
{
    async fn table_fields(
        &self,
        ctx: &QueryContext,
        table: &str,
        schema: Option<&str>,
    ) -> Result<TableFields, DbError> {
        let schema = self.config.resolve_schema(schema);
        let link = self.links.slave_link(schema).await?;

        let sql = table_fields_sql(table, schema);
        debug!(table, schema, "Fetching table fields");
        debug!("Generated SQL: {}", sql);

        let rows = self.executor.do_select(ctx, &link, &sql).await?;

        let mut fields = TableFields::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let field = TableField::from_dm_row(index, row);
            trace!(index, name = %field.name, data_type = %field.data_type, "Mapped column");
            if let Some(previous) = fields.insert(field.name.clone(), field) {
                warn!(
                    table,
                    column = %previous.name,
                    "Catalog returned duplicate column, keeping the last one"
                );
            }
        }

        Ok(fields)
    }
}

use crate::sql::base::{
    context::QueryContext, error::DbError, metadata::field::TableFields,
};
use async_trait::async_trait;
use model::records::row::RowData;

/// Hands out read-oriented links to the database.
#[async_trait]
pub trait LinkProvider: Send + Sync {
    type Link: Send + Sync;

    /// Acquire a read link scoped to `schema`. An empty schema asks for the
    /// default link.
    async fn slave_link(&self, schema: &str) -> Result<Self::Link, DbError>;
}

/// Runs a query over a link and returns its rows in result order.
#[async_trait]
pub trait QueryExecutor<L: Send + Sync>: Send + Sync {
    async fn do_select(
        &self,
        ctx: &QueryContext,
        link: &L,
        sql: &str,
    ) -> Result<Vec<RowData>, DbError>;
}

#[async_trait]
pub trait SchemaIntrospector: Send + Sync {
    /// Column descriptors of `table`, keyed by column name. Uses the
    /// configured default schema when `schema` is `None`.
    async fn table_fields(
        &self,
        ctx: &QueryContext,
        table: &str,
        schema: Option<&str>,
    ) -> Result<TableFields, DbError>;
}

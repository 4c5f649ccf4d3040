use async_trait::async_trait;
use sqlx::Row;

use crate::application::dto::stock::CategoryTotalDto;
use crate::application::ports::stock_repository::StockRepository;
use crate::infrastructure::db::PgPool;

pub struct SqlxStockRepository {
    pub pool: PgPool,
}

impl SqlxStockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// A NULL `item_type` or SUM surfaces as a decode error rather than a panic.
fn to_category_totals(rows: Vec<sqlx::postgres::PgRow>) -> anyhow::Result<Vec<CategoryTotalDto>> {
    rows.into_iter()
        .map(|r| {
            Ok(CategoryTotalDto {
                item_type: r.try_get("item_type")?,
                total_quantity: r.try_get("total_quantity")?,
            })
        })
        .collect()
}

#[async_trait]
impl StockRepository for SqlxStockRepository {
    async fn category_totals(&self) -> anyhow::Result<Vec<CategoryTotalDto>> {
        let rows = sqlx::query(
            r#"SELECT item_type, SUM(quantity)::BIGINT AS total_quantity
               FROM stock
               GROUP BY item_type"#,
        )
        .fetch_all(&self.pool)
        .await?;
        to_category_totals(rows)
    }

    async fn category_totals_below(
        &self,
        threshold: i64,
    ) -> anyhow::Result<Vec<CategoryTotalDto>> {
        let rows = sqlx::query(
            r#"SELECT item_type, SUM(quantity)::BIGINT AS total_quantity
               FROM stock
               GROUP BY item_type
               HAVING SUM(quantity) < $1"#,
        )
        .bind(threshold)
        .fetch_all(&self.pool)
        .await?;
        to_category_totals(rows)
    }

    async fn total_quantity(&self) -> anyhow::Result<Option<i64>> {
        let total = sqlx::query_scalar::<_, Option<i64>>(
            "SELECT SUM(quantity)::BIGINT AS total_items_in_stock FROM stock",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    async fn count_requests(&self) -> anyhow::Result<i64> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM requests")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    async fn count_out_of_stock(&self) -> anyhow::Result<i64> {
        let n = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM out_in_stock")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }

    async fn count_repaired(&self) -> anyhow::Result<i64> {
        let n =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM returned_items WHERE is_working")
                .fetch_one(&self.pool)
                .await?;
        Ok(n)
    }

    async fn list_items(&self) -> anyhow::Result<Vec<serde_json::Value>> {
        // to_json keeps every column, including ones this service never reads
        let items = sqlx::query_scalar::<_, serde_json::Value>("SELECT to_json(s) FROM stock s")
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }
}

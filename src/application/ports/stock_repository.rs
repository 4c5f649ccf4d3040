use async_trait::async_trait;

use crate::application::dto::stock::CategoryTotalDto;

#[async_trait]
pub trait StockRepository: Send + Sync {
    /// One entry per distinct `item_type`.
    async fn category_totals(&self) -> anyhow::Result<Vec<CategoryTotalDto>>;
    /// Categories whose summed quantity is strictly below `threshold`.
    async fn category_totals_below(
        &self,
        threshold: i64,
    ) -> anyhow::Result<Vec<CategoryTotalDto>>;
    /// `None` when the stock table is empty.
    async fn total_quantity(&self) -> anyhow::Result<Option<i64>>;
    async fn count_requests(&self) -> anyhow::Result<i64>;
    async fn count_out_of_stock(&self) -> anyhow::Result<i64>;
    async fn count_repaired(&self) -> anyhow::Result<i64>;
    /// Every stock row as a JSON object keyed by column name.
    async fn list_items(&self) -> anyhow::Result<Vec<serde_json::Value>>;
}

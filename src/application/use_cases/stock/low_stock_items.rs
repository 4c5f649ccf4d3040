use crate::application::dto::stock::CategoryTotalDto;
use crate::application::error::ServiceError;
use crate::application::ports::stock_repository::StockRepository;

pub struct LowStockItems<'a, R: StockRepository + ?Sized> {
    pub repo: &'a R,
    pub threshold: i64,
}

impl<'a, R: StockRepository + ?Sized> LowStockItems<'a, R> {
    pub async fn execute(&self) -> Result<Vec<CategoryTotalDto>, ServiceError> {
        self.repo
            .category_totals_below(self.threshold)
            .await
            .map_err(ServiceError::DataStore)
    }
}

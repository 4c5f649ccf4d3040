use crate::application::dto::stock::CategoryTotalDto;
use crate::application::error::ServiceError;
use crate::application::ports::stock_repository::StockRepository;

pub struct CategoryTotals<'a, R: StockRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StockRepository + ?Sized> CategoryTotals<'a, R> {
    pub async fn execute(&self) -> Result<Vec<CategoryTotalDto>, ServiceError> {
        self.repo
            .category_totals()
            .await
            .map_err(ServiceError::DataStore)
    }
}

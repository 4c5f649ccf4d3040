use crate::application::error::ServiceError;
use crate::application::ports::stock_repository::StockRepository;

pub struct ListItems<'a, R: StockRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StockRepository + ?Sized> ListItems<'a, R> {
    pub async fn execute(&self) -> Result<Vec<serde_json::Value>, ServiceError> {
        self.repo.list_items().await.map_err(ServiceError::DataStore)
    }
}

//! Single-number dashboard counters. Each issues exactly one aggregate query.

use crate::application::error::ServiceError;
use crate::application::ports::stock_repository::StockRepository;

pub struct TotalInStock<'a, R: StockRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StockRepository + ?Sized> TotalInStock<'a, R> {
    /// `None` when there are no stock rows at all.
    pub async fn execute(&self) -> Result<Option<i64>, ServiceError> {
        self.repo
            .total_quantity()
            .await
            .map_err(ServiceError::DataStore)
    }
}

pub struct TotalRequested<'a, R: StockRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StockRepository + ?Sized> TotalRequested<'a, R> {
    pub async fn execute(&self) -> Result<i64, ServiceError> {
        self.repo
            .count_requests()
            .await
            .map_err(ServiceError::DataStore)
    }
}

pub struct TotalOutOfStock<'a, R: StockRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StockRepository + ?Sized> TotalOutOfStock<'a, R> {
    pub async fn execute(&self) -> Result<i64, ServiceError> {
        self.repo
            .count_out_of_stock()
            .await
            .map_err(ServiceError::DataStore)
    }
}

pub struct TotalRepaired<'a, R: StockRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: StockRepository + ?Sized> TotalRepaired<'a, R> {
    pub async fn execute(&self) -> Result<i64, ServiceError> {
        self.repo
            .count_repaired()
            .await
            .map_err(ServiceError::DataStore)
    }
}

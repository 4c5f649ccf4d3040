use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::dto::stock::CategoryTotalDto;
use crate::application::use_cases::stock::category_totals::CategoryTotals;
use crate::application::use_cases::stock::list_items::ListItems;
use crate::application::use_cases::stock::low_stock_items::LowStockItems;
use crate::application::use_cases::stock::totals::{
    TotalInStock, TotalOutOfStock, TotalRepaired, TotalRequested,
};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::error::ApiError;

/// Chart point: `name` is the category, `y` its summed quantity.
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemDataPoint {
    pub name: String,
    pub y: i64,
}

impl From<CategoryTotalDto> for ItemDataPoint {
    fn from(d: CategoryTotalDto) -> Self {
        ItemDataPoint {
            name: d.item_type,
            y: d.total_quantity,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LowStockItem {
    pub item_type: String,
    pub total_quantity: i64,
}

impl From<CategoryTotalDto> for LowStockItem {
    fn from(d: CategoryTotalDto) -> Self {
        LowStockItem {
            item_type: d.item_type,
            total_quantity: d.total_quantity,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalItemsInStock {
    pub total_items_in_stock: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalItemsRequested {
    pub total_items_requested: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalItemsOutOfStock {
    pub total_items_out_of_stock: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TotalRepairedItems {
    pub total_repaired_items: i64,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/item-data", get(item_data))
        .route("/low-stock-items", get(low_stock_items))
        .route("/total-items-in-stock", get(total_items_in_stock))
        .route("/total-items-requested", get(total_items_requested))
        .route("/total-items-out-of-stock", get(total_items_out_of_stock))
        .route("/total-repaired-items", get(total_repaired_items))
        .route("/view-all-items", get(view_all_items))
        .with_state(ctx)
}

#[utoipa::path(get, path = "/api/stock/item-data", tag = "Stock", responses(
    (status = 200, body = [ItemDataPoint]),
    (status = 500, body = ErrorBody)
))]
pub async fn item_data(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<ItemDataPoint>>, ApiError> {
    let repo = ctx.stock_repo();
    let uc = CategoryTotals {
        repo: repo.as_ref(),
    };
    let rows = uc.execute().await.map_err(ApiError::mapper(&ctx.cfg))?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/stock/low-stock-items", tag = "Stock", responses(
    (status = 200, body = [LowStockItem]),
    (status = 500, body = ErrorBody)
))]
pub async fn low_stock_items(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<LowStockItem>>, ApiError> {
    let repo = ctx.stock_repo();
    let uc = LowStockItems {
        repo: repo.as_ref(),
        threshold: ctx.cfg.low_stock_threshold,
    };
    let rows = uc.execute().await.map_err(ApiError::mapper(&ctx.cfg))?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

#[utoipa::path(get, path = "/api/stock/total-items-in-stock", tag = "Stock", responses(
    (status = 200, body = TotalItemsInStock),
    (status = 500, body = ErrorBody)
))]
pub async fn total_items_in_stock(
    State(ctx): State<AppContext>,
) -> Result<Json<TotalItemsInStock>, ApiError> {
    let repo = ctx.stock_repo();
    let uc = TotalInStock {
        repo: repo.as_ref(),
    };
    let total = uc.execute().await.map_err(ApiError::mapper(&ctx.cfg))?;
    Ok(Json(TotalItemsInStock {
        total_items_in_stock: total,
    }))
}

#[utoipa::path(get, path = "/api/stock/total-items-requested", tag = "Stock", responses(
    (status = 200, body = TotalItemsRequested),
    (status = 500, body = ErrorBody)
))]
pub async fn total_items_requested(
    State(ctx): State<AppContext>,
) -> Result<Json<TotalItemsRequested>, ApiError> {
    let repo = ctx.stock_repo();
    let uc = TotalRequested {
        repo: repo.as_ref(),
    };
    let total = uc.execute().await.map_err(ApiError::mapper(&ctx.cfg))?;
    Ok(Json(TotalItemsRequested {
        total_items_requested: total,
    }))
}

#[utoipa::path(get, path = "/api/stock/total-items-out-of-stock", tag = "Stock", responses(
    (status = 200, body = TotalItemsOutOfStock),
    (status = 500, body = ErrorBody)
))]
pub async fn total_items_out_of_stock(
    State(ctx): State<AppContext>,
) -> Result<Json<TotalItemsOutOfStock>, ApiError> {
    let repo = ctx.stock_repo();
    let uc = TotalOutOfStock {
        repo: repo.as_ref(),
    };
    let total = uc.execute().await.map_err(ApiError::mapper(&ctx.cfg))?;
    Ok(Json(TotalItemsOutOfStock {
        total_items_out_of_stock: total,
    }))
}

#[utoipa::path(get, path = "/api/stock/total-repaired-items", tag = "Stock", responses(
    (status = 200, body = TotalRepairedItems),
    (status = 500, body = ErrorBody)
))]
pub async fn total_repaired_items(
    State(ctx): State<AppContext>,
) -> Result<Json<TotalRepairedItems>, ApiError> {
    let repo = ctx.stock_repo();
    let uc = TotalRepaired {
        repo: repo.as_ref(),
    };
    let total = uc.execute().await.map_err(ApiError::mapper(&ctx.cfg))?;
    Ok(Json(TotalRepairedItems {
        total_repaired_items: total,
    }))
}

#[utoipa::path(get, path = "/api/stock/view-all-items", tag = "Stock", responses(
    (status = 200, description = "Every stock row, all columns, in store order"),
    (status = 500, body = ErrorBody)
))]
pub async fn view_all_items(
    State(ctx): State<AppContext>,
) -> Result<Json<Vec<serde_json::Value>>, ApiError> {
    let repo = ctx.stock_repo();
    let uc = ListItems {
        repo: repo.as_ref(),
    };
    let items = uc.execute().await.map_err(ApiError::mapper(&ctx.cfg))?;
    Ok(Json(items))
}

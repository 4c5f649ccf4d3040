pub mod auth;
pub mod error;
pub mod stock;

use axum::Router;
use axum::extract::MatchedPath;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;

#[derive(OpenApi)]
#[openapi(
    paths(
        stock::item_data,
        stock::low_stock_items,
        stock::total_items_in_stock,
        stock::total_items_requested,
        stock::total_items_out_of_stock,
        stock::total_repaired_items,
        stock::view_all_items,
        auth::register,
        auth::login,
    ),
    components(schemas(
        stock::ItemDataPoint,
        stock::LowStockItem,
        stock::TotalItemsInStock,
        stock::TotalItemsRequested,
        stock::TotalItemsOutOfStock,
        stock::TotalRepairedItems,
        auth::RegisterRequest,
        auth::LoginRequest,
        auth::MessageResponse,
        auth::LoginResponse,
        error::ErrorBody,
    )),
    tags(
        (name = "Stock", description = "Inventory reporting"),
        (name = "Auth", description = "Registration and login")
    )
)]
pub struct ApiDoc;

/// Full HTTP surface: API routes, OpenAPI docs, CORS open to every origin,
/// and request tracing.
pub fn router(ctx: AppContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/stock", stock::routes(ctx.clone()))
        .nest("/api", auth::routes(ctx))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &axum::http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}

pub mod category_totals;
pub mod list_items;
pub mod low_stock_items;
pub mod totals;

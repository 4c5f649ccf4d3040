/// Summed quantity of one stock category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotalDto {
    pub item_type: String,
    pub total_quantity: i64,
}

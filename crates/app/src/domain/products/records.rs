//! Product Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Store-assigned identifier.
    pub id: ProductId,

    /// Display name, never empty.
    pub name: String,

    /// Unit price, always greater than zero.
    pub price: f64,

    /// Whether the product can currently be ordered.
    pub availability: bool,

    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

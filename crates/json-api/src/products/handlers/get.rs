//! Get Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::products::records::{ProductId, ProductRecord};

use crate::{errors::ApiError, extensions::*, products::errors::into_api_error, state::State};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub id: i64,

    /// The display name of the product
    pub name: String,

    /// The unit price of the product
    pub price: f64,

    /// Whether the product is currently available
    pub availability: bool,

    /// The date and time the product was created
    pub created_at: String,

    /// The date and time the product was last updated
    pub updated_at: String,
}

impl From<ProductRecord> for ProductResponse {
    fn from(product: ProductRecord) -> Self {
        ProductResponse {
            id: product.id.into_i64(),
            name: product.name,
            price: product.price,
            availability: product.availability,
            created_at: product.created_at.to_string(),
            updated_at: product.updated_at.to_string(),
        }
    }
}

/// Single Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDataResponse {
    pub data: ProductResponse,
}

impl From<ProductRecord> for ProductDataResponse {
    fn from(product: ProductRecord) -> Self {
        ProductDataResponse {
            data: product.into(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product.
#[endpoint(tags("products"), summary = "Get Product")]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductDataResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(ProductId::from_i64(id.into_inner()))
        .await
        .map_err(into_api_error)?;

    Ok(Json(product.into()))
}

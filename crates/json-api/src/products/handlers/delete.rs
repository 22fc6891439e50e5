//! Delete Product Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use catalog_app::products::records::ProductId;

use crate::{errors::ApiError, extensions::*, products::errors::into_api_error, state::State};

pub(crate) const DELETED_MESSAGE: &str = "Producto Eliminado";

/// Product Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDeletedResponse {
    pub data: String,
}

/// Delete Product Handler
#[endpoint(tags("products"), summary = "Delete Product")]
#[tracing::instrument(
    name = "products.delete",
    skip(id, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ProductDeletedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let product = ProductId::from_i64(id.into_inner());

    tracing::Span::current().record("product_id", tracing::field::display(product));

    state
        .app
        .products
        .delete_product(product)
        .await
        .map_err(into_api_error)?;

    tracing::info!(product_id = %product, "deleted product");

    Ok(Json(ProductDeletedResponse {
        data: DELETED_MESSAGE.to_string(),
    }))
}
